//! Fixed curl constants per handshape name.
//!
//! The table is a read-only map built once on first access and shared by
//! every avatar instance. Lookups never fail: an unknown handshape name
//! falls back to `flat-hand` so a sparse or misspelled dictionary entry
//! degrades to an open palm instead of an error.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Per-finger and thumb curl constants for one handshape.
///
/// `fingers` is ordered index, middle, ring, pinky. All values in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandshapeCurls {
    pub fingers: [f32; 4],
    pub thumb: f32,
}

impl HandshapeCurls {
    #[must_use]
    pub const fn new(fingers: [f32; 4], thumb: f32) -> Self {
        Self { fingers, thumb }
    }
}

/// The fallback shape: open palm, fingers extended.
pub const FLAT_HAND: HandshapeCurls = HandshapeCurls::new([0.0, 0.0, 0.0, 0.0], 0.3);

static HANDSHAPES: LazyLock<HashMap<&'static str, HandshapeCurls>> = LazyLock::new(|| {
    HashMap::from([
        ("flat-hand", FLAT_HAND),
        ("open-hand", HandshapeCurls::new([0.0, 0.0, 0.0, 0.0], 0.0)),
        ("fist", HandshapeCurls::new([1.0, 1.0, 1.0, 1.0], 0.8)),
        ("index-point", HandshapeCurls::new([0.0, 1.0, 1.0, 1.0], 0.7)),
        ("v-shape", HandshapeCurls::new([0.0, 0.0, 1.0, 1.0], 0.7)),
        ("l-shape", HandshapeCurls::new([0.0, 1.0, 1.0, 1.0], 0.0)),
        ("y-shape", HandshapeCurls::new([1.0, 1.0, 1.0, 0.0], 0.0)),
        ("o-shape", HandshapeCurls::new([0.6, 0.6, 0.6, 0.6], 0.6)),
        ("c-shape", HandshapeCurls::new([0.4, 0.4, 0.4, 0.4], 0.4)),
        ("bent-hand", HandshapeCurls::new([0.5, 0.5, 0.5, 0.5], 0.3)),
        ("claw", HandshapeCurls::new([0.7, 0.7, 0.7, 0.7], 0.5)),
        ("thumbs-up", HandshapeCurls::new([1.0, 1.0, 1.0, 1.0], 0.0)),
    ])
});

/// Curl constants for a handshape name.
///
/// Unknown names fall back to [`FLAT_HAND`] silently. The permissive
/// lookup is deliberate: dictionaries evolve faster than this vocabulary.
#[must_use]
pub fn curls_for(name: &str) -> HandshapeCurls {
    HANDSHAPES.get(name).copied().unwrap_or(FLAT_HAND)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
