//! Pure, stateless numeric primitives shared across the engine.

use nalgebra::Vector3;

/// Linear interpolation between `a` and `b` at parameter `t`.
///
/// `t` is NOT clamped; callers that need clamping apply [`clamp01`]
/// first.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (b - a).mul_add(t, a)
}

/// Clamp `t` into `[0, 1]`.
#[inline]
#[must_use]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Component-wise linear interpolation of two vectors.
#[inline]
#[must_use]
pub fn lerp_vec3(a: &Vector3<f32>, b: &Vector3<f32>, t: f32) -> Vector3<f32> {
    Vector3::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t), lerp(a.z, b.z, t))
}

/// 4-point Catmull-Rom spline through `p1`..`p2` with local `t ∈ [0, 1]`.
///
/// `p0` and `p3` are the outer control points shaping the tangents.
#[must_use]
pub fn catmull_rom(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (p2 - p0) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * t3)
}

/// Component-wise 4-point Catmull-Rom for vectors.
#[must_use]
pub fn catmull_rom_vec3(
    p0: &Vector3<f32>,
    p1: &Vector3<f32>,
    p2: &Vector3<f32>,
    p3: &Vector3<f32>,
    t: f32,
) -> Vector3<f32> {
    Vector3::new(
        catmull_rom(p0.x, p1.x, p2.x, p3.x, t),
        catmull_rom(p0.y, p1.y, p2.y, p3.y, t),
        catmull_rom(p0.z, p1.z, p2.z, p3.z, t),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
