//! Shared test fixtures and utilities for Gestura crates.
//!
//! Provides canned signs and skeleton frames plus deterministic RNG
//! setup, so cross-crate tests agree on their inputs.

pub mod fixtures;
pub mod rng;

pub use fixtures::{hello_sign, rest_joint_frame, where_sign};
pub use rng::{random_unit_vector, seeded_rng};
