//! Core dual quaternion algebra for dualquat.
//!
//! This crate provides the fundamental types used throughout dualquat:
//! - [`DualQuaternion`], a rigid transform as a pair of quaternions
//! - Construction from arrays, homogeneous matrices and translations
//! - Composition, inversion, conjugation and point transformation
//! - [`Tolerances`] for the approximate checks
//! - [`DualQuatUniform`] for handing transforms to shaders

// Documentation lints - constructors document their errors inline
#![allow(clippy::missing_errors_doc)]
// Operator impls return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Field names follow the usual q_r / q_d notation
#![allow(clippy::similar_names)]

pub mod dual_quat;
pub mod error;
pub mod ops;
pub mod options;
pub mod uniforms;

pub use dual_quat::{DualQuaternion, MIN_NORM};
pub use error::{DualQuatError, Result};
pub use options::{Tolerances, DEFAULT_TOLERANCE};
pub use uniforms::DualQuatUniform;

// Re-export glam types for convenience
pub use glam::{DMat3, DMat4, DQuat, DVec3, DVec4};
