//! dualquat: dual quaternion algebra for rigid body transforms.
//!
//! A dual quaternion packs a 3D rotation and translation into eight scalars.
//! It composes like a homogeneous matrix, inverts cheaply and maps points
//! without the singularities of Euler angles.
//!
//! # Quick Start
//!
//! ```
//! use dualquat::*;
//!
//! fn main() -> Result<()> {
//!     // 90 degrees about z, then shifted up by 2
//!     let rot = DualQuaternion::from_rotation_translation(
//!         DQuat::from_rotation_z(std::f64::consts::FRAC_PI_2),
//!         DVec3::ZERO,
//!     );
//!     let lift = DualQuaternion::from_translation_vector(&[0.0, 0.0, 2.0])?;
//!
//!     // `lift * rot` applies `rot` first, like `T_lift * T_rot`
//!     let pose = lift * rot;
//!     let p = pose.transform_point(DVec3::X);
//!     assert!((p - DVec3::new(0.0, 1.0, 2.0)).length() < 1e-12);
//!
//!     // Back to a ROS-style transform record
//!     let record = pose.to_transform_record();
//!     assert!((record.translation.z - 2.0).abs() < 1e-12);
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! - `dualquat-core` - the [`DualQuaternion`] type, errors and tolerances
//! - `dualquat-msgs` - [`Pose`] and [`Transform`] records and their adapters

// Re-export core types
pub use dualquat_core::{
    dual_quat::MIN_NORM,
    error::{DualQuatError, Result},
    options::{Tolerances, DEFAULT_TOLERANCE},
    uniforms::DualQuatUniform,
    DMat3, DMat4, DQuat, DVec3, DVec4, DualQuaternion,
};

// Re-export record types
pub use dualquat_msgs::{
    from_pose_record, from_transform_record, to_pose_record, to_transform_record, Point, Pose,
    Quaternion, RecordExt, Transform, Vector3,
};

/// Installs an `env_logger` logger configured from `RUST_LOG`.
///
/// Safe to call more than once; later calls and calls made after another
/// logger was installed are ignored.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("dualquat logging initialized");
    }
}
