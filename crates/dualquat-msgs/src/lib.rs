//! Pose and transform records for dualquat.
//!
//! A thin boundary layer: plain `serde` records shaped like ROS
//! `geometry_msgs`, plus the functions that move them in and out of
//! [`DualQuaternion`]. The core type knows nothing about these records.

pub mod convert;
pub mod records;

pub use convert::{
    from_pose_record, from_transform_record, to_pose_record, to_transform_record, RecordExt,
};
pub use records::{Point, Pose, Quaternion, Transform, Vector3};

pub use dualquat_core::DualQuaternion;
