//! Conversions between dual quaternions and pose / transform records.

use dualquat_core::{DQuat, DVec3, DualQuaternion};

use crate::records::{Point, Pose, Quaternion, Transform, Vector3};

fn quat_from_record(q: &Quaternion) -> DQuat {
    DQuat::from_xyzw(q.x, q.y, q.z, q.w)
}

fn record_from_quat(q: DQuat) -> Quaternion {
    Quaternion {
        x: q.x,
        y: q.y,
        z: q.z,
        w: q.w,
    }
}

/// Creates a dual quaternion from a pose record.
#[must_use]
pub fn from_pose_record(pose: &Pose) -> DualQuaternion {
    let p = &pose.position;
    DualQuaternion::from_rotation_translation(
        quat_from_record(&pose.orientation),
        DVec3::new(p.x, p.y, p.z),
    )
}

/// Creates a dual quaternion from a transform record.
#[must_use]
pub fn from_transform_record(transform: &Transform) -> DualQuaternion {
    let t = &transform.translation;
    DualQuaternion::from_rotation_translation(
        quat_from_record(&transform.rotation),
        DVec3::new(t.x, t.y, t.z),
    )
}

/// Fills a pose record from `q_r` and the translation.
#[must_use]
pub fn to_pose_record(dq: &DualQuaternion) -> Pose {
    let t = dq.translation();
    Pose {
        position: Point {
            x: t.x,
            y: t.y,
            z: t.z,
        },
        orientation: record_from_quat(dq.q_r),
    }
}

/// Fills a transform record from `q_r` and the translation.
#[must_use]
pub fn to_transform_record(dq: &DualQuaternion) -> Transform {
    let t = dq.translation();
    Transform {
        translation: Vector3 {
            x: t.x,
            y: t.y,
            z: t.z,
        },
        rotation: record_from_quat(dq.q_r),
    }
}

/// Record conversions as methods on [`DualQuaternion`].
pub trait RecordExt {
    /// See [`to_pose_record`].
    fn to_pose_record(&self) -> Pose;

    /// See [`to_transform_record`].
    fn to_transform_record(&self) -> Transform;
}

impl RecordExt for DualQuaternion {
    fn to_pose_record(&self) -> Pose {
        to_pose_record(self)
    }

    fn to_transform_record(&self) -> Transform {
        to_transform_record(self)
    }
}

impl From<&Pose> for DualQuaternion {
    fn from(pose: &Pose) -> Self {
        from_pose_record(pose)
    }
}

impl From<&Transform> for DualQuaternion {
    fn from(transform: &Transform) -> Self {
        from_transform_record(transform)
    }
}

impl From<&DualQuaternion> for Pose {
    fn from(dq: &DualQuaternion) -> Self {
        to_pose_record(dq)
    }
}

impl From<&DualQuaternion> for Transform {
    fn from(dq: &DualQuaternion) -> Self {
        to_transform_record(dq)
    }
}

impl From<Pose> for Transform {
    fn from(pose: Pose) -> Self {
        let p = pose.position;
        Self {
            translation: Vector3 {
                x: p.x,
                y: p.y,
                z: p.z,
            },
            rotation: pose.orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_pose() {
        let pose = Pose {
            orientation: Quaternion::IDENTITY,
            ..Default::default()
        };
        let dq = from_pose_record(&pose);
        assert_eq!(dq, DualQuaternion::identity());
        assert_eq!(dq.to_pose_record(), pose);
    }

    #[test]
    fn test_identity_transform() {
        let transform = Transform {
            rotation: Quaternion::IDENTITY,
            ..Default::default()
        };
        let dq = DualQuaternion::from(&transform);
        assert_eq!(dq, DualQuaternion::identity());
        assert_eq!(dq.to_transform_record(), transform);
    }

    #[test]
    fn test_matches_quat_pose_array() {
        let pose = Pose {
            position: Point {
                x: 1.0,
                y: -2.0,
                z: 0.5,
            },
            orientation: Quaternion {
                x: 0.0,
                y: 0.0,
                z: 0.5_f64.sin(),
                w: 0.5_f64.cos(),
            },
        };
        let mut arr = [0.0; 7];
        arr[..4].copy_from_slice(&pose.orientation.to_wxyz());
        arr[4..].copy_from_slice(&pose.position.to_array());
        let expected = DualQuaternion::from_quat_pose_array(&arr).unwrap();
        assert_eq!(from_pose_record(&pose), expected);
        assert_eq!(from_transform_record(&Transform::from(pose)), expected);
    }

    #[test]
    fn test_round_trip() {
        let dq = DualQuaternion::from_rotation_translation(
            DQuat::from_rotation_x(1.2),
            DVec3::new(3.0, 0.0, -1.0),
        );
        let pose = Pose::from(&dq);
        assert!(from_pose_record(&pose).approx_eq(&dq));
        let transform = Transform::from(&dq);
        assert!(from_transform_record(&transform).approx_eq(&dq));
        assert!((transform.translation.to_array()[0] - 3.0).abs() < 1e-12);
    }
}
