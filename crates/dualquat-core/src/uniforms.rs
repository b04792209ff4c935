//! GPU-compatible packing of dual quaternions.

use crate::dual_quat::DualQuaternion;

/// GPU-compatible dual quaternion, laid out as a shader `mat2x4<f32>`.
///
/// Components are stored `x, y, z, w` as shaders expect.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DualQuatUniform {
    /// Rotation part.
    pub real: [f32; 4],
    /// Translation-encoding part.
    pub dual: [f32; 4],
}

impl Default for DualQuatUniform {
    fn default() -> Self {
        Self::from(&DualQuaternion::IDENTITY)
    }
}

impl From<&DualQuaternion> for DualQuatUniform {
    /// Packs the normalized value, narrowing to `f32`.
    #[allow(clippy::cast_possible_truncation)]
    fn from(dq: &DualQuaternion) -> Self {
        let unit = dq.normalized();
        let pack = |q: glam::DQuat| [q.x as f32, q.y as f32, q.z as f32, q.w as f32];
        Self {
            real: pack(unit.q_r),
            dual: pack(unit.q_d),
        }
    }
}

impl From<DualQuatUniform> for DualQuaternion {
    fn from(u: DualQuatUniform) -> Self {
        let unpack = |c: [f32; 4]| {
            glam::DQuat::from_xyzw(
                f64::from(c[0]),
                f64::from(c[1]),
                f64::from(c[2]),
                f64::from(c[3]),
            )
        };
        Self::new(unpack(u.real), unpack(u.dual))
    }
}
