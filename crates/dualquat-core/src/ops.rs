//! Operator implementations for [`DualQuaternion`].

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

use crate::dual_quat::DualQuaternion;
use crate::error::Result;

impl Add for DualQuaternion {
    type Output = Self;

    /// Componentwise sum. Not a composition, the result is generally not unit.
    fn add(self, rhs: Self) -> Self {
        Self::new(self.q_r + rhs.q_r, self.q_d + rhs.q_d)
    }
}

impl AddAssign for DualQuaternion {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for DualQuaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.q_r - rhs.q_r, self.q_d - rhs.q_d)
    }
}

impl Neg for DualQuaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.q_r, -self.q_d)
    }
}

impl Mul for DualQuaternion {
    type Output = Self;

    /// Composition: `a * b` matches `T_a * T_b`, so `b` is applied first.
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.q_r * rhs.q_r,
            self.q_r * rhs.q_d + self.q_d * rhs.q_r,
        )
    }
}

impl MulAssign for DualQuaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<f64> for DualQuaternion {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.q_r * rhs, self.q_d * rhs)
    }
}

impl Mul<DualQuaternion> for f64 {
    type Output = DualQuaternion;

    fn mul(self, rhs: DualQuaternion) -> DualQuaternion {
        rhs * self
    }
}

impl Div for DualQuaternion {
    type Output = Result<Self>;

    /// `a / b = a * b⁻¹`. Fails with `SingularValue` when `b` has a zero real part.
    fn div(self, rhs: Self) -> Result<Self> {
        self.checked_div(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DualQuatError;
    use glam::{DMat4, DQuat, DVec3};

    fn random_dq() -> DualQuaternion {
        DualQuaternion::from_dq_array(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]).unwrap()
    }

    fn rows_rx(theta: f64) -> [[f64; 4]; 4] {
        [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, theta.cos(), -theta.sin(), 0.0],
            [0.0, theta.sin(), theta.cos(), 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]
    }

    const ROWS_T123: [[f64; 4]; 4] = [
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 2.0],
        [0.0, 0.0, 1.0, 3.0],
        [0.0, 0.0, 0.0, 1.0],
    ];

    #[test]
    fn test_add_translations() {
        let dq1 = DualQuaternion::from_translation_vector(&[4.0, 6.0, 8.0]).unwrap();
        let dq2 = DualQuaternion::from_translation_vector(&[1.0, 2.0, 3.0]).unwrap();
        let sum = dq1 + dq2;
        assert_eq!(sum.q_d, DQuat::from_xyzw(2.5, 4.0, 5.5, 0.0));
        assert_eq!(sum.translation(), DVec3::new(5.0, 8.0, 11.0));

        let mut acc = dq1;
        acc += dq2;
        assert_eq!(acc, sum);
        assert_eq!(sum - dq2, dq1);
    }

    #[test]
    fn test_unit_times_unit() {
        let unit = DualQuaternion::identity();
        assert_eq!(unit * unit, unit);
    }

    #[test]
    fn test_identity_is_two_sided() {
        let dq = random_dq();
        assert_eq!(DualQuaternion::identity() * dq, dq);
        assert_eq!(dq * DualQuaternion::identity(), dq);
    }

    #[test]
    fn test_mul_matches_matrix_product() {
        let theta = 20.0_f64.to_radians();
        let rot = DualQuaternion::from_matrix_rows(&rows_rx(theta)).unwrap();
        let trans = DualQuaternion::from_matrix_rows(&ROWS_T123).unwrap();
        let t_rot = DMat4::from_cols_array_2d(&rows_rx(theta)).transpose();
        let t_trans = DMat4::from_cols_array_2d(&ROWS_T123).transpose();
        assert!(rot.homogeneous_matrix().abs_diff_eq(t_rot, 1e-12));
        assert!(trans.homogeneous_matrix().abs_diff_eq(t_trans, 1e-12));

        assert!((rot * rot).homogeneous_matrix().abs_diff_eq(t_rot * t_rot, 1e-12));
        assert!((trans * trans)
            .homogeneous_matrix()
            .abs_diff_eq(t_trans * t_trans, 1e-12));
        assert!((rot * trans)
            .homogeneous_matrix()
            .abs_diff_eq(t_rot * t_trans, 1e-12));
        assert!((trans * rot)
            .homogeneous_matrix()
            .abs_diff_eq(t_trans * t_rot, 1e-12));
        assert!(!(rot * trans)
            .homogeneous_matrix()
            .abs_diff_eq(t_trans * t_rot, 1e-6));
    }

    #[test]
    fn test_mul_assign() {
        let a = DualQuaternion::from_rotation_translation(
            DQuat::from_rotation_x(0.3),
            DVec3::new(1.0, 0.0, 0.0),
        );
        let b = DualQuaternion::from_translation(DVec3::new(0.0, 2.0, 0.0));
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn test_scalar_mul() {
        let dq = random_dq();
        assert_eq!((dq * 2.0).dq_array(), [2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0]);
        assert_eq!(2.0 * dq, dq * 2.0);
        assert_eq!(-dq, dq * -1.0);
    }

    #[test]
    fn test_div() {
        let dq = random_dq();
        let unit = DualQuaternion::identity();
        assert!((dq / dq).unwrap().approx_eq(&unit));
        assert!((dq / unit).unwrap().approx_eq(&dq));
        assert!((unit / dq).unwrap().approx_eq(&dq.inverse().unwrap()));
    }

    #[test]
    fn test_div_by_singular() {
        let zero = DualQuaternion::new(DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0), DQuat::IDENTITY);
        assert_eq!(random_dq() / zero, Err(DualQuatError::SingularValue));
    }

    #[test]
    fn test_div_gives_relative_transform() {
        let a = DualQuaternion::from_rotation_translation(
            DQuat::from_rotation_z(0.4),
            DVec3::new(1.0, 2.0, 0.5),
        );
        let b = DualQuaternion::from_rotation_translation(
            DQuat::from_rotation_y(-1.1),
            DVec3::new(-3.0, 0.0, 1.0),
        );
        let rel = (a / b).unwrap();
        assert!((rel * b).approx_eq(&a));
        let expected = a.homogeneous_matrix() * b.homogeneous_matrix().inverse();
        assert!(rel.homogeneous_matrix().abs_diff_eq(expected, 1e-9));
        assert!(DMat4::from(rel).abs_diff_eq(expected, 1e-9));
    }

    #[test]
    fn test_conjugate_product_has_unit_real_part() {
        let dq = random_dq().normalized();
        let prod = dq * dq.conjugate();
        assert!(prod.q_r.abs_diff_eq(DQuat::IDENTITY, 1e-12));
    }

    mod props {
        use crate::dual_quat::DualQuaternion;
        use crate::options::Tolerances;
        use proptest::prelude::*;

        fn any_dq() -> impl Strategy<Value = DualQuaternion> {
            prop::array::uniform8(-5.0..5.0_f64)
                .prop_map(|v| DualQuaternion::from_dq_array(&v).unwrap())
        }

        proptest! {
            #[test]
            fn add_is_commutative(a in any_dq(), b in any_dq()) {
                prop_assert_eq!(a + b, b + a);
            }

            #[test]
            fn mul_is_associative(a in any_dq(), b in any_dq(), c in any_dq()) {
                prop_assert!(((a * b) * c).approx_eq_with(&(a * (b * c)), &Tolerances::uniform(1e-9)));
            }

            #[test]
            fn mul_distributes_over_add(a in any_dq(), b in any_dq(), c in any_dq()) {
                prop_assert!((a * (b + c)).approx_eq_with(&(a * b + a * c), &Tolerances::uniform(1e-9)));
            }
        }
    }
}
