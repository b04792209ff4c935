//! Dual quaternion representation of rigid body transforms.
//!
//! A dual quaternion encodes a rigid body transformation (rotation + translation)
//! as a pair of quaternions `(q_r, q_d)`. For a rotation `r` and a translation `t`
//! the dual part is `q_d = 0.5 * Quat(t.x, t.y, t.z, 0) * r`.
//!
//! Products compose like homogeneous matrices: `a * b` is the transform whose
//! matrix is `T_a * T_b`, i.e. `b` is applied first.

use std::fmt;

use glam::{DMat3, DMat4, DQuat, DVec3, DVec4};
use serde::{Deserialize, Serialize};

use crate::error::{DualQuatError, Result};
use crate::options::Tolerances;

/// Real parts with a norm below this are treated as zero.
pub const MIN_NORM: f64 = 1e-10;

/// A dual quaternion `q_r + ε q_d`.
///
/// Arbitrary values are allowed (sums and scaled values are generally not
/// rigid transforms). Only the transform constructors and [`normalized`](Self::normalized)
/// produce unit dual quaternions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualQuaternion {
    /// Real part, encodes the rotation.
    pub q_r: DQuat,
    /// Dual part, couples the translation with the rotation.
    pub q_d: DQuat,
}

impl Default for DualQuaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Pure quaternion `(0, v)`.
#[inline]
fn pure(v: DVec3) -> DQuat {
    DQuat::from_xyzw(v.x, v.y, v.z, 0.0)
}

/// Quaternion from scalars in `w, x, y, z` order.
#[inline]
fn wxyz(values: &[f64]) -> DQuat {
    DQuat::from_xyzw(values[1], values[2], values[3], values[0])
}

impl DualQuaternion {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        q_r: DQuat::IDENTITY,
        q_d: DQuat::from_xyzw(0.0, 0.0, 0.0, 0.0),
    };

    /// Creates a dual quaternion from its two parts without any checks.
    #[must_use]
    pub const fn new(q_r: DQuat, q_d: DQuat) -> Self {
        Self { q_r, q_d }
    }

    /// Returns the identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a dual quaternion from `[w, x, y, z, w, x, y, z]`.
    ///
    /// The first four values form `q_r`, the last four `q_d`. No normalization
    /// is performed.
    ///
    /// # Errors
    ///
    /// Returns a size mismatch if `values` does not hold exactly 8 scalars.
    pub fn from_dq_array(values: &[f64]) -> Result<Self> {
        DualQuatError::check_len(8, values.len())?;
        Ok(Self::new(wxyz(&values[..4]), wxyz(&values[4..])))
    }

    /// Creates a dual quaternion from `[w, x, y, z, tx, ty, tz]`.
    ///
    /// The quaternion is used as given, callers wanting a unit result pass a
    /// unit quaternion or call [`normalize`](Self::normalize) afterwards.
    ///
    /// # Errors
    ///
    /// Returns a size mismatch if `values` does not hold exactly 7 scalars.
    pub fn from_quat_pose_array(values: &[f64]) -> Result<Self> {
        DualQuatError::check_len(7, values.len())?;
        let t = DVec3::new(values[4], values[5], values[6]);
        Ok(Self::from_rotation_translation(wxyz(&values[..4]), t))
    }

    /// Creates a dual quaternion from a rotation quaternion and translation vector.
    #[must_use]
    pub fn from_rotation_translation(rotation: DQuat, translation: DVec3) -> Self {
        // q_d = 0.5 * pure_quat(t) * q_r
        let q_d = (pure(translation) * rotation) * 0.5;
        Self::new(rotation, q_d)
    }

    /// Creates a pure translation.
    #[must_use]
    pub fn from_translation(translation: DVec3) -> Self {
        Self::from_rotation_translation(DQuat::IDENTITY, translation)
    }

    /// Creates a pure translation from `[tx, ty, tz]`.
    ///
    /// # Errors
    ///
    /// Returns a size mismatch if `values` does not hold exactly 3 scalars.
    pub fn from_translation_vector(values: &[f64]) -> Result<Self> {
        DualQuatError::check_len(3, values.len())?;
        Ok(Self::from_translation(DVec3::from_slice(values)))
    }

    /// Creates a dual quaternion from a homogeneous transformation matrix.
    ///
    /// # Errors
    ///
    /// Returns [`DualQuatError::InvalidArgument`] if the bottom row is not
    /// `[0, 0, 0, 1]` within the default tolerance.
    pub fn from_homogeneous_matrix(matrix: &DMat4) -> Result<Self> {
        Self::from_homogeneous_matrix_with(matrix, &Tolerances::default())
    }

    /// Like [`from_homogeneous_matrix`](Self::from_homogeneous_matrix) with an
    /// explicit bottom-row tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`DualQuatError::InvalidArgument`] on a malformed bottom row.
    pub fn from_homogeneous_matrix_with(matrix: &DMat4, tolerances: &Tolerances) -> Result<Self> {
        let bottom = matrix.row(3);
        if !bottom.abs_diff_eq(DVec4::W, tolerances.homogeneous) {
            log::debug!("rejected homogeneous matrix with bottom row {bottom:?}");
            return Err(DualQuatError::InvalidArgument(format!(
                "homogeneous matrix bottom row must be [0, 0, 0, 1], got {:?}",
                bottom.to_array()
            )));
        }
        let rotation = DQuat::from_mat3(&DMat3::from_mat4(*matrix));
        let translation = matrix.w_axis.truncate();
        Ok(Self::from_rotation_translation(rotation, translation))
    }

    /// Creates a dual quaternion from a row-major nested 4×4 matrix.
    ///
    /// # Errors
    ///
    /// Returns [`DualQuatError::InvalidArgument`] if the input is not 4 rows of
    /// 4 values or its bottom row is not `[0, 0, 0, 1]`.
    pub fn from_matrix_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        if rows.len() != 4 || rows.iter().any(|row| row.as_ref().len() != 4) {
            let shape: Vec<usize> = rows.iter().map(|row| row.as_ref().len()).collect();
            log::debug!("rejected matrix with row lengths {shape:?}");
            return Err(DualQuatError::InvalidArgument(format!(
                "expected a 4x4 matrix, got row lengths {shape:?}"
            )));
        }
        let mut cols = [[0.0; 4]; 4];
        for (i, row) in rows.iter().enumerate() {
            for (j, value) in row.as_ref().iter().enumerate() {
                cols[j][i] = *value;
            }
        }
        Self::from_homogeneous_matrix(&DMat4::from_cols_array_2d(&cols))
    }

    /// Returns the rotation quaternion, i.e. `q_r` scaled to unit length.
    ///
    /// A real part with `|q_r| <` [`MIN_NORM`] is returned unchanged.
    #[must_use]
    pub fn rotation(&self) -> DQuat {
        let norm = self.q_r.length();
        if norm < MIN_NORM {
            self.q_r
        } else {
            self.q_r / norm
        }
    }

    /// Returns the translation, the vector part of `2 * q_d * conjugate(rotation)`.
    ///
    /// Only the rotation is normalized, `q_d` is read as stored. For unit values
    /// this is the rigid translation; for a non-unit value it is scaled by
    /// `|q_r|`, so a sum of pure translations reports the sum of their offsets.
    /// Call [`normalized`](Self::normalized) first to get the rigid translation.
    #[must_use]
    pub fn translation(&self) -> DVec3 {
        // t_quat = 2 * dual * conjugate(real)
        let t_quat = (self.q_d * self.rotation().conjugate()) * 2.0;
        t_quat.xyz()
    }

    /// Returns the equivalent homogeneous transformation matrix.
    #[must_use]
    pub fn homogeneous_matrix(&self) -> DMat4 {
        DMat4::from_rotation_translation(self.rotation(), self.translation())
    }

    /// Returns the scalars as `[w, x, y, z, w, x, y, z]` (real part first).
    #[must_use]
    pub fn dq_array(&self) -> [f64; 8] {
        let (r, d) = (self.q_r, self.q_d);
        [r.w, r.x, r.y, r.z, d.w, d.x, d.y, d.z]
    }

    /// Returns `[w, x, y, z, tx, ty, tz]`, the inverse of
    /// [`from_quat_pose_array`](Self::from_quat_pose_array) for unit values.
    ///
    /// Requires `|q_r| = 1`; the translation has the same scaling as
    /// [`translation`](Self::translation).
    #[must_use]
    pub fn quat_pose_array(&self) -> [f64; 7] {
        let r = self.q_r;
        let t = self.translation();
        [r.w, r.x, r.y, r.z, t.x, t.y, t.z]
    }

    /// Quaternion conjugate of both parts: `(q_r*, q_d*)`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.q_r.conjugate(), self.q_d.conjugate())
    }

    /// Dual number conjugate: `(q_r, -q_d)`.
    #[must_use]
    pub fn dual_number_conjugate(&self) -> Self {
        Self::new(self.q_r, -self.q_d)
    }

    /// Combined quaternion and dual number conjugate: `(q_r*, -q_d*)`.
    #[must_use]
    pub fn combined_conjugate(&self) -> Self {
        Self::new(self.q_r.conjugate(), -self.q_d.conjugate())
    }

    /// Returns the inverse, valid for non-unit values as well.
    ///
    /// `(q_r, q_d)⁻¹ = (q_r⁻¹, -q_r⁻¹ q_d q_r⁻¹)` with `q_r⁻¹ = q_r* / |q_r|²`.
    /// For unit values this equals the combined conjugate.
    ///
    /// # Errors
    ///
    /// Returns [`DualQuatError::SingularValue`] if the real part has zero norm.
    pub fn inverse(&self) -> Result<Self> {
        let norm_sq = self.q_r.length_squared();
        if !norm_sq.is_finite() || norm_sq < MIN_NORM * MIN_NORM {
            log::debug!("cannot invert dual quaternion with |q_r|^2 = {norm_sq}");
            return Err(DualQuatError::SingularValue);
        }
        let q_r_inv = self.q_r.conjugate() / norm_sq;
        let q_d_inv = -(q_r_inv * self.q_d * q_r_inv);
        Ok(Self::new(q_r_inv, q_d_inv))
    }

    /// Returns `self * rhs.inverse()`, the transform from frame `rhs` to frame `self`.
    ///
    /// # Errors
    ///
    /// Returns [`DualQuatError::SingularValue`] if `rhs` has a zero real part.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        Ok(*self * rhs.inverse()?)
    }

    /// Rescales so that `|q_r| = 1` and `dot(q_r, q_d) = 0`, in place.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns a unit copy.
    ///
    /// Divides both parts by `|q_r|`, then makes the dual part orthogonal to
    /// the real part (removes any non-rigid component). The rigid translation
    /// `2 q_d q_r⁻¹` is kept, so `from_quat_pose_array` input with a non-unit
    /// quaternion gets its translation back. For a non-unit value
    /// [`translation`](Self::translation) differs before and after, by the
    /// factor `|q_r|`.
    ///
    /// Real parts with `|q_r| <` [`MIN_NORM`] (including zero) count as singular and
    /// the value is returned unchanged, so the result is not unit.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let norm = self.q_r.length();
        if !norm.is_finite() || norm < MIN_NORM {
            log::warn!("cannot normalize dual quaternion with |q_r| = {norm}");
            return *self;
        }
        let inv_norm = 1.0 / norm;
        let q_r = self.q_r * inv_norm;
        let q_d = self.q_d * inv_norm;
        // Remove any component of dual parallel to real
        let q_d = q_d - q_r * q_r.dot(q_d);
        Self::new(q_r, q_d)
    }

    /// Whether this is a unit dual quaternion within [`DEFAULT_TOLERANCE`](crate::options::DEFAULT_TOLERANCE).
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.is_unit_with(&Tolerances::default())
    }

    /// Whether `|q_r| ≈ 1` and `dot(q_r, q_d) ≈ 0` within `tolerances.unit`.
    #[must_use]
    pub fn is_unit_with(&self, tolerances: &Tolerances) -> bool {
        (self.q_r.length() - 1.0).abs() <= tolerances.unit
            && self.q_r.dot(self.q_d).abs() <= tolerances.unit
    }

    /// Componentwise comparison of all 8 scalars within [`DEFAULT_TOLERANCE`](crate::options::DEFAULT_TOLERANCE).
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, &Tolerances::default())
    }

    /// Componentwise comparison of all 8 scalars within `tolerances.equality`.
    #[must_use]
    pub fn approx_eq_with(&self, other: &Self, tolerances: &Tolerances) -> bool {
        self.q_r.abs_diff_eq(other.q_r, tolerances.equality)
            && self.q_d.abs_diff_eq(other.q_d, tolerances.equality)
    }

    /// Dual linear blend (DLB) interpolation between two dual quaternions.
    ///
    /// Componentwise blend of both parts, flipping `b` onto the same
    /// hemisphere as `a` first, then normalized.
    #[must_use]
    pub fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        // Ensure shortest path: flip b if dot product is negative
        let b = if a.q_r.dot(b.q_r) < 0.0 { -*b } else { *b };
        (*a * (1.0 - t) + b * t).normalized()
    }

    /// Maps a point from the source frame into the target frame.
    ///
    /// Computes the sandwich product `self * (1 + ε p) * combined_conjugate(self)`
    /// and reads the point back from the dual part. `self` must be a unit dual
    /// quaternion; this is not checked.
    #[must_use]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        let point_dq = Self::new(DQuat::IDENTITY, pure(point));
        (*self * point_dq * self.combined_conjugate()).q_d.xyz()
    }

    /// [`transform_point`](Self::transform_point) on a `[x, y, z]` slice.
    ///
    /// # Errors
    ///
    /// Returns a size mismatch if `point` does not hold exactly 3 scalars.
    pub fn transform_point_array(&self, point: &[f64]) -> Result<[f64; 3]> {
        DualQuatError::check_len(3, point.len())?;
        Ok(self.transform_point(DVec3::from_slice(point)).to_array())
    }
}

impl TryFrom<DMat4> for DualQuaternion {
    type Error = DualQuatError;

    fn try_from(matrix: DMat4) -> Result<Self> {
        Self::from_homogeneous_matrix(&matrix)
    }
}

impl From<DualQuaternion> for DMat4 {
    fn from(dq: DualQuaternion) -> Self {
        dq.homogeneous_matrix()
    }
}

impl From<DualQuaternion> for [f64; 8] {
    fn from(dq: DualQuaternion) -> Self {
        dq.dq_array()
    }
}

impl fmt::Display for DualQuaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, d) = (self.q_r, self.q_d);
        write!(
            f,
            "DualQuaternion(q_r: [{}, {}, {}, {}], q_d: [{}, {}, {}, {}])",
            r.w, r.x, r.y, r.z, d.w, d.x, d.y, d.z
        )
    }
}
