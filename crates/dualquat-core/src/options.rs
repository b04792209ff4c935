//! Numeric tolerances used by the approximate checks.

use serde::{Deserialize, Serialize};

/// Default absolute tolerance for approximate comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Absolute tolerances for the approximate checks on dual quaternions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerances {
    /// Bound on `| |q_r| - 1 |` and `|dot(q_r, q_d)|` for [`is_unit`](crate::DualQuaternion::is_unit_with).
    pub unit: f64,

    /// Per-component bound for approximate equality.
    pub equality: f64,

    /// Per-entry bound when checking a homogeneous matrix bottom row.
    pub homogeneous: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            unit: DEFAULT_TOLERANCE,
            equality: DEFAULT_TOLERANCE,
            homogeneous: DEFAULT_TOLERANCE,
        }
    }
}

impl Tolerances {
    /// Creates tolerances with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the same bound for every check.
    #[must_use]
    pub fn uniform(eps: f64) -> Self {
        Self {
            unit: eps,
            equality: eps,
            homogeneous: eps,
        }
    }

    /// Sets the unit-norm bound.
    #[must_use]
    pub fn with_unit(mut self, eps: f64) -> Self {
        self.unit = eps;
        self
    }

    /// Sets the approximate equality bound.
    #[must_use]
    pub fn with_equality(mut self, eps: f64) -> Self {
        self.equality = eps;
        self
    }

    /// Sets the homogeneous bottom-row bound.
    #[must_use]
    pub fn with_homogeneous(mut self, eps: f64) -> Self {
        self.homogeneous = eps;
        self
    }
}
