use std::ops::{Add, BitOr, BitOrAssign};

use nalgebra::Vector3;

use crate::Scalar;

/// Bitmask selecting the quantities an evaluation should produce.
///
/// Unknown bits are kept and ignored, so flags meant for richer trajectory kinds can
/// be passed to any trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EvalFlags(u32);

impl EvalFlags {
    /// No quantity requested; the position is still computed.
    pub const NONE: Self = Self(0);
    /// Position.
    pub const POSITION: Self = Self(1);
    /// First derivative of the position.
    pub const VELOCITY: Self = Self(1 << 1);
    /// Second derivative of the position.
    pub const ACCELERATION: Self = Self(1 << 2);
    /// Orientation, for kinds that model rotation.
    pub const ORIENTATION: Self = Self(1 << 3);
    /// Angular velocity, for kinds that model rotation.
    pub const ANGULAR_VELOCITY: Self = Self(1 << 4);

    /// Creates flags from raw bits, keeping bits that have no name.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if every bit of `other` is set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for EvalFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for EvalFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Result of evaluating a trajectory at one time.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryEvaluation<T: Scalar> {
    /// Position, always computed.
    pub position: Vector3<T>,
    /// Velocity, when requested and supported by the trajectory kind.
    pub velocity: Option<Vector3<T>>,
    /// Acceleration, when requested and supported by the trajectory kind.
    pub acceleration: Option<Vector3<T>>,
}

impl<T: Scalar> TrajectoryEvaluation<T> {
    /// An evaluation at the origin with no derivatives.
    pub fn zeros() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: None,
            acceleration: None,
        }
    }
}

impl<T: Scalar> Default for TrajectoryEvaluation<T> {
    fn default() -> Self {
        Self::zeros()
    }
}

/// Componentwise sum. A derivative missing on either side is missing in the sum.
impl<T: Scalar> Add for TrajectoryEvaluation<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let sum = |a: Option<Vector3<T>>, b: Option<Vector3<T>>| -> Option<Vector3<T>> {
            Some(a? + b?)
        };
        Self {
            position: self.position + rhs.position,
            velocity: sum(self.velocity, rhs.velocity),
            acceleration: sum(self.acceleration, rhs.acceleration),
        }
    }
}
