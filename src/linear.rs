//! Linear functions in two-point representation.

use crate::num::Float;

/// A linear function `y = a + slope·(x - pivot)`.
///
/// Anchoring the function at a pivot rather than storing the classical
/// intercept avoids catastrophic cancellation when the function is evaluated
/// close to the pivot, which is where tangents and secants are sampled most
/// often.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearFun<T> {
    pub slope: T,
    pub pivot: T,
    pub a: T,
}

impl<T: Float> LinearFun<T> {
    /// Constructs a linear function from its slope and anchor point.
    pub fn new(slope: T, pivot: T, a: T) -> Self {
        Self { slope, pivot, a }
    }

    /// Constructs the tangent with slope `dy` at point `(x, y)`.
    pub fn tangent(x: T, y: T, dy: T) -> Self {
        Self::new(dy, x, y)
    }

    /// Constructs the secant through `(lx, ly)` and `(rx, ry)`.
    ///
    /// The pivot is anchored at the endpoint with the larger ordinate.
    pub fn secant(lx: T, rx: T, ly: T, ry: T) -> Self {
        let slope = (ry - ly) / (rx - lx);
        if ly > ry {
            Self::new(slope, lx, ly)
        } else {
            Self::new(slope, rx, ry)
        }
    }

    /// Placeholder for an absent function, e.g. a squeeze that cannot be
    /// constructed.
    pub fn none() -> Self {
        Self::new(T::NAN, T::ZERO, T::ZERO)
    }

    /// Evaluates the function at `x`.
    #[inline]
    pub fn eval(&self, x: T) -> T {
        self.a + self.slope * (x - self.pivot)
    }

    /// Returns the abscissa at which the function takes the value `y`.
    #[inline]
    pub fn inverse(&self, y: T) -> T {
        self.pivot + (y - self.a) / self.slope
    }

    /// Returns the classical intercept `y(0)`.
    pub fn intercept(&self) -> T {
        self.a - self.slope * self.pivot
    }

    /// Returns `true` if the function is defined.
    #[inline]
    pub fn is_defined(&self) -> bool {
        !self.slope.is_nan()
    }
}
