use rand::{Rng, RngCore};
use std::cmp::PartialOrd;
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Floating point trait.
pub trait Float:
    Copy
    + Clone
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + PartialOrd
    + Default
{
    #[doc(hidden)]
    const ZERO: Self;
    #[doc(hidden)]
    const ONE: Self;
    #[doc(hidden)]
    const TWO: Self;
    #[doc(hidden)]
    const ONE_HALF: Self;
    #[doc(hidden)]
    const INFINITY: Self;
    #[doc(hidden)]
    const NEG_INFINITY: Self;
    #[doc(hidden)]
    const NAN: Self;
    #[doc(hidden)]
    const EPSILON: Self;
    /// Threshold below which the hat inversion switches to its Taylor
    /// expansion.
    #[doc(hidden)]
    const TAYLOR_SWITCH: Self;
    /// Threshold below which a hat or squeeze is considered flat.
    #[doc(hidden)]
    const FLAT_SLOPE: Self;

    #[doc(hidden)]
    fn cast_usize(u: usize) -> Self;
    #[doc(hidden)]
    fn cast_f32(x: f32) -> Self;
    #[doc(hidden)]
    fn min(self, other: Self) -> Self;
    #[doc(hidden)]
    fn max(self, other: Self) -> Self;
    #[doc(hidden)]
    fn abs(self) -> Self;
    #[doc(hidden)]
    fn sqrt(self) -> Self;
    #[doc(hidden)]
    fn ln(self) -> Self;
    #[doc(hidden)]
    fn exp(self) -> Self;
    #[doc(hidden)]
    fn powf(self, exponent: Self) -> Self;
    #[doc(hidden)]
    fn atan(self) -> Self;
    #[doc(hidden)]
    fn tan(self) -> Self;
    #[doc(hidden)]
    fn next_down(self) -> Self;
    #[doc(hidden)]
    fn is_finite(self) -> bool;
    #[doc(hidden)]
    fn is_nan(self) -> bool;
    #[doc(hidden)]
    fn gen<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}

impl Float for f32 {
    #[doc(hidden)]
    const ZERO: Self = 0f32;
    #[doc(hidden)]
    const ONE: Self = 1f32;
    #[doc(hidden)]
    const TWO: Self = 2f32;
    #[doc(hidden)]
    const ONE_HALF: Self = 0.5f32;
    #[doc(hidden)]
    const INFINITY: Self = std::f32::INFINITY;
    #[doc(hidden)]
    const NEG_INFINITY: Self = std::f32::NEG_INFINITY;
    #[doc(hidden)]
    const NAN: Self = std::f32::NAN;
    #[doc(hidden)]
    const EPSILON: Self = std::f32::EPSILON;
    #[doc(hidden)]
    const TAYLOR_SWITCH: Self = 1.0e-3;
    #[doc(hidden)]
    const FLAT_SLOPE: Self = 1.0e-5;

    #[doc(hidden)]
    fn cast_usize(u: usize) -> Self {
        u as Self
    }
    #[doc(hidden)]
    fn cast_f32(x: f32) -> Self {
        x
    }
    #[doc(hidden)]
    fn min(self, other: Self) -> Self {
        self.min(other)
    }
    #[doc(hidden)]
    fn max(self, other: Self) -> Self {
        self.max(other)
    }
    #[doc(hidden)]
    fn abs(self) -> Self {
        self.abs()
    }
    #[doc(hidden)]
    fn sqrt(self) -> Self {
        self.sqrt()
    }
    #[doc(hidden)]
    fn ln(self) -> Self {
        self.ln()
    }
    #[doc(hidden)]
    fn exp(self) -> Self {
        self.exp()
    }
    #[doc(hidden)]
    fn powf(self, exponent: Self) -> Self {
        self.powf(exponent)
    }
    #[doc(hidden)]
    fn atan(self) -> Self {
        self.atan()
    }
    #[doc(hidden)]
    fn tan(self) -> Self {
        self.tan()
    }
    #[doc(hidden)]
    fn next_down(self) -> Self {
        if self.is_nan() || self == Self::NEG_INFINITY {
            return self;
        }
        if self > 0.0 {
            Self::from_bits(self.to_bits() - 1)
        } else if self == 0.0 {
            -Self::from_bits(1)
        } else {
            Self::from_bits(self.to_bits() + 1)
        }
    }
    #[doc(hidden)]
    fn is_finite(self) -> bool {
        self.is_finite()
    }
    #[doc(hidden)]
    fn is_nan(self) -> bool {
        self.is_nan()
    }
    #[doc(hidden)]
    fn gen<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}

impl Float for f64 {
    #[doc(hidden)]
    const ZERO: Self = 0f64;
    #[doc(hidden)]
    const ONE: Self = 1f64;
    #[doc(hidden)]
    const TWO: Self = 2f64;
    #[doc(hidden)]
    const ONE_HALF: Self = 0.5f64;
    #[doc(hidden)]
    const INFINITY: Self = std::f64::INFINITY;
    #[doc(hidden)]
    const NEG_INFINITY: Self = std::f64::NEG_INFINITY;
    #[doc(hidden)]
    const NAN: Self = std::f64::NAN;
    #[doc(hidden)]
    const EPSILON: Self = std::f64::EPSILON;
    #[doc(hidden)]
    const TAYLOR_SWITCH: Self = 1.0e-6;
    #[doc(hidden)]
    const FLAT_SLOPE: Self = 1.0e-10;

    #[doc(hidden)]
    fn cast_usize(u: usize) -> Self {
        u as Self
    }
    #[doc(hidden)]
    fn cast_f32(x: f32) -> Self {
        x as Self
    }
    #[doc(hidden)]
    fn min(self, other: Self) -> Self {
        self.min(other)
    }
    #[doc(hidden)]
    fn max(self, other: Self) -> Self {
        self.max(other)
    }
    #[doc(hidden)]
    fn abs(self) -> Self {
        self.abs()
    }
    #[doc(hidden)]
    fn sqrt(self) -> Self {
        self.sqrt()
    }
    #[doc(hidden)]
    fn ln(self) -> Self {
        self.ln()
    }
    #[doc(hidden)]
    fn exp(self) -> Self {
        self.exp()
    }
    #[doc(hidden)]
    fn powf(self, exponent: Self) -> Self {
        self.powf(exponent)
    }
    #[doc(hidden)]
    fn atan(self) -> Self {
        self.atan()
    }
    #[doc(hidden)]
    fn tan(self) -> Self {
        self.tan()
    }
    #[doc(hidden)]
    fn next_down(self) -> Self {
        if self.is_nan() || self == Self::NEG_INFINITY {
            return self;
        }
        if self > 0.0 {
            Self::from_bits(self.to_bits() - 1)
        } else if self == 0.0 {
            -Self::from_bits(1)
        } else {
            Self::from_bits(self.to_bits() + 1)
        }
    }
    #[doc(hidden)]
    fn is_finite(self) -> bool {
        self.is_finite()
    }
    #[doc(hidden)]
    fn is_nan(self) -> bool {
        self.is_nan()
    }
    #[doc(hidden)]
    fn gen<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}
