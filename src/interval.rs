//! Partition intervals and their shape classification.

use crate::linear::LinearFun;
use crate::num::Float;

/// A partition element during setup.
///
/// The six `*t*` fields hold the transformed density and its first two
/// derivatives at both endpoints; they start out as the raw log-density
/// triples and are rewritten in place by
/// [`transform_interval`](crate::transform::transform_interval).
#[derive(Copy, Clone, Debug)]
pub struct Interval<T> {
    /// Left endpoint, possibly `-∞`.
    pub lx: T,
    /// Right endpoint, possibly `+∞`.
    pub rx: T,
    /// Transformation parameter.
    pub c: T,
    pub ltx: T,
    pub lt1x: T,
    pub lt2x: T,
    pub rtx: T,
    pub rt1x: T,
    pub rt2x: T,
    /// Linear majorizer of the transformed density.
    pub hat: LinearFun<T>,
    /// Linear minorizer of the transformed density.
    pub squeeze: LinearFun<T>,
    /// Area below `T_c^{-1}(hat)`.
    pub hat_area: T,
    /// Area below `T_c^{-1}(squeeze)`; zero when no squeeze exists.
    pub squeeze_area: T,
}

impl<T: Float> Interval<T> {
    /// Creates an interval from its endpoints and the value/derivative
    /// triples at both ends.
    pub fn new(lx: T, rx: T, c: T, left: (T, T, T), right: (T, T, T)) -> Self {
        Self {
            lx,
            rx,
            c,
            ltx: left.0,
            lt1x: left.1,
            lt2x: left.2,
            rtx: right.0,
            rt1x: right.1,
            rt2x: right.2,
            hat: LinearFun::none(),
            squeeze: LinearFun::none(),
            hat_area: T::ZERO,
            squeeze_area: T::ZERO,
        }
    }

    /// Slope of the secant through the transformed endpoint values.
    #[inline]
    pub fn secant_slope(&self) -> T {
        (self.rtx - self.ltx) / (self.rx - self.lx)
    }
}

/// The trimmed runtime record used by the sampler.
#[derive(Copy, Clone, Debug)]
pub struct FlexInterval<T> {
    pub lx: T,
    pub rx: T,
    pub c: T,
    pub hat: LinearFun<T>,
    pub squeeze: LinearFun<T>,
    pub hat_area: T,
    pub squeeze_area: T,
}

impl<T: Float> From<&Interval<T>> for FlexInterval<T> {
    fn from(iv: &Interval<T>) -> Self {
        Self {
            lx: iv.lx,
            rx: iv.rx,
            c: iv.c,
            hat: iv.hat,
            squeeze: iv.squeeze,
            hat_area: iv.hat_area,
            squeeze_area: iv.squeeze_area,
        }
    }
}

/// Shape of the transformed density over one interval.
///
/// The digit encodes the position of the endpoint derivatives relative to the
/// secant slope, the letter the sign of the second derivative (`a` concave,
/// `b` convex).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FunType {
    T1a,
    T1b,
    T2a,
    T2b,
    T3a,
    T3b,
    T4a,
    T4b,
    /// The interval is neither monotone plus concave where required, nor
    /// concave/convex after transformation, nor does it straddle a single
    /// inflection point. Such partitions are rejected at setup.
    Undefined,
}

/// Classifies an interval by the shape of its transformed density.
///
/// Unbounded intervals must be concave and strictly monotone towards the
/// unbounded side. Boundary cases where the transformed density vanishes at
/// an endpoint are accepted only in the combinations covered by the
/// published reference tables; everything else is [`FunType::Undefined`].
pub fn determine_type<T: Float>(iv: &Interval<T>) -> FunType {
    debug_assert!(iv.lx < iv.rx);

    if iv.ltx.is_nan() || iv.rtx.is_nan() {
        return FunType::Undefined;
    }

    // In an unbounded interval the transformed density must be concave and
    // strictly monotone, see condition 4 in section 2.3 of Botts et al.
    // (2013).
    if iv.lx == T::NEG_INFINITY {
        if iv.rt2x < T::ZERO && iv.rt1x > T::ZERO {
            return FunType::T4a;
        }
        return FunType::Undefined;
    }
    if iv.rx == T::INFINITY {
        if iv.lt2x < T::ZERO && iv.lt1x < T::ZERO {
            return FunType::T4a;
        }
        return FunType::Undefined;
    }

    // The transformed density vanishes at the left endpoint.
    if (iv.c > T::ZERO && iv.ltx == T::ZERO)
        || (iv.c <= T::ZERO && iv.ltx == T::NEG_INFINITY)
    {
        if iv.rt1x > T::ZERO && iv.rt2x > T::ZERO && iv.ltx == T::ZERO {
            return FunType::T4b;
        }
        if iv.rt1x > T::ZERO && iv.rt2x < T::ZERO {
            return FunType::T4a;
        }
        return FunType::Undefined;
    }

    // The transformed density vanishes at the right endpoint.
    if (iv.c > T::ZERO && iv.rtx == T::ZERO)
        || (iv.c <= T::ZERO && iv.rtx == T::NEG_INFINITY)
    {
        if iv.lt1x < T::ZERO && iv.lt2x > T::ZERO && iv.rtx == T::ZERO {
            return FunType::T4b;
        }
        if iv.lt1x < T::ZERO && iv.lt2x < T::ZERO {
            return FunType::T4a;
        }
        return FunType::Undefined;
    }

    // For c < 0 a vanishing transformed value marks a pole of the density;
    // with a positive second derivative at the opposite endpoint the
    // interval is convex.
    if iv.c < T::ZERO
        && ((iv.ltx == T::ZERO && iv.rt2x > T::ZERO)
            || (iv.rtx == T::ZERO && iv.lt2x > T::ZERO))
    {
        return FunType::T4b;
    }

    let r = iv.secant_slope();

    if iv.lt1x >= r && iv.rt1x >= r {
        return FunType::T1a;
    }
    if iv.lt1x <= r && iv.rt1x <= r {
        return FunType::T1b;
    }

    if iv.lt2x <= T::ZERO && iv.rt2x <= T::ZERO {
        return FunType::T4a;
    }
    if iv.lt2x >= T::ZERO && iv.rt2x >= T::ZERO {
        return FunType::T4b;
    }

    if iv.lt1x >= r && r >= iv.rt1x {
        if iv.lt2x < T::ZERO && iv.rt2x > T::ZERO {
            return FunType::T2a;
        }
        if iv.lt2x > T::ZERO && iv.rt2x < T::ZERO {
            return FunType::T2b;
        }
    } else if iv.lt1x <= r && r <= iv.rt1x {
        if iv.lt2x < T::ZERO && iv.rt2x > T::ZERO {
            return FunType::T3a;
        }
        if iv.lt2x > T::ZERO && iv.rt2x < T::ZERO {
            return FunType::T3b;
        }
    }

    FunType::Undefined
}
