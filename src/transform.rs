//! The T_c transformation family.
//!
//! The family maps a density value `t` to:
//!
//! ```text
//! T_0(t) = ln(t)
//! T_c(t) = sign(c) t^c    (c ≠ 0)
//! ```
//!
//! so that the transformed density is concave (resp. convex) wherever a
//! linear hat and squeeze can bound it. All operations are pure and are
//! defined on the branch `sign(c)·y ≥ 0` of the codomain.

use crate::interval::Interval;
use crate::num::Float;

/// Applies `T_c` to a density value.
pub fn transform<T: Float>(x: T, c: T) -> T {
    if c == T::ZERO {
        x.ln()
    } else if c > T::ZERO {
        x.powf(c)
    } else {
        -x.powf(c)
    }
}

/// Returns the unique `x` with `T_c(x) = y` on the valid branch.
#[inline]
pub fn inverse<T: Float>(y: T, c: T) -> T {
    if c == T::ZERO {
        return y.exp();
    }
    if c == -T::ONE_HALF {
        return T::ONE / (y * y);
    }
    if c == -T::ONE {
        return -T::ONE / y;
    }
    if c == T::ONE {
        return y;
    }
    y.abs().powf(T::ONE / c)
}

/// Antiderivative of `T_c^{-1}`, used to integrate a linear function through
/// the inverse transformation.
///
/// For `c ∉ {0, -1}` the power rule gives:
///
/// ```text
/// ∫ |y|^(1/c) dy = |c|/(c + 1) |y|^((c + 1)/c)
/// ```
///
/// on the valid branch; `c = 0` integrates `exp` and `c = -1` integrates to
/// a logarithm.
pub fn antiderivative<T: Float>(y: T, c: T) -> T {
    if c == T::ZERO {
        return y.exp();
    }
    if c == -T::ONE {
        return -(y.abs().ln());
    }
    c.abs() / (c + T::ONE) * y.abs().powf((c + T::ONE) / c)
}

/// Inverse of [`antiderivative`].
///
/// Not defined for `c = -1`; callers handle that case with the exact
/// logarithmic form.
pub fn inverse_antiderivative<T: Float>(z: T, c: T) -> T {
    if c == T::ZERO {
        return z.ln();
    }
    let y = (z * (c + T::ONE) / c.abs()).powf(c / (c + T::ONE));
    if c > T::ZERO {
        y
    } else {
        -y
    }
}

/// Rewrites an interval's cached log-density triples into `T_c` space.
///
/// The inputs are the log-density `f0` and its first two derivatives at both
/// endpoints. For `c = 0` the log-density is already the transformed density
/// and the call is a no-op. For `c ≠ 0` the chain rule on `t = exp(f0)`
/// gives:
///
/// ```text
/// T_c(t)   = sign(c) t^c
/// T_c(t)'  = c sign(c) t^c f1
/// T_c(t)'' = c sign(c) t^c (c f1² + f2)
/// ```
///
/// The caller must not invoke this on an interval whose values are already
/// transformed.
pub fn transform_interval<T: Float>(iv: &mut Interval<T>) {
    let c = iv.c;
    if c == T::ZERO {
        return;
    }
    if iv.lx.is_finite() {
        let (tx, t1x, t2x) = transform_triple(iv.ltx, iv.lt1x, iv.lt2x, c);
        iv.ltx = tx;
        iv.lt1x = t1x;
        iv.lt2x = t2x;
    } else {
        iv.ltx = tail_value(c);
    }
    if iv.rx.is_finite() {
        let (tx, t1x, t2x) = transform_triple(iv.rtx, iv.rt1x, iv.rt2x, c);
        iv.rtx = tx;
        iv.rt1x = t1x;
        iv.rt2x = t2x;
    } else {
        iv.rtx = tail_value(c);
    }
}

/// Applies the chain rule to a single `(f0, f1, f2)` triple.
pub(crate) fn transform_triple<T: Float>(f0: T, f1: T, f2: T, c: T) -> (T, T, T) {
    let tc = transform(f0.exp(), c);
    (tc, c * tc * f1, c * tc * (c * f1 * f1 + f2))
}

/// Limit of the transformed density where the density itself vanishes.
pub(crate) fn tail_value<T: Float>(c: T) -> T {
    if c > T::ZERO {
        T::ZERO
    } else {
        T::NEG_INFINITY
    }
}
