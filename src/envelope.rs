//! Hat and squeeze construction and closed-form integration.

use crate::interval::{determine_type, FunType, Interval};
use crate::linear::LinearFun;
use crate::num::Float;
use crate::transform;

/// Builds the hat and squeeze of an interval and computes both areas.
///
/// On success the interval satisfies `squeeze ≤ densitỹ ≤ hat` over its
/// whole range and `0 ≤ squeeze_area ≤ hat_area`. The returned type is
/// [`FunType::Undefined`] when no valid construction exists, in which case
/// the interval is left untouched.
pub(crate) fn build_envelope<T: Float>(iv: &mut Interval<T>) -> FunType {
    let shape = determine_type(iv);
    if shape == FunType::Undefined {
        return shape;
    }

    let t_l = LinearFun::tangent(iv.lx, iv.ltx, iv.lt1x);
    let t_r = LinearFun::tangent(iv.rx, iv.rtx, iv.rt1x);
    let bounded = iv.lx.is_finite() && iv.rx.is_finite();
    let sec = if bounded && iv.ltx.is_finite() && iv.rtx.is_finite() {
        LinearFun::secant(iv.lx, iv.rx, iv.ltx, iv.rtx)
    } else {
        LinearFun::none()
    };

    let (hat, squeeze) = match shape {
        FunType::T1a => (t_l, t_r),
        FunType::T1b => (t_r, t_l),
        FunType::T2a => (t_l, sec),
        FunType::T2b => (t_r, sec),
        FunType::T3a => (sec, t_r),
        FunType::T3b => (sec, t_l),
        FunType::T4a => {
            // Concave: any tangent majorizes; prefer the endpoint whose
            // derivative is closer to the secant slope. Unbounded or
            // vanishing endpoints leave only the opposite tangent.
            let hat = if iv.lx == T::NEG_INFINITY || !iv.ltx.is_finite() {
                t_r
            } else if iv.rx == T::INFINITY || !iv.rtx.is_finite() {
                t_l
            } else {
                let r = iv.secant_slope();
                if (iv.lt1x - r).abs() <= (iv.rt1x - r).abs() {
                    t_l
                } else {
                    t_r
                }
            };
            (hat, sec)
        }
        FunType::T4b => {
            // Convex: the secant majorizes and any tangent minorizes, with
            // the same endpoint preference as T4a. A tangent anchored where
            // the transformed value vanishes with c < 0 would minorize a
            // pole and is skipped.
            let l_ok = tangent_minorizes(iv.ltx, iv.lt1x, iv.c);
            let r_ok = tangent_minorizes(iv.rtx, iv.rt1x, iv.c);
            let r = iv.secant_slope();
            let squeeze = match (l_ok, r_ok) {
                (true, true) => {
                    if (iv.lt1x - r).abs() <= (iv.rt1x - r).abs() {
                        t_l
                    } else {
                        t_r
                    }
                }
                (true, false) => t_l,
                (false, true) => t_r,
                (false, false) => LinearFun::none(),
            };
            (sec, squeeze)
        }
        FunType::Undefined => unreachable!(),
    };

    iv.hat = hat;
    iv.squeeze = squeeze;

    let mut hat_area = area(&iv.hat, iv.lx, iv.rx, iv.c);
    if hat_area < T::ZERO && hat_area > -T::TAYLOR_SWITCH {
        // Rounding can push a vanishing area slightly negative.
        hat_area = T::ZERO;
    }
    if !hat_area.is_finite() && bounded {
        // Cancellation artifact: fall back to the analytic rectangle bound.
        let top = iv.hat.eval(iv.lx).max(iv.hat.eval(iv.rx));
        hat_area = (iv.rx - iv.lx) * transform::inverse(top, iv.c);
    }
    if hat_area.is_nan() {
        hat_area = T::INFINITY;
    }
    iv.hat_area = hat_area;

    let mut squeeze_area = if iv.squeeze.is_defined() {
        area(&iv.squeeze, iv.lx, iv.rx, iv.c)
    } else {
        T::ZERO
    };
    if !(squeeze_area > T::ZERO) || !squeeze_area.is_finite() {
        squeeze_area = T::ZERO;
    }
    iv.squeeze_area = squeeze_area.min(iv.hat_area);

    shape
}

// A tangent is a usable minorizer only where the transformed value is finite
// and, for c < 0, away from the vanishing value that marks a density pole.
fn tangent_minorizes<T: Float>(tx: T, t1x: T, c: T) -> bool {
    tx.is_finite() && t1x.is_finite() && !(c < T::ZERO && tx == T::ZERO)
}

/// Integrates `T_c^{-1}(lf)` over `[lx, rx]`.
///
/// The closed forms follow from [`transform::antiderivative`]; nearly flat
/// functions take a series or midpoint fallback to avoid cancellation in the
/// endpoint difference.
pub(crate) fn area<T: Float>(lf: &LinearFun<T>, lx: T, rx: T, c: T) -> T {
    let s = lf.slope;
    let d = rx - lx;
    let ly = lf.eval(lx);
    let ry = lf.eval(rx);

    if c == T::ZERO {
        let z = s * d;
        if d.is_finite() && z.abs() < T::FLAT_SLOPE {
            let one_sixth = T::ONE / (T::TWO + T::TWO + T::TWO);
            return ly.exp() * d * (T::ONE + z * T::ONE_HALF + z * z * one_sixth);
        }
        return (ry.exp() - ly.exp()) / s;
    }
    if c == T::ONE {
        // Exact trapezoid.
        return d * T::ONE_HALF * (ly + ry);
    }
    if d.is_finite() && (s * d).abs() < T::FLAT_SLOPE {
        return d * transform::inverse(lf.eval(lx + T::ONE_HALF * d), c);
    }
    if c == -T::ONE {
        return -(ry.abs().ln() - ly.abs().ln()) / s;
    }
    (transform::antiderivative(ry, c) - transform::antiderivative(ly, c)) / s
}
