//! Adaptive construction of the hat and squeeze partition.

use crate::envelope::build_envelope;
use crate::error::FlexError;
use crate::interval::{FlexInterval, FunType, Interval};
use crate::num::Float;
use crate::transform::{tail_value, transform_interval, transform_triple};

/// Caps on the adaptive refinement.
#[derive(Copy, Clone, Debug)]
pub struct FlexOptions {
    /// Maximum number of intervals in the refined partition.
    pub max_points: usize,
    /// Maximum number of refinement sweeps.
    pub max_iterations: usize,
}

impl Default for FlexOptions {
    fn default() -> Self {
        Self {
            max_points: 1000,
            max_iterations: 1000,
        }
    }
}

pub(crate) struct Setup<T> {
    pub intervals: Vec<FlexInterval<T>>,
    /// Achieved Σhat/Σsqueeze ratio.
    pub efficiency: T,
}

// Neumaier summation; the correction term also absorbs the cancellation from
// the subtractions performed when an interval is split.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct CompensatedSum<T> {
    sum: T,
    compensation: T,
}

impl<T: Float> CompensatedSum<T> {
    pub fn add(&mut self, v: T) {
        let t = self.sum + v;
        if self.sum.abs() >= v.abs() {
            self.compensation += (self.sum - t) + v;
        } else {
            self.compensation += (v - t) + self.sum;
        }
        self.sum = t;
    }

    pub fn value(&self) -> T {
        self.sum + self.compensation
    }
}

/// Transformation-aware midpoint of an interval.
///
/// The arc mean stays close to the origin where the transformed densities
/// vary fastest, which accelerates convergence of the refinement compared to
/// the arithmetic midpoint. Infinite endpoints flow through `atan`
/// naturally; when both endpoints are far out on the same side the harmonic
/// mean is used instead to avoid `tan`/`atan` cancellation.
pub(crate) fn arcmean<T: Float>(lx: T, rx: T) -> T {
    let far = T::cast_f32(1.0e3);
    if rx < -far || lx > far {
        return T::TWO / (T::ONE / lx + T::ONE / rx);
    }
    ((lx.atan() + rx.atan()) * T::ONE_HALF).tan()
}

fn validate<T: Float>(points: &[T], cs: &[T], rho: T) -> Result<(), FlexError> {
    if points.len() < 2 {
        return Err(FlexError::TooFewPoints);
    }
    if cs.len() != points.len() - 1 {
        return Err(FlexError::TransformationCount);
    }
    if !rho.is_finite() || !(rho > T::ONE) {
        return Err(FlexError::BadEfficiencyTarget);
    }
    if points[1..points.len() - 1].iter().any(|x| !x.is_finite()) {
        return Err(FlexError::InfiniteInteriorPoint);
    }
    if !points.windows(2).all(|w| w[0] < w[1]) {
        return Err(FlexError::NonMonotonePoints);
    }
    if points[0] == T::NEG_INFINITY && !(cs[0] > -T::ONE) {
        return Err(FlexError::BadTailTransformation);
    }
    if points[points.len() - 1] == T::INFINITY && !(cs[cs.len() - 1] > -T::ONE) {
        return Err(FlexError::BadTailTransformation);
    }
    Ok(())
}

fn checked_build<T: Float>(iv: &mut Interval<T>, index: usize) -> Result<(), FlexError> {
    if build_envelope(iv) == FunType::Undefined {
        return Err(FlexError::UndefinedShape { index });
    }
    if !iv.hat_area.is_finite() || iv.hat_area < T::ZERO {
        return Err(FlexError::NonFiniteHatArea { index });
    }
    Ok(())
}

/// Builds the refined partition for the given log-density and its first two
/// derivatives.
///
/// Splitting stops as soon as Σhat/Σsqueeze reaches `rho`; the caps in
/// `options` bound the work on densities for which the target cannot be
/// reached, in which case the partition is still a valid majorizer and only
/// a warning is emitted.
pub(crate) fn flex_intervals<T, F0, F1, F2>(
    f0: &F0,
    f1: &F1,
    f2: &F2,
    points: &[T],
    cs: &[T],
    rho: T,
    options: &FlexOptions,
) -> Result<Setup<T>, FlexError>
where
    T: Float,
    F0: Fn(T) -> T,
    F1: Fn(T) -> T,
    F2: Fn(T) -> T,
{
    validate(points, cs, rho)?;

    // Each point is evaluated once; both neighboring intervals transform the
    // shared triple with their own c.
    let triples: Vec<(T, T, T)> = points
        .iter()
        .map(|&x| {
            if x.is_finite() {
                (f0(x), f1(x), f2(x))
            } else {
                (T::NEG_INFINITY, T::ZERO, T::ZERO)
            }
        })
        .collect();

    let mut hat_sum = CompensatedSum::default();
    let mut squeeze_sum = CompensatedSum::default();
    let mut intervals: Vec<Interval<T>> = Vec::with_capacity(points.len() - 1);

    for i in 0..points.len() - 1 {
        let c = cs[i];
        let left = if points[i].is_finite() {
            triples[i]
        } else {
            (tail_value(c), T::ZERO, T::ZERO)
        };
        let right = if points[i + 1].is_finite() {
            triples[i + 1]
        } else {
            (tail_value(c), T::ZERO, T::ZERO)
        };
        let mut iv = Interval::new(points[i], points[i + 1], c, left, right);
        transform_interval(&mut iv);
        checked_build(&mut iv, i)?;
        hat_sum.add(iv.hat_area);
        squeeze_sum.add(iv.squeeze_area);
        intervals.push(iv);
    }

    let mut iterations = 0;
    loop {
        let total_hat = hat_sum.value();
        let total_squeeze = squeeze_sum.value();
        if total_hat / total_squeeze <= rho {
            break;
        }
        if intervals.len() >= options.max_points || iterations >= options.max_iterations {
            log::warn!(
                "efficiency target {:?} not reached: {} intervals, hat/squeeze ratio {:?}",
                rho,
                intervals.len(),
                total_hat / total_squeeze
            );
            break;
        }
        iterations += 1;

        // Splitting every interval above the average excess takes the
        // numerator one ulp down so that intervals sitting exactly on the
        // boundary of an already balanced partition still qualify.
        let n = T::cast_usize(intervals.len());
        let avg_excess = (total_hat - total_squeeze).next_down() / n;

        let mut i = 0;
        while i < intervals.len() && intervals.len() < options.max_points {
            if intervals[i].hat_area - intervals[i].squeeze_area > avg_excess {
                if let Some(m) = split_point(&intervals[i]) {
                    hat_sum.add(-intervals[i].hat_area);
                    squeeze_sum.add(-intervals[i].squeeze_area);

                    let right = split(&mut intervals[i], m, f0, f1, f2, i)?;

                    hat_sum.add(intervals[i].hat_area);
                    squeeze_sum.add(intervals[i].squeeze_area);
                    hat_sum.add(right.hat_area);
                    squeeze_sum.add(right.squeeze_area);
                    intervals.insert(i + 1, right);
                    i += 1;
                }
            }
            i += 1;
        }
    }

    let efficiency = hat_sum.value() / squeeze_sum.value();
    Ok(Setup {
        intervals: intervals.iter().map(FlexInterval::from).collect(),
        efficiency,
    })
}

// Returns the point at which an interval is split, or `None` when the
// interval is too narrow to contain an interior point.
fn split_point<T: Float>(iv: &Interval<T>) -> Option<T> {
    let mut m = arcmean(iv.lx, iv.rx);
    if !m.is_finite() || !(m > iv.lx && m < iv.rx) {
        // Progressive fallback away from the finite endpoint.
        m = if iv.lx == T::NEG_INFINITY {
            iv.rx - iv.rx.abs() - T::ONE
        } else if iv.rx == T::INFINITY {
            iv.lx + iv.lx.abs() + T::ONE
        } else {
            (iv.lx + iv.rx) * T::ONE_HALF
        };
    }
    if m.is_finite() && m > iv.lx && m < iv.rx {
        Some(m)
    } else {
        None
    }
}

// Splits an interval in place; the left half shrinks and the new right half
// is returned.
fn split<T, F0, F1, F2>(
    iv: &mut Interval<T>,
    m: T,
    f0: &F0,
    f1: &F1,
    f2: &F2,
    index: usize,
) -> Result<Interval<T>, FlexError>
where
    T: Float,
    F0: Fn(T) -> T,
    F1: Fn(T) -> T,
    F2: Fn(T) -> T,
{
    let raw = (f0(m), f1(m), f2(m));
    let mid = if iv.c == T::ZERO {
        raw
    } else {
        transform_triple(raw.0, raw.1, raw.2, iv.c)
    };

    let mut right = Interval::new(
        m,
        iv.rx,
        iv.c,
        mid,
        (iv.rtx, iv.rt1x, iv.rt2x),
    );
    iv.rx = m;
    iv.rtx = mid.0;
    iv.rt1x = mid.1;
    iv.rt2x = mid.2;

    checked_build(iv, index)?;
    checked_build(&mut right, index + 1)?;
    Ok(right)
}
