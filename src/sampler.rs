//! The Flex sampler.

use crate::discrete::Discrete;
use crate::error::FlexError;
use crate::interval::FlexInterval;
use crate::num::Float;
use crate::setup::{flex_intervals, FlexOptions};
use crate::transform;
use crate::Distribution;

use rand_core::RngCore;

/// Adaptive rejection sampler for an arbitrary univariate continuous
/// distribution.
///
/// The caller provides the log-density `f0` and its first two derivatives,
/// an initial partition of the support into intervals each containing at
/// most one inflection point of the transformed density, one transformation
/// parameter per interval and an efficiency target `rho`. Setup refines the
/// partition until piecewise linear hat and squeeze functions of the
/// transformed density sandwich it tightly enough that rejection sampling
/// accepts with probability at least `1/rho`.
///
/// The sampler is immutable once built and can be shared freely across
/// threads; each thread owns its random engine.
///
/// # Example
///
/// ```
/// use flex::{Distribution, Flex};
/// use rand::SeedableRng;
///
/// // f(x) ∝ exp(-x⁴ + 5x² - 4), a bimodal quartic density.
/// let f0 = |x: f64| -(x * x * x * x) + 5.0 * x * x - 4.0;
/// let f1 = |x: f64| -4.0 * x * x * x + 10.0 * x;
/// let f2 = |x: f64| -12.0 * x * x + 10.0;
///
/// let dist = Flex::new(f0, f1, f2, 1.5, &[-3.0, -1.5, 0.0, 1.5, 3.0], 1.1).unwrap();
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(42);
/// let x = dist.sample(&mut rng);
/// assert!(x >= -3.0 && x <= 3.0);
/// ```
#[derive(Clone)]
pub struct Flex<T, F> {
    log_pdf: F,
    intervals: Vec<FlexInterval<T>>,
    index: Discrete<T>,
    efficiency: T,
}

impl<T, F> Flex<T, F>
where
    T: Float,
    F: Fn(T) -> T,
{
    /// Constructs a sampler with a single transformation parameter broadcast
    /// over all intervals.
    pub fn new<F1, F2>(
        log_pdf: F,
        d_log_pdf: F1,
        dd_log_pdf: F2,
        c: T,
        points: &[T],
        rho: T,
    ) -> Result<Self, FlexError>
    where
        F1: Fn(T) -> T,
        F2: Fn(T) -> T,
    {
        let cs = vec![c; points.len().saturating_sub(1)];
        Self::with_cs(log_pdf, d_log_pdf, dd_log_pdf, &cs, points, rho)
    }

    /// Constructs a sampler with one transformation parameter per interval.
    pub fn with_cs<F1, F2>(
        log_pdf: F,
        d_log_pdf: F1,
        dd_log_pdf: F2,
        cs: &[T],
        points: &[T],
        rho: T,
    ) -> Result<Self, FlexError>
    where
        F1: Fn(T) -> T,
        F2: Fn(T) -> T,
    {
        Self::with_options(
            log_pdf,
            d_log_pdf,
            dd_log_pdf,
            cs,
            points,
            rho,
            &FlexOptions::default(),
        )
    }

    /// Constructs a sampler with explicit refinement caps.
    ///
    /// When a cap triggers before the efficiency target is reached the
    /// sampler is still a valid majorizer, merely less efficient; a warning
    /// is logged and the achieved ratio is available through
    /// [`efficiency`](Self::efficiency).
    pub fn with_options<F1, F2>(
        log_pdf: F,
        d_log_pdf: F1,
        dd_log_pdf: F2,
        cs: &[T],
        points: &[T],
        rho: T,
        options: &FlexOptions,
    ) -> Result<Self, FlexError>
    where
        F1: Fn(T) -> T,
        F2: Fn(T) -> T,
    {
        let setup = flex_intervals(&log_pdf, &d_log_pdf, &dd_log_pdf, points, cs, rho, options)?;
        let weights: Vec<T> = setup.intervals.iter().map(|iv| iv.hat_area).collect();

        Ok(Self {
            log_pdf,
            intervals: setup.intervals,
            index: Discrete::new(&weights),
            efficiency: setup.efficiency,
        })
    }

    /// Read-only view of the refined partition.
    pub fn intervals(&self) -> &[FlexInterval<T>] {
        &self.intervals
    }

    /// Achieved Σhat/Σsqueeze ratio.
    pub fn efficiency(&self) -> T {
        self.efficiency
    }
}

impl<T, F> Distribution<T> for Flex<T, F>
where
    T: Float,
    F: Fn(T) -> T,
{
    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> T {
        loop {
            let iv = &self.intervals[self.index.sample(rng)];

            let u = T::gen(rng);
            let x = invert_hat_cdf(iv, u);

            // Numerical failure of the inversion; reject and redraw.
            let tol = inversion_tolerance(iv);
            if !x.is_finite() || x < iv.lx - tol || x > iv.rx + tol {
                log::debug!("candidate {:?} outside [{:?}, {:?}]", x, iv.lx, iv.rx);
                continue;
            }
            let x = x.max(iv.lx).min(iv.rx);

            let hat_x = iv.hat.eval(x);
            let squeeze_x = iv.squeeze.eval(x);
            if iv.squeeze_area > T::ZERO && hat_x < squeeze_x {
                log::debug!("hat below squeeze at {:?}", x);
                continue;
            }

            // The squeeze shortcut only applies where the squeeze sits on
            // the valid branch of the transformation; a squeeze that crossed
            // zero would otherwise claim a spurious lower bound.
            let squeeze_usable = iv.squeeze_area > T::ZERO
                && (iv.c == T::ZERO
                    || (iv.c > T::ZERO && squeeze_x >= T::ZERO)
                    || (iv.c < T::ZERO && squeeze_x <= T::ZERO));

            let inv_hat_x = transform::inverse(hat_x, iv.c);
            let inv_squeeze_x = if squeeze_usable {
                transform::inverse(squeeze_x, iv.c)
            } else {
                T::ZERO
            };

            // The same vertical coordinate drives the squeeze shortcut and
            // the density test; drawing them separately would double-count
            // the acceptance region.
            let t = T::gen(rng) * inv_hat_x;
            if t <= inv_squeeze_x {
                return x;
            }
            if t <= (self.log_pdf)(x).exp() {
                return x;
            }
        }
    }
}

// Inverts the cumulative hat distribution inside an interval at `u·hat_area`.
//
// The closed forms mirror the area computation; when the exact expression
// would cancel, a short series in the normalized slope takes over.
fn invert_hat_cdf<T: Float>(iv: &FlexInterval<T>, u: T) -> T {
    let s = iv.hat.slope;
    let c = iv.c;
    let ua = u * iv.hat_area;

    if s.abs() < T::FLAT_SLOPE && iv.lx.is_finite() && iv.rx.is_finite() {
        return (T::ONE - u) * iv.lx + u * iv.rx;
    }

    let hl = iv.hat.eval(iv.lx);

    if c == T::ZERO {
        let e = (-hl).exp();
        let z = ua * s * e;
        if z.abs() < T::TAYLOR_SWITCH {
            let one_third = T::ONE / (T::TWO + T::ONE);
            return iv.lx + ua * e * (T::ONE - z * T::ONE_HALF + z * z * one_third);
        }
        return iv.hat.inverse((s * ua + hl.exp()).ln());
    }
    if c == -T::ONE {
        // The antiderivative is logarithmic, so the inversion is exact.
        return iv.hat.inverse(hl * (-s * ua).exp());
    }
    if c == -T::ONE_HALF {
        let z = ua * s * hl;
        if z.abs() < T::TAYLOR_SWITCH {
            return iv.lx + ua * hl * hl * (T::ONE + z + z * z);
        }
        return iv.hat.inverse(-T::ONE / (s * ua - T::ONE / hl));
    }
    if c == T::ONE {
        let z = ua * s / (hl * hl);
        if z.abs() < T::TAYLOR_SWITCH {
            return iv.lx + ua / hl * (T::ONE - z * T::ONE_HALF + z * z * T::ONE_HALF);
        }
        return iv.hat.inverse((hl * hl + T::TWO * s * ua).sqrt());
    }

    iv.hat.inverse(transform::inverse_antiderivative(
        s * ua + transform::antiderivative(hl, c),
        c,
    ))
}

fn inversion_tolerance<T: Float>(iv: &FlexInterval<T>) -> T {
    let four = T::TWO + T::TWO;
    if iv.lx.is_finite() && iv.rx.is_finite() {
        (iv.rx - iv.lx) * T::EPSILON * four
    } else {
        (iv.lx.abs().min(iv.rx.abs()) + T::ONE) * T::EPSILON * four
    }
}
