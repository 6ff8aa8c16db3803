use crate::num::Float;
use crate::{Distribution, Flex};

use rand_core::RngCore;
use thiserror::Error;

/// A floating point type for use with normal distributions.
pub trait NormalFloat: Float {
    #[doc(hidden)]
    const RHO: Self;
    #[doc(hidden)]
    const SPLIT_POS: Self;
}

impl NormalFloat for f32 {
    #[doc(hidden)]
    const RHO: Self = 1.1;
    #[doc(hidden)]
    const SPLIT_POS: Self = 1.5;
}

impl NormalFloat for f64 {
    #[doc(hidden)]
    const RHO: Self = 1.05;
    #[doc(hidden)]
    const SPLIT_POS: Self = 1.5;
}

/// Error type for normal distribution construction failures.
#[derive(Error, Debug)]
pub enum NormalError {
    /// The rejection envelopes could not be constructed.
    #[error("could not construct the rejection envelopes for the provided distribution parameters")]
    SetupFailure,
    /// The provided standard deviation is not strictly positive.
    #[error("the standard deviation should be strictly positive")]
    BadStdDev,
}

/// The normal distribution.
///
/// The probability density function is:
///
/// ```text
/// f(x) = exp(-½ (x - μ)² / σ²) / (σ √(2π))
/// ```
///
/// where `μ` is the mean and where the standard deviation `σ` is strictly
/// positive.
///
/// A standard normal sampler is built once over an unbounded partition with
/// the logarithmic transformation; samples are rescaled on the fly.
#[derive(Clone)]
pub struct Normal<T: NormalFloat> {
    mean: T,
    std_dev: T,
    inner: Flex<T, fn(T) -> T>,
}

impl<T: NormalFloat> Normal<T> {
    /// Constructs a normal distribution with the specified mean and standard
    /// deviation.
    pub fn new(mean: T, std_dev: T) -> Result<Self, NormalError> {
        if std_dev <= T::ZERO {
            return Err(NormalError::BadStdDev);
        }
        let points = [
            T::NEG_INFINITY,
            -T::SPLIT_POS,
            T::ZERO,
            T::SPLIT_POS,
            T::INFINITY,
        ];
        let inner = Flex::new(
            log_pdf::<T> as fn(T) -> T,
            d_log_pdf::<T>,
            dd_log_pdf::<T>,
            T::ZERO,
            &points,
            T::RHO,
        )
        .map_err(|_| NormalError::SetupFailure)?;

        Ok(Self {
            mean,
            std_dev,
            inner,
        })
    }
}

impl<T: NormalFloat> Distribution<T> for Normal<T> {
    #[inline]
    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> T {
        self.mean + self.std_dev * self.inner.sample(rng)
    }
}

// Standard normal log-density and derivatives, up to the normalization
// constant.
fn log_pdf<T: Float>(x: T) -> T {
    -T::ONE_HALF * x * x
}

fn d_log_pdf<T: Float>(x: T) -> T {
    -x
}

fn dd_log_pdf<T: Float>(_x: T) -> T {
    -T::ONE
}
