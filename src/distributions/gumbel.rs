use crate::num::Float;
use crate::{Distribution, Flex};

use rand_core::RngCore;
use thiserror::Error;

/// A floating point type for use with Gumbel distributions.
pub trait GumbelFloat: Float {
    #[doc(hidden)]
    const RHO: Self;
    #[doc(hidden)]
    const LEFT_SPLIT_POS: Self;
    #[doc(hidden)]
    const RIGHT_SPLIT_POS: Self;
}

impl GumbelFloat for f32 {
    #[doc(hidden)]
    const RHO: Self = 1.1;
    #[doc(hidden)]
    const LEFT_SPLIT_POS: Self = -1.0;
    #[doc(hidden)]
    const RIGHT_SPLIT_POS: Self = 1.5;
}

impl GumbelFloat for f64 {
    #[doc(hidden)]
    const RHO: Self = 1.05;
    #[doc(hidden)]
    const LEFT_SPLIT_POS: Self = -1.0;
    #[doc(hidden)]
    const RIGHT_SPLIT_POS: Self = 1.5;
}

/// Error type for Gumbel distribution construction failures.
#[derive(Error, Debug)]
pub enum GumbelError {
    /// The rejection envelopes could not be constructed.
    #[error("could not construct the rejection envelopes for the provided distribution parameters")]
    SetupFailure,
    /// The provided scale parameter is not strictly positive.
    #[error("the scale parameter should be strictly positive")]
    BadScale,
}

/// The Gumbel distribution.
///
/// The probability density function is:
///
/// ```text
/// f(x) = exp(-(z + exp(-z))) / β,   z = (x - μ) / β
/// ```
///
/// where `μ` is the location parameter and where the scale parameter `β` is
/// strictly positive.
///
/// The log-density is concave on the whole real line, so a standard-shape
/// sampler over an unbounded partition with the logarithmic transformation
/// covers both tails; samples are rescaled on the fly.
#[derive(Clone)]
pub struct Gumbel<T: GumbelFloat> {
    location: T,
    scale: T,
    inner: Flex<T, fn(T) -> T>,
}

impl<T: GumbelFloat> Gumbel<T> {
    /// Constructs a Gumbel distribution with the specified location and
    /// scale.
    pub fn new(location: T, scale: T) -> Result<Self, GumbelError> {
        if scale <= T::ZERO {
            return Err(GumbelError::BadScale);
        }
        let points = [
            T::NEG_INFINITY,
            T::LEFT_SPLIT_POS,
            T::RIGHT_SPLIT_POS,
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
        .map_err(|_| GumbelError::SetupFailure)?;

        Ok(Self {
            location,
            scale,
            inner,
        })
    }
}

impl<T: GumbelFloat> Distribution<T> for Gumbel<T> {
    #[inline]
    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> T {
        self.location + self.scale * self.inner.sample(rng)
    }
}

// Standard Gumbel log-density and derivatives.
fn log_pdf<T: Float>(x: T) -> T {
    -x - (-x).exp()
}

fn d_log_pdf<T: Float>(x: T) -> T {
    (-x).exp() - T::ONE
}

fn dd_log_pdf<T: Float>(x: T) -> T {
    -(-x).exp()
}
