//! Fast sampling of arbitrary univariate continuous probability
//! distributions.
//!
//! The crate implements transformed density rejection with inflection
//! points (Botts, Hörmann & Leydold, 2013): the log-density of the target
//! distribution is mapped through a member of the `T_c` transformation
//! family and sandwiched between piecewise linear hat and squeeze
//! functions, which an adaptive setup refines until rejection sampling
//! accepts with probability at least `1/rho`. Unlike inversion or
//! ziggurat-style methods, only the log-density and its first two
//! derivatives are required, the support may be unbounded and the density
//! does not have to be unimodal or log-concave.
//!
//! The [`Flex`] sampler is the generic entry point; the
//! [`distributions`] module provides ready-made distributions built on it.
//! All samplers are generic over `f32`/`f64` and draw their randomness from
//! any [`rand_core::RngCore`] engine.

// Modules.
pub mod distributions;
pub mod linear;
pub mod num;
pub mod transform;
mod discrete;
mod envelope;
mod error;
mod interval;
mod sampler;
mod setup;

pub use discrete::Discrete;
pub use error::FlexError;
pub use interval::{determine_type, FlexInterval, FunType, Interval};
pub use sampler::Flex;
pub use setup::FlexOptions;

use rand_core::RngCore;

/// Probability distribution sampled with a random engine.
pub trait Distribution<T> {
    /// Draws a sample.
    fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> T;
}
