//! Ready-made distributions built on the Flex sampler.

pub use gumbel::{Gumbel, GumbelError, GumbelFloat};
pub use normal::{Normal, NormalError, NormalFloat};

mod gumbel;
mod normal;
