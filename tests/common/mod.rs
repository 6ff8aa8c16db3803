mod goodness_of_fit;
mod util;

pub use goodness_of_fit::goodness_of_fit;
pub use util::{test_rng, TestFloat};
