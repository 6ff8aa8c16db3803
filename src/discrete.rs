//! Discrete sampling of an interval index proportionally to the hat areas.

use crate::num::Float;

use rand_core::RngCore;

/// Inversion sampler over a fixed weight vector.
///
/// The weights are preprocessed into a prefix-sum table once; a draw costs
/// one uniform plus a bisection, i.e. O(log n).
#[derive(Clone, Debug)]
pub struct Discrete<T> {
    cdf: Vec<T>,
    total: T,
}

impl<T: Float> Discrete<T> {
    /// Preprocesses a vector of nonnegative weights.
    pub fn new(weights: &[T]) -> Self {
        assert!(!weights.is_empty());

        // The running sum of nonnegative terms is nondecreasing under
        // rounding, so a draw below `total` always lands on a valid index.
        let mut cdf = Vec::with_capacity(weights.len());
        let mut sum = T::ZERO;
        for &w in weights {
            sum = sum + w;
            cdf.push(sum);
        }

        Self { cdf, total: sum }
    }

    /// Draws an index with probability proportional to its weight.
    #[inline]
    pub fn sample<R: RngCore + ?Sized>(&self, rng: &mut R) -> usize {
        let u = T::gen(rng) * self.total;
        let i = self.cdf.partition_point(|&acc| acc <= u);
        i.min(self.cdf.len() - 1)
    }
}
