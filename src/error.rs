use thiserror::Error;

/// Error type for sampler construction failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlexError {
    /// The number of transformation parameters does not match the partition.
    #[error("one transformation parameter per interval is required, i.e. one less than the number of partition points")]
    TransformationCount,
    /// Fewer than two partition points were provided.
    #[error("at least two partition points are required")]
    TooFewPoints,
    /// The partition points are not strictly increasing.
    #[error("the partition points should be strictly increasing")]
    NonMonotonePoints,
    /// A partition point other than the outermost two is infinite.
    #[error("interior partition points should be finite")]
    InfiniteInteriorPoint,
    /// The efficiency target is not a finite number greater than one.
    #[error("the efficiency target should be finite and greater than one")]
    BadEfficiencyTarget,
    /// The transformation parameter of an unbounded interval is not greater
    /// than -1.
    #[error("the transformation parameter should be greater than -1 on an unbounded interval")]
    BadTailTransformation,
    /// An interval is neither monotone where required nor concave or convex
    /// after transformation, or it contains more than one inflection point.
    #[error("interval {index} admits no linear hat and squeeze; refine the initial partition")]
    UndefinedShape {
        /// Index of the offending interval at the time of classification.
        index: usize,
    },
    /// The hat of an interval does not enclose a finite area.
    #[error("interval {index} has a non-finite hat area")]
    NonFiniteHatArea {
        /// Index of the offending interval at the time of integration.
        index: usize,
    },
}
