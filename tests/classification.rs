use flex::{determine_type, Flex, FlexError, FunType, Interval};

fn f0(x: f64) -> f64 {
    -0.5 * x * x
}
fn f1(x: f64) -> f64 {
    -x
}
fn f2(_x: f64) -> f64 {
    -1.0
}

#[test]
fn concave_interval_is_t4a() {
    // Log-density of a normal distribution, c = 0: concave everywhere.
    let iv = Interval::new(
        -1.0,
        1.0,
        0.0,
        (f0(-1.0), f1(-1.0), f2(-1.0)),
        (f0(1.0), f1(1.0), f2(1.0)),
    );
    assert_eq!(determine_type(&iv), FunType::T4a);
}

#[test]
fn convex_interval_is_t4b() {
    // Transformed density x² + 1 on a symmetric interval: convex, with the
    // endpoint derivatives straddling the vanishing secant slope.
    let iv = Interval::new(-1.0, 1.0, 1.0, (2.0, -2.0, 2.0), (2.0, 2.0, 2.0));
    assert_eq!(determine_type(&iv), FunType::T4b);
}

#[test]
fn steep_endpoints_with_inflection_are_t1() {
    // Both endpoint slopes above the secant slope: concave-convex with the
    // tangents bracketing the density.
    let iv = Interval::new(0.0, 1.0, 1.0, (0.1, 2.0, -1.0), (0.5, 2.0, 1.0));
    assert_eq!(determine_type(&iv), FunType::T1a);

    // The mirrored configuration.
    let iv = Interval::new(0.0, 1.0, 1.0, (0.5, -2.0, 1.0), (0.1, -2.0, -1.0));
    assert_eq!(determine_type(&iv), FunType::T1b);
}

#[test]
fn unbounded_interval_requires_monotone_concave_density() {
    let left_tail = Interval::new(
        f64::NEG_INFINITY,
        -1.0,
        0.0,
        (f64::NEG_INFINITY, 0.0, 0.0),
        (f0(-1.0), f1(-1.0), f2(-1.0)),
    );
    assert_eq!(determine_type(&left_tail), FunType::T4a);

    // Decreasing towards the bounded side: no valid hat exists.
    let bad_left_tail = Interval::new(
        f64::NEG_INFINITY,
        1.0,
        0.0,
        (f64::NEG_INFINITY, 0.0, 0.0),
        (f0(1.0), f1(1.0), f2(1.0)),
    );
    assert_eq!(determine_type(&bad_left_tail), FunType::Undefined);
}

#[test]
fn rejects_short_partition() {
    let r = Flex::new(f0, f1, f2, 0.0, &[0.0], 1.1);
    assert!(matches!(r, Err(FlexError::TooFewPoints)));
}

#[test]
fn rejects_mismatched_transformation_parameters() {
    let r = Flex::with_cs(f0, f1, f2, &[0.0, 0.0], &[-1.0, 1.0], 1.1);
    assert!(matches!(r, Err(FlexError::TransformationCount)));
}

#[test]
fn rejects_non_monotone_points() {
    let r = Flex::new(f0, f1, f2, 0.0, &[-1.0, 1.0, 0.5], 1.1);
    assert!(matches!(r, Err(FlexError::NonMonotonePoints)));
}

#[test]
fn rejects_infinite_interior_point() {
    let r = Flex::new(f0, f1, f2, 0.0, &[-1.0, f64::INFINITY, 2.0], 1.1);
    assert!(matches!(r, Err(FlexError::InfiniteInteriorPoint)));

    // Infinite outermost points are fine.
    let r = Flex::new(
        f0,
        f1,
        f2,
        0.0,
        &[f64::NEG_INFINITY, -1.0, 1.0, f64::INFINITY],
        1.1,
    );
    assert!(r.is_ok());
}

#[test]
fn rejects_bad_efficiency_target() {
    assert!(matches!(
        Flex::new(f0, f1, f2, 0.0, &[-1.0, 1.0], 1.0),
        Err(FlexError::BadEfficiencyTarget)
    ));
    assert!(matches!(
        Flex::new(f0, f1, f2, 0.0, &[-1.0, 1.0], f64::INFINITY),
        Err(FlexError::BadEfficiencyTarget)
    ));
}

#[test]
fn rejects_bad_tail_transformation() {
    let r = Flex::new(f0, f1, f2, -1.5, &[f64::NEG_INFINITY, 0.0, 1.0], 1.1);
    assert!(matches!(r, Err(FlexError::BadTailTransformation)));
}

#[test]
fn rejects_partition_with_undefined_shape() {
    // The normal log-density decreases on [1, ∞), so an unbounded left
    // interval ending there is not monotone increasing.
    let r = Flex::new(f0, f1, f2, 0.0, &[f64::NEG_INFINITY, 1.0, 2.0], 1.1);
    assert!(matches!(r, Err(FlexError::UndefinedShape { .. })));
}
