use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, FRAC_PI_8};
use wireframe_collide::core::math::{
    seg_seg_cross_orient, seg_seg_cross_slope, seg_seg_cross_slope_eps, vec2, OrientCross,
    SegSegCross, SlopeInterceptCross, Vector2,
};

const TEST_ROTATION_ANGLES: &[f64] = &[FRAC_PI_8, FRAC_PI_6, FRAC_PI_4, FRAC_PI_3, FRAC_PI_2];

/// Asserts both algorithms agree on `expected`, in both argument orders.
fn assert_cross_both(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
    expected: bool,
) {
    let algorithms: [(&str, &dyn SegSegCross<f64>); 2] = [
        ("orientation", &OrientCross),
        ("slope/intercept", &SlopeInterceptCross::default()),
    ];

    for (name, algorithm) in algorithms {
        assert_eq!(
            algorithm.segs_cross(a1, a2, b1, b2),
            expected,
            "{} algorithm, a vs b",
            name
        );
        // crossing is symmetric in the two segments
        assert_eq!(
            algorithm.segs_cross(b1, b2, a1, a2),
            expected,
            "{} algorithm, b vs a",
            name
        );
    }
}

#[test]
fn diagonal_crossing() {
    // cross at (1, 1)
    assert_cross_both(
        vec2(0.0, 0.0),
        vec2(2.0, 2.0),
        vec2(0.0, 2.0),
        vec2(2.0, 0.0),
        true,
    );
}

#[test]
fn diagonal_crossing_survives_rotation() {
    let a1 = vec2(0.0, 0.0);
    let a2 = vec2(2.0, 2.0);
    let b1 = vec2(0.0, 2.0);
    let b2 = vec2(2.0, 0.0);
    let pivot = vec2(1.0, 1.0);

    for &angle in TEST_ROTATION_ANGLES {
        assert_cross_both(
            a1.rotate_about(pivot, angle),
            a2.rotate_about(pivot, angle),
            b1.rotate_about(pivot, angle),
            b2.rotate_about(pivot, angle),
            true,
        );
    }
}

#[test]
fn parallel_horizontal_no_crossing() {
    assert_cross_both(
        vec2(0.0, 0.0),
        vec2(1.0, 0.0),
        vec2(0.0, 1.0),
        vec2(1.0, 1.0),
        false,
    );
}

#[test]
fn parallel_vertical_no_crossing() {
    assert_cross_both(
        vec2(0.0, 0.0),
        vec2(0.0, 2.0),
        vec2(1.0, 0.0),
        vec2(1.0, 2.0),
        false,
    );
}

#[test]
fn collinear_overlap_no_crossing() {
    // overlapping collinear segments are not a proper crossing under either
    // algorithm (parallel assumption / zero orientation values)
    assert_cross_both(
        vec2(0.0, 0.0),
        vec2(2.0, 2.0),
        vec2(1.0, 1.0),
        vec2(3.0, 3.0),
        false,
    );
}

#[test]
fn coincident_vertical_segments_no_crossing() {
    // same supporting vertical line, overlapping y ranges: the bounding box
    // overlap passes but both classify vertical (parallel assumption)
    assert_cross_both(
        vec2(0.0, 0.0),
        vec2(0.0, 2.0),
        vec2(0.0, 1.0),
        vec2(0.0, 3.0),
        false,
    );
}

#[test]
fn coincident_horizontal_segments_no_crossing() {
    assert_cross_both(
        vec2(0.0, 0.0),
        vec2(2.0, 0.0),
        vec2(1.0, 0.0),
        vec2(3.0, 0.0),
        false,
    );
}

#[test]
fn vertical_crosses_sloped() {
    // vertical through x = 1, sloped segment passes it at y = 0
    assert_cross_both(
        vec2(1.0, -1.0),
        vec2(1.0, 1.0),
        vec2(0.0, -0.5),
        vec2(2.0, 0.5),
        true,
    );
}

#[test]
fn vertical_misses_sloped() {
    // the sloped segment meets the line x = 1 below the vertical segment's
    // y range
    assert_cross_both(
        vec2(1.0, 0.1),
        vec2(1.0, 1.0),
        vec2(0.0, -0.5),
        vec2(2.0, 0.5),
        false,
    );
}

#[test]
fn vertical_crosses_horizontal() {
    assert_cross_both(
        vec2(1.0, -1.0),
        vec2(1.0, 1.0),
        vec2(0.0, 0.0),
        vec2(2.0, 0.0),
        true,
    );
}

#[test]
fn horizontal_crosses_sloped() {
    assert_cross_both(
        vec2(-1.0, 0.0),
        vec2(1.0, 0.0),
        vec2(-0.5, -1.0),
        vec2(0.5, 1.0),
        true,
    );
}

#[test]
fn disjoint_bounding_boxes_no_crossing() {
    assert_cross_both(
        vec2(0.0, 0.0),
        vec2(1.0, 1.0),
        vec2(5.0, 5.0),
        vec2(6.0, 7.0),
        false,
    );
}

#[test]
fn zero_length_segment_no_crossing() {
    // a point lying on a segment is degenerate geometry, not a crossing
    assert_cross_both(
        vec2(1.0, 1.0),
        vec2(1.0, 1.0),
        vec2(0.0, 0.0),
        vec2(2.0, 2.0),
        false,
    );
}

#[test]
fn endpoint_touch_orient_no_crossing() {
    // T touch: b ends exactly on segment a. The orientation test requires
    // strictly opposite sides, an exactly collinear triple is no crossing.
    assert!(!seg_seg_cross_orient(
        vec2(0.0, 0.0),
        vec2(2.0, 0.0),
        vec2(1.0, -1.0),
        vec2(1.0, 0.0),
    ));
}

#[test]
fn endpoint_touch_slope_asserts_crossing() {
    // same T touch under the slope/intercept alternative: the bounding
    // boxes overlap and the segments classify vertical/horizontal, so the
    // crossing is asserted directly. Divergent edge behavior is why this
    // algorithm is the documented, less robust alternative.
    assert!(seg_seg_cross_slope(
        vec2(0.0, 0.0),
        vec2(2.0, 0.0),
        vec2(1.0, -1.0),
        vec2(1.0, 0.0),
    ));
}

#[test]
fn near_vertical_classified_by_tolerance() {
    // run of 1e-8 over a rise of 2 is vertical under the default relative
    // tolerance and crosses the horizontal segment
    let a1 = vec2(0.0, -1.0);
    let a2 = vec2(1e-8, 1.0);
    let b1 = vec2(-1.0, 0.0);
    let b2 = vec2(1.0, 0.0);
    assert!(seg_seg_cross_slope(a1, a2, b1, b2));

    // with a zero tolerance the same segment carries a (huge) usable slope
    // and the general solve finds the same crossing
    assert!(seg_seg_cross_slope_eps(a1, a2, b1, b2, 0.0));
}

#[test]
fn custom_tolerance_instance() {
    let loose = SlopeInterceptCross::new(1e-3);
    // run of 1e-4 over a rise of 1 classifies vertical under the loose
    // tolerance
    assert!(loose.segs_cross(
        vec2(0.5, 0.0),
        vec2(0.5001, 1.0),
        vec2(0.0, 0.5),
        vec2(1.0, 0.5),
    ));
}
