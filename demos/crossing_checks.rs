//! Runs both segment crossing algorithms over a set of fixtures and prints
//! where they agree and where the tolerance based alternative diverges.
use wireframe_collide::core::math::vec2;
use wireframe_collide::{OrientCross, SegSegCross, SlopeInterceptCross, Vector2};

type Fixture = (
    &'static str,
    Vector2<f64>,
    Vector2<f64>,
    Vector2<f64>,
    Vector2<f64>,
);

fn main() {
    let fixtures: [Fixture; 6] = [
        (
            "diagonals crossing at (1, 1)",
            vec2(0.0, 0.0),
            vec2(2.0, 2.0),
            vec2(0.0, 2.0),
            vec2(2.0, 0.0),
        ),
        (
            "parallel horizontals",
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(0.0, 1.0),
            vec2(1.0, 1.0),
        ),
        (
            "vertical through sloped",
            vec2(1.0, -1.0),
            vec2(1.0, 1.0),
            vec2(0.0, -0.5),
            vec2(2.0, 0.5),
        ),
        (
            "collinear overlap",
            vec2(0.0, 0.0),
            vec2(2.0, 2.0),
            vec2(1.0, 1.0),
            vec2(3.0, 3.0),
        ),
        (
            "T touch on a horizontal",
            vec2(0.0, 0.0),
            vec2(2.0, 0.0),
            vec2(1.0, -1.0),
            vec2(1.0, 0.0),
        ),
        (
            "far apart",
            vec2(0.0, 0.0),
            vec2(1.0, 1.0),
            vec2(50.0, 50.0),
            vec2(51.0, 52.0),
        ),
    ];

    let orient = OrientCross;
    let slope = SlopeInterceptCross::default();

    println!("fixture | orientation | slope/intercept");
    for (label, a1, a2, b1, b2) in fixtures {
        let by_orient = orient.segs_cross(a1, a2, b1, b2);
        let by_slope = slope.segs_cross(a1, a2, b1, b2);
        let note = if by_orient == by_slope {
            ""
        } else {
            "  <- diverges"
        };
        println!("{label}: {by_orient} | {by_slope}{note}");
    }

    // the T touch is the interesting divergence: the orientation test wants
    // strictly opposite sides, the slope/intercept alternative asserts a
    // crossing for perpendicular axis aligned segments once the bounding
    // boxes overlap
    assert!(!orient.segs_cross(vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(1.0, -1.0), vec2(1.0, 0.0)));
    assert!(slope.segs_cross(vec2(0.0, 0.0), vec2(2.0, 0.0), vec2(1.0, -1.0), vec2(1.0, 0.0)));

    println!("crossing checks completed");
}
