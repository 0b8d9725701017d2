use std::f64::consts::{FRAC_PI_3, FRAC_PI_2, TAU};
use wireframe_collide::{
    assert_fuzzy_eq, outline_points, transform_outline, transform_outline_styled, FuzzyEq, Pose,
    Shape, TransformStyle, Vector2,
};

fn ship_outline() -> Vec<Vector2<f64>> {
    outline_points![(10.0, 0.0), (-4.0, 3.0), (-4.0, -3.0)]
}

#[test]
fn construction_starts_at_zero_pose() {
    let shape = Shape::from_points(ship_outline()).expect("outline");
    assert_eq!(shape.vertex_count(), 3);
    for (b, c) in shape.base().iter().zip(shape.current()) {
        assert_fuzzy_eq!(*b, *c);
    }
}

#[test]
fn identity_pose_is_identity() {
    let mut shape = Shape::from_points(ship_outline()).expect("outline");
    shape.update(&Pose::identity());
    for (b, c) in shape.base().iter().zip(shape.current()) {
        assert_fuzzy_eq!(*b, *c);
    }
}

#[test]
fn rotation_composes_to_identity() {
    let base = ship_outline();
    let mut rotated = base.clone();
    let mut restored = base.clone();

    transform_outline(&base, &Pose::new(0.0, 0.0, FRAC_PI_3), &mut rotated);
    transform_outline(&rotated, &Pose::new(0.0, 0.0, -FRAC_PI_3), &mut restored);

    for (b, r) in base.iter().zip(&restored) {
        assert_fuzzy_eq!(*b, *r);
    }
}

#[test]
fn scale_is_componentwise_linear() {
    let mut shape = Shape::from_points(ship_outline()).expect("outline");
    shape.update(&Pose::with_scale(0.0, 0.0, 0.0, 2.5));
    for (b, c) in shape.base().iter().zip(shape.current()) {
        assert_fuzzy_eq!(b.scale(2.5), *c);
    }
}

#[test]
fn translation_offsets_every_vertex() {
    let mut shape = Shape::from_points(ship_outline()).expect("outline");
    shape.update(&Pose::new(400.0, 320.0, 0.0));
    for (b, c) in shape.base().iter().zip(shape.current()) {
        assert_fuzzy_eq!(*b + Vector2::new(400.0, 320.0), *c);
    }
}

#[test]
fn quarter_turn_is_clockwise_on_screen() {
    // screen convention: rotating (1, 0) by +PI/2 lands on (0, 1), which is
    // downward on screen, i.e. clockwise
    let base = outline_points![(1.0, 0.0), (-1.0, 0.0)];
    let mut out = base.clone();
    transform_outline(&base, &Pose::new(0.0, 0.0, FRAC_PI_2), &mut out);
    assert_fuzzy_eq!(out[0], Vector2::new(0.0, 1.0));
    assert_fuzzy_eq!(out[1], Vector2::new(0.0, -1.0));
}

#[test]
fn mirrored_flips_the_cosine_term() {
    let base = ship_outline();
    let pose = Pose::new(7.0, -2.0, FRAC_PI_3);
    let (s, c) = (FRAC_PI_3.sin(), FRAC_PI_3.cos());

    let mut standard = base.clone();
    let mut mirrored = base.clone();
    transform_outline_styled(&base, &pose, TransformStyle::Standard, &mut standard);
    transform_outline_styled(&base, &pose, TransformStyle::Mirrored, &mut mirrored);

    for ((b, std_v), mir_v) in base.iter().zip(&standard).zip(&mirrored) {
        // x components agree, the mirrored y carries `x*sin - y*cos`
        assert_fuzzy_eq!(std_v.x, mir_v.x);
        assert_fuzzy_eq!(std_v.y, b.x * s + b.y * c + pose.position.y);
        assert_fuzzy_eq!(mir_v.y, b.x * s - b.y * c + pose.position.y);
    }
}

#[test]
fn standard_is_the_default_style() {
    assert_eq!(TransformStyle::default(), TransformStyle::Standard);
}

#[test]
fn update_keeps_outline_lengths_equal() {
    let mut shape = Shape::from_points(ship_outline()).expect("outline");
    for tick in 0..10 {
        let angle = 0.3 * tick as f64;
        shape.update(&Pose::new(tick as f64, 2.0 * tick as f64, angle));
        assert_eq!(shape.base().len(), shape.current().len());
    }
}

#[test]
fn pose_rotated_by_accumulates_normalized() {
    let mut pose: Pose<f64> = Pose::identity();
    for _ in 0..100 {
        pose = pose.rotated_by(0.5);
        assert!(pose.angle >= 0.0 && pose.angle <= TAU);
    }
    // 100 turns of 0.5 rad wrap to 50 mod 2PI
    assert_fuzzy_eq!(pose.angle, 50.0_f64 % TAU, 1e-9);
}

#[test]
fn pose_translated_by_moves_position_only() {
    let pose = Pose::with_scale(1.0, 2.0, 0.25, 3.0).translated_by(4.0, -1.0);
    assert_fuzzy_eq!(pose.position, Vector2::new(5.0, 1.0));
    assert_fuzzy_eq!(pose.angle, 0.25);
    assert_fuzzy_eq!(pose.scale, 3.0);
}
