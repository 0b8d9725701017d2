//! Headless simulation driver: integrates velocities into poses, updates
//! each shape, then queries collisions, tick by tick. This is the
//! transform-then-test ordering a real game loop must keep; rendering,
//! input, and frame pacing are a windowing library's problem, not the
//! engine's.
//!
//! Run with `RUST_LOG=info cargo run --example tick_loop` for per-event
//! logging.
use log::{debug, info};
use wireframe_collide::{outline_points, Pose, Shape, TransformStyle};

fn ship() -> Shape<f64> {
    Shape::from_points(outline_points![(10.0, 0.0), (-4.0, 3.0), (-4.0, -3.0)]).expect("ship")
}

fn asteroid() -> Shape<f64> {
    // lumpy octagon
    Shape::from_points(outline_points![
        (12.0, 0.0),
        (8.0, 9.0),
        (0.0, 13.0),
        (-9.0, 8.0),
        (-12.0, 0.0),
        (-8.0, -10.0),
        (0.0, -12.0),
        (9.0, -8.0),
    ])
    .expect("asteroid")
}

fn bullet() -> Shape<f64> {
    // two point streak, drawn and collided as a degenerate closed shape
    Shape::from_points(outline_points![(-2.0, 0.0), (2.0, 0.0)]).expect("bullet")
}

fn main() {
    env_logger::init();

    let mut player = ship();
    let mut rock = asteroid();
    let mut shot = bullet();
    let mut debris = ship();

    let mut player_pose = Pose::new(400.0, 320.0, 0.0);
    let mut rock_pose = Pose::new(700.0, 320.0, 0.0);
    let mut shot_pose = Pose::new(420.0, 320.0, 0.0);
    let mut debris_pose = Pose::new(200.0, 100.0, 0.0);

    // per tick velocities, the driver owns these
    let rock_vel = (-2.5, 0.0);
    let rock_spin = 0.04;
    let shot_vel = (6.0, 0.0);

    let mut shot_hit_tick = None;
    let mut rock_hit_tick = None;

    for tick in 0..240u32 {
        // integrate velocities into poses
        player_pose = player_pose.rotated_by(0.01);
        rock_pose = rock_pose
            .translated_by(rock_vel.0, rock_vel.1)
            .rotated_by(rock_spin);
        shot_pose = shot_pose.translated_by(shot_vel.0, shot_vel.1);
        debris_pose = debris_pose.rotated_by(0.1);

        // transform every shape for this tick...
        player.update(&player_pose);
        rock.update(&rock_pose);
        shot.update(&shot_pose);
        // the mirrored style gives debris its tumbling spin
        debris.update_styled(&debris_pose, TransformStyle::Mirrored);

        // ...then test
        if shot_hit_tick.is_none() && shot.collides_with(&rock) {
            info!("tick {tick}: shot hit the asteroid");
            shot_hit_tick = Some(tick);
        }
        if rock_hit_tick.is_none() && player.collides_with(&rock) {
            info!("tick {tick}: asteroid hit the ship");
            rock_hit_tick = Some(tick);
        }
        if shot_hit_tick.is_some() && rock_hit_tick.is_some() {
            break;
        }

        debug!(
            "tick {tick}: rock at ({:.1}, {:.1})",
            rock_pose.position.x, rock_pose.position.y
        );
    }

    println!(
        "shot hit at tick {:?}, asteroid reached the ship at tick {:?}",
        shot_hit_tick, rock_hit_tick
    );
}
