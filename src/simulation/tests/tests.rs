use super::*;
use crate::domain::BodySpec;
use std::f64::consts::{PI, TAU};

fn crate_level() -> Level {
    Level {
        name: "test".to_string(),
        bodies: vec![BodySpec::dynamic(100.0, 100.0, 20.0, 20.0)],
    }
}

fn world() -> (World<RecordingCanvas>, RecordingCanvas) {
    let canvas = RecordingCanvas::new(600.0, 600.0);
    let log = canvas.clone();
    let mut world = World::new(canvas, &crate_level(), &GameConfig::default());
    world.start();
    (world, log)
}

fn dynamic_body<C: Canvas2d>(world: &World<C>) -> RigidBody {
    world
        .engine()
        .bodies()
        .iter()
        .find(|b| !b.is_static)
        .cloned()
        .expect("level has a dynamic body")
}

/// Rotate and tick well past the animation's end.
fn rotate_fully<C: Canvas2d, E: PhysicsEngine>(world: &mut World<C, E>, clockwise: bool, at: f64) {
    world.rotate(clockwise, at).expect("world should be idle");
    world.tick(at + 1100.0);
}

#[test]
fn new_world_is_idle_with_gravity_down() {
    let (world, _log) = world();

    assert_eq!(world.direction(), Direction::Down);
    assert_eq!(world.state(), RotationState::Idle);
    assert_eq!(world.gravity(), Vec2::new(0.0, 1.0));
    assert!(world.stepping_enabled());
    assert_eq!(world.canvas_rotation(), 0.0);
}

#[test]
fn world_adds_walls_and_level_bodies() {
    let (world, _log) = world();
    let bodies = world.engine().bodies();

    assert_eq!(bodies.len(), 5);
    assert_eq!(bodies.iter().filter(|b| b.is_static).count(), 4);

    // Level coordinates are relative to the level square.
    let origin = world.level_frame().origin();
    let body = dynamic_body(&world);
    assert_eq!(body.pos, Vec2::new(100.0 + origin.x, 100.0 + origin.y));
}

#[test]
fn clockwise_rotation_pauses_physics_then_turns_gravity_left() {
    let (mut world, _log) = world();

    let ticket = world.rotate(true, 0.0).expect("idle world rotates");
    assert_eq!(
        world.state(),
        RotationState::Rotating {
            ticket,
            clockwise: true
        }
    );
    assert!(!world.stepping_enabled());

    world.tick(500.0);
    assert!(world.is_rotating());
    assert_eq!(world.direction(), Direction::Down);
    assert_eq!(world.gravity(), Vec2::new(0.0, 1.0));
    assert!(world.canvas_rotation() > 0.0 && world.canvas_rotation() < FRAC_PI_2);

    world.tick(1100.0);
    assert_eq!(world.state(), RotationState::Idle);
    assert_eq!(world.direction(), Direction::Left);
    assert_eq!(world.gravity(), Vec2::new(-1.0, 0.0));
    assert!(world.stepping_enabled());
    assert_eq!(world.canvas_rotation(), FRAC_PI_2);
}

#[test]
fn counter_clockwise_rotation_turns_gravity_right() {
    let (mut world, _log) = world();
    rotate_fully(&mut world, false, 0.0);

    assert_eq!(world.direction(), Direction::Right);
    assert_eq!(world.gravity(), Vec2::new(1.0, 0.0));
    assert_eq!(world.canvas_rotation(), -FRAC_PI_2);
}

#[test]
fn rotate_while_rotating_is_rejected_without_side_effects() {
    let (mut world, _log) = world();
    world.rotate(true, 0.0).expect("first rotation starts");

    let state = world.state();
    let target = world.pending_rotation_target();

    assert_eq!(world.rotate(false, 10.0), Err(GameError::AlreadyRotating));
    assert_eq!(world.rotate(true, 20.0), Err(GameError::AlreadyRotating));

    assert_eq!(world.state(), state);
    assert_eq!(world.pending_rotation_target(), target);
    assert!(!world.stepping_enabled());

    // The first rotation still lands where it was headed.
    world.tick(1100.0);
    assert_eq!(world.direction(), Direction::Left);
    assert_eq!(world.canvas_rotation(), FRAC_PI_2);
}

#[test]
fn four_clockwise_rotations_return_to_down() {
    let (mut world, _log) = world();
    let mut seen = Vec::new();

    for i in 0..4 {
        rotate_fully(&mut world, true, i as f64 * 2000.0);
        seen.push(world.direction());
    }

    assert_eq!(
        seen,
        vec![Direction::Left, Direction::Up, Direction::Right, Direction::Down]
    );
    assert_eq!(world.gravity(), Vec2::new(0.0, 1.0));
    assert!((world.canvas_rotation() - TAU).abs() < 1e-9);
}

#[test]
fn clockwise_then_counter_clockwise_restores_direction() {
    let (mut world, _log) = world();
    rotate_fully(&mut world, true, 0.0);
    rotate_fully(&mut world, false, 2000.0);

    assert_eq!(world.direction(), Direction::Down);
    assert_eq!(world.canvas_rotation(), 0.0);
}

#[test]
fn no_physics_steps_happen_during_the_animation() {
    let (mut world, _log) = world();

    // Let the crate fall for a bit first.
    let mut t = 0.0;
    while t < 200.0 {
        world.tick(t);
        t += 16.0;
    }
    let steps_before = world.engine().steps();
    let pos_before = dynamic_body(&world).pos;
    assert!(steps_before > 0);

    world.rotate(true, t).expect("idle world rotates");
    let started = t;
    while t <= started + 1000.0 {
        world.tick(t);
        assert!(world.is_rotating(), "finished early at {}", t - started);
        assert!(!world.stepping_enabled());
        t += 16.0;
    }
    assert_eq!(world.engine().steps(), steps_before);
    assert_eq!(dynamic_body(&world).pos, pos_before);

    // Completion re-enables stepping; the runner re-primes its clock first.
    world.tick(started + 1100.0);
    assert!(!world.is_rotating());
    assert_eq!(world.tick(started + 1140.0), 2);
    assert!(world.engine().steps() > steps_before);
}

#[test]
fn bodies_fall_in_the_gravity_direction() {
    let (mut world, _log) = world();
    let start = dynamic_body(&world).pos;

    let mut t = 0.0;
    while t < 500.0 {
        world.tick(t);
        t += 16.0;
    }
    let fallen = dynamic_body(&world).pos;
    assert!(fallen.y > start.y);
    assert_eq!(fallen.x, start.x);

    rotate_fully(&mut world, true, t);
    t += 1100.0;
    let end = t + 500.0;
    while t < end {
        world.tick(t);
        t += 16.0;
    }
    // Gravity now points left.
    assert!(dynamic_body(&world).pos.x < fallen.x);
}

#[test]
fn small_bodies_stay_inside_the_walls() {
    let level = Level {
        name: "pebble".to_string(),
        bodies: vec![BodySpec::dynamic(100.0, 100.0, 5.0, 5.0)],
    };
    let mut world = World::new(
        RecordingCanvas::new(600.0, 600.0),
        &level,
        &GameConfig::default(),
    );
    world.start();

    let frame = world.level_frame();
    let floor = frame.centre.y + frame.size / 2.0 - 1.0;

    let mut t = 0.0;
    while t < 5000.0 {
        world.tick(t);
        t += 16.0;
    }
    let body = dynamic_body(&world);
    assert!((body.pos.y - (floor - 2.5)).abs() < 1e-3, "y = {}", body.pos.y);

    // And along the new gravity after a turn.
    rotate_fully(&mut world, true, t);
    t += 1100.0;
    let end = t + 5000.0;
    while t < end {
        world.tick(t);
        t += 16.0;
    }
    let left_wall = frame.centre.x - frame.size / 2.0 + 1.0;
    let body = dynamic_body(&world);
    assert!((body.pos.x - (left_wall + 2.5)).abs() < 1e-3, "x = {}", body.pos.x);
}

#[test]
fn gravity_toggle_zeroes_and_restores_gravity() {
    let (mut world, _log) = world();

    world.set_gravity_enabled(false);
    assert_eq!(world.gravity(), Vec2::zero());
    assert!(!world.gravity_enabled());

    world.set_gravity_enabled(true);
    assert_eq!(world.gravity(), Vec2::new(0.0, 1.0));
}

#[test]
fn gravity_toggle_during_rotation_lands_on_completion() {
    let (mut world, _log) = world();
    world.rotate(true, 0.0).expect("idle world rotates");

    world.set_gravity_enabled(false);
    assert_eq!(world.gravity(), Vec2::new(0.0, 1.0));

    world.tick(1100.0);
    assert_eq!(world.gravity(), Vec2::zero());

    world.set_gravity_enabled(true);
    assert_eq!(world.gravity(), Vec2::new(-1.0, 0.0));
}

#[test]
fn render_draws_only_while_running() {
    let canvas = RecordingCanvas::new(600.0, 600.0);
    let log = canvas.clone();
    let mut world: World<RecordingCanvas> =
        World::new(canvas, &crate_level(), &GameConfig::default());

    world.render();
    assert!(log.commands().is_empty());

    world.start();
    world.render();
    let commands = log.take_commands();
    assert_eq!(commands.first(), Some(&DrawCommand::Save));
    assert_eq!(commands.last(), Some(&DrawCommand::Restore));
    // 5 bodies, each a move plus four lines.
    let moves = commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::MoveTo(..)))
        .count();
    assert_eq!(moves, 5);
}

#[test]
fn render_uses_the_current_canvas_rotation() {
    let (mut world, log) = world();
    rotate_fully(&mut world, true, 0.0);

    log.take_commands();
    world.render();
    assert!(log.commands().contains(&DrawCommand::Rotate(FRAC_PI_2)));
}

#[test]
fn dispose_stops_everything_and_returns_the_canvas() {
    let (mut world, log) = world();
    world.render();

    let canvas = world.dispose();
    assert_eq!(canvas.width(), 600.0);
    // Same shared log.
    assert_eq!(canvas.commands(), log.commands());
}

/// Engine double that only records what the world asks of it.
#[derive(Default)]
struct ScriptedEngine {
    bodies: Vec<RigidBody>,
    gravity: Vec2,
    enabled: bool,
    enabled_log: Vec<bool>,
}

impl PhysicsEngine for ScriptedEngine {
    fn add_body(&mut self, body: RigidBody) -> u32 {
        self.bodies.push(body);
        self.bodies.len() as u32
    }

    fn remove_body(&mut self, _id: u32) -> bool {
        false
    }

    fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    fn step(&mut self) {}

    fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.enabled_log.push(enabled);
    }

    fn clear(&mut self) {
        self.bodies.clear();
    }
}

#[test]
fn world_drives_any_physics_engine() {
    let mut stale = ScriptedEngine::default();
    stale.add_body(RigidBody::new_rect(0.0, 0.0, 1.0, 1.0, 0));

    let canvas = RecordingCanvas::new(400.0, 300.0);
    let mut world = World::with_engine(canvas, stale, &crate_level(), &GameConfig::default());
    world.start();

    // Cleared first, then walls plus the level.
    assert_eq!(world.engine().bodies().len(), 5);

    rotate_fully(&mut world, false, 0.0);
    assert_eq!(world.engine().enabled_log, vec![true, false, true]);
    assert_eq!(world.gravity(), Vec2::new(1.0, 0.0));
    assert!((world.canvas_rotation() + PI / 2.0).abs() < 1e-12);
}
