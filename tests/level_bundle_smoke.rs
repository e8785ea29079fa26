use std::fs;

use tumble_engine::{BodySpec, GameConfig, GameManager, LevelBundle, PhysicsEngine, RecordingCanvas};

#[test]
fn level_bundle_smoke_parses_and_loads_every_level() {
    let json = fs::read_to_string("levels/levels.json").expect("levels.json should exist");

    let levels = LevelBundle::from_bundle_json(&json).expect("levels.json should parse");
    assert!(levels.len() >= 3);
    assert_eq!(levels[0].name, "First drop");
    assert_eq!(levels[0].bodies[0], BodySpec::dynamic(100.0, 100.0, 50.0, 50.0));

    // The bundled file starts with the same levels the binary ships with.
    let builtin = LevelBundle::builtin();
    assert_eq!(levels[..builtin.len()], builtin[..]);

    let count = levels.len();
    let canvas = RecordingCanvas::new(600.0, 600.0);
    let mut manager =
        GameManager::new(canvas, levels, GameConfig::default()).expect("manager should build");

    for index in 0..count {
        manager.load_level(index).expect("level should load");
        let world = manager.world().expect("world is loaded");
        // Four walls plus the level's bodies.
        assert_eq!(world.engine().bodies().len(), 4 + manager.levels()[index].bodies.len());
    }
}
