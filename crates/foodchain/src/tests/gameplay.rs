//! End-to-end gameplay: whole levels driven through the application loop

use platform_engine::assets::TextureCache;
use platform_engine::backend::{BackendEvent, HeadlessBackend};
use platform_engine::config::LevelConfig;
use platform_engine::prelude::*;

use crate::level::{LevelId, LevelScene};

/// A level whose single food sits on the player spawn: won on the first update
fn winnable(level: LevelId) -> Box<dyn Scene> {
    let config = LevelConfig::from_pairs(&[("food1_x", 220), ("food1_y", 460)]);
    Box::new(LevelScene::with_config(level, config))
}

#[test]
fn test_run_progresses_through_all_three_levels() {
    let mut app = Application::new(640, 480);
    app.register_next_level(Box::new(|| winnable(LevelId::Two)));
    app.register_next_level(Box::new(|| winnable(LevelId::Three)));
    app.switch_scene(winnable(LevelId::One)).unwrap();

    // Each level wins immediately; the run must terminate after the third.
    app.run(60.0).unwrap();
}

#[test]
fn test_quit_event_ends_the_run_without_progression() {
    let mut backend = HeadlessBackend::new();
    backend.push_event(BackendEvent::Quit);
    let mut app = Application::with_backend(640, 480, Box::new(backend));

    // No food anywhere near the player: the level can only end by quitting.
    let config = LevelConfig::from_pairs(&[("food1_x", 0), ("food1_y", 0)]);
    app.switch_scene(Box::new(LevelScene::with_config(LevelId::One, config)))
        .unwrap();
    app.run(60.0).unwrap();
}

#[test]
fn test_losing_level_does_not_advance() {
    let mut app = Application::new(640, 480);
    app.register_next_level(Box::new(|| winnable(LevelId::Two)));

    // An enemy on the spawn point loses the level on the first update.
    let config = LevelConfig::from_pairs(&[
        ("enemy1_x", 220),
        ("enemy1_y", 460),
        ("food1_x", 0),
        ("food1_y", 0),
    ]);
    app.switch_scene(Box::new(LevelScene::with_config(LevelId::One, config)))
        .unwrap();
    app.run(60.0).unwrap();
}

#[test]
fn test_all_foods_consumed_at_start_wins_on_first_update() {
    let mut assets = TextureCache::new();
    let config = LevelConfig::from_pairs(&[("food1_x", 0), ("food1_y", 0)]);
    let mut scene = LevelScene::with_config(LevelId::One, config);
    scene.init(&mut assets).unwrap();

    for food in scene.foods_mut() {
        food.set_renderable(false);
    }
    scene.update(1.0 / 60.0);

    assert!(scene.is_win());
    assert!(scene.is_completed());
    assert_eq!(scene.score(), 0.0);
}

#[test]
fn test_falling_player_lands_on_a_platform() {
    let mut assets = TextureCache::new();
    let mut scene = LevelScene::with_config(LevelId::One, LevelConfig::default());
    scene.init(&mut assets).unwrap();

    {
        let player = scene.player_mut().unwrap();
        // Directly above the platform at (200, 200).
        player.move_to(250.0, 140.0);
        player.set_should_fall(true);
    }

    let dt = 1.0 / 60.0;
    let mut landed = false;
    for _ in 0..120 {
        scene.update(dt);
        let player = scene.player().unwrap();
        if player.is_on_ground() {
            let height = player.entity().sprite().unwrap().height();
            assert_eq!(player.entity().sprite().unwrap().y(), 200.0 - height);
            assert_eq!(player.vertical_speed(), 0.0);
            landed = true;
            break;
        }
    }
    assert!(landed, "player never landed");
}

#[test]
fn test_player_falls_off_a_platform_edge() {
    let mut assets = TextureCache::new();
    let mut scene = LevelScene::with_config(LevelId::One, LevelConfig::default());
    scene.init(&mut assets).unwrap();

    {
        let player = scene.player_mut().unwrap();
        // Past the right edge of the platform at (0, 350, 200, 20).
        player.move_to(210.0, 318.0);
    }

    let dt = 1.0 / 60.0;
    scene.update(dt);
    scene.update(dt);

    let player = scene.player().unwrap();
    assert!(!player.is_on_ground());
    assert!(player.vertical_speed() > 0.0);
}
