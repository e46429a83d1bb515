//! Food chain entry point

use platform_engine::prelude::*;

use foodchain::level::{LevelId, LevelScene};

fn main() -> Result<(), AppError> {
    platform_engine::foundation::logging::init();

    let settings = Settings::load_or_default("settings.toml");
    log::info!(
        "starting Food Chain ({}x{} @ {} fps)",
        settings.window_width,
        settings.window_height,
        settings.target_fps
    );

    let mut app = Application::new(settings.window_width, settings.window_height);
    app.register_next_level(Box::new(|| Box::new(LevelScene::new(LevelId::Two))));
    app.register_next_level(Box::new(|| Box::new(LevelScene::new(LevelId::Three))));
    app.switch_scene(Box::new(LevelScene::new(LevelId::One)))?;
    app.run(settings.target_fps)
}
