//! Application: top-level loop tying backend, assets, and scenes together

use thiserror::Error;

use crate::assets::TextureCache;
use crate::backend::{HeadlessBackend, PresentationBackend};
use crate::config::ConfigError;
use crate::foundation::time::FrameClock;
use crate::scene::{Scene, SceneError, SceneFactory, SceneManager};

/// Top-level application errors
#[derive(Debug, Error)]
pub enum AppError {
    /// A scene failed to initialize
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// A configuration file failed to load or parse
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The game application: one backend, one texture cache, one scene manager
///
/// Single-threaded by construction. Each frame runs update, input, render,
/// and an end-of-frame delay in sequence on the calling thread.
pub struct Application {
    backend: Box<dyn PresentationBackend>,
    assets: TextureCache,
    scene_manager: SceneManager,
    width: u32,
    height: u32,
}

impl Application {
    /// Create an application with the default backend
    ///
    /// No windowing backend ships with the engine, so this runs headless:
    /// the loop, input polling, and timing all work, rendering goes nowhere.
    pub fn new(width: u32, height: u32) -> Self {
        log::info!("no presentation backend configured, running headless");
        Self::with_backend(width, height, Box::new(HeadlessBackend::new()))
    }

    /// Create an application driving the given backend
    pub fn with_backend(
        width: u32,
        height: u32,
        backend: Box<dyn PresentationBackend>,
    ) -> Self {
        log::info!("application created ({width}x{height})");
        Self {
            backend,
            assets: TextureCache::new(),
            scene_manager: SceneManager::new(),
            width,
            height,
        }
    }

    /// Viewport width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Viewport height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Make `scene` the active scene
    pub fn switch_scene(&mut self, scene: Box<dyn Scene>) -> Result<(), AppError> {
        self.scene_manager.switch_scene(scene, &mut self.assets)?;
        Ok(())
    }

    /// Register a factory for the next level in the progression
    pub fn register_next_level(&mut self, factory: SceneFactory) {
        self.scene_manager.register_next_level(factory);
    }

    /// The texture cache (for tests and tooling)
    pub fn assets(&self) -> &TextureCache {
        &self.assets
    }

    /// Run the main loop at `target_fps` until the active scene completes
    ///
    /// A scene that completes as a win rolls over into the next registered
    /// level; a loss or quit ends the run. The frame order is update, input,
    /// render, then a delay for the rest of the frame budget.
    pub fn run(&mut self, target_fps: f32) -> Result<(), AppError> {
        let mut clock = FrameClock::new(target_fps, self.backend.ticks_ms());
        log::info!("entering main loop at {target_fps} fps");

        while !self.scene_manager.current_completed() {
            let frame_start = self.backend.ticks_ms();

            self.scene_manager.update(clock.delta_time());
            self.scene_manager
                .handle_input(clock.delta_time(), self.backend.as_mut());
            self.scene_manager.render(self.backend.as_mut());

            let current = self.backend.ticks_ms();
            let elapsed = current - frame_start;
            self.backend.delay(clock.remaining_delay_ms(elapsed));
            clock.frame_finished(current, self.backend.ticks_ms());

            if self.scene_manager.current_won() {
                self.scene_manager.load_next_level(&mut self.assets)?;
                if self.scene_manager.current_completed() {
                    // Past the last level: the run ends on the final win.
                    break;
                }
            }
        }

        log::info!("main loop finished");
        self.assets.shutdown();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendEvent;

    /// Scene that completes (as a win or not) after a fixed number of updates
    struct CountdownScene {
        updates_left: u32,
        win: bool,
        done: bool,
    }

    impl CountdownScene {
        fn new(updates: u32, win: bool) -> Self {
            Self {
                updates_left: updates,
                win,
                done: false,
            }
        }
    }

    impl Scene for CountdownScene {
        fn init(&mut self, _assets: &mut TextureCache) -> Result<(), SceneError> {
            Ok(())
        }

        fn handle_input(&mut self, _dt: f32, backend: &mut dyn PresentationBackend) {
            if let Some(BackendEvent::Quit) = backend.poll_event() {
                self.win = false;
                self.done = true;
            }
        }

        fn update(&mut self, _dt: f32) {
            if self.updates_left == 0 {
                self.done = true;
            } else {
                self.updates_left -= 1;
            }
        }

        fn render(&self, _backend: &mut dyn PresentationBackend) {}

        fn cleanup(&mut self) {}

        fn is_completed(&self) -> bool {
            self.done
        }

        fn is_win(&self) -> bool {
            self.done && self.win
        }
    }

    #[test]
    fn test_run_ends_when_scene_completes_without_win() {
        let mut app = Application::new(640, 480);
        app.switch_scene(Box::new(CountdownScene::new(3, false))).unwrap();
        app.run(60.0).unwrap();
    }

    #[test]
    fn test_winning_scene_rolls_into_next_level() {
        let mut app = Application::new(640, 480);
        app.register_next_level(Box::new(|| Box::new(CountdownScene::new(2, false))));
        app.switch_scene(Box::new(CountdownScene::new(2, true))).unwrap();
        app.run(60.0).unwrap();
    }

    #[test]
    fn test_final_win_past_the_table_ends_the_run() {
        let mut app = Application::new(640, 480);
        // No next levels registered: a win must still terminate.
        app.switch_scene(Box::new(CountdownScene::new(1, true))).unwrap();
        app.run(60.0).unwrap();
    }

    #[test]
    fn test_quit_event_ends_the_run() {
        let mut backend = HeadlessBackend::new();
        backend.push_event(BackendEvent::Quit);
        let mut app = Application::with_backend(640, 480, Box::new(backend));
        app.switch_scene(Box::new(CountdownScene::new(u32::MAX, true))).unwrap();
        app.run(60.0).unwrap();
    }
}
