//! Scene manager: holds the active scene and drives level progression

use super::{Scene, SceneError};
use crate::assets::TextureCache;
use crate::backend::PresentationBackend;

/// Deferred scene constructor, registered ahead of time per level
pub type SceneFactory = Box<dyn Fn() -> Box<dyn Scene>>;

/// Owns the single active scene and the table of upcoming levels
///
/// Progression is linear: each [`load_next_level`](Self::load_next_level)
/// consumes the next registered factory. Advancing past the end of the table
/// is a no-op, which is how the final win is detected by the caller.
#[derive(Default)]
pub struct SceneManager {
    current: Option<Box<dyn Scene>>,
    next_levels: Vec<SceneFactory>,
    level_index: usize,
}

impl SceneManager {
    /// Create a manager with no active scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a factory to the level progression table
    pub fn register_next_level(&mut self, factory: SceneFactory) {
        self.next_levels.push(factory);
    }

    /// Replace the active scene
    ///
    /// The outgoing scene is cleaned up before the incoming one is
    /// initialized, so texture and entity teardown never interleaves with
    /// setup. A failed init leaves no active scene.
    pub fn switch_scene(
        &mut self,
        mut scene: Box<dyn Scene>,
        assets: &mut TextureCache,
    ) -> Result<(), SceneError> {
        if let Some(mut old) = self.current.take() {
            old.cleanup();
        }
        scene.init(assets)?;
        self.current = Some(scene);
        Ok(())
    }

    /// Advance to the next registered level, if any
    pub fn load_next_level(&mut self, assets: &mut TextureCache) -> Result<(), SceneError> {
        let Some(factory) = self.next_levels.get(self.level_index) else {
            log::info!("no further levels registered");
            return Ok(());
        };
        let scene = factory();
        self.level_index += 1;
        self.switch_scene(scene, assets)
    }

    /// Forward input handling to the active scene
    pub fn handle_input(&mut self, dt: f32, backend: &mut dyn PresentationBackend) {
        if let Some(scene) = &mut self.current {
            scene.handle_input(dt, backend);
        }
    }

    /// Forward simulation to the active scene
    pub fn update(&mut self, dt: f32) {
        if let Some(scene) = &mut self.current {
            scene.update(dt);
        }
    }

    /// Forward rendering to the active scene
    pub fn render(&self, backend: &mut dyn PresentationBackend) {
        if let Some(scene) = &self.current {
            scene.render(backend);
        }
    }

    /// Whether the active scene has finished (no scene counts as finished)
    pub fn current_completed(&self) -> bool {
        self.current.as_ref().map_or(true, |s| s.is_completed())
    }

    /// Whether the active scene finished as a win
    pub fn current_won(&self) -> bool {
        self.current.as_ref().is_some_and(|s| s.is_win())
    }
}
