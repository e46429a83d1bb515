//! Scene abstraction and scene management
//!
//! A [`Scene`] owns one self-contained slice of gameplay (a level). The
//! [`SceneManager`] holds exactly one active scene at a time and drives
//! level-to-level progression.

mod scene_manager;

pub use scene_manager::{SceneFactory, SceneManager};

use thiserror::Error;

use crate::assets::TextureCache;
use crate::backend::PresentationBackend;
use crate::config::ConfigError;

/// Scene lifecycle errors
#[derive(Debug, Error)]
pub enum SceneError {
    /// A level configuration file failed to load or parse
    #[error("level configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// One self-contained slice of gameplay
///
/// Lifecycle: `init` once when the scene becomes active, then per-frame
/// `update` / `handle_input` / `render` while active, then `cleanup` once
/// when it is replaced.
pub trait Scene {
    /// Construct the scene's world: load textures, spawn entities
    fn init(&mut self, assets: &mut TextureCache) -> Result<(), SceneError>;

    /// Process pending events and the current keyboard state
    fn handle_input(&mut self, dt: f32, backend: &mut dyn PresentationBackend);

    /// Advance the simulation by `dt` seconds
    fn update(&mut self, dt: f32);

    /// Draw the current frame
    fn render(&self, backend: &mut dyn PresentationBackend);

    /// Release scene resources before replacement
    fn cleanup(&mut self);

    /// Whether this scene has finished (by win, loss, or quit)
    fn is_completed(&self) -> bool;

    /// Whether the scene finished as a win
    fn is_win(&self) -> bool;
}
