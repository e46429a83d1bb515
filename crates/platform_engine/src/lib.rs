//! # Platform Engine
//!
//! A small 2D platformer engine: a fixed-rate application loop, a scene
//! manager, an entity/component model, and a texture cache, all built on top
//! of a pluggable presentation backend.
//!
//! The engine deliberately does not ship a windowing backend. Everything it
//! needs from the outside world is captured by
//! [`backend::PresentationBackend`]; a [`backend::HeadlessBackend`] is
//! provided for tests and for degraded runs when no real backend is
//! available.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use platform_engine::prelude::*;
//!
//! # fn level_one() -> Box<dyn Scene> { unimplemented!() }
//! # fn level_two() -> Box<dyn Scene> { unimplemented!() }
//! fn main() -> Result<(), AppError> {
//!     platform_engine::foundation::logging::init();
//!     let mut app = Application::new(640, 480);
//!     app.register_next_level(Box::new(|| level_two()));
//!     app.switch_scene(level_one())?;
//!     app.run(60.0)
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod backend;
pub mod config;
pub mod entity;
pub mod foundation;
pub mod scene;

mod application;

pub use application::{AppError, Application};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        application::{AppError, Application},
        assets::{TextureCache, TextureHandle},
        backend::{BackendEvent, Color, KeyCode, KeyboardSnapshot, PresentationBackend},
        config::{LevelConfig, Settings},
        entity::{Component, ComponentKind, Entity, Sprite},
        foundation::math::{Rect, Vec2},
        scene::{Scene, SceneError, SceneManager},
    };
}
