//! # Food Chain
//!
//! A small platformer: guide the hero across floating grounds, eat every
//! piece of food, avoid the predators, and clear all three levels.

#![warn(clippy::all)]

pub mod entities;
pub mod level;
pub mod player;

#[cfg(test)]
mod tests;

pub use entities::{EntityKind, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
pub use level::{LevelId, LevelScene};
pub use player::Player;
