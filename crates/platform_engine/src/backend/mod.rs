//! Presentation backend abstraction
//!
//! The engine core never talks to a windowing or graphics library directly.
//! Everything it needs — event polling, clearing/presenting, textured-rect
//! drawing, a keyboard snapshot, a monotonic tick counter and a blocking
//! delay — is captured by [`PresentationBackend`]. A real backend wraps a
//! presentation library; the bundled [`HeadlessBackend`] implements the same
//! contract without a display and doubles as the degraded fallback when
//! backend initialization fails.

mod headless;

pub use headless::HeadlessBackend;

use crate::assets::TextureHandle;
use crate::foundation::math::Rect;

/// Events delivered by the presentation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendEvent {
    /// The user asked the application to quit
    Quit,
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Keys the engine cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Space key
    Space,
    /// Escape key
    Escape,
}

impl KeyCode {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            KeyCode::Left => 0,
            KeyCode::Right => 1,
            KeyCode::Space => 2,
            KeyCode::Escape => 3,
        }
    }
}

/// Per-key boolean snapshot of the keyboard, taken once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    held: [bool; KeyCode::COUNT],
}

impl KeyboardSnapshot {
    /// Empty snapshot with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is held in this snapshot
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.held[key.index()]
    }

    /// Set the held state of `key`
    pub fn set(&mut self, key: KeyCode, down: bool) {
        self.held[key.index()] = down;
    }

    /// Builder-style variant of [`set`](Self::set)
    pub fn with(mut self, key: KeyCode) -> Self {
        self.set(key, true);
        self
    }
}

/// Abstract presentation and input backend
///
/// Implementations wrap a concrete presentation library; the engine only
/// depends on these primitives.
pub trait PresentationBackend {
    /// Poll the next pending event, if any
    fn poll_event(&mut self) -> Option<BackendEvent>;

    /// Clear the frame to a solid color
    fn clear(&mut self, color: Color);

    /// Present the finished frame
    fn present(&mut self);

    /// Draw a textured rectangle at `dest`
    fn draw_textured_rect(&mut self, texture: TextureHandle, dest: Rect);

    /// Snapshot of the current keyboard state
    fn keyboard(&self) -> KeyboardSnapshot;

    /// Monotonic millisecond tick counter
    fn ticks_ms(&self) -> u64;

    /// Block for roughly `ms` milliseconds
    fn delay(&mut self, ms: u64);
}
