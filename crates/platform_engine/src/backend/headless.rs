//! Headless presentation backend
//!
//! Implements [`PresentationBackend`] without a display. Used by tests to
//! drive the engine deterministically, and by the application as the degraded
//! fallback when no real backend is available (the run continues with blank
//! rendering rather than aborting).

use std::collections::VecDeque;

use super::{BackendEvent, Color, KeyboardSnapshot, PresentationBackend};
use crate::assets::TextureHandle;
use crate::foundation::math::Rect;

/// Backend with no display attached
///
/// Time is simulated: [`delay`](PresentationBackend::delay) advances the
/// clock by the requested amount instead of sleeping, and tests can advance
/// it explicitly, so loop timing stays deterministic.
pub struct HeadlessBackend {
    events: VecDeque<BackendEvent>,
    keyboard: KeyboardSnapshot,
    ticks: u64,
    draw_calls: u64,
    presented_frames: u64,
}

impl Default for HeadlessBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessBackend {
    /// Create a headless backend with the clock at zero
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
            keyboard: KeyboardSnapshot::new(),
            ticks: 0,
            draw_calls: 0,
            presented_frames: 0,
        }
    }

    /// Queue an event for a later [`poll_event`](PresentationBackend::poll_event)
    pub fn push_event(&mut self, event: BackendEvent) {
        self.events.push_back(event);
    }

    /// Replace the keyboard snapshot returned to callers
    pub fn set_keyboard(&mut self, keyboard: KeyboardSnapshot) {
        self.keyboard = keyboard;
    }

    /// Number of textured-rect draws issued so far
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }

    /// Number of presented frames so far
    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }

    /// Advance the simulated clock, e.g. to model a long frame
    pub fn advance(&mut self, ms: u64) {
        self.ticks += ms;
    }
}

impl PresentationBackend for HeadlessBackend {
    fn poll_event(&mut self) -> Option<BackendEvent> {
        self.events.pop_front()
    }

    fn clear(&mut self, _color: Color) {}

    fn present(&mut self) {
        self.presented_frames += 1;
    }

    fn draw_textured_rect(&mut self, _texture: TextureHandle, _dest: Rect) {
        self.draw_calls += 1;
    }

    fn keyboard(&self) -> KeyboardSnapshot {
        self.keyboard
    }

    fn ticks_ms(&self) -> u64 {
        self.ticks
    }

    fn delay(&mut self, ms: u64) {
        self.ticks += ms;
    }
}
