//! Sprite component - a positioned, sized, renderable rectangle

use crate::assets::TextureHandle;
use crate::backend::PresentationBackend;
use crate::foundation::math::Rect;

/// Default sprite rectangle for entities that do not override their size
const DEFAULT_RECT: Rect = Rect::new(20.0, 20.0, 32.0, 32.0);

/// Visual component: a rectangle bound to an optional texture handle
///
/// When the handle is `None` (the image failed to load) the sprite draws
/// nothing; everything else about the entity keeps working.
#[derive(Debug, Clone)]
pub struct Sprite {
    rect: Rect,
    texture: Option<TextureHandle>,
}

impl Sprite {
    /// Create a sprite with the default rectangle
    pub fn new(texture: Option<TextureHandle>) -> Self {
        Self {
            rect: DEFAULT_RECT,
            texture,
        }
    }

    /// Per-frame update (sprites are static; nothing to do)
    pub fn update(&mut self, _dt: f32) {}

    /// Draw the sprite if it has a texture
    pub fn render(&self, backend: &mut dyn PresentationBackend) {
        if let Some(texture) = self.texture {
            backend.draw_textured_rect(texture, self.rect);
        }
    }

    /// Current x position
    pub fn x(&self) -> f32 {
        self.rect.x
    }

    /// Current y position
    pub fn y(&self) -> f32 {
        self.rect.y
    }

    /// Width
    pub fn width(&self) -> f32 {
        self.rect.w
    }

    /// Height
    pub fn height(&self) -> f32 {
        self.rect.h
    }

    /// Set the x position
    pub fn set_x(&mut self, x: f32) {
        self.rect.x = x;
    }

    /// Set the y position
    pub fn set_y(&mut self, y: f32) {
        self.rect.y = y;
    }

    /// Move to a new position
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    /// Resize the sprite (called once during entity construction)
    pub fn set_size(&mut self, w: f32, h: f32) {
        self.rect.w = w;
        self.rect.h = h;
    }

    /// The sprite's rectangle
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The bound texture handle, if the image loaded
    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }
}
