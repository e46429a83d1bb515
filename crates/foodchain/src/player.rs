//! Player: the one entity with input and physics

use platform_engine::assets::TextureCache;
use platform_engine::backend::{KeyCode, KeyboardSnapshot};
use platform_engine::entity::Entity;

use crate::entities::{self, EntityKind, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// Horizontal movement speed in pixels per second
pub const PLAYER_SPEED: f32 = 150.0;
/// Initial upward speed of a jump in pixels per second
pub const JUMP_SPEED: f32 = 450.0;
/// Downward acceleration in pixels per second squared
pub const GRAVITY: f32 = 980.0;

/// The hero: a sprite entity plus vertical physics state
///
/// Invariant: while on the ground, `vertical_speed` is zero. Vertical motion
/// only integrates while airborne; landing (on a ground segment or the
/// viewport bottom) zeroes the speed and re-grounds the player.
pub struct Player {
    entity: Entity,
    vertical_speed: f32,
    on_ground: bool,
}

impl Player {
    /// Spawn the player with its texture, starting grounded
    pub fn new(assets: &mut TextureCache) -> Self {
        Self {
            entity: entities::spawn(EntityKind::Player, assets),
            vertical_speed: 0.0,
            on_ground: true,
        }
    }

    /// Apply the current keyboard state for this frame
    ///
    /// Horizontal movement is applied and clamped to the viewport every
    /// frame; a jump only triggers from the ground.
    pub fn input(&mut self, dt: f32, keyboard: &KeyboardSnapshot) {
        let Some(sprite) = self.entity.sprite_mut() else {
            return;
        };

        let mut x = sprite.x();
        if keyboard.is_down(KeyCode::Left) {
            x -= PLAYER_SPEED * dt;
        } else if keyboard.is_down(KeyCode::Right) {
            x += PLAYER_SPEED * dt;
        }
        sprite.set_x(x.clamp(0.0, VIEWPORT_WIDTH - sprite.width()));

        if keyboard.is_down(KeyCode::Space) && self.on_ground {
            self.vertical_speed = -JUMP_SPEED;
            self.on_ground = false;
        }
    }

    /// Integrate vertical physics while airborne
    pub fn update(&mut self, dt: f32) {
        self.entity.update(dt);
        if self.on_ground {
            return;
        }

        self.vertical_speed += GRAVITY * dt;
        let Some(sprite) = self.entity.sprite_mut() else {
            return;
        };
        let mut y = sprite.y() + self.vertical_speed * dt;
        if y + sprite.height() >= VIEWPORT_HEIGHT {
            y = VIEWPORT_HEIGHT - sprite.height();
            self.on_ground = true;
            self.vertical_speed = 0.0;
        }
        sprite.set_y(y);
    }

    /// Land the player at vertical position `y`
    pub fn set_on_ground(&mut self, y: f32) {
        if let Some(sprite) = self.entity.sprite_mut() {
            sprite.set_y(y);
        }
        self.on_ground = true;
        self.vertical_speed = 0.0;
    }

    /// Force the player airborne without touching vertical speed
    ///
    /// Passing `false` is a no-op: only landing re-grounds the player, so
    /// `vertical_speed` stays zero whenever `on_ground` holds.
    pub fn set_should_fall(&mut self, fall: bool) {
        if fall {
            self.on_ground = false;
        }
    }

    /// Whether the player is standing on something
    pub fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    /// Current vertical speed in pixels per second (positive is down)
    pub fn vertical_speed(&self) -> f32 {
        self.vertical_speed
    }

    /// The underlying entity
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Mutable access to the underlying entity
    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    /// Move the player to an absolute position
    pub fn move_to(&mut self, x: f32, y: f32) {
        if let Some(sprite) = self.entity.sprite_mut() {
            sprite.move_to(x, y);
        }
    }

    /// Bottom edge of the player's sprite
    pub fn bottom(&self) -> f32 {
        self.entity
            .sprite()
            .map_or(0.0, |sprite| sprite.y() + sprite.height())
    }

    /// AABB overlap against another entity
    pub fn intersects(&self, other: &Entity) -> bool {
        self.entity.intersects(other)
    }
}
