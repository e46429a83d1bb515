//! Entity spawning: the cast of the game and their textures

use platform_engine::assets::TextureCache;
use platform_engine::entity::{Component, Entity, Sprite};

/// Playfield width in pixels
pub const VIEWPORT_WIDTH: f32 = 640.0;
/// Playfield height in pixels
pub const VIEWPORT_HEIGHT: f32 = 480.0;

/// The kinds of entity that appear in a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// The hero
    Player,
    /// A predator; touching one loses the level
    Enemy,
    /// Eat all of these to win the level
    Food,
    /// A platform segment the player can stand on
    Ground,
    /// Full-screen backdrop
    Background,
}

impl EntityKind {
    /// Texture file for this kind
    pub fn asset_path(self) -> &'static str {
        match self {
            EntityKind::Player => "assets/hero.bmp",
            EntityKind::Enemy => "assets/enemy.bmp",
            EntityKind::Food => "assets/food.bmp",
            EntityKind::Ground => "assets/ground.bmp",
            EntityKind::Background => "assets/background.bmp",
        }
    }

    /// Sprite size override, if this kind does not use the sprite default
    fn default_size(self) -> Option<(f32, f32)> {
        match self {
            EntityKind::Enemy | EntityKind::Food => Some((45.0, 45.0)),
            EntityKind::Background => Some((VIEWPORT_WIDTH, VIEWPORT_HEIGHT)),
            EntityKind::Player | EntityKind::Ground => None,
        }
    }
}

/// Spawn an entity of `kind` with its texture and default size
///
/// A missing texture is logged by the cache and leaves the sprite blank;
/// the entity still participates in collision and scoring.
pub fn spawn(kind: EntityKind, assets: &mut TextureCache) -> Entity {
    let texture = assets.load_logged(kind.asset_path());
    let mut sprite = Sprite::new(texture);
    if let Some((w, h)) = kind.default_size() {
        sprite.set_size(w, h);
    }
    let mut entity = Entity::new();
    entity.add_component(Component::Sprite(sprite));
    entity
}

/// Spawn a ground segment with caller-specified dimensions
pub fn spawn_ground(assets: &mut TextureCache, w: f32, h: f32) -> Entity {
    let mut entity = spawn(EntityKind::Ground, assets);
    if let Some(sprite) = entity.sprite_mut() {
        sprite.set_size(w, h);
    }
    entity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_gets_its_default_size() {
        let mut assets = TextureCache::new();
        let food = spawn(EntityKind::Food, &mut assets);
        let sprite = food.sprite().unwrap();
        assert_eq!(sprite.width(), 45.0);
        assert_eq!(sprite.height(), 45.0);
    }

    #[test]
    fn test_ground_uses_caller_dimensions() {
        let mut assets = TextureCache::new();
        let ground = spawn_ground(&mut assets, 200.0, 20.0);
        let sprite = ground.sprite().unwrap();
        assert_eq!(sprite.width(), 200.0);
        assert_eq!(sprite.height(), 20.0);
    }

    #[test]
    fn test_missing_texture_still_spawns() {
        let mut assets = TextureCache::new();
        let player = spawn(EntityKind::Player, &mut assets);
        assert!(player.sprite().unwrap().texture().is_none());
        assert!(player.is_renderable());
    }
}
