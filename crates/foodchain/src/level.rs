//! Level scenes: world construction and the per-frame simulation

use platform_engine::assets::TextureCache;
use platform_engine::backend::{BackendEvent, Color, PresentationBackend};
use platform_engine::config::LevelConfig;
use platform_engine::entity::Entity;
use platform_engine::scene::{Scene, SceneError};

use crate::entities::{self, EntityKind};
use crate::player::Player;

/// Points awarded per piece of food
const FOOD_SCORE: f32 = 10.0;

/// Player spawn position, shared by all levels
const PLAYER_START: (f32, f32) = (220.0, 460.0);

/// Fixed ground layout shared by all levels: (x, y, w, h) per segment
const GROUND_LAYOUT: [(f32, f32, f32, f32); 8] = [
    (0.0, 460.0, 640.0, 20.0),
    (0.0, 350.0, 200.0, 20.0),
    (300.0, 350.0, 200.0, 20.0),
    (470.0, 300.0, 100.0, 20.0),
    (200.0, 200.0, 200.0, 20.0),
    (0.0, 100.0, 300.0, 20.0),
    (0.0, 270.0, 100.0, 20.0),
    (500.0, 100.0, 180.0, 20.0),
];

/// The three levels of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelId {
    /// Starting level
    One,
    /// Second level
    Two,
    /// Final level
    Three,
}

impl LevelId {
    /// Configuration file for this level
    pub fn config_path(self) -> &'static str {
        match self {
            LevelId::One => "config/level1_config.txt",
            LevelId::Two => "config/level2_config.txt",
            LevelId::Three => "config/level3_config.txt",
        }
    }
}

/// One playable level
///
/// Owns every entity in the level. The fixed layout (background, grounds,
/// player spawn) is shared across levels; enemy and food placements come from
/// the level's configuration file.
pub struct LevelScene {
    level: LevelId,
    player: Option<Player>,
    background: Option<Entity>,
    grounds: Vec<Entity>,
    enemies: Vec<Entity>,
    foods: Vec<Entity>,
    run: bool,
    won: bool,
    score: f32,
    config_override: Option<LevelConfig>,
}

impl LevelScene {
    /// Create a level that loads its layout from the level's config file
    pub fn new(level: LevelId) -> Self {
        Self {
            level,
            player: None,
            background: None,
            grounds: Vec::new(),
            enemies: Vec::new(),
            foods: Vec::new(),
            run: true,
            won: false,
            score: 0.0,
            config_override: None,
        }
    }

    /// Create a level with an explicit configuration instead of a file
    pub fn with_config(level: LevelId, config: LevelConfig) -> Self {
        let mut scene = Self::new(level);
        scene.config_override = Some(config);
        scene
    }

    /// Current score
    pub fn score(&self) -> f32 {
        self.score
    }

    /// The player, once the scene is initialized
    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    /// Mutable access to the player
    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    /// The level's food entities
    pub fn foods(&self) -> &[Entity] {
        &self.foods
    }

    /// Mutable access to the food entities
    pub fn foods_mut(&mut self) -> &mut [Entity] {
        &mut self.foods
    }

    /// The level's enemy entities
    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    /// Mutable access to the enemy entities
    pub fn enemies_mut(&mut self) -> &mut [Entity] {
        &mut self.enemies
    }

    fn start_up(&mut self, assets: &mut TextureCache) -> Result<(), SceneError> {
        let mut player = Player::new(assets);
        player.move_to(PLAYER_START.0, PLAYER_START.1);
        self.player = Some(player);

        let mut background = entities::spawn(EntityKind::Background, assets);
        if let Some(sprite) = background.sprite_mut() {
            sprite.move_to(0.0, 0.0);
        }
        self.background = Some(background);

        for (x, y, w, h) in GROUND_LAYOUT {
            let mut ground = entities::spawn_ground(assets, w, h);
            if let Some(sprite) = ground.sprite_mut() {
                sprite.move_to(x, y);
            }
            self.grounds.push(ground);
        }

        self.setup_level(assets)
    }

    fn setup_level(&mut self, assets: &mut TextureCache) -> Result<(), SceneError> {
        let config = match self.config_override.take() {
            Some(config) => config,
            None => LevelConfig::load(self.level.config_path())?,
        };

        for (x, y) in config.placements("enemy") {
            let mut enemy = entities::spawn(EntityKind::Enemy, assets);
            if let Some(sprite) = enemy.sprite_mut() {
                sprite.move_to(x, y);
            }
            self.enemies.push(enemy);
        }

        for (x, y) in config.placements("food") {
            let mut food = entities::spawn(EntityKind::Food, assets);
            if let Some(sprite) = food.sprite_mut() {
                sprite.move_to(x, y);
            }
            self.foods.push(food);
        }

        log::info!(
            "level {:?} set up: {} enemies, {} foods",
            self.level,
            self.enemies.len(),
            self.foods.len()
        );
        Ok(())
    }
}

impl Scene for LevelScene {
    fn init(&mut self, assets: &mut TextureCache) -> Result<(), SceneError> {
        self.start_up(assets)
    }

    fn handle_input(&mut self, dt: f32, backend: &mut dyn PresentationBackend) {
        while let Some(event) = backend.poll_event() {
            match event {
                BackendEvent::Quit => self.run = false,
            }
        }

        if let Some(player) = &mut self.player {
            player.input(dt, &backend.keyboard());
        }
    }

    fn update(&mut self, dt: f32) {
        let Some(player) = &mut self.player else {
            return;
        };

        // Ground resolution before physics: land on the first ground the
        // player overlaps, otherwise fall.
        let player_bottom = player.bottom();
        let mut grounded = false;
        for ground in &self.grounds {
            if !player.intersects(ground) {
                continue;
            }
            if let Some(sprite) = ground.sprite() {
                if player_bottom > sprite.y() {
                    let height = player
                        .entity()
                        .sprite()
                        .map_or(0.0, |s| s.height());
                    player.set_on_ground(sprite.y() - height);
                }
            }
            grounded = true;
            break;
        }
        if !grounded {
            player.set_should_fall(true);
        }

        player.update(dt);

        for i in 0..self.foods.len() {
            self.foods[i].update(dt);
            if self.foods[i].is_renderable() && player.intersects(&self.foods[i]) {
                self.foods[i].set_renderable(false);
                self.score += FOOD_SCORE;
                log::info!("Food eaten. Your score is {}", self.score);
            }
            if self.foods.iter().all(|food| !food.is_renderable()) {
                log::info!("YOU WIN!");
                self.won = true;
                self.run = false;
            }
        }

        for enemy in &mut self.enemies {
            enemy.update(dt);
            if player.intersects(enemy) {
                log::info!("YOU LOSE!");
                self.run = false;
            }
        }
    }

    fn render(&self, backend: &mut dyn PresentationBackend) {
        backend.clear(Color::rgb(0, 64, 255));
        if let Some(background) = &self.background {
            background.render(backend);
        }
        for enemy in &self.enemies {
            enemy.render(backend);
        }
        for food in &self.foods {
            food.render(backend);
        }
        if let Some(player) = &self.player {
            player.entity().render(backend);
        }
        for ground in &self.grounds {
            ground.render(backend);
        }
        backend.present();
    }

    fn cleanup(&mut self) {
        log::debug!("cleaning up level {:?}", self.level);
        self.player = None;
        self.background = None;
        self.grounds.clear();
        self.enemies.clear();
        self.foods.clear();
    }

    fn is_completed(&self) -> bool {
        !self.run
    }

    fn is_win(&self) -> bool {
        self.won
    }
}

#[cfg(test)]
mod tests {
    use platform_engine::backend::HeadlessBackend;

    use super::*;

    fn ready_scene(config: LevelConfig) -> LevelScene {
        let mut assets = TextureCache::new();
        let mut scene = LevelScene::with_config(LevelId::One, config);
        scene.init(&mut assets).unwrap();
        scene
    }

    #[test]
    fn test_start_up_builds_fixed_layout() {
        let scene = ready_scene(LevelConfig::default());
        assert_eq!(scene.grounds.len(), 8);
        assert!(scene.background.is_some());
        let sprite = scene.player().unwrap().entity().sprite().unwrap();
        assert_eq!((sprite.x(), sprite.y()), PLAYER_START);
    }

    #[test]
    fn test_setup_level_places_config_entities() {
        let scene = ready_scene(LevelConfig::from_pairs(&[
            ("enemy1_x", 100),
            ("enemy1_y", 300),
            ("food1_x", 400),
            ("food1_y", 120),
            ("food2_x", 50),
            ("food2_y", 50),
        ]));
        assert_eq!(scene.enemies().len(), 1);
        assert_eq!(scene.foods().len(), 2);
        let food = scene.foods()[0].sprite().unwrap();
        assert_eq!((food.x(), food.y()), (400.0, 120.0));
    }

    #[test]
    fn test_quit_event_completes_without_win() {
        let mut scene = ready_scene(LevelConfig::default());
        let mut backend = HeadlessBackend::new();
        backend.push_event(BackendEvent::Quit);
        scene.handle_input(0.016, &mut backend);
        assert!(scene.is_completed());
        assert!(!scene.is_win());
    }

    #[test]
    fn test_only_quit_event_ends_the_level() {
        use platform_engine::backend::{KeyCode, KeyboardSnapshot};

        let mut scene = ready_scene(LevelConfig::default());
        let mut backend = HeadlessBackend::new();
        backend.set_keyboard(KeyboardSnapshot::new().with(KeyCode::Escape));
        scene.handle_input(0.016, &mut backend);
        assert!(!scene.is_completed());
    }

    #[test]
    fn test_enemy_contact_loses() {
        let mut scene = ready_scene(LevelConfig::from_pairs(&[
            ("enemy1_x", 220),
            ("enemy1_y", 460),
            ("food1_x", 0),
            ("food1_y", 0),
        ]));
        scene.update(0.016);
        assert!(scene.is_completed());
        assert!(!scene.is_win());
    }

    #[test]
    fn test_eating_every_food_wins() {
        let mut scene = ready_scene(LevelConfig::from_pairs(&[
            ("food1_x", 220),
            ("food1_y", 460),
        ]));
        scene.update(0.016);
        assert!(scene.is_win());
        assert!(scene.is_completed());
        assert_eq!(scene.score(), FOOD_SCORE);
    }

    #[test]
    fn test_food_scores_exactly_once() {
        let mut scene = ready_scene(LevelConfig::from_pairs(&[
            ("food1_x", 220),
            ("food1_y", 460),
            ("food2_x", 0),
            ("food2_y", 0),
        ]));
        scene.update(0.016);
        assert_eq!(scene.score(), FOOD_SCORE);
        assert!(!scene.foods()[0].is_renderable());

        // Still overlapping on the next frame; no double count.
        scene.update(0.016);
        assert_eq!(scene.score(), FOOD_SCORE);
    }

    #[test]
    fn test_level_with_no_food_never_wins() {
        let mut scene = ready_scene(LevelConfig::default());
        scene.update(0.016);
        assert!(!scene.is_win());
        assert!(!scene.is_completed());
    }

    #[test]
    fn test_player_lands_on_overlapped_ground() {
        let mut scene = ready_scene(LevelConfig::default());
        {
            let player = scene.player_mut().unwrap();
            // Sunk a few pixels into the ground at y=350.
            player.move_to(100.0, 325.0);
            player.set_should_fall(true);
        }
        scene.update(0.016);

        let player = scene.player().unwrap();
        let height = player.entity().sprite().unwrap().height();
        assert!(player.is_on_ground());
        assert_eq!(player.entity().sprite().unwrap().y(), 350.0 - height);
        assert_eq!(player.vertical_speed(), 0.0);
    }
}
