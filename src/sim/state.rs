//! Game state and core simulation types
//!
//! Entities hold no references to each other; every collection is a plain
//! ordered `Vec` rebuilt by predicate each tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// Horizontal facing of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for left, 1.0 for right
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Horizontal run speed (units/tick)
    pub speed: f32,
    pub on_ground: bool,
    pub facing: Facing,
    /// Ticks until the next standard shot is allowed
    pub shoot_cooldown: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Fresh player standing on the ground at the start position
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, GROUND_Y - PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
            on_ground: true,
            facing: Facing::Right,
            shoot_cooldown: 0,
        }
    }

    /// Fresh player placed near the camera after a death
    pub fn respawn_at(camera_x: f32) -> Self {
        let mut player = Self::new();
        player.pos.x = (camera_x + RESPAWN_CAMERA_OFFSET).max(RESPAWN_MIN_X);
        player
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A projectile fired by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity; sign is the firing direction
    pub vx: f32,
    /// Consumed by a hit, removed at the end of collision resolution
    #[serde(default)]
    pub spent: bool,
}

impl Bullet {
    /// Bullet leaving the muzzle of `player`
    pub fn fired_from(player: &Player) -> Self {
        let x = match player.facing {
            Facing::Right => player.pos.x + player.size.x,
            Facing::Left => player.pos.x - BULLET_REAR_OFFSET,
        };
        Self {
            pos: Vec2::new(x, player.pos.y + BULLET_Y_OFFSET),
            size: Vec2::new(BULLET_WIDTH, BULLET_HEIGHT),
            vx: player.facing.sign() * BULLET_SPEED,
            spent: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A foot soldier walking toward the camera
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    /// Always negative (moves left)
    pub vx: f32,
}

impl Enemy {
    /// Enemy standing on the ground at `x`, walking left at `speed`
    pub fn new(x: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, GROUND_Y - ENEMY_HEIGHT),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            vx: -speed.abs(),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Notable things that happened during a tick, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerDied,
    PlayerRespawned,
    EnemyKilled,
    MegaShot { kills: u32 },
    NewHighScore(u64),
    PauseToggled(bool),
    Restarted,
}

/// Runtime configuration for a simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Visible width of the canvas in world units
    pub viewport_width: f32,
    /// Whether the area-clear mega shot is available
    pub mega_shot_enabled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            mega_shot_enabled: true,
        }
    }
}

/// Events kept when the host falls behind on draining; oldest go first
pub const MAX_PENDING_EVENTS: usize = 256;

/// Complete simulation state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) config: SimConfig,
    pub(crate) rng: Pcg32,
    pub(crate) score: u64,
    pub(crate) high_score: u64,
    /// Purely statistical; lives are unlimited
    pub(crate) deaths: u32,
    pub(crate) paused: bool,
    pub(crate) camera_x: f32,
    /// `None` while dead and waiting to respawn
    pub(crate) player: Option<Player>,
    pub(crate) bullets: Vec<Bullet>,
    pub(crate) enemies: Vec<Enemy>,
    pub(crate) enemy_spawn_ticks: u32,
    pub(crate) respawn_ticks: u32,
    pub(crate) mega_cooldown: u32,
    pub(crate) mega_flash: u32,
    pub(crate) time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given seed and previously stored high score
    pub fn new(config: SimConfig, seed: u64, high_score: u64) -> Self {
        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            high_score,
            deaths: 0,
            paused: false,
            camera_x: 0.0,
            player: Some(Player::new()),
            bullets: Vec::new(),
            enemies: Vec::new(),
            enemy_spawn_ticks: 0,
            respawn_ticks: 0,
            mega_cooldown: 0,
            mega_flash: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Reset the run. High score, config and RNG stream carry over.
    pub fn restart(&mut self) {
        self.score = 0;
        self.deaths = 0;
        self.paused = false;
        self.camera_x = 0.0;
        self.player = Some(Player::new());
        self.bullets.clear();
        self.enemies.clear();
        self.enemy_spawn_ticks = 0;
        self.respawn_ticks = 0;
        self.mega_cooldown = 0;
        self.mega_flash = 0;
        self.push_event(GameEvent::Restarted);
        log::info!("Run restarted (high score {})", self.high_score);
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.push_event(GameEvent::PauseToggled(self.paused));
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
    }

    /// Change the visible width (canvas resize). Re-clamps the camera,
    /// which doesn't follow while the player is dead.
    pub fn set_viewport_width(&mut self, width: f32) {
        let width = width.max(0.0);
        self.config.viewport_width = width;
        self.camera_x = self.camera_x.min(WORLD_WIDTH - width).max(0.0);
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    pub(crate) fn kill_player(&mut self) {
        self.player = None;
        self.respawn_ticks = RESPAWN_TICKS;
        self.deaths += 1;
        self.push_event(GameEvent::PlayerDied);
        log::debug!("Player died (deaths: {})", self.deaths);
    }

    pub(crate) fn update_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.push_event(GameEvent::NewHighScore(self.high_score));
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn camera_x(&self) -> f32 {
        self.camera_x
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Ticks until the mega shot can fire again
    pub fn mega_cooldown(&self) -> u32 {
        self.mega_cooldown
    }

    /// Remaining ticks of the mega shot screen flash
    pub fn mega_flash(&self) -> u32 {
        self.mega_flash
    }

    /// Ticks until the dead player respawns (0 while alive)
    pub fn respawn_ticks(&self) -> u32 {
        self.respawn_ticks
    }

    /// Simulated ticks since the game was created (pauses excluded)
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_has_player_at_start() {
        let state = GameState::new(SimConfig::default(), 1, 0);
        let player = state.player().expect("player should exist");
        assert_eq!(player.pos, Vec2::new(120.0, GROUND_Y - 58.0));
        assert!(player.on_ground);
        assert_eq!(player.facing, Facing::Right);
        assert!(state.bullets().is_empty());
        assert!(state.enemies().is_empty());
    }

    #[test]
    fn test_respawn_position() {
        assert_eq!(Player::respawn_at(0.0).pos.x, RESPAWN_MIN_X);
        assert_eq!(Player::respawn_at(1000.0).pos.x, 1050.0);
    }

    #[test]
    fn test_bullet_spawns_at_leading_edge() {
        let mut player = Player::new();
        let bullet = Bullet::fired_from(&player);
        assert_eq!(bullet.pos.x, 152.0);
        assert_eq!(bullet.pos.y, player.pos.y + 22.0);
        assert_eq!(bullet.vx, 8.5);

        player.facing = Facing::Left;
        let bullet = Bullet::fired_from(&player);
        assert_eq!(bullet.pos.x, 112.0);
        assert_eq!(bullet.vx, -8.5);
    }

    #[test]
    fn test_enemy_always_walks_left() {
        let enemy = Enemy::new(1000.0, 1.5);
        assert_eq!(enemy.vx, -1.5);
        assert_eq!(enemy.rect().bottom(), GROUND_Y);
    }

    #[test]
    fn test_restart_keeps_high_score() {
        let mut state = GameState::new(SimConfig::default(), 7, 500);
        state.score = 900;
        state.update_high_score();
        state.deaths = 3;
        state.camera_x = 400.0;
        state.player = None;
        state.enemies.push(Enemy::new(800.0, 2.0));
        state.bullets.push(Bullet::fired_from(&Player::new()));
        state.paused = true;

        state.restart();

        assert_eq!(state.score(), 0);
        assert_eq!(state.deaths(), 0);
        assert_eq!(state.camera_x(), 0.0);
        assert!(state.bullets().is_empty());
        assert!(state.enemies().is_empty());
        assert!(!state.is_paused());
        assert_eq!(state.player().map(|p| p.pos), Some(Player::new().pos));
        assert_eq!(state.high_score(), 900);
    }

    #[test]
    fn test_kill_player() {
        let mut state = GameState::new(SimConfig::default(), 7, 0);
        state.kill_player();
        assert!(state.player().is_none());
        assert_eq!(state.deaths(), 1);
        assert_eq!(state.respawn_ticks(), RESPAWN_TICKS);
        assert_eq!(state.drain_events(), vec![GameEvent::PlayerDied]);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_high_score_only_grows() {
        let mut state = GameState::new(SimConfig::default(), 7, 300);
        state.score = 200;
        state.update_high_score();
        assert_eq!(state.high_score(), 300);
        assert!(state.drain_events().is_empty());

        state.score = 400;
        state.update_high_score();
        assert_eq!(state.high_score(), 400);
        assert_eq!(state.drain_events(), vec![GameEvent::NewHighScore(400)]);
    }

    #[test]
    fn test_viewport_growth_reclamps_camera() {
        let mut state = GameState::new(SimConfig::default(), 7, 0);
        state.camera_x = WORLD_WIDTH - DEFAULT_VIEWPORT_WIDTH;
        state.kill_player();

        state.set_viewport_width(1200.0);
        assert_eq!(state.camera_x(), WORLD_WIDTH - 1200.0);

        // Wider than the world pins the camera at the left edge
        state.set_viewport_width(WORLD_WIDTH + 100.0);
        assert_eq!(state.camera_x(), 0.0);

        state.set_viewport_width(-5.0);
        assert_eq!(state.config().viewport_width, 0.0);
    }

    #[test]
    fn test_undrained_events_are_capped() {
        let mut state = GameState::new(SimConfig::default(), 7, 0);
        for _ in 0..MAX_PENDING_EVENTS {
            state.push_event(GameEvent::EnemyKilled);
        }
        state.push_event(GameEvent::Restarted);

        let events = state.drain_events();
        assert_eq!(events.len(), MAX_PENDING_EVENTS);
        assert_eq!(events.last(), Some(&GameEvent::Restarted));
    }
}
