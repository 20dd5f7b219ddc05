//! Timer-driven enemy spawning ahead of the camera

use rand::Rng;

use super::state::{Enemy, GameState};
use crate::consts::*;

impl GameState {
    /// Advance the spawn countdown and spawn one enemy when it runs out.
    /// Runs every unpaused tick, alive or dead.
    pub(crate) fn update_spawner(&mut self) {
        self.enemy_spawn_ticks = self.enemy_spawn_ticks.saturating_sub(1);
        if self.enemy_spawn_ticks == 0 {
            self.spawn_enemy();
            self.enemy_spawn_ticks = self
                .rng
                .random_range(ENEMY_SPAWN_MIN_TICKS..ENEMY_SPAWN_MAX_TICKS);
        }
    }

    /// Spawn one enemy just past the right edge of the viewport
    pub(crate) fn spawn_enemy(&mut self) {
        let jitter = self.rng.random_range(0.0..ENEMY_SPAWN_JITTER);
        let x = self.camera_x + self.config.viewport_width + ENEMY_SPAWN_MARGIN + jitter;
        let speed = self.rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);
        self.enemies
            .push(Enemy::new(x.min(WORLD_WIDTH - ENEMY_SPAWN_EDGE), speed));
    }

    /// Ticks until the next enemy spawns
    pub fn enemy_spawn_ticks(&self) -> u32 {
        self.enemy_spawn_ticks
    }
}
