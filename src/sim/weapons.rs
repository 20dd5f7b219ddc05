//! Player actions: jump, standard shot and the area-clear mega shot
//!
//! The standard shot and the mega shot have independent cooldowns.

use super::state::{Bullet, GameEvent, GameState};
use crate::consts::*;

impl GameState {
    /// Jump if the player is alive and on the ground
    pub fn jump(&mut self) -> bool {
        self.player.as_mut().is_some_and(|p| p.jump())
    }

    /// Fire one bullet in the facing direction.
    ///
    /// No-op while dead or cooling down. Returns whether a bullet was fired.
    pub fn shoot(&mut self) -> bool {
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        if player.shoot_cooldown > 0 {
            return false;
        }
        self.bullets.push(Bullet::fired_from(player));
        player.shoot_cooldown = SHOOT_COOLDOWN_TICKS;
        true
    }

    /// Destroy every enemy touching the viewport (plus a small margin).
    ///
    /// Works whether or not the player is alive. Any attempt made while the
    /// ability is ready starts the cooldown, even if nothing was hit.
    /// Returns the number of enemies destroyed, or `None` if the ability is
    /// disabled or still cooling down.
    pub fn mega_shot(&mut self) -> Option<u32> {
        if !self.config.mega_shot_enabled || self.mega_cooldown > 0 {
            return None;
        }

        let left = self.camera_x - MEGA_VIEW_MARGIN;
        let right = self.camera_x + self.config.viewport_width + MEGA_VIEW_MARGIN;
        let before = self.enemies.len();
        self.enemies
            .retain(|e| !(e.pos.x + e.size.x >= left && e.pos.x <= right));
        let kills = (before - self.enemies.len()) as u32;

        self.score += KILL_SCORE * u64::from(kills);
        self.mega_cooldown = MEGA_COOLDOWN_TICKS;
        self.mega_flash = MEGA_FLASH_TICKS;
        self.push_event(GameEvent::MegaShot { kills });
        log::debug!("Mega shot destroyed {} enemies", kills);
        Some(kills)
    }
}
