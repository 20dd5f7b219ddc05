//! Per-tick movement rules for the player, bullets and enemies

use super::state::{Bullet, Enemy, Facing, Player};
use crate::consts::*;

impl Player {
    /// Apply held direction, gravity, ground and world clamps, and cooldown.
    ///
    /// Left wins when both directions are held. Releasing both keeps the
    /// last facing.
    pub fn update(&mut self, left: bool, right: bool) {
        if left {
            self.vel.x = -self.speed;
            self.facing = Facing::Left;
        } else if right {
            self.vel.x = self.speed;
            self.facing = Facing::Right;
        } else {
            self.vel.x = 0.0;
        }

        self.pos.x += self.vel.x;
        self.vel.y += GRAVITY;
        self.pos.y += self.vel.y;

        // Flat ground, no platforms
        if self.pos.y + self.size.y >= GROUND_Y {
            self.pos.y = GROUND_Y - self.size.y;
            self.vel.y = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }

        self.pos.x = self.pos.x.min(WORLD_WIDTH - self.size.x).max(0.0);
        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);
    }

    /// Jump if standing on the ground. Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vel.y = JUMP_IMPULSE;
        self.on_ground = false;
        true
    }
}

/// Move bullets and drop the ones outside the viewport plus margin
pub fn update_bullets(bullets: &mut Vec<Bullet>, camera_x: f32, viewport_width: f32) {
    for bullet in bullets.iter_mut() {
        bullet.pos.x += bullet.vx;
    }
    let min_x = camera_x - BULLET_CULL_MARGIN;
    let max_x = camera_x + viewport_width + BULLET_CULL_MARGIN;
    bullets.retain(|b| b.pos.x > min_x && b.pos.x < max_x);
}

/// Move enemies and drop the ones left behind the camera
pub fn update_enemies(enemies: &mut Vec<Enemy>, camera_x: f32) {
    for enemy in enemies.iter_mut() {
        enemy.pos.x += enemy.vx;
    }
    enemies.retain(|e| e.pos.x + e.size.x > camera_x - ENEMY_CULL_MARGIN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_run_left() {
        let mut player = Player::new();
        player.update(true, false);
        assert!(approx(player.pos.x, 115.8));
        assert_eq!(player.facing, Facing::Left);
        assert!(player.on_ground);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut player = Player::new();
        player.update(true, true);
        assert_eq!(player.facing, Facing::Left);
        assert!(player.vel.x < 0.0);
    }

    #[test]
    fn test_facing_persists_when_released() {
        let mut player = Player::new();
        player.update(true, false);
        player.update(false, false);
        assert_eq!(player.vel.x, 0.0);
        assert_eq!(player.facing, Facing::Left);
    }

    #[test]
    fn test_ground_clamp() {
        let mut player = Player::new();
        player.update(false, false);
        assert_eq!(player.pos.y + player.size.y, GROUND_Y);
        assert_eq!(player.vel.y, 0.0);
        assert!(player.on_ground);
    }

    #[test]
    fn test_world_clamp() {
        let mut player = Player::new();
        player.pos.x = 1.0;
        player.update(true, false);
        assert_eq!(player.pos.x, 0.0);

        player.pos.x = WORLD_WIDTH - player.size.x - 1.0;
        player.update(false, true);
        assert_eq!(player.pos.x, WORLD_WIDTH - player.size.x);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut player = Player::new();
        assert!(player.jump());
        // No double jump
        assert!(!player.jump());

        player.update(false, false);
        assert!(!player.on_ground);
        assert!(player.pos.y < GROUND_Y - player.size.y);

        let mut ticks = 1;
        while !player.on_ground {
            player.update(false, false);
            ticks += 1;
            assert!(ticks < 100, "player never landed");
        }
        assert_eq!(player.pos.y, GROUND_Y - player.size.y);
    }

    #[test]
    fn test_cooldown_floors_at_zero() {
        let mut player = Player::new();
        player.shoot_cooldown = 1;
        player.update(false, false);
        assert_eq!(player.shoot_cooldown, 0);
        player.update(false, false);
        assert_eq!(player.shoot_cooldown, 0);
    }

    #[test]
    fn test_bullets_culled_outside_window() {
        let mut bullets = vec![
            Bullet {
                pos: Vec2::new(500.0, 400.0),
                size: Vec2::new(10.0, 4.0),
                vx: 8.5,
                spent: false,
            },
            Bullet {
                pos: Vec2::new(1035.0, 400.0),
                size: Vec2::new(10.0, 4.0),
                vx: 8.5,
                spent: false,
            },
            Bullet {
                pos: Vec2::new(-75.0, 400.0),
                size: Vec2::new(10.0, 4.0),
                vx: -8.5,
                spent: false,
            },
        ];
        update_bullets(&mut bullets, 0.0, 960.0);
        assert_eq!(bullets.len(), 1);
        assert!(approx(bullets[0].pos.x, 508.5));
    }

    #[test]
    fn test_enemy_walks_ten_ticks() {
        let mut enemies = vec![Enemy::new(1000.0, 1.2)];
        for _ in 0..10 {
            update_enemies(&mut enemies, 0.0);
        }
        assert!(approx(enemies[0].pos.x, 988.0));
    }

    #[test]
    fn test_enemies_culled_behind_camera() {
        let mut enemies = vec![Enemy::new(300.0, 2.0), Enemy::new(370.0, 2.0)];
        // Camera at 500: keep while right edge > 400
        update_enemies(&mut enemies, 500.0);
        assert_eq!(enemies.len(), 1);
        assert!(approx(enemies[0].pos.x, 368.0));
    }
}
