//! Collision resolution between the player, enemies and bullets
//!
//! Scans run in list insertion order. Only "first match wins" is
//! guaranteed, never which particular entity is matched.

use super::geometry::Rect;
use super::state::{Bullet, Enemy, GameEvent, GameState};
use crate::consts::KILL_SCORE;

/// Result of one collision pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Player touched an enemy; no other checks were made
    PlayerKilled,
    /// Bullets resolved against enemies
    Resolved { kills: u32 },
}

/// Check whether the player touches any enemy
pub fn player_hit(player: &Rect, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|e| player.overlaps(&e.rect()))
}

/// Resolve bullet hits: each enemy is destroyed by at most one bullet,
/// and each bullet destroys at most one enemy.
///
/// Surviving enemies keep their order. Spent bullets are removed,
/// including any already spent before the call. Returns the kill count.
pub fn resolve_bullet_hits(enemies: &mut Vec<Enemy>, bullets: &mut Vec<Bullet>) -> u32 {
    let mut kills = 0;
    enemies.retain(|enemy| {
        let rect = enemy.rect();
        let hit = bullets
            .iter_mut()
            .find(|b| !b.spent && rect.overlaps(&b.rect()));
        match hit {
            Some(bullet) => {
                bullet.spent = true;
                kills += 1;
                false
            }
            None => true,
        }
    });
    bullets.retain(|b| !b.spent);
    kills
}

impl GameState {
    /// Run the collision pass for this tick. Does nothing while dead.
    pub(crate) fn resolve_collisions(&mut self) -> Option<CollisionOutcome> {
        let player_rect = self.player.as_ref()?.rect();

        if player_hit(&player_rect, &self.enemies) {
            self.kill_player();
            return Some(CollisionOutcome::PlayerKilled);
        }

        let kills = resolve_bullet_hits(&mut self.enemies, &mut self.bullets);
        self.score += KILL_SCORE * u64::from(kills);
        for _ in 0..kills {
            self.push_event(GameEvent::EnemyKilled);
        }
        Some(CollisionOutcome::Resolved { kills })
    }
}
