//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::camera;
use super::kinematics::{update_bullets, update_enemies};
use super::state::{GameEvent, GameState, Player};

/// Input commands for a single tick (deterministic)
///
/// `left`/`right` are held state. Everything else is a one-shot edge the
/// host sets once per press and clears after the tick consumes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
    /// Area-clear mega shot
    pub mega_shot: bool,
    /// Pause toggle
    pub pause: bool,
    /// Restart the run (consumes the tick)
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
///
/// Events pile up in the state until the caller takes them with
/// [`GameState::drain_events`]; past `MAX_PENDING_EVENTS` the oldest are dropped.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart {
        state.restart();
        return;
    }

    if input.pause {
        state.toggle_pause();
    }

    // Paused: everything frozen, action presses dropped
    if state.paused {
        return;
    }

    state.time_ticks += 1;

    if input.jump {
        state.jump();
    }
    if input.shoot {
        state.shoot();
    }
    if input.mega_shot {
        state.mega_shot();
    }

    state.mega_cooldown = state.mega_cooldown.saturating_sub(1);
    state.mega_flash = state.mega_flash.saturating_sub(1);

    match state.player.as_mut() {
        None => {
            state.respawn_ticks = state.respawn_ticks.saturating_sub(1);
            if state.respawn_ticks == 0 {
                state.player = Some(Player::respawn_at(state.camera_x));
                state.push_event(GameEvent::PlayerRespawned);
                log::debug!("Player respawned at camera {:.0}", state.camera_x);
            }
        }
        Some(player) => {
            player.update(input.left, input.right);
            // Camera freezes while the player is absent
            state.camera_x = camera::follow(player.pos.x, state.config.viewport_width);

            update_bullets(
                &mut state.bullets,
                state.camera_x,
                state.config.viewport_width,
            );
            update_enemies(&mut state.enemies, state.camera_x);
            state.resolve_collisions();
        }
    }

    state.update_spawner();
    state.update_high_score();
}
