//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (all constants are per tick)
//! - Seeded RNG only
//! - Stable iteration order (list insertion order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod geometry;
pub mod kinematics;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod weapons;

pub use collision::{CollisionOutcome, player_hit, resolve_bullet_hits};
pub use geometry::{Rect, overlaps};
pub use state::{
    Bullet, Enemy, Facing, GameEvent, GameState, MAX_PENDING_EVENTS, Player, SimConfig,
};
pub use tick::{TickInput, tick};
