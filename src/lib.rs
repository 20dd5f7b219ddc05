//! Jungle Run - A side-scrolling run-and-gun arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, spawning, camera)
//! - `hud`: Read-only HUD view of the simulation
//! - `renderer`: Canvas2D rendering (web only)
//! - `platform`: Browser input, fixed timestep clock, LocalStorage
//! - `persistence`: Player name and high score storage
//! - `settings`: Player preferences

pub mod hud;
pub mod persistence;
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use hud::HudSnapshot;
pub use settings::Settings;

/// Game configuration constants
///
/// Every velocity, acceleration and timer is expressed per simulation tick.
/// The values are tuned for `TICK_RATE_HZ`; changing the tick rate means
/// re-tuning all of them.
pub mod consts {
    /// Fixed simulation rate
    pub const TICK_RATE_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// World extent
    pub const WORLD_WIDTH: f32 = 5000.0;
    /// Floor line (y grows downward)
    pub const GROUND_Y: f32 = 450.0;
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.8;
    /// Canvas width used when the host doesn't report one
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 960.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 120.0;
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 58.0;
    pub const PLAYER_SPEED: f32 = 4.2;
    pub const JUMP_IMPULSE: f32 = -13.5;
    /// Ticks between standard shots
    pub const SHOOT_COOLDOWN_TICKS: u32 = 12;

    /// Respawn: ticks spent absent, and placement relative to the camera
    pub const RESPAWN_TICKS: u32 = 45;
    pub const RESPAWN_MIN_X: f32 = 60.0;
    pub const RESPAWN_CAMERA_OFFSET: f32 = 50.0;

    /// Camera keeps the player this far into the viewport
    pub const CAMERA_LEAD: f32 = 0.35;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 10.0;
    pub const BULLET_HEIGHT: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 8.5;
    /// Muzzle height below the player's top edge
    pub const BULLET_Y_OFFSET: f32 = 22.0;
    /// Muzzle distance behind the left edge when facing left
    pub const BULLET_REAR_OFFSET: f32 = 8.0;
    /// Bullets survive this far outside the viewport
    pub const BULLET_CULL_MARGIN: f32 = 80.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 34.0;
    pub const ENEMY_HEIGHT: f32 = 48.0;
    pub const ENEMY_MIN_SPEED: f32 = 1.2;
    pub const ENEMY_MAX_SPEED: f32 = 2.4;
    /// Spawn distance past the viewport's right edge
    pub const ENEMY_SPAWN_MARGIN: f32 = 80.0;
    pub const ENEMY_SPAWN_JITTER: f32 = 300.0;
    /// Enemies never spawn closer than this to the world's right end
    pub const ENEMY_SPAWN_EDGE: f32 = 40.0;
    /// Enemies are dropped once this far behind the camera
    pub const ENEMY_CULL_MARGIN: f32 = 100.0;
    /// Spawn interval range in ticks (inclusive min, exclusive max)
    pub const ENEMY_SPAWN_MIN_TICKS: u32 = 40;
    pub const ENEMY_SPAWN_MAX_TICKS: u32 = 75;

    /// Score per enemy killed
    pub const KILL_SCORE: u64 = 100;

    /// Mega shot (area clear)
    pub const MEGA_COOLDOWN_TICKS: u32 = 600;
    pub const MEGA_FLASH_TICKS: u32 = 10;
    pub const MEGA_VIEW_MARGIN: f32 = 10.0;

    /// Longest accepted player name, in characters
    pub const MAX_PLAYER_NAME: usize = 20;
}
