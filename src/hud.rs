//! HUD view of the simulation
//!
//! Plain data built once per frame for the DOM overlay.

use serde::Serialize;

use crate::consts::TICK_RATE_HZ;
use crate::sim::GameState;

/// Everything the HUD shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub high_score: u64,
    pub deaths: u32,
    /// "Ready", seconds remaining ("10s"), or "Off"
    pub mega_status: String,
    /// "Paused" or "Running"
    pub status: &'static str,
    /// Label for the pause button
    pub pause_label: &'static str,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        let paused = state.is_paused();
        Self {
            score: state.score(),
            high_score: state.high_score(),
            deaths: state.deaths(),
            mega_status: mega_status(state),
            status: if paused { "Paused" } else { "Running" },
            pause_label: if paused { "Resume" } else { "Pause" },
        }
    }
}

fn mega_status(state: &GameState) -> String {
    if !state.config().mega_shot_enabled {
        return "Off".to_string();
    }
    match state.mega_cooldown() {
        0 => "Ready".to_string(),
        ticks => format!("{}s", ticks.div_ceil(TICK_RATE_HZ)),
    }
}
