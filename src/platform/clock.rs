//! Fixed timestep frame clock
//!
//! Converts animation-frame timestamps into a number of simulation ticks.
//! Long frames are clamped and substeps capped to prevent a spiral of death.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame delta honored, in seconds
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f32,
    last_time_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks to run for a frame at `now_ms`. The first frame runs one tick.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let dt = match self.last_time_ms {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => SIM_DT,
        };
        self.last_time_ms = Some(now_ms);
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            // Drop the backlog rather than fast-forwarding later
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        steps
    }

    /// Forget timing history (after a restart or a hidden tab)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time_ms = None;
    }
}
