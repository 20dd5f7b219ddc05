//! Horizontal camera follow

use crate::consts::{CAMERA_LEAD, WORLD_WIDTH};

/// Camera offset that keeps `player_x` slightly left of center,
/// clamped to the world. Worlds narrower than the viewport pin to 0.
pub fn follow(player_x: f32, viewport_width: f32) -> f32 {
    let target = player_x - viewport_width * CAMERA_LEAD;
    target.min(WORLD_WIDTH - viewport_width).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_leads_player() {
        let cam = follow(1000.0, 800.0);
        assert!((cam - 720.0).abs() < 1e-3);
    }

    #[test]
    fn test_follow_clamps_at_world_start() {
        assert_eq!(follow(120.0, 960.0), 0.0);
    }

    #[test]
    fn test_follow_clamps_at_world_end() {
        assert_eq!(follow(WORLD_WIDTH - 32.0, 960.0), WORLD_WIDTH - 960.0);
    }

    #[test]
    fn test_viewport_wider_than_world() {
        assert_eq!(follow(2500.0, WORLD_WIDTH * 2.0), 0.0);
    }
}
