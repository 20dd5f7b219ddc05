//! Canvas2D rendering module
//!
//! Draws the read-only simulation state as flat rectangles, translated by
//! the camera. No sprite art.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::GROUND_Y;
use crate::sim::{GameState, Rect};

const SKY: &str = "#02040c";
const GRASS: &str = "#8fc82f";
const DIRT: &str = "#8f7a2a";
const PLAYER: &str = "#2d5fd6";
const BULLET: &str = "#ffd34d";
const ENEMY: &str = "#cf3a2d";
const FLASH: &str = "rgba(255, 255, 220, 0.35)";
const BANNER: &str = "#e6e6e6";

/// Rendering state bound to one canvas
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Returns `None` if the canvas has no 2D context
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }

    /// Render the current frame
    pub fn render(&self, state: &GameState, screen_flash: bool) {
        let camera_x = f64::from(state.camera_x());
        let ground = f64::from(GROUND_Y);

        self.fill(SKY, 0.0, 0.0, self.width, self.height);
        self.fill(GRASS, 0.0, ground - 16.0, self.width, 16.0);
        self.fill(DIRT, 0.0, ground, self.width, self.height - ground);

        for bullet in state.bullets() {
            self.fill_rect(BULLET, &bullet.rect(), camera_x);
        }
        for enemy in state.enemies() {
            self.fill_rect(ENEMY, &enemy.rect(), camera_x);
        }

        match state.player() {
            Some(player) => self.fill_rect(PLAYER, &player.rect(), camera_x),
            None => {
                self.ctx.set_fill_style_str(BANNER);
                self.ctx.set_font("24px sans-serif");
                let _ = self
                    .ctx
                    .fill_text("Respawning...", self.width / 2.0 - 70.0, 120.0);
            }
        }

        if screen_flash && state.mega_flash() > 0 {
            self.fill(FLASH, 0.0, 0.0, self.width, self.height);
        }
    }

    fn fill_rect(&self, color: &str, rect: &Rect, camera_x: f64) {
        self.fill(
            color,
            f64::from(rect.pos.x) - camera_x,
            f64::from(rect.pos.y),
            f64::from(rect.size.x),
            f64::from(rect.size.y),
        );
    }

    fn fill(&self, color: &str, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }
}
