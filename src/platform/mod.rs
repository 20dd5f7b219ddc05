//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keyboard, on-screen buttons)
//! - Frame timing (fixed timestep accumulator)
//! - Storage (LocalStorage on web)

pub mod clock;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod storage;

pub use clock::FrameClock;
pub use input::{InputAction, InputState};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
