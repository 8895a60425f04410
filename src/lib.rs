//! Waveslash core crate.
//!
//! A wave-based hack-and-slash on a tiled canvas: the avatar moves with the
//! arrow keys or on-screen touch buttons, swings a short-lived sword, and
//! survives escalating enemy waves. All gameplay state and the per-frame
//! step are pure Rust (see `arena::world` and `arena::step`) and run under
//! native `cargo test`; the browser shell (canvas, event listeners, the
//! requestAnimationFrame loop) is a thin `web-sys` layer in `arena`.

use wasm_bindgen::prelude::*;

pub mod arena;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// -----------------------------------------------------------------------------
// Gameplay tuning constants (pixel units, per-frame speeds)
// -----------------------------------------------------------------------------

/// Edge length of one background tile.
pub const TILE_SIZE: f64 = 32.0;
/// Player bounding box edge length.
pub const PLAYER_SIZE: f64 = 32.0;
/// Enemy bounding box edge length.
pub const ENEMY_SIZE: f64 = 32.0;
/// Sword bounding box dimensions.
pub const SWORD_WIDTH: f64 = 20.0;
pub const SWORD_HEIGHT: f64 = 20.0;
/// Player movement per frame along each pressed axis (diagonals are both
/// axes at full speed, not normalized).
pub const MOVE_SPEED: f64 = 5.0;
/// Enemy chase step per frame, applied per axis.
pub const ENEMY_SPEED: f64 = 2.0;
/// Wall-clock lifetime of one sword swing.
pub const SWORD_SWING_MS: f64 = 200.0;
/// Health lost per overlapping enemy per frame.
pub const CONTACT_DAMAGE: i32 = 10;
/// Score awarded per sword kill.
pub const KILL_SCORE: u32 = 10;
/// Starting player health, also the clamp ceiling.
pub const MAX_HEALTH: i32 = 100;
/// A wave holds `WAVE_BASE + level` enemies.
pub const WAVE_BASE: usize = 5;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Ignore the error if a logger is already installed (hot reload).
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Boot the game inside the current page: canvas, listeners, frame loop.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    arena::start()
}
