//! Poke Shooter - A 2D arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, spawning, collisions, levels)
//! - `platform`: Frame clock shared by the browser and native drivers
//! - `settings`: Runtime configuration
//! - `audio`: Background music helpers
//! - `renderer`: Canvas 2D rendering (wasm only)

pub mod audio;
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 1024.0;
    pub const CANVAS_HEIGHT: f32 = 652.0;
    /// Height of the ground strip at the bottom of the canvas
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Nominal frame duration used by headless drivers (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 81.5;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const JUMP_POWER: f32 = 15.0;
    pub const GRAVITY: f32 = 0.5;

    /// Bullets travel straight up
    pub const BULLET_SIZE: f32 = 20.0;
    pub const BULLET_SPEED: f32 = -10.0;

    /// Regular enemies
    pub const ENEMY_SIZE: f32 = 50.0;
    pub const ENEMY_MIN_SPEED: f32 = 1.0;
    pub const ENEMY_SPEED_RANGE: f32 = 2.0;

    /// Boss ("team") enemy
    pub const BOSS_SIZE: f32 = 600.0;
    pub const BOSS_MIN_SPEED: f32 = 0.5;
    pub const BOSS_SPEED_RANGE: f32 = 1.0;
    pub const BOSS_HP: u32 = 10;
    pub const BOSS_BONUS: u32 = 5;
    pub const BOSS_SCORE_THRESHOLD: u32 = 50;

    /// Collectible pokes
    pub const ITEM_SIZE: f32 = 30.0;
    pub const ITEM_SPEED: f32 = 3.0;
    pub const ITEM_SPAWN_INTERVAL_MS: f64 = 8000.0;
    pub const ITEM_SCORE: u32 = 5;

    /// Session
    pub const INITIAL_LIVES: i32 = 10;
    /// Enemy spawn interval in effect before the first spawn
    pub const INITIAL_ENEMY_SPAWN_INTERVAL_MS: f64 = 3000.0;
    /// "CATCH THEM ALL!" message lifetime (frames)
    pub const CATCH_MESSAGE_FRAMES: u32 = 90;

    /// Deferred effect delays
    pub const TOUCH_CUE_MS: f64 = 2000.0;
    pub const BANNER_MS: f64 = 3000.0;
    pub const LEVEL_PAUSE_SECS: u32 = 3;
    pub const GAME_OVER_DELAY_MS: f64 = 5000.0;
    pub const GAME_OVER_COOLDOWN_SECS: u32 = 5;

    /// Level gates (seconds since session start)
    pub const LEVEL_2_SCORE: u32 = 50;
    pub const LEVEL_2_DEADLINE_SECS: u32 = 60;
    pub const LEVEL_3_SCORE: u32 = 100;
    pub const LEVEL_3_DEADLINE_SECS: u32 = 120;
}

/// Y coordinate of the ground line (top edge of the ground strip)
#[inline]
pub fn ground_line() -> f32 {
    consts::CANVAS_HEIGHT - consts::GROUND_HEIGHT
}
