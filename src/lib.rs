//! Pong - a two-paddle ball game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, paddles, scoring, AI)
//! - `game_loop`: Fixed-tick driver (poll → update → render → sleep)
//! - `platform`: Clock and input collaborators
//! - `renderer`: Software rasterizer and its terminal/framebuffer sinks
//! - `config`: Screen geometry, tick rate and variant presets

pub mod config;
pub mod error;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{Config, Variant};
pub use error::{ConfigError, InitError};
pub use game_loop::{GameLoop, LoopState, LoopSummary};

/// Game configuration constants
pub mod consts {
    /// Ball edge length in pixels (the ball is a square)
    pub const BALL_SIZE: i32 = 10;
    /// Ball speed per axis, pixels per tick
    pub const BALL_SPEED: i32 = 10;
    /// Paddle movement per tick, pixels
    pub const PADDLE_SPEED: i32 = 15;

    /// Default screen dimensions
    pub const DEFAULT_SCREEN_WIDTH: u32 = 480;
    pub const DEFAULT_SCREEN_HEIGHT: u32 = 240;
    /// Largest accepted screen dimension (keeps pixel math in i32)
    pub const MAX_SCREEN_DIMENSION: u32 = 16_384;

    /// Default tick rate of the windowed variants
    pub const DEFAULT_TICK_RATE_HZ: u32 = 30;
    /// Tick rate of the framebuffer variant
    pub const FRAMEBUFFER_TICK_RATE_HZ: u32 = 24;
}
