//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, integer arithmetic only
//! - No I/O, no logging, no clocks
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_exit, ball_visible, hits_paddle, hits_wall, keep_ball_visible};
pub use state::{Arena, GameState, Side};
pub use tick::{
    TickInput, TickOutcome, apply_player_input, award_point, bounce_off_paddles,
    bounce_off_walls, clamp_paddles, integrate_ball, reset_stray_ball, steer_ai_paddle, tick,
};
