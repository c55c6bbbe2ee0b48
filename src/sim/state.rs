//! Game state and core simulation types
//!
//! Everything a running match needs lives in [`GameState`]; the arena
//! geometry is derived once from the screen size and never changes.

use glam::IVec2;

use crate::consts::*;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Both sides, in update order
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Screen geometry the simulation runs in
///
/// Paddles are 1/8 of the screen height tall and 1/32 of the screen width
/// wide, inset from the edge by another 1/32 of the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_offset: i32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(DEFAULT_SCREEN_WIDTH as i32, DEFAULT_SCREEN_HEIGHT as i32)
    }
}

impl Arena {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            paddle_width: width / 32,
            paddle_height: height / 8,
            paddle_offset: width / 32,
        }
    }

    /// Ball serve position
    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// Lowest allowed paddle top edge
    #[inline]
    pub fn paddle_max_y(&self) -> i32 {
        self.height - self.paddle_height
    }

    /// Left edge of a paddle
    #[inline]
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.paddle_offset,
            Side::Right => self.width - self.paddle_offset - self.paddle_width,
        }
    }

    /// Paddle size as a vector (width, height)
    #[inline]
    pub fn paddle_size(&self) -> IVec2 {
        IVec2::new(self.paddle_width, self.paddle_height)
    }
}

/// Complete state of one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Derived geometry, fixed for the lifetime of the match
    pub arena: Arena,
    /// Ball top-left corner
    pub ball_pos: IVec2,
    /// Ball velocity, pixels per tick
    pub ball_vel: IVec2,
    /// Paddle top edges
    pub left_paddle_y: i32,
    pub right_paddle_y: i32,
    pub left_score: u32,
    pub right_score: u32,
    /// Whether a side is computer-controlled
    pub left_ai: bool,
    pub right_ai: bool,
}

impl GameState {
    /// Fresh match: ball centered and heading down-right, paddles at mid-height
    pub fn new(arena: Arena, left_ai: bool, right_ai: bool) -> Self {
        let center = arena.center();
        Self {
            arena,
            ball_pos: center,
            ball_vel: IVec2::splat(BALL_SPEED),
            left_paddle_y: center.y,
            right_paddle_y: center.y,
            left_score: 0,
            right_score: 0,
            left_ai,
            right_ai,
        }
    }

    #[inline]
    pub fn paddle_y(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left_paddle_y,
            Side::Right => self.right_paddle_y,
        }
    }

    #[inline]
    pub fn paddle_y_mut(&mut self, side: Side) -> &mut i32 {
        match side {
            Side::Left => &mut self.left_paddle_y,
            Side::Right => &mut self.right_paddle_y,
        }
    }

    #[inline]
    pub fn is_ai(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left_ai,
            Side::Right => self.right_ai,
        }
    }

    #[inline]
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    /// Put the ball back at the serve position with the given velocity
    pub fn recenter_ball(&mut self, vel: IVec2) {
        self.ball_pos = self.arena.center();
        self.ball_vel = vel;
    }

    /// Scoreboard text, e.g. `"3 - 1"`
    pub fn score_text(&self) -> String {
        format!("{} - {}", self.left_score, self.right_score)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Arena::default(), true, true)
    }
}
