//! Collision detection against the arena walls and paddles
//!
//! All checks use the ball's top-left corner, so the ball can overlap a wall
//! or paddle by up to its own size before reacting.

use glam::IVec2;

use super::state::{Arena, Side};
use crate::consts::BALL_SIZE;

/// Ball is above the top wall or below the bottom one
///
/// Compares against the raw screen height rather than height minus ball size.
#[inline]
pub fn hits_wall(arena: &Arena, ball: IVec2) -> bool {
    ball.y < 0 || ball.y > arena.height
}

/// Ball has reached a paddle's face and lies strictly inside its vertical span
pub fn hits_paddle(arena: &Arena, side: Side, paddle_y: i32, ball: IVec2) -> bool {
    let reached = match side {
        Side::Left => ball.x < arena.paddle_offset + arena.paddle_width,
        Side::Right => ball.x > arena.width - arena.paddle_offset - arena.paddle_width,
    };
    reached && paddle_y < ball.y && ball.y < paddle_y + arena.paddle_height
}

/// Side whose edge the ball has left through, if any
#[inline]
pub fn ball_exit(arena: &Arena, ball: IVec2) -> Option<Side> {
    if ball.x < 0 {
        Some(Side::Left)
    } else if ball.x > arena.width {
        Some(Side::Right)
    } else {
        None
    }
}

/// At least one pixel of the ball square is on screen
#[inline]
pub fn ball_visible(arena: &Arena, ball: IVec2) -> bool {
    let end = ball + BALL_SIZE;
    end.x > 0 && end.y > 0 && ball.x < arena.width && ball.y < arena.height
}

/// Nearest position at which the ball square still overlaps the screen
pub fn keep_ball_visible(arena: &Arena, ball: IVec2) -> IVec2 {
    let min = IVec2::splat(1 - BALL_SIZE);
    let max = IVec2::new(arena.width - 1, arena.height - 1).max(min);
    ball.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_uses_raw_height() {
        let arena = Arena::new(480, 240);
        assert!(hits_wall(&arena, IVec2::new(100, -1)));
        assert!(!hits_wall(&arena, IVec2::new(100, 0)));
        // Ball bottom is already off-screen here, but the check is on the top edge
        assert!(!hits_wall(&arena, IVec2::new(100, 240)));
        assert!(hits_wall(&arena, IVec2::new(100, 241)));
    }

    #[test]
    fn test_paddle_span_is_exclusive() {
        let arena = Arena::new(480, 240);
        // Left paddle covers 50..80
        assert!(hits_paddle(&arena, Side::Left, 50, IVec2::new(5, 60)));
        assert!(!hits_paddle(&arena, Side::Left, 50, IVec2::new(5, 50)));
        assert!(!hits_paddle(&arena, Side::Left, 50, IVec2::new(5, 80)));
        assert!(!hits_paddle(&arena, Side::Left, 50, IVec2::new(30, 60)));
    }

    #[test]
    fn test_right_paddle_face() {
        let arena = Arena::new(480, 240);
        assert!(hits_paddle(&arena, Side::Right, 100, IVec2::new(451, 110)));
        assert!(!hits_paddle(&arena, Side::Right, 100, IVec2::new(450, 110)));
        assert!(!hits_paddle(&arena, Side::Right, 100, IVec2::new(460, 140)));
    }

    #[test]
    fn test_ball_exit() {
        let arena = Arena::new(480, 240);
        assert_eq!(ball_exit(&arena, IVec2::new(-1, 10)), Some(Side::Left));
        assert_eq!(ball_exit(&arena, IVec2::new(481, 10)), Some(Side::Right));
        assert_eq!(ball_exit(&arena, IVec2::new(0, 10)), None);
        assert_eq!(ball_exit(&arena, IVec2::new(480, 10)), None);
    }

    #[test]
    fn test_ball_visibility_edges() {
        let arena = Arena::new(480, 240);
        assert!(ball_visible(&arena, IVec2::new(-9, -9)));
        assert!(ball_visible(&arena, IVec2::new(479, 239)));
        assert!(!ball_visible(&arena, IVec2::new(480, 100)));
        assert!(!ball_visible(&arena, IVec2::new(100, 240)));
        assert!(!ball_visible(&arena, IVec2::new(-10, 100)));
        assert!(!ball_visible(&arena, IVec2::new(100, -10)));
    }

    #[test]
    fn test_keep_ball_visible_only_moves_hidden_balls() {
        let arena = Arena::new(480, 240);
        assert_eq!(keep_ball_visible(&arena, IVec2::new(250, -5)), IVec2::new(250, -5));
        assert_eq!(keep_ball_visible(&arena, IVec2::new(480, 250)), IVec2::new(479, 239));
        assert_eq!(keep_ball_visible(&arena, IVec2::new(0, -10)), IVec2::new(0, -9));
    }
}
