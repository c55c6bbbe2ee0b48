//! Software rasterizer for the game state

use std::io;

use glam::IVec2;

use super::font;
use super::framebuffer::{Framebuffer, colors};
use super::{FrameSink, Renderer};
use crate::consts::BALL_SIZE;
use crate::sim::{Arena, GameState, Side};

/// Spacing of the dotted center line, in pixels
const CENTER_LINE_STEP: usize = 10;

/// Optional decorations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Dotted vertical line down the middle
    pub center_line: bool,
    /// `"<left> - <right>"` centered at the top
    pub score: bool,
    /// Pixel size of one font dot
    pub score_scale: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            center_line: true,
            score: true,
            score_scale: 4,
        }
    }
}

/// Rasterizes each state into a framebuffer and hands it to a sink
pub struct RasterRenderer<S> {
    frame: Framebuffer,
    options: RenderOptions,
    sink: S,
}

impl<S: FrameSink> RasterRenderer<S> {
    pub fn new(arena: &Arena, options: RenderOptions, sink: S) -> Self {
        Self {
            frame: Framebuffer::new(arena.width as u32, arena.height as u32),
            options,
            sink,
        }
    }

    pub fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Redraw the frame from scratch without presenting it
    pub fn draw(&mut self, state: &GameState) {
        let arena = &state.arena;
        let fb = &mut self.frame;
        fb.clear(colors::BACKGROUND);

        for side in Side::BOTH {
            let pos = IVec2::new(arena.paddle_x(side), state.paddle_y(side));
            fb.fill_rect(pos, arena.paddle_size(), colors::FOREGROUND);
        }

        fb.fill_rect(state.ball_pos, IVec2::splat(BALL_SIZE), colors::FOREGROUND);

        if self.options.center_line {
            let x = arena.width / 2;
            for y in (0..arena.height).step_by(CENTER_LINE_STEP) {
                fb.put_pixel(x, y, colors::FOREGROUND);
            }
        }

        if self.options.score {
            let text = state.score_text();
            let scale = self.options.score_scale.max(1);
            let x = arena.width / 2 - font::text_width(&text, scale) / 2;
            font::draw_text(fb, &text, IVec2::new(x, 0), scale, colors::FOREGROUND);
        }
    }
}

impl<S: FrameSink> Renderer for RasterRenderer<S> {
    fn render(&mut self, state: &GameState) -> io::Result<()> {
        self.draw(state);
        self.sink.present(&self.frame)
    }
}
