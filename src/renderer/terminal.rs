//! Presents frames as text using half-block characters
//!
//! Each character cell covers an 8x16 pixel block split into a top and a bottom
//! half; a half is drawn when any pixel inside it is lit.

use std::fmt::Write as _;
use std::io::{self, Write};

use termion::{clear, cursor};

use super::FrameSink;
use super::framebuffer::Framebuffer;

/// Pixels per character column
pub const CELL_WIDTH: u32 = 8;
/// Pixels per character row (two halves)
pub const CELL_HEIGHT: u32 = 16;

/// Repaints the whole frame from the top-left corner every tick
pub struct TerminalSink<W: Write> {
    out: W,
    buf: String,
}

impl<W: Write> TerminalSink<W> {
    /// Takes over `out` and clears the screen
    pub fn new(mut out: W) -> io::Result<Self> {
        write!(out, "{}", clear::All)?;
        out.flush()?;
        Ok(Self {
            out,
            buf: String::new(),
        })
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn present(&mut self, frame: &Framebuffer) -> io::Result<()> {
        self.buf.clear();
        let _ = write!(self.buf, "{}", cursor::Goto(1, 1));
        for row in frame_rows(frame) {
            self.buf.push_str(&row);
            // Raw mode: a bare newline does not return the carriage
            self.buf.push_str("\r\n");
        }
        self.out.write_all(self.buf.as_bytes())?;
        self.out.flush()
    }
}

/// Text rows for a frame, one string per character row
pub fn frame_rows(frame: &Framebuffer) -> Vec<String> {
    let cols = frame.width().div_ceil(CELL_WIDTH);
    let rows = frame.height().div_ceil(CELL_HEIGHT);
    let half = CELL_HEIGHT / 2;

    (0..rows)
        .map(|row| {
            let y = row * CELL_HEIGHT;
            (0..cols)
                .map(|col| {
                    let x = col * CELL_WIDTH;
                    let top = block_lit(frame, x, y, half);
                    let bottom = block_lit(frame, x, y + half, half);
                    cell_char(top, bottom)
                })
                .collect()
        })
        .collect()
}

fn cell_char(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (false, false) => ' ',
        (true, false) => '▀',
        (false, true) => '▄',
        (true, true) => '█',
    }
}

/// Any lit pixel in the `CELL_WIDTH` x `height` block at (x, y)
fn block_lit(frame: &Framebuffer, x: u32, y: u32, height: u32) -> bool {
    let x_end = (x + CELL_WIDTH).min(frame.width());
    let y_end = (y + height).min(frame.height());
    (y..y_end).any(|py| {
        (x..x_end).any(|px| {
            frame
                .get(px as i32, py as i32)
                .is_some_and(|p| p.is_lit())
        })
    })
}
