//! Rendering
//!
//! Every backend shares one software rasterizer ([`RasterRenderer`]) that draws
//! the game into a [`Framebuffer`]; a [`FrameSink`] then presents the finished
//! frame on a terminal or a framebuffer device.

use std::io;

use crate::sim::GameState;

pub mod device;
pub mod font;
pub mod framebuffer;
pub mod raster;
pub mod terminal;

pub use device::DeviceSink;
pub use framebuffer::{Framebuffer, Pixel};
pub use raster::{RasterRenderer, RenderOptions};
pub use terminal::TerminalSink;

/// Draws the current state once per tick
pub trait Renderer {
    fn render(&mut self, state: &GameState) -> io::Result<()>;
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn render(&mut self, state: &GameState) -> io::Result<()> {
        (**self).render(state)
    }
}

/// Presents a finished frame
pub trait FrameSink {
    fn present(&mut self, frame: &Framebuffer) -> io::Result<()>;
}

/// Draws nothing (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &GameState) -> io::Result<()> {
        Ok(())
    }
}
