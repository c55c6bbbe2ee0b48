//! In-memory 32-bit framebuffer

use bytemuck::{Pod, Zeroable};
use glam::IVec2;

/// One pixel in the BGRA byte order Linux framebuffer devices use
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Pixel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, a: 0xFF }
    }

    /// Anything other than black counts as drawn
    #[inline]
    pub fn is_lit(&self) -> bool {
        (self.r | self.g | self.b) != 0
    }
}

/// Colors for game elements
pub mod colors {
    use super::Pixel;

    pub const BACKGROUND: Pixel = Pixel::rgb(0x00, 0x00, 0x00);
    pub const FOREGROUND: Pixel = Pixel::rgb(0xFF, 0xFF, 0xFF);
}

/// Row-major pixel buffer; drawing outside it is clipped
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![colors::BACKGROUND; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Raw bytes, 4 per pixel, ready for a framebuffer device
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn clear(&mut self, color: Pixel) {
        self.pixels.fill(color);
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, color: Pixel) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Fill the rectangle at `pos` (top-left) of the given size
    pub fn fill_rect(&mut self, pos: IVec2, size: IVec2, color: Pixel) {
        let bounds = IVec2::new(self.width as i32, self.height as i32);
        let min = pos.clamp(IVec2::ZERO, bounds);
        let max = (pos + size).clamp(IVec2::ZERO, bounds);
        if max.x <= min.x || max.y <= min.y {
            return;
        }
        for y in min.y..max.y {
            let row = (y as u32 * self.width) as usize;
            self.pixels[row + min.x as usize..row + max.x as usize].fill(color);
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as u32 * self.width + x as u32) as usize)
    }
}
