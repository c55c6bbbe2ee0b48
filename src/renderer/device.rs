//! Presents frames on a raw framebuffer device such as `/dev/fb0`
//!
//! The device is expected to be 32 bits per pixel, BGRA, with the same
//! geometry as the configured screen and no row padding.

use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;

use super::FrameSink;
use super::framebuffer::Framebuffer;

/// Writes every frame over the start of the device
pub struct DeviceSink<W> {
    device: W,
}

impl DeviceSink<File> {
    pub fn open(path: &Path) -> io::Result<Self> {
        let device = OpenOptions::new().write(true).open(path)?;
        log::info!("Opened framebuffer device {}", path.display());
        Ok(Self::new(device))
    }
}

impl<W: Write + Seek> DeviceSink<W> {
    pub fn new(device: W) -> Self {
        Self { device }
    }

    pub fn into_inner(self) -> W {
        self.device
    }
}

impl<W: Write + Seek> FrameSink for DeviceSink<W> {
    fn present(&mut self, frame: &Framebuffer) -> io::Result<()> {
        self.device.seek(SeekFrom::Start(0))?;
        self.device.write_all(frame.as_bytes())?;
        self.device.flush()
    }
}
