//! Frame export to 8-bit RGBA PNG.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes framebuffers as PNG images.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl PngEncoder {
    /// Save `fb` to `path`, creating or truncating the file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the file cannot be created and
    /// [`crate::Error::PngEncoding`] if encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        Self::encode_into(fb, &mut out)?;
        out.flush()?;
        debug!("wrote {}x{} frame to {}", fb.width(), fb.height(), path.display());
        Ok(())
    }

    /// Encode `fb` into an in-memory PNG.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PngEncoding`] if encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(fb.width() as usize * fb.height() as usize);
        Self::encode_into(fb, &mut bytes)?;
        Ok(bytes)
    }

    fn encode_into<W: Write>(fb: &Framebuffer, sink: W) -> Result<()> {
        let mut encoder = png::Encoder::new(sink, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        // the framebuffer's padded rows must be packed before encoding
        encoder.write_header()?.write_image_data(&fb.to_compact_pixels())?;
        Ok(())
    }
}
