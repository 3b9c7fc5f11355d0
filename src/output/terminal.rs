//! Text previews of a frame for terminals without image support.
//!
//! A preview samples the framebuffer at the nearest pixel for each cell.
//! [`TerminalMode::Ascii`] maps Rec. 709 luma onto a ten-step ramp;
//! [`TerminalMode::HalfBlock`] packs two pixel rows into one line with
//! 24-bit foreground and background colors.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use std::fmt::Write as _;

/// How each cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalMode {
    /// Plain characters from a darkness ramp.
    Ascii,
    /// `▀` with ANSI true color; two pixel rows per line.
    #[default]
    HalfBlock,
}

/// Terminal preview settings.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPreview {
    mode: TerminalMode,
    columns: u32,
}

impl Default for TerminalPreview {
    fn default() -> Self {
        Self::new(TerminalMode::default())
    }
}

impl TerminalPreview {
    /// Widest preview, in character cells.
    pub const MAX_COLUMNS: u32 = 80;

    const RAMP: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// A preview at most [`Self::MAX_COLUMNS`] wide.
    #[must_use]
    pub const fn new(mode: TerminalMode) -> Self {
        Self {
            mode,
            columns: Self::MAX_COLUMNS,
        }
    }

    /// Limit the preview to `columns` cells (at least one).
    #[must_use]
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Cell grid `(columns, rows)` for `fb`.
    ///
    /// Terminal cells are about twice as tall as wide, so each line
    /// spans twice the height one column spans in width.
    #[must_use]
    pub fn grid(&self, fb: &Framebuffer) -> (u32, u32) {
        let cols = self.columns.min(fb.width());
        let scale = fb.width() as f32 / cols as f32;
        let rows = ((fb.height() as f32 / scale / 2.0).round() as u32).max(1);
        (cols, rows)
    }

    /// Render `fb` to a string with one trailing newline per line.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        let (cols, rows) = self.grid(fb);
        let mut out = String::new();
        match self.mode {
            TerminalMode::Ascii => {
                for row in 0..rows {
                    out.extend((0..cols).map(|col| Self::ramp(sample(fb, col, cols, row, rows))));
                    out.push('\n');
                }
            }
            TerminalMode::HalfBlock => {
                let subrows = rows * 2;
                for row in 0..rows {
                    for col in 0..cols {
                        let top = sample(fb, col, cols, row * 2, subrows);
                        let bottom = sample(fb, col, cols, row * 2 + 1, subrows);
                        let _ = write!(
                            out,
                            "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m\u{2580}",
                            top.r, top.g, top.b, bottom.r, bottom.g, bottom.b
                        );
                    }
                    out.push_str("\x1b[0m\n");
                }
            }
        }
        out
    }

    fn ramp(pixel: Rgba) -> char {
        let luma = 0.2126 * f32::from(pixel.r) + 0.7152 * f32::from(pixel.g) + 0.0722 * f32::from(pixel.b);
        let last = Self::RAMP.len() - 1;
        let idx = (luma / 255.0 * last as f32).round() as usize;
        Self::RAMP[idx.min(last)]
    }
}

/// Nearest pixel for cell `(col, row)` of a `cols × rows` grid.
fn sample(fb: &Framebuffer, col: u32, cols: u32, row: u32, rows: u32) -> Rgba {
    let x = (u64::from(col) * u64::from(fb.width()) / u64::from(cols)) as u32;
    let y = (u64::from(row) * u64::from(fb.height()) / u64::from(rows)) as u32;
    fb.get_pixel(x.min(fb.width() - 1), y.min(fb.height() - 1))
        .unwrap_or(Rgba::BLACK)
}
