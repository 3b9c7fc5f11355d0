//! Frame output: PNG files and terminal previews.

mod png_encoder;
mod terminal;

pub use png_encoder::PngEncoder;
pub use terminal::{TerminalMode, TerminalPreview};
