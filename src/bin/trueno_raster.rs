//! trueno-raster - render a demo scene to PNG or the terminal.
//!
//! ```text
//! trueno-raster pinwheel --frames 120 --out pinwheel.png
//! trueno-raster orbit --size 120x60 --terminal
//! ```

use clap::Parser;
use log::info;
use std::path::PathBuf;
use trueno_raster::config::Config;
use trueno_raster::framebuffer::Framebuffer;
use trueno_raster::output::{PngEncoder, TerminalMode, TerminalPreview};
use trueno_raster::render::Renderer;
use trueno_raster::scenes::{self, SCENE_NAMES};

/// Render one frame of an animated raster-graphics scene.
#[derive(Parser, Debug)]
#[command(name = "trueno-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Software-rendered raster graphics scenes", long_about = None)]
struct Cli {
    /// Scene to render
    #[arg(value_parser = clap::builder::PossibleValuesParser::new(SCENE_NAMES))]
    scene: String,

    /// Animation frames to step before rendering (overrides the config)
    #[arg(short, long)]
    frames: Option<u64>,

    /// Canvas size as WIDTHxHEIGHT (overrides the config)
    #[arg(short, long, value_parser = parse_size)]
    size: Option<(u32, u32)>,

    /// PNG output path
    #[arg(short, long, default_value = "frame.png")]
    out: PathBuf,

    /// Print an ANSI preview instead of writing a PNG
    #[arg(short, long)]
    terminal: bool,

    /// Config file path (default: per-user config, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let side = |v: &str| v.trim().parse::<u32>().map_err(|e| format!("bad size '{v}': {e}"));
    Ok((side(w)?, side(h)?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    info!("SIMD backend: {:?}", Framebuffer::backend());

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default_path().map(Config::load_or_default).unwrap_or_default(),
    };
    if let Some((width, height)) = cli.size {
        config.canvas.width = width;
        config.canvas.height = height;
    }
    let frames = cli.frames.unwrap_or(config.render.frames);

    let mut renderer = Renderer::new(config.canvas.width, config.canvas.height)?;
    let mut scene = scenes::by_name(&cli.scene, &config)?;
    scenes::run(scene.as_mut(), &mut renderer, frames)?;

    if cli.terminal {
        print!("{}", TerminalPreview::new(TerminalMode::HalfBlock).render(renderer.framebuffer()));
    } else {
        PngEncoder::write_to_file(renderer.framebuffer(), &cli.out)?;
        info!("saved {}", cli.out.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("320x200"), Ok((320, 200)));
        assert_eq!(parse_size("64X48"), Ok((64, 48)));
        assert!(parse_size("320").is_err());
        assert!(parse_size("ax2").is_err());
    }

    #[test]
    fn test_cli_parses_scene_and_flags() {
        let cli = Cli::try_parse_from(["trueno-raster", "car", "-f", "10", "--size", "32x16"]).unwrap();
        assert_eq!(cli.scene, "car");
        assert_eq!(cli.frames, Some(10));
        assert_eq!(cli.size, Some((32, 16)));
        assert!(!cli.terminal);
    }

    #[test]
    fn test_cli_rejects_unknown_scene() {
        assert!(Cli::try_parse_from(["trueno-raster", "teapot"]).is_err());
    }
}
