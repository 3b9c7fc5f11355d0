//! End-to-end checks: configuration -> scene -> renderer -> encoded frame.
//!
//! Run: cargo test --test scene_pipeline_test

#![allow(clippy::unwrap_used)]

use std::io::Write;
use trueno_raster::interaction::{CircleTool, KeyBinding, LineTool};
use trueno_raster::output::{PngEncoder, TerminalMode, TerminalPreview};
use trueno_raster::prelude::*;
use trueno_raster::scenes::{self, SCENE_NAMES};

fn small_config() -> Config {
    Config::parse("canvas:\n  width: 48\n  height: 36\n").unwrap()
}

#[test]
fn every_scene_renders_and_encodes() {
    let config = small_config();
    for name in SCENE_NAMES {
        let mut renderer = Renderer::new(config.canvas.width, config.canvas.height).unwrap();
        let mut scene = scenes::by_name(name, &config).unwrap();
        scenes::run(scene.as_mut(), &mut renderer, 5).unwrap();

        let background = scene.background().to_rgba();
        assert!(
            renderer.framebuffer().count_differing(background) > 0,
            "scene '{name}' drew nothing"
        );
        let png = PngEncoder::to_bytes(renderer.framebuffer()).unwrap();
        assert!(png.len() > 8, "scene '{name}' produced an empty PNG");
    }
}

#[test]
fn scenes_are_deterministic_for_a_seed() {
    let config = small_config();
    let frame = |name: &str| {
        let mut renderer = Renderer::new(48, 36).unwrap();
        let mut scene = scenes::by_name(name, &config).unwrap();
        scenes::run(scene.as_mut(), &mut renderer, 3).unwrap();
        renderer.framebuffer().to_compact_pixels()
    };
    // the orbit sphere and the point cloud use random colors
    assert_eq!(frame("orbit"), frame("orbit"));
    assert_eq!(frame("points"), frame("points"));
}

#[test]
fn config_file_selects_perspective_orbit() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "canvas:\n  width: 40\n  height: 40\nprojection:\n  kind: perspective\n  fov_y_degrees: 45"
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.canvas.width, 40);
    let mut renderer = Renderer::new(40, 40).unwrap();
    let mut scene = scenes::by_name("orbit", &config).unwrap();
    scenes::run(scene.as_mut(), &mut renderer, 1).unwrap();
    assert!(renderer.framebuffer().count_differing(Rgba::WHITE) > 0);
}

#[test]
fn unknown_scene_is_an_error() {
    let err = scenes::by_name("teapot", &Config::default()).err().unwrap();
    assert!(matches!(err, Error::UnknownScene(ref s) if s == "teapot"));
}

#[test]
fn line_tool_session_draws_on_canvas() {
    let mut renderer = Renderer::new(40, 40).unwrap();
    let mut tool = LineTool::with_rng(KeyBinding::ToolModes, fastrand::Rng::with_seed(3));
    tool.initial().apply(&mut renderer, Rgb::WHITE).unwrap();

    tool.handle(InputEvent::click(5.0, 5.0)).apply(&mut renderer, Rgb::WHITE).unwrap();
    let out = tool.handle(InputEvent::click(30.0, 20.0));
    assert!(out.is_change());
    out.apply(&mut renderer, Rgb::WHITE).unwrap();

    let fb = renderer.framebuffer();
    assert_ne!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
    assert_ne!(fb.get_pixel(30, 20), Some(Rgba::WHITE));
    assert_eq!(fb.get_pixel(35, 2), Some(Rgba::WHITE));
}

#[test]
fn circle_tool_session_draws_ring() {
    let mut renderer = Renderer::new(41, 41).unwrap();
    let mut tool = CircleTool::new();
    tool.handle(InputEvent::click(20.0, 20.0)).apply(&mut renderer, Rgb::WHITE).unwrap();
    tool.handle(InputEvent::click(30.0, 20.0)).apply(&mut renderer, Rgb::WHITE).unwrap();

    let fb = renderer.framebuffer();
    assert_eq!(fb.get_pixel(30, 20), Some(Rgba::BLACK));
    assert_eq!(fb.get_pixel(20, 10), Some(Rgba::BLACK));
    assert_eq!(fb.get_pixel(20, 20), Some(Rgba::WHITE));
}

#[test]
fn terminal_preview_of_scene() {
    let config = small_config();
    let mut renderer = Renderer::new(48, 36).unwrap();
    let mut scene = scenes::by_name("garden", &config).unwrap();
    scenes::run(scene.as_mut(), &mut renderer, 0).unwrap();

    let text = TerminalPreview::new(TerminalMode::Ascii).render(renderer.framebuffer());
    assert_eq!(text.lines().count(), 18);
    // black background with bright petals
    assert!(text.contains(' '));
    assert!(text.chars().any(|c| c != ' ' && c != '\n'));
}
