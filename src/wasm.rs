//! WebAssembly bindings.
//!
//! The rasterizers return flat `Int32Array`s of `[x0, y0, x1, y1, ...]`
//! pixel pairs so a page can plot them on a canvas; [`pixels_to_ndc`] turns
//! such a list into renderer vertices. [`render_scene`] draws a whole demo
//! scene and hands back PNG bytes.
//!
//! ```javascript
//! import init, { bresenham_line, render_scene } from 'trueno-raster';
//!
//! await init();
//! const pts = bresenham_line(0, 0, 30, 12);
//! const png = render_scene('pinwheel', 90, 400, 400);
//! document.getElementById('frame').src =
//!     URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! ```

use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::geometry::{PixelPoint, Viewport};
use crate::output::PngEncoder;
use crate::raster;
use crate::render::Renderer;
use crate::scenes;

fn to_js(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn flatten(points: &[PixelPoint]) -> Vec<i32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

/// Report that the module is loaded.
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("trueno-raster ready"));
}

/// Pixels of the segment `(x0, y0) → (x1, y1)`.
#[wasm_bindgen]
#[must_use]
pub fn bresenham_line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<i32> {
    flatten(&raster::bresenham_line(PixelPoint::new(x0, y0), PixelPoint::new(x1, y1)))
}

/// Pixels of the circle centered at `(cx, cy)`.
#[wasm_bindgen]
#[must_use]
pub fn bresenham_circle(cx: i32, cy: i32, radius: f32) -> Vec<i32> {
    flatten(&raster::bresenham_circle(PixelPoint::new(cx, cy), radius))
}

/// Pixels of the outline of triangle `a b c`.
#[wasm_bindgen]
#[must_use]
pub fn triangle_outline(ax: i32, ay: i32, bx: i32, by: i32, cx: i32, cy: i32) -> Vec<i32> {
    flatten(&raster::triangle_outline(
        PixelPoint::new(ax, ay),
        PixelPoint::new(bx, by),
        PixelPoint::new(cx, cy),
    ))
}

/// Map flat pixel pairs onto a `width × height` canvas's NDC.
///
/// # Errors
///
/// Fails for a zero-sized canvas or an odd number of coordinates.
#[wasm_bindgen]
pub fn pixels_to_ndc(pixels: &[i32], width: u32, height: u32) -> Result<Vec<f32>, JsValue> {
    if pixels.len() % 2 != 0 {
        return Err(to_js(crate::Error::DataLengthMismatch {
            expected: pixels.len() + 1,
            actual: pixels.len(),
        }));
    }
    let viewport = Viewport::new(width, height).map_err(to_js)?;
    let points: Vec<PixelPoint> = pixels
        .chunks_exact(2)
        .map(|xy| PixelPoint::new(xy[0], xy[1]))
        .collect();
    Ok(viewport.points_to_ndc(&points))
}

/// Step the named scene `frames` times and encode the frame as PNG.
///
/// # Errors
///
/// Fails for an unknown scene, a zero-sized canvas or an encoder error.
#[wasm_bindgen]
pub fn render_scene(name: &str, frames: u32, width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    let mut config = Config::default();
    config.canvas.width = width;
    config.canvas.height = height;
    let mut renderer = Renderer::new(width, height).map_err(to_js)?;
    let mut scene = scenes::by_name(name, &config).map_err(to_js)?;
    scenes::run(scene.as_mut(), &mut renderer, u64::from(frames)).map_err(to_js)?;
    PngEncoder::to_bytes(renderer.framebuffer()).map_err(to_js)
}

/// Crate version.
#[wasm_bindgen]
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
