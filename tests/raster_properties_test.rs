//! Falsification tests for the rasterizers and the pixel/NDC mapping.
//!
//! Each property is a claim that a counterexample from proptest refutes.
//!
//! Run: cargo test --test raster_properties_test

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use std::collections::HashSet;
use trueno_raster::geometry::{PixelPoint, Viewport};
use trueno_raster::prelude::*;

fn pixel() -> impl Strategy<Value = PixelPoint> {
    (-300i32..300, -300i32..300).prop_map(|(x, y)| PixelPoint::new(x, y))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Claim: a line starts and ends on its endpoints and never skips a pixel.
    #[test]
    fn prop_line_is_connected_and_exact(from in pixel(), to in pixel()) {
        let line = bresenham_line(from, to);

        prop_assert_eq!(line.first(), Some(&from));
        prop_assert_eq!(line.last(), Some(&to));
        prop_assert_eq!(line.len() as i32, from.chebyshev(to) + 1);
        for pair in line.windows(2) {
            prop_assert_eq!(pair[0].chebyshev(pair[1]), 1,
                "step {:?} -> {:?} is not a unit move", pair[0], pair[1]);
        }
    }

    /// Claim: reversing a line visits the same number of pixels.
    #[test]
    fn prop_line_reverse_has_same_length(from in pixel(), to in pixel()) {
        prop_assert_eq!(bresenham_line(from, to).len(), bresenham_line(to, from).len());
    }

    /// Claim: every circle pixel lies within one pixel of the true radius.
    #[test]
    fn prop_circle_points_near_radius(center in pixel(), r in 0u32..80) {
        let r = r as i32;
        for p in bresenham_circle(center, r as f32) {
            let d = (((p.x - center.x).pow(2) + (p.y - center.y).pow(2)) as f32).sqrt().round() as i32;
            prop_assert!((r - 1..=r + 1).contains(&d), "{:?} at distance {} from R={}", p, d, r);
        }
    }

    /// Claim: the circle is closed under the eight reflections about its center.
    #[test]
    fn prop_circle_has_eightfold_symmetry(center in pixel(), r in 0u32..60) {
        let set: HashSet<(i32, i32)> = bresenham_circle(center, r as f32)
            .into_iter()
            .map(|p| (p.x - center.x, p.y - center.y))
            .collect();
        for &(x, y) in &set {
            for image in [(-x, y), (x, -y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)] {
                prop_assert!(set.contains(&image), "({}, {}) has no mirror {:?}", x, y, image);
            }
        }
    }

    /// Claim: a triangle outline is exactly its three edges.
    #[test]
    fn prop_triangle_outline_is_three_edges(a in pixel(), b in pixel(), c in pixel()) {
        let outline = triangle_outline(a, b, c);
        let edges = bresenham_line(a, b).len() + bresenham_line(b, c).len() + bresenham_line(c, a).len();
        prop_assert_eq!(outline.len(), edges);
    }

    /// Claim: pixel -> NDC -> pixel returns the starting pixel.
    #[test]
    fn prop_viewport_round_trip(w in 2u32..1000, h in 2u32..1000, fx in 0.0f32..1.0, fy in 0.0f32..1.0) {
        let viewport = Viewport::new(w, h).unwrap();
        let x = (fx * (w - 1) as f32).floor();
        let y = (fy * (h - 1) as f32).floor();
        let ndc = viewport.pixel_to_ndc(x, y);
        prop_assert!((-1.0..=1.0).contains(&ndc.x) && (-1.0..=1.0).contains(&ndc.y));
        prop_assert_eq!(viewport.ndc_to_pixel_rounded(ndc), PixelPoint::new(x as i32, y as i32));
    }

    /// Claim: the batched NDC conversion agrees with the scalar mapping.
    #[test]
    fn prop_batch_ndc_matches_scalar(
        w in 2u32..500,
        h in 2u32..500,
        coords in prop::collection::vec((0i32..500, 0i32..500), 0..64)
    ) {
        let viewport = Viewport::new(w, h).unwrap();
        let points: Vec<PixelPoint> = coords.iter().map(|&(x, y)| PixelPoint::new(x, y)).collect();
        let flat = viewport.points_to_ndc(&points);
        prop_assert_eq!(flat.len(), points.len() * 2);
        for (p, xy) in points.iter().zip(flat.chunks_exact(2)) {
            let expected = viewport.pixel_to_ndc(p.x as f32, p.y as f32);
            prop_assert!((xy[0] - expected.x).abs() <= 1e-4 * expected.x.abs().max(1.0));
            prop_assert!((xy[1] - expected.y).abs() <= 1e-4 * expected.y.abs().max(1.0));
        }
    }

    /// Claim: a rigid transform composed with its inverse is the identity,
    /// however far the translation reaches.
    #[test]
    fn prop_rigid_inverse_is_two_sided(
        ax in -3.0f32..3.0, ay in -3.0f32..3.0,
        tx in -1.0e4f32..1.0e4, ty in -1.0e4f32..1.0e4, tz in -1.0e4f32..1.0e4
    ) {
        let m = Mat4::identity().rotate_x(ax).rotate_y(ay).translate(tx, ty, tz);
        let inv = m.inverse().unwrap();
        // rounding in the translation column grows with its magnitude
        let tol = 1e-5 * (1.0 + tx.abs().max(ty.abs()).max(tz.abs()));
        prop_assert!(m.multiply(&inv).approx_eq(&Mat4::IDENTITY, tol));
        prop_assert!(inv.multiply(&m).approx_eq(&Mat4::IDENTITY, tol));

        let p = Vec3::new(1.0, -2.0, 0.5);
        let back = inv.transform_point(m.transform_point(p));
        prop_assert!(back.approx_eq(p, tol), "{:?} != {:?}", back, p);
    }

    /// Claim: the viewing matrix undoes the camera placement.
    #[test]
    fn prop_viewing_inverts_look_at(
        ex in -10.0f32..10.0, ey in -10.0f32..10.0, ez in 1.0f32..10.0
    ) {
        let eye = Vec3::new(ex, ey, ez);
        let look_at = Mat4::look_at(eye, Vec3::ZERO, Vec3::Y).unwrap();
        let viewing = Mat4::viewing(eye, Vec3::ZERO, Vec3::Y).unwrap();
        prop_assert!(viewing.multiply(&look_at).approx_eq(&Mat4::IDENTITY, 1e-3));
        // the eye lands on the view-space origin
        prop_assert!(viewing.transform_point(eye).approx_eq(Vec3::ZERO, 1e-3));
    }

    /// Claim: a line to a vertex far outside NDC lights its on-screen end and
    /// no more pixels than a single row or column holds.
    #[test]
    fn prop_renderer_clips_far_line_vertex(
        x0 in -1.0f32..1.0, y0 in -1.0f32..1.0,
        angle in 0.0f32..std::f32::consts::TAU, reach in 1.0e3f32..1.0e9
    ) {
        let (s, c) = angle.sin_cos();
        let pos = [x0, y0, x0 + reach * c, y0 + reach * s];
        let mut renderer = Renderer::new(48, 32).unwrap();
        renderer.clear(Rgb::WHITE);
        renderer.draw(&DrawCall::new(&pos, 2, Primitive::Lines)).unwrap();

        let fb = renderer.framebuffer();
        let start = renderer.viewport().ndc_to_pixel_rounded(Point::new(x0, y0));
        prop_assert_eq!(fb.get_pixel(start.x as u32, start.y as u32), Some(Rgba::BLACK));
        prop_assert!(fb.count_differing(Rgba::WHITE) <= 48);
    }

    /// Claim: drawing a rasterized line lights exactly its pixels.
    #[test]
    fn prop_renderer_plots_line_pixels(
        x0 in 0i32..48, y0 in 0i32..32, x1 in 0i32..48, y1 in 0i32..32
    ) {
        let line = bresenham_line(PixelPoint::new(x0, y0), PixelPoint::new(x1, y1));
        let mut renderer = Renderer::new(48, 32).unwrap();
        renderer.clear(Rgb::WHITE);
        renderer.draw_pixels(&line, Rgb::BLACK, 1.0).unwrap();

        let fb = renderer.framebuffer();
        for p in &line {
            prop_assert_eq!(fb.get_pixel(p.x as u32, p.y as u32), Some(Rgba::BLACK));
        }
        let distinct: HashSet<PixelPoint> = line.iter().copied().collect();
        prop_assert_eq!(fb.count_differing(Rgba::WHITE), distinct.len());
    }
}
