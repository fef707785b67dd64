//! Preview coordinate mapping and rendering.
//!
//! The preview is a fixed 256x256 view drawn inside the display widget at a
//! constant margin, on top of a dashed reference grid.

use std::sync::LazyLock;

use image::{GrayImage, Rgb, RgbImage};
use tracing::debug;

use crate::resize::resize_binary;

/// Side of the preview grid in pixels.
pub const PREVIEW_SIDE: u32 = 256;

/// Horizontal offset of the preview area in device space.
pub const GRID_ORIGIN_X: i32 = 143;

/// Vertical offset of the preview area in device space.
pub const GRID_ORIGIN_Y: i32 = 75;

const GRID_SPACING: u32 = 20;
const GRID_PHASE: u32 = 3;

/// Size of the rendered preview canvas.
pub const CANVAS_WIDTH: u32 = 550;
pub const CANVAS_HEIGHT: u32 = 420;

const BACKGROUND: Rgb<u8> = Rgb([240, 240, 240]);
const GRID_PEN: Rgb<u8> = Rgb([0, 0, 0]);
const POINT_PEN: Rgb<u8> = Rgb([255, 0, 0]);

/// A point in display-widget coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DevicePoint {
    pub x: i32,
    pub y: i32,
}

impl DevicePoint {
    /// Map a preview-grid pixel to device space.
    pub fn from_preview(h: u32, v: u32) -> Self {
        Self {
            x: h as i32 + GRID_ORIGIN_X,
            y: v as i32 + GRID_ORIGIN_Y,
        }
    }
}

static REFERENCE_GRID: LazyLock<Vec<DevicePoint>> = LazyLock::new(|| {
    let on_line = |i: u32| (i + GRID_PHASE) % GRID_SPACING == 0;
    (0..PREVIEW_SIDE)
        .flat_map(|i| (0..PREVIEW_SIDE).map(move |j| (i, j)))
        .filter(|&(i, j)| on_line(i) || on_line(j))
        .map(|(i, j)| DevicePoint::from_preview(i, j))
        .collect()
});

/// Dashed backdrop: every 20th row and column of the preview, offset by 3.
pub fn reference_grid() -> &'static [DevicePoint] {
    &REFERENCE_GRID
}

/// Map the dark pixels of a preview frame to device-space points.
///
/// The frame is resized to 256x256 first; each zero-valued pixel `(h, v)`
/// becomes `(h + 143, v + 75)`, in row-major order.
///
/// Upscaling is nearest-neighbour, so the grid stays binary. For 64 and 128
/// frames each source pixel becomes a whole 4x4 or 2x2 block; a bilinear
/// upscale would blend edges and select a slightly different point set there.
pub fn preview_points(preview: &GrayImage) -> Vec<DevicePoint> {
    let grid = resize_binary(preview, PREVIEW_SIDE);

    let points: Vec<DevicePoint> = grid
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0[0] == 0)
        .map(|(h, v, _)| DevicePoint::from_preview(h, v))
        .collect();

    debug!(points = points.len(), "Mapped preview points");
    points
}

/// Draw the reference grid and preview points onto a canvas.
pub fn render_preview(points: &[DevicePoint]) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);
    for p in reference_grid() {
        plot(&mut canvas, *p, GRID_PEN);
    }
    for p in points {
        plot(&mut canvas, *p, POINT_PEN);
    }
    canvas
}

fn plot(canvas: &mut RgbImage, p: DevicePoint, color: Rgb<u8>) {
    if p.x >= 0 && p.y >= 0 && (p.x as u32) < canvas.width() && (p.y as u32) < canvas.height() {
        canvas.put_pixel(p.x as u32, p.y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_reference_grid_size() {
        // 12 lines per axis fall inside 0..256.
        let lines = 12;
        let side = PREVIEW_SIDE as usize;
        assert_eq!(reference_grid().len(), side * side - (side - lines) * (side - lines));
    }

    #[test]
    fn test_reference_grid_lines() {
        let grid = reference_grid();
        assert!(grid.contains(&DevicePoint { x: 17 + 143, y: 75 }));
        assert!(grid.contains(&DevicePoint { x: 143, y: 37 + 75 }));
        assert!(!grid.contains(&DevicePoint { x: 143, y: 75 }));
        assert!(grid.iter().all(|p| p.x >= 143 && p.x < 143 + 256));
    }

    #[test]
    fn test_preview_points_select_dark_pixels() {
        let mut img = GrayImage::from_pixel(256, 256, Luma([255]));
        img.put_pixel(0, 0, Luma([0]));
        img.put_pixel(10, 3, Luma([0]));

        let points = preview_points(&img);
        assert_eq!(
            points,
            vec![
                DevicePoint { x: 143, y: 75 },
                DevicePoint { x: 153, y: 78 },
            ]
        );
    }

    #[test]
    fn test_preview_points_resize_small_frame() {
        let img = GrayImage::from_pixel(64, 64, Luma([0]));
        let points = preview_points(&img);
        assert_eq!(points.len(), 256 * 256);
        assert_eq!(points.last(), Some(&DevicePoint { x: 143 + 255, y: 75 + 255 }));
    }

    #[test]
    fn test_preview_points_idempotent() {
        let img = GrayImage::from_fn(128, 128, |x, y| Luma([if (x ^ y) & 4 == 0 { 0 } else { 255 }]));
        assert_eq!(preview_points(&img), preview_points(&img));
    }

    #[test]
    fn test_render_preview_draws_points_over_grid() {
        let canvas = render_preview(&[DevicePoint { x: 160, y: 75 }]);

        assert_eq!(canvas.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
        assert_eq!(*canvas.get_pixel(160, 75), POINT_PEN);
        assert_eq!(*canvas.get_pixel(160, 80), GRID_PEN);
        assert_eq!(*canvas.get_pixel(0, 0), BACKGROUND);
    }
}
