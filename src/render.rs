//! Pixel-level drawing primitives: radial gradient fills, solid rectangles
//! and ellipses, and the rounded rectangle built as a union of both.

use crate::palette;
use image::{Rgb, RgbImage};

/// Rectangular region with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Shrinks the box by `margin` on every side.
    pub fn inset(&self, margin: i32) -> Self {
        Self {
            left: self.left + margin,
            top: self.top + margin,
            right: self.right - margin,
            bottom: self.bottom - margin,
        }
    }
}

/// Renders a square image whose color fades from `center` at the middle to
/// `edge` at the corners.
///
/// The blend ratio for a pixel is its distance from the image center divided
/// by the center-to-corner distance, capped at 1.0. Full per-pixel pass, so
/// one call per generated icon.
pub fn radial_gradient(size: u32, center: Rgb<u8>, edge: Rgb<u8>) -> RgbImage {
    let half = f64::from(size / 2);
    let max_dist = std::f64::consts::SQRT_2 * half;

    let mut img = RgbImage::new(size, size);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = f64::from(x) - half;
        let dy = f64::from(y) - half;
        let dist = (dx * dx + dy * dy).sqrt();
        let ratio = (dist / max_dist).min(1.0);
        *pixel = palette::interpolate(center, edge, ratio);
    }
    img
}

/// Fills a rectangle, clipped to the image bounds.
pub fn fill_rect(img: &mut RgbImage, bbox: &BBox, color: Rgb<u8>) {
    let x0 = bbox.left.max(0);
    let y0 = bbox.top.max(0);
    let x1 = bbox.right.min(img.width() as i32 - 1);
    let y1 = bbox.bottom.min(img.height() as i32 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Fills the ellipse inscribed in `bbox`, clipped to the image bounds.
pub fn fill_ellipse(img: &mut RgbImage, bbox: &BBox, color: Rgb<u8>) {
    let cx = f64::from(bbox.left + bbox.right) / 2.0;
    let cy = f64::from(bbox.top + bbox.bottom) / 2.0;
    let rx = f64::from(bbox.right - bbox.left) / 2.0;
    let ry = f64::from(bbox.bottom - bbox.top) / 2.0;

    let x0 = bbox.left.max(0);
    let y0 = bbox.top.max(0);
    let x1 = bbox.right.min(img.width() as i32 - 1);
    let y1 = bbox.bottom.min(img.height() as i32 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let nx = (f64::from(x) - cx) / rx;
            let ny = (f64::from(y) - cy) / ry;
            if nx * nx + ny * ny <= 1.0 {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Fills a rounded rectangle as the union of two bands and four corner
/// disks; no true corner arc is computed.
///
/// `radius` must stay below half the smaller box dimension. At or beyond
/// that the union degenerates into an ellipse-ish overlap, which is
/// accepted rather than validated against.
pub fn rounded_rect(img: &mut RgbImage, bbox: &BBox, radius: i32, color: Rgb<u8>) {
    let BBox {
        left,
        top,
        right,
        bottom,
    } = *bbox;

    fill_rect(img, &BBox::new(left + radius, top, right - radius, bottom), color);
    fill_rect(img, &BBox::new(left, top + radius, right, bottom - radius), color);

    let d = 2 * radius;
    fill_ellipse(img, &BBox::new(left, top, left + d, top + d), color);
    fill_ellipse(img, &BBox::new(right - d, top, right, top + d), color);
    fill_ellipse(img, &BBox::new(left, bottom - d, left + d, bottom), color);
    fill_ellipse(img, &BBox::new(right - d, bottom - d, right, bottom), color);
}
