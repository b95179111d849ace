//! In-memory raster canvas backed by an RGBA surface.

use image::{Rgba, RgbaImage};

use crate::error::PadError;
use crate::geometry::{Point, Transform};
use crate::pixels::PixelData;
use crate::ports::CanvasContext;

/// A canvas that draws into an [`RgbaImage`] through an affine transform.
pub struct RasterCanvas {
    surface: RgbaImage,
    transform: Transform,
}

impl RasterCanvas {
    /// Create a canvas of the given size filled with `background`.
    #[must_use]
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self { surface: RgbaImage::from_pixel(width, height, background), transform: Transform::IDENTITY }
    }

    /// Borrow the drawn surface.
    #[must_use]
    pub fn surface(&self) -> &RgbaImage {
        &self.surface
    }

    /// Consume the canvas and return its surface.
    #[must_use]
    pub fn into_surface(self) -> RgbaImage {
        self.surface
    }

    /// Device-space bounding box of the raster placed at user-space `(x, y)`,
    /// clamped to the surface. Returns `(min_x, min_y, max_x, max_y)`, exclusive on max.
    fn device_bounds(&self, x: f64, y: f64, w: f64, h: f64) -> Option<(u32, u32, u32, u32)> {
        let corners = [
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x, y + h),
            Point::new(x + w, y + h),
        ]
        .map(|p| self.transform.apply(p));
        debug_assert!(corners.iter().all(|p| p.x.is_finite() && p.y.is_finite()), "non-finite corners {corners:?}");

        let min_x = corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min).floor().max(0.0);
        let min_y = corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min).floor().max(0.0);
        let max_x = corners
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max)
            .ceil()
            .min(f64::from(self.surface.width()));
        let max_y = corners
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max)
            .ceil()
            .min(f64::from(self.surface.height()));

        if min_x >= max_x || min_y >= max_y {
            return None;
        }
        Some((min_x as u32, min_y as u32, max_x as u32, max_y as u32))
    }
}

impl CanvasContext for RasterCanvas {
    fn rotate(&mut self, radians: f64, pivot_x: f64, pivot_y: f64) -> Result<(), PadError> {
        if !radians.is_finite() {
            return Err(PadError::Canvas(format!("cannot rotate by {radians} radians")));
        }
        if !(pivot_x.is_finite() && pivot_y.is_finite()) {
            return Err(PadError::Canvas(format!("cannot rotate around ({pivot_x}, {pivot_y})")));
        }
        self.transform = self.transform.then(&Transform::rotation(radians, Point::new(pivot_x, pivot_y)));
        Ok(())
    }

    fn draw_image(&mut self, pixels: &PixelData, x: i32, y: i32) -> Result<(), PadError> {
        let inverse = self
            .transform
            .inverse()
            .ok_or_else(|| PadError::Canvas("current transform is not invertible".into()))?;

        let src = pixels.raster();
        let (x, y) = (f64::from(x), f64::from(y));
        let (w, h) = (f64::from(src.width()), f64::from(src.height()));
        let Some((min_x, min_y, max_x, max_y)) = self.device_bounds(x, y, w, h) else {
            return Ok(());
        };

        for dy in min_y..max_y {
            for dx in min_x..max_x {
                // Sample at the device pixel center.
                let user = inverse.apply(Point::new(f64::from(dx) + 0.5, f64::from(dy) + 0.5));
                let (sx, sy) = ((user.x - x).floor(), (user.y - y).floor());
                if sx < 0.0 || sy < 0.0 || sx >= w || sy >= h {
                    continue;
                }
                let source = *src.get_pixel(sx as u32, sy as u32);
                let dest = self.surface.get_pixel_mut(dx, dy);
                *dest = source_over(source, *dest);
            }
        }
        Ok(())
    }

    fn transform(&self) -> Transform {
        self.transform
    }
}

/// Straight-alpha source-over compositing of `src` onto `dst`.
fn source_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = f64::from(src[3]) / 255.0;
    if sa >= 1.0 {
        return src;
    }
    if sa <= 0.0 {
        return dst;
    }
    let da = f64::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let mut out = [0u8; 4];
    for i in 0..3 {
        let c = (f64::from(src[i]) * sa + f64::from(dst[i]) * da * (1.0 - sa)) / out_a;
        out[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba(out)
}

/// Parse a `#rrggbb` or `#rrggbbaa` color.
///
/// # Errors
///
/// Returns [`PadError::InvalidArgument`] if the string is not a hex color.
pub fn parse_color(input: &str) -> Result<Rgba<u8>, PadError> {
    let invalid = || PadError::InvalidArgument(format!("Unsupported color '{input}'. Use #rrggbb or #rrggbbaa"));
    let hex = input.strip_prefix('#').ok_or_else(invalid)?;
    if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}
