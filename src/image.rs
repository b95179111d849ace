//! The image drawable: a positionable, rotatable raster on the board.

use std::fmt;

use serde::Serialize;

use crate::error::PadError;
use crate::geometry::{Point, Transform};
use crate::pixels::PixelData;
use crate::ports::{CanvasContext, Drawable};
use crate::resolver::Resolver;

/// A raster image placed on the board.
///
/// Pixels and intrinsic size are resolved once, at construction. Afterwards
/// only the origin, rotation and stacking level change.
///
/// Rotation is stored in degrees, clockwise-positive, and applied around the
/// origin when rendering.
#[derive(Debug)]
pub struct Image {
    origin: Point,
    width: f64,
    height: f64,
    rotation: f64,
    z_index: i64,
    designator: String,
    pixels: PixelData,
}

/// Serializable snapshot of an image's observable state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageInfo {
    /// Designator the image was created from.
    pub designator: String,
    /// Origin x.
    pub x: f64,
    /// Origin y.
    pub y: f64,
    /// Intrinsic width.
    pub width: f64,
    /// Intrinsic height.
    pub height: f64,
    /// Rotation in degrees, clockwise-positive.
    pub rotation: f64,
    /// Stacking level.
    pub z_index: i64,
}

impl Image {
    /// Resolve `designator` and place the image at `(x, y)` rotated by
    /// `degrees` clockwise.
    ///
    /// # Errors
    ///
    /// - [`PadError::InvalidArgument`] if `designator` is empty or the
    ///   origin or rotation is not finite.
    /// - [`PadError::ResourceNotFound`] if no resolution stage finds it.
    /// - [`PadError::CorruptResource`] if the decoded size is unusable.
    pub fn new(resolver: &Resolver, x: f64, y: f64, designator: &str, degrees: f64) -> Result<Self, PadError> {
        if !(x.is_finite() && y.is_finite() && degrees.is_finite()) {
            return Err(PadError::InvalidArgument(format!(
                "image '{designator}' needs a finite origin and rotation, got ({x}, {y}) at {degrees} degrees"
            )));
        }
        let resolved = resolver.resolve(designator)?;
        check_dimensions(designator, resolved.width, resolved.height)?;
        Ok(Self {
            origin: Point::new(x, y),
            width: resolved.width,
            height: resolved.height,
            rotation: degrees,
            z_index: 0,
            designator: designator.to_string(),
            pixels: resolved.pixels,
        })
    }

    /// Unrotated image at `(x, y)`.
    ///
    /// # Errors
    ///
    /// See [`Image::new`].
    pub fn at(resolver: &Resolver, x: f64, y: f64, designator: &str) -> Result<Self, PadError> {
        Self::new(resolver, x, y, designator, 0.0)
    }

    /// Image at the board origin rotated by `degrees`.
    ///
    /// # Errors
    ///
    /// See [`Image::new`].
    pub fn rotated(resolver: &Resolver, designator: &str, degrees: f64) -> Result<Self, PadError> {
        Self::new(resolver, 0.0, 0.0, designator, degrees)
    }

    /// Unrotated image at the board origin.
    ///
    /// # Errors
    ///
    /// See [`Image::new`].
    pub fn open(resolver: &Resolver, designator: &str) -> Result<Self, PadError> {
        Self::new(resolver, 0.0, 0.0, designator, 0.0)
    }

    /// Intrinsic width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Intrinsic height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The designator this image was resolved from.
    #[must_use]
    pub fn source_designator(&self) -> &str {
        &self.designator
    }

    /// Rotation in degrees, clockwise-positive.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Replace the rotation. Takes effect on the next render.
    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees;
    }

    /// Set the stacking level.
    pub fn set_z_index(&mut self, z_index: i64) {
        self.z_index = z_index;
    }

    /// The decoded pixels.
    #[must_use]
    pub fn pixels(&self) -> &PixelData {
        &self.pixels
    }

    /// Snapshot for serialization.
    #[must_use]
    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            designator: self.designator.clone(),
            x: self.origin.x,
            y: self.origin.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            z_index: self.z_index,
        }
    }

    /// Hit test against the rotated footprint: the point is turned back into
    /// the image's unrotated frame before the bounds check.
    #[must_use]
    pub fn hit_test_rotated(&self, x: f64, y: f64) -> bool {
        // Rendering rotates the canvas by -rotation; undo that for the point.
        let local = Transform::rotation(self.rotation.to_radians(), self.origin).apply(Point::new(x, y));
        self.within_bounds(local.x, local.y)
    }

    fn within_bounds(&self, x: f64, y: f64) -> bool {
        x >= self.origin.x
            && x <= self.origin.x + self.width
            && y >= self.origin.y
            && y <= self.origin.y + self.height
    }
}

/// Reject decoded sizes that cannot describe an image.
fn check_dimensions(designator: &str, width: f64, height: f64) -> Result<(), PadError> {
    if width >= 0.0 && height >= 0.0 {
        Ok(())
    } else {
        Err(PadError::CorruptResource { designator: designator.to_string(), width, height })
    }
}

impl Drawable for Image {
    fn render(&self, ctx: &mut dyn CanvasContext) -> Result<(), PadError> {
        let radians = self.rotation.to_radians();
        let Point { x, y } = self.origin;
        ctx.rotate(-radians, x, y)?;
        // The canvas is rotated from here on: undo it even if the draw fails.
        let drawn = ctx.draw_image(&self.pixels, x.round() as i32, y.round() as i32);
        ctx.rotate(radians, x, y)?;
        drawn
    }

    fn origin(&self) -> Point {
        self.origin
    }

    fn set_origin(&mut self, x: f64, y: f64) {
        self.origin = Point::new(x, y);
    }

    /// Axis-aligned test against the unrotated bounds, edges included.
    fn hit_test(&self, x: f64, y: f64) -> bool {
        self.within_bounds(x, y)
    }

    fn z_index(&self) -> i64 {
        self.z_index
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Image{{x={}, y={}, w={}, h={}, rotation={}, designator='{}'}}",
            self.origin.x, self.origin.y, self.width, self.height, self.rotation, self.designator
        )
    }
}
