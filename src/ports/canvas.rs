//! Canvas context port: the shared drawing surface and its transform state.

use crate::error::PadError;
use crate::geometry::Transform;
use crate::pixels::PixelData;

/// A drawing context owned by the drawing board.
///
/// The transform is shared mutable state: a drawable that changes it must
/// restore it before returning from its render call.
pub trait CanvasContext: Send {
    /// Concatenate a rotation of `radians` around `(pivot_x, pivot_y)` to the
    /// current transform. Positive angles turn counter-clockwise on screen.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::Canvas`] if the context cannot apply the transform.
    fn rotate(&mut self, radians: f64, pivot_x: f64, pivot_y: f64) -> Result<(), PadError>;

    /// Draw `pixels` with their top-left corner at user-space `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::Canvas`] if the context cannot draw.
    fn draw_image(&mut self, pixels: &PixelData, x: i32, y: i32) -> Result<(), PadError>;

    /// Current user-to-device transform.
    fn transform(&self) -> Transform;
}
