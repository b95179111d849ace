//! Recording adapter for the [`CanvasContext`] port.

use crate::error::PadError;
use crate::geometry::Transform;
use crate::pixels::PixelData;
use crate::ports::CanvasContext;
use crate::trace::format::CanvasOp;
use crate::trace::recorder::TraceRecorder;

/// Records every canvas call while delegating to an inner canvas.
///
/// Calls are recorded before delegation, so a call the inner canvas rejects
/// still shows up in the trace.
pub struct RecordingCanvas<C> {
    inner: C,
    recorder: TraceRecorder,
}

impl<C: CanvasContext> RecordingCanvas<C> {
    /// Wrap `inner`, recording into `recorder`.
    pub fn new(inner: C, recorder: TraceRecorder) -> Self {
        Self { inner, recorder }
    }

    /// The recorder holding the calls seen so far.
    #[must_use]
    pub fn recorder(&self) -> &TraceRecorder {
        &self.recorder
    }

    /// Split back into the inner canvas and the recorder.
    pub fn into_parts(self) -> (C, TraceRecorder) {
        (self.inner, self.recorder)
    }
}

impl<C: CanvasContext> CanvasContext for RecordingCanvas<C> {
    fn rotate(&mut self, radians: f64, pivot_x: f64, pivot_y: f64) -> Result<(), PadError> {
        self.recorder.record(CanvasOp::Rotate { radians, pivot_x, pivot_y });
        self.inner.rotate(radians, pivot_x, pivot_y)
    }

    fn draw_image(&mut self, pixels: &PixelData, x: i32, y: i32) -> Result<(), PadError> {
        self.recorder.record(CanvasOp::DrawImage {
            width: pixels.width(),
            height: pixels.height(),
            x,
            y,
        });
        self.inner.draw_image(pixels, x, y)
    }

    fn transform(&self) -> Transform {
        self.inner.transform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::raster::RasterCanvas;
    use image::{Rgba, RgbaImage};

    #[test]
    fn records_and_delegates() {
        let inner = RasterCanvas::new(8, 8, Rgba([0, 0, 0, 255]));
        let mut canvas = RecordingCanvas::new(inner, TraceRecorder::new("unused.yaml", "t"));
        let block = PixelData::new(RgbaImage::from_pixel(2, 3, Rgba([9, 9, 9, 255])));

        canvas.rotate(0.25, 1.0, 2.0).unwrap();
        canvas.draw_image(&block, 1, 1).unwrap();

        assert_eq!(
            canvas.recorder().ops(),
            vec![
                &CanvasOp::Rotate { radians: 0.25, pivot_x: 1.0, pivot_y: 2.0 },
                &CanvasOp::DrawImage { width: 2, height: 3, x: 1, y: 1 },
            ]
        );
        assert_ne!(canvas.transform(), Transform::IDENTITY);

        let (raster, _) = canvas.into_parts();
        assert_ne!(*raster.surface().get_pixel(2, 2), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn rejected_calls_are_still_recorded() {
        let inner = RasterCanvas::new(2, 2, Rgba([0, 0, 0, 255]));
        let mut canvas = RecordingCanvas::new(inner, TraceRecorder::new("unused.yaml", "t"));
        assert!(canvas.rotate(f64::INFINITY, 0.0, 0.0).is_err());
        assert_eq!(canvas.recorder().ops().len(), 1);
    }
}
