//! The drawing board: a canvas context plus the drawables placed on it.

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::error::PadError;
use crate::ports::{CanvasContext, Drawable};

/// Owns a canvas context and an ordered collection of drawables.
///
/// The context sits behind a mutex held for a drawable's whole render call,
/// so a rotate/draw/rotate-back bracket is never interleaved with another.
pub struct Board<C> {
    context: Mutex<C>,
    drawables: Vec<Box<dyn Drawable>>,
}

impl<C: CanvasContext> Board<C> {
    /// Empty board drawing into `context`.
    pub fn new(context: C) -> Self {
        Self { context: Mutex::new(context), drawables: Vec::new() }
    }

    /// Place a drawable on the board. Returns its index.
    pub fn add(&mut self, drawable: Box<dyn Drawable>) -> usize {
        self.drawables.push(drawable);
        self.drawables.len() - 1
    }

    /// Number of drawables on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Returns `true` if nothing has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Mutable access to the drawable at `index` (insertion order).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Drawable + 'static)> {
        self.drawables.get_mut(index).map(|d| &mut **d)
    }

    /// Drawables in draw order: bottom first, insertion order within a level.
    #[must_use]
    pub fn sorted(&self) -> Vec<&dyn Drawable> {
        let mut sorted: Vec<&dyn Drawable> = self.drawables.iter().map(|d| &**d).collect();
        sorted.sort_by(|a, b| a.compare_order(*b));
        sorted
    }

    /// Render one drawable with the context locked for the whole call.
    ///
    /// # Errors
    ///
    /// Propagates the drawable's render error.
    pub fn render_one(&self, drawable: &dyn Drawable) -> Result<(), PadError> {
        let mut ctx = self.context.lock().unwrap_or_else(PoisonError::into_inner);
        drawable.render(&mut *ctx)
    }

    /// Render every drawable in draw order. Stops at the first failure.
    ///
    /// # Errors
    ///
    /// Propagates the first render error.
    pub fn render_all(&self) -> Result<(), PadError> {
        for drawable in self.sorted() {
            self.render_one(drawable)?;
        }
        debug!(count = self.drawables.len(), "board rendered");
        Ok(())
    }

    /// The topmost drawable under `(x, y)`, if any.
    #[must_use]
    pub fn drawable_at(&self, x: f64, y: f64) -> Option<&dyn Drawable> {
        self.sorted().into_iter().rev().find(|d| d.hit_test(x, y))
    }

    /// Consume the board and return its context.
    pub fn into_context(self) -> C {
        self.context.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::raster::RasterCanvas;
    use crate::adapters::recording::RecordingCanvas;
    use crate::geometry::{Point, Transform};
    use crate::pixels::PixelData;
    use crate::trace::format::CanvasOp;
    use crate::trace::recorder::TraceRecorder;
    use image::{Rgba, RgbaImage};

    /// A square drawable that draws a `size`-wide block tagged by its height.
    #[derive(Debug)]
    struct Block {
        at: Point,
        size: u32,
        tag: u32,
        z: i64,
    }

    impl Drawable for Block {
        fn render(&self, ctx: &mut dyn CanvasContext) -> Result<(), PadError> {
            let pixels = PixelData::new(RgbaImage::from_pixel(self.size, self.tag, Rgba([0, 0, 0, 255])));
            ctx.rotate(0.1, self.at.x, self.at.y)?;
            ctx.draw_image(&pixels, self.at.x as i32, self.at.y as i32)?;
            ctx.rotate(-0.1, self.at.x, self.at.y)
        }

        fn origin(&self) -> Point {
            self.at
        }

        fn set_origin(&mut self, x: f64, y: f64) {
            self.at = Point::new(x, y);
        }

        fn hit_test(&self, x: f64, y: f64) -> bool {
            let s = f64::from(self.size);
            x >= self.at.x && x <= self.at.x + s && y >= self.at.y && y <= self.at.y + s
        }

        fn z_index(&self) -> i64 {
            self.z
        }
    }

    /// Always fails to render.
    #[derive(Debug)]
    struct Broken;

    impl Drawable for Broken {
        fn render(&self, _ctx: &mut dyn CanvasContext) -> Result<(), PadError> {
            Err(PadError::Canvas("broken drawable".into()))
        }

        fn origin(&self) -> Point {
            Point::default()
        }

        fn set_origin(&mut self, _x: f64, _y: f64) {}

        fn hit_test(&self, _x: f64, _y: f64) -> bool {
            false
        }
    }

    fn block(x: f64, y: f64, tag: u32, z: i64) -> Box<dyn Drawable> {
        Box::new(Block { at: Point::new(x, y), size: 4, tag, z })
    }

    fn recording_board() -> Board<RecordingCanvas<RasterCanvas>> {
        let raster = RasterCanvas::new(32, 32, Rgba([255, 255, 255, 255]));
        Board::new(RecordingCanvas::new(raster, TraceRecorder::new("unused.yaml", "board")))
    }

    fn drawn_tags(board: Board<RecordingCanvas<RasterCanvas>>) -> Vec<u32> {
        let (_, recorder) = board.into_context().into_parts();
        recorder
            .ops()
            .into_iter()
            .filter_map(|op| match op {
                CanvasOp::DrawImage { height, .. } => Some(*height),
                CanvasOp::Rotate { .. } => None,
            })
            .collect()
    }

    #[test]
    fn renders_in_z_order_then_insertion_order() {
        let mut board = recording_board();
        board.add(block(0.0, 0.0, 1, 5));
        board.add(block(0.0, 0.0, 2, 0));
        board.add(block(0.0, 0.0, 3, 5));
        board.add(block(0.0, 0.0, 4, -2));
        board.render_all().unwrap();
        assert_eq!(drawn_tags(board), vec![4, 2, 1, 3]);
    }

    #[test]
    fn brackets_are_not_interleaved() {
        let mut board = recording_board();
        board.add(block(1.0, 1.0, 1, 0));
        board.add(block(9.0, 9.0, 2, 0));
        board.render_all().unwrap();

        let (canvas, recorder) = board.into_context().into_parts();
        let ops = recorder.ops();
        assert_eq!(ops.len(), 6);
        for bracket in ops.chunks(3) {
            assert!(matches!(bracket[0], CanvasOp::Rotate { .. }));
            assert!(matches!(bracket[1], CanvasOp::DrawImage { .. }));
            assert!(matches!(bracket[2], CanvasOp::Rotate { .. }));
        }
        assert!(canvas.transform().approx_eq(&Transform::IDENTITY, 1e-12));
    }

    #[test]
    fn topmost_hit_wins() {
        let mut board = recording_board();
        board.add(block(0.0, 0.0, 1, 1));
        board.add(block(2.0, 2.0, 2, 0));
        board.add(block(20.0, 20.0, 3, 0));

        let hit = board.drawable_at(3.0, 3.0).unwrap();
        assert_eq!(hit.z_index(), 1);
        assert_eq!(board.drawable_at(21.0, 21.0).unwrap().origin(), Point::new(20.0, 20.0));
        assert!(board.drawable_at(15.0, 15.0).is_none());
    }

    #[test]
    fn get_mut_moves_drawable() {
        let mut board = recording_board();
        let idx = board.add(block(0.0, 0.0, 1, 0));
        board.get_mut(idx).unwrap().set_origin(10.0, 10.0);
        assert!(board.drawable_at(1.0, 1.0).is_none());
        assert!(board.drawable_at(11.0, 11.0).is_some());
        assert!(board.get_mut(9).is_none());
        assert_eq!(board.len(), 1);
        assert!(!board.is_empty());
    }

    #[test]
    fn render_error_propagates() {
        let mut board = recording_board();
        board.add(block(0.0, 0.0, 1, 0));
        board.add(Box::new(Broken));
        let err = board.render_all().unwrap_err();
        assert!(err.to_string().contains("broken drawable"));
    }
}
