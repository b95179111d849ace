//! The drawable contract shared by everything placed on a board.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::error::PadError;
use crate::geometry::Point;
use crate::ports::CanvasContext;

/// An entity that can be positioned, hit-tested and rendered on a board.
pub trait Drawable: Debug + Send + Sync {
    /// Draw onto `ctx`, leaving its transform as it was found.
    ///
    /// # Errors
    ///
    /// Propagates any canvas failure unchanged.
    fn render(&self, ctx: &mut dyn CanvasContext) -> Result<(), PadError>;

    /// Anchor coordinate.
    fn origin(&self) -> Point;

    /// Move the anchor to `(x, y)`.
    fn set_origin(&mut self, x: f64, y: f64);

    /// True if `(x, y)` lies on this drawable.
    fn hit_test(&self, x: f64, y: f64) -> bool;

    /// Stacking level; lower values are drawn beneath higher values.
    fn z_index(&self) -> i64 {
        0
    }

    /// Draw-order comparison. Drawables on the same level compare equal;
    /// the board keeps their insertion order.
    fn compare_order(&self, other: &dyn Drawable) -> Ordering {
        self.z_index().cmp(&other.z_index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Marker {
        z: i64,
    }

    impl Drawable for Marker {
        fn render(&self, _ctx: &mut dyn CanvasContext) -> Result<(), PadError> {
            Ok(())
        }

        fn origin(&self) -> Point {
            Point::default()
        }

        fn set_origin(&mut self, _x: f64, _y: f64) {}

        fn hit_test(&self, _x: f64, _y: f64) -> bool {
            false
        }

        fn z_index(&self) -> i64 {
            self.z
        }
    }

    #[test]
    fn compare_order_follows_z_index() {
        let low = Marker { z: -1 };
        let high = Marker { z: 3 };
        assert_eq!(low.compare_order(&high), Ordering::Less);
        assert_eq!(high.compare_order(&low), Ordering::Greater);
    }

    #[test]
    fn same_level_compares_equal() {
        let a = Marker { z: 2 };
        let b = Marker { z: 2 };
        assert_eq!(a.compare_order(&b), Ordering::Equal);
    }
}
