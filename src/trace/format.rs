//! Trace file format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One canvas call as seen by a recording canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CanvasOp {
    /// `rotate(radians, pivot_x, pivot_y)`.
    Rotate {
        /// Rotation angle in radians.
        radians: f64,
        /// Pivot x coordinate.
        pivot_x: f64,
        /// Pivot y coordinate.
        pivot_y: f64,
    },
    /// `draw_image(pixels, x, y)`; the pixels are identified by size.
    DrawImage {
        /// Width of the drawn raster.
        width: u32,
        /// Height of the drawn raster.
        height: u32,
        /// Destination x.
        x: i32,
        /// Destination y.
        y: i32,
    },
}

/// A recorded op with its position in the trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Zero-based sequence number.
    pub seq: u64,
    /// The recorded call.
    #[serde(flatten)]
    pub op: CanvasOp,
}

/// A complete trace as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    /// Human-readable trace name.
    pub name: String,
    /// When recording finished.
    pub recorded_at: DateTime<Utc>,
    /// Recorded calls in order.
    pub ops: Vec<TraceEntry>,
}
