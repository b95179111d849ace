//! Canvas operation traces: record what a render did, in order.

pub mod format;
pub mod recorder;
