//! Records canvas operations into a trace file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{CanvasOp, Trace, TraceEntry};

/// Collects canvas operations and writes them as a YAML trace.
#[derive(Debug)]
pub struct TraceRecorder {
    path: PathBuf,
    name: String,
    entries: Vec<TraceEntry>,
    next_seq: u64,
}

impl TraceRecorder {
    /// Create a recorder that will write to `path`.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), entries: Vec::new(), next_seq: 0 }
    }

    /// Record an operation. The `seq` field is assigned automatically.
    pub fn record(&mut self, op: CanvasOp) {
        self.entries.push(TraceEntry { seq: self.next_seq, op });
        self.next_seq += 1;
    }

    /// Operations recorded so far, in order.
    #[must_use]
    pub fn ops(&self) -> Vec<&CanvasOp> {
        self.entries.iter().map(|e| &e.op).collect()
    }

    /// Write the trace YAML file to disk and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        let trace = Trace { name: self.name, recorded_at: Utc::now(), ops: self.entries };
        let yaml = serde_yaml::to_string(&trace).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_finish() {
        let dir = std::env::temp_dir().join("drawpad_trace_recorder_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("render.trace.yaml");

        let mut recorder = TraceRecorder::new(&path, "test-render");
        recorder.record(CanvasOp::Rotate { radians: -1.5, pivot_x: 5.0, pivot_y: 5.0 });
        recorder.record(CanvasOp::DrawImage { width: 20, height: 10, x: 5, y: 5 });
        assert_eq!(recorder.ops().len(), 2);

        let written = recorder.finish().expect("finish should succeed");
        assert_eq!(written, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let trace: Trace = serde_yaml::from_str(&content).unwrap();
        assert_eq!(trace.name, "test-render");
        assert_eq!(trace.ops.len(), 2);
        assert_eq!(trace.ops[0].seq, 0);
        assert_eq!(trace.ops[1].seq, 1);
        assert!(matches!(trace.ops[1].op, CanvasOp::DrawImage { width: 20, .. }));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
