//! Bundled resource namespace port.

/// Lookup of resources bundled with the toolkit.
///
/// A path starting with `/` is resolved against the namespace root. Any other
/// path is resolved against the toolkit's own package directory inside the
/// namespace.
pub trait ResourceNamespace: Send + Sync {
    /// Return the bytes stored at `path`, or `None` if there is nothing there.
    fn get_resource(&self, path: &str) -> Option<Vec<u8>>;
}
