//! Bundled resource namespaces: directory-backed and in-memory.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use crate::ports::ResourceNamespace;

/// Split a namespace path into its key relative to the namespace root.
///
/// `/a/b.png` stays at the root (`a/b.png`); `b.png` lands under `package`
/// (`package/b.png`). Returns `None` for paths that climb out of the root.
fn namespace_key(package: &str, path: &str) -> Option<String> {
    let key = match path.strip_prefix('/') {
        Some(rooted) => rooted.to_string(),
        None if package.is_empty() => path.to_string(),
        None => format!("{}/{path}", package.trim_matches('/')),
    };
    let escapes = Path::new(&key)
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if key.is_empty() || escapes {
        None
    } else {
        Some(key)
    }
}

/// A namespace rooted at a directory on disk.
#[derive(Debug, Clone)]
pub struct DirNamespace {
    root: PathBuf,
    package: String,
}

impl DirNamespace {
    /// Namespace rooted at `root`, with relative lookups under `root/package`.
    pub fn new(root: impl Into<PathBuf>, package: impl Into<String>) -> Self {
        Self { root: root.into(), package: package.into() }
    }
}

impl ResourceNamespace for DirNamespace {
    fn get_resource(&self, path: &str) -> Option<Vec<u8>> {
        let key = namespace_key(&self.package, path)?;
        std::fs::read(self.root.join(key)).ok()
    }
}

/// A namespace held in memory, for embedded assets.
#[derive(Debug, Clone, Default)]
pub struct MemoryNamespace {
    package: String,
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryNamespace {
    /// Empty namespace with relative lookups under `package`.
    pub fn new(package: impl Into<String>) -> Self {
        Self { package: package.into(), entries: HashMap::new() }
    }

    /// Store `bytes` at `key`, relative to the namespace root.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.entries.insert(key.into().trim_start_matches('/').to_string(), bytes);
        self
    }
}

impl ResourceNamespace for MemoryNamespace {
    fn get_resource(&self, path: &str) -> Option<Vec<u8>> {
        let key = namespace_key(&self.package, path)?;
        self.entries.get(&key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_land_under_package() {
        assert_eq!(namespace_key("drawpad", "icons/a.png").as_deref(), Some("drawpad/icons/a.png"));
        assert_eq!(namespace_key("", "a.png").as_deref(), Some("a.png"));
    }

    #[test]
    fn rooted_paths_skip_package() {
        assert_eq!(namespace_key("drawpad", "/a.png").as_deref(), Some("a.png"));
    }

    #[test]
    fn escaping_paths_are_refused() {
        assert!(namespace_key("drawpad", "../secret.png").is_none());
        assert!(namespace_key("drawpad", "/../secret.png").is_none());
        assert!(namespace_key("drawpad", "//etc/passwd").is_none());
        assert!(namespace_key("drawpad", "/").is_none());
    }

    #[test]
    fn memory_namespace_lookup() {
        let ns = MemoryNamespace::new("drawpad")
            .with("drawpad/one.png", vec![1])
            .with("/two.png", vec![2]);
        assert_eq!(ns.get_resource("one.png"), Some(vec![1]));
        assert_eq!(ns.get_resource("/two.png"), Some(vec![2]));
        assert_eq!(ns.get_resource("two.png"), None);
        assert_eq!(ns.get_resource("/one.png"), None);
    }

    #[test]
    fn dir_namespace_reads_files() {
        let dir = std::env::temp_dir().join("drawpad_dir_namespace_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("drawpad")).unwrap();
        std::fs::write(dir.join("drawpad/inner.bin"), b"inner").unwrap();
        std::fs::write(dir.join("outer.bin"), b"outer").unwrap();

        let ns = DirNamespace::new(&dir, "drawpad");
        assert_eq!(ns.get_resource("inner.bin").as_deref(), Some(&b"inner"[..]));
        assert_eq!(ns.get_resource("/outer.bin").as_deref(), Some(&b"outer"[..]));
        assert!(ns.get_resource("outer.bin").is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
