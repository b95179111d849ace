//! Resource resolution: turn a designator into fully decoded pixels.
//!
//! A designator is tried against four stages in a fixed order, and the first
//! stage that yields a completely decoded image wins:
//!
//! 1. a filesystem path,
//! 2. an absolute URI (`http`, `https`, `file`),
//! 3. a path relative to the toolkit's package inside the bundled namespace,
//! 4. a path relative to the namespace root.
//!
//! Stages run one at a time. A stage that finds bytes which fail to decode
//! counts as a miss and the next stage is tried.

use std::fmt;
use std::path::Path;

use reqwest::Url;
use tracing::{debug, info};

use crate::adapters::http::HttpFetcher;
use crate::adapters::namespace::DirNamespace;
use crate::config::Config;
use crate::error::PadError;
use crate::pixels::PixelData;
use crate::ports::ResourceNamespace;

/// One candidate strategy for locating image bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Designator read as a local filesystem path.
    FilePath,
    /// Designator read as an absolute URI.
    Uri,
    /// Designator looked up under the package directory of the namespace.
    PackageRelative,
    /// Designator looked up at the namespace root.
    NamespaceRoot,
}

impl Stage {
    /// All stages in resolution order.
    pub const ORDER: [Self; 4] = [Self::FilePath, Self::Uri, Self::PackageRelative, Self::NamespaceRoot];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FilePath => "file-path",
            Self::Uri => "uri",
            Self::PackageRelative => "package-relative",
            Self::NamespaceRoot => "namespace-root",
        };
        f.write_str(name)
    }
}

/// A successfully resolved image.
#[derive(Debug)]
pub struct Resolved {
    /// Decoded pixels.
    pub pixels: PixelData,
    /// Intrinsic width in pixels.
    pub width: f64,
    /// Intrinsic height in pixels.
    pub height: f64,
    /// The stage that produced the image.
    pub stage: Stage,
}

/// Resolves designators to decoded images.
pub struct Resolver {
    namespace: Box<dyn ResourceNamespace>,
    http: Option<HttpFetcher>,
}

impl Resolver {
    /// Create a resolver over `namespace`. Without an `http` fetcher, network
    /// URIs are skipped (`file:` URIs still work).
    pub fn new(namespace: impl ResourceNamespace + 'static, http: Option<HttpFetcher>) -> Self {
        Self { namespace: Box::new(namespace), http }
    }

    /// Build a resolver from configuration: a directory namespace at the
    /// configured root and, when enabled, an HTTP fetcher.
    ///
    /// # Errors
    ///
    /// Returns [`PadError::Config`] if the HTTP client cannot be initialized.
    pub fn from_config(config: &Config) -> Result<Self, PadError> {
        let namespace = DirNamespace::new(config.resource_root(), config.resources.package.clone());
        let http = if config.network.enabled {
            let fetcher = HttpFetcher::new(config.network.timeout())
                .map_err(|e| PadError::Config(format!("Failed to initialize HTTP client: {e}")))?;
            Some(fetcher)
        } else {
            None
        };
        Ok(Self::new(namespace, http))
    }

    /// Resolve `designator` through every stage in order.
    ///
    /// # Errors
    ///
    /// - [`PadError::InvalidArgument`] if `designator` is empty; no stage runs.
    /// - [`PadError::ResourceNotFound`] if no stage yields a decoded image.
    pub fn resolve(&self, designator: &str) -> Result<Resolved, PadError> {
        if designator.is_empty() {
            return Err(PadError::InvalidArgument("image designator must not be empty".into()));
        }

        for stage in Stage::ORDER {
            match self.attempt(stage, designator) {
                Ok(pixels) => {
                    info!(%stage, designator, width = pixels.width(), height = pixels.height(), "image resolved");
                    return Ok(Resolved {
                        width: f64::from(pixels.width()),
                        height: f64::from(pixels.height()),
                        pixels,
                        stage,
                    });
                }
                Err(reason) => debug!(%stage, designator, %reason, "resolution stage missed"),
            }
        }

        Err(PadError::ResourceNotFound { designator: designator.to_string() })
    }

    fn attempt(&self, stage: Stage, designator: &str) -> Result<PixelData, String> {
        let bytes = match stage {
            Stage::FilePath => std::fs::read(Path::new(designator)).map_err(|e| e.to_string())?,
            Stage::Uri => self.fetch_uri(designator)?,
            Stage::PackageRelative => {
                self.namespace.get_resource(designator).ok_or("not in package namespace")?
            }
            Stage::NamespaceRoot => self
                .namespace
                .get_resource(&format!("/{designator}"))
                .ok_or("not at namespace root")?,
        };
        PixelData::decode(&bytes).map_err(|e| format!("incomplete or undecodable image: {e}"))
    }

    fn fetch_uri(&self, designator: &str) -> Result<Vec<u8>, String> {
        let url = Url::parse(designator).map_err(|e| format!("not a URI: {e}"))?;
        match url.scheme() {
            "http" | "https" => {
                let http = self.http.as_ref().ok_or("network resolution disabled")?;
                http.fetch(&url)
            }
            "file" => {
                let path = url.to_file_path().map_err(|()| "file URI has no local path".to_string())?;
                std::fs::read(path).map_err(|e| e.to_string())
            }
            other => Err(format!("unsupported scheme '{other}'")),
        }
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").field("network", &self.http.is_some()).finish_non_exhaustive()
    }
}
