//! Drawpad: a small drawing-board toolkit.
//!
//! Drawables are placed at coordinates on a shared canvas, rendered, moved and
//! hit-tested. The centerpiece is [`Image`](crate::image::Image), a rotatable raster whose
//! pixels are located by [`resolver::Resolver`] from a designator string
//! (filesystem path, URI, or bundled resource).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`image`] | The image drawable |
//! | [`resolver`] | Staged designator resolution and decoding |
//! | [`board`] | Drawable collection, draw order, locked rendering |
//! | [`ports`] | Canvas, drawable and resource-namespace traits |
//! | [`adapters`] | Raster and recording canvases, namespaces, HTTP fetcher |
//! | [`trace`] | YAML traces of canvas calls |
//! | [`geometry`] | Points and affine transforms |
//! | [`pixels`] | Decoded raster handle |
//! | [`config`] | TOML configuration with env overrides |
//! | [`placement`] | `designator@x,y,degrees` argument parsing |
//! | [`output`] | Output naming and PNG saving |
//! | [`error`] | Unified error type |

pub mod adapters;
pub mod board;
pub mod config;
pub mod error;
pub mod geometry;
pub mod image;
pub mod output;
pub mod pixels;
pub mod placement;
pub mod ports;
pub mod resolver;
pub mod trace;

pub use crate::board::Board;
pub use crate::error::PadError;
pub use crate::image::Image;
pub use crate::ports::{CanvasContext, Drawable, ResourceNamespace};
pub use crate::resolver::Resolver;
