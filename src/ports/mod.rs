//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the drawable core and the
//! drawing board around it. Implementations live in `src/adapters/` (and
//! `src/image.rs` for the [`Drawable`] contract).

pub mod canvas;
pub mod drawable;
pub mod namespace;

pub use canvas::CanvasContext;
pub use drawable::Drawable;
pub use namespace::ResourceNamespace;
