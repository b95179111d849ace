//! Adapter implementations for port traits.
//!
//! - `raster` — Canvas drawing into an in-memory RGBA surface
//! - `recording` — Canvas wrapper that records every call to a trace
//! - `namespace` — Bundled resource namespaces (directory, in-memory)
//! - `http` — Network fetcher used by the resolver

pub mod http;
pub mod namespace;
pub mod raster;
pub mod recording;
