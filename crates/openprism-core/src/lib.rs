//! Open Prism Core - Foundational types for the Open Prism API
//!
//! This crate provides the types every other Open Prism crate depends on:
//! - `OpenPrismError` - The single error type and `Result` alias
//! - `SceneFileData`, `ExportDetails` - Opaque descriptors produced by the core
//! - `ProductRequest`, `MediaRequest` - Export request parameters
//! - Path separator helpers

mod error;
mod paths;
mod types;

pub use error::{OpenPrismError, Result};
pub use paths::{is_within, normalize_separators};
pub use types::{
    ExportDetails, FrameRange, MediaRequest, MediaType, ProductRequest, SceneFileData,
};

/// Version of this API.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prism release this API was written against. Older or newer cores may
/// expose a different surface.
pub const TESTED_PRISM_VERSION: &str = "2.0.13";
