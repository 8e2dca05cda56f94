//! Open Prism API - Accessor facade over a Prism asset-management core
//!
//! This crate lets DCC plugin code talk to a running Prism core without
//! depending on how the host process wires it up. The `Prism` accessor
//! resolves a core reference (host-discovered first, explicitly registered
//! as a fallback) and forwards each call with light pre/post processing:
//! path-separator normalization, presence checks, and error wrapping.
//!
//! The core itself is consumed through the narrow [`PrismCore`] contract so
//! hosts and tests can supply their own implementation. Simple scalar
//! queries tolerate a missing core and return empty results; operations
//! that mutate or resolve external state fail with a descriptive
//! [`OpenPrismError`](openprism_core::OpenPrismError) instead.

mod accessor;
mod core;
mod host;

pub use crate::accessor::Prism;
pub use crate::core::{DccPlugin, PrismCore, HOUDINI, MAYA};
pub use crate::host::{DccHost, HostEnvironment, ScenePathSource, StandaloneHost};

pub use openprism_core::{
    ExportDetails, FrameRange, MediaRequest, MediaType, OpenPrismError, ProductRequest, Result,
    SceneFileData,
};
