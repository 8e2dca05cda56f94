//! Host environment discovery
//!
//! Inside a DCC session the Prism core lives in the host's plugin
//! initialization namespace, and the current scene path comes from whichever
//! scene-introspection interface the host process actually provides. Both
//! are modeled as traits here so the accessor never touches host state
//! directly; standalone use (no host integration at all) falls back to an
//! explicitly registered core.

use std::sync::Arc;

use crate::core::PrismCore;

/// A host process the accessor runs inside.
pub trait HostEnvironment: Send + Sync {
    /// The core the host's plugin-initialization namespace provides, if any.
    /// Takes precedence over any explicitly registered core.
    fn discover_core(&self) -> Option<Arc<dyn PrismCore>>;

    /// Path of the scene file currently open in the host, if the host
    /// exposes one. May use either separator style.
    fn current_scene_path(&self) -> Option<String>;
}

/// One scene-introspection provider (e.g. Maya's `file` query or Houdini's
/// hip-file path). Providers are mutually exclusive in practice; a source
/// returns `None` when its interface is not available in this host process.
pub trait ScenePathSource: Send + Sync {
    fn scene_path(&self) -> Option<String>;
}

impl<F> ScenePathSource for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn scene_path(&self) -> Option<String> {
        self()
    }
}

/// Host environment assembled by a DCC plugin: an optional discovered core
/// plus an ordered list of scene sources. The first source that reports a
/// scene path wins.
#[derive(Default)]
pub struct DccHost {
    core: Option<Arc<dyn PrismCore>>,
    scene_sources: Vec<Box<dyn ScenePathSource>>,
}

impl DccHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the core from the host's plugin-initialization namespace.
    pub fn with_core(mut self, core: Arc<dyn PrismCore>) -> Self {
        self.core = Some(core);
        self
    }

    /// Append a scene-introspection provider. Earlier sources are consulted
    /// first.
    pub fn with_scene_source(mut self, source: impl ScenePathSource + 'static) -> Self {
        self.scene_sources.push(Box::new(source));
        self
    }
}

impl HostEnvironment for DccHost {
    fn discover_core(&self) -> Option<Arc<dyn PrismCore>> {
        self.core.clone()
    }

    fn current_scene_path(&self) -> Option<String> {
        self.scene_sources
            .iter()
            .find_map(|source| source.scene_path().filter(|path| !path.is_empty()))
    }
}

/// Host environment with no Prism integration: nothing to discover, no
/// scene introspection. Used for partial DCC support where the caller
/// registers a core explicitly.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandaloneHost;

impl HostEnvironment for StandaloneHost {
    fn discover_core(&self) -> Option<Arc<dyn PrismCore>> {
        None
    }

    fn current_scene_path(&self) -> Option<String> {
        None
    }
}
