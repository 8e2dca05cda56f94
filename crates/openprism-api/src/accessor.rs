//! The Prism accessor facade
//!
//! `Prism` resolves an active core reference and forwards each operation to
//! it. Resolution prefers the host-discovered core; a core registered with
//! [`Prism::set_core`] is the fallback for hosts without their own Prism
//! integration. Simple scalar queries return empty results when no core is
//! available, while operations that mutate or resolve external state fail
//! with a descriptive error.
//!
//! Access is single-threaded by contract: interactive DCC sessions drive
//! plugin code from one thread, and registration takes `&mut self`. Nothing
//! is retried or recovered; every error propagates to the caller.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use openprism_core::{
    is_within, normalize_separators, ExportDetails, FrameRange, MediaRequest, MediaType,
    OpenPrismError, ProductRequest, Result, SceneFileData,
};

use crate::core::{DccPlugin, PrismCore, HOUDINI, MAYA};
use crate::host::{HostEnvironment, StandaloneHost};

/// Accessor facade over an optionally-present Prism core.
pub struct Prism {
    host: Box<dyn HostEnvironment>,
    registered: Option<Arc<dyn PrismCore>>,
}

impl Prism {
    /// Create an accessor bound to the given host environment.
    pub fn new(host: impl HostEnvironment + 'static) -> Self {
        Self {
            host: Box::new(host),
            registered: None,
        }
    }

    /// Create an accessor with no host integration. A core must be
    /// registered with [`Prism::set_core`] before remote calls succeed.
    pub fn standalone() -> Self {
        Self::new(StandaloneHost)
    }

    // ---- Core resolution ----

    /// Resolve the active core: host discovery first, then the registered
    /// fallback. Never errors.
    pub fn core(&self) -> Option<Arc<dyn PrismCore>> {
        self.host.discover_core().or_else(|| self.registered.clone())
    }

    /// Register (or clear, with `None`) the fallback core reference.
    /// Overwrites any previous registration; no validation is performed.
    pub fn set_core(&mut self, core: Option<Arc<dyn PrismCore>>) {
        match &core {
            Some(_) => log::debug!("registered a standalone Prism core"),
            None => log::debug!("cleared the registered Prism core"),
        }
        self.registered = core;
    }

    /// Whether a Prism core is currently available.
    pub fn is_active(&self) -> bool {
        self.core().is_some()
    }

    // ---- Sub-plugins ----

    /// The Prism Maya sub-plugin, when loaded.
    pub fn maya_plugin(&self) -> Option<Arc<dyn DccPlugin>> {
        self.core()?.plugin(MAYA)
    }

    /// Whether the Prism Maya sub-plugin is loaded.
    pub fn is_maya_plugin(&self) -> bool {
        self.maya_plugin().is_some()
    }

    /// The Prism Houdini sub-plugin, when loaded.
    pub fn houdini_plugin(&self) -> Option<Arc<dyn DccPlugin>> {
        self.core()?.plugin(HOUDINI)
    }

    /// Whether the Prism Houdini sub-plugin is loaded.
    pub fn is_houdini_plugin(&self) -> bool {
        self.houdini_plugin().is_some()
    }

    // ---- Graceful scalar accessors ----

    /// Name of the current project, or empty when no core is available.
    pub fn project_name(&self) -> String {
        match self.core() {
            Some(core) => core.project_name(),
            None => String::new(),
        }
    }

    /// Root path of the current project, normalized, or empty when no core
    /// is available.
    pub fn project_path(&self) -> String {
        match self.core() {
            Some(core) => normalize_separators(&core.project_path()),
            None => String::new(),
        }
    }

    /// Root path of the Prism installation, normalized, or `None` when no
    /// core is available.
    pub fn prism_root(&self) -> Option<String> {
        let core = self.core()?;
        Some(normalize_separators(&core.prism_root()))
    }

    // ---- Scene queries ----

    /// Path of the scene currently open in the host, normalized, or `None`
    /// when the host exposes no scene.
    pub fn current_scene_path(&self) -> Option<String> {
        self.host
            .current_scene_path()
            .filter(|path| !path.is_empty())
            .map(|path| normalize_separators(&path))
    }

    /// Whether the currently open scene resides inside the managed project.
    /// False when either the scene path or the project path is unavailable;
    /// never errors.
    pub fn is_scene_in_project(&self) -> bool {
        match self.current_scene_path() {
            Some(scene) => is_within(&scene, &self.project_path()),
            None => false,
        }
    }

    /// Descriptor for a scene file tracked by the core.
    pub fn scene_file_data(&self, scene_path: &str) -> Result<SceneFileData> {
        let core = self.require_core("scene_file_data")?;
        core.scene_file_data(scene_path)
    }

    /// The task of the given scene, or of the current scene when `None`.
    pub fn task(&self, scene_path: Option<&str>) -> Result<Option<String>> {
        self.scene_attribute("task", scene_path, "task")
    }

    /// The department of the given scene, or of the current scene when
    /// `None`.
    pub fn department(&self, scene_path: Option<&str>) -> Result<Option<String>> {
        self.scene_attribute("department", scene_path, "department")
    }

    // ---- Product export ----

    /// Export details for a new product version of the current scene.
    pub fn product_export_details(&self, request: &ProductRequest) -> Result<ExportDetails> {
        const OP: &str = "product_export_details";
        let core = self.require_core(OP)?;
        let scene = self.require_scene_in_project(OP)?;
        let data = core.scene_file_data(&scene)?;
        core.generate_product_path(&data, request)
    }

    /// Export file path for a new product version, normalized. `None` when
    /// the core's details carry no path entry.
    pub fn product_export_path(
        &self,
        identifier: &str,
        extension: &str,
        location: Option<&str>,
    ) -> Result<Option<String>> {
        let mut request = ProductRequest::new(identifier, extension);
        if let Some(location) = location {
            request = request.location(location);
        }
        let details = self.product_export_details(&request)?;
        Ok(details.path().map(normalize_separators))
    }

    /// Designate the product version at `path` as the master version. The
    /// path must exist on the file system before the core is contacted.
    pub fn set_product_master_version(&self, path: &str) -> Result<()> {
        const OP: &str = "set_product_master_version";
        self.require_existing_file(OP, path)?;
        let core = self.require_core(OP)?;
        log::debug!("({OP}) updating master version for {path}");
        core.update_product_master(path)
    }

    // ---- Media and playblast export ----

    /// Export details for a new media product version of the current scene.
    pub fn media_export_details(&self, request: &MediaRequest) -> Result<ExportDetails> {
        const OP: &str = "media_export_details";
        let core = self.require_core(OP)?;
        let scene = self.require_scene_in_project(OP)?;
        let data = core.scene_file_data(&scene)?;
        core.generate_media_path(&data, request)
    }

    /// Export file path for a new media product version, normalized.
    pub fn media_export_path(
        &self,
        identifier: &str,
        extension: &str,
        location: Option<&str>,
    ) -> Result<Option<String>> {
        let details = self.media_export_details(&media_request(identifier, extension, location))?;
        Ok(details.path().map(normalize_separators))
    }

    /// Export details for a new playblast version of the current scene.
    pub fn playblast_export_details(&self, request: &MediaRequest) -> Result<ExportDetails> {
        const OP: &str = "playblast_export_details";
        let core = self.require_core(OP)?;
        let scene = self.require_scene_in_project(OP)?;
        let data = core.scene_file_data(&scene)?;
        core.generate_playblast_path(&data, request)
    }

    /// Export file path for a new playblast version, normalized.
    pub fn playblast_export_path(
        &self,
        identifier: &str,
        extension: &str,
        location: Option<&str>,
    ) -> Result<Option<String>> {
        let details =
            self.playblast_export_details(&media_request(identifier, extension, location))?;
        Ok(details.path().map(normalize_separators))
    }

    /// Designate the media version at `path` as the master version, with no
    /// media-type scope.
    pub fn set_media_master_version(&self, path: &str) -> Result<()> {
        self.update_media_master("set_media_master_version", path, None)
    }

    /// Designate the render version at `path` as the master version.
    pub fn set_render_master_version(&self, path: &str) -> Result<()> {
        self.update_media_master("set_render_master_version", path, None)
    }

    /// Designate the playblast version at `path` as the master version.
    pub fn set_playblast_master_version(&self, path: &str) -> Result<()> {
        self.update_media_master(
            "set_playblast_master_version",
            path,
            Some(MediaType::Playblasts),
        )
    }

    /// Designate the 2D render version at `path` as the master version.
    pub fn set_2d_render_master_version(&self, path: &str) -> Result<()> {
        self.update_media_master(
            "set_2d_render_master_version",
            path,
            Some(MediaType::TwoDRenders),
        )
    }

    // ---- Locations, browsing, shot range ----

    /// Named base locations products can be exported to, path values
    /// normalized.
    pub fn export_locations(&self) -> Result<BTreeMap<String, String>> {
        let core = self.require_core("export_locations")?;
        Ok(normalize_location_map(core.export_product_base_paths()?))
    }

    /// Named base locations renders can be exported to, path values
    /// normalized.
    pub fn render_locations(&self) -> Result<BTreeMap<String, String>> {
        let core = self.require_core("render_locations")?;
        Ok(normalize_location_map(core.render_product_base_paths()?))
    }

    /// Open the core's modal product browser. Returns the selected paths,
    /// normalized; empty when the user selects nothing.
    pub fn request_products(&self) -> Result<Vec<String>> {
        let core = self.require_core("request_products")?;
        Ok(core
            .request_product_path()?
            .map(|path| normalize_separators(&path))
            .into_iter()
            .collect())
    }

    /// Start and end frames of the shot for the given scene, or for the
    /// current scene when `None`.
    pub fn shot_range(&self, scene_path: Option<&str>) -> Result<FrameRange> {
        const OP: &str = "shot_range";
        let core = self.require_core(OP)?;
        let scene = self.effective_scene_path(scene_path);
        let data = core.scene_file_data(&scene)?;
        core.shot_range(&data)
    }

    // ---- Internal helpers ----

    fn require_core(&self, op: &'static str) -> Result<Arc<dyn PrismCore>> {
        self.core().ok_or(OpenPrismError::CoreNotFound { op })
    }

    fn require_existing_file(&self, op: &'static str, path: &str) -> Result<()> {
        if Path::new(path).exists() {
            Ok(())
        } else {
            Err(OpenPrismError::PathNotFound {
                op,
                path: path.to_string(),
            })
        }
    }

    /// The current scene path, after verifying it resides inside the
    /// managed project.
    fn require_scene_in_project(&self, op: &'static str) -> Result<String> {
        let scene = self
            .current_scene_path()
            .ok_or(OpenPrismError::SceneNotInProject { op })?;
        if !is_within(&scene, &self.project_path()) {
            return Err(OpenPrismError::SceneNotInProject { op });
        }
        Ok(scene)
    }

    /// Explicit scene path when given, otherwise the current scene path
    /// (empty when the host exposes none).
    fn effective_scene_path(&self, explicit: Option<&str>) -> String {
        match explicit {
            Some(path) => normalize_separators(path),
            None => self.current_scene_path().unwrap_or_default(),
        }
    }

    fn scene_attribute(
        &self,
        op: &'static str,
        scene_path: Option<&str>,
        key: &str,
    ) -> Result<Option<String>> {
        let core = self.require_core(op)?;
        let scene = self.effective_scene_path(scene_path);
        if !is_within(&scene, &self.project_path()) {
            return Err(OpenPrismError::SceneNotInProject { op });
        }
        let data = core.scene_file_data(&scene)?;
        Ok(data.get_str(key).map(str::to_string))
    }

    fn update_media_master(
        &self,
        op: &'static str,
        path: &str,
        media_type: Option<MediaType>,
    ) -> Result<()> {
        self.require_existing_file(op, path)?;
        let core = self.require_core(op)?;
        log::debug!("({op}) updating master version for {path}");
        core.update_media_master(path, media_type)
    }
}

fn media_request(identifier: &str, extension: &str, location: Option<&str>) -> MediaRequest {
    let mut request = MediaRequest::new(identifier, extension);
    if let Some(location) = location {
        request = request.location(location);
    }
    request
}

fn normalize_location_map(locations: BTreeMap<String, String>) -> BTreeMap<String, String> {
    locations
        .into_iter()
        .map(|(name, path)| (name, normalize_separators(&path)))
        .collect()
}
