//! The external core contract
//!
//! Prism exposes its functionality through a process-level core object with
//! loosely-typed sub-objects for products, media, paths, and entities. This
//! module renders that surface as a single narrow trait so the accessor can
//! treat any implementation as a core: the real host binding in production,
//! a recording mock in tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use openprism_core::{
    ExportDetails, FrameRange, MediaRequest, MediaType, ProductRequest, Result, SceneFileData,
};

/// Fixed identifier of the Maya sub-plugin.
pub const MAYA: &str = "Maya";

/// Fixed identifier of the Houdini sub-plugin.
pub const HOUDINI: &str = "Houdini";

/// A loaded Prism DCC sub-plugin. Opaque beyond its identifier.
pub trait DccPlugin: Send + Sync {
    /// The identifier the plugin is registered under (e.g. `"Maya"`).
    fn name(&self) -> &str;
}

/// The surface this API requires from a Prism core.
///
/// Everything non-trivial (path generation, version resolution, browsing)
/// happens behind these methods; the accessor only adds presence checks and
/// separator normalization on top. Paths returned by implementations may use
/// either separator style.
pub trait PrismCore: Send + Sync {
    /// Name of the currently loaded project.
    fn project_name(&self) -> String;

    /// Root path of the currently loaded project.
    fn project_path(&self) -> String;

    /// Root path of the Prism installation.
    fn prism_root(&self) -> String;

    /// Descriptor for a scene file tracked by the core.
    fn scene_file_data(&self, scene_path: &str) -> Result<SceneFileData>;

    /// Look up a loaded DCC sub-plugin by its fixed identifier.
    fn plugin(&self, name: &str) -> Option<Arc<dyn DccPlugin>>;

    /// Generate the export path (with details) for a new product version.
    fn generate_product_path(
        &self,
        scene: &SceneFileData,
        request: &ProductRequest,
    ) -> Result<ExportDetails>;

    /// Designate the product version at `path` as the master version.
    fn update_product_master(&self, path: &str) -> Result<()>;

    /// Generate the export path (with details) for a new media product version.
    fn generate_media_path(
        &self,
        scene: &SceneFileData,
        request: &MediaRequest,
    ) -> Result<ExportDetails>;

    /// Generate the export path (with details) for a new playblast version.
    fn generate_playblast_path(
        &self,
        scene: &SceneFileData,
        request: &MediaRequest,
    ) -> Result<ExportDetails>;

    /// Designate the media version at `path` as the master version,
    /// optionally scoped to a media category.
    fn update_media_master(&self, path: &str, media_type: Option<MediaType>) -> Result<()>;

    /// Named base locations products can be exported to.
    fn export_product_base_paths(&self) -> Result<BTreeMap<String, String>>;

    /// Named base locations renders can be exported to.
    fn render_product_base_paths(&self) -> Result<BTreeMap<String, String>>;

    /// Start and end frames of the shot the given scene belongs to.
    fn shot_range(&self, scene: &SceneFileData) -> Result<FrameRange>;

    /// Open the core's modal product browser and return the selected path,
    /// or `None` when the user selects nothing.
    fn request_product_path(&self) -> Result<Option<String>>;
}
