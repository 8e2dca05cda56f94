//! Error types for the Open Prism API

use thiserror::Error;

/// The single error type for Open Prism operations.
///
/// Every message names the operation that failed so callers can surface it
/// directly. Errors are terminal for the current call; nothing is retried or
/// recovered locally.
#[derive(Debug, Error)]
pub enum OpenPrismError {
    /// No Prism core could be resolved, neither host-discovered nor
    /// explicitly registered.
    #[error("({op}) Prism core was not found")]
    CoreNotFound { op: &'static str },

    /// A file-system precondition failed before the core was contacted.
    #[error("({op}) the path does not exist: {path}")]
    PathNotFound { op: &'static str, path: String },

    /// The current scene does not reside inside the managed Prism project.
    #[error("({op}) the current scene is not in Prism")]
    SceneNotInProject { op: &'static str },

    /// The external core reported a failure while servicing a forwarded call.
    #[error("({op}) {message}")]
    Core { op: &'static str, message: String },
}

impl OpenPrismError {
    /// The operation name carried by this error.
    pub fn operation(&self) -> &'static str {
        match self {
            OpenPrismError::CoreNotFound { op }
            | OpenPrismError::PathNotFound { op, .. }
            | OpenPrismError::SceneNotInProject { op }
            | OpenPrismError::Core { op, .. } => op,
        }
    }
}

/// Result type alias for Open Prism operations
pub type Result<T> = std::result::Result<T, OpenPrismError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_operation() {
        let err = OpenPrismError::CoreNotFound { op: "get_shot_range" };
        assert_eq!(err.to_string(), "(get_shot_range) Prism core was not found");
        assert_eq!(err.operation(), "get_shot_range");
    }

    #[test]
    fn test_path_not_found_message() {
        let err = OpenPrismError::PathNotFound {
            op: "set_product_master_version",
            path: "/exports/v001/cache.abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "(set_product_master_version) the path does not exist: /exports/v001/cache.abc"
        );
    }

    #[test]
    fn test_core_failure_message() {
        let err = OpenPrismError::Core {
            op: "get_scene_file_data",
            message: "scene is not part of an entity".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "(get_scene_file_data) scene is not part of an entity"
        );
    }
}
