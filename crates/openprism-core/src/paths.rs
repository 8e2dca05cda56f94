//! Path separator helpers
//!
//! Prism cores on Windows hand back paths with either separator style, so
//! every path that leaves this API is normalized to forward slashes.

/// Replace every backslash separator with a forward slash.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Prefix test: whether `path` resides under `root`.
///
/// Both sides are normalized before comparing so that mixed separator
/// styles still match.
pub fn is_within(path: &str, root: &str) -> bool {
    if path.is_empty() || root.is_empty() {
        return false;
    }
    normalize_separators(path).starts_with(&normalize_separators(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_backslashes() {
        assert_eq!(
            normalize_separators("P:\\projects\\alpha\\scenes\\shot01.ma"),
            "P:/projects/alpha/scenes/shot01.ma"
        );
    }

    #[test]
    fn test_normalize_leaves_forward_slashes() {
        assert_eq!(normalize_separators("/proj/alpha/"), "/proj/alpha/");
    }

    #[test]
    fn test_is_within_true() {
        assert!(is_within("/proj/alpha/scenes/shot01.ma", "/proj/alpha/"));
    }

    #[test]
    fn test_is_within_false_outside_root() {
        assert!(!is_within("/other/shot01.ma", "/proj/alpha/"));
    }

    #[test]
    fn test_is_within_mixed_separators() {
        assert!(is_within("P:\\proj\\alpha\\scenes\\shot01.ma", "P:/proj/alpha"));
    }

    #[test]
    fn test_is_within_empty_sides() {
        assert!(!is_within("", "/proj/alpha/"));
        assert!(!is_within("/proj/alpha/scenes/shot01.ma", ""));
    }
}
