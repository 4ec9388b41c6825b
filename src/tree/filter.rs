//! Name-based exclusion for tree walking

/// Check if `name` equals or starts with any pattern in either list.
///
/// Matching is literal: patterns are plain prefixes, never globs.
pub fn should_exclude(name: &str, excludes: &[String], root_excludes: &[String]) -> bool {
    excludes
        .iter()
        .chain(root_excludes)
        .any(|pattern| name == pattern.as_str() || name.starts_with(pattern.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prefix_match() {
        let root = patterns(&["node"]);
        assert!(should_exclude("node_modules", &[], &root));
        assert!(should_exclude("nodejs", &[], &root));
        assert!(should_exclude("node", &[], &root));
        assert!(!should_exclude("anode", &[], &root));
    }

    #[test]
    fn test_no_match() {
        assert!(!should_exclude("abc", &patterns(&["xyz"]), &[]));
        assert!(!should_exclude("abc", &[], &[]));
    }

    #[test]
    fn test_either_list_excludes() {
        let user = patterns(&["target"]);
        let root = patterns(&[".git"]);
        assert!(should_exclude("target", &user, &root));
        assert!(should_exclude(".github", &user, &root));
        assert!(!should_exclude("src", &user, &root));
    }

    #[test]
    fn test_glob_characters_are_literal() {
        let root = patterns(&["*.log"]);
        assert!(!should_exclude("debug.log", &[], &root));
        assert!(should_exclude("*.log.old", &[], &root));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!should_exclude("Build", &patterns(&["build"]), &[]));
    }
}
