//! Configuration types for tree walkers

use super::filter::should_exclude;

/// Exclusion patterns for a walk.
///
/// Both lists are checked at every depth, not only at the root.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Patterns passed on the command line.
    pub excludes: Vec<String>,
    /// Patterns read from the `.gitignore` at the walk root.
    pub root_excludes: Vec<String>,
}

impl WalkerConfig {
    pub fn new(excludes: Vec<String>, root_excludes: Vec<String>) -> Self {
        Self {
            excludes,
            root_excludes,
        }
    }

    /// Check if an entry with this name should be hidden.
    pub fn is_excluded(&self, name: &str) -> bool {
        should_exclude(name, &self.excludes, &self.root_excludes)
    }
}

/// Split a comma-separated `--exclude` value into trimmed patterns.
///
/// Empty tokens are dropped: an empty prefix would hide every entry.
pub fn split_patterns(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_patterns() {
        assert_eq!(
            split_patterns("node_modules, .git ,target"),
            vec!["node_modules", ".git", "target"]
        );
        assert_eq!(split_patterns("a,, ,b,"), vec!["a", "b"]);
        assert!(split_patterns("").is_empty());
    }

    #[test]
    fn test_config_checks_both_lists() {
        let config = WalkerConfig::new(vec!["dist".into()], vec!["node".into()]);
        assert!(config.is_excluded("dist"));
        assert!(config.is_excluded("node_modules"));
        assert!(!config.is_excluded("src"));
    }
}
