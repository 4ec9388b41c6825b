//! Box-drawing helpers shared by the walker and formatters

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const PIPE_INDENT: &str = "│   ";
pub const SPACE_INDENT: &str = "    ";

/// Connector drawn in front of an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { LAST_BRANCH } else { BRANCH }
}

/// Calculate the prefix for the children of an entry drawn at `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, SPACE_INDENT)
    } else {
        format!("{}{}", prefix, PIPE_INDENT)
    }
}
