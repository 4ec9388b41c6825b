//! Twig - a directory tree with file sizes and `.gitignore`-aware exclusions

pub mod gitignore;
pub mod output;
pub mod size;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use gitignore::{IgnoreError, load_gitignore, read_gitignore};
pub use output::{OutputConfig, Palette, Role, StreamingFormatter};
pub use size::{HumanSize, human_size};
pub use tree::{StreamingOutput, StreamingWalker, WalkSummary, WalkerConfig, split_patterns};
