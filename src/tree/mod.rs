//! Directory tree walking logic
//!
//! `StreamingWalker` lists, filters and sorts each directory and hands every
//! visible entry to a `StreamingOutput` as soon as it is known, so memory use
//! is proportional to the open directories, not to the whole tree.

mod config;
mod filter;
mod utils;
mod walker;

pub use config::{WalkerConfig, split_patterns};
pub use filter::should_exclude;
pub use utils::{BRANCH, LAST_BRANCH, PIPE_INDENT, SPACE_INDENT, child_prefix, connector};
pub use walker::{EntryKind, StreamingOutput, StreamingWalker, VisibleEntry, WalkSummary};
