//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `palette` - Role to color lookup
//! - `streaming` - Streaming formatter for console output

mod config;
mod palette;
mod streaming;

pub use config::OutputConfig;
pub use palette::{Palette, Role};
pub use streaming::{FILE_ICON, FOLDER_ICON, PERMISSION_DENIED, ROOT_ICON, StreamingFormatter};
