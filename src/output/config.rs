//! Output configuration types

use super::palette::Palette;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    pub palette: Palette,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            palette: Palette::default(),
        }
    }
}
