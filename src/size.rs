//! Human-readable file sizes

use std::fmt;

/// Units tried in order before falling back to `PB`.
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Unit used once every entry of `UNITS` is exhausted.
const OVERFLOW_UNIT: &str = "PB";

/// A byte count scaled to the largest unit that keeps it below 1024.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumanSize {
    value: f64,
    unit: &'static str,
}

impl HumanSize {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &'static str {
        self.unit
    }

    /// The scaled value rounded to two decimals, e.g. `"1.50"`.
    pub fn value_str(&self) -> String {
        format!("{:.2}", self.value)
    }
}

impl fmt::Display for HumanSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}

/// Scale `bytes` by powers of 1024.
///
/// Values past the terabyte range stay in `PB` no matter how large they get.
pub fn human_size(bytes: u64) -> HumanSize {
    let mut value = bytes as f64;
    for unit in UNITS {
        if value < 1024.0 {
            return HumanSize { value, unit };
        }
        value /= 1024.0;
    }
    HumanSize {
        value,
        unit: OVERFLOW_UNIT,
    }
}
