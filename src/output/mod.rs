//! Presentation of analysis results.

pub mod json;
pub mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::format_report;

/// How the binary renders a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Coloured human-readable report.
    #[default]
    Terminal,
    /// Pretty-printed JSON of the full report.
    Json,
}

impl OutputFormat {
    /// Get format from environment, with fallback default.
    ///
    /// Reads `CMB_FNL_OUTPUT`:
    /// - `"terminal"` → `Terminal`
    /// - `"json"` → `Json`
    /// - anything else → `default`
    pub fn from_env_or(default: Self) -> Self {
        Self::parse(std::env::var("CMB_FNL_OUTPUT").ok().as_deref()).unwrap_or(default)
    }

    fn parse(value: Option<&str>) -> Option<Self> {
        match value {
            Some("terminal") => Some(OutputFormat::Terminal),
            Some("json") => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
