//! Report-level tunables.

use serde::{Deserialize, Serialize};

/// Settings for lazy chart activation and theme persistence.
///
/// Defaults match the published report; `serde` is used so a platform crate can
/// override individual fields from an embedded JSON blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Visible fraction a container must reach before it counts as "entered".
    pub visibility_threshold: f64,
    /// CSS margin grown around the viewport when testing intersection.
    pub root_margin: String,
    /// Delay before observation starts, giving the page time to lay out.
    pub startup_delay_ms: u64,
    /// Preference key holding `"true"` when the dark theme is selected.
    pub theme_key: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: 0.2,
            root_margin: "50px".to_string(),
            startup_delay_ms: 100,
            theme_key: "darkMode".to_string(),
        }
    }
}
