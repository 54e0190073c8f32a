//! Alert Records

use serde::{Deserialize, Serialize};

use crate::{HazardCategory, SeverityLevel};

/// Raw alert as delivered by the host integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAlert {
    /// Free-text event name, e.g. "Winter Storm Warning"
    pub event: String,
    /// Upstream severity word (passthrough, not used for classification)
    #[serde(default)]
    pub severity: String,
    /// Upstream headline title (passthrough, not used for classification)
    #[serde(default)]
    pub title: String,
}

impl RawAlert {
    /// Create an alert carrying only an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            severity: String::new(),
            title: String::new(),
        }
    }
}

/// Classification result for a single alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedAlert {
    /// Original alert text, preserved for display
    pub headline: String,
    /// Severity tier resolved from the trailing keyword
    pub level: SeverityLevel,
    /// Hazard category resolved from the remaining event name
    pub category: HazardCategory,
}
