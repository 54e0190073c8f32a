//! Source Selection

use alert_model::SourceRecord;
use tracing::{debug, warn};

use crate::{AlertSource, Weatheralerts};

/// Registry holding the closed set of supported alert sources
pub struct SourceRegistry {
    sources: Vec<Box<dyn AlertSource>>,
}

impl SourceRegistry {
    /// Create a registry with every supported integration registered
    pub fn new() -> Self {
        Self {
            sources: vec![Box::new(Weatheralerts)],
        }
    }

    /// All registered sources
    pub fn sources(&self) -> &[Box<dyn AlertSource>] {
        &self.sources
    }

    /// Pick the source that recognizes the record, if any
    pub fn select(&self, record: &SourceRecord) -> Option<&dyn AlertSource> {
        for source in &self.sources {
            if source.supports(record) {
                debug!("Selected alert source: {}", source.metadata().key);
                return Some(source.as_ref());
            }
        }
        warn!(
            "No alert source recognizes integration tag: {:?}",
            record.attributes.integration
        );
        None
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alert_model::RecordAttributes;

    fn record_with_tag(tag: &str) -> SourceRecord {
        SourceRecord {
            state: "1".into(),
            attributes: RecordAttributes {
                integration: tag.into(),
                alerts: Vec::new(),
            },
        }
    }

    #[test]
    fn test_select_weatheralerts() {
        let registry = SourceRegistry::new();
        let record = record_with_tag("weatheralerts");

        let source = registry.select(&record).expect("source should be selected");
        assert_eq!(source.metadata().key, "weatheralerts");
    }

    #[test]
    fn test_select_foreign_tag() {
        let registry = SourceRegistry::new();
        let record = record_with_tag("some_other_integration");

        assert!(registry.select(&record).is_none());
    }

    #[test]
    fn test_registry_is_nonempty() {
        let registry = SourceRegistry::default();
        assert!(!registry.sources().is_empty());
    }
}
