//! Host Entity Snapshot

use serde::{Deserialize, Serialize};

use crate::RawAlert;

/// Snapshot of the host-platform entity backing an alert source
///
/// The host reports entity state as a string even when the value is numeric;
/// `numeric_state` applies that convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Entity state as reported by the host
    pub state: String,
    /// Integration-specific attribute payload
    #[serde(default)]
    pub attributes: RecordAttributes,
}

/// Attribute payload attached to a source entity
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordAttributes {
    /// Tag identifying which integration produced the entity
    #[serde(default)]
    pub integration: String,
    /// Alerts currently attached to the entity
    #[serde(default)]
    pub alerts: Vec<RawAlert>,
}

impl SourceRecord {
    /// Numeric value of the state field, if it parses
    pub fn numeric_state(&self) -> Option<f64> {
        self.state.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_state() {
        let record = SourceRecord {
            state: "2".into(),
            attributes: RecordAttributes::default(),
        };
        assert_eq!(record.numeric_state(), Some(2.0));

        let record = SourceRecord {
            state: "unavailable".into(),
            attributes: RecordAttributes::default(),
        };
        assert_eq!(record.numeric_state(), None);
    }

    #[test]
    fn test_decode_host_payload() {
        // Shape delivered by the host platform's entity API
        let payload = r#"{
            "state": "1",
            "attributes": {
                "integration": "weatheralerts",
                "alerts": [
                    {
                        "event": "Winter Storm Warning",
                        "severity": "Severe",
                        "title": "Winter Storm Warning until tomorrow morning"
                    }
                ]
            }
        }"#;

        let record: SourceRecord = serde_json::from_str(payload).unwrap();
        assert_eq!(record.attributes.integration, "weatheralerts");
        assert_eq!(record.attributes.alerts.len(), 1);
        assert_eq!(record.attributes.alerts[0].event, "Winter Storm Warning");
        assert_eq!(record.attributes.alerts[0].severity, "Severe");
    }

    #[test]
    fn test_decode_minimal_alert() {
        // severity and title are optional on the wire
        let payload = r#"{"state": "0", "attributes": {"alerts": [{"event": "Flood Watch"}]}}"#;

        let record: SourceRecord = serde_json::from_str(payload).unwrap();
        assert_eq!(record.attributes.alerts[0].event, "Flood Watch");
        assert!(record.attributes.alerts[0].severity.is_empty());
        assert!(record.attributes.integration.is_empty());
    }
}
