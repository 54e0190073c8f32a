//! Weatheralerts (NWS) Alert Source
//!
//! Classifies the free-text alert strings published by the weatheralerts
//! custom integration. An alert string like "Winter Storm Warning" carries no
//! delimiter, but its trailing word is always one of a handful of NWS product
//! keywords, so the string is split by locating that keyword and resolving
//! both halves against fixed vocabularies.

use alert_model::{
    ClassifiedAlert, ClassifyError, EntityMode, HazardCategory, RawAlert, SeverityLevel,
    SourceMetadata, SourceRecord,
};
use tracing::debug;

use crate::AlertSource;

/// Integration tag set by the weatheralerts custom component
const INTEGRATION_KEY: &str = "weatheralerts";

/// Severity keywords in match-priority order, earlier entries win.
/// Keywords from https://www.weather.gov/lwx/WarningsDefined
///
/// "Emergency" stays last: it also occurs inside hazard names
/// ("Civil Emergency") and must not shadow the trailing keyword.
const SEVERITY_KEYWORDS: &[(&str, SeverityLevel)] = &[
    ("Warning", SeverityLevel::Red),
    ("Statement", SeverityLevel::Orange),
    ("Watch", SeverityLevel::Orange),
    ("Advisory", SeverityLevel::Yellow),
    ("Alert", SeverityLevel::Yellow),
    ("Outlook", SeverityLevel::Orange),
    ("Emergency", SeverityLevel::Red),
];

/// Hazard names from the NWS CAP documentation
/// https://vlab.noaa.gov/web/nws-common-alerting-protocol/cap-documentation#eventcode
///
/// Must cover every residual left after stripping a severity keyword from an
/// expected alert string; lookup is exact, order does not matter.
const HAZARD_NAMES: &[(&str, HazardCategory)] = &[
    ("911 Telephone Outage", HazardCategory::Unknown),
    ("Air Quality", HazardCategory::AirQuality),
    ("Air Stagnation", HazardCategory::AirQuality),
    ("Ashfall", HazardCategory::AirQuality),
    ("Avalanche", HazardCategory::SnowIce),
    ("Blue", HazardCategory::Unknown),
    ("Beach Hazards", HazardCategory::CoastalEvent),
    ("Blizzard", HazardCategory::SnowIce),
    ("Blowing Dust", HazardCategory::Dust),
    ("Brisk Wind", HazardCategory::Wind),
    ("Child Abduction", HazardCategory::Unknown),
    ("Civil Danger", HazardCategory::Unknown),
    ("Civil Emergency", HazardCategory::Unknown),
    ("Coastal Flood", HazardCategory::Flooding),
    ("Dense Fog", HazardCategory::Fog),
    ("Dense Smoke", HazardCategory::ForestFire),
    ("Dust Storm", HazardCategory::Dust),
    ("Earthquake", HazardCategory::Unknown),
    ("Evacuation - Immediate", HazardCategory::Unknown),
    ("Extreme Cold", HazardCategory::LowTemperature),
    ("Excessive Heat", HazardCategory::HighTemperature),
    ("Extreme Fire", HazardCategory::ForestFire),
    ("Extreme Wind", HazardCategory::Wind),
    ("Fire Weather", HazardCategory::ForestFire),
    ("Fire", HazardCategory::ForestFire),
    ("Flash Flood", HazardCategory::Flooding),
    ("Flood", HazardCategory::Flooding),
    ("Freeze", HazardCategory::LowTemperature),
    ("Freezing Fog", HazardCategory::SnowIce),
    ("Freezing Spray", HazardCategory::SeaEvent),
    ("Frost", HazardCategory::LowTemperature),
    ("Gale", HazardCategory::SeaEvent),
    ("Hard Freeze", HazardCategory::LowTemperature),
    ("Hazardous Materials", HazardCategory::Unknown),
    ("Hazardous Seas", HazardCategory::SeaEvent),
    ("Hazardous Weather", HazardCategory::Unknown),
    ("Heavy Freezing Spray", HazardCategory::SeaEvent),
    ("Heat", HazardCategory::HighTemperature),
    ("High Surf", HazardCategory::CoastalEvent),
    ("High Wind", HazardCategory::Wind),
    ("Hurricane Force Wind", HazardCategory::SeaEvent),
    ("Hurricane", HazardCategory::Hurricane),
    ("Hydrologic", HazardCategory::Unknown),
    ("Ice Storm", HazardCategory::SnowIce),
    ("Lake Effect Snow", HazardCategory::SnowIce),
    ("Lake Wind", HazardCategory::SeaEvent),
    ("Lakeshore Flood", HazardCategory::Flooding),
    ("Local Area", HazardCategory::Unknown),
    ("Law Enforcement", HazardCategory::Unknown),
    ("Marine Weather", HazardCategory::SeaEvent),
    ("Nuclear Power Plant", HazardCategory::Unknown),
    ("Radiological Hazard", HazardCategory::Unknown),
    ("Red Flag", HazardCategory::ForestFire),
    ("Rip Current", HazardCategory::CoastalEvent),
    ("River Flood", HazardCategory::Flooding),
    ("Severe Thunderstorm", HazardCategory::Thunderstorms),
    ("Shelter In Place", HazardCategory::Unknown),
    ("Small Craft", HazardCategory::SeaEvent),
    ("Snow Squall", HazardCategory::SnowIce),
    ("Special Marine", HazardCategory::SeaEvent),
    ("Special Weather", HazardCategory::Unknown),
    ("Storm Surge", HazardCategory::CoastalEvent),
    ("Storm", HazardCategory::SeaEvent),
    ("Tornado", HazardCategory::Tornado),
    ("Tropical Cyclone", HazardCategory::Hurricane),
    ("Tropical Storm", HazardCategory::Hurricane),
    ("Tsunami", HazardCategory::CoastalEvent),
    ("Typhoon Local", HazardCategory::Hurricane),
    ("Typhoon", HazardCategory::Hurricane),
    ("Volcano", HazardCategory::Unknown),
    ("Wind Chill", HazardCategory::LowTemperature),
    ("Winter Storm", HazardCategory::SnowIce),
    ("Winter Weather", HazardCategory::SnowIce),
    ("Wind", HazardCategory::Wind),
];

/// Find the first severity keyword contained in the alert text
fn severity_for(text: &str) -> Option<(&'static str, SeverityLevel)> {
    SEVERITY_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|&(keyword, level)| (keyword, level))
}

/// Exact lookup of a hazard name in the vocabulary
fn category_for(name: &str) -> Option<HazardCategory> {
    HAZARD_NAMES
        .iter()
        .find(|&&(entry, _)| entry == name)
        .map(|&(_, category)| category)
}

/// Remove the last occurrence of the severity keyword and trim.
/// The keyword trails the hazard name, so stripping the last occurrence keeps
/// names that themselves contain a keyword intact.
fn strip_keyword(full_name: &str, keyword: &str) -> String {
    match full_name.rfind(keyword) {
        Some(at) => {
            let mut name = String::with_capacity(full_name.len() - keyword.len());
            name.push_str(&full_name[..at]);
            name.push_str(&full_name[at + keyword.len()..]);
            name.trim().to_string()
        }
        None => full_name.trim().to_string(),
    }
}

/// Alert source for the weatheralerts (NWS) integration
#[derive(Debug, Default)]
pub struct Weatheralerts;

impl Weatheralerts {
    /// Classify a batch of raw alerts
    ///
    /// Strict: the whole batch fails on the first alert whose severity keyword
    /// or hazard name is missing from the vocabulary tables. Unknown upstream
    /// vocabulary is a table-maintenance bug and must surface, not be skipped.
    pub fn classify_alerts(alerts: &[RawAlert]) -> Result<Vec<ClassifiedAlert>, ClassifyError> {
        let mut classified = Vec::with_capacity(alerts.len());

        for alert in alerts {
            let full_name = alert.event.as_str();

            let (keyword, level) = severity_for(full_name)
                .ok_or_else(|| ClassifyError::UnknownSeverityLevel(full_name.to_string()))?;

            let hazard_name = strip_keyword(full_name, keyword);
            let category = category_for(&hazard_name)
                .ok_or(ClassifyError::UnknownHazardName(hazard_name))?;

            debug!("Classified {:?} as {:?}/{:?}", full_name, level, category);

            classified.push(ClassifiedAlert {
                headline: full_name.to_string(),
                level,
                category,
            });
        }

        Ok(classified)
    }

    /// Every hazard category in the vocabulary, deduplicated, declared order
    fn monitored_categories() -> Vec<HazardCategory> {
        let mut categories = Vec::new();
        for &(_, category) in HAZARD_NAMES {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }
}

impl AlertSource for Weatheralerts {
    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            key: INTEGRATION_KEY,
            name: "Weatheralerts",
            entity_mode: EntityMode::SingleEntity,
            entity_count: 1,
            returns_headline: true,
            multiple_alerts: true,
            monitored_categories: Self::monitored_categories(),
        }
    }

    fn supports(&self, record: &SourceRecord) -> bool {
        record.attributes.integration == INTEGRATION_KEY
    }

    fn alert_active(&self, record: &SourceRecord) -> bool {
        // State holds the active alert count; a non-numeric state
        // ("unavailable") counts as inactive
        record.numeric_state().map(|count| count > 0.0).unwrap_or(false)
    }

    fn classify(&self, record: &SourceRecord) -> Result<Vec<ClassifiedAlert>, ClassifyError> {
        Self::classify_alerts(&record.attributes.alerts)
    }
}
