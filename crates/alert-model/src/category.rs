//! Severity and Hazard Taxonomies

use serde::{Deserialize, Serialize};

/// Normalized alert severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityLevel {
    /// Take action now
    Red,
    /// Be prepared
    Orange,
    /// Stay informed
    Yellow,
}

/// Normalized weather hazard category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardCategory {
    AirQuality,
    CoastalEvent,
    Dust,
    Flooding,
    Fog,
    ForestFire,
    HighTemperature,
    Hurricane,
    LowTemperature,
    SeaEvent,
    SnowIce,
    Thunderstorms,
    Tornado,
    Wind,
    /// Non-weather or otherwise unclassifiable event
    Unknown,
}
