//! Source Integration Metadata

use serde::Serialize;

use crate::HazardCategory;

/// How an integration maps onto host entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityMode {
    /// One combined entity carrying every alert
    SingleEntity,
    /// One entity per hazard category
    PerCategory,
}

/// Static descriptor for an alert source integration
///
/// Consumed by configuration and UI tooling to know what shape of data to
/// expect before any entity is inspected.
#[derive(Debug, Clone, Serialize)]
pub struct SourceMetadata {
    /// Unique integration key
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Entity cardinality mode
    pub entity_mode: EntityMode,
    /// Number of entities the integration exposes
    pub entity_count: usize,
    /// Whether classified alerts carry a displayable headline
    pub returns_headline: bool,
    /// Whether several alerts can be active at once
    pub multiple_alerts: bool,
    /// Every hazard category this source can produce
    pub monitored_categories: Vec<HazardCategory>,
}
