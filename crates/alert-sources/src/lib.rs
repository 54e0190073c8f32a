//! Alert Source Integrations
//!
//! Each supported alert integration implements the [`AlertSource`] capability
//! interface; the dispatch layer picks one per entity via [`SourceRegistry`].
//! Supported sources:
//! - Weatheralerts (NWS CAP alert strings)

mod registry;
mod weatheralerts;

pub use registry::SourceRegistry;
pub use weatheralerts::Weatheralerts;

use alert_model::{ClassifiedAlert, ClassifyError, SourceMetadata, SourceRecord};

/// Capability interface implemented by every alert source integration
pub trait AlertSource: Send + Sync {
    /// Static descriptor consumed by configuration and UI tooling
    fn metadata(&self) -> SourceMetadata;

    /// Whether this source recognizes the given entity record
    fn supports(&self, record: &SourceRecord) -> bool;

    /// Whether the record currently carries any active alert
    fn alert_active(&self, record: &SourceRecord) -> bool;

    /// Classify every alert attached to the record
    ///
    /// Strict: fails the whole batch on the first alert that cannot be
    /// resolved against the source's vocabulary.
    fn classify(&self, record: &SourceRecord) -> Result<Vec<ClassifiedAlert>, ClassifyError>;
}
