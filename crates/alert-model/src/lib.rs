//! Weather Alert Data Model
//!
//! Shared types for alert classification:
//! - Severity levels and hazard categories
//! - Raw and classified alert records
//! - Host entity snapshots
//! - Source integration metadata

mod alert;
mod category;
mod error;
mod metadata;
mod record;

pub use alert::{ClassifiedAlert, RawAlert};
pub use category::{HazardCategory, SeverityLevel};
pub use error::ClassifyError;
pub use metadata::{EntityMode, SourceMetadata};
pub use record::{RecordAttributes, SourceRecord};
