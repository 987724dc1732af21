//! Domain models shared across the core and the API layer.

pub mod analytics;
pub mod enums;
pub mod log;
pub mod message;
pub mod technician;

pub use analytics::{AnalyticsData, WeeklyCompletion};
pub use enums::{
    AircraftModel, ArchivePolicy, IssueCategory, LogStatus, MessageRole, RetentionPeriod,
    TechnicianRole,
};
pub use log::{parse_parts, DraftLog, MaintenanceLog};
pub use message::{Message, MessageTags};
pub use technician::Technician;

/// Errors constructing or converting domain values.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid {field}: '{value}'")]
    InvalidEnum { field: String, value: String },
    #[error("draft is missing required fields: {missing}")]
    IncompleteDraft { missing: String },
}
