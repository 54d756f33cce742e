//! Schema types for opsboard
//!
//! Field names follow the camelCase JSON the REST API exchanges; the config
//! file keeps snake_case.

mod calendar;
mod config;
mod field;
mod request;
mod stage;

pub use calendar::{CalendarEvent, EventKind};
pub use config::Config;
pub use field::{
    ComparisonType, DomainField, FieldCapabilities, FieldContext, FieldDefinition,
    SystemFieldType,
};
pub use request::{BulkStatusUpdateRequest, FieldResponse, FieldResponseValue, StatusUpdateRequest};
pub use stage::{ChangeReason, KanbanStage};
