//! opsboard - decision logic behind an accounting firm's operations board
//!
//! This library provides:
//! - Schema definitions for field definitions, stages, change reasons and requests
//! - Field type normalization and per-context custom field adapters
//! - Stage transition rules, custom field answer validation and bulk-move eligibility
//! - Calendar event grouping
//! - Configuration loading and JSON file utilities

pub mod calendar;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fields;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use errors::{OpsboardError, Result};
pub use schemas::{Config, FieldDefinition, KanbanStage, SystemFieldType};
