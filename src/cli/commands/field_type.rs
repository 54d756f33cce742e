//! Field type commands - normalize and denormalize type names

use serde::Serialize;

use crate::errors::{OpsboardError, Result};
use crate::fields::{denormalize_field_type, normalize_field_type, try_normalize_field_type};
use crate::schemas::SystemFieldType;

use super::print_json;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Normalized<'a> {
    input: &'a str,
    system_type: SystemFieldType,
    recognized: bool,
}

/// Print the system type for a context type name
pub fn normalize(field_type: &str) -> Result<()> {
    print_json(&Normalized {
        input: field_type,
        system_type: normalize_field_type(field_type),
        recognized: try_normalize_field_type(field_type).is_some(),
    })
}

/// Print the context spelling for a system type
pub fn denormalize(system_type: &str, alias: Option<&str>) -> Result<()> {
    let parsed: SystemFieldType = system_type
        .parse()
        .map_err(OpsboardError::SchemaValidation)?;
    print_json(&denormalize_field_type(parsed, alias))
}
