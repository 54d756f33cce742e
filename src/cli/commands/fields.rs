//! Fields commands - run records through a context adapter

use std::path::Path;

use crate::errors::Result;
use crate::fields::{all_adapters, AdapterSummary, FieldAdapter};
use crate::fs::read_json;
use crate::schemas::{DomainField, FieldContext, FieldDefinition};

use super::print_json;

/// List every adapter
pub fn contexts() -> Result<()> {
    let summaries: Vec<AdapterSummary> = all_adapters().iter().map(|a| a.summary()).collect();
    print_json(&summaries)
}

/// Domain records to field definitions
pub fn to_definitions(context: &str, file: &Path) -> Result<()> {
    let adapter = FieldAdapter::for_context(context.parse::<FieldContext>()?);
    let records: Vec<DomainField> = read_json(file)?;
    print_json(&adapter.map_all_to_field_definitions(&records))
}

/// Field definitions to request payloads
pub fn to_payload(context: &str, file: &Path, strict: bool) -> Result<()> {
    let adapter = FieldAdapter::for_context(context.parse::<FieldContext>()?);
    let definitions: Vec<FieldDefinition> = read_json(file)?;
    if strict {
        for definition in &definitions {
            adapter.ensure_allowed(definition)?;
        }
    }
    print_json(&adapter.map_all_from_field_definitions(&definitions))
}
