//! Field type normalization
//!
//! Converts between the alias spellings used by individual contexts and the
//! canonical [`SystemFieldType`].

use tracing::warn;

use crate::schemas::SystemFieldType;

/// Strict lookup: alias first, then canonical name.
///
/// Returns `None` for anything unrecognized.
pub fn try_normalize_field_type(context_type: &str) -> Option<SystemFieldType> {
    SystemFieldType::ALL
        .iter()
        .copied()
        .find(|t| t.aliases().contains(&context_type))
        .or_else(|| context_type.parse().ok())
}

/// Map a context's type name to the canonical type.
///
/// Never fails: unknown names render as `short_text` so a field is always
/// displayable. The coercion is logged at warn level.
pub fn normalize_field_type(context_type: &str) -> SystemFieldType {
    match try_normalize_field_type(context_type) {
        Some(t) => t,
        None => {
            warn!(field_type = context_type, "unknown field type, using short_text");
            SystemFieldType::ShortText
        }
    }
}

/// Whether `name` denotes `system_type`, either canonically or as an alias
pub fn is_alias_of(system_type: SystemFieldType, name: &str) -> bool {
    system_type.as_str() == name || system_type.aliases().contains(&name)
}

/// Map a canonical type back to a context spelling.
///
/// Keeps `target_alias` when it denotes the same type, so a record that
/// arrived as `yes_no` leaves as `yes_no`. Otherwise the canonical name.
pub fn denormalize_field_type(system_type: SystemFieldType, target_alias: Option<&str>) -> String {
    match target_alias {
        Some(alias) if is_alias_of(system_type, alias) => alias.to_string(),
        _ => system_type.as_str().to_string(),
    }
}
