//! Validation of custom field answers submitted with a status change

use std::collections::BTreeMap;

use serde_json::Value;

use crate::schemas::{FieldDefinition, FieldResponse, FieldResponseValue, SystemFieldType};

/// Answers keyed by custom field id, as collected by the form
pub type FieldAnswers = BTreeMap<String, Value>;

/// Result of a validation check
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Human-readable messages, one per failing field
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// Create a failed validation result
    pub fn failure(errors: Vec<String>) -> Self {
        ValidationResult {
            valid: false,
            errors,
        }
    }
}

/// Key a field's answer is stored under; unsaved fields fall back to their name
pub fn answer_key(field: &FieldDefinition) -> &str {
    field.id.as_deref().unwrap_or(&field.field_name)
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if !s.trim().is_empty() => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn as_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => {
            let list: Vec<String> = items.iter().filter_map(as_text).collect();
            (!list.is_empty()).then_some(list)
        }
        _ => None,
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Whether `value` counts as an answer for a field of `field_type`.
///
/// `multi_select` needs a non-empty list and `number` needs something that
/// parses (so `0` counts). Everything else needs a non-blank value.
pub fn is_answered(field_type: SystemFieldType, value: Option<&Value>) -> bool {
    let value = match value {
        None | Some(Value::Null) => return false,
        Some(v) => v,
    };

    match field_type {
        SystemFieldType::MultiSelect => as_list(value).is_some(),
        SystemFieldType::Number => parse_number(value).is_some(),
        _ => match value {
            Value::String(s) => !s.trim().is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            Value::Bool(_) | Value::Number(_) => true,
            Value::Null => false,
        },
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        _ => false,
    }
}

/// Check every field and collect one message per problem.
///
/// Required fields must be answered. Optional `number` fields may be left
/// blank but must parse when filled in.
pub fn validate_custom_field_responses(
    fields: &[FieldDefinition],
    answers: &FieldAnswers,
) -> ValidationResult {
    let mut errors = Vec::new();

    for field in fields {
        let value = answers.get(answer_key(field));
        let numeric = field.field_type == SystemFieldType::Number;

        if numeric && !is_blank(value) && !is_answered(field.field_type, value) {
            errors.push(format!("{} must be a number", field.field_name));
        } else if field.is_required && !is_answered(field.field_type, value) {
            errors.push(format!("{} is required", field.field_name));
        }
    }

    if errors.is_empty() {
        ValidationResult::success()
    } else {
        ValidationResult::failure(errors)
    }
}

/// Type each answer by its field's type.
///
/// Fields with no saved id are skipped since the server has nothing to
/// attach their answer to; `plan_status_change` refuses required ones
/// before this runs. Currency, percentage and boolean answers that do not
/// convert are sent as text.
pub fn build_field_responses(
    fields: &[FieldDefinition],
    answers: &FieldAnswers,
) -> Vec<FieldResponse> {
    fields
        .iter()
        .filter_map(|field| {
            let id = field.id.as_ref()?;
            let value = answers.get(id)?;
            if !is_answered(field.field_type, Some(value)) {
                return None;
            }

            let typed = match field.field_type {
                SystemFieldType::Number => FieldResponseValue::Number(parse_number(value)?),
                SystemFieldType::Currency | SystemFieldType::Percentage => {
                    match parse_number(value) {
                        Some(n) => FieldResponseValue::Number(n),
                        None => FieldResponseValue::ShortText(as_text(value)?),
                    }
                }
                SystemFieldType::Boolean => match as_bool(value) {
                    Some(b) => FieldResponseValue::Boolean(b),
                    None => FieldResponseValue::ShortText(as_text(value)?),
                },
                SystemFieldType::MultiSelect => FieldResponseValue::MultiSelect(as_list(value)?),
                SystemFieldType::SingleSelect => FieldResponseValue::SingleSelect(as_text(value)?),
                SystemFieldType::Date => FieldResponseValue::Date(as_text(value)?),
                SystemFieldType::LongText => FieldResponseValue::LongText(as_text(value)?),
                SystemFieldType::ShortText
                | SystemFieldType::Email
                | SystemFieldType::Phone
                | SystemFieldType::Url
                | SystemFieldType::FileUpload => FieldResponseValue::ShortText(as_text(value)?),
            };

            Some(FieldResponse {
                custom_field_id: id.clone(),
                field_type: field.field_type,
                value: typed,
            })
        })
        .collect()
}
