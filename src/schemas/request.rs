//! Request schema - bodies for the single and bulk status update endpoints

use serde::{Deserialize, Serialize};

use super::SystemFieldType;

/// A typed answer to one custom field.
///
/// Serializes as exactly one `value*` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldResponseValue {
    #[serde(rename = "valueShortText")]
    ShortText(String),
    #[serde(rename = "valueLongText")]
    LongText(String),
    #[serde(rename = "valueNumber")]
    Number(f64),
    #[serde(rename = "valueBoolean")]
    Boolean(bool),
    #[serde(rename = "valueDate")]
    Date(String),
    #[serde(rename = "valueSingleSelect")]
    SingleSelect(String),
    #[serde(rename = "valueMultiSelect")]
    MultiSelect(Vec<String>),
}

/// One entry of `fieldResponses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldResponse {
    pub custom_field_id: String,
    pub field_type: SystemFieldType,
    #[serde(flatten)]
    pub value: FieldResponseValue,
}

/// PATCH body for moving one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateRequest {
    pub new_status: String,

    /// Change reason id
    pub change_reason: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_responses: Option<Vec<FieldResponse>>,
}

/// POST body for moving many projects to the same stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatusUpdateRequest {
    pub project_ids: Vec<String>,
    pub new_status: String,
    pub change_reason: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes_html: Option<String>,
}
