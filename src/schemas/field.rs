//! Field schema - canonical field definitions and the per-context record shape

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{OpsboardError, Result};

/// Canonical field type shared by every field-builder context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemFieldType {
    ShortText,
    LongText,
    Email,
    Phone,
    Url,
    Number,
    Currency,
    Percentage,
    Date,
    Boolean,
    SingleSelect,
    MultiSelect,
    FileUpload,
}

impl SystemFieldType {
    /// Every system field type, in builder display order.
    pub const ALL: &'static [SystemFieldType] = &[
        SystemFieldType::ShortText,
        SystemFieldType::LongText,
        SystemFieldType::Email,
        SystemFieldType::Phone,
        SystemFieldType::Url,
        SystemFieldType::Number,
        SystemFieldType::Currency,
        SystemFieldType::Percentage,
        SystemFieldType::Date,
        SystemFieldType::Boolean,
        SystemFieldType::SingleSelect,
        SystemFieldType::MultiSelect,
        SystemFieldType::FileUpload,
    ];

    /// Canonical wire name
    pub fn as_str(self) -> &'static str {
        match self {
            SystemFieldType::ShortText => "short_text",
            SystemFieldType::LongText => "long_text",
            SystemFieldType::Email => "email",
            SystemFieldType::Phone => "phone",
            SystemFieldType::Url => "url",
            SystemFieldType::Number => "number",
            SystemFieldType::Currency => "currency",
            SystemFieldType::Percentage => "percentage",
            SystemFieldType::Date => "date",
            SystemFieldType::Boolean => "boolean",
            SystemFieldType::SingleSelect => "single_select",
            SystemFieldType::MultiSelect => "multi_select",
            SystemFieldType::FileUpload => "file_upload",
        }
    }

    /// Legacy spellings other contexts use for this type.
    ///
    /// This is the only alias table in the crate: normalization reads it
    /// forwards and denormalization reads it backwards, so the two
    /// directions cannot drift apart.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            SystemFieldType::ShortText => &["text"],
            SystemFieldType::LongText => &["textarea"],
            SystemFieldType::Boolean => &["yes_no"],
            SystemFieldType::SingleSelect => &["single_choice"],
            SystemFieldType::MultiSelect => &["multi_choice"],
            SystemFieldType::Email
            | SystemFieldType::Phone
            | SystemFieldType::Url
            | SystemFieldType::Number
            | SystemFieldType::Currency
            | SystemFieldType::Percentage
            | SystemFieldType::Date
            | SystemFieldType::FileUpload => &[],
        }
    }

    /// Whether the type takes its value from `options`
    pub fn is_selection(self) -> bool {
        matches!(self, SystemFieldType::SingleSelect | SystemFieldType::MultiSelect)
    }
}

impl std::fmt::Display for SystemFieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SystemFieldType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SystemFieldType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown system field type: {}", s))
    }
}

/// How an approval field compares its answer with the expected number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonType {
    EqualTo,
    LessThan,
    GreaterThan,
}

impl ComparisonType {
    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonType::EqualTo => "equal_to",
            ComparisonType::LessThan => "less_than",
            ComparisonType::GreaterThan => "greater_than",
        }
    }

    /// Lenient parse used when reading domain records
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "equal_to" => Some(ComparisonType::EqualTo),
            "less_than" => Some(ComparisonType::LessThan),
            "greater_than" => Some(ComparisonType::GreaterThan),
            _ => None,
        }
    }
}

/// Canonical field shape consumed by the dynamic form renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Server id, present once persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display label
    pub field_name: String,

    pub field_type: SystemFieldType,

    /// Help text, empty when absent
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub is_required: bool,

    /// Display order, not necessarily contiguous
    #[serde(default)]
    pub order: i64,

    /// Choices for selection types, empty otherwise
    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default)]
    pub placeholder: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_rules: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional_logic: Option<Map<String, Value>>,

    /// Weak reference to a shared field-library entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_field_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_value_boolean: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_value_number: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_type: Option<ComparisonType>,

    /// Type spelling the record arrived with, reused when mapping back out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_field_type: Option<String>,
}

impl FieldDefinition {
    /// Create a new definition with every optional attribute empty
    pub fn new(field_name: impl Into<String>, field_type: SystemFieldType) -> Self {
        FieldDefinition {
            id: None,
            field_name: field_name.into(),
            field_type,
            description: String::new(),
            is_required: false,
            order: 0,
            options: Vec::new(),
            placeholder: String::new(),
            validation_rules: None,
            conditional_logic: None,
            library_field_id: None,
            section_id: None,
            expected_value_boolean: None,
            expected_value_number: None,
            comparison_type: None,
            source_field_type: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// Capability flags a field-builder context declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldCapabilities {
    pub supports_expected_value: bool,
    pub supports_validation_rules: bool,
    pub supports_conditional_logic: bool,
    pub supports_options: bool,
    pub supports_placeholder: bool,
    pub supports_help_text: bool,
    pub supports_library_picker: bool,
}

impl FieldCapabilities {
    /// No optional attribute supported
    pub const NONE: FieldCapabilities = FieldCapabilities {
        supports_expected_value: false,
        supports_validation_rules: false,
        supports_conditional_logic: false,
        supports_options: false,
        supports_placeholder: false,
        supports_help_text: false,
        supports_library_picker: false,
    };
}

/// The domain contexts that own custom field records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldContext {
    ChangeReason,
    RequestTemplate,
    ClientTask,
    StageApproval,
    Signature,
    ServiceUdf,
    CampaignPage,
}

impl FieldContext {
    pub const ALL: &'static [FieldContext] = &[
        FieldContext::ChangeReason,
        FieldContext::RequestTemplate,
        FieldContext::ClientTask,
        FieldContext::StageApproval,
        FieldContext::Signature,
        FieldContext::ServiceUdf,
        FieldContext::CampaignPage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldContext::ChangeReason => "change_reason",
            FieldContext::RequestTemplate => "request_template",
            FieldContext::ClientTask => "client_task",
            FieldContext::StageApproval => "stage_approval",
            FieldContext::Signature => "signature",
            FieldContext::ServiceUdf => "service_udf",
            FieldContext::CampaignPage => "campaign_page",
        }
    }
}

impl std::fmt::Display for FieldContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldContext {
    type Err = OpsboardError;

    fn from_str(s: &str) -> Result<Self> {
        FieldContext::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| OpsboardError::UnknownContext(s.to_string()))
    }
}

/// A custom field record in one context's own JSON shape.
///
/// Absent keys and `null` values are both read as "not set"; the mapping
/// back out never writes a key it has no value for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomainField(Map<String, Value>);

impl DomainField {
    pub fn new() -> Self {
        DomainField(Map::new())
    }

    /// Wrap a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(DomainField(map)),
            other => Err(OpsboardError::SchemaValidation(format!(
                "field record must be a JSON object, got {}",
                other
            ))),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Value under `key`, treating `null` as absent
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// String value; numeric ids are stringified
    pub fn str_value(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn bool_value(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn i64_value(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn f64_value(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// List of strings; scalar entries are stringified, others skipped
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key)? {
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    pub fn object(&self, key: &str) -> Option<Map<String, Value>> {
        match self.get(key)? {
            Value::Object(map) => Some(map.clone()),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for DomainField {
    fn from(map: Map<String, Value>) -> Self {
        DomainField(map)
    }
}
