//! Context field adapters
//!
//! One [`FieldAdapter`] value describes a context completely: its key names,
//! capability flags, offered types and optional wire vocabulary. The mapping
//! logic below is shared by all of them.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{OpsboardError, Result};
use crate::schemas::{
    ComparisonType, DomainField, FieldCapabilities, FieldContext, FieldDefinition,
    SystemFieldType,
};

use super::types::{denormalize_field_type, normalize_field_type};

const ID_KEY: &str = "id";
const ORDER_KEY: &str = "order";
const REQUIRED_KEY: &str = "isRequired";
const OPTIONS_KEY: &str = "options";
const PLACEHOLDER_KEY: &str = "placeholder";
const VALIDATION_RULES_KEY: &str = "validationRules";
const CONDITIONAL_LOGIC_KEY: &str = "conditionalLogic";
const LIBRARY_FIELD_KEY: &str = "libraryFieldId";
const EXPECTED_BOOLEAN_KEY: &str = "expectedValueBoolean";
const EXPECTED_NUMBER_KEY: &str = "expectedValueNumber";
const COMPARISON_KEY: &str = "comparisonType";

/// Key names that differ between contexts
#[derive(Debug, Clone, Copy)]
pub struct FieldKeys {
    /// Display label key (`fieldName` or `label`)
    pub name: &'static str,
    /// Type key (`fieldType` or `questionType`)
    pub field_type: &'static str,
    /// Help text key (`description` or `helpText`)
    pub description: &'static str,
    /// Grouping key, for contexts that have sections
    pub section: Option<&'static str>,
}

/// Type vocabulary for contexts whose API speaks neither the canonical
/// names nor the shared aliases
#[derive(Debug, Clone, Copy)]
pub struct WireTypes {
    pub to_wire: fn(SystemFieldType) -> &'static str,
    pub from_wire: fn(&str) -> SystemFieldType,
}

/// Static description of one field-builder context
#[derive(Debug, Clone, Copy)]
pub struct FieldAdapter {
    pub context: FieldContext,
    pub keys: FieldKeys,
    pub capabilities: FieldCapabilities,
    pub allowed_field_types: &'static [SystemFieldType],
    pub wire_types: Option<WireTypes>,
}

/// Serializable view of an adapter, for listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterSummary {
    pub context: FieldContext,
    pub name_key: &'static str,
    pub type_key: &'static str,
    pub capabilities: FieldCapabilities,
    pub allowed_field_types: Vec<SystemFieldType>,
    pub remaps_types: bool,
}

impl FieldAdapter {
    /// The adapter registered for `context`
    pub fn for_context(context: FieldContext) -> &'static FieldAdapter {
        super::contexts::adapter(context)
    }

    /// Canonical type to this context's type name.
    ///
    /// `source_alias` is the spelling the field arrived with, if any.
    pub fn map_system_field_type(
        &self,
        system_type: SystemFieldType,
        source_alias: Option<&str>,
    ) -> String {
        match self.wire_types {
            Some(wire) => (wire.to_wire)(system_type).to_string(),
            None => denormalize_field_type(system_type, source_alias),
        }
    }

    /// This context's type name to the canonical type
    pub fn map_to_system_field_type(&self, context_type: &str) -> SystemFieldType {
        match self.wire_types {
            Some(wire) => (wire.from_wire)(context_type),
            None => normalize_field_type(context_type),
        }
    }

    pub fn allows(&self, field_type: SystemFieldType) -> bool {
        self.allowed_field_types.contains(&field_type)
    }

    /// Reject definitions whose type this context's builder does not offer
    pub fn ensure_allowed(&self, field: &FieldDefinition) -> Result<()> {
        if self.allows(field.field_type) {
            return Ok(());
        }
        Err(OpsboardError::FieldTypeNotAllowed {
            context: self.context.to_string(),
            field_type: field.field_type.to_string(),
        })
    }

    /// Domain record to canonical definition.
    ///
    /// Total: every absent attribute gets its default, `order` falls back to
    /// the record's position in its collection.
    pub fn map_to_field_definition(&self, record: &DomainField, index: usize) -> FieldDefinition {
        let caps = &self.capabilities;
        let source_type = record.str_value(self.keys.field_type);
        let field_type = source_type
            .as_deref()
            .map(|t| self.map_to_system_field_type(t))
            .unwrap_or(SystemFieldType::ShortText);

        FieldDefinition {
            id: record.str_value(ID_KEY),
            field_name: record.str_value(self.keys.name).unwrap_or_default(),
            field_type,
            description: supported(caps.supports_help_text, || {
                record.str_value(self.keys.description)
            })
            .unwrap_or_default(),
            is_required: record.bool_value(REQUIRED_KEY).unwrap_or(false),
            order: record.i64_value(ORDER_KEY).unwrap_or(index as i64),
            options: supported(caps.supports_options, || record.string_list(OPTIONS_KEY))
                .unwrap_or_default(),
            placeholder: supported(caps.supports_placeholder, || {
                record.str_value(PLACEHOLDER_KEY)
            })
            .unwrap_or_default(),
            validation_rules: supported(caps.supports_validation_rules, || {
                record.object(VALIDATION_RULES_KEY)
            }),
            conditional_logic: supported(caps.supports_conditional_logic, || {
                record.object(CONDITIONAL_LOGIC_KEY)
            }),
            library_field_id: supported(caps.supports_library_picker, || {
                record.str_value(LIBRARY_FIELD_KEY)
            }),
            section_id: self.keys.section.and_then(|key| record.str_value(key)),
            expected_value_boolean: supported(caps.supports_expected_value, || {
                record.bool_value(EXPECTED_BOOLEAN_KEY)
            }),
            expected_value_number: supported(caps.supports_expected_value, || {
                record.f64_value(EXPECTED_NUMBER_KEY)
            }),
            comparison_type: supported(caps.supports_expected_value, || {
                record
                    .str_value(COMPARISON_KEY)
                    .and_then(|s| ComparisonType::parse(&s))
            }),
            source_field_type: source_type,
        }
    }

    /// Canonical definition to a create/update payload in this context's shape.
    ///
    /// Attributes outside the declared capabilities are dropped. Empty
    /// strings, lists and maps are left out so the API treats them as
    /// unchanged.
    pub fn map_from_field_definition(&self, field: &FieldDefinition) -> DomainField {
        let caps = &self.capabilities;
        let mut out = DomainField::new();

        if let Some(id) = non_empty(field.id.as_deref()) {
            out.insert(ID_KEY, id);
        }
        if let Some(name) = non_empty(Some(&field.field_name)) {
            out.insert(self.keys.name, name);
        }
        out.insert(
            self.keys.field_type,
            self.map_system_field_type(field.field_type, field.source_field_type.as_deref()),
        );
        out.insert(REQUIRED_KEY, field.is_required);
        out.insert(ORDER_KEY, field.order);

        if caps.supports_help_text {
            if let Some(description) = non_empty(Some(&field.description)) {
                out.insert(self.keys.description, description);
            }
        }
        if caps.supports_options && field.field_type.is_selection() && !field.options.is_empty() {
            out.insert(OPTIONS_KEY, field.options.clone());
        }
        if caps.supports_placeholder {
            if let Some(placeholder) = non_empty(Some(&field.placeholder)) {
                out.insert(PLACEHOLDER_KEY, placeholder);
            }
        }
        if caps.supports_validation_rules {
            if let Some(rules) = non_empty_map(field.validation_rules.as_ref()) {
                out.insert(VALIDATION_RULES_KEY, rules);
            }
        }
        if caps.supports_conditional_logic {
            if let Some(logic) = non_empty_map(field.conditional_logic.as_ref()) {
                out.insert(CONDITIONAL_LOGIC_KEY, logic);
            }
        }
        if caps.supports_library_picker {
            if let Some(library_id) = non_empty(field.library_field_id.as_deref()) {
                out.insert(LIBRARY_FIELD_KEY, library_id);
            }
        }
        if let Some(key) = self.keys.section {
            if let Some(section_id) = non_empty(field.section_id.as_deref()) {
                out.insert(key, section_id);
            }
        }
        if caps.supports_expected_value {
            if let Some(expected) = field.expected_value_boolean {
                out.insert(EXPECTED_BOOLEAN_KEY, expected);
            }
            if let Some(number) = field
                .expected_value_number
                .and_then(serde_json::Number::from_f64)
            {
                out.insert(EXPECTED_NUMBER_KEY, number);
            }
            if let Some(comparison) = field.comparison_type {
                out.insert(COMPARISON_KEY, comparison.as_str());
            }
        }

        out
    }

    /// Map a whole collection, ordered by `order` (stable on ties)
    pub fn map_all_to_field_definitions(&self, records: &[DomainField]) -> Vec<FieldDefinition> {
        let mut fields: Vec<FieldDefinition> = records
            .iter()
            .enumerate()
            .map(|(index, record)| self.map_to_field_definition(record, index))
            .collect();
        fields.sort_by_key(|f| f.order);
        debug!(context = %self.context, count = fields.len(), "mapped field records");
        fields
    }

    pub fn map_all_from_field_definitions(&self, fields: &[FieldDefinition]) -> Vec<DomainField> {
        fields
            .iter()
            .map(|field| self.map_from_field_definition(field))
            .collect()
    }

    pub fn summary(&self) -> AdapterSummary {
        AdapterSummary {
            context: self.context,
            name_key: self.keys.name,
            type_key: self.keys.field_type,
            capabilities: self.capabilities,
            allowed_field_types: self.allowed_field_types.to_vec(),
            remaps_types: self.wire_types.is_some(),
        }
    }
}

fn supported<T>(flag: bool, read: impl FnOnce() -> Option<T>) -> Option<T> {
    if flag {
        read()
    } else {
        None
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
}

fn non_empty_map(value: Option<&Map<String, Value>>) -> Option<Value> {
    value
        .filter(|m| !m.is_empty())
        .map(|m| Value::Object(m.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> DomainField {
        DomainField::from_value(value).unwrap()
    }

    fn adapter(context: FieldContext) -> &'static FieldAdapter {
        FieldAdapter::for_context(context)
    }

    /// A record with every attribute the context supports populated
    fn full_record(context: FieldContext) -> DomainField {
        let a = adapter(context);
        let caps = a.capabilities;
        let field_type = if caps.supports_options {
            a.map_system_field_type(SystemFieldType::SingleSelect, Some("single_choice"))
        } else {
            a.map_system_field_type(SystemFieldType::Number, None)
        };

        let mut r = DomainField::new()
            .with("id", "cf-7")
            .with(a.keys.name, "Turnover band")
            .with(a.keys.field_type, field_type)
            .with("isRequired", true)
            .with("order", 4);
        if caps.supports_help_text {
            r.insert(a.keys.description, "Pick the closest band");
        }
        if caps.supports_options {
            r.insert("options", json!(["< 85k", "85k - 250k", "> 250k"]));
        }
        if caps.supports_placeholder {
            r.insert("placeholder", "Select one");
        }
        if caps.supports_validation_rules {
            r.insert("validationRules", json!({"min": 1}));
        }
        if caps.supports_conditional_logic {
            r.insert("conditionalLogic", json!({"showWhen": {"field": "q1", "equals": "yes"}}));
        }
        if caps.supports_library_picker {
            r.insert("libraryFieldId", "lib-3");
        }
        if let Some(key) = a.keys.section {
            r.insert(key, "sec-1");
        }
        if caps.supports_expected_value {
            r.insert("expectedValueBoolean", false);
            r.insert("expectedValueNumber", 12.5);
            r.insert("comparisonType", "greater_than");
        }
        r
    }

    #[test]
    fn test_full_record_round_trips_in_every_context() {
        for context in FieldContext::ALL {
            let a = adapter(*context);
            let original = full_record(*context);

            let definition = a.map_to_field_definition(&original, 0);
            let back = a.map_from_field_definition(&definition);

            assert_eq!(back, original, "round trip mismatch in {}", context);
        }
    }

    #[test]
    fn test_empty_record_gets_defaults_in_every_context() {
        for context in FieldContext::ALL {
            let definition = adapter(*context).map_to_field_definition(&DomainField::new(), 5);

            assert_eq!(definition.description, "");
            assert_eq!(definition.placeholder, "");
            assert!(definition.options.is_empty());
            assert_eq!(definition.order, 5);
            assert_eq!(definition.field_type, SystemFieldType::ShortText);
            assert!(definition.id.is_none());
            assert!(!definition.is_required);
        }
    }

    #[test]
    fn test_null_values_read_as_absent() {
        let a = adapter(FieldContext::ChangeReason);
        let definition = a.map_to_field_definition(
            &record(json!({
                "fieldName": "Notes",
                "fieldType": "long_text",
                "description": null,
                "order": null,
                "options": null
            })),
            2,
        );
        assert_eq!(definition.order, 2);
        assert_eq!(definition.description, "");
        assert!(definition.options.is_empty());
    }

    #[test]
    fn test_empty_attributes_are_omitted_on_the_way_out() {
        let a = adapter(FieldContext::RequestTemplate);
        let original = record(json!({
            "label": "Company name",
            "questionType": "text",
            "helpText": "",
            "placeholder": "",
            "options": [],
            "validationRules": {},
            "libraryFieldId": ""
        }));

        let back = a.map_from_field_definition(&a.map_to_field_definition(&original, 0));

        assert_eq!(back.str_value("label").as_deref(), Some("Company name"));
        for key in [
            "helpText",
            "placeholder",
            "options",
            "validationRules",
            "libraryFieldId",
            "id",
        ] {
            assert!(!back.as_map().contains_key(key), "{} should be omitted", key);
        }
    }

    #[test]
    fn test_unsupported_attributes_are_dropped() {
        let a = adapter(FieldContext::Signature);
        let mut definition = FieldDefinition::new("Signed on", SystemFieldType::Date);
        definition.validation_rules = Some(json!({"required": true}).as_object().unwrap().clone());
        definition.library_field_id = Some("lib-1".to_string());
        definition.expected_value_boolean = Some(true);

        let out = a.map_from_field_definition(&definition);

        assert!(!out.as_map().contains_key("validationRules"));
        assert!(!out.as_map().contains_key("libraryFieldId"));
        assert!(!out.as_map().contains_key("expectedValueBoolean"));
        assert_eq!(out.str_value("fieldType").as_deref(), Some("date"));
    }

    #[test]
    fn test_options_only_written_for_selection_types() {
        let a = adapter(FieldContext::ServiceUdf);
        let definition =
            FieldDefinition::new("Year end", SystemFieldType::Date).with_options(["stale"]);
        let out = a.map_from_field_definition(&definition);
        assert!(!out.as_map().contains_key("options"));
    }

    #[test]
    fn test_alias_spelling_is_preserved() {
        let a = adapter(FieldContext::ChangeReason);
        let original = record(json!({"fieldName": "Chased client?", "fieldType": "yes_no"}));

        let definition = a.map_to_field_definition(&original, 0);
        assert_eq!(definition.field_type, SystemFieldType::Boolean);

        let back = a.map_from_field_definition(&definition);
        assert_eq!(back.str_value("fieldType").as_deref(), Some("yes_no"));
    }

    #[test]
    fn test_canonical_name_used_without_source_alias() {
        let a = adapter(FieldContext::ChangeReason);
        let definition = FieldDefinition::new("Chased client?", SystemFieldType::Boolean);
        let out = a.map_from_field_definition(&definition);
        assert_eq!(out.str_value("fieldType").as_deref(), Some("boolean"));
    }

    #[test]
    fn test_request_template_collapses_unsupported_types() {
        let a = adapter(FieldContext::RequestTemplate);
        assert_eq!(a.map_system_field_type(SystemFieldType::Phone, None), "text");
        assert_eq!(a.map_system_field_type(SystemFieldType::Url, None), "text");
        assert_eq!(a.map_system_field_type(SystemFieldType::Currency, None), "number");
        assert_eq!(a.map_system_field_type(SystemFieldType::Percentage, None), "number");
        assert_eq!(a.map_system_field_type(SystemFieldType::Boolean, None), "yes_no");
        assert_eq!(a.map_to_system_field_type("single_choice"), SystemFieldType::SingleSelect);
    }

    #[test]
    fn test_client_task_collapses_unsupported_types() {
        let a = adapter(FieldContext::ClientTask);
        assert_eq!(a.map_system_field_type(SystemFieldType::Phone, Some("phone")), "short_text");
        assert_eq!(a.map_system_field_type(SystemFieldType::Currency, None), "number");
        assert_eq!(a.map_system_field_type(SystemFieldType::MultiSelect, None), "multi_select");
    }

    #[test]
    fn test_unknown_type_renders_as_short_text() {
        let a = adapter(FieldContext::CampaignPage);
        let colour = record(json!({"label": "Colour", "fieldType": "colour"}));
        let definition = a.map_to_field_definition(&colour, 0);
        assert_eq!(definition.field_type, SystemFieldType::ShortText);
        assert_eq!(definition.source_field_type.as_deref(), Some("colour"));

        // the unrecognized spelling is not echoed back
        let back = a.map_from_field_definition(&definition);
        assert_eq!(back.str_value("fieldType").as_deref(), Some("short_text"));
    }

    #[test]
    fn test_approval_expected_values_keep_falsy_values() {
        let a = adapter(FieldContext::StageApproval);
        let mut definition = FieldDefinition::new("Balance reconciled", SystemFieldType::Boolean);
        definition.expected_value_boolean = Some(false);
        definition.expected_value_number = Some(0.0);
        definition.comparison_type = Some(ComparisonType::EqualTo);

        let out = a.map_from_field_definition(&definition);
        assert_eq!(out.bool_value("expectedValueBoolean"), Some(false));
        assert_eq!(out.f64_value("expectedValueNumber"), Some(0.0));
        assert_eq!(out.str_value("comparisonType").as_deref(), Some("equal_to"));
    }

    #[test]
    fn test_ensure_allowed() {
        let a = adapter(FieldContext::StageApproval);
        assert!(a
            .ensure_allowed(&FieldDefinition::new("Ok?", SystemFieldType::Boolean))
            .is_ok());

        let err = a
            .ensure_allowed(&FieldDefinition::new("Upload", SystemFieldType::FileUpload))
            .unwrap_err();
        assert_eq!(err.code(), "FIELD_TYPE_NOT_ALLOWED");
    }

    #[test]
    fn test_map_all_sorts_by_order_and_defaults_to_index() {
        let a = adapter(FieldContext::ClientTask);
        let records = vec![
            record(json!({"label": "B", "questionType": "text", "order": 10})),
            record(json!({"label": "A", "questionType": "text"})),
            record(json!({"label": "C", "questionType": "text", "order": 0})),
        ];

        let names: Vec<String> = a
            .map_all_to_field_definitions(&records)
            .into_iter()
            .map(|f| f.field_name)
            .collect();

        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_summary_lists_capabilities() {
        let summary = adapter(FieldContext::StageApproval).summary();
        assert!(summary.capabilities.supports_expected_value);
        assert_eq!(summary.name_key, "fieldName");
        assert!(!summary.remaps_types);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["context"], "stage_approval");
        assert_eq!(json["capabilities"]["supportsExpectedValue"], true);
    }
}
