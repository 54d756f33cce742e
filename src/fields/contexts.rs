//! The seven field-builder contexts
//!
//! Adding a context means adding one static here and one `FieldContext`
//! variant; the mapping code in `adapter` stays untouched.

use crate::schemas::{FieldCapabilities, FieldContext, SystemFieldType};

use super::adapter::{FieldAdapter, FieldKeys, WireTypes};
use super::types::normalize_field_type;

use SystemFieldType::*;

static CHANGE_REASON: FieldAdapter = FieldAdapter {
    context: FieldContext::ChangeReason,
    keys: FieldKeys {
        name: "fieldName",
        field_type: "fieldType",
        description: "description",
        section: None,
    },
    capabilities: FieldCapabilities {
        supports_options: true,
        supports_placeholder: true,
        supports_help_text: true,
        ..FieldCapabilities::NONE
    },
    allowed_field_types: &[ShortText, LongText, Number, Boolean, Date, SingleSelect, MultiSelect],
    wire_types: None,
};

static REQUEST_TEMPLATE: FieldAdapter = FieldAdapter {
    context: FieldContext::RequestTemplate,
    keys: FieldKeys {
        name: "label",
        field_type: "questionType",
        description: "helpText",
        section: Some("sectionId"),
    },
    capabilities: FieldCapabilities {
        supports_validation_rules: true,
        supports_conditional_logic: true,
        supports_options: true,
        supports_placeholder: true,
        supports_help_text: true,
        supports_library_picker: true,
        ..FieldCapabilities::NONE
    },
    allowed_field_types: SystemFieldType::ALL,
    wire_types: Some(WireTypes {
        to_wire: request_question_type,
        from_wire: normalize_field_type,
    }),
};

static CLIENT_TASK: FieldAdapter = FieldAdapter {
    context: FieldContext::ClientTask,
    keys: FieldKeys {
        name: "label",
        field_type: "questionType",
        description: "helpText",
        section: None,
    },
    capabilities: FieldCapabilities {
        supports_validation_rules: true,
        supports_conditional_logic: true,
        supports_options: true,
        supports_placeholder: true,
        supports_help_text: true,
        ..FieldCapabilities::NONE
    },
    allowed_field_types: &[
        ShortText,
        LongText,
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
    ],
    wire_types: Some(WireTypes {
        to_wire: client_task_question_type,
        from_wire: normalize_field_type,
    }),
};

static STAGE_APPROVAL: FieldAdapter = FieldAdapter {
    context: FieldContext::StageApproval,
    keys: FieldKeys {
        name: "fieldName",
        field_type: "fieldType",
        description: "description",
        section: None,
    },
    capabilities: FieldCapabilities {
        supports_expected_value: true,
        supports_options: true,
        supports_help_text: true,
        ..FieldCapabilities::NONE
    },
    allowed_field_types: &[Boolean, Number, LongText, MultiSelect],
    wire_types: None,
};

static SIGNATURE: FieldAdapter = FieldAdapter {
    context: FieldContext::Signature,
    keys: FieldKeys {
        name: "label",
        field_type: "fieldType",
        description: "description",
        section: None,
    },
    capabilities: FieldCapabilities {
        supports_placeholder: true,
        supports_help_text: true,
        ..FieldCapabilities::NONE
    },
    allowed_field_types: &[ShortText, LongText, Email, Date, Boolean],
    wire_types: None,
};

static SERVICE_UDF: FieldAdapter = FieldAdapter {
    context: FieldContext::ServiceUdf,
    keys: FieldKeys {
        name: "fieldName",
        field_type: "fieldType",
        description: "description",
        section: None,
    },
    capabilities: FieldCapabilities {
        supports_validation_rules: true,
        supports_options: true,
        supports_placeholder: true,
        supports_help_text: true,
        supports_library_picker: true,
        ..FieldCapabilities::NONE
    },
    allowed_field_types: &[
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
    ],
    wire_types: None,
};

static CAMPAIGN_PAGE: FieldAdapter = FieldAdapter {
    context: FieldContext::CampaignPage,
    keys: FieldKeys {
        name: "label",
        field_type: "fieldType",
        description: "helpText",
        section: Some("sectionId"),
    },
    capabilities: FieldCapabilities {
        supports_conditional_logic: true,
        supports_options: true,
        supports_placeholder: true,
        supports_help_text: true,
        supports_library_picker: true,
        ..FieldCapabilities::NONE
    },
    allowed_field_types: &[
        ShortText,
        LongText,
        Email,
        Phone,
        Number,
        Date,
        Boolean,
        SingleSelect,
        MultiSelect,
    ],
    wire_types: None,
};

pub(crate) fn adapter(context: FieldContext) -> &'static FieldAdapter {
    match context {
        FieldContext::ChangeReason => &CHANGE_REASON,
        FieldContext::RequestTemplate => &REQUEST_TEMPLATE,
        FieldContext::ClientTask => &CLIENT_TASK,
        FieldContext::StageApproval => &STAGE_APPROVAL,
        FieldContext::Signature => &SIGNATURE,
        FieldContext::ServiceUdf => &SERVICE_UDF,
        FieldContext::CampaignPage => &CAMPAIGN_PAGE,
    }
}

/// Request-template questions use the legacy alias vocabulary and have no
/// phone, url, currency or percentage renderer.
fn request_question_type(system_type: SystemFieldType) -> &'static str {
    match system_type {
        ShortText | Phone | Url => "text",
        LongText => "textarea",
        Email => "email",
        Number | Currency | Percentage => "number",
        Date => "date",
        Boolean => "yes_no",
        SingleSelect => "single_choice",
        MultiSelect => "multi_choice",
        FileUpload => "file_upload",
    }
}

/// Client-task questions use canonical names minus the types the client
/// portal cannot render.
fn client_task_question_type(system_type: SystemFieldType) -> &'static str {
    match system_type {
        ShortText | Email | Phone | Url => "short_text",
        Number | Currency | Percentage => "number",
        other => other.as_str(),
    }
}
