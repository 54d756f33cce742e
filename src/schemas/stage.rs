//! Stage schema - kanban stages and the change reasons scoped to them

use serde::{Deserialize, Serialize};

use super::DomainField;

/// One column of a project type's kanban board, as fetched from the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KanbanStage {
    pub id: String,

    /// Status identifier stored on the project (e.g. `in_review`)
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Role expected to act while a project sits in this stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_role: Option<String>,

    #[serde(default)]
    pub order: i64,

    /// Approval gate that must be passed to enter this stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_approval_id: Option<String>,
}

impl KanbanStage {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        KanbanStage {
            id: id.into(),
            name: name.into(),
            title: None,
            assigned_role: None,
            order: 0,
            stage_approval_id: None,
        }
    }

    pub fn with_approval(mut self, stage_approval_id: impl Into<String>) -> Self {
        self.stage_approval_id = Some(stage_approval_id.into());
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn requires_approval(&self) -> bool {
        self.stage_approval_id.is_some()
    }

    /// Title if set, otherwise the status name
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

/// A reason a user may pick when moving a project into a stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeReason {
    pub id: String,

    /// Short label shown in the reason picker
    pub reason: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_approval_id: Option<String>,

    /// Custom fields in the change-reason context's record shape
    #[serde(default)]
    pub custom_fields: Vec<DomainField>,
}

impl ChangeReason {
    pub fn new(id: impl Into<String>, reason: impl Into<String>) -> Self {
        ChangeReason {
            id: id.into(),
            reason: reason.into(),
            description: None,
            stage_id: None,
            stage_approval_id: None,
            custom_fields: Vec::new(),
        }
    }

    pub fn with_stage(mut self, stage_id: impl Into<String>) -> Self {
        self.stage_id = Some(stage_id.into());
        self
    }

    pub fn with_approval(mut self, stage_approval_id: impl Into<String>) -> Self {
        self.stage_approval_id = Some(stage_approval_id.into());
        self
    }

    pub fn with_custom_field(mut self, field: DomainField) -> Self {
        self.custom_fields.push(field);
        self
    }

    pub fn has_custom_fields(&self) -> bool {
        !self.custom_fields.is_empty()
    }

    pub fn requires_approval(&self) -> bool {
        self.stage_approval_id.is_some()
    }

    /// Whether the reason is scoped to `stage_id`; unscoped reasons apply anywhere
    pub fn applies_to(&self, stage_id: &str) -> bool {
        self.stage_id.as_deref().map_or(true, |s| s == stage_id)
    }
}
