//! Stage transition logic
//!
//! Pure functions deciding where a project may move and building the
//! request body for a single move.

use tracing::debug;

use crate::errors::{OpsboardError, Result};
use crate::fields::FieldAdapter;
use crate::schemas::{ChangeReason, FieldContext, KanbanStage, StatusUpdateRequest};

use super::states::TransitionPolicy;
use super::validation::{build_field_responses, validate_custom_field_responses, FieldAnswers};

/// Stages `role` may move a project to from `current`.
///
/// 1. Privileged roles: every stage except the current one.
/// 2. Terminal current stage: nothing.
/// 3. Otherwise: stages listed for `current` in the fallback table.
///
/// The result keeps the order of `stages`.
pub fn get_available_statuses(
    policy: &TransitionPolicy,
    role: &str,
    current: &str,
    stages: &[KanbanStage],
) -> Vec<KanbanStage> {
    let available: Vec<KanbanStage> = if policy.is_privileged_role(role) {
        stages.iter().filter(|s| s.name != current).cloned().collect()
    } else if policy.is_terminal_stage(current) {
        Vec::new()
    } else {
        let allowed = policy.allowed_targets(current);
        stages
            .iter()
            .filter(|s| s.name != current && allowed.contains(&s.name))
            .cloned()
            .collect()
    };

    debug!(role, current, count = available.len(), "computed available statuses");
    available
}

/// Whether `role` may move a project from `current` to `target`
pub fn can_transition(
    policy: &TransitionPolicy,
    role: &str,
    current: &str,
    target: &str,
    stages: &[KanbanStage],
) -> bool {
    get_available_statuses(policy, role, current, stages)
        .iter()
        .any(|s| s.name == target)
}

/// Everything known about the project and the acting user
#[derive(Debug, Clone, Copy)]
pub struct StatusChangeContext<'a> {
    pub policy: &'a TransitionPolicy,
    pub role: &'a str,
    pub current_status: &'a str,
    /// Stages of the project's type
    pub stages: &'a [KanbanStage],
    /// Change reasons as returned for the target stage
    pub reasons: &'a [ChangeReason],
}

/// What the user picked in the status change dialog
#[derive(Debug, Clone, Default)]
pub struct StatusChangeInput {
    pub target_status: String,
    pub change_reason_id: String,
    pub notes: Option<String>,
    pub answers: FieldAnswers,
}

/// Validate a single-project move and build its PATCH body.
///
/// Fails with `StateTransition` when the target or reason is not available,
/// and with `Validation` listing every unanswered required field or required
/// field with no saved id. Nothing is built unless every check passes.
pub fn plan_status_change(
    ctx: &StatusChangeContext<'_>,
    input: &StatusChangeInput,
) -> Result<StatusUpdateRequest> {
    let target = ctx
        .stages
        .iter()
        .find(|s| s.name == input.target_status)
        .ok_or_else(|| {
            OpsboardError::StateTransition(format!("unknown stage: {}", input.target_status))
        })?;

    if !can_transition(ctx.policy, ctx.role, ctx.current_status, &target.name, ctx.stages) {
        return Err(OpsboardError::StateTransition(format!(
            "cannot transition from {} to {} as {}",
            ctx.current_status, target.name, ctx.role
        )));
    }

    let reason = ctx
        .reasons
        .iter()
        .find(|r| r.id == input.change_reason_id && r.applies_to(&target.id))
        .ok_or_else(|| {
            OpsboardError::StateTransition(format!(
                "change reason {} is not available for {}",
                input.change_reason_id,
                target.display_name()
            ))
        })?;

    let fields = FieldAdapter::for_context(FieldContext::ChangeReason)
        .map_all_to_field_definitions(&reason.custom_fields);

    let validation = validate_custom_field_responses(&fields, &input.answers);
    if !validation.valid {
        return Err(OpsboardError::Validation(validation.errors));
    }

    // Answers are sent by field id, so a required field must be saved first
    let unsaved: Vec<String> = fields
        .iter()
        .filter(|f| f.is_required && f.id.is_none())
        .map(|f| format!("{} has not been saved", f.field_name))
        .collect();
    if !unsaved.is_empty() {
        return Err(OpsboardError::Validation(unsaved));
    }

    let responses = build_field_responses(&fields, &input.answers);
    debug!(
        stage = %target.name,
        reason = %reason.id,
        responses = responses.len(),
        "status change validated"
    );

    Ok(StatusUpdateRequest {
        new_status: target.name.clone(),
        change_reason: reason.id.clone(),
        notes: input
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
        field_responses: (!responses.is_empty()).then_some(responses),
    })
}
