//! Bulk status changes
//!
//! Moving many projects at once skips the per-project dialog, so it is only
//! offered when no approval and no custom field answers could be required.

use tracing::debug;

use crate::errors::{OpsboardError, Result};
use crate::schemas::{BulkStatusUpdateRequest, ChangeReason, KanbanStage};

/// Whether a stage can be the target of a bulk move, and with which reasons
#[derive(Debug, Clone, PartialEq)]
pub struct BulkEligibility {
    pub eligible: bool,

    /// Explanation shown instead of the reason picker when not eligible
    pub blocking_reason: Option<String>,

    /// Reasons usable for a bulk move to this stage
    pub reasons: Vec<ChangeReason>,
}

impl BulkEligibility {
    fn blocked(message: String) -> Self {
        BulkEligibility {
            eligible: false,
            blocking_reason: Some(message),
            reasons: Vec::new(),
        }
    }
}

/// Decide whether `target` accepts a bulk move.
///
/// An approval gate on the stage rules it out. Otherwise a reason qualifies
/// when it has neither custom fields nor an approval gate of its own; with
/// no qualifying reason the move must be done project by project.
pub fn check_bulk_eligibility(target: &KanbanStage, reasons: &[ChangeReason]) -> BulkEligibility {
    if target.requires_approval() {
        return BulkEligibility::blocked(format!(
            "{} requires an approval, so projects must be moved one at a time",
            target.display_name()
        ));
    }

    let scoped: Vec<&ChangeReason> = reasons.iter().filter(|r| r.applies_to(&target.id)).collect();
    if scoped.is_empty() {
        return BulkEligibility::blocked(format!(
            "No change reasons are configured for {}",
            target.display_name()
        ));
    }

    let qualifying: Vec<ChangeReason> = scoped
        .into_iter()
        .filter(|r| !r.has_custom_fields() && !r.requires_approval())
        .cloned()
        .collect();

    if qualifying.is_empty() {
        return BulkEligibility::blocked(format!(
            "Every change reason for {} needs extra fields or an approval, so projects must be moved one at a time",
            target.display_name()
        ));
    }

    debug!(stage = %target.name, reasons = qualifying.len(), "bulk move allowed");
    BulkEligibility {
        eligible: true,
        blocking_reason: None,
        reasons: qualifying,
    }
}

/// What the user picked in the bulk move dialog
#[derive(Debug, Clone, Default)]
pub struct BulkMoveInput {
    pub project_ids: Vec<String>,
    pub target_status: String,
    pub change_reason_id: String,
    pub notes_html: Option<String>,
}

/// Validate a bulk move and build its POST body.
///
/// All or nothing: any failing check rejects the whole batch.
pub fn plan_bulk_status_change(
    stages: &[KanbanStage],
    reasons: &[ChangeReason],
    input: &BulkMoveInput,
) -> Result<BulkStatusUpdateRequest> {
    let mut project_ids: Vec<String> = Vec::with_capacity(input.project_ids.len());
    for id in &input.project_ids {
        if !id.is_empty() && !project_ids.contains(id) {
            project_ids.push(id.clone());
        }
    }
    if project_ids.is_empty() {
        return Err(OpsboardError::Validation(vec![
            "Select at least one project".to_string()
        ]));
    }

    let target = stages
        .iter()
        .find(|s| s.name == input.target_status)
        .ok_or_else(|| {
            OpsboardError::StateTransition(format!("unknown stage: {}", input.target_status))
        })?;

    let eligibility = check_bulk_eligibility(target, reasons);
    if !eligibility.eligible {
        return Err(OpsboardError::BulkIneligible(
            eligibility.blocking_reason.unwrap_or_default(),
        ));
    }

    if !eligibility
        .reasons
        .iter()
        .any(|r| r.id == input.change_reason_id)
    {
        return Err(OpsboardError::BulkIneligible(format!(
            "change reason {} cannot be used for a bulk move to {}",
            input.change_reason_id,
            target.display_name()
        )));
    }

    debug!(stage = %target.name, projects = project_ids.len(), "bulk move validated");
    Ok(BulkStatusUpdateRequest {
        project_ids,
        new_status: target.name.clone(),
        change_reason: input.change_reason_id.clone(),
        notes_html: input
            .notes_html
            .as_ref()
            .filter(|n| !n.trim().is_empty())
            .cloned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::DomainField;

    fn field() -> DomainField {
        DomainField::new()
            .with("fieldName", "Hours")
            .with("fieldType", "number")
    }

    fn completed() -> KanbanStage {
        KanbanStage::new("st-9", "completed")
    }

    #[test]
    fn test_eligible_with_plain_reason() {
        let reasons = vec![
            ChangeReason::new("r-1", "Filed").with_custom_field(field()),
            ChangeReason::new("r-2", "Filed late"),
        ];
        let result = check_bulk_eligibility(&completed(), &reasons);

        assert!(result.eligible);
        assert!(result.blocking_reason.is_none());
        assert_eq!(result.reasons.len(), 1);
        assert_eq!(result.reasons[0].id, "r-2");
    }

    #[test]
    fn test_ineligible_when_every_reason_has_fields() {
        let reasons = vec![
            ChangeReason::new("r-1", "Filed").with_custom_field(field()),
            ChangeReason::new("r-2", "Filed late").with_custom_field(field()),
        ];
        let result = check_bulk_eligibility(&completed(), &reasons);

        assert!(!result.eligible);
        assert!(!result.blocking_reason.unwrap().is_empty());
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_ineligible_when_stage_needs_approval() {
        let stage = completed().with_approval("ap-1");
        let reasons = vec![ChangeReason::new("r-1", "Filed")];
        let result = check_bulk_eligibility(&stage, &reasons);

        assert!(!result.eligible);
        assert!(result.blocking_reason.unwrap().contains("approval"));
    }

    #[test]
    fn test_reasons_with_approval_do_not_qualify() {
        let reasons = vec![ChangeReason::new("r-1", "Filed").with_approval("ap-2")];
        assert!(!check_bulk_eligibility(&completed(), &reasons).eligible);
    }

    #[test]
    fn test_ineligible_without_reasons() {
        let result = check_bulk_eligibility(&completed(), &[]);
        assert!(!result.eligible);
        assert!(result.blocking_reason.unwrap().contains("No change reasons"));
    }

    #[test]
    fn test_reasons_for_other_stages_are_ignored() {
        let reasons = vec![ChangeReason::new("r-1", "Chased").with_stage("st-1")];
        assert!(!check_bulk_eligibility(&completed(), &reasons).eligible);
    }

    #[test]
    fn test_plan_bulk_builds_request() {
        let stages = vec![completed()];
        let reasons = vec![ChangeReason::new("r-2", "Filed")];
        let input = BulkMoveInput {
            project_ids: vec!["p-1".into(), "p-2".into(), "p-1".into()],
            target_status: "completed".into(),
            change_reason_id: "r-2".into(),
            notes_html: Some("<p>Batch</p>".into()),
        };

        let request = plan_bulk_status_change(&stages, &reasons, &input).unwrap();
        assert_eq!(request.project_ids, vec!["p-1", "p-2"]);
        assert_eq!(request.new_status, "completed");
        assert_eq!(request.notes_html.as_deref(), Some("<p>Batch</p>"));
    }

    #[test]
    fn test_plan_bulk_requires_projects() {
        let input = BulkMoveInput {
            target_status: "completed".into(),
            change_reason_id: "r-2".into(),
            ..Default::default()
        };
        let err = plan_bulk_status_change(&[completed()], &[], &input).unwrap_err();
        assert_eq!(err.code(), "VALIDATION");
    }

    #[test]
    fn test_plan_bulk_rejects_ineligible_stage() {
        let reasons = vec![ChangeReason::new("r-1", "Filed").with_custom_field(field())];
        let input = BulkMoveInput {
            project_ids: vec!["p-1".into()],
            target_status: "completed".into(),
            change_reason_id: "r-1".into(),
            notes_html: None,
        };
        let err = plan_bulk_status_change(&[completed()], &reasons, &input).unwrap_err();
        assert_eq!(err.code(), "BULK_INELIGIBLE");
    }

    #[test]
    fn test_plan_bulk_rejects_non_qualifying_reason() {
        let reasons = vec![
            ChangeReason::new("r-1", "Filed").with_custom_field(field()),
            ChangeReason::new("r-2", "Filed late"),
        ];
        let input = BulkMoveInput {
            project_ids: vec!["p-1".into()],
            target_status: "completed".into(),
            change_reason_id: "r-1".into(),
            notes_html: None,
        };
        let err = plan_bulk_status_change(&[completed()], &reasons, &input).unwrap_err();
        assert!(err.to_string().contains("r-1"));
    }
}
