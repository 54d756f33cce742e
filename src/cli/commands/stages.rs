//! Stages commands - available targets, single and bulk status changes

use std::path::Path;

use tracing::info;

use crate::cli::StageArgs;
use crate::domain::{
    check_bulk_eligibility, get_available_statuses, plan_bulk_status_change, plan_status_change,
    BulkMoveInput, FieldAnswers, StatusChangeContext, StatusChangeInput, TransitionPolicy,
};
use crate::errors::{OpsboardError, Result};
use crate::fs::read_json;
use crate::schemas::{ChangeReason, Config, DomainField, KanbanStage};

use super::print_json;

/// Print the stages the user may move to
pub fn available(config: &Config, args: &StageArgs) -> Result<()> {
    let policy = TransitionPolicy::from_config(config);
    let stages: Vec<KanbanStage> = read_json(&args.stages)?;
    print_json(&get_available_statuses(&policy, &args.role, &args.current, &stages))
}

/// Options for a single status change
#[derive(Debug)]
pub struct ChangeOptions<'a> {
    pub target: &'a str,
    pub reasons: &'a Path,
    pub reason: &'a str,
    pub fields: Option<&'a Path>,
    pub responses: Option<&'a Path>,
    pub notes: Option<&'a str>,
}

/// Validate one status change and print its PATCH body
pub fn change(config: &Config, args: &StageArgs, opts: &ChangeOptions<'_>) -> Result<()> {
    let policy = TransitionPolicy::from_config(config);
    let stages: Vec<KanbanStage> = read_json(&args.stages)?;
    let mut reasons: Vec<ChangeReason> = read_json(opts.reasons)?;

    if let Some(path) = opts.fields {
        let fields: Vec<DomainField> = read_json(path)?;
        let reason = reasons
            .iter_mut()
            .find(|r| r.id == opts.reason)
            .ok_or_else(|| {
                OpsboardError::StateTransition(format!("unknown change reason: {}", opts.reason))
            })?;
        reason.custom_fields = fields;
    }

    let answers: FieldAnswers = match opts.responses {
        Some(path) => read_json(path)?,
        None => FieldAnswers::new(),
    };

    let ctx = StatusChangeContext {
        policy: &policy,
        role: &args.role,
        current_status: &args.current,
        stages: &stages,
        reasons: &reasons,
    };
    let input = StatusChangeInput {
        target_status: opts.target.to_string(),
        change_reason_id: opts.reason.to_string(),
        notes: opts.notes.map(str::to_string),
        answers,
    };

    let request = plan_status_change(&ctx, &input)?;
    info!(from = %args.current, to = %request.new_status, "status change is valid");
    print_json(&request)
}

/// Options for a bulk status change
#[derive(Debug)]
pub struct BulkOptions<'a> {
    pub stages: &'a Path,
    pub target: &'a str,
    pub reasons: &'a Path,
    pub reason: Option<&'a str>,
    pub projects: &'a [String],
    pub notes_html: Option<&'a str>,
}

/// Report bulk eligibility, or build the bulk request when a reason is given
pub fn bulk(opts: &BulkOptions<'_>) -> Result<()> {
    let stages: Vec<KanbanStage> = read_json(opts.stages)?;
    let reasons: Vec<ChangeReason> = read_json(opts.reasons)?;

    let Some(reason) = opts.reason else {
        let target = stages
            .iter()
            .find(|s| s.name == opts.target)
            .ok_or_else(|| {
                OpsboardError::StateTransition(format!("unknown stage: {}", opts.target))
            })?;
        let eligibility = check_bulk_eligibility(target, &reasons);
        return print_json(&serde_json::json!({
            "eligible": eligibility.eligible,
            "blockingReason": eligibility.blocking_reason,
            "reasons": eligibility.reasons,
        }));
    };

    let input = BulkMoveInput {
        project_ids: opts.projects.to_vec(),
        target_status: opts.target.to_string(),
        change_reason_id: reason.to_string(),
        notes_html: opts.notes_html.map(str::to_string),
    };
    let request = plan_bulk_status_change(&stages, &reasons, &input)?;
    info!(projects = request.project_ids.len(), to = %request.new_status, "bulk move is valid");
    print_json(&request)
}
