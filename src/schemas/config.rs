//! Config schema - Configuration for opsboard

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Main configuration for opsboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Roles allowed to move a project to any other stage
    #[serde(default = "default_privileged_roles")]
    pub privileged_roles: Vec<String>,

    /// Stages that non-privileged roles cannot leave
    #[serde(default = "default_terminal_stages")]
    pub terminal_stages: Vec<String>,

    /// Fallback transition table for non-privileged roles, keyed by current stage
    #[serde(default = "default_allowed_transitions")]
    pub allowed_transitions: BTreeMap<String, Vec<String>>,

    /// Calendar category for project-due events with no service
    #[serde(default = "default_other_projects_label")]
    pub other_projects_label: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_privileged_roles() -> Vec<String> {
    vec!["admin".to_string(), "manager".to_string()]
}

fn default_terminal_stages() -> Vec<String> {
    vec!["completed".to_string(), "not_completed_in_time".to_string()]
}

fn default_allowed_transitions() -> BTreeMap<String, Vec<String>> {
    let table: &[(&str, &[&str])] = &[
        (
            "no_latest_action",
            &["bookkeeping_work_required", "in_review", "needs_client_input"],
        ),
        ("bookkeeping_work_required", &["in_review", "needs_client_input"]),
        ("needs_client_input", &["bookkeeping_work_required", "in_review"]),
        (
            "in_review",
            &[
                "bookkeeping_work_required",
                "needs_client_input",
                "completed",
                "not_completed_in_time",
            ],
        ),
    ];

    table
        .iter()
        .map(|(from, to)| {
            (
                from.to_string(),
                to.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}

fn default_other_projects_label() -> String {
    "Other Projects".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            privileged_roles: default_privileged_roles(),
            terminal_stages: default_terminal_stages(),
            allowed_transitions: default_allowed_transitions(),
            other_projects_label: default_other_projects_label(),
        }
    }
}
