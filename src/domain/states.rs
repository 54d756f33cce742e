//! Stage transition policy
//!
//! Stage names come from per-project-type configuration fetched at runtime;
//! the only fixed knowledge is which roles are unrestricted, which stages
//! are terminal, and the fallback table for everyone else.

use std::collections::BTreeMap;

use crate::schemas::Config;

/// Who may move a project from which stage to which
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPolicy {
    privileged_roles: Vec<String>,
    terminal_stages: Vec<String>,
    allowed_transitions: BTreeMap<String, Vec<String>>,
}

impl TransitionPolicy {
    pub fn from_config(config: &Config) -> Self {
        TransitionPolicy {
            privileged_roles: config.privileged_roles.clone(),
            terminal_stages: config.terminal_stages.clone(),
            allowed_transitions: config.allowed_transitions.clone(),
        }
    }

    /// Privileged roles may move a project to any other stage.
    /// Role names compare case-insensitively.
    pub fn is_privileged_role(&self, role: &str) -> bool {
        self.privileged_roles
            .iter()
            .any(|r| r.eq_ignore_ascii_case(role))
    }

    /// Terminal stages are absorbing for non-privileged roles
    pub fn is_terminal_stage(&self, stage: &str) -> bool {
        self.terminal_stages.iter().any(|s| s == stage)
    }

    /// Fallback targets for `current`; empty when the stage has no entry
    pub fn allowed_targets(&self, current: &str) -> &[String] {
        self.allowed_transitions
            .get(current)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        TransitionPolicy::from_config(&Config::default())
    }
}
