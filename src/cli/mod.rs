//! CLI module for opsboard
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// opsboard - custom field normalization, stage transition checks and calendar grouping
#[derive(Parser, Debug)]
#[command(name = "opsboard")]
#[command(version)]
#[command(about = "Custom field normalization, stage transition checks and calendar grouping")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Use this config file instead of .opsboard/config.json
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert between context type names and system field types
    FieldType {
        #[command(subcommand)]
        action: FieldTypeCommand,
    },

    /// Map custom field records through a context adapter
    Fields {
        #[command(subcommand)]
        action: FieldsCommand,
    },

    /// Check stage transitions and build status update requests
    Stages {
        #[command(subcommand)]
        action: StagesCommand,
    },

    /// Group calendar events for display
    Calendar {
        #[command(subcommand)]
        action: CalendarCommand,
    },

    /// Inspect the resolved configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum FieldTypeCommand {
    /// Map a context type name to its system field type
    Normalize {
        /// Type name as used by a context (e.g. yes_no)
        field_type: String,
    },

    /// Map a system field type back to a context spelling
    Denormalize {
        /// System field type (e.g. boolean)
        system_type: String,

        /// Spelling to keep if it denotes the same type
        #[arg(long)]
        alias: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FieldsCommand {
    /// List every context with its capabilities and allowed types
    Contexts,

    /// Convert a JSON array of domain records into field definitions
    ToDefinitions {
        /// Context tag (change_reason, request_template, client_task, ...)
        #[arg(long)]
        context: String,

        /// JSON file holding the records
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Convert a JSON array of field definitions into request payloads
    ToPayload {
        /// Context tag (change_reason, request_template, client_task, ...)
        #[arg(long)]
        context: String,

        /// JSON file holding the definitions
        #[arg(short, long)]
        file: PathBuf,

        /// Fail on types the context does not offer
        #[arg(long)]
        strict: bool,
    },
}

/// Stage list and acting user shared by the stage commands
#[derive(Args, Debug)]
pub struct StageArgs {
    /// JSON file with the project type's stages
    #[arg(long)]
    pub stages: PathBuf,

    /// Role of the acting user
    #[arg(long)]
    pub role: String,

    /// Current status of the project
    #[arg(long)]
    pub current: String,
}

#[derive(Subcommand, Debug)]
pub enum StagesCommand {
    /// List the stages the user may move the project to
    Available {
        #[command(flatten)]
        stage: StageArgs,
    },

    /// Validate a single status change and print the request body
    Change {
        #[command(flatten)]
        stage: StageArgs,

        /// Target status
        #[arg(long)]
        target: String,

        /// JSON file with the change reasons for the target stage
        #[arg(long)]
        reasons: PathBuf,

        /// Selected change reason id
        #[arg(long)]
        reason: String,

        /// JSON file with the reason's custom fields, if fetched separately
        #[arg(long)]
        fields: Option<PathBuf>,

        /// JSON object of answers keyed by custom field id
        #[arg(long)]
        responses: Option<PathBuf>,

        /// Notes to attach
        #[arg(long)]
        notes: Option<String>,
    },

    /// Check bulk eligibility and print the bulk request body
    Bulk {
        /// JSON file with the project type's stages
        #[arg(long)]
        stages: PathBuf,

        /// Target status
        #[arg(long)]
        target: String,

        /// JSON file with the change reasons for the target stage
        #[arg(long)]
        reasons: PathBuf,

        /// Selected change reason id; omit to only report eligibility
        #[arg(long)]
        reason: Option<String>,

        /// Project ids to move
        #[arg(long = "project")]
        projects: Vec<String>,

        /// HTML notes to attach
        #[arg(long)]
        notes_html: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CalendarCommand {
    /// Group events by day and category
    Group {
        /// JSON file with calendar events
        #[arg(short, long)]
        file: PathBuf,

        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<chrono::NaiveDate>,

        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        to: Option<chrono::NaiveDate>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the configuration after defaults are applied
    Show,

    /// Write the default configuration to .opsboard/config.json
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
