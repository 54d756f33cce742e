//! opsboard CLI - custom field normalization, stage transition checks and calendar grouping

use clap::Parser;
use opsboard::cli::commands::{self, stages::BulkOptions, stages::ChangeOptions};
use opsboard::cli::{
    CalendarCommand, Cli, Commands, ConfigCommand, FieldTypeCommand, FieldsCommand, StagesCommand,
};
use opsboard::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> opsboard::Result<()> {
    let cwd = cli.cwd.as_deref();
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::FieldType { action }) => match action {
            FieldTypeCommand::Normalize { field_type } => {
                commands::field_type::normalize(&field_type)
            }
            FieldTypeCommand::Denormalize { system_type, alias } => {
                commands::field_type::denormalize(&system_type, alias.as_deref())
            }
        },
        Some(Commands::Fields { action }) => match action {
            FieldsCommand::Contexts => commands::fields::contexts(),
            FieldsCommand::ToDefinitions { context, file } => {
                commands::fields::to_definitions(&context, &file)
            }
            FieldsCommand::ToPayload { context, file, strict } => {
                commands::fields::to_payload(&context, &file, strict)
            }
        },
        Some(Commands::Stages { action }) => match action {
            StagesCommand::Available { stage } => {
                let config = commands::resolve_config(cwd, config_path)?;
                commands::stages::available(&config, &stage)
            }
            StagesCommand::Change {
                stage,
                target,
                reasons,
                reason,
                fields,
                responses,
                notes,
            } => {
                let config = commands::resolve_config(cwd, config_path)?;
                let opts = ChangeOptions {
                    target: &target,
                    reasons: &reasons,
                    reason: &reason,
                    fields: fields.as_deref(),
                    responses: responses.as_deref(),
                    notes: notes.as_deref(),
                };
                commands::stages::change(&config, &stage, &opts)
            }
            StagesCommand::Bulk {
                stages,
                target,
                reasons,
                reason,
                projects,
                notes_html,
            } => commands::stages::bulk(&BulkOptions {
                stages: &stages,
                target: &target,
                reasons: &reasons,
                reason: reason.as_deref(),
                projects: &projects,
                notes_html: notes_html.as_deref(),
            }),
        },
        Some(Commands::Calendar { action }) => match action {
            CalendarCommand::Group { file, from, to } => {
                let config = commands::resolve_config(cwd, config_path)?;
                commands::calendar::group(&config, &file, from, to)
            }
        },
        Some(Commands::Config { action }) => match action {
            ConfigCommand::Show => {
                let config = commands::resolve_config(cwd, config_path)?;
                commands::config::show(&config)
            }
            ConfigCommand::Init { force } => commands::config::init(cwd, force),
        },
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
