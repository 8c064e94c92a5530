mod anomalies;
mod config_cmd;
mod intent;
mod plan;
mod strength;
mod trends;
mod workout;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use run_coach::CoachError;

use crate::config::Config;
use crate::storage::{DocumentSink, FileSink};

pub use anomalies::DetectAnomaliesCommand;
pub use intent::ParseIntentCommand;
pub use plan::GeneratePlanCommand;
pub use strength::StrengthWorkoutCommand;
pub use trends::AnalyzeTrendsCommand;
pub use workout::ExtractWorkoutCommand;

#[derive(Parser)]
#[command(name = "run-coach")]
#[command(about = "Running coach decision engine: intents, plans, trends and alerts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    /// Hand every output document to the configured sink
    #[arg(long, global = true)]
    publish: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "RUN_COACH_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a coaching message read from stdin
    ParseIntent(ParseIntentCommand),

    /// Summarize pace, distance and heart-rate trends
    AnalyzeTrends(AnalyzeTrendsCommand),

    /// Check recent activities for overtraining and fatigue
    DetectAnomalies(DetectAnomaliesCommand),

    /// Generate a periodized running plan from a profile
    GeneratePlan(GeneratePlanCommand),

    /// Generate a strength workout
    StrengthWorkout(StrengthWorkoutCommand),

    /// Find the workout scheduled on a date in a plan
    ExtractWorkout(ExtractWorkoutCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        let Cli {
            command,
            compact,
            publish,
            config,
            ..
        } = self;
        let config_path = config.as_deref();
        let context = || CommandContext::load(config_path, compact, publish);

        match command {
            Commands::ParseIntent(cmd) => cmd.execute(&context()?),
            Commands::AnalyzeTrends(cmd) => cmd.execute(&context()?),
            Commands::DetectAnomalies(cmd) => cmd.execute(&context()?),
            Commands::GeneratePlan(cmd) => cmd.execute(&context()?),
            Commands::StrengthWorkout(cmd) => cmd.execute(&context()?),
            Commands::ExtractWorkout(cmd) => cmd.execute(&context()?),
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(config_path),
                ConfigSubcommands::Init { force } => config_cmd::init_config(config_path, force),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Output settings and the optional sink shared by every coaching command
pub struct CommandContext {
    pretty: bool,
    sink: Option<Box<dyn DocumentSink>>,
}

impl CommandContext {
    pub fn new(pretty: bool, sink: Option<Box<dyn DocumentSink>>) -> Self {
        Self { pretty, sink }
    }

    fn load(config_path: Option<&Path>, compact: bool, publish: bool) -> Result<Self> {
        let config = Config::load(config_path)?;
        Self::from_config(&config, compact, publish)
    }

    fn from_config(config: &Config, compact: bool, publish: bool) -> Result<Self> {
        let sink: Option<Box<dyn DocumentSink>> = if publish || config.storage.publish {
            let data_dir = config.data_dir()?;
            tracing::debug!("Publishing documents under {}", data_dir.display());
            Some(Box::new(FileSink::new(data_dir, config.storage.sender.clone())))
        } else {
            None
        };

        Ok(Self::new(config.output.pretty && !compact, sink))
    }

    /// Hand a document to the sink when publishing is enabled
    pub fn publish(&self, channel: &str, document: &Value) -> Result<()> {
        if let Some(sink) = &self.sink {
            sink.publish(channel, document)
                .with_context(|| format!("Failed to publish {} document", channel))?;
        }
        Ok(())
    }

    /// Publish, then print the document on stdout
    pub fn emit<T: Serialize>(&self, channel: &str, document: &T) -> Result<Value> {
        let value = serde_json::to_value(document).context("Failed to serialize output")?;
        self.publish(channel, &value)?;
        println!("{}", self.render(&value)?);
        Ok(value)
    }

    fn render(&self, value: &Value) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

/// Print the error document for a failed command on stdout
pub fn report_failure(err: &anyhow::Error) {
    tracing::error!("{:#}", err);
    println!("{}", failure_document(err));
}

fn failure_document(err: &anyhow::Error) -> Value {
    match err.downcast_ref::<CoachError>() {
        Some(coach_error) => coach_error.to_document(),
        None => json!({ "error": format!("{:#}", err) }),
    }
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}

/// Read a JSON document from stdin
fn read_stdin_json() -> Result<Value> {
    let input = read_stdin()?;
    let value = serde_json::from_str(&input).map_err(CoachError::from)?;
    Ok(value)
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_failure_document_for_coach_errors() {
        let err = anyhow::Error::from(CoachError::InvalidPlanFormat);
        let doc = failure_document(&err);
        assert_eq!(doc["error"], "Invalid training plan format");
        assert_eq!(doc["found"], false);
    }

    #[test]
    fn test_failure_document_keeps_context_chain() {
        let err = anyhow::anyhow!("disk full").context("Failed to publish plans document");
        let doc = failure_document(&err);
        assert_eq!(doc["error"], "Failed to publish plans document: disk full");
    }

    #[test]
    fn test_compact_flag_overrides_pretty_config() {
        let config = Config::default();
        let ctx = CommandContext::from_config(&config, true, false).unwrap();
        assert!(!ctx.pretty);
        assert!(ctx.sink.is_none());
    }
}
