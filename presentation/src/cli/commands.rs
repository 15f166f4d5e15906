//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for a finished report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored sections in display order
    Full,
    /// The report as JSON
    Json,
}

impl From<OutputFormat> for jobshift_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => jobshift_domain::OutputFormat::Full,
            OutputFormat::Json => jobshift_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for jobshift
#[derive(Parser, Debug)]
#[command(name = "jobshift")]
#[command(author, version, about = "AI transformation reports for job roles")]
#[command(long_about = r#"
jobshift asks a language model, through five specialised agents, how a job
role can be augmented by AI:

1. Job description
2. Missions, deliverables and tasks
3. Technology recommendations
4. AI augmentation opportunities
5. Transition plan to an AI-augmented role

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./jobshift.toml     Project-level config
3. ~/.config/jobshift/config.toml   Global config

Environment variables override files: JOBSHIFT_* (use __ between sections)
and OLLAMA_URL, OLLAMA_MODEL, TEMPERATURE, MAX_TOKENS, AWS_REGION,
AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, CLAUDE_MODEL_ID.

Examples:
  jobshift "Accountant"
  jobshift --provider bedrock --concurrent "Data Analyst"
  jobshift -o json "Nurse" > nurse.json
  jobshift                      # interactive mode
"#)]
pub struct Cli {
    /// Job title to analyse (starts interactive mode when omitted)
    pub job_title: Option<String>,

    /// Inference provider: ollama or bedrock
    #[arg(short, long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Model for the selected provider
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature (0.0 to 1.0)
    #[arg(short, long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Maximum tokens generated per call
    #[arg(long, value_name = "N")]
    pub max_tokens: Option<u32>,

    /// Attempts per call, including the first
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Run the missions, technology and AI stages concurrently
    #[arg(long)]
    pub concurrent: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
