use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::services::simulation::DEFAULT_TRIAL_COUNT;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Log debug output to stderr (overridden by COSTSIM_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate cost savings for a business profile
    Simulate {
        /// Business profile YAML file
        #[arg(short, long)]
        input: String,
        /// Output file for the simulation result
        #[arg(short, long)]
        output: String,
        /// Number of Monte Carlo trials
        #[arg(short = 'n', long, default_value_t = DEFAULT_TRIAL_COUNT)]
        trials: usize,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Format of the output file
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Write a plain-text cost-saving analysis report
    Report {
        /// Business profile YAML file (must include a contact)
        #[arg(short, long)]
        input: String,
        /// Report file, defaults to <company>_cost_savings_analysis.txt
        #[arg(short, long)]
        output: Option<String>,
        /// Number of Monte Carlo trials
        #[arg(short = 'n', long, default_value_t = DEFAULT_TRIAL_COUNT)]
        trials: usize,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print how current operating expense splits into cost categories
    Breakdown {
        /// Business profile YAML file
        #[arg(short, long)]
        input: String,
    },
    /// Write a profile with the small-business defaults
    InitProfile {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
