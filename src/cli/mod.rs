//! CLI module for the Bedrock agent playground
//!
//! Provides command-line interface parsing for the bedrock-playground binary.
//! Uses clap for argument parsing and owo-colors for colored terminal output.

/// `init` command.
pub mod init;
/// Terminal output helpers.
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bedrock Agent Playground
///
/// Query Bedrock-hosted models through named agents declared in playground.toml.
#[derive(Parser, Debug)]
#[command(
    name = "bedrock-playground",
    version,
    about = "Bedrock Agent Playground - query Bedrock-hosted models through named agents",
    after_help = "EXAMPLES:\n    \
                  bedrock-playground init                          # Write playground.toml and .env.example\n    \
                  bedrock-playground agent list                    # List configured agents\n    \
                  bedrock-playground ask --agent claude \"Hello\"    # Send a message\n    \
                  bedrock-playground classify amazon.titan-text-express-v1"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "playground.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a sample playground.toml and .env.example
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,

        /// AWS region written to the sample files
        #[arg(long, default_value = crate::utils::config::DEFAULT_REGION)]
        region: String,
    },

    /// Send a message to an agent and print the reply
    Ask {
        /// Message to send
        message: String,

        /// Agent name (defaults to the first configured agent)
        #[arg(short, long)]
        agent: Option<String>,

        /// System context sent along with the message
        #[arg(short, long)]
        system: Option<String>,
    },

    /// Show which request schema a model id maps to
    Classify {
        /// Bedrock model identifier
        model_id: String,
    },

    /// Manage agents
    #[command(subcommand)]
    Agent(AgentCommands),
}

/// Agent management subcommands
#[derive(Subcommand, Debug)]
pub enum AgentCommands {
    /// List all configured agents
    List,

    /// Show details for a specific agent
    Show {
        /// Name of the agent
        name: String,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
