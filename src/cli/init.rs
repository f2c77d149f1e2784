//! Init command implementation
//!
//! Scaffolds a `playground.toml` and a `.env.example` for the agent playground.

use super::output::Output;
use crate::types::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of the init operation
#[derive(Debug, PartialEq, Eq)]
pub enum InitResult {
    /// Initialization completed successfully
    Success,
    /// Project already exists (playground.toml found)
    AlreadyExists,
}

/// Configuration for the init command
pub struct InitConfig {
    /// Directory to initialize
    pub path: PathBuf,
    /// Overwrite existing files
    pub force: bool,
    /// AWS region written to the sample files
    pub region: String,
}

/// Run the init command
///
/// Filesystem failures are returned to the caller, which reports them.
pub fn run(config: InitConfig, output: &Output) -> Result<InitResult> {
    output.banner();
    output.header("Initializing Playground");

    let base_path = &config.path;
    fs::create_dir_all(base_path).map_err(|e| with_path(e, base_path))?;

    let config_path = base_path.join("playground.toml");
    if config_path.exists() && !config.force {
        output.warning("playground.toml already exists!");
        output.hint("Use --force to overwrite existing files");
        return Ok(InitResult::AlreadyExists);
    }

    write_file(&config_path, &generate_playground_toml(&config))?;
    output.created("config", "playground.toml");

    let env_example_path = base_path.join(".env.example");
    if env_example_path.exists() && !config.force {
        output.skipped(".env.example", "already exists");
    } else {
        write_file(&env_example_path, &generate_env_example(&config))?;
        output.created("env", ".env.example");
    }

    output.success("Playground initialized");

    output.header("Next Steps");
    output.info("1. Set up AWS credentials:");
    output.command("cp .env.example .env");
    output.info("2. List and query agents:");
    output.command("bedrock-playground agent list");
    output.command("bedrock-playground ask --agent claude \"Hello!\"");

    Ok(InitResult::Success)
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content).map_err(|e| with_path(e, path))
}

fn with_path(err: io::Error, path: &Path) -> io::Error {
    io::Error::new(err.kind(), format!("{}: {}", path.display(), err))
}

fn generate_playground_toml(config: &InitConfig) -> String {
    format!(
        r#"# Bedrock agent playground configuration
#
# Each [agents.<name>] table becomes one agent. The model_id decides the request
# schema: ids containing "claude-3" use the messages API, other "anthropic" ids
# use the legacy prompt API, "amazon" ids use the Titan text API, and anything
# else is sent as a raw {{"prompt": ...}} body.

[aws]
# Used when AWS_REGION is not set
region = "{region}"

[agents.claude]
model_id = "anthropic.claude-3-7-sonnet-20250219-v1:0"
# Chat-style requests go to the inference profile when one is set
# inference_profile_arn = "arn:aws:bedrock:{region}:123456789012:inference-profile/us.anthropic.claude-3-7-sonnet-20250219-v1:0"

[agents.github]
model_id = "anthropic.claude-3-5-sonnet-20240620-v1:0"
display_name = "GitHub Code Agent"
role = "Find code examples on GitHub"
instructions = "Review the repository and answer questions about it."

[agents.titan]
model_id = "amazon.titan-text-express-v1"
"#,
        region = config.region
    )
}

fn generate_env_example(config: &InitConfig) -> String {
    format!(
        r#"# AWS credentials for Bedrock Runtime
AWS_REGION={}
AWS_ACCESS_KEY_ID=
AWS_SECRET_ACCESS_KEY=
# AWS_SESSION_TOKEN=

# Logging (trace, debug, info, warn, error)
RUST_LOG=info
"#,
        config.region
    )
}
