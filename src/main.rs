//! Bedrock Agent Playground CLI Entry Point
//!
//! Subcommands:
//! - `init` - Scaffold playground.toml and .env.example
//! - `ask <message>` - Send a message to a configured agent
//! - `classify <model_id>` - Show the request schema for a model id
//! - `agent list` / `agent show <name>` - Inspect configured agents

use bedrock_playground::cli::init::{self, InitConfig};
use bedrock_playground::cli::output::Output;
use bedrock_playground::cli::{AgentCommands, Cli, Commands};
use bedrock_playground::{AgentRegistry, AppError, ModelSchema, PlaygroundConfig, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    if let Err(e) = run(cli, &output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli, output: &Output) -> Result<()> {
    match cli.command {
        Commands::Init {
            path,
            force,
            region,
        } => {
            init::run(
                InitConfig {
                    path,
                    force,
                    region,
                },
                output,
            )?;
            Ok(())
        }
        Commands::Classify { model_id } => {
            let schema = ModelSchema::classify(&model_id);
            output.kv("model_id", &model_id);
            output.kv("schema", schema.name());
            Ok(())
        }
        Commands::Agent(AgentCommands::List) => {
            let config = PlaygroundConfig::load(&cli.config)?;
            list_agents(&config, output);
            Ok(())
        }
        Commands::Agent(AgentCommands::Show { name }) => {
            let config = PlaygroundConfig::load(&cli.config)?;
            show_agent(&config, &name, output)
        }
        Commands::Ask {
            message,
            agent,
            system,
        } => {
            let config = PlaygroundConfig::load(&cli.config)?;
            let name = match agent {
                Some(name) => name,
                None => config
                    .agent_names()
                    .first()
                    .map(|name| name.to_string())
                    .ok_or_else(|| AppError::Configuration("No agents configured".to_string()))?,
            };

            let registry = AgentRegistry::from_config_with_env(&config);
            let reply = registry.ask(&name, &message, system.as_deref()).await?;
            output.reply(&name, &reply);
            Ok(())
        }
    }
}

fn list_agents(config: &PlaygroundConfig, output: &Output) {
    output.header("Configured Agents");
    output.table_header(&["Name", "Schema", "Role"]);
    for (name, agent) in &config.agents {
        let schema = ModelSchema::classify(agent.model_id.as_deref().unwrap_or_default());
        output.table_row(&[name.as_str(), schema.name(), agent.role.as_deref().unwrap_or("-")]);
    }
}

fn show_agent(config: &PlaygroundConfig, name: &str, output: &Output) -> Result<()> {
    let agent = config
        .get_agent(name)
        .ok_or_else(|| AppError::NotFound(format!("Agent '{}' not found in config", name)))?;

    let schema = ModelSchema::classify(agent.model_id.as_deref().unwrap_or_default());
    let target = schema.target(
        agent.model_id.as_deref(),
        agent.inference_profile_arn.as_deref(),
    );

    output.header(&format!("Agent: {}", name));
    output.kv("display_name", agent.display_name.as_deref().unwrap_or(name));
    output.kv("model_id", agent.model_id.as_deref().unwrap_or("-"));
    output.kv(
        "inference_profile_arn",
        agent.inference_profile_arn.as_deref().unwrap_or("-"),
    );
    output.kv("schema", schema.name());
    output.kv("target", if target.is_empty() { "-" } else { target });
    output.kv("role", agent.role.as_deref().unwrap_or("-"));
    if let Some(instructions) = &agent.instructions {
        output.kv("instructions", instructions);
    }
    Ok(())
}
