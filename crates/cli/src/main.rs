//! PaaS CLI
//!
//! Command-line client for the platform API.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use paas_cli::api::{HttpUserRepository, UserRepository};
use paas_cli::commands::{run_command, CommandMetadata, CommandRegistry};
use paas_cli::config::Config;
use paas_cli::output::colors;
use paas_cli::requirements::ApiRequirementFactory;
use paas_cli::terminal::{TerminalUi, Ui};
use paas_common::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "paas")]
#[command(author, version, about = "PaaS CLI")]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// API endpoint URL (overrides config)
    #[arg(long, global = true, env = "PAAS_API_URL")]
    api_url: Option<String>,

    /// Access token (overrides config)
    #[arg(long, global = true, env = "PAAS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show available commands, or the usage of one command
    Help {
        /// Command name
        command: Option<String>,
    },

    /// Any registered command, e.g. `delete-user USERNAME [-f]`
    #[command(external_subcommand)]
    External(Vec<String>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    init_tracing(log_level, std::env::var("PAAS_LOG_JSON").is_ok())?;

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(api_url) = &cli.api_url {
        config.api_endpoint = api_url.clone();
    }
    if let Some(token) = &cli.token {
        config.access_token = Some(token.clone());
    }
    if cli.no_color || !config.colored {
        colored::control::set_override(false);
    }
    let config = Arc::new(config);

    let ui: Arc<dyn Ui> = Arc::new(TerminalUi::new());
    let user_repo: Arc<dyn UserRepository> = Arc::new(
        HttpUserRepository::from_config(&config).context("Failed to create API client")?,
    );
    let factory = ApiRequirementFactory::new(ui.clone(), config.clone(), user_repo.clone());
    let mut registry = CommandRegistry::with_defaults(ui.clone(), config, user_repo);

    match cli.command {
        Commands::Help { command } => print_help(&registry.metadata(), command.as_deref()),
        Commands::External(argv) => {
            let Some((name, args)) = argv.split_first() else {
                print_help(&registry.metadata(), None);
                return Ok(());
            };

            let Some(command) = registry.find_mut(name) else {
                eprintln!(
                    "{} '{}' is not a registered command. See 'paas help'",
                    "Error:".red().bold(),
                    name
                );
                std::process::exit(1);
            };

            let outcome = run_command(command, args, ui.as_ref(), &factory);
            tracing::debug!(command = %name, ?outcome, "Command finished");
            if !outcome.is_success() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_help(commands: &[CommandMetadata], name: Option<&str>) {
    if let Some(name) = name {
        match commands.iter().find(|metadata| metadata.answers_to(name)) {
            Some(metadata) => {
                println!("NAME:");
                println!("   {} - {}", metadata.name, metadata.description);
                println!();
                println!("USAGE:");
                println!("   {}", metadata.usage);
                if let Some(alias) = metadata.short_name {
                    println!();
                    println!("ALIAS:");
                    println!("   {}", alias);
                }
                if !metadata.flags.is_empty() {
                    println!();
                    println!("OPTIONS:");
                    for flag in &metadata.flags {
                        println!("   -{}, --{:<12} {}", flag.short, flag.long, flag.help);
                    }
                }
            }
            None => println!("{}", colors::warning(&format!("Unknown command '{}'", name))),
        }
        return;
    }

    println!("USAGE:");
    println!("   paas [global options] command [arguments...]");
    println!();
    println!("COMMANDS:");
    for metadata in commands {
        let alias = metadata
            .short_name
            .map(|alias| format!(", {}", alias))
            .unwrap_or_default();
        println!(
            "   {:<20} {}",
            format!("{}{}", metadata.name, alias),
            colors::dim(metadata.description)
        );
    }
}
