use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use promptkit::cli::{Cli, Command, OutputFormat};
use promptkit::config::Config;
use promptkit::{KitLoader, projects};

fn parse_level(level: &str) -> Option<tracing::Level> {
    match level.to_uppercase().as_str() {
        "TRACE" => Some(tracing::Level::TRACE),
        "DEBUG" => Some(tracing::Level::DEBUG),
        "INFO" => Some(tracing::Level::INFO),
        "WARN" | "WARNING" => Some(tracing::Level::WARN),
        "ERROR" => Some(tracing::Level::ERROR),
        _ => None,
    }
}

/// Logs go to stderr; stdout carries only command output.
/// Level priority: CLI --log-level > config file > WARN
fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => parse_level(s).unwrap_or_else(|| {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", s);
            tracing::Level::WARN
        }),
        None => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[derive(Serialize)]
struct RenderOutput<'a> {
    kit: &'a str,
    output: &'a str,
    unfilled: Vec<&'a str>,
}

fn cmd_render(config: &Config, input: &str, kit: Option<&str>, format: OutputFormat) -> Result<()> {
    let name = kit.unwrap_or(&config.default_kit);
    let loader = KitLoader::new(Some(config.kits_dir.clone()));
    let kit = loader.load(name).context("Failed to load kit")?;

    let output = kit.render(input);
    let unfilled = kit.template.unfilled(&output);
    info!(kit = %kit.name, unfilled = unfilled.len(), "Rendered kit");

    match format {
        OutputFormat::Text => {
            println!("{}", output);
            if !unfilled.is_empty() {
                eprintln!(
                    "{} {} placeholder(s) left unfilled: {}",
                    "!".yellow(),
                    unfilled.len(),
                    unfilled.join(", ").yellow()
                );
                eprintln!("  Format: {}", kit.template.format_hint().dimmed());
            }
        }
        OutputFormat::Json => {
            let out = RenderOutput {
                kit: &kit.name,
                output: &output,
                unfilled,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}

fn cmd_show(config: &Config, kit: Option<&str>) -> Result<()> {
    let name = kit.unwrap_or(&config.default_kit);
    let kit = KitLoader::new(Some(config.kits_dir.clone()))
        .load(name)
        .context("Failed to load kit")?;

    println!("{} {}", kit.name.cyan().bold(), kit.description.dimmed());
    println!("Format: {}", kit.template.format_hint());
    println!();
    println!("{}", kit.template.text());
    Ok(())
}

fn cmd_kits(config: &Config) -> Result<()> {
    let kits = KitLoader::new(Some(config.kits_dir.clone()))
        .list()
        .context("Failed to list kits")?;
    for kit in kits {
        let marker = if kit.name == config.default_kit { "*" } else { " " };
        println!(
            "{} {:<24} {:<40} {}",
            marker.green(),
            kit.name.cyan(),
            kit.description,
            kit.source.to_string().dimmed()
        );
    }
    Ok(())
}

fn cmd_projects(category: &str, format: OutputFormat) -> Result<()> {
    if !projects::is_known_category(category) {
        warn!(%category, "Category is not one of the gallery filters");
    }
    let matches = projects::filter_by_category(category);

    match format {
        OutputFormat::Text => {
            if matches.is_empty() {
                println!("No projects in category: {}", category);
            }
            for p in matches {
                println!("{} {} {}", format!("#{}", p.id).yellow(), p.title.bold(), format!("[{}]", p.category).dimmed());
                println!("   {}", p.description);
                println!("   Stack: {}", p.tech_stack.join(", "));
                for (label, url) in [
                    ("github", p.links.github),
                    ("fiverr", p.links.fiverr),
                    ("notion", p.links.notion),
                ] {
                    if let Some(url) = url {
                        println!("   {}: {}", label, url.cyan());
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    debug!(?config, "promptkit starting");

    match cli.command {
        Command::Render { input, kit, format } => cmd_render(&config, &input, kit.as_deref(), format),
        Command::Show { kit } => cmd_show(&config, kit.as_deref()),
        Command::Kits => cmd_kits(&config),
        Command::Projects { category, format } => cmd_projects(&category, format),
        Command::Categories => {
            for category in projects::CATEGORIES {
                println!("{}", category);
            }
            Ok(())
        }
    }
}
