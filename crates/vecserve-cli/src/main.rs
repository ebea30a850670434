//! Vecserve CLI - query a running embedding server
//!
//! List models, embed text and check server health from the terminal.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;

use api::{EmbeddingObject, VecserveClient};
use config::Config;

#[derive(Parser)]
#[command(name = "vecserve")]
#[command(about = "Vecserve CLI - query a running embedding server", long_about = None)]
#[command(version)]
struct Cli {
    /// Server URL (overrides the configured one)
    #[arg(long, global = true, env = "VECSERVE_URL")]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List models loaded by the server
    Models,

    /// Embed one or more texts
    Embed {
        /// Texts to embed (will prompt if not provided)
        texts: Vec<String>,
        /// Model name (defaults to the configured model)
        #[arg(short, long)]
        model: Option<String>,
        /// Keep only the first N dimensions of each vector
        #[arg(long)]
        dims: Option<usize>,
        /// Print the full response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check server health
    Health,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the server URL
    SetUrl {
        /// e.g. http://127.0.0.1:5000
        url: String,
    },
    /// Set the default model for `embed`
    SetModel {
        /// Model name as listed by `vecserve models`
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Models => cmd_models(cli.url).await,
        Commands::Embed { texts, model, dims, json } => {
            cmd_embed(cli.url, texts, model, dims, json).await
        }
        Commands::Health => cmd_health(cli.url).await,
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
    }
}

fn client(url: Option<String>) -> Result<(Config, VecserveClient)> {
    let config = Config::load()?;
    let base_url = url.unwrap_or_else(|| config.base_url.clone());
    let client = VecserveClient::new(&base_url);
    Ok((config, client))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_models(url: Option<String>) -> Result<()> {
    let (config, client) = client(url)?;
    let models = client.list_models().await?;

    if models.is_empty() {
        println!("No models loaded.");
        return Ok(());
    }

    println!("{}", "Models:".bold());
    for name in &models {
        let marker = if config.default_model.as_deref() == Some(name.as_str()) {
            " (default)".green().to_string()
        } else {
            String::new()
        };
        println!("  {}{}", name.cyan(), marker);
    }

    Ok(())
}

async fn cmd_embed(
    url: Option<String>,
    texts: Vec<String>,
    model: Option<String>,
    dims: Option<usize>,
    json: bool,
) -> Result<()> {
    let (config, client) = client(url)?;

    let model = config
        .resolve_model(model)
        .context("No model specified and no default model set. Use -m <model> or `vecserve config set-model`.")?;

    if dims == Some(0) {
        bail!("--dims must be at least 1");
    }

    let texts = if texts.is_empty() {
        let text: String = Input::new()
            .with_prompt("Text")
            .interact_text()
            .context("Failed to read input")?;
        vec![text]
    } else {
        texts
    };

    let mut response = client.embed(&model, &texts).await?;
    if let Some(dims) = dims {
        for obj in &mut response.data {
            obj.truncate(dims);
        }
    }

    if json {
        let data: Vec<_> = response
            .data
            .iter()
            .map(|obj| serde_json::json!({"index": obj.index, "dims": obj.dims, "embedding": obj.embedding}))
            .collect();
        let out = serde_json::json!({"model": response.model, "data": data});
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "{} {} embeddings from {}",
        "✓".green(),
        response.data.len(),
        response.model.cyan()
    );
    for obj in &response.data {
        let text = texts.get(obj.index).map(String::as_str).unwrap_or("");
        println!(
            "  [{}] {} {}",
            obj.index,
            truncate_string(text, 40).dimmed(),
            preview(obj, 4)
        );
    }

    Ok(())
}

async fn cmd_health(url: Option<String>) -> Result<()> {
    let (_, client) = client(url)?;
    print!("Checking server... ");

    match client.health().await {
        Ok(health) if health.status == "ok" => {
            println!("{}", "OK".green());
            println!("  phase:   {}", health.phase);
            println!("  models:  {}", health.models);
            println!("  version: {}", health.version);
            Ok(())
        }
        Ok(health) => {
            println!("{}", "Unavailable".yellow());
            println!("  phase: {}", health.phase);
            bail!("Server is not serving requests ({})", health.phase);
        }
        Err(e) => {
            println!("{}", "Failed".red());
            Err(e)
        }
    }
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Config file: {:?}", Config::config_path()?);
            println!("  Server URL:  {}", config.base_url);
            println!(
                "  Model:       {}",
                config.default_model.as_deref().unwrap_or("(not set)")
            );
        }
        ConfigAction::SetUrl { url } => {
            config.set_base_url(url);
            config.save()?;
            println!("{} Server URL set to {}", "✓".green(), config.base_url);
        }
        ConfigAction::SetModel { name } => {
            config.set_default_model(name.clone());
            config.save()?;
            println!("{} Default model set to '{}'", "✓".green(), name);
        }
    }

    Ok(())
}

// ============================================
// Helpers
// ============================================

fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}

/// `dims=N [a, b, c, d, ...]`
fn preview(obj: &EmbeddingObject, head: usize) -> String {
    let values: Vec<String> = obj
        .embedding
        .iter()
        .take(head)
        .map(|v| format!("{:.4}", v))
        .collect();
    let more = if obj.embedding.len() > head { ", ..." } else { "" };
    format!("dims={} [{}{}]", obj.dims, values.join(", "), more)
}
