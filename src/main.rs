//! discord-rest command line.
//!
//! Thin shell over the library for poking at a channel by hand:
//!
//! ```text
//! DISCORD_TOKEN=... discord-rest send --channel 123 --content "hello"
//! DISCORD_TOKEN=... discord-rest react --channel 123 --message 456 --emoji 👍
//! ```
//!
//! Prints the resulting message (or API error) as JSON. Exits non-zero on
//! any API failure.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use discord_rest::builders::CreateMessage;
use discord_rest::config::{load_config, ClientConfig};
use discord_rest::observability::init_logging;
use discord_rest::resources::Message;
use discord_rest::{ApiResult, Client};

#[derive(Parser)]
#[command(name = "discord-rest")]
#[command(about = "Send and manage Discord messages over the REST API", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bot token.
    #[arg(short, long, env = "DISCORD_TOKEN", hide_env_values = true)]
    token: String,

    /// Overrides `observability.log_level` from the config.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a message to a channel
    Send {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        tts: bool,
    },
    /// Print a message
    Fetch {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        message: String,
    },
    /// Replace a message's content
    Edit {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        content: String,
    },
    /// Reply to a message
    Reply {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        content: String,
    },
    /// Add the bot's reaction to a message
    React {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        emoji: String,
    },
    /// Remove the bot's reaction from a message
    Unreact {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        emoji: String,
    },
    /// Pin a message
    Pin {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        message: String,
    },
    /// Unpin a message
    Unpin {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        message: String,
    },
    /// Delete a message
    Delete {
        #[arg(long)]
        channel: String,
        #[arg(long)]
        message: String,
    },
    /// List pinned messages in a channel
    Pins {
        #[arg(long)]
        channel: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.observability.log_level.clone());
    init_logging(&level);

    tracing::debug!(api_base = %config.api_base, "Configuration loaded");

    let client = Client::with_config(cli.token.as_str(), config)?;

    let ok = match cli.command {
        Commands::Send {
            channel,
            content,
            tts,
        } => {
            let mut body = CreateMessage::new().content(content);
            if tts {
                body = body.tts(true);
            }
            print_message(client.channel(channel).send(&body).await?)?
        }
        Commands::Fetch { channel, message } => {
            print_message(client.message(&channel, &message).await?)?
        }
        Commands::Edit {
            channel,
            message,
            content,
        } => match fetch(&client, &channel, &message).await? {
            Some(m) => print_message(m.edit(&CreateMessage::new().content(content)).await?)?,
            None => false,
        },
        Commands::Reply {
            channel,
            message,
            content,
        } => match fetch(&client, &channel, &message).await? {
            Some(m) => print_message(m.reply(&CreateMessage::new().content(content)).await?)?,
            None => false,
        },
        Commands::React {
            channel,
            message,
            emoji,
        } => match fetch(&client, &channel, &message).await? {
            Some(m) => print_result(m.add_reaction(&emoji).await?)?,
            None => false,
        },
        Commands::Unreact {
            channel,
            message,
            emoji,
        } => match fetch(&client, &channel, &message).await? {
            Some(m) => print_result(m.remove_reaction(&emoji).await?)?,
            None => false,
        },
        Commands::Pin { channel, message } => match fetch(&client, &channel, &message).await? {
            Some(m) => print_result(m.pin().await?)?,
            None => false,
        },
        Commands::Unpin { channel, message } => match fetch(&client, &channel, &message).await? {
            Some(m) => print_result(m.unpin().await?)?,
            None => false,
        },
        Commands::Delete { channel, message } => match fetch(&client, &channel, &message).await? {
            Some(m) => print_result(m.delete().await?)?,
            None => false,
        },
        Commands::Pins { channel } => {
            let pins = client
                .channel(channel)
                .pinned_messages()
                .await?
                .map(|messages| messages.into_iter().map(|m| m.data).collect::<Vec<_>>());
            print_result(pins)?
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Fetch the target message, printing the API error if it cannot be found.
async fn fetch(
    client: &Client,
    channel: &str,
    message: &str,
) -> Result<Option<Message>, Box<dyn std::error::Error>> {
    match client.message(channel, message).await? {
        Ok(m) => Ok(Some(m)),
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(None)
        }
    }
}

fn print_message(result: ApiResult<Message>) -> Result<bool, Box<dyn std::error::Error>> {
    print_result(result.map(|m| m.data))
}

fn print_result<T: Serialize>(result: ApiResult<T>) -> Result<bool, Box<dyn std::error::Error>> {
    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(true)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(errors) = &e.errors {
                eprintln!("{}", serde_json::to_string_pretty(errors)?);
            }
            Ok(false)
        }
    }
}
