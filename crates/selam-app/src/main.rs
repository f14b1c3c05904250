use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod catalog;
mod commands;
mod profile;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(
    name = "selam",
    about = "Curriculum tooling for the Selam language-learning platform"
)]
struct Cli {
    /// Config profile name (falls back to the main profile, then defaults)
    #[arg(long)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a full curriculum tree as JSON
    Generate {
        #[arg(long, default_value = "english")]
        native: String,
        #[arg(long)]
        learning: String,
        /// Write JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Seed the random source for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Extract a shuffled practice lesson from a generated tree
    Practice {
        #[arg(long, default_value = "english")]
        native: String,
        #[arg(long)]
        learning: String,
        /// Practice kind, used in the synthesized ids ("practice", "mistakes", ...)
        #[arg(long, default_value = "practice")]
        kind: String,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Report embedded vocabulary coverage for a learning language
    Vocab {
        #[arg(long)]
        learning: String,
        /// Print the entries of one topic instead of the per-topic summary
        #[arg(long)]
        topic: Option<String>,
    },
    /// Ask the configured AI provider to draft a unit description
    Assist {
        #[arg(long)]
        topic: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("selam_app=info".parse()?)
                .add_directive("selam_core=info".parse()?)
                .add_directive("selam_lang_amharic=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    profile::init_user_config()?;
    let config = profile::load_or_default(cli.profile.as_deref());

    match cli.command {
        Command::Generate {
            native,
            learning,
            out,
            seed,
        } => commands::generate::run(&config, &native, &learning, out.as_deref(), seed),
        Command::Practice {
            native,
            learning,
            kind,
            seed,
        } => commands::practice::run(&config, &native, &learning, &kind, seed),
        Command::Vocab { learning, topic } => {
            commands::vocab::run(&config, &learning, topic.as_deref())
        }
        Command::Assist { topic } => commands::assist::run(&config, &topic).await,
    }
}
