mod commands;
mod config;
mod edamam;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;

use crate::commands::{
    cmd_fav_add, cmd_fav_list, cmd_fav_remove, cmd_fav_show, cmd_fav_toggle, cmd_image, cmd_search,
    cmd_show,
};
use crate::config::Config;
use crate::edamam::EdamamClient;
use nosh_core::service::NoshService;

#[derive(Parser)]
#[command(
    name = "nosh",
    version,
    about = "A recipe finder CLI with a local favorites list",
    long_about = "\n\n  ███╗   ██╗ ██████╗ ███████╗██╗  ██╗
  ████╗  ██║██╔═══██╗██╔════╝██║  ██║
  ██╔██╗ ██║██║   ██║███████╗███████║
  ██║╚██╗██║██║   ██║╚════██║██╔══██║
  ██║ ╚████║╚██████╔╝███████║██║  ██║
  ╚═╝  ╚═══╝ ╚═════╝ ╚══════╝╚═╝  ╚═╝
        find it. save it. cook it.
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search Edamam for recipes (a blank query lists everything)
    Search {
        /// Search query
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one recipe's ingredients and nutrition
    Show {
        /// Search query
        query: String,
        /// Pick the Nth hit without prompting
        #[arg(long)]
        pick: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch a recipe image to a file
    Image {
        /// Image URL (from a search hit)
        url: String,
        /// Output file path
        #[arg(short, long)]
        out: std::path::PathBuf,
    },
    /// Manage the favorites list
    Fav {
        #[command(subcommand)]
        command: FavCommands,
    },
}

#[derive(Subcommand)]
enum FavCommands {
    /// List saved favorites
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search for a recipe and save it to favorites
    Add {
        /// Search query
        query: String,
        /// Pick the Nth hit without prompting
        #[arg(long)]
        pick: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a favorite by its uri
    Remove {
        /// Recipe uri (see `fav list`)
        uri: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle a recipe in or out of favorites
    Toggle {
        /// Search query
        query: String,
        /// Pick the Nth hit without prompting
        #[arg(long)]
        pick: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a saved favorite's ingredients and nutrition
    Show {
        /// Recipe uri (see `fav list`)
        uri: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let svc = NoshService::open(&config.db_path)?;

    match cli.command {
        Commands::Search { query, json } => {
            let client = EdamamClient::new(config.load_credentials()?);
            cmd_search(&client, &query, json).await
        }
        Commands::Show { query, pick, json } => {
            let client = EdamamClient::new(config.load_credentials()?);
            cmd_show(&client, &query, pick, json).await
        }
        Commands::Image { url, out } => {
            let client = EdamamClient::new(config.load_credentials()?);
            cmd_image(&client, &url, &out).await
        }
        Commands::Fav { command } => match command {
            FavCommands::List { json } => cmd_fav_list(&svc, json),
            FavCommands::Add { query, pick, json } => {
                let client = EdamamClient::new(config.load_credentials()?);
                cmd_fav_add(&svc, &client, &query, pick, json).await
            }
            FavCommands::Remove { uri, json } => cmd_fav_remove(&svc, &uri, json),
            FavCommands::Toggle { query, pick, json } => {
                let client = EdamamClient::new(config.load_credentials()?);
                cmd_fav_toggle(&svc, &client, &query, pick, json).await
            }
            FavCommands::Show { uri, json } => cmd_fav_show(&svc, &uri, json),
        },
    }
}
