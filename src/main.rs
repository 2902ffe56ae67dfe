use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cotacao_cafe::cli::{
    handle_add, handle_config, handle_export, handle_list, handle_remove, handle_reset,
    handle_stats,
};
use cotacao_cafe::config::paths::AppPaths;
use cotacao_cafe::storage::Storage;

#[derive(Parser)]
#[command(
    name = "cotacao",
    version,
    about = "Command-line tracker for daily coffee price quotes",
    long_about = "cotacao-cafe tracks daily price quotes for three coffee varieties \
                  (Conilon, Arabica Rio, Arabica Duro), shows per-variety averages, \
                  and exports the day's snapshot as CSV. Values are typed in \
                  Brazilian notation, e.g. 1.376,72."
)]
struct Cli {
    /// Profile under which quotes are stored
    #[arg(long, global = true, default_value = "default")]
    profile: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a price quote to a variety
    Add {
        /// Variety name (conilon, arabica-rio, arabica-duro)
        variety: String,
        /// Quote value in Brazilian notation (e.g. "1.376,72")
        value: String,
    },

    /// List recorded quotes
    List {
        /// Variety name; omit to list all varieties
        variety: Option<String>,
    },

    /// Remove a quote by its 0-based position
    #[command(alias = "rm")]
    Remove {
        /// Variety name
        variety: String,
        /// Position of the quote to remove (as shown by 'list')
        index: usize,
    },

    /// Show per-variety statistics and the overall average
    Stats,

    /// Export the day's aggregate snapshot as CSV
    Export {
        /// Output path (defaults to medias_<date>.csv in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Clear every recorded quote
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and storage for the selected profile
    let paths = AppPaths::new()?;
    let storage = Storage::new(paths, &cli.profile)?;
    storage.load()?;

    match cli.command {
        Some(Commands::Add { variety, value }) => {
            handle_add(&storage, &variety, &value)?;
        }
        Some(Commands::List { variety }) => {
            handle_list(&storage, variety.as_deref())?;
        }
        Some(Commands::Remove { variety, index }) => {
            handle_remove(&storage, &variety, index)?;
        }
        Some(Commands::Stats) => {
            handle_stats(&storage)?;
        }
        Some(Commands::Export { output }) => {
            handle_export(&storage, output.as_deref())?;
        }
        Some(Commands::Reset { yes }) => {
            handle_reset(&storage, yes)?;
        }
        Some(Commands::Config) => {
            handle_config(&storage)?;
        }
        None => {
            println!("cotacao-cafe - daily coffee price quotes");
            println!();
            println!("Run 'cotacao --help' for usage information.");
            println!("Run 'cotacao add conilon \"1.376,72\"' to record a quote.");
        }
    }

    Ok(())
}
