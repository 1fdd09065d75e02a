//! DevOOPS highscores command-line entry point
//!
//! Manages the board stored in the platform data directory.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::{Parser, Subcommand};
    use directories::BaseDirs;

    use devoops_highscores::{
        CsvDialect, FileStore, HighscoreConfig, HighscoreManager, ImportPolicy,
        export_highscores_to_file, import_highscores_from_file,
    };

    const DIR_NAME: &str = "DevOOPS";
    const CONFIG_FILE: &str = "config.json";

    #[derive(Parser)]
    #[command(name = "devoops-highscores", version)]
    #[command(about = "Manage the DevOOPS highscore board")]
    struct Args {
        /// Directory holding the highscore slot and config
        #[arg(long, env = "DEVOOPS_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// Config file (defaults to <data-dir>/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the board capacity
        #[arg(long)]
        max_scores: Option<usize>,

        /// Skip imported rows whose score is not a number
        #[arg(long)]
        strict: bool,

        /// Quote CSV fields containing commas, quotes or line breaks
        #[arg(long)]
        quoted: bool,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand)]
    enum Command {
        /// Print the board
        List,
        /// Tell whether a score would make the board
        Check {
            #[arg(allow_negative_numbers = true)]
            score: i64,
        },
        /// Record a score
        Add {
            #[arg(allow_negative_numbers = true)]
            score: i64,
            /// Player name (blank records "Anonymous")
            #[arg(short, long, default_value = "")]
            name: String,
        },
        /// Write the board as CSV
        Export {
            /// Output file (defaults to the configured export filename)
            file: Option<PathBuf>,
        },
        /// Merge a CSV file into the board
        Import { file: PathBuf },
        /// Remove every entry
        Clear,
    }

    fn default_data_dir() -> PathBuf {
        BaseDirs::new()
            .map(|dirs| dirs.data_dir().join(DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub async fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
        let config_path = args.config.unwrap_or_else(|| data_dir.join(CONFIG_FILE));

        let mut config = HighscoreConfig::load(&config_path);
        if let Some(max_scores) = args.max_scores {
            config.max_scores = max_scores;
        }
        if args.strict {
            config.import_policy = ImportPolicy::Strict;
        }
        if args.quoted {
            config.csv_dialect = CsvDialect::Quoted;
        }
        log::debug!(
            "Using {} (capacity {}, {} import, {} CSV)",
            data_dir.display(),
            config.max_scores,
            config.import_policy.as_str(),
            config.csv_dialect.as_str()
        );

        let store = FileStore::new(&data_dir, &config.storage_key);
        let mut manager =
            HighscoreManager::with_config(store, devoops_highscores::SystemClock, config);

        match args.command {
            Command::List => {
                if manager.is_empty() {
                    println!("No high scores yet");
                }
                for (i, entry) in manager.entries().iter().enumerate() {
                    println!(
                        "{:>3}. {:<20} {:>10}  {}",
                        i + 1,
                        entry.name,
                        entry.score_label(),
                        entry.date
                    );
                }
            }
            Command::Check { score } => match manager.potential_rank(score) {
                Some(rank) => println!("{} would place #{}", score, rank),
                None => println!("{} does not make the board", score),
            },
            Command::Add { score, name } => {
                if manager.add_highscore(&name, score) {
                    println!("Added {} ({} entries)", score, manager.len());
                } else {
                    println!("{} does not make the board", score);
                }
            }
            Command::Export { file } => {
                let path = export_highscores_to_file(&manager, file.as_deref())
                    .context("failed to export high scores")?;
                println!("Exported {} entries to {}", manager.len(), path.display());
            }
            Command::Import { file } => {
                let count = import_highscores_from_file(&file, &mut manager)
                    .await
                    .with_context(|| format!("failed to read {}", file.display()))?;
                println!("Imported {} rows ({} entries kept)", count, manager.len());
            }
            Command::Clear => {
                manager.clear_highscores();
                println!("High scores cleared");
            }
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    native::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser builds use the library directly; there is no CLI
}
