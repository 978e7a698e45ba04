use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use finance_tracker::config::{Config, ConfigPaths};
use finance_tracker::storage::JsonTransactionStore;

#[derive(Parser)]
#[command(
    name = "finance-tracker",
    author = "Harry Reynier",
    version,
    about = "Terminal ledger for income and expenses",
    long_about = "Finance Tracker records income and expense transactions from \
                  the terminal. Categories, currency and date format come from \
                  config.yaml in the config directory."
)]
struct Cli {
    /// Log at debug level
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ConfigPaths::new().context("Failed to locate config directory")?;
    finance_tracker::logging::init(&paths, cli.debug)?;

    let config = Config::resolve(&paths)
        .with_context(|| format!("Failed to load {}", paths.config_file().display()))?;
    let data_file = paths.data_file(&config.data_file);

    match cli.command {
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Config file:      {}", paths.config_file().display());
            println!("Data file:        {}", data_file.display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("{}", config);
        }
        Some(Commands::Tui) | None => {
            let mut store = JsonTransactionStore::open(&data_file)
                .with_context(|| format!("Failed to open {}", data_file.display()))?;
            finance_tracker::tui::run_tui(&config, &mut store)?;
        }
    }

    Ok(())
}
