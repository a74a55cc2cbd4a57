use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use runway::cli::{
    handle_account_command, handle_dashboard_command, handle_expense_command, parse_date,
};
use runway::config::{paths::RunwayPaths, settings::Settings};
use runway::logging;
use runway::storage::Storage;

#[derive(Parser)]
#[command(
    name = "runway",
    version,
    about = "Project savings balances and check planned expenses against them",
    long_about = "Runway projects how your savings accounts grow with contributions \
                  and returns, subtracts the expenses you plan to pay from them, and \
                  warns you before a plan would take an account below zero. Figures \
                  are planning estimates, not a ledger."
)]
struct Cli {
    /// Use this directory for data and settings instead of the default
    #[arg(long, global = true, env = "RUNWAY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Evaluate everything as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    as_of: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand)]
    Account(runway::cli::AccountCommands),

    /// Planned expense commands
    #[command(subcommand)]
    Expense(runway::cli::ExpenseCommands),

    /// Show totals, allocation and upcoming expenses
    Dashboard {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => RunwayPaths::with_base_dir(dir),
        None => RunwayPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    logging::init_tracing(&settings.log_filter);

    let today: NaiveDate = match cli.as_of.as_deref() {
        Some(date) => parse_date(date)?,
        None => Local::now().date_naive(),
    };

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Account(cmd)) => {
            handle_account_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Dashboard { json }) => {
            handle_dashboard_command(&storage, &settings, today, json)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Runway at: {}", paths.data_dir().display());
            storage.initialize()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Next: 'runway account create <name> --initial <amount>'");
        }
        Some(Commands::Config) => {
            println!("Runway Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Upcoming limit:  {}", settings.upcoming_limit);
            println!("  Log filter:      {}", settings.log_filter);
            println!(
                "  Initialized:     {}",
                if storage.is_initialized() { "yes" } else { "no" }
            );
        }
        None => {
            println!("Runway - savings projections and expense planning");
            println!();
            println!("Run 'runway --help' for usage information.");
            println!("Run 'runway dashboard' for an overview.");
        }
    }

    Ok(())
}
