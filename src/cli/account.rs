//! Account CLI commands
//!
//! Implements CLI commands for account management and projection.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::display::schedule::format_schedule;
use crate::error::{RunwayError, RunwayResult};
use crate::services::{AccountService, CreateAccountInput, UpdateAccountInput};
use crate::storage::Storage;

use super::{is_clear_keyword, parse_date, parse_money};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name
        name: String,
        /// Date the account starts accruing (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        start: Option<String>,
        /// Initial amount (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0")]
        initial: String,
        /// Amount added every month
        #[arg(short, long)]
        contribution: Option<String>,
        /// Annual return rate in percent (e.g., 4.5)
        #[arg(short, long)]
        rate: Option<f64>,
        /// Compound monthly instead of applying simple interest
        #[arg(long)]
        reinvest: bool,
    },
    /// List all accounts with current, upcoming and net-after figures
    List,
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
    /// Edit an account
    Edit {
        /// Account name or ID
        account: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,
        /// New initial amount
        #[arg(short, long)]
        initial: Option<String>,
        /// New monthly contribution ("none" to clear)
        #[arg(short, long)]
        contribution: Option<String>,
        /// New annual return rate in percent ("none" to clear)
        #[arg(short, long)]
        rate: Option<String>,
        /// Compound monthly (true) or use simple interest (false)
        #[arg(long)]
        reinvest: Option<bool>,
    },
    /// Delete an account; its expenses become unassigned
    Delete {
        /// Account name or ID
        account: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show a month-by-month projection
    Project {
        /// Account name or ID
        account: String,
        /// Number of months to project
        #[arg(short, long, default_value = "12")]
        months: u32,
        /// First row date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        from: Option<String>,
    },
}

fn parse_rate(value: &str) -> RunwayResult<f64> {
    value.trim().trim_end_matches('%').parse::<f64>().map_err(|_| {
        RunwayError::Validation(format!(
            "Invalid rate: '{}'. Use a percentage like 4.5",
            value
        ))
    })
}

/// Handle an account command
pub fn handle_account_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: AccountCommands,
) -> RunwayResult<()> {
    let service = AccountService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        AccountCommands::Create {
            name,
            start,
            initial,
            contribution,
            rate,
            reinvest,
        } => {
            let input = CreateAccountInput {
                name,
                start_date: start.as_deref().map(parse_date).transpose()?.unwrap_or(today),
                initial_amount: parse_money(&initial)?,
                monthly_contribution: contribution.as_deref().map(parse_money).transpose()?,
                annual_return_rate: rate,
                reinvest_dividends: reinvest,
            };

            let account = service.create(input)?;

            println!("Created account: {}", account.name);
            println!("  Start date:     {}", account.start_date);
            println!(
                "  Initial amount: {}",
                account.initial_amount.format_with_symbol(currency)
            );
            println!("  ID: {}", account.id);
        }

        AccountCommands::List => {
            let summaries = service.list_with_summaries(today)?;
            print!("{}", format_account_list(&summaries, settings));
        }

        AccountCommands::Show { account } => {
            let found = service.require(&account)?;
            let summary = service.summary(&found, today)?;
            let expenses = storage.expenses.get_by_account(found.id)?;
            print!("{}", format_account_details(&summary, &expenses, settings));
        }

        AccountCommands::Edit {
            account,
            name,
            start,
            initial,
            contribution,
            rate,
            reinvest,
        } => {
            let found = service.require(&account)?;

            let changes = UpdateAccountInput {
                name,
                start_date: start.as_deref().map(parse_date).transpose()?,
                initial_amount: initial.as_deref().map(parse_money).transpose()?,
                monthly_contribution: match contribution.as_deref() {
                    None => None,
                    Some(v) if is_clear_keyword(v) => Some(None),
                    Some(v) => Some(Some(parse_money(v)?)),
                },
                annual_return_rate: match rate.as_deref() {
                    None => None,
                    Some(v) if is_clear_keyword(v) => Some(None),
                    Some(v) => Some(Some(parse_rate(v)?)),
                },
                reinvest_dividends: reinvest,
            };

            if changes.is_empty() {
                println!("No changes specified. See 'runway account edit --help'.");
                return Ok(());
            }

            let updated = service.update(found.id, changes)?;
            println!("Updated account: {}", updated.name);
        }

        AccountCommands::Delete { account, force } => {
            let found = service.require(&account)?;

            if !force {
                let linked = storage.expenses.get_by_account(found.id)?.len();
                println!("About to delete account: {}", found.name);
                if linked > 0 {
                    println!("  {} expense(s) will become unassigned", linked);
                }
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(found.id)?;
            println!("Deleted account: {}", deleted.name);
        }

        AccountCommands::Project {
            account,
            months,
            from,
        } => {
            let found = service.require(&account)?;
            let from = from.as_deref().map(parse_date).transpose()?.unwrap_or(today);
            let rows = service.schedule(&found, from, months)?;
            print!("{}", format_schedule(&found.name, &rows, settings));
        }
    }

    Ok(())
}
