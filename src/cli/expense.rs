//! Expense CLI commands
//!
//! Implements CLI commands for planned expenses and the affordability lookup.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::account::format_headroom;
use crate::display::expense::{format_expense_details, format_expense_list};
use crate::error::{RunwayError, RunwayResult};
use crate::models::AccountId;
use crate::services::{AccountService, ExpenseInput, ExpenseService};
use crate::storage::Storage;

use super::{is_clear_keyword, parse_date, parse_money};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Plan a new expense
    Add {
        /// Expense name
        name: String,
        /// Amount (e.g., "120.50")
        amount: String,
        /// Due date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        due: Option<String>,
        /// Account name or ID that pays for it
        #[arg(short, long)]
        account: Option<String>,
        /// Repeat every month from the due date
        #[arg(short, long)]
        recurring: bool,
    },
    /// List planned expenses
    List {
        /// Only show expenses for this account
        #[arg(short, long)]
        account: Option<String>,
    },
    /// Show expense details
    Show {
        /// Expense name or ID
        expense: String,
    },
    /// Edit an expense
    Edit {
        /// Expense name or ID
        expense: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(long)]
        amount: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,
        /// New account name or ID ("none" to unassign)
        #[arg(short, long)]
        account: Option<String>,
        /// Repeat monthly (true) or once (false)
        #[arg(short, long)]
        recurring: Option<bool>,
    },
    /// Delete an expense
    Delete {
        /// Expense name or ID
        expense: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show the largest single expense an account can cover on a date
    Afford {
        /// Account name or ID
        account: String,
        /// Due date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        due: Option<String>,
        /// Leave this expense out, as when editing it
        #[arg(short, long)]
        ignore: Option<String>,
    },
}

fn resolve_account(accounts: &AccountService<'_>, identifier: &str) -> RunwayResult<AccountId> {
    Ok(accounts.require(identifier)?.id)
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    cmd: ExpenseCommands,
) -> RunwayResult<()> {
    let service = ExpenseService::new(storage);
    let account_service = AccountService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            due,
            account,
            recurring,
        } => {
            let input = ExpenseInput {
                name,
                amount: parse_money(&amount)?,
                due_date: due.as_deref().map(parse_date).transpose()?.unwrap_or(today),
                account_id: account
                    .as_deref()
                    .map(|a| resolve_account(&account_service, a))
                    .transpose()?,
                is_recurring: recurring,
            };

            let expense = service.create(input)?;

            println!("Planned expense: {}", expense);
            println!("  ID: {}", expense.id);
        }

        ExpenseCommands::List { account } => {
            let expenses = match account.as_deref() {
                Some(identifier) => {
                    service.list_for_account(resolve_account(&account_service, identifier)?)?
                }
                None => service.list()?,
            };
            let accounts = account_service.list()?;
            print!("{}", format_expense_list(&expenses, &accounts, settings));
        }

        ExpenseCommands::Show { expense } => {
            let found = service.require(&expense)?;
            let accounts = account_service.list()?;
            print!("{}", format_expense_details(&found, &accounts, settings));
        }

        ExpenseCommands::Edit {
            expense,
            name,
            amount,
            due,
            account,
            recurring,
        } => {
            let found = service.require(&expense)?;

            if name.is_none()
                && amount.is_none()
                && due.is_none()
                && account.is_none()
                && recurring.is_none()
            {
                println!("No changes specified. See 'runway expense edit --help'.");
                return Ok(());
            }

            let mut input = ExpenseInput::from_expense(&found);
            if let Some(name) = name {
                input.name = name;
            }
            if let Some(amount) = amount {
                input.amount = parse_money(&amount)?;
            }
            if let Some(due) = due {
                input.due_date = parse_date(&due)?;
            }
            if let Some(account) = account {
                input.account_id = if is_clear_keyword(&account) {
                    None
                } else {
                    Some(resolve_account(&account_service, &account)?)
                };
            }
            if let Some(recurring) = recurring {
                input.is_recurring = recurring;
            }

            let updated = service.update(found.id, input)?;
            println!("Updated expense: {}", updated);
        }

        ExpenseCommands::Delete { expense, force } => {
            let found = service.require(&expense)?;

            if !force {
                println!("About to delete expense: {}", found);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(found.id)?;
            println!("Deleted expense: {}", deleted.name);
        }

        ExpenseCommands::Afford {
            account,
            due,
            ignore,
        } => {
            let found = account_service.require(&account)?;
            let due_date = due.as_deref().map(parse_date).transpose()?.unwrap_or(today);
            if due_date < found.start_date {
                return Err(RunwayError::Validation(format!(
                    "This account starts on {}. Expense date must be on or after that.",
                    found.start_date
                )));
            }

            let ignore = ignore
                .as_deref()
                .map(|e| service.require(e).map(|x| x.id))
                .transpose()?;

            let headroom = service.max_affordable(&found, due_date, ignore)?;
            print!("{}", format_headroom(&found.name, headroom, currency));
            println!("Planning estimate only, not a ledger guarantee.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::RunwayPaths;
    use crate::models::{Account, Money};
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn setup() -> (TempDir, Storage, Account) {
        let temp_dir = TempDir::new().unwrap();
        let paths = RunwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let account = Account::new(
            "Travel",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Money::from_dollars(500),
        );
        storage.accounts.upsert(account.clone()).unwrap();
        (temp_dir, storage, account)
    }

    fn add(name: &str, amount: &str, account: Option<&str>) -> ExpenseCommands {
        ExpenseCommands::Add {
            name: name.into(),
            amount: amount.into(),
            due: Some("2024-07-01".into()),
            account: account.map(String::from),
            recurring: false,
        }
    }

    #[test]
    fn test_add_links_account_by_name() {
        let (_temp_dir, storage, account) = setup();
        let settings = Settings::default();

        handle_expense_command(&storage, &settings, today(), add("Hotel", "300", Some("travel")))
            .unwrap();

        let expenses = storage.expenses.get_by_account(account.id).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].amount, Money::from_dollars(300));
    }

    #[test]
    fn test_add_rejects_overdraw() {
        let (_temp_dir, storage, _account) = setup();
        let settings = Settings::default();

        let err = handle_expense_command(
            &storage,
            &settings,
            today(),
            add("Cruise", "900", Some("Travel")),
        )
        .unwrap_err();
        assert!(matches!(err, RunwayError::WouldGoNegative { .. }));
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }

    #[test]
    fn test_edit_unassigns_expense() {
        let (_temp_dir, storage, _account) = setup();
        let settings = Settings::default();
        handle_expense_command(&storage, &settings, today(), add("Hotel", "300", Some("Travel")))
            .unwrap();

        let edit = ExpenseCommands::Edit {
            expense: "Hotel".into(),
            name: None,
            amount: None,
            due: None,
            account: Some("none".into()),
            recurring: None,
        };
        handle_expense_command(&storage, &settings, today(), edit).unwrap();

        let hotel = storage.expenses.get_by_name("Hotel").unwrap().unwrap();
        assert_eq!(hotel.account_id, None);
    }

    #[test]
    fn test_afford_before_start_is_rejected() {
        let (_temp_dir, storage, _account) = setup();
        let afford = ExpenseCommands::Afford {
            account: "Travel".into(),
            due: Some("2023-12-01".into()),
            ignore: None,
        };
        let err =
            handle_expense_command(&storage, &Settings::default(), today(), afford).unwrap_err();
        assert!(err.to_string().contains("This account starts on 2024-01-01"));
    }
}
