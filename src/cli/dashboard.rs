//! Dashboard CLI command

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::error::RunwayResult;
use crate::reports::DashboardReport;
use crate::storage::Storage;

/// Print the dashboard as text, or as JSON when `json` is set
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    today: NaiveDate,
    json: bool,
) -> RunwayResult<()> {
    let report = DashboardReport::generate(storage, today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.format_terminal(settings));
    }

    Ok(())
}
