pub mod config;
pub mod day;
pub mod log;
pub mod month;

use chrono::{Local, NaiveDate};
use energy_command_core::calendar::parse_month;
use energy_command_core::{CalendarViewState, Config, MonthKey};

/// Month from `--month YYYY-MM`, or the current local month.
pub(crate) fn resolve_month(month: Option<&str>) -> Result<MonthKey, Box<dyn std::error::Error>> {
    match month {
        Some(raw) => Ok(parse_month(raw)?),
        None => Ok(MonthKey::from_date(today())),
    }
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Fresh session state with the configured task defaults.
pub(crate) fn new_view(config: &Config, day: NaiveDate) -> CalendarViewState {
    CalendarViewState::new(day).with_task_defaults(config.tasks.clone())
}

/// `--json` wins, otherwise the configured default.
pub(crate) fn wants_json(flag: bool, config: &Config) -> bool {
    flag || config.display.json
}

pub(crate) fn percent(change: f64) -> String {
    format!("{:+.0}%", change * 100.0)
}
