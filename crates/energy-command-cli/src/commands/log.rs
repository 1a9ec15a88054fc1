//! Task/action log for a month.

use chrono::NaiveTime;
use clap::{Args, ValueEnum};

use energy_command_core::{format_short_date, Config, MonthCache, TaskOrigin, TaskStatus};

use super::{new_view, resolve_month, wants_json};

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusFilter {
    Planned,
    Completed,
}

#[derive(Args)]
pub struct LogArgs {
    /// Month (YYYY-MM), defaults to the current month
    #[arg(long)]
    month: Option<String>,
    /// Only show tasks with this status
    #[arg(long, value_enum)]
    status: Option<StatusFilter>,
    #[arg(long)]
    json: bool,
}

pub fn run(args: LogArgs, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let key = resolve_month(args.month.as_deref())?;
    let mut cache = MonthCache::new();
    let view = new_view(config, key.first_day());
    let snapshot = view.snapshot(&mut cache);

    let wanted = args.status.map(|s| match s {
        StatusFilter::Planned => TaskStatus::Planned,
        StatusFilter::Completed => TaskStatus::Completed,
    });
    let entries: Vec<_> = view
        .action_log(&snapshot)
        .into_iter()
        .filter(|e| wanted.map_or(true, |w| e.status == w))
        .collect();

    if wants_json(args.json, config) {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("\nAction log: {}\n", snapshot.label);
    for entry in &entries {
        let origin = match entry.origin {
            TaskOrigin::Generated => "",
            TaskOrigin::Custom => " (custom)",
        };
        println!(
            "  {:<7} {}  {:<32} {:<10} {}{}",
            format_short_date(&entry.date.and_time(NaiveTime::MIN)),
            entry.task.time,
            entry.task.title,
            entry.status,
            entry.task.impact,
            origin
        );
    }

    let summary = view.completion_summary(&snapshot);
    println!(
        "\n  {} tasks: {} planned, {} completed",
        summary.total(),
        summary.planned,
        summary.completed
    );
    Ok(())
}
