//! Daily breakdown command.
//!
//! Task toggles and custom tasks apply to this invocation only; nothing is
//! written back to the generated month.

use clap::Subcommand;

use energy_command_core::calendar::parse_day;
use energy_command_core::{Config, DayBreakdown, MonthCache, TaskForm, TaskOrigin, TaskStatus};

use super::{new_view, percent, wants_json};

#[derive(Subcommand)]
pub enum DayAction {
    /// Show metrics, insights, tasks and events for a day
    Show {
        /// Day (YYYY-MM-DD)
        date: String,
        /// Task id to toggle between planned and completed (repeatable)
        #[arg(long = "toggle")]
        toggles: Vec<String>,
        /// Add a custom task with this title
        #[arg(long)]
        add_task: Option<String>,
        /// Custom task time (HH:MM)
        #[arg(long, default_value = "")]
        time: String,
        /// Custom task description
        #[arg(long, default_value = "")]
        description: String,
        /// Custom task impact: reduction, shift or generation
        #[arg(long, default_value = "")]
        impact_type: String,
        /// Custom task impact in kWh
        #[arg(long, default_value = "")]
        impact_value: String,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: DayAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DayAction::Show {
            date,
            toggles,
            add_task,
            time,
            description,
            impact_type,
            impact_value,
            json,
        } => {
            let date = parse_day(&date)?;
            let mut cache = MonthCache::new();
            let mut view = new_view(config, date);
            let snapshot = view.snapshot(&mut cache);

            if let Some(title) = add_task {
                view.form = TaskForm {
                    title,
                    time,
                    description,
                    impact_type,
                    impact_value,
                };
                let task = view.submit_task(date)?;
                eprintln!("Task added: {}", task.id);
            }

            for id in &toggles {
                let status = view.toggle_task_by_id(&snapshot, id)?;
                eprintln!("Task {id}: {status}");
            }

            let breakdown = view
                .day_breakdown(&snapshot)
                .ok_or_else(|| format!("no data for {date}"))?;

            if wants_json(json, config) {
                println!("{}", serde_json::to_string_pretty(&breakdown)?);
            } else {
                print_breakdown(&breakdown, config);
            }
        }
    }
    Ok(())
}

fn print_breakdown(breakdown: &DayBreakdown<'_>, config: &Config) {
    let day = breakdown.day;
    println!("\n{} ({})", breakdown.label, breakdown.weekday);
    println!("{}", "─".repeat(50));
    println!(
        "  Usage:     {:.1} kWh (baseline {:.1})",
        day.usage_kwh, day.baseline_usage_kwh
    );
    println!("  Solar:     {:.1} kWh", day.solar_generation_kwh);
    println!(
        "  Peak/off:  {:.1} / {:.1} kWh",
        day.peak_usage_kwh, day.off_peak_usage_kwh
    );
    println!("  Carbon:    {:.1} kg", day.carbon_kg);
    println!("  Cost:      ${:.2}", day.cost_usd);

    if config.display.show_insights {
        println!("\nInsights:");
        for insight in breakdown.insights {
            println!(
                "  {:<14} {:>5}  {}",
                insight.label,
                percent(insight.change),
                insight.description
            );
        }
    }

    println!("\nTasks:");
    if breakdown.tasks.is_empty() {
        println!("  (none)");
    }
    for entry in &breakdown.tasks {
        let mark = match entry.status {
            TaskStatus::Planned => "[ ]",
            TaskStatus::Completed => "[x]",
        };
        let origin = match entry.origin {
            TaskOrigin::Generated => "",
            TaskOrigin::Custom => " (custom)",
        };
        println!(
            "  {} {}  {}{}  {}  id={}",
            mark, entry.task.time, entry.task.title, origin, entry.task.impact, entry.task.id
        );
    }

    if config.display.show_events && !breakdown.events.is_empty() {
        println!("\nDemand response:");
        for event in &breakdown.events {
            println!("  {}  [{}]  {}", event.window, event.priority, event.incentive);
            println!("      {}", event.recommendation);
        }
    }
}
