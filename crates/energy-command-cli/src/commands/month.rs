//! Month calendar commands.

use clap::Subcommand;

use energy_command_core::view::render_month_grid;
use energy_command_core::{format_short_date, Config, MonthCache, MonthEnergySnapshot};

use super::{new_view, resolve_month, today, wants_json};

#[derive(Subcommand)]
pub enum MonthAction {
    /// Show the calendar grid, totals and weekly averages
    Show {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<String>,
        /// Print the full snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// List demand response events
    Events {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show the static recommendations
    Recommendations {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },
}

pub fn run(action: MonthAction, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut cache = MonthCache::new();

    match action {
        MonthAction::Show { month, json } => {
            let key = resolve_month(month.as_deref())?;
            let snapshot = cache.get_or_generate(key);
            if wants_json(json, config) {
                println!("{}", serde_json::to_string_pretty(&*snapshot)?);
                return Ok(());
            }

            // Keep today selected when it falls in the requested month.
            let now = today();
            let selected = snapshot.day(now).map(|_| now).unwrap_or(key.first_day());
            let view = new_view(config, selected);
            println!("{}", render_month_grid(&snapshot, &view));
            print_totals(&snapshot);
            if config.display.show_events {
                print_events(&snapshot);
            }
        }
        MonthAction::Events { month, json } => {
            let key = resolve_month(month.as_deref())?;
            let snapshot = cache.get_or_generate(key);
            if wants_json(json, config) {
                println!("{}", serde_json::to_string_pretty(&snapshot.demand_events)?);
            } else {
                print_events(&snapshot);
            }
        }
        MonthAction::Recommendations { month } => {
            let key = resolve_month(month.as_deref())?;
            let snapshot = cache.get_or_generate(key);
            println!("\nRecommendations for {}\n", snapshot.label);
            for (i, rec) in snapshot.recommendations.iter().enumerate() {
                println!("  {}. {}", i + 1, rec);
            }
        }
    }
    Ok(())
}

fn print_totals(snapshot: &MonthEnergySnapshot) {
    let t = &snapshot.totals;
    println!("\nTotals:");
    println!(
        "  Usage:          {:.1} kWh (target {:.1}, baseline {:.1})",
        t.usage_kwh, t.target_kwh, t.baseline_kwh
    );
    println!("  Solar:          {:.1} kWh", t.solar_kwh);
    println!("  Net grid draw:  {:.1} kWh", t.net_grid_kwh);
    println!("  Carbon:         {:.1} kg", t.carbon_kg);
    println!("  Cost:           ${:.2}", t.cost_usd);

    if t.usage_kwh <= t.target_kwh {
        println!("  On track: usage is under the monthly target.");
    }

    println!("\nWeekly average usage (kWh/day):");
    for (i, avg) in snapshot.weekly_averages.iter().enumerate() {
        println!("  Week {}: {:.1}", i + 1, avg);
    }
}

fn print_events(snapshot: &MonthEnergySnapshot) {
    println!("\nDemand response events ({}):", snapshot.label);
    for event in &snapshot.demand_events {
        println!(
            "  {}  {}  [{}]  {}",
            format_short_date(&event.date),
            event.window,
            event.priority,
            event.incentive
        );
        println!("      {}", event.recommendation);
    }
}
