//! Month synthesizer.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveTime};
use tracing::debug;

use super::demand::derive_demand_events;
use super::insights::derive_insights;
use super::model::{EnergyDay, MonthEnergySnapshot, MonthKey, MonthTotals};
use super::tasks::derive_tasks;
use super::{round1, round2};
use crate::calendar::{days_in_month, month_label};
use crate::sequence::SeededSequence;

/// Static recommendations attached to every month.
pub const RECOMMENDATIONS: [&str; 4] = [
    "Shift dishwasher and laundry cycles after 21:00 to stay in the off-peak tariff.",
    "Pre-cool the house before 15:00 on hot days and coast through the peak window.",
    "Charge the home battery from midday solar and discharge it during demand response events.",
    "Audit standby loads monthly; idle electronics add up to a few kWh per day.",
];

const BASELINE_MEAN_KWH: f64 = 26.0;
const BASELINE_SWING_KWH: f64 = 8.0;
const USAGE_NOISE_KWH: f64 = 3.0;
const SOLAR_MEAN_KWH: f64 = 10.0;
const SOLAR_SWING_KWH: f64 = 4.0;
const SOLAR_JITTER_KWH: f64 = 3.0;
const SOLAR_FLOOR_KWH: f64 = 2.5;
const ENERGY_RATE: f64 = 0.14;
const PEAK_SURCHARGE: f64 = 0.08;
const CARBON_INTENSITY: f64 = 0.42;
const SOLAR_OFFSET: f64 = 0.6;
const CARBON_FLOOR_KG: f64 = 3.5;
const TARGET_RATIO: f64 = 0.95;
const WEEK_LEN: usize = 7;

/// Seed for a month's sequence.
pub fn month_seed(key: MonthKey) -> i64 {
    i64::from(key.year()) * 97 + i64::from(key.month0()) * 31 + 2024
}

/// Build one day's metrics. Consumes four draws.
fn synthesize_metrics(key: MonthKey, day: u32, days: u32, seq: &mut SeededSequence) -> EnergyDay {
    let phase = f64::from(day) / f64::from(days);

    let modifier = 0.9 + seq.next_value() * 0.2;
    let baseline_raw = BASELINE_MEAN_KWH + (PI * phase).sin() * BASELINE_SWING_KWH;
    let usage = round1(baseline_raw * modifier + (seq.next_value() - 0.5) * USAGE_NOISE_KWH);
    let solar = round1(
        (SOLAR_MEAN_KWH + (2.0 * PI * phase).cos() * SOLAR_SWING_KWH + seq.next_value() * SOLAR_JITTER_KWH)
            .max(SOLAR_FLOOR_KWH),
    );
    let peak_share = 0.42 + seq.next_value() * 0.08;
    let peak = round1(usage * peak_share);
    let off_peak = round1((usage - peak).max(0.0));
    let cost = round2(usage * ENERGY_RATE + peak * PEAK_SURCHARGE);
    let carbon = round1(((usage - solar * SOLAR_OFFSET) * CARBON_INTENSITY).max(CARBON_FLOOR_KG));

    let date = key
        .first_day()
        .with_day(day)
        .unwrap_or_else(|| key.first_day())
        .and_time(NaiveTime::MIN);

    EnergyDay {
        date,
        usage_kwh: usage,
        solar_generation_kwh: solar,
        peak_usage_kwh: peak,
        off_peak_usage_kwh: off_peak,
        carbon_kg: carbon,
        cost_usd: cost,
        baseline_usage_kwh: round1(baseline_raw),
        insights: Vec::new(),
        tasks: Vec::new(),
    }
}

fn month_totals(days: &[EnergyDay]) -> MonthTotals {
    let sum = |f: fn(&EnergyDay) -> f64| days.iter().map(f).sum::<f64>();

    let usage = round1(sum(|d| d.usage_kwh));
    let solar = round1(sum(|d| d.solar_generation_kwh));
    let baseline = round1(sum(|d| d.baseline_usage_kwh));

    MonthTotals {
        usage_kwh: usage,
        solar_kwh: solar,
        net_grid_kwh: round1(usage - solar),
        carbon_kg: round1(sum(|d| d.carbon_kg)),
        baseline_kwh: baseline,
        cost_usd: round2(sum(|d| d.cost_usd)),
        target_kwh: baseline * TARGET_RATIO,
    }
}

fn weekly_averages(days: &[EnergyDay]) -> Vec<f64> {
    days.chunks(WEEK_LEN)
        .map(|week| round1(week.iter().map(|d| d.usage_kwh).sum::<f64>() / week.len() as f64))
        .collect()
}

/// Generate the snapshot for `key` without consulting any cache.
///
/// Draw order per day is metrics, tasks, insights; demand events draw last.
pub fn synthesize_month(key: MonthKey) -> MonthEnergySnapshot {
    let mut seq = SeededSequence::new(month_seed(key));
    let days_count = days_in_month(key);

    let days: Vec<EnergyDay> = (1..=days_count)
        .map(|day| {
            let mut energy_day = synthesize_metrics(key, day, days_count, &mut seq);
            energy_day.tasks = derive_tasks(day, &mut seq);
            energy_day.insights = derive_insights(&energy_day, &mut seq);
            energy_day
        })
        .collect();

    let totals = month_totals(&days);
    let weekly_averages = weekly_averages(&days);
    let demand_events = derive_demand_events(key, days_count, &mut seq);

    debug!(
        month = %key,
        days = days_count,
        events = demand_events.len(),
        usage_kwh = totals.usage_kwh,
        "synthesized month"
    );

    MonthEnergySnapshot {
        key,
        month_start: key.first_day().and_time(NaiveTime::MIN),
        label: month_label(key),
        days,
        totals,
        demand_events,
        recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
        weekly_averages,
    }
}
