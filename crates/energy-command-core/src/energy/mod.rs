//! Synthetic month generation.
//!
//! A month is built from one [`SeededSequence`](crate::sequence::SeededSequence)
//! whose seed depends only on the month key, so the same month always
//! produces the same snapshot.

mod demand;
mod insights;
mod model;
mod synth;
mod tasks;

pub use demand::derive_demand_events;
pub use insights::derive_insights;
pub use model::{
    DemandResponseEvent, EnergyDay, EnergyInsight, EnergyTask, EventPriority, MonthEnergySnapshot,
    MonthKey, MonthTotals, TaskImpact, TaskStatus,
};
pub use synth::{month_seed, synthesize_month, RECOMMENDATIONS};
pub use tasks::{derive_tasks, is_preset_day, PRESET_DAYS};

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
