//! Preset and ad-hoc task derivation.

use super::model::{EnergyTask, TaskImpact, TaskStatus};
use super::round1;
use crate::sequence::SeededSequence;

/// Days of month that always carry a fixed task list.
pub const PRESET_DAYS: [u32; 5] = [2, 5, 12, 18, 24];

/// Draw above which a non-preset day gets an ad-hoc task.
const ADHOC_THRESHOLD: f64 = 0.8;

struct PresetTask {
    title: &'static str,
    time: &'static str,
    description: &'static str,
    impact: TaskImpact,
}

fn preset_tasks(day: u32) -> &'static [PresetTask] {
    const DAY_2: &[PresetTask] = &[PresetTask {
        title: "Optimize thermostat schedule",
        time: "06:30",
        description: "Pre-cool before the afternoon peak and relax the setpoint by two degrees during on-peak hours.",
        impact: TaskImpact::Reduction(3.2),
    }];
    const DAY_5: &[PresetTask] = &[PresetTask {
        title: "Move EV charging off-peak",
        time: "23:00",
        description: "Set the charger to start after 23:00 so the session lands in the overnight rate window.",
        impact: TaskImpact::Shift(8.5),
    }];
    const DAY_12: &[PresetTask] = &[PresetTask {
        title: "Clean solar array",
        time: "10:00",
        description: "Rinse dust and pollen off the panels to recover lost generation.",
        impact: TaskImpact::Generation(2.4),
    }];
    const DAY_18: &[PresetTask] = &[
        PresetTask {
            title: "Load tuning workshop",
            time: "14:00",
            description: "Review appliance schedules with the household and retire always-on loads.",
            impact: TaskImpact::Reduction(1.8),
        },
        PresetTask {
            title: "Battery discharge planning",
            time: "16:30",
            description: "Reserve battery capacity so it can discharge across the 17:00-20:00 peak.",
            impact: TaskImpact::Shift(4.0),
        },
    ];
    const DAY_24: &[PresetTask] = &[PresetTask {
        title: "Water heater timer check",
        time: "07:15",
        description: "Confirm the water heater only reheats during off-peak hours.",
        impact: TaskImpact::Shift(2.1),
    }];

    match day {
        2 => DAY_2,
        5 => DAY_5,
        12 => DAY_12,
        18 => DAY_18,
        24 => DAY_24,
        _ => &[],
    }
}

/// Whether `day` has a preset task list.
pub fn is_preset_day(day: u32) -> bool {
    PRESET_DAYS.contains(&day)
}

/// Tasks for a 1-based `day`.
///
/// Preset days consume no draws. Every other day consumes one draw for the
/// ad-hoc roll and a second one when the roll succeeds.
pub fn derive_tasks(day: u32, seq: &mut SeededSequence) -> Vec<EnergyTask> {
    if is_preset_day(day) {
        return preset_tasks(day)
            .iter()
            .enumerate()
            .map(|(index, preset)| EnergyTask {
                id: format!("{day}-preset-{index}"),
                title: preset.title.to_string(),
                time: preset.time.to_string(),
                description: preset.description.to_string(),
                impact: preset.impact,
                status: TaskStatus::Planned,
            })
            .collect();
    }

    if seq.next_value() > ADHOC_THRESHOLD {
        let impact = round1(1.2 + seq.next_value());
        return vec![EnergyTask {
            id: format!("{day}-adhoc"),
            title: "Inspect standby loads".to_string(),
            time: "19:00".to_string(),
            description: "Walk through the house and switch off idle chargers, consoles and set-top boxes."
                .to_string(),
            impact: TaskImpact::Reduction(impact),
            status: TaskStatus::Planned,
        }];
    }

    Vec::new()
}
