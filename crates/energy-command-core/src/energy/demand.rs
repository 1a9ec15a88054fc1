//! Demand response event generation.

use chrono::Datelike;

use super::model::{DemandResponseEvent, EventPriority, MonthKey};
use crate::sequence::SeededSequence;

/// Window length in hours.
const WINDOW_HOURS: u32 = 2;

fn incentive(priority: EventPriority) -> &'static str {
    match priority {
        EventPriority::High => "$2.50 per kWh curtailed",
        EventPriority::Medium => "$1.25 per kWh curtailed",
        EventPriority::Low => "Bill credit for participation",
    }
}

fn recommendation(priority: EventPriority) -> &'static str {
    match priority {
        EventPriority::High => {
            "Pre-cool two hours ahead, discharge the battery and defer EV charging until the window closes."
        }
        EventPriority::Medium => "Raise the thermostat two degrees and pause the dishwasher and laundry.",
        EventPriority::Low => "Shift discretionary loads outside the window where convenient.",
    }
}

fn draw_priority(seq: &mut SeededSequence) -> EventPriority {
    if seq.next_value() > 0.65 {
        EventPriority::High
    } else if seq.next_value() > 0.35 {
        EventPriority::Medium
    } else {
        EventPriority::Low
    }
}

/// Two or three events for the month, sorted by start time.
///
/// Per event the draws are: day offset, priority (one or two draws), start
/// hour.
pub fn derive_demand_events(
    key: MonthKey,
    days_in_month: u32,
    seq: &mut SeededSequence,
) -> Vec<DemandResponseEvent> {
    let count = 2 + seq.next_index(2);
    let first = key.first_day();
    let span = days_in_month.saturating_sub(10);

    let mut events: Vec<DemandResponseEvent> = (0..count)
        .map(|index| {
            let day = 5 + seq.next_index(span);
            let priority = draw_priority(seq);
            let start_hour = 15 + seq.next_index(3);

            let date = first
                .with_day(day)
                .unwrap_or(first)
                .and_hms_opt(start_hour, 0, 0)
                .unwrap_or_default();

            DemandResponseEvent {
                id: format!("dr-{key}-{index}"),
                date,
                window: format!(
                    "{:02}:00 - {:02}:00",
                    start_hour,
                    start_hour + WINDOW_HOURS
                ),
                priority,
                incentive: incentive(priority).to_string(),
                recommendation: recommendation(priority).to_string(),
            }
        })
        .collect();

    // Vec::sort_by_key is stable.
    events.sort_by_key(|e| e.date);
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn produces_two_or_three_sorted_events() {
        for seed in 1..200 {
            let key = MonthKey::new(2024, 6).unwrap();
            let mut seq = SeededSequence::new(seed * 7_919);
            let events = derive_demand_events(key, 31, &mut seq);
            assert!((2..=3).contains(&events.len()));
            assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
        }
    }

    #[test]
    fn event_days_and_hours_stay_in_range() {
        let key = MonthKey::new(2023, 1).unwrap();
        for seed in 1..200 {
            let mut seq = SeededSequence::new(seed * 104_729);
            for event in derive_demand_events(key, 28, &mut seq) {
                let day = event.date.day();
                assert!((5..23).contains(&day), "day {day} out of range");
                assert!((15..=17).contains(&event.date.hour()));
                assert_eq!(event.date.month0(), 1);
            }
        }
    }

    #[test]
    fn window_is_two_hours() {
        let key = MonthKey::new(2024, 0).unwrap();
        let mut seq = SeededSequence::new(11);
        for event in derive_demand_events(key, 31, &mut seq) {
            let start = event.date.hour();
            assert_eq!(event.window, format!("{:02}:00 - {:02}:00", start, start + 2));
        }
    }

    #[test]
    fn text_follows_priority() {
        let key = MonthKey::new(2024, 0).unwrap();
        let mut seq = SeededSequence::new(5);
        for event in derive_demand_events(key, 31, &mut seq) {
            assert_eq!(event.incentive, incentive(event.priority));
            assert_eq!(event.recommendation, recommendation(event.priority));
        }
    }

    #[test]
    fn high_priority_consumes_a_single_draw() {
        let seed = (1..1_000_000)
            .find(|s| SeededSequence::new(*s).next_value() > 0.65)
            .unwrap();
        let mut seq = SeededSequence::new(seed);
        let mut expected = seq;
        expected.next_value();
        assert_eq!(draw_priority(&mut seq), EventPriority::High);
        assert_eq!(seq, expected);
    }

    #[test]
    fn lower_priorities_consume_a_second_draw() {
        let seed = (1..1_000)
            .find(|s| SeededSequence::new(*s).next_value() <= 0.65)
            .unwrap();
        let mut seq = SeededSequence::new(seed);
        let mut expected = seq;
        expected.next_value();
        let second = expected.next_value();

        let priority = draw_priority(&mut seq);
        assert_eq!(seq, expected);
        if second > 0.35 {
            assert_eq!(priority, EventPriority::Medium);
        } else {
            assert_eq!(priority, EventPriority::Low);
        }
    }

    #[test]
    fn medium_and_low_both_reachable() {
        let priority_for = |seed: i64| draw_priority(&mut SeededSequence::new(seed));
        let seeds = 1..1_000_000;
        assert!(seeds.clone().any(|s| priority_for(s) == EventPriority::Medium));
        assert!(seeds.clone().any(|s| priority_for(s) == EventPriority::Low));
        assert!(seeds.clone().any(|s| priority_for(s) == EventPriority::High));
    }
}
