//! Integration tests for the calendar view state over cached snapshots.

use std::sync::Arc;

use chrono::NaiveDate;
use energy_command_core::view::{render_month_grid, TaskDefaults};
use energy_command_core::{
    CalendarViewState, MonthCache, TaskForm, TaskImpact, TaskOrigin, TaskStatus, ValidationError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_session_workflow() {
    let mut cache = MonthCache::new();
    let mut view = CalendarViewState::new(date(2024, 2, 10));

    // Complete a preset task and add a custom one on the 18th.
    view.select_day(date(2024, 2, 18));
    let snapshot = view.snapshot(&mut cache);
    view.toggle_task_by_id(&snapshot, "18-preset-0").unwrap();

    view.form = TaskForm {
        title: "Check battery state of charge".into(),
        time: "16:00".into(),
        description: String::new(),
        impact_type: "shift".into(),
        impact_value: "3".into(),
    };
    let custom = view.submit_task(date(2024, 2, 18)).unwrap();

    let breakdown = view.day_breakdown(&snapshot).unwrap();
    let statuses: Vec<_> = breakdown.tasks.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        [TaskStatus::Completed, TaskStatus::Planned, TaskStatus::Planned]
    );
    assert_eq!(breakdown.tasks[2].task, custom);
    assert_eq!(breakdown.tasks[2].origin, TaskOrigin::Custom);
    assert_eq!(custom.impact, TaskImpact::Shift(3.0));

    // The cached snapshot is untouched by the session.
    let again = cache.snapshot_for(date(2024, 2, 1));
    assert!(Arc::ptr_eq(&snapshot, &again));
    assert_eq!(again.days[17].tasks.len(), 2);
    assert!(again.days[17]
        .tasks
        .iter()
        .all(|t| t.status == TaskStatus::Planned));
}

#[test]
fn test_custom_task_can_be_toggled() {
    let mut cache = MonthCache::new();
    let mut view = CalendarViewState::new(date(2024, 6, 3));
    view.form = TaskForm::titled("Close blinds at noon");
    let task = view.submit_task(date(2024, 6, 3)).unwrap();

    let snapshot = view.snapshot(&mut cache);
    assert_eq!(
        view.toggle_task_by_id(&snapshot, &task.id).unwrap(),
        TaskStatus::Completed
    );
    let log = view.action_log(&snapshot);
    let entry = log.iter().find(|e| e.task.id == task.id).unwrap();
    assert_eq!(entry.status, TaskStatus::Completed);
}

#[test]
fn test_action_log_is_in_day_order() {
    let mut cache = MonthCache::new();
    let mut view = CalendarViewState::new(date(2024, 1, 1));
    view.form = TaskForm::titled("Late task");
    view.submit_task(date(2024, 1, 30)).unwrap();
    view.form = TaskForm::titled("Early task");
    view.submit_task(date(2024, 1, 1)).unwrap();

    let snapshot = view.snapshot(&mut cache);
    let log = view.action_log(&snapshot);
    assert!(log.windows(2).all(|w| w[0].date <= w[1].date));
    assert_eq!(log.first().unwrap().task.title, "Early task");
    assert_eq!(log.last().unwrap().task.title, "Late task");
}

#[test]
fn test_form_validation_and_defaults() {
    let mut view = CalendarViewState::new(date(2024, 2, 1)).with_task_defaults(TaskDefaults {
        default_time: "20:00".into(),
        default_impact_value: 1.0,
    });

    view.form = TaskForm::titled("");
    assert_eq!(
        view.submit_task(date(2024, 2, 1)),
        Err(ValidationError::EmptyTitle)
    );

    view.form = TaskForm {
        impact_value: "not a number".into(),
        ..TaskForm::titled("Unplug spare fridge")
    };
    let task = view.submit_task(date(2024, 2, 1)).unwrap();
    assert_eq!(task.time, "20:00");
    assert_eq!(task.impact, TaskImpact::Reduction(1.0));
}

#[test]
fn test_navigation_across_year_boundary() {
    let mut cache = MonthCache::new();
    let mut view = CalendarViewState::new(date(2024, 12, 31));
    view.navigate(1).unwrap();

    let snapshot = view.snapshot(&mut cache);
    assert_eq!(snapshot.label, "January 2025");
    assert_eq!(view.day_breakdown(&snapshot).unwrap().weekday, "Wednesday");

    view.navigate(-1).unwrap();
    assert_eq!(view.snapshot(&mut cache).label, "December 2024");
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_overlays_survive_month_navigation() {
    let mut cache = MonthCache::new();
    let mut view = CalendarViewState::new(date(2024, 3, 1));
    let march = view.snapshot(&mut cache);
    view.toggle_task_by_id(&march, "12-preset-0").unwrap();

    view.navigate(1).unwrap();
    view.navigate(-1).unwrap();
    let march_again = view.snapshot(&mut cache);
    assert_eq!(view.completion_summary(&march_again).completed, 1);
}

#[test]
fn test_render_grid_marks_events() {
    let mut cache = MonthCache::new();
    let view = CalendarViewState::new(date(2024, 2, 1));
    let snapshot = view.snapshot(&mut cache);
    let grid = render_month_grid(&snapshot, &view);

    let mut event_days: Vec<_> = snapshot.demand_events.iter().map(|e| e.date.date()).collect();
    event_days.dedup();
    // One marker per event day plus the legend.
    assert_eq!(grid.matches('!').count(), event_days.len() + 1);
}
