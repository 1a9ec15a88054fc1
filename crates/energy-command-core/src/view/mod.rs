//! Session-local calendar view state.
//!
//! Generated snapshots are shared and immutable. Everything the user changes
//! during a session (selection, custom tasks, completion flags) lives here in
//! separate overlay maps and is merged with snapshot data only when read.

mod form;
mod render;

pub use form::{TaskDefaults, TaskForm};
pub use render::render_month_grid;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::cache::MonthCache;
use crate::calendar::{adjacent_month, format_short_date, format_weekday};
use crate::energy::{
    DemandResponseEvent, EnergyDay, EnergyInsight, EnergyTask, MonthEnergySnapshot, TaskStatus,
};
use crate::error::ValidationError;

/// Where a task came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskOrigin {
    Generated,
    Custom,
}

/// A task as displayed: the underlying task plus its effective status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskEntry {
    pub date: NaiveDate,
    pub task: EnergyTask,
    pub status: TaskStatus,
    pub origin: TaskOrigin,
}

/// Planned/completed counts across a set of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompletionSummary {
    pub planned: usize,
    pub completed: usize,
}

impl CompletionSummary {
    pub fn total(&self) -> usize {
        self.planned + self.completed
    }
}

/// Side panel content for one day.
#[derive(Debug, Clone, Serialize)]
pub struct DayBreakdown<'a> {
    pub label: String,
    pub weekday: String,
    pub day: &'a EnergyDay,
    pub insights: &'a [EnergyInsight],
    pub tasks: Vec<TaskEntry>,
    pub events: Vec<&'a DemandResponseEvent>,
}

/// UI state for the calendar dashboard.
#[derive(Debug, Clone)]
pub struct CalendarViewState {
    active_month: NaiveDate,
    selected_day: NaiveDate,
    custom_tasks: BTreeMap<NaiveDate, Vec<EnergyTask>>,
    status_overrides: HashMap<String, TaskStatus>,
    defaults: TaskDefaults,
    /// Pending custom task input
    pub form: TaskForm,
}

impl CalendarViewState {
    /// Start on `today`'s month with `today` selected.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            active_month: today.with_day(1).unwrap_or(today),
            selected_day: today,
            custom_tasks: BTreeMap::new(),
            status_overrides: HashMap::new(),
            defaults: TaskDefaults::default(),
            form: TaskForm::default(),
        }
    }

    /// Replace the fallbacks used by [`submit_task`](Self::submit_task).
    pub fn with_task_defaults(mut self, defaults: TaskDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// First day of the month being shown.
    pub fn active_month(&self) -> NaiveDate {
        self.active_month
    }

    pub fn selected_day(&self) -> NaiveDate {
        self.selected_day
    }

    /// Snapshot of the active month.
    pub fn snapshot(&self, cache: &mut MonthCache) -> Arc<MonthEnergySnapshot> {
        cache.snapshot_for(self.active_month)
    }

    /// Move `offset` months and select the first day of the new month.
    pub fn navigate(&mut self, offset: i32) -> Result<NaiveDate, ValidationError> {
        let target = adjacent_month(self.active_month, offset).ok_or_else(|| {
            ValidationError::InvalidValue {
                field: "offset".to_string(),
                message: format!("moving {offset} months leaves the supported calendar"),
            }
        })?;
        self.active_month = target;
        self.selected_day = target;
        Ok(target)
    }

    /// Select `date`, switching the active month if needed.
    pub fn select_day(&mut self, date: NaiveDate) {
        self.active_month = date.with_day(1).unwrap_or(date);
        self.selected_day = date;
    }

    /// Overlay status if one was set, otherwise the task's own status.
    pub fn effective_status(&self, task: &EnergyTask) -> TaskStatus {
        self.status_overrides
            .get(&task.id)
            .copied()
            .unwrap_or(task.status)
    }

    /// Flip planned/completed for `task` in the overlay.
    pub fn toggle_task_status(&mut self, task: &EnergyTask) -> TaskStatus {
        let next = self.effective_status(task).toggled();
        if next == task.status {
            self.status_overrides.remove(&task.id);
        } else {
            self.status_overrides.insert(task.id.clone(), next);
        }
        debug!(task = %task.id, status = %next, "toggled task status");
        next
    }

    /// Toggle a task found by id among `snapshot` and the custom tasks.
    ///
    /// Generated ids such as `18-preset-0` repeat every month, so the
    /// override applies wherever that id is shown.
    pub fn toggle_task_by_id(
        &mut self,
        snapshot: &MonthEnergySnapshot,
        id: &str,
    ) -> Result<TaskStatus, ValidationError> {
        let task = snapshot
            .days
            .iter()
            .flat_map(|d| d.tasks.iter())
            .chain(self.custom_tasks.values().flatten())
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ValidationError::UnknownTask(id.to_string()))?;
        Ok(self.toggle_task_status(&task))
    }

    /// Validate the form and append the task to `date`.
    ///
    /// The form is cleared only on success.
    pub fn submit_task(&mut self, date: NaiveDate) -> Result<EnergyTask, ValidationError> {
        let id = format!("custom-{}", Uuid::new_v4());
        let task = self.form.to_task(id, &self.defaults)?;
        debug!(task = %task.id, %date, "added custom task");
        self.custom_tasks.entry(date).or_default().push(task.clone());
        self.form = TaskForm::default();
        Ok(task)
    }

    /// Custom tasks added on `date`.
    pub fn custom_tasks_on(&self, date: NaiveDate) -> &[EnergyTask] {
        self.custom_tasks
            .get(&date)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Generated tasks followed by custom tasks, with effective statuses.
    pub fn tasks_for_day(&self, day: &EnergyDay) -> Vec<TaskEntry> {
        let date = day.date.date();
        let generated = day.tasks.iter().map(|t| (t, TaskOrigin::Generated));
        let custom = self
            .custom_tasks_on(date)
            .iter()
            .map(|t| (t, TaskOrigin::Custom));

        generated
            .chain(custom)
            .map(|(task, origin)| TaskEntry {
                date,
                task: task.clone(),
                status: self.effective_status(task),
                origin,
            })
            .collect()
    }

    /// Breakdown of the selected day, if it belongs to `snapshot`.
    pub fn day_breakdown<'a>(&self, snapshot: &'a MonthEnergySnapshot) -> Option<DayBreakdown<'a>> {
        let day = snapshot.day(self.selected_day)?;
        Some(DayBreakdown {
            label: format_short_date(&day.date),
            weekday: format_weekday(&day.date),
            day,
            insights: &day.insights,
            tasks: self.tasks_for_day(day),
            events: snapshot.events_on(self.selected_day).collect(),
        })
    }

    /// Every task of the month in day order.
    pub fn action_log(&self, snapshot: &MonthEnergySnapshot) -> Vec<TaskEntry> {
        snapshot
            .days
            .iter()
            .flat_map(|day| self.tasks_for_day(day))
            .collect()
    }

    pub fn completion_summary(&self, snapshot: &MonthEnergySnapshot) -> CompletionSummary {
        self.action_log(snapshot)
            .iter()
            .fold(CompletionSummary::default(), |mut acc, entry| {
                match entry.status {
                    TaskStatus::Planned => acc.planned += 1,
                    TaskStatus::Completed => acc.completed += 1,
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_selects_today_in_its_month() {
        let view = CalendarViewState::new(date(2024, 2, 17));
        assert_eq!(view.active_month(), date(2024, 2, 1));
        assert_eq!(view.selected_day(), date(2024, 2, 17));
    }

    #[test]
    fn navigate_selects_first_of_new_month() {
        let mut view = CalendarViewState::new(date(2024, 12, 20));
        assert_eq!(view.navigate(1).unwrap(), date(2025, 1, 1));
        assert_eq!(view.selected_day(), date(2025, 1, 1));
        view.navigate(-2).unwrap();
        assert_eq!(view.active_month(), date(2024, 11, 1));
    }

    #[test]
    fn select_day_switches_month() {
        let mut view = CalendarViewState::new(date(2024, 2, 17));
        view.select_day(date(2024, 3, 5));
        assert_eq!(view.active_month(), date(2024, 3, 1));
    }

    #[test]
    fn toggle_overlays_without_touching_snapshot() {
        let mut cache = MonthCache::new();
        let mut view = CalendarViewState::new(date(2024, 2, 1));
        let snapshot = view.snapshot(&mut cache);
        let task = snapshot.days[1].tasks[0].clone();

        assert_eq!(view.toggle_task_status(&task), TaskStatus::Completed);
        assert_eq!(view.effective_status(&task), TaskStatus::Completed);
        assert_eq!(snapshot.days[1].tasks[0].status, TaskStatus::Planned);

        assert_eq!(view.toggle_task_status(&task), TaskStatus::Planned);
        assert!(view.status_overrides.is_empty());
    }

    #[test]
    fn toggle_by_unknown_id_fails() {
        let mut cache = MonthCache::new();
        let mut view = CalendarViewState::new(date(2024, 2, 1));
        let snapshot = view.snapshot(&mut cache);
        assert_eq!(
            view.toggle_task_by_id(&snapshot, "nope"),
            Err(ValidationError::UnknownTask("nope".into()))
        );
    }

    #[test]
    fn submit_keeps_form_on_error_and_clears_on_success() {
        let mut view = CalendarViewState::new(date(2024, 2, 1));
        view.form = TaskForm::titled("");
        assert!(view.submit_task(date(2024, 2, 3)).is_err());
        assert!(view.custom_tasks_on(date(2024, 2, 3)).is_empty());

        view.form = TaskForm::titled("Check attic insulation");
        let task = view.submit_task(date(2024, 2, 3)).unwrap();
        assert!(task.id.starts_with("custom-"));
        assert_eq!(view.form, TaskForm::default());
        assert_eq!(view.custom_tasks_on(date(2024, 2, 3)), [task]);
    }

    #[test]
    fn custom_tasks_follow_generated_ones() {
        let mut cache = MonthCache::new();
        let mut view = CalendarViewState::new(date(2024, 2, 18));
        view.form = TaskForm::titled("Extra");
        view.submit_task(date(2024, 2, 18)).unwrap();

        let snapshot = view.snapshot(&mut cache);
        let entries = view.tasks_for_day(&snapshot.days[17]);
        let origins: Vec<_> = entries.iter().map(|e| e.origin).collect();
        assert_eq!(
            origins,
            [TaskOrigin::Generated, TaskOrigin::Generated, TaskOrigin::Custom]
        );
        assert_eq!(snapshot.days[17].tasks.len(), 2);
    }

    #[test]
    fn completion_summary_counts_overlays() {
        let mut cache = MonthCache::new();
        let mut view = CalendarViewState::new(date(2024, 2, 1));
        let snapshot = view.snapshot(&mut cache);
        let before = view.completion_summary(&snapshot);
        assert_eq!(before.completed, 0);

        view.toggle_task_by_id(&snapshot, "18-preset-1").unwrap();
        let after = view.completion_summary(&snapshot);
        assert_eq!(after.completed, 1);
        assert_eq!(after.total(), before.total());
    }

    #[test]
    fn day_breakdown_requires_selected_day_in_snapshot() {
        let mut cache = MonthCache::new();
        let view = CalendarViewState::new(date(2024, 2, 2));
        let other = cache.snapshot_for(date(2024, 5, 1));
        assert!(view.day_breakdown(&other).is_none());

        let snapshot = view.snapshot(&mut cache);
        let breakdown = view.day_breakdown(&snapshot).unwrap();
        assert_eq!(breakdown.label, "Feb 2");
        assert_eq!(breakdown.weekday, "Friday");
        assert_eq!(breakdown.tasks[0].task.title, "Optimize thermostat schedule");
        assert_eq!(breakdown.insights[0].label, "HVAC runtime");
    }
}
