//! Month snapshot data model.
//!
//! Every value here is produced once by the synthesizer and never mutated.
//! Session edits live in [`crate::view`].

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Identifies a (year, zero-based month) pair.
///
/// Holds the first day of the month, so every key names a real month.
/// Serializes as `{"year": .., "month0": ..}` and deserializes through
/// [`MonthKey::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "RawMonthKey", try_from = "RawMonthKey")]
pub struct MonthKey {
    first: NaiveDate,
}

#[derive(Serialize, Deserialize)]
struct RawMonthKey {
    year: i32,
    month0: u32,
}

impl TryFrom<RawMonthKey> for MonthKey {
    type Error = ValidationError;

    fn try_from(raw: RawMonthKey) -> Result<Self, Self::Error> {
        MonthKey::new(raw.year, raw.month0)
    }
}

impl From<MonthKey> for RawMonthKey {
    fn from(key: MonthKey) -> Self {
        Self {
            year: key.year(),
            month0: key.month0(),
        }
    }
}

impl MonthKey {
    /// Create a key, rejecting month indices outside `0..=11` and years
    /// chrono cannot represent.
    pub fn new(year: i32, month0: u32) -> Result<Self, ValidationError> {
        if month0 > 11 {
            return Err(ValidationError::MonthOutOfRange { month0 });
        }
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .ok_or(ValidationError::YearOutOfRange(year))?;
        Ok(Self { first })
    }

    /// Key of the month enclosing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Zero-based month index (January = 0).
    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month0() + 1)
    }
}

/// Whether a task is still pending or done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Planned,
    Completed,
}

impl TaskStatus {
    /// The other status.
    pub fn toggled(self) -> Self {
        match self {
            TaskStatus::Planned => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Planned,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Planned => f.pad("planned"),
            TaskStatus::Completed => f.pad("completed"),
        }
    }
}

/// Expected effect of a task, in kWh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TaskImpact {
    /// Consumption avoided
    Reduction(f64),
    /// Consumption moved out of the peak window
    Shift(f64),
    /// Extra on-site generation
    Generation(f64),
}

impl TaskImpact {
    pub fn value(&self) -> f64 {
        match *self {
            TaskImpact::Reduction(v) | TaskImpact::Shift(v) | TaskImpact::Generation(v) => v,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TaskImpact::Reduction(_) => "reduction",
            TaskImpact::Shift(_) => "shift",
            TaskImpact::Generation(_) => "generation",
        }
    }

    /// Build an impact from its kind name.
    pub fn from_kind(kind: &str, value: f64) -> Result<Self, ValidationError> {
        match kind.trim().to_lowercase().as_str() {
            "reduction" => Ok(TaskImpact::Reduction(value)),
            "shift" => Ok(TaskImpact::Shift(value)),
            "generation" => Ok(TaskImpact::Generation(value)),
            other => Err(ValidationError::UnknownImpactType(other.to_string())),
        }
    }
}

impl fmt::Display for TaskImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskImpact::Reduction(v) => write!(f, "-{v:.1} kWh"),
            TaskImpact::Shift(v) => write!(f, "{v:.1} kWh shifted"),
            TaskImpact::Generation(v) => write!(f, "+{v:.1} kWh solar"),
        }
    }
}

/// An actionable recommendation attached to a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyTask {
    pub id: String,
    pub title: String,
    /// Time of day, `HH:MM`
    pub time: String,
    pub description: String,
    pub impact: TaskImpact,
    pub status: TaskStatus,
}

/// Observation derived from a day's own metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyInsight {
    pub label: String,
    /// Relative change against the insight's reference value
    pub change: f64,
    pub description: String,
}

/// One calendar day of metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyDay {
    /// Local midnight
    pub date: NaiveDateTime,
    pub usage_kwh: f64,
    pub solar_generation_kwh: f64,
    pub peak_usage_kwh: f64,
    pub off_peak_usage_kwh: f64,
    pub carbon_kg: f64,
    pub cost_usd: f64,
    pub baseline_usage_kwh: f64,
    pub insights: Vec<EnergyInsight>,
    pub tasks: Vec<EnergyTask>,
}

impl EnergyDay {
    /// Day of month, 1-based.
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    /// Usage minus solar for this day.
    pub fn net_grid_kwh(&self) -> f64 {
        self.usage_kwh - self.solar_generation_kwh
    }
}

/// Priority tier of a demand response event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventPriority {
    Low,
    Medium,
    High,
}

impl fmt::Display for EventPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventPriority::Low => f.pad("low"),
            EventPriority::Medium => f.pad("medium"),
            EventPriority::High => f.pad("high"),
        }
    }
}

/// Scheduled grid curtailment window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandResponseEvent {
    pub id: String,
    /// Start of the window
    pub date: NaiveDateTime,
    /// e.g. `"16:00 - 18:00"`
    pub window: String,
    pub priority: EventPriority,
    pub incentive: String,
    pub recommendation: String,
}

/// Month-level aggregates, each summed from rounded daily values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthTotals {
    pub usage_kwh: f64,
    pub solar_kwh: f64,
    pub net_grid_kwh: f64,
    pub carbon_kg: f64,
    pub baseline_kwh: f64,
    pub cost_usd: f64,
    /// Baseline reduced by five percent
    pub target_kwh: f64,
}

/// Complete generated data for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthEnergySnapshot {
    pub key: MonthKey,
    pub month_start: NaiveDateTime,
    pub label: String,
    pub days: Vec<EnergyDay>,
    pub totals: MonthTotals,
    pub demand_events: Vec<DemandResponseEvent>,
    pub recommendations: Vec<String>,
    pub weekly_averages: Vec<f64>,
}

impl MonthEnergySnapshot {
    /// Day entry for `date`, if it falls in this month.
    pub fn day(&self, date: NaiveDate) -> Option<&EnergyDay> {
        if MonthKey::from_date(date) != self.key {
            return None;
        }
        self.days.get(date.day0() as usize)
    }

    /// Demand events scheduled on `date`.
    pub fn events_on(&self, date: NaiveDate) -> impl Iterator<Item = &DemandResponseEvent> {
        self.demand_events
            .iter()
            .filter(move |e| e.date.date() == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_rejects_out_of_range_month() {
        assert_eq!(
            MonthKey::new(2024, 12),
            Err(ValidationError::MonthOutOfRange { month0: 12 })
        );
        assert!(MonthKey::new(2024, 11).is_ok());
    }

    #[test]
    fn month_key_rejects_unrepresentable_year() {
        assert_eq!(
            MonthKey::new(i32::MAX, 0),
            Err(ValidationError::YearOutOfRange(i32::MAX))
        );
    }

    #[test]
    fn month_key_display_is_one_based() {
        let key = MonthKey::new(2024, 1).unwrap();
        assert_eq!(key.to_string(), "2024-02");
        assert_eq!(key.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn month_key_from_date() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let key = MonthKey::from_date(date);
        assert_eq!(key.year(), 2023);
        assert_eq!(key.month0(), 11);
    }

    #[test]
    fn month_key_from_date_is_first_of_month() {
        let key = MonthKey::from_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(key, MonthKey::new(2024, 1).unwrap());
        assert_eq!(key.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn month_key_serializes_as_year_and_month0() {
        let json = serde_json::to_value(MonthKey::new(2024, 1).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"year": 2024, "month0": 1}));
        let back: MonthKey = serde_json::from_value(json).unwrap();
        assert_eq!(back, MonthKey::new(2024, 1).unwrap());
    }

    #[test]
    fn month_key_deserialize_rejects_out_of_range_month() {
        let err = serde_json::from_str::<MonthKey>(r#"{"year":2024,"month0":12}"#).unwrap_err();
        assert!(err.to_string().contains("out of range"), "{err}");
        assert!(serde_json::from_str::<MonthKey>(r#"{"year":2147483647,"month0":0}"#).is_err());
    }

    #[test]
    fn task_status_toggles() {
        assert_eq!(TaskStatus::Planned.toggled(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.toggled(), TaskStatus::Planned);
    }

    #[test]
    fn task_impact_serializes_as_tagged_value() {
        let json = serde_json::to_value(TaskImpact::Shift(4.0)).unwrap();
        assert_eq!(json["type"], "shift");
        assert_eq!(json["value"], 4.0);
    }

    #[test]
    fn task_impact_from_kind() {
        assert_eq!(
            TaskImpact::from_kind("Generation", 2.0).unwrap(),
            TaskImpact::Generation(2.0)
        );
        assert!(matches!(
            TaskImpact::from_kind("magic", 1.0),
            Err(ValidationError::UnknownImpactType(_))
        ));
    }
}
