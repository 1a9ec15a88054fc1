//! # Energy Command Core Library
//!
//! This library provides the data layer for the Energy Command Center
//! dashboard: a deterministic month of synthetic household energy data,
//! rendered as a calendar with daily breakdowns, a task log, demand response
//! events and recommendations. Like its CLI, any front end is a thin layer
//! over the same core library.
//!
//! ## Architecture
//!
//! - **Sequence**: Park–Miller generator seeded from the month key
//! - **Energy**: Month synthesis (day metrics, tasks, insights, demand events)
//! - **Cache**: Injectable month cache; repeated requests share one snapshot
//! - **View**: Session-local overlays (selection, custom tasks, task status)
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`MonthCache`]: Snapshot memoization by [`MonthKey`]
//! - [`MonthEnergySnapshot`]: Immutable generated month
//! - [`CalendarViewState`]: UI state layered over snapshots
//! - [`Config`]: Application configuration management

pub mod cache;
pub mod calendar;
pub mod energy;
pub mod error;
pub mod sequence;
pub mod storage;
pub mod view;

pub use cache::MonthCache;
pub use calendar::{adjacent_month, format_short_date, format_weekday};
pub use energy::{
    DemandResponseEvent, EnergyDay, EnergyInsight, EnergyTask, EventPriority, MonthEnergySnapshot,
    MonthKey, MonthTotals, TaskImpact, TaskStatus,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use sequence::SeededSequence;
pub use storage::Config;
pub use view::{CalendarViewState, CompletionSummary, DayBreakdown, TaskEntry, TaskForm, TaskOrigin};
