//! Custom task form input and validation.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::energy::{EnergyTask, TaskImpact, TaskStatus};
use crate::error::ValidationError;

/// Fallbacks applied when a form field is left blank or is malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDefaults {
    #[serde(default = "default_time")]
    pub default_time: String,
    #[serde(default = "default_impact_value")]
    pub default_impact_value: f64,
}

fn default_time() -> String {
    "09:00".into()
}
fn default_impact_value() -> f64 {
    1.0
}

impl Default for TaskDefaults {
    fn default() -> Self {
        Self {
            default_time: default_time(),
            default_impact_value: default_impact_value(),
        }
    }
}

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskForm {
    pub title: String,
    /// `HH:MM`, blank for the default
    pub time: String,
    pub description: String,
    /// `reduction`, `shift` or `generation`; blank for reduction
    pub impact_type: String,
    /// Free text, coerced to the default when not a positive number
    pub impact_value: String,
}

impl TaskForm {
    /// Form with only a title filled in.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Validate the fields and build a planned task with the given id.
    ///
    /// The title is required. Time and impact type must be well formed if
    /// present. The impact value never fails.
    pub fn to_task(&self, id: String, defaults: &TaskDefaults) -> Result<EnergyTask, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let time = match self.time.trim() {
            "" => defaults.default_time.clone(),
            raw => NaiveTime::parse_from_str(raw, "%H:%M")
                .map_err(|_| ValidationError::InvalidTime(raw.to_string()))?
                .format("%H:%M")
                .to_string(),
        };

        let value = self
            .impact_value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(defaults.default_impact_value);

        let impact = match self.impact_type.trim() {
            "" => TaskImpact::Reduction(value),
            kind => TaskImpact::from_kind(kind, value)?,
        };

        Ok(EnergyTask {
            id,
            title: title.to_string(),
            time,
            description: self.description.trim().to_string(),
            impact,
            status: TaskStatus::Planned,
        })
    }
}
