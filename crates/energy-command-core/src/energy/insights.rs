//! Per-day insight derivation.

use super::model::{EnergyDay, EnergyInsight};
use super::round2;
use crate::sequence::SeededSequence;

const SOLAR_INSIGHT_MIN_KWH: f64 = 12.0;
const SOLAR_REFERENCE_KWH: f64 = 10.0;
const SOLAR_GATE: f64 = 0.3;
const PEAK_INSIGHT_MIN_KWH: f64 = 14.0;
const PEAK_REFERENCE_KWH: f64 = 12.0;

/// Insights for a finalized day, in display order: HVAC, solar, peak.
///
/// A draw is consumed only when the solar threshold is met.
pub fn derive_insights(day: &EnergyDay, seq: &mut SeededSequence) -> Vec<EnergyInsight> {
    let mut insights = Vec::with_capacity(3);

    let hvac_change = round2((day.usage_kwh - day.baseline_usage_kwh) / day.baseline_usage_kwh);
    let hvac_description = if day.usage_kwh > day.baseline_usage_kwh {
        "Cooling ran longer than the seasonal baseline; check setpoints and filter condition."
    } else {
        "HVAC runtime stayed at or below the seasonal baseline."
    };
    insights.push(EnergyInsight {
        label: "HVAC runtime".to_string(),
        change: hvac_change,
        description: hvac_description.to_string(),
    });

    if day.solar_generation_kwh > SOLAR_INSIGHT_MIN_KWH && seq.next_value() > SOLAR_GATE {
        insights.push(EnergyInsight {
            label: "Solar harvest".to_string(),
            change: round2((day.solar_generation_kwh - SOLAR_REFERENCE_KWH) / SOLAR_REFERENCE_KWH),
            description: "Strong solar output; run flexible loads around midday.".to_string(),
        });
    }

    if day.peak_usage_kwh > PEAK_INSIGHT_MIN_KWH {
        insights.push(EnergyInsight {
            label: "Peak window".to_string(),
            change: round2((day.peak_usage_kwh - PEAK_REFERENCE_KWH) / PEAK_REFERENCE_KWH),
            description: "Peak-hour draw was high; pre-cool or shift laundry earlier.".to_string(),
        });
    }

    insights
}
