//! Analytics page data
//!
//! The per-appliance breakdown comes from the energy model. The usage
//! trends are synthetic filler and are always flagged as such.

use crate::catalog::{ApplianceRuntimeState, Catalog};
use crate::core::FleetEntry;
use crate::energy::compute_fleet_usage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Bounds of generated daily values in kWh
const DEMO_MIN_KWH: f64 = 2.0;
const DEMO_MAX_KWH: f64 = 8.0;

/// A labelled series of daily kWh values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// True when the values are simulated, not measured
    pub synthetic: bool,
}

/// Share of total daily energy used by one appliance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub name: String,
    pub daily_kwh: f64,
    pub share_pct: f64,
}

/// Everything shown on the analytics page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsView {
    pub breakdown: Vec<BreakdownEntry>,
    pub total_daily_kwh: f64,
    pub weekly_sample: DemoSeries,
    pub trend: DemoSeries,
}

/// Fixed Monday-Friday sample series
pub fn weekly_sample() -> DemoSeries {
    DemoSeries {
        labels: WEEKDAYS[..5].iter().map(|d| d.to_string()).collect(),
        values: vec![5.0, 4.0, 6.0, 3.0, 4.0],
        synthetic: true,
    }
}

/// Reproducible synthetic daily usage values
///
/// The same seed and length always give the same series. Values are
/// rounded to one decimal.
pub fn generate_demo_series(seed: u64, len: usize) -> DemoSeries {
    let mut rng = StdRng::seed_from_u64(seed);

    let values = (0..len)
        .map(|_| {
            let kwh: f64 = rng.gen_range(DEMO_MIN_KWH..DEMO_MAX_KWH);
            (kwh * 10.0).round() / 10.0
        })
        .collect();
    let labels = (0..len)
        .map(|i| WEEKDAYS[i % WEEKDAYS.len()].to_string())
        .collect();

    DemoSeries {
        labels,
        values,
        synthetic: true,
    }
}

/// Per-appliance share of the fleet's daily energy, in catalog order
pub fn breakdown(catalog: &Catalog, state: &ApplianceRuntimeState) -> Vec<BreakdownEntry> {
    let fleet: Vec<FleetEntry> = compute_fleet_usage(catalog.appliances(), state);
    let total: f64 = fleet.iter().map(|e| e.daily_kwh).sum();

    fleet
        .into_iter()
        .map(|entry| BreakdownEntry {
            share_pct: if total > 0.0 { entry.daily_kwh / total * 100.0 } else { 0.0 },
            name: entry.name,
            daily_kwh: entry.daily_kwh,
        })
        .collect()
}

/// Build the analytics page for the current session
pub fn build_view(catalog: &Catalog, state: &ApplianceRuntimeState, seed: u64, trend_days: usize) -> AnalyticsView {
    let breakdown = breakdown(catalog, state);
    let total_daily_kwh = breakdown.iter().map(|e| e.daily_kwh).sum();

    AnalyticsView {
        breakdown,
        total_daily_kwh,
        weekly_sample: weekly_sample(),
        trend: generate_demo_series(seed, trend_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_sample() {
        let sample = weekly_sample();
        assert_eq!(sample.labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri"]);
        assert_eq!(sample.values, vec![5.0, 4.0, 6.0, 3.0, 4.0]);
        assert!(sample.synthetic);
    }

    #[test]
    fn test_demo_series_is_reproducible() {
        let a = generate_demo_series(42, 10);
        let b = generate_demo_series(42, 10);
        assert_eq!(a, b);
        assert_eq!(a.values.len(), 10);
        assert_eq!(a.labels[7], "Mon");
        assert!(a.synthetic);
        assert!(a.values.iter().all(|v| (DEMO_MIN_KWH..=DEMO_MAX_KWH).contains(v)));
    }

    #[test]
    fn test_demo_series_empty() {
        let series = generate_demo_series(1, 0);
        assert!(series.values.is_empty());
        assert!(series.labels.is_empty());
    }

    #[test]
    fn test_breakdown_shares() {
        let catalog = Catalog::builtin();
        let mut state = ApplianceRuntimeState::new();
        state.set("Washing Machine", true); // 0.5 kWh
        state.set("Fan", true); // 0.6 kWh
        state.set("Light", true); // 0.36 kWh

        let view = build_view(&catalog, &state, 7, 5);
        assert_eq!(view.breakdown.len(), 3);
        assert_eq!(view.breakdown[0].name, "Washing Machine");
        assert!((view.total_daily_kwh - 1.46).abs() < 1e-9);

        let share_sum: f64 = view.breakdown.iter().map(|e| e.share_pct).sum();
        assert!((share_sum - 100.0).abs() < 1e-9);
        assert_eq!(view.trend.values.len(), 5);
    }

    #[test]
    fn test_breakdown_nothing_on() {
        let view = build_view(&Catalog::builtin(), &ApplianceRuntimeState::new(), 7, 3);
        assert!(view.breakdown.is_empty());
        assert_eq!(view.total_daily_kwh, 0.0);
    }
}
