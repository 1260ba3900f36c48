//! Monthly usage report
//!
//! One row per powered appliance plus totals, exportable as JSON.

use crate::catalog::{ApplianceRuntimeState, Catalog};
use crate::core::{Error, Result, UsageResult};
use crate::energy::EnergyModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Usage of one appliance over a month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub name: String,
    pub power_watts: f64,
    pub hours_per_day: f64,
    pub usage: UsageResult,
}

/// Monthly report for the current session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub generated_at: DateTime<Utc>,
    pub currency: String,
    pub tariff_per_kwh: f64,
    pub co2_factor_per_kwh: f64,
    pub rows: Vec<ReportRow>,
    pub totals: UsageResult,
}

impl MonthlyReport {
    /// Build the report from every powered appliance, in catalog order
    pub fn build(
        model: &EnergyModel,
        catalog: &Catalog,
        state: &ApplianceRuntimeState,
        currency: &str,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let rows: Vec<ReportRow> = model
            .fleet_usage(catalog, state)
            .into_iter()
            .filter(|(_, usage)| !usage.is_zero())
            .map(|(spec, usage)| ReportRow {
                name: spec.name.clone(),
                power_watts: spec.power_watts,
                hours_per_day: spec.hours_per_day,
                usage,
            })
            .collect();

        let totals = rows.iter().fold(UsageResult::default(), |acc, row| UsageResult {
            daily_kwh: acc.daily_kwh + row.usage.daily_kwh,
            monthly_kwh: acc.monthly_kwh + row.usage.monthly_kwh,
            monthly_cost: acc.monthly_cost + row.usage.monthly_cost,
            co2_kg: acc.co2_kg + row.usage.co2_kg,
            eco_kwh: acc.eco_kwh + row.usage.eco_kwh,
            eco_savings_kwh: acc.eco_savings_kwh + row.usage.eco_savings_kwh,
        });

        Self {
            generated_at,
            currency: currency.to_string(),
            tariff_per_kwh: model.tariff_per_kwh(),
            co2_factor_per_kwh: model.co2_factor_per_kwh(),
            rows,
            totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Pretty-printed JSON export
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}
