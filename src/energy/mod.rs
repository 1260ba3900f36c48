//! Appliance energy model
//!
//! Derives daily and monthly energy, cost and CO2 figures from a catalog
//! entry and its on/off state:
//! - daily kWh = rated watts * hours per day / 1000
//! - monthly kWh = daily kWh * 30
//! - cost and CO2 scale monthly kWh by the tariff and emission factor
//! - eco mode removes `eco_saving_pct` percent of monthly kWh

use crate::catalog::{ApplianceRuntimeState, Catalog};
use crate::core::{
    ApplianceSpec, DashboardSummary, DeviceSettings, FleetEntry, OperatingMode, PricingConfig,
    ScheduleEntry, ScheduledRun, UsageResult,
};
use std::collections::HashMap;

/// Days per month used for monthly estimates
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Compute usage figures for one appliance
///
/// An appliance that is switched off contributes nothing. Inputs are
/// expected to come from a validated [`Catalog`], so there are no error cases.
pub fn compute_usage(
    spec: &ApplianceSpec,
    powered_on: bool,
    tariff_per_kwh: f64,
    co2_factor_per_kwh: f64,
) -> UsageResult {
    if !powered_on {
        return UsageResult::default();
    }

    let daily_kwh = spec.power_watts * spec.hours_per_day / 1000.0;
    let monthly_kwh = daily_kwh * DAYS_PER_MONTH;
    let eco_kwh = monthly_kwh * (1.0 - spec.eco_saving_pct / 100.0);

    UsageResult {
        daily_kwh,
        monthly_kwh,
        monthly_cost: monthly_kwh * tariff_per_kwh,
        co2_kg: monthly_kwh * co2_factor_per_kwh,
        eco_kwh,
        eco_savings_kwh: monthly_kwh - eco_kwh,
    }
}

/// Daily kWh of every powered-on appliance, in catalog order
pub fn compute_fleet_usage(specs: &[ApplianceSpec], state: &ApplianceRuntimeState) -> Vec<FleetEntry> {
    specs
        .iter()
        .filter(|spec| state.is_on(&spec.name))
        .map(|spec| FleetEntry {
            name: spec.name.clone(),
            // Tariff and CO2 factor do not affect daily kWh
            daily_kwh: compute_usage(spec, true, 0.0, 0.0).daily_kwh,
        })
        .filter(|entry| entry.daily_kwh != 0.0)
        .collect()
}

/// Energy model bound to a tariff and emission factor
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyModel {
    tariff_per_kwh: f64,
    co2_factor_per_kwh: f64,
}

impl EnergyModel {
    pub fn new(tariff_per_kwh: f64, co2_factor_per_kwh: f64) -> Self {
        Self {
            tariff_per_kwh,
            co2_factor_per_kwh,
        }
    }

    /// Create a model from the pricing section of the configuration
    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(config.tariff_per_kwh, config.co2_factor_per_kwh)
    }

    pub fn tariff_per_kwh(&self) -> f64 {
        self.tariff_per_kwh
    }

    pub fn co2_factor_per_kwh(&self) -> f64 {
        self.co2_factor_per_kwh
    }

    /// Cost of a given amount of energy
    pub fn calculate_cost(&self, kwh: f64) -> f64 {
        kwh * self.tariff_per_kwh
    }

    pub fn usage(&self, spec: &ApplianceSpec, powered_on: bool) -> UsageResult {
        compute_usage(spec, powered_on, self.tariff_per_kwh, self.co2_factor_per_kwh)
    }

    /// Usage of every catalog entry paired with its spec, in catalog order
    pub fn fleet_usage<'a>(
        &self,
        catalog: &'a Catalog,
        state: &ApplianceRuntimeState,
    ) -> Vec<(&'a ApplianceSpec, UsageResult)> {
        catalog
            .appliances()
            .iter()
            .map(|spec| (spec, self.usage(spec, state.is_on(&spec.name))))
            .collect()
    }

    /// Figures for the home dashboard
    pub fn dashboard_summary(
        &self,
        catalog: &Catalog,
        state: &ApplianceRuntimeState,
        settings: &HashMap<String, DeviceSettings>,
    ) -> DashboardSummary {
        let mut summary = DashboardSummary::default();
        let mut total_monthly_kwh = 0.0;
        let mut eco_savings_kwh = 0.0;

        for (spec, usage) in self.fleet_usage(catalog, state) {
            if usage.is_zero() {
                continue;
            }

            let mode = settings
                .get(&spec.name)
                .map(|s| s.mode)
                .unwrap_or_default();

            summary.active_count += 1;
            summary.total_power_watts += spec.power_watts;
            summary.total_daily_kwh += usage.daily_kwh;
            summary.estimated_monthly_cost += usage.monthly_cost;
            summary.monthly_co2_kg += usage.co2_kg;
            total_monthly_kwh += usage.monthly_kwh;

            if mode == OperatingMode::Eco {
                eco_savings_kwh += usage.eco_savings_kwh;
            } else if spec.eco_saving_pct > 0.0 {
                summary.suggest_eco_mode = true;
            }
        }

        summary.estimated_daily_cost = self.calculate_cost(summary.total_daily_kwh);
        if total_monthly_kwh > 0.0 {
            summary.energy_saved_pct = eco_savings_kwh / total_monthly_kwh * 100.0;
        }

        summary
    }

    /// Energy and cost of one scheduled run of `spec`
    pub fn schedule_usage(&self, entry: &ScheduleEntry, spec: &ApplianceSpec) -> ScheduledRun {
        let duration_hours = entry.duration_hours();
        let kwh = spec.power_watts * duration_hours / 1000.0;

        ScheduledRun {
            entry: entry.clone(),
            duration_hours,
            kwh,
            cost: self.calculate_cost(kwh),
        }
    }
}

impl Default for EnergyModel {
    fn default() -> Self {
        Self::from_config(&PricingConfig::default())
    }
}
