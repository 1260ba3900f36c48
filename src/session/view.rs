//! View models for each page
//!
//! Plain values only; formatting is left to the front end.

use crate::analytics::AnalyticsView;
use crate::core::{DashboardSummary, DeviceSettings, ScheduledRun, UsageResult};
use crate::report::MonthlyReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub username: String,
    pub summary: DashboardSummary,
}

/// One line of the appliance control page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceRow {
    pub name: String,
    pub power_watts: f64,
    pub powered_on: bool,
    pub has_thermostat: bool,
    pub settings: DeviceSettings,
    pub usage: UsageResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingView {
    pub runs: Vec<ScheduledRun>,
    pub total_kwh: f64,
    pub total_cost: f64,
    pub battery_reserve_pct: u8,
}

/// What the current page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page", content = "data", rename_all = "snake_case")]
pub enum PageView {
    Login,
    Register,
    Dashboard(DashboardView),
    Appliances(Vec<ApplianceRow>),
    Analytics(AnalyticsView),
    Scheduling(SchedulingView),
    Report(MonthlyReport),
}
