//! Common types used across the application

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A catalog entry describing one appliance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceSpec {
    /// Display name, unique within a catalog
    pub name: String,
    /// Rated power draw in watts
    pub power_watts: f64,
    /// Typical usage per day in hours
    pub hours_per_day: f64,
    /// Share of monthly energy saved when running in eco mode (0-100)
    pub eco_saving_pct: f64,
    /// Whether the appliance exposes a temperature control
    #[serde(default)]
    pub has_thermostat: bool,
}

impl ApplianceSpec {
    pub fn new(name: &str, power_watts: f64, hours_per_day: f64, eco_saving_pct: f64) -> Self {
        Self {
            name: name.to_string(),
            power_watts,
            hours_per_day,
            eco_saving_pct,
            has_thermostat: false,
        }
    }

    pub fn with_thermostat(mut self) -> Self {
        self.has_thermostat = true;
        self
    }
}

/// Energy, cost and emissions derived for one appliance
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageResult {
    pub daily_kwh: f64,
    pub monthly_kwh: f64,
    pub monthly_cost: f64,
    pub co2_kg: f64,
    /// Monthly energy when running in eco mode
    pub eco_kwh: f64,
    pub eco_savings_kwh: f64,
}

impl UsageResult {
    pub fn is_zero(&self) -> bool {
        self.daily_kwh == 0.0
    }
}

/// Daily energy of one powered appliance, as used by the fleet breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetEntry {
    pub name: String,
    pub daily_kwh: f64,
}

/// Operating mode selectable per appliance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingMode {
    #[default]
    Normal,
    Eco,
    Turbo,
}

impl OperatingMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "eco" => Some(Self::Eco),
            "turbo" => Some(Self::Turbo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Eco => "eco",
            Self::Turbo => "turbo",
        }
    }
}

/// Per-appliance control settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSettings {
    pub mode: OperatingMode,
    /// Target temperature in degrees Celsius (thermostat appliances only)
    pub temperature_c: Option<u8>,
}

/// A planned run window for an appliance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub appliance: String,
    pub start: NaiveTime,
    /// May be earlier than `start`, in which case the window runs past midnight
    pub end: NaiveTime,
}

impl ScheduleEntry {
    /// Length of the window in hours
    pub fn duration_hours(&self) -> f64 {
        let start = minutes_of_day(self.start);
        let end = minutes_of_day(self.end);

        let minutes = if start > end {
            // Overnight window
            (24 * 60 - start) + end
        } else {
            end - start
        };

        minutes as f64 / 60.0
    }

    /// Whether `time` falls within the window (start inclusive, end exclusive)
    pub fn contains(&self, time: NaiveTime) -> bool {
        let start = minutes_of_day(self.start);
        let end = minutes_of_day(self.end);
        let current = minutes_of_day(time);

        if start > end {
            current >= start || current < end
        } else {
            current >= start && current < end
        }
    }
}

fn minutes_of_day(time: NaiveTime) -> u32 {
    use chrono::Timelike;
    time.hour() * 60 + time.minute()
}

/// Energy and cost of one scheduled run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledRun {
    pub entry: ScheduleEntry,
    pub duration_hours: f64,
    pub kwh: f64,
    pub cost: f64,
}

/// Figures shown on the home dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of appliances currently powered on
    pub active_count: usize,
    /// Combined rated draw of the powered appliances
    pub total_power_watts: f64,
    pub total_daily_kwh: f64,
    pub estimated_daily_cost: f64,
    pub estimated_monthly_cost: f64,
    pub monthly_co2_kg: f64,
    /// Eco-mode savings as a percentage of total monthly energy
    pub energy_saved_pct: f64,
    /// Set when a powered appliance could be switched to eco mode
    pub suggest_eco_mode: bool,
}
