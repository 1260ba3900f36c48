//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{AnalyticsConfig, AuthConfig, AuthProviderKind, CatalogConfig, Config, GeneralConfig, PricingConfig};
pub use error::{Error, Result};
pub use types::{ApplianceSpec, DashboardSummary, DeviceSettings, FleetEntry, OperatingMode, ScheduleEntry, ScheduledRun, UsageResult};
