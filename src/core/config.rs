//! Configuration management

use crate::catalog::Catalog;
use crate::core::{ApplianceSpec, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Longest synthetic trend the analytics page will generate
pub const MAX_TREND_DAYS: usize = 366;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        let app_config_dir = config_dir.join("smart-energy-scheduler");

        if !app_config_dir.exists() {
            fs::create_dir_all(&app_config_dir)?;
        }

        Ok(app_config_dir.join("config.toml"))
    }

    /// Load configuration from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
            return Ok(config);
        }

        Self::load_from(&path)
    }

    /// Load and validate configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the energy model is not defined for
    pub fn validate(&self) -> Result<()> {
        if !self.pricing.tariff_per_kwh.is_finite() || self.pricing.tariff_per_kwh < 0.0 {
            return Err(Error::Config(format!(
                "tariff_per_kwh must be a non-negative number, got {}",
                self.pricing.tariff_per_kwh
            )));
        }
        if !self.pricing.co2_factor_per_kwh.is_finite() || self.pricing.co2_factor_per_kwh < 0.0 {
            return Err(Error::Config(format!(
                "co2_factor_per_kwh must be a non-negative number, got {}",
                self.pricing.co2_factor_per_kwh
            )));
        }

        if !(1..=MAX_TREND_DAYS).contains(&self.analytics.trend_days) {
            return Err(Error::Config(format!(
                "trend_days must be in 1..={}, got {}",
                MAX_TREND_DAYS, self.analytics.trend_days
            )));
        }

        Catalog::new(self.catalog.appliances.clone())?;
        Ok(())
    }

    /// Build the validated appliance catalog
    pub fn build_catalog(&self) -> Result<Catalog> {
        Catalog::new(self.catalog.appliances.clone())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "fr"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Tariff and emission factor used by the energy model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency code (INR, EUR, USD, etc.)
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Price per kWh
    #[serde(default = "default_tariff")]
    pub tariff_per_kwh: f64,
    /// Grid emission factor in kg CO2 per kWh
    #[serde(default = "default_co2_factor")]
    pub co2_factor_per_kwh: f64,
}

fn default_currency() -> String { "INR".to_string() }
fn default_currency_symbol() -> String { "\u{20B9}".to_string() } // Rupee sign
fn default_tariff() -> f64 { 6.0 }
fn default_co2_factor() -> f64 { 0.82 }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            tariff_per_kwh: default_tariff(),
            co2_factor_per_kwh: default_co2_factor(),
        }
    }
}

/// Appliance catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_appliances")]
    pub appliances: Vec<ApplianceSpec>,
}

fn default_appliances() -> Vec<ApplianceSpec> {
    vec![
        ApplianceSpec::new("Air Conditioner", 1800.0, 6.0, 30.0).with_thermostat(),
        ApplianceSpec::new("Refrigerator", 150.0, 24.0, 10.0),
        ApplianceSpec::new("Washing Machine", 500.0, 1.0, 20.0),
        ApplianceSpec::new("Fan", 75.0, 8.0, 15.0),
        ApplianceSpec::new("Light", 60.0, 6.0, 25.0),
        ApplianceSpec::new("Television", 120.0, 5.0, 15.0),
        ApplianceSpec::new("Water Heater", 2000.0, 1.0, 25.0),
        ApplianceSpec::new("Microwave", 1200.0, 0.5, 10.0),
    ]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            appliances: default_appliances(),
        }
    }
}

/// Which credential provider gates the login page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProviderKind {
    /// Registered users kept in process memory
    #[default]
    Memory,
    /// Any non-empty username and password is accepted
    Open,
}

/// Authentication settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub provider: AuthProviderKind,
}

/// Analytics page settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Seed for the synthetic usage trend (None = random per session)
    #[serde(default)]
    pub demo_seed: Option<u64>,
    /// Number of points in the synthetic trend
    #[serde(default = "default_trend_days")]
    pub trend_days: usize,
}

fn default_trend_days() -> usize { 7 }

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            demo_seed: None,
            trend_days: default_trend_days(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pricing.tariff_per_kwh, 6.0);
        assert_eq!(config.pricing.co2_factor_per_kwh, 0.82);
        assert_eq!(config.catalog.appliances.len(), 8);
        assert_eq!(config.auth.provider, AuthProviderKind::Memory);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.pricing.tariff_per_kwh = 7.5;
        config.auth.provider = AuthProviderKind::Open;
        config.analytics.demo_seed = Some(42);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.pricing.tariff_per_kwh, 7.5);
        assert_eq!(loaded.auth.provider, AuthProviderKind::Open);
        assert_eq!(loaded.analytics.demo_seed, Some(42));
        assert_eq!(loaded.catalog.appliances, config.catalog.appliances);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[pricing]
tariff_per_kwh = 8.0

[[catalog.appliances]]
name = "Heater"
power_watts = 1500.0
hours_per_day = 3.0
eco_saving_pct = 20.0
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.pricing.tariff_per_kwh, 8.0);
        assert_eq!(config.pricing.co2_factor_per_kwh, 0.82);
        assert_eq!(config.general.language, "auto");
        assert_eq!(config.catalog.appliances.len(), 1);
        assert!(!config.catalog.appliances[0].has_thermostat);
    }

    #[test]
    fn test_negative_tariff_rejected() {
        let mut config = Config::default();
        config.pricing.tariff_per_kwh = -1.0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_trend_days_bounds() {
        let mut config = Config::default();
        config.analytics.trend_days = 0;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.analytics.trend_days = MAX_TREND_DAYS + 1;
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.analytics.trend_days = MAX_TREND_DAYS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_catalog_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[[catalog.appliances]]
name = "Broken"
power_watts = 0.0
hours_per_day = 3.0
eco_saving_pct = 20.0
"#,
        )
        .unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "pricing = [not valid").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
