//! Appliance catalog and per-session on/off state
//!
//! The catalog is configuration data: a validated, ordered list of
//! appliances that never changes while a session is running.

use crate::core::{ApplianceSpec, CatalogConfig, Error, Result};
use std::collections::HashMap;

/// Validated, ordered appliance catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    appliances: Vec<ApplianceSpec>,
}

impl Catalog {
    /// Build a catalog, rejecting entries the energy model is not defined for
    pub fn new(appliances: Vec<ApplianceSpec>) -> Result<Self> {
        if appliances.is_empty() {
            return Err(Error::Config("Appliance catalog is empty".to_string()));
        }

        for (index, spec) in appliances.iter().enumerate() {
            Self::check_entry(spec)?;

            if appliances[..index]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&spec.name))
            {
                return Err(Error::Config(format!("Duplicate appliance name '{}'", spec.name)));
            }
        }

        Ok(Self { appliances })
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        Self {
            appliances: CatalogConfig::default().appliances,
        }
    }

    fn check_entry(spec: &ApplianceSpec) -> Result<()> {
        if spec.name.trim().is_empty() {
            return Err(Error::Config("Appliance name must not be empty".to_string()));
        }
        if spec.name != spec.name.trim() {
            return Err(Error::Config(format!(
                "Appliance name '{}' has leading or trailing whitespace",
                spec.name
            )));
        }
        if !spec.power_watts.is_finite() || spec.power_watts <= 0.0 {
            return Err(Error::Config(format!(
                "'{}': power_watts must be positive, got {}",
                spec.name, spec.power_watts
            )));
        }
        if !spec.hours_per_day.is_finite() || spec.hours_per_day <= 0.0 || spec.hours_per_day > 24.0 {
            return Err(Error::Config(format!(
                "'{}': hours_per_day must be in (0, 24], got {}",
                spec.name, spec.hours_per_day
            )));
        }
        if !(0.0..=100.0).contains(&spec.eco_saving_pct) {
            return Err(Error::Config(format!(
                "'{}': eco_saving_pct must be in [0, 100], got {}",
                spec.name, spec.eco_saving_pct
            )));
        }
        Ok(())
    }

    pub fn appliances(&self) -> &[ApplianceSpec] {
        &self.appliances
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.appliances.iter().map(|a| a.name.as_str())
    }

    /// Case-insensitive lookup by name
    pub fn get(&self, name: &str) -> Option<&ApplianceSpec> {
        let name = name.trim();
        self.appliances
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Like [`Catalog::get`], but an unknown name is a validation error
    pub fn require(&self, name: &str) -> Result<&ApplianceSpec> {
        self.get(name)
            .ok_or_else(|| Error::Validation(format!("Unknown appliance '{}'", name.trim())))
    }

    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Which appliances are powered on in the current session
///
/// Entries are added lazily the first time an appliance is toggled;
/// an appliance without an entry counts as off.
#[derive(Debug, Clone, Default)]
pub struct ApplianceRuntimeState {
    powered: HashMap<String, bool>,
}

impl ApplianceRuntimeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self, name: &str) -> bool {
        self.powered.get(name).copied().unwrap_or(false)
    }

    pub fn set(&mut self, name: &str, on: bool) {
        self.powered.insert(name.to_string(), on);
    }

    /// Flip the state and return the new value
    pub fn toggle(&mut self, name: &str) -> bool {
        let entry = self.powered.entry(name.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Number of appliances seen so far (on or off)
    pub fn tracked(&self) -> usize {
        self.powered.len()
    }

    pub fn clear(&mut self) {
        self.powered.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.names().next(), Some("Air Conditioner"));
        assert!(catalog.get("air conditioner").unwrap().has_thermostat);
        assert!(!catalog.get("Fan").unwrap().has_thermostat);
    }

    #[test]
    fn test_builtin_passes_validation() {
        let catalog = Catalog::builtin();
        assert!(Catalog::new(catalog.appliances().to_vec()).is_ok());
    }

    #[test]
    fn test_require_unknown_appliance() {
        let catalog = Catalog::builtin();
        assert!(matches!(catalog.require("Toaster"), Err(Error::Validation(_))));
    }

    #[test]
    fn test_rejects_duplicates_and_bad_values() {
        let dup = vec![
            ApplianceSpec::new("Fan", 75.0, 8.0, 15.0),
            ApplianceSpec::new("Fan", 60.0, 4.0, 15.0),
        ];
        assert!(matches!(Catalog::new(dup), Err(Error::Config(_))));

        let too_long = vec![ApplianceSpec::new("Fan", 75.0, 25.0, 15.0)];
        assert!(Catalog::new(too_long).is_err());

        let bad_pct = vec![ApplianceSpec::new("Fan", 75.0, 8.0, 120.0)];
        assert!(Catalog::new(bad_pct).is_err());

        assert!(Catalog::new(Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_names_lookup_cannot_reach() {
        let same_but_case = vec![
            ApplianceSpec::new("Fan", 75.0, 8.0, 15.0),
            ApplianceSpec::new("fan", 60.0, 4.0, 15.0),
        ];
        assert!(matches!(Catalog::new(same_but_case), Err(Error::Config(_))));

        let padded = vec![ApplianceSpec::new(" Heater", 2000.0, 1.0, 25.0)];
        assert!(matches!(Catalog::new(padded), Err(Error::Config(_))));

        // Every accepted name is found by its own lookup
        let catalog = Catalog::new(vec![
            ApplianceSpec::new("Fan", 75.0, 8.0, 15.0),
            ApplianceSpec::new("Heater", 2000.0, 1.0, 25.0),
        ])
        .unwrap();
        for name in catalog.names() {
            assert_eq!(catalog.get(name).unwrap().name, name);
        }
    }

    #[test]
    fn test_runtime_state_is_lazy() {
        let mut state = ApplianceRuntimeState::new();
        assert!(!state.is_on("Fan"));
        assert_eq!(state.tracked(), 0);

        assert!(state.toggle("Fan"));
        assert!(state.is_on("Fan"));
        assert!(!state.toggle("Fan"));
        assert_eq!(state.tracked(), 1);

        state.set("Light", true);
        state.clear();
        assert_eq!(state.tracked(), 0);
        assert!(!state.is_on("Light"));
    }
}
