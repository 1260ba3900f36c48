//! Interactive session
//!
//! A [`Session`] owns everything one user touches: the router state, the
//! credential provider, per-appliance on/off flags, device settings and the
//! schedule. Each action runs to completion before the next one; a rejected
//! action leaves the session exactly as it was.

mod router;
mod view;

pub use router::{route, Action, MemberPage, MenuItem, Notice, Page, PublicPage, SessionFlags, SessionState, Transition};
pub use view::{ApplianceRow, DashboardView, PageView, SchedulingView};

use crate::analytics;
use crate::auth::AuthenticationProvider;
use crate::catalog::{ApplianceRuntimeState, Catalog};
use crate::core::{Config, DeviceSettings, Error, OperatingMode, Result, ScheduleEntry};
use crate::energy::EnergyModel;
use crate::report::MonthlyReport;
use chrono::{NaiveTime, Utc};
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Accepted thermostat setpoints in degrees Celsius
pub const TEMPERATURE_RANGE: RangeInclusive<i32> = 16..=30;

/// Accepted battery reserve levels in percent
pub const BATTERY_RANGE: RangeInclusive<i32> = 0..=100;

const DEFAULT_BATTERY_RESERVE: u8 = 50;
const DEFAULT_TREND_DAYS: usize = 7;

/// Parse a time picker value ("HH:MM")
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| Error::Validation(format!("Invalid time '{}', expected HH:MM", value.trim())))
}

/// State of one interactive session
pub struct Session<A = Box<dyn AuthenticationProvider>> {
    state: SessionState,
    auth: A,
    catalog: Catalog,
    model: EnergyModel,
    currency: String,
    appliances: ApplianceRuntimeState,
    devices: HashMap<String, DeviceSettings>,
    schedule: Vec<ScheduleEntry>,
    battery_reserve_pct: u8,
    trend_seed: u64,
    trend_days: usize,
    last_notice: Option<Notice>,
}

impl<A: AuthenticationProvider> Session<A> {
    /// Start a logged-out session on the login page
    pub fn new(auth: A, catalog: Catalog, model: EnergyModel) -> Self {
        Self {
            state: SessionState::default(),
            auth,
            catalog,
            model,
            currency: crate::core::PricingConfig::default().currency,
            appliances: ApplianceRuntimeState::new(),
            devices: HashMap::new(),
            schedule: Vec::new(),
            battery_reserve_pct: DEFAULT_BATTERY_RESERVE,
            trend_seed: rand::random(),
            trend_days: DEFAULT_TREND_DAYS,
            last_notice: None,
        }
    }

    /// Start a session using the catalog, pricing and analytics settings of `config`
    pub fn from_config(config: &Config, auth: A) -> Result<Self> {
        config.validate()?;
        let catalog = config.build_catalog()?;
        let model = EnergyModel::from_config(&config.pricing);

        let mut session = Self::new(auth, catalog, model);
        session.currency = config.pricing.currency.clone();
        session.trend_days = config.analytics.trend_days;
        if let Some(seed) = config.analytics.demo_seed {
            session.trend_seed = seed;
        }

        Ok(session)
    }

    /// Fix the seed of the synthetic usage trend
    pub fn with_trend_seed(mut self, seed: u64) -> Self {
        self.trend_seed = seed;
        self
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn flags(&self) -> SessionFlags {
        self.state.flags()
    }

    pub fn page(&self) -> Page {
        self.state.page()
    }

    pub fn username(&self) -> Option<&str> {
        self.state.username()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn model(&self) -> &EnergyModel {
        &self.model
    }

    pub fn appliances(&self) -> &ApplianceRuntimeState {
        &self.appliances
    }

    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    pub fn battery_reserve_pct(&self) -> u8 {
        self.battery_reserve_pct
    }

    pub fn device_settings(&self, name: &str) -> DeviceSettings {
        self.devices.get(name).cloned().unwrap_or_default()
    }

    /// Success message raised by the last action, if any
    pub fn last_notice(&self) -> Option<Notice> {
        self.last_notice
    }

    /// Apply a navigation or login action and return the page to show
    pub fn handle(&mut self, action: Action) -> Result<Page> {
        self.last_notice = None;
        let transition = route(&self.state, action, &mut self.auth)?;

        if self.state.is_logged_in() && !transition.state.is_logged_in() {
            self.end();
        }

        self.state = transition.state;
        self.last_notice = transition.notice;
        Ok(self.state.page())
    }

    /// Drop everything owned by the logged-in user
    fn end(&mut self) {
        self.appliances.clear();
        self.devices.clear();
        self.schedule.clear();
        self.battery_reserve_pct = DEFAULT_BATTERY_RESERVE;
    }

    fn require_login(&self) -> Result<()> {
        if self.state.is_logged_in() {
            Ok(())
        } else {
            Err(Error::Auth("Please log in to continue".to_string()))
        }
    }

    /// Catalog name for `name`, after checking the session may use it
    fn appliance_name(&self, name: &str) -> Result<String> {
        self.require_login()?;
        Ok(self.catalog.require(name)?.name.clone())
    }

    /// Flip an appliance on or off and return the new state
    pub fn toggle_appliance(&mut self, name: &str) -> Result<bool> {
        let name = self.appliance_name(name)?;
        let on = self.appliances.toggle(&name);
        log::debug!("{} switched {}", name, if on { "on" } else { "off" });
        Ok(on)
    }

    pub fn set_power(&mut self, name: &str, on: bool) -> Result<()> {
        let name = self.appliance_name(name)?;
        self.appliances.set(&name, on);
        Ok(())
    }

    pub fn set_mode(&mut self, name: &str, mode: OperatingMode) -> Result<()> {
        let name = self.appliance_name(name)?;
        log::debug!("{} mode set to {}", name, mode.as_str());
        self.devices.entry(name).or_default().mode = mode;
        Ok(())
    }

    /// Set the thermostat of an appliance that has one
    pub fn set_temperature(&mut self, name: &str, celsius: i32) -> Result<()> {
        let name = self.appliance_name(name)?;

        if !self.catalog.require(&name)?.has_thermostat {
            return Err(Error::Validation(format!("{} has no temperature control", name)));
        }
        if !TEMPERATURE_RANGE.contains(&celsius) {
            return Err(Error::Validation(format!(
                "Temperature must be between {} and {} \u{00B0}C",
                TEMPERATURE_RANGE.start(),
                TEMPERATURE_RANGE.end()
            )));
        }

        self.devices.entry(name).or_default().temperature_c = Some(celsius as u8);
        Ok(())
    }

    /// Plan a run window; returns its index in the schedule
    pub fn add_schedule(&mut self, name: &str, start: NaiveTime, end: NaiveTime) -> Result<usize> {
        let appliance = self.appliance_name(name)?;

        if start == end {
            return Err(Error::Validation("Start and end time must differ".to_string()));
        }

        log::debug!("Scheduled {} from {} to {}", appliance, start.format("%H:%M"), end.format("%H:%M"));
        self.schedule.push(ScheduleEntry { appliance, start, end });
        Ok(self.schedule.len() - 1)
    }

    pub fn remove_schedule(&mut self, index: usize) -> Result<ScheduleEntry> {
        self.require_login()?;

        if index >= self.schedule.len() {
            return Err(Error::Validation(format!("No schedule entry #{}", index + 1)));
        }
        Ok(self.schedule.remove(index))
    }

    pub fn set_battery_reserve(&mut self, pct: i32) -> Result<()> {
        self.require_login()?;

        if !BATTERY_RANGE.contains(&pct) {
            return Err(Error::Validation(format!(
                "Battery reserve must be between {} and {} %",
                BATTERY_RANGE.start(),
                BATTERY_RANGE.end()
            )));
        }

        self.battery_reserve_pct = pct as u8;
        Ok(())
    }

    /// Monthly report of the powered appliances
    pub fn report(&self) -> Result<MonthlyReport> {
        self.require_login()?;
        Ok(MonthlyReport::build(
            &self.model,
            &self.catalog,
            &self.appliances,
            &self.currency,
            Utc::now(),
        ))
    }

    /// Build the view of the current page
    pub fn view(&self) -> PageView {
        match &self.state {
            SessionState::LoggedOut(PublicPage::Login) => PageView::Login,
            SessionState::LoggedOut(PublicPage::Register) => PageView::Register,
            SessionState::LoggedIn { username, page } => match page {
                MemberPage::Dashboard => PageView::Dashboard(DashboardView {
                    username: username.clone(),
                    summary: self.model.dashboard_summary(&self.catalog, &self.appliances, &self.devices),
                }),
                MemberPage::Appliances => PageView::Appliances(self.appliance_rows()),
                MemberPage::Analytics => PageView::Analytics(analytics::build_view(
                    &self.catalog,
                    &self.appliances,
                    self.trend_seed,
                    self.trend_days,
                )),
                MemberPage::Scheduling => PageView::Scheduling(self.scheduling_view()),
                MemberPage::Report => PageView::Report(MonthlyReport::build(
                    &self.model,
                    &self.catalog,
                    &self.appliances,
                    &self.currency,
                    Utc::now(),
                )),
            },
        }
    }

    fn appliance_rows(&self) -> Vec<ApplianceRow> {
        self.model
            .fleet_usage(&self.catalog, &self.appliances)
            .into_iter()
            .map(|(spec, usage)| ApplianceRow {
                name: spec.name.clone(),
                power_watts: spec.power_watts,
                powered_on: self.appliances.is_on(&spec.name),
                has_thermostat: spec.has_thermostat,
                settings: self.device_settings(&spec.name),
                usage,
            })
            .collect()
    }

    fn scheduling_view(&self) -> SchedulingView {
        let runs: Vec<_> = self
            .schedule
            .iter()
            .filter_map(|entry| {
                self.catalog
                    .get(&entry.appliance)
                    .map(|spec| self.model.schedule_usage(entry, spec))
            })
            .collect();

        SchedulingView {
            total_kwh: runs.iter().map(|r| r.kwh).sum(),
            total_cost: runs.iter().map(|r| r.cost).sum(),
            runs,
            battery_reserve_pct: self.battery_reserve_pct,
        }
    }
}
