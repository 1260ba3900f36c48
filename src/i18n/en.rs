//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Smart Energy Scheduler".into());
    t.insert("app.version".into(), "Version".into());

    // Navigation
    t.insert("nav.dashboard".into(), "Home".into());
    t.insert("nav.appliances".into(), "Devices".into());
    t.insert("nav.analytics".into(), "Analytics".into());
    t.insert("nav.scheduling".into(), "Scheduling".into());
    t.insert("nav.report".into(), "Report".into());
    t.insert("nav.logout".into(), "Logout".into());

    // Page titles
    t.insert("page.login".into(), "Login".into());
    t.insert("page.register".into(), "Register".into());
    t.insert("page.dashboard".into(), "Home Dashboard".into());
    t.insert("page.appliances".into(), "Device Control".into());
    t.insert("page.analytics".into(), "Energy Analytics".into());
    t.insert("page.scheduling".into(), "Scheduling".into());
    t.insert("page.report".into(), "Monthly Report".into());

    // Login / registration
    t.insert("login.username".into(), "Username".into());
    t.insert("login.password".into(), "Password".into());
    t.insert("login.hint".into(), "login <username> <password>, or 'register' to create an account".into());
    t.insert("register.hint".into(), "register <username> <password>, or 'back' to return to login".into());

    // Notices
    t.insert("notice.logged_in".into(), "Login successful".into());
    t.insert("notice.registered".into(), "Registration successful, you can now log in".into());
    t.insert("notice.logged_out".into(), "Logged out successfully".into());

    // Dashboard
    t.insert("dashboard.welcome".into(), "Welcome".into());
    t.insert("dashboard.connected_devices".into(), "Active Devices".into());
    t.insert("dashboard.power_consumption".into(), "Power Consumption".into());
    t.insert("dashboard.daily_energy".into(), "Daily Energy".into());
    t.insert("dashboard.daily_cost".into(), "Estimated Daily Cost".into());
    t.insert("dashboard.monthly_cost".into(), "Estimated Monthly Cost".into());
    t.insert("dashboard.monthly_co2".into(), "Monthly CO2".into());
    t.insert("dashboard.energy_saved".into(), "Energy Saved".into());
    t.insert("dashboard.eco_suggestion".into(), "Suggestion: enable Eco Mode to reduce energy usage".into());

    // Appliances
    t.insert("appliances.power".into(), "Power".into());
    t.insert("appliances.on".into(), "ON".into());
    t.insert("appliances.off".into(), "OFF".into());
    t.insert("appliances.mode".into(), "Operating Mode".into());
    t.insert("appliances.temperature".into(), "Temperature".into());
    t.insert("appliances.daily".into(), "Daily".into());
    t.insert("appliances.monthly".into(), "Monthly".into());
    t.insert("appliances.eco_savings".into(), "Eco Savings".into());

    // Analytics
    t.insert("analytics.breakdown".into(), "Usage by Appliance".into());
    t.insert("analytics.weekly".into(), "Weekly Usage".into());
    t.insert("analytics.trend".into(), "Usage Trend".into());
    t.insert("analytics.simulated".into(), "Energy usage shown using simulated data".into());
    t.insert("analytics.no_devices".into(), "No appliance is switched on".into());

    // Scheduling
    t.insert("scheduling.runs".into(), "Planned Runs".into());
    t.insert("scheduling.empty".into(), "Nothing scheduled".into());
    t.insert("scheduling.battery".into(), "Battery Reserve".into());
    t.insert("scheduling.total".into(), "Total".into());

    // Report
    t.insert("report.generated".into(), "Generated".into());
    t.insert("report.total".into(), "Total".into());
    t.insert("report.empty".into(), "No appliance is switched on".into());

    // Units
    t.insert("unit.watts".into(), "W".into());
    t.insert("unit.kilowatt_hours".into(), "kWh".into());
    t.insert("unit.kilograms".into(), "kg".into());
    t.insert("unit.hours".into(), "h".into());
    t.insert("unit.per_day".into(), "/day".into());
    t.insert("unit.per_month".into(), "/month".into());

    // Errors
    t.insert("error.validation".into(), "Invalid input".into());
    t.insert("error.auth".into(), "Access denied".into());
    t.insert("error.conflict".into(), "Already exists".into());
    t.insert("error.config".into(), "Configuration error".into());
    t.insert("error.io".into(), "I/O error".into());
    t.insert("error.serialization".into(), "Export failed".into());
    t.insert("error.unknown_command".into(), "Unknown command, type 'help'".into());

    // Console
    t.insert("console.help".into(), "Commands: login, register, back, goto <page>, toggle <device>, power <device> on|off, mode <device> normal|eco|turbo, temp <device> <16-30>, schedule <device> <HH:MM> <HH:MM>, unschedule <n>, battery <0-100>, report-json, help, quit".into());
    t.insert("console.goodbye".into(), "Goodbye".into());

    t
}
