//! Line-oriented console front end
//!
//! Parses one command per line, applies it to a [`Session`] and renders the
//! resulting page as plain text.

use crate::auth::AuthenticationProvider;
use crate::core::{Error, OperatingMode, Result};
use crate::i18n::I18n;
use crate::session::{parse_time, Action, MenuItem, Page, PageView, Session};
use chrono::NaiveTime;
use std::fmt::Write as _;

/// One parsed console command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login { username: String, password: String },
    /// Without credentials this only opens the registration page
    Register(Option<(String, String)>),
    Back,
    Go(MenuItem),
    Toggle(String),
    Power(String, bool),
    Mode(String, OperatingMode),
    Temperature(String, i32),
    Schedule { appliance: String, start: NaiveTime, end: NaiveTime },
    /// 1-based index as shown on the scheduling page
    Unschedule(usize),
    Battery(i32),
    ReportJson,
    Help,
    Quit,
}

fn usage(text: &str) -> Error {
    Error::Validation(format!("Usage: {}", text))
}

fn parse_number<T: std::str::FromStr>(value: &str, usage_text: &str) -> Result<T> {
    value.parse().map_err(|_| usage(usage_text))
}

/// Split "<device words...> <n trailing args>" into the device name and the args
fn split_device<'a>(args: &[&'a str], trailing: usize, usage_text: &str) -> Result<(String, Vec<&'a str>)> {
    if args.len() <= trailing {
        return Err(usage(usage_text));
    }
    let (device, rest) = args.split_at(args.len() - trailing);
    Ok((device.join(" "), rest.to_vec()))
}

/// Parse a console line; blank lines yield `None`
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match keyword.to_ascii_lowercase().as_str() {
        "login" => match args.as_slice() {
            [username, password] => Command::Login {
                username: username.to_string(),
                password: password.to_string(),
            },
            _ => return Err(usage("login <username> <password>")),
        },
        "register" => match args.as_slice() {
            [] => Command::Register(None),
            [username, password] => Command::Register(Some((username.to_string(), password.to_string()))),
            _ => return Err(usage("register [<username> <password>]")),
        },
        "back" => Command::Back,
        "logout" => Command::Go(MenuItem::Logout),
        "goto" | "go" => {
            let target = args.join(" ");
            let item = MenuItem::parse(&target)
                .ok_or_else(|| Error::Validation(format!("Unknown page '{}'", target)))?;
            Command::Go(item)
        }
        "toggle" => {
            if args.is_empty() {
                return Err(usage("toggle <device>"));
            }
            Command::Toggle(args.join(" "))
        }
        "power" => {
            let text = "power <device> on|off";
            let (device, rest) = split_device(&args, 1, text)?;
            let on = match rest[0].to_ascii_lowercase().as_str() {
                "on" => true,
                "off" => false,
                _ => return Err(usage(text)),
            };
            Command::Power(device, on)
        }
        "mode" => {
            let text = "mode <device> normal|eco|turbo";
            let (device, rest) = split_device(&args, 1, text)?;
            let mode = OperatingMode::parse(rest[0]).ok_or_else(|| usage(text))?;
            Command::Mode(device, mode)
        }
        "temp" => {
            let text = "temp <device> <16-30>";
            let (device, rest) = split_device(&args, 1, text)?;
            Command::Temperature(device, parse_number(rest[0], text)?)
        }
        "schedule" => {
            let (appliance, rest) = split_device(&args, 2, "schedule <device> <HH:MM> <HH:MM>")?;
            Command::Schedule {
                appliance,
                start: parse_time(rest[0])?,
                end: parse_time(rest[1])?,
            }
        }
        "unschedule" => match args.as_slice() {
            [n] => {
                let index: usize = parse_number(n, "unschedule <n>")?;
                if index == 0 {
                    return Err(usage("unschedule <n>"));
                }
                Command::Unschedule(index)
            }
            _ => return Err(usage("unschedule <n>")),
        },
        "battery" => match args.as_slice() {
            [pct] => Command::Battery(parse_number(pct, "battery <0-100>")?),
            _ => return Err(usage("battery <0-100>")),
        },
        "report-json" => Command::ReportJson,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(Error::Validation(format!("Unknown command '{}'", other))),
    };

    Ok(Some(command))
}

/// Apply a command; returns extra text to print (JSON export, help)
pub fn apply<A: AuthenticationProvider>(session: &mut Session<A>, command: Command, i18n: &I18n) -> Result<Option<String>> {
    match command {
        Command::Login { username, password } => {
            session.handle(Action::SubmitLogin { username, password })?;
        }
        Command::Register(None) => {
            session.handle(Action::ShowRegister)?;
        }
        Command::Register(Some((username, password))) => {
            if session.page() == Page::Login {
                session.handle(Action::ShowRegister)?;
            }
            session.handle(Action::SubmitRegistration { username, password })?;
        }
        Command::Back => {
            session.handle(Action::ShowLogin)?;
        }
        Command::Go(item) => {
            session.handle(Action::Select(item))?;
        }
        Command::Toggle(device) => {
            session.toggle_appliance(&device)?;
        }
        Command::Power(device, on) => session.set_power(&device, on)?,
        Command::Mode(device, mode) => session.set_mode(&device, mode)?,
        Command::Temperature(device, celsius) => session.set_temperature(&device, celsius)?,
        Command::Schedule { appliance, start, end } => {
            session.add_schedule(&appliance, start, end)?;
        }
        Command::Unschedule(n) => {
            session.remove_schedule(n - 1)?;
        }
        Command::Battery(pct) => session.set_battery_reserve(pct)?,
        Command::ReportJson => return Ok(Some(session.report()?.to_json()?)),
        Command::Help => return Ok(Some(i18n.get("console.help"))),
        Command::Quit => {}
    }
    Ok(None)
}

/// Sidebar and page content as plain text
pub fn render<A: AuthenticationProvider>(session: &Session<A>, i18n: &I18n, currency_symbol: &str) -> String {
    let mut out = String::new();
    let kwh = i18n.get("unit.kilowatt_hours");

    let _ = writeln!(out, "== {} ==", i18n.get(session.page().title_key()));
    if let Some(notice) = session.last_notice() {
        let _ = writeln!(out, "* {}", i18n.get(notice.message_key()));
    }

    if session.page().requires_login() {
        let menu: Vec<String> = MenuItem::ALL.iter().map(|item| i18n.get(item.label_key())).collect();
        let _ = writeln!(out, "[{}]", menu.join(" | "));
    }

    match session.view() {
        PageView::Login => {
            let _ = writeln!(out, "{}", i18n.get("login.hint"));
        }
        PageView::Register => {
            let _ = writeln!(out, "{}", i18n.get("register.hint"));
        }
        PageView::Dashboard(view) => {
            let s = &view.summary;
            let _ = writeln!(out, "{}, {}", i18n.get("dashboard.welcome"), view.username);
            let _ = writeln!(out, "{}: {}", i18n.get("dashboard.connected_devices"), s.active_count);
            let _ = writeln!(out, "{}: {:.0} {}", i18n.get("dashboard.power_consumption"), s.total_power_watts, i18n.get("unit.watts"));
            let _ = writeln!(out, "{}: {:.2} {}", i18n.get("dashboard.daily_energy"), s.total_daily_kwh, kwh);
            let _ = writeln!(out, "{}: {}{:.2}", i18n.get("dashboard.daily_cost"), currency_symbol, s.estimated_daily_cost);
            let _ = writeln!(out, "{}: {}{:.2}", i18n.get("dashboard.monthly_cost"), currency_symbol, s.estimated_monthly_cost);
            let _ = writeln!(out, "{}: {:.2} {}", i18n.get("dashboard.monthly_co2"), s.monthly_co2_kg, i18n.get("unit.kilograms"));
            let _ = writeln!(out, "{}: {:.0}%", i18n.get("dashboard.energy_saved"), s.energy_saved_pct);
            if s.suggest_eco_mode {
                let _ = writeln!(out, "{}", i18n.get("dashboard.eco_suggestion"));
            }
        }
        PageView::Appliances(rows) => {
            for row in rows {
                let state = if row.powered_on { i18n.get("appliances.on") } else { i18n.get("appliances.off") };
                let _ = write!(
                    out,
                    "{:<16} {:>6.0} {} {:<4} {:<7}",
                    row.name,
                    row.power_watts,
                    i18n.get("unit.watts"),
                    state,
                    row.settings.mode.as_str()
                );
                if let Some(t) = row.settings.temperature_c {
                    let _ = write!(out, " {}\u{00B0}C", t);
                }
                if row.powered_on {
                    let _ = write!(
                        out,
                        "  {:.2} {}{}  {:.1} {}{}  {}{:.2}  CO2 {:.2} {}  {} {:.1} {}",
                        row.usage.daily_kwh,
                        kwh,
                        i18n.get("unit.per_day"),
                        row.usage.monthly_kwh,
                        kwh,
                        i18n.get("unit.per_month"),
                        currency_symbol,
                        row.usage.monthly_cost,
                        row.usage.co2_kg,
                        i18n.get("unit.kilograms"),
                        i18n.get("appliances.eco_savings"),
                        row.usage.eco_savings_kwh,
                        kwh
                    );
                }
                let _ = writeln!(out);
            }
        }
        PageView::Analytics(view) => {
            let _ = writeln!(out, "-- {} --", i18n.get("analytics.breakdown"));
            if view.breakdown.is_empty() {
                let _ = writeln!(out, "{}", i18n.get("analytics.no_devices"));
            }
            for entry in &view.breakdown {
                let _ = writeln!(out, "{:<16} {:>7.2} {} ({:.0}%)", entry.name, entry.daily_kwh, kwh, entry.share_pct);
            }
            for (title, series) in [("analytics.weekly", &view.weekly_sample), ("analytics.trend", &view.trend)] {
                let _ = writeln!(out, "-- {} --", i18n.get(title));
                for (label, value) in series.labels.iter().zip(&series.values) {
                    let bar = "#".repeat(value.round().max(0.0) as usize);
                    let _ = writeln!(out, "{:<4} {:>5.1} {}", label, value, bar);
                }
            }
            let _ = writeln!(out, "({})", i18n.get("analytics.simulated"));
        }
        PageView::Scheduling(view) => {
            let _ = writeln!(out, "-- {} --", i18n.get("scheduling.runs"));
            if view.runs.is_empty() {
                let _ = writeln!(out, "{}", i18n.get("scheduling.empty"));
            }
            for (i, run) in view.runs.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "#{} {:<16} {}-{} {:.1} {}  {:.2} {}  {}{:.2}",
                    i + 1,
                    run.entry.appliance,
                    run.entry.start.format("%H:%M"),
                    run.entry.end.format("%H:%M"),
                    run.duration_hours,
                    i18n.get("unit.hours"),
                    run.kwh,
                    kwh,
                    currency_symbol,
                    run.cost
                );
            }
            let _ = writeln!(out, "{}: {:.2} {}  {}{:.2}", i18n.get("scheduling.total"), view.total_kwh, kwh, currency_symbol, view.total_cost);
            let _ = writeln!(out, "{}: {}%", i18n.get("scheduling.battery"), view.battery_reserve_pct);
        }
        PageView::Report(report) => {
            let _ = writeln!(out, "{}: {}", i18n.get("report.generated"), report.generated_at.format("%Y-%m-%d %H:%M UTC"));
            if report.is_empty() {
                let _ = writeln!(out, "{}", i18n.get("report.empty"));
            }
            for row in &report.rows {
                let _ = writeln!(
                    out,
                    "{:<16} {:>8.1} {}  {}{:>9.2}  CO2 {:>7.2} {}",
                    row.name,
                    row.usage.monthly_kwh,
                    kwh,
                    currency_symbol,
                    row.usage.monthly_cost,
                    row.usage.co2_kg,
                    i18n.get("unit.kilograms")
                );
            }
            let t = &report.totals;
            let _ = writeln!(
                out,
                "{:<16} {:>8.1} {}  {}{:>9.2}  CO2 {:>7.2} {}",
                i18n.get("report.total"),
                t.monthly_kwh,
                kwh,
                currency_symbol,
                t.monthly_cost,
                t.co2_kg,
                i18n.get("unit.kilograms")
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::InMemoryCredentials;
    use crate::catalog::Catalog;
    use crate::energy::EnergyModel;

    fn parse(line: &str) -> Command {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_multi_word_devices() {
        assert_eq!(parse("toggle Air Conditioner"), Command::Toggle("Air Conditioner".into()));
        assert_eq!(parse("power Washing Machine off"), Command::Power("Washing Machine".into(), false));
        assert_eq!(parse("mode Air Conditioner eco"), Command::Mode("Air Conditioner".into(), OperatingMode::Eco));
        assert_eq!(parse("temp Air Conditioner 22"), Command::Temperature("Air Conditioner".into(), 22));

        match parse("schedule Water Heater 23:00 01:00") {
            Command::Schedule { appliance, start, end } => {
                assert_eq!(appliance, "Water Heater");
                assert_eq!(start, NaiveTime::from_hms_opt(23, 0, 0).unwrap());
                assert_eq!(end, NaiveTime::from_hms_opt(1, 0, 0).unwrap());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse("goto analytics"), Command::Go(MenuItem::Analytics));
        assert_eq!(parse("logout"), Command::Go(MenuItem::Logout));
        assert_eq!(parse("register"), Command::Register(None));
        assert_eq!(parse("QUIT"), Command::Quit);
        assert!(parse_command("   ").unwrap().is_none());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_command("login alice"), Err(Error::Validation(_))));
        assert!(matches!(parse_command("power Fan maybe"), Err(Error::Validation(_))));
        assert!(matches!(parse_command("schedule Fan 25:00 01:00"), Err(Error::Validation(_))));
        assert!(matches!(parse_command("unschedule 0"), Err(Error::Validation(_))));
        assert!(matches!(parse_command("goto settings"), Err(Error::Validation(_))));
        assert!(matches!(parse_command("dance"), Err(Error::Validation(_))));
    }

    #[test]
    fn test_apply_and_render_session() {
        let i18n = I18n::new("en");
        let mut session = Session::new(InMemoryCredentials::new(), Catalog::builtin(), EnergyModel::new(6.0, 0.82))
            .with_trend_seed(1);

        for line in ["register alice secret", "login alice secret", "toggle Air Conditioner"] {
            apply(&mut session, parse(line), &i18n).unwrap();
        }

        let text = render(&session, &i18n, "\u{20B9}");
        assert!(text.contains("== Home Dashboard =="));
        assert!(text.contains("Active Devices: 1"));
        assert!(text.contains("Power Consumption: 1800 W"));
        assert!(text.contains("Daily Energy: 10.80 kWh"));
        assert!(text.contains("Estimated Monthly Cost: \u{20B9}1944.00"));

        let json = apply(&mut session, Command::ReportJson, &i18n).unwrap().unwrap();
        assert!(json.contains("\"Air Conditioner\""));
    }

    #[test]
    fn test_render_every_page() {
        let i18n = I18n::new("en");
        let mut session = Session::new(InMemoryCredentials::new(), Catalog::builtin(), EnergyModel::default())
            .with_trend_seed(1);
        assert!(render(&session, &i18n, "$").contains("== Login =="));

        apply(&mut session, parse("register bob pw"), &i18n).unwrap();
        apply(&mut session, parse("login bob pw"), &i18n).unwrap();
        apply(&mut session, parse("schedule Fan 10:00 11:00"), &i18n).unwrap();

        for (page, title) in [
            ("appliances", "Device Control"),
            ("analytics", "Energy Analytics"),
            ("scheduling", "Scheduling"),
            ("report", "Monthly Report"),
        ] {
            apply(&mut session, parse(&format!("goto {}", page)), &i18n).unwrap();
            assert!(render(&session, &i18n, "$").contains(title));
        }
    }
}
