//! Smart Energy Scheduler - Main entry point
//!
//! Interactive console session: one command per line on stdin, the
//! current page is printed after every command.

use anyhow::Context;
use smart_energy_lib::auth::provider_for;
use smart_energy_lib::console::{apply, parse_command, render, Command};
use smart_energy_lib::core::Config;
use smart_energy_lib::i18n::I18n;
use smart_energy_lib::session::Session;
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Smart Energy Scheduler v{}", env!("CARGO_PKG_VERSION"));

    // Load or create configuration
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let i18n = I18n::new(&config.general.language);
    let auth = provider_for(config.auth.provider);
    let mut session = Session::from_config(&config, auth).context("Failed to start session")?;
    let symbol = config.pricing.currency_symbol.clone();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", i18n.get("app.title"))?;
    write!(stdout, "{}", render(&session, &i18n, &symbol))?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;

        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => match apply(&mut session, command, &i18n) {
                Ok(Some(extra)) => writeln!(stdout, "{}", extra)?,
                Ok(None) => {}
                Err(e) if e.is_recoverable() => writeln!(stdout, "! {}", i18n.describe_error(&e))?,
                Err(e) => return Err(e).context("Command failed"),
            },
            Err(e) => {
                writeln!(stdout, "! {}", i18n.describe_error(&e))?;
                continue;
            }
        }

        write!(stdout, "{}", render(&session, &i18n, &symbol))?;
        stdout.flush()?;
    }

    writeln!(stdout, "{}", i18n.get("console.goodbye"))?;
    Ok(())
}
