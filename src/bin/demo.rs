//! Smart Energy Scheduler - Demo CLI
//!
//! Scripted walkthrough of a session: registration, login, switching
//! appliances on, eco mode, scheduling and the monthly report.

use smart_energy_lib::auth::InMemoryCredentials;
use smart_energy_lib::catalog::Catalog;
use smart_energy_lib::console::render;
use smart_energy_lib::core::{OperatingMode, PricingConfig};
use smart_energy_lib::energy::EnergyModel;
use smart_energy_lib::i18n::I18n;
use smart_energy_lib::session::{parse_time, Action, MenuItem, Session};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   Smart Energy Scheduler - Demo CLI");
    println!("==============================================\n");

    let pricing = PricingConfig::default();
    let i18n = I18n::new("en");
    let symbol = pricing.currency_symbol.clone();

    println!("[1/5] Pricing: {}{} per kWh, {} kg CO2 per kWh\n", symbol, pricing.tariff_per_kwh, pricing.co2_factor_per_kwh);
    let mut session = Session::new(
        InMemoryCredentials::new(),
        Catalog::builtin(),
        EnergyModel::from_config(&pricing),
    )
    .with_trend_seed(2024);

    println!("[2/5] Logging in before registering...");
    match session.handle(Action::login("demo", "demo123")) {
        Ok(_) => println!("      Unexpected: login accepted"),
        Err(e) => println!("      Rejected as expected: {}", e),
    }

    println!("[3/5] Registering and logging in...\n");
    session.handle(Action::ShowRegister)?;
    session.handle(Action::register("demo", "demo123"))?;
    session.handle(Action::login("demo", "demo123"))?;

    println!("[4/5] Switching appliances on...\n");
    for name in ["Air Conditioner", "Refrigerator", "Light", "Television"] {
        session.set_power(name, true)?;
    }
    session.set_mode("Air Conditioner", OperatingMode::Eco)?;
    session.set_temperature("Air Conditioner", 24)?;
    print!("{}", render(&session, &i18n, &symbol));

    session.handle(Action::Select(MenuItem::Appliances))?;
    print!("\n{}", render(&session, &i18n, &symbol));

    session.handle(Action::Select(MenuItem::Analytics))?;
    print!("\n{}", render(&session, &i18n, &symbol));

    println!("\n[5/5] Scheduling off-peak runs...\n");
    session.add_schedule("Washing Machine", parse_time("22:30")?, parse_time("23:30")?)?;
    session.add_schedule("Water Heater", parse_time("05:00")?, parse_time("06:00")?)?;
    session.set_battery_reserve(40)?;
    session.handle(Action::Select(MenuItem::Scheduling))?;
    print!("{}", render(&session, &i18n, &symbol));

    session.handle(Action::Select(MenuItem::Report))?;
    print!("\n{}", render(&session, &i18n, &symbol));

    println!("\n=== Report export ===\n");
    println!("{}", session.report()?.to_json()?);

    session.handle(Action::Select(MenuItem::Logout))?;
    println!("\nSession ended, back on: {:?}", session.page());

    Ok(())
}
