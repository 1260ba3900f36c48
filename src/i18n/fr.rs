//! French translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Planificateur d'\u{00E9}nergie".into());
    t.insert("app.version".into(), "Version".into());

    // Navigation
    t.insert("nav.dashboard".into(), "Accueil".into());
    t.insert("nav.appliances".into(), "Appareils".into());
    t.insert("nav.analytics".into(), "Analyses".into());
    t.insert("nav.scheduling".into(), "Planification".into());
    t.insert("nav.report".into(), "Rapport".into());
    t.insert("nav.logout".into(), "D\u{00E9}connexion".into());

    // Page titles
    t.insert("page.login".into(), "Connexion".into());
    t.insert("page.register".into(), "Inscription".into());
    t.insert("page.dashboard".into(), "Tableau de bord".into());
    t.insert("page.appliances".into(), "Contr\u{00F4}le des appareils".into());
    t.insert("page.analytics".into(), "Analyse \u{00E9}nerg\u{00E9}tique".into());
    t.insert("page.scheduling".into(), "Planification".into());
    t.insert("page.report".into(), "Rapport mensuel".into());

    // Login / registration
    t.insert("login.username".into(), "Nom d'utilisateur".into());
    t.insert("login.password".into(), "Mot de passe".into());
    t.insert("login.hint".into(), "login <utilisateur> <mot de passe>, ou 'register' pour cr\u{00E9}er un compte".into());
    t.insert("register.hint".into(), "register <utilisateur> <mot de passe>, ou 'back' pour revenir".into());

    // Notices
    t.insert("notice.logged_in".into(), "Connexion r\u{00E9}ussie".into());
    t.insert("notice.registered".into(), "Inscription r\u{00E9}ussie, vous pouvez vous connecter".into());
    t.insert("notice.logged_out".into(), "D\u{00E9}connexion r\u{00E9}ussie".into());

    // Dashboard
    t.insert("dashboard.welcome".into(), "Bienvenue".into());
    t.insert("dashboard.connected_devices".into(), "Appareils actifs".into());
    t.insert("dashboard.power_consumption".into(), "Puissance consomm\u{00E9}e".into());
    t.insert("dashboard.daily_energy".into(), "\u{00C9}nergie journali\u{00E8}re".into());
    t.insert("dashboard.daily_cost".into(), "Co\u{00FB}t journalier estim\u{00E9}".into());
    t.insert("dashboard.monthly_cost".into(), "Co\u{00FB}t mensuel estim\u{00E9}".into());
    t.insert("dashboard.monthly_co2".into(), "CO2 mensuel".into());
    t.insert("dashboard.energy_saved".into(), "\u{00C9}nergie \u{00E9}conomis\u{00E9}e".into());
    t.insert("dashboard.eco_suggestion".into(), "Conseil : activez le mode \u{00C9}co pour r\u{00E9}duire la consommation".into());

    // Appliances
    t.insert("appliances.power".into(), "Alimentation".into());
    t.insert("appliances.on".into(), "ALLUM\u{00C9}".into());
    t.insert("appliances.off".into(), "\u{00C9}TEINT".into());
    t.insert("appliances.mode".into(), "Mode de fonctionnement".into());
    t.insert("appliances.temperature".into(), "Temp\u{00E9}rature".into());
    t.insert("appliances.daily".into(), "Par jour".into());
    t.insert("appliances.monthly".into(), "Par mois".into());
    t.insert("appliances.eco_savings".into(), "\u{00C9}conomies \u{00C9}co".into());

    // Analytics
    t.insert("analytics.breakdown".into(), "Consommation par appareil".into());
    t.insert("analytics.weekly".into(), "Consommation hebdomadaire".into());
    t.insert("analytics.trend".into(), "Tendance".into());
    t.insert("analytics.simulated".into(), "Donn\u{00E9}es simul\u{00E9}es".into());
    t.insert("analytics.no_devices".into(), "Aucun appareil allum\u{00E9}".into());

    // Scheduling
    t.insert("scheduling.runs".into(), "Cycles planifi\u{00E9}s".into());
    t.insert("scheduling.empty".into(), "Rien de planifi\u{00E9}".into());
    t.insert("scheduling.battery".into(), "R\u{00E9}serve batterie".into());
    t.insert("scheduling.total".into(), "Total".into());

    // Report
    t.insert("report.generated".into(), "G\u{00E9}n\u{00E9}r\u{00E9} le".into());
    t.insert("report.total".into(), "Total".into());
    t.insert("report.empty".into(), "Aucun appareil allum\u{00E9}".into());

    // Units
    t.insert("unit.watts".into(), "W".into());
    t.insert("unit.kilowatt_hours".into(), "kWh".into());
    t.insert("unit.kilograms".into(), "kg".into());
    t.insert("unit.hours".into(), "h".into());
    t.insert("unit.per_day".into(), "/jour".into());
    t.insert("unit.per_month".into(), "/mois".into());

    // Errors
    t.insert("error.validation".into(), "Saisie invalide".into());
    t.insert("error.auth".into(), "Acc\u{00E8}s refus\u{00E9}".into());
    t.insert("error.conflict".into(), "D\u{00E9}j\u{00E0} existant".into());
    t.insert("error.config".into(), "Erreur de configuration".into());
    t.insert("error.io".into(), "Erreur d'entr\u{00E9}e/sortie".into());
    t.insert("error.serialization".into(), "\u{00C9}chec de l'export".into());
    t.insert("error.unknown_command".into(), "Commande inconnue, tapez 'help'".into());

    // Console
    t.insert("console.help".into(), "Commandes : login, register, back, goto <page>, toggle <appareil>, power <appareil> on|off, mode <appareil> normal|eco|turbo, temp <appareil> <16-30>, schedule <appareil> <HH:MM> <HH:MM>, unschedule <n>, battery <0-100>, report-json, help, quit".into());
    t.insert("console.goodbye".into(), "Au revoir".into());

    t
}
