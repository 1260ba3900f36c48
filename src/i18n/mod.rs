//! Internationalization module
//!
//! Provides translations for French (fr) and English (en) languages.
//! Supports automatic language detection based on system locale.

mod en;
mod fr;

use crate::core::Error;
use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            Self::detect_system_language()
        } else {
            lang.to_string()
        };

        self.translations = match lang.as_str() {
            "fr" => fr::get_translations(),
            _ => en::get_translations(),
        };
        self.current_lang = if lang == "fr" { lang } else { "en".to_string() };

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key, falling back to the key itself
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Category heading followed by the error detail
    pub fn describe_error(&self, error: &Error) -> String {
        format!("{}: {}", self.get(error.category_key()), error.detail())
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Detect system language
    fn detect_system_language() -> String {
        let lang_env = std::env::var("LANG")
            .or_else(|_| std::env::var("LC_ALL"))
            .or_else(|_| std::env::var("LC_MESSAGES"))
            .unwrap_or_else(|_| "en".to_string());

        // "fr_FR.UTF-8" -> "fr"
        let lang_code = lang_env
            .split('_')
            .next()
            .unwrap_or("en")
            .split('.')
            .next()
            .unwrap_or("en");

        match lang_code {
            "fr" => "fr".to_string(),
            _ => "en".to_string(),
        }
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_share_keys() {
        let en = en::get_translations();
        let fr = fr::get_translations();

        let mut missing: Vec<_> = en.keys().filter(|k| !fr.contains_key(*k)).collect();
        missing.sort();
        assert!(missing.is_empty(), "missing French keys: {:?}", missing);
        assert_eq!(en.len(), fr.len());
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let i18n = I18n::new("de");
        assert_eq!(i18n.current_language(), "en");
        assert_eq!(i18n.get("nav.logout"), "Logout");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let i18n = I18n::new("en");
        assert_eq!(i18n.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_describe_error() {
        let i18n = I18n::new("fr");
        let err = Error::Auth("Invalid username or password".into());
        assert_eq!(i18n.describe_error(&err), "Acc\u{00E8}s refus\u{00E9}: Invalid username or password");
    }

    #[test]
    fn test_every_page_and_menu_item_has_a_label() {
        use crate::session::{MenuItem, Page};

        let i18n = I18n::new("en");
        let pages = [
            Page::Login,
            Page::Register,
            Page::Dashboard,
            Page::Appliances,
            Page::Analytics,
            Page::Scheduling,
            Page::Report,
        ];
        for page in pages {
            assert_ne!(i18n.get(page.title_key()), page.title_key());
        }
        for item in MenuItem::ALL {
            assert_ne!(i18n.get(item.label_key()), item.label_key());
        }
    }
}
