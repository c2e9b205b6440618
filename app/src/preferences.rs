//! FILENAME: app/src/preferences.rs
//! PURPOSE: Theme and language preferences with a small translation table.
//! CONTEXT: Preferences are an explicit context object on AppState.
//! Values persist as plain strings under the `theme` and `language`
//! store keys, exactly as the browser shell kept them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::AppState;

pub const THEME_STORE_KEY: &str = "theme";
pub const LANGUAGE_STORE_KEY: &str = "language";

// ============================================================================
// TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Language {
    En,
    Es,
    Fr,
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

// ============================================================================
// TRANSLATIONS
// ============================================================================

static TRANSLATIONS: Lazy<HashMap<&'static str, HashMap<&'static str, &'static str>>> =
    Lazy::new(|| {
        let mut all = HashMap::new();

        let en: HashMap<&str, &str> = [
            ("dashboard", "Dashboard"),
            ("settings", "Settings"),
            ("goldTracker", "Gold Price Tracker"),
            ("lotteryResults", "Lottery Results"),
            ("loginHistory", "Login History"),
            ("chatGPT", "Chat with GPT"),
            ("adminPanel", "Admin Panel"),
            ("logout", "Logout"),
            ("login", "Login"),
            ("register", "Register"),
            ("email", "Email"),
            ("password", "Password"),
            ("name", "Name"),
            ("search", "Search"),
            ("welcome", "Welcome to the Toolify"),
            ("language", "Language"),
            ("theme", "Theme"),
            ("notifications", "Notifications"),
            ("profile", "Profile"),
        ]
        .into_iter()
        .collect();

        let es: HashMap<&str, &str> = [
            ("dashboard", "Panel Principal"),
            ("settings", "Configuración"),
            ("goldTracker", "Seguimiento de Oro"),
            ("lotteryResults", "Resultados de Lotería"),
            ("loginHistory", "Historial de Inicio de Sesión"),
            ("chatGPT", "Chat con GPT"),
            ("adminPanel", "Panel de Administrador"),
            ("logout", "Cerrar Sesión"),
            ("login", "Iniciar Sesión"),
            ("register", "Registrarse"),
            ("email", "Correo Electrónico"),
            ("password", "Contraseña"),
            ("name", "Nombre"),
            ("search", "Buscar"),
            ("welcome", "Bienvenido al Panel de Utilidades"),
            ("language", "Idioma"),
            ("theme", "Tema"),
            ("notifications", "Notificaciones"),
            ("profile", "Perfil"),
        ]
        .into_iter()
        .collect();

        let fr: HashMap<&str, &str> = [
            ("dashboard", "Tableau de Bord"),
            ("settings", "Paramètres"),
            ("goldTracker", "Suivi de l'Or"),
            ("lotteryResults", "Résultats de Loterie"),
            ("loginHistory", "Historique de Connexion"),
            ("chatGPT", "Discuter avec GPT"),
            ("adminPanel", "Panneau d'Administration"),
            ("logout", "Déconnexion"),
            ("login", "Connexion"),
            ("register", "S'inscrire"),
            ("email", "Email"),
            ("password", "Mot de Passe"),
            ("name", "Nom"),
            ("search", "Rechercher"),
            ("welcome", "Bienvenue sur le Tableau de Bord des Utilitaires"),
            ("language", "Langue"),
            ("theme", "Thème"),
            ("notifications", "Notifications"),
            ("profile", "Profil"),
        ]
        .into_iter()
        .collect();

        all.insert("en", en);
        all.insert("es", es);
        all.insert("fr", fr);
        all
    });

/// Looks up a UI string. Falls back to English, then to the key itself,
/// so a missing translation never breaks rendering.
pub fn translate(language: Language, key: &str) -> String {
    TRANSLATIONS
        .get(language.code())
        .and_then(|table| table.get(key))
        .or_else(|| TRANSLATIONS.get("en").and_then(|table| table.get(key)))
        .map(|text| text.to_string())
        .unwrap_or_else(|| key.to_string())
}

// ============================================================================
// OPERATIONS
// ============================================================================

/// Loads persisted preferences into state; absent or unrecognized
/// values fall back to the defaults.
pub fn load_preferences(state: &AppState) -> Preferences {
    let (theme_raw, language_raw) = {
        let store = state.store.lock().unwrap();
        (store.get(THEME_STORE_KEY), store.get(LANGUAGE_STORE_KEY))
    };

    let preferences = Preferences {
        theme: theme_raw
            .as_deref()
            .and_then(Theme::from_str)
            .unwrap_or_default(),
        language: language_raw
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or_default(),
    };

    *state.preferences.lock().unwrap() = preferences;
    preferences
}

pub fn set_theme(state: &AppState, theme: Theme) {
    state.preferences.lock().unwrap().theme = theme;
    let mut store = state.store.lock().unwrap();
    if let Err(e) = store.set(THEME_STORE_KEY, theme.as_str()) {
        log::warn!("failed to persist theme: {}", e);
    }
}

pub fn toggle_theme(state: &AppState) -> Theme {
    let next = state.preferences.lock().unwrap().theme.toggled();
    set_theme(state, next);
    next
}

pub fn set_language(state: &AppState, language: Language) {
    state.preferences.lock().unwrap().language = language;
    let mut store = state.store.lock().unwrap();
    if let Err(e) = store.set(LANGUAGE_STORE_KEY, language.code()) {
        log::warn!("failed to persist language: {}", e);
    }
}
