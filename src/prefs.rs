//! Preference Store
//!
//! Key-value persistence for theme settings, backed by `localStorage`
//! in the browser and by a map in tests.

use wasm_bindgen::JsCast;

pub const KEY_BG_COLOR: &str = "bg-color";
pub const KEY_TEXT_COLOR: &str = "text-color";
pub const KEY_THEME: &str = "theme";

pub const DEFAULT_BG_COLOR: &str = "#ffffff";
pub const DEFAULT_TEXT_COLOR: &str = "#1d1e20";

/// String key-value persistence
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

/// Browser `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or_else(|| "no window".to_string())?
            .local_storage()
            .map_err(|e| format!("{:?}", e))?
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.storage()?.get_item(key).map_err(|e| format!("{:?}", e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.storage()?.set_item(key, value).map_err(|e| format!("{:?}", e))
    }

    fn clear(&self) -> Result<(), String> {
        self.storage()?.clear().map_err(|e| format!("{:?}", e))
    }
}

/// Explicit light/dark choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Read a stored value; anything other than `dark` is light
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

/// Colors and mode as persisted
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSettings {
    pub bg_color: String,
    pub text_color: String,
    /// `None` (nothing stored) follows the system color scheme
    pub mode: Option<ThemeMode>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            bg_color: DEFAULT_BG_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            mode: None,
        }
    }
}

fn read(store: &impl PreferenceStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            tracing::warn!("[PREFS] read {} failed: {}", key, e);
            None
        }
    }
}

fn write(store: &impl PreferenceStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        tracing::warn!("[PREFS] write {} failed: {}", key, e);
    }
}

impl ThemeSettings {
    /// Saved settings with defaults for anything missing
    pub fn load(store: &impl PreferenceStore) -> Self {
        let defaults = Self::default();
        Self {
            bg_color: read(store, KEY_BG_COLOR).unwrap_or(defaults.bg_color),
            text_color: read(store, KEY_TEXT_COLOR).unwrap_or(defaults.text_color),
            mode: read(store, KEY_THEME).map(|raw| ThemeMode::from_stored(&raw)),
        }
    }

    pub fn is_dark(&self, prefers_dark: bool) -> bool {
        match self.mode {
            Some(mode) => mode == ThemeMode::Dark,
            None => prefers_dark,
        }
    }

    pub fn set_bg_color(&mut self, store: &impl PreferenceStore, color: String) {
        write(store, KEY_BG_COLOR, &color);
        self.bg_color = color;
    }

    pub fn set_text_color(&mut self, store: &impl PreferenceStore, color: String) {
        write(store, KEY_TEXT_COLOR, &color);
        self.text_color = color;
    }

    /// Flip the effective mode and persist it. Returns whether dark is now on.
    pub fn toggle_dark(&mut self, store: &impl PreferenceStore, prefers_dark: bool) -> bool {
        let mode = if self.is_dark(prefers_dark) {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        write(store, KEY_THEME, mode.as_str());
        self.mode = Some(mode);
        mode == ThemeMode::Dark
    }

    /// Wipe the store and go back to defaults in light mode
    pub fn reset(&mut self, store: &impl PreferenceStore) {
        if let Err(e) = store.clear() {
            tracing::warn!("[PREFS] clear failed: {}", e);
        }
        *self = Self {
            mode: Some(ThemeMode::Light),
            ..Self::default()
        };
    }
}

/// Whether the system asks for a dark color scheme
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Push colors into the CSS variables and toggle the `dark` body class
pub fn apply_theme(settings: &ThemeSettings, dark: bool) -> Result<(), String> {
    let doc = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| "no document".to_string())?;

    let root = doc
        .document_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| "no root element".to_string())?;
    let style = root.style();
    style
        .set_property("--bg-color", &settings.bg_color)
        .map_err(|e| format!("{:?}", e))?;
    style
        .set_property("--text-color", &settings.text_color)
        .map_err(|e| format!("{:?}", e))?;

    let body = doc.body().ok_or_else(|| "no body".to_string())?;
    body.class_list()
        .toggle_with_force("dark", dark)
        .map_err(|e| format!("{:?}", e))?;
    Ok(())
}
