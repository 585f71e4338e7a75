//! Page UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the menu,
//! settings panel and theme.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::prefs::{PreferenceStore, ThemeSettings};

/// Viewport width above which the menu opens on hover
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Menu, panel and theme state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Side menu shown
    pub menu_open: bool,
    /// Settings panel shown in place of the menu links
    pub customizer_open: bool,
    /// Effective dark mode (explicit choice or system preference)
    pub dark: bool,
    /// Persisted colors and mode
    pub theme: ThemeSettings,
}

impl UiState {
    pub fn new(theme: ThemeSettings, prefers_dark: bool) -> Self {
        Self {
            dark: theme.is_dark(prefers_dark),
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// Whether the viewport is wider than the mobile breakpoint
pub fn is_desktop() -> bool {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width > MOBILE_BREAKPOINT_PX)
        .unwrap_or(true)
}

// ========================
// Store Helper Functions
// ========================

/// Show or hide the menu. Hiding it also closes the settings panel.
pub fn store_set_menu_open(store: &UiStore, open: bool) {
    if store.menu_open().get_untracked() != open {
        store.menu_open().set(open);
    }
    if !open && store.customizer_open().get_untracked() {
        store.customizer_open().set(false);
    }
}

/// Flip the settings panel, returning whether it is now open
pub fn store_toggle_customizer(store: &UiStore) -> bool {
    let open = !store.customizer_open().get_untracked();
    store.customizer_open().set(open);
    open
}

pub fn store_set_bg_color(store: &UiStore, prefs: &impl PreferenceStore, color: String) {
    store.theme().write().set_bg_color(prefs, color);
}

pub fn store_set_text_color(store: &UiStore, prefs: &impl PreferenceStore, color: String) {
    store.theme().write().set_text_color(prefs, color);
}

/// Flip dark mode and persist the explicit choice
pub fn store_toggle_dark(store: &UiStore, prefs: &impl PreferenceStore, prefers_dark: bool) {
    let dark = store.theme().write().toggle_dark(prefs, prefers_dark);
    store.dark().set(dark);
}

/// Clear saved preferences, go back to the light default and close the panel
pub fn store_reset_theme(store: &UiStore, prefs: &impl PreferenceStore) {
    store.theme().write().reset(prefs);
    store.dark().set(false);
    store.customizer_open().set(false);
}
