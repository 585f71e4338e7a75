//! Field Rows App
//!
//! Side menu with theme settings, and the editable list of field rows.

use console_logger::LogBuffer;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddRowsForm, ConfirmDialog, RowListView, SideMenu};
use crate::context::AppContext;
use crate::prefs::{apply_theme, prefers_dark, LocalStorage, ThemeSettings};
use crate::store::{UiState, UiStateStoreFields};

/// `log` is the buffer filled by the logger, when it started
#[component]
pub fn App(log: Option<LogBuffer>) -> impl IntoView {
    // Saved theme, falling back to the system color scheme
    let theme = ThemeSettings::load(&LocalStorage);
    let store = Store::new(UiState::new(theme, prefers_dark()));

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new());
    if let Some(buffer) = log {
        provide_context(buffer);
    }

    // Keep CSS variables and the body class in step with the store
    Effect::new(move |_| {
        let dark = store.dark().get();
        store.theme().with(|theme| {
            if let Err(e) = apply_theme(theme, dark) {
                tracing::warn!("[PREFS] apply theme failed: {}", e);
            }
        });
    });

    view! {
        <SideMenu />

        <main class="main-content">
            <h1>"Form Fields"</h1>

            <AddRowsForm />

            <RowListView />
        </main>

        <ConfirmDialog />
    }
}
