//! Settings Panel Component
//!
//! Color pickers, dark mode switch and reset. Every change is written to
//! the preference store right away. Also shows recent log lines when the
//! logger is running.

use console_logger::LogBuffer;
use leptos::prelude::*;

use crate::prefs::{prefers_dark, LocalStorage};
use crate::store::{
    store_reset_theme, store_set_bg_color, store_set_text_color, store_toggle_dark, use_ui_store,
    UiStateStoreFields,
};

/// Theme customization panel
#[component]
pub fn SettingsPanel() -> impl IntoView {
    let store = use_ui_store();
    let open = move || store.customizer_open().get();
    let dark = move || store.dark().get();

    let toggle_dark = move || {
        store_toggle_dark(&store, &LocalStorage, prefers_dark());
        tracing::debug!("[PREFS] dark={}", store.dark().get_untracked());
    };

    view! {
        <div
            id="customizationPanel"
            class=move || if open() { "customization-panel active" } else { "customization-panel" }
            aria-hidden=move || (!open()).to_string()
        >
            <label>
                "Background"
                <input
                    id="bgColorPicker"
                    type="color"
                    prop:value=move || store.theme().with(|t| t.bg_color.clone())
                    on:input=move |ev| store_set_bg_color(&store, &LocalStorage, event_target_value(&ev))
                />
            </label>
            <label>
                "Text"
                <input
                    id="textColorPicker"
                    type="color"
                    prop:value=move || store.theme().with(|t| t.text_color.clone())
                    on:input=move |ev| store_set_text_color(&store, &LocalStorage, event_target_value(&ev))
                />
            </label>

            <div
                id="darkModeToggle"
                class="dark-mode-toggle"
                role="switch"
                tabindex="0"
                aria-checked=move || dark().to_string()
                on:click=move |_| toggle_dark()
                on:keydown=move |ev| {
                    let key = ev.key();
                    if key == "Enter" || key == " " {
                        ev.prevent_default();
                        toggle_dark();
                    }
                }
            >
                <span>"Dark mode"</span>
                <span class=move || if dark() { "toggle-switch active" } else { "toggle-switch" } />
            </div>

            <button
                id="resetBtn"
                class="reset-button"
                on:click=move |_| {
                    store_reset_theme(&store, &LocalStorage);
                    tracing::info!("[PREFS] theme reset");
                }
            >
                "Reset"
            </button>

            <LogView />
        </div>
    }
}

/// Snapshot of the recent log lines, refreshed on demand
#[component]
fn LogView() -> impl IntoView {
    let Some(buffer) = use_context::<LogBuffer>() else {
        return ().into_any();
    };
    let (shown, set_shown) = signal(None::<String>);

    let refresh = {
        let buffer = buffer.clone();
        move |_| set_shown.set(Some(buffer.text()))
    };
    let clear = move |_| {
        buffer.clear();
        set_shown.set(Some(String::new()));
    };

    view! {
        <div class="log-view">
            <button class="log-button" on:click=refresh>"Show log"</button>
            <Show when=move || shown.with(Option::is_some)>
                <button class="log-button" on:click=clear.clone()>"Clear"</button>
                <button class="log-button" on:click=move |_| set_shown.set(None)>"Hide"</button>
                <pre class="log-lines">{move || shown.get().unwrap_or_default()}</pre>
            </Show>
        </div>
    }
    .into_any()
}
