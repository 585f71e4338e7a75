//! Side Menu Component
//!
//! Navigation menu that opens on hover on desktop and from a toggle
//! button on mobile. Hosts the settings panel in place of its links.

use leptos::ev;
use leptos::prelude::*;

use crate::components::SettingsPanel;
use crate::store::{is_desktop, store_set_menu_open, store_toggle_customizer, use_ui_store, UiStateStoreFields};

/// Links shown in the menu
const MENU_LINKS: &[(&str, &str)] = &[
    ("#fields", "Fields"),
    ("#about", "About"),
];

/// Hover zone, mobile toggle and the menu itself
#[component]
pub fn SideMenu() -> impl IntoView {
    let store = use_ui_store();

    // Growing past the breakpoint closes the mobile menu
    let resize = window_event_listener(ev::resize, move |_| {
        if is_desktop() && store.menu_open().get_untracked() {
            store_set_menu_open(&store, false);
        }
    });
    on_cleanup(move || resize.remove());

    let menu_class = move || if store.menu_open().get() { "menu show" } else { "menu" };
    let links_class = move || if store.customizer_open().get() { "menu-links hidden" } else { "menu-links" };

    view! {
        <div
            id="hoverZone"
            class="hover-zone"
            on:mouseenter=move |_| {
                if is_desktop() {
                    store_set_menu_open(&store, true);
                }
            }
        />

        <button
            id="mobileMenuBtn"
            class=move || if store.menu_open().get() { "mobile-menu-btn active" } else { "mobile-menu-btn" }
            aria-label="Toggle menu"
            aria-expanded=move || store.menu_open().get().to_string()
            on:click=move |_| {
                let open = !store.menu_open().get_untracked();
                store_set_menu_open(&store, open);
            }
        >
            "☰"
        </button>

        <nav
            id="sideMenu"
            class=menu_class
            on:mouseleave=move |_| {
                if is_desktop() {
                    store_set_menu_open(&store, false);
                }
            }
        >
            <div id="menuLinks" class=links_class>
                {MENU_LINKS.iter().map(|(href, label)| view! {
                    <a class="menu-link-btn" href=*href>{*label}</a>
                }).collect_view()}
            </div>

            <button
                id="toggleCustomizerBtn"
                class="customize-icon-btn"
                aria-label="Customize theme"
                on:click=move |_| {
                    let open = store_toggle_customizer(&store);
                    tracing::debug!("[MENU] settings panel open={}", open);
                }
            >
                "⚙"
            </button>

            <SettingsPanel />
        </nav>
    }
}
