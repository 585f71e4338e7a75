//! Confirm Dialog Component
//!
//! Modal yes/no prompt for the pending delete. Visibility and
//! `aria-hidden` follow the confirmation gate together.

use leptos::ev;
use leptos::prelude::*;

use crate::context::AppContext;

/// Delete confirmation modal
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let open = move || ctx.confirm_pending();

    // Escape counts as "no"
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.resolve_delete(false);
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div
            id="confirmModal"
            class=move || if open() { "modal open" } else { "modal" }
            style:display=move || if open() { "flex" } else { "none" }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!open()).to_string()
            on:click=move |_| ctx.resolve_delete(false)
        >
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <p>"Are you sure you want to delete this item?"</p>
                <div class="modal-actions">
                    <button
                        id="confirmYesBtn"
                        class="confirm-btn"
                        on:click=move |_| ctx.resolve_delete(true)
                    >
                        "Yes"
                    </button>
                    <button
                        id="confirmNoBtn"
                        class="cancel-btn"
                        on:click=move |_| ctx.resolve_delete(false)
                    >
                        "No"
                    </button>
                </div>
            </div>
        </div>
    }
}
