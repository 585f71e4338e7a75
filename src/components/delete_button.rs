//! Delete Button Component
//!
//! Per-row × button that opens the shared confirmation dialog.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::RowId;

/// Delete control for one row
///
/// Disabled while any confirmation is pending, so one answer can only ever
/// delete the row that asked.
#[component]
pub fn DeleteButton(row: RowId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <button
            class="delete-btn"
            aria-label="Delete Item"
            prop:disabled=move || ctx.confirm_pending()
            on:click=move |ev| {
                ev.stop_propagation();
                ctx.request_delete(row);
            }
        >
            "×"
        </button>
    }
}
