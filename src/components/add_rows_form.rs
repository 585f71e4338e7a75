//! Add Rows Form Component
//!
//! Single-row add button plus a count input that adds a batch on Enter.

use leptos::prelude::*;

use crate::context::AppContext;

/// Controls for appending field rows
#[component]
pub fn AddRowsForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (count_text, set_count_text) = signal(String::new());

    let add_batch = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Non-positive counts leave both the list and the input alone
        if ctx.append_from_input(&count_text.get_untracked()) {
            set_count_text.set(String::new());
        }
    };

    view! {
        <div class="add-rows">
            <button
                id="addItemBtn"
                type="button"
                class="add-btn"
                on:click=move |_| ctx.append_row()
            >
                "+ Add Field"
            </button>
            <form class="add-multiple-form" on:submit=add_batch>
                <input
                    id="addMultipleInput"
                    type="text"
                    inputmode="numeric"
                    placeholder="Number of fields"
                    prop:value=move || count_text.get()
                    on:input=move |ev| set_count_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>
        </div>
    }
}
