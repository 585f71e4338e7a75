//! Row List View Component
//!
//! Renders the field rows keyed by id, so reordering moves existing row
//! views instead of rebuilding them.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::RowItem;
use crate::context::AppContext;

/// Container of all field rows with DnD support
#[component]
pub fn RowListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // One drag session for the whole list
    let dnd = create_dnd_signals();
    bind_global_cancel(dnd);

    view! {
        <div id="mainContainer" class="dynamic-container">
            <For
                each=move || ctx.rows.with(|list| list.ids())
                key=|id| *id
                children=move |id| view! { <RowItem row=id dnd=dnd /> }
            />
        </div>
        <p class="item-count">{move || format!("{} fields", ctx.rows.with(|list| list.len()))}</p>
    }
}
