//! Row Item Component
//!
//! One draggable field row: serial, name, type and delete control.
//! Handlers are bound once here and stay with the row when it moves.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{DeleteButton, FieldTypeSelect};
use crate::context::AppContext;
use crate::models::RowId;

/// A single field row
#[component]
pub fn RowItem(row: RowId, dnd: DndSignals) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let key = row.0;

    let data = ctx.row_memo(row);

    let serial = move || data.with(|r| r.as_ref().map_or(0, |r| r.serial));
    let name = move || data.with(|r| r.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let field_type = Signal::derive(move || data.with(|r| r.as_ref().and_then(|r| r.field_type)));

    let on_drop = move |dragged: u32, target: u32| ctx.move_row(RowId(dragged), RowId(target));

    // Visual state
    let item_class = move || {
        let mut c = String::from("dynamic-item");
        if dnd.is_dragging(key) { c.push_str(" dragging"); }
        if dnd.is_drop_target(key) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=item_class
            draggable="true"
            on:dragstart=make_on_dragstart(dnd, key)
            on:dragover=make_on_dragover(dnd, key)
            on:dragleave=make_on_dragleave(dnd, key)
            on:drop=make_on_drop(dnd, key, on_drop)
            on:dragend=make_on_dragend(dnd)
        >
            <div class="dynamic-serial">{serial}</div>
            <input
                type="text"
                placeholder="Name"
                prop:value=name
                on:input=move |ev| ctx.set_name(row, event_target_value(&ev))
            />
            <FieldTypeSelect
                current=field_type
                on_change=move |t| ctx.set_field_type(row, t)
            />
            <DeleteButton row=row />
        </div>
    }
}
