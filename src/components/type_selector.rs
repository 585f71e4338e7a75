//! Field Type Selector Component
//!
//! `<select>` over the field types with an unselected placeholder.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::FieldType;

/// Type selector for a field row
#[component]
pub fn FieldTypeSelect(
    current: Signal<Option<FieldType>>,
    on_change: impl Fn(Option<FieldType>) + Copy + 'static,
) -> impl IntoView {
    let on_select = move |ev: web_sys::Event| {
        let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        else {
            return;
        };
        on_change(FieldType::from_value(&select.value()));
    };

    view! {
        <select class="type-select" on:change=on_select>
            <option value="" prop:selected=move || current.get().is_none()>"Select"</option>
            {FieldType::ALL.iter().map(|field_type| {
                let field_type = *field_type;
                let is_selected = move || current.get() == Some(field_type);
                view! {
                    <option value=field_type.as_str() prop:selected=is_selected>
                        {field_type.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
