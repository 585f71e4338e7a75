//! UI Components
//!
//! Reusable Leptos components.

mod row_item;
mod row_list_view;
mod add_rows_form;
mod type_selector;
mod delete_button;
mod confirm_dialog;
mod side_menu;
mod settings_panel;

pub use row_item::RowItem;
pub use row_list_view::RowListView;
pub use add_rows_form::AddRowsForm;
pub use type_selector::FieldTypeSelect;
pub use delete_button::DeleteButton;
pub use confirm_dialog::ConfirmDialog;
pub use side_menu::SideMenu;
pub use settings_panel::SettingsPanel;
