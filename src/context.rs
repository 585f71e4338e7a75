//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::confirm::ConfirmGate;
use crate::models::{FieldType, Row, RowId};
use crate::rows::RowList;

/// Row list and delete confirmation shared by every row
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Field rows in display order
    pub rows: RwSignal<RowList>,
    /// Pending delete prompt, if any
    confirm: RwSignal<ConfirmGate<RowId>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(RowList::new()),
            confirm: RwSignal::new(ConfirmGate::new()),
        }
    }

    pub fn append_row(&self) {
        self.rows.update(|list| {
            let id = list.append_row();
            tracing::debug!("[ROWS] appended {:?}, {} rows", id, list.len());
        });
    }

    /// Batch add from the count input. Returns whether the input should be cleared.
    pub fn append_from_input(&self, input: &str) -> bool {
        self.rows
            .try_update(|list| {
                let added = list.append_from_input(input);
                if added > 0 {
                    tracing::debug!("[ROWS] appended batch of {}, {} rows", added, list.len());
                }
                added > 0
            })
            .unwrap_or(false)
    }

    pub fn move_row(&self, source: RowId, target: RowId) {
        self.rows.update(|list| {
            if list.move_row(source, target) {
                tracing::debug!("[ROWS] moved {:?} next to {:?}", source, target);
            }
        });
    }

    pub fn set_name(&self, id: RowId, name: String) {
        self.rows.update(|list| list.set_name(id, name));
    }

    pub fn set_field_type(&self, id: RowId, field_type: Option<FieldType>) {
        self.rows.update(|list| list.set_field_type(id, field_type));
    }

    /// Ask before deleting `id`; the row goes only on "yes".
    ///
    /// Ignored while another prompt is open.
    pub fn request_delete(&self, id: RowId) {
        let Some(request) = self.confirm.try_update(|gate| gate.request(id)).flatten() else {
            tracing::debug!("[CONFIRM] delete of {:?} ignored, prompt already open", id);
            return;
        };
        tracing::debug!("[CONFIRM] asking about {:?}", id);

        let rows = self.rows;
        spawn_local(async move {
            if request.outcome().await {
                rows.update(|list| {
                    if list.remove_row(id) {
                        tracing::info!("[ROWS] deleted {:?}, {} rows left", id, list.len());
                    }
                });
            } else {
                tracing::debug!("[CONFIRM] kept {:?}", id);
            }
        });
    }

    /// Answer the open prompt. Does nothing when none is open.
    pub fn resolve_delete(&self, confirmed: bool) {
        if !self.confirm.with_untracked(|gate| gate.is_pending()) {
            return;
        }
        self.confirm.update(|gate| {
            gate.resolve(confirmed);
        });
    }

    /// One row's data. Subscribers are notified only when that row changes,
    /// not on edits elsewhere in the list.
    pub fn row_memo(&self, id: RowId) -> Memo<Option<Row>> {
        let rows = self.rows;
        Memo::new(move |_| rows.with(|list| list.get(id).cloned()))
    }

    /// Whether a delete prompt is open
    pub fn confirm_pending(&self) -> bool {
        self.confirm.with(|gate| gate.is_pending())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn setup() -> (Owner, AppContext) {
        let _ = Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();
        (owner, AppContext::new())
    }

    fn ids(ctx: &AppContext) -> Vec<RowId> {
        ctx.rows.with_untracked(|list| list.ids())
    }

    fn serials(ctx: &AppContext) -> Vec<u32> {
        ctx.rows
            .with_untracked(|list| list.rows().iter().map(|row| row.serial).collect())
    }

    #[test]
    fn test_delete_waits_for_answer() {
        let (_owner, ctx) = setup();
        ctx.append_from_input("3");
        let before = ids(&ctx);

        ctx.request_delete(before[1]);
        Executor::poll_local();
        assert!(ctx.confirm_pending());
        assert_eq!(ids(&ctx), before);

        ctx.resolve_delete(false);
        Executor::poll_local();
        assert!(!ctx.confirm_pending());
        assert_eq!(ids(&ctx), before);
    }

    #[test]
    fn test_yes_removes_only_the_asking_row() {
        let (_owner, ctx) = setup();
        ctx.append_from_input("3");
        let before = ids(&ctx);

        ctx.request_delete(before[1]);
        // Ignored: the first prompt is still open
        ctx.request_delete(before[2]);
        Executor::poll_local();

        ctx.resolve_delete(true);
        Executor::poll_local();

        assert_eq!(ids(&ctx), vec![before[0], before[2]]);
        assert_eq!(serials(&ctx), vec![1, 2]);
        assert!(!ctx.confirm_pending());
    }

    #[test]
    fn test_resolve_without_prompt_is_noop() {
        let (_owner, ctx) = setup();
        ctx.append_from_input("2");
        ctx.resolve_delete(true);
        Executor::poll_local();
        assert_eq!(ctx.rows.with_untracked(|list| list.len()), 2);
    }

    #[test]
    fn test_batch_input_cleared_only_after_adding() {
        let (_owner, ctx) = setup();

        assert!(ctx.append_from_input("3"));
        assert_eq!(serials(&ctx), vec![1, 2, 3]);

        assert!(!ctx.append_from_input("0"));
        assert!(!ctx.append_from_input("-5"));
        assert_eq!(serials(&ctx), vec![1, 2, 3]);

        assert!(ctx.append_from_input(""));
        assert_eq!(serials(&ctx), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_row_memo_ignores_other_rows() {
        let (_owner, ctx) = setup();
        ctx.append_from_input("2");
        let ids = ids(&ctx);

        let data = ctx.row_memo(ids[0]);
        let runs = Arc::new(AtomicUsize::new(0));
        let name = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                data.with(|r| r.as_ref().map(|r| r.name.clone()))
            }
        });

        assert_eq!(name.get_untracked(), Some(String::new()));
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        ctx.set_name(ids[1], "other".to_string());
        assert_eq!(name.get_untracked(), Some(String::new()));
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        ctx.set_name(ids[0], "mine".to_string());
        assert_eq!(name.get_untracked(), Some("mine".to_string()));
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }
}
