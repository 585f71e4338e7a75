//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for flat, keyed lists.
//! The whole row is the drag source; dropping on another row moves the
//! source before or after it depending on where it started.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

/// Where the dragged element lands relative to the drop target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// Decide where `source` goes when dropped on `target`.
///
/// Indices are taken from `order` as it is *before* the move. A source that
/// starts above the target lands after it, otherwise before it. Returns
/// `None` for a self-drop or when either key is not in `order`.
pub fn resolve_placement<K: PartialEq>(order: &[K], source: &K, target: &K) -> Option<Placement> {
    if source == target {
        return None;
    }
    let from = order.iter().position(|k| k == source)?;
    let to = order.iter().position(|k| k == target)?;
    if from < to {
        Some(Placement::After)
    } else {
        Some(Placement::Before)
    }
}

/// Move the element keyed `source` next to the element keyed `target`.
///
/// Returns true when the order changed.
pub fn apply_move<T, K, F>(items: &mut Vec<T>, key_of: F, source: &K, target: &K) -> bool
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let keys: Vec<K> = items.iter().map(&key_of).collect();
    let Some(placement) = resolve_placement(&keys, source, target) else {
        return false;
    };
    let Some(from) = keys.iter().position(|k| k == source) else {
        return false;
    };

    let moved = items.remove(from);
    // Target index shifts by one when the source sat in front of it
    let Some(to) = items.iter().position(|item| key_of(item) == *target) else {
        items.insert(from, moved);
        return false;
    };
    let insert_at = match placement {
        Placement::Before => to,
        Placement::After => to + 1,
    };
    items.insert(insert_at, moved);
    true
}

/// Transient state of one drag gesture.
///
/// `Idle` is the default value. A session holds the dragged item and the
/// item currently hovered as a candidate drop target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragSession {
    source: Option<u32>,
    over: Option<u32>,
}

impl DragSession {
    /// Begin dragging `id`. An already active source is overwritten.
    pub fn start(&mut self, id: u32) {
        self.source = Some(id);
        self.over = None;
    }

    /// Mark `id` as hovered. Ignored when nothing is being dragged.
    pub fn hover(&mut self, id: u32) -> bool {
        if self.source.is_none() || self.over == Some(id) {
            return false;
        }
        self.over = Some(id);
        true
    }

    /// Pointer left `id`
    pub fn leave(&mut self, id: u32) {
        if self.over == Some(id) {
            self.over = None;
        }
    }

    /// Drop on `target`: ends the session and yields `(source, target)`
    /// when there is something to move.
    pub fn finish(&mut self, target: u32) -> Option<(u32, u32)> {
        let source = self.source;
        self.end();
        source.filter(|&s| s != target).map(|s| (s, target))
    }

    /// Back to idle, whether or not a drop happened
    pub fn end(&mut self) {
        *self = Self::default();
    }

    pub fn dragging(&self) -> Option<u32> {
        self.source
    }

    pub fn drop_target(&self) -> Option<u32> {
        self.over
    }

    pub fn is_idle(&self) -> bool {
        self.source.is_none() && self.over.is_none()
    }
}

/// DnD state signal shared by every row of one list
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub session: RwSignal<DragSession>,
}

impl DndSignals {
    pub fn is_dragging(&self, id: u32) -> bool {
        self.session.with(|s| s.dragging() == Some(id))
    }

    pub fn is_drop_target(&self, id: u32) -> bool {
        self.session.with(|s| s.drop_target() == Some(id))
    }
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        session: RwSignal::new(DragSession::default()),
    }
}

/// End drag operation and clear every marker
pub fn end_drag(dnd: &DndSignals) {
    if dnd.session.with_untracked(|s| s.is_idle()) {
        return;
    }
    dnd.session.update(|s| s.end());
    tracing::debug!("[DND] session ended");
}

/// dragstart on a row: the row becomes the drag source
pub fn make_on_dragstart(dnd: DndSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // Firefox refuses to start a drag without data
            let _ = dt.set_data("text/plain", "");
        }
        dnd.session.update(|s| s.start(item_id));
        tracing::debug!("[DND] dragstart id={}", item_id);
    }
}

/// dragover on a row: allow dropping and mark the row as a target
pub fn make_on_dragover(dnd: DndSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        let changes = dnd
            .session
            .with_untracked(|s| s.dragging().is_some() && s.drop_target() != Some(item_id));
        if changes {
            dnd.session.update(|s| {
                s.hover(item_id);
            });
        }
    }
}

/// dragleave on a row
pub fn make_on_dragleave(dnd: DndSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        if dnd.session.with_untracked(|s| s.drop_target() == Some(item_id)) {
            dnd.session.update(|s| s.leave(item_id));
        }
    }
}

/// drop on a row: hands `(dragged, target)` to `on_drop` unless it is a self-drop
pub fn make_on_drop<F>(dnd: DndSignals, item_id: u32, on_drop: F) -> impl Fn(DragEvent) + Copy + 'static
where
    F: Fn(u32, u32) + Copy + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        match dnd.session.try_update(|s| s.finish(item_id)).flatten() {
            Some((dragged, target)) => {
                tracing::debug!("[DND] drop dragged={} target={}", dragged, target);
                on_drop(dragged, target);
            }
            None => tracing::debug!("[DND] drop on id={} ignored", item_id),
        }
    }
}

/// dragend on the source: always fires, dropped or not
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| end_drag(&dnd)
}

/// End any drag left hanging when the window loses focus
pub fn bind_global_cancel(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_blur = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        end_drag(&dnd);
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());
    }
    on_blur.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(items: &[char]) -> String {
        items.iter().collect()
    }

    #[test]
    fn test_forward_move_lands_after_target() {
        let mut items = vec!['A', 'B', 'C'];
        assert!(apply_move(&mut items, |c| *c, &'A', &'C'));
        assert_eq!(letters(&items), "BCA");
    }

    #[test]
    fn test_backward_move_lands_before_target() {
        let mut items = vec!['A', 'B', 'C'];
        assert!(apply_move(&mut items, |c| *c, &'C', &'A'));
        assert_eq!(letters(&items), "CAB");
    }

    #[test]
    fn test_adjacent_moves() {
        let mut items = vec!['A', 'B', 'C', 'D'];
        assert!(apply_move(&mut items, |c| *c, &'B', &'C'));
        assert_eq!(letters(&items), "ACBD");

        assert!(apply_move(&mut items, |c| *c, &'B', &'C'));
        assert_eq!(letters(&items), "ABCD");
    }

    #[test]
    fn test_self_drop_is_noop() {
        let mut items = vec!['A', 'B', 'C'];
        assert!(!apply_move(&mut items, |c| *c, &'B', &'B'));
        assert_eq!(letters(&items), "ABC");
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let mut items = vec!['A', 'B', 'C'];
        assert!(!apply_move(&mut items, |c| *c, &'Z', &'A'));
        assert!(!apply_move(&mut items, |c| *c, &'A', &'Z'));
        assert_eq!(letters(&items), "ABC");
    }

    #[test]
    fn test_resolve_placement() {
        let order = [1, 2, 3];
        assert_eq!(resolve_placement(&order, &1, &3), Some(Placement::After));
        assert_eq!(resolve_placement(&order, &3, &1), Some(Placement::Before));
        assert_eq!(resolve_placement(&order, &2, &2), None);
    }

    #[test]
    fn test_session_drop_yields_move_and_resets() {
        let mut session = DragSession::default();
        session.start(1);
        assert!(session.hover(2));
        assert!(session.hover(3));
        assert_eq!(session.drop_target(), Some(3));

        assert_eq!(session.finish(3), Some((1, 3)));
        assert!(session.is_idle());
    }

    #[test]
    fn test_session_self_drop_resets_without_move() {
        let mut session = DragSession::default();
        session.start(2);
        session.hover(2);
        assert_eq!(session.finish(2), None);
        assert!(session.is_idle());
    }

    #[test]
    fn test_hover_without_drag_is_ignored() {
        let mut session = DragSession::default();
        assert!(!session.hover(4));
        assert_eq!(session.drop_target(), None);
        assert_eq!(session.finish(4), None);
    }

    #[test]
    fn test_leave_only_clears_own_marker() {
        let mut session = DragSession::default();
        session.start(1);
        session.hover(2);
        session.leave(3);
        assert_eq!(session.drop_target(), Some(2));
        session.leave(2);
        assert_eq!(session.drop_target(), None);
        assert_eq!(session.dragging(), Some(1));
    }

    #[test]
    fn test_end_clears_all_markers() {
        let mut session = DragSession::default();
        session.start(1);
        session.hover(2);
        session.end();
        assert_eq!(session.dragging(), None);
        assert_eq!(session.drop_target(), None);
    }

    #[test]
    fn test_restart_overwrites_source() {
        let mut session = DragSession::default();
        session.start(1);
        session.hover(3);
        session.start(2);
        assert_eq!(session.dragging(), Some(2));
        assert_eq!(session.drop_target(), None);
        assert_eq!(session.finish(3), Some((2, 3)));
    }
}
