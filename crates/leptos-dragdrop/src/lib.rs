//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop reordering for flat Leptos lists.
//! Rows are addressed by their index in the rendered list.

use leptos::prelude::*;
use web_sys::DragEvent;

/// Move the row at `from` so it ends up at `to`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

/// Gesture state for one list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragState {
    /// Index of the row being dragged
    pub source: Option<usize>,
    /// Row currently hovered as a drop target
    pub hover: Option<usize>,
}

impl DragState {
    /// Begin dragging `index`. Refused while locked or while another drag is live.
    pub fn start(&mut self, index: usize, locked: bool) -> bool {
        if locked || self.source.is_some() {
            return false;
        }
        self.source = Some(index);
        self.hover = None;
        true
    }

    pub fn enter(&mut self, index: usize) {
        if self.source.is_some() {
            self.hover = Some(index);
        }
    }

    pub fn leave(&mut self, index: usize) {
        if self.hover == Some(index) {
            self.hover = None;
        }
    }

    /// Resolve a drop on `target` and return to idle.
    /// Dropping a row on itself yields nothing.
    pub fn drop_on(&mut self, target: usize) -> Option<Reorder> {
        let source = self.source;
        self.end();
        match source {
            Some(from) if from != target => Some(Reorder { from, to: target }),
            _ => None,
        }
    }

    pub fn end(&mut self) {
        *self = Self::default();
    }

    pub fn is_dragging(&self, index: usize) -> bool {
        self.source == Some(index)
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hover == Some(index) && self.source != Some(index)
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub state_read: ReadSignal<DragState>,
    pub state_write: WriteSignal<DragState>,
    /// While true no new drag may start
    pub locked: Signal<bool>,
}

pub fn create_dnd_signals(locked: Signal<bool>) -> DndSignals {
    let (state_read, state_write) = signal(DragState::default());
    DndSignals { state_read, state_write, locked }
}

/// CSS class for a row: `base` plus "dragging" / "drag-over"
pub fn row_class(dnd: DndSignals, index: usize, base: &str) -> String {
    let state = dnd.state_read.get();
    let mut c = String::from(base);
    if state.is_dragging(index) { c.push_str(" dragging"); }
    if state.is_hovered(index) { c.push_str(" drag-over"); }
    c
}

/// dragstart: record source index, announce a move
pub fn make_on_dragstart(dnd: DndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        let locked = dnd.locked.get_untracked();
        let mut started = false;
        dnd.state_write.update(|s| started = s.start(index, locked));
        if !started {
            ev.prevent_default();
            return;
        }
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            // Firefox refuses to start a drag without payload
            let _ = dt.set_data("text/plain", &index.to_string());
        }
    }
}

/// dragover: allow dropping here
pub fn make_on_dragover() -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
    }
}

pub fn make_on_dragenter(dnd: DndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        dnd.state_write.update(|s| s.enter(index));
    }
}

pub fn make_on_dragleave(dnd: DndSignals, index: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        dnd.state_write.update(|s| s.leave(index));
    }
}

/// drop: resolve against the source row and hand the reorder to `on_reorder`
pub fn make_on_drop<F>(dnd: DndSignals, index: usize, on_reorder: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(Reorder) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let mut resolved = None;
        dnd.state_write.update(|s| resolved = s.drop_on(index));
        if let Some(reorder) = resolved {
            on_reorder(reorder);
        }
    }
}

/// dragend: fires on the source row whether or not a drop happened
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        dnd.state_write.update(|s| s.end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_on_other_row_resolves() {
        let mut state = DragState::default();
        assert!(state.start(0, false));
        state.enter(2);
        assert!(state.is_hovered(2));
        assert_eq!(state.drop_on(2), Some(Reorder { from: 0, to: 2 }));
        assert_eq!(state, DragState::default());
    }

    #[test]
    fn test_self_drop_is_noop() {
        let mut state = DragState::default();
        state.start(1, false);
        state.enter(1);
        assert!(!state.is_hovered(1));
        assert_eq!(state.drop_on(1), None);
        assert_eq!(state, DragState::default());
    }

    #[test]
    fn test_locked_refuses_start() {
        let mut state = DragState::default();
        assert!(!state.start(0, true));
        assert_eq!(state.drop_on(1), None);
    }

    #[test]
    fn test_second_start_is_refused() {
        let mut state = DragState::default();
        assert!(state.start(0, false));
        assert!(!state.start(3, false));
        assert!(state.is_dragging(0));
    }

    #[test]
    fn test_enter_without_drag_ignored_and_leave_clears() {
        let mut state = DragState::default();
        state.enter(2);
        assert_eq!(state.hover, None);
        state.start(0, false);
        state.enter(2);
        state.leave(1);
        assert_eq!(state.hover, Some(2));
        state.leave(2);
        assert_eq!(state.hover, None);
    }
}
