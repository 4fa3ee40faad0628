//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for card boards. A press on a card only
//! becomes a drag once the pointer travels past a small threshold, so plain
//! clicks still reach the card. Drop targets are slots inside a zone (a
//! board column) or the open tail of a zone.
//!
//! The document listeners are bound once by [`provide_dnd`] at the app root.
//! Boards fetch the shared signals with [`use_dnd`] and route drops to
//! themselves with [`DndSignals::on_drop`] while they are mounted.

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Identifier of a draggable card
pub type DragId = u64;

/// Where the dragged card would land on release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Before the card at `index` of `zone`
    Slot { zone: usize, index: usize },
    /// After the last card of `zone`
    Zone(usize),
}

impl DropTarget {
    pub fn zone(&self) -> usize {
        match self {
            DropTarget::Slot { zone, .. } | DropTarget::Zone(zone) => *zone,
        }
    }
}

/// Card under the pointer when the button went down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragOrigin {
    pub id: DragId,
    pub zone: usize,
    pub index: usize,
}

type DropHandler = Rc<dyn Fn(DragOrigin, Option<DropTarget>)>;

/// Drop handler of the mounted board, tagged so a late cleanup of a
/// previous board cannot unhook its successor
#[derive(Default)]
struct DropSlot {
    generation: u64,
    handler: Option<DropHandler>,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging: RwSignal<Option<DragOrigin>>,
    pub drop_target: RwSignal<Option<DropTarget>>,
    /// Set for a moment after a drop so the trailing click is ignored
    pub drag_just_ended: RwSignal<bool>,
    /// Pressed card that has not moved far enough to count as a drag
    pending: RwSignal<Option<DragOrigin>>,
    start: RwSignal<(i32, i32)>,
    drop_slot: StoredValue<DropSlot, LocalStorage>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;
/// How long clicks are swallowed after a drop
const CLICK_SUPPRESS_MS: i32 = 100;

pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - start.0).abs() > DRAG_THRESHOLD_PX || (current.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals() -> DndSignals {
    DndSignals {
        dragging: RwSignal::new(None),
        drop_target: RwSignal::new(None),
        drag_just_ended: RwSignal::new(false),
        pending: RwSignal::new(None),
        start: RwSignal::new((0, 0)),
        drop_slot: StoredValue::new_local(DropSlot::default()),
    }
}

/// Create the shared DnD signals, bind the document listeners and provide
/// both as context. Call once, from the root component.
pub fn provide_dnd() -> DndSignals {
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd);
    provide_context(dnd);
    dnd
}

/// DnD signals provided by [`provide_dnd`]
pub fn use_dnd() -> DndSignals {
    expect_context::<DndSignals>()
}

impl DndSignals {
    pub fn is_dragging(&self, id: DragId) -> bool {
        self.dragging.get().is_some_and(|origin| origin.id == id)
    }

    pub fn is_target(&self, target: DropTarget) -> bool {
        self.dragging.get().is_some() && self.drop_target.get() == Some(target)
    }

    /// Send drops to `handler` until the calling component is disposed
    pub fn on_drop<F>(&self, handler: F)
    where
        F: Fn(DragOrigin, Option<DropTarget>) + 'static,
    {
        let generation = self.install_drop_handler(Rc::new(handler));
        let dnd = *self;
        on_cleanup(move || dnd.remove_drop_handler(generation));
    }

    fn install_drop_handler(&self, handler: DropHandler) -> u64 {
        self.drop_slot
            .try_update_value(|slot| {
                slot.generation += 1;
                slot.handler = Some(handler);
                slot.generation
            })
            .unwrap_or_default()
    }

    fn remove_drop_handler(&self, generation: u64) {
        self.drop_slot.try_update_value(|slot| {
            if slot.generation == generation {
                slot.handler = None;
            }
        });
    }

    fn dispatch_drop(&self, origin: DragOrigin, target: Option<DropTarget>) {
        let handler = self.drop_slot.try_with_value(|slot| slot.handler.clone()).flatten();
        match handler {
            Some(handler) => handler(origin, target),
            None => log::debug!("card {} dropped with no board mounted", origin.id),
        }
    }

    fn end(&self) {
        self.dragging.set(None);
        self.drop_target.set(None);
        self.pending.set(None);
        self.drag_just_ended.set(true);

        if let Some(win) = web_sys::window() {
            let flag = self.drag_just_ended;
            let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
                flag.set(false);
            });
            let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                CLICK_SUPPRESS_MS,
            );
            cb.forget();
        }
    }
}

/// Mousedown on a card: remember it and where the press started
pub fn make_on_mousedown(dnd: DndSignals, origin: DragOrigin) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
            {
                return;
            }
        }
        dnd.pending.set(Some(origin));
        dnd.start.set((ev.client_x(), ev.client_y()));
    }
}

/// Mouseenter on a card slot or a zone tail
pub fn make_on_target_mouseenter(dnd: DndSignals, target: DropTarget) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.drop_target.set(Some(target));
        }
    }
}

pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging.get_untracked().is_some() {
            dnd.drop_target.set(None);
        }
    }
}

fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(Some(origin)) = dnd.pending.try_get_untracked() else {
            return;
        };
        if dnd.dragging.get_untracked().is_none()
            && exceeds_threshold(dnd.start.get_untracked(), (ev.client_x(), ev.client_y()))
        {
            dnd.dragging.set(Some(origin));
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    }
    on_mousemove.forget();
}

/// Bind the document-level mouseup that finishes a drag.
///
/// The mounted board's handler receives the dragged card and the hovered
/// target, or `None` when the card was released outside every target.
fn bind_global_mouseup(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let (Some(dragging), Some(target)) = (dnd.dragging.try_get_untracked(), dnd.drop_target.try_get_untracked())
        else {
            return;
        };
        dnd.pending.set(None);

        match dragging {
            Some(origin) => {
                dnd.end();
                dnd.dispatch_drop(origin, target);
            }
            // a plain click; let it reach the card
            None => {}
        }
    });

    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counting(hits: &Rc<Cell<u32>>, step: u32) -> DropHandler {
        let hits = Rc::clone(hits);
        Rc::new(move |_, _| hits.set(hits.get() + step))
    }

    #[test]
    fn test_drop_goes_to_latest_board() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = create_dnd_signals();
            let origin = DragOrigin { id: 7, zone: 0, index: 0 };
            let hits = Rc::new(Cell::new(0));

            let first = dnd.install_drop_handler(counting(&hits, 1));
            let second = dnd.install_drop_handler(counting(&hits, 10));
            // the old board is disposed after the new one mounted
            dnd.remove_drop_handler(first);
            dnd.dispatch_drop(origin, Some(DropTarget::Zone(1)));
            assert_eq!(hits.get(), 10);

            dnd.remove_drop_handler(second);
            dnd.dispatch_drop(origin, None);
            assert_eq!(hits.get(), 10);
        });
    }

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_target_zone() {
        assert_eq!(DropTarget::Slot { zone: 2, index: 0 }.zone(), 2);
        assert_eq!(DropTarget::Zone(1).zone(), 1);
    }
}
