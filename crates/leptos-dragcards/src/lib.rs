//! Leptos DragCards Utilities
//!
//! Pointer and touch drag-and-drop for card lists in Leptos.
//! Both input sources feed the same `DragSession` state machine; a movement
//! threshold distinguishes click/tap from drag.

pub mod geometry;
pub mod session;

pub use geometry::{nearest_column, slot_from_y, Point, Rect};
pub use session::{DragSession, DropOutcome, DRAG_THRESHOLD_PX};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub session_read: ReadSignal<DragSession>,
    pub session_write: WriteSignal<DragSession>,
    /// Set briefly after a drop so the click that follows it can be ignored
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (session_read, session_write) = signal(DragSession::default());
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    DndSignals {
        session_read,
        session_write,
        drag_just_ended_read,
        drag_just_ended_write,
    }
}

/// End the gesture and suppress the trailing click for 100ms
pub fn end_drag(dnd: &DndSignals) {
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            100,
        );
        cb.forget();
    }
}

/// Convert a live DOM rect into plain geometry
pub fn dom_rect(r: &web_sys::DomRect) -> Rect {
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Viewport rect of an element by id, read live from the DOM
pub fn element_rect(id: &str) -> Option<Rect> {
    let doc = web_sys::window()?.document()?;
    let el = doc.get_element_by_id(id)?;
    Some(dom_rect(&el.get_bounding_client_rect()))
}

/// Create mousedown handler for a draggable card.
/// Records a pending gesture with its start position.
pub fn make_on_mousedown(
    dnd: DndSignals,
    card: u32,
    column: usize,
    index: usize,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button (edit field, icons)
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                    return;
                }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                    return;
                }
            }
            let start = Point::new(ev.client_x() as f64, ev.client_y() as f64);
            dnd.session_write.update(|s| s.press(card, column, index, start));
        }
    }
}

/// Create mousemove handler for a sibling card: applies the midpoint rule
/// against the card's own rect. `slot_of(dragged, sibling)` resolves the
/// sibling's slot in the source column with the dragged card removed, or
/// None when the sibling lives in another column.
pub fn make_on_card_mousemove<F>(
    dnd: DndSignals,
    card: u32,
    slot_of: F,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(u32, u32) -> Option<usize> + Clone + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let session = dnd.session_read.get_untracked();
        let Some(dragged) = session.dragging_card() else {
            return;
        };
        if dragged == card {
            return;
        }
        let Some(slot) = slot_of(dragged, card) else {
            return;
        };
        let Some(target) = ev.current_target() else {
            return;
        };
        let Some(el) = target.dyn_ref::<web_sys::Element>().cloned() else {
            return;
        };
        let rect = dom_rect(&el.get_bounding_client_rect());
        let before = geometry::drop_before(ev.client_y() as f64, &rect);
        dnd.session_write.update(|s| s.hover_sibling(slot, before));
    }
}

/// Create mouseenter handler for the empty space below a column's cards:
/// drops past the last card land at the tail. `tail_slot_of(dragged)`
/// resolves the tail slot, or None when this is not the source column.
pub fn make_on_tail_mouseenter<F>(
    dnd: DndSignals,
    tail_slot_of: F,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    F: Fn(u32) -> Option<usize> + Clone + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        let session = dnd.session_read.get_untracked();
        let Some(dragged) = session.dragging_card() else {
            return;
        };
        if let Some(slot) = tail_slot_of(dragged) {
            dnd.session_write.update(|s| s.hover_slot(slot));
        }
    }
}

/// Create mouseenter handler for a column's drop region
pub fn make_on_column_mouseenter(
    dnd: DndSignals,
    column: usize,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.session_read.get_untracked().is_dragging() {
            dnd.session_write.update(|s| s.hover_column(column));
        }
    }
}

/// Bind global mouse handlers: mousemove promotes a pending press past the
/// movement threshold, mouseup releases and hands the outcome to `on_drop`.
pub fn bind_global_mouse<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(DropOutcome) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        // Write the signal only when the move actually changes the session;
        // every document mousemove lands here, dragging or not, and an
        // unconditional update would re-run all column subscribers.
        let mut session = dnd.session_read.get_untracked();
        if matches!(session, DragSession::Idle) {
            return;
        }
        let before = session;
        let point = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        session.move_to(point);
        if session != before {
            dnd.session_write.set(session);
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let was_dragging = dnd.session_read.get_untracked().is_dragging();
        let mut outcome = DropOutcome::None;
        dnd.session_write.update(|s| {
            outcome = s.release();
        });
        if was_dragging {
            end_drag(&dnd);
            on_drop(outcome);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(
                "mousemove",
                on_mousemove.as_ref().unchecked_ref(),
            );
            let _ = doc.add_event_listener_with_callback(
                "mouseup",
                on_mouseup.as_ref().unchecked_ref(),
            );
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

/// Create touchstart handler for a draggable card
pub fn make_on_touchstart(
    dnd: DndSignals,
    card: u32,
    column: usize,
    index: usize,
) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                return;
            }
        }
        if let Some(touch) = ev.touches().get(0) {
            let start = Point::new(touch.client_x() as f64, touch.client_y() as f64);
            dnd.session_write.update(|s| s.press(card, column, index, start));
        }
    }
}

/// Bind global touch handlers. Touch delivers coordinates rather than an
/// element under the pointer, so the column is resolved by Euclidean
/// distance to the column rects and the slot by the card rects.
///
/// `column_rects()` returns the drop regions in column order;
/// `card_rects(column, dragged)` returns the card rects of `column` in
/// display order with the dragged card removed.
pub fn bind_global_touch<C, S, F>(dnd: DndSignals, column_rects: C, card_rects: S, on_drop: F)
where
    C: Fn() -> Vec<Rect> + 'static,
    S: Fn(usize, u32) -> Vec<Rect> + 'static,
    F: Fn(DropOutcome) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_touchmove = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        // Same change-gating as the mouse path: resolve the whole move on a
        // copy and write the signal once, only when something changed
        let mut session = dnd.session_read.get_untracked();
        if matches!(session, DragSession::Idle) {
            return;
        }
        let before = session;
        let point = Point::new(touch.client_x() as f64, touch.client_y() as f64);

        if session.move_to(point) {
            // Stop the page from scrolling under an active drag
            ev.prevent_default();

            if let (Some(dragged), Some(target)) = (
                session.dragging_card(),
                nearest_column(point, &column_rects()),
            ) {
                session.hover_column(target);
                if session.preview_for(target).is_some() {
                    // Over the source column: resolve the insertion slot
                    let slot = slot_from_y(point.y, &card_rects(target, dragged));
                    session.hover_slot(slot);
                }
            }
        }
        if session != before {
            dnd.session_write.set(session);
        }
    });

    let on_touchend = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        let was_dragging = dnd.session_read.get_untracked().is_dragging();
        let mut outcome = DropOutcome::None;
        dnd.session_write.update(|s| {
            outcome = s.release();
        });
        if was_dragging {
            // Keep the browser from synthesizing a click on the drop target
            ev.prevent_default();
            end_drag(&dnd);
            on_drop(outcome);
        }
    });

    let on_touchcancel = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        dnd.session_write.update(|s| s.cancel());
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(
                "touchmove",
                on_touchmove.as_ref().unchecked_ref(),
            );
            let _ = doc.add_event_listener_with_callback(
                "touchend",
                on_touchend.as_ref().unchecked_ref(),
            );
            let _ = doc.add_event_listener_with_callback(
                "touchcancel",
                on_touchcancel.as_ref().unchecked_ref(),
            );
        }
    }
    on_touchmove.forget();
    on_touchend.forget();
    on_touchcancel.forget();
}
