//! Event listener and animation-frame helpers.
//!
//! Listeners registered here live for the whole page, so their closures are
//! intentionally leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, MouseEvent, Window};

use super::UiError;
use crate::geom::Point;

/// Attach `handler` to `event` on `target` for the page's lifetime.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), UiError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `callback` on the next animation frame. Runs it immediately if the
/// frame request is refused.
pub fn next_frame(window: &Window, callback: impl FnOnce() + 'static) {
    let holder = Rc::new(RefCell::new(Some(callback)));
    let holder_for_cb = Rc::clone(&holder);
    let frame = Closure::once_into_js(move || {
        if let Some(callback) = holder_for_cb.borrow_mut().take() {
            callback();
        }
    });
    if let Err(err) = window.request_animation_frame(frame.unchecked_ref()) {
        log::debug!("frame request refused: {err:?}");
        if let Some(callback) = holder.borrow_mut().take() {
            callback();
        }
    }
}

/// Viewport coordinates of a mouse event.
#[must_use]
pub fn pointer(event: &Event) -> Option<Point> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}
