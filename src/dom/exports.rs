//! Functions callable from page scripts.
//!
//! Each is exported through `wasm-bindgen` and also published on `window`
//! (`window.EcoPlanUI.*` and `window.toggleTheme`) so inline markup handlers
//! such as `onclick="toggleTheme()"` keep working.

use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, MouseEvent};

use super::UiError;
use super::page::{Page, spawn_ripple};
use crate::count_up::{CountUp, Tick};
use crate::geom::Point;
use crate::status::{self, LoadingRestore, StatusKind};

/// Put `element` into the loading state. Returns a function that restores it.
#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading(element: Element, text: Option<String>) -> Result<Function, JsValue> {
    let page = Page::current()?;
    let guard = {
        let mut sink = page.sink.borrow_mut();
        let id = sink.register(element);
        status::show_loading(&mut *sink, id, text.as_deref().unwrap_or("Loading..."))
    };
    let mut restore = LoadingRestore::from(guard);
    let restore = Closure::<dyn FnMut()>::new(move || {
        if !restore.restore(&mut *page.sink.borrow_mut()) {
            log::debug!("status: loading state already restored");
        }
    });
    Ok(restore.into_js_value().unchecked_into::<Function>())
}

/// Render a status alert into `element`, cleared after `duration_ms` unless it is 0.
#[wasm_bindgen(js_name = showStatus)]
pub fn show_status(element: Element, kind: String, message: String, duration_ms: Option<u32>) -> Result<(), JsValue> {
    let page = Page::current()?;
    let duration_ms = duration_ms.unwrap_or(page.config.status_duration_ms);
    let (id, clear_after) = {
        let mut sink = page.sink.borrow_mut();
        let id = sink.register(element);
        (id, status::show_status(&mut *sink, id, StatusKind::parse(&kind), &message, duration_ms))
    };
    if let Some(delay_ms) = clear_after {
        let clear_page = Rc::clone(&page);
        gloo_timers::callback::Timeout::new(delay_ms, move || {
            status::clear_status(&mut *clear_page.sink.borrow_mut(), id);
        })
        .forget();
    }
    Ok(())
}

/// Count `element` up from 0 to `target`. Independent of viewport tracking.
#[wasm_bindgen(js_name = animateCountUp)]
#[allow(clippy::cast_possible_truncation)]
pub fn animate_count_up(element: Element, target: f64, duration_ms: Option<u32>) -> Result<(), JsValue> {
    let page = Page::current()?;
    let duration_ms = duration_ms.unwrap_or(page.config.count_up.duration_ms);
    let tick_ms = page.config.count_up.tick_ms;
    let target = if target.is_finite() { target.trunc() as i64 } else { 0 };

    let mut count = {
        let mut sink = page.sink.borrow_mut();
        let id = sink.register(element);
        let count = CountUp::new(id, target, duration_ms, tick_ms);
        if count.start(&mut *sink) == Tick::Done {
            return Ok(());
        }
        count
    };

    let holder = Rc::new(std::cell::RefCell::new(None::<gloo_timers::callback::Interval>));
    let holder_for_cb = Rc::clone(&holder);
    let interval = gloo_timers::callback::Interval::new(tick_ms, move || {
        if count.tick(&mut *page.sink.borrow_mut()) == Tick::Done {
            holder_for_cb.borrow_mut().take();
        }
    });
    *holder.borrow_mut() = Some(interval);
    Ok(())
}

/// Spawn a ripple in `element` at the event's pointer position.
#[wasm_bindgen(js_name = createRipple)]
pub fn create_ripple(event: MouseEvent, element: Element) -> Result<(), JsValue> {
    let page = Page::current()?;
    let click = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
    spawn_ripple(&page, element, click);
    Ok(())
}

/// Flip between light and dark themes. Returns the new theme name.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<String, JsValue> {
    let page = Page::current()?;
    let surface = page.theme_surface()?;
    let theme = page.theme.toggle(&mut *page.store.borrow_mut(), &mut *page.sink.borrow_mut(), surface);
    Ok(theme.as_str().to_owned())
}

/// Publish the exports on `window` for non-module scripts and inline handlers.
pub fn install_globals(page: &Rc<Page>) -> Result<(), UiError> {
    let namespace = Object::new();
    let entries = [
        ("showLoading", Closure::<dyn Fn(Element, Option<String>) -> Result<Function, JsValue>>::new(show_loading).into_js_value()),
        (
            "showStatus",
            Closure::<dyn Fn(Element, String, String, Option<u32>) -> Result<(), JsValue>>::new(show_status)
                .into_js_value(),
        ),
        (
            "animateCountUp",
            Closure::<dyn Fn(Element, f64, Option<u32>) -> Result<(), JsValue>>::new(animate_count_up).into_js_value(),
        ),
        ("createRipple", Closure::<dyn Fn(MouseEvent, Element) -> Result<(), JsValue>>::new(create_ripple).into_js_value()),
    ];
    for (name, function) in &entries {
        Reflect::set(&namespace, &JsValue::from_str(name), function)?;
    }
    Reflect::set(&page.window, &JsValue::from_str("EcoPlanUI"), &namespace)?;

    let toggle = Closure::<dyn Fn() -> Result<String, JsValue>>::new(toggle_theme).into_js_value();
    Reflect::set(&page.window, &JsValue::from_str("toggleTheme"), &toggle)?;
    Ok(())
}
