//! `IntersectionObserver` registration for viewport watchers.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::UiError;
use super::page::Page;
use crate::sink::ElementId;
use crate::watcher::{Intersection, WatchConfig};

/// Observe `elements` and hand each batch of samples to `on_batch`, which
/// returns the elements the browser observer should stop reporting.
pub fn register_viewport_watcher(
    page: &Rc<Page>,
    elements: &[ElementId],
    config: &WatchConfig,
    mut on_batch: impl FnMut(&Rc<Page>, &[Intersection]) -> Vec<ElementId> + 'static,
) -> Result<(), UiError> {
    if elements.is_empty() {
        return Ok(());
    }

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    if !config.root_margin.is_empty() {
        init.set_root_margin(&config.root_margin);
    }

    let handler_page = Rc::clone(page);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let batch = {
                let sink = handler_page.sink.borrow();
                let mut batch = Vec::with_capacity(entries.length() as usize);
                for value in entries.iter() {
                    let Some(entry) = value.dyn_ref::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(element) = sink.id_of(&entry.target()) else {
                        continue;
                    };
                    batch.push(Intersection {
                        element,
                        ratio: entry.intersection_ratio(),
                        is_intersecting: entry.is_intersecting(),
                    });
                }
                batch
            };

            let done = on_batch(&handler_page, &batch);

            let sink = handler_page.sink.borrow();
            for el in done {
                if let Some(element) = sink.element(el) {
                    observer.unobserve(element);
                }
            }
        },
    );

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    {
        let sink = page.sink.borrow();
        for &el in elements {
            if let Some(element) = sink.element(el) {
                observer.observe(element);
            }
        }
    }
    callback.forget();
    Ok(())
}
