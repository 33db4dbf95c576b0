//! Page-wide state and the boot sequence.
//!
//! One [`Page`] exists per document, held in a thread-local so event
//! handlers and exported functions share it. Boot runs in two phases like the
//! page script it replaces: core behavior on `DOMContentLoaded`, and the
//! secondary enhancements (count-up, smooth scrolling, form validation) after
//! the enhancement delay.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, PageTransitionEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::UiError;
use super::exports::install_globals;
use super::listen::{listen, next_frame, pointer};
use super::observe::register_viewport_watcher;
use super::sink::DomSink;
use super::storage::LocalStore;
use crate::config::UiConfig;
use crate::consts;
use crate::count_up::{CountUpAnimator, Tick};
use crate::forms::FormValidation;
use crate::geom::Point;
use crate::interactions;
use crate::navbar::NavbarScroll;
use crate::progress::ProgressAnimator;
use crate::reveal::RevealTrigger;
use crate::ripple::{self, RippleGeometry};
use crate::sink::ElementId;
use crate::styles::ENHANCEMENT_CSS;
use crate::theme::{ThemeController, ThemeSurface};
use crate::tooltip::Tooltip;

thread_local! {
    static PAGE: RefCell<Option<Rc<Page>>> = const { RefCell::new(None) };
}

pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: UiConfig,
    pub sink: RefCell<DomSink>,
    pub store: RefCell<LocalStore>,
    pub theme: ThemeController,
    pub reveal: RefCell<RevealTrigger>,
    pub progress: RefCell<ProgressAnimator>,
    pub count_up: RefCell<CountUpAnimator>,
    pub navbar: RefCell<NavbarScroll>,
    pub forms: RefCell<FormValidation>,
    pub tooltip: RefCell<Option<Tooltip>>,
    count_timers: RefCell<HashMap<ElementId, Interval>>,
}

impl Page {
    /// The page for this document, created on first use.
    pub fn current() -> Result<Rc<Self>, UiError> {
        if let Some(page) = PAGE.with(|slot| slot.borrow().clone()) {
            return Ok(page);
        }
        let page = Rc::new(Self::new()?);
        PAGE.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&page)));
        Ok(page)
    }

    fn new() -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let document = window.document().ok_or(UiError::NoDocument)?;
        let config = load_config(&document);
        Ok(Self {
            store: RefCell::new(LocalStore::new(&window)),
            sink: RefCell::new(DomSink::new(document.clone())),
            theme: ThemeController::new(&config.theme_key),
            reveal: RefCell::new(RevealTrigger::new(&config.reveal)),
            progress: RefCell::new(ProgressAnimator::new(&config.progress)),
            count_up: RefCell::new(CountUpAnimator::new(&config.count_up, consts::COUNTED_CLASS)),
            navbar: RefCell::new(NavbarScroll::new(config.navbar_scroll_px)),
            forms: RefCell::new(FormValidation::new()),
            tooltip: RefCell::new(None),
            count_timers: RefCell::new(HashMap::new()),
            window,
            document,
            config,
        })
    }

    /// Handles for the elements the theme toggle touches.
    pub fn theme_surface(&self) -> Result<ThemeSurface, UiError> {
        let body = self.document.body().ok_or(UiError::NoBody)?;
        let mut sink = self.sink.borrow_mut();
        let body = sink.register(body.into());
        let icon = sink.by_dom_id(consts::THEME_ICON_ID);
        Ok(ThemeSurface { body, icon })
    }

    /// Forget every watched element and cancel running counts.
    pub fn release(&self) {
        self.reveal.borrow_mut().release();
        self.progress.borrow_mut().release();
        let abandoned = self.count_up.borrow_mut().release();
        let mut timers = self.count_timers.borrow_mut();
        for el in abandoned {
            timers.remove(&el);
        }
        log::debug!("ui: released page state, {} count timer(s) left", timers.len());
    }

    /// Tick `el`'s count on its own interval until it reaches the target.
    pub fn drive_count(self: &Rc<Self>, el: ElementId) {
        let page = Rc::clone(self);
        let interval = Interval::new(self.config.count_up.tick_ms, move || {
            let outcome = {
                let mut sink = page.sink.borrow_mut();
                page.count_up.borrow_mut().tick(el, &mut *sink)
            };
            if outcome == Tick::Done {
                page.count_timers.borrow_mut().remove(&el);
            }
        });
        self.count_timers.borrow_mut().insert(el, interval);
    }
}

/// Read overrides from `<script id="ui-config">`, falling back to defaults.
fn load_config(document: &Document) -> UiConfig {
    let Some(raw) = document
        .get_element_by_id(consts::CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content())
    else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("config: {err}; using defaults");
            UiConfig::default()
        }
    }
}

/// Run the core phase on `DOMContentLoaded` and queue the enhancements.
pub fn schedule_boot(page: &Rc<Page>) {
    if let Err(err) = install_globals(page) {
        log::error!("ui boot: cannot publish page functions: {err}");
    }

    if page.document.ready_state() == "loading" {
        let boot_page = Rc::clone(page);
        let registered = listen(&page.document, "DOMContentLoaded", move |_| boot(&boot_page));
        if let Err(err) = registered {
            log::error!("ui boot: cannot wait for DOMContentLoaded: {err}");
        }
    } else {
        boot(page);
    }

    let enhance_page = Rc::clone(page);
    Timeout::new(page.config.enhancement_delay_ms, move || enhance(&enhance_page)).forget();
}

fn boot(page: &Rc<Page>) {
    let steps: [(&str, fn(&Rc<Page>) -> Result<(), UiError>); 10] = [
        ("styles", inject_styles),
        ("stagger", init_stagger),
        ("theme", init_theme),
        ("navbar", init_navbar),
        ("nav links", init_nav_links),
        ("reveal", init_reveal),
        ("micro-interactions", init_micro_interactions),
        ("progress", init_progress),
        ("tooltips", init_tooltips),
        ("unload", init_unload),
    ];
    run_steps(page, &steps);
}

fn enhance(page: &Rc<Page>) {
    let steps: [(&str, fn(&Rc<Page>) -> Result<(), UiError>); 3] = [
        ("count-up", init_count_up),
        ("smooth scroll", init_smooth_scroll),
        ("form validation", init_form_validation),
    ];
    run_steps(page, &steps);
}

fn run_steps(page: &Rc<Page>, steps: &[(&str, fn(&Rc<Page>) -> Result<(), UiError>)]) {
    for (name, step) in steps {
        if let Err(err) = step(page) {
            log::error!("ui boot: {name} failed: {err}");
        }
    }
}

fn inject_styles(page: &Rc<Page>) -> Result<(), UiError> {
    let Some(head) = page.document.head() else {
        return Ok(());
    };
    let style = page.document.create_element("style")?;
    style.set_text_content(Some(ENHANCEMENT_CSS));
    head.append_child(&style)?;
    Ok(())
}

fn init_stagger(page: &Rc<Page>) -> Result<(), UiError> {
    let mut sink = page.sink.borrow_mut();
    let items = sink.select_all(consts::STAGGER_SELECTOR);
    interactions::ensure_visible(&mut *sink, &items);
    Ok(())
}

fn init_theme(page: &Rc<Page>) -> Result<(), UiError> {
    let surface = page.theme_surface()?;
    let theme = page.theme.restore(&*page.store.borrow(), &mut *page.sink.borrow_mut(), surface);
    log::debug!("theme: restored {}", theme.as_str());
    Ok(())
}

fn init_navbar(page: &Rc<Page>) -> Result<(), UiError> {
    let scroll_page = Rc::clone(page);
    listen(&page.window, "scroll", move |_| {
        if !scroll_page.navbar.borrow_mut().on_scroll() {
            return;
        }
        let frame_page = Rc::clone(&scroll_page);
        next_frame(&scroll_page.window, move || {
            let scroll_y = match frame_page.window.scroll_y() {
                Ok(y) => y,
                Err(err) => {
                    log::debug!("navbar: scrollY unavailable: {err:?}");
                    0.0
                }
            };
            let mut sink = frame_page.sink.borrow_mut();
            let navbar = sink.by_dom_id(consts::NAVBAR_ID);
            frame_page.navbar.borrow_mut().on_frame(scroll_y, navbar, &mut *sink);
        });
    })
}

fn init_nav_links(page: &Rc<Page>) -> Result<(), UiError> {
    let path = page.window.location().pathname()?;
    let mut sink = page.sink.borrow_mut();
    let links = sink
        .select_all(consts::NAV_LINK_SELECTOR)
        .into_iter()
        .map(|el| (el, sink.element(el).and_then(|e| e.get_attribute("href"))))
        .collect::<Vec<_>>();
    interactions::mark_active_links(&mut *sink, &links, &path);
    Ok(())
}

fn init_reveal(page: &Rc<Page>) -> Result<(), UiError> {
    let elements = {
        let mut sink = page.sink.borrow_mut();
        let elements = sink.select_all(consts::REVEAL_SELECTOR);
        page.reveal.borrow_mut().register(&elements, &mut *sink);
        elements
    };
    let config = page.config.reveal.watch();
    register_viewport_watcher(page, &elements, &config, |page, batch| {
        let mut reveal = page.reveal.borrow_mut();
        reveal.on_intersections(batch, &mut *page.sink.borrow_mut());
        reveal.watcher().retired(batch)
    })
}

fn init_micro_interactions(page: &Rc<Page>) -> Result<(), UiError> {
    let click_page = Rc::clone(page);
    listen(&page.document, "click", move |event| {
        let Some(target) = event.target() else {
            return;
        };
        let Some(target) = target.dyn_ref::<Element>() else {
            return;
        };
        let Ok(Some(button)) = target.closest(consts::BUTTON_SELECTOR) else {
            return;
        };
        let Some(click) = pointer(&event) else {
            return;
        };
        spawn_ripple(&click_page, button, click);
    })?;

    let cards = page.sink.borrow_mut().select_all(consts::HOVER_CARD_SELECTOR);
    for card in cards {
        let Some(element) = page.sink.borrow().element(card).cloned() else {
            continue;
        };
        let enter_page = Rc::clone(page);
        listen(&element, "mouseenter", move |_| {
            interactions::hover_enter(&mut *enter_page.sink.borrow_mut(), card);
        })?;
        let leave_page = Rc::clone(page);
        listen(&element, "mouseleave", move |_| {
            interactions::hover_leave(&mut *leave_page.sink.borrow_mut(), card);
        })?;
    }

    let inputs = page.sink.borrow_mut().select_all(consts::INPUT_SELECTOR);
    for input in inputs {
        let (element, parent) = {
            let mut sink = page.sink.borrow_mut();
            let Some(element) = sink.element(input).cloned() else {
                continue;
            };
            let parent = element.parent_element().map(|p| sink.register(p));
            (element, parent)
        };
        let focus_page = Rc::clone(page);
        listen(&element, "focus", move |_| {
            interactions::focus(&mut *focus_page.sink.borrow_mut(), parent);
        })?;
        let blur_page = Rc::clone(page);
        listen(&element, "blur", move |_| {
            interactions::blur(&mut *blur_page.sink.borrow_mut(), parent);
        })?;
    }
    Ok(())
}

/// Spawn a ripple inside `button` at `click` and schedule its removal.
pub fn spawn_ripple(page: &Rc<Page>, button: Element, click: Point) {
    let spawned = {
        let mut sink = page.sink.borrow_mut();
        let button = sink.register(button);
        let Some(rect) = sink.bounding_rect(button) else {
            return;
        };
        ripple::spawn(&mut *sink, button, RippleGeometry::compute(rect, click), page.config.ripple_lifetime_ms)
    };
    let Some(spawned) = spawned else {
        return;
    };
    let remove_page = Rc::clone(page);
    Timeout::new(spawned.remove_after_ms, move || {
        spawned.remove(&mut *remove_page.sink.borrow_mut());
    })
    .forget();
}

fn init_progress(page: &Rc<Page>) -> Result<(), UiError> {
    let bars = page.sink.borrow_mut().select_all(consts::PROGRESS_SELECTOR);
    page.progress.borrow_mut().register(&bars);
    let config = page.config.progress.watch();
    register_viewport_watcher(page, &bars, &config, |page, batch| {
        let mut progress = page.progress.borrow_mut();
        let fills = progress.on_intersections(batch, &mut *page.sink.borrow_mut());
        for fill in fills {
            let fill_page = Rc::clone(page);
            let delay_ms = fill.delay_ms;
            Timeout::new(delay_ms, move || fill.apply(&mut *fill_page.sink.borrow_mut())).forget();
        }
        progress.watcher().retired(batch)
    })
}

fn init_tooltips(page: &Rc<Page>) -> Result<(), UiError> {
    let body = page.document.body().ok_or(UiError::NoBody)?;
    let tooltip = {
        let mut sink = page.sink.borrow_mut();
        let body = sink.register(body.into());
        Tooltip::install(&mut *sink, body, &page.config.tooltip)
    };
    let Some(tooltip) = tooltip else {
        return Ok(());
    };
    *page.tooltip.borrow_mut() = Some(tooltip.clone());

    let targets = page.sink.borrow_mut().select_all(consts::TOOLTIP_SELECTOR);
    for target in targets {
        let Some(element) = page.sink.borrow().element(target).cloned() else {
            continue;
        };

        let (enter_page, enter_tip, enter_el) = (Rc::clone(page), tooltip.clone(), element.clone());
        listen(&element, "mouseenter", move |event| {
            let Some(at) = pointer(&event) else {
                return;
            };
            let text = enter_el.get_attribute(consts::TOOLTIP_ATTRIBUTE).unwrap_or_default();
            enter_tip.show(&mut *enter_page.sink.borrow_mut(), &text, at);
        })?;

        let (move_page, move_tip) = (Rc::clone(page), tooltip.clone());
        listen(&element, "mousemove", move |event| {
            if let Some(at) = pointer(&event) {
                move_tip.follow(&mut *move_page.sink.borrow_mut(), at);
            }
        })?;

        let (leave_page, leave_tip) = (Rc::clone(page), tooltip.clone());
        listen(&element, "mouseleave", move |_| {
            leave_tip.hide(&mut *leave_page.sink.borrow_mut());
        })?;
    }
    Ok(())
}

/// Drop watcher bookkeeping and running count timers when the document goes
/// away for good. Pages parked in the back/forward cache keep their state.
fn init_unload(page: &Rc<Page>) -> Result<(), UiError> {
    let unload_page = Rc::clone(page);
    listen(&page.window, "pagehide", move |event| {
        if event.dyn_ref::<PageTransitionEvent>().is_some_and(PageTransitionEvent::persisted) {
            return;
        }
        unload_page.release();
    })
}

fn init_count_up(page: &Rc<Page>) -> Result<(), UiError> {
    let values = page.sink.borrow_mut().select_all(consts::COUNT_UP_SELECTOR);
    page.count_up.borrow_mut().register(&values);
    let config = page.config.count_up.watch();
    register_viewport_watcher(page, &values, &config, |page, batch| {
        let (started, done) = {
            let mut counts = page.count_up.borrow_mut();
            let started = counts.on_intersections(batch, &mut *page.sink.borrow_mut());
            (started, counts.watcher().retired(batch))
        };
        for el in started {
            page.drive_count(el);
        }
        done
    })
}

fn init_smooth_scroll(page: &Rc<Page>) -> Result<(), UiError> {
    let anchors = page.sink.borrow_mut().select_all(consts::ANCHOR_SELECTOR);
    for anchor in anchors {
        let Some(element) = page.sink.borrow().element(anchor).cloned() else {
            continue;
        };
        let (scroll_page, link) = (Rc::clone(page), element.clone());
        listen(&element, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = interactions::anchor_target(&href)
                .and_then(|id| scroll_page.document.get_element_by_id(id))
            else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(())
}

fn init_form_validation(page: &Rc<Page>) -> Result<(), UiError> {
    let forms = page.sink.borrow_mut().select_all(consts::FORM_SELECTOR);
    for form in forms {
        let Some(element) = page.sink.borrow().element(form).cloned() else {
            continue;
        };
        let (submit_page, form_el) = (Rc::clone(page), element.clone());
        listen(&element, "submit", move |_| on_submit(&submit_page, &form_el))?;
    }
    Ok(())
}

fn on_submit(page: &Rc<Page>, form: &Element) {
    let invalid = match form.query_selector_all(":invalid") {
        Ok(list) => list,
        Err(err) => {
            log::debug!("forms: cannot query invalid controls: {err:?}");
            return;
        }
    };
    let controls = {
        let mut sink = page.sink.borrow_mut();
        let mut controls = Vec::new();
        for index in 0..invalid.length() {
            let Some(node) = invalid.item(index) else {
                continue;
            };
            if let Ok(el) = node.dyn_into::<Element>() {
                controls.push((sink.register(el.clone()), el));
            }
        }
        controls
    };
    let ids = controls.iter().map(|(id, _)| *id).collect::<Vec<_>>();
    let unwired = page.forms.borrow_mut().on_submit(&mut *page.sink.borrow_mut(), &ids);

    for (id, el) in controls.into_iter().filter(|(id, _)| unwired.contains(id)) {
        let (input_page, control) = (Rc::clone(page), el.clone());
        let registered = listen(&el, "input", move |_| {
            let valid = check_validity(&control);
            input_page.forms.borrow().on_input(&mut *input_page.sink.borrow_mut(), id, valid);
        });
        if let Err(err) = registered {
            log::debug!("forms: cannot watch control input: {err}");
        }
    }
}

fn check_validity(el: &Element) -> bool {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.check_validity();
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return select.check_validity();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.check_validity();
    }
    true
}
