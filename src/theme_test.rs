use super::*;
use crate::sink::MemorySink;

fn page(with_icon: bool) -> (MemorySink, ThemeSurface) {
    let mut sink = MemorySink::new();
    let body = sink.insert("body");
    let icon = with_icon.then(|| sink.insert("i"));
    (sink, ThemeSurface { body, icon })
}

#[test]
fn theme_round_trips_through_stored_value() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggle_from_empty_store_goes_dark_then_light() {
    let (mut sink, surface) = page(true);
    let mut store = MemoryStore::new();
    let theme = ThemeController::new("theme");

    assert_eq!(theme.toggle(&mut store, &mut sink, surface), Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert!(sink.has_class(surface.body, "dark-mode"));
    assert!(surface.icon.is_some_and(|i| sink.has_class(i, "fa-sun")));

    assert_eq!(theme.toggle(&mut store, &mut sink, surface), Theme::Light);
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert!(!sink.has_class(surface.body, "dark-mode"));
    assert!(surface.icon.is_some_and(|i| sink.has_class(i, "fa-moon") && !sink.has_class(i, "fa-sun")));
}

#[test]
fn restore_dark_preference_without_toggle() {
    let (mut sink, surface) = page(true);
    let mut store = MemoryStore::new();
    store.set("theme", "dark");
    let theme = ThemeController::new("theme");

    assert_eq!(theme.restore(&store, &mut sink, surface), Theme::Dark);
    assert!(sink.has_class(surface.body, "dark-mode"));
    assert_eq!(theme.current(&sink, surface), Theme::Dark);
}

#[test]
fn restore_light_leaves_page_untouched() {
    let (mut sink, surface) = page(true);
    let mut store = MemoryStore::new();
    store.set("theme", "light");
    let theme = ThemeController::new("theme");

    assert_eq!(theme.restore(&store, &mut sink, surface), Theme::Light);
    assert!(!sink.has_class(surface.body, "dark-mode"));
    assert!(surface.icon.is_some_and(|i| sink.element(i).is_some_and(|e| e.classes.is_empty())));
}

#[test]
fn toggle_without_icon_still_persists() {
    let (mut sink, surface) = page(false);
    let mut store = MemoryStore::new();
    let theme = ThemeController::new("theme");
    theme.toggle(&mut store, &mut sink, surface);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn custom_key_is_used() {
    let (mut sink, surface) = page(false);
    let mut store = MemoryStore::new();
    let theme = ThemeController::new("ecoplan.theme");
    theme.toggle(&mut store, &mut sink, surface);
    assert_eq!(store.get("ecoplan.theme").as_deref(), Some("dark"));
    assert_eq!(store.get("theme"), None);
}
