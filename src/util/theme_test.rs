use super::*;

// =============================================================
// Theme literals
// =============================================================

#[test]
fn parse_accepts_only_exact_literals() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(" dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn checked_maps_to_dark() {
    assert_eq!(Theme::from_checked(true), Theme::Dark);
    assert_eq!(Theme::from_checked(false), Theme::Light);
    assert_eq!(Theme::Dark.to_string(), "dark");
}

// =============================================================
// Startup
// =============================================================

#[test]
fn stored_dark_initializes_checked() {
    let toggle = ThemeToggle::new(MemoryThemeStore::with_value("dark"));
    assert_eq!(toggle.initial(None, None), InitialTheme { apply: Some(Theme::Dark), checked: true });
}

#[test]
fn stored_value_wins_over_rendered_attribute() {
    let toggle = ThemeToggle::new(MemoryThemeStore::with_value("light"));
    assert_eq!(toggle.initial(Some("dark"), Some(true)), InitialTheme { apply: Some(Theme::Light), checked: false });
}

#[test]
fn rendered_attribute_sets_checked_without_rewriting_root() {
    let toggle = ThemeToggle::new(MemoryThemeStore::default());
    assert_eq!(toggle.initial(Some("dark"), None), InitialTheme { apply: None, checked: true });
    assert_eq!(toggle.initial(Some("light"), None), InitialTheme { apply: None, checked: false });
}

#[test]
fn unknown_stored_value_is_ignored() {
    let toggle = ThemeToggle::new(MemoryThemeStore::with_value("sepia"));
    assert_eq!(toggle.stored(), None);
    assert_eq!(toggle.initial(None, None), InitialTheme { apply: None, checked: false });
}

#[test]
fn system_preference_applies_only_when_nothing_else_is_known() {
    let toggle = ThemeToggle::new(MemoryThemeStore::default());
    assert_eq!(toggle.initial(None, Some(true)), InitialTheme { apply: Some(Theme::Dark), checked: true });
    assert_eq!(toggle.initial(Some(""), Some(false)), InitialTheme { apply: Some(Theme::Light), checked: false });
}

#[test]
fn system_preference_is_not_persisted() {
    let toggle = ThemeToggle::new(MemoryThemeStore::default());
    let _ = toggle.initial(None, Some(true));
    assert_eq!(toggle.store().value(), None);
}

// =============================================================
// Toggling
// =============================================================

#[test]
fn toggle_persists_matching_value() {
    let mut toggle = ThemeToggle::new(MemoryThemeStore::default());
    assert_eq!(toggle.toggle(true), Theme::Dark);
    assert_eq!(toggle.store().value(), Some("dark"));
    assert_eq!(toggle.toggle(false), Theme::Light);
    assert_eq!(toggle.store().value(), Some("light"));
}

#[test]
fn toggle_then_reload_restores_checked_state() {
    let mut toggle = ThemeToggle::new(MemoryThemeStore::default());
    toggle.toggle(true);
    let reloaded = ThemeToggle::new(toggle.store().clone());
    assert!(reloaded.initial(Some("light"), None).checked);
}

#[test]
fn unavailable_storage_fails_silently() {
    let mut toggle = ThemeToggle::new(MemoryThemeStore::unavailable());
    assert_eq!(toggle.stored(), None);
    assert_eq!(toggle.toggle(true), Theme::Dark);
    assert_eq!(toggle.store().value(), None);
}
