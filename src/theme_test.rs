use super::*;

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct MemoryHost {
    attribute: Option<String>,
    stored: Option<String>,
    writes: usize,
}

impl MemoryHost {
    fn with_stored(value: &str) -> Self {
        Self { stored: Some(value.to_owned()), ..Default::default() }
    }
}

impl ThemeHost for MemoryHost {
    fn attribute(&self) -> Option<String> {
        self.attribute.clone()
    }

    fn set_attribute(&mut self, theme: Theme) {
        self.attribute = Some(theme.as_str().to_owned());
    }

    fn stored(&self) -> Option<String> {
        self.stored.clone()
    }

    fn store(&mut self, theme: Theme) {
        self.writes += 1;
        self.stored = Some(theme.as_str().to_owned());
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn parse_accepts_only_two_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("blue"), None);
}

#[test]
fn toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn display_matches_storage_string() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.to_string(), "light");
}

// =============================================================
// apply_saved
// =============================================================

#[test]
fn apply_saved_defaults_to_light() {
    let mut host = MemoryHost::default();
    assert_eq!(apply_saved(&mut host), Theme::Light);
    assert_eq!(host.attribute.as_deref(), Some("light"));
    assert_eq!(host.writes, 0);
}

#[test]
fn apply_saved_uses_stored_dark() {
    let mut host = MemoryHost::with_stored("dark");
    assert_eq!(apply_saved(&mut host), Theme::Dark);
    assert_eq!(host.attribute.as_deref(), Some("dark"));
}

#[test]
fn apply_saved_ignores_unknown_value() {
    let mut host = MemoryHost::with_stored("solarized");
    assert_eq!(apply_saved(&mut host), Theme::Light);
    assert_eq!(host.attribute.as_deref(), Some("light"));
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_light_to_dark_and_persists() {
    let mut host = MemoryHost::default();
    apply_saved(&mut host);
    assert_eq!(toggle(&mut host), Theme::Dark);
    assert_eq!(host.attribute.as_deref(), Some("dark"));
    assert_eq!(host.stored.as_deref(), Some("dark"));
}

#[test]
fn toggle_twice_round_trips() {
    for start in ["light", "dark"] {
        let mut host = MemoryHost::with_stored(start);
        apply_saved(&mut host);
        toggle(&mut host);
        toggle(&mut host);
        assert_eq!(host.attribute.as_deref(), Some(start));
        assert_eq!(host.stored.as_deref(), Some(start));
        assert_eq!(host.writes, 2);
    }
}

#[test]
fn toggle_without_attribute_goes_light() {
    let mut host = MemoryHost::default();
    assert_eq!(toggle(&mut host), Theme::Light);
    assert_eq!(host.stored.as_deref(), Some("light"));
}

#[test]
fn toggle_unknown_attribute_goes_light() {
    let mut host = MemoryHost { attribute: Some("sepia".to_owned()), ..Default::default() };
    assert_eq!(toggle(&mut host), Theme::Light);
    assert_eq!(host.attribute.as_deref(), Some("light"));
}
