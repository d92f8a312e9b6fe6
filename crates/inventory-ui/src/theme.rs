//! Theme system for the inventory detail view.

use dioxus::prelude::*;

/// Available colour themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Parses a theme from its CSS value, case-insensitively.
    pub fn from_css_value(value: &str) -> Option<Theme> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.css_value().eq_ignore_ascii_case(value.trim()))
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }
}

/// Global signal for current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_css_value() {
        assert_eq!(Theme::from_css_value("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_css_value(" LIGHT "), Some(Theme::Light));
        assert_eq!(Theme::from_css_value("neon"), None);
    }

    #[test]
    fn test_css_values_are_unique() {
        let values: Vec<_> = Theme::all().iter().map(Theme::css_value).collect();
        assert_eq!(values, vec!["light", "dark"]);
    }
}
