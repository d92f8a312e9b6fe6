//! Loading placeholders.

use dioxus::prelude::*;

/// Width of a loading placeholder, roughly matching the content it stands in for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkeletonSize {
    Sm,
    #[default]
    Md,
    Xl,
}

impl SkeletonSize {
    /// Returns the CSS modifier class for this size.
    pub fn css_class(&self) -> &'static str {
        match self {
            SkeletonSize::Sm => "ins-c-skeleton__sm",
            SkeletonSize::Md => "ins-c-skeleton__md",
            SkeletonSize::Xl => "ins-c-skeleton__xl",
        }
    }
}

/// Animated grey bar shown while data is loading.
#[component]
pub fn Skeleton(#[props(default)] size: SkeletonSize) -> Element {
    rsx! {
        div {
            class: "ins-c-skeleton {size.css_class()}",
            "aria-busy": "true",
            "\u{a0}"
        }
    }
}
