//! Tabs for the applications reporting on the entity.

use dioxus::prelude::*;

/// One application tab.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationTab {
    /// Stable identifier, e.g. `"compliance"`.
    pub name: String,
    /// Tab label.
    pub title: String,
}

impl ApplicationTab {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }
}

/// Application tabs shown below the facts. Renders an empty container
/// when no applications are given.
#[component]
pub fn ApplicationDetails(#[props(default)] applications: Vec<ApplicationTab>) -> Element {
    let mut active = use_signal(|| 0usize);
    let active_index = (*active.read()).min(applications.len().saturating_sub(1));
    let active_app = applications.get(active_index).cloned();

    rsx! {
        div {
            class: "ins-entity-detail__apps",

            if !applications.is_empty() {
                div {
                    class: "inventory-tabs",
                    role: "tablist",
                    for (i, app) in applications.iter().enumerate() {
                        {
                            let active_class = if i == active_index { " active" } else { "" };
                            rsx! {
                                button {
                                    key: "{app.name}",
                                    class: "inventory-tab{active_class}",
                                    r#type: "button",
                                    role: "tab",
                                    "aria-selected": "{i == active_index}",
                                    onclick: move |_| active.set(i),
                                    "{app.title}"
                                }
                            }
                        }
                    }
                }
            }

            if let Some(app) = active_app {
                div {
                    class: "ins-entity-detail__app-body",
                    role: "tabpanel",
                    "data-app": "{app.name}",
                }
            }
        }
    }
}
