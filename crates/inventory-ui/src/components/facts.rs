//! Facts table: hostname, ansible host, UUID, last seen.

use dioxus::prelude::*;
use inventory_core::EntityFacts;

use super::{Skeleton, SkeletonSize};

/// Placeholder sizes for each row, in display order.
const FACT_PLACEHOLDERS: [SkeletonSize; 4] = [
    SkeletonSize::Md,
    SkeletonSize::Md,
    SkeletonSize::Md,
    SkeletonSize::Sm,
];

/// Fixed four-row facts table. Each value is a placeholder until `loaded`.
#[component]
pub fn EntityFactsPanel(loaded: bool, facts: EntityFacts) -> Element {
    rsx! {
        div {
            class: "ins-entity-facts inventory-grid",
            div {
                class: "inventory-grid__item inventory-grid__item--md-6",
                for ((label, value), size) in facts.rows().into_iter().zip(FACT_PLACEHOLDERS) {
                    div {
                        key: "{label}",
                        class: "ins-entity-facts__row",
                        span { class: "ins-entity-facts__label", "{label}" }
                        span {
                            class: "ins-entity-facts__value",
                            if loaded {
                                "{value}"
                            } else {
                                Skeleton { size }
                            }
                        }
                    }
                }
            }
        }
    }
}
