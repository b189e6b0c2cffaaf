//! Field-mapping guidance shown while no categorical data is bound.

use crate::tokens::{card_style, ThemeTokens};
use bgd_engine::EmptyGuidance;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub guidance: EmptyGuidance,
    pub theme: ThemeTokens,
}

/// Static guidance panel enumerating the expected field roles. No data
/// computation happens behind this view.
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    let theme = &props.theme;
    let card = card_style(theme);

    rsx! {
        div {
            style: "{card} max-width: 480px; margin: 40px auto;",
            h3 {
                style: "margin: 0 0 12px 0; font-size: 16px; color: {theme.text_primary};",
                "{props.guidance.title}"
            }
            for field in props.guidance.fields.iter() {
                div {
                    style: "margin-bottom: 10px;",
                    p {
                        style: "margin: 0; font-size: 13px; font-weight: 600; color: {theme.accent};",
                        "{field.name}"
                    }
                    p {
                        style: "margin: 0; font-size: 12px; color: {theme.text_secondary};",
                        "{field.description}"
                    }
                }
            }
        }
    }
}
