//! Insight sentence panel.

use crate::tokens::{card_style, ThemeTokens};
use bgd_engine::InsightView;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct InsightPanelProps {
    pub insight: InsightView,
    pub theme: ThemeTokens,
}

/// Highlights the per-capita extremes of the current view.
#[component]
pub fn InsightPanel(props: InsightPanelProps) -> Element {
    let theme = &props.theme;
    let card = card_style(theme);

    rsx! {
        div {
            style: "{card} border-left: 3px solid {theme.accent};",
            p {
                style: "color: {theme.text_secondary}; font-size: 11px; margin: 0 0 6px 0; text-transform: uppercase; letter-spacing: 1px;",
                "Insight"
            }
            p {
                style: "color: {theme.text_primary}; font-size: 13px; margin: 0; line-height: 1.5;",
                "{props.insight.text}"
            }
        }
    }
}
