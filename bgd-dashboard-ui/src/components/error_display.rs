//! Error display component.

use crate::tokens::ThemeTokens;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    pub theme: ThemeTokens,
}

/// Displays a load error in a themed box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let theme = &props.theme;

    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: {theme.bg_secondary}; color: {theme.danger}; border-radius: {theme.border_radius}; border: 1px solid {theme.danger};",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
