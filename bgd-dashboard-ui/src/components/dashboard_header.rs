//! Dashboard header with title and subtitle.

use crate::tokens::ThemeTokens;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
    pub theme: ThemeTokens,
}

/// Header for the dashboard showing title and optional subtitle.
#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px; color: {props.theme.text_primary};",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: {props.theme.text_secondary};",
                    "{props.subtitle}"
                }
            }
        }
    }
}
