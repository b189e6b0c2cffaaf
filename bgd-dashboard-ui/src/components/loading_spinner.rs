//! Loading indicator component.

use crate::tokens::ThemeTokens;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    pub theme: ThemeTokens,
}

/// Simple loading indicator.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: {props.theme.text_secondary};",
            "Loading data..."
        }
    }
}
