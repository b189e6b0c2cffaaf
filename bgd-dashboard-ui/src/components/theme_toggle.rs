//! Dark/light theme toggle button.

use crate::state::AppState;
use crate::tokens::ThemeTokens;
use bgd_engine::Interaction;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ThemeToggleProps {
    pub dark_mode: bool,
    pub theme: ThemeTokens,
}

/// Toggles between the dark and light palettes; the whole dashboard repaints.
#[component]
pub fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let mut state = use_context::<AppState>();
    let theme = &props.theme;
    let label = if props.dark_mode { "Light mode" } else { "Dark mode" };

    rsx! {
        button {
            style: "background: transparent; color: {theme.text_secondary}; border: 1px solid {theme.border}; border-radius: {theme.border_radius}; padding: 6px 12px; font-size: 12px; cursor: pointer; font-family: {theme.font_family};",
            onclick: move |_| {
                state.dashboard.write().on_interaction(Interaction::ToggleTheme);
            },
            "{label}"
        }
    }
}
