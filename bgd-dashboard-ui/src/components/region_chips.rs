//! Region filter chips.

use crate::state::AppState;
use crate::tokens::ThemeTokens;
use bgd_engine::{Interaction, RegionChip};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RegionChipsProps {
    pub chips: Vec<RegionChip>,
    pub theme: ThemeTokens,
}

/// One pill-shaped chip per region plus the leading "All" chip. Clicking a
/// chip narrows every data fragment to that region.
#[component]
pub fn RegionChips(props: RegionChipsProps) -> Element {
    let mut state = use_context::<AppState>();
    let theme = &props.theme;

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 16px;",
            for chip in props.chips.iter() {
                {
                    let region = chip.region.clone();
                    let style = if chip.active {
                        format!(
                            "background: {}; color: {}; border: 1px solid {};",
                            theme.accent, theme.bg_primary, theme.accent
                        )
                    } else {
                        format!(
                            "background: transparent; color: {}; border: 1px solid {};",
                            theme.text_secondary, theme.border
                        )
                    };
                    rsx! {
                        button {
                            style: "{style} padding: 6px 12px; border-radius: 20px; font-size: 12px; font-weight: 500; cursor: pointer; font-family: {theme.font_family};",
                            onclick: move |_| {
                                state.dashboard.write().on_interaction(
                                    Interaction::SelectRegion(region.clone()),
                                );
                            },
                            "{chip.label} ({chip.row_count})"
                        }
                    }
                }
            }
        }
    }
}
