//! KPI tile row.

use crate::tokens::{card_style, ThemeTokens};
use bgd_engine::KpiTile;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct KpiRowProps {
    pub tiles: Vec<KpiTile>,
    pub theme: ThemeTokens,
}

/// Row of KPI tiles. Tiles carrying a share value render a progress bar
/// putting the filtered figure in proportion to the national total.
#[component]
pub fn KpiRow(props: KpiRowProps) -> Element {
    let theme = &props.theme;
    let card = card_style(theme);

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 12px; margin-bottom: 16px;",
            for tile in props.tiles.iter() {
                {
                    let share_width = tile.share_pct.map(|s| format!("{s:.1}"));
                    rsx! {
                        div {
                            style: "{card}",
                            p {
                                style: "color: {theme.text_secondary}; font-size: 11px; margin: 0; text-transform: uppercase; letter-spacing: 1px;",
                                "{tile.label}"
                            }
                            h1 {
                                style: "color: {theme.text_primary}; font-size: 28px; margin: 8px 0; font-weight: 600;",
                                "{tile.value}"
                            }
                            if let Some(width) = share_width {
                                div {
                                    style: "background: {theme.bg_secondary}; border-radius: 4px; height: 8px; overflow: hidden; margin-bottom: 6px;",
                                    div {
                                        style: "background: {theme.accent}; width: {width}%; height: 100%; border-radius: 4px;",
                                    }
                                }
                            }
                            if let Some(detail) = tile.detail.as_ref() {
                                p {
                                    style: "color: {theme.text_secondary}; font-size: 12px; margin: 0;",
                                    "{detail}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
