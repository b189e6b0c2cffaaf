//! Ranked horizontal bar chart card.

use crate::tokens::{card_style, ThemeTokens};
use bgd_engine::BarChart;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct BarChartCardProps {
    pub chart: BarChart,
    pub theme: ThemeTokens,
}

/// Horizontal bars scaled against the largest value in the slice. Bar labels
/// are display-truncated; the full name rides on the tooltip.
#[component]
pub fn BarChartCard(props: BarChartCardProps) -> Element {
    let theme = &props.theme;
    let card = card_style(theme);

    rsx! {
        div {
            style: "{card}",
            h3 {
                style: "margin: 0 0 12px 0; font-size: 14px; color: {theme.text_primary};",
                "{props.chart.title}"
            }
            for bar in props.chart.bars.iter() {
                {
                    let width = format!("{:.2}", bar.width_pct);
                    rsx! {
                        div {
                            style: "display: flex; align-items: center; gap: 8px; margin-bottom: 6px;",
                            title: "{bar.full_label}",
                            span {
                                style: "flex: 0 0 150px; font-size: 12px; color: {theme.text_secondary}; white-space: nowrap; overflow: hidden;",
                                "{bar.label}"
                            }
                            div {
                                style: "flex: 1; background: {theme.bg_secondary}; border-radius: 4px; height: 14px; overflow: hidden;",
                                div {
                                    style: "background: linear-gradient(90deg, {theme.accent} 0%, {theme.accent_secondary} 100%); width: {width}%; height: 100%; border-radius: 4px;",
                                }
                            }
                            span {
                                style: "flex: 0 0 80px; font-size: 12px; color: {theme.text_primary}; text-align: right;",
                                "{bar.value_label}"
                            }
                        }
                    }
                }
            }
            if props.chart.bars.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: {theme.text_secondary};",
                    "No rows match the current filter."
                }
            }
        }
    }
}
