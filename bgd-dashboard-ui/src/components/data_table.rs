//! Sortable data table.

use crate::state::AppState;
use crate::tokens::{card_style, ThemeTokens};
use bgd_engine::{Interaction, SortField, TableView};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct GdpDataTableProps {
    pub table: TableView,
    pub theme: ThemeTokens,
}

/// The state table. Header clicks re-sort; clicking the active column flips
/// the direction. Shows at most the first 50 rows while the caption always
/// carries the full filtered count.
#[component]
pub fn GdpDataTable(props: GdpDataTableProps) -> Element {
    let mut state = use_context::<AppState>();
    let theme = &props.theme;
    let table = &props.table;
    let card = card_style(theme);
    let shown = table.rows.len();
    let capped = shown < table.total_rows;

    rsx! {
        div {
            style: "{card}",
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline; margin-bottom: 8px;",
                h3 {
                    style: "margin: 0; font-size: 14px; color: {theme.text_primary};",
                    "{table.total_rows} states"
                }
                if capped {
                    span {
                        style: "font-size: 11px; color: {theme.text_secondary};",
                        "showing first {shown}"
                    }
                }
            }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 12px;",
                thead {
                    tr {
                        for field in SortField::all() {
                            {
                                let indicator = if field == table.sort_field {
                                    if table.sort_asc { " ▲" } else { " ▼" }
                                } else {
                                    ""
                                };
                                let align = if matches!(field, SortField::Name | SortField::Region) {
                                    "left"
                                } else {
                                    "right"
                                };
                                rsx! {
                                    th {
                                        style: "text-align: {align}; padding: 6px 8px; cursor: pointer; color: {theme.text_secondary}; border-bottom: 1px solid {theme.border}; text-transform: uppercase; font-size: 10px; letter-spacing: 1px; user-select: none;",
                                        onclick: move |_| {
                                            state.dashboard.write().on_interaction(Interaction::SortBy(field));
                                        },
                                        "{field.label()}{indicator}"
                                    }
                                }
                            }
                        }
                    }
                }
                tbody {
                    for row in table.rows.iter() {
                        tr {
                            td {
                                style: "padding: 6px 8px; color: {theme.text_primary}; border-bottom: 1px solid {theme.border};",
                                "{row.name}"
                            }
                            td {
                                style: "padding: 6px 8px; color: {theme.text_secondary}; border-bottom: 1px solid {theme.border};",
                                "{row.region}"
                            }
                            td {
                                style: "padding: 6px 8px; color: {theme.text_primary}; text-align: right; border-bottom: 1px solid {theme.border};",
                                "{row.gdp}"
                            }
                            td {
                                style: "padding: 6px 8px; color: {theme.text_primary}; text-align: right; border-bottom: 1px solid {theme.border};",
                                "{row.gdp_per_capita}"
                            }
                            td {
                                style: "padding: 6px 8px; color: {theme.text_secondary}; text-align: right; border-bottom: 1px solid {theme.border};",
                                "{row.population}"
                            }
                            td {
                                style: "padding: 6px 8px; color: {theme.text_secondary}; text-align: right; border-bottom: 1px solid {theme.border};",
                                "{row.municipalities}"
                            }
                        }
                    }
                }
            }
        }
    }
}
