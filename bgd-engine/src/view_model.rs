//! Structured view-model handed to the presentation layer.
//!
//! All display strings are produced here so the Dioxus components (or any
//! other adapter) only place fragments, never format values.

use crate::dashboard::ViewState;
use crate::stats::{aggregate, insight, top_by_gdp_per_capita, top_by_gdp_total};
use crate::view::{filtered_view, sorted_view, SortField};
use bgd_model::StateRecord;
use bgd_utils::format;
use serde::Serialize;
use std::collections::BTreeMap;

/// Most rows the table renders; the row-count label still reports the full
/// filtered count.
pub const TABLE_ROW_LIMIT: usize = 50;
/// Most distinct regions that get a filter chip.
pub const CHIP_LIMIT: usize = 10;
/// Bars per chart.
pub const TOP_SLICE: usize = 10;
/// Characters of a bar label shown before truncation.
pub const BAR_LABEL_MAX: usize = 20;

/// What the presentation layer renders: guidance when no categorical data is
/// bound, the dashboard otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DashboardViewModel {
    Empty(EmptyGuidance),
    Populated(DashboardView),
}

/// Field-mapping guidance shown while no categorical data is bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyGuidance {
    pub title: String,
    pub fields: Vec<FieldGuide>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldGuide {
    pub name: String,
    pub description: String,
}

/// One KPI tile. `share_pct` drives the progress bar under the tile when a
/// region filter puts the value in proportion to the national total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiTile {
    pub label: String,
    pub value: String,
    pub detail: Option<String>,
    pub share_pct: Option<f64>,
}

/// One region filter chip. `region == None` is the "all" chip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionChip {
    pub label: String,
    pub region: Option<String>,
    pub row_count: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
}

/// One chart bar. `label` is display-truncated; `full_label` feeds the
/// tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub full_label: String,
    pub value_label: String,
    pub width_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    /// Full filtered count, independent of the rendered slice.
    pub total_rows: usize,
    pub sort_field: SortField,
    pub sort_asc: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub name: String,
    pub region: String,
    pub gdp: String,
    pub gdp_per_capita: String,
    pub population: String,
    pub municipalities: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightView {
    pub text: String,
}

/// The populated dashboard: KPI tiles, filter chips, two ranked bar charts,
/// the table slice and the insight sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub kpis: Vec<KpiTile>,
    pub chips: Vec<RegionChip>,
    pub per_capita_chart: BarChart,
    pub gdp_chart: BarChart,
    pub table: TableView,
    pub insight: Option<InsightView>,
    pub active_region: Option<String>,
    pub dark_mode: bool,
}

/// Guidance for the five expected field roles.
pub fn guidance() -> EmptyGuidance {
    let field = |name: &str, description: &str| FieldGuide {
        name: name.to_string(),
        description: description.to_string(),
    };
    EmptyGuidance {
        title: "Bind your data to get started".to_string(),
        fields: vec![
            field("State", "Categorical column naming each state or entity"),
            field("Region", "Grouping column behind the filter chips"),
            field("GDP", "Total GDP measure per state"),
            field("GDP per capita", "Per-inhabitant GDP measure"),
            field("Population", "Resident population per state"),
        ],
    }
}

/// Build the populated view-model for the current rows and view state.
pub fn build_view(rows: &[StateRecord], state: &ViewState) -> DashboardView {
    let filtered = filtered_view(rows, state.active_region.as_deref());
    let sorted = sorted_view(&filtered, state.sort_field, state.sort_asc);
    let stats = aggregate(&filtered);
    let national = aggregate(rows);

    DashboardView {
        kpis: build_kpis(&stats, &national, state.active_region.is_some()),
        chips: build_chips(rows, state.active_region.as_deref()),
        per_capita_chart: build_chart(
            "Top 10 GDP per capita",
            top_by_gdp_per_capita(&filtered, TOP_SLICE),
            |r| r.gdp_per_capita,
        ),
        gdp_chart: build_chart("Top 10 GDP", top_by_gdp_total(&filtered, TOP_SLICE), |r| {
            r.gdp_total
        }),
        table: build_table(&sorted, filtered.len(), state),
        insight: build_insight(&filtered),
        active_region: state.active_region.clone(),
        dark_mode: state.dark_mode,
    }
}

fn build_kpis(
    stats: &crate::stats::ViewAggregates,
    national: &crate::stats::ViewAggregates,
    region_filtered: bool,
) -> Vec<KpiTile> {
    let tile = |label: &str, value: String| KpiTile {
        label: label.to_string(),
        value,
        detail: None,
        share_pct: None,
    };

    let mut total_tile = tile("Total GDP", format::currency(stats.total_gdp));
    let mut avg_tile = tile(
        "GDP per capita (avg)",
        format::currency(stats.avg_gdp_per_capita),
    );
    if region_filtered {
        if national.total_gdp > 0.0 {
            let share = (stats.total_gdp / national.total_gdp * 100.0).min(100.0);
            total_tile.detail = Some(format!("{share:.1}% of national total"));
            total_tile.share_pct = Some(share);
        }
        if national.avg_gdp_per_capita > 0.0 {
            let delta = stats.avg_gdp_per_capita / national.avg_gdp_per_capita - 1.0;
            avg_tile.detail = Some(format!("{} vs national average", format::percent(delta)));
        }
    }

    vec![
        total_tile,
        avg_tile,
        tile("Population", format::count(stats.total_population)),
        tile("States", format::count(stats.row_count as f64)),
    ]
}

/// Chips are built from the unfiltered rows so inactive regions stay
/// selectable, alphabetical, capped at [`CHIP_LIMIT`] distinct regions.
fn build_chips(rows: &[StateRecord], active_region: Option<&str>) -> Vec<RegionChip> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in rows {
        *counts.entry(row.region.as_str()).or_default() += 1;
    }

    let mut chips = vec![RegionChip {
        label: "All".to_string(),
        region: None,
        row_count: rows.len(),
        active: active_region.is_none(),
    }];
    chips.extend(counts.into_iter().take(CHIP_LIMIT).map(|(region, count)| {
        RegionChip {
            label: region.to_string(),
            region: Some(region.to_string()),
            row_count: count,
            active: active_region == Some(region),
        }
    }));
    chips
}

fn build_chart<F>(title: &str, slice: Vec<StateRecord>, value: F) -> BarChart
where
    F: Fn(&StateRecord) -> f64,
{
    // The slice arrives sorted descending, so the first bar carries the
    // maximum that scales every width.
    let max = slice.first().map(&value).unwrap_or(0.0);
    let bars = slice
        .iter()
        .map(|record| {
            let v = value(record);
            Bar {
                label: format::truncate_label(&record.name, BAR_LABEL_MAX),
                full_label: record.name.clone(),
                value_label: format::currency(v),
                width_pct: if max > 0.0 { v / max * 100.0 } else { 0.0 },
            }
        })
        .collect();
    BarChart {
        title: title.to_string(),
        bars,
    }
}

fn build_table(sorted: &[StateRecord], total_rows: usize, state: &ViewState) -> TableView {
    TableView {
        rows: sorted
            .iter()
            .take(TABLE_ROW_LIMIT)
            .map(|r| TableRow {
                name: r.name.clone(),
                region: r.region.clone(),
                gdp: format::currency(r.gdp_total),
                gdp_per_capita: format::currency(r.gdp_per_capita),
                population: format::count(r.population),
                municipalities: format::count(r.count as f64),
            })
            .collect(),
        total_rows,
        sort_field: state.sort_field,
        sort_asc: state.sort_asc,
    }
}

fn build_insight(filtered: &[StateRecord]) -> Option<InsightView> {
    let insight = insight(filtered)?;
    let highest_value = format::currency(insight.highest.gdp_per_capita);
    let lowest_value = format::currency(insight.lowest.gdp_per_capita);
    let text = match insight.ratio {
        Some(ratio) => format!(
            "{} has the highest GDP per capita ({}), {} the lowest, {} ({}).",
            insight.highest.name,
            highest_value,
            format::ratio(ratio),
            insight.lowest.name,
            lowest_value
        ),
        None => format!(
            "{} has the highest GDP per capita ({}). The lowest, {} ({}), makes the ratio not applicable.",
            insight.highest.name, highest_value, insight.lowest.name, lowest_value
        ),
    };
    Some(InsightView { text })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, region: &str, gdp_total: f64, gdp_per_capita: f64, population: f64) -> StateRecord {
        StateRecord {
            name: name.to_string(),
            region: region.to_string(),
            gdp_total,
            gdp_per_capita,
            population,
            count: 1,
        }
    }

    fn scenario_rows() -> Vec<StateRecord> {
        vec![
            row("X", "N", 1000.0, 500.0, 10.0),
            row("Y", "S", 2000.0, 100.0, 20.0),
        ]
    }

    #[test]
    fn test_view_all_regions() {
        let view = build_view(&scenario_rows(), &ViewState::default());
        assert_eq!(view.kpis[0].value, "R$ 3.0K");
        assert_eq!(view.kpis[1].value, "R$ 300");
        assert_eq!(view.kpis[3].value, "2");
        // No region filter: no share bar or comparison detail.
        assert!(view.kpis[0].share_pct.is_none());
        assert!(view.kpis[1].detail.is_none());

        let names: Vec<&str> = view
            .per_capita_chart
            .bars
            .iter()
            .map(|b| b.full_label.as_str())
            .collect();
        assert_eq!(names, ["X", "Y"]);

        let text = &view.insight.as_ref().unwrap().text;
        assert!(text.contains("X"), "highest missing: {text}");
        assert!(text.contains("Y"), "lowest missing: {text}");
        assert!(text.contains("5.0x"), "ratio missing: {text}");
    }

    #[test]
    fn test_view_filtered_to_region() {
        let state = ViewState {
            active_region: Some("N".to_string()),
            ..ViewState::default()
        };
        let view = build_view(&scenario_rows(), &state);
        // KPI totals reflect only the filtered row.
        assert_eq!(view.kpis[0].value, "R$ 1.0K");
        assert_eq!(view.table.total_rows, 1);
        // The S chip is still offered, built from the full dataset.
        let s_chip = view.chips.iter().find(|c| c.label == "S").unwrap();
        assert_eq!(s_chip.row_count, 1);
        assert!(!s_chip.active);
        assert!(view.chips.iter().find(|c| c.label == "N").unwrap().active);
        // Share of national total: 1000/3000.
        let share = view.kpis[0].share_pct.unwrap();
        assert!((share - 33.333).abs() < 0.01);
        assert_eq!(view.kpis[0].detail.as_deref(), Some("33.3% of national total"));
    }

    #[test]
    fn test_chips_alphabetical_capped_with_all_first() {
        let rows: Vec<StateRecord> = (0..15)
            .map(|i| row(&format!("S{i}"), &format!("R{:02}", 14 - i), 1.0, 1.0, 1.0))
            .collect();
        let view = build_view(&rows, &ViewState::default());
        assert_eq!(view.chips.len(), 1 + CHIP_LIMIT);
        assert_eq!(view.chips[0].label, "All");
        assert_eq!(view.chips[0].row_count, 15);
        assert_eq!(view.chips[1].label, "R00");
        assert_eq!(view.chips[10].label, "R09");
    }

    #[test]
    fn test_bar_widths_scale_to_slice_max() {
        let rows = vec![
            row("A", "N", 100.0, 400.0, 0.0),
            row("B", "N", 50.0, 200.0, 0.0),
        ];
        let view = build_view(&rows, &ViewState::default());
        assert_eq!(view.per_capita_chart.bars[0].width_pct, 100.0);
        assert_eq!(view.per_capita_chart.bars[1].width_pct, 50.0);
    }

    #[test]
    fn test_bar_widths_zero_when_max_is_zero() {
        let rows = vec![row("A", "N", 0.0, 0.0, 0.0)];
        let view = build_view(&rows, &ViewState::default());
        assert_eq!(view.gdp_chart.bars[0].width_pct, 0.0);
    }

    #[test]
    fn test_bar_label_truncation() {
        let rows = vec![row("A state with a very long name", "N", 10.0, 10.0, 0.0)];
        let view = build_view(&rows, &ViewState::default());
        let bar = &view.gdp_chart.bars[0];
        assert_eq!(bar.label, "A state with a very …");
        assert_eq!(bar.full_label, "A state with a very long name");
    }

    #[test]
    fn test_table_caps_rows_but_reports_full_count() {
        let rows: Vec<StateRecord> = (0..80).map(|i| row(&format!("S{i}"), "N", i as f64, 1.0, 0.0)).collect();
        let view = build_view(&rows, &ViewState::default());
        assert_eq!(view.table.rows.len(), TABLE_ROW_LIMIT);
        assert_eq!(view.table.total_rows, 80);
        // Default sort: GDP descending.
        assert_eq!(view.table.rows[0].name, "S79");
    }

    #[test]
    fn test_empty_filter_result_degrades() {
        let state = ViewState {
            active_region: Some("missing".to_string()),
            ..ViewState::default()
        };
        let view = build_view(&scenario_rows(), &state);
        assert_eq!(view.kpis[0].value, "R$ 0");
        assert!(view.insight.is_none());
        assert!(view.per_capita_chart.bars.is_empty());
        assert_eq!(view.table.total_rows, 0);
    }

    #[test]
    fn test_guidance_lists_five_roles() {
        let guide = guidance();
        assert_eq!(guide.fields.len(), 5);
        assert!(guide.fields.iter().any(|f| f.name == "Region"));
    }
}
