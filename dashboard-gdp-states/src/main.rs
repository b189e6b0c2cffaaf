//! Brazilian State GDP Dashboard
//!
//! Interactive dashboard over state-level GDP data: KPI tiles, region filter
//! chips, two ranked bar charts, a sortable table and an insight sentence,
//! with a dark/light theme toggle.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/gdp_states.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount the CSV is parsed into a role-tagged `Dataset` and handed to
//!    the engine via `on_data_changed`.
//! 4. Every interaction (chip click, header click, theme toggle) goes through
//!    `on_interaction`; the view-model is rebuilt and the affected fragments
//!    re-render.

use bgd_dashboard_ui::components::{
    BarChartCard, DashboardHeader, EmptyState, ErrorDisplay, GdpDataTable, InsightPanel, KpiRow,
    LoadingSpinner, RegionChips, ThemeToggle,
};
use bgd_dashboard_ui::state::AppState;
use bgd_dashboard_ui::tokens;
use bgd_engine::DashboardViewModel;
use dioxus::prelude::*;

/// State-level GDP data, embedded at compile time.
const GDP_STATES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/gdp_states.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gdp-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Parse the embedded CSV once on mount ───
    use_effect(move || {
        match bgd_model::dataset_from_csv(GDP_STATES_CSV) {
            Ok(dataset) => {
                web_sys::console::log_1(
                    &format!("[BGD] dataset loaded: {} columns", dataset.columns.len()).into(),
                );
                state.dashboard.write().on_data_changed(Some(&dataset));
            }
            Err(err) => {
                log::error!("failed to parse embedded dataset: {err}");
                state
                    .error_msg
                    .set(Some(format!("Failed to load GDP data: {err}")));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Mirror the settings snapshot for host persistence ───
    // Re-runs on every view-state mutation.
    use_effect(move || {
        let settings = state.dashboard.read().settings();
        if let Ok(json) = serde_json::to_string(&settings) {
            web_sys::console::log_1(&format!("[BGD] view settings: {json}").into());
        }
    });

    let dark_mode = state.dashboard.read().view_state().dark_mode;
    let theme = tokens::for_mode(dark_mode);
    let view_model = state.dashboard.read().view_model();

    let body = match view_model {
        DashboardViewModel::Empty(guidance) => rsx! {
            EmptyState { guidance, theme: theme.clone() }
        },
        DashboardViewModel::Populated(view) => rsx! {
            RegionChips { chips: view.chips.clone(), theme: theme.clone() }
            KpiRow { tiles: view.kpis.clone(), theme: theme.clone() }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 12px; margin-bottom: 16px;",
                BarChartCard { chart: view.per_capita_chart.clone(), theme: theme.clone() }
                BarChartCard { chart: view.gdp_chart.clone(), theme: theme.clone() }
            }
            if let Some(insight) = view.insight.clone() {
                div {
                    style: "margin-bottom: 16px;",
                    InsightPanel { insight, theme: theme.clone() }
                }
            }
            GdpDataTable { table: view.table.clone(), theme: theme.clone() }
        },
    };

    // ─── Render ───
    rsx! {
        div {
            style: "min-height: 100vh; background: {theme.bg_primary}; padding: 16px; font-family: {theme.font_family};",
            div {
                style: "max-width: 1100px; margin: 0 auto;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: flex-start;",
                    DashboardHeader {
                        title: "Brazilian State GDP".to_string(),
                        subtitle: "GDP, per-capita and population measures by state and region (IBGE)".to_string(),
                        theme: theme.clone(),
                    }
                    ThemeToggle { dark_mode, theme: theme.clone() }
                }

                if let Some(err) = (state.error_msg)() {
                    ErrorDisplay { message: err, theme: theme.clone() }
                } else if (state.loading)() {
                    LoadingSpinner { theme: theme.clone() }
                } else {
                    {body}
                }
            }
        }
    }
}
