//! Reusable Dioxus RSX components for the BGD dashboard apps.

mod bar_chart;
mod dashboard_header;
mod data_table;
mod empty_state;
mod error_display;
mod insight_panel;
mod kpi_row;
mod loading_spinner;
mod region_chips;
mod theme_toggle;

pub use bar_chart::BarChartCard;
pub use dashboard_header::DashboardHeader;
pub use data_table::GdpDataTable;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use insight_panel::InsightPanel;
pub use kpi_row::KpiRow;
pub use loading_spinner::LoadingSpinner;
pub use region_chips::RegionChips;
pub use theme_toggle::ThemeToggle;
