//! Dashboard engine: the reactive pipeline between a host dataset and the
//! rendered dashboard.
//!
//! Data flows extract → filter → sort → aggregate → view-model. The
//! [`dashboard::Dashboard`] owns the row collection and the user's view
//! state, and hands any presentation layer a fully formatted
//! [`view_model::DashboardViewModel`]. Every step is synchronous and total:
//! empty or degenerate inputs degrade to zeros and omitted fragments, never
//! to errors.

pub mod dashboard;
pub mod stats;
pub mod view;
pub mod view_model;

pub use dashboard::{Dashboard, Interaction, Repaint, ViewState};
pub use stats::{
    aggregate, insight, top_by_gdp_per_capita, top_by_gdp_total, Insight, ViewAggregates,
};
pub use view::{filtered_view, sorted_view, SortField};
pub use view_model::{
    Bar, BarChart, DashboardView, DashboardViewModel, EmptyGuidance, FieldGuide, InsightView,
    KpiTile, RegionChip, TableRow, TableView,
};
