//! The dashboard state machine: one owner for rows and view state.

use crate::view::SortField;
use crate::view_model::{build_view, guidance, DashboardViewModel};
use bgd_model::{extract, Dataset, StateRecord};
use serde::{Deserialize, Serialize};

/// User-chosen view selections, sticky across dataset refreshes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Selected region chip; `None` means all regions.
    pub active_region: Option<String>,
    pub sort_field: SortField,
    pub sort_asc: bool,
    pub dark_mode: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            active_region: None,
            sort_field: SortField::GdpTotal,
            sort_asc: false,
            dark_mode: true,
        }
    }
}

/// A discrete user event fed to the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Region chip click; `None` selects all regions.
    SelectRegion(Option<String>),
    /// Column header click.
    SortBy(SortField),
    /// Dark/light toggle.
    ToggleTheme,
}

/// How much of the rendered output a transition invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repaint {
    /// Theme change or dataset replacement: rebuild everything.
    Full,
    /// Filter or sort change: redraw the data fragments only.
    Fragments,
}

/// Owns the extracted rows and the [`ViewState`]; every mutation happens
/// through [`Dashboard::on_data_changed`] or [`Dashboard::on_interaction`],
/// synchronously, on the caller's thread.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    rows: Vec<StateRecord>,
    has_data: bool,
    state: ViewState,
}

impl Dashboard {
    pub fn new() -> Self {
        Dashboard::default()
    }

    /// Host update entry point. A dataset without a categorical column (or
    /// no dataset at all) empties the dashboard; anything else replaces the
    /// row collection. View selections survive either way.
    pub fn on_data_changed(&mut self, dataset: Option<&Dataset>) -> Repaint {
        match dataset {
            Some(ds) if ds.is_categorical() => {
                self.rows = extract(ds);
                self.has_data = true;
                log::debug!("dataset replaced: {} rows", self.rows.len());
            }
            _ => {
                self.rows.clear();
                self.has_data = false;
                log::debug!("dataset cleared: no categorical data bound");
            }
        }
        Repaint::Full
    }

    /// UI event entry point. Clicking the active sort column flips the
    /// direction; clicking another column selects it descending.
    pub fn on_interaction(&mut self, event: Interaction) -> Repaint {
        match event {
            Interaction::SelectRegion(region) => {
                self.state.active_region = region;
                Repaint::Fragments
            }
            Interaction::SortBy(field) => {
                if self.state.sort_field == field {
                    self.state.sort_asc = !self.state.sort_asc;
                } else {
                    self.state.sort_field = field;
                    self.state.sort_asc = false;
                }
                Repaint::Fragments
            }
            Interaction::ToggleTheme => {
                self.state.dark_mode = !self.state.dark_mode;
                Repaint::Full
            }
        }
    }

    /// The extracted rows of the current snapshot.
    pub fn rows(&self) -> &[StateRecord] {
        &self.rows
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// Read-only settings snapshot the host may persist between sessions.
    pub fn settings(&self) -> ViewState {
        self.state.clone()
    }

    /// Produce the view-model for the current state. Empty while no
    /// categorical data is bound; populated otherwise, even when the active
    /// filter matches nothing.
    pub fn view_model(&self) -> DashboardViewModel {
        if self.has_data {
            DashboardViewModel::Populated(build_view(&self.rows, &self.state))
        } else {
            DashboardViewModel::Empty(guidance())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bgd_model::{CellValue, Column, Role};

    fn dataset(names: &[&str], regions: &[&str], gdp: &[f64]) -> Dataset {
        Dataset::new(vec![
            Column::new(
                "state",
                Role::Category,
                names.iter().map(|v| CellValue::Text(v.to_string())).collect(),
            ),
            Column::new(
                "region",
                Role::Region,
                regions.iter().map(|v| CellValue::Text(v.to_string())).collect(),
            ),
            Column::new(
                "gdp",
                Role::GdpTotal,
                gdp.iter().map(|v| CellValue::Number(*v)).collect(),
            ),
        ])
    }

    fn populated() -> Dashboard {
        let mut dashboard = Dashboard::new();
        dashboard.on_data_changed(Some(&dataset(
            &["X", "Y"],
            &["N", "S"],
            &[1000.0, 2000.0],
        )));
        dashboard
    }

    #[test]
    fn test_starts_empty() {
        let dashboard = Dashboard::new();
        assert!(matches!(dashboard.view_model(), DashboardViewModel::Empty(_)));
    }

    #[test]
    fn test_empty_is_reentrant() {
        let mut dashboard = Dashboard::new();
        dashboard.on_data_changed(None);
        dashboard.on_data_changed(Some(&Dataset::default()));
        assert!(matches!(dashboard.view_model(), DashboardViewModel::Empty(_)));
    }

    #[test]
    fn test_populates_on_categorical_data() {
        let dashboard = populated();
        match dashboard.view_model() {
            DashboardViewModel::Populated(view) => assert_eq!(view.table.total_rows, 2),
            DashboardViewModel::Empty(_) => panic!("expected populated view"),
        }
    }

    #[test]
    fn test_returns_to_empty_when_categorical_shape_lost() {
        let mut dashboard = populated();
        let repaint = dashboard.on_data_changed(Some(&Dataset::default()));
        assert_eq!(repaint, Repaint::Full);
        assert!(dashboard.rows().is_empty());
        assert!(matches!(dashboard.view_model(), DashboardViewModel::Empty(_)));
    }

    #[test]
    fn test_header_click_toggles_then_switches() {
        let mut dashboard = populated();
        assert_eq!(dashboard.view_state().sort_field, SortField::GdpTotal);
        assert!(!dashboard.view_state().sort_asc);

        // Same field: direction flips, field stays.
        dashboard.on_interaction(Interaction::SortBy(SortField::GdpTotal));
        assert_eq!(dashboard.view_state().sort_field, SortField::GdpTotal);
        assert!(dashboard.view_state().sort_asc);

        // Different field: selected descending.
        dashboard.on_interaction(Interaction::SortBy(SortField::Name));
        assert_eq!(dashboard.view_state().sort_field, SortField::Name);
        assert!(!dashboard.view_state().sort_asc);
    }

    #[test]
    fn test_repaint_scope_per_interaction() {
        let mut dashboard = populated();
        assert_eq!(
            dashboard.on_interaction(Interaction::SelectRegion(Some("N".to_string()))),
            Repaint::Fragments
        );
        assert_eq!(
            dashboard.on_interaction(Interaction::SortBy(SortField::Population)),
            Repaint::Fragments
        );
        assert_eq!(dashboard.on_interaction(Interaction::ToggleTheme), Repaint::Full);
        assert!(!dashboard.view_state().dark_mode);
    }

    #[test]
    fn test_view_state_sticky_across_dataset_replacement() {
        let mut dashboard = populated();
        dashboard.on_interaction(Interaction::SelectRegion(Some("N".to_string())));
        dashboard.on_interaction(Interaction::SortBy(SortField::Name));
        dashboard.on_interaction(Interaction::ToggleTheme);

        dashboard.on_data_changed(Some(&dataset(&["Z"], &["N"], &[500.0])));
        let state = dashboard.view_state();
        assert_eq!(state.active_region.as_deref(), Some("N"));
        assert_eq!(state.sort_field, SortField::Name);
        assert!(!state.dark_mode);

        // Even a vanished region stays selected; the view is just empty.
        dashboard.on_data_changed(Some(&dataset(&["W"], &["S"], &[100.0])));
        match dashboard.view_model() {
            DashboardViewModel::Populated(view) => {
                assert_eq!(view.table.total_rows, 0);
                assert_eq!(view.active_region.as_deref(), Some("N"));
            }
            DashboardViewModel::Empty(_) => panic!("expected populated view"),
        }
    }

    #[test]
    fn test_interactions_on_empty_dashboard_mutate_state_only() {
        let mut dashboard = Dashboard::new();
        dashboard.on_interaction(Interaction::SortBy(SortField::Region));
        assert!(matches!(dashboard.view_model(), DashboardViewModel::Empty(_)));
        assert_eq!(dashboard.view_state().sort_field, SortField::Region);
    }

    #[test]
    fn test_settings_snapshot_serializes() {
        let mut dashboard = populated();
        dashboard.on_interaction(Interaction::SelectRegion(Some("N".to_string())));
        let snapshot = dashboard.settings();
        assert_eq!(snapshot.active_region.as_deref(), Some("N"));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["active_region"], "N");
        assert_eq!(json["sort_field"], "gdp_total");
    }
}
