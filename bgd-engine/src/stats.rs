//! Summary statistics and the highest/lowest insight over a filtered view.

use crate::view::{sorted_view, SortField};
use bgd_model::StateRecord;
use serde::Serialize;

/// Aggregates over the current filtered view. All values degrade to 0 on an
/// empty view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewAggregates {
    pub total_gdp: f64,
    pub avg_gdp_per_capita: f64,
    pub total_population: f64,
    pub row_count: usize,
    pub max_gdp_per_capita: f64,
    pub min_gdp_per_capita: f64,
}

/// Compute summary statistics for a view.
///
/// The minimum per-capita value only considers rows with a positive
/// per-capita figure; zero-valued rows would otherwise dominate every
/// minimum. When no row qualifies the minimum reports 0.
pub fn aggregate(view: &[StateRecord]) -> ViewAggregates {
    if view.is_empty() {
        return ViewAggregates::default();
    }

    let total_gdp = view.iter().map(|r| r.gdp_total).sum();
    let per_capita_sum: f64 = view.iter().map(|r| r.gdp_per_capita).sum();
    let max_gdp_per_capita = view
        .iter()
        .map(|r| r.gdp_per_capita)
        .fold(f64::MIN, f64::max);
    let min_gdp_per_capita = view
        .iter()
        .map(|r| r.gdp_per_capita)
        .filter(|v| *v > 0.0)
        .fold(f64::INFINITY, f64::min);

    ViewAggregates {
        total_gdp,
        avg_gdp_per_capita: per_capita_sum / view.len() as f64,
        total_population: view.iter().map(|r| r.population).sum(),
        row_count: view.len(),
        max_gdp_per_capita,
        min_gdp_per_capita: if min_gdp_per_capita.is_finite() {
            min_gdp_per_capita
        } else {
            0.0
        },
    }
}

/// Top rows by GDP per capita, descending, truncated to `limit`.
pub fn top_by_gdp_per_capita(view: &[StateRecord], limit: usize) -> Vec<StateRecord> {
    let mut ranked = sorted_view(view, SortField::GdpPerCapita, false);
    ranked.truncate(limit);
    ranked
}

/// Top rows by total GDP, descending, truncated to `limit`.
pub fn top_by_gdp_total(view: &[StateRecord], limit: usize) -> Vec<StateRecord> {
    let mut ranked = sorted_view(view, SortField::GdpTotal, false);
    ranked.truncate(limit);
    ranked
}

/// The highest and lowest per-capita entries of a view, with their ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub highest: StateRecord,
    pub lowest: StateRecord,
    /// highest/lowest per-capita multiple; `None` when the lowest entry
    /// reports no positive per-capita value.
    pub ratio: Option<f64>,
}

/// Identify the per-capita extremes of a view. Empty views carry no insight.
pub fn insight(view: &[StateRecord]) -> Option<Insight> {
    let ranked = sorted_view(view, SortField::GdpPerCapita, false);
    let highest = ranked.first()?.clone();
    let lowest = ranked.last()?.clone();
    let ratio = if lowest.gdp_per_capita > 0.0 {
        Some(highest.gdp_per_capita / lowest.gdp_per_capita)
    } else {
        None
    };
    Some(Insight {
        highest,
        lowest,
        ratio,
    })
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
    fn test_aggregate_unfiltered() {
        let stats = aggregate(&scenario_rows());
        assert_eq!(stats.total_gdp, 3000.0);
        assert_eq!(stats.avg_gdp_per_capita, 300.0);
        assert_eq!(stats.total_population, 30.0);
        assert_eq!(stats.row_count, 2);
        assert_eq!(stats.max_gdp_per_capita, 500.0);
        assert_eq!(stats.min_gdp_per_capita, 100.0);
    }

    #[test]
    fn test_aggregate_empty_view_is_all_zero() {
        let stats = aggregate(&[]);
        assert_eq!(stats, ViewAggregates::default());
        assert_eq!(stats.avg_gdp_per_capita, 0.0);
    }

    #[test]
    fn test_min_ignores_zero_per_capita_rows() {
        let view = vec![
            row("A", "N", 10.0, 0.0, 0.0),
            row("B", "N", 20.0, 0.0, 0.0),
        ];
        let stats = aggregate(&view);
        assert_eq!(stats.min_gdp_per_capita, 0.0);

        let mixed = vec![
            row("A", "N", 10.0, 0.0, 0.0),
            row("B", "N", 20.0, 250.0, 0.0),
        ];
        assert_eq!(aggregate(&mixed).min_gdp_per_capita, 250.0);
    }

    #[test]
    fn test_top_slices() {
        let rows = scenario_rows();
        let by_per_capita = top_by_gdp_per_capita(&rows, 10);
        assert_eq!(by_per_capita[0].name, "X");
        assert_eq!(by_per_capita[1].name, "Y");

        let by_total = top_by_gdp_total(&rows, 10);
        assert_eq!(by_total[0].name, "Y");

        assert_eq!(top_by_gdp_total(&rows, 1).len(), 1);
    }

    #[test]
    fn test_insight_ratio() {
        let insight = insight(&scenario_rows()).unwrap();
        assert_eq!(insight.highest.name, "X");
        assert_eq!(insight.lowest.name, "Y");
        assert_eq!(insight.ratio, Some(5.0));
    }

    #[test]
    fn test_insight_not_applicable_on_zero_lowest() {
        let view = vec![row("A", "N", 10.0, 500.0, 0.0), row("B", "N", 20.0, 0.0, 0.0)];
        let insight = insight(&view).unwrap();
        assert_eq!(insight.highest.name, "A");
        assert_eq!(insight.lowest.name, "B");
        assert_eq!(insight.ratio, None);
    }

    #[test]
    fn test_no_insight_on_empty_view() {
        assert!(insight(&[]).is_none());
    }
}
