//! Region filtering and column sorting over extracted rows.

use bgd_model::StateRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sortable record fields, one per table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Region,
    GdpTotal,
    GdpPerCapita,
    Population,
    Count,
}

impl SortField {
    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            SortField::Name => "State",
            SortField::Region => "Region",
            SortField::GdpTotal => "GDP",
            SortField::GdpPerCapita => "GDP per capita",
            SortField::Population => "Population",
            SortField::Count => "Municipalities",
        }
    }

    /// All fields in table column order.
    pub fn all() -> [SortField; 6] {
        [
            SortField::Name,
            SortField::Region,
            SortField::GdpTotal,
            SortField::GdpPerCapita,
            SortField::Population,
            SortField::Count,
        ]
    }

    fn is_numeric(self) -> bool {
        !matches!(self, SortField::Name | SortField::Region)
    }
}

fn numeric_value(record: &StateRecord, field: SortField) -> f64 {
    match field {
        SortField::GdpTotal => record.gdp_total,
        SortField::GdpPerCapita => record.gdp_per_capita,
        SortField::Population => record.population,
        SortField::Count => record.count as f64,
        SortField::Name | SortField::Region => 0.0,
    }
}

fn text_value(record: &StateRecord, field: SortField) -> &str {
    match field {
        SortField::Name => &record.name,
        SortField::Region => &record.region,
        _ => "",
    }
}

/// Restrict rows to the active region; `None` means all regions and returns
/// the rows unchanged. Relative order is always preserved.
pub fn filtered_view(rows: &[StateRecord], active_region: Option<&str>) -> Vec<StateRecord> {
    match active_region {
        None => rows.to_vec(),
        Some(region) => rows
            .iter()
            .filter(|r| r.region == region)
            .cloned()
            .collect(),
    }
}

/// Sort a copy of the rows by the given field and direction.
///
/// Numeric fields compare numerically; name and region compare
/// case-insensitively. The sort is stable, so equal keys keep their
/// relative order across repeated calls.
pub fn sorted_view(rows: &[StateRecord], field: SortField, ascending: bool) -> Vec<StateRecord> {
    let mut view = rows.to_vec();
    view.sort_by(|a, b| {
        let ordering = if field.is_numeric() {
            numeric_value(a, field)
                .partial_cmp(&numeric_value(b, field))
                .unwrap_or(Ordering::Equal)
        } else {
            text_value(a, field)
                .to_lowercase()
                .cmp(&text_value(b, field).to_lowercase())
        };
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, region: &str, gdp_total: f64, gdp_per_capita: f64) -> StateRecord {
        StateRecord {
            name: name.to_string(),
            region: region.to_string(),
            gdp_total,
            gdp_per_capita,
            population: 0.0,
            count: 1,
        }
    }

    #[test]
    fn test_filter_all_is_identity() {
        let rows = vec![row("X", "N", 1.0, 1.0), row("Y", "S", 2.0, 2.0)];
        assert_eq!(filtered_view(&rows, None), rows);
    }

    #[test]
    fn test_filter_preserves_order() {
        let rows = vec![
            row("A", "N", 1.0, 1.0),
            row("B", "S", 2.0, 2.0),
            row("C", "N", 3.0, 3.0),
        ];
        let filtered = filtered_view(&rows, Some("N"));
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].name, "A");
        assert_eq!(filtered[1].name, "C");
    }

    #[test]
    fn test_filter_unknown_region_is_empty() {
        let rows = vec![row("A", "N", 1.0, 1.0)];
        assert!(filtered_view(&rows, Some("Z")).is_empty());
        assert!(filtered_view(&[], Some("N")).is_empty());
    }

    #[test]
    fn test_numeric_sort_directions() {
        let rows = vec![row("A", "N", 10.0, 0.0), row("B", "N", 30.0, 0.0), row("C", "N", 20.0, 0.0)];
        let desc = sorted_view(&rows, SortField::GdpTotal, false);
        let names: Vec<&str> = desc.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B", "C", "A"]);

        let asc = sorted_view(&rows, SortField::GdpTotal, true);
        let names: Vec<&str> = asc.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "C", "B"]);
    }

    #[test]
    fn test_string_sort_is_case_insensitive() {
        let rows = vec![row("ceará", "N", 0.0, 0.0), row("Bahia", "N", 0.0, 0.0), row("acre", "N", 0.0, 0.0)];
        let asc = sorted_view(&rows, SortField::Name, true);
        let names: Vec<&str> = asc.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["acre", "Bahia", "ceará"]);
    }

    #[test]
    fn test_sort_is_idempotent_and_stable() {
        let rows = vec![
            row("A", "N", 5.0, 0.0),
            row("B", "N", 5.0, 0.0),
            row("C", "N", 1.0, 0.0),
        ];
        let once = sorted_view(&rows, SortField::GdpTotal, false);
        let twice = sorted_view(&once, SortField::GdpTotal, false);
        assert_eq!(once, twice);
        // Equal keys keep insertion order.
        assert_eq!(once[0].name, "A");
        assert_eq!(once[1].name, "B");
    }

    #[test]
    fn test_empty_sorts_to_empty() {
        assert!(sorted_view(&[], SortField::Name, true).is_empty());
    }
}
