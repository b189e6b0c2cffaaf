//! Normalized row records produced by extraction.

use serde::Serialize;

/// One normalized row: a state (or comparable categorical entity) with its
/// economic measures. GDP values are in thousands of BRL, matching the IBGE
/// published series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRecord {
    /// Display name of the entity.
    pub name: String,
    /// Grouping key used by the region filter chips.
    pub region: String,
    /// Total GDP.
    pub gdp_total: f64,
    /// GDP per inhabitant.
    pub gdp_per_capita: f64,
    /// Resident population.
    pub population: f64,
    /// Number of underlying units (municipalities); at least 1.
    pub count: u32,
}
