//! Dataset-to-row extraction with per-field fallbacks.

use crate::dataset::{CellValue, Column, Dataset, Role};
use crate::record::StateRecord;

/// Normalize a host dataset into a row sequence.
///
/// Row count equals the length of the category column, or of the region
/// column when no category column exists, or 0 when neither is present.
/// Missing or malformed cells default per field instead of failing: this
/// function is total and never panics.
pub fn extract(dataset: &Dataset) -> Vec<StateRecord> {
    let category = dataset.column(Role::Category);
    let region = dataset.column(Role::Region);
    let gdp_total = dataset.column(Role::GdpTotal);
    let gdp_per_capita = dataset.column(Role::GdpPerCapita);
    let population = dataset.column(Role::Population);
    let count = dataset.column(Role::Count);

    let length = category
        .map(|c| c.values.len())
        .or_else(|| region.map(|c| c.values.len()))
        .unwrap_or(0);

    let mut rows = Vec::with_capacity(length);
    for i in 0..length {
        let category_text = text_at(category, i);
        let region_text = text_at(region, i);

        // Category and region stand in for one another when only one of the
        // two columns is bound.
        let name = category_text
            .clone()
            .or_else(|| region_text.clone())
            .unwrap_or_else(|| "N/A".to_string());
        let region = region_text
            .or_else(|| category_text)
            .unwrap_or_else(|| "N/A".to_string());

        let gdp_total = cell_at(gdp_total, i).map(CellValue::as_number).unwrap_or(0.0);
        // Per-capita falls back to the total when its column or cell is
        // absent; a present but non-numeric cell still coerces to 0.
        let gdp_per_capita = match cell_at(gdp_per_capita, i) {
            Some(v) if !v.is_null() => v.as_number(),
            _ => gdp_total,
        };
        let population = cell_at(population, i).map(CellValue::as_number).unwrap_or(0.0);
        let count = match cell_at(count, i) {
            Some(v) if !v.is_null() => {
                let n = v.as_number().round();
                if n >= 1.0 {
                    n as u32
                } else {
                    1
                }
            }
            _ => 1,
        };

        rows.push(StateRecord {
            name,
            region,
            gdp_total,
            gdp_per_capita,
            population,
            count,
        });
    }
    rows
}

fn cell_at<'a>(column: Option<&'a Column>, index: usize) -> Option<&'a CellValue> {
    column.and_then(|c| c.values.get(index))
}

fn text_at(column: Option<&Column>, index: usize) -> Option<String> {
    cell_at(column, index).and_then(CellValue::as_text)
}
