//! CSV ingestion: header-mapped CSV text to a role-tagged [`Dataset`].

use crate::dataset::{CellValue, Column, Dataset, Role};
use anyhow::Result;
use csv::ReaderBuilder;

/// Map a CSV header to the role it supplies, if recognized.
///
/// Both English and Portuguese headers are accepted since the source data
/// ships in either. Unrecognized headers are ignored.
fn role_for_header(header: &str) -> Option<Role> {
    match header.trim().to_lowercase().as_str() {
        "state" | "estado" | "name" | "nome" | "uf" | "category" | "categoria" => {
            Some(Role::Category)
        }
        "region" | "regiao" | "região" => Some(Role::Region),
        "gdp" | "pib" | "gdp_total" | "pib_total" => Some(Role::GdpTotal),
        "gdp_per_capita" | "pib_per_capita" => Some(Role::GdpPerCapita),
        "population" | "populacao" | "população" => Some(Role::Population),
        "municipalities" | "municipios" | "municípios" | "count" => Some(Role::Count),
        _ => None,
    }
}

/// Parse CSV text into a dataset, keeping only recognized columns.
///
/// Cell parse failures become null cells (defaulted during extraction) and
/// unreadable records are skipped with a warning, so a messy file still
/// loads. A file with no recognized categorical header parses successfully
/// into a non-categorical dataset, which the dashboard renders as its
/// guidance state rather than an error.
pub fn dataset_from_csv(content: &str) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    // (csv column index, role, display name)
    let headers = reader.headers()?.clone();
    let mut mapped: Vec<(usize, Role, String)> = Vec::new();
    for (index, header) in headers.iter().enumerate() {
        if let Some(role) = role_for_header(header) {
            mapped.push((index, role, header.trim().to_string()));
        }
    }

    let mut columns: Vec<Column> = mapped
        .iter()
        .map(|(_, role, name)| Column::new(name.clone(), *role, Vec::new()))
        .collect();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                log::warn!("skipping unreadable CSV record: {err}");
                continue;
            }
        };
        for (slot, (index, _, _)) in mapped.iter().enumerate() {
            columns[slot].values.push(parse_cell(record.get(*index)));
        }
    }

    Ok(Dataset::new(columns))
}

fn parse_cell(raw: Option<&str>) -> CellValue {
    let raw = raw.unwrap_or("").trim();
    if raw.is_empty() {
        return CellValue::Null;
    }
    match raw.parse::<f64>() {
        Ok(n) => CellValue::Number(n),
        Err(_) => CellValue::Text(raw.to_string()),
    }
}
