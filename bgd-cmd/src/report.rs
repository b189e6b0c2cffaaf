//! Terminal reports over a state GDP CSV.

use anyhow::{bail, Context, Result};
use bgd_engine::{
    aggregate, filtered_view, insight, top_by_gdp_per_capita, top_by_gdp_total,
};
use bgd_model::{dataset_from_csv, extract, StateRecord};
use bgd_utils::format;
use std::collections::BTreeMap;
use std::fs;

/// Width of the text bars printed by `top`.
const BAR_WIDTH: usize = 40;

fn load_rows(path: &str) -> Result<Vec<StateRecord>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading dataset from {path}"))?;
    let dataset = dataset_from_csv(&content)?;
    let rows = extract(&dataset);
    log::info!("loaded {} rows from {path}", rows.len());
    Ok(rows)
}

/// Print the KPI aggregates and insight, optionally for a single region.
pub fn run_summary(path: &str, region: Option<&str>) -> Result<()> {
    let rows = load_rows(path)?;
    let view = filtered_view(&rows, region);
    let stats = aggregate(&view);

    match region {
        Some(region) => println!("Region: {region}"),
        None => println!("All regions"),
    }
    println!("States:              {}", stats.row_count);
    println!("Total GDP:           {}", format::currency(stats.total_gdp));
    println!(
        "GDP per capita (avg): {}",
        format::currency(stats.avg_gdp_per_capita)
    );
    println!(
        "Population:          {}",
        format::count(stats.total_population)
    );

    if let Some(insight) = insight(&view) {
        match insight.ratio {
            Some(ratio) => println!(
                "Insight: {} leads GDP per capita at {}, {} the lowest, {} ({}).",
                insight.highest.name,
                format::currency(insight.highest.gdp_per_capita),
                format::ratio(ratio),
                insight.lowest.name,
                format::currency(insight.lowest.gdp_per_capita)
            ),
            None => println!(
                "Insight: {} leads GDP per capita at {}; the lowest, {}, reports no positive value.",
                insight.highest.name,
                format::currency(insight.highest.gdp_per_capita),
                insight.lowest.name
            ),
        }
    }
    Ok(())
}

/// Print a top-N ranking with proportional text bars.
pub fn run_top(path: &str, field: &str, count: usize) -> Result<()> {
    let rows = load_rows(path)?;
    let (ranked, value): (Vec<StateRecord>, fn(&StateRecord) -> f64) = match field {
        "gdp" => (top_by_gdp_total(&rows, count), |r| r.gdp_total),
        "per-capita" => (top_by_gdp_per_capita(&rows, count), |r| r.gdp_per_capita),
        other => bail!("unknown ranking field '{other}' (expected \"gdp\" or \"per-capita\")"),
    };

    let max = ranked.first().map(value).unwrap_or(0.0);
    let name_width = ranked.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    for record in &ranked {
        let v = value(record);
        println!(
            "{:<name_width$}  {} {:>10}",
            record.name,
            text_bar(v, max, BAR_WIDTH),
            format::currency(v),
        );
    }
    Ok(())
}

/// Print distinct regions with their row counts, alphabetically.
pub fn run_regions(path: &str) -> Result<()> {
    let rows = load_rows(path)?;
    for (region, count) in region_counts(&rows) {
        println!("{region}: {count}");
    }
    Ok(())
}

fn region_counts(rows: &[StateRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(row.region.clone()).or_default() += 1;
    }
    counts
}

/// A proportional bar of block characters, scaled against `max`.
fn text_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}
