//! Command implementations for the BGD CLI.
//!
//! Provides subcommands for inspecting a state GDP CSV from the terminal,
//! running the same extract/filter/aggregate pipeline as the dashboard.

use clap::Subcommand;

pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Print KPI aggregates and the insight sentence for a dataset
    Summary {
        /// Path to the GDP CSV file
        #[arg(short = 'd', long)]
        data: String,

        /// Restrict the summary to one region
        #[arg(long)]
        region: Option<String>,
    },

    /// Print a top-N ranking as text bars
    Top {
        /// Path to the GDP CSV file
        #[arg(short = 'd', long)]
        data: String,

        /// Ranking measure: "gdp" or "per-capita"
        #[arg(long, default_value = "gdp")]
        field: String,

        /// Number of rows to show
        #[arg(long, default_value_t = 10)]
        count: usize,
    },

    /// List distinct regions with their row counts
    Regions {
        /// Path to the GDP CSV file
        #[arg(short = 'd', long)]
        data: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { data, region } => report::run_summary(&data, region.as_deref()),
        Command::Top { data, field, count } => report::run_top(&data, &field, count),
        Command::Regions { data } => report::run_regions(&data),
    }
}
