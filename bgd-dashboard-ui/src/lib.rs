//! Shared Dioxus components and theme tokens for the BGD dashboard.
//!
//! This crate provides:
//! - `tokens`: theme color/typography tokens for the dark and light palettes
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `components`: the dashboard fragments (KPI tiles, chips, charts, table,
//!   insight, empty-state guidance)
//!
//! Components read the engine's view-model through props and dispatch
//! interactions back into the [`bgd_engine::Dashboard`] held in `AppState`.

pub mod components;
pub mod state;
pub mod tokens;
