//! Columnar dataset model and row extraction for the BGD dashboard.
//!
//! The host hands the dashboard a [`dataset::Dataset`]: a flat collection of
//! role-tagged columns. [`extract::extract`] normalizes it into
//! [`record::StateRecord`] rows, applying per-field fallbacks so that any
//! dataset shape, however partial, yields a well-formed row sequence.

pub mod dataset;
pub mod extract;
pub mod loader;
pub mod record;

pub use dataset::{CellValue, Column, Dataset, Role};
pub use extract::extract;
pub use loader::dataset_from_csv;
pub use record::StateRecord;
