//! Shared test helpers: golden fixture manifests and mismatch reports.

pub mod fixtures;
mod report;

pub use report::mismatch_report;
