//! Tabular metric export, and reading that layout back as a metric source.

mod read;
mod write;

pub use read::read_metrics_csv;
pub use write::write_metrics_csv;

/// Column headers of the tabular export, in order.
pub(crate) const HEADERS: [&str; 9] = [
    "Tract ID",
    "County FIPS",
    "Tract Name",
    "Max Download (Mbps)",
    "Max Upload (Mbps)",
    "Service Tier",
    "Provider Count",
    "Population Estimate",
    "Coverage Percent",
];
