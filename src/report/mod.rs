//! Report Data Assembler: immutable report snapshots and their text rendering.

mod assembler;
mod files;
mod narrative;

pub use assembler::{DatasetInfo, ReportAssembler, ReportSummary};
pub use files::ExportFileNames;
