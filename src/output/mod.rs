//! Report assembly and rendering

pub mod formatter;
pub mod report;

pub use formatter::{ConsoleFormatter, JsonFormatter, OutputFormatter, ReportGenerator};
pub use report::{EvaluationReport, ReportMetadata};
