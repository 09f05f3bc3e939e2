/// Read models for formatter consumption
///
/// A read model gathers everything a formatter needs in one structure, so
/// formatters never talk to the use case directly.
mod dependency_report;

pub use dependency_report::DependencyReport;
