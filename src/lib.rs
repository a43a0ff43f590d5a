pub mod error;
pub mod report;
pub mod runner;
pub mod utils;

// Re-export common items
pub use error::ReportError;
pub use report::{ConsolePrinter, ResultPrinter, TeamCityReporter};
pub use runner::{run_replay, Outcome, OutcomeKind, Suite, Test, TestEvent, TestKind};
pub use utils::config::Config;
