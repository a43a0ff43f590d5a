pub mod console;
pub mod escape;
pub mod identity;
pub mod message;
pub mod tally;
pub mod teamcity;

use crate::runner::types::{Outcome, Suite, Test};
use std::io::{self, Write};

pub use console::ConsolePrinter;
pub use escape::escape;
pub use message::{MessageKind, ServiceMessage, Value};
pub use tally::{to_milliseconds, RunSummary};
pub use teamcity::TeamCityReporter;

/// Human-readable printer running alongside the service message stream.
///
/// Every call receives the shared stream after the reporter has written its
/// own line, so printer text never lands inside a service message.
pub trait ResultPrinter {
    /// Called when a suite starts
    fn start_suite(&mut self, out: &mut dyn Write, suite: &Suite) -> io::Result<()>;

    /// Called when a suite finishes
    fn end_suite(&mut self, out: &mut dyn Write, suite: &Suite) -> io::Result<()>;

    /// Called when a test starts
    fn start_test(&mut self, out: &mut dyn Write, test: &Test) -> io::Result<()>;

    /// Called when a test finishes, whatever its outcome
    fn end_test(&mut self, out: &mut dyn Write, test: &Test, seconds: f64) -> io::Result<()>;

    /// Called for errors, failures, warnings, incomplete, risky and skipped tests
    fn add_outcome(
        &mut self,
        out: &mut dyn Write,
        test: &Test,
        outcome: &Outcome,
        seconds: f64,
    ) -> io::Result<()>;

    /// Called once the run is over
    fn print_result(&mut self, out: &mut dyn Write, summary: &RunSummary) -> io::Result<()>;
}
