use super::console::ConsolePrinter;
use super::identity::{resolve_suite, resolve_test};
use super::message::{MessageKind, ServiceMessage};
use super::tally::{to_milliseconds, RunSummary, Tally};
use super::ResultPrinter;
use crate::error::Result;
use crate::runner::types::{Outcome, OutcomeKind, Suite, Test};
use crate::utils::config::Config;
use crate::utils::version::version_string;
use log::{debug, trace};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Translates runner lifecycle callbacks into TeamCity service messages.
///
/// Each callback writes its protocol line first and then forwards to the
/// secondary printer, if any, on the same stream.
///
/// Outcome callbacks (`add_error`, `add_failure`, ...) emit no message of
/// their own: the dashboard pairs `testStarted`/`testFinished` and reads the
/// failure details from the printer's text.
pub struct TeamCityReporter<W: Write> {
    out: W,
    config: Config,
    flow_id: Option<u32>,
    test_count_sent: bool,
    tally: Tally,
    printer: Option<Box<dyn ResultPrinter>>,
}

impl TeamCityReporter<Stdout> {
    /// Reporter on stdout with the colored console printer attached
    pub fn console(config: Config) -> Result<Self> {
        let printer = ConsolePrinter::new(config.colors);
        Ok(Self::new(io::stdout(), config)?.with_printer(printer))
    }
}

impl<W: Write> TeamCityReporter<W> {
    /// Reporter on an arbitrary stream (file, buffer, sink), without a printer.
    ///
    /// Writes the banner immediately.
    pub fn new(mut out: W, config: Config) -> Result<Self> {
        writeln!(out)?;
        writeln!(out, "{}", version_string(&config.product_name))?;

        Ok(Self {
            out,
            config,
            flow_id: None,
            test_count_sent: false,
            tally: Tally::default(),
            printer: None,
        })
    }

    pub fn with_printer(mut self, printer: impl ResultPrinter + 'static) -> Self {
        self.printer = Some(Box::new(printer));
        self
    }

    pub fn flow_id(&self) -> Option<u32> {
        self.flow_id
    }

    /// Assertions counted so far
    pub fn assertion_count(&self) -> u64 {
        self.tally.assertions()
    }

    pub fn test_count(&self) -> u64 {
        self.tally.tests()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn start_test_suite(&mut self, suite: &Suite) -> Result<()> {
        let flow_id = std::process::id();
        if self.flow_id != Some(flow_id) {
            debug!("flow id set to {}", flow_id);
        }
        self.flow_id = Some(flow_id);

        if !self.test_count_sent {
            self.emit(ServiceMessage::new(MessageKind::TestCount).attr("count", suite.test_count()))?;
            self.test_count_sent = true;
        }

        let resolved = resolve_suite(suite, &self.config.location_scheme);
        self.emit(
            ServiceMessage::new(MessageKind::TestSuiteStarted)
                .attr("name", resolved.identity.name)
                .attr("locationHint", resolved.identity.location_hint),
        )?;

        self.forward(|printer, out| printer.start_suite(out, suite))
    }

    pub fn end_test_suite(&mut self, suite: &Suite) -> Result<()> {
        let resolved = resolve_suite(suite, &self.config.location_scheme);
        let mut message = ServiceMessage::new(MessageKind::TestSuiteFinished)
            .attr("name", resolved.identity.name.clone());
        if let Some(hint) = resolved.finish_location_hint() {
            message = message.attr("locationHint", hint);
        }
        self.emit(message)?;

        self.forward(|printer, out| printer.end_suite(out, suite))
    }

    pub fn start_test(&mut self, test: &Test) -> Result<()> {
        let identity = resolve_test(test, &self.config.location_scheme);
        self.emit(
            ServiceMessage::new(MessageKind::TestStarted)
                .attr("name", identity.name)
                .attr("locationHint", identity.location_hint),
        )?;

        self.forward(|printer, out| printer.start_test(out, test))
    }

    pub fn end_test(&mut self, test: &Test, seconds: f64) -> Result<()> {
        self.tally.record(test);

        self.emit(
            ServiceMessage::new(MessageKind::TestFinished)
                .attr("name", test.name.as_str())
                .attr("duration", to_milliseconds(seconds)),
        )?;

        self.forward(|printer, out| printer.end_test(out, test, seconds))
    }

    pub fn add_error(&mut self, test: &Test, message: &str, seconds: f64) -> Result<()> {
        self.add_outcome(test, Outcome::new(OutcomeKind::Error, message), seconds)
    }

    pub fn add_failure(&mut self, test: &Test, message: &str, seconds: f64) -> Result<()> {
        self.add_outcome(test, Outcome::new(OutcomeKind::Failure, message), seconds)
    }

    pub fn add_warning(&mut self, test: &Test, message: &str, seconds: f64) -> Result<()> {
        self.add_outcome(test, Outcome::new(OutcomeKind::Warning, message), seconds)
    }

    pub fn add_incomplete(&mut self, test: &Test, message: &str, seconds: f64) -> Result<()> {
        self.add_outcome(test, Outcome::new(OutcomeKind::Incomplete, message), seconds)
    }

    pub fn add_risky(&mut self, test: &Test, message: &str, seconds: f64) -> Result<()> {
        self.add_outcome(test, Outcome::new(OutcomeKind::Risky, message), seconds)
    }

    pub fn add_skipped(&mut self, test: &Test, message: &str, seconds: f64) -> Result<()> {
        self.add_outcome(test, Outcome::new(OutcomeKind::Skipped, message), seconds)
    }

    /// Forward any outcome to the printer; no service message is written
    pub fn add_outcome(&mut self, test: &Test, outcome: Outcome, seconds: f64) -> Result<()> {
        self.forward(|printer, out| printer.add_outcome(out, test, &outcome, seconds))
    }

    /// Hand the run totals to the printer
    pub fn print_result(&mut self, elapsed: Duration) -> Result<()> {
        let summary = RunSummary {
            tests: self.tally.tests(),
            assertions: self.tally.assertions(),
            elapsed,
        };
        self.forward(|printer, out| printer.print_result(out, &summary))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn emit(&mut self, message: ServiceMessage) -> Result<()> {
        let message = message.with_flow_id(self.flow_id);
        trace!("emit {}", message.kind());
        message.write_to(&mut self.out)?;
        Ok(())
    }

    fn forward<F>(&mut self, call: F) -> Result<()>
    where
        F: FnOnce(&mut dyn ResultPrinter, &mut dyn Write) -> io::Result<()>,
    {
        if let Some(printer) = self.printer.as_mut() {
            call(&mut **printer, &mut self.out)?;
        }
        Ok(())
    }
}
