use super::tally::RunSummary;
use super::ResultPrinter;
use crate::runner::types::{Outcome, OutcomeKind, Suite, Test};
use colored::{Color, Colorize};
use std::io::{self, IsTerminal, Write};

/// Glyphs per progress line
const PROGRESS_COLUMNS: usize = 60;

/// Order in which defects are listed in the final report
const DEFECT_ORDER: [OutcomeKind; 6] = [
    OutcomeKind::Error,
    OutcomeKind::Failure,
    OutcomeKind::Warning,
    OutcomeKind::Risky,
    OutcomeKind::Incomplete,
    OutcomeKind::Skipped,
];

#[derive(Debug, Clone)]
struct Defect {
    kind: OutcomeKind,
    test_id: String,
    message: String,
}

/// Human-readable progress printer for interactive consoles.
///
/// Prints one glyph per test while the run is going and a defect listing
/// with totals at the end.
#[derive(Debug)]
pub struct ConsolePrinter {
    colors: bool,
    column: usize,
    last_test_failed: bool,
    defects: Vec<Defect>,
}

impl Default for ConsolePrinter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ConsolePrinter {
    /// Create a printer; colors follow terminal detection unless forced
    pub fn new(colors: Option<bool>) -> Self {
        // colored does its own tty check; a forced-on printer must bypass it
        if colors == Some(true) {
            colored::control::set_override(true);
        }

        Self {
            colors: colors.unwrap_or_else(|| io::stdout().is_terminal()),
            column: 0,
            last_test_failed: false,
            defects: Vec::new(),
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn progress(&mut self, out: &mut dyn Write, glyph: char, color: Option<Color>) -> io::Result<()> {
        let glyph = glyph.to_string();
        match color {
            Some(color) => write!(out, "{}", self.paint(&glyph, color))?,
            None => write!(out, "{}", glyph)?,
        }

        self.column += 1;
        if self.column == PROGRESS_COLUMNS {
            writeln!(out)?;
            self.column = 0;
        }
        Ok(())
    }

    fn count(&self, kind: OutcomeKind) -> usize {
        self.defects.iter().filter(|d| d.kind == kind).count()
    }

    fn print_defects(&self, out: &mut dyn Write, kind: OutcomeKind) -> io::Result<()> {
        let defects: Vec<&Defect> = self.defects.iter().filter(|d| d.kind == kind).collect();
        if defects.is_empty() {
            return Ok(());
        }

        let (verb, plural) = if defects.len() == 1 { ("was", "") } else { ("were", "s") };
        writeln!(
            out,
            "There {} {} {}{}:\n",
            verb,
            defects.len(),
            kind.label(),
            plural
        )?;

        for (i, defect) in defects.iter().enumerate() {
            writeln!(out, "{}) {}", i + 1, defect.test_id)?;
            if !defect.message.is_empty() {
                writeln!(out, "{}", defect.message.trim_end())?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn print_footer(&self, out: &mut dyn Write, summary: &RunSummary) -> io::Result<()> {
        let errors = self.count(OutcomeKind::Error);
        let failures = self.count(OutcomeKind::Failure);
        let warnings = self.count(OutcomeKind::Warning);

        if errors + failures + warnings == 0 {
            let line = format!(
                "OK ({} test{}, {} assertion{})",
                summary.tests,
                if summary.tests == 1 { "" } else { "s" },
                summary.assertions,
                if summary.assertions == 1 { "" } else { "s" }
            );
            return writeln!(out, "{}", self.paint(&line, Color::Green));
        }

        let mut line = format!("Tests: {}, Assertions: {}", summary.tests, summary.assertions);
        for (label, kind) in [
            ("Errors", OutcomeKind::Error),
            ("Failures", OutcomeKind::Failure),
            ("Warnings", OutcomeKind::Warning),
            ("Risky", OutcomeKind::Risky),
            ("Incomplete", OutcomeKind::Incomplete),
            ("Skipped", OutcomeKind::Skipped),
        ] {
            let n = self.count(kind);
            if n > 0 {
                line.push_str(&format!(", {}: {}", label, n));
            }
        }
        line.push('.');

        writeln!(out, "{}", self.paint("FAILURES!", Color::Red))?;
        writeln!(out, "{}", self.paint(&line, Color::Red))
    }
}

impl ResultPrinter for ConsolePrinter {
    fn start_suite(&mut self, _out: &mut dyn Write, _suite: &Suite) -> io::Result<()> {
        Ok(())
    }

    fn end_suite(&mut self, _out: &mut dyn Write, _suite: &Suite) -> io::Result<()> {
        Ok(())
    }

    fn start_test(&mut self, _out: &mut dyn Write, _test: &Test) -> io::Result<()> {
        self.last_test_failed = false;
        Ok(())
    }

    fn end_test(&mut self, out: &mut dyn Write, _test: &Test, _seconds: f64) -> io::Result<()> {
        if !self.last_test_failed {
            self.progress(out, '.', None)?;
        }
        self.last_test_failed = false;
        Ok(())
    }

    fn add_outcome(
        &mut self,
        out: &mut dyn Write,
        test: &Test,
        outcome: &Outcome,
        _seconds: f64,
    ) -> io::Result<()> {
        let color = match outcome.kind {
            OutcomeKind::Error | OutcomeKind::Failure => Color::Red,
            OutcomeKind::Warning | OutcomeKind::Risky | OutcomeKind::Incomplete => Color::Yellow,
            OutcomeKind::Skipped => Color::Cyan,
        };
        self.progress(out, outcome.kind.glyph(), Some(color))?;

        self.last_test_failed = true;
        self.defects.push(Defect {
            kind: outcome.kind,
            test_id: test.id.clone(),
            message: outcome.message.clone(),
        });
        Ok(())
    }

    fn print_result(&mut self, out: &mut dyn Write, summary: &RunSummary) -> io::Result<()> {
        if self.column > 0 {
            writeln!(out)?;
            self.column = 0;
        }
        writeln!(out, "\nTime: {:.3}s\n", summary.elapsed.as_secs_f64())?;

        for kind in DEFECT_ORDER {
            self.print_defects(out, kind)?;
        }
        self.print_footer(out, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::types::TestKind;
    use std::time::Duration;

    fn test(name: &str) -> Test {
        Test::new(name, format!("LoginTest::{}", name), TestKind::Case { assertions: 1 })
    }

    fn run(printer: &mut ConsolePrinter, out: &mut Vec<u8>, t: &Test, outcome: Option<Outcome>) {
        printer.start_test(out, t).unwrap();
        if let Some(outcome) = outcome {
            printer.add_outcome(out, t, &outcome, 0.1).unwrap();
        }
        printer.end_test(out, t, 0.1).unwrap();
    }

    #[test]
    fn test_progress_glyphs() {
        let mut printer = ConsolePrinter::new(Some(false));
        let mut out = Vec::new();

        run(&mut printer, &mut out, &test("a"), None);
        run(
            &mut printer,
            &mut out,
            &test("b"),
            Some(Outcome::new(OutcomeKind::Failure, "expected true")),
        );
        run(
            &mut printer,
            &mut out,
            &test("c"),
            Some(Outcome::new(OutcomeKind::Skipped, "no device")),
        );

        assert_eq!(String::from_utf8(out).unwrap(), ".FS");
    }

    #[test]
    fn test_forced_colors_emit_ansi_codes() {
        let mut printer = ConsolePrinter::new(Some(true));
        let mut out = Vec::new();
        run(
            &mut printer,
            &mut out,
            &test("a"),
            Some(Outcome::new(OutcomeKind::Failure, "expected true")),
        );

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b["), "no ANSI escape in {:?}", text);
        assert!(text.contains('F'));
    }

    #[test]
    fn test_progress_wraps_lines() {
        let mut printer = ConsolePrinter::new(Some(false));
        let mut out = Vec::new();
        for i in 0..PROGRESS_COLUMNS + 1 {
            run(&mut printer, &mut out, &test(&format!("t{}", i)), None);
        }

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{}\n.", ".".repeat(PROGRESS_COLUMNS)));
    }

    #[test]
    fn test_print_result_ok() {
        let mut printer = ConsolePrinter::new(Some(false));
        let mut out = Vec::new();
        run(&mut printer, &mut out, &test("a"), None);

        let summary = RunSummary {
            tests: 1,
            assertions: 2,
            elapsed: Duration::from_millis(1500),
        };
        printer.print_result(&mut out, &summary).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Time: 1.500s"));
        assert!(text.ends_with("OK (1 test, 2 assertions)\n"));
    }

    #[test]
    fn test_print_result_lists_defects() {
        let mut printer = ConsolePrinter::new(Some(false));
        let mut out = Vec::new();
        run(
            &mut printer,
            &mut out,
            &test("a"),
            Some(Outcome::new(OutcomeKind::Failure, "Failed asserting that false is true.\n")),
        );
        run(
            &mut printer,
            &mut out,
            &test("b"),
            Some(Outcome::new(OutcomeKind::Error, "boom")),
        );

        let summary = RunSummary {
            tests: 2,
            assertions: 2,
            elapsed: Duration::from_millis(10),
        };
        printer.print_result(&mut out, &summary).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("There was 1 error:\n\n1) LoginTest::b\nboom\n"));
        assert!(text.contains("There was 1 failure:\n\n1) LoginTest::a\nFailed asserting that false is true.\n"));
        assert!(text.find("There was 1 error").unwrap() < text.find("There was 1 failure").unwrap());
        assert!(text.contains("FAILURES!\nTests: 2, Assertions: 2, Errors: 1, Failures: 1.\n"));
    }
}
