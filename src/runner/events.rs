use super::types::{Outcome, OutcomeKind, Suite, Test};
use crate::error::Result;
use crate::report::TeamCityReporter;
use anyhow::Context;
use log::debug;
use serde::Deserialize;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;

/// Lifecycle event recorded from a test run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TestEvent {
    // Suite events
    SuiteStarted {
        suite: Suite,
    },
    SuiteFinished {
        suite: Suite,
    },

    // Test events
    TestStarted {
        test: Test,
    },
    TestFinished {
        test: Test,
        #[serde(default)]
        time: f64,
    },

    // Outcome events
    Error {
        test: Test,
        #[serde(default)]
        message: String,
        #[serde(default)]
        time: f64,
    },
    Failure {
        test: Test,
        #[serde(default)]
        message: String,
        #[serde(default)]
        time: f64,
    },
    Warning {
        test: Test,
        #[serde(default)]
        message: String,
        #[serde(default)]
        time: f64,
    },
    Incomplete {
        test: Test,
        #[serde(default)]
        message: String,
        #[serde(default)]
        time: f64,
    },
    Risky {
        test: Test,
        #[serde(default)]
        message: String,
        #[serde(default)]
        time: f64,
    },
    Skipped {
        test: Test,
        #[serde(default)]
        message: String,
        #[serde(default)]
        time: f64,
    },
}

impl TestEvent {
    /// Split an outcome event into its parts
    fn outcome(&self) -> Option<(&Test, Outcome, f64)> {
        let (kind, test, message, time) = match self {
            TestEvent::Error { test, message, time } => (OutcomeKind::Error, test, message, time),
            TestEvent::Failure { test, message, time } => (OutcomeKind::Failure, test, message, time),
            TestEvent::Warning { test, message, time } => (OutcomeKind::Warning, test, message, time),
            TestEvent::Incomplete { test, message, time } => {
                (OutcomeKind::Incomplete, test, message, time)
            }
            TestEvent::Risky { test, message, time } => (OutcomeKind::Risky, test, message, time),
            TestEvent::Skipped { test, message, time } => (OutcomeKind::Skipped, test, message, time),
            _ => return None,
        };
        Some((test, Outcome::new(kind, message.as_str()), *time))
    }
}

/// Load an event log: YAML sequence for `.yaml`/`.yml`, JSON Lines otherwise.
///
/// `-` reads JSON Lines from stdin.
pub fn load_events(path: &Path) -> anyhow::Result<Vec<TestEvent>> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read events from stdin")?;
        return parse_json_lines(&text);
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event log: {}", path.display()))?;

    let is_yaml = path
        .extension()
        .map_or(false, |ext| ext == "yaml" || ext == "yml");

    if is_yaml {
        parse_yaml(&text)
    } else {
        parse_json_lines(&text)
    }
}

/// Parse one JSON event per line; blank lines are ignored
pub fn parse_json_lines(text: &str) -> anyhow::Result<Vec<TestEvent>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("Invalid event on line {}", index + 1))
        })
        .collect()
}

/// Parse a YAML sequence of events
pub fn parse_yaml(text: &str) -> anyhow::Result<Vec<TestEvent>> {
    serde_yaml::from_str(text).context("Invalid YAML event log")
}

/// Drive a reporter through recorded events, then print the run result.
///
/// The reported elapsed time is the sum of the finished tests' times.
pub fn replay<W: Write>(reporter: &mut TeamCityReporter<W>, events: &[TestEvent]) -> Result<()> {
    debug!("replaying {} events", events.len());
    let mut elapsed = 0.0_f64;

    for event in events {
        match event {
            TestEvent::SuiteStarted { suite } => reporter.start_test_suite(suite)?,
            TestEvent::SuiteFinished { suite } => reporter.end_test_suite(suite)?,
            TestEvent::TestStarted { test } => reporter.start_test(test)?,
            TestEvent::TestFinished { test, time } => {
                elapsed += *time;
                reporter.end_test(test, *time)?
            }
            _ => {
                if let Some((test, outcome, time)) = event.outcome() {
                    reporter.add_outcome(test, outcome, time)?;
                }
            }
        }
    }

    reporter.print_result(Duration::try_from_secs_f64(elapsed).unwrap_or_default())?;
    reporter.flush()
}
