use serde::Deserialize;

/// A test suite as handed over by the host runner.
///
/// The variant is decided once when the handle is built: a `Synthetic`
/// suite is a generated container that can name the file it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Suite {
    /// Suite whose name is the path (or plain name) of its source
    File { name: String, test_count: usize },
    /// Generated suite, named with a two-character marker prefix
    Synthetic {
        name: String,
        filename: String,
        test_count: usize,
    },
}

impl Suite {
    pub fn file(name: impl Into<String>, test_count: usize) -> Self {
        Suite::File {
            name: name.into(),
            test_count,
        }
    }

    pub fn synthetic(name: impl Into<String>, filename: impl Into<String>, test_count: usize) -> Self {
        Suite::Synthetic {
            name: name.into(),
            filename: filename.into(),
            test_count,
        }
    }

    /// Declared name, verbatim
    pub fn name(&self) -> &str {
        match self {
            Suite::File { name, .. } | Suite::Synthetic { name, .. } => name,
        }
    }

    /// Number of tests contained in this suite, nested suites included
    pub fn test_count(&self) -> usize {
        match self {
            Suite::File { test_count, .. } | Suite::Synthetic { test_count, .. } => *test_count,
        }
    }

    /// Source file of a generated suite
    pub fn synthetic_filename(&self) -> Option<&str> {
        match self {
            Suite::File { .. } => None,
            Suite::Synthetic { filename, .. } => Some(filename),
        }
    }
}

/// How a test accounts for its assertions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TestKind {
    /// Test that counts its own assertions
    Case { assertions: u64 },
    /// Script-style test; passes or fails as a whole
    Script,
}

impl Default for TestKind {
    fn default() -> Self {
        TestKind::Case { assertions: 0 }
    }
}

/// A single test as handed over by the host runner
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    /// Declared name, e.g. `testLogin`
    pub name: String,
    /// Canonical, fully qualified identity, e.g. `Auth\LoginTest::testLogin`
    pub id: String,
    #[serde(default)]
    pub kind: TestKind,
}

impl Test {
    pub fn new(name: impl Into<String>, id: impl Into<String>, kind: TestKind) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            kind,
        }
    }

    /// Assertions this test contributes to the run total
    pub fn assertion_count(&self) -> u64 {
        match self.kind {
            TestKind::Case { assertions } => assertions,
            TestKind::Script => 1,
        }
    }
}

/// Non-passing result of a test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Error,
    Failure,
    Warning,
    Incomplete,
    Risky,
    Skipped,
}

impl OutcomeKind {
    /// Progress glyph used by the console printer
    pub fn glyph(&self) -> char {
        match self {
            OutcomeKind::Error => 'E',
            OutcomeKind::Failure => 'F',
            OutcomeKind::Warning => 'W',
            OutcomeKind::Incomplete => 'I',
            OutcomeKind::Risky => 'R',
            OutcomeKind::Skipped => 'S',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutcomeKind::Error => "error",
            OutcomeKind::Failure => "failure",
            OutcomeKind::Warning => "warning",
            OutcomeKind::Incomplete => "incomplete test",
            OutcomeKind::Risky => "risky test",
            OutcomeKind::Skipped => "skipped test",
        }
    }
}

/// Outcome reported for a test, with the runner's message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub message: String,
}

impl Outcome {
    pub fn new(kind: OutcomeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
