//! Display names and location hints for suites and tests.

use crate::runner::types::{Suite, Test};
use log::debug;
use std::path::Path;

/// How a suite is located in the source tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteOrigin {
    /// The name is a real path, or the suite has no generated source
    FileBacked,
    /// Generated container pointing at the file it was built from
    Synthetic,
}

/// Resolved (name, location hint) pair for a suite or test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub location_hint: String,
}

/// Suite identity together with the branch that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteIdentity {
    pub origin: SuiteOrigin,
    pub identity: Identity,
}

impl SuiteIdentity {
    /// Location hint to repeat on `testSuiteFinished`.
    ///
    /// Only file-backed suites carry one; the dashboard expects synthetic
    /// suites to finish with a bare name.
    pub fn finish_location_hint(&self) -> Option<&str> {
        match self.origin {
            SuiteOrigin::FileBacked => Some(&self.identity.location_hint),
            SuiteOrigin::Synthetic => None,
        }
    }
}

/// Decide which branch a suite resolves through.
///
/// An existing path always wins, even for generated suites.
pub fn suite_origin(suite: &Suite) -> SuiteOrigin {
    match suite {
        Suite::File { .. } => SuiteOrigin::FileBacked,
        Suite::Synthetic { name, .. } if Path::new(name).exists() => {
            debug!("suite {:?} names an existing path, treating as file-backed", name);
            SuiteOrigin::FileBacked
        }
        Suite::Synthetic { .. } => SuiteOrigin::Synthetic,
    }
}

pub fn resolve_suite(suite: &Suite, scheme: &str) -> SuiteIdentity {
    let origin = suite_origin(suite);

    let identity = match (origin, suite.synthetic_filename()) {
        (SuiteOrigin::Synthetic, Some(filename)) => Identity {
            name: strip_marker(suite.name()).to_string(),
            location_hint: format!("{}{}", scheme, filename),
        },
        _ => Identity {
            name: suite.name().to_string(),
            location_hint: format!("{}{}", scheme, suite.name()),
        },
    };

    SuiteIdentity { origin, identity }
}

pub fn resolve_test(test: &Test, scheme: &str) -> Identity {
    Identity {
        name: test.name.clone(),
        location_hint: format!("{}{}", scheme, test.id),
    }
}

/// Drop the two marker characters generated suite names start with
fn strip_marker(name: &str) -> &str {
    match name.char_indices().nth(2) {
        Some((offset, _)) => &name[offset..],
        None => "",
    }
}
