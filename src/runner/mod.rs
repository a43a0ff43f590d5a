pub mod events;
pub mod types;

use crate::report::TeamCityReporter;
use crate::utils::config::Config;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub use events::*;
pub use types::*;

/// Replay a recorded event log as service messages.
///
/// Writes to `output` when given (no console printer), otherwise to stdout
/// with the console printer unless `console` is false.
pub fn run_replay(events_path: &Path, output: Option<&Path>, console: bool, config: Config) -> Result<()> {
    let events = load_events(events_path)?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut reporter = TeamCityReporter::new(BufWriter::new(file), config)?;
            replay(&mut reporter, &events)?;
        }
        None if console => {
            let mut reporter = TeamCityReporter::console(config)?;
            replay(&mut reporter, &events)?;
        }
        None => {
            let mut reporter = TeamCityReporter::new(std::io::stdout(), config)?;
            replay(&mut reporter, &events)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_replay_to_file() {
        let dir = std::env::temp_dir().join(format!("lumi-teamcity-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let events_path = dir.join("events.yaml");
        let output_path = dir.join("report.txt");

        std::fs::write(
            &events_path,
            r#"
- event: suiteStarted
  suite: { kind: file, name: Smoke, testCount: 1 }
- event: testStarted
  test: { name: testBoot, id: "Smoke::testBoot", kind: { type: script } }
- event: testFinished
  test: { name: testBoot, id: "Smoke::testBoot", kind: { type: script } }
  time: 0.012
- event: suiteFinished
  suite: { kind: file, name: Smoke, testCount: 1 }
"#,
        )
        .unwrap();

        run_replay(&events_path, Some(&output_path), true, Config::default()).unwrap();

        let text = std::fs::read_to_string(&output_path).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert!(text.starts_with("\nLumi TeamCity "));
        assert!(text.contains("##teamcity[testFinished name='testBoot' duration='12' flowId="));
        assert!(text.contains("##teamcity[testSuiteFinished name='Smoke' locationHint='lumi_qn://Smoke' flowId="));
        // File targets get no console printer
        assert!(!text.contains("OK ("));
    }

    #[test]
    fn test_run_replay_missing_log() {
        let err = run_replay(
            Path::new("/nonexistent/events.jsonl"),
            None,
            false,
            Config::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read event log"));
    }
}
