//! Run reports and JSON export
//!
//! Collects scenario results into a single report suitable for archival
//! or diffing across runs.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::scenarios::ScenarioResult;

/// Combined report for a full harness run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub version: String,
    pub generated_at: String,
    pub seed: u64,
    pub results: Vec<ScenarioResult>,
    pub passed: bool,
}

/// Build a report from scenario results
pub fn build_report(seed: u64, results: Vec<ScenarioResult>) -> SimulationReport {
    let passed = results.iter().all(|r| r.passed);
    SimulationReport {
        version: crate::VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        seed,
        results,
        passed,
    }
}

/// Render a report as pretty JSON
pub fn export_json(report: &SimulationReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_default()
}

/// Write a report to a file
pub fn write_to_file(report: &SimulationReport, path: &str) -> std::io::Result<()> {
    std::fs::write(path, export_json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result(name: &str, passed: bool) -> ScenarioResult {
        ScenarioResult {
            name: name.to_string(),
            operations: 10,
            accepted: 8,
            rejected: 2,
            passed,
            details: "sample".to_string(),
        }
    }

    #[test]
    fn test_report_aggregates_pass_flag() {
        let report = build_report(42, vec![sample_result("a", true), sample_result("b", true)]);
        assert!(report.passed);
        assert_eq!(report.seed, 42);
        assert_eq!(report.version, crate::VERSION);

        let failing = build_report(42, vec![sample_result("a", true), sample_result("b", false)]);
        assert!(!failing.passed);
    }

    #[test]
    fn test_export_json_round_trip() {
        let report = build_report(7, vec![sample_result("lifecycle", true)]);
        let json = export_json(&report);
        assert!(json.contains("\"lifecycle\""));

        let back: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, 7);
        assert_eq!(back.results.len(), 1);
        assert!(back.passed);
    }

    #[test]
    fn test_write_to_file() {
        let report = build_report(1, vec![sample_result("soak", true)]);
        let path = std::env::temp_dir().join("zars_sim_report_test.json");

        write_to_file(&report, path.to_str().unwrap()).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"soak\""));

        std::fs::remove_file(&path).ok();
    }
}
