//! Integration tests for the waypath CLI
//!
//! These tests run the waypath binary against edge-list and command files
//! written to a temporary directory.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

const TOWN: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7\n";

const REFERENCE_COMMANDS: &str = "\
ABC
AD
ADC
AEBCD
AED
C C 3 max
A C 4
A C
B B
C C 30 weighted
";

/// Get a Command for waypath
fn waypath() -> Command {
    cargo_bin_cmd!("waypath")
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn town_dir() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let graph = write(dir.path(), "graph.txt", TOWN);
    (dir, graph)
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    waypath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: waypath"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("shortest"))
        .stdout(predicate::str::contains("trips"));
}

#[test]
fn test_version_flag() {
    waypath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("waypath"));
}

#[test]
fn test_no_command_prints_banner() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("waypath --help"));
}

// ============================================================================
// Batch command files
// ============================================================================

#[test]
fn test_run_reference_commands() {
    let (dir, graph) = town_dir();
    let commands = write(dir.path(), "commands.txt", REFERENCE_COMMANDS);

    let expected = "\
Calling path_length(ABC): 9
Calling path_length(AD): 5
Calling path_length(ADC): 13
Calling path_length(AEBCD): 22
Calling path_length(AED): NO SUCH ROUTE
Calling max num_trips(C,C,3): 2
Calling exact num_trips(A,C,4): 3
Calling shortest_path(A,C): 9
Calling shortest_path(B,B): 9
Calling weighted num_trips(C,C,30): 7
";

    waypath()
        .current_dir(dir.path())
        .arg("run")
        .arg(&graph)
        .arg(&commands)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_run_reports_and_skips_bad_lines() {
    let (dir, graph) = town_dir();
    let commands = write(
        dir.path(),
        "commands.txt",
        "AB C\nA C four\nA C 3 min\nA C\nA C 3 max extra\n",
    );

    waypath()
        .current_dir(dir.path())
        .arg("run")
        .arg(&graph)
        .arg(&commands)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrong input!"))
        .stdout(predicate::str::contains("Need integer value as 3rd argument!"))
        .stdout(predicate::str::contains(
            "Only 'max' and 'weighted' accepted at last index!",
        ))
        .stdout(predicate::str::contains("Calling shortest_path(A,C): 9"))
        .stdout(predicate::str::contains("Line is not valid input!"));
}

#[test]
fn test_run_quiet_hides_diagnostics() {
    let (dir, graph) = town_dir();
    let commands = write(dir.path(), "commands.txt", "AB C\nA C\n");

    waypath()
        .current_dir(dir.path())
        .arg("--quiet")
        .arg("run")
        .arg(&graph)
        .arg(&commands)
        .assert()
        .success()
        .stdout("Calling shortest_path(A,C): 9\n");
}

#[test]
fn test_run_json_output() {
    let (dir, graph) = town_dir();
    let commands = write(dir.path(), "commands.txt", "AED\n\nE A\nAB C\nC C 30 weighted\n");

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "run"])
        .arg(&graph)
        .arg(&commands)
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = doc["results"].as_array().unwrap();
    assert_eq!(results.len(), 4);

    assert_eq!(results[0]["line"], 1);
    assert_eq!(results[0]["value"], "NO SUCH ROUTE");
    assert_eq!(results[1]["line"], 3);
    assert_eq!(results[1]["query"], "shortest_path(E,A)");
    assert_eq!(results[1]["value"], "Infinity");
    assert_eq!(results[2]["input"], "AB C");
    assert_eq!(results[2]["error"], "Wrong input!");
    assert_eq!(results[3]["value"], 7);
}

#[test]
fn test_run_budget_over_configured_max_is_skipped() {
    let (dir, graph) = town_dir();
    write(dir.path(), "waypath.toml", "[trips]\nmax_budget = 20\n");
    let commands = write(dir.path(), "commands.txt", "C C 30 weighted\nA C 4\n");

    waypath()
        .current_dir(dir.path())
        .arg("run")
        .arg(&graph)
        .arg(&commands)
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid budget: 30 (max_budget is 20)"))
        .stdout(predicate::str::contains("Calling exact num_trips(A,C,4): 3"));
}

#[test]
fn test_run_missing_command_file_exit_code_3() {
    let (dir, graph) = town_dir();

    waypath()
        .current_dir(dir.path())
        .arg("run")
        .arg(&graph)
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("command file not found"));
}

#[test]
fn test_run_skips_weighted_query_over_free_cycle() {
    let dir = tempdir().unwrap();
    let graph = write(dir.path(), "graph.txt", "AB0, BA0\n");
    let commands = write(dir.path(), "commands.txt", "A B 5 weighted\nA B 3\n");

    waypath()
        .current_dir(dir.path())
        .arg("run")
        .arg(&graph)
        .arg(&commands)
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::contains("zero-weight cycle"))
        .stdout(predicate::str::contains("Calling exact num_trips(A,B,3): 1"));
}

// ============================================================================
// Single queries
// ============================================================================

#[test]
fn test_length_command() {
    let (dir, graph) = town_dir();

    waypath()
        .current_dir(dir.path())
        .arg("length")
        .arg(&graph)
        .arg("AEBCD")
        .assert()
        .success()
        .stdout("Calling path_length(AEBCD): 22\n");
}

#[test]
fn test_shortest_with_route() {
    let (dir, graph) = town_dir();

    waypath()
        .current_dir(dir.path())
        .arg("shortest")
        .arg(&graph)
        .args(["B", "B", "--route"])
        .assert()
        .success()
        .stdout("Calling shortest_path(B,B): 9 via B-C-E-B\n");
}

#[test]
fn test_shortest_unreachable_json() {
    let (dir, graph) = town_dir();

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "shortest"])
        .arg(&graph)
        .args(["C", "A", "--route"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["value"], "Infinity");
    assert!(doc.get("route").is_none());
}

#[test]
fn test_trips_modes() {
    let (dir, graph) = town_dir();

    waypath()
        .current_dir(dir.path())
        .arg("trips")
        .arg(&graph)
        .args(["A", "C", "4"])
        .assert()
        .success()
        .stdout("Calling exact num_trips(A,C,4): 3\n");

    waypath()
        .current_dir(dir.path())
        .arg("trips")
        .arg(&graph)
        .args(["C", "C", "3", "--max"])
        .assert()
        .success()
        .stdout("Calling max num_trips(C,C,3): 2\n");

    waypath()
        .current_dir(dir.path())
        .arg("trips")
        .arg(&graph)
        .args(["C", "C", "30", "--weighted"])
        .assert()
        .success()
        .stdout("Calling weighted num_trips(C,C,30): 7\n");
}

#[test]
fn test_trips_max_and_weighted_conflict() {
    let (dir, graph) = town_dir();

    waypath()
        .current_dir(dir.path())
        .arg("trips")
        .arg(&graph)
        .args(["C", "C", "3", "--max", "--weighted"])
        .assert()
        .code(2);
}

#[test]
fn test_trips_budget_over_max_exit_code_2() {
    let (dir, graph) = town_dir();
    let config = write(dir.path(), "limits.toml", "[trips]\nmax_budget = 5\n");

    waypath()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("trips")
        .arg(&graph)
        .args(["A", "C", "6"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_budget is 5"));
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    waypath()
        .args(["--format", "invalid", "run", "g.txt", "c.txt"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_argument_json_usage_error() {
    waypath()
        .args(["--format", "json", "shortest"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_graph_file_exit_code_3() {
    let dir = tempdir().unwrap();

    waypath()
        .current_dir(dir.path())
        .arg("length")
        .arg(dir.path().join("absent.txt"))
        .arg("AB")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_malformed_edge_list_json_error() {
    let dir = tempdir().unwrap();
    let graph = write(dir.path(), "graph.txt", "AB5\nBCx\n");

    waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "length"])
        .arg(&graph)
        .arg("AB")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"parse_error\""));
}

#[test]
fn test_invalid_config_exit_code_2() {
    let (dir, graph) = town_dir();
    write(dir.path(), "waypath.toml", "[trips]\nmax_budget = -1\n");

    waypath()
        .current_dir(dir.path())
        .arg("length")
        .arg(&graph)
        .arg("AB")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid trips.max_budget"));
}

#[test]
fn test_weighted_trips_over_free_cycle_exit_code_2() {
    let dir = tempdir().unwrap();
    let graph = write(dir.path(), "graph.txt", "AB0, BA0\n");

    waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "trips"])
        .arg(&graph)
        .args(["A", "B", "5", "--weighted"])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"invalid_value\""));
}

#[test]
fn test_length_past_weight_range_is_no_such_route() {
    let dir = tempdir().unwrap();
    let graph = write(dir.path(), "graph.txt", "AB9223372036854775807, BA1\n");

    waypath()
        .current_dir(dir.path())
        .arg("length")
        .arg(&graph)
        .arg("ABA")
        .assert()
        .success()
        .stdout("Calling path_length(ABA): NO SUCH ROUTE\n");
}

#[test]
fn test_malformed_edge_list_human_error_has_hint() {
    let dir = tempdir().unwrap();
    let graph = write(dir.path(), "graph.txt", "AB5\nBCx\n");

    waypath()
        .current_dir(dir.path())
        .arg("length")
        .arg(&graph)
        .arg("AB")
        .assert()
        .code(3)
        .stderr(predicate::str::contains(":2: edge `BCx` has a non-numeric weight"))
        .stderr(predicate::str::contains("hint:"));

    waypath()
        .current_dir(dir.path())
        .arg("--quiet")
        .arg("length")
        .arg(&graph)
        .arg("AB")
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
