use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const GRAPH: &str = "c five vertices, vertex 5 is isolated
p sp 5 5
a 1 2 3
a 2 3 4
a 3 4 2
a 1 4 20
a 4 1 10
";

const COORDINATES: &str = "p aux sp co 5
v 1 0 0
v 2 3 0
v 3 6 0
v 4 8 0
v 5 50 50
";

const QUERIES: &str = "p aux sp p2p 3
q 1 4
q 4 3
q 1 5
";

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

struct Inputs {
    graph: NamedTempFile,
    coordinates: NamedTempFile,
}

impl Inputs {
    fn new() -> Self {
        Self {
            graph: write_temp(GRAPH),
            coordinates: write_temp(COORDINATES),
        }
    }

    fn command(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("twoway");
        cmd.arg(self.graph.path())
            .arg(self.coordinates.path())
            .arg("--no-color");
        cmd
    }
}

#[test]
fn test_binary_help() {
    let mut cmd = cargo_bin_cmd!("twoway");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--algorithm"));
}

#[test]
fn test_single_query_prints_path_flow() {
    let inputs = Inputs::new();

    inputs
        .command()
        .args(["1", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 5 vertices and 5 arcs"))
        .stdout(predicate::str::contains("1 → 2 → 3 → 4"))
        .stdout(predicate::str::contains("(8, 0)"));
}

#[test]
fn test_quiet_mode_only_prints_path_flow() {
    let inputs = Inputs::new();

    inputs
        .command()
        .args(["--quiet", "4", "3"])
        .assert()
        .success()
        .stdout("4 → 1 → 2 → 3\n");
}

#[test]
fn test_unreachable_target_is_reported() {
    let inputs = Inputs::new();

    inputs
        .command()
        .args(["--algorithm", "dijkstra", "1", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found between 1 and 5"));
}

#[test]
fn test_json_output_for_single_query() {
    let inputs = Inputs::new();

    let output = inputs.command().args(["--json", "1", "4"]).output().unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["found"], true);
    assert_eq!(report["distance"], 9);
    assert_eq!(report["algorithm"], "astar");
    assert_eq!(report["path"], serde_json::json!([1, 2, 3, 4]));
}

#[test]
fn test_query_file_reports_summary() {
    let inputs = Inputs::new();
    let queries = write_temp(QUERIES);

    inputs
        .command()
        .arg(queries.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3 queries: 2 found, 1 without path"))
        .stdout(predicate::str::contains("1 → 5: no path"));
}

#[test]
fn test_query_file_json_summary() {
    let inputs = Inputs::new();
    let queries = write_temp(QUERIES);

    let output = inputs
        .command()
        .args(["--json", "--algorithm", "unidirectional"])
        .arg(queries.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let batch: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(batch["summary"]["queries"], 3);
    assert_eq!(batch["summary"]["successes"], 2);
    assert_eq!(batch["queries"][1]["distance"], 17);
}

#[test]
fn test_interactive_mode_reads_stdin() {
    let inputs = Inputs::new();

    inputs
        .command()
        .arg("--quiet")
        .write_stdin("1 4\n\n9 1\n4 3\n")
        .assert()
        .success()
        .stdout("1 → 2 → 3 → 4\n4 → 1 → 2 → 3\n")
        .stderr(predicate::str::contains("vertex 9 is outside 1..=5"));
}

#[test]
fn test_out_of_range_vertex_fails() {
    let inputs = Inputs::new();

    inputs
        .command()
        .args(["0", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("vertex 0 is outside 1..=5"));
}

#[test]
fn test_missing_graph_file_fails() {
    let coordinates = write_temp(COORDINATES);

    let mut cmd = cargo_bin_cmd!("twoway");
    cmd.arg("does-not-exist.gr")
        .arg(coordinates.path())
        .args(["1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file does not exist"));
}

#[test]
fn test_malformed_graph_fails_with_line_number() {
    let graph = write_temp("p sp 2 1\na 1 two 3\n");
    let coordinates = write_temp("p aux sp co 2\nv 1 0 0\nv 2 1 0\n");

    let mut cmd = cargo_bin_cmd!("twoway");
    cmd.arg(graph.path())
        .arg(coordinates.path())
        .args(["1", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_compare_runs_every_algorithm() {
    let inputs = Inputs::new();

    inputs
        .command()
        .args(["--compare", "1", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Algorithm Efficiency Comparison"))
        .stdout(predicate::str::contains("unidirectional"))
        .stdout(predicate::str::contains("disagreed").not());
}
