//! YAML scenario tests
//!
//! Runs the planning problems in `tests/scenarios/`. Besides the scenario
//! itself each file carries an `expect` block:
//!
//! ```yaml
//! expect:
//!   success: true
//!   cost: 11.0      # exact cost, optional
//!   max_cost: 17.0  # upper bound, optional
//! ```

mod common;

use std::io::Write;
use std::path::PathBuf;

use common::assert_valid_path;
use marga::config::{ConfigError, ScenarioConfig};
use marga::grid::{Grid, LayoutHistory, ObstacleSet};
use marga::pathfinding::Algorithm;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    expect: Expectation,
}

#[derive(Debug, Deserialize)]
struct Expectation {
    success: bool,
    #[serde(default)]
    cost: Option<f32>,
    #[serde(default)]
    max_cost: Option<f32>,
}

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/scenarios")
        .join(format!("{name}.yaml"))
}

/// Run a single scenario by filename (without .yaml extension)
fn run_single_scenario(name: &str) {
    env_logger::try_init().ok();

    let path = scenario_path(name);
    let scenario = ScenarioConfig::from_yaml_file(&path)
        .unwrap_or_else(|e| panic!("Scenario {name} failed to load: {e}"));
    let contents = std::fs::read_to_string(&path).unwrap();
    let expect = serde_yaml::from_str::<ScenarioFile>(&contents)
        .unwrap()
        .expect;

    let result = scenario
        .plan()
        .unwrap_or_else(|e| panic!("Scenario {name} rejected: {e}"));

    println!(
        "--- {}: success={} cost={:.2} expanded={} ---",
        scenario.name, result.success, result.cost, result.stats.nodes_expanded
    );

    assert_eq!(result.success, expect.success, "scenario {name}");
    if !result.success {
        assert!(result.path.is_empty());
        return;
    }

    let obstacles = scenario.obstacle_set().unwrap();
    let grid = Grid::new(scenario.cols, scenario.rows, &obstacles);
    let shortcut = (scenario.planner.algorithm == Algorithm::Zeta)
        .then_some(scenario.planner.min_segment_length);
    assert_valid_path(&grid, &result, scenario.start, scenario.end, shortcut);

    if let Some(cost) = expect.cost {
        assert!(
            (result.cost - cost).abs() < 1e-4,
            "scenario {name}: cost {} != {cost}",
            result.cost
        );
    }
    if let Some(max_cost) = expect.max_cost {
        assert!(
            result.cost <= max_cost,
            "scenario {name}: cost {} > {max_cost}",
            result.cost
        );
    }
}

#[test]
fn test_corridor() {
    run_single_scenario("corridor");
}

#[test]
fn test_detour() {
    run_single_scenario("detour");
}

#[test]
fn test_narrow_turn() {
    run_single_scenario("narrow_turn");
}

#[test]
fn test_room_shortcut() {
    run_single_scenario("room_shortcut");
}

#[test]
fn test_walled_off() {
    run_single_scenario("walled_off");
}

#[test]
fn test_every_scenario_file_loads() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/scenarios");
    let mut count = 0;
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|ext| ext == "yaml") {
            ScenarioConfig::from_yaml_file(&path)
                .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
            count += 1;
        }
    }
    assert!(count >= 5);
}

#[test]
fn test_engine_override_changes_result() {
    let scenario = ScenarioConfig::from_yaml_file(scenario_path("room_shortcut")).unwrap();

    let mut config = scenario.planner.clone();
    config.algorithm = Algorithm::Constrained;
    let constrained = scenario.plan_with(&config).unwrap();
    let zeta = scenario.plan().unwrap();

    assert!(constrained.success && zeta.success);
    assert_eq!(constrained.cost, 18.0);
    assert!(zeta.cost < constrained.cost);
}

#[test]
fn test_scenario_written_to_disk() {
    let yaml = r#"
name: from_disk
cols: 6
rows: 6
start: {x: 0, y: 0}
end: {x: 5, y: 5}
planner:
  algorithm: constrained
  min_segment_length: 5
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let scenario = ScenarioConfig::from_yaml_file(file.path()).unwrap();
    let result = scenario.plan().unwrap();

    // Down the left edge, then one full run along the bottom
    assert!(result.success);
    assert_eq!(result.cost, 10.0);
}

#[test]
fn test_malformed_scenario() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"name: broken\ncols: [1, 2]\n").unwrap();

    let err = ScenarioConfig::from_yaml_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_layout_history_restores_scenario_obstacles() {
    let scenario = ScenarioConfig::from_yaml_file(scenario_path("room_shortcut")).unwrap();
    let obstacles = scenario.obstacle_set().unwrap();

    let mut history = LayoutHistory::new();
    history.record("pillar", &obstacles);
    let name = history.record_now(&ObstacleSet::sample_layout(scenario.cols, scenario.rows));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.yaml");
    std::fs::write(&path, history.to_yaml().unwrap()).unwrap();
    let loaded = LayoutHistory::from_yaml(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.restore("pillar"), Some(obstacles));
    assert!(loaded.restore(&name).is_some());
}
