//! Headless runner output tests

use serde_json::Value;
use tui_life::engine::LifeConfig;
use tui_life::headless::{parse_run_args, run};

fn run_lines(argv: &[&str]) -> Vec<Value> {
    let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
    let args = parse_run_args(&argv, &LifeConfig::default(), 1).unwrap();
    let mut out = Vec::new();
    run(&args, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_generations_are_consecutive() {
    let lines = run_lines(&["--preset", "small", "--seed", "42", "--generations", "10"]);
    assert_eq!(lines.len(), 11);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line["generation"], i as u64);
        assert_eq!(line["rows"], 20);
        assert_eq!(line["columns"], 30);
        assert!(line["population"].as_u64().unwrap() <= 600);
    }
}

#[test]
fn test_same_seed_same_output() {
    let argv = ["--rows", "16", "--cols", "16", "--seed", "7", "--generations", "20"];
    assert_eq!(run_lines(&argv), run_lines(&argv));
}

#[test]
fn test_full_density_collapses_to_corners() {
    let lines = run_lines(&["--rows", "6", "--cols", "6", "--density", "1", "--generations", "1"]);
    assert_eq!(lines[0]["population"], 36);
    assert_eq!(lines[1]["population"], 4);
}
