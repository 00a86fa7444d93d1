use assert_cmd::Command;
use predicates::prelude::*;
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

fn inverso() -> Command {
    Command::cargo_bin("inverso").unwrap()
}

#[test]
fn test_check_correct_answer() {
    inverso()
        .args(["check", "--problem", "2,1,3,-1", "--answer", "1,1,3,-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("unlocked"));
}

#[test]
fn test_check_scaled_answer() {
    inverso()
        .args(["check", "--problem", "2,1,3,-1", "--answer", "-2,-2,-6,4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"));
}

#[test]
fn test_check_wrong_answer_explains() {
    inverso()
        .args(["check", "--problem", "2,1,3,-1", "--answer", "1,1,3,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect."))
        .stdout(predicate::str::contains("A = 1, B = 1, C = 3, D = -2"));
}

#[test]
fn test_check_zero_c() {
    inverso()
        .args(["check", "--problem", "2,1,3,-1", "--answer", "1,1,0,-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(C) must be nonzero"));
}

#[test]
fn test_check_formula() {
    inverso()
        .args([
            "check",
            "--problem",
            "2,1,3,-1",
            "--formula",
            "1/3 + (5/9)/(x - 2/3)",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct!"));
}

#[test]
fn test_check_json() {
    let output = inverso()
        .args(["check", "--problem", "2,1,3,-1", "--answer", "1,1,3,-2", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let grade: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(grade["correct"], true);
    assert_eq!(grade["graph_visible"], true);
    assert_eq!(grade["verdict"]["kind"], "correct");
}

#[test]
fn test_check_needs_an_answer() {
    inverso()
        .args(["check", "--problem", "2,1,3,-1"])
        .assert()
        .failure();
}

#[test]
fn test_degenerate_problem_fails() {
    inverso()
        .args(["check", "--problem", "1,2,2,4", "--answer", "1,1,1,1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid problem"));
}

#[test]
fn test_malformed_coefficients_fail() {
    inverso()
        .args(["check", "--problem", "2,1,3", "--answer", "1,1,3,-2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("<coefficients>"));
}

#[test]
fn test_generate_is_reproducible() {
    let first = inverso()
        .args(["generate", "--seed", "42", "--json"])
        .output()
        .unwrap();
    let second = inverso()
        .args(["generate", "--seed", "42", "--json"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let json: serde_json::Value = serde_json::from_slice(&first.stdout).unwrap();
    assert_ne!(json["problem"]["c"], 0);
    assert!(json["text"].as_str().unwrap().starts_with("f(x) = "));
}

#[test]
fn test_generate_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("quiz.json");
    fs::write(&config, r#"{"min_coefficient": 1, "max_coefficient": 3}"#).unwrap();

    let output = inverso()
        .args(["generate", "--seed", "3", "--json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for key in ["a", "b", "c", "d"] {
        let value = json["problem"][key].as_i64().unwrap();
        assert!((1..=3).contains(&value));
    }
}

#[test]
fn test_missing_config_file() {
    inverso()
        .args(["generate", "--config", "/nonexistent/quiz.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_plot_writes_svg() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("graph.svg");

    inverso()
        .args(["plot", "--problem", "2,1,3,-1", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote graph"));

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<polyline"));
}

#[test]
fn test_lotto_tickets() {
    let output = inverso()
        .args(["lotto", "--tickets", "5", "--seed", "9", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["draw"]["round"], 1195);
    assert_eq!(json["tickets"].as_array().unwrap().len(), 5);
}

#[test]
fn test_lotto_table() {
    inverso()
        .args(["lotto", "--seed", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Round 1195 (2025-10-25)"));
}

#[test]
fn test_lotto_too_many_tickets() {
    inverso()
        .args(["lotto", "--tickets", "6"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("between 1 and 5"));
}

#[test]
fn test_parabola_quiz() {
    inverso()
        .args([
            "parabola",
            "--a",
            "2",
            "--convexity",
            "up",
            "--width",
            "좁아진다",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("opens upward"))
        .stdout(predicate::str::contains("Correct! When a > 0"))
        .stdout(predicate::str::contains("the narrower the parabola"));
}

#[test]
fn test_parabola_svg() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("parabola.svg");

    inverso()
        .args(["parabola", "--a", "-0.5", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("opens downward"));

    assert!(fs::read_to_string(&out).unwrap().contains("<polyline"));
}

#[test]
fn test_parabola_rejects_fine_steps() {
    inverso()
        .args(["parabola", "--a", "0.25"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("steps of 0.1"));
}

#[test]
fn test_parabola_rejects_out_of_range() {
    inverso()
        .args(["parabola", "--a", "7"])
        .assert()
        .failure()
        .code(1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_printed_inverse_is_accepted(a in -5i64..=5, b in -5i64..=5, c in 1i64..=5, d in -5i64..=5) {
        prop_assume!(a * d - b * c != 0);

        let problem = format!("{},{},{},{}", a, b, c, d);
        let answer = format!("{},{},{},{}", -d, b, c, -a);
        inverso()
            .args(["check", "--problem", &problem, "--answer", &answer])
            .assert()
            .success()
            .stdout(predicate::str::contains("Correct!"));
    }
}
