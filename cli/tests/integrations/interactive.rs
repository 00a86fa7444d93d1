use assert_cmd::Command;

#[test]
fn test_quiz_command_listed() {
    // The quiz needs a terminal, so only check that the command exists
    let mut cmd = Command::cargo_bin("inverso").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("quiz"));
}

#[test]
fn test_quiz_rejects_bad_config_before_prompting() {
    let mut cmd = Command::cargo_bin("inverso").unwrap();
    cmd.args(["quiz", "--min-coefficient", "3", "--max-coefficient", "-3"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("coefficient range is empty"));
}
