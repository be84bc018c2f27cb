use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn caseconv(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("caseconv").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .arg("--no-color");
    cmd
}

#[test]
fn converts_arguments_to_camel_case_by_default() {
    let dir = TempDir::new().unwrap();
    caseconv(&dir)
        .args(["hello world", "HELLO WORLD", "single"])
        .assert()
        .success()
        .stdout("helloWorld\nhelloWorld\nsingle\n");
}

#[test]
fn style_flag_selects_kebab_and_dot() {
    let dir = TempDir::new().unwrap();
    caseconv(&dir)
        .args(["--style", "kebab", "hello_world"])
        .assert()
        .success()
        .stdout("hello-world\n");

    caseconv(&dir)
        .args(["-s", "dot", "HELLO-WORLD"])
        .assert()
        .success()
        .stdout("hello.world\n");
}

#[test]
fn unknown_style_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    caseconv(&dir)
        .args(["--style", "snake", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown case style"));
}

#[test]
fn reads_stdin_when_no_inputs() {
    let dir = TempDir::new().unwrap();
    caseconv(&dir)
        .args(["-s", "kebab"])
        .write_stdin("First Line\n   --__  \nsecond_line\n")
        .assert()
        .success()
        .stdout("first-line\n\nsecond-line\n");
}

#[test]
fn converts_file_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("names.txt");
    fs::write(&path, "user name\nORDER-ID\n").unwrap();

    caseconv(&dir)
        .args(["-s", "dot", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("user.name\norder.id\n");
}

#[test]
fn json_mode_rejects_non_strings() {
    let dir = TempDir::new().unwrap();
    caseconv(&dir)
        .args(["--json", "\"hello world\"", "123"])
        .assert()
        .code(1)
        .stdout("helloWorld\n")
        .stderr(predicate::str::contains(
            "expected a string, but received number",
        ));
}

#[test]
fn no_fail_keeps_exit_code_zero() {
    let dir = TempDir::new().unwrap();
    caseconv(&dir)
        .args(["--json", "--no-fail", "null"])
        .assert()
        .success()
        .stderr(predicate::str::contains("received null"));
}

#[test]
fn json_output_format() {
    let dir = TempDir::new().unwrap();
    let output = caseconv(&dir)
        .args(["-o", "json", "-s", "kebab", "Hello World"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["style"], "kebab");
    assert_eq!(value["converted"], 1);
    assert_eq!(value["results"][0]["output"], "hello-world");
}

#[test]
fn local_config_sets_style_and_skip_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".caseconv.toml"),
        "style = \"dot\"\nskip_empty = true\n",
    )
    .unwrap();

    caseconv(&dir)
        .args(["a b", "!!!", "c d"])
        .assert()
        .success()
        .stdout("a.b\nc.d\n");

    caseconv(&dir)
        .args(["--style", "camel", "a b"])
        .assert()
        .success()
        .stdout("aB\n");
}

#[test]
fn prints_completion_script() {
    let dir = TempDir::new().unwrap();
    caseconv(&dir)
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("caseconv"));
}

#[test]
fn missing_file_is_a_failure() {
    let dir = TempDir::new().unwrap();
    caseconv(&dir)
        .args(["-f", "nope.txt"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to read file: nope.txt"));

    caseconv(&dir)
        .args(["--no-fail", "-f", "nope.txt"])
        .assert()
        .success();
}

#[test]
fn unreadable_file_keeps_other_results() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("adir")).unwrap();

    caseconv(&dir)
        .args(["x y", "-f", "adir"])
        .assert()
        .code(1)
        .stdout("xY\n")
        .stderr(predicate::str::contains("Failed to read file: adir"));
}

#[test]
fn json_output_lists_failed_files() {
    let dir = TempDir::new().unwrap();
    let output = caseconv(&dir)
        .args(["-o", "json", "a b", "-f", "nope.txt"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["converted"], 1);
    assert_eq!(value["rejected"], 1);
    assert_eq!(value["results"][0]["output"], "aB");
    assert_eq!(value["results"][1]["input"], "nope.txt");
    assert!(value["results"][1]["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to read file: nope.txt"));
}
