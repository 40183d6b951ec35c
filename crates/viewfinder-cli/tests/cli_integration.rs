use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn viewfinder() -> Command {
    Command::cargo_bin("viewfinder").unwrap()
}

#[test]
fn test_help_exits_zero() {
    viewfinder()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("viewfinder"));
}

#[test]
fn test_find_by_text_hit() {
    let dump = fixture_path("login_screen.json");

    viewfinder()
        .args(["find", dump.to_str().unwrap(), "--text", "Login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("button \"Login\" state=normal"));
}

#[test]
fn test_find_by_text_miss_exits_one() {
    let dump = fixture_path("login_screen.json");

    viewfinder()
        .args(["find", dump.to_str().unwrap(), "--text", "ABC"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No matching button"));
}

#[test]
fn test_find_matches_whole_string_only() {
    let dump = fixture_path("login_screen.json");

    // "Forgot" is a prefix of a real title; exact matching must reject it.
    viewfinder()
        .args(["find", dump.to_str().unwrap(), "--text", "Forgot"])
        .assert()
        .code(1);

    viewfinder()
        .args(["find", dump.to_str().unwrap(), "--text", "Forgot Password"])
        .assert()
        .success();
}

#[test]
fn test_find_nested_button() {
    let dump = fixture_path("login_screen.json");

    viewfinder()
        .args(["find", dump.to_str().unwrap(), "--text", "Forgot Password"])
        .assert()
        .success()
        .stdout(predicate::str::contains("state=disabled"));
}

#[test]
fn test_find_by_image_content() {
    let dump = fixture_path("login_screen.json");
    let cat = fixture_path("cat.bin");

    viewfinder()
        .args([
            "find",
            dump.to_str().unwrap(),
            "--image",
            cat.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("image=cat"));
}

#[test]
fn test_find_by_image_distinct_content_misses() {
    let dump = fixture_path("login_screen.json");
    let foliage = fixture_path("foliage.bin");

    viewfinder()
        .args([
            "find",
            dump.to_str().unwrap(),
            "--image",
            foliage.to_str().unwrap(),
        ])
        .assert()
        .code(1);
}

#[test]
fn test_find_json_format() {
    let dump = fixture_path("login_screen.json");

    let assert = viewfinder()
        .args(["--format", "json", "find", dump.to_str().unwrap(), "--text", "Login"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["title"], "Login");
    assert_eq!(value["state"], "normal");
}

#[test]
fn test_find_json_format_miss_prints_null() {
    let dump = fixture_path("login_screen.json");

    viewfinder()
        .args(["--format", "json", "find", dump.to_str().unwrap(), "--text", "ABC"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("null"));
}

#[test]
fn test_has_mirrors_answer_in_exit_code() {
    let dump = fixture_path("login_screen.json");

    viewfinder()
        .args(["has", dump.to_str().unwrap(), "--text", "Login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    viewfinder()
        .args(["has", dump.to_str().unwrap(), "--text", "ABC"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("false"));
}

#[test]
fn test_list_all_buttons_in_traversal_order() {
    let dump = fixture_path("login_screen.json");

    let assert = viewfinder()
        .args(["list", dump.to_str().unwrap()])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Login"));
    assert!(lines[1].contains("Forgot Password"));
    assert!(lines[2].contains("<untitled>"));
    assert!(lines[3].contains("Sign Up"));
}

#[test]
fn test_list_filtered_by_state() {
    let dump = fixture_path("login_screen.json");

    viewfinder()
        .args(["list", dump.to_str().unwrap(), "--state", "disabled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forgot Password").and(predicate::str::contains("state=normal").not()));
}

#[test]
fn test_count_by_state() {
    let dump = fixture_path("login_screen.json");

    viewfinder()
        .args(["count", dump.to_str().unwrap(), "--state", "normal"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2\n"));

    viewfinder()
        .args(["count", dump.to_str().unwrap(), "--state", "application"])
        .assert()
        .success()
        .stdout(predicate::str::diff("0\n"));
}

#[test]
fn test_count_json_format() {
    let dump = fixture_path("login_screen.json");

    viewfinder()
        .args(["--format", "json", "count", dump.to_str().unwrap(), "--state", "selected"])
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"count\":1}"));
}

#[test]
fn test_truncated_dump_exits_two() {
    let dump = fixture_path("truncated.json");

    viewfinder()
        .args(["find", dump.to_str().unwrap(), "--text", "Login"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load dump"));
}

#[test]
fn test_missing_dump_file_exits_two() {
    viewfinder()
        .args(["find", "/nonexistent/dump.json", "--text", "Login"])
        .assert()
        .code(2);
}

#[test]
fn test_selector_is_required() {
    let dump = fixture_path("login_screen.json");

    viewfinder()
        .args(["find", dump.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}
