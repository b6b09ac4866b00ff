#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Configuration bootstrap and result color validation

mod common;

use common::Sandbox;
use predicates::prelude::*;

#[test]
fn first_run_creates_sample_config() {
    let sandbox = Sandbox::empty();
    sandbox.write_pack("en", &common::sample_verses());
    assert!(!sandbox.config_path().exists());

    sandbox
        .cmd()
        .arg("John 3:16")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ John 3:16 │"))
        .stderr(predicate::str::contains("No configuration file was found"));

    let written = std::fs::read_to_string(sandbox.config_path()).unwrap();
    assert!(written.contains("language = \"en\""));
    assert!(written.contains("result_color = \"255, 0, 0\""));
    assert!(written.contains("search_limit = 10"));
}

#[test]
fn camel_case_config_keys_are_accepted() {
    let sandbox = Sandbox::new(10);
    sandbox.write_config("language = \"en\"\nresultColor = \"0 0 255\"\nsearchLimit = 1\n");

    sandbox
        .cmd()
        .args(["-s", "God", "--onlyVerses"])
        .assert()
        .success()
        .stdout("In the beginning God created the heaven and the earth.\n");
}

#[test]
fn malformed_cli_color_aborts_before_lookup() {
    let sandbox = Sandbox::new(10);

    sandbox
        .cmd()
        .args(["John 3:16", "--resultColor", "255, 0"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'r, g, b'"));
}

#[test]
fn malformed_config_color_aborts_before_lookup() {
    let sandbox = Sandbox::new(10);
    sandbox.write_config("language = \"en\"\nresult_color = \"red\"\n");

    sandbox
        .cmd()
        .args(["-s", "God"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid result color"));
}

#[test]
fn color_separators_are_flexible() {
    let sandbox = Sandbox::new(10);

    sandbox
        .cmd()
        .args(["John 3:16", "--rc", " 0,  128 ,255 "])
        .assert()
        .success();
}

#[test]
fn zero_search_limit_is_a_usage_error() {
    let sandbox = Sandbox::new(0);

    sandbox
        .cmd()
        .args(["-s", "God"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("search_limit"));
}

#[test]
fn unparsable_config_falls_back_to_defaults() {
    let sandbox = Sandbox::new(10);
    sandbox.write_config("language = ");

    sandbox
        .cmd()
        .arg("John 3:16")
        .assert()
        .success()
        .stdout(predicate::str::contains("│ John 3:16 │"))
        .stderr(predicate::str::contains("Cannot read the configuration file"));
}
