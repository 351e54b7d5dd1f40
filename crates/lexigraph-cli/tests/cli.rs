use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lexigraph(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lexigraph").unwrap();
    cmd.arg("--config")
        .arg(dir.join("config.toml"))
        .env_remove("LEXIGRAPH_SEED")
        .env_remove("LEXIGRAPH_ADDR")
        .env_remove("RUST_LOG");
    cmd
}

fn write_seed(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("seed.json");
    std::fs::write(
        &path,
        r#"[
            {"word": "Clean", "synonym": "wash"},
            {"word": "wash", "synonym": "rinse"},
            {"word": "happy", "synonym": "joyful"}
        ]"#,
    )
    .unwrap();
    path
}

#[test]
fn find_follows_transitive_synonyms() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);

    lexigraph(dir.path())
        .args(["find", "CLEAN", "--seed"])
        .arg(&seed)
        .assert()
        .success()
        .stdout("rinse\nwash\n");
}

#[test]
fn find_direct_only_lists_neighbors() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);

    lexigraph(dir.path())
        .args(["find", "clean", "--direct", "--seed"])
        .arg(&seed)
        .assert()
        .success()
        .stdout("wash\n");
}

#[test]
fn find_json_output() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);

    let output = lexigraph(dir.path())
        .args(["--format", "json", "find", "rinse", "--stats", "--seed"])
        .arg(&seed)
        .output()
        .unwrap();
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["word"], "rinse");
    assert_eq!(body["synonyms"], serde_json::json!(["clean", "wash"]));
    assert_eq!(body["stats"]["nodes_visited"], 3);
}

#[test]
fn find_unknown_word_reports_none() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);

    lexigraph(dir.path())
        .args(["find", "lonely", "--seed"])
        .arg(&seed)
        .assert()
        .success()
        .stdout(predicate::str::contains("No synonyms found for 'lonely'"));
}

#[test]
fn find_rejects_empty_word() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);

    lexigraph(dir.path())
        .args(["find", "", "--seed"])
        .arg(&seed)
        .assert()
        .failure()
        .stderr(predicate::str::contains("word must not be empty"));
}

#[test]
fn find_requires_a_seed() {
    let dir = TempDir::new().unwrap();

    lexigraph(dir.path())
        .args(["find", "clean"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No seed file given"));
}

#[test]
fn find_uses_seed_from_config() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);

    lexigraph(dir.path())
        .args(["config", "set", "seed"])
        .arg(&seed)
        .assert()
        .success();

    lexigraph(dir.path())
        .args(["find", "joyful"])
        .assert()
        .success()
        .stdout("happy\n");
}

#[test]
fn config_set_then_get() {
    let dir = TempDir::new().unwrap();

    lexigraph(dir.path())
        .args(["config", "set", "addr", "0.0.0.0:9000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set addr = 0.0.0.0:9000"));

    lexigraph(dir.path())
        .args(["config", "get", "addr"])
        .assert()
        .success()
        .stdout("0.0.0.0:9000\n");

    lexigraph(dir.path())
        .args(["config", "get", "log_level"])
        .assert()
        .success()
        .stdout("(not set)\n");
}

#[test]
fn config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();

    lexigraph(dir.path())
        .args(["config", "get", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();

    lexigraph(dir.path()).args(["config", "init"]).assert().success();
    assert!(dir.path().join("config.toml").exists());

    lexigraph(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    lexigraph(dir.path())
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();

    lexigraph(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lexigraph"));
}

#[test]
fn log_file_receives_log_lines() {
    let dir = TempDir::new().unwrap();
    let seed = write_seed(&dir);
    let log = dir.path().join("logs").join("app.log");

    lexigraph(dir.path())
        .args(["config", "set", "log_file"])
        .arg(&log)
        .assert()
        .success();

    lexigraph(dir.path())
        .args(["-v", "find", "clean", "--seed"])
        .arg(&seed)
        .assert()
        .success()
        .stdout("rinse\nwash\n");

    let written = std::fs::read_to_string(&log).unwrap();
    assert!(written.contains("Loading seed file"), "{}", written);
    assert!(written.contains("INFO"));
    assert!(!written.contains('\u{1b}'));
}
