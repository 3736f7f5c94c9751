use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures")
}

/// `mvnpin` with HOME pointed at an empty directory so no user config leaks in.
#[allow(deprecated)]
fn mvnpin(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mvnpin").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn conflicts_lists_winning_versions() {
    let home = TempDir::new().unwrap();
    mvnpin(&home)
        .args(["conflicts", "--tree"])
        .arg(fixtures_dir().join("conflicting-tree.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Version conflicts (2):"))
        .stdout(predicate::str::contains(
            "com.google.guava:guava 31.0-jre, 32.1.2-jre -> 32.1.2-jre",
        ))
        .stdout(predicate::str::contains(
            "org.checkerframework:checker-qual 3.12.0, 3.33.0 -> 3.33.0",
        ))
        .stdout(predicate::str::contains("jackson-core").not());
}

#[test]
fn conflicts_on_clean_tree() {
    let home = TempDir::new().unwrap();
    mvnpin(&home)
        .args(["conflicts", "--tree"])
        .arg(fixtures_dir().join("clean-tree.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No version conflicts."));
}

#[test]
fn conflicts_json_output() {
    let home = TempDir::new().unwrap();
    mvnpin(&home)
        .args(["conflicts", "--json", "--tree"])
        .arg(fixtures_dir().join("conflicting-tree.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""group": "com.google.guava""#))
        .stdout(predicate::str::contains(r#""version": "32.1.2-jre""#));
}

#[test]
fn conflicts_defaults_to_deps_json_in_cwd() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    std::fs::copy(
        fixtures_dir().join("conflicting-tree.json"),
        project.path().join("deps.json"),
    )
    .unwrap();

    mvnpin(&home)
        .current_dir(project.path())
        .arg("conflicts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version conflicts (2):"));
}

#[test]
fn conflicts_missing_tree_fails() {
    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    mvnpin(&home)
        .current_dir(project.path())
        .arg("conflicts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid dependency tree"));
}

#[test]
fn conflicts_max_depth_hides_nested_conflicts() {
    let home = TempDir::new().unwrap();
    mvnpin(&home)
        .args(["conflicts", "--max-depth", "0", "--tree"])
        .arg(fixtures_dir().join("conflicting-tree.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No version conflicts."));
}

#[test]
fn deny_policy_from_config_fails_on_metadata_mismatch() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join(".mvnpin")).unwrap();
    std::fs::write(
        home.path().join(".mvnpin/config.toml"),
        "[resolve]\non-metadata-mismatch = \"deny\"\n",
    )
    .unwrap();

    let project = TempDir::new().unwrap();
    std::fs::write(
        project.path().join("deps.json"),
        r#"{ "dependencies": [
              { "group": "g", "artifact": "a", "version": "1.0" },
              { "group": "g", "artifact": "a", "version": "2.0", "scope": "test" } ] }"#,
    )
    .unwrap();

    mvnpin(&home)
        .current_dir(project.path())
        .arg("conflicts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("metadata mismatch"));
}

#[test]
fn compare_prints_ordering() {
    let home = TempDir::new().unwrap();
    mvnpin(&home)
        .args(["compare", "1.2.0", "1.10.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.0 < 1.10.0"));
}

/// A single-path tree, one `(group, artifact, version)` per level.
fn chain_json(levels: &[(String, String, String)]) -> String {
    let mut json = String::from(r#"{ "dependencies": ["#);
    for (group, artifact, version) in levels {
        json.push_str(&format!(
            r#"{{ "group": "{group}", "artifact": "{artifact}", "version": "{version}", "dependencies": ["#
        ));
    }
    for _ in levels {
        json.push_str("] }");
    }
    json.push_str("] }");
    json
}

#[test]
fn conflicts_on_deep_tree_skips_nodes_past_depth_bound() {
    // 150 levels; `kept` sits at depths 0 and 100, `cut` at depths 1 and 101.
    let levels: Vec<(String, String, String)> = (0..150)
        .map(|depth| {
            let (artifact, version) = match depth {
                0 => ("kept".to_string(), "1.0"),
                100 => ("kept".to_string(), "2.0"),
                1 => ("cut".to_string(), "1.0"),
                101 => ("cut".to_string(), "2.0"),
                d => (format!("n{d}"), "1.0"),
            };
            ("org.deep".to_string(), artifact, version.to_string())
        })
        .collect();

    let home = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    std::fs::write(project.path().join("deps.json"), chain_json(&levels)).unwrap();

    mvnpin(&home)
        .current_dir(project.path())
        .arg("conflicts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Version conflicts (1):"))
        .stdout(predicate::str::contains("org.deep:kept 1.0, 2.0 -> 2.0"))
        .stdout(predicate::str::contains("org.deep:cut").not());
}
