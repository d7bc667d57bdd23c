//! Integration tests for the zkconf binary: exit status, stdout and the error list on stderr.

use super::test_utils::{run_zkconf, FULL_PROJECT};
use std::fs;
use tempfile::TempDir;

fn project(contents: &str) -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&workspace).unwrap();
    fs::write(workspace.join("zkconf.toml"), contents).unwrap();
    (temp_dir, home, workspace)
}

#[test]
fn test_check_succeeds_on_valid_project() {
    let (_temp, home, workspace) = project(FULL_PROJECT);
    let output = run_zkconf(&home, &workspace, &["check"]);

    assert!(
        output.status.success(),
        "zkconf check should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("configuration OK: 2 compiler(s), 5 network(s)"));
}

#[test]
fn test_check_fails_with_error_list() {
    let (_temp, home, workspace) = project(
        r#"
[[solidity.compilers]]
version = "0.8.15"
optimizerRuns = -200

[networks.mainnet]
url = "not a url"
"#,
    );
    let output = run_zkconf(&home, &workspace, &["check"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "nothing should be printed on stdout");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("2 validation error(s)"));
    assert!(stderr.contains("solidity.compilers[0].optimizerRuns"));
    assert!(stderr.contains("networks.mainnet.url"));
}

#[test]
fn test_network_flag_overrides_default() {
    let (_temp, home, workspace) = project(FULL_PROJECT);
    let output = run_zkconf(
        &home,
        &workspace,
        &["--network", "zkSyncMainnet", "networks", "--format", "json"],
    );
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let default: Vec<&serde_json::Value> = rows
        .as_array()
        .unwrap()
        .iter()
        .filter(|row| row["default"] == true)
        .collect();
    assert_eq!(default.len(), 1);
    assert_eq!(default[0]["name"], "zkSyncMainnet");
}

#[test]
fn test_env_override_applies() {
    let (_temp, home, workspace) = project(FULL_PROJECT);
    let bin = env!("CARGO_BIN_EXE_zkconf");
    let output = std::process::Command::new(bin)
        .env("HOME", home.as_os_str())
        .env("XDG_CONFIG_HOME", home.join("config").as_os_str())
        .env("ZKCONF_DEFAULT_NETWORK", "sepolia")
        .env_remove("ZKCONF_ENV")
        .env_remove("ZKCONF_MOCHA_TIMEOUT")
        .arg("--workspace")
        .arg(&workspace)
        .arg("check")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("default network 'sepolia'"));
}

#[test]
fn test_project_file_overrides_global_file() {
    let (_temp, home, workspace) = project(
        r#"
[mocha]
timeout = 5000
"#,
    );
    let global_dir = home.join("config").join("zkconf");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("config.toml"),
        r#"
[networks.sepolia]
url = "https://rpc2.sepolia.org"

[mocha]
timeout = 90000
"#,
    )
    .unwrap();

    let output = run_zkconf(&home, &workspace, &["show", "--format", "json"]);
    assert!(output.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["mocha"]["timeout"], 5000);
    assert_eq!(shown["networks"]["sepolia"]["url"], "https://rpc2.sepolia.org");

    let output = run_zkconf(&home, &workspace, &["--no-global", "show", "--format", "json"]);
    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(shown["networks"].get("sepolia").is_none());
}

#[test]
fn test_explicit_config_file() {
    let (_temp, home, workspace) = project(FULL_PROJECT);
    let other = workspace.join("minimal.json");
    fs::write(&other, r#"{"mocha": {"timeout": 1234}}"#).unwrap();

    let output = run_zkconf(
        &home,
        &workspace,
        &["--config", other.to_str().unwrap(), "show", "--format", "json"],
    );
    assert!(output.status.success());
    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(shown["mocha"]["timeout"], 1234);
    assert_eq!(shown["defaultNetwork"], "hardhat");
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let (_temp, home, workspace) = project(FULL_PROJECT);
    let output = run_zkconf(&home, &workspace, &["--verbose", "paths"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration resolved"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.starts_with("sources"));
}

#[test]
fn test_show_toml_with_null_pass_through_value() {
    let temp_dir = TempDir::new().unwrap();
    let home = temp_dir.path().join("home");
    let workspace = temp_dir.path().join("ws");
    fs::create_dir_all(&home).unwrap();
    fs::create_dir_all(&workspace).unwrap();
    fs::write(
        workspace.join("zkconf.json"),
        r#"{"networks": {"sepolia": {"url": "https://a.org", "accounts": null, "gasMultiplier": 2}}}"#,
    )
    .unwrap();

    let output = run_zkconf(&home, &workspace, &["show", "--format", "toml"]);
    assert!(
        output.status.success(),
        "show --format toml should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let shown: toml::Value = toml::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    let sepolia = &shown["networks"]["sepolia"];
    assert_eq!(sepolia["url"].as_str(), Some("https://a.org"));
    assert_eq!(sepolia["gasMultiplier"].as_integer(), Some(2));
    assert!(sepolia.get("accounts").is_none());
}
