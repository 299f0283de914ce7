use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use tempdir::TempDir;
use user_color::{config::Config, Color};

fn user_color(directory: &Path, arguments: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_user-color"))
        .args(arguments)
        .current_dir(directory)
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

/// The color is the last line; log records may come before it
fn printed_color(output: &Output) -> String {
    assert!(output.status.success(), "{:?}", output);
    stdout_lines(output).pop().unwrap()
}

#[test]
fn sample_config_is_not_overwritten_without_force() {
    let directory = TempDir::new("cli").unwrap();
    let config_path = directory.path().join("config.json");

    assert!(user_color(directory.path(), &["create-sample-config"])
        .status
        .success());
    assert_eq!(Config::load(&config_path).unwrap(), Config::sample());

    fs::write(&config_path, "edited").unwrap();
    let refused = user_color(directory.path(), &["create-sample-config"]);
    assert_eq!(refused.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&refused.stderr).contains("--force"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "edited");

    assert!(user_color(directory.path(), &["create-sample-config", "--force"])
        .status
        .success());
    assert_eq!(Config::load(&config_path).unwrap(), Config::sample());
}

#[test]
fn get_without_config_uses_the_sample_one() {
    let directory = TempDir::new("cli").unwrap();

    let first = printed_color(&user_color(directory.path(), &["get"]));
    assert!(Color::is_well_formed(&first), "{}", first);
    assert!(!directory.path().join("config.json").exists());

    let stored: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(directory.path().join("user_color.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(stored, serde_json::json!({ "userColor": first.as_str() }));

    let second = printed_color(&user_color(directory.path(), &["get"]));
    assert_eq!(first, second);
}

#[test]
fn get_follows_the_given_config() {
    let directory = TempDir::new("cli").unwrap();
    let config_path = directory.path().join("settings.json");
    Config {
        store_path: "colors.json".into(),
        key: "cursorColor".into(),
        log_level: "off".into(),
    }
    .save(&config_path)
    .unwrap();
    fs::write(
        directory.path().join("colors.json"),
        r#"{"cursorColor": "notacolor"}"#,
    )
    .unwrap();

    let output = user_color(
        directory.path(),
        &["--config", config_path.to_str().unwrap(), "get"],
    );
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout_lines(&output), ["notacolor"]);
    assert!(!directory.path().join("user_color.json").exists());
}

#[test]
fn poorly_formatted_config_is_reported() {
    let directory = TempDir::new("cli").unwrap();
    fs::write(directory.path().join("config.json"), "{").unwrap();

    let output = user_color(directory.path(), &["get"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!directory.path().join("user_color.json").exists());
}

#[test]
fn random_prints_the_requested_amount() {
    let directory = TempDir::new("cli").unwrap();

    let output = user_color(directory.path(), &["random", "--count", "5"]);
    assert!(output.status.success(), "{:?}", output);
    let colors = stdout_lines(&output);
    assert_eq!(colors.len(), 5);
    assert!(colors.iter().all(|color| Color::is_well_formed(color)), "{:?}", colors);

    let output = user_color(directory.path(), &["random"]);
    assert_eq!(stdout_lines(&output).len(), 1);
    assert!(!directory.path().join("user_color.json").exists());
}
