use assert_cmd::Command;
use predicates::prelude::*;
use tagbalance_testing::TestWorld;

#[test]
fn test_config_path_uses_env_var() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "path"])?;

    assert!(result.success());
    assert_eq!(
        result.stdout().trim_end(),
        world.config_path().display().to_string()
    );
    Ok(())
}

#[test]
fn test_config_flag_overrides_env_var() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["--config", "custom.toml", "config", "path"])?;

    assert_eq!(result.stdout().trim_end(), "custom.toml");
    Ok(())
}

#[test]
fn test_config_init_and_force() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let first = world.run(&["config", "init"])?;
    assert!(first.success(), "stderr: {}", first.stderr());
    assert!(world.config_path().exists());

    let second = world.run(&["config", "init"])?;
    assert_eq!(second.code(), Some(1));
    assert!(second.stderr().contains("already exists"));

    let forced = world.run(&["config", "init", "--force"])?;
    assert!(forced.success());
    Ok(())
}

#[test]
fn test_config_show_defaults() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "show"])?;

    assert!(result.success());
    assert!(result.stdout().contains("[tags]"));
    assert!(result.stdout().contains("\"Link\""));
    assert!(result.stdout().contains("\"FeedbackPopup\""));
    Ok(())
}

#[test]
fn test_config_show_json() -> anyhow::Result<()> {
    let world = TestWorld::new().with_config("[tags]\ntracked = [\"main\", \"aside\"]\n");

    let json = world.run(&["--format", "json", "config", "show"])?.json()?;

    assert_eq!(json["tags"]["tracked"], serde_json::json!(["aside", "main"]));
    assert_eq!(
        json["tags"]["self_closing"].as_array().map(|a| a.len()),
        Some(22)
    );
    Ok(())
}

#[test]
fn test_malformed_config_fails_check() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_config("[tags\n")
        .with_file("a.jsx", "<div></div>");

    let result = world.run(&["check", "a.jsx"])?;

    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().contains("Configuration error"));
    Ok(())
}

#[test]
#[allow(deprecated)]
fn test_help_lists_commands() {
    Command::cargo_bin("tagbalance")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("config"));
}
