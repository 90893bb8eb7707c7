//! Settings file handling through the binary

use super::helpers::Fixture;

#[test]
fn test_config_file_selects_json_and_strict() {
    let fixture = Fixture::new("abcdef\n", "2\nab\nxy\n");
    let config = fixture.write(
        "checker.toml",
        "[report]\nformat = \"json\"\n\n[verdict]\nstrict_exit = true\n",
    );
    let result = fixture.run(&["--config", config.to_str().unwrap()]);

    assert_eq!(result.code, Some(1));
    let value: serde_json::Value = serde_json::from_str(&result.stdout).unwrap();
    assert_eq!(value["failures"], serde_json::json!(["xy"]));
}

#[test]
fn test_command_line_format_overrides_config() {
    let fixture = Fixture::new("abcdef\n", "1\nab\n");
    let config = fixture.write("checker.toml", "[report]\nformat = \"json\"\n");
    let result = fixture.run(&["--config", config.to_str().unwrap(), "--format", "text"]);

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.starts_with("OK:"));
}

#[test]
fn test_invalid_config_is_error() {
    let fixture = Fixture::new("abcdef\n", "1\nab\n");
    let config = fixture.write("checker.toml", "[report]\nformat = \"xml\"\n");
    let result = fixture.run(&["--config", config.to_str().unwrap()]);

    assert_eq!(result.code, Some(2));
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("Failed to parse config file"));
}

#[test]
fn test_missing_config_is_error() {
    let fixture = Fixture::new("abcdef\n", "1\nab\n");
    let missing = fixture.dir.path().join("absent.toml");
    let result = fixture.run(&["--config", missing.to_str().unwrap()]);

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Failed to read config file"));
}
