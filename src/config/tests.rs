use super::PreformatConfig;
use figment::Jail;

/// Point HOME at the jail so a developer's user config is not picked up
fn isolate_home(jail: &mut Jail) {
    let home = jail.directory().to_path_buf();
    jail.set_env("HOME", home.display());
}

#[test]
fn test_config_loads_defaults() {
    Jail::expect_with(|jail| {
        isolate_home(jail);

        let config = PreformatConfig::load(jail.directory(), None).expect("defaults should load");

        assert_eq!(config.formatter.command, "black");
        assert!(config.formatter.args.is_empty());
        assert_eq!(config.staging.command, "git");
        assert_eq!(config.staging.args, vec!["add", "--"]);
        assert_eq!(config.selection.normalized_extension(), "py");
        assert_eq!(config.selection.fixture_marker, "test_files");
        assert!(config.merge.markers.contains(&"MERGE_HEAD".to_string()));
        assert!(config.merge.markers.contains(&"MERGE_REQUEST".to_string()));
        Ok(())
    });
}

#[test]
fn test_repository_config_overrides_defaults() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file(
            "preformat.toml",
            r#"
            [formatter]
            command = "ruff"
            args = ["format"]

            [selection]
            extension = ".pyi"
            "#,
        )?;

        let config = PreformatConfig::load(jail.directory(), None).expect("config should load");

        assert_eq!(config.formatter.command, "ruff");
        assert_eq!(config.formatter.args, vec!["format"]);
        assert_eq!(config.selection.normalized_extension(), "pyi");
        // Untouched sections keep their defaults
        assert_eq!(config.staging.command, "git");
        Ok(())
    });
}

#[test]
fn test_environment_has_highest_priority() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("preformat.yaml", "formatter:\n  command: yapf\n")?;
        jail.set_env("PREFORMAT_FORMATTER__COMMAND", "autopep8");

        let config = PreformatConfig::load(jail.directory(), None).expect("config should load");

        assert_eq!(config.formatter.command, "autopep8");
        Ok(())
    });
}

#[test]
fn test_custom_config_by_extension() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file(
            "custom.json",
            r#"{ "merge": { "markers": ["CUSTOM_MARKER"] } }"#,
        )?;

        let custom = jail.directory().join("custom.json");
        let config =
            PreformatConfig::load(jail.directory(), Some(&custom)).expect("config should load");

        assert_eq!(config.merge.markers, vec!["CUSTOM_MARKER"]);
        Ok(())
    });
}

#[test]
fn test_missing_custom_config_is_an_error() {
    Jail::expect_with(|jail| {
        isolate_home(jail);

        let missing = jail.directory().join("nope.toml");
        assert!(PreformatConfig::load(jail.directory(), Some(&missing)).is_err());
        Ok(())
    });
}

#[test]
fn test_validation_rejects_empty_formatter() {
    Jail::expect_with(|jail| {
        isolate_home(jail);
        jail.create_file("preformat.toml", "[formatter]\ncommand = \"  \"\n")?;

        let err = PreformatConfig::load(jail.directory(), None).unwrap_err();
        assert!(err.to_string().contains("formatter.command"));
        Ok(())
    });
}

#[test]
fn test_config_renders_as_toml() {
    Jail::expect_with(|jail| {
        isolate_home(jail);

        let config = PreformatConfig::load(jail.directory(), None).expect("defaults should load");
        let rendered = config.to_toml().expect("config should serialize");

        assert!(rendered.contains("[formatter]"));
        assert!(rendered.contains("command = \"black\""));
        Ok(())
    });
}
