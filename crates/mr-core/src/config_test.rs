use super::*;
use crate::script::default_scripts as builtin_scripts;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_parse_empty_config_uses_defaults() {
    let config: Config = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.script_entries(), builtin_scripts());
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
scripts_dir: db/sql
scripts:
  - 010_users.sql
  - 020_orders.sql
  - 030_seed.sql
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    config.validate().unwrap();
    let paths: Vec<String> = config
        .script_entries()
        .iter()
        .map(|e| e.path().to_string())
        .collect();
    assert_eq!(
        paths,
        vec!["db/sql/010_users.sql", "db/sql/020_orders.sql", "db/sql/030_seed.sql"]
    );
}

#[test]
fn test_unknown_field_is_rejected() {
    let result: Result<Config, _> = serde_yaml::from_str("scripts_path: sql");
    assert!(result.is_err());
}

#[test]
fn test_validate_rejects_empty_scripts() {
    let config: Config = serde_yaml::from_str("scripts: []").unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_validate_rejects_blank_scripts_dir() {
    let config: Config = serde_yaml::from_str("scripts_dir: \"  \"").unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("scripts_dir"));
}

#[test]
fn test_validate_rejects_absolute_script() {
    let config = Config {
        scripts_dir: "scripts".to_string(),
        scripts: vec!["/etc/passwd".to_string()],
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("/etc/passwd"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = Config::load(&dir.path().join("migrun.yml")).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_load_invalid_yaml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("migrun.yml");
    fs::write(&path, "scripts: [unterminated").unwrap();
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, CoreError::YamlParse(_)));
}

#[test]
fn test_load_from_dir_without_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_dir_prefers_yml() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("migrun.yml"), "scripts_dir: from_yml").unwrap();
    fs::write(dir.path().join("migrun.yaml"), "scripts_dir: from_yaml").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.scripts_dir, "from_yml");
}

#[test]
fn test_load_from_dir_reads_yaml_extension() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("migrun.yaml"), "scripts:\n  - only.sql\n").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.scripts, vec!["only.sql".to_string()]);
    assert_eq!(config.scripts_dir, "scripts");
}
