use super::*;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.scripts_dir, None);
    assert_eq!(config.editor_candidates, None);
    assert_eq!(
        config.get_editor_candidates().len(),
        DEFAULT_EDITOR_CANDIDATES.len()
    );
}

#[test]
fn test_default_candidates_prefer_code_insiders() {
    assert_eq!(DEFAULT_EDITOR_CANDIDATES[0], "/usr/bin/code-insiders");
}

#[test]
fn test_load_config_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let config = load_config_from(&temp.path().join(CONFIG_FILE_NAME));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_config_camel_case_keys() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        r#"{"scriptsDir": "~/scripts", "editorCandidates": ["/opt/zed/zed", "vim"]}"#,
    )
    .unwrap();

    let config = load_config_from(&path);
    assert_eq!(config.scripts_dir.as_deref(), Some("~/scripts"));
    assert_eq!(
        config.get_editor_candidates(),
        vec!["/opt/zed/zed".to_string(), "vim".to_string()]
    );
}

#[test]
fn test_load_config_invalid_json_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "{ not json").unwrap();

    assert_eq!(load_config_from(&path), Config::default());
}

#[test]
fn test_config_serialization_skips_unset_fields() {
    let json = serde_json::to_string(&Config::default()).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn test_editor_path_roundtrip_through_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("nested").join(EDITOR_PATH_FILE_NAME);

    save_editor_path_to(&file, &PathBuf::from("/usr/bin/code")).unwrap();
    assert_eq!(
        std::fs::read_to_string(&file).unwrap(),
        "/usr/bin/code\n"
    );
    assert_eq!(
        load_editor_path_from(&file),
        Some(PathBuf::from("/usr/bin/code"))
    );
}

#[test]
fn test_editor_path_skips_blank_lines_and_trims() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join(EDITOR_PATH_FILE_NAME);
    std::fs::write(&file, "\n   \n  /opt/editor/bin/edit  \nignored\n").unwrap();

    assert_eq!(
        load_editor_path_from(&file),
        Some(PathBuf::from("/opt/editor/bin/edit"))
    );
}

#[test]
fn test_editor_path_missing_or_empty() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join(EDITOR_PATH_FILE_NAME);
    assert_eq!(load_editor_path_from(&file), None);

    std::fs::write(&file, "\n\n").unwrap();
    assert_eq!(load_editor_path_from(&file), None);
}

#[test]
fn test_editor_path_expands_tilde() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join(EDITOR_PATH_FILE_NAME);
    std::fs::write(&file, "~/bin/editor\n").unwrap();

    let path = load_editor_path_from(&file).unwrap();
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.ends_with("bin/editor"));
}
