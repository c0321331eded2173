use pretty_assertions::assert_eq;
use slked::{EditorConfig, load_disabled_fields, statics};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn saved_config_loads_back_verbatim() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let mut config = EditorConfig::default();
    config.in_dir = PathBuf::from("maps/war3.w3mod");
    config.out_dir = PathBuf::from("maps/out");
    config.is_regex_search = true;
    config.save(dir.path())?;

    let loaded = EditorConfig::load(dir.path())?;
    assert_eq!(loaded, config);
    Ok(())
}

#[test]
fn config_file_uses_the_established_field_names() -> Result<()> {
    let dir = tempfile::tempdir()?;
    EditorConfig::default().save(dir.path())?;

    let raw = std::fs::read_to_string(dir.path().join(statics::CONFIG_FILENAME))?;
    for key in ["InDir", "OutDir", "IsLocked", "IsRegexSearch"] {
        assert!(raw.contains(&format!("\"{key}\"")), "missing {key}");
    }
    Ok(())
}

#[test]
fn first_run_seeds_the_disabled_input_list() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let seeded = load_disabled_fields(dir.path())?;
    assert!(seeded.iter().any(|f| f == "Blend"));

    // Edits to the seeded file win over the built-in defaults.
    let path = dir.path().join(statics::DISABLED_INPUTS_FILENAME);
    std::fs::write(&path, "[\"HP\"]\n")?;
    let edited = load_disabled_fields(dir.path())?;
    assert_eq!(edited, vec!["HP".to_string()]);
    Ok(())
}
