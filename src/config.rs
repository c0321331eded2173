//! Editor configuration persistence.
//!
//! `config.json` carries the table directories and a couple of UI flags;
//! `disabled-inputs.json` lists the field keys hidden while the editor is
//! locked, seeded with a built-in default list on first use.

use crate::statics;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EditorConfig {
    pub in_dir: PathBuf,
    pub out_dir: PathBuf,
    pub is_locked: bool,
    pub is_regex_search: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            in_dir: PathBuf::from(statics::DEFAULT_DATA_DIR),
            out_dir: PathBuf::from(statics::DEFAULT_DATA_DIR),
            is_locked: false,
            is_regex_search: false,
        }
    }
}

impl EditorConfig {
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(statics::CONFIG_FILENAME);
        let text =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Loads the config, falling back to defaults when the file is missing
    /// or unreadable (first run).
    pub fn load_or_default(dir: &Path) -> Self {
        match Self::load(dir) {
            Ok(config) => config,
            Err(e) => {
                warn!("using default configuration: {e:#}");
                Self::default()
            }
        }
    }

    pub fn save(&self, dir: &Path) -> anyhow::Result<()> {
        let path = dir.join(statics::CONFIG_FILENAME);
        let mut text = serde_json::to_string_pretty(self).context("serializing config")?;
        text.push('\n');
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// Reads the locked-mode hidden-field list, writing the defaults first if
/// the file does not exist yet.
pub fn load_disabled_fields(dir: &Path) -> anyhow::Result<Vec<String>> {
    let path = dir.join(statics::DISABLED_INPUTS_FILENAME);
    if path.exists() {
        let text =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    } else {
        let defaults: Vec<String> = statics::DEFAULT_DISABLED_FIELDS
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut text =
            serde_json::to_string_pretty(&defaults).context("serializing disabled fields")?;
        text.push('\n');
        fs::write(&path, text).with_context(|| format!("writing {}", path.display()))?;
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::{EditorConfig, load_disabled_fields};
    use crate::statics;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn config_round_trips_through_json() {
        let dir = tempfile::tempdir().expect("tempdir");

        let config = EditorConfig {
            in_dir: PathBuf::from("/data/in"),
            out_dir: PathBuf::from("/data/out"),
            is_locked: true,
            is_regex_search: true,
        };
        config.save(dir.path()).expect("save");

        let loaded = EditorConfig::load(dir.path()).expect("load");
        assert_eq!(loaded, config);

        // The on-disk field names follow the established convention.
        let raw = std::fs::read_to_string(dir.path().join(statics::CONFIG_FILENAME)).unwrap();
        assert!(raw.contains("\"InDir\""));
        assert!(raw.contains("\"IsRegexSearch\""));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = EditorConfig::load_or_default(dir.path());
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.in_dir, PathBuf::from(statics::DEFAULT_DATA_DIR));
    }

    #[test]
    fn disabled_fields_are_seeded_on_first_use() {
        let dir = tempfile::tempdir().expect("tempdir");

        let first = load_disabled_fields(dir.path()).expect("seed");
        assert_eq!(first.len(), statics::DEFAULT_DISABLED_FIELDS.len());
        assert!(dir.path().join(statics::DISABLED_INPUTS_FILENAME).exists());

        // Second load reads the file back rather than re-seeding.
        let second = load_disabled_fields(dir.path()).expect("reload");
        assert_eq!(first, second);
    }
}
