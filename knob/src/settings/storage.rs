use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::SettingsData;

const APP_DIR: &str = "knob";
const SETTINGS_FILE: &str = "settings.json";

/// How settings were obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// JSON settings file of the inspector.
///
/// A missing or unparsable file is not an error: it yields defaults and a
/// status saying why. Only I/O failures are reported as errors.
#[derive(Debug, Clone)]
pub(crate) struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.config/knob/settings.json`, or the temp dir without a home.
    pub(crate) fn user() -> Self {
        let base = std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".config"))
            .unwrap_or_else(std::env::temp_dir);
        Self::new(base.join(APP_DIR).join(SETTINGS_FILE))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn load(
        &self,
    ) -> Result<(SettingsData, SettingsLoadStatus), SettingsError> {
        let text = match fs::read_to_string(&self.path) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok((SettingsData::default(), SettingsLoadStatus::Missing));
            },
            read => read?,
        };

        Ok(serde_json::from_str::<serde_json::Value>(&text).map_or_else(
            |err| {
                (
                    SettingsData::default(),
                    SettingsLoadStatus::Invalid(err.to_string()),
                )
            },
            |json| (SettingsData::from_json(&json), SettingsLoadStatus::Loaded),
        ))
    }

    /// Write through a sibling temp file so a crash never leaves a torn file.
    pub(crate) fn save(&self, settings: &SettingsData) -> Result<(), SettingsError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let staged = self.path.with_extension("json.tmp");
        fs::write(&staged, serde_json::to_vec_pretty(settings)?)?;
        fs::rename(&staged, &self.path)?;
        log::debug!("settings written to {}", self.path.display());

        Ok(())
    }
}
