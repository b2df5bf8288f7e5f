mod errors;
mod model;
mod storage;

pub(crate) use model::{InspectorKind, SettingsData};
pub(crate) use storage::{SettingsLoadStatus, SettingsStore};

/// Load settings for startup, falling back to defaults on any failure.
pub(crate) fn load_initial_settings(store: &SettingsStore) -> SettingsData {
    let path = store.path().display();
    match store.load() {
        Ok((settings, SettingsLoadStatus::Loaded)) => {
            log::info!("settings loaded from {path}");
            settings
        },
        Ok((settings, SettingsLoadStatus::Missing)) => {
            log::info!("no settings at {path}, using defaults");
            settings
        },
        Ok((settings, SettingsLoadStatus::Invalid(message))) => {
            log::warn!("settings at {path} invalid, using defaults: {message}");
            settings
        },
        Err(err) => {
            log::warn!("settings read failed: {err}");
            SettingsData::default()
        },
    }
}
