mod errors;
mod model;
mod storage;

pub(crate) use model::{
    ConfigData, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, ThemeChoice,
};
use storage::{ConfigLoadStatus, load_config};

/// Load startup configuration, falling back to defaults on any failure.
pub(crate) fn load_initial_config() -> ConfigData {
    match load_config() {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("config loaded");
                },
                ConfigLoadStatus::Missing => {
                    log::info!("no config file, using defaults");
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!("config file invalid: {message}");
                },
            }
            config
        },
        Err(err) => {
            log::warn!("config read failed: {err}");
            ConfigData::default()
        },
    }
}
