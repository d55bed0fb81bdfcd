use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::model::ConfigData;

/// Status describing how the config was loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the config from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: ConfigData,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: ConfigData, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (ConfigData, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

pub(crate) fn load_config() -> Result<ConfigLoad, ConfigError> {
    load_config_from_path(&config_path())
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                ConfigData::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    let parsed = match serde_json::from_str::<serde_json::Value>(&data) {
        Ok(value) => value,
        Err(err) => {
            return Ok(ConfigLoad::new(
                ConfigData::default(),
                ConfigLoadStatus::Invalid(format!("{err}")),
            ));
        },
    };

    if !parsed.is_object() {
        return Ok(ConfigLoad::new(
            ConfigData::default(),
            ConfigLoadStatus::Invalid(String::from(
                "top-level value must be an object",
            )),
        ));
    }

    let config = ConfigData::from_json(&parsed);
    log::debug!(
        "effective config: {}",
        serde_json::to_string(&config).map_err(ConfigError::from)?
    );

    Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded))
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("nexus")
            .join("config.json");
    }

    std::env::temp_dir().join("nexus").join("config.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use nexus_core::ViewId;

    use super::{
        ConfigData, ConfigError, ConfigLoadStatus, load_config_from_path,
    };

    #[test]
    fn given_missing_file_when_load_then_returns_default_with_missing_status() {
        let root = test_temp_dir("missing");
        let path = root.join("config.json");

        let loaded = load_config_from_path(&path)
            .expect("missing config should not be an error");
        let (config, status) = loaded.into_parts();

        assert!(matches!(status, ConfigLoadStatus::Missing));
        assert_eq!(config, ConfigData::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_valid_file_when_load_then_fields_are_applied() {
        let root = test_temp_dir("valid");
        let path = root.join("config.json");
        fs::write(&path, r#"{ "initial_view": "goals", "theme": "light" }"#)
            .expect("config payload should be written");

        let loaded =
            load_config_from_path(&path).expect("config should load");
        let (config, status) = loaded.into_parts();

        assert!(matches!(status, ConfigLoadStatus::Loaded));
        assert_eq!(config.initial_view(), ViewId::Goals);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_invalid_json_when_load_then_returns_default_with_invalid_status() {
        let root = test_temp_dir("invalid_json");
        let path = root.join("config.json");
        fs::write(&path, "{ this is not valid json")
            .expect("invalid test payload should be written");

        let loaded = load_config_from_path(&path)
            .expect("loading invalid config should not fail with io error");
        let (config, status) = loaded.into_parts();

        assert_eq!(config, ConfigData::default());
        match status {
            ConfigLoadStatus::Invalid(message) => {
                assert!(!message.is_empty());
            },
            other => panic!("expected invalid status, got {other:?}"),
        }

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_non_object_json_when_load_then_status_is_invalid() {
        let root = test_temp_dir("non_object");
        let path = root.join("config.json");
        fs::write(&path, "[1, 2, 3]").expect("payload should be written");

        let (_, status) = load_config_from_path(&path)
            .expect("config should load")
            .into_parts();

        assert!(matches!(status, ConfigLoadStatus::Invalid(_)));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_directory_path_when_load_then_io_error_is_returned() {
        let root = test_temp_dir("directory");

        let result = load_config_from_path(&root);

        assert!(matches!(result, Err(ConfigError::Io(_))));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "nexus-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
