use nexus_core::{ProjectRecord, ProjectStore, ViewId, sample_projects};
use serde::Serialize;

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;
const DEFAULT_WINDOW_WIDTH: f32 = 1200.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Color scheme selected in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

impl ThemeChoice {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(ThemeChoice::Dark),
            "light" => Some(ThemeChoice::Light),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct WindowConfig {
    width: f32,
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Typed startup configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ConfigData {
    initial_view: ViewId,
    theme: ThemeChoice,
    sample_projects: bool,
    projects: Vec<ProjectRecord>,
    window: WindowConfig,
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            initial_view: ViewId::Dashboard,
            theme: ThemeChoice::Dark,
            sample_projects: true,
            projects: Vec::new(),
            window: WindowConfig::default(),
        }
    }
}

impl ConfigData {
    /// View shown when the dashboard starts.
    pub(crate) fn initial_view(&self) -> ViewId {
        self.initial_view
    }

    pub(crate) fn theme(&self) -> ThemeChoice {
        self.theme
    }

    /// Initial window size as `(width, height)`.
    pub(crate) fn window_size(&self) -> (f32, f32) {
        (self.window.width, self.window.height)
    }

    /// Build the project store the dashboard starts with.
    ///
    /// Sample projects come first when enabled, followed by projects listed
    /// in the config file.
    pub(crate) fn project_store(&self) -> ProjectStore {
        let mut seed = if self.sample_projects {
            sample_projects()
        } else {
            Vec::new()
        };
        seed.extend(self.projects.iter().cloned());
        ProjectStore::with_projects(seed)
    }

    /// Read config from a JSON document, keeping defaults for every field that
    /// is absent or malformed.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut config = ConfigData::default();

        if let Some(raw) = read_string_field(value, "initial_view") {
            let view = ViewId::parse(&raw);
            if view.as_str() != raw {
                log::warn!("unknown initial view {raw:?}, using {view}");
            }
            config.initial_view = view;
        }

        if let Some(raw) = read_string_field(value, "theme") {
            match ThemeChoice::parse(&raw) {
                Some(theme) => config.theme = theme,
                None => log::warn!("unknown theme {raw:?}, keeping default"),
            }
        }

        if let Some(enabled) =
            value.get("sample_projects").and_then(serde_json::Value::as_bool)
        {
            config.sample_projects = enabled;
        }

        if let Some(entries) =
            value.get("projects").and_then(serde_json::Value::as_array)
        {
            config.projects = read_projects(entries);
        }

        if let Some(window) = value.get("window") {
            if let Some(width) =
                read_dimension(window, "width", MIN_WINDOW_WIDTH)
            {
                config.window.width = width;
            }
            if let Some(height) =
                read_dimension(window, "height", MIN_WINDOW_HEIGHT)
            {
                config.window.height = height;
            }
        }

        config
    }
}

fn read_string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
}

fn read_dimension(
    value: &serde_json::Value,
    key: &str,
    minimum: f32,
) -> Option<f32> {
    let raw = value.get(key).and_then(serde_json::Value::as_f64)?;
    if !raw.is_finite() {
        return None;
    }
    Some((raw as f32).max(minimum))
}

fn read_projects(entries: &[serde_json::Value]) -> Vec<ProjectRecord> {
    entries
        .iter()
        .filter_map(|entry| {
            match serde_json::from_value::<ProjectRecord>(entry.clone()) {
                Ok(record) if !record.name.trim().is_empty() => Some(record),
                Ok(record) => {
                    log::warn!(
                        "skipping project {} with empty name",
                        record.id
                    );
                    None
                },
                Err(err) => {
                    log::warn!("skipping malformed project entry: {err}");
                    None
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use nexus_core::{ProjectStatus, ViewId};
    use serde_json::json;

    use super::{ConfigData, MIN_WINDOW_WIDTH, ThemeChoice};

    #[test]
    fn given_empty_document_when_reading_then_defaults_are_kept() {
        let config = ConfigData::from_json(&json!({}));

        assert_eq!(config, ConfigData::default());
        assert_eq!(config.project_store().len(), 2);
    }

    #[test]
    fn given_full_document_when_reading_then_every_field_is_applied() {
        let config = ConfigData::from_json(&json!({
            "initial_view": "projects",
            "theme": "light",
            "sample_projects": false,
            "projects": [
                {
                    "id": 10,
                    "name": "Brand refresh",
                    "status": "completed",
                    "progress": 100
                }
            ],
            "window": { "width": 1440, "height": 900 }
        }));

        assert_eq!(config.initial_view(), ViewId::Projects);
        assert_eq!(config.theme(), ThemeChoice::Light);
        assert_eq!(config.window_size(), (1440.0, 900.0));

        let store = config.project_store();
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].status, ProjectStatus::Completed);
        assert_eq!(store.all()[0].id, 10);
    }

    #[test]
    fn given_bad_fields_when_reading_then_only_those_fields_fall_back() {
        let config = ConfigData::from_json(&json!({
            "initial_view": "reports",
            "theme": "neon",
            "sample_projects": "yes",
            "projects": [{ "name": "missing id" }, { "id": 3, "name": "  " }],
            "window": { "width": 320 }
        }));

        assert_eq!(config.initial_view(), ViewId::Dashboard);
        assert_eq!(config.theme(), ThemeChoice::Dark);
        assert_eq!(config.window_size().0, MIN_WINDOW_WIDTH);
        assert_eq!(config.project_store().len(), 2);
    }

    #[test]
    fn given_out_of_range_progress_when_reading_then_project_is_kept_clamped()
    {
        let config = ConfigData::from_json(&json!({
            "sample_projects": false,
            "projects": [
                { "id": 5, "name": "Overshoot", "progress": 300 },
                { "id": 6, "name": "Undershoot", "progress": -4 }
            ]
        }));

        let store = config.project_store();
        let percents: Vec<u8> = store
            .all()
            .iter()
            .map(|record| record.progress.percent())
            .collect();
        assert_eq!(percents, vec![100, 0]);
    }

    #[test]
    fn given_project_at_max_id_when_reading_then_added_ids_stay_unique() {
        let config = ConfigData::from_json(&json!({
            "projects": [{ "id": u64::MAX, "name": "Edge" }]
        }));

        let mut store = config.project_store();
        let record = store.add("Build a rocket").expect("store has room");

        assert_eq!(record.id, 3);
        assert!(store.get(u64::MAX).is_none());
    }
}
