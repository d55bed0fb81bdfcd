use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CreateProjectError;

/// Team assigned to projects created through the new-project flow.
pub const DEFAULT_TEAM_MEMBER: &str = "Admin";

/// Lifecycle status of a tracked project.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Active,
    AtRisk,
    OnHold,
    Completed,
}

impl ProjectStatus {
    /// Stable slug used as badge text and badge style key.
    pub fn slug(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::AtRisk => "at-risk",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Completion percentage, always within `0..=100`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize,
    Deserialize,
)]
#[serde(from = "i64", into = "u8")]
pub struct Progress(u8);

impl Progress {
    pub const MAX: u8 = 100;

    /// Build a progress value, clamping anything above 100.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(Self::MAX))
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Filled fraction of a progress bar, `progress / 100`.
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / f32::from(Self::MAX)
    }
}

impl From<u8> for Progress {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

/// Wide conversion used when reading records, clamping into `0..=100`.
impl From<i64> for Progress {
    fn from(value: i64) -> Self {
        let clamped = value.clamp(0, i64::from(Self::MAX));
        Self::new(u8::try_from(clamped).unwrap_or(Self::MAX))
    }
}

impl From<Progress> for u8 {
    fn from(value: Progress) -> Self {
        value.0
    }
}

/// In-memory record of a tracked initiative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub progress: Progress,
    #[serde(default)]
    pub team: Vec<String>,
}

/// Ordered, append-only collection of project records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStore {
    projects: Vec<ProjectRecord>,
    /// `None` once every id up to `u64::MAX` has been handed out.
    next_id: Option<u64>,
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore {
    /// Create an empty store whose first id is `1`.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Seed a store with existing records.
    ///
    /// Records whose id is already taken are skipped, and so is a record
    /// with id `u64::MAX`, which would leave no id for the next project. The
    /// id counter resumes after the largest seeded id, so later
    /// [`ProjectStore::add`] calls never collide with a seed.
    pub fn with_projects(seed: Vec<ProjectRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut projects = Vec::with_capacity(seed.len());

        for record in seed {
            if record.id == u64::MAX {
                log::warn!(
                    "skipping seeded project {:?}: id {} leaves no next id",
                    record.name,
                    record.id
                );
                continue;
            }
            if !seen.insert(record.id) {
                log::warn!(
                    "skipping seeded project {:?}: id {} already used",
                    record.name,
                    record.id
                );
                continue;
            }
            projects.push(record);
        }

        let next_id = projects
            .iter()
            .map(|record| record.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        Self { projects, next_id }
    }

    /// Append a new active project named `name` and return a copy of it.
    ///
    /// Fails without touching the store once the id space is used up.
    pub fn add(
        &mut self,
        name: impl Into<String>,
    ) -> Result<ProjectRecord, CreateProjectError> {
        let Some(id) = self.next_id else {
            log::warn!("project rejected: no project ids left");
            return Err(CreateProjectError::IdsExhausted);
        };
        let record = ProjectRecord {
            id,
            name: name.into(),
            status: ProjectStatus::Active,
            progress: Progress::new(0),
            team: vec![String::from(DEFAULT_TEAM_MEMBER)],
        };
        self.next_id = id.checked_add(1);

        log::info!("project {} created: {:?}", record.id, record.name);
        self.projects.push(record.clone());
        Ok(record)
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn get(&self, id: u64) -> Option<&ProjectRecord> {
        self.projects.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// The two demo projects the dashboard starts with.
pub fn sample_projects() -> Vec<ProjectRecord> {
    vec![
        ProjectRecord {
            id: 1,
            name: String::from("Q1 Product Launch"),
            status: ProjectStatus::Active,
            progress: Progress::new(65),
            team: team(&["Alice", "Bob", "Charlie"]),
        },
        ProjectRecord {
            id: 2,
            name: String::from("Infrastructure Migration"),
            status: ProjectStatus::AtRisk,
            progress: Progress::new(30),
            team: team(&["David", "Eve"]),
        },
    ]
}

fn team(members: &[&str]) -> Vec<String> {
    members.iter().map(|member| String::from(*member)).collect()
}

#[cfg(test)]
mod tests {
    use super::{
        Progress, ProjectRecord, ProjectStatus, ProjectStore, sample_projects,
    };
    use crate::error::CreateProjectError;

    #[test]
    fn given_empty_store_when_adding_then_record_uses_creation_defaults() {
        let mut store = ProjectStore::new();

        let record = store.add("Build a rocket").expect("store has room");

        assert_eq!(record.id, 1);
        assert_eq!(record.name, "Build a rocket");
        assert_eq!(record.status, ProjectStatus::Active);
        assert_eq!(record.progress.percent(), 0);
        assert_eq!(record.team, vec![String::from("Admin")]);
        assert_eq!(store.all(), &[record]);
    }

    #[test]
    fn given_many_adds_when_reading_all_then_ids_are_distinct_and_ordered() {
        let mut store = ProjectStore::new();
        let names: Vec<String> =
            (0..25).map(|index| format!("project {index}")).collect();

        for name in &names {
            store.add(name.clone()).expect("store has room");
        }

        let stored: Vec<&str> =
            store.all().iter().map(|record| record.name.as_str()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(stored, expected);

        let mut ids: Vec<u64> = store.all().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), names.len());
    }

    #[test]
    fn given_seeded_store_when_adding_then_id_follows_largest_seed() {
        let mut store = ProjectStore::with_projects(sample_projects());

        let record = store.add("Next").expect("store has room");

        assert_eq!(record.id, 3);
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.get(1).map(|r| r.name.as_str()),
            Some("Q1 Product Launch")
        );
    }

    #[test]
    fn given_seed_with_max_id_when_seeding_then_it_is_skipped() {
        let mut seed = sample_projects();
        seed.push(ProjectRecord {
            id: u64::MAX,
            name: String::from("Edge"),
            status: ProjectStatus::Active,
            progress: Progress::new(0),
            team: Vec::new(),
        });
        let mut store = ProjectStore::with_projects(seed);

        let record = store.add("Build a rocket").expect("store has room");

        assert_eq!(record.id, 3);
        assert!(store.get(u64::MAX).is_none());
        assert!(store.all().iter().all(|r| r.name != "Edge"));
    }

    #[test]
    fn given_last_free_id_when_adding_twice_then_second_add_is_rejected() {
        let mut store = ProjectStore::with_projects(vec![ProjectRecord {
            id: u64::MAX - 1,
            name: String::from("Almost full"),
            status: ProjectStatus::Active,
            progress: Progress::new(0),
            team: Vec::new(),
        }]);

        let last = store.add("Last one").expect("one id is left");
        let overflow = store.add("One too many");

        assert_eq!(last.id, u64::MAX);
        assert_eq!(overflow, Err(CreateProjectError::IdsExhausted));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn given_duplicate_seed_ids_when_seeding_then_later_duplicates_are_skipped()
    {
        let mut seed = sample_projects();
        let mut duplicate = seed[0].clone();
        duplicate.name = String::from("Shadow");
        seed.push(duplicate);

        let store = ProjectStore::with_projects(seed);

        assert_eq!(store.len(), 2);
        assert!(store.all().iter().all(|record| record.name != "Shadow"));
    }

    #[test]
    fn given_out_of_range_percent_when_building_progress_then_it_is_clamped() {
        assert_eq!(Progress::new(250).percent(), 100);
        assert_eq!(Progress::from(42_u8).fraction(), 0.42);
        assert_eq!(Progress::from(-5_i64).percent(), 0);
        assert_eq!(Progress::from(300_i64).percent(), 100);
    }

    #[test]
    fn given_json_record_when_deserializing_then_defaults_and_clamp_apply() {
        let record: ProjectRecord = serde_json::from_str(
            r#"{ "id": 7, "name": "Audit", "status": "on-hold",
                 "progress": 180 }"#,
        )
        .expect("record should deserialize");

        assert_eq!(record.status, ProjectStatus::OnHold);
        assert_eq!(record.progress.percent(), 100);
        assert!(record.team.is_empty());
    }

    #[test]
    fn given_progress_outside_byte_range_when_deserializing_then_it_is_clamped()
    {
        let high: ProjectRecord = serde_json::from_str(
            r#"{ "id": 5, "name": "x", "progress": 300 }"#,
        )
        .expect("record should deserialize");
        let low: ProjectRecord = serde_json::from_str(
            r#"{ "id": 6, "name": "y", "progress": -20 }"#,
        )
        .expect("record should deserialize");

        assert_eq!(high.progress.percent(), 100);
        assert_eq!(low.progress.percent(), 0);
    }

    #[test]
    fn given_statuses_when_formatting_then_slugs_are_kebab_case() {
        assert_eq!(ProjectStatus::AtRisk.to_string(), "at-risk");
        assert_eq!(ProjectStatus::Completed.slug(), "completed");
    }
}
