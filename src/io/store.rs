//! Dataset persistence behind a narrow load/save boundary.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::error::{DashboardError, DashboardResult};
use crate::model::Project;

/// Where the dashboard keeps its dataset between sessions.
///
/// `load` distinguishes "nothing stored yet" (`Ok(None)`) from stored data
/// that cannot be read back (`Err`); the dashboard seeds itself in both cases
/// but only warns about the second.
pub trait DatasetStore {
    fn load(&self) -> DashboardResult<Option<Vec<Project>>>;
    fn save(&self, projects: &[Project]) -> DashboardResult<()>;
}

/// Pretty-printed JSON in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store in the platform data directory, or the working directory when
    /// the platform offers none.
    pub fn default_location() -> Self {
        Self::new(default_data_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetStore for JsonFileStore {
    fn load(&self) -> DashboardResult<Option<Vec<Project>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&self.path)
            .map_err(|e| DashboardError::Persistence(e.to_string()))?;
        let projects =
            serde_json::from_str(&json).map_err(|e| DashboardError::Persistence(e.to_string()))?;
        Ok(Some(projects))
    }

    fn save(&self, projects: &[Project]) -> DashboardResult<()> {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let json = serde_json::to_string_pretty(projects)
            .map_err(|e| DashboardError::Persistence(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| DashboardError::Persistence(e.to_string()))
    }
}

fn default_data_path() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "PortfolioDashboard") {
        proj_dirs.data_dir().join("portfolio.json")
    } else {
        // Fallback
        PathBuf::from(".").join("portfolio.json")
    }
}

/// In-memory store with inspection hooks, shared across clones.
///
/// Intended for tests: a clone can stay outside the dashboard to count writes
/// or make the next save fail.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<MemoryStoreInner>,
}

#[derive(Default)]
struct MemoryStoreInner {
    data: RefCell<Option<Vec<Project>>>,
    saves: Cell<usize>,
    failing: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(projects: Vec<Project>) -> Self {
        let store = Self::new();
        *store.inner.data.borrow_mut() = Some(projects);
        store
    }

    /// Make every following save fail until cleared.
    pub fn set_failing(&self, failing: bool) {
        self.inner.failing.set(failing);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.inner.saves.get()
    }

    /// A copy of the last saved dataset, if any save happened.
    pub fn saved(&self) -> Option<Vec<Project>> {
        self.inner.data.borrow().clone()
    }
}

impl DatasetStore for MemoryStore {
    fn load(&self) -> DashboardResult<Option<Vec<Project>>> {
        Ok(self.inner.data.borrow().clone())
    }

    fn save(&self, projects: &[Project]) -> DashboardResult<()> {
        if self.inner.failing.get() {
            return Err(DashboardError::Persistence("store unavailable".into()));
        }
        *self.inner.data.borrow_mut() = Some(projects.to_vec());
        self.inner.saves.set(self.inner.saves.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_projects;

    #[test]
    fn file_store_reports_missing_file_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("portfolio.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_round_trips_the_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("portfolio.json"));

        let projects = seed_projects();
        store.save(&projects).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.len(), projects.len());
        assert_eq!(loaded[0].name, projects[0].name);
        assert_eq!(
            loaded[2].systems[0].milestones.len(),
            projects[2].systems[0].milestones.len()
        );
    }

    #[test]
    fn file_store_rejects_undecodable_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.json");
        std::fs::write(&path, "{ not json ]").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(DashboardError::Persistence(_))
        ));
    }

    #[test]
    fn memory_store_counts_saves_and_can_fail() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&seed_projects()).unwrap();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.saved().unwrap().len(), 3);

        store.set_failing(true);
        assert!(store.save(&[]).is_err());
        assert_eq!(store.save_count(), 1);

        store.set_failing(false);
        store.save(&[]).unwrap();
        assert_eq!(store.save_count(), 2);
        assert!(store.saved().unwrap().is_empty());
    }
}
