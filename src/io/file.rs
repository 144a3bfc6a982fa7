use std::path::Path;

use crate::error::{DashboardError, DashboardResult};
use crate::model::Project;

/// Serialize a dataset to its pretty-printed JSON wire form.
pub fn export_dataset(projects: &[Project]) -> DashboardResult<String> {
    serde_json::to_string_pretty(projects).map_err(|e| DashboardError::Persistence(e.to_string()))
}

/// Parse a dataset from its JSON wire form.
pub fn import_dataset(json: &str) -> DashboardResult<Vec<Project>> {
    serde_json::from_str(json).map_err(|e| DashboardError::Import(e.to_string()))
}

/// Write a dataset to a JSON file.
pub fn save_dataset(projects: &[Project], path: &Path) -> DashboardResult<()> {
    let json = export_dataset(projects)?;
    std::fs::write(path, json).map_err(|e| DashboardError::Persistence(e.to_string()))
}

/// Read a dataset from a JSON file.
pub fn load_dataset(path: &Path) -> DashboardResult<Vec<Project>> {
    let json =
        std::fs::read_to_string(path).map_err(|e| DashboardError::Persistence(e.to_string()))?;
    import_dataset(&json)
}
