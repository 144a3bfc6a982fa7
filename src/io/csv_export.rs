use std::path::Path;

use crate::error::{DashboardError, DashboardResult};
use crate::model::{Project, System};

fn milestone_summary(system: &System) -> String {
    let done = system.milestones.iter().filter(|m| m.completed).count();
    format!("{}/{}", done, system.milestones.len())
}

/// Export the table view to a semicolon-delimited CSV file.
///
/// One row per system: project, manager, system, status, progress, start,
/// end, administrators, technicians, and completed/total milestones. Staff
/// columns join names with "、". Returns the number of rows written.
pub fn export_csv(projects: &[Project], path: &Path) -> DashboardResult<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)
        .map_err(|e| DashboardError::Persistence(format!("Failed to create CSV file: {}", e)))?;

    // Write header
    wtr.write_record([
        "Project",
        "Manager",
        "System",
        "Status",
        "Progress",
        "Start",
        "End",
        "Administrators",
        "Technicians",
        "Milestones",
    ])
    .map_err(|e| DashboardError::Persistence(format!("Failed to write header: {}", e)))?;

    let mut rows = 0;
    for project in projects {
        for system in &project.systems {
            wtr.write_record([
                project.name.as_str(),
                project.manager.as_str(),
                system.name.as_str(),
                system.status.label(),
                &system.progress.to_string(),
                system.start_date.as_str(),
                system.end_date.as_str(),
                &system.administrators.join("、"),
                &system.technicians.join("、"),
                &milestone_summary(system),
            ])
            .map_err(|e| {
                DashboardError::Persistence(format!(
                    "Failed to write system '{}': {}",
                    system.name, e
                ))
            })?;
            rows += 1;
        }
    }

    wtr.flush()
        .map_err(|e| DashboardError::Persistence(format!("Failed to flush CSV: {}", e)))?;
    Ok(rows)
}
