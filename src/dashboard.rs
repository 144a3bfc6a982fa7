//! The dashboard context: owned dataset, derived state, and every operation
//! the UI layer invokes.

use std::path::Path;

use uuid::Uuid;

use crate::error::{DashboardError, DashboardResult};
use crate::filter::{project_names, DashboardStats, FilterCriteria};
use crate::io::{self, DatasetStore};
use crate::model::{Project, ProjectDraft, SystemDraft, TimeRange};
use crate::reorder::move_within_list;
use crate::seed;

/// Owns the dataset and keeps the derived state consistent.
///
/// Every successful mutation recomputes the time range, the filtered view,
/// and the statistics before returning, then writes the dataset through to
/// the store. A failed write keeps the mutation and surfaces a warning in
/// [`status`](Self::status) instead of unwinding it.
pub struct Dashboard {
    projects: Vec<Project>,
    time_range: TimeRange,
    criteria: FilterCriteria,
    filtered: Vec<Project>,
    stats: DashboardStats,
    status: String,
    store: Box<dyn DatasetStore>,
}

impl Dashboard {
    /// Open the dashboard on a store.
    ///
    /// An empty store seeds the sample portfolio; a store whose contents
    /// cannot be read back does the same but logs the reason.
    pub fn open(store: impl DatasetStore + 'static) -> Self {
        let projects = match store.load() {
            Ok(Some(projects)) => projects,
            Ok(None) => {
                log::info!("no stored dataset, starting from the sample portfolio");
                seed::seed_projects()
            }
            Err(e) => {
                log::warn!("stored dataset unreadable ({}), starting from the sample portfolio", e);
                seed::seed_projects()
            }
        };

        let mut dashboard = Self {
            projects,
            time_range: TimeRange::current_year(),
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            stats: DashboardStats::default(),
            status: "Ready".to_string(),
            store: Box::new(store),
        };
        dashboard.refresh();
        dashboard
    }

    // ── Derived state ───────────────────────────────────────────

    /// Recompute everything that depends on the dataset.
    fn refresh(&mut self) {
        self.time_range = TimeRange::compute(&self.projects);
        self.refilter();
    }

    /// Recompute only what depends on the criteria.
    fn refilter(&mut self) {
        self.filtered = self.criteria.apply(&self.projects);
        self.stats = DashboardStats::collect(&self.filtered);
    }

    /// Write the dataset through to the store. Failures downgrade to a
    /// warning; the in-memory mutation stands.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.projects) {
            log::warn!("failed to persist dataset: {}", e);
            self.status = format!("Warning: changes not saved: {}", e);
        }
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn filtered(&self) -> &[Project] {
        &self.filtered
    }

    pub fn time_range(&self) -> &TimeRange {
        &self.time_range
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    /// One-line outcome of the most recent operation.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Unique project names for the project filter options.
    pub fn project_names(&self) -> Vec<String> {
        project_names(&self.projects)
    }

    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    // ── Project operations ──────────────────────────────────────

    pub fn add_project(&mut self, draft: ProjectDraft) -> DashboardResult<Uuid> {
        draft.validate()?;
        self.check_project_name_free(&draft.name, None)?;

        let project = draft.into_project();
        let id = project.id;
        let name = project.name.clone();
        self.projects.push(project);
        self.refresh();
        log::info!("added project '{}'", name);
        self.status = format!("Added project '{}'", name);
        self.persist();
        Ok(id)
    }

    pub fn edit_project(&mut self, id: Uuid, draft: ProjectDraft) -> DashboardResult<()> {
        let index = self.project_index(id)?;
        draft.validate()?;
        self.check_project_name_free(&draft.name, Some(id))?;

        let project = &mut self.projects[index];
        project.name = draft.name;
        project.manager = draft.manager;
        project.start_date = draft.start_date;
        project.end_date = draft.end_date;
        let name = project.name.clone();

        self.refresh();
        log::info!("updated project '{}'", name);
        self.status = format!("Updated project '{}'", name);
        self.persist();
        Ok(())
    }

    /// Remove a project together with all its systems and milestones.
    pub fn delete_project(&mut self, id: Uuid) -> DashboardResult<()> {
        let index = self.project_index(id)?;
        let removed = self.projects.remove(index);

        self.refresh();
        log::info!(
            "deleted project '{}' and its {} systems",
            removed.name,
            removed.systems.len()
        );
        self.status = format!("Deleted project '{}'", removed.name);
        self.persist();
        Ok(())
    }

    // ── System operations ───────────────────────────────────────

    pub fn add_system(&mut self, project_id: Uuid, draft: SystemDraft) -> DashboardResult<Uuid> {
        let index = self.project_index(project_id)?;
        draft.validate()?;
        Self::check_system_name_free(&self.projects[index], &draft.name, None)?;

        let system = draft.into_system();
        let id = system.id;
        let status = format!("Added system '{}' to '{}'", system.name, self.projects[index].name);
        log::info!("added system '{}' under '{}'", system.name, self.projects[index].name);
        self.projects[index].systems.push(system);

        self.refresh();
        self.status = status;
        self.persist();
        Ok(id)
    }

    pub fn edit_system(
        &mut self,
        project_id: Uuid,
        system_id: Uuid,
        draft: SystemDraft,
    ) -> DashboardResult<()> {
        let index = self.project_index(project_id)?;
        if self.projects[index].system(system_id).is_none() {
            return Err(DashboardError::UnknownSystem);
        }
        draft.validate()?;
        Self::check_system_name_free(&self.projects[index], &draft.name, Some(system_id))?;

        let mut system = draft.into_system();
        system.id = system_id;
        let name = system.name.clone();
        if let Some(slot) = self.projects[index].system_mut(system_id) {
            *slot = system;
        }

        self.refresh();
        log::info!("updated system '{}'", name);
        self.status = format!("Updated system '{}'", name);
        self.persist();
        Ok(())
    }

    pub fn delete_system(&mut self, project_id: Uuid, system_id: Uuid) -> DashboardResult<()> {
        let index = self.project_index(project_id)?;
        let systems = &mut self.projects[index].systems;
        let position = systems
            .iter()
            .position(|s| s.id == system_id)
            .ok_or(DashboardError::UnknownSystem)?;
        let removed = systems.remove(position);

        self.refresh();
        log::info!("deleted system '{}'", removed.name);
        self.status = format!("Deleted system '{}'", removed.name);
        self.persist();
        Ok(())
    }

    // ── Milestones ──────────────────────────────────────────────

    /// Flip one milestone's completed flag. Returns the new value.
    pub fn toggle_milestone(
        &mut self,
        project_id: Uuid,
        system_id: Uuid,
        milestone_id: Uuid,
    ) -> DashboardResult<bool> {
        let index = self.project_index(project_id)?;
        let system = self.projects[index]
            .system_mut(system_id)
            .ok_or(DashboardError::UnknownSystem)?;
        let milestone = system
            .milestones
            .iter_mut()
            .find(|m| m.id == milestone_id)
            .ok_or(DashboardError::UnknownMilestone)?;

        milestone.completed = !milestone.completed;
        let completed = milestone.completed;
        let label = milestone.label.clone();

        self.refresh();
        log::info!(
            "milestone '{}' now {}",
            label,
            if completed { "completed" } else { "open" }
        );
        self.status = if completed {
            format!("Milestone '{}' completed", label)
        } else {
            format!("Milestone '{}' reopened", label)
        };
        self.persist();
        Ok(completed)
    }

    // ── Reordering ──────────────────────────────────────────────

    /// Move a project to a new position in the portfolio.
    pub fn reorder_projects(&mut self, from: usize, to: usize) -> DashboardResult<()> {
        move_within_list(&mut self.projects, from, to)?;
        if from == to {
            return Ok(());
        }

        let name = self.projects[to].name.clone();
        self.refresh();
        log::info!("moved project '{}' from {} to {}", name, from, to);
        self.status = format!("Moved project '{}' from {} to {}", name, from, to);
        self.persist();
        Ok(())
    }

    /// Move a system within its project. Other projects are untouched.
    pub fn reorder_systems(
        &mut self,
        project_id: Uuid,
        from: usize,
        to: usize,
    ) -> DashboardResult<()> {
        let index = self.project_index(project_id)?;
        move_within_list(&mut self.projects[index].systems, from, to)?;
        if from == to {
            return Ok(());
        }

        let name = self.projects[index].systems[to].name.clone();
        self.refresh();
        log::info!("moved system '{}' from {} to {}", name, from, to);
        self.status = format!("Moved system '{}' from {} to {}", name, from, to);
        self.persist();
        Ok(())
    }

    // ── Filtering ───────────────────────────────────────────────

    /// Replace the filter criteria. Filters are ephemeral: nothing is
    /// persisted and the time range stays put.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refilter();
        self.status = format!(
            "Showing {} of {} projects",
            self.filtered.len(),
            self.projects.len()
        );
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.refilter();
        self.status = "Filters cleared".to_string();
    }

    // ── Import / export ─────────────────────────────────────────

    /// The whole dataset in its JSON wire form.
    pub fn export_json(&self) -> DashboardResult<String> {
        io::export_dataset(&self.projects)
    }

    /// Replace the dataset wholesale from its JSON wire form.
    pub fn import_json(&mut self, json: &str) -> DashboardResult<()> {
        let projects = io::import_dataset(json)?;
        let count = projects.len();
        self.projects = projects;

        self.refresh();
        log::info!("imported dataset with {} projects", count);
        self.status = format!("Imported {} projects", count);
        self.persist();
        Ok(())
    }

    /// Export the filtered table view as CSV.
    pub fn export_csv_to(&mut self, path: &Path) -> DashboardResult<usize> {
        let rows = io::export_csv(&self.filtered, path)?;
        self.status = format!("Exported {} systems to CSV", rows);
        Ok(rows)
    }

    // ── Lookup helpers ──────────────────────────────────────────

    fn project_index(&self, id: Uuid) -> DashboardResult<usize> {
        self.projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(DashboardError::UnknownProject)
    }

    fn check_project_name_free(&self, name: &str, exclude: Option<Uuid>) -> DashboardResult<()> {
        let taken = self
            .projects
            .iter()
            .any(|p| p.name == name && Some(p.id) != exclude);
        if taken {
            return Err(DashboardError::validation(format!(
                "a project named '{}' already exists",
                name
            )));
        }
        Ok(())
    }

    fn check_system_name_free(
        project: &Project,
        name: &str,
        exclude: Option<Uuid>,
    ) -> DashboardResult<()> {
        let taken = project
            .systems
            .iter()
            .any(|s| s.name == name && Some(s.id) != exclude);
        if taken {
            return Err(DashboardError::validation(format!(
                "'{}' already has a system named '{}'",
                project.name, name
            )));
        }
        Ok(())
    }
}
