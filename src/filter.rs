//! Multi-predicate filtering over the project hierarchy.
//!
//! Filtering is pure: it clones the survivors and never reorders them, so the
//! stored dataset is untouched and repeated application is a fixpoint.

use crate::model::{Project, System, SystemStatus};

/// The five filter axes. Empty fields mean "no constraint"; active axes
/// combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Exact project names to keep. Empty keeps every project.
    pub projects: Vec<String>,
    /// Case-insensitive substring of the system name.
    pub system: String,
    /// Case-insensitive substring matched against administrators and
    /// technicians alike.
    pub staff: String,
    /// Statuses to keep. Empty keeps every status.
    pub statuses: Vec<SystemStatus>,
    /// Keep only systems that still have unfinished work.
    pub incomplete_only: bool,
}

impl FilterCriteria {
    /// True when no axis constrains anything.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.system.is_empty()
            && self.staff.is_empty()
            && self.statuses.is_empty()
            && !self.incomplete_only
    }

    /// Apply the criteria to a dataset.
    ///
    /// A project survives when its name passes the project axis and at least
    /// one of its systems survives the system-level axes; surviving projects
    /// carry only their surviving systems. Dataset order is preserved.
    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        if self.is_empty() {
            return projects.to_vec();
        }

        let system_needle = self.system.to_lowercase();
        let staff_needle = self.staff.to_lowercase();

        projects
            .iter()
            .filter(|project| {
                self.projects.is_empty() || self.projects.contains(&project.name)
            })
            .filter_map(|project| {
                let systems: Vec<System> = project
                    .systems
                    .iter()
                    .filter(|system| self.system_matches(system, &system_needle, &staff_needle))
                    .cloned()
                    .collect();
                if systems.is_empty() {
                    None
                } else {
                    Some(Project {
                        systems,
                        ..project.clone()
                    })
                }
            })
            .collect()
    }

    fn system_matches(&self, system: &System, system_needle: &str, staff_needle: &str) -> bool {
        if !system_needle.is_empty() && !system.name.to_lowercase().contains(system_needle) {
            return false;
        }

        if !staff_needle.is_empty()
            && !system
                .staff()
                .any(|person| person.to_lowercase().contains(staff_needle))
        {
            return false;
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&system.status) {
            return false;
        }

        if self.incomplete_only && !has_unfinished_work(system) {
            return false;
        }

        true
    }

    /// Human-readable tags describing the active axes, for the filter banner.
    pub fn summary(&self) -> Vec<String> {
        let mut tags = Vec::new();
        if !self.projects.is_empty() {
            tags.push(format!("projects: {}", self.projects.join(", ")));
        }
        if !self.system.is_empty() {
            tags.push(format!("system: {}", self.system));
        }
        if !self.staff.is_empty() {
            tags.push(format!("staff: {}", self.staff));
        }
        if !self.statuses.is_empty() {
            let labels: Vec<&str> = self.statuses.iter().map(SystemStatus::label).collect();
            tags.push(format!("status: {}", labels.join(", ")));
        }
        if self.incomplete_only {
            tags.push("unfinished systems only".to_string());
        }
        tags
    }
}

/// Whether a system still counts as having unfinished work.
///
/// With milestones the answer is "any milestone open"; without, the system is
/// finished once it is maintained or its progress reads 100.
fn has_unfinished_work(system: &System) -> bool {
    if system.milestones.is_empty() {
        system.status != SystemStatus::Maintaining && system.progress != 100
    } else {
        system.milestones.iter().any(|m| !m.completed)
    }
}

/// Unique project names in dataset order, for the project filter options.
pub fn project_names(projects: &[Project]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for project in projects {
        if !names.contains(&project.name) {
            names.push(project.name.clone());
        }
    }
    names
}

/// Headline counts shown above the chart, folded over the filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub projects: usize,
    pub systems: usize,
    pub developing: usize,
    pub optimizing: usize,
    pub maintaining: usize,
}

impl DashboardStats {
    pub fn collect(projects: &[Project]) -> Self {
        let mut stats = Self {
            projects: projects.len(),
            ..Self::default()
        };
        for project in projects {
            stats.systems += project.systems.len();
            for system in &project.systems {
                match system.status {
                    SystemStatus::Developing => stats.developing += 1,
                    SystemStatus::Optimizing => stats.optimizing += 1,
                    SystemStatus::Maintaining => stats.maintaining += 1,
                }
            }
        }
        stats
    }
}
