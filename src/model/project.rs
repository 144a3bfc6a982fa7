use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::timeline::{parse_date, TimeRange};
use crate::error::{DashboardError, DashboardResult};

/// Lifecycle stage of a system, serialized with its dataset labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemStatus {
    #[default]
    #[serde(rename = "開發中")]
    Developing,
    #[serde(rename = "優化中")]
    Optimizing,
    #[serde(rename = "維護中")]
    Maintaining,
}

impl SystemStatus {
    pub const ALL: [SystemStatus; 3] = [
        SystemStatus::Developing,
        SystemStatus::Optimizing,
        SystemStatus::Maintaining,
    ];

    /// The label used in the dataset and in exported views.
    pub fn label(&self) -> &'static str {
        match self {
            SystemStatus::Developing => "開發中",
            SystemStatus::Optimizing => "優化中",
            SystemStatus::Maintaining => "維護中",
        }
    }
}

impl std::fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SystemStatus::Developing => "developing",
            SystemStatus::Optimizing => "optimizing",
            SystemStatus::Maintaining => "maintaining",
        })
    }
}

/// A dated checkpoint inside a system's schedule.
///
/// The date may fall outside the owning system's span; that is left to the
/// author's judgement and never rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    pub label: String,
    pub date: String,
    pub completed: bool,
}

impl Milestone {
    pub fn new(label: impl Into<String>, date: impl Into<String>, completed: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            date: date.into(),
            completed,
        }
    }

    /// The milestone date, when it parses.
    pub fn when(&self) -> Option<chrono::NaiveDate> {
        parse_date(&self.date)
    }

    /// Marker position within the range, `None` for an unparseable date.
    pub fn offset_percent(&self, range: &TimeRange) -> Option<f64> {
        self.when().map(|date| range.offset_percent(date))
    }
}

/// A system within a project: schedule, staff, status, and milestones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(rename = "systemName")]
    pub name: String,
    pub administrators: Vec<String>,
    pub technicians: Vec<String>,
    pub status: SystemStatus,
    /// 0 to 100. Meaningful while developing or optimizing.
    pub progress: u8,
    pub start_date: String,
    pub end_date: String,
    pub milestones: Vec<Milestone>,
}

impl System {
    pub fn new(
        name: impl Into<String>,
        status: SystemStatus,
        progress: u8,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            administrators: Vec::new(),
            technicians: Vec::new(),
            status,
            progress,
            start_date: start_date.into(),
            end_date: end_date.into(),
            milestones: Vec::new(),
        }
    }

    pub fn start(&self) -> Option<chrono::NaiveDate> {
        parse_date(&self.start_date)
    }

    pub fn end(&self) -> Option<chrono::NaiveDate> {
        parse_date(&self.end_date)
    }

    /// Bar position and width within the range, `None` unless both dates parse.
    pub fn span_percent(&self, range: &TimeRange) -> Option<(f64, f64)> {
        Some(range.span_percent(self.start()?, self.end()?))
    }

    /// Progress to overlay on the bar. Maintained systems show none.
    pub fn display_progress(&self) -> Option<u8> {
        match self.status {
            SystemStatus::Developing | SystemStatus::Optimizing => Some(self.progress),
            SystemStatus::Maintaining => None,
        }
    }

    /// Administrators and technicians, in that order.
    pub fn staff(&self) -> impl Iterator<Item = &str> {
        self.administrators
            .iter()
            .chain(self.technicians.iter())
            .map(String::as_str)
    }
}

/// A portfolio project and its ordered systems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(rename = "projectName")]
    pub name: String,
    #[serde(rename = "projectManager")]
    pub manager: String,
    #[serde(rename = "projectStartDate")]
    pub start_date: String,
    #[serde(rename = "projectEndDate")]
    pub end_date: String,
    pub systems: Vec<System>,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        manager: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            manager: manager.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            systems: Vec::new(),
        }
    }

    pub fn start(&self) -> Option<chrono::NaiveDate> {
        parse_date(&self.start_date)
    }

    pub fn end(&self) -> Option<chrono::NaiveDate> {
        parse_date(&self.end_date)
    }

    /// Header bar position and width, `None` unless both dates parse.
    pub fn span_percent(&self, range: &TimeRange) -> Option<(f64, f64)> {
        Some(range.span_percent(self.start()?, self.end()?))
    }

    pub fn system(&self, id: Uuid) -> Option<&System> {
        self.systems.iter().find(|s| s.id == id)
    }

    pub fn system_mut(&mut self, id: Uuid) -> Option<&mut System> {
        self.systems.iter_mut().find(|s| s.id == id)
    }
}

// --- Form hand-off shapes ---

/// Fields collected by a project form.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub name: String,
    pub manager: String,
    pub start_date: String,
    pub end_date: String,
}

impl ProjectDraft {
    /// Field-level checks; name uniqueness is the dashboard's concern.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.name.trim().is_empty() {
            return Err(DashboardError::validation("project name cannot be empty"));
        }
        check_dates(&self.start_date, &self.end_date)
    }

    pub fn into_project(self) -> Project {
        Project::new(self.name, self.manager, self.start_date, self.end_date)
    }
}

/// One milestone row of a system form. Rows missing a label or date are
/// dropped rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct MilestoneDraft {
    pub label: String,
    pub date: String,
    pub completed: bool,
}

/// Fields collected by a system form. Staff lists arrive already split
/// and trimmed.
#[derive(Debug, Clone, Default)]
pub struct SystemDraft {
    pub name: String,
    pub administrators: Vec<String>,
    pub technicians: Vec<String>,
    pub status: SystemStatus,
    pub progress: u8,
    pub start_date: String,
    pub end_date: String,
    pub milestones: Vec<MilestoneDraft>,
}

impl SystemDraft {
    /// Field-level checks; name uniqueness is the dashboard's concern.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.name.trim().is_empty() {
            return Err(DashboardError::validation("system name cannot be empty"));
        }
        if self.progress > 100 {
            return Err(DashboardError::validation(
                "progress must be between 0 and 100",
            ));
        }
        check_dates(&self.start_date, &self.end_date)
    }

    pub fn into_system(self) -> System {
        let mut system = System::new(
            self.name,
            self.status,
            self.progress,
            self.start_date,
            self.end_date,
        );
        system.administrators = self.administrators;
        system.technicians = self.technicians;
        system.milestones = self
            .milestones
            .into_iter()
            .filter(|m| !m.label.trim().is_empty() && !m.date.trim().is_empty())
            .map(|m| Milestone::new(m.label, m.date, m.completed))
            .collect();
        system
    }
}

fn check_dates(start: &str, end: &str) -> DashboardResult<()> {
    let start = parse_date(start)
        .ok_or_else(|| DashboardError::validation("start date must be a valid YYYY-MM-DD date"))?;
    let end = parse_date(end)
        .ok_or_else(|| DashboardError::validation("end date must be a valid YYYY-MM-DD date"))?;
    if start >= end {
        return Err(DashboardError::validation(
            "end date must be later than start date",
        ));
    }
    Ok(())
}
