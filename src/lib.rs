//! Timeline, filtering and ordering engine for a project portfolio dashboard.
//!
//! The dataset is a portfolio of projects, each with ordered systems carrying
//! schedules, staff, statuses, and milestones. This crate derives the global
//! time range, projects dates onto a percentage-based horizontal axis, filters
//! the hierarchy along five axes, reorders entries by index, and round-trips
//! the whole dataset through its JSON wire format. Rendering is left entirely
//! to the embedding layer: it reads positions as percentages and draws them
//! however it likes.
//!
//! ```no_run
//! use portfolio_dashboard::{Dashboard, JsonFileStore};
//!
//! let dashboard = Dashboard::open(JsonFileStore::default_location());
//! for project in dashboard.filtered() {
//!     let range = dashboard.time_range();
//!     for system in &project.systems {
//!         if let Some((left, width)) = system.span_percent(range) {
//!             println!("{}: {left:.1}% + {width:.1}%", system.name);
//!         }
//!     }
//! }
//! ```

pub mod dashboard;
pub mod error;
pub mod filter;
pub mod io;
pub mod logging;
pub mod model;
pub mod reorder;
pub mod seed;

pub use dashboard::Dashboard;
pub use error::{DashboardError, DashboardResult};
pub use filter::{project_names, DashboardStats, FilterCriteria};
pub use io::{DatasetStore, JsonFileStore, MemoryStore};
pub use model::{
    parse_date, Milestone, MilestoneDraft, MonthTick, Project, ProjectDraft, System, SystemDraft,
    SystemStatus, TimeRange,
};
pub use reorder::{move_within_list, DragState, ReorderError};
