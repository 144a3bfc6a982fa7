pub mod project;
pub mod timeline;

pub use project::{
    Milestone, MilestoneDraft, Project, ProjectDraft, System, SystemDraft, SystemStatus,
};
pub use timeline::{parse_date, MonthTick, TimeRange};
