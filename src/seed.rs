//! The built-in sample portfolio.
//!
//! Used when the store has nothing yet or its contents cannot be decoded, so
//! a fresh install always opens onto a populated dashboard.

use crate::model::{Milestone, Project, System, SystemStatus};

fn milestone(label: &str, date: &str, completed: bool) -> Milestone {
    Milestone::new(label, date, completed)
}

fn system(
    name: &str,
    administrators: &[&str],
    technicians: &[&str],
    status: SystemStatus,
    progress: u8,
    start: &str,
    end: &str,
    milestones: Vec<Milestone>,
) -> System {
    let mut system = System::new(name, status, progress, start, end);
    system.administrators = administrators.iter().map(|s| s.to_string()).collect();
    system.technicians = technicians.iter().map(|s| s.to_string()).collect();
    system.milestones = milestones;
    system
}

/// Three projects, six systems, milestones included.
pub fn seed_projects() -> Vec<Project> {
    let mut smart_city = Project::new("智慧城市平台", "張經理", "2024-01-01", "2024-12-31");
    smart_city.systems = vec![
        system(
            "交通監控系統",
            &["李工程師", "王技師"],
            &["陳開發", "林測試"],
            SystemStatus::Developing,
            75,
            "2024-01-15",
            "2024-06-30",
            vec![
                milestone("需求分析完成", "2024-02-15", true),
                milestone("系統設計完成", "2024-03-30", true),
                milestone("POC 完成", "2024-05-15", true),
                milestone("系統交付", "2024-06-30", false),
            ],
        ),
        system(
            "環境監測系統",
            &["黃主管"],
            &["劉開發", "吳測試", "蔡分析"],
            SystemStatus::Optimizing,
            60,
            "2024-02-01",
            "2024-08-31",
            vec![
                milestone("系統部署", "2024-04-01", true),
                milestone("效能調優", "2024-06-15", false),
                milestone("正式上線", "2024-08-31", false),
            ],
        ),
    ];

    let mut commerce = Project::new("電子商務平台", "李經理", "2024-03-01", "2024-11-30");
    commerce.systems = vec![
        system(
            "購物車系統",
            &["趙主管", "錢負責"],
            &["孫開發"],
            SystemStatus::Maintaining,
            100,
            "2024-03-01",
            "2024-07-31",
            vec![
                milestone("系統上線", "2024-06-01", true),
                milestone("功能擴充", "2024-07-31", true),
            ],
        ),
        system(
            "支付系統",
            &["周技術長"],
            &["吳架構師", "鄭開發", "王測試"],
            SystemStatus::Developing,
            40,
            "2024-04-01",
            "2024-10-31",
            vec![
                milestone("安全評估", "2024-05-15", true),
                milestone("第三方整合", "2024-07-30", false),
                milestone("壓力測試", "2024-09-15", false),
                milestone("正式發布", "2024-10-31", false),
            ],
        ),
        system(
            "庫存管理系統",
            &["馮主管"],
            &["衛開發", "蔣測試"],
            SystemStatus::Optimizing,
            85,
            "2024-05-01",
            "2024-09-30",
            vec![
                milestone("基礎功能完成", "2024-07-01", true),
                milestone("進階功能開發", "2024-08-15", false),
                milestone("系統優化", "2024-09-30", false),
            ],
        ),
    ];

    let mut erp = Project::new("企業資源規劃系統", "陳經理", "2024-02-15", "2025-01-31");
    erp.systems = vec![system(
        "人力資源模組",
        &["韓主管", "魏負責"],
        &["姚開發", "邵測試", "卜分析"],
        SystemStatus::Developing,
        30,
        "2024-03-01",
        "2024-12-31",
        vec![
            milestone("需求確認", "2024-04-01", true),
            milestone("原型開發", "2024-06-30", false),
            milestone("Alpha 測試", "2024-09-30", false),
            milestone("Beta 測試", "2024-11-30", false),
            milestone("正式發布", "2024-12-31", false),
        ],
    )];

    vec![smart_city, commerce, erp]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_date, TimeRange};

    #[test]
    fn seed_is_well_formed() {
        let projects = seed_projects();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects.iter().map(|p| p.systems.len()).sum::<usize>(), 6);

        for project in &projects {
            assert!(parse_date(&project.start_date).is_some());
            assert!(parse_date(&project.end_date).is_some());
            for system in &project.systems {
                assert!(parse_date(&system.start_date).is_some());
                assert!(parse_date(&system.end_date).is_some());
                assert!(system.progress <= 100);
                for milestone in &system.milestones {
                    assert!(parse_date(&milestone.date).is_some());
                }
            }
        }
    }

    #[test]
    fn seed_names_are_unique() {
        let projects = seed_projects();
        let names = crate::filter::project_names(&projects);
        assert_eq!(names.len(), projects.len());

        for project in &projects {
            let mut seen = Vec::new();
            for system in &project.systems {
                assert!(!seen.contains(&system.name));
                seen.push(system.name.clone());
            }
        }
    }

    #[test]
    fn seed_spans_into_the_next_year() {
        let range = TimeRange::compute(&seed_projects());
        assert_eq!(range.start, parse_date("2024-01-01").unwrap());
        assert_eq!(range.end, parse_date("2025-01-31").unwrap());
    }
}
