//! End-to-end dashboard flows against a real file store.

use portfolio_dashboard::*;

fn store_in(dir: &tempfile::TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("portfolio.json"))
}

fn draft(name: &str, start: &str, end: &str) -> ProjectDraft {
    ProjectDraft {
        name: name.into(),
        manager: "測試PM".into(),
        start_date: start.into(),
        end_date: end.into(),
    }
}

#[test]
fn cold_start_seeds_then_reopens_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let mut dashboard = Dashboard::open(store_in(&dir));
    assert_eq!(dashboard.projects().len(), 3);

    // First mutation writes the file; a fresh session then reads it back.
    dashboard
        .add_project(draft("據點擴建", "2024-06-01", "2024-09-30"))
        .unwrap();

    let reopened = Dashboard::open(store_in(&dir));
    assert_eq!(reopened.projects().len(), 4);
    let names = reopened.project_names();
    assert!(names.contains(&"據點擴建".to_string()));
}

#[test]
fn ordering_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut dashboard = Dashboard::open(store_in(&dir));
    dashboard.reorder_projects(2, 0).unwrap();
    let commerce = dashboard.projects()[2].id;
    dashboard.reorder_systems(commerce, 2, 0).unwrap();

    let reopened = Dashboard::open(store_in(&dir));
    let names: Vec<&str> = reopened.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["企業資源規劃系統", "智慧城市平台", "電子商務平台"]
    );
    let systems: Vec<&str> = reopened.projects()[2]
        .systems
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(systems, vec!["庫存管理系統", "購物車系統", "支付系統"]);
}

#[test]
fn corrupt_store_degrades_to_the_sample_portfolio() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("portfolio.json");
    std::fs::write(&path, "{{ definitely not json").unwrap();

    let dashboard = Dashboard::open(JsonFileStore::new(&path));
    assert_eq!(dashboard.projects().len(), 3);
    assert_eq!(dashboard.stats().systems, 6);
}

#[test]
fn range_recomputes_after_each_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let mut dashboard = Dashboard::open(store_in(&dir));

    // Seed runs 2024-01-01 through 2025-01-31.
    assert_eq!(dashboard.time_range().total_days(), 396);

    let id = dashboard
        .add_project(draft("前導研究", "2023-10-01", "2023-12-31"))
        .unwrap();
    assert_eq!(
        dashboard.time_range().start,
        parse_date("2023-10-01").unwrap()
    );

    dashboard.delete_project(id).unwrap();
    assert_eq!(
        dashboard.time_range().start,
        parse_date("2024-01-01").unwrap()
    );
}

#[test]
fn filters_follow_mutations_without_touching_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut dashboard = Dashboard::open(store_in(&dir));

    dashboard.set_criteria(FilterCriteria {
        staff: "王".into(),
        ..FilterCriteria::default()
    });
    // 王技師 on the traffic system, 王測試 on the payments system.
    assert_eq!(dashboard.stats().systems, 2);

    let store_file = dir.path().join("portfolio.json");
    assert!(!store_file.exists());

    // Removing a matching system shrinks the filtered view immediately.
    let commerce = dashboard.projects()[1].id;
    let payments = dashboard.projects()[1].systems[1].id;
    dashboard.delete_system(commerce, payments).unwrap();
    assert_eq!(dashboard.stats().systems, 1);
    assert!(store_file.exists());
}

#[test]
fn milestone_toggle_round_trips_through_the_wire_format() {
    let dir = tempfile::tempdir().unwrap();
    let mut dashboard = Dashboard::open(store_in(&dir));

    let project_id = dashboard.projects()[0].id;
    let system_id = dashboard.projects()[0].systems[0].id;
    let milestone_id = dashboard.projects()[0].systems[0].milestones[3].id;
    dashboard
        .toggle_milestone(project_id, system_id, milestone_id)
        .unwrap();

    let reopened = Dashboard::open(store_in(&dir));
    let milestones = &reopened.projects()[0].systems[0].milestones;
    assert!(milestones.iter().all(|m| m.completed));
}

#[test]
fn exported_json_matches_the_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut dashboard = Dashboard::open(store_in(&dir));
    dashboard.reorder_projects(0, 1).unwrap();

    let exported = dashboard.export_json().unwrap();
    let on_disk = std::fs::read_to_string(dir.path().join("portfolio.json")).unwrap();

    let a: serde_json::Value = serde_json::from_str(&exported).unwrap();
    let b: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(a, b);
}

#[test]
fn csv_export_reflects_the_filtered_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut dashboard = Dashboard::open(store_in(&dir));

    dashboard.set_criteria(FilterCriteria {
        statuses: vec![SystemStatus::Optimizing],
        ..FilterCriteria::default()
    });

    let csv_path = dir.path().join("view.csv");
    let rows = dashboard.export_csv_to(&csv_path).unwrap();
    assert_eq!(rows, 2);

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    assert!(contents.contains("環境監測系統"));
    assert!(contents.contains("庫存管理系統"));
    assert!(!contents.contains("交通監控系統"));
}

#[test]
fn validation_failures_leave_no_trace() {
    let dir = tempfile::tempdir().unwrap();
    let mut dashboard = Dashboard::open(store_in(&dir));

    let err = dashboard
        .add_project(draft("壞日期", "2024-12-31", "2024-01-01"))
        .unwrap_err();
    assert!(matches!(err, DashboardError::Validation(_)));
    assert_eq!(dashboard.projects().len(), 3);
    assert!(!dir.path().join("portfolio.json").exists());
}
