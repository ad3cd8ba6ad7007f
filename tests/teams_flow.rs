//! Registration read paths against the in-memory store.

use std::sync::Arc;

use regdesk::sheets::MemorySheets;
use regdesk::teams::NOT_SPECIFIED;
use regdesk::{ApiService, Config};

const REG_SHEET: &str = "reg-sheet-id";
const ATT_SHEET: &str = "att-sheet-id";

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[tokio::test]
async fn teams_listing_projects_and_skips_bad_rows() {
    let store = Arc::new(MemorySheets::new());
    store.seed_worksheet(
        REG_SHEET,
        1893068366,
        "Form Responses 1",
        vec![
            row(&["Timestamp", "Name of the Team", "Project Domain", "Mentor"]),
            row(&["t1", "Rocket", "fintech", "Dr. Rao"]),
            row(&["t2", "Shorty"]), // too short for the domain column
            row(&["t3", "", "health"]), // blank team name
            row(&["t4", " Orbit ", " edtech "]),
        ],
    );
    let service = ApiService::new(
        store,
        Config::new(REG_SHEET, ATT_SHEET).with_registration_gid(1893068366),
    );

    let response = service.teams().await.expect("teams listing ok");
    assert!(response.success);
    assert_eq!(response.count, 2);
    assert_eq!(response.teams[0].team_name, "Rocket");
    assert_eq!(response.teams[0].domains.as_deref(), Some("fintech"));
    assert_eq!(response.teams[1].team_name, "Orbit");
    assert_eq!(response.teams[1].domains.as_deref(), Some("edtech"));
}

#[tokio::test]
async fn unknown_gid_falls_back_to_first_worksheet() {
    let store = Arc::new(MemorySheets::new());
    store.seed_worksheet(
        REG_SHEET,
        7,
        "Responses",
        vec![
            row(&["Team Name", "Domain"]),
            row(&["Rocket", "fintech"]),
        ],
    );
    let service = ApiService::new(
        store,
        Config::new(REG_SHEET, ATT_SHEET).with_registration_gid(999),
    );

    let response = service.teams().await.expect("teams listing ok");
    assert_eq!(response.count, 1);
}

#[tokio::test]
async fn missing_domain_header_reports_not_found() {
    let store = Arc::new(MemorySheets::new());
    store.seed_worksheet(
        REG_SHEET,
        7,
        "Responses",
        vec![
            row(&["Team Name", "Mentor"]),
            row(&["Rocket", "Dr. Rao"]),
        ],
    );
    let service = ApiService::new(store, Config::new(REG_SHEET, ATT_SHEET));

    // The read path fails as a server error with a structured payload
    let err = service.teams().await.expect_err("must fail");
    assert_eq!(err.status(), 500);
    assert_eq!(err.payload()["error"], "not_found");
}

#[tokio::test]
async fn category_roster_fills_placeholders() {
    let store = Arc::new(MemorySheets::new());
    store.seed_worksheet(
        REG_SHEET,
        11,
        "Cyber Teams",
        vec![
            row(&["Team Name", "Team Leader Name", "Leader Registration Number"]),
            row(&["Rocket", "Asha", "22BCE100"]),
            row(&["Nimbus", "", ""]),
        ],
    );
    let service = ApiService::new(store, Config::new(REG_SHEET, ATT_SHEET));

    let response = service
        .teams_by_category("cybersecurity")
        .await
        .expect("roster ok");
    assert_eq!(response.category, "Cyber");
    assert_eq!(response.count, 2);
    assert_eq!(response.sources, None);
    assert_eq!(response.teams[0].team_leader.as_deref(), Some("Asha"));
    assert_eq!(response.teams[0].reg_leader.as_deref(), Some("22BCE100"));
    // No member columns in this roster at all
    assert_eq!(
        response.teams[0].team_member_1.as_deref(),
        Some(NOT_SPECIFIED)
    );
    // Present columns with empty cells degrade the same way
    assert_eq!(
        response.teams[1].team_leader.as_deref(),
        Some(NOT_SPECIFIED)
    );
}

#[tokio::test]
async fn full_stack_is_the_union_of_both_rosters() {
    let store = Arc::new(MemorySheets::new());
    store.seed_worksheet(
        REG_SHEET,
        11,
        "AI/ML Teams",
        vec![
            row(&["Team Name", "Team Leader Name"]),
            row(&["Rocket", "Asha"]),
            row(&["Nimbus", "Divya"]),
        ],
    );
    store.seed_worksheet(
        REG_SHEET,
        12,
        "Cyber Teams",
        vec![
            row(&["Team Name", "Team Leader Name"]),
            row(&["Orbit", "Vikram"]),
        ],
    );
    let service = ApiService::new(store, Config::new(REG_SHEET, ATT_SHEET));

    let response = service
        .teams_by_category("Full Stack")
        .await
        .expect("union ok");
    assert_eq!(response.category, "Full Stack");
    assert_eq!(response.count, 3);
    assert_eq!(
        response.sources,
        Some(vec!["AI/ML".to_string(), "Cyber".to_string()])
    );
    // AI/ML teams come first, then Cyber
    assert_eq!(response.teams[0].team_name, "Rocket");
    assert_eq!(response.teams[2].team_name, "Orbit");
}

#[tokio::test]
async fn unknown_category_is_a_client_error() {
    let store = Arc::new(MemorySheets::new());
    let service = ApiService::new(store, Config::new(REG_SHEET, ATT_SHEET));

    let err = service
        .teams_by_category("robotics")
        .await
        .expect_err("must fail");
    assert_eq!(err.status(), 400);
    assert_eq!(err.payload()["error"], "invalid_category");
}
