use bugboard_lib::commands::bugs::{
    create_bug_internal, get_board_internal, group_bugs_internal, list_bugs_internal,
    list_team_members_internal, set_bug_assignee_internal, set_bug_status_internal,
    submit_draft_internal, update_bug_internal, SharedRegistry,
};
use bugboard_lib::config::BoardConfig;
use bugboard_lib::models::bug::{BugDraft, BugStatus, NewBug};
use bugboard_lib::models::team::default_roster;
use bugboard_lib::registry::BugRegistry;
use serde_json::json;
use std::sync::{Arc, Mutex};

fn seeded_registry() -> SharedRegistry {
    Arc::new(Mutex::new(BoardConfig::default().into_registry()))
}

fn empty_registry() -> SharedRegistry {
    Arc::new(Mutex::new(BugRegistry::new(default_roster())))
}

fn report(title: &str, assignee: &str) -> NewBug {
    NewBug {
        title: title.to_string(),
        description: String::new(),
        status: None,
        assignee: assignee.to_string(),
    }
}

#[test]
fn create_bug_on_empty_registry_returns_open_bug_contract() {
    let registry = empty_registry();

    let bug = create_bug_internal(&registry, report("X", "sarah-chen")).expect("create bug");

    let bugs = list_bugs_internal(&registry).expect("list bugs");
    assert_eq!(bugs.len(), 1);
    assert_eq!(bugs[0].id, bug.id);
    assert_eq!(bugs[0].status, BugStatus::Open);
    assert_eq!(bugs[0].assignee, "sarah-chen");

    let wire = serde_json::to_value(&bug).expect("serialize bug");
    assert_eq!(wire["status"], json!("open"));
    assert!(wire["createdAt"].is_string());
}

#[test]
fn create_bug_rejects_invalid_input_with_message() {
    let registry = empty_registry();

    let err = create_bug_internal(&registry, report("  ", "sarah-chen")).expect_err("blank title");
    assert!(err.starts_with("Invalid input"));

    let err = create_bug_internal(&registry, report("Crash", "")).expect_err("blank assignee");
    assert!(err.contains("assignee"));

    assert!(list_bugs_internal(&registry).expect("list bugs").is_empty());
}

#[test]
fn update_bug_reports_updated_or_unchanged() {
    let registry = seeded_registry();
    let mut bug = list_bugs_internal(&registry).expect("list bugs")[0].clone();
    bug.status = BugStatus::InProgress;

    let updated = update_bug_internal(&registry, bug.clone()).expect("update bug");
    assert_eq!(updated, json!({"status": "updated", "id": bug.id}));

    bug.id = "missing".to_string();
    let before = list_bugs_internal(&registry).expect("list bugs");
    let unchanged = update_bug_internal(&registry, bug).expect("update unknown bug");
    assert_eq!(unchanged["status"], json!("unchanged"));
    assert_eq!(list_bugs_internal(&registry).expect("list bugs"), before);
}

#[test]
fn moving_bug_to_done_moves_it_between_groups() {
    let registry = seeded_registry();

    let moved = set_bug_status_internal(&registry, "1", "done").expect("set status");
    assert_eq!(moved.status, BugStatus::Done);

    let groups = group_bugs_internal(&registry).expect("group bugs");
    assert!(groups.open.is_empty());
    assert_eq!(groups.done.len(), 2);
    assert!(groups.done.iter().any(|bug| bug.id == "1"));
}

#[test]
fn status_and_assignee_commands_report_unknown_ids() {
    let registry = seeded_registry();

    let err = set_bug_status_internal(&registry, "404", "open").expect_err("unknown bug");
    assert_eq!(err, "Bug not found: 404");

    let err = set_bug_assignee_internal(&registry, "404", "alex-kim").expect_err("unknown bug");
    assert_eq!(err, "Bug not found: 404");
}

#[test]
fn board_renders_three_columns_with_unassigned_fallback() {
    let registry = seeded_registry();
    set_bug_assignee_internal(&registry, "2", "former-contractor").expect("reassign");

    let board = get_board_internal(&registry).expect("get board");
    assert_eq!(board.len(), 3);
    assert_eq!(
        board.iter().map(|column| column.count).collect::<Vec<_>>(),
        vec![1, 1, 1]
    );

    let in_progress = &board[1];
    assert_eq!(in_progress.status, BugStatus::InProgress);
    assert_eq!(in_progress.bugs[0].assignee.name, "Unassigned");
    assert!(in_progress.bugs[0].has_details);

    let wire = serde_json::to_value(&board).expect("serialize board");
    assert_eq!(wire[0]["emptyMessage"], json!("No bugs in open"));
    assert_eq!(wire[1]["bugs"][0]["bug"]["status"], json!("in-progress"));
}

#[test]
fn team_roster_is_fixed_across_mutations() {
    let registry = seeded_registry();
    let before = list_team_members_internal(&registry).expect("list members");

    create_bug_internal(&registry, report("New", "david-park")).expect("create bug");
    set_bug_assignee_internal(&registry, "1", "jessica-lopez").expect("reassign");

    assert_eq!(list_team_members_internal(&registry).expect("list members"), before);
    assert_eq!(before.len(), 5);
}

#[test]
fn submit_draft_creates_trimmed_open_bug() {
    let registry = empty_registry();
    let draft: BugDraft = serde_json::from_value(json!({
        "title": "  Login loop  ",
        "description": " after reset ",
        "assignee": " alex-kim "
    }))
    .expect("parse draft");

    let bug = submit_draft_internal(&registry, draft).expect("submit draft");
    assert_eq!(bug.title, "Login loop");
    assert_eq!(bug.description, "after reset");
    assert_eq!(bug.assignee, "alex-kim");
    assert_eq!(bug.status, BugStatus::Open);
}

#[test]
fn submit_draft_rejects_whitespace_assignee_without_creating() {
    let registry = empty_registry();
    let draft = BugDraft {
        title: "Crash".to_string(),
        description: "steps".to_string(),
        assignee: "   ".to_string(),
    };

    let err = submit_draft_internal(&registry, draft).expect_err("incomplete draft");
    assert!(err.starts_with("Draft is incomplete"));
    assert!(list_bugs_internal(&registry).expect("list bugs").is_empty());
}
