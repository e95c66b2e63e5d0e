use chrono::{TimeZone, Utc};
use taskdeck_core::session::{Session, UserIdentity};
use taskdeck_core::task::{Task, TaskDraft, TaskList};
use taskdeck_core::view::DashboardView;

#[test]
fn dashboard_flow_reconciles_confirmed_mutations() {
    let mut list = TaskList::new();

    // Fresh account: fetch answers with an empty collection.
    list.replace_all(vec![]);
    let view = DashboardView::project(list.tasks());
    assert_eq!(view.total, 0);
    assert_eq!(view.completion_rate, 0);
    assert!(view.pending.is_empty());
    assert!(view.completed.is_empty());

    // Create: server confirms the draft with an assigned id.
    let due = Utc
        .with_ymd_and_hms(2024, 1, 1, 10, 0, 0)
        .single()
        .expect("valid due");
    let draft = TaskDraft::new("A".to_string(), "first one".to_string(), due);
    let confirmed = Task {
        id: 1,
        task_name: draft.task_name.clone(),
        task_description: draft.task_description.clone(),
        due_date: draft.due_date,
        is_completed: draft.is_completed,
    };
    list.apply_created(confirmed);
    assert_eq!(list.len(), 1);
    assert!(!list.tasks()[0].is_completed);

    // Toggle: flip is staged, persisted, then applied.
    let staged = list.toggled(1).expect("task 1 exists");
    assert!(staged.is_completed);
    assert!(!list.get(1).expect("task 1 exists").is_completed);
    assert!(list.apply_updated(staged));
    assert!(list.get(1).expect("task 1 exists").is_completed);

    let view = DashboardView::project(list.tasks());
    assert_eq!(view.completed_count, 1);
    assert_eq!(view.completion_rate, 100);

    // Edit through the form path: full replacement by id.
    let mut edited = list.get(1).expect("task 1 exists").clone();
    edited.task_name = "A, renamed".to_string();
    assert!(list.apply_updated(edited));
    assert_eq!(list.len(), 1);
    assert_eq!(list.tasks()[0].task_name, "A, renamed");

    // Delete after server confirmation.
    assert!(list.apply_removed(1));
    assert!(list.is_empty());
    assert_eq!(DashboardView::project(list.tasks()).completion_rate, 0);
}

#[test]
fn session_follows_probe_login_logout_lifecycle() {
    // Startup probe fails: logged out, error recorded.
    let session = Session::failed("authentication required");
    assert!(!session.is_logged_in);
    assert!(session.last_error.is_some());

    // Successful login confirms identity through the probe endpoint.
    let session = Session::confirmed(UserIdentity {
        id: 7,
        username: "ada".to_string(),
    });
    assert!(session.is_logged_in);
    assert_eq!(session.username.as_deref(), Some("ada"));

    // Logout clears local state unconditionally.
    let session = Session::logged_out();
    assert!(!session.is_logged_in);
    assert!(session.username.is_none());
    assert!(session.user_id.is_none());
}
