mod common;
use common::cli::{TkWorkspace, listed_ids, run_tk, tk_command};
use predicates::prelude::*;

#[test]
fn list_on_fresh_database_reports_no_tickets() {
    let workspace = TkWorkspace::new();

    let output = run_tk(&workspace, ["list-tickets"], "list");
    assert!(output.status.success(), "list failed: {}", output.stderr);
    assert_eq!(output.stdout.trim(), "No tickets found.");
    assert!(workspace.db_path().exists());
}

#[test]
fn add_then_list_shows_ticket_with_id() {
    let workspace = TkWorkspace::new();

    let add = run_tk(
        &workspace,
        ["add-ticket", "Printer jam", "T-100", "alice"],
        "add",
    );
    assert!(add.status.success(), "add failed: {}", add.stderr);
    assert_eq!(
        add.stdout.trim(),
        "Ticket added: Printer jam (T-100) - Agent: alice"
    );

    let list = run_tk(&workspace, ["list-tickets"], "list");
    assert!(list.status.success());
    assert_eq!(
        list.stdout.trim(),
        "ID: 1, Name: Printer jam, Ticket Number: T-100, Agent: alice"
    );
}

#[test]
fn update_one_field_leaves_others_unchanged() {
    let workspace = TkWorkspace::new();
    run_tk(&workspace, ["add-ticket", "VPN down", "T-7", "alice"], "add");

    let update = run_tk(&workspace, ["update-ticket", "1", "--agent", "bob"], "update");
    assert!(update.status.success(), "update failed: {}", update.stderr);
    assert_eq!(update.stdout.trim(), "Ticket 1 updated.");

    let list = run_tk(&workspace, ["list-tickets"], "list");
    assert_eq!(
        list.stdout.trim(),
        "ID: 1, Name: VPN down, Ticket Number: T-7, Agent: bob"
    );
}

#[test]
fn update_accepts_underscore_ticket_number_flag() {
    let workspace = TkWorkspace::new();
    run_tk(&workspace, ["add-ticket", "VPN down", "T-7", "alice"], "add");

    let update = run_tk(
        &workspace,
        ["update-ticket", "1", "--ticket_number", "T-8", "--name", "VPN flaky"],
        "update",
    );
    assert!(update.status.success(), "update failed: {}", update.stderr);

    let list = run_tk(&workspace, ["list-tickets"], "list");
    assert_eq!(
        list.stdout.trim(),
        "ID: 1, Name: VPN flaky, Ticket Number: T-8, Agent: alice"
    );
}

#[test]
fn delete_removes_ticket_from_list() {
    let workspace = TkWorkspace::new();
    run_tk(&workspace, ["add-ticket", "one", "T-1", "alice"], "add1");
    run_tk(&workspace, ["add-ticket", "two", "T-2", "bob"], "add2");

    let delete = run_tk(&workspace, ["delete-ticket", "1"], "delete");
    assert!(delete.status.success(), "delete failed: {}", delete.stderr);
    assert_eq!(delete.stdout.trim(), "Ticket 1 deleted.");

    let list = run_tk(&workspace, ["list-tickets"], "list");
    assert_eq!(listed_ids(&list.stdout), vec![2]);
}

#[test]
fn ids_keep_increasing_after_delete() {
    let workspace = TkWorkspace::new();
    run_tk(&workspace, ["add-ticket", "one", "T-1", "alice"], "add1");
    run_tk(&workspace, ["add-ticket", "two", "T-2", "bob"], "add2");
    run_tk(&workspace, ["delete-ticket", "2"], "delete");
    run_tk(&workspace, ["add-ticket", "three", "T-3", "carol"], "add3");

    let list = run_tk(&workspace, ["list-tickets"], "list");
    assert_eq!(listed_ids(&list.stdout), vec![1, 3]);
}

#[test]
fn delete_missing_ticket_is_a_noop() {
    let workspace = TkWorkspace::new();
    run_tk(&workspace, ["add-ticket", "one", "T-1", "alice"], "add");

    let delete = run_tk(&workspace, ["delete-ticket", "99"], "delete");
    assert!(delete.status.success(), "delete failed: {}", delete.stderr);
    assert_eq!(delete.stdout.trim(), "Ticket 99 not found; nothing deleted.");

    let list = run_tk(&workspace, ["list-tickets"], "list");
    assert_eq!(listed_ids(&list.stdout), vec![1]);
}

#[test]
fn update_missing_ticket_reports_not_found() {
    let workspace = TkWorkspace::new();

    tk_command(&workspace)
        .args(["update-ticket", "99", "--name", "x"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Ticket not found: 99"));
}

#[test]
fn add_with_empty_field_fails_validation() {
    let workspace = TkWorkspace::new();

    tk_command(&workspace)
        .args(["add-ticket", "Printer jam", "", "alice"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ticket_number: cannot be empty"));

    let list = run_tk(&workspace, ["list-tickets"], "list");
    assert_eq!(list.stdout.trim(), "No tickets found.");
}

#[test]
fn malformed_arguments_are_rejected_by_parser() {
    let workspace = TkWorkspace::new();

    tk_command(&workspace)
        .args(["delete-ticket", "not-a-number"])
        .assert()
        .failure()
        .code(2);

    tk_command(&workspace)
        .args(["add-ticket", "only-name"])
        .assert()
        .failure()
        .code(2);
}
