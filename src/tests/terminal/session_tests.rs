use super::*;

use crate::terminal::{CommandResult, TerminalCommand, TerminalHandler, TerminalTable};

fn echo_table() -> TerminalTable {
    TerminalTable::build(vec![TerminalCommand::new(
        "echo",
        "Echo the arguments",
        "echo [words...]",
        TerminalHandler::new(|args| Ok(CommandResult::ok(args.join(" ")))),
    )])
    .unwrap()
}

#[tokio::test]
async fn every_processed_line_becomes_one_record() {
    let table = echo_table();
    let mut session = TerminalSession::new();

    session.submit(&table, "echo hi").await.unwrap();
    session.submit(&table, "frobnicate").await.unwrap();

    let records = session.records();
    assert_eq!(records.len(), 2);
    assert!(records[0].success);
    assert_eq!(records[0].input, "echo hi");
    assert_eq!(records[0].output, "hi");
    assert!(!records[1].success);
    assert_eq!(
        records[1].output,
        "Unknown command: frobnicate. Type 'help' for available commands."
    );
}

#[tokio::test]
async fn blank_lines_are_not_recorded() {
    let table = echo_table();
    let mut session = TerminalSession::new();
    assert!(session.submit(&table, "   ").await.is_none());
    assert!(session.records().is_empty());
}

#[tokio::test]
async fn recall_walks_inputs_most_recent_first_without_wrapping() {
    let table = echo_table();
    let mut session = TerminalSession::new();
    for line in ["echo a", "echo b", "echo c"] {
        session.submit(&table, line).await.unwrap();
    }

    assert_eq!(session.recall_prev(), Some("echo c"));
    assert_eq!(session.recall_prev(), Some("echo b"));
    assert_eq!(session.recall_prev(), Some("echo a"));
    // Sticks at the oldest instead of wrapping.
    assert_eq!(session.recall_prev(), Some("echo a"));

    assert_eq!(session.recall_next(), Some("echo b"));
    assert_eq!(session.recall_next(), Some("echo c"));
    // Past the newest: back to an empty prompt.
    assert_eq!(session.recall_next(), None);
    assert_eq!(session.recall_next(), None);
}

#[tokio::test]
async fn submitting_resets_the_recall_cursor() {
    let table = echo_table();
    let mut session = TerminalSession::new();
    session.submit(&table, "echo a").await.unwrap();
    assert_eq!(session.recall_prev(), Some("echo a"));

    session.submit(&table, "echo b").await.unwrap();
    assert_eq!(session.recall_prev(), Some("echo b"));
}

#[test]
fn recall_on_an_empty_session_is_inert() {
    let mut session = TerminalSession::new();
    assert_eq!(session.recall_prev(), None);
    assert_eq!(session.recall_next(), None);
}

#[test]
fn clear_drops_records_and_cursor() {
    let mut session = TerminalSession::new();
    session.push("echo a", &CommandResult::ok("a"));
    session.push("echo b", &CommandResult::ok("b"));
    assert_eq!(session.recall_prev(), Some("echo b"));

    session.clear();
    assert!(session.records().is_empty());
    assert_eq!(session.recall_prev(), None);
}
