use super::*;

use anyhow::anyhow;

fn sample_table() -> TerminalTable {
    TerminalTable::build(vec![
        TerminalCommand::new(
            "connect",
            "Connect to a blockchain network",
            "connect <network> [options]",
            TerminalHandler::new(|args| {
                Ok(match args.first() {
                    Some(network) => CommandResult::ok(format!("Connected to {network}")),
                    None => CommandResult::fail("Network name required"),
                })
            }),
        ),
        TerminalCommand::new(
            "deploy",
            "Deploy a smart contract",
            "deploy <contract> [args...]",
            TerminalHandler::new(|args| {
                Ok(match args.first() {
                    Some(contract) => CommandResult::ok(format!("Deploying contract: {contract}")),
                    None => CommandResult::fail("Contract name required"),
                })
            }),
        ),
        TerminalCommand::new(
            "panic",
            "Always fails",
            "panic",
            TerminalHandler::new(|_| Err(anyhow!("synthetic failure"))),
        ),
    ])
    .unwrap()
}

#[test]
fn parse_trims_splits_and_lowercases_the_name() {
    let (name, args) = parse("  CONNECT   Ethereum  mainnet ").unwrap();
    assert_eq!(name, "connect");
    assert_eq!(args, ["Ethereum", "mainnet"]);
}

#[test]
fn parse_ignores_blank_lines() {
    assert!(parse("").is_none());
    assert!(parse("   ").is_none());
}

#[test]
fn lookup_miss_carries_the_attempted_name() {
    let table = sample_table();
    let err = table.lookup("frobnicate").unwrap_err();
    assert_eq!(err.0, "frobnicate");
    assert_eq!(
        err.to_string(),
        "Unknown command: frobnicate. Type 'help' for available commands."
    );
}

#[tokio::test]
async fn help_lists_every_command_with_description() {
    let table = sample_table();
    let result = table.run_line("help").await.unwrap();
    assert!(result.success);
    assert!(result.output.starts_with("Available commands:"));
    for name in ["help", "connect", "deploy", "panic"] {
        assert!(result.output.contains(name), "missing {name} in help");
    }
    assert!(result.output.contains("connect - Connect to a blockchain network"));
}

#[tokio::test]
async fn help_with_a_command_shows_usage() {
    let table = sample_table();
    let result = table.run_line("help deploy").await.unwrap();
    assert!(result.success);
    assert_eq!(
        result.output,
        "deploy\nDeploy a smart contract\nUsage: deploy <contract> [args...]"
    );
}

#[tokio::test]
async fn help_with_an_unknown_command_fails() {
    let table = sample_table();
    let result = table.run_line("help nonsense").await.unwrap();
    assert!(!result.success);
    assert_eq!(result.output, "Unknown command: nonsense");
}

#[tokio::test]
async fn unknown_command_renders_the_fixed_message() {
    let table = sample_table();
    let result = table.run_line("frobnicate").await.unwrap();
    assert!(!result.success);
    assert_eq!(
        result.output,
        "Unknown command: frobnicate. Type 'help' for available commands."
    );
}

#[tokio::test]
async fn handler_errors_become_failed_results() {
    let table = sample_table();
    let result = table.run_line("panic").await.unwrap();
    assert!(!result.success);
    assert_eq!(result.output, "Error executing command: synthetic failure");
}

#[tokio::test]
async fn commands_match_case_insensitively_via_parse() {
    let table = sample_table();
    let result = table.run_line("CONNECT polygon").await.unwrap();
    assert!(result.success);
    assert_eq!(result.output, "Connected to polygon");
}

#[tokio::test]
async fn blank_lines_run_nothing() {
    let table = sample_table();
    assert!(table.run_line("   ").await.is_none());
}

#[test]
fn duplicate_names_are_rejected_at_build() {
    let dup = |name: &str| {
        TerminalCommand::new(
            name,
            "",
            "",
            TerminalHandler::new(|_| Ok(CommandResult::ok(""))),
        )
    };
    let err = TerminalTable::build(vec![dup("gas"), dup("GAS")]).unwrap_err();
    assert!(err.to_string().contains("gas"));
}
