//! The built-in command catalogue: every palette command and terminal
//! command the dashboard ships with, bound to the provider stubs.
//!
//! Palette commands in the `terminal` category do not reach into the
//! terminal session directly; they queue a line on [`Providers`] and the
//! active shell drains the queue into its own session after dispatch.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;

use crate::palette::{Category, CommandEntry, CommandRegistry, Handler, RegistryError};
use crate::providers::{LayoutMode, OrderKind, Providers};
use crate::terminal::{CommandResult, TerminalCommand, TerminalHandler, TerminalTable};

/// Lines queued by palette commands for the terminal session to run.
#[derive(Debug, Default)]
pub struct TerminalQueue {
    lines: Vec<String>,
}

impl TerminalQueue {
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

pub type SharedProviders = Rc<RefCell<Providers>>;
pub type SharedQueue = Rc<RefCell<TerminalQueue>>;

/// Build the full palette registry over the given collaborators.
pub fn build_registry(
    providers: &SharedProviders,
    queue: &SharedQueue,
) -> Result<CommandRegistry, RegistryError> {
    let mut reg = CommandRegistry::new();

    let on = |p: &SharedProviders, f: fn(&mut Providers) -> Result<()>| {
        let p = p.clone();
        Handler::new(move || f(&mut p.borrow_mut()))
    };
    let run_line = |q: &SharedQueue, line: &'static str| {
        let q = q.clone();
        Handler::new(move || {
            q.borrow_mut().push(line);
            Ok(())
        })
    };

    // General
    reg.register(
        CommandEntry::new(
            "command-palette",
            "Show Command Palette",
            Category::General,
            &["palette", "commands", "search"],
            Handler::new(|| Ok(())),
        )
        .shortcut("Ctrl+K"),
    )?;

    // Layout
    reg.register(
        CommandEntry::new(
            "toggle-left-panel",
            "Toggle Left Panel",
            Category::Layout,
            &["panel", "left", "toggle", "sidebar"],
            on(providers, |p| {
                p.layout.toggle_left();
                Ok(())
            }),
        )
        .shortcut("Ctrl+\\"),
    )?;
    reg.register(
        CommandEntry::new(
            "toggle-right-panel",
            "Toggle Right Panel",
            Category::Layout,
            &["panel", "right", "toggle", "sidebar"],
            on(providers, |p| {
                p.layout.toggle_right();
                Ok(())
            }),
        )
        .shortcut("Ctrl+]"),
    )?;
    reg.register(
        CommandEntry::new(
            "toggle-bottom-panel",
            "Toggle Bottom Panel",
            Category::Layout,
            &["panel", "bottom", "toggle", "terminal"],
            on(providers, |p| {
                p.layout.toggle_bottom();
                Ok(())
            }),
        )
        .shortcut("Ctrl+J"),
    )?;
    reg.register(CommandEntry::new(
        "layout-single",
        "Single Layout",
        Category::Layout,
        &["layout", "single", "full"],
        on(providers, |p| {
            p.layout.set_mode(LayoutMode::Single);
            Ok(())
        }),
    ))?;
    reg.register(CommandEntry::new(
        "layout-columns",
        "Two Columns Layout",
        Category::Layout,
        &["layout", "columns", "split"],
        on(providers, |p| {
            p.layout.set_mode(LayoutMode::Columns);
            Ok(())
        }),
    ))?;
    reg.register(CommandEntry::new(
        "layout-grid",
        "Grid Layout",
        Category::Layout,
        &["layout", "grid", "quadrant"],
        on(providers, |p| {
            p.layout.set_mode(LayoutMode::Grid);
            Ok(())
        }),
    ))?;

    // Theme
    reg.register(
        CommandEntry::new(
            "toggle-theme",
            "Toggle Theme",
            Category::Theme,
            &["theme", "dark", "light", "toggle"],
            on(providers, |p| {
                p.theme.toggle();
                Ok(())
            }),
        )
        .shortcut("Ctrl+T"),
    )?;

    // Terminal
    reg.register(
        CommandEntry::new(
            "terminal-help",
            "Show Terminal Help",
            Category::Terminal,
            &["terminal", "help", "commands", "manual"],
            run_line(queue, "help"),
        )
        .shortcut("Ctrl+H"),
    )?;
    reg.register(CommandEntry::new(
        "terminal-clear",
        "Clear Terminal",
        Category::Terminal,
        &["terminal", "clear", "clean"],
        run_line(queue, "clear"),
    ))?;
    reg.register(CommandEntry::new(
        "terminal-history",
        "Show Command History",
        Category::Terminal,
        &["terminal", "history", "commands"],
        run_line(queue, "history"),
    ))?;

    // Blockchain
    reg.register(CommandEntry::new(
        "blockchain-connect",
        "Connect to Blockchain",
        Category::Blockchain,
        &["blockchain", "connect", "wallet"],
        on(providers, |p| p.chain.connect("ethereum").map(|_| ())),
    ))?;
    reg.register(CommandEntry::new(
        "blockchain-disconnect",
        "Disconnect Wallet",
        Category::Blockchain,
        &["blockchain", "disconnect", "wallet"],
        on(providers, |p| p.chain.disconnect().map(|_| ())),
    ))?;
    reg.register(
        CommandEntry::new(
            "blockchain-deploy-contract",
            "Deploy Smart Contract",
            Category::Blockchain,
            &["blockchain", "deploy", "contract", "smart contract"],
            run_line(queue, "deploy Counter"),
        )
        .description("Deploy a new smart contract to the blockchain"),
    )?;
    reg.register(
        CommandEntry::new(
            "blockchain-gas",
            "Check Gas Price",
            Category::Blockchain,
            &["blockchain", "gas", "price", "fee"],
            run_line(queue, "gas"),
        )
        .description("Check current gas prices"),
    )?;

    // AI
    reg.register(CommandEntry::new(
        "ai-analyze",
        "Analyze Transaction",
        Category::Ai,
        &["ai", "analyze", "transaction", "smart"],
        on(providers, |p| {
            p.analytics.generate_report("summary", "24h").map(|_| ())
        }),
    ))?;
    reg.register(CommandEntry::new(
        "ai-predict",
        "Predict Market Trend",
        Category::Ai,
        &["ai", "predict", "market", "trend"],
        on(providers, |p| {
            p.analytics.generate_report("volatility", "30d").map(|_| ())
        }),
    ))?;

    // Market
    reg.register(
        CommandEntry::new(
            "market-refresh",
            "Refresh Market Data",
            Category::Market,
            &["market", "refresh", "data", "price"],
            on(providers, |p| p.market.refresh().map(|_| ())),
        )
        .shortcut("Ctrl+R")
        .description("Fetch latest market data and prices"),
    )?;
    reg.register(
        CommandEntry::new(
            "market-order",
            "Place Market Order",
            Category::Market,
            &["market", "order", "trade", "buy", "sell"],
            on(providers, |p| p.market.place_order(OrderKind::Market).map(|_| ())),
        )
        .description("Place a new market order"),
    )?;
    reg.register(
        CommandEntry::new(
            "market-sentiment",
            "Market Sentiment",
            Category::Market,
            &["market", "sentiment", "analysis", "trend"],
            on(providers, |p| {
                p.market.sentiment();
                Ok(())
            }),
        )
        .description("Analyze current market sentiment"),
    )?;
    reg.register(
        CommandEntry::new(
            "market-pnl",
            "Profit/Loss Analysis",
            Category::Market,
            &["profit", "loss", "pnl", "performance"],
            on(providers, |p| {
                p.market.profit_loss("24h");
                Ok(())
            }),
        )
        .description("View profit/loss analysis for your portfolio"),
    )?;

    // Trading
    reg.register(
        CommandEntry::new(
            "trading-limit-order",
            "Place Limit Order",
            Category::Trading,
            &["trading", "limit", "order"],
            on(providers, |p| p.market.place_order(OrderKind::Limit).map(|_| ())),
        )
        .description("Place a new limit order"),
    )?;
    reg.register(
        CommandEntry::new(
            "trading-stop-loss",
            "Set Stop Loss",
            Category::Trading,
            &["trading", "stop", "loss"],
            on(providers, |p| {
                p.market.place_order(OrderKind::StopLoss).map(|_| ())
            }),
        )
        .description("Set a stop loss order"),
    )?;

    // Analytics
    reg.register(
        CommandEntry::new(
            "analytics-report",
            "Generate Analytics Report",
            Category::Analytics,
            &["analytics", "report", "generate"],
            on(providers, |p| {
                p.analytics.generate_report("summary", "7d").map(|_| ())
            }),
        )
        .description("Generate a comprehensive analytics report"),
    )?;
    reg.register(
        CommandEntry::new(
            "analytics-risk-assessment",
            "Risk Assessment",
            Category::Analytics,
            &["analytics", "risk", "assessment", "exposure"],
            on(providers, |p| {
                p.analytics.generate_report("risk", "7d").map(|_| ())
            }),
        )
        .description("Analyze portfolio risk and exposure"),
    )?;
    reg.register(
        CommandEntry::new(
            "analytics-export",
            "Export Analytics Data",
            Category::Analytics,
            &["analytics", "export", "data"],
            on(providers, |p| p.analytics.export_csv().map(|_| ())),
        )
        .description("Export analytics data to CSV"),
    )?;

    // Settings
    reg.register(
        CommandEntry::new(
            "settings-preferences",
            "Open Preferences",
            Category::Settings,
            &["settings", "preferences", "config"],
            Handler::new(|| Ok(())),
        )
        .shortcut("Ctrl+,")
        .description("Open application preferences"),
    )?;
    reg.register(
        CommandEntry::new(
            "settings-keyboard",
            "Keyboard Shortcuts",
            Category::Settings,
            &["settings", "keyboard", "shortcuts"],
            run_line(queue, "help"),
        )
        .description("View and customize keyboard shortcuts"),
    )?;

    Ok(reg)
}

/// Build the terminal command table over the same collaborators.
pub fn build_terminal(providers: &SharedProviders) -> Result<TerminalTable, RegistryError> {
    let connect = {
        let p = providers.clone();
        TerminalHandler::new(move |args| {
            let Some(network) = args.first() else {
                return Ok(CommandResult::fail("Network name required"));
            };
            Ok(CommandResult::ok(p.borrow_mut().chain.connect(network)?))
        })
    };

    let deploy = {
        let p = providers.clone();
        TerminalHandler::new(move |args| {
            let Some(contract) = args.first() else {
                return Ok(CommandResult::fail("Contract name required"));
            };
            let address = p.borrow_mut().chain.deploy(contract, &args[1..])?;
            Ok(CommandResult::ok(format!("Deploying contract: {contract}"))
                .with_data(serde_json::json!({ "address": address })))
        })
    };

    let gas = {
        let p = providers.clone();
        TerminalHandler::new(move |_args| {
            let gwei = p.borrow().chain.gas_price()?;
            Ok(CommandResult::ok(format!("Current gas price: {gwei} gwei")))
        })
    };

    let network = {
        let p = providers.clone();
        TerminalHandler::new(move |_args| {
            Ok(match p.borrow().chain.connected_network() {
                Some(n) => CommandResult::ok(format!("Connected to {n}")),
                None => CommandResult::ok("Not connected"),
            })
        })
    };

    TerminalTable::build(vec![
        TerminalCommand::new(
            "connect",
            "Connect to a blockchain network",
            "connect <network> [options]",
            connect,
        ),
        TerminalCommand::new(
            "deploy",
            "Deploy a smart contract",
            "deploy <contract> [args...]",
            deploy,
        ),
        TerminalCommand::new("gas", "Show the current gas price", "gas", gas),
        TerminalCommand::new("network", "Show the connected network", "network", network),
    ])
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
