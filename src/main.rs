use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chaindeck::catalog::{self, TerminalQueue};
use chaindeck::config::DeckConfig;
use chaindeck::palette::{group_by_category, resolve};
use chaindeck::providers::Providers;
use chaindeck::terminal::TerminalSession;
use chaindeck::tui_shell;

#[derive(Parser)]
#[command(name = "chaindeck")]
#[command(about = "Keyboard-first terminal dashboard with a fuzzy command palette", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the dashboard (default)
    Tui,

    /// List the registered palette commands
    Commands {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a query against the palette and print the ranked matches
    Palette {
        query: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one terminal line and print its output
    Exec {
        /// The line to run, e.g. `connect ethereum`
        line: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(DeckConfig::default_path);
    let cfg = DeckConfig::load(&config_path)?;

    let command = cli.command.unwrap_or(Commands::Tui);
    init_logging(matches!(command, Commands::Tui));

    match command {
        Commands::Tui => tui_shell::run(cfg),
        Commands::Commands { json } => list_commands(&cfg, json),
        Commands::Palette { query, json } => run_palette(&cfg, &query, json),
        Commands::Exec { line } => run_exec(&cfg, &line.join(" ")),
    }
}

/// Stderr logging would tear up the alternate screen, so in TUI mode logs
/// only go to a file and only when CHAINDECK_LOG points at one.
fn init_logging(tui: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if tui {
        if let Ok(path) = std::env::var("CHAINDECK_LOG") {
            if let Ok(file) = std::fs::File::create(path) {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false)
                    .init();
            }
        }
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn build_world(
    cfg: &DeckConfig,
) -> Result<(
    catalog::SharedProviders,
    catalog::SharedQueue,
    chaindeck::palette::CommandRegistry,
    chaindeck::terminal::TerminalTable,
)> {
    let providers = Providers::shared(cfg.theme);
    let queue = Rc::new(RefCell::new(TerminalQueue::default()));
    let registry = catalog::build_registry(&providers, &queue).context("build palette catalog")?;
    let table = catalog::build_terminal(&providers).context("build terminal table")?;
    Ok((providers, queue, registry, table))
}

fn list_commands(cfg: &DeckConfig, json: bool) -> Result<()> {
    let (_providers, _queue, registry, _table) = build_world(cfg)?;
    if json {
        let entries: Vec<serde_json::Value> = registry
            .all()
            .iter()
            .map(|e| {
                serde_json::json!({
                    "id": e.id,
                    "title": e.title,
                    "category": e.category.as_str(),
                    "keywords": e.keywords,
                    "shortcut": e.shortcut,
                    "description": e.description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for e in registry.all() {
            println!("{:<28} {:<12} {}", e.id, e.category, e.title);
        }
    }
    Ok(())
}

fn run_palette(cfg: &DeckConfig, query: &str, json: bool) -> Result<()> {
    let (_providers, _queue, registry, _table) = build_world(cfg)?;
    let candidates = resolve(query, &registry, &cfg.fuzzy);
    if json {
        let out: Vec<serde_json::Value> = candidates
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.entry.id,
                    "title": c.entry.title,
                    "category": c.entry.category.as_str(),
                    "score": c.score,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    for (category, bucket) in group_by_category(&candidates, None) {
        println!("{category}:");
        for c in bucket {
            println!("  {:<28} {:.3}", c.entry.id, c.score);
        }
    }
    Ok(())
}

fn run_exec(cfg: &DeckConfig, line: &str) -> Result<()> {
    let (_providers, _queue, _registry, table) = build_world(cfg)?;
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("build runtime")?;

    let mut session = TerminalSession::new();
    let Some(record) = rt.block_on(session.submit(&table, line)) else {
        return Ok(());
    };
    println!("{}", record.output);
    if !record.success {
        std::process::exit(1);
    }
    Ok(())
}
