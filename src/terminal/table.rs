use std::fmt;
use std::future::Future;
use std::pin::Pin;

use anyhow::Result;
use thiserror::Error;
use tracing::debug;

use crate::palette::RegistryError;

/// Lookup miss for a terminal line. The display form is exactly the line
/// the terminal renders for an unknown command.
#[derive(Debug, Error)]
#[error("Unknown command: {0}. Type 'help' for available commands.")]
pub struct UnknownCommand(pub String);

/// Outcome of one executed terminal line.
#[derive(Clone, Debug)]
pub struct CommandResult {
    pub success: bool,
    pub output: String,
    pub data: Option<serde_json::Value>,
}

impl CommandResult {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            data: None,
        }
    }

    pub fn fail(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

pub type TerminalFuture = Pin<Box<dyn Future<Output = Result<CommandResult>>>>;

/// Argument-taking handler for one terminal command.
pub struct TerminalHandler(Box<dyn Fn(Vec<String>) -> TerminalFuture>);

impl TerminalHandler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Vec<String>) -> Result<CommandResult> + 'static,
    {
        Self(Box::new(move |args| {
            let out = f(args);
            Box::pin(async move { out })
        }))
    }

    pub fn from_future<F, Fut>(f: F) -> Self
    where
        F: Fn(Vec<String>) -> Fut + 'static,
        Fut: Future<Output = Result<CommandResult>> + 'static,
    {
        Self(Box::new(move |args| Box::pin(f(args))))
    }
}

impl fmt::Debug for TerminalHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TerminalHandler(..)")
    }
}

/// Name, one-line description and usage string for `help` rendering.
#[derive(Clone, Debug)]
pub struct CommandSpec {
    pub name: String,
    pub description: String,
    pub usage: String,
}

#[derive(Debug)]
pub struct TerminalCommand {
    pub spec: CommandSpec,
    pub run: TerminalHandler,
}

impl TerminalCommand {
    pub fn new(
        name: &str,
        description: &str,
        usage: &str,
        run: TerminalHandler,
    ) -> Self {
        Self {
            spec: CommandSpec {
                name: name.to_lowercase(),
                description: description.to_string(),
                usage: usage.to_string(),
            },
            run,
        }
    }
}

/// Split one input line into a lower-cased command name and its arguments.
/// Blank lines produce nothing.
pub fn parse(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.trim().split_whitespace();
    let name = parts.next()?.to_lowercase();
    Some((name, parts.map(str::to_string).collect()))
}

/// The line-oriented command table: lower-cased names mapped to handlers,
/// with `help` synthesized over the registered set at build time.
#[derive(Debug)]
pub struct TerminalTable {
    commands: Vec<TerminalCommand>,
}

impl TerminalTable {
    /// Assemble the table, prepending the `help` built-in. Fails on
    /// duplicate (case-folded) names.
    pub fn build(domain: Vec<TerminalCommand>) -> Result<Self, RegistryError> {
        let mut specs = vec![CommandSpec {
            name: "help".to_string(),
            description: "Show available commands".to_string(),
            usage: "help [command]".to_string(),
        }];
        specs.extend(domain.iter().map(|c| c.spec.clone()));

        for (i, s) in specs.iter().enumerate() {
            if specs[..i].iter().any(|other| other.name == s.name) {
                return Err(RegistryError::DuplicateId(s.name.clone()));
            }
        }

        let help_spec = specs[0].clone();
        let help = TerminalCommand {
            spec: help_spec,
            run: TerminalHandler::new(move |args| Ok(render_help(&specs, &args))),
        };

        let mut commands = vec![help];
        commands.extend(domain);
        Ok(Self { commands })
    }

    pub fn lookup(&self, name: &str) -> Result<&TerminalCommand, UnknownCommand> {
        self.commands
            .iter()
            .find(|c| c.spec.name == name)
            .ok_or_else(|| UnknownCommand(name.to_string()))
    }

    pub fn specs(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter().map(|c| &c.spec)
    }

    /// Execute a looked-up command. Handler errors never escape: they are
    /// folded into a failed `CommandResult`.
    pub async fn execute(&self, command: &TerminalCommand, args: Vec<String>) -> CommandResult {
        debug!(command = %command.spec.name, ?args, "terminal execute");
        match (command.run.0)(args).await {
            Ok(result) => result,
            Err(e) => CommandResult::fail(format!("Error executing command: {e}")),
        }
    }

    /// Full line protocol: parse, lookup, execute. Blank lines yield `None`;
    /// unknown commands yield the fixed failure line.
    pub async fn run_line(&self, line: &str) -> Option<CommandResult> {
        let (name, args) = parse(line)?;
        match self.lookup(&name) {
            Ok(cmd) => Some(self.execute(cmd, args).await),
            Err(miss) => Some(CommandResult::fail(miss.to_string())),
        }
    }
}

fn render_help(specs: &[CommandSpec], args: &[String]) -> CommandResult {
    match args.first() {
        None => {
            let listing = specs
                .iter()
                .map(|s| format!("{} - {}", s.name, s.description))
                .collect::<Vec<_>>()
                .join("\n");
            CommandResult::ok(format!("Available commands:\n{listing}"))
        }
        Some(name) => match specs.iter().find(|s| s.name == *name) {
            Some(s) => CommandResult::ok(format!(
                "{}\n{}\nUsage: {}",
                s.name, s.description, s.usage
            )),
            None => CommandResult::fail(format!("Unknown command: {name}")),
        },
    }
}

#[cfg(test)]
#[path = "../tests/terminal/table_tests.rs"]
mod tests;
