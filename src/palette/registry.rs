use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed category set for palette commands.
///
/// Variants are declared in lexicographic order of their display names so the
/// derived `Ord` matches the ordering the grouper presents to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ai,
    Analytics,
    Blockchain,
    General,
    Layout,
    Market,
    Settings,
    Terminal,
    Theme,
    Trading,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Ai,
        Category::Analytics,
        Category::Blockchain,
        Category::General,
        Category::Layout,
        Category::Market,
        Category::Settings,
        Category::Terminal,
        Category::Theme,
        Category::Trading,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::Analytics => "analytics",
            Category::Blockchain => "blockchain",
            Category::General => "general",
            Category::Layout => "layout",
            Category::Market => "market",
            Category::Settings => "settings",
            Category::Terminal => "terminal",
            Category::Theme => "theme",
            Category::Trading => "trading",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate command id: {0}")]
    DuplicateId(String),

    #[error("no command registered with id: {0}")]
    NotFound(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<()>>>>;

/// Zero-argument side-effecting action bound to a palette command.
///
/// Handlers close over their collaborators (providers, terminal, ...); the
/// dispatch core only observes whether invocation failed.
pub struct Handler(Box<dyn Fn() -> HandlerFuture>);

impl Handler {
    /// Wrap a synchronous closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Result<()> + 'static,
    {
        Self(Box::new(move || {
            let out = f();
            Box::pin(async move { out })
        }))
    }

    /// Wrap a closure producing a future (e.g. a stubbed network call).
    pub fn from_future<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<()>> + 'static,
    {
        Self(Box::new(move || Box::pin(f())))
    }

    pub(crate) fn invoke(&self) -> HandlerFuture {
        (self.0)()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// One invocable palette command. Immutable after registration; anything
/// that "toggles" lives behind the handler in a provider.
#[derive(Debug)]
pub struct CommandEntry {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub keywords: Vec<String>,
    pub shortcut: Option<String>,
    pub description: Option<String>,
    pub handler: Handler,
}

impl CommandEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        keywords: &[&str],
        handler: Handler,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            shortcut: None,
            description: None,
            handler,
        }
    }

    pub fn shortcut(mut self, s: impl Into<String>) -> Self {
        self.shortcut = Some(s.into());
        self
    }

    pub fn description(mut self, s: impl Into<String>) -> Self {
        self.description = Some(s.into());
        self
    }
}

/// Append-only, per-session catalogue of commands in registration order.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) -> Result<(), RegistryError> {
        if self.entries.iter().any(|e| e.id == entry.id) {
            return Err(RegistryError::DuplicateId(entry.id));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn all(&self) -> &[CommandEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Result<&CommandEntry, RegistryError> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/palette/registry_tests.rs"]
mod tests;
