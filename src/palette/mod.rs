//! Command dispatch core: registry, fuzzy resolution, category grouping,
//! keyboard selection state machine, and execution with auditable history.
//!
//! Everything here is UI-free and deterministic; the TUI shell and the CLI
//! are thin drivers over these types.

mod dispatch;
mod group;
mod registry;
mod resolve;
mod selection;

pub use dispatch::{DispatchExecutor, HandlerError, HistoryEntry};
pub use group::{categories_present, flatten, group_by_category};
pub use registry::{Category, CommandEntry, CommandRegistry, Handler, RegistryError};
pub use resolve::{Candidate, FuzzyConfig, resolve};
pub use selection::{NavEvent, NavOutcome, Section, SelectionState};
