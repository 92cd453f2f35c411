use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::runtime;

use crate::catalog::{self, SharedProviders, SharedQueue, TerminalQueue};
use crate::config::DeckConfig;
use crate::palette::{
    Category, CommandRegistry, DispatchExecutor, NavEvent, NavOutcome, SelectionState,
    categories_present, flatten, group_by_category, resolve,
};
use crate::providers::Providers;
use crate::terminal::{CommandResult, TerminalSession, TerminalTable, parse};

use super::input::Input;

/// State of one open palette overlay. Dropped when the palette closes;
/// search history survives on [`App`] for the dashboard session.
pub(super) struct PaletteUi {
    pub(super) query: String,
    pub(super) selection: SelectionState,
    /// Ctrl+Space detail pane for the highlighted command.
    pub(super) preview: bool,
}

impl PaletteUi {
    fn new() -> Self {
        Self {
            query: String::new(),
            selection: SelectionState::new(),
            preview: false,
        }
    }
}

pub(super) struct App {
    pub(super) cfg: DeckConfig,
    pub(super) providers: SharedProviders,
    pub(super) queue: SharedQueue,
    pub(super) registry: CommandRegistry,
    pub(super) table: TerminalTable,
    pub(super) executor: DispatchExecutor,
    pub(super) term: TerminalSession,
    pub(super) input: Input,
    pub(super) palette: Option<PaletteUi>,
    pub(super) search_history: Vec<String>,
    search_pos: Option<usize>,
    pub(super) status: Option<(String, bool)>,
    pub(super) quit: bool,
    rt: runtime::Runtime,
}

impl App {
    pub(super) fn new(cfg: DeckConfig) -> Result<Self> {
        let providers = Providers::shared(cfg.theme);
        let queue: SharedQueue = std::rc::Rc::new(std::cell::RefCell::new(TerminalQueue::default()));
        let registry = catalog::build_registry(&providers, &queue).context("build palette catalog")?;
        let table = catalog::build_terminal(&providers).context("build terminal table")?;
        let executor = match cfg.history_cap {
            Some(cap) => DispatchExecutor::with_history_cap(cap),
            None => DispatchExecutor::new(),
        };
        let rt = runtime::Builder::new_current_thread()
            .build()
            .context("build runtime")?;

        Ok(Self {
            cfg,
            providers,
            queue,
            registry,
            table,
            executor,
            term: TerminalSession::new(),
            input: Input::default(),
            palette: None,
            search_history: Vec::new(),
            search_pos: None,
            status: None,
            quit: false,
            rt,
        })
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        if self.palette.is_some() {
            self.handle_palette_key(key);
        } else {
            self.handle_root_key(key);
        }
    }

    fn handle_root_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('k') if ctrl => {
                self.palette = Some(PaletteUi::new());
                self.search_pos = None;
            }
            KeyCode::Char('q') if ctrl => {
                self.quit = true;
            }
            KeyCode::Esc => {
                if self.input.buf.is_empty() {
                    self.quit = true;
                } else {
                    self.input.clear();
                }
            }
            KeyCode::Enter => {
                if !self.input.buf.trim().is_empty() {
                    let line = self.input.buf.clone();
                    self.input.clear();
                    self.run_terminal_line(&line);
                }
            }
            KeyCode::Up => {
                if let Some(prev) = self.term.recall_prev() {
                    let prev = prev.to_string();
                    self.input.set(&prev);
                }
            }
            KeyCode::Down => match self.term.recall_next() {
                Some(next) => {
                    let next = next.to_string();
                    self.input.set(&next);
                }
                None => self.input.clear(),
            },
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Char('u') if ctrl => self.input.clear(),
            KeyCode::Char(c) if !ctrl => self.input.insert_char(c),
            _ => {}
        }
    }

    fn handle_palette_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        // Current view, recomputed from scratch: the candidate list is a
        // pure function of (query, registry, filter).
        let Some(pal) = self.palette.as_ref() else {
            return;
        };
        let candidates = resolve(&pal.query, &self.registry, &self.cfg.fuzzy);
        let categories = categories_present(&candidates);
        let visible = flatten(&group_by_category(
            &candidates,
            pal.selection.selected_category,
        ));

        let event = match key.code {
            KeyCode::Esc => Some(NavEvent::Cancel),
            KeyCode::Tab => Some(NavEvent::ToggleSection),
            KeyCode::Right => Some(NavEvent::MoveRight),
            KeyCode::Left => Some(NavEvent::MoveLeft),
            KeyCode::Down => Some(NavEvent::MoveNext),
            KeyCode::Up => Some(NavEvent::MovePrev),
            KeyCode::Enter => Some(NavEvent::Confirm),
            KeyCode::Char(c) if alt && c.is_ascii_digit() && c != '0' => {
                Some(NavEvent::JumpToCategory(c as usize - '1' as usize))
            }
            _ => None,
        };

        if let Some(event) = event {
            let Some(pal) = self.palette.as_mut() else {
                return;
            };
            match pal.selection.apply(event, &categories, visible.len()) {
                NavOutcome::Continue => {}
                NavOutcome::Closed => {
                    // Cancel discards selection state; an in-flight handler
                    // would still run to completion before we got here.
                    self.palette = None;
                }
                NavOutcome::Confirmed(picked) => {
                    let query = pal.query.clone();
                    if let Some(entry) = picked.and_then(|i| visible.get(i)).map(|c| c.entry) {
                        if !query.trim().is_empty() {
                            self.search_history.push(query.clone());
                        }
                        let outcome = self.rt.block_on(self.executor.execute(entry, &query));
                        self.status = Some(match outcome {
                            Ok(()) => (format!("Executed: {}", entry.title), true),
                            Err(e) => (e.to_string(), false),
                        });
                        // Palette policy: the session ends after dispatch.
                        self.palette = None;
                        self.drain_terminal_queue();
                    }
                }
            }
            return;
        }

        // Query editing and quick filters.
        let Some(pal) = self.palette.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(' ') if ctrl => pal.preview = !pal.preview,
            KeyCode::Char('b') if ctrl => pal.selection.set_category(Category::Blockchain),
            KeyCode::Char('m') if ctrl => pal.selection.set_category(Category::Market),
            KeyCode::Char('a') if ctrl => pal.selection.set_category(Category::Analytics),
            KeyCode::Char('u') if ctrl => {
                pal.query.clear();
                pal.selection.apply(NavEvent::QueryChanged, &categories, 0);
            }
            KeyCode::Char('p') if ctrl => {
                let next = match self.search_pos {
                    None if self.search_history.is_empty() => None,
                    None => Some(0),
                    Some(i) if i + 1 < self.search_history.len() => Some(i + 1),
                    Some(i) => Some(i),
                };
                if let Some(i) = next {
                    self.search_pos = Some(i);
                    pal.query = self.search_history[self.search_history.len() - 1 - i].clone();
                    pal.selection.apply(NavEvent::QueryChanged, &categories, 0);
                }
            }
            // Ctrl+N only steps while a history walk is in progress; it must
            // not clobber a freshly typed query.
            KeyCode::Char('n') if ctrl => match self.search_pos {
                None => {}
                Some(0) => {
                    self.search_pos = None;
                    pal.query.clear();
                    pal.selection.apply(NavEvent::QueryChanged, &categories, 0);
                }
                Some(i) => {
                    self.search_pos = Some(i - 1);
                    pal.query = self.search_history[self.search_history.len() - i].clone();
                    pal.selection.apply(NavEvent::QueryChanged, &categories, 0);
                }
            },
            KeyCode::Backspace => {
                pal.query.pop();
                pal.selection.apply(NavEvent::QueryChanged, &categories, 0);
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                pal.query.push(c);
                pal.selection.apply(NavEvent::QueryChanged, &categories, 0);
            }
            _ => {}
        }
    }

    /// Run one terminal line, handling the session-level `clear`/`history`
    /// commands before the table sees the input.
    pub(super) fn run_terminal_line(&mut self, line: &str) {
        match parse(line) {
            None => {}
            Some((name, _)) if name == "clear" => self.term.clear(),
            Some((name, _)) if name == "history" => {
                let inputs: Vec<&str> = self.term.records().iter().map(|r| r.input.as_str()).collect();
                let listing = if inputs.is_empty() {
                    "No commands in history".to_string()
                } else {
                    inputs.join("\n")
                };
                self.term.push(line.trim(), &CommandResult::ok(listing));
            }
            Some(_) => {
                let _ = self.rt.block_on(self.term.submit(&self.table, line));
            }
        }
    }

    fn drain_terminal_queue(&mut self) {
        let lines = self.queue.borrow_mut().drain();
        for line in lines {
            self.run_terminal_line(&line);
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
