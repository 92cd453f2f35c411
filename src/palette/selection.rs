use super::registry::Category;

/// Which half of the palette owns keyboard focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    Categories,
    #[default]
    Commands,
}

/// Navigation events fed to the palette selection state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// Tab: flip focus between the category strip and the command list.
    ToggleSection,
    /// Right arrow: categories -> commands.
    MoveRight,
    /// Left arrow: commands -> categories.
    MoveLeft,
    /// Down arrow: next category or next command, wrapping.
    MoveNext,
    /// Up arrow: previous category or previous command, wrapping.
    MovePrev,
    /// Alt+digit: select the n-th (0-based) category; out of range is a no-op.
    JumpToCategory(usize),
    /// The query text changed; highlight resets to the top.
    QueryChanged,
    /// Enter: resolve the highlighted command.
    Confirm,
    /// Escape: terminate the session.
    Cancel,
}

/// Result of applying one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Continue,
    /// Enter was pressed; carries the highlighted index into the current
    /// candidate list, or `None` when the list is empty.
    Confirmed(Option<usize>),
    /// The session is over; no further events are processed.
    Closed,
}

/// Palette selection state. Lives for one palette session and is dropped
/// when the palette closes.
#[derive(Debug, Default)]
pub struct SelectionState {
    pub focused: Section,
    pub selected_category: Option<Category>,
    pub highlighted: usize,
    closed: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Directly select a category (mouse click or Ctrl+B/M/A quick filter)
    /// and move focus to the command list.
    pub fn set_category(&mut self, category: Category) {
        if self.closed {
            return;
        }
        self.selected_category = Some(category);
        self.focused = Section::Commands;
        self.highlighted = 0;
    }

    pub fn clear_category(&mut self) {
        if self.closed {
            return;
        }
        self.selected_category = None;
        self.highlighted = 0;
    }

    /// Apply one navigation event against the current view: `categories` is
    /// the sorted category list, `command_count` the length of the candidate
    /// list the highlight walks. Total over (state, event); the highlight is
    /// re-clamped on every call so it can never point outside the list.
    pub fn apply(
        &mut self,
        event: NavEvent,
        categories: &[Category],
        command_count: usize,
    ) -> NavOutcome {
        if self.closed {
            return NavOutcome::Closed;
        }
        self.clamp(command_count);

        match event {
            NavEvent::ToggleSection => {
                self.focused = match self.focused {
                    Section::Categories => Section::Commands,
                    Section::Commands => Section::Categories,
                };
            }
            NavEvent::MoveRight => {
                if self.focused == Section::Categories {
                    self.focused = Section::Commands;
                }
            }
            NavEvent::MoveLeft => {
                if self.focused == Section::Commands {
                    self.focused = Section::Categories;
                }
            }
            NavEvent::MoveNext => match self.focused {
                Section::Categories => self.cycle_category(categories, 1),
                Section::Commands => {
                    if command_count > 0 {
                        self.highlighted = (self.highlighted + 1) % command_count;
                    }
                }
            },
            NavEvent::MovePrev => match self.focused {
                Section::Categories => self.cycle_category(categories, -1),
                Section::Commands => {
                    if command_count > 0 {
                        self.highlighted = (self.highlighted + command_count - 1) % command_count;
                    }
                }
            },
            NavEvent::JumpToCategory(n) => {
                if let Some(cat) = categories.get(n).copied() {
                    self.set_category(cat);
                }
            }
            NavEvent::QueryChanged => {
                self.highlighted = 0;
            }
            NavEvent::Confirm => {
                let picked = (command_count > 0).then_some(self.highlighted);
                return NavOutcome::Confirmed(picked);
            }
            NavEvent::Cancel => {
                self.closed = true;
                return NavOutcome::Closed;
            }
        }
        NavOutcome::Continue
    }

    fn cycle_category(&mut self, categories: &[Category], step: i32) {
        if categories.is_empty() {
            self.selected_category = None;
            return;
        }
        let n = categories.len();
        let next = match self
            .selected_category
            .and_then(|c| categories.iter().position(|x| *x == c))
        {
            // With nothing selected, Down picks the first category and Up
            // picks the last.
            None => {
                if step > 0 {
                    0
                } else {
                    n - 1
                }
            }
            Some(i) => (i + n).wrapping_add_signed(step as isize) % n,
        };
        self.selected_category = Some(categories[next]);
        self.highlighted = 0;
    }

    fn clamp(&mut self, command_count: usize) {
        // A stale category filter whose bucket vanished from the result set
        // is kept; the grouper then yields an empty list and the highlight
        // stays pinned at zero.
        if command_count == 0 {
            self.highlighted = 0;
        } else if self.highlighted >= command_count {
            self.highlighted = command_count - 1;
        }
    }
}

#[cfg(test)]
#[path = "../tests/palette/selection_tests.rs"]
mod tests;
