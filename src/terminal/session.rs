use time::OffsetDateTime;

use super::table::{CommandResult, TerminalTable};

/// One processed line: what was typed and what came back.
#[derive(Clone, Debug)]
pub struct TerminalRecord {
    pub input: String,
    pub output: String,
    pub success: bool,
    pub timestamp: OffsetDateTime,
}

/// Per-terminal-view state: the append-only record stream plus the Up/Down
/// recall cursor over prior inputs.
///
/// The cursor counts back from the most recent record: `Some(0)` is the last
/// input, `Some(len-1)` the oldest. Recall sticks at the oldest entry rather
/// than wrapping, and stepping forward past the newest returns to an empty
/// prompt (`None`).
#[derive(Debug, Default)]
pub struct TerminalSession {
    records: Vec<TerminalRecord>,
    recall: Option<usize>,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TerminalRecord] {
        &self.records
    }

    /// Run one line through the table and record the outcome. Blank lines
    /// are ignored. Returns the freshly appended record.
    pub async fn submit(&mut self, table: &TerminalTable, line: &str) -> Option<&TerminalRecord> {
        let input = line.trim();
        let result = table.run_line(input).await?;
        self.push(input, &result);
        self.records.last()
    }

    /// Record a result produced outside the table (session-level commands
    /// like `clear`/`history` in the TUI pane).
    pub fn push(&mut self, input: &str, result: &CommandResult) {
        self.records.push(TerminalRecord {
            input: input.to_string(),
            output: result.output.clone(),
            success: result.success,
            timestamp: OffsetDateTime::now_utc(),
        });
        self.recall = None;
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.recall = None;
    }

    /// Up arrow: recall the next-older input, sticking at the oldest.
    pub fn recall_prev(&mut self) -> Option<&str> {
        if self.records.is_empty() {
            return None;
        }
        let next = match self.recall {
            None => 0,
            Some(i) if i + 1 < self.records.len() => i + 1,
            Some(i) => i,
        };
        self.recall = Some(next);
        Some(self.records[self.records.len() - 1 - next].input.as_str())
    }

    /// Down arrow: step back toward the newest input; past it, the prompt
    /// empties and the cursor resets.
    pub fn recall_next(&mut self) -> Option<&str> {
        match self.recall {
            None => None,
            Some(0) => {
                self.recall = None;
                None
            }
            Some(i) => {
                self.recall = Some(i - 1);
                Some(self.records[self.records.len() - i].input.as_str())
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/terminal/session_tests.rs"]
mod tests;
