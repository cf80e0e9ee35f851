//! Output adapters and line rendering.

use std::io::Write;

use bestiary_domain::Action;

use crate::infrastructure::ports::OutputPort;

/// How an [`Action`] becomes a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFormat {
    /// Human-readable sentence ("Ghost flies through the air.").
    #[default]
    Text,
    /// One JSON object per line, tagged by action type.
    Json,
}

impl LineFormat {
    pub fn render(&self, action: &Action) -> String {
        match self {
            LineFormat::Text => action.to_string(),
            LineFormat::Json => match serde_json::to_string(action) {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to serialize action, writing text form");
                    action.to_string()
                }
            },
        }
    }
}

/// Writes lines to standard output.
pub struct StdoutOutput;

impl StdoutOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for StdoutOutput {
    fn write_line(&self, line: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = writeln!(handle, "{line}") {
            tracing::warn!(error = %e, "Failed to write action line");
        }
    }
}

/// Captures lines in memory for testing.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryOutput {
    lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
impl OutputPort for MemoryOutput {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(line.to_string());
    }
}
