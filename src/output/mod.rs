pub mod json;
pub mod text;

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Routes command results to stdout as plain text or pretty JSON.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_line(text_line),
            OutputMode::Json => json::print(json_value),
        }
    }

    /// Prints a table followed by a status line in text mode, `json_value` otherwise.
    pub fn emit_table<T: Serialize>(
        &self,
        headers: &[&str],
        rows: &[Vec<String>],
        status: &str,
        json_value: &T,
    ) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => {
                if !rows.is_empty() {
                    text::print_line(&text::render_table(headers, rows))?;
                    text::print_line("")?;
                }
                text::print_line(status)
            }
            OutputMode::Json => json::print(json_value),
        }
    }
}
