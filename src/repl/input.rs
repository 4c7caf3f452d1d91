//! Input sources for the viewer
//!
//! The viewer reads one token per prompt through [`InputSource`], so the
//! interactive terminal (rustyline) and scripted input used by tests are
//! interchangeable.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Anything that can answer a prompt with one line of text
pub trait InputSource {
    /// Read the next token for `prompt`
    ///
    /// Returns:
    /// - Ok(Some(token)) for normal input (trimmed)
    /// - Ok(None) when input is exhausted (EOF, Ctrl-D, Ctrl-C)
    fn next_token(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal input handler backed by rustyline
///
/// Features:
/// - Line editing (Emacs-style by default)
/// - Optional persistent history
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        Ok(InputHandler {
            editor: DefaultEditor::new()?,
            history_path: None,
        })
    }

    /// Create input handler with persistent history
    pub fn with_history(history_file: PathBuf) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;

        // Missing or unreadable history just starts empty
        if history_file.exists() {
            let _ = editor.load_history(&history_file);
        }

        Ok(InputHandler {
            editor,
            history_path: Some(history_file),
        })
    }

    /// Save history to disk
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            self.editor.save_history(path)?;
        }
        Ok(())
    }
}

impl InputSource for InputHandler {
    fn next_token(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }
}

/// Fixed sequence of answers, consumed front to back
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    tokens: VecDeque<String>,
    prompts_seen: usize,
}

impl ScriptedInput {
    pub fn new<T: Into<String>>(tokens: impl IntoIterator<Item = T>) -> Self {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            prompts_seen: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    /// Number of prompts answered or attempted so far
    pub fn prompts_seen(&self) -> usize {
        self.prompts_seen
    }
}

impl InputSource for ScriptedInput {
    fn next_token(&mut self, _prompt: &str) -> Result<Option<String>> {
        self.prompts_seen += 1;
        Ok(self.tokens.pop_front().map(|t| t.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_handler_with_history() {
        let temp_dir = TempDir::new().unwrap();
        let history_path = temp_dir.path().join("history");
        let handler = InputHandler::with_history(history_path.clone()).unwrap();
        assert_eq!(handler.history_path, Some(history_path));
    }

    #[test]
    fn test_scripted_input_order() {
        let mut input = ScriptedInput::new(["1", " France ", "no"]);
        assert_eq!(input.next_token("> ").unwrap().as_deref(), Some("1"));
        assert_eq!(input.next_token("> ").unwrap().as_deref(), Some("France"));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.next_token("> ").unwrap().as_deref(), Some("no"));
        assert_eq!(input.next_token("> ").unwrap(), None);
        assert_eq!(input.prompts_seen(), 4);
    }
}
