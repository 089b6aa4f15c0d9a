//! Scripted input sources for unit tests

use std::collections::VecDeque;

use crate::cli::prompt::Prompter;
use crate::crypto::SecureString;
use crate::error::LedgerResult;
use crate::services::PinSource;

/// PIN entries replayed in order; runs dry with empty entries
pub struct ScriptedPins {
    entries: VecDeque<String>,
    notices: Vec<String>,
}

impl ScriptedPins {
    pub fn new<'a>(entries: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            entries: entries.into_iter().map(String::from).collect(),
            notices: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.entries.len()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }
}

impl PinSource for ScriptedPins {
    fn read_pin(&mut self, _prompt: &str) -> LedgerResult<SecureString> {
        Ok(SecureString::new(self.entries.pop_front().unwrap_or_default()))
    }

    fn notify(&mut self, message: &str) -> LedgerResult<()> {
        self.notices.push(message.to_string());
        Ok(())
    }
}

/// Console stand-in: menu answers and PINs come from one line queue
pub struct ScriptedConsole {
    lines: ScriptedPins,
}

impl ScriptedConsole {
    pub fn new<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            lines: ScriptedPins::new(lines),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.remaining()
    }
}

impl PinSource for ScriptedConsole {
    fn read_pin(&mut self, prompt: &str) -> LedgerResult<SecureString> {
        self.lines.read_pin(prompt)
    }

    fn notify(&mut self, message: &str) -> LedgerResult<()> {
        self.lines.notify(message)
    }
}

impl Prompter for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> LedgerResult<Option<String>> {
        Ok(self.lines.entries.pop_front())
    }
}
