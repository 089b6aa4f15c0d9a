//! Console input
//!
//! PINs are read without echo when stdin is a terminal. When input is
//! piped, every answer (PINs included) is read as a plain line so the menu
//! can be scripted.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::crypto::SecureString;
use crate::error::{LedgerError, LedgerResult};
use crate::services::PinSource;

/// Line-oriented input for the menu
pub trait Prompter: PinSource {
    /// Show `prompt` and read one line without its line ending
    ///
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> LedgerResult<Option<String>>;
}

/// Prompter backed by the process's stdin and stdout
pub struct Console {
    interactive: bool,
}

impl Console {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for Console {
    fn read_line(&mut self, prompt: &str) -> LedgerResult<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(input)))
    }
}

impl PinSource for Console {
    fn read_pin(&mut self, prompt: &str) -> LedgerResult<SecureString> {
        if self.interactive {
            let pin = rpassword::prompt_password(prompt)
                .map_err(|e| LedgerError::Io(format!("Failed to read PIN: {}", e)))?;
            return Ok(SecureString::new(pin));
        }

        let line = self.read_line(prompt)?.unwrap_or_default();
        Ok(SecureString::new(line))
    }

    fn notify(&mut self, message: &str) -> LedgerResult<()> {
        println!("{}", message);
        Ok(())
    }
}

fn strip_line_ending(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}
