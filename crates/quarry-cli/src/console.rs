//! Line-oriented terminal I/O for command handlers.

use std::io::{self, BufRead, IsTerminal, Write};

/// Reports go to `output`; prompts read from `input`.
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    /// Read secrets from the terminal with echo disabled.
    hide_secrets: bool,
}

impl Console {
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self {
            input,
            output,
            hide_secrets: false,
        }
    }

    pub fn stdio() -> Self {
        let mut console =
            Self::new(Box::new(io::BufReader::new(io::stdin())), Box::new(io::stdout()));
        console.hide_secrets = io::stdin().is_terminal();
        console
    }

    /// Write one report line.
    pub fn line(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Show `label: ` and read one line without its terminator.
    ///
    /// # Errors
    ///
    /// `UnexpectedEof` when input is closed before a line arrives.
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no input for prompt '{label}'"),
            ));
        }
        let trimmed = answer.trim_end_matches(['\r', '\n']).len();
        answer.truncate(trimmed);
        Ok(answer)
    }

    /// Like [`Console::prompt`], but the answer is not echoed when stdin is
    /// a terminal. Piped input is read as a plain line.
    pub fn prompt_secret(&mut self, label: &str) -> io::Result<String> {
        if !self.hide_secrets {
            return self.prompt(label);
        }
        self.output.flush()?;
        rpassword::prompt_password(format!("{label}: "))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::scripted_console;

    #[test]
    fn prompt_reads_lines_in_order() {
        let (mut console, out) = scripted_console(&["first", "second"]);
        assert_eq!(console.prompt("Name").unwrap(), "first");
        assert_eq!(console.prompt("Name").unwrap(), "second");
        assert_eq!(out.contents(), "Name: Name: ");
    }

    #[test]
    fn prompt_fails_when_input_is_exhausted() {
        let (mut console, _out) = scripted_console(&[]);
        let err = console.prompt("Password").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn secret_prompt_reads_piped_input() {
        let (mut console, out) = scripted_console(&["hunter2"]);
        assert_eq!(console.prompt_secret("Password").unwrap(), "hunter2");
        assert_eq!(out.contents(), "Password: ");
    }

    #[test]
    fn blank_answer_is_empty_string() {
        let (mut console, _out) = scripted_console(&[""]);
        assert_eq!(console.prompt("User (optional)").unwrap(), "");
    }
}
