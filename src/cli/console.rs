//! Line-oriented console I/O
//!
//! Wraps any reader/writer pair so the login and menu flows can run against
//! stdin/stdout or in-memory buffers.

use std::io::{self, BufRead, Write};

/// Prompted input and plain output
pub struct Console<R, W> {
    input: R,
    output: W,
    mask_passwords: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            mask_passwords: false,
        }
    }

    /// Read passwords from the terminal without echo
    pub fn with_masked_passwords(mut self, mask: bool) -> Self {
        self.mask_passwords = mask;
        self
    }

    /// Write a line
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Write text as-is
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Print `label` and read one line. `None` at end of input.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        self.write(label)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like `prompt`, but without echo when masking is on
    pub fn prompt_password(&mut self, label: &str) -> io::Result<Option<String>> {
        if self.mask_passwords {
            self.output.flush()?;
            return rpassword::prompt_password(label).map(Some);
        }
        self.prompt(label)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
