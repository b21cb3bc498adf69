//! Prompt and presentation layer.
//!
//! `Console` owns the input and output streams so the whole interactive flow
//! can be driven from scripted input in tests.

use crate::core::display::{record_lines, FRAME_WIDTH};
use crate::domain::model::Record;
use crate::utils::error::{RaptorError, Result};
use crate::utils::validation::parse_positive_number;
use std::io::{self, BufRead, Stdin, Stdout, Write};

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Writes the prompt and reads one line with its terminator removed.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(RaptorError::InputClosed);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    pub fn get_text(&mut self, prompt: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(default) if !default.is_empty() => {
                let input = self.read_line(&format!("{} [{}]: ", prompt, default))?;
                let input = input.trim();
                if input.is_empty() {
                    Ok(default.to_string())
                } else {
                    Ok(input.to_string())
                }
            }
            _ => Ok(self.read_line(&format!("{}: ", prompt))?.trim().to_string()),
        }
    }

    /// Empty input gives `default`; anything starting with "y" is yes,
    /// every other answer is no.
    pub fn get_boolean(&mut self, prompt: &str, default: bool) -> Result<bool> {
        let default_text = if default { "Y/n" } else { "y/N" };
        let response = self
            .read_line(&format!("{} [{}]: ", prompt, default_text))?
            .trim()
            .to_lowercase();

        if response.is_empty() {
            return Ok(default);
        }
        Ok(response.starts_with('y'))
    }

    /// Re-prompts until the answer parses as a positive whole number.
    pub fn get_number(&mut self, prompt: &str, field: &str, default: u32) -> Result<u32> {
        let default_text = default.to_string();
        loop {
            let raw = self.get_text(prompt, Some(&default_text))?;
            match parse_positive_number(field, &raw) {
                Ok(value) => return Ok(value),
                Err(e @ RaptorError::InvalidInput { .. }) => {
                    tracing::debug!("Rejected {} input: {}", field, e);
                    self.print_warning(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn print_header(&mut self, header: &str) -> Result<()> {
        writeln!(self.writer, "\n===== {} =====\n", header)?;
        Ok(())
    }

    pub fn print_item(&mut self, item: &str) -> Result<()> {
        writeln!(self.writer, "> {}", item)?;
        Ok(())
    }

    pub fn print_warning(&mut self, item: &str) -> Result<()> {
        writeln!(self.writer, "\n!!! {}!!!\n", item)?;
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    pub fn display_record(&mut self, record: &Record) -> Result<()> {
        let frame = "=".repeat(FRAME_WIDTH);
        writeln!(self.writer, "\n{}", frame)?;
        for line in record_lines(record) {
            writeln!(self.writer, "{}", line)?;
        }
        writeln!(self.writer, "{}", frame)?;
        Ok(())
    }
}
