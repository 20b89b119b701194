//! Console output
//!
//! Records are printed one per line as `No.<rank> <record>`. Fatal errors are
//! printed to the error stream behind an `Error: ` prefix.

use crate::model::ItemRecord;
use crate::output::traits::{OutputResult, RecordConsumer};
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Stdout, Write};

/// Writes each record as a ranked line
pub struct ConsoleReporter<W: Write> {
    writer: W,
}

impl ConsoleReporter<Stdout> {
    /// Creates a reporter writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordConsumer for ConsoleReporter<W> {
    fn consume(&mut self, rank: usize, record: &ItemRecord) -> OutputResult<()> {
        writeln!(self.writer, "No.{} {}", rank, record)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes `Error: <error>` as a single line, with the prefix in red when
/// `color` is set
pub fn write_error<W, E>(writer: &mut W, error: &E, color: bool) -> io::Result<()>
where
    W: Write + ?Sized,
    E: Display + ?Sized,
{
    if color {
        writeln!(writer, "{}{}", "Error: ".red(), error)
    } else {
        writeln!(writer, "Error: {}", error)
    }
}

/// Process exit status for an optional error: 0 without one, 1 with one
pub fn exit_code<E: ?Sized>(error: Option<&E>) -> i32 {
    match error {
        Some(_) => 1,
        None => 0,
    }
}
