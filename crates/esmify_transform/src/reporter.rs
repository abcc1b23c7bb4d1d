use std::io::{self, Write};

use colored::Colorize;
use esmify_core::FileEntry;
use log::debug;

use crate::{progress::Progress, types::TransformResult};

/// Cursor to the start of the previous line, then clear it
const REWIND_LINE: &str = "\x1b[1F\x1b[K";

/// Renders progress as a single line that is rewritten for every file.
pub struct TerminalProgress<W: Write> {
    writer: W,
    started: bool,
}

impl<W: Write> TerminalProgress<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, started: false }
    }
}

impl<W: Write> Progress for TerminalProgress<W> {
    fn on_file_start(&mut self, file: &FileEntry, index: usize, total: usize) -> io::Result<()> {
        let rewind = if self.started { REWIND_LINE } else { "" };
        self.started = true;
        writeln!(
            self.writer,
            "{}Processing: {} / {}\t{}",
            rewind,
            index,
            total,
            file.path.display()
        )?;
        self.writer.flush()
    }

    fn on_done(&mut self) -> io::Result<()> {
        let rewind = if self.started { REWIND_LINE } else { "" };
        writeln!(self.writer, "{}Processing: Done", rewind)?;
        self.writer.flush()
    }
}

pub fn print_summary<W: Write>(
    writer: &mut W,
    result: &TransformResult,
    elapsed_ms: u128,
) -> io::Result<()> {
    debug!("Printing summary: {:?}", result);
    writeln!(
        writer,
        "{} Transformed {} files ({} specifiers rewritten), copied {} files in {}ms.",
        "●".bright_blue(),
        result.files_transformed.to_string().cyan(),
        result.specifiers_rewritten.to_string().cyan(),
        result.files_copied.to_string().cyan(),
        elapsed_ms.to_string().cyan()
    )?;
    writer.flush()?;
    Ok(())
}
