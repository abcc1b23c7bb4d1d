use esmify_core::FileEntry;
use std::io;

/// Observer notified as the pipeline advances.
///
/// Calls are made synchronously from the pipeline loop, one at a time.
pub trait Progress {
    /// Called before target file `index` (1-based) of `total` is transformed
    fn on_file_start(&mut self, _file: &FileEntry, _index: usize, _total: usize) -> io::Result<()> {
        Ok(())
    }

    /// Called once after every entry has been processed
    fn on_done(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Ignores every notification.
#[derive(Debug, Default)]
pub struct Silent;

impl Progress for Silent {}
