//! File pipeline for esmify.
//!
//! Walks a source tree once, then rewrites every target file's relative
//! import and re-export specifiers into explicit paths, copying everything
//! else unchanged when writing to a separate destination.
//!
//! # Examples
//!
//! ```no_run
//! use esmify_transform::{Config, Silent, run_transform};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     source: std::path::PathBuf::from("src"),
//!     in_place: false,
//!     dest: Some(std::path::PathBuf::from("dist")),
//!     ext: "js".to_string(),
//!     ts: true,
//!     print: false,
//! };
//!
//! let result = run_transform(&cfg, &mut Silent)?;
//! println!("{} files transformed", result.files_transformed);
//! # Ok(())
//! # }
//! ```

mod config;
mod pipeline;
mod progress;
mod reporter;
mod types;

// Re-export public API
pub use config::Config;
pub use pipeline::run_transform;
pub use progress::{Progress, Silent};
pub use reporter::{TerminalProgress, print_summary};
pub use types::TransformResult;
