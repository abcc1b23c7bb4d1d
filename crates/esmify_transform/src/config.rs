use anyhow::{Context, Result, bail};
use clap::Parser;
use esmify_core::{DEFAULT_EXTENSION, ResolveOptions};
use log::debug;
use path_clean::clean;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "esmify")]
#[command(about = "Rewrite relative import specifiers into explicit ES module paths")]
pub struct Config {
    /// Source directory
    #[arg(long)]
    pub source: PathBuf,

    /// Transform files in place
    #[arg(long)]
    pub in_place: bool,

    /// Destination directory (required unless --in-place)
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// File extension of transformed files and rewritten specifiers
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Also transform TypeScript sources (*.ts, excluding *.d.ts)
    #[arg(long)]
    pub ts: bool,

    /// Print progress while processing
    #[arg(long)]
    pub print: bool,
}

impl Config {
    /// Checks the options before anything touches the filesystem
    pub fn validate(&self) -> Result<()> {
        if self.in_place {
            return Ok(());
        }
        let Some(dest) = &self.dest else {
            bail!("option '--dest <DEST>' not specified");
        };

        let source = absolute_clean(&self.source)?;
        let dest = absolute_clean(dest)?;
        debug!("Resolved source={:?}, dest={:?}", source, dest);
        if source == dest {
            bail!("source path is same as dest path, maybe you should use \"--in-place\"");
        }
        Ok(())
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions::new(&self.ext, self.ts)
    }

    /// Root that output is written under, `None` when transforming in place
    pub fn output_root(&self) -> Option<&Path> {
        if self.in_place { None } else { self.dest.as_deref() }
    }
}

fn absolute_clean(path: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve path {}", path.display()))?;
    Ok(clean(abs))
}
