use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use esmify_transform::{Config, Silent, TerminalProgress, TransformResult};
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "esmify", version)]
#[command(
    about = "Make relative import specifiers explicit for ES module resolution",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    config: Config,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.config);

    if let Err(e) = run(&cli.config) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cfg: &Config) -> Result<()> {
    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let start = Instant::now();
    info!("Transforming {} (in place: {})", cfg.source.display(), cfg.in_place);

    let result: TransformResult = if cfg.print {
        let mut progress = TerminalProgress::new(&mut stdout);
        esmify_transform::run_transform(cfg, &mut progress)?
    } else {
        esmify_transform::run_transform(cfg, &mut Silent)?
    };

    let elapsed_ms = start.elapsed().as_millis();
    esmify_transform::print_summary(&mut stdout, &result, elapsed_ms)?;
    stdout.flush()?;

    Ok(())
}
