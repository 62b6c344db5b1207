//! Headless Life runner.
//!
//! Usage: `life-run [--rows R --cols C | --preset P] [--density D] [--seed S] [--generations N]`
//!
//! Prints one JSON object per generation on stdout; logs go to stderr.

use std::io::{self, BufWriter};

use anyhow::Result;

use tui_life::engine::LifeConfig;
use tui_life::headless::{parse_run_args, run};
use tui_life::logging::{self, LogTarget};

fn main() -> Result<()> {
    logging::init(LogTarget::Stderr)?;

    let config = LifeConfig::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let run_args = parse_run_args(&args, &config, tui_life::clock_seed())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&run_args, &mut out)?;
    Ok(())
}
