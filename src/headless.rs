//! Headless runner behind the `life-run` binary.
//!
//! Seeds a grid, advances it a fixed number of generations and writes one
//! JSON status line per generation, starting with generation 0.

use std::io::Write;

use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::GridStore;
use crate::engine::LifeConfig;
use crate::types::GridPreset;

pub const DEFAULT_GENERATIONS: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    pub rows: usize,
    pub columns: usize,
    pub density: f64,
    pub seed: u32,
    pub generations: u64,
}

/// One output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationRecord {
    pub generation: u64,
    pub rows: usize,
    pub columns: usize,
    pub population: usize,
}

impl GenerationRecord {
    pub fn of(store: &GridStore) -> Self {
        let (rows, columns) = store.dimensions();
        Self {
            generation: store.generation(),
            rows,
            columns,
            population: store.population(),
        }
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("life-run: missing value for {}", flag))
}

fn number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let v = value(args, i, flag)?;
    v.parse::<T>()
        .map_err(|_| anyhow!("life-run: invalid {} value: {}", flag, v))
}

/// Parse command-line arguments (without the program name).
///
/// `config` supplies defaults; flags override it.
pub fn parse_run_args(args: &[String], config: &LifeConfig, fallback_seed: u32) -> Result<RunArgs> {
    let mut rows: Option<usize> = None;
    let mut columns: Option<usize> = None;
    let mut preset: Option<GridPreset> = None;
    let mut density = config.density;
    let mut seed = config.seed_or(fallback_seed);
    let mut generations = DEFAULT_GENERATIONS;

    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        i += 1;
        match flag {
            "--rows" => rows = Some(number(args, i, flag)?),
            "--cols" | "--columns" => columns = Some(number(args, i, flag)?),
            "--preset" => {
                let v = value(args, i, flag)?;
                preset = Some(
                    GridPreset::from_str(v)
                        .ok_or_else(|| anyhow!("life-run: unknown preset: {}", v))?,
                );
            }
            "--density" => {
                density = number(args, i, flag)?;
                if !(0.0..=1.0).contains(&density) {
                    return Err(anyhow!("life-run: --density must be within [0, 1]"));
                }
            }
            "--seed" => seed = number(args, i, flag)?,
            "--generations" => generations = number(args, i, flag)?,
            other => return Err(anyhow!("life-run: unknown argument: {}", other)),
        }
        i += 1;
    }

    let (rows, columns) = match (rows, columns, preset) {
        (None, None, None) => config.dimensions(),
        (None, None, Some(p)) => p.dimensions(),
        (Some(r), Some(c), None) => (r, c),
        (_, _, Some(_)) => {
            return Err(anyhow!("life-run: --preset cannot be combined with --rows/--cols"))
        }
        _ => return Err(anyhow!("life-run: --rows and --cols must be given together")),
    };

    Ok(RunArgs {
        rows,
        columns,
        density,
        seed,
        generations,
    })
}

/// Run the simulation and write `generations + 1` JSON lines to `out`.
///
/// Returns the final population.
pub fn run(args: &RunArgs, out: &mut impl Write) -> Result<usize> {
    let mut store = GridStore::with_seed(args.rows, args.columns, args.seed)?;
    store.randomize(args.density);
    info!(
        rows = args.rows,
        columns = args.columns,
        seed = args.seed,
        population = store.population(),
        "headless run seeded"
    );

    write_record(out, &store)?;
    for _ in 0..args.generations {
        store.advance();
        write_record(out, &store)?;
    }
    out.flush()?;

    debug!(generation = store.generation(), "headless run finished");
    Ok(store.population())
}

fn write_record(out: &mut impl Write, store: &GridStore) -> Result<()> {
    serde_json::to_writer(&mut *out, &GenerationRecord::of(store))?;
    out.write_all(b"\n")?;
    Ok(())
}
