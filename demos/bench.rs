use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bf_core::generate::{random_graph, random_source, MIXED, NON_NEGATIVE, POSITIVE};
use bf_core::harness::compare_with;
use bf_core::{Config, ParallelBellmanFord, SequentialBellmanFord, SyncStrategy, Workers};
use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum WeightPreset { NonNegative, Mixed, Positive }

#[derive(Parser, Debug)]
#[command(about = "Compare sequential and parallel Bellman-Ford on random graphs.", long_about = None)]
struct Args {
    /// Vertex counts, comma separated.
    #[arg(long, value_delimiter = ',', default_value = "1000")]
    sizes: Vec<usize>,
    /// Edges per vertex.
    #[arg(long, default_value_t = 5.0)]
    avg_degree: f64,
    /// Worker counts for the parallel engine, comma separated (0 = one per CPU).
    #[arg(long, value_delimiter = ',', default_value = "0")]
    workers: Vec<usize>,
    #[arg(long, value_enum, default_value = "non-negative")]
    weights: WeightPreset,
    /// Use the single-mutex buffer instead of per-slot atomics.
    #[arg(long)]
    locked: bool,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value = "benchmarks/bellman_ford.json")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::builder().filter_level(log::LevelFilter::Info).parse_default_env().try_init()?;

    let range = match args.weights { WeightPreset::NonNegative => NON_NEGATIVE, WeightPreset::Mixed => MIXED, WeightPreset::Positive => POSITIVE };
    let sync = if args.locked { SyncStrategy::Locked } else { SyncStrategy::Atomic };
    let seq = SequentialBellmanFord::default();
    let mut results = Vec::new();
    for &n in &args.sizes {
        let m = (n as f64 * args.avg_degree) as usize;
        let g = random_graph(n, m, range.clone(), args.seed);
        let Some(source) = random_source(&g, args.seed) else { continue };
        for &w in &args.workers {
            let workers = if w == 0 { Workers::Auto } else { Workers::Fixed(w) };
            let par = ParallelBellmanFord::new(Config::parallel(workers).with_sync(sync));
            let c = compare_with(&seq, &par, &g, source).with_context(|| format!("n={n} m={m} workers={w}"))?;
            let report = c.report(&g, source);
            log::info!(
                "n={} m={} workers={} sequential={:.2}ms parallel={:.2}ms speedup={:.2} negative_cycle={}",
                report.n, report.m, report.parallel.map_or(0, |i| i.workers), report.sequential_ms, report.parallel_ms, report.speedup, report.negative_cycle
            );
            results.push(report);
        }
    }

    if let Some(dir) = args.out.parent() { std::fs::create_dir_all(dir)?; }
    let mut f = File::create(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    f.write_all(serde_json::to_string_pretty(&results)?.as_bytes())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
