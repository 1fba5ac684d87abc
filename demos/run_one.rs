use anyhow::{bail, Result};
use bf_core::generate::{random_graph, MIXED};
use bf_core::{Config, Engine, Error, PredecessorTree, ShortestPaths};

// Config comes from BF_MODE / BF_WORKERS / BF_SYNC / BF_EARLY_EXIT.
fn main() -> Result<()> {
    env_logger::builder().filter_level(log::LevelFilter::Info).parse_default_env().try_init()?;
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 { bail!("usage: run_one <n> <m> <seed> [target]"); }
    let n: usize = args[1].parse()?;
    let m: usize = args[2].parse()?;
    let seed: u64 = args[3].parse()?;
    let g = random_graph(n, m, MIXED, seed);
    let engine = Engine::new(Config::from_env()?);
    match engine.solve(&g, 0) {
        Ok(s) => {
            let reachable = s.distances.iter().filter(|d| d.is_finite()).count();
            println!("mode={:?} n={n} m={m} rounds={} relax={} workers={} reachable={reachable}", engine.mode(), s.info.rounds, s.info.relaxations, s.info.workers);
            if let Some(t) = args.get(4) {
                let t: u32 = t.parse()?;
                let tree = PredecessorTree::from_distances(&g, 0, &s.distances);
                match (s.distances.get(t), tree.path_to(t)) {
                    (Some(d), Some(p)) => println!("dist[{t}]={d} path={p:?}"),
                    (Some(_), None) => println!("{t} is unreachable"),
                    (None, _) => bail!("target {t} out of range"),
                }
            }
        }
        Err(Error::NegativeCycleDetected) => println!("mode={:?} n={n} m={m} negative cycle", engine.mode()),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
