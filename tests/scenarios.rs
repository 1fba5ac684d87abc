use bf_core::generate::{random_graph, random_source, MIXED, NON_NEGATIVE};
use bf_core::harness::{compare, Outcome};
use bf_core::{
    parallel_shortest_paths, sequential_shortest_paths, Config, Distance, Engine, Error, Graph, Mode, ParallelBellmanFord,
    PredecessorTree, SequentialBellmanFord, ShortestPaths, SyncStrategy, Workers,
};
use bf_core::Distance::{Finite, Unreachable};

fn scenario_graph() -> Graph {
    Graph::from_edges(5, [(0, 1, 3), (0, 2, 8), (1, 3, 2), (2, 3, -4), (3, 4, 1)]).unwrap()
}

#[test]
fn scenario_1_negative_edge_no_cycle() {
    let g = scenario_graph();
    let expected = [Finite(0), Finite(3), Finite(8), Finite(4), Finite(5)];
    assert_eq!(sequential_shortest_paths(&g, 0).unwrap().as_slice(), &expected);
    assert_eq!(parallel_shortest_paths(&g, 0).unwrap().as_slice(), &expected);
}

#[test]
fn scenario_2_unreachable_vertex() {
    let g = Graph::from_edges(3, [(0, 1, 5)]).unwrap();
    let expected = [Finite(0), Finite(5), Unreachable];
    assert_eq!(sequential_shortest_paths(&g, 0).unwrap().as_slice(), &expected);
    assert_eq!(parallel_shortest_paths(&g, 0).unwrap().as_slice(), &expected);
}

#[test]
fn scenario_3_negative_cycle() {
    let g = Graph::from_edges(3, [(0, 1, 1), (1, 2, 1), (2, 0, -5)]).unwrap();
    assert_eq!(sequential_shortest_paths(&g, 0), Err(Error::NegativeCycleDetected));
    assert_eq!(parallel_shortest_paths(&g, 0), Err(Error::NegativeCycleDetected));
    assert_eq!(compare(&g, 0).unwrap().outcome(), &Outcome::NegativeCycle);
}

#[test]
fn scenario_4_benchmark_sized_graph() {
    for seed in [1u64, 42, 2024] {
        let g = random_graph(1000, 5000, NON_NEGATIVE, seed);
        let source = random_source(&g, seed).unwrap();
        let c = compare(&g, source).unwrap();
        let Outcome::Distances(d) = c.outcome() else { panic!("negative cycle with non-negative weights") };
        assert_eq!(d.len(), 1000);
        assert_eq!(d[source as usize], Finite(0));
    }
}

#[test]
fn idempotent_on_untouched_graph() {
    let g = random_graph(200, 800, MIXED, 11);
    for engine in [Engine::new(Config::sequential()), Engine::new(Config::parallel(Workers::Fixed(4)))] {
        assert_eq!(engine.shortest_paths(&g, 3), engine.shortest_paths(&g, 3));
    }
    let g = scenario_graph();
    let e = ParallelBellmanFord::with_workers(3);
    assert_eq!(e.shortest_paths(&g, 0), e.shortest_paths(&g, 0));
}

#[test]
fn distances_never_increase_between_rounds() {
    let g = random_graph(120, 600, -3..=20, 5);
    let engines: Vec<Box<dyn ShortestPaths>> = vec![
        Box::new(SequentialBellmanFord::default()),
        Box::new(ParallelBellmanFord::with_workers(4)),
        Box::new(ParallelBellmanFord::new(Config::parallel(Workers::Fixed(3)).with_sync(SyncStrategy::Locked))),
    ];
    for engine in engines {
        let mut prev: Vec<Distance> = Vec::new();
        let mut rounds = 0;
        let mut check = |_: usize, d: &[Distance]| {
            if !prev.is_empty() { assert!(d.iter().zip(&prev).all(|(now, before)| now <= before)); }
            prev = d.to_vec();
            rounds += 1;
        };
        let _ = engine.solve_observed(&g, 0, &mut check);
        assert!(rounds > 0);
    }
}

#[test]
fn early_exit_matches_forced_full_rounds() {
    let g = random_graph(80, 400, NON_NEGATIVE, 9);
    for mode in [Mode::Sequential, Mode::Parallel] {
        let cfg = Config { mode, workers: Workers::Fixed(4), ..Config::default() };
        let early = Engine::new(cfg).solve(&g, 0).unwrap();
        let full = Engine::new(cfg.with_early_exit(false)).solve(&g, 0).unwrap();
        assert!(early.info.converged_early);
        assert!(early.info.rounds < g.vertex_count() - 1);
        assert_eq!(full.info.rounds, g.vertex_count() - 1);
        assert_eq!(early.distances, full.distances);
    }
}

#[test]
fn single_worker_degrades_gracefully() {
    let g = random_graph(300, 1500, NON_NEGATIVE, 77);
    let one = ParallelBellmanFord::with_workers(1).solve(&g, 0).unwrap();
    assert_eq!(one.info.workers, 1);
    assert_eq!(one.info.chunk_size, g.edge_count());
    assert_eq!(one.distances, sequential_shortest_paths(&g, 0).unwrap());
}

#[test]
fn trees_agree_across_engines() {
    let g = random_graph(150, 700, NON_NEGATIVE, 3);
    let ds = sequential_shortest_paths(&g, 0).unwrap();
    let dp = ParallelBellmanFord::with_workers(4).shortest_paths(&g, 0).unwrap();
    let ts = PredecessorTree::from_distances(&g, 0, &ds);
    assert_eq!(ts, PredecessorTree::from_distances(&g, 0, &dp));
    for v in 0..150u32 {
        match (ds.get(v).unwrap(), ts.path_to(v)) {
            (Finite(d), Some(path)) => {
                let total: i64 = path.windows(2).map(|w| {
                    g.edges().iter().filter(|e| e.u == w[0] && e.v == w[1]).map(|e| e.weight as i64).min().unwrap()
                }).sum();
                assert_eq!(total, d);
                assert_eq!(path.first(), Some(&0));
            }
            (Unreachable, None) => {}
            other => panic!("vertex {v}: {other:?}"),
        }
    }
}
