use par_sssp::graph::Graph;
use par_sssp::{DirectedGraph, Engine, EngineConfig, Error, ShortestPathAlgorithm, Strategy};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn all_strategies() -> Vec<Engine> {
    [
        Strategy::PriorityFrontier,
        Strategy::Buckets,
        Strategy::Iterative,
        Strategy::Sequential,
    ]
    .into_iter()
    .map(|s| Engine::new(s).with_config(EngineConfig::new().with_threads(4)))
    .collect()
}

#[test]
fn test_single_vertex_without_edges() {
    init();
    let graph = DirectedGraph::with_vertices(1);

    for engine in all_strategies() {
        let result = engine.run(&graph, 0).unwrap();
        assert_eq!(result.distances, vec![Some(0)], "{}", engine.strategy());
    }
}

#[test]
fn test_edgeless_graph_leaves_others_unreachable() {
    init();
    let graph = DirectedGraph::build(3, Vec::<(usize, usize, u32)>::new()).unwrap();

    for engine in all_strategies() {
        let result = engine.run(&graph, 0).unwrap();
        assert_eq!(result.distances, vec![Some(0), None, None], "{}", engine.strategy());
        assert_eq!(result.reachable_count(), 1);
    }
}

#[test]
fn test_shorter_path_through_intermediate_vertex() {
    init();
    let graph = DirectedGraph::build(4, vec![(0, 1, 4), (0, 2, 1), (2, 1, 1), (1, 3, 1)]).unwrap();

    for engine in all_strategies() {
        let result = engine.run(&graph, 0).unwrap();
        assert_eq!(
            result.distances,
            vec![Some(0), Some(2), Some(1), Some(3)],
            "{} produced wrong distances",
            <Engine as ShortestPathAlgorithm<DirectedGraph>>::name(&engine)
        );
    }
}

#[test]
fn test_isolated_vertex_is_unreachable() {
    init();
    let graph = DirectedGraph::build(3, vec![(0usize, 1usize, 5i64)]).unwrap();

    for engine in all_strategies() {
        let result = engine.run(&graph, 0).unwrap();
        assert_eq!(result.distances, vec![Some(0), Some(5), None]);
        assert!(!result.is_reachable(2));
    }
}

#[test]
fn test_source_stays_at_zero_with_cycles_back_to_it() {
    init();
    let graph = DirectedGraph::build(
        4,
        vec![(0, 1, 2), (1, 0, 0), (1, 2, 3), (2, 0, 1), (3, 0, 1), (0, 0, 0)],
    )
    .unwrap();

    for source in 0..graph.vertex_count() {
        for engine in all_strategies() {
            let result = engine.run(&graph, source).unwrap();
            assert_eq!(result.get(source), Some(0));
            assert_eq!(result.source, source);
        }
    }
}

#[test]
fn test_zero_weight_edges_refill_current_bucket() {
    init();
    // 0 -0-> 1 -0-> 2 -1-> 3, plus a costly shortcut 0 -5-> 3
    let graph = DirectedGraph::build(4, vec![(0, 1, 0), (1, 2, 0), (2, 3, 1), (0, 3, 5)]).unwrap();

    for engine in all_strategies() {
        let result = engine.run(&graph, 0).unwrap();
        assert_eq!(result.distances, vec![Some(0), Some(0), Some(0), Some(1)]);
    }
}

#[test]
fn test_source_out_of_range_is_rejected() {
    init();
    let graph = DirectedGraph::with_vertices(2);

    for engine in all_strategies() {
        match engine.run(&graph, 2) {
            Err(Error::SourceOutOfRange { vertex, vertex_count }) => {
                assert_eq!((vertex, vertex_count), (2, 2));
            }
            other => panic!("expected SourceOutOfRange, got {:?}", other),
        }
    }

    let empty = DirectedGraph::with_vertices(0);
    assert!(matches!(
        Engine::new(Strategy::Buckets).run(&empty, 0),
        Err(Error::SourceOutOfRange { .. })
    ));
}

#[test]
fn test_output_records_use_minus_one_for_unreachable() {
    let graph = DirectedGraph::build(3, vec![(0, 1, 5)]).unwrap();
    let result = Engine::new(Strategy::PriorityFrontier)
        .with_config(EngineConfig::new().with_threads(2))
        .run(&graph, 0)
        .unwrap();

    assert_eq!(result.to_string(), "0 0\n1 5\n2 -1\n");
    let records: Vec<_> = result.records().collect();
    assert_eq!(records, vec![(0, Some(0)), (1, Some(5)), (2, None)]);
}

#[test]
fn test_sequential_reference_skips_superseded_entries() {
    init();
    // Vertex 2 is queued at 10 first and then improved to 3 through vertex 1.
    let graph = DirectedGraph::build(4, vec![(0, 2, 10), (0, 1, 1), (1, 2, 2), (2, 3, 1)]).unwrap();

    let result = par_sssp::Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances, vec![Some(0), Some(1), Some(3), Some(4)]);
}
