use crate::{diamond_graph, path_weight};
use pretty_assertions::assert_eq;
use twoway_core::{
    AdjacencyGraph, BidirectionalSearch, ClosedPlus, EdgeRef, Frontier, ManhattanHeuristic,
    NullVisitor, SearchConfig, SearchError, SearchOutcome, Stage, VertexState, ZeroHeuristic,
    astar_search, bidirectional_astar, bidirectional_dijkstra,
};

#[test]
fn test_prefers_cheaper_multi_hop_path() {
    let graph = diamond_graph(1);

    let outcome = bidirectional_dijkstra(&graph, &graph, 0, 3, &SearchConfig::default()).unwrap();

    assert_eq!(outcome.path(), Some(&[0, 1, 2, 3][..]));
    assert_eq!(outcome.distance(), Some(3));
}

#[test]
fn test_prefers_direct_arc_when_detour_is_expensive() {
    let graph = diamond_graph(10);

    let outcome = bidirectional_dijkstra(&graph, &graph, 0, 3, &SearchConfig::default()).unwrap();

    assert_eq!(outcome.path(), Some(&[0, 3][..]));
    assert_eq!(outcome.distance(), Some(5));
}

#[test]
fn test_source_equals_target() {
    let graph = diamond_graph(1);

    let outcome = bidirectional_dijkstra(&graph, &graph, 2, 2, &SearchConfig::default()).unwrap();

    assert_eq!(outcome.path(), Some(&[2][..]));
    assert_eq!(outcome.distance(), Some(0));
    assert_eq!(outcome.stats().vertices_examined, 0);
}

#[test]
fn test_no_path_leaves_unreached_vertices_at_infinity() {
    let graph: AdjacencyGraph<u32> = AdjacencyGraph::from_edges(4, [(0, 1, 1), (2, 3, 1)]);
    let mut search = BidirectionalSearch::new(
        &graph,
        &graph,
        ClosedPlus,
        ZeroHeuristic,
        ZeroHeuristic,
        SearchConfig::default(),
    );

    let outcome = search.run(0, 3, &mut NullVisitor).unwrap();

    assert!(matches!(outcome, SearchOutcome::NoPath { .. }));
    assert!(!outcome.stats().stopped_early);
    assert_eq!(search.distance(1, Frontier::Forward), 1);
    assert_eq!(search.distance(2, Frontier::Forward), u32::MAX);
    assert_eq!(search.distance(3, Frontier::Forward), u32::MAX);
    assert_eq!(search.distance(1, Frontier::Reverse), u32::MAX);
    assert_eq!(search.distance(2, Frontier::Reverse), 1);
    assert!(search.meeting().is_none());
}

#[test]
fn test_labels_carry_the_frontier_that_set_them() {
    let graph: AdjacencyGraph<u32> = AdjacencyGraph::from_edges(4, [(0, 1, 1), (2, 3, 1)]);
    let mut search = BidirectionalSearch::new(
        &graph,
        &graph,
        ClosedPlus,
        ZeroHeuristic,
        ZeroHeuristic,
        SearchConfig::default(),
    );

    search.run(0, 3, &mut NullVisitor).unwrap();

    assert_eq!(search.state(1, Frontier::Forward), VertexState::FORWARD_CLOSED);
    assert_eq!(search.state(2, Frontier::Reverse), VertexState::REVERSE_CLOSED);
    assert_eq!(search.state(2, Frontier::Forward), VertexState::UNVISITED);
    assert_eq!(search.state(1, Frontier::Reverse).frontier, Frontier::None);
    assert!(search.space().is_reached(1, Frontier::Forward));
    assert!(!search.space().is_reached(1, Frontier::Reverse));
    assert_eq!(search.space().labelled_by_both().count(), 0);
}

#[test]
fn test_negative_weight_found_by_forward_frontier() {
    let graph: AdjacencyGraph<i32> =
        AdjacencyGraph::from_edges(3, [(0, 1, -2), (1, 2, 1)]);

    let result = bidirectional_dijkstra(&graph, &graph, 0, 2, &SearchConfig::default());

    assert_eq!(result, Err(SearchError::NegativeWeight { from: 0, to: 1 }));
}

#[test]
fn test_negative_weight_found_by_reverse_frontier() {
    let graph: AdjacencyGraph<i32> =
        AdjacencyGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (2, 3, -1)]);

    let result = bidirectional_dijkstra(&graph, &graph, 0, 3, &SearchConfig::default());

    assert_eq!(result, Err(SearchError::NegativeWeight { from: 2, to: 3 }));
}

#[test]
fn test_rejects_vertex_out_of_range() {
    let graph = diamond_graph(1);

    let result = bidirectional_dijkstra(&graph, &graph, 0, 9, &SearchConfig::default());

    assert_eq!(
        result,
        Err(SearchError::VertexOutOfRange {
            vertex: 9,
            num_vertices: 4
        })
    );
}

#[test]
fn test_repeated_runs_give_identical_results() {
    let graph = diamond_graph(1);
    let mut search = BidirectionalSearch::new(
        &graph,
        &graph,
        ClosedPlus,
        ZeroHeuristic,
        ZeroHeuristic,
        SearchConfig::default(),
    );

    let first = search.run(0, 3, &mut NullVisitor).unwrap();
    let second = search.run(0, 3, &mut NullVisitor).unwrap();

    assert_eq!(first.path(), second.path());
    assert_eq!(first.distance(), second.distance());
    assert_eq!(
        first.stats().vertices_examined,
        second.stats().vertices_examined
    );
}

#[test]
fn test_labels_stay_readable_after_search() {
    let graph = diamond_graph(1);
    let mut search = BidirectionalSearch::new(
        &graph,
        &graph,
        ClosedPlus,
        ZeroHeuristic,
        ZeroHeuristic,
        SearchConfig::default(),
    );

    search.run(0, 3, &mut NullVisitor).unwrap();

    assert_eq!(search.state(0, Frontier::Forward).stage, Stage::Closed);
    assert_eq!(search.state(3, Frontier::Reverse).stage, Stage::Closed);
    assert_eq!(search.distance(3, Frontier::Forward), 3);
    assert_eq!(search.predecessor(3, Frontier::Forward), 2);
    assert_eq!(search.predecessor(0, Frontier::Forward), 0);

    let meeting = search.meeting().unwrap();
    assert_eq!(meeting.total, 3);
    assert_eq!((meeting.forward_vertex, meeting.reverse_vertex), (1, 2));
    assert_eq!(
        search.space().labelled_by_both().collect::<Vec<_>>(),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn test_undirected_edges_are_walked_both_ways() {
    let mut graph = AdjacencyGraph::undirected(4);
    graph.add_edge(1, 0, 2u32);
    graph.add_edge(1, 2, 2);
    graph.add_edge(3, 2, 2);
    graph.add_edge(0, 3, 10);

    let outcome = bidirectional_dijkstra(&graph, &graph, 0, 3, &SearchConfig::default()).unwrap();

    assert_eq!(outcome.path(), Some(&[0, 1, 2, 3][..]));
    assert_eq!(outcome.distance(), Some(6));
}

#[test]
fn test_float_weights() {
    let graph: AdjacencyGraph<f64> = AdjacencyGraph::from_edges(
        4,
        [(0, 1, 0.5), (1, 3, 0.75), (0, 2, 0.25), (2, 3, 1.5)],
    );

    let outcome = bidirectional_dijkstra(&graph, &graph, 0, 3, &SearchConfig::default()).unwrap();

    assert_eq!(outcome.path(), Some(&[0, 1, 3][..]));
    assert_eq!(outcome.distance(), Some(1.25));
}

#[test]
fn test_weights_from_closure() {
    let graph = diamond_graph(1);
    // Doubles every stored weight except the direct arc.
    let weights = |edge: EdgeRef| {
        let weight = graph.weight(edge);
        if weight == 5 { weight } else { weight * 2 }
    };

    let outcome = bidirectional_dijkstra(&graph, &weights, 0, 3, &SearchConfig::default()).unwrap();

    assert_eq!(outcome.path(), Some(&[0, 3][..]));
    assert_eq!(outcome.distance(), Some(5));
}

#[test]
fn test_astar_on_grid_matches_reference() {
    let side = 6;
    let mut graph = AdjacencyGraph::directed(side * side);
    let mut coordinates = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let vertex = row * side + col;
            coordinates.push((col as i64 * 4, row as i64 * 4));
            let extra = ((row + 2 * col) % 3) as i64;
            if col + 1 < side {
                graph.add_edge(vertex, vertex + 1, 4 + extra);
                graph.add_edge(vertex + 1, vertex, 4 + extra);
            }
            if row + 1 < side {
                graph.add_edge(vertex, vertex + side, 4 + 2 * extra);
                graph.add_edge(vertex + side, vertex, 4 + 2 * extra);
            }
        }
    }
    let target = side * side - 1;

    let outcome = bidirectional_astar(
        &graph,
        &graph,
        0,
        target,
        ManhattanHeuristic::new(&coordinates, target),
        ManhattanHeuristic::new(&coordinates, 0),
        &SearchConfig::default(),
    )
    .unwrap();
    let reference = astar_search(&graph, &graph, 0, target, ZeroHeuristic).unwrap();

    assert_eq!(outcome.distance(), reference.distance());
    let path = outcome.path().unwrap();
    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&target));
}

#[test]
fn test_reported_path_weighs_the_reported_distance() {
    let graph: AdjacencyGraph<u32> = AdjacencyGraph::from_edges(
        6,
        [
            (0, 1, 7),
            (0, 2, 9),
            (0, 5, 14),
            (1, 2, 10),
            (1, 3, 15),
            (2, 3, 11),
            (2, 5, 2),
            (3, 4, 6),
            (5, 4, 9),
        ],
    );

    let outcome = bidirectional_dijkstra(&graph, &graph, 0, 4, &SearchConfig::default()).unwrap();

    assert_eq!(outcome.distance(), Some(20));
    assert_eq!(outcome.path(), Some(&[0, 2, 5, 4][..]));
    assert_eq!(path_weight(&graph, outcome.path().unwrap()), Some(20));
}
