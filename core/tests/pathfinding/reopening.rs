use crate::path_weight;
use pretty_assertions::assert_eq;
use std::ops::ControlFlow;
use twoway_core::{
    AdjacencyGraph, BidirectionalSearch, ClosedPlus, EdgeRef, Frontier, SearchConfig,
    SearchVisitor, Stage, Termination, ZeroHeuristic, astar_search,
};

/// 0 -> 2 directly costs 3 but 0 -> 1 -> 2 costs 2. The forward estimate
/// for vertex 1 is admissible yet inconsistent, so vertex 2 is closed with
/// distance 3 before the cheaper route through 1 shows up.
fn inconsistent_setup() -> (AdjacencyGraph<u32>, [u32; 4]) {
    let graph = AdjacencyGraph::from_edges(4, [(0, 1, 1), (1, 2, 1), (0, 2, 3), (2, 3, 10)]);
    (graph, [0, 11, 0, 0])
}

#[derive(Default)]
struct ReopenRecorder {
    black_targets: Vec<(usize, Frontier)>,
}

impl SearchVisitor<EdgeRef, u32> for ReopenRecorder {
    fn black_target(&mut self, edge: EdgeRef, frontier: Frontier) -> ControlFlow<()> {
        self.black_targets.push((edge.index, frontier));
        ControlFlow::Continue(())
    }
}

#[test]
fn test_closed_vertex_is_reopened_and_stays_closed() {
    let (graph, estimates) = inconsistent_setup();
    let forward_heuristic = |vertex: usize| estimates[vertex];
    let mut search = BidirectionalSearch::new(
        &graph,
        &graph,
        ClosedPlus,
        forward_heuristic,
        ZeroHeuristic,
        SearchConfig::default().with_termination(Termination::Exhaustive),
    );
    let mut recorder = ReopenRecorder::default();

    let outcome = search.run(0, 3, &mut recorder).unwrap();

    // Edge 1 is the arc 1 -> 2.
    assert_eq!(recorder.black_targets, vec![(1, Frontier::Forward)]);
    assert!(outcome.stats().vertices_reopened >= 1);
    assert_eq!(search.state(2, Frontier::Forward).stage, Stage::Closed);
    assert_eq!(search.distance(2, Frontier::Forward), 2);
    assert_eq!(outcome.distance(), Some(12));
    assert_eq!(outcome.path(), Some(&[0, 1, 2, 3][..]));
}

#[test]
fn test_inconsistent_estimate_still_gives_shortest_distance() {
    let (graph, estimates) = inconsistent_setup();
    let forward_heuristic = |vertex: usize| estimates[vertex];
    let mut search = BidirectionalSearch::new(
        &graph,
        &graph,
        ClosedPlus,
        forward_heuristic,
        ZeroHeuristic,
        SearchConfig::default(),
    );

    let outcome = search.run(0, 3, &mut twoway_core::NullVisitor).unwrap();
    let reference = astar_search(&graph, &graph, 0, 3, forward_heuristic).unwrap();

    assert_eq!(outcome.distance(), Some(12));
    assert_eq!(reference.distance(), Some(12));
    assert_eq!(reference.path(), Some(&[0, 1, 2, 3][..]));
}

#[test]
fn test_cancelled_search_weighs_the_chain_it_returns() {
    // 0 -> 1 -> 2 meets the reverse tree at 2 while 2 hangs off the direct
    // arc 2 -> 4. Reverse vertex 3 carries a high estimate, so 2 is closed
    // and then reopened through 3 just before the examine limit cuts in.
    let graph: AdjacencyGraph<u32> = AdjacencyGraph::from_edges(
        5,
        [(0, 1, 20), (1, 2, 1), (2, 4, 10), (2, 3, 1), (3, 4, 1)],
    );
    let reverse_heuristic = |vertex: usize| if vertex == 3 { 15u32 } else { 0 };
    let mut search = BidirectionalSearch::new(
        &graph,
        &graph,
        ClosedPlus,
        ZeroHeuristic,
        reverse_heuristic,
        SearchConfig::default().with_max_examined(5),
    );

    let outcome = search.run(0, 4, &mut twoway_core::NullVisitor).unwrap();

    assert!(outcome.stats().stopped_early);
    assert_eq!(search.distance(2, Frontier::Reverse), 2);
    assert_eq!(outcome.path(), Some(&[0, 1, 2, 3, 4][..]));
    assert_eq!(outcome.distance(), Some(23));
    assert_eq!(path_weight(&graph, outcome.path().unwrap()), outcome.distance());
    assert_eq!(search.distance(4, Frontier::Forward), 23);
    assert_eq!(search.meeting().map(|meeting| meeting.total), Some(23));
}
