use super::bidirectional::BidirectionalSearch;
use super::utils::SearchOutcome;
use super::visitor::NullVisitor;
use crate::cost::{ClosedPlus, Cost};
use crate::error::SearchResult;
use crate::graph::{BidirectionalGraph, EdgeWeights};
use crate::heuristic::{Heuristic, ZeroHeuristic};
use crate::pathfinding_config::SearchConfig;
use crate::state::VertexId;

/// Bidirectional heuristic search with the default cost domain.
///
/// `forward_heuristic` estimates the distance to `target` and
/// `reverse_heuristic` the distance back to `source`.
pub fn bidirectional_astar<G, W, C, HF, HR>(
    graph: &G,
    weights: &W,
    source: VertexId,
    target: VertexId,
    forward_heuristic: HF,
    reverse_heuristic: HR,
    config: &SearchConfig,
) -> SearchResult<SearchOutcome<C>>
where
    G: BidirectionalGraph,
    W: EdgeWeights<G::Edge, C>,
    C: Cost,
    HF: Heuristic<C>,
    HR: Heuristic<C>,
{
    let mut search = BidirectionalSearch::new(
        graph,
        weights,
        ClosedPlus,
        forward_heuristic,
        reverse_heuristic,
        config.clone(),
    );
    search.run(source, target, &mut NullVisitor)
}

pub fn bidirectional_dijkstra<G, W, C>(
    graph: &G,
    weights: &W,
    source: VertexId,
    target: VertexId,
    config: &SearchConfig,
) -> SearchResult<SearchOutcome<C>>
where
    G: BidirectionalGraph,
    W: EdgeWeights<G::Edge, C>,
    C: Cost,
{
    bidirectional_astar(
        graph,
        weights,
        source,
        target,
        ZeroHeuristic,
        ZeroHeuristic,
        config,
    )
}

/// Hop-count search. Every edge weighs one and equal costs leave the queue
/// in insertion order, so both frontiers grow level by level.
pub fn bidirectional_bfs<G>(
    graph: &G,
    source: VertexId,
    target: VertexId,
    config: &SearchConfig,
) -> SearchResult<SearchOutcome<usize>>
where
    G: BidirectionalGraph,
{
    let unit = |_edge: G::Edge| 1usize;
    bidirectional_dijkstra(graph, &unit, source, target, config)
}
