use super::utils::{SearchOutcome, SearchStats, check_vertex, trivial_outcome};
use crate::cost::Cost;
use crate::error::{SearchError, SearchResult};
use crate::graph::{BidirectionalGraph, EdgeWeights};
use crate::heuristic::Heuristic;
use crate::state::VertexId;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};

#[derive(Clone)]
struct AstarNode<C> {
    cost: C,
    vertex: VertexId,
}

impl<C: Cost> PartialEq for AstarNode<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<C: Cost> Eq for AstarNode<C> {}

impl<C: Cost> PartialOrd for AstarNode<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Cost> Ord for AstarNode<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

struct AstarState<C> {
    heap: BinaryHeap<AstarNode<C>>,
    distances: FxHashMap<VertexId, C>,
    parent_map: FxHashMap<VertexId, VertexId>,
    visited: FxHashSet<VertexId>,
}

impl<C: Cost> AstarState<C> {
    fn new(start: VertexId, start_cost: C) -> Self {
        let mut heap = BinaryHeap::new();
        let mut distances = FxHashMap::default();

        heap.push(AstarNode {
            cost: start_cost,
            vertex: start,
        });
        distances.insert(start, C::zero());

        Self {
            heap,
            distances,
            parent_map: FxHashMap::default(),
            visited: FxHashSet::default(),
        }
    }

    fn distance(&self, vertex: VertexId) -> C {
        self.distances
            .get(&vertex)
            .copied()
            .unwrap_or_else(C::infinity)
    }

    fn visit_neighbor(&mut self, neighbor: VertexId, current: VertexId, weight: C, estimate: C) {
        let new_distance = self.distance(current).closed_add(weight);
        if new_distance >= self.distance(neighbor) {
            return;
        }

        // Closed vertices are reopened when a shorter route shows up.
        self.visited.remove(&neighbor);
        self.distances.insert(neighbor, new_distance);
        self.parent_map.insert(neighbor, current);
        self.heap.push(AstarNode {
            cost: new_distance.closed_add(estimate),
            vertex: neighbor,
        });
    }

    fn reconstruct_path(
        &self,
        start: VertexId,
        target: VertexId,
        bound: usize,
    ) -> SearchResult<Vec<VertexId>> {
        let mut path = vec![target];
        let mut current_vertex = target;

        while current_vertex != start {
            let parent = self.parent_map.get(&current_vertex).copied();
            match parent {
                Some(parent) if path.len() < bound => {
                    path.push(parent);
                    current_vertex = parent;
                }
                _ => {
                    return Err(SearchError::PredecessorCorruption {
                        vertex: current_vertex,
                        bound,
                    });
                }
            }
        }

        path.reverse();
        Ok(path)
    }
}

/// One-way A* from `source`, stopping when `target` leaves the heap.
pub fn astar_search<G, W, C, H>(
    graph: &G,
    weights: &W,
    source: VertexId,
    target: VertexId,
    heuristic: H,
) -> SearchResult<SearchOutcome<C>>
where
    G: BidirectionalGraph,
    W: EdgeWeights<G::Edge, C>,
    C: Cost,
    H: Heuristic<C>,
{
    let num_vertices = graph.num_vertices();
    check_vertex(source, num_vertices)?;
    check_vertex(target, num_vertices)?;

    if source == target {
        return Ok(trivial_outcome(source, C::zero()));
    }

    let search_timer = Instant::now();
    let mut astar_state = AstarState::new(source, heuristic.estimate(source));
    let mut stats = SearchStats::default();

    while let Some(AstarNode {
        vertex: current_vertex,
        ..
    }) = astar_state.heap.pop()
    {
        if current_vertex == target {
            let path = astar_state.reconstruct_path(source, target, num_vertices)?;
            stats.vertices_examined = astar_state.visited.len();
            stats.vertices_discovered = astar_state.distances.len();
            stats.elapsed_secs = search_timer.elapsed().as_secs_f64();
            return Ok(SearchOutcome::Found {
                path,
                distance: astar_state.distance(target),
                stats,
            });
        }

        if !astar_state.visited.insert(current_vertex) {
            continue;
        }

        for edge in graph.out_edges(current_vertex) {
            let weight = weights.weight(edge);
            let neighbor = graph.target(edge);
            if weight < C::zero() {
                return Err(SearchError::NegativeWeight {
                    from: current_vertex,
                    to: neighbor,
                });
            }

            astar_state.visit_neighbor(
                neighbor,
                current_vertex,
                weight,
                heuristic.estimate(neighbor),
            );
        }
    }

    stats.vertices_examined = astar_state.visited.len();
    stats.vertices_discovered = astar_state.distances.len();
    stats.elapsed_secs = search_timer.elapsed().as_secs_f64();
    Ok(SearchOutcome::NoPath { stats })
}
