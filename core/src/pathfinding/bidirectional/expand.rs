use super::BidirectionalSearch;
use crate::cost::CostDomain;
use crate::error::{SearchError, SearchResult};
use crate::graph::{BidirectionalGraph, EdgeWeights};
use crate::heuristic::Heuristic;
use crate::pathfinding::relax::{Relaxation, relax};
use crate::pathfinding::space::slot_of;
use crate::pathfinding::splice::Meeting;
use crate::pathfinding::visitor::SearchVisitor;
use crate::state::{Frontier, VertexId, VertexState};
use std::fmt::Debug;
use std::ops::ControlFlow;

/// `Break` on cancellation, otherwise whether the expanding vertex itself
/// got shorter through an undirected edge.
type Expansion = ControlFlow<(), bool>;

macro_rules! cancel_on_break {
    ($flow:expr) => {
        if $flow.is_break() {
            return Ok(ControlFlow::Break(()));
        }
    };
}

impl<G, W, C, D, HF, HR> BidirectionalSearch<'_, G, W, C, D, HF, HR>
where
    G: BidirectionalGraph,
    W: EdgeWeights<G::Edge, C>,
    C: Copy + Debug,
    D: CostDomain<C> + Clone,
    HF: Heuristic<C>,
    HR: Heuristic<C>,
{
    /// Scans the edges of one popped vertex on behalf of `frontier`.
    pub(super) fn expand<V>(
        &mut self,
        frontier: Frontier,
        edges: impl Iterator<Item = G::Edge>,
        visitor: &mut V,
    ) -> SearchResult<Expansion>
    where
        V: SearchVisitor<G::Edge, C>,
    {
        let mut near_improved = false;

        for edge in edges {
            let source = self.graph.source(edge);
            let target = self.graph.target(edge);
            let far = match frontier {
                Frontier::Reverse => source,
                _ => target,
            };

            let weight = self.weights.weight(edge);
            if self.domain.less(weight, self.domain.zero()) {
                return Err(SearchError::NegativeWeight {
                    from: source,
                    to: target,
                });
            }

            if self.space.is_reached(far, frontier.opposite()) {
                if let Some(meeting) = self.record_meeting(edge, source, target, weight, frontier) {
                    cancel_on_break!(visitor.intersection_found(&meeting));
                }
            }

            cancel_on_break!(visitor.examine_edge(edge, frontier));

            let far_state = self.space.state(far, frontier);
            let relaxation = if far_state.matches(VertexState::UNVISITED) {
                cancel_on_break!(visitor.tree_edge(edge, frontier));
                let relaxation = self.relax_edge(source, target, weight, frontier);
                cancel_on_break!(report(visitor, edge, frontier, relaxation));

                self.space.set_state(far, VertexState::open(frontier));
                self.stats.vertices_discovered += 1;
                cancel_on_break!(visitor.discover_vertex(far, frontier));
                self.queue.push_or_update(slot_of(far, frontier), self.space.cost(far, frontier));
                relaxation
            } else if far_state.matches(VertexState::OPEN) {
                cancel_on_break!(visitor.non_tree_edge(edge, frontier));
                cancel_on_break!(visitor.gray_target(edge, frontier));
                let relaxation = self.relax_edge(source, target, weight, frontier);
                cancel_on_break!(report(visitor, edge, frontier, relaxation));

                if relaxation == Relaxation::ImprovedFar {
                    self.queue
                        .push_or_update(slot_of(far, frontier), self.space.cost(far, frontier));
                }
                relaxation
            } else {
                cancel_on_break!(visitor.non_tree_edge(edge, frontier));
                let relaxation = self.relax_edge(source, target, weight, frontier);
                cancel_on_break!(report(visitor, edge, frontier, relaxation));

                if relaxation == Relaxation::ImprovedFar {
                    cancel_on_break!(visitor.black_target(edge, frontier));
                    // Reopened vertices keep their Closed stage while queued again.
                    self.stats.vertices_reopened += 1;
                    self.queue
                        .push_or_update(slot_of(far, frontier), self.space.cost(far, frontier));
                }
                relaxation
            };

            near_improved |= relaxation == Relaxation::ImprovedNear;
        }

        Ok(ControlFlow::Continue(near_improved))
    }

    fn relax_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: C,
        frontier: Frontier,
    ) -> Relaxation {
        let undirected = self.graph.is_undirected();
        let relaxation = relax(
            &mut self.space,
            frontier,
            source,
            target,
            weight,
            &self.domain,
            undirected,
        );

        let (near, far) = match frontier {
            Frontier::Reverse => (target, source),
            _ => (source, target),
        };
        match relaxation {
            Relaxation::ImprovedFar => self.refresh_cost(far, frontier),
            Relaxation::ImprovedNear => self.refresh_cost(near, frontier),
            Relaxation::Unimproved => {}
        }
        relaxation
    }

    fn refresh_cost(&mut self, vertex: VertexId, frontier: Frontier) {
        let distance = self.space.distance(vertex, frontier);
        let cost = self
            .domain
            .combine(distance, self.estimate(vertex, frontier));
        self.space.set_cost(vertex, frontier, cost);
    }

    /// Keeps the edge as the meeting when it joins the trees more cheaply
    /// than anything seen so far.
    fn record_meeting(
        &mut self,
        edge: G::Edge,
        source: VertexId,
        target: VertexId,
        weight: C,
        frontier: Frontier,
    ) -> Option<Meeting<G::Edge, C>> {
        let forward_distance = self.space.distance(source, Frontier::Forward);
        let reverse_distance = self.space.distance(target, Frontier::Reverse);
        let total = self.domain.combine(
            self.domain.combine(forward_distance, weight),
            reverse_distance,
        );

        if !self.domain.less(total, self.domain.infinity()) {
            return None;
        }
        if let Some(best) = &self.meeting {
            if !self.domain.less(total, best.total) {
                return None;
            }
        }

        let meeting = Meeting {
            edge,
            forward_vertex: source,
            reverse_vertex: target,
            total,
            found_by: frontier,
        };
        tracing::debug!(
            forward_vertex = source,
            reverse_vertex = target,
            ?total,
            "meeting improved"
        );
        self.meeting = Some(meeting);
        self.stats.meetings_improved += 1;
        Some(meeting)
    }
}

fn report<E, C, V: SearchVisitor<E, C>>(
    visitor: &mut V,
    edge: E,
    frontier: Frontier,
    relaxation: Relaxation,
) -> ControlFlow<()> {
    match relaxation {
        Relaxation::ImprovedFar => visitor.edge_relaxed(edge, frontier),
        _ => visitor.edge_not_relaxed(edge, frontier),
    }
}
