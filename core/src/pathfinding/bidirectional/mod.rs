mod expand;

use super::queue::MutableQueue;
use super::space::{SearchSpace, slot_of, vertex_of};
use super::splice::{Meeting, reconstruct_path, splice};
use super::utils::{SearchOutcome, SearchStats, check_vertex, trivial_outcome};
use super::visitor::{Chain, SearchVisitor, StopPolicy};
use crate::cost::CostDomain;
use crate::error::{SearchError, SearchResult};
use crate::graph::{BidirectionalGraph, EdgeWeights};
use crate::heuristic::Heuristic;
use crate::pathfinding_config::SearchConfig;
use crate::state::{Frontier, VertexId, VertexState};
use std::fmt::Debug;
use std::ops::ControlFlow;
use std::time::Instant;

/// How the visitor loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    Exhausted,
    Cancelled,
}

macro_rules! observe {
    ($flow:expr) => {
        if $flow.is_break() {
            return Ok(LoopOutcome::Cancelled);
        }
    };
}

/// Two-frontier best-first search sharing one queue and one state space.
///
/// All labels live in the search value and stay readable after [`run`]
/// returns, whether the loop ran dry or an observer stopped it.
///
/// [`run`]: BidirectionalSearch::run
pub struct BidirectionalSearch<'g, G, W, C, D, HF, HR>
where
    G: BidirectionalGraph,
{
    graph: &'g G,
    weights: &'g W,
    domain: D,
    forward_heuristic: HF,
    reverse_heuristic: HR,
    config: SearchConfig,
    space: SearchSpace<C>,
    queue: MutableQueue<C, D>,
    meeting: Option<Meeting<G::Edge, C>>,
    stats: SearchStats,
}

impl<'g, G, W, C, D, HF, HR> BidirectionalSearch<'g, G, W, C, D, HF, HR>
where
    G: BidirectionalGraph,
    W: EdgeWeights<G::Edge, C>,
    C: Copy + Debug,
    D: CostDomain<C> + Clone,
    HF: Heuristic<C>,
    HR: Heuristic<C>,
{
    pub fn new(
        graph: &'g G,
        weights: &'g W,
        domain: D,
        forward_heuristic: HF,
        reverse_heuristic: HR,
        config: SearchConfig,
    ) -> Self {
        let num_vertices = graph.num_vertices();
        let infinity = domain.infinity();

        Self {
            graph,
            weights,
            queue: MutableQueue::new(num_vertices * 2, domain.clone()),
            domain,
            forward_heuristic,
            reverse_heuristic,
            config,
            space: SearchSpace::new(num_vertices, infinity),
            meeting: None,
            stats: SearchStats::default(),
        }
    }

    #[tracing::instrument(level = "debug", skip(self, visitor))]
    pub fn run<V>(
        &mut self,
        source: VertexId,
        target: VertexId,
        visitor: &mut V,
    ) -> SearchResult<SearchOutcome<C>>
    where
        V: SearchVisitor<G::Edge, C>,
    {
        let num_vertices = self.graph.num_vertices();
        check_vertex(source, num_vertices)?;
        check_vertex(target, num_vertices)?;

        let search_timer = Instant::now();
        self.reset();

        if source == target {
            let zero = self.domain.zero();
            self.space.set_distance(source, Frontier::Forward, zero);
            self.space.set_distance(source, Frontier::Reverse, zero);
            return Ok(trivial_outcome(source, zero));
        }

        let mut policy = StopPolicy::new(&self.config, self.domain.clone());
        let loop_outcome = {
            let mut observer = Chain::new(&mut policy, visitor);
            self.visit(source, target, &mut observer)?
        };

        self.stats.stopped_early = loop_outcome == LoopOutcome::Cancelled;
        tracing::debug!(
            outcome = ?loop_outcome,
            examined = policy.examined(),
            meetings = self.stats.meetings_improved,
            "search loop finished"
        );

        let outcome = match self.meeting {
            Some(mut meeting) => {
                splice(&mut self.space, &meeting, source, target)?;
                let path = reconstruct_path(&self.space, source, target)?;
                // Chains can shorten after the meeting was recorded when the
                // loop is cut off, so the distance is read off the spliced path.
                let distance = self.path_distance(&path)?;
                self.space.set_distance(target, Frontier::Forward, distance);
                meeting.total = distance;
                self.meeting = Some(meeting);
                self.stats.elapsed_secs = search_timer.elapsed().as_secs_f64();
                SearchOutcome::Found {
                    path,
                    distance,
                    stats: self.stats,
                }
            }
            None => {
                self.stats.elapsed_secs = search_timer.elapsed().as_secs_f64();
                SearchOutcome::NoPath { stats: self.stats }
            }
        };

        Ok(outcome)
    }

    pub fn distance(&self, vertex: VertexId, frontier: Frontier) -> C {
        self.space.distance(vertex, frontier)
    }

    pub fn cost(&self, vertex: VertexId, frontier: Frontier) -> C {
        self.space.cost(vertex, frontier)
    }

    pub fn state(&self, vertex: VertexId, frontier: Frontier) -> VertexState {
        self.space.state(vertex, frontier)
    }

    pub fn predecessor(&self, vertex: VertexId, frontier: Frontier) -> VertexId {
        self.space.predecessor(vertex, frontier)
    }

    pub fn meeting(&self) -> Option<&Meeting<G::Edge, C>> {
        self.meeting.as_ref()
    }

    pub fn space(&self) -> &SearchSpace<C> {
        &self.space
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn reset(&mut self) {
        self.space = SearchSpace::new(self.graph.num_vertices(), self.domain.infinity());
        self.queue.clear();
        self.meeting = None;
        self.stats = SearchStats::default();
    }

    fn visit<V>(
        &mut self,
        source: VertexId,
        target: VertexId,
        visitor: &mut V,
    ) -> SearchResult<LoopOutcome>
    where
        V: SearchVisitor<G::Edge, C>,
    {
        for vertex in 0..self.graph.num_vertices() {
            observe!(visitor.initialize_vertex(vertex));
        }

        self.open_root(source, Frontier::Forward);
        observe!(visitor.discover_vertex(source, Frontier::Forward));
        self.open_root(target, Frontier::Reverse);
        observe!(visitor.discover_vertex(target, Frontier::Reverse));

        let graph = self.graph;
        while let Some((slot, cost)) = self.queue.pop() {
            let (vertex, frontier) = vertex_of(slot);
            self.stats.vertices_examined += 1;
            tracing::trace!(vertex, frontier = frontier.as_str(), ?cost, "examine");
            observe!(visitor.examine_vertex(vertex, frontier, cost));

            let expanded = match frontier {
                Frontier::Reverse => self.expand(frontier, graph.in_edges(vertex), visitor)?,
                _ => self.expand(frontier, graph.out_edges(vertex), visitor)?,
            };
            let ControlFlow::Continue(near_improved) = expanded else {
                return Ok(LoopOutcome::Cancelled);
            };

            if near_improved {
                self.stats.vertices_reopened += 1;
                self.queue
                    .push_or_update(slot, self.space.cost(vertex, frontier));
            }

            self.space.set_state(vertex, VertexState::closed(frontier));
            observe!(visitor.finish_vertex(vertex, frontier));
        }

        Ok(LoopOutcome::Exhausted)
    }

    /// Weight of `path`, taking the cheapest arc between consecutive vertices.
    fn path_distance(&self, path: &[VertexId]) -> SearchResult<C> {
        let mut distance = self.domain.zero();
        for hop in path.windows(2) {
            let (from, to) = (hop[0], hop[1]);
            let weight = self
                .graph
                .out_edges(from)
                .filter(|&edge| self.graph.target(edge) == to)
                .map(|edge| self.weights.weight(edge))
                .reduce(|best, weight| {
                    if self.domain.less(weight, best) {
                        weight
                    } else {
                        best
                    }
                })
                .ok_or(SearchError::PredecessorCorruption {
                    vertex: to,
                    bound: self.graph.num_vertices(),
                })?;
            distance = self.domain.combine(distance, weight);
        }
        Ok(distance)
    }

    fn open_root(&mut self, root: VertexId, frontier: Frontier) {
        let zero = self.domain.zero();
        let cost = self.domain.combine(zero, self.estimate(root, frontier));

        self.space.set_state(root, VertexState::open(frontier));
        self.space.set_distance(root, frontier, zero);
        self.space.set_cost(root, frontier, cost);
        self.queue.push(slot_of(root, frontier), cost);
    }

    fn estimate(&self, vertex: VertexId, frontier: Frontier) -> C {
        match frontier {
            Frontier::Reverse => self.reverse_heuristic.estimate(vertex),
            _ => self.forward_heuristic.estimate(vertex),
        }
    }
}
