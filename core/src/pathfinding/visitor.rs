use super::splice::Meeting;
use crate::cost::CostDomain;
use crate::pathfinding_config::{SearchConfig, Termination};
use crate::state::{Frontier, VertexId};
use std::ops::ControlFlow;

pub type Flow = ControlFlow<()>;

const CONTINUE: Flow = ControlFlow::Continue(());

/// Observer of a bidirectional search. Every hook may stop the search by
/// returning `ControlFlow::Break(())`.
#[allow(unused_variables)]
pub trait SearchVisitor<E, C> {
    fn initialize_vertex(&mut self, vertex: VertexId) -> Flow {
        CONTINUE
    }

    fn discover_vertex(&mut self, vertex: VertexId, frontier: Frontier) -> Flow {
        CONTINUE
    }

    fn examine_vertex(&mut self, vertex: VertexId, frontier: Frontier, cost: C) -> Flow {
        CONTINUE
    }

    fn finish_vertex(&mut self, vertex: VertexId, frontier: Frontier) -> Flow {
        CONTINUE
    }

    fn examine_edge(&mut self, edge: E, frontier: Frontier) -> Flow {
        CONTINUE
    }

    fn tree_edge(&mut self, edge: E, frontier: Frontier) -> Flow {
        CONTINUE
    }

    fn non_tree_edge(&mut self, edge: E, frontier: Frontier) -> Flow {
        CONTINUE
    }

    fn gray_target(&mut self, edge: E, frontier: Frontier) -> Flow {
        CONTINUE
    }

    fn black_target(&mut self, edge: E, frontier: Frontier) -> Flow {
        CONTINUE
    }

    fn edge_relaxed(&mut self, edge: E, frontier: Frontier) -> Flow {
        CONTINUE
    }

    fn edge_not_relaxed(&mut self, edge: E, frontier: Frontier) -> Flow {
        CONTINUE
    }

    fn intersection_found(&mut self, meeting: &Meeting<E, C>) -> Flow {
        CONTINUE
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullVisitor;

impl<E, C> SearchVisitor<E, C> for NullVisitor {}

impl<E, C, V: SearchVisitor<E, C> + ?Sized> SearchVisitor<E, C> for &mut V {
    fn initialize_vertex(&mut self, vertex: VertexId) -> Flow {
        (**self).initialize_vertex(vertex)
    }

    fn discover_vertex(&mut self, vertex: VertexId, frontier: Frontier) -> Flow {
        (**self).discover_vertex(vertex, frontier)
    }

    fn examine_vertex(&mut self, vertex: VertexId, frontier: Frontier, cost: C) -> Flow {
        (**self).examine_vertex(vertex, frontier, cost)
    }

    fn finish_vertex(&mut self, vertex: VertexId, frontier: Frontier) -> Flow {
        (**self).finish_vertex(vertex, frontier)
    }

    fn examine_edge(&mut self, edge: E, frontier: Frontier) -> Flow {
        (**self).examine_edge(edge, frontier)
    }

    fn tree_edge(&mut self, edge: E, frontier: Frontier) -> Flow {
        (**self).tree_edge(edge, frontier)
    }

    fn non_tree_edge(&mut self, edge: E, frontier: Frontier) -> Flow {
        (**self).non_tree_edge(edge, frontier)
    }

    fn gray_target(&mut self, edge: E, frontier: Frontier) -> Flow {
        (**self).gray_target(edge, frontier)
    }

    fn black_target(&mut self, edge: E, frontier: Frontier) -> Flow {
        (**self).black_target(edge, frontier)
    }

    fn edge_relaxed(&mut self, edge: E, frontier: Frontier) -> Flow {
        (**self).edge_relaxed(edge, frontier)
    }

    fn edge_not_relaxed(&mut self, edge: E, frontier: Frontier) -> Flow {
        (**self).edge_not_relaxed(edge, frontier)
    }

    fn intersection_found(&mut self, meeting: &Meeting<E, C>) -> Flow {
        (**self).intersection_found(meeting)
    }
}

/// Runs `first`, then `second` unless `first` already broke.
pub struct Chain<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

macro_rules! chain_hook {
    ($name:ident, $($arg:ident: $ty:ty),*) => {
        fn $name(&mut self, $($arg: $ty),*) -> Flow {
            self.first.$name($($arg),*)?;
            self.second.$name($($arg),*)
        }
    };
}

impl<E: Copy, C: Copy, A, B> SearchVisitor<E, C> for Chain<A, B>
where
    A: SearchVisitor<E, C>,
    B: SearchVisitor<E, C>,
{
    chain_hook!(initialize_vertex, vertex: VertexId);
    chain_hook!(discover_vertex, vertex: VertexId, frontier: Frontier);
    chain_hook!(examine_vertex, vertex: VertexId, frontier: Frontier, cost: C);
    chain_hook!(finish_vertex, vertex: VertexId, frontier: Frontier);
    chain_hook!(examine_edge, edge: E, frontier: Frontier);
    chain_hook!(tree_edge, edge: E, frontier: Frontier);
    chain_hook!(non_tree_edge, edge: E, frontier: Frontier);
    chain_hook!(gray_target, edge: E, frontier: Frontier);
    chain_hook!(black_target, edge: E, frontier: Frontier);
    chain_hook!(edge_relaxed, edge: E, frontier: Frontier);
    chain_hook!(edge_not_relaxed, edge: E, frontier: Frontier);
    chain_hook!(intersection_found, meeting: &Meeting<E, C>);
}

/// Built-in stopping rule selected by [`SearchConfig`].
#[derive(Debug, Clone)]
pub struct StopPolicy<C, D> {
    termination: Termination,
    max_examined: Option<usize>,
    domain: D,
    best_total: Option<C>,
    examined: usize,
}

impl<C: Copy, D: CostDomain<C>> StopPolicy<C, D> {
    pub fn new(config: &SearchConfig, domain: D) -> Self {
        Self {
            termination: config.termination,
            max_examined: config.max_examined,
            domain,
            best_total: None,
            examined: 0,
        }
    }

    pub fn examined(&self) -> usize {
        self.examined
    }
}

impl<E, C: Copy, D: CostDomain<C>> SearchVisitor<E, C> for StopPolicy<C, D> {
    fn examine_vertex(&mut self, _vertex: VertexId, _frontier: Frontier, cost: C) -> Flow {
        self.examined += 1;

        if self.max_examined.is_some_and(|limit| self.examined > limit) {
            return ControlFlow::Break(());
        }

        match (self.termination, self.best_total) {
            (Termination::Optimal, Some(best)) if !self.domain.less(cost, best) => {
                ControlFlow::Break(())
            }
            _ => CONTINUE,
        }
    }

    fn intersection_found(&mut self, meeting: &Meeting<E, C>) -> Flow {
        self.best_total = Some(meeting.total);

        if self.termination == Termination::FirstMeeting {
            return ControlFlow::Break(());
        }
        CONTINUE
    }
}
