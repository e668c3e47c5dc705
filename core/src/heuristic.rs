use crate::cost::Cost;
use crate::state::VertexId;

/// Lower-bound estimate of the remaining distance from a vertex to the root
/// of the opposite search.
pub trait Heuristic<C> {
    fn estimate(&self, vertex: VertexId) -> C;
}

impl<C, F> Heuristic<C> for F
where
    F: Fn(VertexId) -> C,
{
    fn estimate(&self, vertex: VertexId) -> C {
        self(vertex)
    }
}

/// Turns heuristic search into plain Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<C: Cost> Heuristic<C> for ZeroHeuristic {
    fn estimate(&self, _vertex: VertexId) -> C {
        C::zero()
    }
}

/// Half the Manhattan distance between integer grid coordinates.
///
/// Halving keeps the estimate admissible on road graphs whose arc lengths
/// are at least half the coordinate distance between their endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ManhattanHeuristic<'a> {
    coordinates: &'a [(i64, i64)],
    goal: VertexId,
}

impl<'a> ManhattanHeuristic<'a> {
    pub fn new(coordinates: &'a [(i64, i64)], goal: VertexId) -> Self {
        Self { coordinates, goal }
    }
}

impl Heuristic<i64> for ManhattanHeuristic<'_> {
    fn estimate(&self, vertex: VertexId) -> i64 {
        match (self.coordinates.get(vertex), self.coordinates.get(self.goal)) {
            (Some(&(x, y)), Some(&(goal_x, goal_y))) => {
                ((goal_x - x).abs() + (goal_y - y).abs()) / 2
            }
            _ => 0,
        }
    }
}
