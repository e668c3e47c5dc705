use crate::state::{Frontier, VertexId, VertexState};

/// Labels of every vertex as seen from each search root.
///
/// Each vertex owns two slots, one per frontier, so both trees can label the
/// same vertex without overwriting each other's distances or predecessors.
#[derive(Debug, Clone)]
pub struct SearchSpace<C> {
    num_vertices: usize,
    states: Vec<VertexState>,
    distances: Vec<C>,
    costs: Vec<C>,
    predecessors: Vec<VertexId>,
}

pub(crate) fn slot_of(vertex: VertexId, frontier: Frontier) -> usize {
    vertex * 2 + frontier.side()
}

pub(crate) fn vertex_of(slot: usize) -> (VertexId, Frontier) {
    let frontier = if slot % 2 == 0 {
        Frontier::Forward
    } else {
        Frontier::Reverse
    };
    (slot / 2, frontier)
}

impl<C: Copy> SearchSpace<C> {
    pub fn new(num_vertices: usize, infinity: C) -> Self {
        let slots = num_vertices * 2;
        Self {
            num_vertices,
            states: vec![VertexState::UNVISITED; slots],
            distances: vec![infinity; slots],
            costs: vec![infinity; slots],
            predecessors: (0..slots).map(|slot| slot / 2).collect(),
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn state(&self, vertex: VertexId, frontier: Frontier) -> VertexState {
        self.states[slot_of(vertex, frontier)]
    }

    /// Stores a label in the slot of the frontier it carries. Slots that were
    /// never labelled keep [`VertexState::UNVISITED`] and so carry no frontier.
    pub fn set_state(&mut self, vertex: VertexId, state: VertexState) {
        debug_assert!(state.frontier != Frontier::None, "label without a frontier");
        self.states[slot_of(vertex, state.frontier)] = state;
    }

    pub fn distance(&self, vertex: VertexId, frontier: Frontier) -> C {
        self.distances[slot_of(vertex, frontier)]
    }

    pub fn set_distance(&mut self, vertex: VertexId, frontier: Frontier, distance: C) {
        self.distances[slot_of(vertex, frontier)] = distance;
    }

    pub fn cost(&self, vertex: VertexId, frontier: Frontier) -> C {
        self.costs[slot_of(vertex, frontier)]
    }

    pub fn set_cost(&mut self, vertex: VertexId, frontier: Frontier, cost: C) {
        self.costs[slot_of(vertex, frontier)] = cost;
    }

    /// Self-reference means the vertex is a root or was never reached.
    pub fn predecessor(&self, vertex: VertexId, frontier: Frontier) -> VertexId {
        self.predecessors[slot_of(vertex, frontier)]
    }

    pub fn set_predecessor(&mut self, vertex: VertexId, frontier: Frontier, predecessor: VertexId) {
        self.predecessors[slot_of(vertex, frontier)] = predecessor;
    }

    pub fn is_reached(&self, vertex: VertexId, frontier: Frontier) -> bool {
        self.state(vertex, frontier)
            .matches(VertexState::owned_by(frontier))
    }

    /// Vertices labelled by both trees.
    pub fn labelled_by_both(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.num_vertices).filter(|&vertex| {
            self.is_reached(vertex, Frontier::Forward) && self.is_reached(vertex, Frontier::Reverse)
        })
    }
}
