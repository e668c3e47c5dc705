use crate::state::VertexId;
use std::fmt::Debug;

/// Traversal capability the search engine needs from a graph: both edge
/// directions of every vertex plus the endpoints of each edge handle.
pub trait BidirectionalGraph {
    type Edge: Copy + Debug;

    fn num_vertices(&self) -> usize;

    fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = Self::Edge> + '_;

    fn in_edges(&self, vertex: VertexId) -> impl Iterator<Item = Self::Edge> + '_;

    fn source(&self, edge: Self::Edge) -> VertexId;

    fn target(&self, edge: Self::Edge) -> VertexId;

    /// Undirected graphs let relaxation fall back to the opposite direction.
    fn is_undirected(&self) -> bool {
        false
    }
}

/// Weight lookup for edge handles of type `E`.
pub trait EdgeWeights<E, C> {
    fn weight(&self, edge: E) -> C;
}

impl<E, C, F> EdgeWeights<E, C> for F
where
    F: Fn(E) -> C,
{
    fn weight(&self, edge: E) -> C {
        self(edge)
    }
}

/// Handle to a stored edge, oriented the way it was reached.
///
/// Directed graphs always hand out the stored orientation. Undirected graphs
/// flip the handle so that `source` is the vertex whose edge list produced it
/// (for `out_edges`) or `target` is (for `in_edges`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeRef {
    pub index: usize,
    reversed: bool,
}

#[derive(Debug, Clone)]
struct StoredEdge<W> {
    from: VertexId,
    to: VertexId,
    weight: W,
}

/// In-memory adjacency list keeping outgoing and incoming edge lists per
/// vertex.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W> {
    edges: Vec<StoredEdge<W>>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
    undirected: bool,
}

impl<W: Copy> AdjacencyGraph<W> {
    pub fn directed(num_vertices: usize) -> Self {
        Self::with_vertices(num_vertices, false)
    }

    pub fn undirected(num_vertices: usize) -> Self {
        Self::with_vertices(num_vertices, true)
    }

    fn with_vertices(num_vertices: usize, undirected: bool) -> Self {
        Self {
            edges: Vec::new(),
            outgoing: vec![Vec::new(); num_vertices],
            incoming: vec![Vec::new(); num_vertices],
            undirected,
        }
    }

    pub fn from_edges(
        num_vertices: usize,
        edges: impl IntoIterator<Item = (VertexId, VertexId, W)>,
    ) -> Self {
        let mut graph = Self::directed(num_vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Grows the vertex set when an endpoint lies beyond it.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> EdgeRef {
        let needed = from.max(to) + 1;
        if needed > self.outgoing.len() {
            self.outgoing.resize(needed, Vec::new());
            self.incoming.resize(needed, Vec::new());
        }

        let index = self.edges.len();
        self.edges.push(StoredEdge { from, to, weight });
        self.outgoing[from].push(index);
        self.incoming[to].push(index);

        if self.undirected && from != to {
            self.outgoing[to].push(index);
            self.incoming[from].push(index);
        }

        EdgeRef {
            index,
            reversed: false,
        }
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn weight(&self, edge: EdgeRef) -> W {
        self.edges[edge.index].weight
    }

    /// Stored `(from, to, weight)` triples in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId, W)> + '_ {
        self.edges.iter().map(|edge| (edge.from, edge.to, edge.weight))
    }

    fn oriented(&self, index: usize, vertex: VertexId, as_source: bool) -> EdgeRef {
        let stored = &self.edges[index];
        let reversed = if as_source {
            stored.from != vertex
        } else {
            stored.to != vertex
        };
        EdgeRef {
            index,
            reversed: self.undirected && reversed,
        }
    }
}

impl<W: Copy> BidirectionalGraph for AdjacencyGraph<W> {
    type Edge = EdgeRef;

    fn num_vertices(&self) -> usize {
        self.outgoing.len()
    }

    fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeRef> + '_ {
        self.outgoing[vertex]
            .iter()
            .map(move |&index| self.oriented(index, vertex, true))
    }

    fn in_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeRef> + '_ {
        self.incoming[vertex]
            .iter()
            .map(move |&index| self.oriented(index, vertex, false))
    }

    fn source(&self, edge: EdgeRef) -> VertexId {
        let stored = &self.edges[edge.index];
        if edge.reversed { stored.to } else { stored.from }
    }

    fn target(&self, edge: EdgeRef) -> VertexId {
        let stored = &self.edges[edge.index];
        if edge.reversed { stored.from } else { stored.to }
    }

    fn is_undirected(&self) -> bool {
        self.undirected
    }
}

impl<W: Copy> EdgeWeights<EdgeRef, W> for AdjacencyGraph<W> {
    fn weight(&self, edge: EdgeRef) -> W {
        self.edges[edge.index].weight
    }
}
