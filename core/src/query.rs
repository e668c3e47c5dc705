use crate::error::{ParseResult, SearchResult};
use crate::graph::{AdjacencyGraph, BidirectionalGraph};
use crate::heuristic::ManhattanHeuristic;
use crate::parsing::{load_coordinates_file, load_graph_file};
use crate::pathfinding::{
    SearchOutcome, astar_search, bidirectional_astar, bidirectional_bfs, bidirectional_dijkstra,
};
use crate::pathfinding_config::{Algorithm, SearchConfig};
use crate::state::VertexId;
use std::path::Path;

/// Road network as loaded from a DIMACS graph plus coordinate file.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    pub graph: AdjacencyGraph<i64>,
    pub coordinates: Vec<(i64, i64)>,
}

impl RoadNetwork {
    pub fn new(graph: AdjacencyGraph<i64>, coordinates: Vec<(i64, i64)>) -> Self {
        Self { graph, coordinates }
    }

    pub fn load(graph_path: &Path, coordinates_path: &Path) -> ParseResult<Self> {
        let dimacs = load_graph_file(graph_path)?;
        let coordinates = load_coordinates_file(coordinates_path, dimacs.num_vertices)?;
        Ok(Self::new(dimacs.into_adjacency(), coordinates))
    }

    pub fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    /// Answers one query with the chosen algorithm. Hop counts from the
    /// breadth-first variant are reported as distances.
    #[tracing::instrument(level = "debug", skip(self, config))]
    pub fn shortest_path(
        &self,
        algorithm: Algorithm,
        source: VertexId,
        target: VertexId,
        config: &SearchConfig,
    ) -> SearchResult<SearchOutcome<i64>> {
        let graph = &self.graph;
        match algorithm {
            Algorithm::Astar => bidirectional_astar(
                graph,
                graph,
                source,
                target,
                ManhattanHeuristic::new(&self.coordinates, target),
                ManhattanHeuristic::new(&self.coordinates, source),
                config,
            ),
            Algorithm::Dijkstra => bidirectional_dijkstra(graph, graph, source, target, config),
            Algorithm::Bfs => {
                bidirectional_bfs(graph, source, target, config).map(hops_as_distance)
            }
            Algorithm::Unidirectional => astar_search(
                graph,
                graph,
                source,
                target,
                ManhattanHeuristic::new(&self.coordinates, target),
            ),
        }
    }
}

fn hops_as_distance(outcome: SearchOutcome<usize>) -> SearchOutcome<i64> {
    match outcome {
        SearchOutcome::Found {
            path,
            distance,
            stats,
        } => SearchOutcome::Found {
            path,
            distance: i64::try_from(distance).unwrap_or(i64::MAX),
            stats,
        },
        SearchOutcome::NoPath { stats } => SearchOutcome::NoPath { stats },
    }
}
