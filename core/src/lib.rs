pub mod benchmark;
pub mod cost;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod parsing;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod query;
pub mod state;

// Re-export commonly used items
pub use cost::{ClosedPlus, Cost, CostDomain};
pub use error::{ParseError, SearchError};
pub use graph::{AdjacencyGraph, BidirectionalGraph, EdgeRef, EdgeWeights};
pub use heuristic::{Heuristic, ManhattanHeuristic, ZeroHeuristic};
pub use parsing::{DimacsGraph, parse_coordinates, parse_graph, parse_queries};
pub use pathfinding::{
    BidirectionalSearch, Meeting, NullVisitor, SearchOutcome, SearchStats, SearchVisitor,
    astar_search, bidirectional_astar, bidirectional_bfs, bidirectional_dijkstra,
};
pub use pathfinding_config::{Algorithm, SearchConfig, Termination};
pub use query::RoadNetwork;
pub use state::{Frontier, Stage, VertexId, VertexState, same_frontier, same_stage};
