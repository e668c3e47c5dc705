pub mod astar;
pub mod bidirectional;
pub mod queue;
pub mod relax;
pub mod space;
pub mod splice;
pub mod unidirectional;
pub mod utils;
pub mod visitor;

// Re-export the public functions
pub use astar::{bidirectional_astar, bidirectional_bfs, bidirectional_dijkstra};
pub use bidirectional::{BidirectionalSearch, LoopOutcome};
pub use splice::Meeting;
pub use unidirectional::astar_search;
pub use utils::{SearchOutcome, SearchStats};
pub use visitor::{Chain, Flow, NullVisitor, SearchVisitor, StopPolicy};
