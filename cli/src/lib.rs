pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod logging;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use args::Args;
pub use search::{
    BatchSummary, QueryMode, QueryReport, SearchRequest, execute_search, parse_query_line,
};
pub use utils::{format_number, parse_vertex_id};
