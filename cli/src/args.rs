use clap::Parser;
use std::path::PathBuf;
use twoway_core::{Algorithm, SearchConfig, Termination};

#[derive(Parser, Debug, Clone)]
#[command(name = "twoway", version)]
#[command(about = "Answer shortest-path queries on DIMACS road networks with two-way search")]
pub struct Args {
    /// DIMACS graph file (`p sp` problem line)
    pub graph: PathBuf,

    /// DIMACS coordinate file (`p aux sp co` problem line)
    pub coordinates: PathBuf,

    /// Query file, or SOURCE TARGET vertex ids. Reads queries from stdin when omitted
    #[arg(value_name = "QUERIES | SOURCE TARGET", num_args = 0..=2)]
    pub query: Vec<String>,

    /// Search algorithm: astar, dijkstra, bfs or unidirectional
    #[arg(short, long, default_value = "astar")]
    pub algorithm: String,

    /// When the two-way search stops: optimal, first-meeting or exhaustive
    #[arg(short, long, default_value = "optimal")]
    pub termination: String,

    /// Stop after examining this many vertices
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub max_examined: Option<usize>,

    /// Run every algorithm on the queries and compare them
    #[arg(short, long)]
    pub compare: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show load info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn algorithm(&self) -> Algorithm {
        Algorithm::from(self.algorithm.as_str())
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(
            Termination::from(self.termination.as_str()),
            self.max_examined,
        )
    }
}
