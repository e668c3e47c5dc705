use serde::{Deserialize, Serialize};

/// When the search loop stops on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Stop once the cheapest queued cost reaches the best meeting total.
    #[default]
    Optimal,
    /// Stop at the first edge joining the two trees.
    FirstMeeting,
    /// Run until both frontiers are exhausted.
    Exhaustive,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::Optimal => "optimal",
            Termination::FirstMeeting => "first_meeting",
            Termination::Exhaustive => "exhaustive",
        }
    }
}

impl From<&str> for Termination {
    fn from(s: &str) -> Self {
        match s.to_lowercase().replace('-', "_").as_str() {
            "first_meeting" | "first" => Termination::FirstMeeting,
            "exhaustive" => Termination::Exhaustive,
            _ => Termination::Optimal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Two-way search guided by coordinate estimates.
    #[default]
    Astar,
    /// Two-way search without estimates.
    Dijkstra,
    /// Two-way search counting hops.
    Bfs,
    /// One-way A* from the source.
    Unidirectional,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Astar => "astar",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Bfs => "bfs",
            Algorithm::Unidirectional => "unidirectional",
        }
    }
}

impl From<&str> for Algorithm {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dijkstra" => Algorithm::Dijkstra,
            "bfs" => Algorithm::Bfs,
            "unidirectional" => Algorithm::Unidirectional,
            _ => Algorithm::Astar,
        }
    }
}

impl From<String> for Algorithm {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

/// Configuration for bidirectional search runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub termination: Termination,
    /// Cancel after examining this many vertices
    pub max_examined: Option<usize>,
}

impl SearchConfig {
    pub fn new(termination: Termination, max_examined: Option<usize>) -> Self {
        Self {
            termination,
            max_examined,
        }
    }

    pub fn with_termination(mut self, termination: Termination) -> Self {
        self.termination = termination;
        self
    }

    pub fn with_max_examined(mut self, limit: usize) -> Self {
        self.max_examined = Some(limit);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            termination: Termination::Optimal,
            max_examined: None,
        }
    }
}
