use crate::state::VertexId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("negative edge weight on {from} -> {to}")]
    NegativeWeight { from: VertexId, to: VertexId },

    #[error("vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: VertexId, num_vertices: usize },

    #[error("predecessor chain through vertex {vertex} exceeds {bound} steps or loops")]
    PredecessorCorruption { vertex: VertexId, bound: usize },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    InvalidLine { line: usize, message: String },

    #[error("line {line}: missing problem line before data")]
    MissingProblemLine { line: usize },

    #[error("declared {declared} {what} but read {read}")]
    CountMismatch {
        what: &'static str,
        declared: usize,
        read: usize,
    },

    #[error("coordinate file declares {declared} vertices but graph has {expected}")]
    CoordinateMismatch { declared: usize, expected: usize },

    #[error("line {line}: vertex id {id} outside 1..={num_vertices}")]
    VertexOutOfRange {
        line: usize,
        id: u64,
        num_vertices: usize,
    },
}

pub type SearchResult<T> = std::result::Result<T, SearchError>;
pub type ParseResult<T> = std::result::Result<T, ParseError>;
