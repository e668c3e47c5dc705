use crate::error::{SearchError, SearchResult};
use crate::state::VertexId;
use serde::Serialize;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SearchStats {
    pub vertices_examined: usize,
    pub vertices_discovered: usize,
    pub vertices_reopened: usize,
    pub meetings_improved: usize,
    pub stopped_early: bool,
    pub elapsed_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome<C> {
    Found {
        path: Vec<VertexId>,
        distance: C,
        stats: SearchStats,
    },
    NoPath {
        stats: SearchStats,
    },
}

impl<C: Copy> SearchOutcome<C> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn path(&self) -> Option<&[VertexId]> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            SearchOutcome::NoPath { .. } => None,
        }
    }

    pub fn distance(&self) -> Option<C> {
        match self {
            SearchOutcome::Found { distance, .. } => Some(*distance),
            SearchOutcome::NoPath { .. } => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchOutcome::Found { stats, .. } | SearchOutcome::NoPath { stats } => stats,
        }
    }
}

pub(crate) fn check_vertex(vertex: VertexId, num_vertices: usize) -> SearchResult<()> {
    if vertex >= num_vertices {
        return Err(SearchError::VertexOutOfRange {
            vertex,
            num_vertices,
        });
    }
    Ok(())
}

/// Outcome for a query whose source and target coincide.
pub(crate) fn trivial_outcome<C>(vertex: VertexId, zero: C) -> SearchOutcome<C> {
    SearchOutcome::Found {
        path: vec![vertex],
        distance: zero,
        stats: SearchStats::default(),
    }
}
