use super::space::SearchSpace;
use crate::error::{SearchError, SearchResult};
use crate::state::{Frontier, VertexId};
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Cheapest edge seen so far that links the forward tree to the reverse tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Meeting<E, C> {
    #[serde(skip)]
    pub edge: E,
    /// Endpoint on the source side, labelled by the forward tree.
    pub forward_vertex: VertexId,
    /// Endpoint on the target side, labelled by the reverse tree.
    pub reverse_vertex: VertexId,
    pub total: C,
    /// Tree that was expanding when the edge was examined.
    pub found_by: Frontier,
}

/// Joins the reverse tree onto the forward tree across `meeting`.
///
/// Walks the reverse chain from the meeting's target-side endpoint to the
/// target, turning each reverse predecessor link into a forward one. If the
/// reverse chain crosses the forward chain of the meeting (possible with
/// zero-weight cycles) the splice starts at the last shared vertex instead,
/// so the forward map never gains a cycle. The target's forward distance is
/// left to the caller, which weighs the finished path.
pub fn splice<E, C: Copy>(
    space: &mut SearchSpace<C>,
    meeting: &Meeting<E, C>,
    source: VertexId,
    target: VertexId,
) -> SearchResult<()> {
    let forward_chain = collect_chain(space, Frontier::Forward, meeting.forward_vertex, source)?;
    let reverse_chain = collect_chain(space, Frontier::Reverse, meeting.reverse_vertex, target)?;

    let on_forward_chain: FxHashSet<VertexId> = forward_chain.iter().copied().collect();
    let shared = reverse_chain
        .iter()
        .rposition(|vertex| on_forward_chain.contains(vertex));

    let (mut previous, remaining) = match shared {
        Some(index) => (reverse_chain[index], &reverse_chain[index + 1..]),
        None => (meeting.forward_vertex, &reverse_chain[..]),
    };

    for &vertex in remaining {
        space.set_predecessor(vertex, Frontier::Forward, previous);
        previous = vertex;
    }

    Ok(())
}

/// Vertices from `start` up to `root` following `frontier`'s predecessors.
fn collect_chain<C: Copy>(
    space: &SearchSpace<C>,
    frontier: Frontier,
    start: VertexId,
    root: VertexId,
) -> SearchResult<Vec<VertexId>> {
    let bound = space.num_vertices();
    let mut chain = vec![start];
    let mut current = start;

    loop {
        let next = space.predecessor(current, frontier);
        if next == current {
            break;
        }
        if chain.len() >= bound {
            return Err(SearchError::PredecessorCorruption {
                vertex: current,
                bound,
            });
        }
        chain.push(next);
        current = next;
    }

    if current != root {
        return Err(SearchError::PredecessorCorruption {
            vertex: current,
            bound,
        });
    }

    Ok(chain)
}

/// Source-to-target vertex sequence read from the forward predecessor map.
pub fn reconstruct_path<C: Copy>(
    space: &SearchSpace<C>,
    source: VertexId,
    target: VertexId,
) -> SearchResult<Vec<VertexId>> {
    let bound = space.num_vertices();
    let mut seen = FxHashSet::default();
    let mut path = Vec::new();
    let mut current = target;

    while current != source {
        if !seen.insert(current) || path.len() >= bound {
            return Err(SearchError::PredecessorCorruption {
                vertex: current,
                bound,
            });
        }
        path.push(current);

        let parent = space.predecessor(current, Frontier::Forward);
        if parent == current {
            return Err(SearchError::PredecessorCorruption {
                vertex: current,
                bound,
            });
        }
        current = parent;
    }

    path.push(source);
    path.reverse();
    Ok(path)
}
