use super::space::SearchSpace;
use crate::cost::CostDomain;
use crate::state::{Frontier, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// The endpoint away from the expanding vertex got a shorter distance.
    ImprovedFar,
    /// Undirected retry shortened the expanding vertex itself.
    ImprovedNear,
    Unimproved,
}

/// Tries to shorten one endpoint of `source -> target` inside `frontier`'s
/// tree.
///
/// Forward expansion walks the edge as stored, reverse expansion walks it
/// backwards, so `near` is the vertex the frontier is expanding from.
pub fn relax<C, D>(
    space: &mut SearchSpace<C>,
    frontier: Frontier,
    source: VertexId,
    target: VertexId,
    weight: C,
    domain: &D,
    undirected: bool,
) -> Relaxation
where
    C: Copy,
    D: CostDomain<C>,
{
    let (near, far) = match frontier {
        Frontier::Reverse => (target, source),
        _ => (source, target),
    };

    if try_shorten(space, frontier, near, far, weight, domain) {
        return Relaxation::ImprovedFar;
    }

    if undirected && try_shorten(space, frontier, far, near, weight, domain) {
        return Relaxation::ImprovedNear;
    }

    Relaxation::Unimproved
}

fn try_shorten<C, D>(
    space: &mut SearchSpace<C>,
    frontier: Frontier,
    from: VertexId,
    to: VertexId,
    weight: C,
    domain: &D,
) -> bool
where
    C: Copy,
    D: CostDomain<C>,
{
    let candidate = domain.combine(space.distance(from, frontier), weight);
    if !domain.less(candidate, space.distance(to, frontier)) {
        return false;
    }

    space.set_distance(to, frontier, candidate);
    space.set_predecessor(to, frontier, from);
    true
}
