use serde::{Deserialize, Serialize};

pub type VertexId = usize;

/// Which search tree a vertex label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontier {
    #[default]
    None,
    Forward,
    Reverse,
}

impl Frontier {
    pub fn opposite(self) -> Self {
        match self {
            Frontier::Forward => Frontier::Reverse,
            Frontier::Reverse => Frontier::Forward,
            Frontier::None => Frontier::None,
        }
    }

    /// Position of this frontier's labels inside a vertex's pair of slots.
    pub(crate) fn side(self) -> usize {
        match self {
            Frontier::Reverse => 1,
            _ => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Frontier::None => "none",
            Frontier::Forward => "forward",
            Frontier::Reverse => "reverse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    #[default]
    Unvisited,
    Open,
    Closed,
}

/// Frontier membership plus visitation stage of one vertex label.
///
/// The "standard" states carry no frontier; the "compound" ones tag the
/// stage with the tree that reached the vertex. Equality is plain field
/// equality. Use [`same_frontier`], [`same_stage`] or [`VertexState::matches`]
/// when only one of the two fields matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VertexState {
    pub frontier: Frontier,
    pub stage: Stage,
}

impl VertexState {
    pub const UNVISITED: Self = Self::new(Frontier::None, Stage::Unvisited);
    pub const OPEN: Self = Self::new(Frontier::None, Stage::Open);
    pub const CLOSED: Self = Self::new(Frontier::None, Stage::Closed);
    pub const FORWARD_OPEN: Self = Self::new(Frontier::Forward, Stage::Open);
    pub const FORWARD_CLOSED: Self = Self::new(Frontier::Forward, Stage::Closed);
    pub const REVERSE_OPEN: Self = Self::new(Frontier::Reverse, Stage::Open);
    pub const REVERSE_CLOSED: Self = Self::new(Frontier::Reverse, Stage::Closed);

    pub const fn new(frontier: Frontier, stage: Stage) -> Self {
        Self { frontier, stage }
    }

    pub fn open(frontier: Frontier) -> Self {
        Self::new(frontier, Stage::Open)
    }

    pub fn closed(frontier: Frontier) -> Self {
        Self::new(frontier, Stage::Closed)
    }

    /// Pattern for any label owned by `frontier`, whatever its stage.
    pub fn owned_by(frontier: Frontier) -> Self {
        Self::open(frontier)
    }

    pub fn is_reached(&self) -> bool {
        !self.matches(Self::UNVISITED)
    }

    /// Asymmetric match: a pattern carrying a frontier matches on frontier
    /// only, a frontier-less pattern matches on stage only.
    pub fn matches(&self, pattern: VertexState) -> bool {
        if pattern.frontier == Frontier::None {
            same_stage(*self, pattern)
        } else {
            same_frontier(*self, pattern)
        }
    }
}

pub fn same_frontier(a: VertexState, b: VertexState) -> bool {
    a.frontier == b.frontier
}

pub fn same_stage(a: VertexState, b: VertexState) -> bool {
    a.stage == b.stage
}
