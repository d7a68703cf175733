use serde::Serialize;
use std::fmt;

/// Edge weight. Query algorithms assume weights are non-negative.
pub type Weight = i64;

/// Weight of an edge declared without one
pub const DEFAULT_WEIGHT: Weight = 1;

/// Handle to a node owned by a [`Graph`](crate::graph::Graph).
///
/// Handles are arena indices; two handles compare equal exactly when they
/// name the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A graph vertex wrapping one element value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    id: NodeId,
    elt: T,
}

impl<T> Node<T> {
    pub(crate) fn new(id: NodeId, elt: T) -> Self {
        Self { id, elt }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn elt(&self) -> &T {
        &self.elt
    }
}

/// A directed, weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    weight: Weight,
}

impl Edge {
    pub(crate) fn new(from: NodeId, to: NodeId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    pub fn from_node(&self) -> NodeId {
        self.from
    }

    pub fn to_node(&self) -> NodeId {
        self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

/// Tentative or final shortest-path distance.
///
/// Every finite distance orders below `Infinite`, which is the
/// "unreachable" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(Weight),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }
}

/// Sums that leave the `Weight` range saturate to `Infinite`
impl std::ops::Add<Weight> for Distance {
    type Output = Self;

    fn add(self, weight: Weight) -> Self {
        match self {
            Distance::Finite(d) => d
                .checked_add(weight)
                .map_or(Distance::Infinite, Distance::Finite),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => f.write_str("Infinity"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_i64(*d),
            Distance::Infinite => serializer.serialize_str("Infinity"),
        }
    }
}

/// Result of measuring a named walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLength {
    Distance(Weight),
    NoSuchRoute,
}

impl RouteLength {
    pub fn distance(&self) -> Option<Weight> {
        match self {
            RouteLength::Distance(d) => Some(*d),
            RouteLength::NoSuchRoute => None,
        }
    }
}

impl fmt::Display for RouteLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteLength::Distance(d) => write!(f, "{}", d),
            RouteLength::NoSuchRoute => f.write_str("NO SUCH ROUTE"),
        }
    }
}

impl Serialize for RouteLength {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RouteLength::Distance(d) => serializer.serialize_i64(*d),
            RouteLength::NoSuchRoute => serializer.serialize_str("NO SUCH ROUTE"),
        }
    }
}

/// How `num_trips` spends its budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripBudget {
    /// Budget counts edges; walks of exactly that many hops are counted
    #[default]
    Hops,
    /// Budget is a weight allowance; every arrival at the finish with budget
    /// left is counted. `first_call` suppresses the zero-length trip when
    /// start and finish coincide.
    Weight { first_call: bool },
}

impl TripBudget {
    pub fn from_flags(use_weight: bool, first_call: bool) -> Self {
        if use_weight {
            TripBudget::Weight { first_call }
        } else {
            TripBudget::Hops
        }
    }
}

/// A shortest walk reconstructed from the predecessor table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<T> {
    pub distance: Weight,
    pub nodes: Vec<T>,
}
