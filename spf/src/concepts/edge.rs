#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::graph::NodeId;

/// A directed, weighted link, owned by the node it leaves from.
///
/// Edges have no identity of their own: two links with the same endpoints
/// and cost are interchangeable, and parallel links between the same pair
/// of routers are allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// the node this link points at
    pub to: NodeId,
    /// the link cost, lower is better
    pub cost: u32,
}
