use thiserror::Error;

use crate::concepts::graph::NodeId;

/// Errors reported by graph construction and the shortest-path pipeline.
#[derive(Error, Debug)]
pub enum SpfError {
    /// A cost matrix entry was negative without being the no-link sentinel,
    /// or too large to be a link cost. The whole graph is rejected.
    #[error("matrix entry ({from}, {to}) = {cost} is not a valid link cost")]
    InvalidCost { from: usize, to: usize, cost: i64 },
    /// The cost matrix is ragged or not N x N.
    #[error("cost matrix row {row} has {found} entries, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The node does not belong to the graph it was used with.
    #[error("node {node} does not belong to this graph")]
    UnknownNode { node: NodeId },
    /// A predecessor walk ran longer than the node count, so the chain
    /// contains a cycle. The tree is corrupt; no forwarding row may be
    /// derived from it.
    #[error("predecessor chain towards node {destination} exceeded {limit} hops")]
    CorruptPath { destination: NodeId, limit: usize },
}
