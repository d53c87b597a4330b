#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::graph::NodeId;
use crate::feedback::SpfError;
use crate::solver::INF;

/// The result of one single-source run: the best known cost and the
/// predecessor of every node, indexed by node id.
///
/// A fresh tree is produced per run, so the graph itself is never written
/// to and trees rooted at different sources can coexist (or be computed
/// concurrently) without stepping on each other. Predecessor links are
/// plain indices into this tree, valid only together with the graph the
/// run was made against.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpfTree {
    /// the node this tree is rooted at
    pub source: NodeId,
    /// least known cost from the source, [`INF`] when unreachable
    pub cost: Vec<u64>,
    /// previous node on the best path, `None` for the source itself and
    /// for unreachable nodes
    pub predecessor: Vec<Option<NodeId>>,
}

impl SpfTree {
    /// A tree with every cost at [`INF`] and no predecessors, except the
    /// source at cost zero. `source` must index into `node_count` nodes.
    pub fn rooted_at(source: NodeId, node_count: usize) -> Self {
        let mut cost = vec![INF; node_count];
        cost[source.index()] = 0;
        SpfTree {
            source,
            cost,
            predecessor: vec![None; node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.cost.len()
    }

    /// Least cost from the source, [`INF`] when no path exists.
    pub fn cost_to(&self, node: NodeId) -> u64 {
        self.cost.get(node.index()).copied().unwrap_or(INF)
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.cost_to(node) != INF
    }

    /// Walks predecessor links from `destination` back to the source and
    /// returns the path in source-to-destination order, or `None` when the
    /// destination is unreachable. The path for the source itself is just
    /// `[source]`.
    ///
    /// The walk is capped at the node count: a chain longer than that, or
    /// one that breaks off before the source, means the predecessor links
    /// are cyclic or torn and the tree must not be trusted.
    pub fn path_to(&self, destination: NodeId) -> Result<Option<Vec<NodeId>>, SpfError> {
        if destination.index() >= self.node_count() {
            return Err(SpfError::UnknownNode { node: destination });
        }
        if !self.is_reachable(destination) {
            return Ok(None);
        }
        let limit = self.node_count();
        let mut path = vec![destination];
        let mut current = destination;
        while current != self.source {
            let previous = self
                .predecessor
                .get(current.index())
                .copied()
                .flatten()
                .ok_or(SpfError::CorruptPath { destination, limit })?;
            path.push(previous);
            current = previous;
            if path.len() > limit {
                return Err(SpfError::CorruptPath { destination, limit });
            }
        }
        path.reverse();
        Ok(Some(path))
    }
}
