#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::graph::{Graph, NodeId};
use crate::concepts::spt::SpfTree;
use crate::feedback::SpfError;
use crate::solver;

/// One forwarding decision: where traffic for `destination` leaves next,
/// and what the whole path costs.
///
/// `None` in both fields means the destination cannot be reached at all.
/// That is the only soft outcome a row may carry; a row is never emitted
/// with a guessed or partial next hop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForwardingRow {
    pub destination: NodeId,
    pub cost: Option<u64>,
    pub next_hop: Option<NodeId>,
}

/// The forwarding table of one source router: a row per destination in
/// graph order, the source itself excluded. A one-node graph therefore
/// has an empty table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ForwardingTable {
    pub source: NodeId,
    pub rows: Vec<ForwardingRow>,
}

/// Derives the forwarding table for the tree's source.
///
/// The next hop for a destination is the second node on the
/// source-to-destination path, which is the destination itself when it
/// sits one hop away. A corrupt predecessor chain aborts the whole
/// derivation rather than producing a wrong hop.
pub fn build_table(graph: &Graph, tree: &SpfTree) -> Result<ForwardingTable, SpfError> {
    let mut rows = Vec::new();
    for node in graph.nodes() {
        if node.id == tree.source {
            continue;
        }
        let row = match tree.path_to(node.id)? {
            Some(path) => ForwardingRow {
                destination: node.id,
                cost: Some(tree.cost_to(node.id)),
                // the path starts at the source and the destination is a
                // different node, so a second entry must exist
                next_hop: Some(path.get(1).copied().ok_or(SpfError::CorruptPath {
                    destination: node.id,
                    limit: graph.len(),
                })?),
            },
            None => ForwardingRow {
                destination: node.id,
                cost: None,
                next_hop: None,
            },
        };
        rows.push(row);
    }
    Ok(ForwardingTable {
        source: tree.source,
        rows,
    })
}

/// Runs one solve per router, in graph order, and collects every
/// forwarding table. Each run gets its own fresh [`SpfTree`], so no state
/// leaks from one source to the next.
pub fn build_all_tables(graph: &Graph) -> Result<Vec<ForwardingTable>, SpfError> {
    let mut tables = Vec::with_capacity(graph.len());
    for node in graph.nodes() {
        let tree = solver::solve(graph, node.id)?;
        tables.push(build_table(graph, &tree)?);
    }
    Ok(tables)
}
