use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::concepts::graph::{Graph, NodeId};
use crate::concepts::spt::SpfTree;
use crate::feedback::SpfError;

/// Cost of an unreachable node. Real paths can never get here: link costs
/// are 32-bit and path costs 64-bit, so no sum of links reaches the
/// sentinel and plain addition is safe.
pub const INF: u64 = u64::MAX;

/// One candidate cost for one node in the frontier.
///
/// Ordered by cost first and creation order second, inverted so the
/// standard max-heap pops the smallest entry; the creation-order tie-break
/// makes equal-cost pops, and therefore whole runs, reproducible.
#[derive(Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    cost: u64,
    node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the least-cost path tree from `source` to every node of
/// `graph`.
///
/// The frontier starts with the source alone at cost zero. Each pop takes
/// the cheapest not-yet-finalized node and relaxes its outgoing links; a
/// node whose cost improves is pushed again rather than reprioritized in
/// place, so the heap may hold stale entries. A popped entry whose cost no
/// longer matches the tree is one of those and is skipped, never trusted.
///
/// Nodes with no path from the source keep [`INF`] and no predecessor.
/// The only error is a `source` that does not belong to `graph`.
pub fn solve(graph: &Graph, source: NodeId) -> Result<SpfTree, SpfError> {
    if graph.node(source).is_none() {
        return Err(SpfError::UnknownNode { node: source });
    }
    let mut tree = SpfTree::rooted_at(source, graph.len());
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        cost: 0,
        node: source,
    });

    while let Some(FrontierEntry { cost, node }) = frontier.pop() {
        if cost != tree.cost[node.index()] {
            // stale entry left behind by a later relaxation
            continue;
        }
        for edge in &graph.nodes()[node.index()].edges {
            let alt = cost + u64::from(edge.cost);
            if alt < tree.cost[edge.to.index()] {
                tree.cost[edge.to.index()] = alt;
                tree.predecessor[edge.to.index()] = Some(node);
                frontier.push(FrontierEntry {
                    cost: alt,
                    node: edge.to,
                });
            }
        }
    }

    debug!(
        "spf run from node {source} reached {} of {} nodes",
        tree.cost.iter().filter(|&&c| c != INF).count(),
        graph.len()
    );
    Ok(tree)
}
