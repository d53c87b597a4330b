pub mod graphs;

use spf::concepts::graph::{Graph, NodeId};
use spf::table::{ForwardingRow, ForwardingTable};

/// Looks a node up by its display label.
pub fn node(graph: &Graph, label: &str) -> NodeId {
    graph
        .nodes()
        .iter()
        .find(|n| n.label == label)
        .unwrap_or_else(|| panic!("No node labelled {label} found"))
        .id
}

fn row<'t>(graph: &Graph, table: &'t ForwardingTable, dest: &str) -> &'t ForwardingRow {
    let id = node(graph, dest);
    table
        .rows
        .iter()
        .find(|r| r.destination == id)
        .unwrap_or_else(|| panic!("No row for destination {dest}"))
}

/// Next-hop label for a destination, "--" when unreachable.
pub fn next_hop(graph: &Graph, table: &ForwardingTable, dest: &str) -> String {
    match row(graph, table, dest).next_hop {
        Some(hop) => graph
            .label(hop)
            .unwrap_or_else(|| panic!("Next hop {hop} is not in the graph"))
            .to_string(),
        None => "--".to_string(),
    }
}

/// Path cost for a destination, `None` when unreachable.
pub fn cost(graph: &Graph, table: &ForwardingTable, dest: &str) -> Option<u64> {
    row(graph, table, dest).cost
}
