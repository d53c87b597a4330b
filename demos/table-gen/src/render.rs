use spf::concepts::graph::{Graph, NodeId};
use spf::table::ForwardingTable;

/// Prints one source's table in the classic right-aligned three column
/// layout. Unreachable destinations show "--" for both cost and next hop.
pub fn print_table(graph: &Graph, table: &ForwardingTable) {
    println!("Forwarding Table for {}", name(graph, table.source));
    println!("{:>17}{:>17}{:>17}", "To", "Cost", "Next Hop");
    for row in &table.rows {
        let cost = match row.cost {
            Some(c) => c.to_string(),
            None => "--".to_string(),
        };
        let hop = match row.next_hop {
            Some(h) => name(graph, h),
            None => "--".to_string(),
        };
        println!(
            "{:>17}{:>17}{:>17}",
            name(graph, row.destination),
            cost,
            hop
        );
    }
    println!();
}

fn name(graph: &Graph, id: NodeId) -> String {
    graph.label(id).unwrap_or("?").to_string()
}
