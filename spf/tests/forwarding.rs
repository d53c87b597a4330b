mod common;

use common::graphs;
use spf::table::{build_all_tables, ForwardingTable};

#[test]
fn quad_directed_tables() {
    let graph = graphs::quad_directed();
    let tables = build_all_tables(&graph).unwrap();
    assert_eq!(tables.len(), 4);

    // at A everything funnels through B
    let at_a = &tables[0];
    assert_eq!(common::cost(&graph, at_a, "B"), Some(5));
    assert_eq!(common::cost(&graph, at_a, "C"), Some(15));
    assert_eq!(common::cost(&graph, at_a, "D"), Some(27));
    assert_eq!(common::next_hop(&graph, at_a, "B"), "B");
    assert_eq!(common::next_hop(&graph, at_a, "C"), "B");
    assert_eq!(common::next_hop(&graph, at_a, "D"), "B");

    // at B the split: A is direct, D goes via C
    let at_b = &tables[1];
    assert_eq!(common::cost(&graph, at_b, "A"), Some(6));
    assert_eq!(common::cost(&graph, at_b, "D"), Some(22));
    assert_eq!(common::next_hop(&graph, at_b, "A"), "A");
    assert_eq!(common::next_hop(&graph, at_b, "D"), "C");

    // at D the only way out is the expensive link back to A
    let at_d = &tables[3];
    assert_eq!(common::cost(&graph, at_d, "A"), Some(112));
    assert_eq!(common::cost(&graph, at_d, "B"), Some(117));
    assert_eq!(common::cost(&graph, at_d, "C"), Some(127));
    assert_eq!(common::next_hop(&graph, at_d, "B"), "A");
}

#[test]
fn weighted_mesh_next_hops() {
    let graph = graphs::weighted_mesh();
    let tables = build_all_tables(&graph).unwrap();

    // at node 1
    let at_1 = &tables[0];
    assert_eq!(common::next_hop(&graph, at_1, "5"), "2");
    assert_eq!(common::cost(&graph, at_1, "5"), Some(8));
    assert_eq!(common::next_hop(&graph, at_1, "3"), "3");

    // at node 3, the direct link to 4 loses to the long way around
    let at_3 = &tables[2];
    assert_eq!(common::next_hop(&graph, at_3, "4"), "1");
    assert_eq!(common::cost(&graph, at_3, "4"), Some(8));
}

#[test]
fn tables_survive_a_json_round_trip() {
    let graph = graphs::quad_directed();
    let tables = build_all_tables(&graph).unwrap();

    let frozen = serde_json::to_string(&tables).unwrap();
    let thawed: Vec<ForwardingTable> = serde_json::from_str(&frozen).unwrap();
    assert_eq!(tables, thawed);
}
