use std::fmt::{Display, Formatter};

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::concepts::edge::Edge;
use crate::concepts::label::Labeling;
use crate::feedback::SpfError;

/// Cost matrix entry meaning "no direct link between these two routers".
pub const NO_LINK: i64 = -1;

/// Identity of a node, assigned by its graph at creation. Doubles as the
/// node's position in [`Graph::nodes`], so creation order and iteration
/// order are the same thing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A router in the topology.
///
/// Nodes carry no solve state: costs and predecessors live in a
/// [`SpfTree`](crate::concepts::spt::SpfTree) produced per run, so the
/// topology stays immutable while runs from different sources proceed
/// independently.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    pub id: NodeId,
    /// display name, fixed at creation by the graph's [`Labeling`]
    pub label: String,
    /// outgoing links, in insertion order
    pub edges: Vec<Edge>,
}

/// A weighted directed router graph.
///
/// Topology is append-only: nodes and edges are added while the graph is
/// built and nothing is ever removed or rewritten afterwards.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Graph {
    nodes: Vec<Node>,
    labeling: Labeling,
}

impl Graph {
    pub fn new(labeling: Labeling) -> Self {
        Graph {
            nodes: Vec::new(),
            labeling,
        }
    }

    /// Appends a fresh node, labels it, and returns its identity.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            label: self.labeling.label_for(id.index()),
            edges: Vec::new(),
        });
        id
    }

    /// Appends a directed link from `from` to `to`.
    ///
    /// Parallel links between the same pair are allowed; only the
    /// relaxation comparison decides which of them carries traffic.
    /// Self-loops are accepted too, they just never improve a path.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: u32) -> Result<(), SpfError> {
        if from.index() >= self.nodes.len() {
            return Err(SpfError::UnknownNode { node: from });
        }
        if to.index() >= self.nodes.len() {
            return Err(SpfError::UnknownNode { node: to });
        }
        if from == to {
            warn!(
                "router {} has a link to itself, it will never carry traffic",
                self.nodes[from.index()].label
            );
        }
        self.nodes[from.index()].edges.push(Edge { to, cost });
        Ok(())
    }

    /// Builds a graph from an N x N cost matrix.
    ///
    /// Entry (i, j) is the cost of the directed link from router i to
    /// router j, or [`NO_LINK`] when there is none. The matrix need not be
    /// symmetric, and diagonal entries other than [`NO_LINK`] simply become
    /// self-loops. Any other negative entry rejects the whole matrix.
    pub fn from_matrix(matrix: &[Vec<i64>], labeling: Labeling) -> Result<Self, SpfError> {
        let expected = matrix.len();
        let mut graph = Graph::new(labeling);
        for _ in 0..expected {
            graph.add_node();
        }
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != expected {
                return Err(SpfError::ShapeMismatch {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
            for (j, &entry) in row.iter().enumerate() {
                if entry == NO_LINK {
                    continue;
                }
                let cost = u32::try_from(entry).map_err(|_| SpfError::InvalidCost {
                    from: i,
                    to: j,
                    cost: entry,
                })?;
                graph.add_edge(NodeId(i), NodeId(j), cost)?;
            }
        }
        Ok(graph)
    }

    /// All nodes, in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Display label of a node, if it belongs to this graph.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.index()).map(|n| n.label.as_str())
    }

    pub fn labeling(&self) -> Labeling {
        self.labeling
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
