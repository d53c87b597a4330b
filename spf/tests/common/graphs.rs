use spf::concepts::graph::{Graph, NO_LINK};
use spf::concepts::label::Labeling;

/// Four routers A-D. B is A's only exit, and D only gets back into the
/// network over its expensive link to A.
pub fn quad_directed() -> Graph {
    let matrix = vec![
        vec![NO_LINK, 5, NO_LINK, NO_LINK],
        vec![6, NO_LINK, 10, NO_LINK],
        vec![NO_LINK, NO_LINK, NO_LINK, 12],
        vec![112, NO_LINK, NO_LINK, NO_LINK],
    ];
    Graph::from_matrix(&matrix, Labeling::Letters).unwrap()
}

/// Five routers 1-5 with symmetric links. The direct 3-4 link is so
/// expensive that traffic between them goes the long way around.
pub fn weighted_mesh() -> Graph {
    let matrix = vec![
        vec![-1, 2, 1, -1, -1],
        vec![2, -1, 4, 5, -1],
        vec![1, 4, -1, 100, 8],
        vec![-1, 5, 100, -1, 1],
        vec![-1, -1, 8, 1, -1],
    ];
    Graph::from_matrix(&matrix, Labeling::Numbers { start: 1 }).unwrap()
}

/// Three routers where C has no links in either direction.
pub fn with_isolated_router() -> Graph {
    let matrix = vec![
        vec![-1, 3, -1],
        vec![4, -1, -1],
        vec![-1, -1, -1],
    ];
    Graph::from_matrix(&matrix, Labeling::Letters).unwrap()
}

/// A single router with nobody to talk to.
pub fn lone_router() -> Graph {
    Graph::from_matrix(&[vec![-1]], Labeling::Letters).unwrap()
}
