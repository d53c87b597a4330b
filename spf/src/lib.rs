//! spf is an I/O free link-state route computation library.
//!
//! Given a weighted directed graph of routers, [`solver::solve`] computes
//! the least-cost path tree from any source, and [`table::build_all_tables`]
//! turns one tree per router into (destination, cost, next hop) forwarding
//! tables. Getting a topology in and rendering tables out are left entirely
//! to the caller; the crate itself never touches a file, socket or terminal.

pub mod concepts;
pub mod feedback;
pub mod solver;
pub mod table;
pub mod util;
