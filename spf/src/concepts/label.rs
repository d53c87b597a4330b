#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::util::letter_label;

/// How routers are named for display.
///
/// A label is assigned by the graph when a node is created and never
/// changes afterwards; it is a display identity, distinct from the node's
/// internal index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Labeling {
    /// sequential capital letters: A, B, ..., Z, AA, AB, ...
    #[default]
    Letters,
    /// sequential integers from a configurable start
    Numbers { start: u32 },
}

impl Labeling {
    /// The label for the node created at `index`.
    pub fn label_for(&self, index: usize) -> String {
        match self {
            Labeling::Letters => letter_label(index),
            Labeling::Numbers { start } => (u64::from(*start) + index as u64).to_string(),
        }
    }
}
