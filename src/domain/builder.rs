//! Tree builder turning a validated outline into an arena tree.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::domain::arena::{NodeData, TreeArena};
use crate::domain::document::Document;

/// Constructs a tree from a validated document in one pass.
///
/// The most recently created node at each generation is the parent candidate
/// for the next node one level deeper.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    parent_nodes: HashMap<usize, Index>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "debug", skip(self, document))]
    pub fn build(&mut self, document: &Document) -> TreeArena {
        // Reset state for a fresh build
        self.parent_nodes.clear();

        let mut tree = TreeArena::new();
        for line in document.lines() {
            let generation = document.generation(line);
            let parent = generation
                .checked_sub(1)
                .and_then(|g| self.parent_nodes.get(&g).copied());

            let node_data = NodeData {
                name: document.name(line).to_string(),
                generation,
                line_number: line.number,
            };
            let idx = tree.insert_node(node_data, parent);
            self.parent_nodes.insert(generation, idx);
        }

        debug!(nodes = tree.len(), depth = self.parent_nodes.len(), "built tree");
        tree
    }
}
