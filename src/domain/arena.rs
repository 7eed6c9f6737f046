use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

/// Data payload for tree nodes representing outline entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    /// Line text with its indentation stripped
    pub name: String,
    /// Depth level, 0 for the root
    pub generation: usize,
    /// 1-based line number in the original input
    pub line_number: usize,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}<Node: {} {}>",
            "    ".repeat(self.generation),
            self.generation,
            self.name
        )
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug)]
pub struct TreeNode {
    /// Outline entry for this node
    pub data: NodeData,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in document order
    pub children: Vec<Index>,
}

/// Arena-based tree structure for an outline.
///
/// Parents own their children through the arena; the `parent` index is a
/// non-owning back-reference used for upward traversal while rendering.
#[derive(Debug)]
pub struct TreeArena {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
    /// Node indices in creation order
    order: Vec<Index>,
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            order: Vec::new(),
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: NodeData, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else if self.root.is_none() {
            self.root = Some(node_idx);
        }

        self.order.push(node_idx);
        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All nodes in creation (document) order.
    pub fn nodes(&self) -> impl Iterator<Item = (Index, &TreeNode)> + '_ {
        self.order
            .iter()
            .filter_map(move |&idx| self.arena.get(idx).map(|node| (idx, node)))
    }

    /// Whether the node is the final entry among its parent's children.
    ///
    /// The root counts as last.
    pub fn is_last(&self, idx: Index) -> bool {
        let Some(node) = self.get_node(idx) else {
            return true;
        };
        match node.parent.and_then(|p| self.get_node(p)) {
            Some(parent) => parent.children.last() == Some(&idx),
            None => {
                debug_assert!(
                    node.data.generation == 0,
                    "non-root node without parent: {}",
                    node.data.name
                );
                true
            }
        }
    }

    /// Ancestors of `idx`, nearest first, root included.
    pub fn ancestors(&self, idx: Index) -> Ancestors<'_> {
        let next = self.get_node(idx).and_then(|node| node.parent);
        Ancestors { arena: self, next }
    }

    /// Number of levels, 1 for a lone root and 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }
}

pub struct Ancestors<'a> {
    arena: &'a TreeArena,
    next: Option<Index>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let node = self.arena.get_node(idx)?;
        self.next = node.parent;
        Some((idx, node))
    }
}
