//! Box-drawing renderer for arena trees.

use std::fmt;
use std::str::FromStr;

use generational_arena::Index;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::arena::TreeArena;

/// Glyph set used for connectors and continuation prefixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeStyle {
    #[default]
    Unicode,
    Ascii,
}

struct Glyphs {
    middle_child: &'static str,
    last_child: &'static str,
    middle_parent: &'static str,
    last_parent: &'static str,
}

const UNICODE: Glyphs = Glyphs {
    middle_child: "├── ",
    last_child: "└── ",
    middle_parent: "│   ",
    last_parent: "    ",
};

const ASCII: Glyphs = Glyphs {
    middle_child: "|-- ",
    last_child: "`-- ",
    middle_parent: "|   ",
    last_parent: "    ",
};

impl TreeStyle {
    fn glyphs(self) -> &'static Glyphs {
        match self {
            TreeStyle::Unicode => &UNICODE,
            TreeStyle::Ascii => &ASCII,
        }
    }
}

impl fmt::Display for TreeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeStyle::Unicode => write!(f, "unicode"),
            TreeStyle::Ascii => write!(f, "ascii"),
        }
    }
}

impl FromStr for TreeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unicode" => Ok(TreeStyle::Unicode),
            "ascii" => Ok(TreeStyle::Ascii),
            other => Err(format!("unknown tree style: {other} (expected unicode or ascii)")),
        }
    }
}

/// Renders each node on its own line, prefixed by connectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    style: TreeStyle,
}

impl Renderer {
    pub fn new(style: TreeStyle) -> Self {
        Self { style }
    }

    /// One line for `idx`: ancestor prefixes (outermost first), then connector and name.
    pub fn render_node(&self, tree: &TreeArena, idx: Index) -> String {
        let Some(node) = tree.get_node(idx) else {
            return String::new();
        };
        if node.parent.is_none() {
            return node.data.name.clone();
        }

        let glyphs = self.style.glyphs();
        let connector = if tree.is_last(idx) {
            glyphs.last_child
        } else {
            glyphs.middle_child
        };

        // Root excluded: it has no column of its own
        let prefixes: Vec<&str> = tree
            .ancestors(idx)
            .filter(|(_, ancestor)| ancestor.parent.is_some())
            .map(|(ancestor_idx, _)| {
                if tree.is_last(ancestor_idx) {
                    glyphs.last_parent
                } else {
                    glyphs.middle_parent
                }
            })
            .collect();

        let mut line: String = prefixes.into_iter().rev().collect();
        line.push_str(connector);
        line.push_str(&node.data.name);
        line
    }

    /// The whole diagram, one node per line in creation order.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn render(&self, tree: &TreeArena) -> String {
        tree.nodes()
            .map(|(idx, _)| self.render_node(tree, idx))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
