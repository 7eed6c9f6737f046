//! A parsed outline together with its built tree.

use std::fmt;

use tracing::instrument;

use crate::domain::arena::TreeArena;
use crate::domain::builder::TreeBuilder;
use crate::domain::document::{Document, ParseOptions};
use crate::domain::error::DomainResult;
use crate::domain::render::{Renderer, TreeStyle};

/// Indentation and size overview of an outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub indent_width: usize,
    pub indent_kind: &'static str,
    pub nodes: usize,
    /// Number of levels, root included
    pub depth: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Treeify indent-width: {} indent-character: '{}' nodes: {} depth: {}>",
            self.indent_width, self.indent_kind, self.nodes, self.depth
        )
    }
}

#[derive(Debug)]
pub struct Outline {
    document: Document,
    tree: TreeArena,
}

impl Outline {
    pub fn parse(input: &str) -> DomainResult<Self> {
        Self::parse_with(input, ParseOptions::default())
    }

    #[instrument(level = "debug", skip(input))]
    pub fn parse_with(input: &str, options: ParseOptions) -> DomainResult<Self> {
        let document = Document::parse_with(input, options)?;
        let tree = TreeBuilder::new().build(&document);
        Ok(Self { document, tree })
    }

    pub fn tree(&self) -> &TreeArena {
        &self.tree
    }

    pub fn summary(&self) -> Summary {
        let indent = self.document.indent();
        Summary {
            indent_width: indent.width(),
            indent_kind: indent.kind(),
            nodes: self.tree.len(),
            depth: self.tree.depth(),
        }
    }

    pub fn render(&self, style: TreeStyle) -> String {
        Renderer::new(style).render(&self.tree)
    }

    /// Summary header followed by one entry per node.
    pub fn inspect_nodes(&self) -> String {
        std::iter::once(self.summary().to_string())
            .chain(self.tree.nodes().map(|(_, node)| node.data.to_string()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Summary header followed by the retained raw lines.
    pub fn inspect_lines(&self) -> String {
        std::iter::once(self.summary().to_string())
            .chain(self.document.lines().iter().map(|l| l.text.clone()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
