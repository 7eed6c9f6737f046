//! Domain layer: outline parsing, tree building and rendering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod document;
pub mod error;
pub mod indent;
pub mod outline;
pub mod render;

pub use arena::{NodeData, TreeArena, TreeNode};
pub use builder::TreeBuilder;
pub use document::{Document, Line, ParseOptions, DEFAULT_CONTEXT_LINES};
pub use error::{ContextLine, Diagnostic, DomainError, DomainResult, ErrorKind};
pub use indent::IndentUnit;
pub use outline::{Outline, Summary};
pub use render::{Renderer, TreeStyle};
