//! treeify: render indentation-delimited outlines as tree diagrams.
//!
//! ```text
//! root              root
//!     a       =>    ├── a
//!         a1        │   └── a1
//!     b             └── b
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{DomainError, DomainResult, Outline, TreeStyle};

/// Render an outline with default settings.
pub fn render(input: &str) -> DomainResult<String> {
    Ok(Outline::parse(input)?.render(TreeStyle::default()))
}
