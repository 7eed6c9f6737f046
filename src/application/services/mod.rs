//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod treeify;

pub use treeify::TreeifyService;
