//! Infrastructure layer: I/O implementations
//!
//! This layer reads outline input from files or stdin.

pub mod error;
pub mod input;

pub use error::{InfraError, InfraResult};
pub use input::read_input;
