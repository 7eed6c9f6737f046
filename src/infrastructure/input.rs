//! Outline input from a file or stdin.

use std::io::{self, Read};
use std::path::Path;

use tracing::{debug, instrument};

use crate::infrastructure::{InfraError, InfraResult};

/// Read the whole outline; `None` or `-` reads stdin.
#[instrument(level = "debug")]
pub fn read_input(path: Option<&Path>) -> InfraResult<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            if !p.exists() {
                return Err(InfraError::NotFound(p.to_path_buf()));
            }
            let content = std::fs::read_to_string(p)
                .map_err(|e| InfraError::io(format!("read {}", p.display()), e))?;
            debug!(bytes = content.len(), "read {}", p.display());
            Ok(content)
        }
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| InfraError::io("read stdin", e))?;
            debug!(bytes = content.len(), "read stdin");
            Ok(content)
        }
    }
}
