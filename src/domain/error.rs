//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

use crate::domain::indent::IndentUnit;

/// A numbered source line shown as context in a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextLine {
    pub number: usize,
    pub text: String,
}

/// Everything needed to point a human at a broken indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number in the original input
    pub line_number: usize,
    /// The offending line as written
    pub line: String,
    /// Preceding non-blank lines, oldest first
    pub context: Vec<ContextLine>,
    pub indent: IndentUnit,
    /// Number of indent units the caret row is shifted by
    pub generation: usize,
    /// Text following the last valid indent unit
    pub remainder: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "invalid indentation on line {}", self.line_number)?;
        for ctx in &self.context {
            writeln!(f, "{:03}: {}", ctx.number, ctx.text)?;
        }
        writeln!(f, "{:03}: {}", self.line_number, self.line)?;
        write!(
            f,
            "{:03}: {}{}",
            self.line_number,
            self.indent.repeat(self.generation),
            "^".repeat(self.remainder.chars().count())
        )
    }
}

/// Coarse error classes callers usually branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoIndentation,
    StructuralIndentation,
}

/// Domain errors represent outline structure violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("input contains no indentation")]
    NoIndentation,

    #[error("line {} jumps from generation {previous} to {found}\n{diagnostic}", .diagnostic.line_number)]
    GenerationGap {
        diagnostic: Box<Diagnostic>,
        previous: usize,
        found: usize,
    },

    #[error("line {} has a partial indent unit\n{diagnostic}", .diagnostic.line_number)]
    MisalignedIndent { diagnostic: Box<Diagnostic> },

    #[error("root on line {} must not be indented\n{diagnostic}", .diagnostic.line_number)]
    IndentedRoot { diagnostic: Box<Diagnostic> },

    #[error("line {} starts a second root\n{diagnostic}", .diagnostic.line_number)]
    MultipleRoots { diagnostic: Box<Diagnostic> },
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NoIndentation => ErrorKind::NoIndentation,
            DomainError::GenerationGap { .. }
            | DomainError::MisalignedIndent { .. }
            | DomainError::IndentedRoot { .. }
            | DomainError::MultipleRoots { .. } => ErrorKind::StructuralIndentation,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            DomainError::NoIndentation => None,
            DomainError::GenerationGap { diagnostic, .. }
            | DomainError::MisalignedIndent { diagnostic }
            | DomainError::IndentedRoot { diagnostic }
            | DomainError::MultipleRoots { diagnostic } => Some(&**diagnostic),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_diagnostic_when_displayed_then_carets_align_under_remainder() {
        let diagnostic = Diagnostic {
            line_number: 3,
            line: "          child".to_string(),
            context: vec![
                ContextLine {
                    number: 1,
                    text: "root".to_string(),
                },
                ContextLine {
                    number: 2,
                    text: "    parent".to_string(),
                },
            ],
            indent: IndentUnit::Spaces(4),
            generation: 2,
            remainder: "  child".to_string(),
        };

        let expected = "invalid indentation on line 3\n\
                        001: root\n\
                        002:     parent\n\
                        003:           child\n\
                        003:         ^^^^^^^";
        assert_eq!(diagnostic.to_string(), expected);
    }

    #[test]
    fn given_errors_when_classified_then_kind_matches() {
        assert_eq!(DomainError::NoIndentation.kind(), ErrorKind::NoIndentation);
        assert!(DomainError::NoIndentation.diagnostic().is_none());
    }
}
