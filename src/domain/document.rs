//! Outline document: blank-line filtering, indent detection and structural validation.

use tracing::{debug, instrument};

use crate::domain::error::{ContextLine, Diagnostic, DomainError, DomainResult};
use crate::domain::indent::IndentUnit;

/// Number of preceding lines attached to a diagnostic by default.
pub const DEFAULT_CONTEXT_LINES: usize = 9;

/// Knobs for parsing an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub context_lines: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
        }
    }
}

/// A retained (non-blank) input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the original input
    pub number: usize,
    pub text: String,
}

/// A validated outline with its indent unit fixed.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<Line>,
    indent: IndentUnit,
}

impl Document {
    pub fn parse(input: &str) -> DomainResult<Self> {
        Self::parse_with(input, ParseOptions::default())
    }

    /// Splits `input` into lines, fixes the indent unit and validates the structure.
    ///
    /// Validation is complete before a `Document` exists: the generation gap pass runs
    /// over all lines, then the consistency pass, then the single root pass.
    #[instrument(level = "debug", skip(input))]
    pub fn parse_with(input: &str, options: ParseOptions) -> DomainResult<Self> {
        let lines: Vec<Line> = input
            .lines()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(idx, text)| Line {
                number: idx + 1,
                text: text.to_string(),
            })
            .collect();
        debug!(lines = lines.len(), "retained non-blank lines");

        let indent = IndentUnit::detect(lines.iter().map(|l| l.text.as_str()))?;
        let document = Self { lines, indent };

        let validator = Validator {
            lines: &document.lines,
            indent,
            options,
        };
        validator.generation_gap()?;
        validator.consistency()?;
        validator.single_root()?;

        Ok(document)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn indent(&self) -> IndentUnit {
        self.indent
    }

    pub fn generation(&self, line: &Line) -> usize {
        self.indent.depth(&line.text)
    }

    /// Line text without its leading indent units.
    pub fn name<'a>(&self, line: &'a Line) -> &'a str {
        self.indent.strip(&line.text)
    }
}

struct Validator<'a> {
    lines: &'a [Line],
    indent: IndentUnit,
    options: ParseOptions,
}

impl Validator<'_> {
    /// Depth may grow by at most one level between adjacent lines.
    #[instrument(level = "trace", skip(self))]
    fn generation_gap(&self) -> DomainResult<()> {
        for (idx, pair) in self.lines.windows(2).enumerate() {
            let previous = self.indent.depth(&pair[0].text);
            let found = self.indent.depth(&pair[1].text);
            if found > previous + 1 {
                let allowed = previous + 1;
                let remainder = self.indent.strip_n(&pair[1].text, allowed);
                return Err(DomainError::GenerationGap {
                    diagnostic: self.diagnostic(idx + 1, allowed, remainder),
                    previous,
                    found,
                });
            }
        }
        Ok(())
    }

    /// After stripping whole units nothing may still start with the indent character.
    #[instrument(level = "trace", skip(self))]
    fn consistency(&self) -> DomainResult<()> {
        let indent_char = self.indent.character();
        for (idx, line) in self.lines.iter().enumerate() {
            let remainder = self.indent.strip(&line.text);
            if remainder.starts_with(indent_char) {
                let generation = self.indent.depth(&line.text);
                return Err(DomainError::MisalignedIndent {
                    diagnostic: self.diagnostic(idx, generation, remainder),
                });
            }
        }
        Ok(())
    }

    /// Exactly one line, the first, sits at generation 0.
    #[instrument(level = "trace", skip(self))]
    fn single_root(&self) -> DomainResult<()> {
        for (idx, line) in self.lines.iter().enumerate() {
            let generation = self.indent.depth(&line.text);
            if idx == 0 && generation != 0 {
                return Err(DomainError::IndentedRoot {
                    diagnostic: self.diagnostic(idx, 0, &line.text),
                });
            }
            if idx > 0 && generation == 0 {
                return Err(DomainError::MultipleRoots {
                    diagnostic: self.diagnostic(idx, 0, &line.text),
                });
            }
        }
        Ok(())
    }

    fn diagnostic(&self, idx: usize, generation: usize, remainder: &str) -> Box<Diagnostic> {
        let line = &self.lines[idx];
        let start = idx.saturating_sub(self.options.context_lines);
        let context = self.lines[start..idx]
            .iter()
            .map(|l| ContextLine {
                number: l.number,
                text: l.text.clone(),
            })
            .collect();

        Box::new(Diagnostic {
            line_number: line.number,
            line: line.text.clone(),
            context,
            indent: self.indent,
            generation,
            remainder: remainder.to_string(),
        })
    }
}
