//! Indentation unit detection and depth counting.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};

const SPACES: &str = "    ";

/// The fixed leading token denoting one level of nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentUnit {
    /// One to four spaces
    Spaces(u8),
    /// A single tab
    Tab,
}

fn indent_regex() -> &'static Regex {
    static INDENT_REGEX: OnceLock<Regex> = OnceLock::new();
    INDENT_REGEX.get_or_init(|| Regex::new(r"^( {1,4}|\t)\S").expect("valid indent regex"))
}

impl IndentUnit {
    /// Finds the unit from the first line carrying leading indentation.
    ///
    /// A line qualifies when one to four spaces, or a single tab, are immediately
    /// followed by a non-whitespace character.
    #[instrument(level = "trace", skip(lines))]
    pub fn detect<'a, I>(lines: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            let Some(caps) = indent_regex().captures(line) else {
                continue;
            };
            let token = &caps[1];
            let unit = if token == "\t" {
                IndentUnit::Tab
            } else {
                IndentUnit::Spaces(token.len() as u8)
            };
            tracing::debug!(?unit, "detected indent unit");
            return Ok(unit);
        }
        Err(DomainError::NoIndentation)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndentUnit::Spaces(n) => &SPACES[..usize::from(*n)],
            IndentUnit::Tab => "\t",
        }
    }

    pub fn character(&self) -> char {
        match self {
            IndentUnit::Spaces(_) => ' ',
            IndentUnit::Tab => '\t',
        }
    }

    pub fn width(&self) -> usize {
        self.as_str().len()
    }

    /// Human readable kind: "spaces" or "tabs".
    pub fn kind(&self) -> &'static str {
        match self {
            IndentUnit::Spaces(_) => "spaces",
            IndentUnit::Tab => "tabs",
        }
    }

    /// Number of consecutive units at the start of `line`.
    pub fn depth(&self, line: &str) -> usize {
        let token = self.as_str();
        let mut rest = line;
        let mut depth = 0;
        while let Some(stripped) = rest.strip_prefix(token) {
            rest = stripped;
            depth += 1;
        }
        depth
    }

    /// Removes every leading unit.
    pub fn strip<'a>(&self, line: &'a str) -> &'a str {
        self.strip_n(line, usize::MAX)
    }

    /// Removes at most `n` leading units.
    pub fn strip_n<'a>(&self, line: &'a str, n: usize) -> &'a str {
        let token = self.as_str();
        let mut rest = line;
        for _ in 0..n {
            match rest.strip_prefix(token) {
                Some(stripped) => rest = stripped,
                None => break,
            }
        }
        rest
    }

    /// The unit repeated `generation` times.
    pub fn repeat(&self, generation: usize) -> String {
        self.as_str().repeat(generation)
    }
}

impl fmt::Display for IndentUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.width(), self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec!["root", "  child"], IndentUnit::Spaces(2))]
    #[case(vec!["root", "    child"], IndentUnit::Spaces(4))]
    #[case(vec!["root", " child"], IndentUnit::Spaces(1))]
    #[case(vec!["root", "\tchild"], IndentUnit::Tab)]
    #[case(vec!["root", "     five", "   three"], IndentUnit::Spaces(3))]
    fn given_lines_when_detecting_then_returns_first_unit(
        #[case] lines: Vec<&str>,
        #[case] expected: IndentUnit,
    ) {
        assert_eq!(IndentUnit::detect(lines).unwrap(), expected);
    }

    #[test]
    fn given_flush_lines_when_detecting_then_no_indentation() {
        let result = IndentUnit::detect(vec!["root", "parent", "child"]);
        assert!(matches!(result, Err(DomainError::NoIndentation)));
    }

    #[test]
    fn given_tab_followed_by_space_when_detecting_then_skipped() {
        let result = IndentUnit::detect(vec!["root", "\t child"]);
        assert!(matches!(result, Err(DomainError::NoIndentation)));
    }

    #[test]
    fn given_unit_when_counting_depth_then_counts_leading_repetitions_only() {
        let unit = IndentUnit::Spaces(2);
        assert_eq!(unit.depth("root"), 0);
        assert_eq!(unit.depth("    a b  c"), 2);
        assert_eq!(unit.depth("     a"), 2);
        assert_eq!(IndentUnit::Tab.depth("\t\tx\t"), 2);
    }

    #[test]
    fn given_unit_when_stripping_then_removes_leading_units() {
        let unit = IndentUnit::Spaces(4);
        assert_eq!(unit.strip("        node"), "node");
        assert_eq!(unit.strip("      node"), "  node");
        assert_eq!(unit.strip_n("            node", 1), "        node");
    }

    #[test]
    fn given_unit_when_describing_then_reports_width_and_kind() {
        assert_eq!(IndentUnit::Spaces(4).width(), 4);
        assert_eq!(IndentUnit::Spaces(4).kind(), "spaces");
        assert_eq!(IndentUnit::Tab.kind(), "tabs");
        assert_eq!(IndentUnit::Tab.character(), '\t');
        assert_eq!(IndentUnit::Spaces(2).repeat(3), "      ");
    }
}
