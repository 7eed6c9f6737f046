//! Validation tests: indentation detection and structural errors

use rstest::rstest;

use treeify::domain::{Document, DomainError, ErrorKind, IndentUnit, ParseOptions};

// ============================================================
// No indentation
// ============================================================

#[rstest]
#[case("root\nparent\nchild")]
#[case("")]
#[case("\n   \n\t\n")]
#[case("root\n      too-wide")]
fn given_no_detectable_indent_when_parsing_then_no_indentation_error(#[case] input: &str) {
    let err = Document::parse(input).unwrap_err();

    assert_eq!(err, DomainError::NoIndentation);
    assert_eq!(err.kind(), ErrorKind::NoIndentation);
}

// ============================================================
// Generation gap
// ============================================================

#[test]
fn given_jump_of_two_levels_when_parsing_then_generation_gap() {
    // Arrange
    let input = "root\n    parent\n            child";

    // Act
    let err = Document::parse(input).unwrap_err();

    // Assert
    assert_eq!(err.kind(), ErrorKind::StructuralIndentation);
    match &err {
        DomainError::GenerationGap {
            diagnostic,
            previous,
            found,
        } => {
            assert_eq!((*previous, *found), (1, 3));
            assert_eq!(diagnostic.line_number, 3);
            assert_eq!(diagnostic.generation, 2);
            assert_eq!(diagnostic.remainder, "    child");
        }
        other => panic!("expected generation gap, got {other:?}"),
    }
}

#[test]
fn given_root_followed_by_grandchild_when_parsing_then_generation_gap() {
    let err = Document::parse("root\n  a\n  b\n      deep").unwrap_err();

    assert!(matches!(err, DomainError::GenerationGap { .. }));
}

#[test]
fn given_gap_when_displaying_then_shows_context_and_carets() {
    let input = "root\n    parent\n\n            child";

    let err = Document::parse(input).unwrap_err();

    let expected = "line 4 jumps from generation 1 to 3\n\
                    invalid indentation on line 4\n\
                    001: root\n\
                    002:     parent\n\
                    004:             child\n\
                    004:         ^^^^^^^^^";
    assert_eq!(err.to_string(), expected);
}

// ============================================================
// Misaligned indent
// ============================================================

#[test]
fn given_six_spaces_in_four_space_document_when_parsing_then_misaligned() {
    // Arrange
    let input = "root\n    parent\n      child";

    // Act
    let err = Document::parse(input).unwrap_err();

    // Assert
    match &err {
        DomainError::MisalignedIndent { diagnostic } => {
            assert_eq!(diagnostic.line_number, 3);
            assert_eq!(diagnostic.generation, 1);
            assert_eq!(diagnostic.remainder, "  child");
            assert_eq!(diagnostic.context.len(), 2);
        }
        other => panic!("expected misaligned indent, got {other:?}"),
    }
}

#[test]
fn given_misaligned_line_when_displaying_then_carets_start_after_whole_units() {
    let err = Document::parse("root\n    parent\n     child").unwrap_err();

    let rendered = err.to_string();

    assert!(rendered.starts_with("line 3 has a partial indent unit\n"));
    assert!(rendered.ends_with("003:      child\n003:     ^^^^^^"));
}

#[test]
fn given_tab_followed_by_space_when_parsing_then_no_indentation() {
    let err = Document::parse("root\n\t child").unwrap_err();

    assert_eq!(err, DomainError::NoIndentation);
}

// ============================================================
// Single root
// ============================================================

#[test]
fn given_second_flush_line_when_parsing_then_multiple_roots() {
    let err = Document::parse("root\n  a\nother").unwrap_err();

    match &err {
        DomainError::MultipleRoots { diagnostic } => {
            assert_eq!(diagnostic.line_number, 3);
            assert_eq!(diagnostic.remainder, "other");
        }
        other => panic!("expected multiple roots, got {other:?}"),
    }
    assert_eq!(err.kind(), ErrorKind::StructuralIndentation);
}

#[test]
fn given_indented_first_line_when_parsing_then_indented_root() {
    let err = Document::parse("  root\n    a").unwrap_err();

    assert!(matches!(err, DomainError::IndentedRoot { .. }));
}

// ============================================================
// Options and accessors
// ============================================================

#[test]
fn given_zero_context_lines_when_failing_then_no_context() {
    let options = ParseOptions { context_lines: 0 };

    let err = Document::parse_with("root\n  a\n   b", options).unwrap_err();

    assert!(err.diagnostic().unwrap().context.is_empty());
}

#[rstest]
#[case("root\n  a", IndentUnit::Spaces(2))]
#[case("root\n   a", IndentUnit::Spaces(3))]
#[case("root\n\ta", IndentUnit::Tab)]
fn given_valid_document_when_parsing_then_indent_fixed(
    #[case] input: &str,
    #[case] expected: IndentUnit,
) {
    let doc = Document::parse(input).unwrap();

    assert_eq!(doc.indent(), expected);
    assert_eq!(doc.lines().len(), 2);
}
