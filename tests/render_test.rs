//! Rendering tests using outline fixtures

use std::path::Path;

use rstest::rstest;

use treeify::domain::{Outline, TreeStyle};
use treeify::util::testing;

fn read_fixture(name: &str) -> String {
    let path = Path::new("tests/resources/outlines").join(name);
    std::fs::read_to_string(&path).expect("read fixture")
}

// ============================================================
// Indentation kind does not affect output
// ============================================================

#[rstest]
#[case("spaced-four.txt")]
#[case("spaced-two.txt")]
#[case("tabbed.txt")]
fn given_fixture_when_rendering_then_matches_expected_output(#[case] fixture: &str) {
    testing::init_test_setup();

    // Arrange
    let input = read_fixture(fixture);
    let expected = read_fixture("output.txt");

    // Act
    let rendered = treeify::render(&input).unwrap();

    // Assert
    assert_eq!(rendered, expected.trim_end_matches('\n'));
}

// ============================================================
// Small scenarios
// ============================================================

#[rstest]
#[case("root\n    child", "root\n└── child")]
#[case("root\n    a\n    b", "root\n├── a\n└── b")]
#[case("root\n\tchild", "root\n└── child")]
#[case("\n\nroot\n  a\n    a1\n  b\n\n", "root\n├── a\n│   └── a1\n└── b")]
#[case("root\n a\n  a1\n   a2\n b", "root\n├── a\n│   └── a1\n│       └── a2\n└── b")]
fn given_outline_when_rendering_then_connectors_match(
    #[case] input: &str,
    #[case] expected: &str,
) {
    assert_eq!(treeify::render(input).unwrap(), expected);
}

#[test]
fn given_depth_decrease_by_several_levels_when_rendering_then_attaches_to_ancestor() {
    let input = "root\n  a\n    b\n      c\n  d";

    let rendered = treeify::render(input).unwrap();

    assert_eq!(rendered, "root\n├── a\n│   └── b\n│       └── c\n└── d");
}

#[test]
fn given_names_with_inner_whitespace_when_rendering_then_names_kept_verbatim() {
    let input = "my root\n    first  child\n    second\tchild";

    let rendered = treeify::render(input).unwrap();

    assert_eq!(rendered, "my root\n├── first  child\n└── second\tchild");
}

#[test]
fn given_ascii_style_when_rendering_fixture_then_same_shape() {
    let outline = Outline::parse(&read_fixture("spaced-four.txt")).unwrap();

    let unicode = outline.render(TreeStyle::Unicode);
    let ascii = outline.render(TreeStyle::Ascii);

    let translated = unicode
        .replace("├── ", "|-- ")
        .replace("└── ", "`-- ")
        .replace("│   ", "|   ");
    assert_eq!(ascii, translated);
}

#[test]
fn given_rendered_output_when_rendered_again_then_not_a_fixed_point() {
    let rendered = treeify::render("root\n  a\n  b").unwrap();

    // Connector glyphs are not indentation, so the diagram is no outline
    assert!(treeify::render(&rendered).is_err());
}
