//! Property-based tests for tree building
//!
//! Documents are generated line by line from indentation, words and trailing
//! whitespace, so the expected texts and block counts can be computed independently
//! of the builder.

use indentree::{compile, Block, BuildOptions, Sequence};
use proptest::prelude::*;

/// One generated line: indentation, content words, trailing whitespace
fn line_strategy() -> impl Strategy<Value = String> {
    (
        "[ \t]{0,6}",
        prop::collection::vec("[a-z:#=]{1,5}", 0..4),
        "[ \t]{0,3}",
    )
        .prop_map(|(indent, words, trailing)| {
            format!("{}{}{}", indent, words.join(" "), trailing)
        })
}

fn document_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..30)
}

/// Every line terminated, so each generated line is exactly one physical line
fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

fn is_blank_line(line: &str) -> bool {
    line.chars().all(|c| c == ' ' || c == '\t')
}

fn expected_text(line: &str, strip: bool) -> &str {
    let text = line.trim_start_matches([' ', '\t']);
    if strip {
        text.trim_end_matches([' ', '\t'])
    } else {
        text
    }
}

fn assert_children_deeper(block: &Block) {
    for child in &block.children {
        assert!(
            child.depth > block.depth,
            "child {:?} at depth {} is not deeper than parent {:?} at depth {}",
            child.text,
            child.depth,
            block.text,
            block.depth
        );
        assert_children_deeper(child);
    }
}

fn options(strip: bool, track_empty_lines: bool) -> BuildOptions {
    BuildOptions::default()
        .with_strip(strip)
        .with_track_empty_lines(track_empty_lines)
}

proptest! {
    #[test]
    fn test_building_never_panics(input in "\\PC*", strip: bool, track: bool) {
        let _ = compile(&input, &options(strip, track));
    }

    #[test]
    fn test_building_handles_raw_control_characters(input in "[ \t\r\na-z]{0,60}") {
        let tree = compile(&input, &BuildOptions::default());
        for (_, block) in tree.walk() {
            prop_assert!(!block.text.starts_with([' ', '\t']));
            prop_assert!(!block.text.contains('\n'));
            prop_assert!(!block.text.contains('\r'));
        }
    }

    #[test]
    fn test_preorder_texts_match_content_lines(
        lines in document_strategy(),
        strip: bool,
        track: bool
    ) {
        let tree = compile(&join_lines(&lines), &options(strip, track));

        let actual: Vec<&str> = tree
            .walk()
            .map(|(_, block)| block.text.as_str())
            .filter(|text| !text.is_empty())
            .collect();
        let expected: Vec<&str> = lines
            .iter()
            .filter(|line| !is_blank_line(line))
            .map(|line| expected_text(line, strip))
            .collect();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn test_one_block_per_retained_line(lines in document_strategy(), track: bool) {
        let tree = compile(&join_lines(&lines), &options(true, track));
        let retained = if track {
            lines.len()
        } else {
            lines.iter().filter(|line| !is_blank_line(line)).count()
        };
        prop_assert_eq!(tree.total_blocks(), retained);
    }

    #[test]
    fn test_children_are_deeper_than_parents(lines in document_strategy(), track: bool) {
        let tree = compile(&join_lines(&lines), &options(true, track));
        for block in &tree {
            assert_children_deeper(block);
        }
    }

    #[test]
    fn test_untracked_blank_lines_change_nothing(lines in document_strategy(), strip: bool) {
        let opts = options(strip, false);
        let content_only: Vec<String> = lines
            .iter()
            .filter(|line| !is_blank_line(line))
            .cloned()
            .collect();

        let tree = compile(&join_lines(&lines), &opts);
        prop_assert!(tree.walk().all(|(_, block)| !block.is_blank()));
        prop_assert_eq!(tree, compile(&join_lines(&content_only), &opts));
    }

    #[test]
    fn test_blank_blocks_share_depth_with_next_sibling(lines in document_strategy()) {
        let tree = compile(&join_lines(&lines), &BuildOptions::default());
        check_blank_siblings(&tree)?;
    }

    #[test]
    fn test_stripped_text_has_no_trailing_whitespace(lines in document_strategy()) {
        let tree = compile(&join_lines(&lines), &options(true, true));
        for (_, block) in tree.walk() {
            prop_assert!(!block.text.ends_with([' ', '\t']), "text {:?}", block.text);
        }
    }
}

/// A blank block is followed in its own sequence by a block at the same depth, or it
/// trails the document at depth 0.
fn check_blank_siblings(sequence: &Sequence) -> Result<(), TestCaseError> {
    let blocks = sequence.blocks();
    for (i, block) in blocks.iter().enumerate() {
        if block.is_blank() {
            match blocks.get(i + 1) {
                Some(next) => prop_assert_eq!(next.depth, block.depth),
                None => prop_assert_eq!(block.depth, 0),
            }
        }
        check_blank_siblings(&block.children)?;
    }
    Ok(())
}
