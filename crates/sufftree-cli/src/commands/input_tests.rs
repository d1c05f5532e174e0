use std::path::PathBuf;

use super::input::{InputError, TextInput, strip_trailing_newline};

fn stripped(text: &str) -> String {
    let mut text = text.to_owned();
    strip_trailing_newline(&mut text);
    text
}

#[test]
fn strips_one_newline() {
    assert_eq!(stripped("abc\n"), "abc");
    assert_eq!(stripped("abc\r\n"), "abc");
    assert_eq!(stripped("abc\n\n"), "abc\n");
    assert_eq!(stripped("abc"), "abc");
    assert_eq!(stripped("abc\r"), "abc\r");
    assert_eq!(stripped(""), "");
}

#[test]
fn inline_text_is_kept_verbatim() {
    let input = TextInput {
        text: Some("abc\n".to_owned()),
        file: None,
    };

    assert_eq!(input.load().unwrap(), "abc\n");
}

#[test]
fn missing_input() {
    let input = TextInput {
        text: None,
        file: None,
    };

    assert!(matches!(input.load(), Err(InputError::Missing)));
}

#[test]
fn unreadable_file() {
    let input = TextInput {
        text: None,
        file: Some(PathBuf::from("/nonexistent/sufftree/input.txt")),
    };

    let err = input.load().unwrap_err();
    assert!(matches!(err, InputError::Read { .. }));
    assert!(
        err.to_string()
            .starts_with("failed to read '/nonexistent/sufftree/input.txt': ")
    );
}

#[test]
fn builds_tree_from_inline_text() {
    let input = TextInput {
        text: Some("banana".to_owned()),
        file: None,
    };

    let tree = input.build(sufftree::Algorithm::Naive);
    assert_eq!(tree.search_sorted("ana"), vec![1, 3]);
}
