use std::path::Path;

use wordle_rank::{load_words, parse_words, Word};

#[test]
fn test_parse_quoted_list() {
    let text = r#"["cigar","rebut","sissy"]"#;
    let parsed = parse_words(text);
    assert_eq!(
        parsed,
        vec![
            Word::parse("cigar").unwrap(),
            Word::parse("rebut").unwrap(),
            Word::parse("sissy").unwrap(),
        ]
    );
}

#[test]
fn test_parse_skips_wrong_length_tokens() {
    let text = r#""abcd","hello","toolong""#;
    assert_eq!(parse_words(text), vec![Word::parse("hello").unwrap()]);
}

#[test]
fn test_parse_ignores_unquoted_content() {
    let text = "allowed guesses: \"crane\" and nothing else";
    assert_eq!(parse_words(text), vec![Word::parse("crane").unwrap()]);
}

#[test]
fn test_parse_dangling_quote() {
    let text = "\"crane\" \"abc";
    assert_eq!(parse_words(text), vec![Word::parse("crane").unwrap()]);
}

#[test]
fn test_parse_empty_input() {
    assert!(parse_words("").is_empty());
    assert!(parse_words("no quotes here").is_empty());
}

#[test]
fn test_load_missing_file_is_empty() {
    let parsed = load_words(Path::new("/definitely/not/a/real/wordlist.txt"));
    assert!(parsed.is_empty());
}

#[test]
fn test_word_parse_rejects_bad_lengths() {
    assert!(Word::parse("crane").is_some());
    assert!(Word::parse("cran").is_none());
    assert!(Word::parse("cranes").is_none());
    assert!(Word::parse("").is_none());
}

#[test]
fn test_word_parse_rejects_non_ascii() {
    assert!(Word::parse("crâne").is_none());
}

#[test]
fn test_word_display_round_trip() {
    let word = Word::parse("crane").unwrap();
    assert_eq!(word.to_string(), "crane");
}

#[test]
fn test_word_ordering_is_alphabetical() {
    let mut list = vec![
        Word::parse("zebra").unwrap(),
        Word::parse("apple").unwrap(),
        Word::parse("mango").unwrap(),
    ];
    list.sort();
    assert_eq!(
        list,
        vec![
            Word::parse("apple").unwrap(),
            Word::parse("mango").unwrap(),
            Word::parse("zebra").unwrap(),
        ]
    );
}
