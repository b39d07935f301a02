// scanner_test.rs - Tokenizer-style use of the multi-pattern scanner.

use ferrex::error::{RegexError, ResourceLimitKind};
use ferrex::regdefs::Options;
use ferrex::regexec::MatchParam;
use ferrex::regsyntax::SyntaxDialect;
use ferrex::scanner::{Scanner, ScannerConfig, ScannerFindOptions, ScannerMatch, Utf16Text};

const NONE: ScannerFindOptions = ScannerFindOptions::NONE;

fn spans(m: &ScannerMatch) -> Vec<(usize, usize)> {
    m.capture_indices.iter().map(|c| (c.start, c.end)).collect()
}

/// Repeatedly takes the next match, the way a grammar engine walks a line.
fn tokenize(scanner: &mut Scanner, text: &str, str_id: Option<u64>) -> Vec<(usize, usize, usize)> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos <= text.len() {
        let found = match str_id {
            Some(id) => scanner.find_next_match_with_id(text, id, pos, NONE),
            None => scanner.find_next_match(text, pos, NONE),
        };
        let Some(m) = found.unwrap() else {
            break;
        };
        let whole = m.capture_indices[0];
        tokens.push((m.index, whole.start, whole.end));
        pos = if whole.end > whole.start { whole.end } else { whole.end + 1 };
    }
    tokens
}

const GRAMMAR: [&str; 4] = ["\\b(?:fn|let|return)\\b", "[A-Za-z_]\\w*", "\\d+", "\"(?:[^\"\\\\]|\\\\.)*\""];

#[test]
fn tokenizes_a_line() {
    let mut scanner = Scanner::new(&GRAMMAR).unwrap();
    let tokens = tokenize(&mut scanner, "let x = \"a\\\"b\" 42", None);
    assert_eq!(tokens, [(0, 0, 3), (1, 4, 5), (3, 8, 14), (2, 15, 17)]);
}

#[test]
fn ties_go_to_the_lower_index() {
    let mut scanner = Scanner::new(&["a", "a+", "b"]).unwrap();
    let m = scanner.find_next_match("baaa", 0, NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (2, vec![(0, 1)]));
    let m = scanner.find_next_match("baaa", 1, NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (0, vec![(1, 2)]));

    let mut scanner = Scanner::new(&["a+", "a"]).unwrap();
    let m = scanner.find_next_match("baaa", 1, NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (0, vec![(1, 4)]));
}

#[test]
fn start_at_and_past_the_end() {
    let mut scanner = Scanner::new(&["$", "x"]).unwrap();
    let m = scanner.find_next_match("abc", 3, NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (0, vec![(3, 3)]));
    assert_eq!(scanner.find_next_match("abc", 4, NONE).unwrap(), None);
    assert_eq!(scanner.find_next_match("", 0, NONE).unwrap().map(|m| m.index), Some(0));
}

#[test]
fn capture_indices_include_unmatched_groups() {
    let mut scanner = Scanner::new(&["(\\w+)(?:=(\\d+))?(;)?"]).unwrap();
    let m = scanner.find_next_match("  key", 0, NONE).unwrap().unwrap();
    assert_eq!(spans(&m), [(2, 5), (2, 5), (0, 0), (0, 0)]);
    assert_eq!(m.capture_indices[0].length, 3);
    assert_eq!(m.capture_indices[2].length, 0);

    let m = scanner.find_next_match("key=10;", 0, NONE).unwrap().unwrap();
    assert_eq!(spans(&m), [(0, 7), (0, 3), (4, 6), (6, 7)]);
}

#[test]
fn find_options() {
    let mut scanner = Scanner::new(&["\\Ax", "x\\z", "\\Gx"]).unwrap();
    let text = "xx";

    let m = scanner.find_next_match(text, 0, NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (0, vec![(0, 1)]));

    let m = scanner.find_next_match(text, 0, ScannerFindOptions::NOT_BEGIN_STRING).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (2, vec![(0, 1)]));

    let m = scanner.find_next_match(text, 1, ScannerFindOptions::NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (1, vec![(1, 2)]));

    let opts = ScannerFindOptions::NOT_END_STRING | ScannerFindOptions::NOT_BEGIN_POSITION;
    assert_eq!(scanner.find_next_match(text, 1, opts).unwrap(), None);
}

#[test]
fn find_option_bits_match_textmate_values() {
    assert_eq!(ScannerFindOptions::NOT_BEGIN_STRING.bits(), 1);
    assert_eq!(ScannerFindOptions::NOT_END_STRING.bits(), 2);
    assert_eq!(ScannerFindOptions::NOT_BEGIN_POSITION.bits(), 4);
    assert_eq!(ScannerFindOptions::from_bits(7), Some(ScannerFindOptions::all()));
}

#[test]
fn utf16_offsets_in_and_out() {
    let text = Utf16Text::new("💻 let ✓ = 1");
    assert_eq!(text.utf16_len(), 12);
    let mut scanner = Scanner::new(&GRAMMAR).unwrap();

    let m = scanner.find_next_match_utf16(&text, 0, NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (0, vec![(3, 6)]));
    let m = scanner.find_next_match_utf16(&text, 6, NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (2, vec![(11, 12)]));
    let m = scanner.find_next_match_utf16_with_id(&text, 9, 6, NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (2, vec![(11, 12)]));
    assert_eq!(scanner.find_next_match_utf16(&text, 12, NONE).unwrap(), None);
}

#[test]
fn long_lines_give_the_same_tokens_with_and_without_an_id() {
    let line = "let alpha = 12; return beta ".repeat(60);
    assert!(line.len() >= 1000);
    let mut plain = Scanner::new(&GRAMMAR).unwrap();
    let mut cached = Scanner::new(&GRAMMAR).unwrap();
    let expected = tokenize(&mut plain, &line, None);
    assert_eq!(expected.len(), 60 * 5);
    assert_eq!(tokenize(&mut cached, &line, Some(1)), expected);
    // a second pass over the same id starts again from zero
    assert_eq!(tokenize(&mut cached, &line, Some(1)), expected);
}

#[test]
fn cache_does_not_leak_between_ids() {
    let mut scanner = Scanner::new(&["z", "\\d"]).unwrap();
    let a = format!("{}z", "-".repeat(1200));
    let b = format!("{}7z", "-".repeat(1100));
    let m = scanner.find_next_match_with_id(&a, 1, 0, NONE).unwrap().unwrap();
    assert_eq!((m.index, m.capture_indices[0].start), (0, 1200));
    let m = scanner.find_next_match_with_id(&b, 2, 0, NONE).unwrap().unwrap();
    assert_eq!((m.index, m.capture_indices[0].start), (1, 1100));
    // same id but different options must search again
    let m = scanner
        .find_next_match_with_id(&b, 2, 0, ScannerFindOptions::NOT_BEGIN_STRING)
        .unwrap()
        .unwrap();
    assert_eq!((m.index, m.capture_indices[0].start), (1, 1100));
}

#[test]
fn search_start_patterns_are_not_cached() {
    let line = format!("{}ab", "a".repeat(1100));
    let mut scanner = Scanner::new(&["\\Ga", "b"]).unwrap();
    for start in [0, 5, 1099] {
        let m = scanner.find_next_match_with_id(&line, 3, start, NONE).unwrap().unwrap();
        assert_eq!((m.index, spans(&m)), (0, vec![(start, start + 1)]));
    }
    let m = scanner.find_next_match_with_id(&line, 3, 1100, NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (0, vec![(1100, 1101)]));
    let m = scanner.find_next_match_with_id(&line, 3, 1101, NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (1, vec![(1101, 1102)]));
}

#[test]
fn config_dialect_and_options() {
    let config = ScannerConfig { options: Options::IGNORECASE, syntax: SyntaxDialect::PerlNg };
    let mut scanner = Scanner::with_config(&["(?<word>ab)\\k<word>", "END"], &config).unwrap();
    let m = scanner.find_next_match("xABab end", 0, NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (0, vec![(1, 5), (1, 3)]));
    let m = scanner.find_next_match("xABab end", 5, NONE).unwrap().unwrap();
    assert_eq!((m.index, spans(&m)), (1, vec![(6, 9)]));
}

#[test]
fn match_param_applies_to_both_paths() {
    let short = format!("{}!", "a".repeat(24));
    let long = format!("{}{short}", " ".repeat(1000));
    let mut scanner = Scanner::new(&["(a+)+b"]).unwrap();
    scanner.set_match_param(MatchParam { retry_limit_in_match: 5_000, ..MatchParam::default() });
    for text in [&short, &long] {
        let err = scanner.find_next_match(text, 0, NONE).unwrap_err();
        assert_eq!(err, RegexError::ResourceLimit(ResourceLimitKind::RetryInMatch));
    }
}

#[test]
fn bad_pattern_fails_construction() {
    let err = Scanner::new(&["a", "[z-a]"]).unwrap_err();
    assert!(matches!(err, RegexError::Syntax { .. }));
}
