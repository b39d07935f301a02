// api_test.rs - Integration tests for the idiomatic Rust API.

use ferrex::api::{Regex, RegexBuilder};
use ferrex::error::{ErrorKind, RegexError, ResourceLimitKind};
use ferrex::prelude::*;
use ferrex::regerror::SyntaxErrorKind;
use ferrex::regsyntax::SYNTAX_PERL_NT;

// === Regex::new ===

#[test]
fn simple_pattern() {
    let re = Regex::new(r"\d+").unwrap();
    let m = re.find("abc 123 def").unwrap().unwrap();
    assert_eq!(m.as_str(), Some("123"));
}

#[test]
fn unicode_pattern() {
    let re = Regex::new(r"\p{Hiragana}+").unwrap();
    let m = re.find("hello せかい world").unwrap().unwrap();
    assert_eq!(m.as_str(), Some("せかい"));
    assert_eq!(m.range(), 6..15);
}

#[test]
fn no_match_returns_none() {
    let re = Regex::new(r"xyz").unwrap();
    assert!(re.find("abc").unwrap().is_none());
}

#[test]
fn empty_pattern() {
    let re = Regex::new(r"").unwrap();
    let m = re.find("hello").unwrap().unwrap();
    assert_eq!((m.start(), m.end()), (0, 0));
    assert!(m.is_empty());
}

#[test]
fn invalid_pattern_syntax_error() {
    let err = Regex::new(r"(unclosed").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert!(matches!(
        err,
        RegexError::Syntax { kind: SyntaxErrorKind::EndPatternWithUnmatchedParenthesis, offset: 0 }
    ));
}

#[test]
fn invalid_pattern_reports_offset() {
    let err = Regex::new(r"ab[").unwrap_err();
    assert!(matches!(err, RegexError::Syntax { kind: SyntaxErrorKind::PrematureEndOfCharClass, .. }));
    let err = Regex::new(r"abc)").unwrap_err();
    assert_eq!(err, RegexError::Syntax { kind: SyntaxErrorKind::UnmatchedCloseParenthesis, offset: 3 });
}

#[test]
fn unsupported_feature_is_its_own_kind() {
    let err = Regex::new(r"(?~abc)").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedFeature);
}

// === is_match / find ===

#[test]
fn is_match() {
    let re = Regex::new(r"^\w+@\w+\.com$").unwrap();
    assert!(re.is_match("user@example.com").unwrap());
    assert!(!re.is_match("not an email").unwrap());
}

#[test]
fn find_at_and_search_start_anchor() {
    let re = Regex::new(r"\Gab").unwrap();
    assert!(re.find_at("xxab", 0).unwrap().is_none());
    let m = re.find_at("xxab", 2).unwrap().unwrap();
    assert_eq!(m.range(), 2..4);
}

#[test]
fn match_at_is_anchored() {
    let re = Regex::new(r"\d+").unwrap();
    assert!(re.match_at("ab12", 0).unwrap().is_none());
    assert_eq!(re.match_at("ab12", 2).unwrap().unwrap().as_str(), Some("12"));
}

#[test]
fn find_bytes_with_invalid_utf8_subject() {
    let re = Regex::new(r"b").unwrap();
    let err = re.find_bytes(b"ab\xFFb").unwrap_err();
    assert_eq!(err, RegexError::InvalidEncoding { encoding: Encoding::Utf8, offset: 2 });
    assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
}

#[test]
fn start_past_end_is_an_error() {
    let re = Regex::new(r"a").unwrap();
    let err = re.find_at("abc", 7).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Match);
}

#[test]
fn greedy_and_lazy() {
    let greedy = Regex::new(r"a+").unwrap();
    let lazy = Regex::new(r"a+?").unwrap();
    assert_eq!(greedy.find("aaa").unwrap().unwrap().range(), 0..3);
    assert_eq!(lazy.find("aaa").unwrap().unwrap().range(), 0..1);
}

// === Captures ===

#[test]
fn captures_groups() {
    let re = Regex::new(r"(\d{4})-(\d{2})-(\d{2})").unwrap();
    let caps = re.captures("on 2026-02-12.").unwrap().unwrap();
    assert_eq!(caps.len(), 4);
    assert_eq!(caps.get(0).unwrap().as_str(), Some("2026-02-12"));
    assert_eq!(caps.get(1).unwrap().as_str(), Some("2026"));
    assert_eq!(caps.get(3).unwrap().as_str(), Some("12"));
    assert!(caps.get(4).is_none());
}

#[test]
fn captures_optional_group() {
    let re = Regex::new(r"(a)?(b)").unwrap();
    let caps = re.captures("b").unwrap().unwrap();
    assert!(caps.get(1).is_none());
    assert_eq!(caps.get(2).unwrap().range(), 0..1);
    let groups: Vec<bool> = caps.iter().map(|m| m.is_some()).collect();
    assert_eq!(groups, vec![true, false, true]);
}

#[test]
fn captures_named() {
    let re = Regex::new(r"(?<year>\d{4})-(?<month>\d{2})").unwrap();
    let caps = re.captures("2026-02").unwrap().unwrap();
    assert_eq!(caps.name("year").unwrap().as_str(), Some("2026"));
    assert_eq!(caps.group("month").unwrap().as_str(), Some("02"));
    assert_eq!(caps.group(1usize).unwrap().as_str(), Some("2026"));
    assert!(caps.name("day").is_none());
    assert_eq!(re.captures_len(), 2);
}

#[test]
fn duplicate_names_resolve_to_the_last_matching_group() {
    let re = Regex::new(r"(?<x>a)|(?<x>b)").unwrap();
    let caps = re.captures("b").unwrap().unwrap();
    assert_eq!(caps.region().name_to_group("x"), Some(2));
    assert_eq!(caps.name("x").unwrap().range(), 0..1);
    let caps = re.captures("a").unwrap().unwrap();
    assert_eq!(caps.name("x").unwrap().range(), 0..1);
    assert_eq!(caps.region().name_to_group("x"), Some(1));
}

#[test]
fn region_for_is_idempotent() {
    let re = Regex::new(r"(?<w>\w+) (\w+)").unwrap();
    let caps = re.captures("hello world").unwrap().unwrap();
    let region = caps.region();
    let first = region.region_for("w");
    assert_eq!(first, region.region_for("w"));
    assert_eq!(first, Some(Span::new(0, 5)));
}

#[test]
fn captures_no_match() {
    let re = Regex::new(r"(\d+)").unwrap();
    assert!(re.captures("abc").unwrap().is_none());
}

#[test]
fn capture_history() {
    let re = Regex::new(r"(?@\d)+").unwrap();
    let caps = re.captures("123").unwrap().unwrap();
    let root = caps.history().unwrap();
    assert_eq!(root.children.len(), 3);
    assert_eq!((root.children[2].start, root.children[2].end), (2, 3));
}

// === Iterators ===

#[test]
fn find_iter_multiple() {
    let re = Regex::new(r"\d+").unwrap();
    let found: Vec<&str> = re
        .find_iter("a1b22c333")
        .map(|m| m.unwrap().as_str().unwrap())
        .collect();
    assert_eq!(found, vec!["1", "22", "333"]);
}

#[test]
fn find_iter_no_matches() {
    let re = Regex::new(r"\d+").unwrap();
    assert_eq!(re.find_iter("abc").count(), 0);
}

#[test]
fn find_iter_empty_matches() {
    let re = Regex::new(r"").unwrap();
    let starts: Vec<usize> = re.find_iter("abc").map(|m| m.unwrap().start()).collect();
    assert_eq!(starts, vec![0, 1, 2, 3]);
    let re = Regex::new(r"x*").unwrap();
    let spans: Vec<_> = re.find_iter("axxb").map(|m| m.unwrap().range()).collect();
    assert_eq!(spans, vec![0..0, 1..3, 3..3, 4..4]);
}

#[test]
fn find_iter_steps_over_multibyte_characters() {
    let re = Regex::new(r"").unwrap();
    let starts: Vec<usize> = re.find_iter("あい").map(|m| m.unwrap().start()).collect();
    assert_eq!(starts, vec![0, 3, 6]);
}

#[test]
fn find_iter_stops_after_an_error() {
    let re = Regex::new(r"a").unwrap();
    let mut it = re.find_iter_bytes(b"aa\xFF");
    assert!(it.next().unwrap().is_err());
    assert!(it.next().is_none());
}

#[test]
fn captures_iter() {
    let re = Regex::new(r"(\w)=(\d)").unwrap();
    let pairs: Vec<(String, String)> = re
        .captures_iter("a=1, b=2")
        .map(|c| {
            let c = c.unwrap();
            (c.get(1).unwrap().as_str().unwrap().to_owned(), c.get(2).unwrap().as_str().unwrap().to_owned())
        })
        .collect();
    assert_eq!(pairs, vec![("a".into(), "1".into()), ("b".into(), "2".into())]);
}

// === Builder ===

#[test]
fn builder_case_insensitive() {
    let re = Regex::builder(r"hello").case_insensitive(true).build().unwrap();
    assert!(re.is_match("HeLLo").unwrap());
}

#[test]
fn builder_dot_matches_newline() {
    let re = Regex::builder(r"a.b").build().unwrap();
    assert!(!re.is_match("a\nb").unwrap());
    let re = Regex::builder(r"a.b").dot_matches_newline(true).build().unwrap();
    assert!(re.is_match("a\nb").unwrap());
}

#[test]
fn builder_extended_mode() {
    let re = Regex::builder(r"\d{3} - \d{4}  # phone").extended(true).build().unwrap();
    assert!(re.is_match("555-1234").unwrap());
}

#[test]
fn builder_single_line() {
    let re = Regex::builder(r"a$").single_line(true).build().unwrap();
    assert!(!re.is_match("a\nb").unwrap());
}

#[test]
fn builder_find_longest() {
    let re = Regex::builder(r"a|ab|abc").find_longest(true).build().unwrap();
    assert_eq!(re.find("abc").unwrap().unwrap().range(), 0..3);
}

#[test]
fn builder_dialect_and_syntax() {
    let re = Regex::builder(r"(?P<n>a)(?P=n)").dialect(SyntaxDialect::Python).build().unwrap();
    assert!(re.is_match("aa").unwrap());
    assert!(Regex::new(r"(?P<n>a)").is_err());
    let re = RegexBuilder::new(r"(a)(?-1)").syntax(&SYNTAX_PERL_NT).build().unwrap();
    assert!(re.is_match("aa").unwrap());
}

#[test]
fn builder_encoding() {
    let subject: Vec<u8> = "xé".encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
    let pattern: Vec<u8> = "é".encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
    let re = RegexBuilder::from_bytes(&pattern).encoding(Encoding::Utf16Le).build().unwrap();
    assert_eq!(re.encoding(), Encoding::Utf16Le);
    let m = re.find_bytes(&subject).unwrap().unwrap();
    assert_eq!(m.range(), 2..4);
    assert!(m.as_str().is_none());
}

#[test]
fn builder_retry_limit() {
    let re = Regex::builder(r"(a+)+b").retry_limit_in_match(1_000).build().unwrap();
    let err = re.is_match("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa!").unwrap_err();
    assert_eq!(err, RegexError::ResourceLimit(ResourceLimitKind::RetryInMatch));
}

#[test]
fn builder_capture_limit() {
    let err = Regex::builder(r"(a)(b)(c)").capture_limit(2).build().unwrap_err();
    assert_eq!(err, RegexError::ResourceLimit(ResourceLimitKind::CaptureCount));
}

#[test]
fn builder_options() {
    let re = Regex::builder(r"(a)(b)").options(Options::DONT_CAPTURE_GROUP).build().unwrap();
    assert_eq!(re.captures_len(), 0);
}

// === Errors and traits ===

#[test]
fn error_display() {
    let err = Regex::new(r"[b-a]").unwrap_err();
    let text = err.to_string();
    assert!(text.contains("offset"), "{text}");
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    let err = Regex::new(r"(").unwrap_err();
    assert_error(&err);
}

#[test]
fn regex_is_send_sync_and_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Regex>();

    let re = std::sync::Arc::new(Regex::new(r"\w+").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let re = re.clone();
            std::thread::spawn(move || {
                let text = format!("{} word{i}", "-".repeat(i));
                re.find(&text).unwrap().unwrap().range()
            })
        })
        .collect();
    let spans: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(spans, vec![1..6, 2..7, 3..8, 4..9]);
}

#[test]
fn repeated_searches_are_deterministic() {
    let re = Regex::new(r"(?i)(\w+)\s+\1").unwrap();
    let first = re.captures("Hello hello world").unwrap().unwrap().into_region();
    for _ in 0..10 {
        let again = re.captures("Hello hello world").unwrap().unwrap().into_region();
        assert_eq!(first, again);
    }
}

#[test]
fn region_serializes_with_names() {
    let re = Regex::new(r"(?<k>\w+)=(?<v>\d+)").unwrap();
    let region = re.captures("x=42").unwrap().unwrap().into_region();
    let json = serde_json::to_string(&region).unwrap();
    let back: Region = serde_json::from_str(&json).unwrap();
    assert_eq!(back, region);
    assert_eq!(back.region_for("v"), Some(Span::new(2, 4)));
}

#[test]
fn region_deserialize_keeps_offsets_valid() {
    let re = Regex::new(r"(\w)(\d)?").unwrap();
    let region = re.captures("x").unwrap().unwrap().into_region();
    let json = serde_json::to_value(&region).unwrap();

    let mut empty = json.clone();
    empty["spans"] = serde_json::json!([]);
    assert!(serde_json::from_value::<Region>(empty).is_err());

    let mut inverted = json;
    inverted["spans"][1] = serde_json::json!({"start": 5, "end": 2});
    assert!(serde_json::from_value::<Region>(inverted).is_err());
}

#[test]
fn dialect_serializes_by_name() {
    let json = serde_json::to_string(&SyntaxDialect::PosixExtended).unwrap();
    assert_eq!(json, "\"PosixExtended\"");
    let back: SyntaxDialect = serde_json::from_str(&json).unwrap();
    assert_eq!(back, SyntaxDialect::PosixExtended);
}

#[test]
fn debug_impls() {
    let re = Regex::new(r"a(b)").unwrap();
    assert!(format!("{re:?}").contains("a(b)"));
    let caps = re.captures("ab").unwrap().unwrap();
    assert!(!format!("{caps:?}").is_empty());
}

#[test]
fn date_extraction() {
    let re = Regex::new(r"(?<y>\d{4})-(?<m>\d{2})-(?<d>\d{2})").unwrap();
    let dates: Vec<String> = re
        .captures_iter("2026-01-05 and 2026-12-31")
        .map(|c| {
            let c = c.unwrap();
            format!("{}/{}", c.name("d").unwrap().as_str().unwrap(), c.name("m").unwrap().as_str().unwrap())
        })
        .collect();
    assert_eq!(dates, vec!["05/01", "31/12"]);
}
