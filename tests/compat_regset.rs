// compat_regset.rs - Multi-pattern search through RegSet.
//
// Each case runs under both the position lead and the regex lead; they must
// agree whenever the earliest start is unique.

use std::sync::Arc;

use ferrex::error::{MatchErrorKind, RegexError};
use ferrex::regcomp::{compile, CompileLimits};
use ferrex::regdefs::Options;
use ferrex::regenc::Encoding;
use ferrex::regexec::MatchParam;
use ferrex::regint::RegexType;
use ferrex::regset::{RegSet, RegSetLead, RegSetMatch};
use ferrex::regsyntax::SYNTAX_ONIGURUMA;

const LEADS: [RegSetLead; 2] = [RegSetLead::Position, RegSetLead::Regex];

fn compile_utf8(pattern: &str) -> RegexType {
    compile(
        pattern.as_bytes(),
        Encoding::Utf8,
        Options::empty(),
        &SYNTAX_ONIGURUMA,
        &CompileLimits::default(),
    )
    .unwrap_or_else(|e| panic!("compile failed for {pattern:?}: {e}"))
}

fn make_regset(patterns: &[&str]) -> RegSet {
    RegSet::new(patterns.iter().map(|p| compile_utf8(p))).unwrap()
}

fn search_set(set: &RegSet, input: &str, lead: RegSetLead) -> Option<RegSetMatch> {
    set.search(input.as_bytes(), Encoding::Utf8, 0, input.len(), lead, Options::empty())
        .unwrap_or_else(|e| panic!("regset search failed for {input:?}: {e}"))
}

fn x2(patterns: &[&str], input: &str, from: usize, to: usize) {
    let set = make_regset(patterns);
    for lead in LEADS {
        let m = search_set(&set, input, lead)
            .unwrap_or_else(|| panic!("x2: expected match in {input:?} with {lead:?}"));
        assert_eq!(
            (m.region.start(), m.region.end()),
            (from, to),
            "x2: wrong span in {input:?} with {lead:?}"
        );
    }
}

fn x3(patterns: &[&str], input: &str, from: usize, to: usize, mem: usize) {
    let set = make_regset(patterns);
    for lead in LEADS {
        let m = search_set(&set, input, lead)
            .unwrap_or_else(|| panic!("x3: expected match in {input:?} with {lead:?}"));
        let span = m
            .region
            .get(mem)
            .unwrap_or_else(|| panic!("x3: group {mem} unset in {input:?} with {lead:?}"));
        assert_eq!((span.start, span.end), (from, to), "x3: wrong span with {lead:?}");
    }
}

fn n(patterns: &[&str], input: &str) {
    let set = make_regset(patterns);
    for lead in LEADS {
        let found = search_set(&set, input, lead);
        assert!(found.is_none(), "n: expected no match in {input:?} with {lead:?}, got {found:?}");
    }
}

#[test]
fn empty_set() {
    n(&[], " abab bccab ca");
}

#[test]
fn three_literals() {
    x2(&["abc", "(bca)", "(cab)"], " abab bccab ca", 8, 11);
    x3(&["abc", "(bca)", "(cab)"], " abab bccab ca", 8, 11, 1);
}

#[test]
fn multibyte_patterns_against_ascii() {
    n(&["小説", "9", "夏目漱石"], " XXXX AAA 1223 012345678bbb");
    x2(&["小説", "9", "夏目漱石"], "0123456789", 9, 10);
}

#[test]
fn multibyte_subject() {
    x2(&["小説", "9", "夏目漱石"], "吾輩は猫である 夏目漱石", 22, 34);
    x2(&["漱石", "夏目"], "夏目漱石", 0, 6);
}

#[test]
fn ten_digit_runs() {
    x2(
        &["0+", "1+", "2+", "3+", "4+", "5+", "6+", "7+", "8+", "9+"],
        "abcde 555 qwert",
        6,
        9,
    );
}

#[test]
fn empty_subject() {
    x2(&["a", ".*"], "", 0, 0);
}

#[test]
fn reports_matching_index() {
    let set = make_regset(&["[0-9]+", "[a-z]+", "[A-Z]+"]);
    for lead in LEADS {
        let m = search_set(&set, "  Hello", lead).unwrap();
        assert_eq!(m.index, 2);
        assert_eq!(m.position(), 2);
    }
}

#[test]
fn priority_to_regex_order_ignores_position() {
    let set = make_regset(&["world", "hello"]);
    let m = search_set(&set, "hello world", RegSetLead::PriorityToRegexOrder).unwrap();
    assert_eq!((m.index, m.position()), (0, 6));
    let m = search_set(&set, "hello world", RegSetLead::Position).unwrap();
    assert_eq!((m.index, m.position()), (1, 0));
}

#[test]
fn search_from_offset() {
    let set = make_regset(&["a", "b"]);
    let input = b"ab ab";
    for lead in LEADS {
        let m = set
            .search(input, Encoding::Utf8, 2, input.len(), lead, Options::empty())
            .unwrap()
            .unwrap();
        assert_eq!((m.index, m.position()), (0, 3));
    }
}

#[test]
fn backward_range_is_rejected() {
    let set = make_regset(&["a"]);
    let err = set
        .search(b"aaa", Encoding::Utf8, 2, 1, RegSetLead::Position, Options::empty())
        .unwrap_err();
    assert_eq!(err, RegexError::Match(MatchErrorKind::RangeOutOfRange(1)));
}

#[test]
fn shared_patterns_between_sets() {
    let digits = Arc::new(compile_utf8("[0-9]+"));
    let words = Arc::new(compile_utf8("[a-z]+"));
    let a = RegSet::new([digits.clone(), words.clone()]).unwrap();
    let b = RegSet::new([words, digits]).unwrap();
    let input = "ab12";
    let ma = search_set(&a, input, RegSetLead::Position).unwrap();
    let mb = search_set(&b, input, RegSetLead::Position).unwrap();
    assert_eq!((ma.index, ma.position()), (1, 0));
    assert_eq!((mb.index, mb.position()), (0, 0));
    assert_eq!(a.len(), 2);
    assert!(a.get(2).is_none());
}

#[test]
fn per_pattern_params_fall_back_to_default() {
    let set = make_regset(&["x", "y"]);
    let params = [MatchParam::default()];
    let m = set
        .search_with_param(b"zzy", Encoding::Utf8, 0, 3, RegSetLead::Regex, Options::empty(), &params)
        .unwrap()
        .unwrap();
    assert_eq!((m.index, m.position()), (1, 2));
}
