// compat_options.rs - Compile and search options.
//
// Options are passed to both compile() and search(), each keeping the bits
// it understands. Oniguruma dialect, UTF-8 subjects.

use ferrex::error::RegexError;
use ferrex::regcomp::{compile, CompileLimits};
use ferrex::regdefs::Options;
use ferrex::regenc::Encoding;
use ferrex::regerror::SyntaxErrorKind;
use ferrex::regexec::{search, MatchParam};
use ferrex::region::Region;
use ferrex::regint::RegexType;
use ferrex::regsyntax::{Syntax, SYNTAX_ONIGURUMA, SYNTAX_PERL};

fn compile_with(options: Options, syntax: &'static Syntax, pattern: &str) -> RegexType {
    compile(pattern.as_bytes(), Encoding::Utf8, options, syntax, &CompileLimits::default())
        .unwrap_or_else(|e| panic!("compile failed for {pattern:?} with {options:?}: {e}"))
}

fn search_with(options: Options, pattern: &str, input: &str) -> Option<Region> {
    let reg = compile_with(options, &SYNTAX_ONIGURUMA, pattern);
    search(
        &reg,
        input.as_bytes(),
        Encoding::Utf8,
        0,
        input.len(),
        options,
        &MatchParam::default(),
    )
    .unwrap_or_else(|e| panic!("search failed for {pattern:?} with {options:?}: {e}"))
}

fn x2(options: Options, pattern: &str, input: &str, from: usize, to: usize) {
    let region = search_with(options, pattern, input).unwrap_or_else(|| {
        panic!("x2: expected match for {pattern:?} against {input:?} with {options:?}")
    });
    assert_eq!(
        (region.start(), region.end()),
        (from, to),
        "x2: wrong span for {pattern:?} against {input:?} with {options:?}"
    );
}

fn x3(options: Options, pattern: &str, input: &str, from: usize, to: usize, mem: usize) {
    let region = search_with(options, pattern, input).unwrap_or_else(|| {
        panic!("x3: expected match for {pattern:?} against {input:?} with {options:?}")
    });
    let span = region
        .get(mem)
        .unwrap_or_else(|| panic!("x3: group {mem} of {pattern:?} unset"));
    assert_eq!((span.start, span.end), (from, to), "x3: wrong span for group {mem} of {pattern:?}");
}

fn n(options: Options, pattern: &str, input: &str) {
    let found = search_with(options, pattern, input);
    assert!(
        found.is_none(),
        "n: expected no match for {pattern:?} against {input:?} with {options:?}, got {found:?}"
    );
}

const OIA: Options = Options::IGNORECASE.union(Options::IGNORECASE_IS_ASCII);

// ============================================================================
// IGNORECASE / IGNORECASE_IS_ASCII
// ============================================================================

#[test]
fn option_ignorecase_basic() {
    x2(Options::IGNORECASE, "a", "A", 0, 1);
}

#[test]
fn option_ignorecase_is_ascii_alone_does_not_fold() {
    n(Options::IGNORECASE_IS_ASCII, "a", "A");
}

#[test]
fn option_ignorecase_kelvin_sign() {
    x2(Options::IGNORECASE, "\u{212A}", "k", 0, 1);
    x2(Options::IGNORECASE, "k", "\u{212A}", 0, 3);
    n(OIA, "\u{212A}", "k");
    n(OIA, "k", "\u{212A}");
}

#[test]
fn option_oia_ascii_letters() {
    x2(OIA, "a", "a", 0, 1);
    x2(OIA, "A", "A", 0, 1);
    x2(OIA, "a", "A", 0, 1);
    x2(OIA, "A", "a", 0, 1);
    x2(OIA, "ABCDEFGHIJKLMNOPQRSTUVWXYZ", "abcdefghijklmnopqrstuvwxyz", 0, 26);
    x2(OIA, "abcdefghijklmnopqrstuvwxyz", "ABCDEFGHIJKLMNOPQRSTUVWXYZ", 0, 26);
    x2(OIA, "ABCDEFGHIJKLMNOPQRSTUVWXYZ", "ABCabcdefghijklmnopqrstuvwxyz", 3, 29);
    x2(OIA, "abcdefghijklmnopqrstuvwxyz", "abcABCDEFGHIJKLMNOPQRSTUVWXYZ", 3, 29);
}

#[test]
fn option_oia_capture_group() {
    x3(OIA, "#%(a!;)(b&)", "#%A!;B&", 5, 7, 2);
}

#[test]
fn option_ignorecase_sharp_s() {
    x2(Options::IGNORECASE, "ss", "\u{DF}", 0, 2);
    x2(Options::IGNORECASE, "\u{DF}", "SS", 0, 2);
    n(OIA, "ss", "\u{DF}");
    n(OIA, "\u{DF}", "ss");
    x2(OIA, "ss", "SS", 0, 2);
    x2(OIA, "Ss", "sS", 0, 2);
}

#[test]
fn option_ignorecase_non_ascii() {
    x2(Options::IGNORECASE, "ΣΑΣ", "σας", 0, 6);
    x2(Options::IGNORECASE, "[à-å]+", "ÀÅ", 0, 4);
    n(OIA, "é", "É");
}

// ============================================================================
// NOTBOL / NOTEOL
// ============================================================================

#[test]
fn option_notbol() {
    n(Options::NOTBOL, "^ab", "ab");
    n(Options::NOTBOL, "\\Aab", "ab");
    // only the subject start is affected
    x2(Options::NOTBOL, "^ab", "x\nab", 2, 4);
}

#[test]
fn option_noteol() {
    n(Options::NOTEOL, "ab$", "ab");
    n(Options::NOTEOL, "ab\\z", "ab");
    n(Options::NOTEOL, "ab\\Z", "ab");
    n(Options::NOTEOL, "ab\\Z", "ab\n");
    x2(Options::NOTEOL, "ab$", "ab\nx", 0, 2);
}

// ============================================================================
// NOT_BEGIN_STRING / NOT_END_STRING / NOT_BEGIN_POSITION
// ============================================================================

#[test]
fn option_not_begin_string() {
    n(Options::NOT_BEGIN_STRING, "\\Aab", "ab");
    x2(Options::NOT_BEGIN_STRING, "^ab", "ab", 0, 2);
}

#[test]
fn option_not_end_string() {
    n(Options::NOT_END_STRING, "ab\\z", "ab");
    n(Options::NOT_END_STRING, "ab\\Z", "ab");
    n(Options::NOT_END_STRING, "ab\\Z", "ab\n");
    x2(Options::NOT_END_STRING, "ab$", "ab", 0, 2);
}

#[test]
fn option_not_begin_position() {
    x2(Options::empty(), "\\Gab", "ab", 0, 2);
    n(Options::NOT_BEGIN_POSITION, "\\Gab", "ab");
}

// ============================================================================
// MATCH_WHOLE_STRING
// ============================================================================

#[test]
fn option_match_whole_string() {
    x2(Options::empty(), "a|abc", "abc", 0, 1);
    x2(Options::empty(), "(a|abc)\\Z", "abc", 0, 3);
    x2(Options::MATCH_WHOLE_STRING, "a|abc", "abc", 0, 3);
    x2(Options::MATCH_WHOLE_STRING, "a|abc", "a", 0, 1);
    n(Options::MATCH_WHOLE_STRING, "b", "ab ");
}

// ============================================================================
// *_IS_ASCII
// ============================================================================

#[test]
fn option_word_is_ascii() {
    x2(Options::WORD_IS_ASCII, "\\w", "@g", 1, 2);
    n(Options::WORD_IS_ASCII, "\\w", "あ");
    x2(Options::WORD_IS_ASCII, "\\b", "あa", 3, 3);
}

#[test]
fn option_digit_is_ascii() {
    x2(Options::empty(), "\\d", "１", 0, 3);
    n(Options::DIGIT_IS_ASCII, "\\d", "１");
    x2(Options::DIGIT_IS_ASCII, "\\d", "１2", 3, 4);
}

#[test]
fn option_space_is_ascii() {
    x2(Options::SPACE_IS_ASCII, "\\s", " ", 0, 1);
    x2(Options::empty(), "\\s", "\u{3000}", 0, 3);
    n(Options::SPACE_IS_ASCII, "\\s", "\u{3000}");
}

#[test]
fn option_posix_is_ascii() {
    x2(Options::POSIX_IS_ASCII, "\\w\\d\\s", "c3 ", 0, 3);
    n(Options::POSIX_IS_ASCII, "\\w|\\d|\\s", "あ４\u{3000}");
    x2(Options::empty(), "[[:alpha:]]", "é", 0, 2);
    n(Options::POSIX_IS_ASCII, "[[:alpha:]]", "é");
}

// ============================================================================
// EXTEND / MULTILINE / SINGLELINE
// ============================================================================

#[test]
fn option_extend_whitespace_ignored() {
    x2(Options::EXTEND, " abc  \n def", "abcdef", 0, 6);
    x2(Options::EXTEND, "a b # comment\n c", "abc", 0, 3);
    x2(Options::EXTEND, "a\\ b", "a b", 0, 3);
}

#[test]
fn option_multiline_dot() {
    n(Options::empty(), "a.b", "a\nb");
    x2(Options::MULTILINE, "a.b", "a\nb", 0, 3);
}

#[test]
fn option_singleline_dollar() {
    x2(Options::empty(), "a$", "a\nb", 0, 1);
    n(Options::SINGLELINE, "a$", "a\nb");
    x2(Options::SINGLELINE, "a$", "ba\n", 1, 2);
    n(Options::SINGLELINE, "^b", "a\nb");
}

#[test]
fn option_negate_singleline() {
    let input = "x\nab";
    let reg = compile_with(Options::empty(), &SYNTAX_PERL, "^ab");
    let found = search(&reg, input.as_bytes(), Encoding::Utf8, 0, input.len(), Options::empty(), &MatchParam::default())
        .unwrap();
    assert!(found.is_none());
    let reg = compile_with(Options::NEGATE_SINGLELINE, &SYNTAX_PERL, "^ab");
    let found = search(&reg, input.as_bytes(), Encoding::Utf8, 0, input.len(), Options::empty(), &MatchParam::default())
        .unwrap()
        .unwrap();
    assert_eq!(found.start(), 2);
}

// ============================================================================
// FIND_LONGEST / FIND_NOT_EMPTY
// ============================================================================

#[test]
fn option_find_longest() {
    x2(Options::FIND_LONGEST, "\\w+", "abc defg hij", 4, 8);
    x2(Options::FIND_LONGEST, "a|ab|abc", "xabc", 1, 4);
    x2(Options::empty(), "a|ab|abc", "xabc", 1, 2);
}

#[test]
fn option_find_not_empty() {
    x2(Options::FIND_NOT_EMPTY, "\\w*", "@@@ abc defg hij", 4, 7);
    x2(Options::empty(), "\\w*", "@@@ abc defg hij", 0, 0);
    n(Options::FIND_NOT_EMPTY, "x*", "abc");
}

// ============================================================================
// DONT_CAPTURE_GROUP / CAPTURE_GROUP
// ============================================================================

#[test]
fn option_dont_capture_group() {
    let region = search_with(Options::DONT_CAPTURE_GROUP, "(a)(b)", "ab").unwrap();
    assert_eq!(region.len(), 1);
    let region = search_with(Options::DONT_CAPTURE_GROUP, "(a)(?<n>b)", "ab").unwrap();
    assert_eq!(region.len(), 2);
    x3(Options::DONT_CAPTURE_GROUP, "(a)(?<n>b)", "ab", 1, 2, 1);
}

#[test]
fn option_capture_group_keeps_unnamed_groups() {
    let region = search_with(Options::empty(), "(a)(?<n>b)", "ab").unwrap();
    assert_eq!(region.len(), 2);
    let region = search_with(Options::CAPTURE_GROUP, "(a)(?<n>b)", "ab").unwrap();
    assert_eq!(region.len(), 3);
    x3(Options::CAPTURE_GROUP, "(a)(?<n>b)", "ab", 0, 1, 1);
}

#[test]
fn option_capture_conflict_is_rejected() {
    let err = compile(
        b"(a)",
        Encoding::Utf8,
        Options::DONT_CAPTURE_GROUP | Options::CAPTURE_GROUP,
        &SYNTAX_ONIGURUMA,
        &CompileLimits::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        RegexError::Syntax { kind: SyntaxErrorKind::InvalidCombinationOfOptions, .. }
    ));
}

#[test]
fn search_only_options_do_not_change_compilation() {
    let plain = compile_with(Options::empty(), &SYNTAX_ONIGURUMA, "a$");
    let noisy = compile_with(Options::NOTEOL | Options::MATCH_WHOLE_STRING, &SYNTAX_ONIGURUMA, "a$");
    assert_eq!(plain.options(), noisy.options());
}
