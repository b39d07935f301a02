// compat_utf8.rs - Search behaviour over UTF-8 subjects with the Oniguruma dialect.
//
// Cases follow the compact convention of the Oniguruma test suite:
//   x2(pattern, subject, from, to)       -> search, expect a match at from..to
//   x3(pattern, subject, from, to, mem)  -> search, expect group `mem` at from..to
//   n(pattern, subject)                  -> search, expect no match
//
// Offsets are byte offsets into the subject.

use ferrex::regcomp::{compile, CompileLimits};
use ferrex::regdefs::Options;
use ferrex::regenc::Encoding;
use ferrex::regexec::{search, MatchParam};
use ferrex::region::Region;
use ferrex::regint::RegexType;
use ferrex::regsyntax::SYNTAX_ONIGURUMA;

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

fn search_utf8(pattern: &str, input: &str) -> Option<Region> {
    let reg = compile_utf8(pattern);
    search(
        &reg,
        input.as_bytes(),
        Encoding::Utf8,
        0,
        input.len(),
        Options::empty(),
        &MatchParam::default(),
    )
    .unwrap_or_else(|e| panic!("search failed for {pattern:?} against {input:?}: {e}"))
}

fn x2(pattern: &str, input: &str, from: usize, to: usize) {
    let region = search_utf8(pattern, input)
        .unwrap_or_else(|| panic!("x2: expected match for {pattern:?} against {input:?}"));
    assert_eq!(
        (region.start(), region.end()),
        (from, to),
        "x2: wrong span for {pattern:?} against {input:?}"
    );
}

fn x3(pattern: &str, input: &str, from: usize, to: usize, mem: usize) {
    let region = search_utf8(pattern, input)
        .unwrap_or_else(|| panic!("x3: expected match for {pattern:?} against {input:?}"));
    assert!(
        mem < region.len(),
        "x3: group {mem} does not exist in {pattern:?} (len={})",
        region.len()
    );
    let span = region
        .get(mem)
        .unwrap_or_else(|| panic!("x3: group {mem} of {pattern:?} did not participate"));
    assert_eq!(
        (span.start, span.end),
        (from, to),
        "x3: wrong span for group {mem} of {pattern:?} against {input:?}"
    );
}

fn n(pattern: &str, input: &str) {
    let found = search_utf8(pattern, input);
    assert!(
        found.is_none(),
        "n: expected no match for {pattern:?} against {input:?}, got {found:?}"
    );
}

// ============================================================================
// Literals and escapes
// ============================================================================

#[test]
fn empty_pattern() {
    x2("", "", 0, 0);
    x2("", "a", 0, 0);
    x2("", "あ", 0, 0);
}

#[test]
fn literal_strings() {
    x2("a", "a", 0, 1);
    x2("aa", "aa", 0, 2);
    x2("aaa", "aaa", 0, 3);
    x2("ab", "ab", 0, 2);
    x2("b", "ab", 1, 2);
    x2("bc", "abc", 1, 3);
    n("abd", "abc");
}

#[test]
fn hex_and_octal_escapes() {
    x2("\\x61", "a", 0, 1);
    x2("\\x1f", "\x1f", 0, 1);
    x2("\\x40", "@", 0, 1);
    x2("\\x1", "\x01", 0, 1);
    x2("\\x{1}", "\x01", 0, 1);
    x2("\\x{4E38}", "\u{4E38}", 0, 3);
    x2("\\u4E38", "\u{4E38}", 0, 3);
    x2("\\u0040", "@", 0, 1);
    x2("\\o{101}", "A", 0, 1);
    x2("\\101", "A", 0, 1);
}

#[test]
fn control_escapes() {
    x2("\\t\\n\\r", "\t\n\r", 0, 3);
    x2("\\ca", "\x01", 0, 1);
    x2("\\C-b", "\x02", 0, 1);
    x2("\\e", "\x1b", 0, 1);
    x2("\\v", "\x0b", 0, 1);
}

#[test]
fn quoted_sequence() {
    x2("\\Qa.b\\E", "axb a.b", 4, 7);
    x2("\\Q(*)", "x(*)", 1, 4);
    x2("\\^\\$", "^$", 0, 2);
}

#[test]
fn comments_and_extended_mode() {
    x2("a(?#....\\\\JJJJ)b", "ab", 0, 2);
    x2("(?x)  G (o O(?-x)oO) g L", "GoOoOgLe", 0, 7);
    x2("(?x) a  b # trailing\n c", "abc", 0, 3);
}

// ============================================================================
// Anchors
// ============================================================================

#[test]
fn anchors_on_empty_subject() {
    x2("^", "", 0, 0);
    x2("$", "", 0, 0);
    x2("^$", "", 0, 0);
    x2("\\A", "", 0, 0);
    x2("\\z", "", 0, 0);
    x2("\\Z", "", 0, 0);
    x2("\\G", "", 0, 0);
    x2("\\A\\Z", "", 0, 0);
}

#[test]
fn line_anchors() {
    x2("^a", "\na", 1, 2);
    x2("^a", "a", 0, 1);
    x2("^a$", "a", 0, 1);
    x2("a$", "a\nb", 0, 1);
    x2("^b", "a\nb", 2, 3);
    x3("(^bb)cc", "bbcc", 0, 2, 1);
    n("(^bb)cc", "zbbcc");
    x3("cc(bb$)", "ccbb", 2, 4, 1);
    n("cc(bb$)", "ccbbb");
}

#[test]
fn buffer_anchors() {
    x2("\\Axyz", "xyz", 0, 3);
    x2("xyz\\Z", "xyz", 0, 3);
    x2("xyz\\z", "xyz", 0, 3);
    x2("a\\Z", "a", 0, 1);
    x2("a\\Z", "a\n", 0, 1);
    n("a\\z", "a\n");
    n("az\\A", "az");
    n("a\\Az", "az");
    x3("(\\Abb)cc", "bbcc", 0, 2, 1);
    n("(\\Abb)cc", "zbbcc");
    x2("\\n?\\z", "こんにちは", 15, 15);
}

#[test]
fn search_start_anchor() {
    x2("\\Gaz", "az", 0, 2);
    n("\\Gz", "bza");
    n("az\\G", "az");
    x2("a|\\Gz", "bza", 2, 3);
    x2("a|\\Gz", "za", 0, 1);
}

#[test]
fn anchors_in_alternation() {
    x2("a|^z", "ba", 1, 2);
    x2("a|^z", "za", 0, 1);
    x2("a|\\Az", "bza", 2, 3);
    x2("a|\\Az", "za", 0, 1);
    x2("a|b\\Z", "ba", 1, 2);
    x2("a|b\\Z", "b", 0, 1);
    x2("a|b\\z", "ba", 1, 2);
    x2("a|b\\z", "b", 0, 1);
}

// ============================================================================
// Dot and character types
// ============================================================================

#[test]
fn dot() {
    x2(".", "a", 0, 1);
    n(".", "\n");
    n(".", "");
    x2("..", "ab", 0, 2);
    x2(".", "あ", 0, 3);
    x2("..", "かき", 0, 6);
    x2("a.b.c", "aabbc", 0, 5);
    n(".a", "ab");
    x2(".a", "aa", 0, 2);
}

#[test]
fn dot_in_multiline_mode() {
    x2("(?m:.)", "\n", 0, 1);
    x2("(?m:a.)", "a\n", 0, 2);
    x2("(?m:.b)", "a\nb", 1, 3);
    x2("(?m:.*abc)", "dddabddabc", 0, 10);
    x2("(?m).*", "青赤黄", 0, 9);
}

#[test]
fn super_dots() {
    n("\\N", "\n");
    x2("\\N", "a", 0, 1);
    x2("\\O", "\n", 0, 1);
}

#[test]
fn general_newline() {
    x2("\\R", "\r\n", 0, 2);
    x2("\\R", "\n", 0, 1);
    x2("a\\Rb", "a\u{2028}b", 0, 5);
    n("\\R", "ab");
    x2("\\R\\n", "\r\n\n", 0, 3);
}

#[test]
fn word_digit_space() {
    x2("\\w", "e", 0, 1);
    n("\\W", "e");
    x2("\\w", "_", 0, 1);
    n("\\W", "_");
    x2("\\s", " ", 0, 1);
    x2("\\S", "b", 0, 1);
    x2("\\d", "4", 0, 1);
    n("\\D", "4");
    x2("\\h+", "xyz0aF9g", 3, 7);
    n("\\wabc", " abc");
    x2("a\\Wbc", "a bc", 0, 4);
    x2(".\\wb\\W..c", "abb bcc", 0, 7);
    x2("\\s\\wzzz", " zzzz", 0, 5);
    x2("\\w\\w\\s\\Waaa\\d", "aa  aaa4", 0, 8);
}

#[test]
fn character_types_are_unicode_aware() {
    x2("\\w", "お", 0, 3);
    n("\\W", "あ");
    x2("\\S", "そ", 0, 3);
    x2("\\S", "漢", 0, 3);
    x2("\\d", "٣", 0, 2);
    x2("\\s", "\u{3000}", 0, 3);
    x2("^\\w$", "に", 0, 3);
    x2("\\w|\\s", "お", 0, 3);
}

#[test]
fn ascii_restricted_character_types() {
    n("(?W)\\w", "お");
    n("(?D)\\d", "٣");
    n("(?S)\\s", "\u{3000}");
    x2("(?a)\\w+", "aé", 0, 1);
}

// ============================================================================
// Word boundaries
// ============================================================================

#[test]
fn word_boundary() {
    x2("\\b", "z ", 0, 0);
    x2("\\b", " z", 1, 1);
    x2("\\b", "  z ", 2, 2);
    x2("c.*\\b", "abc", 2, 3);
    x2("\\b.*abc.*\\b", "abc", 0, 3);
    x2("(\\ba)+", "aaa", 0, 1);
    x2("\\bあ", "xあ あ", 5, 8);
}

#[test]
fn not_word_boundary() {
    x2("\\B", "zz ", 1, 1);
    x2("\\B", "z ", 2, 2);
    x2("\\B", " z", 0, 0);
}

// ============================================================================
// Character classes
// ============================================================================

#[test]
fn simple_classes() {
    x2("[ab]", "b", 0, 1);
    n("[ab]", "c");
    x2("[a-z]", "t", 0, 1);
    n("[^a]", "a");
    x2("[^a]", "\n", 0, 1);
    x2("[]]", "]", 0, 1);
    n("[^]]", "]");
    x2("[\\^]+", "0^^1", 1, 3);
    x2("[b-]", "b", 0, 1);
    x2("[b-]", "-", 0, 1);
    x2("[0-9-a]", "-", 0, 1);
    n("[0-9-a]", ":");
    x2("[&]", "&", 0, 1);
    x2("[\\[]", "[", 0, 1);
    x2("[\\]]", "]", 0, 1);
}

#[test]
fn escapes_in_classes() {
    x2("[\\w]", "z", 0, 1);
    n("[\\w]", " ");
    x2("[\\W]", "b$", 1, 2);
    x2("[\\d]", "5", 0, 1);
    n("[\\d]", "e");
    x2("[\\D]", "t", 0, 1);
    n("[\\D]", "3");
    x2("[\\s]", " ", 0, 1);
    n("[\\s]", "a");
    x2("[\\S]", "b", 0, 1);
    n("[\\S]", " ");
    x2("[\\w\\d]", "2", 0, 1);
    n("[\\w\\d]", " ");
    x2("[\\x5a-\\x5c]", "\x5b", 0, 1);
    x2("[\\x6A-\\x6D]", "\x6c", 0, 1);
    n("[\\x6A-\\x6D]", "\x6E");
    x2("[\\044-\\047]", "\x26", 0, 1);
    x2("[\\x{7f}-\\x{10ffff}]", "\u{5BB6}", 0, 3);
    x2("q[\\t]", "q\t", 0, 2);
}

#[test]
fn multibyte_classes() {
    n("[\\d]", "ふ");
    x2("[\\D]", "は", 0, 3);
    n("[\\s]", "く");
    x2("[\\S]", "へ", 0, 3);
    x2("[\\w\\d]", "よ", 0, 3);
    x2("[あ-お]+", "xいうえx", 1, 10);
    n("[^あ-お]", "う");
}

#[test]
fn posix_brackets() {
    x2("[[:upper:]]", "B", 0, 1);
    n("[[:upper:]]", "a");
    x2("[[:^upper:]]", "a", 0, 1);
    n("[[:lower:]]", "A");
    x2("[[:^lower:]]", "A", 0, 1);
    x2("[*[:xdigit:]+]", "+", 0, 1);
    x2("[*[:xdigit:]+]", "GHIKK-9+*", 6, 7);
    x2("[*[:xdigit:]+]", "-@^+", 3, 4);
    x2("[[:alpha:]]+", "12абв3", 2, 8);
    x2("[[:space:][:digit:]]+", "a 1 b", 1, 4);
}

#[test]
fn nested_classes() {
    x2("[[ab]]", "b", 0, 1);
    x2("[[ab]c]", "c", 0, 1);
    n("[[^a]]", "a");
    n("[^[a]]", "a");
    x2("[a[cdef]]", "a", 0, 1);
    x2("[a[cdef]]", "e", 0, 1);
}

#[test]
fn class_intersection() {
    x2("[[ab]&&bc]", "b", 0, 1);
    n("[[ab]&&bc]", "a");
    n("[[ab]&&bc]", "c");
    x2("[a-z&&b-y&&c-x]", "w", 0, 1);
    n("[^a-z&&b-y&&c-x]", "w");
    x2("[[^a&&a]&&a-z]", "b", 0, 1);
    n("[[^a&&a]&&a-z]", "a");
    x2("[[^a-z&&bcdef]&&[^c-g]]", "h", 0, 1);
    n("[[^a-z&&bcdef]&&[^c-g]]", "c");
    x2("[^[^abc]&&[^cde]]", "c", 0, 1);
    x2("[^[^abc]&&[^cde]]", "e", 0, 1);
    n("[^[^abc]&&[^cde]]", "f");
    x2("[\\w&&[^a-z]]+", "abcDEF", 3, 6);
}

#[test]
fn class_quantifiers() {
    x2("[abc]?", "abc", 0, 1);
    x2("[abc]*", "abc", 0, 3);
    x2("[^abc]*", "abc", 0, 0);
    n("[^abc]+", "abc");
    x2("[a]*\\W", "aa@", 0, 3);
    x2("[a]*[b]", "aab", 0, 3);
    n("a*\\W", "aaa");
}

// ============================================================================
// Unicode properties
// ============================================================================

#[test]
fn general_category_properties() {
    x2("\\p{L}", "U", 0, 1);
    n("\\p{L}", "@");
    x2("\\p{L}+", "akZtE", 0, 5);
    x2("\\P{L}+", "1@=-%", 0, 5);
    x2("[\\p{L}]", "s", 0, 1);
    n("[^\\p{L}]", "s");
    x2("[\\P{L}]+", "-3@", 0, 3);
    x2("\\p{Lu}+", "abCDe", 2, 4);
    x2("\\p{Nd}+", "x٣4y", 1, 4);
    x2("\\p{Zs}", "a\u{3000}", 1, 4);
    x2("\\p{^L}", "ab1", 2, 3);
}

#[test]
fn script_properties() {
    x2("\\p{Hiragana}+", "カナかなカナ", 6, 12);
    x2("\\p{Greek}", "abγ", 2, 4);
    n("\\p{Greek}", "abc");
    x2("\\p{IsHan}", "x漢", 1, 4);
    x2("\\p{Katakana}\\P{Katakana}", "カな", 0, 6);
}

#[test]
fn binary_and_posix_properties() {
    x2("\\p{Alphabetic}+", "1ab2", 1, 3);
    x2("\\p{Upper}", "aB", 1, 2);
    x2("\\p{Word}+", "  foo_1 ", 2, 7);
    x2("\\p{XDigit}+", "xyzAf09", 3, 7);
}

// ============================================================================
// Quantifiers
// ============================================================================

#[test]
fn optional() {
    x2("a?", "", 0, 0);
    x2("a?", "b", 0, 0);
    x2("a?", "a", 0, 1);
    x2(".?", "", 0, 0);
    x2(".?", "f", 0, 1);
    x2(".?", "\n", 0, 0);
    x2(".?", "た", 0, 3);
}

#[test]
fn star() {
    x2("a*", "", 0, 0);
    x2("a*", "a", 0, 1);
    x2("a*", "aaa", 0, 3);
    x2("a*", "baaaa", 0, 0);
    x2(".*", "", 0, 0);
    x2(".*", "abcde", 0, 5);
    x2(".*", "ぱぴぷぺ", 0, 12);
    x2(".*abc", "dddabdd\nddabc", 8, 13);
}

#[test]
fn plus() {
    n("a+", "");
    x2("a+", "a", 0, 1);
    x2("a+", "aaaa", 0, 4);
    x2("a+", "aabbb", 0, 2);
    x2("a+", "baaaa", 1, 5);
    x2(".+", "z", 0, 1);
    x2(".+", "zdswer\n", 0, 6);
    x2(".+", "ろ", 0, 3);
    x2(".+abc", "dddabdd\nddabcaa\naaaabc", 8, 13);
}

#[test]
fn lazy_quantifiers() {
    x2("a??", "aaa", 0, 0);
    x2("ba??b", "bab", 0, 3);
    x2("a*?", "aaa", 0, 0);
    x2("ba*?", "baa", 0, 1);
    x2("ba*?b", "baab", 0, 4);
    x2("a+?", "aaa", 0, 1);
    x2("ba+?", "baa", 0, 2);
    x2("ba+?b", "baab", 0, 4);
    x2("(?:a?)??", "a", 0, 0);
    x2("(?:a??)?", "a", 0, 0);
    x2("(?:a?)+?", "aaa", 0, 1);
    x2("(?:a+)??", "aaa", 0, 0);
    x2("(?:a+)??b", "aaab", 0, 4);
}

#[test]
fn greedy_versus_lazy_plus() {
    x2("a+", "aaa", 0, 3);
    x2("a+?", "aaa", 0, 1);
    x3("a*(.)", "aaaaz", 4, 5, 1);
    x3("a*?(.)", "aaaaz", 0, 1, 1);
    x3("a*?(c)", "aaaac", 4, 5, 1);
    x3("[bcd]a*(.)", "caaaaz", 5, 6, 1);
}

#[test]
fn intervals() {
    x2("a{3}", "aaa", 0, 3);
    n("a{3}", "aa");
    x2("a{2,4}", "aaa", 0, 3);
    x2("a{,2}", "aaa", 0, 2);
    x2("h{0,}", "hhhh", 0, 4);
    x2("a{1,3}?", "aaa", 0, 1);
    x2("(?:ab){3,}", "abababab", 0, 8);
    n("(?:ab){3,}", "abab");
    x2("(?:ab){2,4}", "ababab", 0, 6);
    x2("(?:ab){2,4}", "ababababab", 0, 8);
    x2("(?:ab){2,4}?", "ababababab", 0, 4);
    x2("^a{2,}?a$", "aaa", 0, 3);
    x2("^[a-z]{2,}?$", "aaa", 0, 3);
    n("a.{0,2}a", "0aXXXa0");
    n("a.{0,2}?a", "0aXXXa0");
    n("a.{0,2}?a", "0aXXXXa0");
    n("a{2,3}?", "a");
}

#[test]
fn invalid_interval_is_literal() {
    x2("(?:ab){,}", "ab{,}", 0, 5);
    x2("a{", "a{", 0, 2);
    x2("a{x}", "a{x}", 0, 4);
}

#[test]
fn fixed_interval_followed_by_question_is_optional() {
    x2("a{3}?", "aaa", 0, 3);
    x2("a{3}?", "aa", 0, 0);
    x2("a{3,3}?", "aaa", 0, 3);
    n("a{3,3}?", "aa");
}

#[test]
fn nested_quantifiers() {
    x2("(?:ab)?{2}", "", 0, 0);
    x2("(?:ab)?{2}", "ababa", 0, 4);
    x2("(?:ab)*{0}", "ababa", 0, 0);
    x2("(?:abc)+?{2}", "abcabcabc", 0, 6);
    x2("a{1,3}+", "aaaaaa", 0, 6);
    x2("a{3}+", "aaaaaa", 0, 6);
    x2("a{3,3}+", "aaaaaa", 0, 6);
    x2("a{2,3}+a", "aaa", 0, 3);
    n("ax{2}*a", "0axxxa1");
    n("(a){10}{10}", "aa");
}

#[test]
fn possessive_quantifiers() {
    n("a++a", "aaa");
    x2("a++b", "aab", 0, 3);
    n("a*+a", "aaa");
    n("a?+a", "a");
    x2("a?+a", "aa", 0, 2);
    x2("\"[^\"]*+\"", "x\"abc\"y", 1, 6);
}

#[test]
fn empty_loop_bodies() {
    x2("(?:x?)?", "", 0, 0);
    x2("(?:x?)?", "x", 0, 1);
    x2("(?:x?)?", "xx", 0, 1);
    x2("(?:x?)*", "", 0, 0);
    x2("(?:x?)*", "x", 0, 1);
    x2("(?:x?)*", "xx", 0, 2);
    x2("(?:x?)+", "", 0, 0);
    x2("(?:x?)+", "x", 0, 1);
    x2("(?:x?)+", "xx", 0, 2);
    x2("(?:x?)??", "xx", 0, 0);
    x2("(?:x?)*?", "x", 0, 0);
    x2("(?:x?)+?", "", 0, 0);
    x2("(?:x?)+?", "x", 0, 1);
    x2("(?:)*", "abc", 0, 0);
}

#[test]
fn star_bodies() {
    x2("(?:x*)?", "xx", 0, 2);
    x2("(?:x*)*", "", 0, 0);
    x2("(?:x*)*", "xx", 0, 2);
    x2("(?:x*)+", "x", 0, 1);
    x2("(?:x*)+", "xx", 0, 2);
    x2("(?:x*)??", "xx", 0, 0);
    x2("(?:x*)*?", "xx", 0, 0);
    x2("(?:x*)+?", "", 0, 0);
    x2("(?:x*)+?", "x", 0, 1);
    x2("(?:x*)+?", "xx", 0, 2);
}

#[test]
fn plus_bodies() {
    x2("(?:x+)?", "", 0, 0);
    x2("(?:x+)?", "xx", 0, 2);
    x2("(?:x+)*", "xx", 0, 2);
    n("(?:x+)+", "");
    x2("(?:x+)+", "xx", 0, 2);
    x2("(?:x+)??", "xx", 0, 0);
    x2("(?:x+)*?", "xx", 0, 0);
    n("(?:x+)+?", "");
    x2("(?:x+)+?", "xx", 0, 2);
}

#[test]
fn lazy_bodies() {
    x2("(?:x??)?", "xx", 0, 0);
    x2("(?:x??)*", "xx", 0, 0);
    x2("(?:x??)+", "xx", 0, 0);
    x2("(?:x*?)*", "xx", 0, 0);
    x2("(?:x*?)+", "xx", 0, 0);
    x2("(?:x+?)?", "x", 0, 1);
    x2("(?:x+?)?", "xx", 0, 1);
    x2("(?:x+?)*", "xx", 0, 2);
    x2("(?:x+?)+", "xx", 0, 2);
    x2("(?:x+?)??", "xx", 0, 0);
    x2("(?:x+?)+?", "xx", 0, 1);
    x2("(?:a+?)*", "a", 0, 1);
}

// ============================================================================
// Alternation
// ============================================================================

#[test]
fn alternation() {
    x2("a|b", "a", 0, 1);
    x2("a|b", "b", 0, 1);
    x2("|a", "a", 0, 0);
    x2("(|a)", "a", 0, 0);
    x2("ab|bc", "ab", 0, 2);
    x2("ab|bc", "bc", 0, 2);
    x2("z(?:ab|bc)", "zbc", 0, 3);
    x2("a(?:ab|bc)c", "aabc", 0, 4);
    x2("ab|(?:ac|az)", "az", 0, 2);
    x2("a|b|c", "dc", 1, 2);
    x2("a|b|cd|efg|h|ijk|lmn|o|pq|rstuvwx|yz", "pqr", 0, 2);
    n("a|b|cd|efg|h|ijk|lmn|o|pq|rstuvwx|yz", "mn");
}

#[test]
fn alternation_with_types_and_classes() {
    x2("\\w|\\s", " ", 0, 1);
    n("\\w|\\w", " ");
    x2("\\w|%", "%", 0, 1);
    x2("\\w|[&$]", "&", 0, 1);
    x2("[b-d]|[^e-z]", "a", 0, 1);
    x2("(?:a|[c-f])|bz", "dz", 0, 1);
    x2("(?:a|[c-f])|bz", "bz", 0, 2);
}

#[test]
fn alternation_with_lookahead() {
    x2("abc|(?=zz)..f", "zzf", 0, 3);
    x2("abc|(?!zz)..f", "abf", 0, 3);
    x2("(?=za)..a|(?=zz)..a", "zza", 0, 3);
}

#[test]
fn alternation_with_quantifiers() {
    x2("a?|b", "a", 0, 1);
    x2("a?|b", "b", 0, 0);
    x2("a?|b", "", 0, 0);
    x2("a*|b", "aa", 0, 2);
    x2("a*|b*", "ba", 0, 0);
    x2("a*|b*", "ab", 0, 1);
    x2("a+|b*", "", 0, 0);
    x2("a+|b*", "bbb", 0, 3);
    x2("a+|b*", "abbb", 0, 1);
    n("a+|b+", "");
    x2("(a|b)?", "b", 0, 1);
    x2("(a|b)*", "ba", 0, 2);
    x2("(a|b)+", "bab", 0, 3);
    x2("(ab|ca)+", "caabbc", 0, 4);
    x2("(ab|ca)+", "aabca", 1, 5);
    x2("(ab|ca)+", "abzca", 0, 2);
    x2("(a|bab)+", "ababa", 0, 5);
    x2("(a|bab)+", "ba", 1, 2);
    x2("(a|bab)+", "baaaba", 1, 4);
    x2("(?:a|b)(?:a|b)", "ab", 0, 2);
    x2("(?:a*|b*)(?:a*|b*)", "aaabbb", 0, 3);
    x2("(?:a*|b*)(?:a+|b+)", "aaabbb", 0, 6);
    x2("(?:a+|b+){2}", "aaabbb", 0, 6);
    x2("(?:a+|b+){1,2}", "aaabbb", 0, 6);
    x2("(?:a+|\\Ab*)cc", "cc", 0, 2);
    n("(?:a+|\\Ab*)cc", "abcc");
    x2("(?:^a+|b+)*c", "aabbbabc", 6, 8);
    x2("(?:^a+|b+)*c", "aabbbbc", 0, 7);
    x2("(?:a*|b*)*c", "abadc", 4, 5);
}

// ============================================================================
// Capture groups
// ============================================================================

#[test]
fn capture_groups() {
    x3("(a)", "a", 0, 1, 1);
    x3("(ab)", "ab", 0, 2, 1);
    x2("((ab))", "ab", 0, 2);
    x3("((ab))", "ab", 0, 2, 1);
    x3("((ab))", "ab", 0, 2, 2);
    x3("(ab)(cd)", "abcd", 0, 2, 1);
    x3("(ab)(cd)", "abcd", 2, 4, 2);
    x3("()(a)bc(def)ghijk", "abcdefghijk", 3, 6, 3);
    x3("(()(a)bc(def)ghijk)", "abcdefghijk", 3, 6, 4);
    x2("(^a)", "a", 0, 1);
    x3("(a)|(a)", "ba", 1, 2, 1);
    x3("(^a)|(a)", "ba", 1, 2, 2);
}

#[test]
fn captures_under_quantifiers() {
    x3("(a?)", "aaa", 0, 1, 1);
    x3("(a*)", "aaa", 0, 3, 1);
    x3("(a*)", "", 0, 0, 1);
    x3("(a+)", "aaaaaaa", 0, 7, 1);
    x3("(a+|b*)", "bbbaa", 0, 3, 1);
    x3("(a+|b?)", "bbbaa", 0, 1, 1);
    x3("(abc)?", "abc", 0, 3, 1);
    x3("(abc)*", "abc", 0, 3, 1);
    x3("(abc)+", "abc", 0, 3, 1);
    x3("(xyz|abc)+", "abc", 0, 3, 1);
    x3("([xyz][abc]|abc)+", "abc", 0, 3, 1);
    x3("((?=az)a)", "azb", 0, 1, 1);
    x3("abc|(.abd)", "zabd", 0, 4, 1);
    x2("(?:abc)|(ABC)", "abc", 0, 3);
}

#[test]
fn repeated_group_keeps_last_iteration() {
    x3("(a|b)+", "abba", 3, 4, 1);
    x3("(\\w)*!", "xyz!", 2, 3, 1);
    x3("(?:(a)|b)+", "aab", 1, 2, 1);
}

#[test]
fn longer_capture_patterns() {
    x2("(d+)([^abc]z)", "dddz", 0, 4);
    x2("([^abc]*)([^abc]z)", "dddz", 0, 4);
    x2("(\\w+)(\\wz)", "dddz", 0, 4);
    x2("(.{2,})?", "abcde", 0, 5);
    x2("((a|b|c|d|e|f|g|h|i|j|k|l|m|n)+)?", "abcde", 0, 5);
    x2("((a|b|c|d|e|f|g|h|i|j|k|l|m|n){3,})?", "abcde", 0, 5);
    x2("x((.)*)*x", "0x1x2x3", 1, 6);
    x2("((?:a(?:b|c|d|e|f|g|h|i|j|k|l|m|n))+)?", "abacadae", 0, 8);
    x2("(abc|def|ghi|jkl|mno|pqr|stu){0,10}?\\z", "admno", 2, 5);
}

// ============================================================================
// Backreferences
// ============================================================================

#[test]
fn backreferences() {
    x3("(a*)\\1", "aaaaa", 0, 2, 1);
    x2("a(b*)\\1", "abbbb", 0, 5);
    x2("a(b*)\\1", "ab", 0, 1);
    x2("(a*)(b*)\\1\\2", "aaabbaaabb", 0, 10);
    x2("(a*)(b*)\\2", "aaabbbb", 0, 7);
    x2("(a)(b)(c)\\2\\1\\3", "abcbac", 0, 6);
    x2("([a-d])\\1", "cc", 0, 2);
    x2("(a)\\1", "aa", 0, 2);
    n("(a)\\1", "ab");
    x2("(a?)\\1", "aa", 0, 2);
    x2("(a??)\\1", "aa", 0, 0);
    x2("(((((((a*)b))))))c\\7", "aaabcaaa", 0, 8);
    x3("(((((((a*)b))))))c\\7", "aaabcaaa", 0, 3, 7);
}

#[test]
fn backreferences_with_wildcards() {
    x2("(.*)a\\1f", "babfbac", 0, 4);
    x2("(.*)a\\1f", "bacbabf", 3, 7);
    x2("((.*)a\\2f)", "bacbabf", 3, 7);
    x2("(.*)a\\1f", "baczzzzzz\nbazz\nzzzzbabf", 19, 23);
    x2("(\\w\\d\\s)\\1", "f5 f5 ", 0, 6);
    n("(\\w\\d\\s)\\1", "f5 f5");
    x2("(who|[a-c]{3})\\1", "whowho", 0, 6);
    x2("...(who|[a-c]{3})\\1", "abcwhowho", 0, 9);
    x2("(who|[a-c]{3})\\1", "cbccbc", 0, 6);
    x3("(.(abc)\\2)", "zabcabc", 0, 7, 1);
    x3("(.(..\\d.)\\2)", "z12341234", 0, 9, 1);
    x2("(\\w)\\1", "あいいう", 3, 9);
}

#[test]
fn backreferences_to_anchored_groups() {
    x2("(^a)\\1", "aa", 0, 2);
    n("(^a)\\1", "baa");
    n("(a$)\\1", "aa");
    n("(ab\\Z)\\1", "ab");
    x2("(a*\\Z)\\1", "a", 1, 1);
    x2(".(a*\\Z)\\1", "ba", 1, 2);
}

#[test]
fn backreference_to_unset_group_fails() {
    n("(\\1)", "");
    n("\\1(a)", "aa");
    n("(a)$|\\1", "az");
    n("(a(b)\\1)\\2+", "ababb");
    x2("(?:(?:\\1|z)(a))+$", "zaaa", 0, 4);
    n("(?:(?:\\1|z)(a))+$", "zaa");
    x2("(a)(?=\\1)", "aa", 0, 1);
    x2("^(\"|)(.*)\\1$", "XX", 0, 2);
}

#[test]
fn case_insensitive_backreferences() {
    x2("(abc)(?i:\\1)", "abcABC", 0, 6);
    x2("((?i:az))\\1", "AzAz", 0, 4);
    n("((?i:az))\\1", "Azaz");
    x2("x((.)*)*x(?i:\\1)\\Z", "0x1x2x1X2", 1, 9);
}

#[test]
fn named_backreferences() {
    x2("(?<name1>a)", "a", 0, 1);
    x2("(?<name_3>.zv.)\\k<name_3>", "azvbazvb", 0, 8);
    x2("(?'q'.)\\k'q'", "xyy", 1, 3);
    x2("(?<a>.)(?<b>.)\\k<-1>\\k<-2>", "abba", 0, 4);
}

#[test]
fn multiplex_named_backreferences() {
    x2("(?:(?<x>abc)|(?<x>efg))\\k<x>", "abcefgefg", 3, 9);
    n("(?:(?<x>abc)|(?<x>efg))\\k<x>", "abcefg");
    x2("(?<x>x)(?<x>xx)\\k<x>", "xxxx", 0, 4);
    x2("(?<x>x)(?<x>xx)\\k<x>", "xxxxz", 0, 4);
    x2("(?i)(?<X>aa)|(?<X>bb)\\k<X>", "BBbb", 0, 4);
}

#[test]
fn many_named_groups() {
    x3(
        "(?<name1>)(?<name2>)(?<name3>)(?<name4>)(?<name5>)(?<name6>)(?<name7>)(?<name8>)\
         (?<name9>)(?<name10>)(?<name11>)(?<name12>)(?<name13>)(?<name14>)(?<name15>)\
         (?<name16>aaa)(?<name17>)$",
        "aaa",
        0,
        3,
        16,
    );
}

// ============================================================================
// Lookaround
// ============================================================================

#[test]
fn lookahead() {
    x2("(?=z)z", "z", 0, 1);
    n("(?=z).", "a");
    x2("(?!z)a", "a", 0, 1);
    n("(?!z)a", "z");
    x2("(?!abc).*\\z", "abcde", 1, 5);
    x2("foo(?=bar)", "foobaz foobar", 7, 10);
}

#[test]
fn lookbehind() {
    x2("(?<=a)b", "ab", 1, 2);
    n("(?<=a)b", "bb");
    x2("(?<=a|b)b", "bb", 1, 2);
    x2("(?<=a|bc)b", "bcb", 2, 3);
    x2("(?<=a|bc)b", "ab", 1, 2);
    x2("(?<=a|bc||defghij|klmnopq|r)z", "rz", 1, 2);
    x2("(?<=(?i:abc))d", "ABCd", 3, 4);
    x2("(?<=^|b)c", " cbc", 3, 4);
    x2("(?<=a|^|b)c", " cbc", 3, 4);
    x2("(?<=あ)い", "いあい", 6, 9);
    x2("((?<!abc)def)+", "bcdef", 2, 5);
}

#[test]
fn negative_lookbehind() {
    x2("(?<!a)b", "cb", 1, 2);
    n("(?<!a)b", "ab");
    x2("(?<!a|bc)b", "bbb", 0, 1);
    n("(?<!a|bc)z", "bcz");
    n("(?<!^|b)c", "cbc");
    n("(?<!a|^|b)c", "cbc");
    n("(?<!a|(?:^)|b)c", "cbc");
    x2("(?<!a|(?:^)|b)c", " cbc", 1, 2);
}

#[test]
fn variable_length_lookbehind() {
    x2("(?<=a{1,3})b", "aaab", 3, 4);
    x2("(?<=x\\d{0,3})y", "ax123y", 5, 6);
    n("(?<=x\\d{0,3})y", "a123y");
    x2("(?<=ab|c)x", "cxabx", 1, 2);
}

// ============================================================================
// Atomic groups and keep
// ============================================================================

#[test]
fn atomic_groups() {
    n("(?>a|abd)c", "abdc");
    x2("(?>abd|a)c", "abdc", 0, 4);
    n("(?>a*)a", "aaa");
    x2("(?>a*)b", "aab", 0, 3);
}

#[test]
fn keep() {
    x2("foo\\Kbar", "foobar", 3, 6);
    x2("a+\\K", "baaa", 4, 4);
    x2("(?:x\\K)+y", "xxxy", 3, 4);
}

// ============================================================================
// Case folding
// ============================================================================

#[test]
fn case_insensitive_ascii() {
    x2("(?i:a)", "a", 0, 1);
    x2("(?i:a)", "A", 0, 1);
    x2("(?i:A)", "a", 0, 1);
    x2("(?i:i)", "I", 0, 1);
    x2("(?i:I)", "i", 0, 1);
    n("(?i:A)", "b");
    x2("(?i:#RET#)", "#INS##RET#", 5, 10);
    x2("(?i:\\?a)", "?A", 0, 2);
    x2("(?i:\\*A)", "*a", 0, 2);
}

#[test]
fn case_insensitive_classes() {
    x2("(?i:[A-Z])", "i", 0, 1);
    x2("(?i:[a-z])", "I", 0, 1);
    x2("(?i:[A-Z])", "a", 0, 1);
    x2("(?i:[f-m])", "H", 0, 1);
    x2("(?i:[f-m])", "h", 0, 1);
    n("(?i:[f-m])", "e");
    x2("(?i:[A-c])", "D", 0, 1);
    n("(?i:[^a-z])", "A");
    n("(?i:[^a-z])", "a");
    x2("(?i:[!-k])", "Z", 0, 1);
    x2("(?i:[!-k])", "7", 0, 1);
    x2("(?i:[T-}])", "b", 0, 1);
    x2("(?i:[T-}])", "{", 0, 1);
}

#[test]
fn case_insensitive_multi_char_folds() {
    x2("(?i:ss)", "ss", 0, 2);
    x2("(?i:ss)", "Ss", 0, 2);
    x2("(?i:ss)", "SS", 0, 2);
    x2("(?i:ss)", "\u{17F}S", 0, 3);
    x2("(?i:ss)", "s\u{17F}", 0, 3);
    x2("(?i:ss)", "ß", 0, 2);
    x2("(?i:ss)", "\u{1E9E}", 0, 3);
    x2("(?i:xssy)", "xSsy", 0, 4);
    x2("(?i:xssy)", "xßy", 0, 4);
    x2("(?i:xssy)", "x\u{1E9E}y", 0, 5);
    x2("(?i:xßy)", "xssy", 0, 4);
    x2("(?i:xßy)", "xSSy", 0, 4);
    x2("(?i:ß)", "SS", 0, 2);
}

#[test]
fn case_insensitive_non_ascii() {
    x2("(?i)σ", "Σ", 0, 2);
    x2("(?i)ΣΑΣ", "σας", 0, 6);
    x2("(?i)ǆ", "ǅ", 0, 2);
    x2("(?i)straße", "STRASSE", 0, 7);
    x2("(?i)k", "\u{212A}", 0, 3);
}

#[test]
fn option_scoping() {
    n("(?i)(?-i)a", "A");
    n("(?i)(?-i:a)", "A");
    x2("a|(?i)c", "C", 0, 1);
    x2("(?i)c|a", "C", 0, 1);
    x2("(?i)c|a", "A", 0, 1);
    x2("a(?i)b|c", "aB", 0, 2);
    x2("a(?i)b|c", "aC", 0, 2);
    n("a(?i)b|c", "AC");
    n("a(?:(?i)b)|c", "aC");
    x2("(?i:c)|a", "C", 0, 1);
    n("(?i:c)|a", "A");
    x2("(?:X*)(?i:xa)", "XXXa", 0, 4);
    x3("((?i:abc))", "AbC", 0, 3, 1);
    x3("((?m:a.c))", "a\nc", 0, 3, 1);
    x3("(?i:(abc))|(zzz)", "ABC", 0, 3, 1);
    x2("((?i:abc)d)+", "abcdABCd", 0, 8);
}

// ============================================================================
// Subexpression calls
// ============================================================================

#[test]
fn numbered_and_named_calls() {
    x2("(a)\\g<1>", "aa", 0, 2);
    x2("(?<name_2>ab)\\g<name_2>", "abab", 0, 4);
    x3("\\g<n>(?<n>.){0}", "X", 0, 1, 1);
    x2("\\g<n>(abc|df(?<n>.YZ){2,8}){0}", "XYZ", 0, 3);
    x2("\\g<+2>(abc)(ABC){0}", "ABCabc", 0, 6);
    x2("((?<x>abc){0}a\\g<x>d)+", "aabcd", 0, 5);
}

#[test]
fn recursive_calls() {
    x2("\\A(?<n>(a\\g<n>)|)\\z", "aaaa", 0, 4);
    x2("(?<foo>a|\\(\\g<foo>\\))", "a", 0, 1);
    x2("(?<foo>a|\\(\\g<foo>\\))", "((((((a))))))", 0, 13);
    x3("(?<foo>a|\\(\\g<foo>\\))", "((((((((a))))))))", 0, 17, 1);
    x2("(?<n>(a|b\\g<n>c){3,5})", "baaaaca", 1, 5);
    x2("(?<n>(a|b\\g<n>c){3,5})", "baaaacaaaaa", 0, 10);
    x2("(?<pare>\\(([^\\(\\)]++|\\g<pare>)*+\\))", "((a))", 0, 5);
    x3("(\\(((?:[^(]|\\g<1>)*)\\))", "(abc)(abc)", 1, 4, 2);
    x2("\\((?:[^()]|\\g<0>)*\\)", "x(a(b)c)y", 1, 8);
}

#[test]
fn whole_pattern_call() {
    x2("A\\g'0'|B()", "AAAAB", 0, 5);
    x3("(A\\g'0')|B", "AAAAB", 0, 5, 1);
}

#[test]
fn calls_to_groups_defined_later() {
    x2("\\g<bar>|\\zEND(?<bar>.*abc$)", "abcxxxabc", 0, 9);
    x2("\\g<1>|\\zEND(.a.)", "bac", 0, 3);
    x2("\\A(?<n>|a\\g<m>)\\z|\\zEND (?<m>\\g<n>)", "aaaa", 0, 4);
}

// ============================================================================
// Conditionals
// ============================================================================

#[test]
fn conditionals() {
    x2("(a*)(?(1))aa", "aaaaa", 0, 5);
    x2("(a*)(?(-1))aa", "aaaaa", 0, 5);
    x2("(?<name>aaa)(?('name'))aa", "aaaaa", 0, 5);
    x2("(a)(?(1)aa|bb)a", "aaaaa", 0, 4);
    x2("(?:aa|())(?(<1>)aa|bb)a", "aabba", 0, 5);
    x3("(a*)(?(1)aa|a)b", "aaab", 0, 1, 1);
    n("(a)(?(1)a|b)c", "abc");
    x2("(a)(?(1)|)c", "ac", 0, 2);
    x2("(a)?(?(1)b|c)", "xc", 1, 2);
    x2("(a)?(?(1)b|c)", "ab", 0, 2);
}

// ============================================================================
// Multibyte subjects
// ============================================================================

#[test]
fn multibyte_literals_and_repeats() {
    x2("あ", "あ", 0, 3);
    n("い", "あ");
    x2("うう", "うう", 0, 6);
    x2("あいう", "あいう", 0, 9);
    x2("い", "あい", 3, 6);
    x2("いう", "あいう", 3, 9);
    x2("あ*", "あああ", 0, 9);
    x2("あ+?", "あああ", 0, 3);
    x2("(?:あい){2}", "あいあいあい", 0, 12);
    x3("(い+)う", "あいいう", 3, 9, 1);
}

#[test]
fn mixed_width_characters() {
    x2("é+", "xééy", 1, 5);
    x2("[é€𝄞]+", "a€é𝄞b", 1, 10);
    x2(".{3}", "a€𝄞", 0, 8);
    x2("\\x{1D11E}", "𝄞", 0, 4);
}
