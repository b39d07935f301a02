// compat_syntax.rs - Dialect-specific behaviour.
//
// Same x2/x3/n convention as compat_utf8.rs, with the dialect passed
// explicitly. e_syn expects compilation to fail with the given error.

use ferrex::error::RegexError;
use ferrex::regcomp::{compile, CompileLimits};
use ferrex::regdefs::Options;
use ferrex::regenc::Encoding;
use ferrex::regerror::{SyntaxErrorKind, UnsupportedFeature};
use ferrex::regexec::{search, MatchParam};
use ferrex::region::Region;
use ferrex::regsyntax::*;

fn search_syn(syntax: &'static Syntax, pattern: &str, input: &str) -> Option<Region> {
    let reg = compile(
        pattern.as_bytes(),
        Encoding::Utf8,
        Options::empty(),
        syntax,
        &CompileLimits::default(),
    )
    .unwrap_or_else(|e| panic!("[{}] compile failed for {pattern:?}: {e}", syntax.name));
    search(
        &reg,
        input.as_bytes(),
        Encoding::Utf8,
        0,
        input.len(),
        Options::empty(),
        &MatchParam::default(),
    )
    .unwrap_or_else(|e| panic!("[{}] search failed for {pattern:?}: {e}", syntax.name))
}

fn x2_syn(syntax: &'static Syntax, pattern: &str, input: &str, from: usize, to: usize) {
    let region = search_syn(syntax, pattern, input).unwrap_or_else(|| {
        panic!("[{}] x2: expected match for {pattern:?} against {input:?}", syntax.name)
    });
    assert_eq!(
        (region.start(), region.end()),
        (from, to),
        "[{}] x2: wrong span for {pattern:?} against {input:?}",
        syntax.name
    );
}

fn x3_syn(syntax: &'static Syntax, pattern: &str, input: &str, from: usize, to: usize, mem: usize) {
    let region = search_syn(syntax, pattern, input).unwrap_or_else(|| {
        panic!("[{}] x3: expected match for {pattern:?} against {input:?}", syntax.name)
    });
    let span = region
        .get(mem)
        .unwrap_or_else(|| panic!("[{}] x3: group {mem} of {pattern:?} unset", syntax.name));
    assert_eq!(
        (span.start, span.end),
        (from, to),
        "[{}] x3: wrong span for group {mem} of {pattern:?}",
        syntax.name
    );
}

fn n_syn(syntax: &'static Syntax, pattern: &str, input: &str) {
    let found = search_syn(syntax, pattern, input);
    assert!(
        found.is_none(),
        "[{}] n: expected no match for {pattern:?} against {input:?}, got {found:?}",
        syntax.name
    );
}

fn e_syn(syntax: &'static Syntax, pattern: &str, check: impl Fn(&RegexError) -> bool) {
    let result = compile(
        pattern.as_bytes(),
        Encoding::Utf8,
        Options::empty(),
        syntax,
        &CompileLimits::default(),
    );
    match result {
        Ok(_) => panic!("[{}] e: expected {pattern:?} to be rejected", syntax.name),
        Err(err) => assert!(check(&err), "[{}] e: unexpected error for {pattern:?}: {err:?}", syntax.name),
    }
}

fn syntax_error(expected: SyntaxErrorKind) -> impl Fn(&RegexError) -> bool {
    move |err| matches!(err, RegexError::Syntax { kind, .. } if *kind == expected)
}

fn unsupported(expected: UnsupportedFeature) -> impl Fn(&RegexError) -> bool {
    move |err| matches!(err, RegexError::UnsupportedFeature { feature, .. } if *feature == expected)
}

// ============================================================================
// Shared cases
// ============================================================================

fn check_reluctant_interval(syn: &'static Syntax) {
    x2_syn(syn, "a{1,3}?", "aaa", 0, 1);
    x2_syn(syn, "a{3}", "aaa", 0, 3);
    x2_syn(syn, "a{3}?", "aaa", 0, 3);
    n_syn(syn, "a{3}?", "aa");
    x2_syn(syn, "a{3,3}?", "aaa", 0, 3);
    n_syn(syn, "a{3,3}?", "aa");
}

fn check_possessive_interval(syn: &'static Syntax) {
    x2_syn(syn, "a{1,3}+", "aaaaaa", 0, 3);
    x2_syn(syn, "a{3}+", "aaaaaa", 0, 3);
    x2_syn(syn, "a{3,3}+", "aaaaaa", 0, 3);
    n_syn(syn, "a{1,3}+a", "aaa");
}

fn check_isolated_option(syn: &'static Syntax) {
    x2_syn(syn, "", "", 0, 0);
    x2_syn(syn, "^", "", 0, 0);
    n_syn(syn, "^a", "\na");
    n_syn(syn, ".", "\n");
    x2_syn(syn, "(?s:.)", "\n", 0, 1);
    x2_syn(syn, "(?s).", "\n", 0, 1);
    x2_syn(syn, "(?s)a|.", "\n", 0, 1);
    n_syn(syn, "(?s:a)|.", "\n");
    x2_syn(syn, "b(?s)a|.", "\n", 0, 1);
    n_syn(syn, "((?s)a)|.", "\n");
    n_syn(syn, "b(?:(?s)a)|z|.", "\n");
    n_syn(syn, ".|b(?s)a", "\n");
    n_syn(syn, ".(?s)", "\n");
    n_syn(syn, "(?s)(?-s)a|.", "\n");
    x2_syn(syn, "(?s)a|.(?-s)", "\n", 0, 1);
    x2_syn(syn, "(?s)a|((?-s)).", "\n", 0, 1);
    x2_syn(syn, "(?s)a|(?:(?-s)).", "\n", 0, 1);
    x2_syn(syn, "(?s)a|(?:).", "\n", 0, 1);
    x2_syn(syn, "(?s)a|(?:.)", "\n", 0, 1);
    x2_syn(syn, "(?s)a|(?:a*).", "\n", 0, 1);
    n_syn(syn, "a|(?:).", "\n");
    n_syn(syn, "a|(?:)(.)", "\n");
    x2_syn(syn, "(?s)a|(?:)(.)", "\n", 0, 1);
    x2_syn(syn, "b(?s)a|(?:)(.)", "\n", 0, 1);
    n_syn(syn, "b((?s)a)|(?:)(.)", "\n");
    // the option reaches later alternatives of the same group
    x2_syn(syn, "a(?i)b|c", "C", 0, 1);
}

fn check_prec_read(syn: &'static Syntax) {
    x2_syn(syn, "(?=a).b", "ab", 0, 2);
    x2_syn(syn, "(?=ab|(.))\\1", "ab", 1, 2);
    n_syn(syn, "(?!(.)z)a\\1", "aa");
}

fn check_look_behind(syn: &'static Syntax) {
    x2_syn(syn, "(?<=a)b", "ab", 1, 2);
    x2_syn(syn, "(?<=a|b)c", "abc", 2, 3);
    n_syn(syn, "(?<!RMA)X", "123RMAX");
    x2_syn(syn, "(?<=RMA)X", "123RMAX", 6, 7);
    n_syn(syn, "(?<!RMA)$", "123RMA");
    x2_syn(syn, "(?<=RMA)$", "123RMA", 6, 6);
    n_syn(syn, "(?<!RMA)\\Z", "123RMA");
    x2_syn(syn, "(?<=RMA)\\Z", "123RMA", 6, 6);
    n_syn(syn, "(?<!RMA)\\z", "123RMA");
    x2_syn(syn, "(?<=RMA)\\z", "123RMA", 6, 6);
    n_syn(syn, "(?<!c|c)a", "ca");
}

fn check_char_class(syn: &'static Syntax) {
    x2_syn(syn, "[\\w\\-%]", "a", 0, 1);
    x2_syn(syn, "[\\w\\-%]", "%", 0, 1);
    x2_syn(syn, "[\\w\\-%]", "-", 0, 1);
    n_syn(syn, "[\\w\\-%]", "!");
}

fn check_ascii_option(syn: &'static Syntax) {
    x2_syn(syn, "(?a)\\w", "a", 0, 1);
    x2_syn(syn, "\\w", "あ", 0, 3);
    n_syn(syn, "(?a)\\w", "あ");
    x2_syn(syn, "\\s", "\u{3000}", 0, 3);
    n_syn(syn, "(?a)\\s", "\u{3000}");
    x2_syn(syn, "\\d", "５", 0, 3);
    n_syn(syn, "(?a)\\d", "５");
    x2_syn(syn, "あ\\b ", "あ ", 0, 4);
    n_syn(syn, "(?a)あ\\b ", "あ ");
    n_syn(syn, "あ\\B ", "あ ");
    x2_syn(syn, "(?a)あ\\B ", "あ ", 0, 4);
    x2_syn(syn, "(?a)\\W", "あ", 0, 3);
    n_syn(syn, "\\W", "あ");
    x2_syn(syn, "(?a)\\S", "\u{3000}", 0, 3);
    n_syn(syn, "\\S", "\u{3000}");
    x2_syn(syn, "(?a)\\D", "５", 0, 3);
    n_syn(syn, "\\D", "５");
}

fn check_single_multi(syn: &'static Syntax) {
    n_syn(syn, ".", "\n");
    x2_syn(syn, "(?s).", "\n", 0, 1);
    n_syn(syn, "^abc", "\nabc");
    x2_syn(syn, "(?m)^abc", "\nabc", 1, 4);
    n_syn(syn, "abc$", "abc\ndef");
    x2_syn(syn, "abc$", "abc\n", 0, 3);
    x2_syn(syn, "(?m)abc$", "abc\ndef", 0, 3);
}

fn check_bre_anchors(syn: &'static Syntax) {
    x2_syn(syn, "a\\^b", "a^b", 0, 3);
    x2_syn(syn, "a^b", "a^b", 0, 3);
    x2_syn(syn, "a\\$b", "a$b", 0, 3);
    x2_syn(syn, "a$b", "a$b", 0, 3);

    x2_syn(syn, "^ab", "ab", 0, 2);
    x2_syn(syn, "(^ab)", "(^ab)", 0, 5);
    x2_syn(syn, "\\(^ab\\)", "ab", 0, 2);
    x2_syn(syn, "\\\\(^ab\\\\)", "\\(^ab\\)", 0, 7);
    n_syn(syn, "\\\\\\(^ab\\\\\\)", "\\ab\\");
    x2_syn(syn, "^\\\\\\(ab\\\\\\)", "\\ab\\", 0, 4);

    x2_syn(syn, "ab$", "ab", 0, 2);
    x2_syn(syn, "(ab$)", "(ab$)", 0, 5);
    x2_syn(syn, "\\(ab$\\)", "ab", 0, 2);
    x2_syn(syn, "\\\\(ab$\\\\)", "\\(ab$\\)", 0, 7);
    n_syn(syn, "\\\\\\(ab$\\\\\\)", "\\ab\\");
    x2_syn(syn, "\\\\\\(ab\\\\\\)$", "\\ab\\", 0, 4);
}

// ============================================================================
// Perl
// ============================================================================

#[test]
fn perl_reluctant_interval() {
    check_reluctant_interval(&SYNTAX_PERL);
}

#[test]
fn perl_possessive_interval() {
    check_possessive_interval(&SYNTAX_PERL);
}

#[test]
fn perl_isolated_option() {
    check_isolated_option(&SYNTAX_PERL);
}

#[test]
fn perl_prec_read() {
    check_prec_read(&SYNTAX_PERL);
}

#[test]
fn perl_look_behind() {
    check_look_behind(&SYNTAX_PERL);
}

#[test]
fn perl_char_class() {
    check_char_class(&SYNTAX_PERL);
}

#[test]
fn perl_single_line_by_default() {
    check_single_multi(&SYNTAX_PERL);
}

#[test]
fn perl_quote_and_properties() {
    x2_syn(&SYNTAX_PERL, "\\Qa.b*\\E", "xa.b*", 1, 5);
    n_syn(&SYNTAX_PERL, "\\Qa.b\\E", "axb");
    x2_syn(&SYNTAX_PERL, "\\p{Lu}+", "abcDEF", 3, 6);
    x2_syn(&SYNTAX_PERL, "\\P{L}", "ab1", 2, 3);
}

#[test]
fn perl_variable_length_look_behind_is_rejected() {
    e_syn(&SYNTAX_PERL, "(?<=a|bc)x", unsupported(UnsupportedFeature::VariableLengthLookBehind));
    e_syn(&SYNTAX_PERL, "(?<=ab?)x", unsupported(UnsupportedFeature::VariableLengthLookBehind));
}

#[test]
fn perl_has_no_named_groups() {
    e_syn(&SYNTAX_PERL, "(?<n>a)", syntax_error(SyntaxErrorKind::UndefinedGroupOption));
}

#[test]
fn perl_empty_group() {
    x3_syn(&SYNTAX_PERL, "()", "abc", 0, 0, 1);
}

#[test]
fn perl_unmatched_paren() {
    e_syn(&SYNTAX_PERL, "(", syntax_error(SyntaxErrorKind::EndPatternWithUnmatchedParenthesis));
    e_syn(&SYNTAX_PERL, "a)", syntax_error(SyntaxErrorKind::UnmatchedCloseParenthesis));
}

// ============================================================================
// Perl_NT (named groups and subexpression calls)
// ============================================================================

#[test]
fn perl_nt_case_insensitive() {
    let syn = &SYNTAX_PERL_NT;
    x2_syn(syn, "(?i)test", "test", 0, 4);
    x2_syn(syn, "(?-i)test", "test", 0, 4);
    x2_syn(syn, "(?i)test", "TEST", 0, 4);
    n_syn(syn, "(?-i)test", "teSt");
    x2_syn(syn, "(?i)te(?-i)st", "TEst", 0, 4);
    n_syn(syn, "(?i)te(?-i)st", "TesT");
}

#[test]
fn perl_nt_relative_call() {
    let syn = &SYNTAX_PERL_NT;
    x2_syn(syn, "(abc)(?-1)", "abcabc", 0, 6);
    x2_syn(syn, "(?+1)(abc)", "abcabc", 0, 6);
    x2_syn(syn, "(abc)(?1)", "abcabc", 0, 6);
}

#[test]
fn perl_nt_named_call_and_recursion() {
    let syn = &SYNTAX_PERL_NT;
    x2_syn(syn, "(?<n>[0-9]+)-(?&n)", "12-345", 0, 6);
    x2_syn(syn, "\\((?:[^()]|(?R))*\\)", "x(a(b)c)", 1, 8);
    x2_syn(syn, "(?<d>a)\\k<d>", "aa", 0, 2);
}

#[test]
fn perl_nt_only_named_groups_capture() {
    let syn = &SYNTAX_PERL_NT;
    let region = search_syn(syn, "(?<n>a)(b)", "ab").unwrap();
    assert_eq!(region.len(), 2);
    x3_syn(syn, "(?<n>a)(b)", "ab", 0, 1, 1);
}

// ============================================================================
// Java
// ============================================================================

#[test]
fn java_reluctant_interval() {
    check_reluctant_interval(&SYNTAX_JAVA);
}

#[test]
fn java_possessive_interval() {
    check_possessive_interval(&SYNTAX_JAVA);
}

#[test]
fn java_isolated_option() {
    check_isolated_option(&SYNTAX_JAVA);
}

#[test]
fn java_prec_read() {
    check_prec_read(&SYNTAX_JAVA);
}

#[test]
fn java_look_behind() {
    check_look_behind(&SYNTAX_JAVA);
}

#[test]
fn java_char_class() {
    check_char_class(&SYNTAX_JAVA);
    x2_syn(&SYNTAX_JAVA, "[a-z&&[^aeiou]]+", "aebcd", 2, 5);
}

#[test]
fn java_alternatives_of_different_length_in_look_behind() {
    x2_syn(&SYNTAX_JAVA, "(?<=ab|c)x", "abx", 2, 3);
    x2_syn(&SYNTAX_JAVA, "(?<=ab|c)x", "cx", 1, 2);
    n_syn(&SYNTAX_JAVA, "(?<!ab|b)c", "bbc");
    n_syn(&SYNTAX_JAVA, "(?<!b|ab)c", "bbc");
    e_syn(&SYNTAX_JAVA, "(?<=ab?)x", unsupported(UnsupportedFeature::VariableLengthLookBehind));
}

#[test]
fn java_escapes() {
    x2_syn(&SYNTAX_JAVA, "\\u0041", "A", 0, 1);
    x2_syn(&SYNTAX_JAVA, "\\v", "\u{0b}", 0, 1);
    x2_syn(&SYNTAX_JAVA, "(?<w>o)\\k<w>", "foo", 1, 3);
}

// ============================================================================
// Python
// ============================================================================

#[test]
fn python_reluctant_interval() {
    check_reluctant_interval(&SYNTAX_PYTHON);
}

#[test]
fn python_option_ascii() {
    check_ascii_option(&SYNTAX_PYTHON);
}

#[test]
fn python_single_multi() {
    check_single_multi(&SYNTAX_PYTHON);
}

#[test]
fn python_isolated_option() {
    check_isolated_option(&SYNTAX_PYTHON);
}

#[test]
fn python_named_group() {
    x3_syn(&SYNTAX_PYTHON, "(?P<name>abc)", "abc", 0, 3, 1);
    x2_syn(&SYNTAX_PYTHON, "(?<name>abc)", "abc", 0, 3);
}

#[test]
fn python_named_backref() {
    x2_syn(&SYNTAX_PYTHON, "(?P<name>abc)(?P=name)", "abcabc", 0, 6);
    n_syn(&SYNTAX_PYTHON, "(?P<name>abc)(?P=name)", "abcab");
}

#[test]
fn python_named_call() {
    x2_syn(&SYNTAX_PYTHON, "(?P<name>abc){0}(?P>name)", "abc", 0, 3);
    x2_syn(
        &SYNTAX_PYTHON,
        "(?P<expr>[^()]+|\\((?P>expr)\\)){0}(?P>expr)",
        "((((xyz))))",
        0,
        11,
    );
    e_syn(&SYNTAX_PYTHON, "(?P!name)", syntax_error(SyntaxErrorKind::UndefinedGroupOption));
}

#[test]
fn python_conditional() {
    x2_syn(&SYNTAX_PYTHON, "(?P<q>a)?(?(q)b|c)", "ab", 0, 2);
    x2_syn(&SYNTAX_PYTHON, "(?P<q>a)?(?(q)b|c)", "c", 0, 1);
    n_syn(&SYNTAX_PYTHON, "^(?P<q>a)?(?(q)b|c)$", "ac");
}

#[test]
fn python_unicode_escape_u() {
    x2_syn(&SYNTAX_PYTHON, "\\u0041", "A", 0, 1);
    x2_syn(&SYNTAX_PYTHON, "\\u3042+", "ああ", 0, 6);
    e_syn(&SYNTAX_PYTHON, "\\u004", syntax_error(SyntaxErrorKind::TooShortDigits));
}

// ============================================================================
// Ruby and Oniguruma
// ============================================================================

#[test]
fn ruby_fixed_interval_is_greedy_only() {
    // `{n}?` is an optional `{n}`, not a lazy one.
    x2_syn(&SYNTAX_RUBY, "a{3}?", "aa", 0, 0);
    x2_syn(&SYNTAX_RUBY, "a{3}?", "aaa", 0, 3);
    x2_syn(&SYNTAX_RUBY, "a{1,3}?", "aaa", 0, 1);
}

#[test]
fn ruby_interval_plus_is_nested() {
    // `{n,m}+` repeats the interval instead of making it possessive.
    x2_syn(&SYNTAX_RUBY, "a{1,2}+", "aaaaa", 0, 5);
    x2_syn(&SYNTAX_ONIGURUMA, "a{1,2}+b", "aaaab", 0, 5);
    x2_syn(&SYNTAX_RUBY, "a++", "aaa", 0, 3);
    n_syn(&SYNTAX_RUBY, "a++a", "aaa");
}

#[test]
fn ruby_rejects_variable_length_look_behind() {
    x2_syn(&SYNTAX_ONIGURUMA, "(?<=ab?)x", "abx", 2, 3);
    x2_syn(&SYNTAX_ONIGURUMA, "(?<=ab?)x", "ax", 1, 2);
    x2_syn(&SYNTAX_RUBY, "(?<=ab|c)x", "cx", 1, 2);
    e_syn(&SYNTAX_RUBY, "(?<=ab?)x", unsupported(UnsupportedFeature::VariableLengthLookBehind));
}

#[test]
fn ruby_options() {
    x2_syn(&SYNTAX_RUBY, "(?m).", "\n", 0, 1);
    x2_syn(&SYNTAX_RUBY, "(?i:ABC)", "abc", 0, 3);
    e_syn(&SYNTAX_RUBY, "(?W)\\w", syntax_error(SyntaxErrorKind::UndefinedGroupOption));
    x2_syn(&SYNTAX_ONIGURUMA, "(?W)\\w", "aあ", 0, 1);
}

#[test]
fn oniguruma_isolated_option_swallows_alternatives() {
    n_syn(&SYNTAX_ONIGURUMA, "a(?i)b|c", "C");
    x2_syn(&SYNTAX_ONIGURUMA, "a(?i)b|c", "aC", 0, 2);
    x2_syn(&SYNTAX_RUBY, "a(?i)b|c", "aB", 0, 2);
}

#[test]
fn named_groups_hide_unnamed_ones() {
    for syn in [&SYNTAX_ONIGURUMA, &SYNTAX_RUBY] {
        let region = search_syn(syn, "(?<a>x)(y)", "xy").unwrap();
        assert_eq!(region.len(), 2);
    }
    let region = search_syn(&SYNTAX_JAVA, "(?<a>x)(y)", "xy").unwrap();
    assert_eq!(region.len(), 3);
}

// ============================================================================
// POSIX and grep
// ============================================================================

#[test]
fn posix_basic_bre_anchors() {
    check_bre_anchors(&SYNTAX_POSIX_BASIC);
}

#[test]
fn posix_basic_operators() {
    let syn = &SYNTAX_POSIX_BASIC;
    x3_syn(syn, "\\(ab\\)*c", "ababc", 2, 4, 1);
    x2_syn(syn, "a+", "aa+", 1, 3);
    x2_syn(syn, "a\\{2\\}", "baaa", 1, 3);
    x2_syn(syn, "\\(a\\)\\1", "xaa", 1, 3);
    x2_syn(syn, "*a", "*a", 0, 2);
    x2_syn(syn, "[[:digit:]]", "x7", 1, 2);
}

#[test]
fn posix_extended_operators() {
    let syn = &SYNTAX_POSIX_EXTENDED;
    x3_syn(syn, "(ab)+c", "ababc", 2, 4, 1);
    x2_syn(syn, "a|b", "cb", 1, 2);
    x2_syn(syn, "a{2,3}", "aaaa", 0, 3);
    // no lazy quantifiers: `?` applies to the whole `a+`
    x2_syn(syn, "a+?", "aaa", 0, 3);
    x2_syn(syn, "a)", "a)", 0, 2);
    n_syn(syn, "b^", "b^");
}

#[test]
fn posix_extended_rejects_leading_repeat() {
    e_syn(
        &SYNTAX_POSIX_EXTENDED,
        "*a",
        syntax_error(SyntaxErrorKind::TargetOfRepeatOperatorNotSpecified),
    );
    e_syn(
        &SYNTAX_POSIX_EXTENDED,
        "(?:a)",
        syntax_error(SyntaxErrorKind::TargetOfRepeatOperatorNotSpecified),
    );
}

#[test]
fn grep_bre_anchors() {
    check_bre_anchors(&SYNTAX_GREP);
}

#[test]
fn grep_alternation() {
    x2_syn(&SYNTAX_GREP, "zz\\|^ab", "ab", 0, 2);
    x2_syn(&SYNTAX_GREP, "ab$\\|zz", "ab", 0, 2);
}

#[test]
fn grep_literal_star() {
    x2_syn(&SYNTAX_GREP, "*", "*", 0, 1);
    x2_syn(&SYNTAX_GREP, "^*", "*", 0, 1);
}

#[test]
fn grep_literal_question_mark() {
    x2_syn(&SYNTAX_GREP, "abc\\|?", "?", 0, 1);
}

#[test]
fn grep_literal_braces() {
    x2_syn(&SYNTAX_GREP, "\\{1\\}", "{1}", 0, 3);
    x2_syn(&SYNTAX_GREP, "^\\{1\\}", "{1}", 0, 3);
    x2_syn(&SYNTAX_GREP, "\\(\\{1\\}\\)", "{1}", 0, 3);
    x2_syn(&SYNTAX_GREP, "^\\(\\{1\\}\\)", "{1}", 0, 3);
}

#[test]
fn grep_bare_braces_literal() {
    x2_syn(&SYNTAX_GREP, "{1}", "{1}", 0, 3);
    x2_syn(&SYNTAX_GREP, "^{1}", "{1}", 0, 3);
    x2_syn(&SYNTAX_GREP, "\\({1,2}\\)", "{1,2}", 0, 5);
}

#[test]
fn grep_lines_and_words() {
    x2_syn(&SYNTAX_GREP, "^b", "a\nb", 2, 3);
    x2_syn(&SYNTAX_GREP, "\\<cat\\>", "concat cat", 7, 10);
    x2_syn(&SYNTAX_GREP, "a\\+", "baa", 1, 3);
    n_syn(&SYNTAX_GREP, "[^a]", "\n");
}

// ============================================================================
// ASIS
// ============================================================================

#[test]
fn asis_everything_is_literal() {
    let syn = &SYNTAX_ASIS;
    x2_syn(syn, "a.b", "axba.b", 3, 6);
    n_syn(syn, "a.b", "axb");
    x2_syn(syn, "\\d+", "1\\d+", 1, 4);
    x2_syn(syn, "(a|b)*", "(a|b)*", 0, 6);
    x2_syn(syn, "[^x]", "[^x]", 0, 4);
}

#[test]
fn dialect_names_round_trip() {
    for dialect in SyntaxDialect::ALL {
        let parsed: SyntaxDialect = dialect.name().parse().unwrap();
        assert_eq!(parsed, dialect);
    }
}
