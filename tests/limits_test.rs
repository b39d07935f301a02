// limits_test.rs - Compile-time and match-time budgets.
//
// Set RUST_LOG=ferrex=warn to see the limit warnings emitted by the executor.

use std::time::{Duration, Instant};

use ferrex::api::Regex;
use ferrex::error::{ErrorKind, RegexError, ResourceLimitKind};
use ferrex::regdefs::DEFAULT_PARSE_DEPTH_LIMIT;
use ferrex::regexec::MatchParam;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn limit_of(err: RegexError) -> ResourceLimitKind {
    match err {
        RegexError::ResourceLimit(kind) => kind,
        other => panic!("expected a resource limit, got {other:?}"),
    }
}

fn catastrophic_subject(n: usize) -> String {
    "a".repeat(n) + "!"
}

/// `n` copies of `open`, then `a`, then `n` copies of `close`.
fn nested(n: usize, open: &str, close: &str) -> String {
    open.repeat(n) + "a" + &close.repeat(n)
}

/// Compiles with default limits and matches on a new thread with the default
/// stack size, so a too-deep recursion aborts the test instead of passing.
fn compile_on_fresh_thread(pattern: String) -> Result<bool, RegexError> {
    std::thread::spawn(move || Regex::new(&pattern)?.is_match("xa"))
        .join()
        .expect("compile thread panicked")
}

#[test]
fn parse_depth() {
    init_tracing();
    let deep = "(?:".repeat(40) + "a" + &")".repeat(40);
    let err = Regex::builder(&deep).parse_depth_limit(16).build().unwrap_err();
    assert_eq!(limit_of(err), ResourceLimitKind::ParseDepth);
    assert!(Regex::new(&deep).is_ok());
}

#[test]
fn default_depth_limit_fits_a_default_stack() {
    init_tracing();
    let limit = DEFAULT_PARSE_DEPTH_LIMIT as usize;
    let over = Err(RegexError::ResourceLimit(ResourceLimitKind::ParseDepth));
    for (open, close) in [("(", ")"), ("(?:", ")"), ("(?>", ")"), ("(?=", ")"), ("(?i:", ")")] {
        assert_eq!(compile_on_fresh_thread(nested(limit, open, close)), Ok(true), "{open} x {limit}");
        assert_eq!(compile_on_fresh_thread(nested(limit + 1, open, close)), over, "{open} x {}", limit + 1);
    }
}

#[test]
fn default_depth_limit_counts_quantifiers() {
    init_tracing();
    let limit = DEFAULT_PARSE_DEPTH_LIMIT as usize;
    let over = Err(RegexError::ResourceLimit(ResourceLimitKind::ParseDepth));

    let stacked = |n: usize| "a".to_string() + &"{1}".repeat(n);
    assert_eq!(compile_on_fresh_thread(stacked(limit)), Ok(true));
    assert_eq!(compile_on_fresh_thread(stacked(limit + 1)), over);
    assert_eq!(compile_on_fresh_thread(stacked(3_000)), over);

    // each level is a group plus the quantifier around it
    let half = limit / 2;
    assert_eq!(compile_on_fresh_thread(nested(half, "(?:", ")+")), Ok(true));
    assert_eq!(compile_on_fresh_thread(nested(half + 1, "(?:", ")+")), over);
}

#[test]
fn deep_patterns_fail_cleanly_far_past_the_limit() {
    init_tracing();
    let over = Err(RegexError::ResourceLimit(ResourceLimitKind::ParseDepth));
    assert_eq!(compile_on_fresh_thread(nested(5_000, "(", ")")), over);
    assert_eq!(compile_on_fresh_thread("[".repeat(5_000) + "a" + &"]".repeat(5_000)), over);
    assert_eq!(compile_on_fresh_thread("[a".to_string() + &"&&a".repeat(5_000) + "]"), over);
}

#[test]
fn capture_count() {
    init_tracing();
    let pattern = "(a)".repeat(5);
    let err = Regex::builder(&pattern).capture_limit(4).build().unwrap_err();
    assert_eq!(limit_of(err), ResourceLimitKind::CaptureCount);
    let re = Regex::builder(&pattern).capture_limit(5).build().unwrap();
    assert_eq!(re.captures_len(), 6);
}

#[test]
fn program_size() {
    init_tracing();
    let err = Regex::builder("(a|b|c|d|e|f|g|h|i)(j|k)").program_size_limit(16).build().unwrap_err();
    assert!(limit_of(err.clone()).is_compile_time());
    assert_eq!(err.code(), -406);
}

#[test]
fn retry_in_match() {
    init_tracing();
    let re = Regex::builder("(a+)+b").retry_limit_in_match(10_000).build().unwrap();
    let err = re.find(&catastrophic_subject(26)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResourceLimit);
    assert_eq!(limit_of(err), ResourceLimitKind::RetryInMatch);
    // a cheap subject stays under the same budget
    assert_eq!(re.find("xxaab").unwrap().map(|m| m.range()), Some(2..5));
}

#[test]
fn retry_in_search() {
    init_tracing();
    // Each start position stays cheap, the sum over all of them does not.
    let re = Regex::builder("a*b")
        .retry_limit_in_match(0)
        .retry_limit_in_search(2_000)
        .build()
        .unwrap();
    let subject = "a".repeat(200);
    let err = re.find(&subject).unwrap_err();
    assert_eq!(limit_of(err), ResourceLimitKind::RetryInSearch);
}

#[test]
fn match_stack() {
    init_tracing();
    let subject = "a".repeat(100) + "b";
    let re = Regex::builder("a*b").match_stack_limit(10).build().unwrap();
    let err = re.find(&subject).unwrap_err();
    assert_eq!(limit_of(err), ResourceLimitKind::MatchStack);
    let re = Regex::builder("a*b").match_stack_limit(1_000).build().unwrap();
    assert_eq!(re.find(&subject).unwrap().map(|m| m.range()), Some(0..101));
}

#[test]
fn time() {
    init_tracing();
    let re = Regex::builder("(a+)+b")
        .retry_limit_in_match(0)
        .retry_limit_in_search(0)
        .time_limit(5)
        .build()
        .unwrap();
    let started = Instant::now();
    let err = re.find(&catastrophic_subject(40)).unwrap_err();
    assert_eq!(limit_of(err), ResourceLimitKind::Time);
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[test]
fn subexp_calls() {
    init_tracing();
    let re = Regex::builder("(?<d>\\d)\\g<d>\\g<d>")
        .subexp_call_limit_in_search(1)
        .build()
        .unwrap();
    let err = re.find("123").unwrap_err();
    assert_eq!(limit_of(err), ResourceLimitKind::SubexpCall);

    let re = Regex::builder("(?<d>\\d)\\g<d>\\g<d>").subexp_call_limit_in_search(0).build().unwrap();
    assert_eq!(re.find("x123").unwrap().map(|m| m.range()), Some(1..4));
}

#[test]
fn limits_are_per_call() {
    init_tracing();
    let tight = Regex::builder("(a+)+b").retry_limit_in_match(100).build().unwrap();
    let loose = Regex::builder("(a+)+b").build().unwrap();
    let subject = catastrophic_subject(10);
    assert!(tight.find(&subject).is_err());
    assert_eq!(loose.find(&subject).unwrap(), None);
}

#[test]
fn match_param_replaces_every_budget() {
    init_tracing();
    let param = MatchParam {
        retry_limit_in_match: 0,
        retry_limit_in_search: 0,
        match_stack_limit: 0,
        time_limit: 0,
        subexp_call_limit_in_search: 0,
    };
    let re = Regex::builder("(a|b)*c").match_param(param).build().unwrap();
    let subject = "ab".repeat(5_000) + "c";
    assert_eq!(re.find(&subject).unwrap().map(|m| m.end()), Some(subject.len()));
}

#[test]
fn limit_codes() {
    let codes = [
        (ResourceLimitKind::MatchStack, -15),
        (ResourceLimitKind::ParseDepth, -16),
        (ResourceLimitKind::RetryInMatch, -17),
        (ResourceLimitKind::RetryInSearch, -18),
        (ResourceLimitKind::SubexpCall, -19),
        (ResourceLimitKind::Time, -20),
        (ResourceLimitKind::CaptureCount, -210),
        (ResourceLimitKind::ProgramSize, -406),
    ];
    for (kind, code) in codes {
        assert_eq!(RegexError::from(kind).code(), code);
    }
}
