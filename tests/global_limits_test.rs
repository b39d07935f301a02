// global_limits_test.rs - Process-wide default limits.
//
// Kept in its own test binary with a single test: the setters change state
// that every other test in the same process would observe.

use ferrex::api::Regex;
use ferrex::error::{RegexError, ResourceLimitKind};
use ferrex::regcomp::{self, CompileLimits};
use ferrex::regdefs::{
    DEFAULT_CAPTURE_LIMIT, DEFAULT_PARSE_DEPTH_LIMIT, DEFAULT_PROGRAM_SIZE_LIMIT, DEFAULT_RETRY_LIMIT_IN_MATCH,
};
use ferrex::regexec::{self, MatchParam};
use ferrex::regparse;

#[test]
fn defaults_are_snapshotted_when_params_are_built() {
    assert_eq!(MatchParam::default().retry_limit_in_match, DEFAULT_RETRY_LIMIT_IN_MATCH);
    assert_eq!(CompileLimits::default().capture_limit, DEFAULT_CAPTURE_LIMIT);
    assert_eq!(CompileLimits::default().parse_depth_limit, DEFAULT_PARSE_DEPTH_LIMIT);

    let before = MatchParam::default();
    regexec::set_retry_limit_in_match(50);
    let re = Regex::new("(a+)+b").unwrap();
    let err = re.find("aaaaaaaaaaaa!").unwrap_err();
    assert_eq!(err, RegexError::ResourceLimit(ResourceLimitKind::RetryInMatch));

    regexec::set_match_stack_limit(7);
    regexec::set_subexp_call_limit_in_search(3);
    let after = MatchParam::default();
    assert_eq!(after.retry_limit_in_match, 50);
    assert_eq!(after.match_stack_limit, 7);
    assert_eq!(after.subexp_call_limit_in_search, 3);
    assert_ne!(before, after);
    // an already built regex keeps the budgets it was built with
    let err = re.find("aaaaaaaaaaaa!").unwrap_err();
    assert_eq!(err, RegexError::ResourceLimit(ResourceLimitKind::RetryInMatch));

    regparse::set_capture_limit(2);
    regcomp::set_program_size_limit(1_000);
    assert_eq!(CompileLimits::default().program_size_limit, 1_000);
    let err = Regex::new("(a)(b)(c)").unwrap_err();
    assert_eq!(err, RegexError::ResourceLimit(ResourceLimitKind::CaptureCount));

    regexec::set_retry_limit_in_match(before.retry_limit_in_match);
    regexec::set_match_stack_limit(before.match_stack_limit);
    regexec::set_subexp_call_limit_in_search(before.subexp_call_limit_in_search);
    regparse::set_capture_limit(DEFAULT_CAPTURE_LIMIT);
    regcomp::set_program_size_limit(DEFAULT_PROGRAM_SIZE_LIMIT);
    assert_eq!(MatchParam::default(), before);
    assert!(Regex::new("(a)(b)(c)").is_ok());
}
