// error.rs - Error type shared by compile and search.
//
// `Ok(None)` is the only way "no match" is reported; everything in here is a
// failure of the attempt itself.

use thiserror::Error;

use crate::regenc::Encoding;
pub use crate::regerror::{SyntaxErrorKind, UnsupportedFeature};

/// Which budget was exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ResourceLimitKind {
    #[error("parse depth limit over")]
    ParseDepth,
    #[error("capture count limit over")]
    CaptureCount,
    #[error("program size limit over")]
    ProgramSize,
    #[error("retry-limit-in-match over")]
    RetryInMatch,
    #[error("retry-limit-in-search over")]
    RetryInSearch,
    #[error("match-stack limit over")]
    MatchStack,
    #[error("time limit over")]
    Time,
    #[error("subexp-call-limit-in-search over")]
    SubexpCall,
}

impl ResourceLimitKind {
    /// True for limits enforced while compiling.
    pub fn is_compile_time(self) -> bool {
        matches!(
            self,
            ResourceLimitKind::ParseDepth
                | ResourceLimitKind::CaptureCount
                | ResourceLimitKind::ProgramSize
        )
    }

    pub fn code(self) -> i32 {
        match self {
            ResourceLimitKind::MatchStack => -15,
            ResourceLimitKind::ParseDepth => -16,
            ResourceLimitKind::RetryInMatch => -17,
            ResourceLimitKind::RetryInSearch => -18,
            ResourceLimitKind::SubexpCall => -19,
            ResourceLimitKind::Time => -20,
            ResourceLimitKind::CaptureCount => -210,
            ResourceLimitKind::ProgramSize => -406,
        }
    }
}

/// Match-time failures other than encoding and budget problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MatchErrorKind {
    #[error("start offset {0} is outside the subject")]
    StartOutOfRange(usize),
    #[error("range offset {0} is outside the subject")]
    RangeOutOfRange(usize),
    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
    #[error("a pattern compiled with FIND_LONGEST cannot be used in a set")]
    FindLongestInSet,
    #[error("regex index {0} is out of bounds for the set")]
    SetIndexOutOfRange(usize),
}

/// The coarse error taxonomy exposed to wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    UnsupportedFeature,
    ResourceLimit,
    InvalidEncoding,
    Match,
}

/// Error type for regex compilation and matching operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegexError {
    /// Malformed pattern; `offset` is the byte offset in the pattern.
    #[error("syntax error at offset {offset}: {kind}")]
    Syntax { kind: SyntaxErrorKind, offset: usize },
    #[error("unsupported feature at offset {offset}: {feature}")]
    UnsupportedFeature { feature: UnsupportedFeature, offset: usize },
    #[error("{0}")]
    ResourceLimit(ResourceLimitKind),
    /// Subject bytes are not valid in `encoding`; `offset` is the first bad byte.
    #[error("invalid {} byte sequence at offset {offset}", .encoding.name())]
    InvalidEncoding { encoding: Encoding, offset: usize },
    #[error("match error: {0}")]
    Match(MatchErrorKind),
}

impl RegexError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegexError::Syntax { .. } => ErrorKind::Syntax,
            RegexError::UnsupportedFeature { .. } => ErrorKind::UnsupportedFeature,
            RegexError::ResourceLimit(_) => ErrorKind::ResourceLimit,
            RegexError::InvalidEncoding { .. } => ErrorKind::InvalidEncoding,
            RegexError::Match(_) => ErrorKind::Match,
        }
    }

    /// Numeric code compatible with Oniguruma-family bindings.
    pub fn code(&self) -> i32 {
        match self {
            RegexError::Syntax { kind, .. } => kind.code(),
            RegexError::UnsupportedFeature { .. } => -2,
            RegexError::ResourceLimit(limit) => limit.code(),
            RegexError::InvalidEncoding { .. } => -400,
            RegexError::Match(_) => -30,
        }
    }

    pub(crate) fn syntax(kind: SyntaxErrorKind, offset: usize) -> Self {
        RegexError::Syntax { kind, offset }
    }

    pub(crate) fn unsupported(feature: UnsupportedFeature, offset: usize) -> Self {
        RegexError::UnsupportedFeature { feature, offset }
    }
}

impl From<ResourceLimitKind> for RegexError {
    fn from(limit: ResourceLimitKind) -> Self {
        RegexError::ResourceLimit(limit)
    }
}

impl From<MatchErrorKind> for RegexError {
    fn from(err: MatchErrorKind) -> Self {
        RegexError::Match(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_display() {
        let err = RegexError::syntax(SyntaxErrorKind::PrematureEndOfCharClass, 4);
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.code(), -103);
        assert_eq!(
            err.to_string(),
            "syntax error at offset 4: premature end of char-class"
        );
    }

    #[test]
    fn invalid_encoding_display() {
        let err = RegexError::InvalidEncoding { encoding: Encoding::Utf8, offset: 7 };
        assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
        assert_eq!(err.to_string(), "invalid UTF-8 byte sequence at offset 7");
    }

    #[test]
    fn resource_limit_from_kind() {
        let err: RegexError = ResourceLimitKind::RetryInMatch.into();
        assert_eq!(err.kind(), ErrorKind::ResourceLimit);
        assert_eq!(err.code(), -17);
        assert_eq!(err.to_string(), "retry-limit-in-match over");
        assert!(!ResourceLimitKind::RetryInMatch.is_compile_time());
        assert!(ResourceLimitKind::ProgramSize.is_compile_time());
    }

    #[test]
    fn match_error_is_distinct_from_no_match() {
        let err: RegexError = MatchErrorKind::StartOutOfRange(12).into();
        assert_eq!(err.kind(), ErrorKind::Match);
        assert_eq!(err.to_string(), "match error: start offset 12 is outside the subject");
    }
}
