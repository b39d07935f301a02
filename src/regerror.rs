// regerror.rs - Catalogue of pattern errors.
// Each kind keeps the numeric code used by Oniguruma-family engines so that
// callers translating errors across bindings get stable identifiers.

use thiserror::Error;

/// What exactly is wrong with a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum SyntaxErrorKind {
    #[error("end pattern at left brace")]
    EndPatternAtLeftBrace,
    #[error("end pattern at left bracket")]
    EndPatternAtLeftBracket,
    #[error("empty char-class")]
    EmptyCharClass,
    #[error("premature end of char-class")]
    PrematureEndOfCharClass,
    #[error("end pattern at escape")]
    EndPatternAtEscape,
    #[error("end pattern at meta")]
    EndPatternAtMeta,
    #[error("end pattern at control")]
    EndPatternAtControl,
    #[error("invalid meta-code syntax")]
    MetaCodeSyntax,
    #[error("invalid control-code syntax")]
    ControlCodeSyntax,
    #[error("char-class value at end of range")]
    CharClassValueAtEndOfRange,
    #[error("char-class value at start of range")]
    CharClassValueAtStartOfRange,
    #[error("target of repeat operator is not specified")]
    TargetOfRepeatOperatorNotSpecified,
    #[error("target of repeat operator is invalid")]
    TargetOfRepeatOperatorInvalid,
    #[error("unmatched close parenthesis")]
    UnmatchedCloseParenthesis,
    #[error("end pattern with unmatched parenthesis")]
    EndPatternWithUnmatchedParenthesis,
    #[error("end pattern in group")]
    EndPatternInGroup,
    #[error("undefined group option")]
    UndefinedGroupOption,
    #[error("invalid POSIX bracket type")]
    InvalidPosixBracketType,
    #[error("invalid pattern in look-behind")]
    InvalidLookBehindPattern,
    #[error("invalid repeat range {{lower,upper}}")]
    InvalidRepeatRangePattern,
    #[error("too big number")]
    TooBigNumber,
    #[error("too big number for repeat range")]
    TooBigNumberForRepeatRange,
    #[error("upper is smaller than lower in repeat range")]
    UpperSmallerThanLowerInRepeatRange,
    #[error("empty range in char class")]
    EmptyRangeInCharClass,
    #[error("too big backref number")]
    TooBigBackrefNumber,
    #[error("invalid backref number/name")]
    InvalidBackref,
    #[error("numbered backref/call is not allowed. (use name)")]
    NumberedBackrefOrCallNotAllowed,
    #[error("too many captures")]
    TooManyCaptures,
    #[error("too short digits")]
    TooShortDigits,
    #[error("too long wide-char value")]
    TooLongWideCharValue,
    #[error("group name is empty")]
    EmptyGroupName,
    #[error("invalid group name")]
    InvalidGroupName,
    #[error("invalid char in group name")]
    InvalidCharInGroupName,
    #[error("undefined name reference")]
    UndefinedNameReference,
    #[error("undefined group reference")]
    UndefinedGroupReference,
    #[error("multiplex defined name")]
    MultiplexDefinedName,
    #[error("multiplex definition name call")]
    MultiplexDefinitionNameCall,
    #[error("never ending recursion")]
    NeverEndingRecursion,
    #[error("group number is too big for capture history")]
    GroupNumberOverForCaptureHistory,
    #[error("invalid character property name")]
    InvalidCharPropertyName,
    #[error("invalid if-else syntax")]
    InvalidIfElseSyntax,
    #[error("invalid code point value")]
    InvalidCodePointValue,
    #[error("too big wide-char value")]
    TooBigWideCharValue,
    #[error("invalid combination of options")]
    InvalidCombinationOfOptions,
    #[error("pattern is not valid in its encoding")]
    InvalidPatternEncoding,
}

impl SyntaxErrorKind {
    /// Stable numeric code (always negative).
    pub fn code(self) -> i32 {
        use SyntaxErrorKind::*;
        match self {
            EndPatternAtLeftBrace => -100,
            EndPatternAtLeftBracket => -101,
            EmptyCharClass => -102,
            PrematureEndOfCharClass => -103,
            EndPatternAtEscape => -104,
            EndPatternAtMeta => -105,
            EndPatternAtControl => -106,
            MetaCodeSyntax => -108,
            ControlCodeSyntax => -109,
            CharClassValueAtEndOfRange => -110,
            CharClassValueAtStartOfRange => -111,
            TargetOfRepeatOperatorNotSpecified => -113,
            TargetOfRepeatOperatorInvalid => -114,
            UnmatchedCloseParenthesis => -116,
            EndPatternWithUnmatchedParenthesis => -117,
            EndPatternInGroup => -118,
            UndefinedGroupOption => -119,
            InvalidPosixBracketType => -121,
            InvalidLookBehindPattern => -122,
            InvalidRepeatRangePattern => -123,
            TooBigNumber => -200,
            TooBigNumberForRepeatRange => -201,
            UpperSmallerThanLowerInRepeatRange => -202,
            EmptyRangeInCharClass => -203,
            TooBigBackrefNumber => -207,
            InvalidBackref => -208,
            NumberedBackrefOrCallNotAllowed => -209,
            TooManyCaptures => -210,
            TooShortDigits => -211,
            TooLongWideCharValue => -212,
            EmptyGroupName => -214,
            InvalidGroupName => -215,
            InvalidCharInGroupName => -216,
            UndefinedNameReference => -217,
            UndefinedGroupReference => -218,
            MultiplexDefinedName => -219,
            MultiplexDefinitionNameCall => -220,
            NeverEndingRecursion => -221,
            GroupNumberOverForCaptureHistory => -222,
            InvalidCharPropertyName => -223,
            InvalidIfElseSyntax => -224,
            InvalidCodePointValue => -400,
            TooBigWideCharValue => -401,
            InvalidCombinationOfOptions => -403,
            InvalidPatternEncoding => -404,
        }
    }
}

/// Constructs that parse but that this engine does not execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[non_exhaustive]
pub enum UnsupportedFeature {
    #[error("absent operator (?~...)")]
    AbsentOperator,
    #[error("callouts")]
    Callout,
    #[error("extended grapheme cluster \\X")]
    TextSegment,
    #[error("text segment boundaries \\y and \\Y")]
    TextSegmentBoundary,
    #[error("backreference with nest level")]
    BackrefWithLevel,
    #[error("look-behind without a bounded length")]
    UnboundedLookBehind,
    #[error("look-behind with alternatives of different length")]
    VariableLengthLookBehind,
    #[error("backreference or call inside look-behind")]
    ReferenceInLookBehind,
    #[error("whole-option change inside a group")]
    WholeOption,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_negative_and_distinct() {
        use std::collections::HashSet;
        let kinds = [
            SyntaxErrorKind::EmptyCharClass,
            SyntaxErrorKind::TooBigNumberForRepeatRange,
            SyntaxErrorKind::UndefinedNameReference,
            SyntaxErrorKind::InvalidBackref,
            SyntaxErrorKind::NeverEndingRecursion,
            SyntaxErrorKind::InvalidPatternEncoding,
        ];
        let codes: HashSet<i32> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), kinds.len());
        assert!(codes.iter().all(|&c| c < 0));
    }

    #[test]
    fn messages_match_catalogue() {
        assert_eq!(SyntaxErrorKind::EmptyCharClass.to_string(), "empty char-class");
        assert_eq!(
            SyntaxErrorKind::InvalidRepeatRangePattern.to_string(),
            "invalid repeat range {lower,upper}"
        );
        assert_eq!(UnsupportedFeature::AbsentOperator.to_string(), "absent operator (?~...)");
    }
}
