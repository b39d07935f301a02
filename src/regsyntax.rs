// regsyntax.rs - Syntax dialect definitions.
// A `Syntax` is three operator/behavior bitsets plus default options; the parser
// consults it for every metacharacter it meets.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::regdefs::Options;

bitflags! {
    /// Metacharacters and escapes recognized by a dialect.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SyntaxOp: u32 {
        const DOT_ANYCHAR                = 1 << 1;
        const ASTERISK_ZERO_INF          = 1 << 2;
        const ESC_ASTERISK_ZERO_INF      = 1 << 3;
        const PLUS_ONE_INF               = 1 << 4;
        const ESC_PLUS_ONE_INF           = 1 << 5;
        const QMARK_ZERO_ONE             = 1 << 6;
        const ESC_QMARK_ZERO_ONE         = 1 << 7;
        const BRACE_INTERVAL             = 1 << 8;
        const ESC_BRACE_INTERVAL         = 1 << 9;
        const VBAR_ALT                   = 1 << 10;
        const ESC_VBAR_ALT               = 1 << 11;
        const LPAREN_SUBEXP              = 1 << 12;
        const ESC_LPAREN_SUBEXP          = 1 << 13;
        const ESC_AZ_BUF_ANCHOR          = 1 << 14;
        const ESC_CAPITAL_G_BEGIN_ANCHOR = 1 << 15;
        const DECIMAL_BACKREF            = 1 << 16;
        const BRACKET_CC                 = 1 << 17;
        const ESC_W_WORD                 = 1 << 18;
        const ESC_LTGT_WORD_BEGIN_END    = 1 << 19;
        const ESC_B_WORD_BOUND           = 1 << 20;
        const ESC_S_WHITE_SPACE          = 1 << 21;
        const ESC_D_DIGIT                = 1 << 22;
        const LINE_ANCHOR                = 1 << 23;
        const POSIX_BRACKET              = 1 << 24;
        const QMARK_NON_GREEDY           = 1 << 25;
        const ESC_CONTROL_CHARS          = 1 << 26;
        const ESC_C_CONTROL              = 1 << 27;
        const ESC_OCTAL3                 = 1 << 28;
        const ESC_X_HEX2                 = 1 << 29;
        const ESC_X_BRACE_HEX8           = 1 << 30;
        const ESC_O_BRACE_OCTAL          = 1 << 31;
    }
}

bitflags! {
    /// Second operator word: group forms and newer escapes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SyntaxOp2: u32 {
        const ESC_CAPITAL_Q_QUOTE            = 1 << 0;
        const QMARK_GROUP_EFFECT             = 1 << 1;
        const OPTION_PERL                    = 1 << 2;
        const OPTION_RUBY                    = 1 << 3;
        const PLUS_POSSESSIVE_REPEAT         = 1 << 4;
        const PLUS_POSSESSIVE_INTERVAL       = 1 << 5;
        const CCLASS_SET_OP                  = 1 << 6;
        const QMARK_LT_NAMED_GROUP           = 1 << 7;
        const ESC_K_NAMED_BACKREF            = 1 << 8;
        const ESC_G_SUBEXP_CALL              = 1 << 9;
        const ATMARK_CAPTURE_HISTORY         = 1 << 10;
        const ESC_CAPITAL_C_BAR_CONTROL      = 1 << 11;
        const ESC_V_VTAB                     = 1 << 13;
        const ESC_U_HEX4                     = 1 << 14;
        const ESC_P_BRACE_CHAR_PROPERTY      = 1 << 16;
        const ESC_P_BRACE_CIRCUMFLEX_NOT     = 1 << 17;
        const ESC_H_XDIGIT                   = 1 << 19;
        const INEFFECTIVE_ESCAPE             = 1 << 20;
        const QMARK_LPAREN_IF_ELSE           = 1 << 21;
        const ESC_CAPITAL_K_KEEP             = 1 << 22;
        const ESC_CAPITAL_R_GENERAL_NEWLINE  = 1 << 23;
        const ESC_CAPITAL_N_O_SUPER_DOT      = 1 << 24;
        const QMARK_TILDE_ABSENT_GROUP       = 1 << 25;
        const ESC_X_Y_TEXT_SEGMENT           = 1 << 26;
        const QMARK_PERL_SUBEXP_CALL         = 1 << 27;
        const QMARK_BRACE_CALLOUT_CONTENTS   = 1 << 28;
        const OPTION_ONIGURUMA               = 1 << 30;
        const QMARK_CAPITAL_P_NAME           = 1 << 31;
    }
}

bitflags! {
    /// Context rules that differ between dialects.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SyntaxBehavior: u32 {
        const CONTEXT_INDEP_REPEAT_OPS         = 1 << 0;
        const CONTEXT_INVALID_REPEAT_OPS       = 1 << 1;
        const ALLOW_UNMATCHED_CLOSE_SUBEXP     = 1 << 2;
        const ALLOW_INVALID_INTERVAL           = 1 << 3;
        const ALLOW_INTERVAL_LOW_ABBREV        = 1 << 4;
        const DIFFERENT_LEN_ALT_LOOK_BEHIND    = 1 << 6;
        const CAPTURE_ONLY_NAMED_GROUP         = 1 << 7;
        const ALLOW_MULTIPLEX_DEFINITION_NAME  = 1 << 8;
        const FIXED_INTERVAL_IS_GREEDY_ONLY    = 1 << 9;
        const ISOLATED_OPTION_CONTINUE_BRANCH  = 1 << 10;
        const VARIABLE_LEN_LOOK_BEHIND         = 1 << 11;
        /// `^`/`$` are anchors anywhere, not only at the ends of a branch.
        const CONTEXT_INDEP_ANCHORS            = 1 << 31;
        const NOT_NEWLINE_IN_NEGATIVE_CC       = 1 << 20;
        const BACKSLASH_ESCAPE_IN_CC           = 1 << 21;
        const ALLOW_EMPTY_RANGE_IN_CC          = 1 << 22;
        const ALLOW_DOUBLE_RANGE_OP_IN_CC      = 1 << 23;
    }
}

/// A complete dialect description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syntax {
    pub name: &'static str,
    pub op: SyntaxOp,
    pub op2: SyntaxOp2,
    pub behavior: SyntaxBehavior,
    /// Options implied by the dialect, merged into the caller's at compile time.
    pub options: Options,
}

impl Syntax {
    #[inline]
    pub fn has_op(&self, op: SyntaxOp) -> bool {
        self.op.contains(op)
    }

    #[inline]
    pub fn has_op2(&self, op: SyntaxOp2) -> bool {
        self.op2.contains(op)
    }

    #[inline]
    pub fn has_behavior(&self, b: SyntaxBehavior) -> bool {
        self.behavior.contains(b)
    }
}

// === Dialect Definitions ===

const GNU_REGEX_OP: SyntaxOp = SyntaxOp::DOT_ANYCHAR
    .union(SyntaxOp::BRACKET_CC)
    .union(SyntaxOp::POSIX_BRACKET)
    .union(SyntaxOp::DECIMAL_BACKREF)
    .union(SyntaxOp::BRACE_INTERVAL)
    .union(SyntaxOp::LPAREN_SUBEXP)
    .union(SyntaxOp::VBAR_ALT)
    .union(SyntaxOp::ASTERISK_ZERO_INF)
    .union(SyntaxOp::PLUS_ONE_INF)
    .union(SyntaxOp::QMARK_ZERO_ONE)
    .union(SyntaxOp::ESC_AZ_BUF_ANCHOR)
    .union(SyntaxOp::ESC_CAPITAL_G_BEGIN_ANCHOR)
    .union(SyntaxOp::ESC_W_WORD)
    .union(SyntaxOp::ESC_B_WORD_BOUND)
    .union(SyntaxOp::ESC_LTGT_WORD_BEGIN_END)
    .union(SyntaxOp::ESC_S_WHITE_SPACE)
    .union(SyntaxOp::ESC_D_DIGIT)
    .union(SyntaxOp::LINE_ANCHOR);

const GNU_REGEX_BV: SyntaxBehavior = SyntaxBehavior::CONTEXT_INDEP_ANCHORS
    .union(SyntaxBehavior::CONTEXT_INDEP_REPEAT_OPS)
    .union(SyntaxBehavior::CONTEXT_INVALID_REPEAT_OPS)
    .union(SyntaxBehavior::ALLOW_INVALID_INTERVAL)
    .union(SyntaxBehavior::BACKSLASH_ESCAPE_IN_CC)
    .union(SyntaxBehavior::ALLOW_DOUBLE_RANGE_OP_IN_CC);

const POSIX_COMMON_OP: SyntaxOp = SyntaxOp::DOT_ANYCHAR
    .union(SyntaxOp::POSIX_BRACKET)
    .union(SyntaxOp::DECIMAL_BACKREF)
    .union(SyntaxOp::BRACKET_CC)
    .union(SyntaxOp::ASTERISK_ZERO_INF)
    .union(SyntaxOp::LINE_ANCHOR)
    .union(SyntaxOp::ESC_CONTROL_CHARS);

const PERL_LIKE_OP: SyntaxOp = GNU_REGEX_OP
    .union(SyntaxOp::QMARK_NON_GREEDY)
    .union(SyntaxOp::ESC_OCTAL3)
    .union(SyntaxOp::ESC_X_HEX2)
    .union(SyntaxOp::ESC_X_BRACE_HEX8)
    .union(SyntaxOp::ESC_O_BRACE_OCTAL)
    .union(SyntaxOp::ESC_CONTROL_CHARS)
    .union(SyntaxOp::ESC_C_CONTROL)
    .difference(SyntaxOp::ESC_LTGT_WORD_BEGIN_END);

const RUBY_OP2: SyntaxOp2 = SyntaxOp2::ESC_CAPITAL_Q_QUOTE
    .union(SyntaxOp2::QMARK_GROUP_EFFECT)
    .union(SyntaxOp2::OPTION_RUBY)
    .union(SyntaxOp2::QMARK_LT_NAMED_GROUP)
    .union(SyntaxOp2::ESC_K_NAMED_BACKREF)
    .union(SyntaxOp2::QMARK_LPAREN_IF_ELSE)
    .union(SyntaxOp2::QMARK_TILDE_ABSENT_GROUP)
    .union(SyntaxOp2::ESC_X_Y_TEXT_SEGMENT)
    .union(SyntaxOp2::ESC_CAPITAL_R_GENERAL_NEWLINE)
    .union(SyntaxOp2::ESC_CAPITAL_N_O_SUPER_DOT)
    .union(SyntaxOp2::ESC_CAPITAL_K_KEEP)
    .union(SyntaxOp2::ESC_G_SUBEXP_CALL)
    .union(SyntaxOp2::ESC_P_BRACE_CHAR_PROPERTY)
    .union(SyntaxOp2::ESC_P_BRACE_CIRCUMFLEX_NOT)
    .union(SyntaxOp2::PLUS_POSSESSIVE_REPEAT)
    .union(SyntaxOp2::CCLASS_SET_OP)
    .union(SyntaxOp2::ESC_CAPITAL_C_BAR_CONTROL)
    .union(SyntaxOp2::ESC_V_VTAB)
    .union(SyntaxOp2::ESC_H_XDIGIT);

const RUBY_BV: SyntaxBehavior = GNU_REGEX_BV
    .union(SyntaxBehavior::ALLOW_INTERVAL_LOW_ABBREV)
    .union(SyntaxBehavior::DIFFERENT_LEN_ALT_LOOK_BEHIND)
    .union(SyntaxBehavior::CAPTURE_ONLY_NAMED_GROUP)
    .union(SyntaxBehavior::ALLOW_MULTIPLEX_DEFINITION_NAME)
    .union(SyntaxBehavior::FIXED_INTERVAL_IS_GREEDY_ONLY);

const PERL_OP2: SyntaxOp2 = SyntaxOp2::ESC_CAPITAL_Q_QUOTE
    .union(SyntaxOp2::QMARK_GROUP_EFFECT)
    .union(SyntaxOp2::OPTION_PERL)
    .union(SyntaxOp2::ESC_P_BRACE_CHAR_PROPERTY)
    .union(SyntaxOp2::ESC_P_BRACE_CIRCUMFLEX_NOT)
    .union(SyntaxOp2::PLUS_POSSESSIVE_REPEAT)
    .union(SyntaxOp2::PLUS_POSSESSIVE_INTERVAL)
    .union(SyntaxOp2::QMARK_LPAREN_IF_ELSE)
    .union(SyntaxOp2::QMARK_TILDE_ABSENT_GROUP)
    .union(SyntaxOp2::ESC_X_Y_TEXT_SEGMENT)
    .union(SyntaxOp2::ESC_CAPITAL_R_GENERAL_NEWLINE)
    .union(SyntaxOp2::ESC_CAPITAL_N_O_SUPER_DOT)
    .union(SyntaxOp2::ESC_CAPITAL_K_KEEP);

const PERL_BV: SyntaxBehavior =
    GNU_REGEX_BV.union(SyntaxBehavior::ISOLATED_OPTION_CONTINUE_BRANCH);

pub static SYNTAX_ONIGURUMA: Syntax = Syntax {
    name: "Oniguruma",
    op: PERL_LIKE_OP,
    op2: RUBY_OP2
        .difference(SyntaxOp2::OPTION_RUBY)
        .union(SyntaxOp2::OPTION_ONIGURUMA)
        .union(SyntaxOp2::QMARK_BRACE_CALLOUT_CONTENTS)
        .union(SyntaxOp2::ESC_U_HEX4)
        .union(SyntaxOp2::ATMARK_CAPTURE_HISTORY),
    behavior: RUBY_BV.union(SyntaxBehavior::VARIABLE_LEN_LOOK_BEHIND),
    options: Options::empty(),
};

pub static SYNTAX_RUBY: Syntax = Syntax {
    name: "Ruby",
    op: PERL_LIKE_OP,
    op2: RUBY_OP2,
    behavior: RUBY_BV,
    options: Options::empty(),
};

pub static SYNTAX_PERL: Syntax = Syntax {
    name: "Perl",
    op: PERL_LIKE_OP,
    op2: PERL_OP2,
    behavior: PERL_BV,
    options: Options::SINGLELINE,
};

pub static SYNTAX_PERL_NT: Syntax = Syntax {
    name: "Perl_NT",
    op: PERL_LIKE_OP,
    op2: PERL_OP2
        .union(SyntaxOp2::QMARK_LT_NAMED_GROUP)
        .union(SyntaxOp2::ESC_K_NAMED_BACKREF)
        .union(SyntaxOp2::ESC_G_SUBEXP_CALL)
        .union(SyntaxOp2::QMARK_PERL_SUBEXP_CALL),
    behavior: PERL_BV
        .union(SyntaxBehavior::CAPTURE_ONLY_NAMED_GROUP)
        .union(SyntaxBehavior::ALLOW_MULTIPLEX_DEFINITION_NAME),
    options: Options::SINGLELINE,
};

pub static SYNTAX_JAVA: Syntax = Syntax {
    name: "Java",
    op: PERL_LIKE_OP.difference(SyntaxOp::ESC_O_BRACE_OCTAL),
    op2: SyntaxOp2::ESC_CAPITAL_Q_QUOTE
        .union(SyntaxOp2::QMARK_GROUP_EFFECT)
        .union(SyntaxOp2::OPTION_PERL)
        .union(SyntaxOp2::PLUS_POSSESSIVE_REPEAT)
        .union(SyntaxOp2::PLUS_POSSESSIVE_INTERVAL)
        .union(SyntaxOp2::CCLASS_SET_OP)
        .union(SyntaxOp2::ESC_V_VTAB)
        .union(SyntaxOp2::ESC_U_HEX4)
        .union(SyntaxOp2::ESC_P_BRACE_CHAR_PROPERTY)
        .union(SyntaxOp2::QMARK_LT_NAMED_GROUP)
        .union(SyntaxOp2::ESC_K_NAMED_BACKREF),
    behavior: GNU_REGEX_BV
        .union(SyntaxBehavior::DIFFERENT_LEN_ALT_LOOK_BEHIND)
        .union(SyntaxBehavior::ISOLATED_OPTION_CONTINUE_BRANCH),
    options: Options::SINGLELINE,
};

pub static SYNTAX_PYTHON: Syntax = Syntax {
    name: "Python",
    op: PERL_LIKE_OP,
    op2: SyntaxOp2::QMARK_GROUP_EFFECT
        .union(SyntaxOp2::OPTION_PERL)
        .union(SyntaxOp2::QMARK_LPAREN_IF_ELSE)
        .union(SyntaxOp2::QMARK_LT_NAMED_GROUP)
        .union(SyntaxOp2::QMARK_CAPITAL_P_NAME)
        .union(SyntaxOp2::ESC_U_HEX4)
        .union(SyntaxOp2::ESC_V_VTAB),
    behavior: GNU_REGEX_BV
        .union(SyntaxBehavior::ALLOW_INTERVAL_LOW_ABBREV)
        .union(SyntaxBehavior::DIFFERENT_LEN_ALT_LOOK_BEHIND)
        .union(SyntaxBehavior::ISOLATED_OPTION_CONTINUE_BRANCH),
    options: Options::SINGLELINE,
};

pub static SYNTAX_POSIX_BASIC: Syntax = Syntax {
    name: "POSIX Basic",
    op: POSIX_COMMON_OP
        .union(SyntaxOp::ESC_LPAREN_SUBEXP)
        .union(SyntaxOp::ESC_BRACE_INTERVAL),
    op2: SyntaxOp2::empty(),
    behavior: SyntaxBehavior::empty(),
    options: Options::SINGLELINE,
};

pub static SYNTAX_POSIX_EXTENDED: Syntax = Syntax {
    name: "POSIX Extended",
    op: POSIX_COMMON_OP
        .union(SyntaxOp::LPAREN_SUBEXP)
        .union(SyntaxOp::BRACE_INTERVAL)
        .union(SyntaxOp::PLUS_ONE_INF)
        .union(SyntaxOp::QMARK_ZERO_ONE)
        .union(SyntaxOp::VBAR_ALT),
    op2: SyntaxOp2::empty(),
    behavior: SyntaxBehavior::CONTEXT_INDEP_ANCHORS
        .union(SyntaxBehavior::CONTEXT_INDEP_REPEAT_OPS)
        .union(SyntaxBehavior::CONTEXT_INVALID_REPEAT_OPS)
        .union(SyntaxBehavior::ALLOW_UNMATCHED_CLOSE_SUBEXP)
        .union(SyntaxBehavior::ALLOW_DOUBLE_RANGE_OP_IN_CC),
    options: Options::SINGLELINE,
};

pub static SYNTAX_GREP: Syntax = Syntax {
    name: "Grep",
    op: SyntaxOp::DOT_ANYCHAR
        .union(SyntaxOp::BRACKET_CC)
        .union(SyntaxOp::POSIX_BRACKET)
        .union(SyntaxOp::ESC_BRACE_INTERVAL)
        .union(SyntaxOp::ESC_LPAREN_SUBEXP)
        .union(SyntaxOp::ESC_VBAR_ALT)
        .union(SyntaxOp::ASTERISK_ZERO_INF)
        .union(SyntaxOp::ESC_PLUS_ONE_INF)
        .union(SyntaxOp::ESC_QMARK_ZERO_ONE)
        .union(SyntaxOp::LINE_ANCHOR)
        .union(SyntaxOp::ESC_W_WORD)
        .union(SyntaxOp::ESC_B_WORD_BOUND)
        .union(SyntaxOp::ESC_LTGT_WORD_BEGIN_END)
        .union(SyntaxOp::DECIMAL_BACKREF),
    op2: SyntaxOp2::empty(),
    behavior: SyntaxBehavior::ALLOW_EMPTY_RANGE_IN_CC
        .union(SyntaxBehavior::NOT_NEWLINE_IN_NEGATIVE_CC),
    options: Options::empty(),
};

/// Every character is literal.
pub static SYNTAX_ASIS: Syntax = Syntax {
    name: "ASIS",
    op: SyntaxOp::empty(),
    op2: SyntaxOp2::INEFFECTIVE_ESCAPE,
    behavior: SyntaxBehavior::empty(),
    options: Options::empty(),
};

pub static DEFAULT_SYNTAX: &Syntax = &SYNTAX_ONIGURUMA;

// === Dialect Selector ===

/// Names a built-in dialect; the serializable handle for a `Syntax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SyntaxDialect {
    #[default]
    Oniguruma,
    Ruby,
    Perl,
    /// Perl plus named groups and subexpression calls.
    PerlNg,
    Java,
    Python,
    PosixBasic,
    PosixExtended,
    Grep,
    Asis,
}

impl SyntaxDialect {
    pub const ALL: [SyntaxDialect; 10] = [
        SyntaxDialect::Oniguruma,
        SyntaxDialect::Ruby,
        SyntaxDialect::Perl,
        SyntaxDialect::PerlNg,
        SyntaxDialect::Java,
        SyntaxDialect::Python,
        SyntaxDialect::PosixBasic,
        SyntaxDialect::PosixExtended,
        SyntaxDialect::Grep,
        SyntaxDialect::Asis,
    ];

    pub fn syntax(self) -> &'static Syntax {
        match self {
            SyntaxDialect::Oniguruma => &SYNTAX_ONIGURUMA,
            SyntaxDialect::Ruby => &SYNTAX_RUBY,
            SyntaxDialect::Perl => &SYNTAX_PERL,
            SyntaxDialect::PerlNg => &SYNTAX_PERL_NT,
            SyntaxDialect::Java => &SYNTAX_JAVA,
            SyntaxDialect::Python => &SYNTAX_PYTHON,
            SyntaxDialect::PosixBasic => &SYNTAX_POSIX_BASIC,
            SyntaxDialect::PosixExtended => &SYNTAX_POSIX_EXTENDED,
            SyntaxDialect::Grep => &SYNTAX_GREP,
            SyntaxDialect::Asis => &SYNTAX_ASIS,
        }
    }

    pub fn name(self) -> &'static str {
        self.syntax().name
    }
}

impl fmt::Display for SyntaxDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `SyntaxDialect::from_str` for an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown syntax dialect: {0}")]
pub struct UnknownDialect(pub String);

impl FromStr for SyntaxDialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Ok(match key.as_str() {
            "oniguruma" | "onig" => SyntaxDialect::Oniguruma,
            "ruby" => SyntaxDialect::Ruby,
            "perl" => SyntaxDialect::Perl,
            "perlng" | "perlnt" => SyntaxDialect::PerlNg,
            "java" => SyntaxDialect::Java,
            "python" => SyntaxDialect::Python,
            "posixbasic" | "bre" => SyntaxDialect::PosixBasic,
            "posixextended" | "ere" => SyntaxDialect::PosixExtended,
            "grep" => SyntaxDialect::Grep,
            "asis" => SyntaxDialect::Asis,
            _ => return Err(UnknownDialect(s.to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perl_family_defaults_to_singleline() {
        for d in [SyntaxDialect::Perl, SyntaxDialect::PerlNg, SyntaxDialect::Java] {
            assert!(d.syntax().options.contains(Options::SINGLELINE), "{d}");
        }
        assert!(SYNTAX_RUBY.options.is_empty());
    }

    #[test]
    fn posix_basic_uses_escaped_groups() {
        let s = SyntaxDialect::PosixBasic.syntax();
        assert!(s.has_op(SyntaxOp::ESC_LPAREN_SUBEXP));
        assert!(!s.has_op(SyntaxOp::LPAREN_SUBEXP));
        assert!(!s.has_op(SyntaxOp::QMARK_NON_GREEDY));
    }

    #[test]
    fn possessive_interval_only_in_perl_family() {
        assert!(!SYNTAX_RUBY.has_op2(SyntaxOp2::PLUS_POSSESSIVE_INTERVAL));
        assert!(SYNTAX_RUBY.has_op2(SyntaxOp2::PLUS_POSSESSIVE_REPEAT));
        assert!(SYNTAX_JAVA.has_op2(SyntaxOp2::PLUS_POSSESSIVE_INTERVAL));
    }

    #[test]
    fn dialect_names_parse() {
        assert_eq!("perl_ng".parse::<SyntaxDialect>(), Ok(SyntaxDialect::PerlNg));
        assert_eq!("POSIX-Extended".parse::<SyntaxDialect>(), Ok(SyntaxDialect::PosixExtended));
        assert!("emacs".parse::<SyntaxDialect>().is_err());
        for d in SyntaxDialect::ALL {
            assert!(!d.name().is_empty());
        }
    }
}
