// regdefs.rs - Public scalar types, option bitsets and engine-wide limits.
// Everything a caller needs to configure compile and search lives here.

use bitflags::bitflags;

/// A Unicode scalar value (or, for patterns, any value up to `MAX_CODE_POINT`).
pub type CodePoint = u32;

pub const MAX_CODE_POINT: CodePoint = 0x10_FFFF;

// === Limits ===

pub const MAX_REPEAT_NUM: u32 = 100_000;
pub const MAX_CAPTURE_HISTORY_GROUP: usize = 31;
pub const MAX_LOOK_BEHIND_CHARS: u32 = 65_535;

/// Nesting levels (groups, classes, stacked quantifiers). Parsing and
/// compiling recurse once per level, so this must fit a 2 MiB thread stack
/// in an unoptimized build.
pub const DEFAULT_PARSE_DEPTH_LIMIT: u32 = 64;
pub const DEFAULT_CAPTURE_LIMIT: u32 = 32_767;
pub const DEFAULT_PROGRAM_SIZE_LIMIT: u32 = 1 << 20;
pub const DEFAULT_RETRY_LIMIT_IN_MATCH: u64 = 10_000_000;
pub const DEFAULT_RETRY_LIMIT_IN_SEARCH: u64 = 0;
pub const DEFAULT_MATCH_STACK_LIMIT: u32 = 0;
pub const DEFAULT_TIME_LIMIT_MSEC: u64 = 0;
pub const DEFAULT_SUBEXP_CALL_LIMIT_IN_SEARCH: u64 = 0;

bitflags! {
    /// Compile-time and search-time options.
    ///
    /// The low bits change how a pattern is compiled; the `NOT*`,
    /// `CHECK_VALIDITY_OF_STRING` and `MATCH_WHOLE_STRING` bits only make
    /// sense at search time and are ignored by the compiler.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Options: u32 {
        const IGNORECASE         = 1;
        const EXTEND             = 1 << 1;
        /// '.' also matches newline.
        const MULTILINE          = 1 << 2;
        /// '^' means `\A`, '$' means `\Z`.
        const SINGLELINE         = 1 << 3;
        const FIND_LONGEST       = 1 << 4;
        const FIND_NOT_EMPTY     = 1 << 5;
        /// Clears a SINGLELINE coming from the syntax defaults.
        const NEGATE_SINGLELINE  = 1 << 6;
        const DONT_CAPTURE_GROUP = 1 << 7;
        const CAPTURE_GROUP      = 1 << 8;

        const NOTBOL             = 1 << 9;
        const NOTEOL             = 1 << 10;
        /// Accepted for compatibility; subjects are always validated.
        const CHECK_VALIDITY_OF_STRING = 1 << 12;

        const IGNORECASE_IS_ASCII = 1 << 15;
        const WORD_IS_ASCII      = 1 << 16;
        const DIGIT_IS_ASCII     = 1 << 17;
        const SPACE_IS_ASCII     = 1 << 18;
        /// POSIX brackets are ASCII; also implies the three modes above.
        const POSIX_IS_ASCII     = 1 << 19;

        const NOT_BEGIN_STRING   = 1 << 22;
        const NOT_END_STRING     = 1 << 23;
        const NOT_BEGIN_POSITION = 1 << 24;
        const MATCH_WHOLE_STRING = 1 << 26;
    }
}

impl Options {
    /// Bits honoured by `compile`.
    pub const COMPILE_MASK: Options = Options::IGNORECASE
        .union(Options::EXTEND)
        .union(Options::MULTILINE)
        .union(Options::SINGLELINE)
        .union(Options::FIND_LONGEST)
        .union(Options::FIND_NOT_EMPTY)
        .union(Options::NEGATE_SINGLELINE)
        .union(Options::DONT_CAPTURE_GROUP)
        .union(Options::CAPTURE_GROUP)
        .union(Options::IGNORECASE_IS_ASCII)
        .union(Options::WORD_IS_ASCII)
        .union(Options::DIGIT_IS_ASCII)
        .union(Options::SPACE_IS_ASCII)
        .union(Options::POSIX_IS_ASCII);

    /// Bits honoured by `search` / `match_at`.
    pub const SEARCH_MASK: Options = Options::NOTBOL
        .union(Options::NOTEOL)
        .union(Options::CHECK_VALIDITY_OF_STRING)
        .union(Options::NOT_BEGIN_STRING)
        .union(Options::NOT_END_STRING)
        .union(Options::NOT_BEGIN_POSITION)
        .union(Options::MATCH_WHOLE_STRING)
        .union(Options::FIND_NOT_EMPTY)
        .union(Options::FIND_LONGEST);

    pub(crate) const ASCII_MODES: Options = Options::WORD_IS_ASCII
        .union(Options::DIGIT_IS_ASCII)
        .union(Options::SPACE_IS_ASCII)
        .union(Options::POSIX_IS_ASCII);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_do_not_overlap_except_shared_bits() {
        let shared = Options::COMPILE_MASK & Options::SEARCH_MASK;
        assert_eq!(shared, Options::FIND_NOT_EMPTY | Options::FIND_LONGEST);
    }

    #[test]
    fn ascii_modes_are_compile_options() {
        assert!(Options::COMPILE_MASK.contains(Options::ASCII_MODES));
    }
}
