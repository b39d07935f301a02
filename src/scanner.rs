// scanner.rs - Multi-pattern scanner for syntax highlighters.
//
// Follows the OnigScanner interface used by TextMate-grammar engines: find
// the earliest match of any pattern from a start position, with results
// optionally reported in UTF-16 code units.

use std::sync::Arc;

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::error::RegexError;
use crate::regcomp::{compile, CompileLimits};
use crate::regdefs::Options;
use crate::regenc::Encoding;
use crate::regexec::{Executor, MatchParam};
use crate::regint::{Op, RegexType};
use crate::region::Region;
use crate::regset::{RegSet, RegSetLead};
use crate::regsyntax::SyntaxDialect;

/// Span of one capture group. Unmatched groups report `0, 0, 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureIndex {
    pub start: usize,
    pub end: usize,
    /// `end - start`.
    pub length: usize,
}

impl CaptureIndex {
    fn new(start: usize, end: usize) -> Self {
        CaptureIndex { start, end, length: end - start }
    }
}

/// Result of a scanner search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerMatch {
    /// Index of the pattern that matched.
    pub index: usize,
    /// Index 0 is the whole match.
    pub capture_indices: SmallVec<[CaptureIndex; 8]>,
}

bitflags! {
    /// Per-search flags, bit-compatible with the TextMate `FindOption` values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ScannerFindOptions: u32 {
        const NOT_BEGIN_STRING   = 1;
        const NOT_END_STRING     = 1 << 1;
        const NOT_BEGIN_POSITION = 1 << 2;
    }
}

impl ScannerFindOptions {
    pub const NONE: Self = Self::empty();

    fn to_search_options(self) -> Options {
        let mut opts = Options::empty();
        opts.set(Options::NOT_BEGIN_STRING, self.contains(Self::NOT_BEGIN_STRING));
        opts.set(Options::NOT_END_STRING, self.contains(Self::NOT_END_STRING));
        opts.set(Options::NOT_BEGIN_POSITION, self.contains(Self::NOT_BEGIN_POSITION));
        opts
    }
}

/// Compile settings shared by every pattern of a scanner.
#[derive(Debug, Clone, Default)]
pub struct ScannerConfig {
    pub options: Options,
    pub syntax: SyntaxDialect,
}

// ============================================================================
// UTF-16 offsets
// ============================================================================

/// A string with precomputed UTF-16 ↔ UTF-8 offset tables, for callers
/// (JavaScript hosts) that count in UTF-16 code units.
///
/// ```
/// use ferrex::scanner::Utf16Text;
///
/// let s = Utf16Text::new("a💻b");
/// assert_eq!(s.utf16_len(), 4);
/// assert_eq!(s.content().len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Utf16Text {
    content: String,
    /// Length `utf16_len + 1`.
    utf16_to_utf8: Vec<usize>,
    /// Length `content.len() + 1`.
    utf8_to_utf16: Vec<usize>,
}

impl Utf16Text {
    pub fn new(content: &str) -> Self {
        let mut utf16_to_utf8 = Vec::with_capacity(content.len() + 1);
        let mut utf8_to_utf16 = vec![0usize; content.len() + 1];
        for (pos, ch) in content.char_indices() {
            let unit = utf16_to_utf8.len();
            utf16_to_utf8.push(pos);
            utf8_to_utf16[pos..pos + ch.len_utf8()].fill(unit);
            if ch.len_utf16() == 2 {
                // a low surrogate maps past the character
                utf16_to_utf8.push(pos + ch.len_utf8());
            }
        }
        let utf16_len = utf16_to_utf8.len();
        utf16_to_utf8.push(content.len());
        utf8_to_utf16[content.len()] = utf16_len;
        Utf16Text { content: content.to_string(), utf16_to_utf8, utf8_to_utf16 }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in UTF-16 code units.
    pub fn utf16_len(&self) -> usize {
        self.utf16_to_utf8.len() - 1
    }

    pub fn utf16_to_utf8(&self, offset: usize) -> usize {
        self.utf16_to_utf8.get(offset).copied().unwrap_or(self.content.len())
    }

    pub fn utf8_to_utf16(&self, offset: usize) -> usize {
        self.utf8_to_utf16.get(offset).copied().unwrap_or_else(|| self.utf16_len())
    }
}

// ============================================================================
// Scanner
// ============================================================================

/// Last result of one pattern against one string id.
#[derive(Debug)]
struct CacheEntry {
    /// Patterns using `\G` depend on the start position and are never cached.
    uses_search_start: bool,
    last: Option<CachedSearch>,
}

#[derive(Debug)]
struct CachedSearch {
    /// `None` for searches made without an id; those never hit.
    str_id: Option<u64>,
    position: usize,
    options: ScannerFindOptions,
    region: Option<Region>,
}

impl CacheEntry {
    /// A still-valid cached answer for a search from `start`.
    fn lookup(&self, str_id: u64, start: usize, options: ScannerFindOptions) -> Option<Option<&Region>> {
        if self.uses_search_start {
            return None;
        }
        let last = self.last.as_ref()?;
        if last.str_id != Some(str_id) || last.options != options || last.position > start {
            return None;
        }
        match &last.region {
            None => Some(None),
            Some(r) if r.start() >= start => Some(Some(r)),
            Some(_) => None,
        }
    }
}

/// Strings shorter than this go through the `RegSet` position-lead path.
const MAX_REGSET_MATCH_INPUT_LEN: usize = 1000;

/// Finds the earliest match among several patterns.
///
/// ```
/// use ferrex::scanner::{Scanner, ScannerFindOptions};
///
/// let mut scanner = Scanner::new(&["\\d+", "[a-z]+"]).unwrap();
/// let m = scanner.find_next_match("hello42", 0, ScannerFindOptions::NONE).unwrap().unwrap();
/// assert_eq!(m.index, 1);
/// assert_eq!((m.capture_indices[0].start, m.capture_indices[0].end), (0, 5));
/// ```
#[derive(Debug)]
pub struct Scanner {
    regexes: Vec<Arc<RegexType>>,
    caches: Vec<CacheEntry>,
    regset: RegSet,
    param: MatchParam,
}

impl Scanner {
    /// Compiles `patterns` with the default dialect and no options.
    pub fn new(patterns: &[&str]) -> Result<Scanner, RegexError> {
        Self::with_config(patterns, &ScannerConfig::default())
    }

    pub fn with_config(patterns: &[&str], config: &ScannerConfig) -> Result<Scanner, RegexError> {
        let syntax = config.syntax.syntax();
        let limits = CompileLimits::default();
        let regexes = patterns
            .iter()
            .map(|p| compile(p.as_bytes(), Encoding::Utf8, config.options, syntax, &limits).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;
        let caches = regexes
            .iter()
            .map(|reg| CacheEntry {
                uses_search_start: reg.ops.iter().any(|op| matches!(op, Op::BeginPosition)),
                last: None,
            })
            .collect();
        let regset = RegSet::new(regexes.iter().cloned())?;
        Ok(Scanner { regexes, caches, regset, param: MatchParam::default() })
    }

    /// Budgets applied to every search from now on.
    pub fn set_match_param(&mut self, param: MatchParam) {
        self.param = param;
    }

    /// Earliest match at or after byte offset `start`. Ties go to the
    /// lower pattern index. A start past the end finds nothing.
    pub fn find_next_match(
        &mut self,
        text: &str,
        start: usize,
        options: ScannerFindOptions,
    ) -> Result<Option<ScannerMatch>, RegexError> {
        self.find_next(text, None, start, options)
    }

    /// Like [`Scanner::find_next_match`]; repeated calls with the same
    /// `str_id` reuse per-pattern results for long strings.
    pub fn find_next_match_with_id(
        &mut self,
        text: &str,
        str_id: u64,
        start: usize,
        options: ScannerFindOptions,
    ) -> Result<Option<ScannerMatch>, RegexError> {
        self.find_next(text, Some(str_id), start, options)
    }

    /// `start` and the returned offsets are UTF-16 code units.
    ///
    /// ```
    /// use ferrex::scanner::{Scanner, ScannerFindOptions, Utf16Text};
    ///
    /// let mut scanner = Scanner::new(&["Y", "X"]).unwrap();
    /// let s = Utf16Text::new("a💻bYX");
    /// let m = scanner.find_next_match_utf16(&s, 0, ScannerFindOptions::NONE).unwrap().unwrap();
    /// assert_eq!((m.capture_indices[0].start, m.capture_indices[0].end), (4, 5));
    /// ```
    pub fn find_next_match_utf16(
        &mut self,
        text: &Utf16Text,
        start: usize,
        options: ScannerFindOptions,
    ) -> Result<Option<ScannerMatch>, RegexError> {
        let m = self.find_next(text.content(), None, text.utf16_to_utf8(start), options)?;
        Ok(m.map(|m| to_utf16(text, m)))
    }

    pub fn find_next_match_utf16_with_id(
        &mut self,
        text: &Utf16Text,
        str_id: u64,
        start: usize,
        options: ScannerFindOptions,
    ) -> Result<Option<ScannerMatch>, RegexError> {
        let m = self.find_next(text.content(), Some(str_id), text.utf16_to_utf8(start), options)?;
        Ok(m.map(|m| to_utf16(text, m)))
    }

    fn find_next(
        &mut self,
        text: &str,
        str_id: Option<u64>,
        start: usize,
        options: ScannerFindOptions,
    ) -> Result<Option<ScannerMatch>, RegexError> {
        let end = text.len();
        if start > end {
            return Ok(None);
        }
        if end < MAX_REGSET_MATCH_INPUT_LEN {
            let params = vec![self.param; self.regexes.len()];
            let found = self.regset.search_with_param(
                text.as_bytes(),
                Encoding::Utf8,
                start,
                end,
                RegSetLead::Position,
                options.to_search_options(),
                &params,
            )?;
            return Ok(found.map(|m| build_match(m.index, &m.region)));
        }
        self.search_per_regex(text, str_id, start, options)
    }

    fn search_per_regex(
        &mut self,
        text: &str,
        str_id: Option<u64>,
        start: usize,
        options: ScannerFindOptions,
    ) -> Result<Option<ScannerMatch>, RegexError> {
        let subject = text.as_bytes();
        let search_options = options.to_search_options();
        let mut best: Option<(usize, usize)> = None;

        for (i, reg) in self.regexes.iter().enumerate() {
            let cached = str_id.and_then(|id| self.caches[i].lookup(id, start, options));
            let pos = match cached {
                Some(None) => continue,
                Some(Some(region)) => region.start(),
                None => {
                    let mut exec =
                        Executor::for_valid_subject(reg, subject, Encoding::Utf8, search_options, &self.param, start)?;
                    let region = exec.search_range(start, subject.len())?;
                    let pos = region.as_ref().map(Region::start);
                    self.caches[i].last = Some(CachedSearch {
                        str_id,
                        position: start,
                        options,
                        region,
                    });
                    match pos {
                        Some(p) => p,
                        None => continue,
                    }
                }
            };
            if best.map_or(true, |(_, b)| pos < b) {
                best = Some((i, pos));
                if pos == start {
                    break;
                }
            }
        }

        Ok(best.and_then(|(i, _)| {
            let region = self.caches[i].last.as_ref()?.region.as_ref()?;
            Some(build_match(i, region))
        }))
    }
}

fn build_match(index: usize, region: &Region) -> ScannerMatch {
    let capture_indices = region
        .iter()
        .map(|span| span.map_or(CaptureIndex::new(0, 0), |s| CaptureIndex::new(s.start, s.end)))
        .collect();
    ScannerMatch { index, capture_indices }
}

fn to_utf16(text: &Utf16Text, m: ScannerMatch) -> ScannerMatch {
    let capture_indices = m
        .capture_indices
        .into_iter()
        .map(|c| CaptureIndex::new(text.utf8_to_utf16(c.start), text.utf8_to_utf16(c.end)))
        .collect();
    ScannerMatch { index: m.index, capture_indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn spans(m: &ScannerMatch) -> Vec<(usize, usize)> {
        m.capture_indices.iter().map(|c| (c.start, c.end)).collect()
    }

    #[test]
    fn earliest_match_wins() {
        let mut scanner = Scanner::new(&["ell", "wo"]).unwrap();
        let s = "Hello world!";
        assert_eq!(
            scanner.find_next_match(s, 0, ScannerFindOptions::NONE).unwrap(),
            Some(ScannerMatch { index: 0, capture_indices: smallvec![CaptureIndex::new(1, 4)] })
        );
        let m = scanner.find_next_match(s, 2, ScannerFindOptions::NONE).unwrap().unwrap();
        assert_eq!((m.index, spans(&m)), (1, vec![(6, 8)]));
        assert_eq!(scanner.find_next_match(s, 9, ScannerFindOptions::NONE).unwrap(), None);
        assert_eq!(scanner.find_next_match(s, 99, ScannerFindOptions::NONE).unwrap(), None);
    }

    #[test]
    fn unmatched_groups_report_zero() {
        let mut scanner = Scanner::new(&["(a)|(b)"]).unwrap();
        let m = scanner.find_next_match("xb", 0, ScannerFindOptions::NONE).unwrap().unwrap();
        assert_eq!(spans(&m), [(1, 2), (0, 0), (1, 2)]);
        assert_eq!(m.capture_indices[1].length, 0);
    }

    #[test]
    fn find_options_map_to_search_options() {
        let mut scanner = Scanner::new(&["\\Aa", "\\Ga"]).unwrap();
        assert!(scanner.find_next_match("aa", 0, ScannerFindOptions::NONE).unwrap().is_some());
        let m = scanner.find_next_match("aa", 0, ScannerFindOptions::NOT_BEGIN_STRING).unwrap().unwrap();
        assert_eq!(m.index, 1);
        let both = ScannerFindOptions::NOT_BEGIN_STRING | ScannerFindOptions::NOT_BEGIN_POSITION;
        assert_eq!(scanner.find_next_match("aa", 0, both).unwrap(), None);
    }

    #[test]
    fn config_applies_options_and_dialect() {
        let config = ScannerConfig { options: Options::IGNORECASE, syntax: SyntaxDialect::Oniguruma };
        let mut scanner = Scanner::with_config(&["hello"], &config).unwrap();
        assert!(scanner.find_next_match("HELLO", 0, ScannerFindOptions::NONE).unwrap().is_some());

        let config = ScannerConfig { options: Options::empty(), syntax: SyntaxDialect::Asis };
        let mut scanner = Scanner::with_config(&["a+"], &config).unwrap();
        let m = scanner.find_next_match("aa+", 0, ScannerFindOptions::NONE).unwrap().unwrap();
        assert_eq!(spans(&m), [(1, 3)]);
    }

    #[test]
    fn compile_errors_surface() {
        assert!(Scanner::new(&["ok", "(unclosed"]).is_err());
    }

    #[test]
    fn utf16_offsets() {
        let s = Utf16Text::new("a💻b");
        assert_eq!(s.utf16_len(), 4);
        assert_eq!(s.utf16_to_utf8(1), 1);
        assert_eq!(s.utf16_to_utf8(3), 5);
        assert_eq!(s.utf8_to_utf16(5), 3);
        assert_eq!(s.utf8_to_utf16(6), 4);

        let mut scanner = Scanner::new(&["b"]).unwrap();
        let m = scanner.find_next_match_utf16(&s, 0, ScannerFindOptions::NONE).unwrap().unwrap();
        assert_eq!(spans(&m), [(3, 4)]);
        assert_eq!(scanner.find_next_match_utf16(&s, 4, ScannerFindOptions::NONE).unwrap(), None);
    }

    #[test]
    fn long_strings_take_the_per_pattern_path() {
        let mut text = "x".repeat(1500);
        text.push_str("foo bar");
        let mut scanner = Scanner::new(&["bar", "foo", "\\Gx"]).unwrap();
        let m = scanner.find_next_match_with_id(&text, 7, 10, ScannerFindOptions::NONE).unwrap().unwrap();
        assert_eq!((m.index, spans(&m)), (2, vec![(10, 11)]));
        let m = scanner.find_next_match_with_id(&text, 7, 1500, ScannerFindOptions::NONE).unwrap().unwrap();
        assert_eq!((m.index, spans(&m)), (1, vec![(1500, 1503)]));
        // cached results are reused while they still lie ahead of the start
        let m = scanner.find_next_match_with_id(&text, 7, 1503, ScannerFindOptions::NONE).unwrap().unwrap();
        assert_eq!((m.index, spans(&m)), (0, vec![(1504, 1507)]));
        assert_eq!(scanner.find_next_match_with_id(&text, 7, 1505, ScannerFindOptions::NONE).unwrap(), None);
        let m = scanner.find_next_match(&text, 0, ScannerFindOptions::NONE).unwrap().unwrap();
        assert_eq!(m.index, 2);
    }

    #[test]
    fn cache_is_keyed_by_string_id() {
        let a = format!("{}a", " ".repeat(1200));
        let b = format!("{}a", " ".repeat(1100));
        let mut scanner = Scanner::new(&["a"]).unwrap();
        let m = scanner.find_next_match_with_id(&a, 1, 0, ScannerFindOptions::NONE).unwrap().unwrap();
        assert_eq!(m.capture_indices[0].start, 1200);
        let m = scanner.find_next_match_with_id(&b, 2, 0, ScannerFindOptions::NONE).unwrap().unwrap();
        assert_eq!(m.capture_indices[0].start, 1100);
    }
}
