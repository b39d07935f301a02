// api.rs - Ergonomic front end: Regex, RegexBuilder, Match, Captures, FindIter.
//
// Every search returns `Result`: `Ok(None)` means no match, `Err` means the
// attempt itself failed (bad subject bytes, exhausted budget, bad offset).

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::error::RegexError;
use crate::regcomp::{compile, CompileLimits};
use crate::regdefs::Options;
use crate::regenc::Encoding;
use crate::regexec::{self, Executor, MatchParam};
use crate::regint::RegexType;
use crate::region::{CaptureTreeNode, GroupRef, Region};
use crate::regparse_types::NameTable;
use crate::regsyntax::{Syntax, SyntaxDialect, DEFAULT_SYNTAX};

/// A compiled regular expression bound to a subject encoding.
///
/// ```
/// use ferrex::api::Regex;
///
/// let re = Regex::new(r"\d+").unwrap();
/// assert!(re.is_match("hello 42").unwrap());
///
/// let m = re.find("hello 42").unwrap().unwrap();
/// assert_eq!(m.as_str(), Some("42"));
/// assert_eq!(m.range(), 6..8);
/// ```
#[derive(Clone)]
pub struct Regex {
    pattern: Box<[u8]>,
    inner: Arc<RegexType>,
    encoding: Encoding,
    param: MatchParam,
}

impl Regex {
    /// Compiles `pattern` as UTF-8 with the default dialect and no options.
    pub fn new(pattern: &str) -> Result<Regex, RegexError> {
        RegexBuilder::new(pattern).build()
    }

    /// Compiles a pattern given as raw bytes (UTF-8).
    pub fn new_bytes(pattern: &[u8]) -> Result<Regex, RegexError> {
        RegexBuilder::from_bytes(pattern).build()
    }

    pub fn builder(pattern: &str) -> RegexBuilder {
        RegexBuilder::new(pattern)
    }

    /// The pattern source as given.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pattern
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Number of capture groups, not counting group 0.
    pub fn captures_len(&self) -> usize {
        self.inner.num_groups()
    }

    pub fn names(&self) -> &NameTable {
        self.inner.names()
    }

    /// The compiled program, shareable with a `RegSet`.
    pub fn program(&self) -> &Arc<RegexType> {
        &self.inner
    }

    /// First match in `text`.
    pub fn find<'t>(&self, text: &'t str) -> Result<Option<Match<'t>>, RegexError> {
        self.find_bytes(text.as_bytes())
    }

    pub fn find_bytes<'t>(&self, text: &'t [u8]) -> Result<Option<Match<'t>>, RegexError> {
        self.find_at_bytes(text, 0)
    }

    /// First match starting at or after byte offset `start`. `\G` matches at `start`.
    pub fn find_at<'t>(&self, text: &'t str, start: usize) -> Result<Option<Match<'t>>, RegexError> {
        self.find_at_bytes(text.as_bytes(), start)
    }

    pub fn find_at_bytes<'t>(&self, text: &'t [u8], start: usize) -> Result<Option<Match<'t>>, RegexError> {
        let region = self.search_bytes(text, start, text.len(), Options::empty())?;
        Ok(region.map(|r| Match::new(text, r.start(), r.end())))
    }

    /// Anchored match: succeeds only if the pattern matches starting exactly at `at`.
    pub fn match_at<'t>(&self, text: &'t str, at: usize) -> Result<Option<Match<'t>>, RegexError> {
        let bytes = text.as_bytes();
        let region = regexec::match_at(&self.inner, bytes, self.encoding, at, Options::empty(), &self.param)?;
        Ok(region.map(|r| Match::new(bytes, r.start(), r.end())))
    }

    pub fn is_match(&self, text: &str) -> Result<bool, RegexError> {
        self.is_match_bytes(text.as_bytes())
    }

    pub fn is_match_bytes(&self, text: &[u8]) -> Result<bool, RegexError> {
        Ok(self.search_bytes(text, 0, text.len(), Options::empty())?.is_some())
    }

    /// First match with all capture groups.
    pub fn captures<'t>(&self, text: &'t str) -> Result<Option<Captures<'t>>, RegexError> {
        self.captures_bytes(text.as_bytes())
    }

    pub fn captures_bytes<'t>(&self, text: &'t [u8]) -> Result<Option<Captures<'t>>, RegexError> {
        let region = self.search_bytes(text, 0, text.len(), Options::empty())?;
        Ok(region.map(|region| Captures { text, region }))
    }

    /// Low-level search: start positions from `start` to `range` (inclusive,
    /// backward when `range < start`) with search-time `options`.
    pub fn search_bytes(
        &self,
        text: &[u8],
        start: usize,
        range: usize,
        options: Options,
    ) -> Result<Option<Region>, RegexError> {
        regexec::search(&self.inner, text, self.encoding, start, range, options, &self.param)
    }

    /// All non-overlapping matches, left to right. An empty match never
    /// repeats at the position of the previous empty match.
    pub fn find_iter<'r, 't>(&'r self, text: &'t str) -> FindIter<'r, 't> {
        self.find_iter_bytes(text.as_bytes())
    }

    pub fn find_iter_bytes<'r, 't>(&'r self, text: &'t [u8]) -> FindIter<'r, 't> {
        FindIter { regex: self, text, exec: None, next_start: 0, last_was_empty: false, done: false }
    }

    /// Captures of every non-overlapping match.
    pub fn captures_iter<'r, 't>(&'r self, text: &'t str) -> CapturesIter<'r, 't> {
        CapturesIter { inner: self.find_iter(text) }
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Regex")
            .field("pattern", &String::from_utf8_lossy(&self.pattern))
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}

impl From<&Regex> for Arc<RegexType> {
    fn from(re: &Regex) -> Self {
        re.inner.clone()
    }
}

// === RegexBuilder ===

/// Compiles a [`Regex`] with explicit options, dialect, encoding and limits.
///
/// ```
/// use ferrex::api::Regex;
/// use ferrex::regsyntax::SyntaxDialect;
///
/// let re = Regex::builder(r"hello\s+world")
///     .case_insensitive(true)
///     .dialect(SyntaxDialect::Perl)
///     .build()
///     .unwrap();
/// assert!(re.is_match("Hello  World").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct RegexBuilder {
    pattern: Vec<u8>,
    options: Options,
    syntax: &'static Syntax,
    encoding: Encoding,
    limits: CompileLimits,
    param: MatchParam,
}

impl RegexBuilder {
    pub fn new(pattern: &str) -> Self {
        Self::from_bytes(pattern.as_bytes())
    }

    /// Pattern bytes in the encoding chosen with [`RegexBuilder::encoding`].
    pub fn from_bytes(pattern: &[u8]) -> Self {
        RegexBuilder {
            pattern: pattern.to_vec(),
            options: Options::empty(),
            syntax: DEFAULT_SYNTAX,
            encoding: Encoding::Utf8,
            limits: CompileLimits::default(),
            param: MatchParam::default(),
        }
    }

    fn flag(mut self, flag: Options, yes: bool) -> Self {
        self.options.set(flag, yes);
        self
    }

    pub fn case_insensitive(self, yes: bool) -> Self {
        self.flag(Options::IGNORECASE, yes)
    }

    /// `.` also matches `\n`.
    pub fn dot_matches_newline(self, yes: bool) -> Self {
        self.flag(Options::MULTILINE, yes)
    }

    /// `$` matches only at the end of the subject.
    pub fn single_line(self, yes: bool) -> Self {
        self.flag(Options::SINGLELINE, yes)
    }

    /// Whitespace and `#` comments in the pattern are ignored.
    pub fn extended(self, yes: bool) -> Self {
        self.flag(Options::EXTEND, yes)
    }

    pub fn find_longest(self, yes: bool) -> Self {
        self.flag(Options::FIND_LONGEST, yes)
    }

    /// Adds raw option bits.
    pub fn options(mut self, options: Options) -> Self {
        self.options |= options;
        self
    }

    pub fn syntax(mut self, syntax: &'static Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn dialect(self, dialect: SyntaxDialect) -> Self {
        self.syntax(dialect.syntax())
    }

    /// Encoding of both the pattern and the subjects.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn compile_limits(mut self, limits: CompileLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Raising this above the default needs a larger thread stack.
    pub fn parse_depth_limit(mut self, n: u32) -> Self {
        self.limits.parse_depth_limit = n;
        self
    }

    pub fn capture_limit(mut self, n: u32) -> Self {
        self.limits.capture_limit = n;
        self
    }

    pub fn program_size_limit(mut self, n: u32) -> Self {
        self.limits.program_size_limit = n;
        self
    }

    pub fn match_param(mut self, param: MatchParam) -> Self {
        self.param = param;
        self
    }

    pub fn retry_limit_in_match(mut self, n: u64) -> Self {
        self.param.retry_limit_in_match = n;
        self
    }

    pub fn retry_limit_in_search(mut self, n: u64) -> Self {
        self.param.retry_limit_in_search = n;
        self
    }

    pub fn match_stack_limit(mut self, n: u32) -> Self {
        self.param.match_stack_limit = n;
        self
    }

    /// Milliseconds; 0 disables the limit.
    pub fn time_limit(mut self, msec: u64) -> Self {
        self.param.time_limit = msec;
        self
    }

    pub fn subexp_call_limit_in_search(mut self, n: u64) -> Self {
        self.param.subexp_call_limit_in_search = n;
        self
    }

    pub fn build(self) -> Result<Regex, RegexError> {
        let inner = compile(&self.pattern, self.encoding, self.options, self.syntax, &self.limits)?;
        Ok(Regex {
            pattern: self.pattern.into_boxed_slice(),
            inner: Arc::new(inner),
            encoding: self.encoding,
            param: self.param,
        })
    }
}

// === Match ===

/// One match, borrowing the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t [u8],
    start: usize,
    end: usize,
}

impl<'t> Match<'t> {
    fn new(text: &'t [u8], start: usize, end: usize) -> Self {
        Match { text, start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn as_bytes(&self) -> &'t [u8] {
        &self.text[self.start..self.end]
    }

    /// The matched text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&'t str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// === Captures ===

/// Capture groups of one match. Group 0 is the whole match.
#[derive(Clone, PartialEq, Eq)]
pub struct Captures<'t> {
    text: &'t [u8],
    region: Region,
}

impl<'t> Captures<'t> {
    /// Group `i`, or `None` if it did not participate.
    pub fn get(&self, i: usize) -> Option<Match<'t>> {
        self.region.get(i).map(|s| Match::new(self.text, s.start, s.end))
    }

    /// Group named `name`; with duplicate names, the highest-numbered
    /// group that matched.
    pub fn name(&self, name: &str) -> Option<Match<'t>> {
        self.group(name)
    }

    pub fn group<'a>(&self, group: impl Into<GroupRef<'a>>) -> Option<Match<'t>> {
        self.region.region_for(group).map(|s| Match::new(self.text, s.start, s.end))
    }

    /// Number of groups, group 0 included.
    pub fn len(&self) -> usize {
        self.region.len()
    }

    pub fn is_empty(&self) -> bool {
        self.region.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<Match<'t>>> + '_ {
        (0..self.len()).map(|i| self.get(i))
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn into_region(self) -> Region {
        self.region
    }

    /// Capture-history tree, for patterns using `(?@...)`.
    pub fn history(&self) -> Option<&CaptureTreeNode> {
        self.region.history()
    }
}

impl fmt::Debug for Captures<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.region.iter()).finish()
    }
}

// === Iterators ===

/// Iterator over non-overlapping matches. Yields at most one error, then ends.
pub struct FindIter<'r, 't> {
    regex: &'r Regex,
    text: &'t [u8],
    exec: Option<Executor<'r, 't>>,
    next_start: usize,
    last_was_empty: bool,
    done: bool,
}

impl<'r, 't> FindIter<'r, 't> {
    fn next_region(&mut self) -> Result<Option<Region>, RegexError> {
        let regex = self.regex;
        let exec = match &mut self.exec {
            Some(exec) => {
                exec.restart(self.next_start)?;
                exec
            }
            None => self.exec.insert(Executor::new(
                &regex.inner,
                self.text,
                regex.encoding,
                Options::empty(),
                &regex.param,
                self.next_start,
            )?),
        };
        loop {
            let Some(region) = exec.search_range(self.next_start, self.text.len())? else {
                return Ok(None);
            };
            let empty = region.start() == region.end();
            if empty && self.last_was_empty && region.start() == self.next_start {
                // step over the position of the previous empty match
                if self.next_start >= self.text.len() {
                    return Ok(None);
                }
                let (_, len) = regex.encoding.decode(self.text, self.next_start)?;
                self.next_start += len;
                self.last_was_empty = false;
                exec.restart(self.next_start)?;
                continue;
            }
            self.last_was_empty = empty;
            self.next_start = region.end();
            return Ok(Some(region));
        }
    }
}

impl<'r, 't> Iterator for FindIter<'r, 't> {
    type Item = Result<Match<'t>, RegexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_captures().map(|r| r.map(|c| Match::new(c.text, c.region.start(), c.region.end())))
    }
}

impl<'r, 't> FindIter<'r, 't> {
    fn next_captures(&mut self) -> Option<Result<Captures<'t>, RegexError>> {
        if self.done || self.next_start > self.text.len() {
            return None;
        }
        match self.next_region() {
            Ok(Some(region)) => Some(Ok(Captures { text: self.text, region })),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for FindIter<'_, '_> {}

/// Iterator over the captures of non-overlapping matches.
pub struct CapturesIter<'r, 't> {
    inner: FindIter<'r, 't>,
}

impl<'r, 't> Iterator for CapturesIter<'r, 't> {
    type Item = Result<Captures<'t>, RegexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_captures()
    }
}

impl std::iter::FusedIterator for CapturesIter<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ResourceLimitKind};

    #[test]
    fn find_and_spans() {
        let re = Regex::new(r"\d+").unwrap();
        let m = re.find("hello 42 world").unwrap().unwrap();
        assert_eq!(m.as_str(), Some("42"));
        assert_eq!((m.start(), m.end(), m.len()), (6, 8, 2));
        assert!(!m.is_empty());
        assert!(re.find("no digits here").unwrap().is_none());
    }

    #[test]
    fn match_at_is_anchored() {
        let re = Regex::new("b").unwrap();
        assert!(re.match_at("ab", 0).unwrap().is_none());
        assert_eq!(re.match_at("ab", 1).unwrap().unwrap().range(), 1..2);
    }

    #[test]
    fn captures_and_names() {
        let re = Regex::new(r"(?<year>\d{4})-(?<month>\d{2})(-(\d{2}))?").unwrap();
        let caps = re.captures("on 2026-02").unwrap().unwrap();
        assert_eq!(caps.get(0).unwrap().as_str(), Some("2026-02"));
        assert_eq!(caps.name("year").unwrap().as_str(), Some("2026"));
        assert_eq!(caps.group(2).unwrap().as_str(), Some("02"));
        assert!(caps.name("day").is_none());
        assert_eq!(re.captures_len(), 2);
        let present: Vec<bool> = caps.iter().map(|m| m.is_some()).collect();
        assert_eq!(present, [true, true, true]);
    }

    #[test]
    fn unnamed_groups_capture_without_names() {
        let re = Regex::new(r"(a)(b)?").unwrap();
        let caps = re.captures("a").unwrap().unwrap();
        let present: Vec<bool> = caps.iter().map(|m| m.is_some()).collect();
        assert_eq!(present, [true, true, false]);
    }

    #[test]
    fn find_iter_skips_repeated_empty_matches() {
        let re = Regex::new("").unwrap();
        let starts: Vec<usize> = re.find_iter("ab").map(|m| m.unwrap().start()).collect();
        assert_eq!(starts, [0, 1, 2]);

        let re = Regex::new("a*").unwrap();
        let spans: Vec<Range<usize>> = re.find_iter("baa").map(|m| m.unwrap().range()).collect();
        assert_eq!(spans, [0..0, 1..3, 3..3]);

        let re = Regex::new(r"\d+").unwrap();
        let found: Vec<&str> = re.find_iter("1 + 22 = 333").map(|m| m.unwrap().as_str().unwrap()).collect();
        assert_eq!(found, ["1", "22", "333"]);
    }

    #[test]
    fn captures_iter_yields_groups() {
        let re = Regex::new(r"(\w)=(\d)").unwrap();
        let pairs: Vec<(String, String)> = re
            .captures_iter("a=1, b=2")
            .map(|c| {
                let c = c.unwrap();
                (c.get(1).unwrap().as_str().unwrap().to_string(), c.get(2).unwrap().as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(pairs, [("a".into(), "1".into()), ("b".into(), "2".into())]);
    }

    #[test]
    fn builder_options() {
        let re = Regex::builder("hello").case_insensitive(true).build().unwrap();
        assert!(re.is_match("HELLO").unwrap());
        let re = Regex::builder("a.b").dot_matches_newline(true).build().unwrap();
        assert!(re.is_match("a\nb").unwrap());
        let re = Regex::builder("a b # comment").extended(true).build().unwrap();
        assert!(re.is_match("ab").unwrap());
        let re = Regex::builder("a|ab").find_longest(true).build().unwrap();
        assert_eq!(re.find("ab").unwrap().unwrap().range(), 0..2);
    }

    #[test]
    fn builder_encoding() {
        let pattern: Vec<u8> = "é+".encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
        let re = RegexBuilder::from_bytes(&pattern).encoding(Encoding::Utf16Le).build().unwrap();
        let subject: Vec<u8> = "xéé".encode_utf16().flat_map(|u| u.to_le_bytes()).collect();
        assert_eq!(re.find_bytes(&subject).unwrap().unwrap().range(), 2..6);
    }

    #[test]
    fn builder_limits() {
        let re = Regex::builder("(a+)+b").retry_limit_in_match(1000).build().unwrap();
        let err = re.is_match("aaaaaaaaaaaaaaaaaaaaaaaa!").unwrap_err();
        assert_eq!(err, RegexError::ResourceLimit(ResourceLimitKind::RetryInMatch));
        assert!(re.is_match("aab").unwrap());

        let err = Regex::builder("(a)(b)(c)").capture_limit(2).build().unwrap_err();
        assert_eq!(err, RegexError::ResourceLimit(ResourceLimitKind::CaptureCount));
    }

    #[test]
    fn errors_are_not_no_match() {
        let err = Regex::new("(unclosed").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);

        let re = Regex::new("a").unwrap();
        let err = re.find_bytes(b"\xFFa").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
        let mut iter = re.find_iter_bytes(b"a\xFF");
        assert!(iter.next().unwrap().is_err());
        assert!(iter.next().is_none());
    }

    #[test]
    fn regex_shares_program_with_regset() {
        use crate::regset::{RegSet, RegSetLead};
        let a = Regex::new("x").unwrap();
        let b = Regex::new("y").unwrap();
        let set = RegSet::new([&a, &b]).unwrap();
        let m = set.search(b"zyx", Encoding::Utf8, 0, 3, RegSetLead::Position, Options::empty()).unwrap().unwrap();
        assert_eq!((m.index, m.position()), (1, 1));
    }
}
