// regset.rs - Multi-pattern search.
// Used by syntax highlighters and editors to find which of many patterns
// matches first in a line.

use std::sync::Arc;

use tracing::trace;

use crate::error::{MatchErrorKind, RegexError};
use crate::regdefs::Options;
use crate::regenc::Encoding;
use crate::regexec::{Executor, MatchParam};
use crate::regint::RegexType;
use crate::region::Region;

/// How a set search walks patterns and positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RegSetLead {
    /// Walk start positions; at each one try every pattern in order.
    /// Earliest start wins, ties go to the lower index.
    #[default]
    Position,
    /// Search each pattern in turn, narrowing the range to the best start
    /// found so far. Earliest start wins.
    Regex,
    /// The first pattern, in set order, that matches anywhere.
    PriorityToRegexOrder,
}

/// Result of a set search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegSetMatch {
    /// Index of the matching pattern in the set.
    pub index: usize,
    pub region: Region,
}

impl RegSetMatch {
    /// Start of the match.
    pub fn position(&self) -> usize {
        self.region.start()
    }
}

/// An ordered collection of compiled patterns searched together.
#[derive(Debug, Clone, Default)]
pub struct RegSet {
    regs: Vec<Arc<RegexType>>,
}

fn check_member(reg: &RegexType) -> Result<(), RegexError> {
    if reg.options.contains(Options::FIND_LONGEST) {
        return Err(MatchErrorKind::FindLongestInSet.into());
    }
    Ok(())
}

impl RegSet {
    /// Builds a set. Patterns compiled with `FIND_LONGEST` are rejected.
    pub fn new<I, R>(regs: I) -> Result<Self, RegexError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Arc<RegexType>>,
    {
        let mut set = RegSet::default();
        for reg in regs {
            set.add(reg)?;
        }
        Ok(set)
    }

    pub fn add(&mut self, reg: impl Into<Arc<RegexType>>) -> Result<(), RegexError> {
        let reg = reg.into();
        check_member(&reg)?;
        self.regs.push(reg);
        Ok(())
    }

    /// Replaces the pattern at `at`, or removes it when `reg` is `None`.
    pub fn replace(&mut self, at: usize, reg: Option<Arc<RegexType>>) -> Result<(), RegexError> {
        if at >= self.regs.len() {
            return Err(MatchErrorKind::SetIndexOutOfRange(at).into());
        }
        match reg {
            None => {
                self.regs.remove(at);
            }
            Some(reg) => {
                check_member(&reg)?;
                self.regs[at] = reg;
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.regs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    pub fn get(&self, at: usize) -> Option<&RegexType> {
        self.regs.get(at).map(|r| r.as_ref())
    }

    /// Searches `subject[start..=range]` forward with default match budgets.
    pub fn search(
        &self,
        subject: &[u8],
        encoding: Encoding,
        start: usize,
        range: usize,
        lead: RegSetLead,
        options: Options,
    ) -> Result<Option<RegSetMatch>, RegexError> {
        self.search_with_param(subject, encoding, start, range, lead, options, &[])
    }

    /// Like [`RegSet::search`] with one `MatchParam` per pattern. Patterns
    /// past the end of `params` use `MatchParam::default()`.
    #[allow(clippy::too_many_arguments)]
    pub fn search_with_param(
        &self,
        subject: &[u8],
        encoding: Encoding,
        start: usize,
        range: usize,
        lead: RegSetLead,
        options: Options,
        params: &[MatchParam],
    ) -> Result<Option<RegSetMatch>, RegexError> {
        if options.contains(Options::FIND_LONGEST) {
            return Err(MatchErrorKind::FindLongestInSet.into());
        }
        if range < start || range > subject.len() {
            return Err(MatchErrorKind::RangeOutOfRange(range).into());
        }
        if self.regs.is_empty() {
            return Ok(None);
        }
        encoding.validate(subject)?;

        let default_param = MatchParam::default();
        let mut execs = self
            .regs
            .iter()
            .enumerate()
            .map(|(i, reg)| {
                let param = params.get(i).unwrap_or(&default_param);
                Executor::for_valid_subject(reg, subject, encoding, options, param, start)
            })
            .collect::<Result<Vec<_>, _>>()?;

        trace!(?lead, patterns = execs.len(), "regset search");
        match lead {
            RegSetLead::Position => position_lead(&mut execs, subject, encoding, start, range),
            RegSetLead::Regex | RegSetLead::PriorityToRegexOrder => {
                regex_lead(&mut execs, start, range, lead == RegSetLead::PriorityToRegexOrder)
            }
        }
    }
}

fn position_lead(
    execs: &mut [Executor<'_, '_>],
    subject: &[u8],
    encoding: Encoding,
    start: usize,
    range: usize,
) -> Result<Option<RegSetMatch>, RegexError> {
    let mut s = start;
    loop {
        for (index, exec) in execs.iter_mut().enumerate() {
            if let Some(region) = exec.match_here(s)? {
                return Ok(Some(RegSetMatch { index, region }));
            }
        }
        if s >= range {
            return Ok(None);
        }
        let (_, len) = encoding.decode(subject, s)?;
        s += len;
    }
}

fn regex_lead(
    execs: &mut [Executor<'_, '_>],
    start: usize,
    range: usize,
    first_wins: bool,
) -> Result<Option<RegSetMatch>, RegexError> {
    let mut best: Option<RegSetMatch> = None;
    let mut hi = range;
    for (index, exec) in execs.iter_mut().enumerate() {
        let Some(region) = exec.search_range(start, hi)? else {
            continue;
        };
        let pos = region.start();
        best = Some(RegSetMatch { index, region });
        if first_wins || pos == start {
            break;
        }
        // later patterns must start strictly earlier to win
        hi = pos - 1;
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResourceLimitKind;
    use crate::regcomp::{compile, CompileLimits};
    use crate::regsyntax::SYNTAX_ONIGURUMA;

    fn reg_with(pattern: &str, options: Options) -> RegexType {
        compile(pattern.as_bytes(), Encoding::Utf8, options, &SYNTAX_ONIGURUMA, &CompileLimits::default()).unwrap()
    }

    fn set(patterns: &[&str]) -> RegSet {
        RegSet::new(patterns.iter().map(|p| reg_with(p, Options::empty()))).unwrap()
    }

    fn find(set: &RegSet, subject: &str, lead: RegSetLead) -> Option<(usize, usize)> {
        set.search(subject.as_bytes(), Encoding::Utf8, 0, subject.len(), lead, Options::empty())
            .unwrap()
            .map(|m| (m.index, m.position()))
    }

    #[test]
    fn position_lead_earliest_start_then_lowest_index() {
        let s = set(&["world", "o", "hello"]);
        assert_eq!(find(&s, "hello world", RegSetLead::Position), Some((2, 0)));
        let s = set(&["lo", "l+"]);
        assert_eq!(find(&s, "hello", RegSetLead::Position), Some((1, 2)));
        let s = set(&["l+", "ll"]);
        assert_eq!(find(&s, "hello", RegSetLead::Position), Some((0, 2)));
    }

    #[test]
    fn regex_lead_earliest_start() {
        let s = set(&["world", "o", "hello"]);
        assert_eq!(find(&s, "hello world", RegSetLead::Regex), Some((2, 0)));
        let s = set(&["o", "l"]);
        assert_eq!(find(&s, "hello", RegSetLead::Regex), Some((1, 2)));
    }

    #[test]
    fn priority_to_regex_order() {
        let s = set(&["world", "o", "hello"]);
        assert_eq!(find(&s, "hello world", RegSetLead::PriorityToRegexOrder), Some((0, 6)));
        let s = set(&["xyz", "o"]);
        assert_eq!(find(&s, "hello", RegSetLead::PriorityToRegexOrder), Some((1, 4)));
    }

    #[test]
    fn no_match_and_empty_set() {
        let s = set(&["x", "y"]);
        for lead in [RegSetLead::Position, RegSetLead::Regex, RegSetLead::PriorityToRegexOrder] {
            assert_eq!(find(&s, "abc", lead), None);
        }
        assert_eq!(find(&RegSet::default(), "abc", RegSetLead::Position), None);
    }

    #[test]
    fn empty_pattern_matches_empty_subject() {
        let s = set(&["a", "b*"]);
        assert_eq!(find(&s, "", RegSetLead::Position), Some((1, 0)));
    }

    #[test]
    fn find_longest_is_rejected() {
        let err = RegSet::new([reg_with("a", Options::FIND_LONGEST)]).unwrap_err();
        assert_eq!(err, RegexError::Match(MatchErrorKind::FindLongestInSet));
        let s = set(&["a"]);
        let err = s
            .search(b"a", Encoding::Utf8, 0, 1, RegSetLead::Position, Options::FIND_LONGEST)
            .unwrap_err();
        assert_eq!(err, RegexError::Match(MatchErrorKind::FindLongestInSet));
    }

    #[test]
    fn replace_and_remove() {
        let mut s = set(&["a", "b"]);
        s.replace(0, Some(Arc::new(reg_with("c", Options::empty())))).unwrap();
        assert_eq!(find(&s, "abc", RegSetLead::Position), Some((1, 1)));
        s.replace(1, None).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(find(&s, "abc", RegSetLead::Position), Some((0, 2)));
        let err = s.replace(5, None).unwrap_err();
        assert_eq!(err, RegexError::Match(MatchErrorKind::SetIndexOutOfRange(5)));
    }

    #[test]
    fn per_pattern_params() {
        let s = set(&["(a+)+b", "c"]);
        let tight = MatchParam { retry_limit_in_match: 100, ..MatchParam::default() };
        let subject = "aaaaaaaaaaaaaaaaaaaa!c";
        let err = s
            .search_with_param(
                subject.as_bytes(),
                Encoding::Utf8,
                0,
                subject.len(),
                RegSetLead::Position,
                Options::empty(),
                &[tight],
            )
            .unwrap_err();
        assert_eq!(err, RegexError::ResourceLimit(ResourceLimitKind::RetryInMatch));
    }

    #[test]
    fn invalid_subject_is_reported() {
        let s = set(&["z"]);
        let err = s
            .search(b"ab\xC3", Encoding::Utf8, 0, 3, RegSetLead::Regex, Options::empty())
            .unwrap_err();
        assert_eq!(err, RegexError::InvalidEncoding { encoding: Encoding::Utf8, offset: 2 });
    }
}
