// regint.rs - Internal program representation.
// Code-range sets, the character-class bitset, the opcode enum and the
// compiled program (`RegexType`) shared by the compiler and the executor.

use std::sync::Arc;

use crate::regdefs::{CodePoint, Options, MAX_CODE_POINT};
use crate::regparse_types::NameTable;
use crate::regsyntax::Syntax;

// === CodeRanges (sorted, disjoint, non-adjacent inclusive ranges) ===

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeRanges {
    ranges: Vec<(CodePoint, CodePoint)>,
}

impl CodeRanges {
    pub fn new() -> Self {
        CodeRanges { ranges: Vec::new() }
    }

    pub fn from_ranges<I: IntoIterator<Item = (CodePoint, CodePoint)>>(iter: I) -> Self {
        let mut r = CodeRanges { ranges: iter.into_iter().collect() };
        r.normalize();
        r
    }

    fn normalize(&mut self) {
        self.ranges.retain(|&(lo, hi)| lo <= hi);
        self.ranges.sort_unstable();
        let mut out: Vec<(CodePoint, CodePoint)> = Vec::with_capacity(self.ranges.len());
        for &(lo, hi) in &self.ranges {
            match out.last_mut() {
                Some(last) if lo <= last.1.saturating_add(1) => {
                    last.1 = last.1.max(hi);
                }
                _ => out.push((lo, hi)),
            }
        }
        self.ranges = out;
    }

    pub fn add(&mut self, cp: CodePoint) {
        self.add_range(cp, cp);
    }

    pub fn add_range(&mut self, lo: CodePoint, hi: CodePoint) {
        self.ranges.push((lo, hi));
        self.normalize();
    }

    pub fn union_with(&mut self, other: &CodeRanges) {
        if other.ranges.is_empty() {
            return;
        }
        self.ranges.extend_from_slice(&other.ranges);
        self.normalize();
    }

    pub fn intersect(&self, other: &CodeRanges) -> CodeRanges {
        let mut out = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.ranges.len() && j < other.ranges.len() {
            let (a_lo, a_hi) = self.ranges[i];
            let (b_lo, b_hi) = other.ranges[j];
            let lo = a_lo.max(b_lo);
            let hi = a_hi.min(b_hi);
            if lo <= hi {
                out.push((lo, hi));
            }
            if a_hi < b_hi {
                i += 1;
            } else {
                j += 1;
            }
        }
        CodeRanges { ranges: out }
    }

    /// Complement within `0..=MAX_CODE_POINT`.
    pub fn complement(&self) -> CodeRanges {
        let mut out = Vec::with_capacity(self.ranges.len() + 1);
        let mut next = 0u32;
        for &(lo, hi) in &self.ranges {
            if lo > next {
                out.push((next, lo - 1));
            }
            next = hi.saturating_add(1);
        }
        if next <= MAX_CODE_POINT {
            out.push((next, MAX_CODE_POINT));
        }
        CodeRanges { ranges: out }
    }

    pub fn remove(&mut self, cp: CodePoint) {
        *self = self.intersect(&CodeRanges { ranges: vec![(cp, cp)] }.complement());
    }

    #[inline]
    pub fn contains(&self, cp: CodePoint) -> bool {
        let idx = self.ranges.partition_point(|&(_, hi)| hi < cp);
        matches!(self.ranges.get(idx), Some(&(lo, _)) if lo <= cp)
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[(CodePoint, CodePoint)] {
        &self.ranges
    }

    /// The single code point in the set, if there is exactly one.
    pub fn single(&self) -> Option<CodePoint> {
        match self.ranges.as_slice() {
            [(lo, hi)] if lo == hi => Some(*lo),
            _ => None,
        }
    }
}

// === CClass (256-bit bitset for the Latin-1 range plus code ranges) ===

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CClass {
    bits: [u64; 4],
    ranges: CodeRanges,
}

impl CClass {
    pub fn new(ranges: CodeRanges) -> Self {
        let mut bits = [0u64; 4];
        for &(lo, hi) in ranges.ranges() {
            if lo > 0xFF {
                break;
            }
            for c in lo..=hi.min(0xFF) {
                bits[(c >> 6) as usize] |= 1u64 << (c & 63);
            }
        }
        CClass { bits, ranges }
    }

    #[inline]
    pub fn matches(&self, cp: CodePoint) -> bool {
        if cp < 256 {
            self.bits[(cp >> 6) as usize] & (1u64 << (cp & 63)) != 0
        } else {
            self.ranges.contains(cp)
        }
    }
}

// === Opcodes ===

/// Case folding applied by string and backreference comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseFold {
    Exact,
    Ascii,
    Unicode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greed {
    Greedy,
    Lazy,
    Possessive,
}

pub type Addr = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Whole-pattern success (subject to FIND_* and MATCH_WHOLE_STRING checks).
    End,
    Char(CodePoint),
    Str(Box<[CodePoint]>),
    /// Case-folded comparison; the operand is already folded.
    StrIc { folded: Box<[CodePoint]>, fold: CaseFold },
    CClass(Box<CClass>),
    AnyChar,
    AnyCharMl,

    BeginBuf,
    EndBuf,
    SemiEndBuf,
    BeginLine,
    EndLine,
    BeginPosition,
    WordBoundary { ascii: bool, negate: bool },
    WordBegin { ascii: bool },
    WordEnd { ascii: bool },

    MemStart(usize),
    MemEnd(usize),
    BackRef { groups: Box<[usize]>, fold: CaseFold },
    /// Falls through when any of `groups` is set, otherwise jumps to `else_pc`.
    CondGroup { groups: Box<[usize]>, else_pc: Addr },
    Keep,

    Fail,
    Jump(Addr),
    /// Choice point: continue here, retry at `Addr` on failure.
    Push(Addr),
    /// Discards the top choice point.
    Pop,
    Mark { id: usize, save_pos: bool },
    /// Removes choice points above the mark (atomic groups, positive lookaround).
    CutToMark { id: usize, restore_pos: bool },
    /// Backtracks over everything above the mark, undoing side effects.
    PopToMark { id: usize },
    /// Succeeds only when the position equals the mark's saved position.
    CheckPosMark { id: usize },
    /// Moves back `min` characters, leaving a choice point that retries up to
    /// `extra` further characters back.
    StepBack { min: u32, extra: u32 },

    RepeatInit { id: usize },
    RepeatCheck { id: usize, min: u32, max: Option<u32>, lazy: bool, body: Addr, exit: Addr },
    RepeatInc { id: usize },
    RepeatEnd { id: usize },

    EmptyCheckStart { id: usize },
    EmptyCheckEnd { id: usize, exit: Addr },

    Call(Addr),
    Return,
}

/// How a search may pick its start positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartAnchor {
    None,
    /// `\A`: only offset 0.
    BeginBuf,
    /// `\G`: only the search start.
    BeginPosition,
}

// === Compiled Program ===

/// A compiled pattern. Immutable after `compile` returns.
#[derive(Debug, Clone)]
pub struct RegexType {
    pub(crate) ops: Vec<Op>,
    pub(crate) num_groups: usize,
    pub(crate) names: Arc<NameTable>,
    pub(crate) options: Options,
    pub(crate) syntax: &'static Syntax,
    /// Counter slots used by `RepeatInit`..`RepeatEnd`.
    pub(crate) num_repeats: usize,
    /// Bit `g` set when group `g` records capture history.
    pub(crate) history_groups: u32,

    // optimization
    pub(crate) anchor: StartAnchor,
    pub(crate) prefix: Box<[CodePoint]>,
    pub(crate) min_len: usize,
}

impl RegexType {
    /// Number of capture groups, not counting group 0.
    pub fn num_groups(&self) -> usize {
        self.num_groups
    }

    pub fn names(&self) -> &Arc<NameTable> {
        &self.names
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn syntax(&self) -> &'static Syntax {
        self.syntax
    }

    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    /// Minimum match length in characters.
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub(crate) fn has_history(&self, group: usize) -> bool {
        group < 32 && self.history_groups & (1u32 << group) != 0
    }
}
