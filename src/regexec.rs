// regexec.rs - Backtracking VM: match_at, search and the match-time limits.
//
// Structure: global limits → stack frames → match context → opcode dispatch
// (`Executor::run`) → start-position search.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use memchr::memmem;
use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::error::{MatchErrorKind, RegexError, ResourceLimitKind};
use crate::regdefs::{
    CodePoint, Options, DEFAULT_MATCH_STACK_LIMIT, DEFAULT_RETRY_LIMIT_IN_MATCH,
    DEFAULT_RETRY_LIMIT_IN_SEARCH, DEFAULT_SUBEXP_CALL_LIMIT_IN_SEARCH, DEFAULT_TIME_LIMIT_MSEC,
};
use crate::regenc::Encoding;
use crate::regint::{Addr, CaseFold, Op, RegexType, StartAnchor};
use crate::region::{CaptureTreeNode, Region, Span};
use crate::unicode;

// ============================================================================
// Global Limits
// ============================================================================

static RETRY_LIMIT_IN_MATCH: AtomicU64 = AtomicU64::new(DEFAULT_RETRY_LIMIT_IN_MATCH);
static RETRY_LIMIT_IN_SEARCH: AtomicU64 = AtomicU64::new(DEFAULT_RETRY_LIMIT_IN_SEARCH);
static MATCH_STACK_LIMIT: AtomicU32 = AtomicU32::new(DEFAULT_MATCH_STACK_LIMIT);
static TIME_LIMIT: AtomicU64 = AtomicU64::new(DEFAULT_TIME_LIMIT_MSEC);
static SUBEXP_CALL_LIMIT_IN_SEARCH: AtomicU64 = AtomicU64::new(DEFAULT_SUBEXP_CALL_LIMIT_IN_SEARCH);

pub fn set_retry_limit_in_match(n: u64) { RETRY_LIMIT_IN_MATCH.store(n, Ordering::Relaxed); }
pub fn get_retry_limit_in_match() -> u64 { RETRY_LIMIT_IN_MATCH.load(Ordering::Relaxed) }
pub fn set_retry_limit_in_search(n: u64) { RETRY_LIMIT_IN_SEARCH.store(n, Ordering::Relaxed); }
pub fn get_retry_limit_in_search() -> u64 { RETRY_LIMIT_IN_SEARCH.load(Ordering::Relaxed) }
pub fn set_match_stack_limit(n: u32) { MATCH_STACK_LIMIT.store(n, Ordering::Relaxed); }
pub fn get_match_stack_limit() -> u32 { MATCH_STACK_LIMIT.load(Ordering::Relaxed) }
/// Milliseconds; 0 disables the limit.
pub fn set_time_limit(msec: u64) { TIME_LIMIT.store(msec, Ordering::Relaxed); }
pub fn get_time_limit() -> u64 { TIME_LIMIT.load(Ordering::Relaxed) }
pub fn set_subexp_call_limit_in_search(n: u64) { SUBEXP_CALL_LIMIT_IN_SEARCH.store(n, Ordering::Relaxed); }
pub fn get_subexp_call_limit_in_search() -> u64 { SUBEXP_CALL_LIMIT_IN_SEARCH.load(Ordering::Relaxed) }

/// Per-call match budgets. A zero value means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchParam {
    /// Backtracks allowed while matching at one start position.
    pub retry_limit_in_match: u64,
    /// Backtracks allowed over a whole search.
    pub retry_limit_in_search: u64,
    /// Maximum backtrack stack depth, in frames.
    pub match_stack_limit: u32,
    /// Wall-clock limit in milliseconds.
    pub time_limit: u64,
    pub subexp_call_limit_in_search: u64,
}

impl Default for MatchParam {
    /// Snapshot of the process-wide defaults.
    fn default() -> Self {
        MatchParam {
            retry_limit_in_match: get_retry_limit_in_match(),
            retry_limit_in_search: get_retry_limit_in_search(),
            match_stack_limit: get_match_stack_limit(),
            time_limit: get_time_limit(),
            subexp_call_limit_in_search: get_subexp_call_limit_in_search(),
        }
    }
}

/// Backtracks between wall-clock checks.
const TIME_CHECK_INTERVAL: u64 = 512;

// ============================================================================
// Stack Frames
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Frame {
    // choice points
    Alt { pc: Addr, pos: usize },
    /// Lookbehind retry: step one more character back from `pos`.
    StepBack { pc: Addr, pos: usize, remaining: u32 },
    // markers
    Mark { id: usize, pos: usize },
    EmptyCheck { id: usize, pos: usize },
    // undo records
    RestoreSlot { group: usize, old: Option<(usize, usize)> },
    UnpushOpen { group: usize },
    RepushOpen { group: usize, start: usize },
    RestoreKeep { old: usize },
    PopCounter { id: usize },
    DecCounter { id: usize },
    RepushCounter { id: usize, value: u32 },
    UndoCall,
    UndoReturn { ret: Addr },
    TruncateHistory { len: usize },
}

impl Frame {
    #[inline]
    fn is_undo(&self) -> bool {
        !matches!(
            self,
            Frame::Alt { .. } | Frame::StepBack { .. } | Frame::Mark { .. } | Frame::EmptyCheck { .. }
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct HistoryEvent {
    group: usize,
    start: usize,
    end: usize,
}

// ============================================================================
// Match Context
// ============================================================================

/// Mutable state of one match attempt; reused across start positions.
#[derive(Debug, Default)]
struct MatchContext {
    stack: Vec<Frame>,
    slots: Vec<Option<(usize, usize)>>,
    /// Open capture starts per group (a stack, for recursion).
    open: Vec<Vec<usize>>,
    counters: Vec<Vec<u32>>,
    calls: Vec<Addr>,
    keep: usize,
    history: Vec<HistoryEvent>,
}

impl MatchContext {
    fn reset(&mut self, reg: &RegexType, start: usize) {
        self.stack.clear();
        self.slots.clear();
        self.slots.resize(reg.num_groups + 1, None);
        self.open.resize_with(reg.num_groups + 1, Vec::new);
        self.open.iter_mut().for_each(Vec::clear);
        self.counters.resize_with(reg.num_repeats, Vec::new);
        self.counters.iter_mut().for_each(Vec::clear);
        self.calls.clear();
        self.keep = start;
        self.history.clear();
    }

    fn undo(&mut self, frame: Frame) {
        match frame {
            Frame::RestoreSlot { group, old } => self.slots[group] = old,
            Frame::UnpushOpen { group } => {
                self.open[group].pop();
            }
            Frame::RepushOpen { group, start } => self.open[group].push(start),
            Frame::RestoreKeep { old } => self.keep = old,
            Frame::PopCounter { id } => {
                self.counters[id].pop();
            }
            Frame::DecCounter { id } => {
                if let Some(c) = self.counters[id].last_mut() {
                    *c -= 1;
                }
            }
            Frame::RepushCounter { id, value } => self.counters[id].push(value),
            Frame::UndoCall => {
                self.calls.pop();
            }
            Frame::UndoReturn { ret } => self.calls.push(ret),
            Frame::TruncateHistory { len } => self.history.truncate(len),
            Frame::Alt { .. } | Frame::StepBack { .. } | Frame::Mark { .. } | Frame::EmptyCheck { .. } => {}
        }
    }

    /// Stack index and saved position of the innermost mark `id`.
    fn find_mark(&self, id: usize) -> Option<(usize, usize)> {
        self.stack.iter().enumerate().rev().find_map(|(i, f)| match *f {
            Frame::Mark { id: m, pos } if m == id => Some((i, pos)),
            _ => None,
        })
    }

    /// Drops choice points and markers from the mark up, keeping undo records.
    fn cut_to(&mut self, idx: usize) {
        let mut w = idx;
        for r in idx + 1..self.stack.len() {
            if self.stack[r].is_undo() {
                self.stack[w] = self.stack[r];
                w += 1;
            }
        }
        self.stack.truncate(w);
    }

    /// Unwinds everything above and including the mark, applying undo records.
    fn pop_to(&mut self, idx: usize) {
        while self.stack.len() > idx {
            if let Some(frame) = self.stack.pop() {
                self.undo(frame);
            }
        }
    }

    fn history_tree(&self, root: Span) -> CaptureTreeNode {
        let mut events: Vec<(usize, HistoryEvent)> = self.history.iter().copied().enumerate().collect();
        events.sort_by(|(ia, a), (ib, b)| {
            a.start.cmp(&b.start).then(b.end.cmp(&a.end)).then(ib.cmp(ia))
        });
        let mut stack = vec![CaptureTreeNode::new(0, root.start, root.end)];
        for (_, ev) in events {
            while stack.len() > 1 && stack.last().is_some_and(|top| ev.end > top.end || ev.start < top.start) {
                if let Some(done) = stack.pop() {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(done);
                    }
                }
            }
            stack.push(CaptureTreeNode::new(ev.group, ev.start, ev.end));
        }
        while stack.len() > 1 {
            if let Some(done) = stack.pop() {
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(done);
                }
            }
        }
        stack.pop().unwrap_or_else(|| CaptureTreeNode::new(0, root.start, root.end))
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs one compiled program against one subject. Counters that span a
/// whole search (retries, calls, elapsed time) live here.
pub(crate) struct Executor<'r, 's> {
    reg: &'r RegexType,
    subject: &'s [u8],
    enc: Encoding,
    options: Options,
    param: MatchParam,
    /// Where `\G` matches.
    search_start: usize,
    ctx: MatchContext,
    retries_in_search: u64,
    calls_in_search: u64,
    started: Instant,
    time_limit: Option<Duration>,
}

enum Step {
    Next,
    Goto(Addr),
    Fail,
}

impl<'r, 's> Executor<'r, 's> {
    pub(crate) fn new(
        reg: &'r RegexType,
        subject: &'s [u8],
        enc: Encoding,
        options: Options,
        param: &MatchParam,
        search_start: usize,
    ) -> Result<Self, RegexError> {
        enc.validate(subject)?;
        Self::for_valid_subject(reg, subject, enc, options, param, search_start)
    }

    /// Like `new`, for a subject the caller has already validated.
    pub(crate) fn for_valid_subject(
        reg: &'r RegexType,
        subject: &'s [u8],
        enc: Encoding,
        options: Options,
        param: &MatchParam,
        search_start: usize,
    ) -> Result<Self, RegexError> {
        let mut exec = Executor {
            reg,
            subject,
            enc,
            options: (options & Options::SEARCH_MASK) | reg.options,
            param: *param,
            search_start,
            ctx: MatchContext::default(),
            retries_in_search: 0,
            calls_in_search: 0,
            started: Instant::now(),
            time_limit: (param.time_limit > 0).then(|| Duration::from_millis(param.time_limit)),
        };
        exec.restart(search_start)?;
        Ok(exec)
    }

    /// Starts a new search from `search_start` on the same, already
    /// validated, subject. Search-wide budgets start over.
    pub(crate) fn restart(&mut self, search_start: usize) -> Result<(), RegexError> {
        if search_start > self.subject.len() {
            return Err(MatchErrorKind::StartOutOfRange(search_start).into());
        }
        if !self.enc.is_char_boundary(self.subject, search_start) {
            return Err(MatchErrorKind::NotCharBoundary(search_start).into());
        }
        self.search_start = search_start;
        self.retries_in_search = 0;
        self.calls_in_search = 0;
        self.started = Instant::now();
        Ok(())
    }


    #[inline]
    fn end(&self) -> usize {
        self.subject.len()
    }

    #[inline]
    fn next_char(&self, pos: usize) -> Result<Option<(CodePoint, usize)>, RegexError> {
        if pos >= self.subject.len() {
            return Ok(None);
        }
        Ok(Some(self.enc.decode(self.subject, pos)?))
    }

    #[inline]
    fn prev_char(&self, pos: usize) -> Result<Option<(CodePoint, usize)>, RegexError> {
        if pos == 0 {
            return Ok(None);
        }
        Ok(Some(self.enc.decode_prev(self.subject, pos)?))
    }

    fn is_word_at(&self, pos: usize, ascii: bool) -> Result<bool, RegexError> {
        Ok(self.next_char(pos)?.is_some_and(|(c, _)| unicode::is_word_char(c, ascii)))
    }

    fn is_word_before(&self, pos: usize, ascii: bool) -> Result<bool, RegexError> {
        Ok(self.prev_char(pos)?.is_some_and(|(c, _)| unicode::is_word_char(c, ascii)))
    }

    fn fold_into(c: CodePoint, fold: CaseFold, out: &mut SmallVec<[CodePoint; 8]>) {
        out.clear();
        match fold {
            CaseFold::Exact => out.push(c),
            CaseFold::Ascii => out.push(unicode::fold_ascii(c)),
            CaseFold::Unicode => unicode::fold_full(c, out),
        }
    }

    /// Matches subject characters at `pos` whose folds spell out `folded`;
    /// returns the end position.
    fn match_folded(&self, mut pos: usize, folded: &[CodePoint], fold: CaseFold) -> Result<Option<usize>, RegexError> {
        let mut buf = SmallVec::new();
        let mut i = 0;
        while i < folded.len() {
            let Some((c, len)) = self.next_char(pos)? else {
                return Ok(None);
            };
            Self::fold_into(c, fold, &mut buf);
            if !folded[i..].starts_with(&buf) {
                return Ok(None);
            }
            i += buf.len();
            pos += len;
        }
        Ok(Some(pos))
    }

    fn match_backref(&self, pos: usize, groups: &[usize], fold: CaseFold) -> Result<Option<usize>, RegexError> {
        for &g in groups.iter().rev() {
            let Some((s, e)) = self.ctx.slots.get(g).copied().flatten() else {
                continue;
            };
            let captured = &self.subject[s..e];
            if fold == CaseFold::Exact {
                if self.subject[pos..].starts_with(captured) {
                    return Ok(Some(pos + captured.len()));
                }
                continue;
            }
            let mut folded = Vec::with_capacity(captured.len());
            let mut buf = SmallVec::new();
            let mut p = s;
            while p < e {
                let (c, len) = self.enc.decode(self.subject, p)?;
                Self::fold_into(c, fold, &mut buf);
                folded.extend_from_slice(&buf);
                p += len;
            }
            if let Some(end) = self.match_folded(pos, &folded, fold)? {
                return Ok(Some(end));
            }
        }
        Ok(None)
    }

    fn push(&mut self, frame: Frame) -> Result<(), RegexError> {
        let limit = self.param.match_stack_limit as usize;
        if limit > 0 && self.ctx.stack.len() >= limit {
            warn!(limit, "match stack limit reached");
            return Err(ResourceLimitKind::MatchStack.into());
        }
        self.ctx.stack.push(frame);
        Ok(())
    }

    fn count_retry(&mut self, retries: &mut u64) -> Result<(), RegexError> {
        *retries += 1;
        self.retries_in_search += 1;
        let p = self.param;
        if p.retry_limit_in_match > 0 && *retries > p.retry_limit_in_match {
            warn!(limit = p.retry_limit_in_match, "retry limit in match reached");
            return Err(ResourceLimitKind::RetryInMatch.into());
        }
        if p.retry_limit_in_search > 0 && self.retries_in_search > p.retry_limit_in_search {
            warn!(limit = p.retry_limit_in_search, "retry limit in search reached");
            return Err(ResourceLimitKind::RetryInSearch.into());
        }
        if let Some(limit) = self.time_limit {
            if self.retries_in_search % TIME_CHECK_INTERVAL == 0 && self.started.elapsed() > limit {
                warn!(msec = p.time_limit, "time limit reached");
                return Err(ResourceLimitKind::Time.into());
            }
        }
        Ok(())
    }

    /// Pops frames until a choice point resumes; `None` when exhausted.
    fn backtrack(&mut self, retries: &mut u64) -> Result<Option<(Addr, usize)>, RegexError> {
        while let Some(frame) = self.ctx.stack.pop() {
            match frame {
                Frame::Alt { pc, pos } => {
                    self.count_retry(retries)?;
                    return Ok(Some((pc, pos)));
                }
                Frame::StepBack { pc, pos, remaining } => {
                    let Some((_, len)) = self.prev_char(pos)? else {
                        continue;
                    };
                    self.count_retry(retries)?;
                    let np = pos - len;
                    if remaining > 1 {
                        self.push(Frame::StepBack { pc, pos: np, remaining: remaining - 1 })?;
                    }
                    return Ok(Some((pc, np)));
                }
                other => self.ctx.undo(other),
            }
        }
        Ok(None)
    }

    fn make_region(&self, end: usize) -> Region {
        let reg = self.reg;
        let whole = Span::new(self.ctx.keep, end);
        let mut spans = Vec::with_capacity(reg.num_groups + 1);
        spans.push(Some(whole));
        spans.extend(self.ctx.slots[1..].iter().map(|s| s.map(|(a, b)| Span::new(a, b))));
        let history = (reg.history_groups != 0).then(|| self.ctx.history_tree(whole));
        Region::new(spans, reg.names.clone(), history)
    }

    /// Runs the program anchored at `start`.
    pub(crate) fn match_here(&mut self, start: usize) -> Result<Option<Region>, RegexError> {
        let reg = self.reg;
        self.ctx.reset(reg, start);
        let mut pc: Addr = 0;
        let mut pos = start;
        let mut retries = 0u64;
        let mut best: Option<Region> = None;
        let opts = self.options;
        let end = self.end();

        loop {
            let step = match &reg.ops[pc] {
                Op::End => {
                    let empty = pos == self.ctx.keep;
                    if (opts.contains(Options::FIND_NOT_EMPTY) && empty)
                        || (opts.contains(Options::MATCH_WHOLE_STRING) && pos != end)
                    {
                        Step::Fail
                    } else if opts.contains(Options::FIND_LONGEST) {
                        let longer = best.as_ref().map_or(true, |b| pos - self.ctx.keep > b.end() - b.start());
                        if longer {
                            best = Some(self.make_region(pos));
                        }
                        Step::Fail
                    } else {
                        return Ok(Some(self.make_region(pos)));
                    }
                }
                Op::Char(c) => match self.next_char(pos)? {
                    Some((d, len)) if d == *c => {
                        pos += len;
                        Step::Next
                    }
                    _ => Step::Fail,
                },
                Op::Str(s) => {
                    let mut p = pos;
                    let mut ok = true;
                    for &c in s.iter() {
                        match self.next_char(p)? {
                            Some((d, len)) if d == c => p += len,
                            _ => {
                                ok = false;
                                break;
                            }
                        }
                    }
                    if ok {
                        pos = p;
                        Step::Next
                    } else {
                        Step::Fail
                    }
                }
                Op::StrIc { folded, fold } => match self.match_folded(pos, folded, *fold)? {
                    Some(p) => {
                        pos = p;
                        Step::Next
                    }
                    None => Step::Fail,
                },
                Op::CClass(cc) => match self.next_char(pos)? {
                    Some((c, len)) if cc.matches(c) => {
                        pos += len;
                        Step::Next
                    }
                    _ => Step::Fail,
                },
                Op::AnyChar => match self.next_char(pos)? {
                    Some((c, len)) if c != '\n' as CodePoint => {
                        pos += len;
                        Step::Next
                    }
                    _ => Step::Fail,
                },
                Op::AnyCharMl => match self.next_char(pos)? {
                    Some((_, len)) => {
                        pos += len;
                        Step::Next
                    }
                    None => Step::Fail,
                },

                // NOTBOL/NOTEOL also deny the buffer anchors.
                Op::BeginBuf => cond(pos == 0 && !opts.intersects(Options::NOT_BEGIN_STRING | Options::NOTBOL)),
                Op::EndBuf => cond(pos == end && !opts.intersects(Options::NOT_END_STRING | Options::NOTEOL)),
                Op::SemiEndBuf => {
                    let at_end = pos == end
                        || matches!(self.next_char(pos)?, Some((0x0A, len)) if pos + len == end);
                    cond(at_end && !opts.intersects(Options::NOT_END_STRING | Options::NOTEOL))
                }
                Op::BeginLine => {
                    if pos == 0 {
                        cond(!opts.contains(Options::NOTBOL))
                    } else {
                        cond(pos != end && matches!(self.prev_char(pos)?, Some((0x0A, _))))
                    }
                }
                Op::EndLine => {
                    if pos == end {
                        cond(!opts.contains(Options::NOTEOL))
                    } else {
                        cond(matches!(self.next_char(pos)?, Some((0x0A, _))))
                    }
                }
                Op::BeginPosition => {
                    cond(pos == self.search_start && !opts.contains(Options::NOT_BEGIN_POSITION))
                }
                Op::WordBoundary { ascii, negate } => {
                    let boundary = self.is_word_before(pos, *ascii)? != self.is_word_at(pos, *ascii)?;
                    cond(boundary != *negate)
                }
                Op::WordBegin { ascii } => {
                    cond(!self.is_word_before(pos, *ascii)? && self.is_word_at(pos, *ascii)?)
                }
                Op::WordEnd { ascii } => {
                    cond(self.is_word_before(pos, *ascii)? && !self.is_word_at(pos, *ascii)?)
                }

                Op::MemStart(g) => {
                    self.push(Frame::UnpushOpen { group: *g })?;
                    self.ctx.open[*g].push(pos);
                    Step::Next
                }
                Op::MemEnd(g) => {
                    let g = *g;
                    let start = self.ctx.open[g].pop().unwrap_or(pos);
                    let old = self.ctx.slots[g];
                    self.push(Frame::RepushOpen { group: g, start })?;
                    self.push(Frame::RestoreSlot { group: g, old })?;
                    self.ctx.slots[g] = Some((start, pos));
                    if reg.has_history(g) {
                        let len = self.ctx.history.len();
                        self.push(Frame::TruncateHistory { len })?;
                        self.ctx.history.push(HistoryEvent { group: g, start, end: pos });
                    }
                    Step::Next
                }
                Op::BackRef { groups, fold } => match self.match_backref(pos, groups, *fold)? {
                    Some(p) => {
                        pos = p;
                        Step::Next
                    }
                    None => Step::Fail,
                },
                Op::CondGroup { groups, else_pc } => {
                    if groups.iter().any(|&g| self.ctx.slots.get(g).copied().flatten().is_some()) {
                        Step::Next
                    } else {
                        Step::Goto(*else_pc)
                    }
                }
                Op::Keep => {
                    let old = self.ctx.keep;
                    self.push(Frame::RestoreKeep { old })?;
                    self.ctx.keep = pos;
                    Step::Next
                }

                Op::Fail => Step::Fail,
                Op::Jump(a) => Step::Goto(*a),
                Op::Push(a) => {
                    self.push(Frame::Alt { pc: *a, pos })?;
                    Step::Next
                }
                Op::Pop => {
                    self.ctx.stack.pop();
                    Step::Next
                }
                Op::Mark { id, .. } => {
                    self.push(Frame::Mark { id: *id, pos })?;
                    Step::Next
                }
                Op::CutToMark { id, restore_pos } => match self.ctx.find_mark(*id) {
                    Some((idx, mark_pos)) => {
                        self.ctx.cut_to(idx);
                        if *restore_pos {
                            pos = mark_pos;
                        }
                        Step::Next
                    }
                    None => Step::Fail,
                },
                Op::PopToMark { id } => {
                    if let Some((idx, _)) = self.ctx.find_mark(*id) {
                        self.ctx.pop_to(idx);
                    }
                    Step::Next
                }
                Op::CheckPosMark { id } => cond(self.ctx.find_mark(*id).is_some_and(|(_, p)| p == pos)),
                Op::StepBack { min, extra } => {
                    let mut p = pos;
                    let mut ok = true;
                    for _ in 0..*min {
                        match self.prev_char(p)? {
                            Some((_, len)) => p -= len,
                            None => {
                                ok = false;
                                break;
                            }
                        }
                    }
                    if ok {
                        if *extra > 0 {
                            self.push(Frame::StepBack { pc: pc + 1, pos: p, remaining: *extra })?;
                        }
                        pos = p;
                        Step::Next
                    } else {
                        Step::Fail
                    }
                }

                Op::RepeatInit { id } => {
                    self.push(Frame::PopCounter { id: *id })?;
                    self.ctx.counters[*id].push(0);
                    Step::Next
                }
                Op::RepeatCheck { id, min, max, lazy, body, exit } => {
                    let count = self.ctx.counters[*id].last().copied().unwrap_or(0);
                    if count < *min {
                        Step::Goto(*body)
                    } else if *max == Some(count) {
                        Step::Goto(*exit)
                    } else if *lazy {
                        self.push(Frame::Alt { pc: *body, pos })?;
                        Step::Goto(*exit)
                    } else {
                        self.push(Frame::Alt { pc: *exit, pos })?;
                        Step::Goto(*body)
                    }
                }
                Op::RepeatInc { id } => {
                    self.push(Frame::DecCounter { id: *id })?;
                    if let Some(c) = self.ctx.counters[*id].last_mut() {
                        *c += 1;
                    }
                    Step::Next
                }
                Op::RepeatEnd { id } => {
                    let value = self.ctx.counters[*id].pop().unwrap_or(0);
                    self.push(Frame::RepushCounter { id: *id, value })?;
                    Step::Next
                }

                Op::EmptyCheckStart { id } => {
                    self.push(Frame::EmptyCheck { id: *id, pos })?;
                    Step::Next
                }
                Op::EmptyCheckEnd { id, exit } => {
                    let started = self.ctx.stack.iter().rev().find_map(|f| match f {
                        Frame::EmptyCheck { id: e, pos } if e == id => Some(*pos),
                        _ => None,
                    });
                    if started == Some(pos) {
                        Step::Goto(*exit)
                    } else {
                        Step::Next
                    }
                }

                Op::Call(addr) => {
                    self.calls_in_search += 1;
                    let limit = self.param.subexp_call_limit_in_search;
                    if limit > 0 && self.calls_in_search > limit {
                        warn!(limit, "subexp call limit reached");
                        return Err(ResourceLimitKind::SubexpCall.into());
                    }
                    self.push(Frame::UndoCall)?;
                    self.ctx.calls.push(pc + 1);
                    Step::Goto(*addr)
                }
                Op::Return => match self.ctx.calls.pop() {
                    Some(ret) => {
                        self.push(Frame::UndoReturn { ret })?;
                        Step::Goto(ret)
                    }
                    None => Step::Fail,
                },
            };

            match step {
                Step::Next => pc += 1,
                Step::Goto(a) => pc = a,
                Step::Fail => match self.backtrack(&mut retries)? {
                    Some((p, s)) => {
                        pc = p;
                        pos = s;
                    }
                    None => return Ok(best),
                },
            }
        }
    }

    fn next_start(&self, s: usize) -> Result<usize, RegexError> {
        let (_, len) = self.enc.decode(self.subject, s)?;
        Ok(s + len)
    }

    fn prev_start(&self, s: usize) -> Result<usize, RegexError> {
        let (_, len) = self.enc.decode_prev(self.subject, s)?;
        Ok(s - len)
    }

    /// Tries start positions from `start` towards `range` (both inclusive).
    pub(crate) fn search_range(&mut self, start: usize, range: usize) -> Result<Option<Region>, RegexError> {
        let len = self.subject.len();
        if range > len {
            return Err(MatchErrorKind::RangeOutOfRange(range).into());
        }
        let (lo, hi) = if range >= start { (start, range) } else { (range, start) };
        match self.reg.anchor {
            StartAnchor::BeginBuf => {
                trace!(strategy = "begin-buf", "search");
                return if lo == 0 { self.match_here(0) } else { Ok(None) };
            }
            StartAnchor::BeginPosition => {
                trace!(strategy = "begin-position", "search");
                return self.match_here(start);
            }
            StartAnchor::None => {}
        }
        let min_bytes = self.reg.min_len * self.enc.min_len();
        if range < start {
            trace!(strategy = "backward", "search");
            return self.search_backward(lo, hi, min_bytes);
        }

        let prefix = match self.reg.prefix.is_empty() {
            true => None,
            false => self.enc.encode_all(&self.reg.prefix),
        };
        trace!(strategy = if prefix.is_some() { "prefix" } else { "scan" }, "search");
        let finder = prefix.as_deref().map(memmem::Finder::new);
        let longest = self.options.contains(Options::FIND_LONGEST);
        let mut best: Option<Region> = None;
        let mut s = lo;
        while s <= hi {
            if len - s < min_bytes {
                break;
            }
            if let Some(f) = &finder {
                let Some(i) = f.find(&self.subject[s..]) else {
                    break;
                };
                let cand = s + i;
                if cand > hi {
                    break;
                }
                if !self.enc.is_char_boundary(self.subject, cand) {
                    s = cand + 1;
                    continue;
                }
                s = cand;
            }
            if let Some(r) = self.match_here(s)? {
                if !longest {
                    return Ok(Some(r));
                }
                if best.as_ref().map_or(true, |b| r.end() - r.start() > b.end() - b.start()) {
                    best = Some(r);
                }
            }
            if s >= len {
                break;
            }
            s = self.next_start(s)?;
        }
        Ok(best)
    }

    fn search_backward(&mut self, lo: usize, hi: usize, min_bytes: usize) -> Result<Option<Region>, RegexError> {
        let len = self.subject.len();
        let longest = self.options.contains(Options::FIND_LONGEST);
        let mut best: Option<Region> = None;
        let mut s = hi;
        loop {
            if len - s >= min_bytes {
                if let Some(r) = self.match_here(s)? {
                    if !longest {
                        return Ok(Some(r));
                    }
                    if best.as_ref().map_or(true, |b| r.end() - r.start() > b.end() - b.start()) {
                        best = Some(r);
                    }
                }
            }
            if s <= lo {
                break;
            }
            s = self.prev_start(s)?;
        }
        Ok(best)
    }
}

#[inline]
fn cond(ok: bool) -> Step {
    if ok {
        Step::Next
    } else {
        Step::Fail
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Matches `reg` anchored at byte offset `at`.
pub fn match_at(
    reg: &RegexType,
    subject: &[u8],
    encoding: Encoding,
    at: usize,
    options: Options,
    param: &MatchParam,
) -> Result<Option<Region>, RegexError> {
    Executor::new(reg, subject, encoding, options, param, at)?.match_here(at)
}

/// Finds the first match whose start lies between `start` and `range`
/// (inclusive). Searches backward when `range < start`.
pub fn search(
    reg: &RegexType,
    subject: &[u8],
    encoding: Encoding,
    start: usize,
    range: usize,
    options: Options,
    param: &MatchParam,
) -> Result<Option<Region>, RegexError> {
    Executor::new(reg, subject, encoding, options, param, start)?.search_range(start, range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regcomp::{compile, CompileLimits};
    use crate::regsyntax::SYNTAX_ONIGURUMA;

    fn reg(pattern: &str) -> RegexType {
        compile(pattern.as_bytes(), Encoding::Utf8, Options::empty(), &SYNTAX_ONIGURUMA, &CompileLimits::default())
            .unwrap()
    }

    fn find(pattern: &str, subject: &str) -> Option<(usize, usize)> {
        let r = reg(pattern);
        search(&r, subject.as_bytes(), Encoding::Utf8, 0, subject.len(), Options::empty(), &MatchParam::default())
            .unwrap()
            .map(|m| (m.start(), m.end()))
    }

    #[test]
    fn greedy_versus_lazy() {
        assert_eq!(find("a+", "aaa"), Some((0, 3)));
        assert_eq!(find("a+?", "aaa"), Some((0, 1)));
        assert_eq!(find("a{2,}?", "aaaa"), Some((0, 2)));
    }

    #[test]
    fn leftmost_start() {
        assert_eq!(find("b", "ababab"), Some((1, 2)));
        assert_eq!(find("x", "ababab"), None);
    }

    #[test]
    fn atomic_and_possessive_do_not_backtrack() {
        assert_eq!(find("(?>a+)a", "aaa"), None);
        assert_eq!(find("a++a", "aaa"), None);
        assert_eq!(find("a+a", "aaa"), Some((0, 3)));
    }

    #[test]
    fn lookaround() {
        assert_eq!(find("foo(?=bar)", "foobaz foobar"), Some((7, 10)));
        assert_eq!(find("foo(?!bar)", "foobar foobaz"), Some((7, 10)));
        assert_eq!(find("(?<=\\$)\\d+", "cost: $42"), Some((7, 9)));
        assert_eq!(find("(?<!\\$)\\b\\d+", "$42 17"), Some((4, 6)));
        assert_eq!(find("(?<=ab|b)c", "abc"), Some((2, 3)));
    }

    #[test]
    fn backreferences() {
        assert_eq!(find("(\\w)\\1", "abccd"), Some((2, 4)));
        assert_eq!(find("(?i)(a)\\1", "aA"), Some((0, 2)));
        assert_eq!(find("(a)|\\1b", "b"), None);
    }

    #[test]
    fn recursion_balanced_parens() {
        assert_eq!(find("\\((?:[^()]|\\g<0>)*\\)", "x(a(b)c)y"), Some((1, 8)));
    }

    #[test]
    fn nullable_loop_terminates() {
        assert_eq!(find("(?:a?)*b", "aab"), Some((0, 3)));
        assert_eq!(find("(a*)*", "b"), Some((0, 0)));
    }

    #[test]
    fn counted_loop() {
        let subject = "ab".repeat(150);
        assert_eq!(find("(?:ab){100,120}", &subject), Some((0, 240)));
        assert_eq!(find("(?:ab){100,120}?", &subject), Some((0, 200)));
    }

    #[test]
    fn keep_moves_match_start() {
        assert_eq!(find("foo\\Kbar", "foobar"), Some((3, 6)));
    }

    #[test]
    fn unicode_case_folding() {
        assert_eq!(find("(?i)straße", "STRASSE"), Some((0, 7)));
        assert_eq!(find("(?i)σ", "Σ"), Some((0, 2)));
    }

    #[test]
    fn anchors_and_lines() {
        assert_eq!(find("^b", "a\nb"), Some((2, 3)));
        assert_eq!(find("a$", "a\nb"), Some((0, 1)));
        assert_eq!(find("\\Aa", "ba"), None);
        assert_eq!(find("a\\Z", "a\n"), Some((0, 1)));
        assert_eq!(find("^$", "a\n"), None);
        assert_eq!(find("^$", ""), Some((0, 0)));
    }

    #[test]
    fn retry_limit_aborts_catastrophic_backtracking() {
        let r = reg("(a+)+b");
        let subject = "a".repeat(28) + "!";
        let param = MatchParam { retry_limit_in_match: 10_000, ..MatchParam::default() };
        let err = search(&r, subject.as_bytes(), Encoding::Utf8, 0, subject.len(), Options::empty(), &param)
            .unwrap_err();
        assert_eq!(err, RegexError::ResourceLimit(ResourceLimitKind::RetryInMatch));
    }

    #[test]
    fn invalid_subject_reports_offset() {
        let r = reg("b");
        let subject = b"aa\xFFb";
        let err = search(&r, subject, Encoding::Utf8, 0, subject.len(), Options::empty(), &MatchParam::default())
            .unwrap_err();
        assert_eq!(err, RegexError::InvalidEncoding { encoding: Encoding::Utf8, offset: 2 });
    }

    #[test]
    fn start_must_be_a_boundary() {
        let r = reg("a");
        let err = search(&r, "éa".as_bytes(), Encoding::Utf8, 1, 3, Options::empty(), &MatchParam::default())
            .unwrap_err();
        assert_eq!(err, RegexError::Match(MatchErrorKind::NotCharBoundary(1)));
    }

    #[test]
    fn backward_search_finds_last_start() {
        let r = reg("ab");
        let m = search(&r, b"ab ab ab", Encoding::Utf8, 8, 0, Options::empty(), &MatchParam::default())
            .unwrap()
            .unwrap();
        assert_eq!(m.start(), 6);
    }

    #[test]
    fn capture_history_tree() {
        let r = reg("(?@a)+");
        let m = search(&r, b"aaa", Encoding::Utf8, 0, 3, Options::empty(), &MatchParam::default())
            .unwrap()
            .unwrap();
        let tree = m.history().unwrap();
        assert_eq!(tree.group, 0);
        let spans: Vec<(usize, usize)> = tree.children.iter().map(|n| (n.start, n.end)).collect();
        assert_eq!(spans, [(0, 1), (1, 2), (2, 3)]);
    }
}
