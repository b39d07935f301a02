// regcomp.rs - Compiler: lowers the parsed AST into the backtracking program.
//
// Layout: limits and entry point → length analysis → recursion check →
// node lowering (strings, classes, anchors, groups, quantifiers, lookaround)
// → start-position prefilters.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use smallvec::SmallVec;
use tracing::debug;

use crate::error::{RegexError, ResourceLimitKind, SyntaxErrorKind, UnsupportedFeature};
use crate::regdefs::{CodePoint, Options, DEFAULT_PROGRAM_SIZE_LIMIT, MAX_LOOK_BEHIND_CHARS};
use crate::regenc::Encoding;
use crate::regint::{Addr, CClass, CaseFold, Greed, Op, RegexType, StartAnchor};
use crate::regparse::{self, get_capture_limit, get_parse_depth_limit};
use crate::regparse_types::{AnchorKind, Node, RefTarget};
use crate::regsyntax::{Syntax, SyntaxBehavior};
use crate::unicode;

/// Quantifiers whose expanded form stays under this many ops are unrolled.
const QUANTIFIER_EXPAND_LIMIT: usize = 64;

// ============================================================================
// Limits
// ============================================================================

static PROGRAM_SIZE_LIMIT: AtomicU32 = AtomicU32::new(DEFAULT_PROGRAM_SIZE_LIMIT);

pub fn set_program_size_limit(ops: u32) {
    PROGRAM_SIZE_LIMIT.store(ops, Ordering::Relaxed);
}

pub fn get_program_size_limit() -> u32 {
    PROGRAM_SIZE_LIMIT.load(Ordering::Relaxed)
}

/// Budgets enforced while compiling one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileLimits {
    pub parse_depth_limit: u32,
    pub capture_limit: u32,
    /// Maximum number of program instructions.
    pub program_size_limit: u32,
}

impl Default for CompileLimits {
    /// Snapshot of the process-wide defaults.
    fn default() -> Self {
        CompileLimits {
            parse_depth_limit: get_parse_depth_limit(),
            capture_limit: get_capture_limit(),
            program_size_limit: get_program_size_limit(),
        }
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Parses and compiles `pattern`, written in `encoding`, under `syntax`.
#[tracing::instrument(skip_all, fields(dialect = syntax.name))]
pub fn compile(
    pattern: &[u8],
    encoding: Encoding,
    options: Options,
    syntax: &'static Syntax,
    limits: &CompileLimits,
) -> Result<RegexType, RegexError> {
    if options.contains(Options::DONT_CAPTURE_GROUP | Options::CAPTURE_GROUP) {
        return Err(RegexError::syntax(SyntaxErrorKind::InvalidCombinationOfOptions, 0));
    }
    let mut opts = (options & Options::COMPILE_MASK) | syntax.options;
    if opts.contains(Options::NEGATE_SINGLELINE) {
        opts.remove(Options::SINGLELINE);
    }

    let parsed = regparse::parse(pattern, encoding, opts, syntax, limits)?;

    let mut groups: Vec<Option<&Node>> = vec![None; parsed.num_groups + 1];
    groups[0] = Some(&parsed.root);
    let mut called = vec![false; parsed.num_groups + 1];
    parsed.root.walk(&mut |node| match node {
        Node::Group { index, .. } => groups[*index] = Some(node),
        Node::Call { target } => {
            for &g in target.groups() {
                called[g] = true;
            }
        }
        _ => {}
    });

    let mut an = Analyzer::new(&groups, &called, limits.parse_depth_limit);
    an.check_recursion()?;

    let mut c = Compiler {
        ops: Vec::new(),
        syntax,
        called: &called,
        size_limit: limits.program_size_limit as usize,
        num_marks: 0,
        num_repeats: 0,
        num_empty_checks: 0,
        call_fixups: Vec::new(),
        analyzer: an,
    };
    let sub_addrs = c.compile_program(&groups)?;
    for &(pc, g) in &c.call_fixups {
        c.ops[pc] = Op::Call(sub_addrs[g]);
    }
    if c.ops.len() > c.size_limit {
        return Err(ResourceLimitKind::ProgramSize.into());
    }

    let anchor = start_anchor(&parsed.root);
    let prefix = literal_prefix(&parsed.root).into_boxed_slice();
    let min_len = c.analyzer.len_range(&parsed.root).0;

    let reg = RegexType {
        ops: c.ops,
        num_groups: parsed.num_groups,
        names: Arc::new(parsed.names),
        options: parsed.options,
        syntax,
        num_repeats: c.num_repeats,
        history_groups: parsed.history_groups,
        anchor,
        prefix,
        min_len,
    };
    debug!(
        pattern_len = pattern.len(),
        ops = reg.ops.len(),
        captures = reg.num_groups,
        "compiled pattern"
    );
    Ok(reg)
}

// ============================================================================
// Length analysis
// ============================================================================

/// Character-length bounds of a node: `(min, max)`, `max = None` when unbounded.
type LenRange = (usize, Option<usize>);

const LEN_INFINITE: usize = usize::MAX / 4;

fn len_add(a: LenRange, b: LenRange) -> LenRange {
    let max = match (a.1, b.1) {
        (Some(x), Some(y)) => Some(x + y).filter(|&m| m < LEN_INFINITE),
        _ => None,
    };
    ((a.0 + b.0).min(LEN_INFINITE), max)
}

fn len_mul(a: LenRange, min: u32, max: Option<u32>) -> LenRange {
    let lo = a.0.saturating_mul(min as usize).min(LEN_INFINITE);
    let hi = match (a.1, max) {
        (Some(0), _) | (_, Some(0)) => Some(0),
        (Some(x), Some(m)) => Some(x.saturating_mul(m as usize)).filter(|&v| v < LEN_INFINITE),
        _ => None,
    };
    (lo, hi)
}

struct Analyzer<'a> {
    groups: &'a [Option<&'a Node>],
    called: &'a [bool],
    visiting: Vec<bool>,
    /// Calls followed by `len_range`; past `call_depth_limit` the length is unknown.
    call_depth: u32,
    call_depth_limit: u32,
}

impl<'a> Analyzer<'a> {
    fn new(groups: &'a [Option<&'a Node>], called: &'a [bool], call_depth_limit: u32) -> Self {
        Analyzer { groups, called, visiting: vec![false; groups.len()], call_depth: 0, call_depth_limit }
    }

    fn group_body(&self, g: usize) -> Option<&'a Node> {
        let node = self.groups.get(g).copied().flatten()?;
        match node {
            Node::Group { body, .. } if g > 0 => Some(&**body),
            _ => Some(node),
        }
    }

    fn len_range(&mut self, node: &Node) -> LenRange {
        match node {
            Node::Empty | Node::Anchor(_) | Node::Look { .. } | Node::Keep => (0, Some(0)),
            Node::Literal { chars, fold: CaseFold::Unicode } => {
                let folded = fold_unicode(chars).len();
                (folded.div_ceil(3), Some(folded))
            }
            Node::Literal { chars, .. } => (chars.len(), Some(chars.len())),
            Node::Class(_) | Node::AnyChar { .. } => (1, Some(1)),
            Node::Group { body, .. } | Node::Atomic(body) => self.len_range(body),
            Node::Repeat { min, max, body, .. } => {
                let b = self.len_range(body);
                len_mul(b, *min, *max)
            }
            Node::Concat(items) => items
                .iter()
                .fold((0, Some(0)), |acc, n| len_add(acc, self.len_range(n))),
            Node::Alt(branches) => {
                let mut out: Option<LenRange> = None;
                for b in branches {
                    let r = self.len_range(b);
                    out = Some(match out {
                        None => r,
                        Some((lo, hi)) => (lo.min(r.0), hi.zip(r.1).map(|(x, y)| x.max(y))),
                    });
                }
                out.unwrap_or((0, Some(0)))
            }
            Node::Conditional { yes, no, .. } => {
                let (y, n) = (self.len_range(yes), self.len_range(no));
                (y.0.min(n.0), y.1.zip(n.1).map(|(a, b)| a.max(b)))
            }
            Node::Backref { .. } => (0, None),
            Node::Call { target } => {
                let Some(&g) = target.groups().first() else {
                    return (0, None);
                };
                if self.visiting[g] || self.call_depth >= self.call_depth_limit {
                    return (0, None);
                }
                let Some(body) = self.group_body(g) else {
                    return (0, None);
                };
                self.visiting[g] = true;
                self.call_depth += 1;
                let r = self.len_range(body);
                self.call_depth -= 1;
                self.visiting[g] = false;
                r
            }
        }
    }

    /// Groups that can be called before any character is consumed.
    fn head_calls(&mut self, node: &Node, out: &mut Vec<usize>) {
        match node {
            Node::Call { target } => out.extend_from_slice(target.groups()),
            Node::Group { index, .. } if self.called[*index] => out.push(*index),
            Node::Group { body, .. } | Node::Atomic(body) | Node::Look { body, .. } => {
                self.head_calls(body, out)
            }
            Node::Repeat { max: Some(0), .. } => {}
            Node::Repeat { body, .. } => self.head_calls(body, out),
            Node::Concat(items) => {
                for item in items {
                    self.head_calls(item, out);
                    if self.len_range(item).0 > 0 {
                        break;
                    }
                }
            }
            Node::Alt(branches) => {
                for b in branches {
                    self.head_calls(b, out);
                }
            }
            Node::Conditional { yes, no, .. } => {
                self.head_calls(yes, out);
                self.head_calls(no, out);
            }
            _ => {}
        }
    }

    /// Rejects recursion that can re-enter a group without consuming input.
    fn check_recursion(&mut self) -> Result<(), RegexError> {
        let n = self.groups.len();
        let mut edges: Vec<Vec<usize>> = vec![Vec::new(); n];
        for g in 0..n {
            if !self.called[g] {
                continue;
            }
            if let Some(body) = self.group_body(g) {
                let mut out = Vec::new();
                self.head_calls(body, &mut out);
                edges[g] = out;
            }
        }
        // 0 = unvisited, 1 = on stack, 2 = done
        let mut state = vec![0u8; n];
        for start in 0..n {
            if state[start] != 0 || !self.called[start] {
                continue;
            }
            let mut stack = vec![(start, 0usize)];
            state[start] = 1;
            while let Some(top) = stack.last_mut() {
                let (g, i) = *top;
                if let Some(&next) = edges[g].get(i) {
                    top.1 += 1;
                    match state[next] {
                        1 => return Err(RegexError::syntax(SyntaxErrorKind::NeverEndingRecursion, 0)),
                        0 => {
                            state[next] = 1;
                            stack.push((next, 0));
                        }
                        _ => {}
                    }
                } else {
                    state[g] = 2;
                    stack.pop();
                }
            }
        }
        Ok(())
    }
}

fn contains_reference(node: &Node) -> bool {
    let mut found = false;
    node.walk(&mut |n| {
        if matches!(n, Node::Backref { .. } | Node::Call { .. }) {
            found = true;
        }
    });
    found
}

fn fold_unicode(chars: &[CodePoint]) -> Vec<CodePoint> {
    let mut out = Vec::with_capacity(chars.len());
    let mut buf: SmallVec<[CodePoint; 8]> = SmallVec::new();
    for &c in chars {
        buf.clear();
        unicode::fold_full(c, &mut buf);
        out.extend_from_slice(&buf);
    }
    out
}

/// Rough instruction count, used to decide whether to unroll a quantifier.
fn op_estimate(node: &Node) -> usize {
    match node {
        Node::Empty => 0,
        Node::Group { body, .. } => op_estimate(body) + 2,
        Node::Atomic(body) | Node::Look { body, .. } => op_estimate(body) + 4,
        Node::Repeat { min, max, body, .. } => {
            let copies = max.unwrap_or(*min + 1).max(1) as usize;
            op_estimate(body).saturating_mul(copies).saturating_add(4)
        }
        Node::Concat(items) => items.iter().map(op_estimate).sum(),
        Node::Alt(branches) => branches.iter().map(|b| op_estimate(b) + 2).sum(),
        Node::Conditional { yes, no, .. } => op_estimate(yes) + op_estimate(no) + 2,
        _ => 1,
    }
}

// ============================================================================
// Lowering
// ============================================================================

struct Compiler<'a> {
    ops: Vec<Op>,
    syntax: &'static Syntax,
    called: &'a [bool],
    size_limit: usize,
    /// Id allocators. Marks and empty checks live on the match stack, so only
    /// the repeat count outlives compilation.
    num_marks: usize,
    num_repeats: usize,
    num_empty_checks: usize,
    /// `(pc, group)` pairs whose `Call` target is filled in last.
    call_fixups: Vec<(Addr, usize)>,
    analyzer: Analyzer<'a>,
}

impl<'a> Compiler<'a> {
    #[inline]
    fn here(&self) -> Addr {
        self.ops.len()
    }

    #[inline]
    fn emit(&mut self, op: Op) -> Addr {
        self.ops.push(op);
        self.ops.len() - 1
    }

    /// Points the jump-like instruction at `at` to `target`.
    fn patch(&mut self, at: Addr, target: Addr) {
        match &mut self.ops[at] {
            Op::Jump(a) | Op::Push(a) => *a = target,
            Op::CondGroup { else_pc, .. } => *else_pc = target,
            Op::RepeatCheck { exit, .. } => *exit = target,
            Op::EmptyCheckEnd { exit, .. } => *exit = target,
            _ => {}
        }
    }

    fn new_mark(&mut self) -> usize {
        self.num_marks += 1;
        self.num_marks - 1
    }

    fn emit_call(&mut self, group: usize) {
        let pc = self.emit(Op::Call(Addr::MAX));
        self.call_fixups.push((pc, group));
    }

    /// Main body, `End`, then one subroutine per called group.
    fn compile_program(&mut self, groups: &[Option<&'a Node>]) -> Result<Vec<Addr>, RegexError> {
        let mut subs = vec![Addr::MAX; groups.len()];
        let Some(root) = groups[0] else {
            return Ok(subs);
        };
        if self.called[0] {
            self.emit_call(0);
            self.emit(Op::End);
            subs[0] = self.here();
            self.compile_node(root)?;
            self.emit(Op::Return);
        } else {
            self.compile_node(root)?;
            self.emit(Op::End);
        }
        for g in 1..groups.len() {
            if !self.called[g] {
                continue;
            }
            if let Some(Node::Group { body, .. }) = groups[g] {
                subs[g] = self.here();
                self.emit(Op::MemStart(g));
                self.compile_node(body)?;
                self.emit(Op::MemEnd(g));
                self.emit(Op::Return);
            }
        }
        Ok(subs)
    }

    fn compile_node(&mut self, node: &Node) -> Result<(), RegexError> {
        if self.ops.len() > self.size_limit {
            return Err(ResourceLimitKind::ProgramSize.into());
        }
        match node {
            Node::Empty => {}
            Node::Literal { chars, fold } => self.compile_string(chars, *fold),
            Node::Class(set) => match set.single() {
                Some(c) => {
                    self.emit(Op::Char(c));
                }
                None => {
                    self.emit(Op::CClass(Box::new(CClass::new((**set).clone()))));
                }
            },
            Node::AnyChar { multiline } => {
                self.emit(if *multiline { Op::AnyCharMl } else { Op::AnyChar });
            }
            Node::Anchor(kind) => {
                self.emit(anchor_op(*kind));
            }
            Node::Look { behind: false, negative, body, .. } => self.compile_look_ahead(*negative, body)?,
            Node::Look { behind: true, negative, offset, body } => {
                self.compile_look_behind(*negative, *offset, body)?
            }
            Node::Group { index, body, .. } => {
                if self.called[*index] {
                    self.emit_call(*index);
                } else {
                    self.emit(Op::MemStart(*index));
                    self.compile_node(body)?;
                    self.emit(Op::MemEnd(*index));
                }
            }
            Node::Atomic(body) => self.compile_atomic(|c| c.compile_node(body))?,
            Node::Repeat { min, max, greed, body } => self.compile_repeat(*min, *max, *greed, body)?,
            Node::Concat(items) => {
                for item in items {
                    self.compile_node(item)?;
                }
            }
            Node::Alt(branches) => self.compile_alt(branches)?,
            Node::Backref { target, fold } => {
                self.emit(Op::BackRef { groups: target.groups().into(), fold: *fold });
            }
            Node::Call { target } => {
                if let Some(&g) = target.groups().first() {
                    self.emit_call(g);
                }
            }
            Node::Keep => {
                self.emit(Op::Keep);
            }
            Node::Conditional { target, yes, no } => self.compile_conditional(target, yes, no)?,
        }
        Ok(())
    }

    // --- strings ---

    fn compile_string(&mut self, chars: &[CodePoint], fold: CaseFold) {
        match fold {
            CaseFold::Exact if chars.len() == 1 => {
                self.emit(Op::Char(chars[0]));
            }
            CaseFold::Exact => {
                self.emit(Op::Str(chars.into()));
            }
            CaseFold::Ascii => {
                let folded: Box<[CodePoint]> = chars.iter().map(|&c| unicode::fold_ascii(c)).collect();
                self.emit(Op::StrIc { folded, fold });
            }
            CaseFold::Unicode => {
                self.emit(Op::StrIc { folded: fold_unicode(chars).into(), fold });
            }
        }
    }

    // --- alternation and conditionals ---

    fn compile_alt(&mut self, branches: &[Node]) -> Result<(), RegexError> {
        let mut exits = Vec::with_capacity(branches.len());
        for (i, branch) in branches.iter().enumerate() {
            if i + 1 == branches.len() {
                self.compile_node(branch)?;
            } else {
                let push = self.emit(Op::Push(0));
                self.compile_node(branch)?;
                exits.push(self.emit(Op::Jump(0)));
                let next = self.here();
                self.patch(push, next);
            }
        }
        let end = self.here();
        for at in exits {
            self.patch(at, end);
        }
        Ok(())
    }

    fn compile_conditional(&mut self, target: &RefTarget, yes: &Node, no: &Node) -> Result<(), RegexError> {
        let cond = self.emit(Op::CondGroup { groups: target.groups().into(), else_pc: 0 });
        self.compile_node(yes)?;
        let jump = self.emit(Op::Jump(0));
        let else_pc = self.here();
        self.patch(cond, else_pc);
        self.compile_node(no)?;
        let end = self.here();
        self.patch(jump, end);
        Ok(())
    }

    // --- atomic groups and lookaround ---

    fn compile_atomic(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<(), RegexError>,
    ) -> Result<(), RegexError> {
        let id = self.new_mark();
        self.emit(Op::Mark { id, save_pos: false });
        body(self)?;
        self.emit(Op::CutToMark { id, restore_pos: false });
        Ok(())
    }

    fn compile_look_ahead(&mut self, negative: bool, body: &Node) -> Result<(), RegexError> {
        let id = self.new_mark();
        if !negative {
            self.emit(Op::Mark { id, save_pos: true });
            self.compile_node(body)?;
            self.emit(Op::CutToMark { id, restore_pos: true });
            return Ok(());
        }
        let push = self.emit(Op::Push(0));
        self.emit(Op::Mark { id, save_pos: true });
        self.compile_node(body)?;
        self.emit(Op::PopToMark { id });
        self.emit(Op::Pop);
        self.emit(Op::Fail);
        let ok = self.here();
        self.patch(push, ok);
        Ok(())
    }

    fn look_behind_len(&mut self, offset: usize, body: &Node) -> Result<(u32, u32), RegexError> {
        if contains_reference(body) {
            return Err(RegexError::unsupported(UnsupportedFeature::ReferenceInLookBehind, offset));
        }
        let (min, max) = self.analyzer.len_range(body);
        let Some(max) = max else {
            return Err(RegexError::unsupported(UnsupportedFeature::UnboundedLookBehind, offset));
        };
        if max > MAX_LOOK_BEHIND_CHARS as usize {
            return Err(RegexError::syntax(SyntaxErrorKind::InvalidLookBehindPattern, offset));
        }
        if min != max && !self.syntax.has_behavior(SyntaxBehavior::VARIABLE_LEN_LOOK_BEHIND) {
            let alt_ok = self.syntax.has_behavior(SyntaxBehavior::DIFFERENT_LEN_ALT_LOOK_BEHIND)
                && match body {
                    Node::Alt(branches) => branches.iter().all(|b| {
                        let (lo, hi) = self.analyzer.len_range(b);
                        hi == Some(lo)
                    }),
                    _ => false,
                };
            if !alt_ok {
                return Err(RegexError::unsupported(
                    UnsupportedFeature::VariableLengthLookBehind,
                    offset,
                ));
            }
        }
        Ok((min as u32, (max - min) as u32))
    }

    fn compile_look_behind(&mut self, negative: bool, offset: usize, body: &Node) -> Result<(), RegexError> {
        let (min, extra) = self.look_behind_len(offset, body)?;
        let id = self.new_mark();
        let push = negative.then(|| self.emit(Op::Push(0)));
        self.emit(Op::Mark { id, save_pos: true });
        self.emit(Op::StepBack { min, extra });
        self.compile_node(body)?;
        self.emit(Op::CheckPosMark { id });
        match push {
            None => {
                self.emit(Op::CutToMark { id, restore_pos: true });
            }
            Some(push) => {
                self.emit(Op::PopToMark { id });
                self.emit(Op::Pop);
                self.emit(Op::Fail);
                let ok = self.here();
                self.patch(push, ok);
            }
        }
        Ok(())
    }

    // --- quantifiers ---

    fn compile_repeat(&mut self, min: u32, max: Option<u32>, greed: Greed, body: &Node) -> Result<(), RegexError> {
        if max == Some(0) {
            return Ok(());
        }
        if greed == Greed::Possessive {
            return self.compile_atomic(|c| c.compile_repeat(min, max, Greed::Greedy, body));
        }
        if min == 1 && max == Some(1) {
            return self.compile_node(body);
        }
        let lazy = greed == Greed::Lazy;
        let nullable = self.analyzer.len_range(body).0 == 0;
        let copies = max.unwrap_or(min + 1) as usize;
        if op_estimate(body).saturating_mul(copies) <= QUANTIFIER_EXPAND_LIMIT {
            for _ in 0..min {
                self.compile_node(body)?;
            }
            match max {
                None => self.compile_star(lazy, nullable, body),
                Some(max) => self.compile_optional_run(max - min, lazy, body),
            }
        } else {
            self.compile_counted(min, max, lazy, nullable, body)
        }
    }

    fn compile_star(&mut self, lazy: bool, nullable: bool, body: &Node) -> Result<(), RegexError> {
        let check = nullable.then(|| {
            self.num_empty_checks += 1;
            self.num_empty_checks - 1
        });
        let top = self.here();
        let push = self.emit(Op::Push(0));
        let skip = lazy.then(|| self.emit(Op::Jump(0)));
        let body_pc = self.here();
        if let Some(id) = check {
            self.emit(Op::EmptyCheckStart { id });
        }
        self.compile_node(body)?;
        let empty_end = check.map(|id| self.emit(Op::EmptyCheckEnd { id, exit: 0 }));
        self.emit(Op::Jump(top));
        let end = self.here();
        match skip {
            // L0: Push BODY; Jump END; BODY: body; Jump L0; END:
            Some(skip) => {
                self.patch(push, body_pc);
                self.patch(skip, end);
            }
            // L0: Push END; body; Jump L0; END:
            None => self.patch(push, end),
        }
        if let Some(at) = empty_end {
            self.patch(at, end);
        }
        Ok(())
    }

    /// `n` optional copies of `body` sharing one exit.
    fn compile_optional_run(&mut self, n: u32, lazy: bool, body: &Node) -> Result<(), RegexError> {
        let mut exits = Vec::with_capacity(n as usize);
        for _ in 0..n {
            if lazy {
                let push = self.emit(Op::Push(0));
                exits.push(self.emit(Op::Jump(0)));
                let b = self.here();
                self.patch(push, b);
            } else {
                exits.push(self.emit(Op::Push(0)));
            }
            self.compile_node(body)?;
        }
        let end = self.here();
        for at in exits {
            self.patch(at, end);
        }
        Ok(())
    }

    fn compile_counted(
        &mut self,
        min: u32,
        max: Option<u32>,
        lazy: bool,
        nullable: bool,
        body: &Node,
    ) -> Result<(), RegexError> {
        let id = self.num_repeats;
        self.num_repeats += 1;
        self.emit(Op::RepeatInit { id });
        let check_pc = self.here();
        let check = self.emit(Op::RepeatCheck { id, min, max, lazy, body: check_pc + 1, exit: 0 });
        let empty = nullable.then(|| {
            self.num_empty_checks += 1;
            self.num_empty_checks - 1
        });
        if let Some(eid) = empty {
            self.emit(Op::EmptyCheckStart { id: eid });
        }
        self.compile_node(body)?;
        let empty_end = empty.map(|eid| self.emit(Op::EmptyCheckEnd { id: eid, exit: 0 }));
        self.emit(Op::RepeatInc { id });
        self.emit(Op::Jump(check_pc));
        let exit = self.emit(Op::RepeatEnd { id });
        self.patch(check, exit);
        if let Some(at) = empty_end {
            self.patch(at, exit);
        }
        Ok(())
    }
}

fn anchor_op(kind: AnchorKind) -> Op {
    match kind {
        AnchorKind::BeginBuf => Op::BeginBuf,
        AnchorKind::EndBuf => Op::EndBuf,
        AnchorKind::SemiEndBuf => Op::SemiEndBuf,
        AnchorKind::BeginLine => Op::BeginLine,
        AnchorKind::EndLine => Op::EndLine,
        AnchorKind::BeginPosition => Op::BeginPosition,
        AnchorKind::WordBoundary { ascii } => Op::WordBoundary { ascii, negate: false },
        AnchorKind::NotWordBoundary { ascii } => Op::WordBoundary { ascii, negate: true },
        AnchorKind::WordBegin { ascii } => Op::WordBegin { ascii },
        AnchorKind::WordEnd { ascii } => Op::WordEnd { ascii },
    }
}

// ============================================================================
// Start-position prefilters
// ============================================================================

/// First node that must match at the start position, looking through
/// concatenations and plain capture groups.
fn leading_node(node: &Node) -> &Node {
    match node {
        Node::Concat(items) => items.first().map_or(node, leading_node),
        Node::Group { body, .. } => leading_node(body),
        _ => node,
    }
}

fn start_anchor(root: &Node) -> StartAnchor {
    match leading_node(root) {
        Node::Anchor(AnchorKind::BeginBuf) => StartAnchor::BeginBuf,
        Node::Anchor(AnchorKind::BeginPosition) => StartAnchor::BeginPosition,
        _ => StartAnchor::None,
    }
}

/// Case-sensitive literal every match starts with.
fn literal_prefix(root: &Node) -> Vec<CodePoint> {
    match leading_node(root) {
        Node::Literal { chars, fold: CaseFold::Exact } => chars.clone(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regsyntax::{SYNTAX_JAVA, SYNTAX_ONIGURUMA, SYNTAX_PERL};

    fn comp(pattern: &str) -> Result<RegexType, RegexError> {
        compile(pattern.as_bytes(), Encoding::Utf8, Options::empty(), &SYNTAX_ONIGURUMA, &CompileLimits::default())
    }

    fn comp_with(pattern: &str, syntax: &'static Syntax) -> Result<RegexType, RegexError> {
        compile(pattern.as_bytes(), Encoding::Utf8, Options::empty(), syntax, &CompileLimits::default())
    }

    #[test]
    fn alternation_layout() {
        let reg = comp("a|b").unwrap();
        assert_eq!(
            reg.ops,
            vec![Op::Push(3), Op::Char('a' as u32), Op::Jump(4), Op::Char('b' as u32), Op::End]
        );
    }

    #[test]
    fn greedy_and_lazy_star_layout() {
        let reg = comp("a*").unwrap();
        assert_eq!(reg.ops, vec![Op::Push(3), Op::Char('a' as u32), Op::Jump(0), Op::End]);
        let reg = comp("a*?").unwrap();
        assert_eq!(
            reg.ops,
            vec![Op::Push(2), Op::Jump(4), Op::Char('a' as u32), Op::Jump(0), Op::End]
        );
    }

    #[test]
    fn nullable_loop_gets_empty_check() {
        let reg = comp("(?:a?)*").unwrap();
        let checks = reg.ops.iter().filter(|op| matches!(op, Op::EmptyCheckStart { .. })).count();
        assert_eq!(checks, 1);
        assert!(reg.ops.iter().any(|op| matches!(op, Op::EmptyCheckEnd { id: 0, .. })));
    }

    #[test]
    fn large_counts_use_counter() {
        let reg = comp("(?:abc){100,200}").unwrap();
        assert_eq!(reg.num_repeats, 1);
        let reg = comp("a{2,3}").unwrap();
        assert_eq!(reg.num_repeats, 0);
    }

    #[test]
    fn prefilters() {
        let reg = comp("foo(bar)?").unwrap();
        assert_eq!(&*reg.prefix, &['f' as u32, 'o' as u32, 'o' as u32]);
        assert_eq!(reg.min_len, 3);
        assert_eq!(comp("\\Aabc").unwrap().anchor, StartAnchor::BeginBuf);
        assert_eq!(comp("\\Gabc").unwrap().anchor, StartAnchor::BeginPosition);
        assert!(comp("(?i)foo").unwrap().prefix.is_empty());
    }

    #[test]
    fn lookbehind_rules() {
        assert!(comp("(?<=ab|c)x").is_ok());
        assert!(comp("(?<=a+)x").is_err());
        let err = comp_with("(?<=a|bc)x", &SYNTAX_PERL).unwrap_err();
        assert!(matches!(
            err,
            RegexError::UnsupportedFeature { feature: UnsupportedFeature::VariableLengthLookBehind, offset: 0 }
        ));
        assert!(comp_with("(?<=a|bc)x", &SYNTAX_JAVA).is_ok());
        let err = comp("x(?<=(a)\\1)").unwrap_err();
        assert!(matches!(
            err,
            RegexError::UnsupportedFeature { feature: UnsupportedFeature::ReferenceInLookBehind, offset: 1 }
        ));
    }

    #[test]
    fn recursion_checks() {
        assert!(comp("(?<p>\\(\\g<p>*\\))").is_ok());
        assert_eq!(
            comp("(?<a>\\g<a>)").unwrap_err(),
            RegexError::syntax(SyntaxErrorKind::NeverEndingRecursion, 0)
        );
        assert_eq!(
            comp("(?<a>b|\\g<a>)").unwrap_err(),
            RegexError::syntax(SyntaxErrorKind::NeverEndingRecursion, 0)
        );
    }

    #[test]
    fn called_group_becomes_subroutine() {
        let reg = comp("(?<x>a)\\g<x>").unwrap();
        let calls: Vec<Addr> = reg
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Call(a) => Some(*a),
                _ => None,
            })
            .collect();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(reg.ops[calls[0]], Op::MemStart(1));
        assert_eq!(reg.ops.last(), Some(&Op::Return));
    }

    #[test]
    fn option_conflict() {
        let err = compile(
            b"a",
            Encoding::Utf8,
            Options::DONT_CAPTURE_GROUP | Options::CAPTURE_GROUP,
            &SYNTAX_ONIGURUMA,
            &CompileLimits::default(),
        )
        .unwrap_err();
        assert_eq!(err, RegexError::syntax(SyntaxErrorKind::InvalidCombinationOfOptions, 0));
    }

    #[test]
    fn program_size_limit() {
        let limits = CompileLimits { program_size_limit: 16, ..CompileLimits::default() };
        let err = compile(b"(a|b|c|d|e|f|g|h|i)(j|k)", Encoding::Utf8, Options::empty(), &SYNTAX_ONIGURUMA, &limits)
            .unwrap_err();
        assert_eq!(err, RegexError::ResourceLimit(ResourceLimitKind::ProgramSize));
    }

    #[test]
    fn negate_singleline_clears_dialect_default() {
        let reg = compile(b"^a$", Encoding::Utf8, Options::NEGATE_SINGLELINE, &SYNTAX_PERL, &CompileLimits::default())
            .unwrap();
        assert_eq!(reg.ops[0], Op::BeginLine);
        let reg = comp_with("^a$", &SYNTAX_PERL).unwrap();
        assert_eq!(reg.ops[0], Op::BeginBuf);
    }
}
