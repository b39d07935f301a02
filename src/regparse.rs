// regparse.rs - Pattern parser.
//
// The pattern is decoded to code points up front; the parser then works on
// character indices and maps them back to byte offsets for error reports.
// Which characters are operators is decided entirely by the `Syntax` bits.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::{RegexError, ResourceLimitKind, SyntaxErrorKind, UnsupportedFeature};
use crate::regcomp::CompileLimits;
use crate::regdefs::{
    CodePoint, Options, DEFAULT_CAPTURE_LIMIT, DEFAULT_PARSE_DEPTH_LIMIT,
    MAX_CAPTURE_HISTORY_GROUP, MAX_CODE_POINT, MAX_REPEAT_NUM,
};
use crate::regenc::Encoding;
use crate::regint::{CaseFold, CodeRanges, Greed};
use crate::regparse_types::{AnchorKind, NameTable, Node, ParsedPattern, RefTarget};
use crate::regsyntax::{Syntax, SyntaxBehavior as Bv, SyntaxOp as Op1, SyntaxOp2 as Op2};
use crate::unicode::{self, PosixClass, Property};

use SyntaxErrorKind as E;

const MAX_BACKREF_NUM: u64 = 1000;

// === Global Limits ===

static CAPTURE_LIMIT: AtomicU32 = AtomicU32::new(DEFAULT_CAPTURE_LIMIT);
static PARSE_DEPTH_LIMIT: AtomicU32 = AtomicU32::new(DEFAULT_PARSE_DEPTH_LIMIT);

pub fn set_capture_limit(n: u32) {
    CAPTURE_LIMIT.store(n, Ordering::Relaxed);
}

pub fn get_capture_limit() -> u32 {
    CAPTURE_LIMIT.load(Ordering::Relaxed)
}

/// Sets the process-wide nesting limit; `0` restores the default.
///
/// Parsing recurses per level: a higher limit needs a matching thread stack.
pub fn set_parse_depth_limit(depth: u32) {
    let depth = if depth == 0 { DEFAULT_PARSE_DEPTH_LIMIT } else { depth };
    PARSE_DEPTH_LIMIT.store(depth, Ordering::Relaxed);
}

pub fn get_parse_depth_limit() -> u32 {
    PARSE_DEPTH_LIMIT.load(Ordering::Relaxed)
}

// === Tokens ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    End,
    Char(CodePoint),
    /// Backslash followed by a character that is not an operator.
    Escape(CodePoint),
    Alt,
    Open,
    Close,
    Repeat { min: u32, max: Option<u32>, interval: bool },
    Dot,
    Caret,
    Dollar,
    ClassOpen,
}

enum Bag {
    Node(Node),
    Nothing,
    Isolated(Options),
}

enum CcItem {
    Char(CodePoint),
    Set(CodeRanges),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefKind {
    Backref,
    Call,
    Condition,
}

struct PendingRef {
    target: RefTarget,
    kind: RefKind,
    offset: usize,
}

#[inline]
fn ch(c: CodePoint) -> char {
    char::from_u32(c).unwrap_or('\u{FFFD}')
}

fn is_name_char(c: CodePoint) -> bool {
    let c = ch(c);
    c == '_' || c.is_alphanumeric()
}

// === Parse Environment ===

struct ParseEnv {
    chars: Vec<CodePoint>,
    offsets: Vec<usize>,
    pos: usize,
    syntax: &'static Syntax,
    opts: Options,
    whole_options: Options,
    limits: CompileLimits,
    num_groups: usize,
    /// Indexed by provisional group number; slot 0 unused.
    named: Vec<bool>,
    num_named: usize,
    names: NameTable,
    history_groups: u32,
    refs: Vec<PendingRef>,
    group_nest: u32,
    /// Deepest level reached by the subtree parsed last. Groups and stacked
    /// quantifiers each add one.
    height: u32,
}

/// Parses `pattern` (bytes in `encoding`) into an AST.
pub fn parse(
    pattern: &[u8],
    encoding: Encoding,
    options: Options,
    syntax: &'static Syntax,
    limits: &CompileLimits,
) -> Result<ParsedPattern, RegexError> {
    let mut chars = Vec::with_capacity(pattern.len());
    let mut offsets = Vec::with_capacity(pattern.len() + 1);
    let mut pos = 0;
    while pos < pattern.len() {
        let (cp, len) = encoding
            .decode(pattern, pos)
            .map_err(|e| RegexError::syntax(E::InvalidPatternEncoding, e.offset))?;
        chars.push(cp);
        offsets.push(pos);
        pos += len;
    }
    offsets.push(pattern.len());

    let mut env = ParseEnv {
        chars,
        offsets,
        pos: 0,
        syntax,
        opts: options,
        whole_options: Options::empty(),
        limits: *limits,
        num_groups: 0,
        named: vec![false],
        num_named: 0,
        names: NameTable::new(),
        history_groups: 0,
        refs: Vec::new(),
        group_nest: 0,
        height: 0,
    };
    let root = env.prs_regexp()?;
    env.finish(root, options)
}

impl ParseEnv {
    // --- cursor helpers ---

    #[inline]
    fn peek(&self) -> Option<CodePoint> {
        self.chars.get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, k: usize) -> Option<CodePoint> {
        self.chars.get(self.pos + k).copied()
    }

    #[inline]
    fn peek_is(&self, c: char) -> bool {
        self.peek() == Some(c as CodePoint)
    }

    #[inline]
    fn next(&mut self) -> Option<CodePoint> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek_is(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn err_at(&self, idx: usize, kind: SyntaxErrorKind) -> RegexError {
        let offset = self.offsets[idx.min(self.offsets.len() - 1)];
        RegexError::syntax(kind, offset)
    }

    fn unsupported_at(&self, idx: usize, feature: UnsupportedFeature) -> RegexError {
        let offset = self.offsets[idx.min(self.offsets.len() - 1)];
        RegexError::unsupported(feature, offset)
    }

    fn check_depth(&self, depth: u32) -> Result<(), RegexError> {
        if depth > self.limits.parse_depth_limit {
            return Err(ResourceLimitKind::ParseDepth.into());
        }
        Ok(())
    }

    fn skip_extended(&mut self) {
        if !self.opts.contains(Options::EXTEND) {
            return;
        }
        while let Some(c) = self.peek() {
            match ch(c) {
                ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c' => self.pos += 1,
                '#' => {
                    while let Some(c) = self.next() {
                        if c == '\n' as CodePoint {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    // --- tokens ---

    fn fetch_token(&mut self) -> Result<Token, RegexError> {
        self.skip_extended();
        let start = self.pos;
        let Some(c) = self.next() else {
            return Ok(Token::End);
        };
        let syn = self.syntax;
        if c == '\\' as CodePoint && !syn.has_op2(Op2::INEFFECTIVE_ESCAPE) {
            let Some(e) = self.next() else {
                return Err(self.err_at(start, E::EndPatternAtEscape));
            };
            let tok = match ch(e) {
                '*' if syn.has_op(Op1::ESC_ASTERISK_ZERO_INF) => {
                    Token::Repeat { min: 0, max: None, interval: false }
                }
                '+' if syn.has_op(Op1::ESC_PLUS_ONE_INF) => {
                    Token::Repeat { min: 1, max: None, interval: false }
                }
                '?' if syn.has_op(Op1::ESC_QMARK_ZERO_ONE) => {
                    Token::Repeat { min: 0, max: Some(1), interval: false }
                }
                '{' if syn.has_op(Op1::ESC_BRACE_INTERVAL) => return self.fetch_interval(start, true),
                '|' if syn.has_op(Op1::ESC_VBAR_ALT) => Token::Alt,
                '(' if syn.has_op(Op1::ESC_LPAREN_SUBEXP) => Token::Open,
                ')' if syn.has_op(Op1::ESC_LPAREN_SUBEXP) => Token::Close,
                _ => Token::Escape(e),
            };
            return Ok(tok);
        }
        let tok = match ch(c) {
            '*' if syn.has_op(Op1::ASTERISK_ZERO_INF) => {
                Token::Repeat { min: 0, max: None, interval: false }
            }
            '+' if syn.has_op(Op1::PLUS_ONE_INF) => {
                Token::Repeat { min: 1, max: None, interval: false }
            }
            '?' if syn.has_op(Op1::QMARK_ZERO_ONE) => {
                Token::Repeat { min: 0, max: Some(1), interval: false }
            }
            '{' if syn.has_op(Op1::BRACE_INTERVAL) => return self.fetch_interval(start, false),
            '|' if syn.has_op(Op1::VBAR_ALT) => Token::Alt,
            '(' if syn.has_op(Op1::LPAREN_SUBEXP) => Token::Open,
            ')' if syn.has_op(Op1::LPAREN_SUBEXP) => Token::Close,
            '.' if syn.has_op(Op1::DOT_ANYCHAR) => Token::Dot,
            '^' if syn.has_op(Op1::LINE_ANCHOR) => Token::Caret,
            '$' if syn.has_op(Op1::LINE_ANCHOR) => Token::Dollar,
            '[' if syn.has_op(Op1::BRACKET_CC) => Token::ClassOpen,
            _ => Token::Char(c),
        };
        Ok(tok)
    }

    fn scan_number(&mut self) -> Option<u64> {
        let start = self.pos;
        let mut n: u64 = 0;
        while let Some(d) = self.peek().and_then(|c| ch(c).to_digit(10)) {
            n = n.saturating_mul(10).saturating_add(d as u64);
            self.pos += 1;
        }
        (self.pos > start).then_some(n)
    }

    /// `{n,m}` after the opening brace; an invalid interval becomes a literal
    /// brace when the dialect allows it.
    fn fetch_interval(&mut self, start: usize, escaped: bool) -> Result<Token, RegexError> {
        let body = self.pos;
        let syn = self.syntax;
        let invalid = |env: &mut ParseEnv, kind: SyntaxErrorKind| {
            if syn.has_behavior(Bv::ALLOW_INVALID_INTERVAL) {
                env.pos = body;
                Ok(Token::Char('{' as CodePoint))
            } else {
                Err(env.err_at(start, kind))
            }
        };
        if self.peek().is_none() {
            return invalid(self, E::EndPatternAtLeftBrace);
        }
        let low = self.scan_number();
        let min = match low {
            Some(n) => n,
            None if self.peek_is(',') && syn.has_behavior(Bv::ALLOW_INTERVAL_LOW_ABBREV) => 0,
            None => return invalid(self, E::InvalidRepeatRangePattern),
        };
        let max = if self.eat(',') {
            match self.scan_number() {
                Some(m) => Some(m),
                None if low.is_none() => return invalid(self, E::InvalidRepeatRangePattern),
                None => None,
            }
        } else {
            Some(min)
        };
        if escaped && !self.eat('\\') {
            return invalid(self, E::InvalidRepeatRangePattern);
        }
        if !self.eat('}') {
            return invalid(self, E::InvalidRepeatRangePattern);
        }
        let limit = MAX_REPEAT_NUM as u64;
        if min > limit || max.is_some_and(|m| m > limit) {
            return Err(self.err_at(start, E::TooBigNumberForRepeatRange));
        }
        if let Some(m) = max {
            if m < min {
                return Err(self.err_at(start, E::UpperSmallerThanLowerInRepeatRange));
            }
        }
        Ok(Token::Repeat { min: min as u32, max: max.map(|m| m as u32), interval: true })
    }

    // --- literals ---

    fn fold_for(&self, c: CodePoint) -> CaseFold {
        if !self.opts.contains(Options::IGNORECASE) {
            return CaseFold::Exact;
        }
        if self.opts.contains(Options::IGNORECASE_IS_ASCII) {
            return if ch(c).is_ascii_alphabetic() { CaseFold::Ascii } else { CaseFold::Exact };
        }
        let mut full = smallvec::SmallVec::new();
        unicode::fold_full(c, &mut full);
        if unicode::case_equivalents(c).len() > 1 || full.as_slice() != [c] {
            CaseFold::Unicode
        } else {
            CaseFold::Exact
        }
    }

    fn char_node(&self, c: CodePoint) -> Node {
        Node::literal(c, self.fold_for(c))
    }

    fn ref_fold(&self) -> CaseFold {
        if !self.opts.contains(Options::IGNORECASE) {
            CaseFold::Exact
        } else if self.opts.contains(Options::IGNORECASE_IS_ASCII) {
            CaseFold::Ascii
        } else {
            CaseFold::Unicode
        }
    }

    // --- structure ---

    fn prs_regexp(&mut self) -> Result<Node, RegexError> {
        let node = self.prs_alts(0)?;
        let at = self.pos;
        match self.fetch_token()? {
            Token::End => Ok(node),
            _ => Err(self.err_at(at, E::UnmatchedCloseParenthesis)),
        }
    }

    fn prs_alts(&mut self, depth: u32) -> Result<Node, RegexError> {
        self.check_depth(depth)?;
        let mut branches = vec![self.prs_branch(depth)?];
        let mut reach = self.height;
        loop {
            let save = self.pos;
            if self.fetch_token()? == Token::Alt {
                branches.push(self.prs_branch(depth)?);
                reach = reach.max(self.height);
            } else {
                self.pos = save;
                break;
            }
        }
        self.height = reach;
        Ok(Node::alt(branches))
    }

    fn branch_ends_here(&mut self) -> Result<bool, RegexError> {
        let save = self.pos;
        let tok = self.fetch_token()?;
        self.pos = save;
        Ok(match tok {
            Token::End | Token::Alt => true,
            Token::Close => self.group_nest > 0,
            _ => false,
        })
    }

    fn prs_branch(&mut self, depth: u32) -> Result<Node, RegexError> {
        let syn = self.syntax;
        let mut items: Vec<Node> = Vec::new();
        let mut reach = depth;
        loop {
            self.height = depth;
            let tok_pos = self.pos;
            let tok = self.fetch_token()?;
            let atom = match tok {
                Token::End | Token::Alt => {
                    self.pos = tok_pos;
                    break;
                }
                Token::Close if self.group_nest > 0 => {
                    self.pos = tok_pos;
                    break;
                }
                Token::Close => {
                    if syn.has_behavior(Bv::ALLOW_UNMATCHED_CLOSE_SUBEXP) {
                        self.char_node(')' as CodePoint)
                    } else {
                        return Err(self.err_at(tok_pos, E::UnmatchedCloseParenthesis));
                    }
                }
                Token::Repeat { .. } => {
                    if syn.has_behavior(Bv::CONTEXT_INDEP_REPEAT_OPS)
                        && syn.has_behavior(Bv::CONTEXT_INVALID_REPEAT_OPS)
                    {
                        return Err(self.err_at(tok_pos, E::TargetOfRepeatOperatorNotSpecified));
                    }
                    // Literal operator character.
                    self.pos = tok_pos;
                    self.skip_extended();
                    self.eat('\\');
                    let op = self.next().unwrap_or_default();
                    self.char_node(op)
                }
                Token::Caret => {
                    if syn.has_behavior(Bv::CONTEXT_INDEP_ANCHORS) || items.is_empty() {
                        Node::Anchor(self.begin_line_anchor())
                    } else {
                        self.char_node('^' as CodePoint)
                    }
                }
                Token::Dollar => {
                    if syn.has_behavior(Bv::CONTEXT_INDEP_ANCHORS) || self.branch_ends_here()? {
                        Node::Anchor(self.end_line_anchor())
                    } else {
                        self.char_node('$' as CodePoint)
                    }
                }
                Token::Dot => Node::AnyChar { multiline: self.opts.contains(Options::MULTILINE) },
                Token::ClassOpen => Node::Class(Box::new(self.prs_cc(tok_pos, depth + 1)?)),
                Token::Open => match self.prs_bag(tok_pos, depth)? {
                    Bag::Node(n) => n,
                    Bag::Nothing => continue,
                    Bag::Isolated(opts) => {
                        self.opts = opts;
                        if syn.has_behavior(Bv::ISOLATED_OPTION_CONTINUE_BRANCH) {
                            continue;
                        }
                        // The option covers the rest of the enclosing group,
                        // alternatives included.
                        let rest = self.prs_alts(depth + 1)?;
                        reach = reach.max(self.height);
                        items.push(rest);
                        break;
                    }
                },
                Token::Escape(e) => self.prs_escape(e, tok_pos)?,
                Token::Char(c) => self.char_node(c),
            };
            let node = self.prs_quantifiers(atom, &mut items)?;
            reach = reach.max(self.height);
            items.push(node);
        }
        self.height = reach;
        Ok(Node::concat(merge_literals(items)))
    }

    fn begin_line_anchor(&self) -> AnchorKind {
        if self.opts.contains(Options::SINGLELINE) {
            AnchorKind::BeginBuf
        } else {
            AnchorKind::BeginLine
        }
    }

    fn end_line_anchor(&self) -> AnchorKind {
        if self.opts.contains(Options::SINGLELINE) {
            AnchorKind::SemiEndBuf
        } else {
            AnchorKind::EndLine
        }
    }

    fn prs_quantifiers(&mut self, mut target: Node, items: &mut Vec<Node>) -> Result<Node, RegexError> {
        loop {
            let save = self.pos;
            let Token::Repeat { min, max, interval } = self.fetch_token()? else {
                self.pos = save;
                return Ok(target);
            };
            match &target {
                Node::Anchor(_) | Node::Look { .. } | Node::Keep => {
                    if !self.syntax.has_behavior(Bv::CONTEXT_INDEP_REPEAT_OPS) {
                        // BRE: `^*` is an anchor followed by a literal star.
                        self.pos = save;
                        return Ok(target);
                    }
                    return Err(self.err_at(save, E::TargetOfRepeatOperatorInvalid));
                }
                Node::Empty => continue,
                _ => {}
            }
            // A quantifier binds to the last character of a literal run.
            if let Node::Literal { chars, fold } = &mut target {
                if chars.len() > 1 {
                    let last = chars.pop().unwrap_or_default();
                    let fold = *fold;
                    items.push(std::mem::replace(&mut target, Node::literal(last, fold)));
                }
            }
            self.height += 1;
            self.check_depth(self.height)?;
            let greed = self.fetch_greed(interval, min, max);
            target = Node::Repeat { min, max, greed, body: Box::new(target) };
        }
    }

    fn fetch_greed(&mut self, interval: bool, min: u32, max: Option<u32>) -> Greed {
        let syn = self.syntax;
        if self.peek_is('?') && syn.has_op(Op1::QMARK_NON_GREEDY) {
            let fixed = interval && max == Some(min);
            if !(fixed && syn.has_behavior(Bv::FIXED_INTERVAL_IS_GREEDY_ONLY)) {
                self.pos += 1;
                return Greed::Lazy;
            }
        } else if self.peek_is('+') {
            let allowed = if interval {
                syn.has_op2(Op2::PLUS_POSSESSIVE_INTERVAL)
            } else {
                syn.has_op2(Op2::PLUS_POSSESSIVE_REPEAT)
            };
            if allowed {
                self.pos += 1;
                return Greed::Possessive;
            }
        }
        Greed::Greedy
    }

    // --- groups ---

    fn new_group(&mut self, name: Option<&str>, history: bool, at: usize) -> Result<usize, RegexError> {
        self.num_groups += 1;
        if self.num_groups as u64 > self.limits.capture_limit as u64 {
            return Err(ResourceLimitKind::CaptureCount.into());
        }
        let index = self.num_groups;
        self.named.push(name.is_some());
        if let Some(name) = name {
            self.num_named += 1;
            if !self.names.add(name, index)
                && !self.syntax.has_behavior(Bv::ALLOW_MULTIPLEX_DEFINITION_NAME)
            {
                return Err(self.err_at(at, E::MultiplexDefinedName));
            }
        }
        if history {
            if index > MAX_CAPTURE_HISTORY_GROUP {
                return Err(self.err_at(at, E::GroupNumberOverForCaptureHistory));
            }
            self.history_groups |= 1 << index;
        }
        Ok(index)
    }

    fn prs_group_body(&mut self, open_pos: usize, depth: u32) -> Result<Node, RegexError> {
        let saved = self.opts;
        self.group_nest += 1;
        let body = self.prs_alts(depth + 1)?;
        self.group_nest -= 1;
        if self.fetch_token()? != Token::Close {
            return Err(self.err_at(open_pos, E::EndPatternWithUnmatchedParenthesis));
        }
        self.opts = saved;
        Ok(body)
    }

    fn capture(&mut self, name: Option<&str>, history: bool, open_pos: usize, depth: u32) -> Result<Node, RegexError> {
        let index = self.new_group(name, history, open_pos)?;
        let body = self.prs_group_body(open_pos, depth)?;
        Ok(Node::Group { index, history, body: Box::new(body) })
    }

    fn look(&mut self, behind: bool, negative: bool, open_pos: usize, depth: u32) -> Result<Node, RegexError> {
        let body = self.prs_group_body(open_pos, depth)?;
        let offset = self.offsets[open_pos];
        Ok(Node::Look { behind, negative, offset, body: Box::new(body) })
    }

    fn prs_bag(&mut self, open_pos: usize, depth: u32) -> Result<Bag, RegexError> {
        let syn = self.syntax;
        if !(self.peek_is('?') && syn.has_op2(Op2::QMARK_GROUP_EFFECT)) {
            return Ok(Bag::Node(self.capture(None, false, open_pos, depth)?));
        }
        self.pos += 1;
        let Some(c) = self.next() else {
            return Err(self.err_at(open_pos, E::EndPatternInGroup));
        };
        let named = syn.has_op2(Op2::QMARK_LT_NAMED_GROUP);
        let perl_call = syn.has_op2(Op2::QMARK_PERL_SUBEXP_CALL);
        let node = match ch(c) {
            ':' => self.prs_group_body(open_pos, depth)?,
            '=' => self.look(false, false, open_pos, depth)?,
            '!' => self.look(false, true, open_pos, depth)?,
            '>' => Node::Atomic(Box::new(self.prs_group_body(open_pos, depth)?)),
            '<' if self.eat('=') => self.look(true, false, open_pos, depth)?,
            '<' if self.eat('!') => self.look(true, true, open_pos, depth)?,
            '<' if named => {
                let name = self.fetch_name('>', open_pos)?;
                self.capture(Some(&name), false, open_pos, depth)?
            }
            '\'' if named => {
                let name = self.fetch_name('\'', open_pos)?;
                self.capture(Some(&name), false, open_pos, depth)?
            }
            'P' if syn.has_op2(Op2::QMARK_CAPITAL_P_NAME) => match self.next().map(ch) {
                Some('<') => {
                    let name = self.fetch_name('>', open_pos)?;
                    self.capture(Some(&name), false, open_pos, depth)?
                }
                Some('=') => {
                    let target = self.fetch_ref(')', false, open_pos)?;
                    self.push_ref(target.clone(), RefKind::Backref, open_pos);
                    Node::Backref { target, fold: self.ref_fold() }
                }
                Some('>') => {
                    let target = self.fetch_ref(')', true, open_pos)?;
                    self.push_ref(target.clone(), RefKind::Call, open_pos);
                    Node::Call { target }
                }
                _ => return Err(self.err_at(open_pos, E::UndefinedGroupOption)),
            },
            '#' => {
                loop {
                    match self.next().map(ch) {
                        None => return Err(self.err_at(open_pos, E::EndPatternInGroup)),
                        Some(')') => break,
                        Some('\\') => {
                            self.next();
                        }
                        Some(_) => {}
                    }
                }
                return Ok(Bag::Nothing);
            }
            '~' if syn.has_op2(Op2::QMARK_TILDE_ABSENT_GROUP) => {
                return Err(self.unsupported_at(open_pos, UnsupportedFeature::AbsentOperator));
            }
            '{' if syn.has_op2(Op2::QMARK_BRACE_CALLOUT_CONTENTS) => {
                return Err(self.unsupported_at(open_pos, UnsupportedFeature::Callout));
            }
            '(' if syn.has_op2(Op2::QMARK_LPAREN_IF_ELSE) => self.prs_conditional(open_pos, depth)?,
            '@' if syn.has_op2(Op2::ATMARK_CAPTURE_HISTORY) => {
                if named && self.eat('<') {
                    let name = self.fetch_name('>', open_pos)?;
                    self.capture(Some(&name), true, open_pos, depth)?
                } else if named && self.eat('\'') {
                    let name = self.fetch_name('\'', open_pos)?;
                    self.capture(Some(&name), true, open_pos, depth)?
                } else {
                    self.capture(None, true, open_pos, depth)?
                }
            }
            'R' if perl_call && self.eat(')') => {
                self.push_ref(RefTarget::Number(0), RefKind::Call, open_pos);
                Node::Call { target: RefTarget::Number(0) }
            }
            '&' if perl_call => {
                let target = self.fetch_ref(')', true, open_pos)?;
                self.push_ref(target.clone(), RefKind::Call, open_pos);
                Node::Call { target }
            }
            '0'..='9' | '+' if perl_call => {
                self.pos -= 1;
                let target = self.fetch_ref(')', true, open_pos)?;
                self.push_ref(target.clone(), RefKind::Call, open_pos);
                Node::Call { target }
            }
            '-' if perl_call && self.peek().is_some_and(|d| ch(d).is_ascii_digit()) => {
                self.pos -= 1;
                let target = self.fetch_ref(')', true, open_pos)?;
                self.push_ref(target.clone(), RefKind::Call, open_pos);
                Node::Call { target }
            }
            _ => {
                self.pos -= 1;
                return self.prs_options(open_pos, depth);
            }
        };
        Ok(Bag::Node(node))
    }

    fn prs_options(&mut self, open_pos: usize, depth: u32) -> Result<Bag, RegexError> {
        let syn = self.syntax;
        let perl = syn.has_op2(Op2::OPTION_PERL);
        let ruby = syn.has_op2(Op2::OPTION_RUBY) || syn.has_op2(Op2::OPTION_ONIGURUMA);
        let onig = syn.has_op2(Op2::OPTION_ONIGURUMA);
        if !(perl || ruby) {
            return Err(self.err_at(open_pos, E::UndefinedGroupOption));
        }
        let mut opts = self.opts;
        let mut on = true;
        let mut whole = Options::empty();
        let set = |opts: &mut Options, flag: Options, on: bool| opts.set(flag, on);
        loop {
            let Some(c) = self.next() else {
                return Err(self.err_at(open_pos, E::EndPatternInGroup));
            };
            match ch(c) {
                ')' => {
                    self.whole_options |= whole;
                    return Ok(Bag::Isolated(opts));
                }
                ':' => {
                    if !whole.is_empty() {
                        return Err(self.unsupported_at(open_pos, UnsupportedFeature::WholeOption));
                    }
                    let saved = self.opts;
                    self.opts = opts;
                    let body = self.prs_group_body(open_pos, depth);
                    self.opts = saved;
                    return Ok(Bag::Node(body?));
                }
                '-' => on = false,
                'i' => set(&mut opts, Options::IGNORECASE, on),
                'x' => set(&mut opts, Options::EXTEND, on),
                'm' if perl => set(&mut opts, Options::SINGLELINE, !on),
                's' if perl => set(&mut opts, Options::MULTILINE, on),
                'm' => set(&mut opts, Options::MULTILINE, on),
                'a' if perl || onig => set(&mut opts, Options::ASCII_MODES, on),
                'W' if onig => set(&mut opts, Options::WORD_IS_ASCII, on),
                'D' if onig => set(&mut opts, Options::DIGIT_IS_ASCII, on),
                'S' if onig => set(&mut opts, Options::SPACE_IS_ASCII, on),
                'P' if onig => set(&mut opts, Options::POSIX_IS_ASCII, on),
                'y' if onig => {
                    let mode = (self.eat('{'), self.next().map(ch), self.eat('}'));
                    match mode {
                        (true, Some('g'), true) => {}
                        (true, Some('w'), true) => {
                            return Err(self.unsupported_at(open_pos, UnsupportedFeature::TextSegment));
                        }
                        _ => return Err(self.err_at(open_pos, E::UndefinedGroupOption)),
                    }
                }
                'I' | 'L' | 'C' if onig => {
                    if open_pos != 0 || !on {
                        return Err(self.unsupported_at(open_pos, UnsupportedFeature::WholeOption));
                    }
                    let flag = match ch(c) {
                        'I' => Options::IGNORECASE_IS_ASCII,
                        'L' => Options::FIND_LONGEST,
                        _ => Options::DONT_CAPTURE_GROUP,
                    };
                    whole |= flag;
                    opts |= flag;
                }
                _ => return Err(self.err_at(open_pos, E::UndefinedGroupOption)),
            }
        }
    }

    fn prs_conditional(&mut self, open_pos: usize, depth: u32) -> Result<Node, RegexError> {
        let cond_pos = self.pos;
        let target = match self.peek().map(ch) {
            Some('<') => {
                self.pos += 1;
                let t = self.fetch_ref('>', false, cond_pos)?;
                if !self.eat(')') {
                    return Err(self.err_at(cond_pos, E::InvalidIfElseSyntax));
                }
                t
            }
            Some('\'') => {
                self.pos += 1;
                let t = self.fetch_ref('\'', false, cond_pos)?;
                if !self.eat(')') {
                    return Err(self.err_at(cond_pos, E::InvalidIfElseSyntax));
                }
                t
            }
            Some(c) if c.is_ascii_digit() || c == '+' || c == '-' || c == '_' || c.is_alphabetic() => {
                self.fetch_ref(')', false, cond_pos)?
            }
            _ => return Err(self.err_at(cond_pos, E::InvalidIfElseSyntax)),
        };
        self.push_ref(target.clone(), RefKind::Condition, cond_pos);
        let body = self.prs_group_body(open_pos, depth)?;
        let (yes, no) = match body {
            Node::Alt(mut branches) if branches.len() == 2 => {
                let no = branches.pop().unwrap_or(Node::Empty);
                let yes = branches.pop().unwrap_or(Node::Empty);
                (yes, no)
            }
            Node::Alt(_) => return Err(self.err_at(open_pos, E::InvalidIfElseSyntax)),
            other => (other, Node::Empty),
        };
        Ok(Node::Conditional { target, yes: Box::new(yes), no: Box::new(no) })
    }

    // --- names and references ---

    fn fetch_name(&mut self, term: char, at: usize) -> Result<String, RegexError> {
        let start = self.pos;
        let mut name = String::new();
        loop {
            match self.next() {
                None => return Err(self.err_at(at, E::InvalidGroupName)),
                Some(c) if c == term as CodePoint => break,
                Some(c) => name.push(ch(c)),
            }
        }
        if name.is_empty() {
            return Err(self.err_at(start, E::EmptyGroupName));
        }
        if name.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(self.err_at(start, E::InvalidGroupName));
        }
        if !name.chars().all(|c| is_name_char(c as CodePoint)) {
            return Err(self.err_at(start, E::InvalidCharInGroupName));
        }
        Ok(name)
    }

    /// Reads a reference up to `term`: a name, an absolute number, or a
    /// relative `-n` (and `+n` for calls).
    fn fetch_ref(&mut self, term: char, is_call: bool, at: usize) -> Result<RefTarget, RegexError> {
        let start = self.pos;
        let mut text = String::new();
        loop {
            match self.next() {
                None => return Err(self.err_at(at, E::InvalidBackref)),
                Some(c) if c == term as CodePoint => break,
                Some(c) => text.push(ch(c)),
            }
        }
        if text.is_empty() {
            return Err(self.err_at(start, E::EmptyGroupName));
        }
        let first = text.chars().next().unwrap_or_default();
        if first.is_ascii_digit() || first == '-' || first == '+' {
            let (sign, digits) = match first {
                '-' | '+' => (Some(first), &text[1..]),
                _ => (None, text.as_str()),
            };
            let num_len = digits.bytes().take_while(u8::is_ascii_digit).count();
            if num_len == 0 {
                return Err(self.err_at(start, E::InvalidBackref));
            }
            if num_len < digits.len() {
                if matches!(digits.as_bytes()[num_len], b'+' | b'-') {
                    return Err(self.unsupported_at(start, UnsupportedFeature::BackrefWithLevel));
                }
                return Err(self.err_at(start, E::InvalidBackref));
            }
            let n: usize = digits.parse().map_err(|_| self.err_at(start, E::TooBigBackrefNumber))?;
            let abs = match sign {
                None => n,
                Some('-') => {
                    if n == 0 || n > self.num_groups {
                        return Err(self.err_at(start, E::InvalidBackref));
                    }
                    self.num_groups + 1 - n
                }
                _ => {
                    if !is_call || n == 0 {
                        return Err(self.err_at(start, E::InvalidBackref));
                    }
                    self.num_groups + n
                }
            };
            return Ok(RefTarget::Number(abs));
        }
        if let Some(idx) = text.rfind(['+', '-']) {
            if idx > 0 && text[idx + 1..].bytes().all(|b| b.is_ascii_digit()) {
                return Err(self.unsupported_at(start, UnsupportedFeature::BackrefWithLevel));
            }
        }
        if !text.chars().all(|c| is_name_char(c as CodePoint)) {
            return Err(self.err_at(start, E::InvalidCharInGroupName));
        }
        Ok(RefTarget::Name(text))
    }

    fn push_ref(&mut self, target: RefTarget, kind: RefKind, at: usize) {
        let offset = self.offsets[at.min(self.offsets.len() - 1)];
        self.refs.push(PendingRef { target, kind, offset });
    }

    // --- escapes ---

    fn shorthand(&self, c: char) -> Option<CodeRanges> {
        let syn = self.syntax;
        let (class, ascii) = match c {
            'w' | 'W' if syn.has_op(Op1::ESC_W_WORD) => {
                (PosixClass::Word, self.opts.intersects(Options::WORD_IS_ASCII | Options::POSIX_IS_ASCII))
            }
            'd' | 'D' if syn.has_op(Op1::ESC_D_DIGIT) => {
                (PosixClass::Digit, self.opts.intersects(Options::DIGIT_IS_ASCII | Options::POSIX_IS_ASCII))
            }
            's' | 'S' if syn.has_op(Op1::ESC_S_WHITE_SPACE) => {
                (PosixClass::Space, self.opts.intersects(Options::SPACE_IS_ASCII | Options::POSIX_IS_ASCII))
            }
            'h' | 'H' if syn.has_op2(Op2::ESC_H_XDIGIT) => (PosixClass::XDigit, true),
            _ => return None,
        };
        let set = unicode::posix_ranges(class, ascii).clone();
        Some(if c.is_ascii_uppercase() { set.complement() } else { set })
    }

    fn finish_class(&self, mut set: CodeRanges, negate: bool, bracket: bool) -> CodeRanges {
        if self.opts.contains(Options::IGNORECASE) {
            unicode::add_case_closure(&mut set, self.opts.contains(Options::IGNORECASE_IS_ASCII));
        }
        if negate {
            set = set.complement();
            if bracket && self.syntax.has_behavior(Bv::NOT_NEWLINE_IN_NEGATIVE_CC) {
                set.remove('\n' as CodePoint);
            }
        }
        set
    }

    /// `\p{...}` after the opening brace.
    fn prs_char_property(&mut self, negate: bool, at: usize) -> Result<CodeRanges, RegexError> {
        let mut negate = negate;
        if self.peek_is('^') && self.syntax.has_op2(Op2::ESC_P_BRACE_CIRCUMFLEX_NOT) {
            self.pos += 1;
            negate = !negate;
        }
        let mut name = String::new();
        loop {
            match self.next() {
                None => return Err(self.err_at(at, E::InvalidCharPropertyName)),
                Some(c) if c == '}' as CodePoint => break,
                Some(c) => name.push(ch(c)),
            }
        }
        let prop = unicode::lookup_property(&name)
            .ok_or_else(|| self.err_at(at, E::InvalidCharPropertyName))?;
        let set = match prop {
            Property::Posix(class) => {
                unicode::posix_ranges(class, self.opts.contains(Options::POSIX_IS_ASCII)).clone()
            }
            other => unicode::property_ranges(other),
        };
        Ok(self.finish_class(set, negate, false))
    }

    fn scan_radix(&mut self, radix: u32, max_digits: usize) -> (u64, usize) {
        let mut n: u64 = 0;
        let mut count = 0;
        while count < max_digits {
            let Some(d) = self.peek().and_then(|c| ch(c).to_digit(radix)) else {
                break;
            };
            n = n * radix as u64 + d as u64;
            count += 1;
            self.pos += 1;
        }
        (n, count)
    }

    fn fetch_braced_value(&mut self, radix: u32, at: usize) -> Result<CodePoint, RegexError> {
        let (n, count) = self.scan_radix(radix, 9);
        if count == 0 {
            return Err(self.err_at(at, E::InvalidCodePointValue));
        }
        if radix == 16 && count > 8 {
            return Err(self.err_at(at, E::TooLongWideCharValue));
        }
        if !self.eat('}') {
            return Err(self.err_at(at, E::InvalidCodePointValue));
        }
        if n > MAX_CODE_POINT as u64 {
            return Err(self.err_at(at, E::TooBigWideCharValue));
        }
        Ok(n as CodePoint)
    }

    fn fetch_control(&mut self, at: usize) -> Result<CodePoint, RegexError> {
        match self.next() {
            None => Err(self.err_at(at, E::EndPatternAtControl)),
            Some(c) if c == '?' as CodePoint => Ok(0x7F),
            Some(c) => Ok(c & 0x9F),
        }
    }

    /// Value escapes shared by classes and the main pattern; `None` when `e`
    /// does not start one.
    fn fetch_escaped_value(&mut self, e: CodePoint, at: usize) -> Result<Option<CodePoint>, RegexError> {
        let syn = self.syntax;
        let ctl = syn.has_op(Op1::ESC_CONTROL_CHARS);
        let v = match ch(e) {
            't' if ctl => 0x09,
            'n' if ctl => 0x0A,
            'r' if ctl => 0x0D,
            'f' if ctl => 0x0C,
            'a' if ctl => 0x07,
            'e' if ctl => 0x1B,
            'v' if syn.has_op2(Op2::ESC_V_VTAB) => 0x0B,
            'x' if syn.has_op(Op1::ESC_X_BRACE_HEX8) && self.peek_is('{') => {
                self.pos += 1;
                self.fetch_braced_value(16, at)?
            }
            'x' if syn.has_op(Op1::ESC_X_HEX2) => self.scan_radix(16, 2).0 as CodePoint,
            'u' if syn.has_op2(Op2::ESC_U_HEX4) => {
                let (n, count) = self.scan_radix(16, 4);
                if count < 4 {
                    return Err(self.err_at(at, E::TooShortDigits));
                }
                n as CodePoint
            }
            'o' if syn.has_op(Op1::ESC_O_BRACE_OCTAL) && self.peek_is('{') => {
                self.pos += 1;
                self.fetch_braced_value(8, at)?
            }
            '0'..='7' if syn.has_op(Op1::ESC_OCTAL3) => {
                self.pos -= 1;
                self.scan_radix(8, 3).0 as CodePoint
            }
            'c' if syn.has_op(Op1::ESC_C_CONTROL) => self.fetch_control(at)?,
            'C' if syn.has_op2(Op2::ESC_CAPITAL_C_BAR_CONTROL) => {
                match self.next() {
                    None => return Err(self.err_at(at, E::EndPatternAtControl)),
                    Some(c) if c == '-' as CodePoint => {}
                    Some(_) => return Err(self.err_at(at, E::ControlCodeSyntax)),
                }
                self.fetch_control(at)?
            }
            _ => return Ok(None),
        };
        Ok(Some(v))
    }

    fn prs_decimal_escape(&mut self, e: CodePoint, at: usize) -> Result<Node, RegexError> {
        let syn = self.syntax;
        let digit_start = self.pos - 1;
        self.pos = digit_start;
        let n = self.scan_number().unwrap_or(0);
        if syn.has_op(Op1::DECIMAL_BACKREF)
            && (n <= self.num_groups as u64 || n <= 9)
            && n <= MAX_BACKREF_NUM
        {
            let target = RefTarget::Number(n as usize);
            self.push_ref(target.clone(), RefKind::Backref, at);
            return Ok(Node::Backref { target, fold: self.ref_fold() });
        }
        self.pos = digit_start;
        if syn.has_op(Op1::ESC_OCTAL3) && ('0'..='7').contains(&ch(e)) {
            let v = self.scan_radix(8, 3).0 as CodePoint;
            return Ok(self.char_node(v));
        }
        self.pos = digit_start + 1;
        Ok(self.char_node(e))
    }

    fn prs_escape(&mut self, e: CodePoint, at: usize) -> Result<Node, RegexError> {
        let syn = self.syntax;
        let c = ch(e);
        if let Some(set) = self.shorthand(c) {
            return Ok(Node::Class(Box::new(set)));
        }
        let word_ascii = self.opts.intersects(Options::WORD_IS_ASCII | Options::POSIX_IS_ASCII);
        let node = match c {
            'p' | 'P' if syn.has_op2(Op2::ESC_P_BRACE_CHAR_PROPERTY) && self.eat('{') => {
                Node::Class(Box::new(self.prs_char_property(c == 'P', at)?))
            }
            'A' if syn.has_op(Op1::ESC_AZ_BUF_ANCHOR) => Node::Anchor(AnchorKind::BeginBuf),
            'z' if syn.has_op(Op1::ESC_AZ_BUF_ANCHOR) => Node::Anchor(AnchorKind::EndBuf),
            'Z' if syn.has_op(Op1::ESC_AZ_BUF_ANCHOR) => Node::Anchor(AnchorKind::SemiEndBuf),
            'G' if syn.has_op(Op1::ESC_CAPITAL_G_BEGIN_ANCHOR) => {
                Node::Anchor(AnchorKind::BeginPosition)
            }
            'b' if syn.has_op(Op1::ESC_B_WORD_BOUND) => {
                Node::Anchor(AnchorKind::WordBoundary { ascii: word_ascii })
            }
            'B' if syn.has_op(Op1::ESC_B_WORD_BOUND) => {
                Node::Anchor(AnchorKind::NotWordBoundary { ascii: word_ascii })
            }
            '<' if syn.has_op(Op1::ESC_LTGT_WORD_BEGIN_END) => {
                Node::Anchor(AnchorKind::WordBegin { ascii: word_ascii })
            }
            '>' if syn.has_op(Op1::ESC_LTGT_WORD_BEGIN_END) => {
                Node::Anchor(AnchorKind::WordEnd { ascii: word_ascii })
            }
            'K' if syn.has_op2(Op2::ESC_CAPITAL_K_KEEP) => Node::Keep,
            'R' if syn.has_op2(Op2::ESC_CAPITAL_R_GENERAL_NEWLINE) => general_newline(),
            'N' if syn.has_op2(Op2::ESC_CAPITAL_N_O_SUPER_DOT) => Node::AnyChar { multiline: false },
            'O' if syn.has_op2(Op2::ESC_CAPITAL_N_O_SUPER_DOT) => Node::AnyChar { multiline: true },
            'X' if syn.has_op2(Op2::ESC_X_Y_TEXT_SEGMENT) => {
                return Err(self.unsupported_at(at, UnsupportedFeature::TextSegment));
            }
            'y' | 'Y' if syn.has_op2(Op2::ESC_X_Y_TEXT_SEGMENT) => {
                return Err(self.unsupported_at(at, UnsupportedFeature::TextSegmentBoundary));
            }
            'k' if syn.has_op2(Op2::ESC_K_NAMED_BACKREF) && (self.peek_is('<') || self.peek_is('\'')) => {
                let term = if self.eat('<') { '>' } else { self.pos += 1; '\'' };
                let target = self.fetch_ref(term, false, at)?;
                self.push_ref(target.clone(), RefKind::Backref, at);
                Node::Backref { target, fold: self.ref_fold() }
            }
            'g' if syn.has_op2(Op2::ESC_G_SUBEXP_CALL) && (self.peek_is('<') || self.peek_is('\'')) => {
                let term = if self.eat('<') { '>' } else { self.pos += 1; '\'' };
                let target = self.fetch_ref(term, true, at)?;
                self.push_ref(target.clone(), RefKind::Call, at);
                Node::Call { target }
            }
            'Q' if syn.has_op2(Op2::ESC_CAPITAL_Q_QUOTE) => {
                let mut chars = Vec::new();
                while let Some(q) = self.next() {
                    if q == '\\' as CodePoint && self.peek_is('E') {
                        self.pos += 1;
                        break;
                    }
                    chars.push(q);
                }
                if chars.is_empty() {
                    return Ok(Node::Empty);
                }
                let fold = chars
                    .iter()
                    .map(|&q| self.fold_for(q))
                    .find(|f| *f != CaseFold::Exact)
                    .unwrap_or(CaseFold::Exact);
                Node::Literal { chars, fold }
            }
            '1'..='9' => return self.prs_decimal_escape(e, at),
            _ => match self.fetch_escaped_value(e, at)? {
                Some(v) => self.char_node(v),
                None => self.char_node(e),
            },
        };
        Ok(node)
    }

    // --- character classes ---

    /// After `[`; returns the final set with negation and case closure applied.
    fn prs_cc(&mut self, open_pos: usize, depth: u32) -> Result<CodeRanges, RegexError> {
        self.check_depth(depth)?;
        let negate = self.eat('^');
        let set = self.prs_cc_body(open_pos, depth)?;
        Ok(self.finish_class(set, negate, true))
    }

    fn prs_posix_bracket(&mut self, at: usize) -> Result<Option<CodeRanges>, RegexError> {
        let save = self.pos;
        self.pos += 1; // ':'
        let negate = self.eat('^');
        let mut name = String::new();
        loop {
            match self.next().map(ch) {
                Some(':') if self.peek_is(']') => {
                    self.pos += 1;
                    break;
                }
                Some(c) if c.is_ascii_alphabetic() && name.len() < 20 => name.push(c),
                _ => {
                    self.pos = save;
                    return Ok(None);
                }
            }
        }
        let class = PosixClass::from_name(&name)
            .ok_or_else(|| self.err_at(at, E::InvalidPosixBracketType))?;
        let set = unicode::posix_ranges(class, self.opts.contains(Options::POSIX_IS_ASCII)).clone();
        Ok(Some(if negate { set.complement() } else { set }))
    }

    fn prs_cc_escape(&mut self, at: usize) -> Result<CcItem, RegexError> {
        let Some(e) = self.next() else {
            return Err(self.err_at(at, E::EndPatternAtEscape));
        };
        let c = ch(e);
        if let Some(set) = self.shorthand(c) {
            return Ok(CcItem::Set(set));
        }
        if matches!(c, 'p' | 'P')
            && self.syntax.has_op2(Op2::ESC_P_BRACE_CHAR_PROPERTY)
            && self.eat('{')
        {
            return Ok(CcItem::Set(self.prs_char_property(c == 'P', at)?));
        }
        if c == 'b' {
            return Ok(CcItem::Char(0x08));
        }
        Ok(CcItem::Char(self.fetch_escaped_value(e, at)?.unwrap_or(e)))
    }

    /// Class items up to and including the closing `]`.
    fn prs_cc_body(&mut self, open_pos: usize, depth: u32) -> Result<CodeRanges, RegexError> {
        let syn = self.syntax;
        let set_ops = syn.has_op2(Op2::CCLASS_SET_OP);
        let escapes = syn.has_behavior(Bv::BACKSLASH_ESCAPE_IN_CC);
        let mut set = CodeRanges::new();
        let mut first = true;
        loop {
            let item_pos = self.pos;
            let Some(c) = self.next() else {
                return Err(self.err_at(open_pos, E::PrematureEndOfCharClass));
            };
            let item = match ch(c) {
                ']' if !first => return Ok(set),
                ']' if !self.chars[self.pos..].contains(&(']' as CodePoint)) => {
                    return Err(self.err_at(open_pos, E::EmptyCharClass));
                }
                '[' => {
                    let posix = if syn.has_op(Op1::POSIX_BRACKET) && self.peek_is(':') {
                        self.prs_posix_bracket(item_pos)?
                    } else {
                        None
                    };
                    match posix {
                        Some(r) => CcItem::Set(r),
                        None if set_ops => CcItem::Set(self.prs_cc(item_pos, depth + 1)?),
                        None => CcItem::Char(c),
                    }
                }
                '&' if set_ops && self.peek_is('&') => {
                    self.pos += 1;
                    let left = if first { CodeRanges::new().complement() } else { set };
                    self.check_depth(depth + 1)?;
                    let right = self.prs_cc_body(open_pos, depth + 1)?;
                    return Ok(left.intersect(&right));
                }
                '\\' if escapes => self.prs_cc_escape(item_pos)?,
                _ => CcItem::Char(c),
            };
            first = false;
            let lo = match item {
                CcItem::Set(r) => {
                    set.union_with(&r);
                    continue;
                }
                CcItem::Char(lo) => lo,
            };
            let is_range = self.peek_is('-') && self.peek_at(1).is_some_and(|n| n != ']' as CodePoint);
            if !is_range {
                set.add(lo);
                continue;
            }
            self.pos += 1;
            let hi_pos = self.pos;
            let hi_c = self.next().unwrap_or_default();
            let hi = match ch(hi_c) {
                '\\' if escapes => match self.prs_cc_escape(hi_pos)? {
                    CcItem::Char(v) => v,
                    CcItem::Set(_) => return Err(self.err_at(hi_pos, E::CharClassValueAtEndOfRange)),
                },
                '[' if set_ops => return Err(self.err_at(hi_pos, E::CharClassValueAtEndOfRange)),
                _ => hi_c,
            };
            if lo > hi {
                if syn.has_behavior(Bv::ALLOW_EMPTY_RANGE_IN_CC) {
                    continue;
                }
                return Err(self.err_at(item_pos, E::EmptyRangeInCharClass));
            }
            set.add_range(lo, hi);
        }
    }

    // --- post-parse ---

    fn finish(mut self, mut root: Node, options: Options) -> Result<ParsedPattern, RegexError> {
        let options = options | self.whole_options;
        let only_named = options.contains(Options::DONT_CAPTURE_GROUP)
            || (self.syntax.has_behavior(Bv::CAPTURE_ONLY_NAMED_GROUP)
                && self.num_named > 0
                && !options.contains(Options::CAPTURE_GROUP));
        let mut num_groups = self.num_groups;
        let mut history_groups = self.history_groups;
        if only_named && self.num_named < self.num_groups {
            if self.num_named > 0 {
                if let Some(r) = self
                    .refs
                    .iter()
                    .find(|r| matches!(r.target, RefTarget::Number(n) if n > 0))
                {
                    return Err(RegexError::syntax(E::NumberedBackrefOrCallNotAllowed, r.offset));
                }
            }
            let mut map = vec![None; self.num_groups + 1];
            map[0] = Some(0);
            let mut next = 0;
            for g in 1..=self.num_groups {
                if self.named[g] {
                    next += 1;
                    map[g] = Some(next);
                }
            }
            root.walk_mut(&mut |node| {
                let unwrap = match node {
                    Node::Group { index, body, .. } => match map[*index] {
                        Some(n) => {
                            *index = n;
                            None
                        }
                        None => Some(std::mem::replace(body.as_mut(), Node::Empty)),
                    },
                    _ => None,
                };
                if let Some(body) = unwrap {
                    *node = body;
                }
            });
            self.names.renumber(&map);
            history_groups = (1..=self.num_groups)
                .filter(|&g| self.history_groups & (1 << g.min(31)) != 0)
                .filter_map(|g| map[g])
                .fold(0, |acc, n| acc | (1u32 << n));
            num_groups = next;
        }

        for r in &self.refs {
            self.check_ref(r, num_groups)?;
        }
        let names = &self.names;
        root.walk_mut(&mut |node| {
            if let Node::Backref { target, .. } | Node::Call { target } | Node::Conditional { target, .. } = node {
                let groups = match target {
                    RefTarget::Number(n) => vec![*n],
                    RefTarget::Name(name) => names.get(name).map(<[usize]>::to_vec).unwrap_or_default(),
                    RefTarget::Groups(g) => std::mem::take(g),
                };
                *target = RefTarget::Groups(groups);
            }
        });

        Ok(ParsedPattern { root, num_groups, names: self.names, options, history_groups })
    }

    fn check_ref(&self, r: &PendingRef, num_groups: usize) -> Result<(), RegexError> {
        let fail = |kind| Err(RegexError::syntax(kind, r.offset));
        match (&r.target, r.kind) {
            (RefTarget::Number(n), RefKind::Call) => {
                if *n > num_groups {
                    return fail(E::UndefinedGroupReference);
                }
            }
            (RefTarget::Number(n), _) => {
                if *n == 0 || *n > num_groups {
                    return fail(E::InvalidBackref);
                }
            }
            (RefTarget::Name(name), kind) => match self.names.get(name) {
                None => return fail(E::UndefinedNameReference),
                Some(groups) if groups.len() > 1 && kind == RefKind::Call => {
                    return fail(E::MultiplexDefinitionNameCall);
                }
                Some(_) => {}
            },
            (RefTarget::Groups(_), _) => {}
        }
        Ok(())
    }
}

fn general_newline() -> Node {
    let crlf = Node::Literal { chars: vec![0x0D, 0x0A], fold: CaseFold::Exact };
    let single = CodeRanges::from_ranges([(0x0A, 0x0D), (0x85, 0x85), (0x2028, 0x2029)]);
    Node::Atomic(Box::new(Node::Alt(vec![crlf, Node::Class(Box::new(single))])))
}

fn merge_literals(items: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(items.len());
    for item in items {
        if let (Some(Node::Literal { chars, fold }), Node::Literal { chars: more, fold: f2 }) =
            (out.last_mut(), &item)
        {
            if *fold == *f2 {
                chars.extend_from_slice(more);
                continue;
            }
        }
        out.push(item);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regsyntax::{SYNTAX_GREP, SYNTAX_ONIGURUMA, SYNTAX_PERL_NT, SYNTAX_POSIX_BASIC, SYNTAX_RUBY};

    fn parse_with(pattern: &str, syntax: &'static Syntax) -> Result<ParsedPattern, RegexError> {
        parse(pattern.as_bytes(), Encoding::Utf8, syntax.options, syntax, &CompileLimits::default())
    }

    fn p(pattern: &str) -> ParsedPattern {
        parse_with(pattern, &SYNTAX_ONIGURUMA).unwrap()
    }

    fn syntax_err(pattern: &str) -> SyntaxErrorKind {
        match parse_with(pattern, &SYNTAX_ONIGURUMA) {
            Err(RegexError::Syntax { kind, .. }) => kind,
            other => panic!("expected syntax error for {pattern:?}, got {other:?}"),
        }
    }

    fn lit(s: &str) -> Node {
        Node::Literal { chars: s.chars().map(|c| c as u32).collect(), fold: CaseFold::Exact }
    }

    #[test]
    fn literals_merge() {
        assert_eq!(p("abc").root, lit("abc"));
    }

    #[test]
    fn quantifier_binds_last_char() {
        let root = p("abc*").root;
        assert_eq!(
            root,
            Node::Concat(vec![
                lit("ab"),
                Node::Repeat { min: 0, max: None, greed: Greed::Greedy, body: Box::new(lit("c")) },
            ])
        );
    }

    #[test]
    fn lazy_and_possessive() {
        let Node::Repeat { greed, .. } = p("a+?").root else { panic!() };
        assert_eq!(greed, Greed::Lazy);
        let Node::Repeat { greed, .. } = p("a*+").root else { panic!() };
        assert_eq!(greed, Greed::Possessive);
        // Ruby: `{n,m}+` is a nested one-or-more, not possessive.
        let Node::Repeat { min: 1, max: None, body, .. } = parse_with("a{1,2}+", &SYNTAX_RUBY).unwrap().root
        else {
            panic!()
        };
        assert!(matches!(*body, Node::Repeat { min: 1, max: Some(2), greed: Greed::Greedy, .. }));
    }

    #[test]
    fn groups_and_names() {
        let parsed = p("(?<y>\\d+)-(?<m>\\d+)");
        assert_eq!(parsed.num_groups, 2);
        assert_eq!(parsed.names.get("m"), Some(&[2][..]));
    }

    #[test]
    fn only_named_groups_capture_when_names_exist() {
        let parsed = p("(a)(?<x>b)(c)");
        assert_eq!(parsed.num_groups, 1);
        assert_eq!(parsed.names.get("x"), Some(&[1][..]));
        assert_eq!(syntax_err("(?<x>a)\\1"), E::NumberedBackrefOrCallNotAllowed);
    }

    #[test]
    fn interval_errors() {
        assert_eq!(syntax_err("a{3,2}"), E::UpperSmallerThanLowerInRepeatRange);
        assert_eq!(syntax_err("a{100001}"), E::TooBigNumberForRepeatRange);
        // Invalid intervals are literal in the Oniguruma dialect.
        assert_eq!(p("a{x}").root, lit("a{x}"));
        assert!(matches!(p("a{,3}").root, Node::Repeat { min: 0, max: Some(3), .. }));
    }

    #[test]
    fn structural_errors() {
        assert_eq!(syntax_err("(abc"), E::EndPatternWithUnmatchedParenthesis);
        assert_eq!(syntax_err("abc)"), E::UnmatchedCloseParenthesis);
        assert_eq!(syntax_err("[abc"), E::PrematureEndOfCharClass);
        assert_eq!(syntax_err("*a"), E::TargetOfRepeatOperatorNotSpecified);
        assert_eq!(syntax_err("^*"), E::TargetOfRepeatOperatorInvalid);
        assert_eq!(syntax_err("\\"), E::EndPatternAtEscape);
        assert_eq!(syntax_err("[b-a]"), E::EmptyRangeInCharClass);
        assert_eq!(syntax_err("(a)\\2"), E::InvalidBackref);
        assert_eq!(syntax_err("\\k<nope>"), E::UndefinedNameReference);
        assert_eq!(syntax_err("\\p{Klingon}"), E::InvalidCharPropertyName);
        assert_eq!(syntax_err("[[:klingon:]]"), E::InvalidPosixBracketType);
        assert_eq!(syntax_err("(?z)"), E::UndefinedGroupOption);
    }

    #[test]
    fn error_offsets_are_bytes() {
        let err = parse_with("é(", &SYNTAX_ONIGURUMA).unwrap_err();
        assert_eq!(err, RegexError::syntax(E::EndPatternWithUnmatchedParenthesis, 2));
    }

    #[test]
    fn unsupported_features() {
        for pat in ["(?~abc)", "\\X", "a\\y", "(?{foo})", "(?<n>a)\\k<n+1>"] {
            let err = parse_with(pat, &SYNTAX_ONIGURUMA).unwrap_err();
            assert!(matches!(err, RegexError::UnsupportedFeature { .. }), "{pat}: {err:?}");
        }
    }

    #[test]
    fn class_set_operations() {
        let Node::Class(set) = p("[a-z&&[^aeiou]]").root else { panic!() };
        assert!(set.contains('b' as u32));
        assert!(!set.contains('e' as u32));
        let Node::Class(set) = p("[^a]").root else { panic!() };
        assert!(set.contains('\n' as u32));
        let Node::Class(set) = parse_with("[^a]", &SYNTAX_GREP).unwrap().root else { panic!() };
        assert!(!set.contains('\n' as u32));
    }

    #[test]
    fn isolated_option_scope() {
        // Ruby/Oniguruma: the option swallows the following alternatives.
        let root = p("a(?i)b|c").root;
        let Node::Concat(items) = root else { panic!() };
        assert!(matches!(&items[1], Node::Alt(b) if b.len() == 2));
        // Perl: the option continues across the branch.
        let root = parse_with("a(?i)b|c", &SYNTAX_PERL_NT).unwrap().root;
        assert!(matches!(root, Node::Alt(_)));
    }

    #[test]
    fn posix_basic_grammar() {
        let parsed = parse_with("\\(ab\\)*c+", &SYNTAX_POSIX_BASIC).unwrap();
        assert_eq!(parsed.num_groups, 1);
        let Node::Concat(items) = parsed.root else { panic!() };
        assert!(matches!(items[0], Node::Repeat { .. }));
        assert_eq!(items[1], lit("c+"));
        // `*` at the start of a BRE is literal.
        assert_eq!(parse_with("*a", &SYNTAX_POSIX_BASIC).unwrap().root, lit("*a"));
    }

    #[test]
    fn depth_limit() {
        let limits = CompileLimits { parse_depth_limit: 8, ..CompileLimits::default() };
        let deep = "(".repeat(20) + &")".repeat(20);
        let err = parse(deep.as_bytes(), Encoding::Utf8, Options::empty(), &SYNTAX_ONIGURUMA, &limits)
            .unwrap_err();
        assert_eq!(err, RegexError::ResourceLimit(ResourceLimitKind::ParseDepth));
    }

    #[test]
    fn quantifiers_count_toward_depth() {
        let limits = CompileLimits { parse_depth_limit: 8, ..CompileLimits::default() };
        let run = |pat: &str| parse(pat.as_bytes(), Encoding::Utf8, Options::empty(), &SYNTAX_ONIGURUMA, &limits);
        let over = RegexError::ResourceLimit(ResourceLimitKind::ParseDepth);

        assert!(run(&("a".to_string() + &"{1}".repeat(8))).is_ok());
        assert_eq!(run(&("a".to_string() + &"{1}".repeat(9))).unwrap_err(), over);
        // siblings do not nest
        assert!(run(&"a*".repeat(50)).is_ok());
        // a quantified group sits one level above its body
        assert!(run(&("(?:".repeat(3) + "a+" + &")+".repeat(3))).is_ok());
        assert_eq!(run(&("(?:".repeat(4) + "a+" + &")+".repeat(4))).unwrap_err(), over);
    }

    #[test]
    fn pattern_encoding_is_checked() {
        let err = parse(b"ab\xFF", Encoding::Utf8, Options::empty(), &SYNTAX_ONIGURUMA, &CompileLimits::default())
            .unwrap_err();
        assert_eq!(err, RegexError::syntax(E::InvalidPatternEncoding, 2));
    }
}
