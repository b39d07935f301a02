// regparse_types.rs - AST produced by the parser and consumed by the compiler.

use serde::{Deserialize, Serialize};

use crate::regdefs::{CodePoint, Options};
use crate::regint::{CaseFold, CodeRanges, Greed};

// === Anchors ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    /// `\A`
    BeginBuf,
    /// `\z`
    EndBuf,
    /// `\Z`
    SemiEndBuf,
    BeginLine,
    EndLine,
    /// `\G`
    BeginPosition,
    WordBoundary { ascii: bool },
    NotWordBoundary { ascii: bool },
    WordBegin { ascii: bool },
    WordEnd { ascii: bool },
}

/// A group reference as written; resolved after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefTarget {
    Number(usize),
    Name(String),
    /// Resolved group numbers (several for a name defined more than once).
    Groups(Vec<usize>),
}

impl RefTarget {
    pub fn groups(&self) -> &[usize] {
        match self {
            RefTarget::Groups(g) => g,
            _ => &[],
        }
    }
}

// === Nodes ===

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Empty,
    Literal { chars: Vec<CodePoint>, fold: CaseFold },
    /// Fully resolved set: negation and case closure already applied.
    Class(Box<CodeRanges>),
    AnyChar { multiline: bool },
    Anchor(AnchorKind),
    /// `offset` is the pattern byte offset of the opening parenthesis.
    Look { behind: bool, negative: bool, offset: usize, body: Box<Node> },
    Group { index: usize, history: bool, body: Box<Node> },
    Atomic(Box<Node>),
    Repeat { min: u32, max: Option<u32>, greed: Greed, body: Box<Node> },
    Concat(Vec<Node>),
    Alt(Vec<Node>),
    Backref { target: RefTarget, fold: CaseFold },
    Call { target: RefTarget },
    Keep,
    Conditional { target: RefTarget, yes: Box<Node>, no: Box<Node> },
}

impl Node {
    pub fn literal(c: CodePoint, fold: CaseFold) -> Node {
        Node::Literal { chars: vec![c], fold }
    }

    /// Folds a list of branch items into the smallest equivalent node.
    pub fn concat(mut items: Vec<Node>) -> Node {
        items.retain(|n| !matches!(n, Node::Empty));
        match items.len() {
            0 => Node::Empty,
            1 => items.pop().unwrap_or(Node::Empty),
            _ => Node::Concat(items),
        }
    }

    pub fn alt(mut branches: Vec<Node>) -> Node {
        if branches.len() == 1 {
            branches.pop().unwrap_or(Node::Empty)
        } else {
            Node::Alt(branches)
        }
    }

    /// Visits every node, children before parents.
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
        match self {
            Node::Look { body, .. }
            | Node::Group { body, .. }
            | Node::Atomic(body)
            | Node::Repeat { body, .. } => body.walk_mut(f),
            Node::Concat(items) | Node::Alt(items) => {
                for n in items.iter_mut() {
                    n.walk_mut(f);
                }
            }
            Node::Conditional { yes, no, .. } => {
                yes.walk_mut(f);
                no.walk_mut(f);
            }
            _ => {}
        }
        f(self);
    }

    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        match self {
            Node::Look { body, .. }
            | Node::Group { body, .. }
            | Node::Atomic(body)
            | Node::Repeat { body, .. } => body.walk(f),
            Node::Concat(items) | Node::Alt(items) => {
                for n in items {
                    n.walk(f);
                }
            }
            Node::Conditional { yes, no, .. } => {
                yes.walk(f);
                no.walk(f);
            }
            _ => {}
        }
        f(self);
    }
}

// === Name Table ===

/// Group names in definition order, each with the groups carrying it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTable {
    entries: Vec<(String, Vec<usize>)>,
}

impl NameTable {
    pub fn new() -> Self {
        NameTable { entries: Vec::new() }
    }

    /// Records `group` under `name`; returns false if the name already existed.
    pub fn add(&mut self, name: &str, group: usize) -> bool {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, groups)) => {
                groups.push(group);
                false
            }
            None => {
                self.entries.push((name.to_string(), vec![group]));
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[usize]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, g)| g.as_slice())
    }

    /// The name attached to `group`, if any.
    pub fn name_of(&self, group: usize) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, g)| g.contains(&group))
            .map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.entries.iter().map(|(n, g)| (n.as_str(), g.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn renumber(&mut self, map: &[Option<usize>]) {
        for (_, groups) in &mut self.entries {
            for g in groups.iter_mut() {
                if let Some(Some(n)) = map.get(*g) {
                    *g = *n;
                }
            }
        }
    }
}

/// Output of the parser.
#[derive(Debug, Clone)]
pub struct ParsedPattern {
    pub root: Node,
    pub num_groups: usize,
    pub names: NameTable,
    /// Effective whole-pattern options (caller's, dialect's and leading whole options).
    pub options: Options,
    pub history_groups: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_collapses() {
        assert_eq!(Node::concat(vec![Node::Empty, Node::Keep]), Node::Keep);
        assert_eq!(Node::concat(vec![]), Node::Empty);
        assert_eq!(Node::alt(vec![Node::Keep]), Node::Keep);
    }

    #[test]
    fn name_table_keeps_definition_order() {
        let mut t = NameTable::new();
        assert!(t.add("year", 1));
        assert!(t.add("month", 2));
        assert!(!t.add("year", 3));
        assert_eq!(t.get("year"), Some(&[1, 3][..]));
        assert_eq!(t.name_of(2), Some("month"));
        let names: Vec<&str> = t.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["year", "month"]);
    }

    #[test]
    fn walk_visits_children_first() {
        let n = Node::Group {
            index: 1,
            history: false,
            body: Box::new(Node::Concat(vec![Node::Keep, Node::Empty])),
        };
        let mut seen = Vec::new();
        n.walk(&mut |node| {
            seen.push(match node {
                Node::Keep => "keep",
                Node::Empty => "empty",
                Node::Concat(_) => "concat",
                Node::Group { .. } => "group",
                _ => "other",
            })
        });
        assert_eq!(seen, ["keep", "empty", "concat", "group"]);
    }
}
