// regtrav.rs - Capture-history tree traversal.

use std::ops::ControlFlow;

use bitflags::bitflags;

use crate::region::{CaptureTreeNode, Region};

bitflags! {
    /// When the callback fires for a node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TraverseAt: u8 {
        /// Before the node's children (pre-order).
        const FIRST = 1;
        /// After the node's children (post-order).
        const LAST  = 1 << 1;
    }
}

/// What the callback sees for one tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraverseEvent {
    pub group: usize,
    pub start: usize,
    pub end: usize,
    /// Depth below the root; the root is 0.
    pub level: usize,
    /// `FIRST` or `LAST`.
    pub at: TraverseAt,
}

fn traverse_node<B>(
    node: &CaptureTreeNode,
    at: TraverseAt,
    level: usize,
    f: &mut impl FnMut(TraverseEvent) -> ControlFlow<B>,
) -> ControlFlow<B> {
    let event = |at| TraverseEvent { group: node.group, start: node.start, end: node.end, level, at };
    if at.contains(TraverseAt::FIRST) {
        f(event(TraverseAt::FIRST))?;
    }
    for child in &node.children {
        traverse_node(child, at, level + 1, f)?;
    }
    if at.contains(TraverseAt::LAST) {
        f(event(TraverseAt::LAST))?;
    }
    ControlFlow::Continue(())
}

/// Walks the capture-history tree of `region` depth first. Returns the
/// callback's `Break` value if it stopped early. A region without history
/// visits nothing.
pub fn traverse_capture_tree<B>(
    region: &Region,
    at: TraverseAt,
    mut f: impl FnMut(TraverseEvent) -> ControlFlow<B>,
) -> ControlFlow<B> {
    match region.history() {
        Some(root) => traverse_node(root, at, 0, &mut f),
        None => ControlFlow::Continue(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regcomp::{compile, CompileLimits};
    use crate::regdefs::Options;
    use crate::regenc::Encoding;
    use crate::regexec::{search, MatchParam};
    use crate::regsyntax::SYNTAX_ONIGURUMA;

    fn region(pattern: &str, subject: &str) -> Region {
        let reg = compile(pattern.as_bytes(), Encoding::Utf8, Options::empty(), &SYNTAX_ONIGURUMA, &CompileLimits::default())
            .unwrap();
        search(&reg, subject.as_bytes(), Encoding::Utf8, 0, subject.len(), Options::empty(), &MatchParam::default())
            .unwrap()
            .unwrap()
    }

    #[test]
    fn pre_and_post_order() {
        let r = region("(?@(?@a)b)+", "abab");
        let mut seen = Vec::new();
        let flow: ControlFlow<()> = traverse_capture_tree(&r, TraverseAt::FIRST | TraverseAt::LAST, |e| {
            seen.push((e.group, e.start, e.end, e.level, e.at == TraverseAt::FIRST));
            ControlFlow::Continue(())
        });
        assert!(flow.is_continue());
        assert_eq!(
            seen,
            [
                (0, 0, 4, 0, true),
                (1, 0, 2, 1, true),
                (2, 0, 1, 2, true),
                (2, 0, 1, 2, false),
                (1, 0, 2, 1, false),
                (1, 2, 4, 1, true),
                (2, 2, 3, 2, true),
                (2, 2, 3, 2, false),
                (1, 2, 4, 1, false),
                (0, 0, 4, 0, false),
            ]
        );
    }

    #[test]
    fn break_stops_the_walk() {
        let r = region("(?@a)+", "aaa");
        let mut visits = 0;
        let flow = traverse_capture_tree(&r, TraverseAt::FIRST, |e| {
            visits += 1;
            if e.group == 1 {
                ControlFlow::Break(e.start)
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(flow, ControlFlow::Break(0));
        assert_eq!(visits, 2);
    }

    #[test]
    fn no_history_visits_nothing() {
        let r = region("(a)+", "aaa");
        let flow: ControlFlow<()> = traverse_capture_tree(&r, TraverseAt::FIRST, |_| panic!("unexpected visit"));
        assert!(flow.is_continue());
    }
}
