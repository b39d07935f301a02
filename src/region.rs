// region.rs - Match result: byte spans per capture group plus capture history.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::regparse_types::NameTable;

/// A half-open byte range `[start, end)` in the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// One recorded iteration of a `(?@...)` group. The root is group 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureTreeNode {
    pub group: usize,
    pub start: usize,
    pub end: usize,
    pub children: Vec<CaptureTreeNode>,
}

impl CaptureTreeNode {
    pub fn new(group: usize, start: usize, end: usize) -> Self {
        CaptureTreeNode { group, start, end, children: Vec::new() }
    }
}

/// Selects a group by number or by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRef<'a> {
    Index(usize),
    Name(&'a str),
}

impl From<usize> for GroupRef<'_> {
    fn from(i: usize) -> Self {
        GroupRef::Index(i)
    }
}

impl<'a> From<&'a str> for GroupRef<'a> {
    fn from(name: &'a str) -> Self {
        GroupRef::Name(name)
    }
}

/// Spans of a successful match. Index 0 is the whole match; unmatched groups
/// are `None`.
///
/// Deserializing checks what the matcher guarantees: group 0 is set and no
/// span ends before it starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RegionRepr")]
pub struct Region {
    spans: Vec<Option<Span>>,
    names: Arc<NameTable>,
    history: Option<CaptureTreeNode>,
}

/// Why a serialized [`Region`] was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRegion {
    #[error("region has no whole-match span")]
    MissingWholeMatch,
    #[error("group {group} span {start}..{end} ends before it starts")]
    InvertedSpan { group: usize, start: usize, end: usize },
    #[error("capture history refers to group {group}, region has {slots} slots")]
    UnknownHistoryGroup { group: usize, slots: usize },
}

#[derive(Deserialize)]
struct RegionRepr {
    spans: Vec<Option<Span>>,
    #[serde(default)]
    names: Arc<NameTable>,
    #[serde(default)]
    history: Option<CaptureTreeNode>,
}

impl TryFrom<RegionRepr> for Region {
    type Error = InvalidRegion;

    fn try_from(repr: RegionRepr) -> Result<Self, Self::Error> {
        let RegionRepr { spans, names, history } = repr;
        if !matches!(spans.first(), Some(Some(_))) {
            return Err(InvalidRegion::MissingWholeMatch);
        }
        for (group, span) in spans.iter().enumerate() {
            if let Some(Span { start, end }) = *span {
                if start > end {
                    return Err(InvalidRegion::InvertedSpan { group, start, end });
                }
            }
        }
        let mut pending: Vec<&CaptureTreeNode> = history.iter().collect();
        while let Some(node) = pending.pop() {
            if node.group >= spans.len() {
                return Err(InvalidRegion::UnknownHistoryGroup { group: node.group, slots: spans.len() });
            }
            if node.start > node.end {
                return Err(InvalidRegion::InvertedSpan { group: node.group, start: node.start, end: node.end });
            }
            pending.extend(&node.children);
        }
        Ok(Region { spans, names, history })
    }
}

impl Region {
    pub(crate) fn new(spans: Vec<Option<Span>>, names: Arc<NameTable>, history: Option<CaptureTreeNode>) -> Self {
        Region { spans, names, history }
    }

    /// Start of the whole match.
    pub fn start(&self) -> usize {
        self.spans.first().copied().flatten().map_or(0, |s| s.start)
    }

    /// End of the whole match.
    pub fn end(&self) -> usize {
        self.spans.first().copied().flatten().map_or(0, |s| s.end)
    }

    /// Number of slots, group 0 included.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn get(&self, group: usize) -> Option<Span> {
        self.spans.get(group).copied().flatten()
    }

    /// Span of a group given by number or name. A name shared by several
    /// groups resolves to the highest-numbered one that matched.
    pub fn region_for<'a>(&self, group: impl Into<GroupRef<'a>>) -> Option<Span> {
        match group.into() {
            GroupRef::Index(i) => self.get(i),
            GroupRef::Name(name) => self.get(self.name_to_group(name)?),
        }
    }

    /// Group number a name resolves to in this match.
    pub fn name_to_group(&self, name: &str) -> Option<usize> {
        let groups = self.names.get(name)?;
        groups
            .iter()
            .rev()
            .copied()
            .find(|&g| self.get(g).is_some())
            .or_else(|| groups.iter().copied().max())
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Span>> + '_ {
        self.spans.iter().copied()
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Capture-history tree, present when the pattern uses `(?@...)`.
    pub fn history(&self) -> Option<&CaptureTreeNode> {
        self.history.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Region {
        let mut names = NameTable::new();
        names.add("x", 1);
        names.add("x", 2);
        Region::new(
            vec![Some(Span::new(0, 5)), Some(Span::new(0, 2)), None],
            Arc::new(names),
            None,
        )
    }

    #[test]
    fn lookup_by_index_and_name() {
        let r = sample();
        assert_eq!(r.start(), 0);
        assert_eq!(r.end(), 5);
        assert_eq!(r.get(2), None);
        // Group 2 did not match, so the name falls back to group 1.
        assert_eq!(r.region_for("x"), Some(Span::new(0, 2)));
        assert_eq!(r.region_for("x"), r.region_for("x"));
        assert_eq!(r.region_for("missing"), None);
        assert_eq!(r.region_for(7), None);
    }

    #[test]
    fn span_helpers() {
        let s = Span::new(3, 7);
        assert_eq!(s.len(), 4);
        assert_eq!(s.range(), 3..7);
        assert!(Span::new(2, 2).is_empty());
        assert_eq!(Span::new(5, 2).len(), 0);
    }

    #[test]
    fn deserialize_rejects_broken_regions() {
        let good = serde_json::to_value(sample()).unwrap();
        let back: Region = serde_json::from_value(good.clone()).unwrap();
        assert_eq!(back, sample());

        let with = |key: &str, value: serde_json::Value| {
            let mut v = good.clone();
            v[key] = value;
            serde_json::from_value::<Region>(v)
        };
        let err = with("spans", serde_json::json!([])).unwrap_err();
        assert!(err.to_string().contains("no whole-match span"), "{err}");
        assert!(with("spans", serde_json::json!([null, {"start": 0, "end": 1}])).is_err());

        let err = with("spans", serde_json::json!([{"start": 5, "end": 2}])).unwrap_err();
        assert!(err.to_string().contains("group 0 span 5..2"), "{err}");
        let err = with("spans", serde_json::json!([{"start": 0, "end": 5}, {"start": 4, "end": 1}])).unwrap_err();
        assert!(err.to_string().contains("group 1 span 4..1"), "{err}");

        let tree = |group: usize, start: usize, end: usize| {
            serde_json::json!({"group": 0, "start": 0, "end": 5,
                "children": [{"group": group, "start": start, "end": end, "children": []}]})
        };
        assert!(with("history", tree(1, 0, 2)).is_ok());
        assert!(with("history", tree(1, 3, 2)).is_err());
        assert!(with("history", tree(9, 0, 2)).is_err());
    }

    #[test]
    fn names_are_optional_when_deserializing() {
        let r: Region = serde_json::from_str(r#"{"spans":[{"start":1,"end":3},null]}"#).unwrap();
        assert_eq!((r.start(), r.end(), r.len()), (1, 3, 2));
        assert_eq!(r.region_for("x"), None);
    }
}
