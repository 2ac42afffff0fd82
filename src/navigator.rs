//! Deterministic descent through single-match segments.

use crate::tree::Node;

/// Segments left unresolved after a branch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResidualPath<'p> {
    segments: &'p [String],
}

impl<'p> ResidualPath<'p> {
    pub(crate) fn new(segments: &'p [String]) -> Self {
        Self { segments }
    }

    pub(crate) fn segments(&self) -> &'p [String] {
        self.segments
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Where a descent ended.
#[derive(Debug)]
pub(crate) enum Outcome<'n, 'p> {
    /// Every segment matched exactly one child.
    Target(&'n Node),

    /// A segment matched several siblings; each must resolve `residual`
    /// on its own.
    Branch {
        siblings: Vec<&'n Node>,
        residual: ResidualPath<'p>,
    },

    /// A segment matched nothing.
    NoMatch,
}

/// Walk from `start` while each segment matches exactly one child.
///
/// Stops at the first segment with zero or several matches. Several
/// matches are returned in document order along with the segments after
/// the branching one.
pub(crate) fn descend<'n, 'p>(start: &'n Node, path: ResidualPath<'p>) -> Outcome<'n, 'p> {
    let segments = path.segments();
    let mut current = start;

    for (index, segment) in segments.iter().enumerate() {
        let mut matches = current.children_named(segment);

        let first = match matches.next() {
            Some(node) => node,
            None => return Outcome::NoMatch,
        };

        match matches.next() {
            None => current = first,
            Some(second) => {
                let mut siblings = vec![first, second];
                siblings.extend(matches);
                return Outcome::Branch {
                    siblings,
                    residual: ResidualPath::new(&segments[index + 1..]),
                };
            }
        }
    }

    Outcome::Target(current)
}
