//! Residual-path replay against the siblings of a branch point.

use crate::navigator::{descend, Outcome, ResidualPath};
use crate::tree::Node;

/// Resolve `residual` under each of `siblings`, appending text values to
/// `out` in document order.
///
/// Nested branch points fan out again. The work is kept on an explicit
/// stack, pushed right-to-left so the leftmost pending sibling is always
/// resolved first.
pub(crate) fn extract(siblings: Vec<&Node>, residual: ResidualPath<'_>, out: &mut Vec<String>) {
    if residual.is_empty() {
        let texts = siblings.into_iter().filter_map(Node::text);
        out.extend(texts.map(str::to_string));
        return;
    }

    let mut pending: Vec<(&Node, ResidualPath<'_>)> = siblings
        .into_iter()
        .rev()
        .map(|node| (node, residual))
        .collect();

    while let Some((node, residual)) = pending.pop() {
        match descend(node, residual) {
            Outcome::Target(target) => {
                if let Some(text) = target.text() {
                    out.push(text.to_string());
                }
            }
            Outcome::Branch { siblings, residual } => {
                pending.extend(siblings.into_iter().rev().map(|node| (node, residual)));
            }
            Outcome::NoMatch => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(number: &str, skus: &[&str]) -> Node {
        let mut lines = Node::new("lines");
        for sku in skus {
            lines =
                lines.with_child(Node::new("line").with_child(Node::new("sku").with_text(sku)));
        }
        Node::new("order")
            .with_child(Node::new("number").with_text(number))
            .with_child(lines)
    }

    #[test]
    fn test_empty_residual_takes_sibling_text() {
        let a = Node::new("item").with_text("a");
        let b = Node::new("item");
        let c = Node::new("item").with_text("c");

        let mut out = Vec::new();
        extract(vec![&a, &b, &c], ResidualPath::new(&[]), &mut out);

        assert_eq!(out, vec!["a", "c"]);
    }

    #[test]
    fn test_nested_fan_out_preserves_document_order() {
        let first = order("1", &["A", "B"]);
        let second = order("2", &["C"]);
        let third = order("3", &["D", "E", "F"]);
        let residual = vec!["lines".to_string(), "line".to_string(), "sku".to_string()];

        let mut out = Vec::new();
        extract(
            vec![&first, &second, &third],
            ResidualPath::new(&residual),
            &mut out,
        );

        assert_eq!(out, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_unresolved_siblings_drop_out() {
        let first = order("1", &["A"]);
        let bare = Node::new("order");
        let residual = vec!["number".to_string()];

        let mut out = Vec::new();
        extract(
            vec![&first, &bare, &first],
            ResidualPath::new(&residual),
            &mut out,
        );

        assert_eq!(out, vec!["1", "1"]);
    }
}
