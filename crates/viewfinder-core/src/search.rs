//! Depth-first search over view hierarchies.
//!
//! The search functions here are the whole traversal engine: strict
//! pre-order walks that test each button node the moment it is visited,
//! before descending into its children, with siblings taken in stored
//! order. First-match queries therefore prefer a shallow match over a
//! deeper one, and all-match queries return results in encounter order.
//!
//! Traversal is read-only and allocation-free except for collecting
//! [`find_all`] results.

use crate::view::{Button, ViewNode};

/// Returns the first button in pre-order traversal for which `predicate`
/// holds, or `None` when no button matches (including the no-buttons case).
pub fn find_first<P>(root: &ViewNode, predicate: P) -> Option<&Button>
where
    P: Fn(&Button) -> bool,
{
    find_first_inner(root, &predicate)
}

fn find_first_inner<'a, P>(node: &'a ViewNode, predicate: &P) -> Option<&'a Button>
where
    P: Fn(&Button) -> bool,
{
    if let Some(button) = node.as_button() {
        if predicate(button) {
            return Some(button);
        }
    }
    for child in node.children() {
        if let Some(found) = find_first_inner(child, predicate) {
            return Some(found);
        }
    }
    None
}

/// Returns every button for which `predicate` holds, across the whole tree,
/// in pre-order traversal order. Empty when nothing matches.
pub fn find_all<P>(root: &ViewNode, predicate: P) -> Vec<&Button>
where
    P: Fn(&Button) -> bool,
{
    let mut matches = Vec::new();
    collect_matches(root, &predicate, &mut matches);
    matches
}

fn collect_matches<'a, P>(node: &'a ViewNode, predicate: &P, matches: &mut Vec<&'a Button>)
where
    P: Fn(&Button) -> bool,
{
    if let Some(button) = node.as_button() {
        if predicate(button) {
            matches.push(button);
        }
    }
    for child in node.children() {
        collect_matches(child, predicate, matches);
    }
}

/// Whether any button in the tree satisfies `predicate`.
///
/// Equivalent to `find_first(root, predicate).is_some()`; exposed so
/// callers asking a yes/no question need not handle the match itself.
pub fn exists<P>(root: &ViewNode, predicate: P) -> bool
where
    P: Fn(&Button) -> bool,
{
    find_first(root, predicate).is_some()
}
