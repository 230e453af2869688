#[path = "tests_node.rs"]
mod tests;

use {
    super::{
        captures::Captures,
        segment::{SegmentKind, WILDCARD},
    },
    http::Method,
    indexmap::IndexMap,
};

/// A node in the route trie.
///
/// Child segments and method handlers live in separate maps, so a literal
/// segment named like an HTTP method never collides with a handler entry.
#[derive(Debug, Default, PartialEq)]
pub(super) struct Node {
    pub(super) children: IndexMap<String, Node>,
    /// Positions in `children` of the parameter tokens, in creation order.
    pub(super) params: Vec<usize>,
    /// Method -> index into the recognizer's handler storage.
    pub(super) handlers: IndexMap<Method, usize>,
}

impl Node {
    /// Walks down the trie along `tokens`, creating missing nodes, and returns
    /// the node at the end of the walk.
    pub(super) fn insert(&mut self, tokens: &[&str]) -> &mut Node {
        let mut node = self;
        for &token in tokens {
            node = node.child_or_insert(token);
        }
        node
    }

    fn child_or_insert(&mut self, token: &str) -> &mut Node {
        if !self.children.contains_key(token) {
            if let SegmentKind::Param(..) = SegmentKind::of(token) {
                self.params.push(self.children.len());
            }
        }
        self.children
            .entry(token.to_owned())
            .or_insert_with(Node::default)
    }

    /// Finds the first terminal node for `path` accepted by `accept`.
    ///
    /// At every level the literal child is tried first, then the parameter
    /// children in creation order, then the catch-all. A failure deeper in the
    /// trie falls back to the next candidate at the upper levels.
    pub(super) fn find<'n, 'a, F>(
        &'n self,
        path: &[&'a str],
        captures: &mut Captures<'a>,
        accept: &F,
    ) -> Option<&'n Node>
    where
        'n: 'a,
        F: Fn(&Node) -> bool,
    {
        let (&segment, rest) = match path.split_first() {
            Some(split) => split,
            None => return Some(self).filter(|node| accept(*node)),
        };

        if let Some(child) = self.children.get(segment) {
            if let Some(found) = child.find(rest, captures, accept) {
                return Some(found);
            }
        }

        for &pos in &self.params {
            let (token, child) = match self.children.get_index(pos) {
                Some(entry) => entry,
                None => continue,
            };
            let name = match SegmentKind::of(token) {
                SegmentKind::Param(name) => name,
                _ => continue,
            };
            captures.push(name, segment);
            if let Some(found) = child.find(rest, captures, accept) {
                return Some(found);
            }
            captures.pop();
        }

        // The catch-all swallows the remaining segments and resolves at the
        // terminal position directly beneath it.
        self.children
            .get(WILDCARD)
            .and_then(|wildcard| wildcard.children.get(""))
            .filter(|node| accept(*node))
    }

    /// Visits every terminal node `path` can reach, in the same order `find`
    /// tries them.
    pub(super) fn visit_terminals<'n, F>(&'n self, path: &[&str], f: &mut F)
    where
        F: FnMut(&'n Node),
    {
        let (&segment, rest) = match path.split_first() {
            Some(split) => split,
            None => return f(self),
        };

        if let Some(child) = self.children.get(segment) {
            child.visit_terminals(rest, f);
        }

        for &pos in &self.params {
            if let Some((_, child)) = self.children.get_index(pos) {
                child.visit_terminals(rest, f);
            }
        }

        if let Some(terminal) = self
            .children
            .get(WILDCARD)
            .and_then(|wildcard| wildcard.children.get(""))
        {
            f(terminal);
        }
    }
}
