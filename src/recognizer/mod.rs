//! The implementation of route recognizer.

mod captures;
mod node;
pub(crate) mod segment;

#[path = "tests_recognize.rs"]
mod tests;

use {
    self::{node::Node, segment::segments},
    crate::method::Methods,
    http::Method,
    indexmap::IndexSet,
    log::{debug, trace},
};

pub use self::captures::Captures;

/// A segment-wise trie mapping paths and methods to values of `T`.
#[derive(Debug)]
pub(crate) struct Recognizer<T> {
    root: Node,
    handlers: Vec<T>,
}

impl<T> Default for Recognizer<T> {
    fn default() -> Self {
        Self {
            root: Node::default(),
            handlers: vec![],
        }
    }
}

impl<T> Recognizer<T> {
    /// Registers `handler` under each of `methods` at the node for `pattern`.
    ///
    /// A handler previously registered for the same node and method is replaced.
    pub(crate) fn insert(&mut self, pattern: &str, methods: &Methods, handler: T) {
        let index = self.handlers.len();
        self.handlers.push(handler);

        let node = self.root.insert(&segments(pattern));
        for method in methods {
            if let Some(old) = node.handlers.insert(method.clone(), index) {
                debug!(
                    "replace the handler #{} for {} {:?} with #{}",
                    old, method, pattern, index
                );
            }
        }
        trace!("add route {:?} {:?} -> #{}", pattern, methods, index);
    }

    /// Traverses the trie with the given path and returns the value registered
    /// for `method`, together with the captured parameters.
    pub(crate) fn recognize<'a>(
        &'a self,
        path: &'a str,
        method: &Method,
    ) -> Option<(&'a T, Captures<'a>)> {
        let mut captures = Captures::default();
        let found = self.root.find(&segments(path), &mut captures, &|node: &Node| {
            node.handlers.contains_key(method)
        });
        match found.and_then(|node| node.handlers.get(method)) {
            Some(&index) => {
                trace!("recognize {} {:?} -> #{}", method, path, index);
                Some((&self.handlers[index], captures))
            }
            None => {
                trace!("recognize {} {:?} -> not matched", method, path);
                None
            }
        }
    }

    /// Returns the methods for which `recognize` succeeds with `path`, in the
    /// order they are first seen along the search.
    pub(crate) fn allowed_methods<'a>(&'a self, path: &str) -> Vec<&'a Method> {
        let mut methods = IndexSet::new();
        self.root
            .visit_terminals(&segments(path), &mut |node: &'a Node| {
                methods.extend(node.handlers.keys());
            });
        methods.into_iter().collect()
    }
}
