use std::slice;

/// The parameters extracted from a request path, in path order.
///
/// Names borrow from the router and values borrow from the request path.
/// Segments consumed by a catch-all are not captured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Captures<'a> {
    params: Vec<(&'a str, &'a str)>,
}

impl<'a> Captures<'a> {
    pub(crate) fn push(&mut self, name: &'a str, value: &'a str) {
        self.params.push((name, value));
    }

    pub(crate) fn pop(&mut self) {
        self.params.pop();
    }

    /// Returns the value captured under `name`.
    ///
    /// When the same name appears more than once in a pattern, the first
    /// occurrence wins.
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.params
            .iter()
            .find(|&&(n, _)| n == name)
            .map(|&(_, value)| value)
    }

    /// Returns an iterator over the `(name, value)` pairs.
    pub fn iter(&self) -> slice::Iter<'_, (&'a str, &'a str)> {
        self.params.iter()
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Converts the captures into owned `(name, value)` pairs.
    pub fn into_vec(self) -> Vec<(String, String)> {
        self.params
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect()
    }
}

impl<'c, 'a> IntoIterator for &'c Captures<'a> {
    type Item = &'c (&'a str, &'a str);
    type IntoIter = slice::Iter<'c, (&'a str, &'a str)>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}
