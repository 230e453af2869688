//! The set of HTTP methods a route is registered under.

use {
    crate::error::{Error, Result},
    http::Method,
    indexmap::{indexset, IndexSet},
    std::{iter::FromIterator, str::FromStr},
};

/// An insertion-ordered set of HTTP methods.
///
/// The default value contains only `GET`.
#[derive(Debug, Clone, PartialEq)]
pub struct Methods(IndexSet<Method>);

impl Default for Methods {
    fn default() -> Self {
        Methods(indexset! { Method::GET })
    }
}

impl Methods {
    /// Creates a set from a sequence of method names.
    ///
    /// Each name is converted to uppercase before being parsed, so `"get"` and
    /// `"GET"` denote the same method.
    pub fn from_names<I>(names: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| parse_method(name.as_ref()))
            .collect()
    }

    /// Returns an iterator over the methods, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Method> + '_ {
        self.0.iter()
    }

    /// Returns `true` if the set contains the specified method.
    pub fn contains(&self, method: &Method) -> bool {
        self.0.contains(method)
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub(crate) fn parse_method(name: &str) -> Result<Method> {
    let upper = name.to_ascii_uppercase();
    Method::from_bytes(upper.as_bytes()).map_err(|_| Error::invalid_method(name))
}

impl From<Method> for Methods {
    fn from(method: Method) -> Self {
        Methods(indexset! { method })
    }
}

impl<'a> From<&'a Method> for Methods {
    fn from(method: &'a Method) -> Self {
        Methods::from(method.clone())
    }
}

impl From<Vec<Method>> for Methods {
    fn from(methods: Vec<Method>) -> Self {
        methods.into_iter().collect()
    }
}

impl<'a> From<&'a [Method]> for Methods {
    fn from(methods: &'a [Method]) -> Self {
        methods.iter().cloned().collect()
    }
}

impl FromIterator<Method> for Methods {
    fn from_iter<I: IntoIterator<Item = Method>>(iter: I) -> Self {
        Methods(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Methods {
    type Item = &'a Method;
    type IntoIter = indexmap::set::Iter<'a, Method>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Methods {
    type Err = Error;

    /// Parses a single method name, e.g. `"post"`.
    fn from_str(s: &str) -> Result<Self> {
        parse_method(s).map(Methods::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn default_is_get() {
        let methods = Methods::default();
        assert_eq!(methods.len(), 1);
        assert!(methods.contains(&Method::GET));
    }

    #[test]
    fn parse_uppercases_the_name() {
        let methods: Methods = "post".parse().unwrap();
        assert_eq!(methods, Methods::from(Method::POST));
    }

    #[test]
    fn from_names_keeps_order_and_dedups() {
        let methods = Methods::from_names(&["put", "GET", "Put"]).unwrap();
        assert_eq!(
            methods.iter().cloned().collect::<Vec<_>>(),
            vec![Method::PUT, Method::GET]
        );
    }

    #[test]
    fn extension_method() {
        let methods: Methods = "purge".parse().unwrap();
        assert_eq!(methods.iter().next().map(Method::as_str), Some("PURGE"));
    }

    #[test]
    fn invalid_method_name() {
        let err = "not a method".parse::<Methods>().unwrap_err();
        assert_eq!(
            *err.kind(),
            ErrorKind::InvalidMethod {
                method: "not a method".into()
            }
        );
    }
}
