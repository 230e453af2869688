//! The lookup of route patterns by name.

use {
    crate::{
        error::{Error, Result},
        recognizer::segment::{segments, SegmentKind, SEPARATOR, WILDCARD},
    },
    indexmap::IndexMap,
    log::debug,
};

/// A mapping from route names to their normalized patterns.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReverseIndex {
    names: IndexMap<String, String>,
}

impl ReverseIndex {
    /// Associates `name` with the normalized `pattern`, replacing any previous entry.
    pub(crate) fn insert(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        let name = name.into();
        let pattern = pattern.into();
        if let Some(old) = self.names.get(&name) {
            debug!("the name {:?} is moved from {:?} to {:?}", name, old, pattern);
        }
        self.names.insert(name, pattern);
    }

    /// Returns the normalized pattern registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    /// Returns an iterator over the pairs of name and pattern, in the order
    /// the names were first registered.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.names
            .iter()
            .map(|(name, pattern)| (name.as_str(), pattern.as_str()))
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Builds a concrete path from the pattern registered under `name`.
    ///
    /// Each `{param}` segment is replaced with the value supplied for `param`,
    /// and a `*` segment with the value supplied under the key `"*"`.
    /// Literal segments are copied as they are. A parameter value containing
    /// `/` is rejected, since it would span several segments; only the
    /// catch-all value may do so.
    pub fn url_for<I, K, V>(&self, name: &str, params: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pattern = self
            .resolve(name)
            .ok_or_else(|| Error::unknown_name(name))?;
        let params: IndexMap<String, String> = params
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned()))
            .collect();

        let mut url = String::with_capacity(pattern.len());
        for token in segments(pattern) {
            url.push(SEPARATOR);
            let key = match SegmentKind::of(token) {
                SegmentKind::Literal => {
                    url.push_str(token);
                    continue;
                }
                SegmentKind::Param(param) => param,
                SegmentKind::Wildcard => WILDCARD,
            };
            let value = params
                .get(key)
                .ok_or_else(|| Error::missing_param(name, key))?;
            if key != WILDCARD && value.contains(SEPARATOR) {
                return Err(Error::invalid_param(name, key, value.as_str()));
            }
            url.push_str(value);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn index() -> ReverseIndex {
        let mut index = ReverseIndex::default();
        index.insert("home", "/");
        index.insert("user", "/users/{id}/");
        index.insert("post", "/users/{id}/posts/{post}/");
        index.insert("static", "/static/*/");
        index
    }

    #[test]
    fn resolve() {
        let index = index();
        assert_eq!(index.resolve("user"), Some("/users/{id}/"));
        assert_eq!(index.resolve("unknown"), None);
    }

    #[test]
    fn last_registration_wins() {
        let mut index = index();
        index.insert("user", "/members/{id}/");
        assert_eq!(index.resolve("user"), Some("/members/{id}/"));
        assert_eq!(index.len(), 4);
        assert_eq!(
            index.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["home", "user", "post", "static"]
        );
    }

    #[test]
    fn url_for_substitutes_params() {
        let index = index();
        assert_eq!(index.url_for("home", Vec::<(&str, &str)>::new()).unwrap(), "/");
        assert_eq!(
            index.url_for("user", vec![("id", "42")]).unwrap(),
            "/users/42/"
        );
        assert_eq!(
            index
                .url_for("post", vec![("post", "7"), ("id", "42")])
                .unwrap(),
            "/users/42/posts/7/"
        );
        assert_eq!(
            index.url_for("static", vec![("*", "css/site.css")]).unwrap(),
            "/static/css/site.css/"
        );
    }

    #[test]
    fn url_for_rejects_separator_in_param() {
        let index = index();
        assert_eq!(
            index
                .url_for("user", vec![("id", "a/b")])
                .unwrap_err()
                .into_kind(),
            ErrorKind::InvalidParam {
                name: "user".into(),
                param: "id".into(),
                value: "a/b".into(),
            }
        );
        assert_eq!(
            index.url_for("static", vec![("*", "a/b")]).unwrap(),
            "/static/a/b/"
        );
    }

    #[test]
    fn url_for_errors() {
        let index = index();
        assert_eq!(
            *index.url_for("nope", vec![("id", "1")]).unwrap_err().kind(),
            ErrorKind::UnknownName {
                name: "nope".into()
            }
        );
        assert_eq!(
            index
                .url_for("post", vec![("id", "1")])
                .unwrap_err()
                .into_kind(),
            ErrorKind::MissingParam {
                name: "post".into(),
                param: "post".into(),
            }
        );
    }
}
