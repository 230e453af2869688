//! The public interface for registering and resolving routes.

use {
    crate::{
        config::Config,
        error::Result,
        method::Methods,
        recognizer::{segment::normalize, Captures, Recognizer},
        reverse::ReverseIndex,
    },
    http::Method,
    log::trace,
};

/// A registration record of a route.
///
/// It is consumed by `Router::add_route` and is not kept afterwards.
#[derive(Debug)]
pub struct Route<T> {
    pattern: String,
    methods: Methods,
    handler: T,
    name: Option<String>,
}

impl<T> Route<T> {
    /// Creates a route which serves `GET` requests to `pattern`.
    pub fn new(pattern: impl Into<String>, handler: T) -> Self {
        Self {
            pattern: pattern.into(),
            methods: Methods::default(),
            handler,
            name: None,
        }
    }

    /// Sets the methods this route is registered under.
    pub fn methods(mut self, methods: impl Into<Methods>) -> Self {
        self.methods = methods.into();
        self
    }

    /// Sets the name used for reverse lookup.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// The result of a successful lookup.
#[derive(Debug)]
pub struct Match<'a, T> {
    /// The handler registered for the path and method.
    pub handler: &'a T,
    /// The parameters captured from the path.
    pub captures: Captures<'a>,
}

/// A URL router.
///
/// Routes are registered while building the application and the router is
/// only read afterwards, so a finished `Router` can be shared between threads
/// (e.g. behind an `Arc`) without any locking.
///
/// # Examples
///
/// ```
/// # use tsukuyomi_router::Router;
/// # use http::Method;
/// let mut router = Router::new();
/// router.add("/users/{id}", Method::GET, "show_user", Some("user"));
/// router.add("/users/{id}", Method::DELETE, "delete_user", None);
///
/// let found = router.recognize("/users/42", &Method::GET).unwrap();
/// assert_eq!(*found.handler, "show_user");
/// assert_eq!(found.captures.get("id"), Some("42"));
///
/// assert_eq!(router.resolve("user"), Some("/users/{id}/"));
/// ```
#[derive(Debug)]
pub struct Router<T> {
    recognizer: Recognizer<T>,
    reverse: ReverseIndex,
    config: Config,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<T> Router<T> {
    /// Creates an empty router with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty router with the specified configuration.
    pub fn with_config(config: Config) -> Self {
        Self {
            recognizer: Recognizer::default(),
            reverse: ReverseIndex::default(),
            config,
        }
    }

    /// Returns the reference to the configuration of this router.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registers a handler for `pattern` under each of `methods`.
    ///
    /// The pattern is a `/`-separated path in which `{name}` captures a
    /// segment and a trailing `*` consumes the rest of the path. A trailing
    /// `/` is always assumed. Registering the same pattern and method again
    /// replaces the previous handler, and reusing a name moves it to the new
    /// pattern.
    ///
    /// `methods` accepts a `Method` or a collection of them. Method names
    /// given as strings are converted first, e.g. `"post".parse::<Methods>()?`
    /// or `Methods::from_names(&["get", "post"])?`.
    pub fn add(
        &mut self,
        pattern: &str,
        methods: impl Into<Methods>,
        handler: T,
        name: Option<&str>,
    ) -> &mut Self {
        let pattern = normalize(pattern);
        self.recognizer.insert(&pattern, &methods.into(), handler);
        if let Some(name) = name {
            self.reverse.insert(name, pattern.into_owned());
        }
        self
    }

    /// Registers a route described by a `Route`.
    pub fn add_route(&mut self, route: Route<T>) -> &mut Self {
        let Route {
            pattern,
            methods,
            handler,
            name,
        } = route;
        self.add(&pattern, methods, handler, name.as_ref().map(String::as_str))
    }

    /// Finds the handler registered for `path` and `method`.
    ///
    /// Returns `None` when no route matches; this does not tell an unknown
    /// path from a disallowed method (see `allowed_methods`).
    pub fn recognize<'a>(&'a self, path: &'a str, method: &Method) -> Option<Match<'a, T>> {
        let found = self.recognizer.recognize(path, method).or_else(|| {
            if self.config.fallback_head && *method == Method::HEAD {
                trace!("fallback to GET for HEAD {:?}", path);
                self.recognizer.recognize(path, &Method::GET)
            } else {
                None
            }
        });
        found.map(|(handler, captures)| Match { handler, captures })
    }

    /// Returns the methods for which `recognize` succeeds with `path`.
    ///
    /// An empty result means that no route matches the path at all.
    ///
    /// When `fallback_head` is enabled and `GET` is allowed, `HEAD` is
    /// reported as well.
    pub fn allowed_methods(&self, path: &str) -> Vec<&Method> {
        static HEAD: Method = Method::HEAD;

        let mut methods = self.recognizer.allowed_methods(path);
        if self.config.fallback_head
            && methods.contains(&&Method::GET)
            && !methods.contains(&&Method::HEAD)
        {
            methods.push(&HEAD);
        }
        methods
    }

    /// Returns the normalized pattern registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.reverse.resolve(name)
    }

    /// Builds a concrete path for the route registered under `name`.
    ///
    /// See `ReverseIndex::url_for` for how the parameters are substituted.
    pub fn url_for<I, K, V>(&self, name: &str, params: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.reverse.url_for(name, params)
    }

    /// Returns the reference to the index of named routes.
    pub fn names(&self) -> &ReverseIndex {
        &self.reverse
    }
}
