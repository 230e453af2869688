//! A URL router built on a segment-wise trie.
//!
//! Route patterns are `/`-separated paths whose segments are either literals
//! (`users`), named parameters (`{id}`) or a trailing catch-all (`*`). At each
//! level of the trie a literal segment is preferred over the parameters,
//! which are tried in registration order, and the catch-all comes last. When
//! a branch fails deeper in the trie the search backtracks to the next
//! candidate.
//!
//! The router maps a pair of path and HTTP method to an opaque handler value
//! and the captured parameters. Routes may also be given a name, which can be
//! resolved back to its pattern when building links or redirect targets.

#![doc(html_root_url = "https://docs.rs/tsukuyomi-router/0.1.0-dev")]
#![warn(
    missing_docs,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2018_compatibility,
    unused
)]

pub mod config;
pub mod error;
pub mod method;
mod recognizer;
pub mod reverse;
pub mod router;

#[doc(inline)]
pub use crate::config::Config;

#[doc(inline)]
pub use crate::error::{Error, ErrorKind, Result};

#[doc(inline)]
pub use crate::method::Methods;

#[doc(inline)]
pub use crate::recognizer::Captures;

#[doc(inline)]
pub use crate::reverse::ReverseIndex;

#[doc(inline)]
pub use crate::router::{Match, Route, Router};
