//! The error type used throughout this crate.
//!
//! Route registration and lookup never produce an error: a missed lookup is
//! reported as `None`. The errors defined here come from the conversions
//! around the router, such as parsing method names or rendering a URL from
//! a named route.

use failure::Fail;
use std::fmt;

/// A type alias of `Result<T, E>` whose error type is restricted to `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// An error type which will be thrown from the conversions provided by this crate.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.kind.cause()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl Error {
    pub(crate) fn invalid_method(method: impl Into<String>) -> Self {
        ErrorKind::InvalidMethod {
            method: method.into(),
        }
        .into()
    }

    pub(crate) fn unknown_name(name: impl Into<String>) -> Self {
        ErrorKind::UnknownName { name: name.into() }.into()
    }

    pub(crate) fn missing_param(name: impl Into<String>, param: impl Into<String>) -> Self {
        ErrorKind::MissingParam {
            name: name.into(),
            param: param.into(),
        }
        .into()
    }

    pub(crate) fn invalid_param(
        name: impl Into<String>,
        param: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        ErrorKind::InvalidParam {
            name: name.into(),
            param: param.into(),
            value: value.into(),
        }
        .into()
    }

    /// Returns the reference to the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consumes itself and returns the kind of this error.
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }
}

/// The kinds of errors.
#[derive(Debug, Fail, PartialEq)]
pub enum ErrorKind {
    /// The string is not a valid HTTP method token.
    #[fail(display = "invalid HTTP method: {:?}", method)]
    InvalidMethod {
        /// The rejected method name.
        method: String,
    },

    /// No route has been registered under the name.
    #[fail(display = "no route is registered with the name {:?}", name)]
    UnknownName {
        /// The requested route name.
        name: String,
    },

    /// A value for a parameter of the named route was not supplied.
    #[fail(display = "missing the value of parameter {:?} for route {:?}", param, name)]
    MissingParam {
        /// The route name.
        name: String,
        /// The name of the parameter without a value.
        param: String,
    },

    /// The value supplied for a parameter would not be captured back as a
    /// single segment.
    #[fail(
        display = "invalid value {:?} of parameter {:?} for route {:?}",
        value, param, name
    )]
    InvalidParam {
        /// The route name.
        name: String,
        /// The name of the parameter.
        param: String,
        /// The rejected value.
        value: String,
    },
}
