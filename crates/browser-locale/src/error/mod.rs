//! Errors raised while resolving the `Accept-Language` value or the negotiator config.
//!
//! Parsing the value itself never fails: only the lookups around it do.
use crate::{BoxError, SharedString};
use std::{error, fmt, iter};

#[doc(hidden)]
pub use tracing as __tracing;

/// A specialized `Result` type for locale negotiation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The category of an [`Error`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No `Accept-Language` value is available from the request or the environment.
    MissingAcceptLanguage,
    /// The `Accept-Language` value is present but is not readable as text.
    InvalidAcceptLanguage,
    /// The negotiator config can not be read or parsed.
    InvalidConfig,
}

impl ErrorKind {
    /// Returns `self` as `&'static str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingAcceptLanguage => "missing_accept_language",
            Self::InvalidAcceptLanguage => "invalid_accept_language",
            Self::InvalidConfig => "invalid_config",
        }
    }
}

impl fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error raised around locale negotiation, with its kind and an optional cause.
#[derive(Debug)]
pub struct Error {
    /// Error kind.
    kind: ErrorKind,
    /// Error message.
    message: SharedString,
    /// Underlying cause.
    source: Option<BoxError>,
}

impl Error {
    /// Creates a new instance of the kind with the supplied message.
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<SharedString>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Returns `self` with the underlying cause attached.
    #[inline]
    pub fn caused_by(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Creates an error for a missing `Accept-Language` value.
    #[inline]
    pub fn missing_accept_language(message: impl Into<SharedString>) -> Self {
        Self::new(ErrorKind::MissingAcceptLanguage, message)
    }

    /// Creates an error for an `Accept-Language` value which is not readable as text.
    #[inline]
    pub fn invalid_accept_language(message: impl Into<SharedString>) -> Self {
        Self::new(ErrorKind::InvalidAcceptLanguage, message)
    }

    /// Creates an error for a config which can not be read or parsed.
    #[inline]
    pub fn invalid_config(message: impl Into<SharedString>) -> Self {
        Self::new(ErrorKind::InvalidConfig, message)
    }

    /// Returns the error kind.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if no `Accept-Language` value was available.
    #[inline]
    pub fn is_missing_accept_language(&self) -> bool {
        self.kind == ErrorKind::MissingAcceptLanguage
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns an iterator over the chain of underlying causes, nearest first.
    pub fn sources(&self) -> impl Iterator<Item = &(dyn error::Error + 'static)> {
        iter::successors(error::Error::source(self), |err| err.source())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = &self.message;
        match &self.source {
            Some(source) => write!(f, "{message}: {source}"),
            None => write!(f, "{message}"),
        }
    }
}

impl error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn error::Error + 'static))
    }
}

/// Creates an [`Error`] of the kind and emits a `WARN` event for it.
///
/// ```rust
/// use browser_locale::{error::ErrorKind, warn};
///
/// let err = warn!(ErrorKind::MissingAcceptLanguage, "`{}` missing", "accept-language");
/// assert_eq!(err.message(), "`accept-language` missing");
///
/// let cause = std::env::VarError::NotPresent;
/// let err = warn!(ErrorKind::MissingAcceptLanguage, source = cause, "no value");
/// assert!(err.sources().next().is_some());
/// ```
#[macro_export]
macro_rules! warn {
    ($kind:expr, source = $source:expr, $($arg:tt)+) => {{
        let source = $source;
        let message = ::std::format!($($arg)+);
        let kind: $crate::error::ErrorKind = $kind;
        $crate::error::__tracing::warn!(kind = kind.as_str(), "{message}: {source}");
        $crate::error::Error::new(kind, message).caused_by(source)
    }};
    ($kind:expr, $($arg:tt)+) => {{
        let message = ::std::format!($($arg)+);
        let kind: $crate::error::ErrorKind = $kind;
        $crate::error::__tracing::warn!(kind = kind.as_str(), "{message}");
        $crate::error::Error::new(kind, message)
    }};
}
