use browser_locale::{
    LocaleNegotiator,
    error::{ErrorKind, Result},
    warn,
};
use http::header::{ACCEPT_LANGUAGE, HeaderMap};

/// Extension trait for [`HeaderMap`](http::HeaderMap).
pub trait HeaderMapExt {
    /// Extracts the string corresponding to the key.
    fn get_str(&self, key: &str) -> Option<&str>;

    /// Extracts the raw `accept-language` header value.
    ///
    /// It is an error if the header is missing or is not visible ASCII.
    fn accept_language(&self) -> Result<&str>;

    /// Creates a locale negotiator from the `accept-language` header.
    fn locale_negotiator(&self) -> Result<LocaleNegotiator>;
}

impl HeaderMapExt for HeaderMap {
    #[inline]
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.to_str().ok())
    }

    fn accept_language(&self) -> Result<&str> {
        let header_value = self
            .get(ACCEPT_LANGUAGE)
            .ok_or_else(|| {
                warn!(
                    ErrorKind::MissingAcceptLanguage,
                    "the `accept-language` header is missing"
                )
            })?;
        header_value.to_str().map_err(|err| {
            warn!(
                ErrorKind::InvalidAcceptLanguage,
                source = err,
                "invalid `accept-language` header value"
            )
        })
    }

    #[inline]
    fn locale_negotiator(&self) -> Result<LocaleNegotiator> {
        self.accept_language().map(LocaleNegotiator::new)
    }
}
