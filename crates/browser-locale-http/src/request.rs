use crate::HeaderMapExt;
use browser_locale::{LocaleNegotiator, NegotiatorConfig, error::Result};
use http::{HeaderMap, Request, request::Parts};

/// Locale negotiation for HTTP requests.
pub trait RequestLocale {
    /// Returns a reference to the request headers.
    fn header_map(&self) -> &HeaderMap;

    /// Creates a locale negotiator from the `accept-language` header.
    #[inline]
    fn locale_negotiator(&self) -> Result<LocaleNegotiator> {
        self.header_map().locale_negotiator()
    }

    /// Negotiates the locale with the supported locales of the config.
    ///
    /// The default locale of the config is used when the `accept-language` header
    /// is missing or none of its locales is supported.
    fn negotiate_locale(&self, config: &NegotiatorConfig) -> Option<String> {
        match self.header_map().accept_language() {
            Ok(accept) => config.negotiate(accept),
            Err(err) => {
                tracing::debug!(default = config.default_locale(), "{err}");
                config.default_locale().map(|locale| locale.to_owned())
            }
        }
    }
}

impl<B> RequestLocale for Request<B> {
    #[inline]
    fn header_map(&self) -> &HeaderMap {
        self.headers()
    }
}

impl RequestLocale for Parts {
    #[inline]
    fn header_map(&self) -> &HeaderMap {
        &self.headers
    }
}
