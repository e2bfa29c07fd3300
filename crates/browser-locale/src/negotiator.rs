use crate::{
    AcceptedLocales,
    error::{ErrorKind, Result},
    warn,
};
use std::{
    convert::Infallible,
    env::{self, VarError},
    str::FromStr,
};

/// CGI-style environment variable holding the `Accept-Language` value.
pub const ACCEPT_LANGUAGE_ENV: &str = "HTTP_ACCEPT_LANGUAGE";

/// Negotiates the locale between the accepted locales of a client
/// and the locales available in an application.
///
/// ```rust
/// use browser_locale::LocaleNegotiator;
///
/// let mut negotiator = LocaleNegotiator::new("fr,fr-FR;q=0.8,en;q=0.3,en-US;q=0.5");
/// assert!(negotiator.accepts("en"));
/// assert_eq!(negotiator.get_weight("en-US"), Some(0.5));
/// assert_eq!(negotiator.among(["en", "fr"]).choose(None), Some("fr"));
/// assert_eq!(negotiator.among(["de", "es"]).choose(Some("es")), Some("es"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleNegotiator {
    /// Locales accepted by the client.
    accepted: AcceptedLocales,
    /// Locales available in the application.
    candidates: Vec<String>,
}

impl LocaleNegotiator {
    /// Creates a new instance from the `Accept-Language` value.
    #[inline]
    pub fn new(accept: &str) -> Self {
        Self {
            accepted: AcceptedLocales::parse(accept),
            candidates: Vec::new(),
        }
    }

    /// Creates a new instance from the supplied value,
    /// falling back to the [`HTTP_ACCEPT_LANGUAGE`](ACCEPT_LANGUAGE_ENV) environment variable.
    pub fn try_new(accept: Option<&str>) -> Result<Self> {
        match accept {
            Some(accept) => Ok(Self::new(accept)),
            None => Self::from_env(),
        }
    }

    /// Creates a new instance from the [`HTTP_ACCEPT_LANGUAGE`](ACCEPT_LANGUAGE_ENV)
    /// environment variable.
    #[inline]
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(ACCEPT_LANGUAGE_ENV)
    }

    /// Creates a new instance from the value of an environment variable.
    /// It is an error if the variable is not present or is not valid unicode.
    pub fn from_env_var(name: &str) -> Result<Self> {
        let accept = env::var(name).map_err(|err| {
            let kind = match err {
                VarError::NotPresent => ErrorKind::MissingAcceptLanguage,
                VarError::NotUnicode(_) => ErrorKind::InvalidAcceptLanguage,
            };
            warn!(kind, source = err, "fail to read the `{name}` environment variable")
        })?;
        Ok(Self::new(&accept))
    }

    /// Returns the accepted locales sorted by weight in descending order.
    #[inline]
    pub fn accepted(&self) -> &AcceptedLocales {
        &self.accepted
    }

    /// Returns `true` if the locale is accepted.
    ///
    /// Tags are compared exactly: `fr-FR` does not imply `fr`.
    #[inline]
    pub fn accepts(&self, locale: &str) -> bool {
        self.accepted.contains(locale)
    }

    /// Returns the weight of an accepted locale.
    #[inline]
    pub fn get_weight(&self, locale: &str) -> Option<f64> {
        self.accepted.weight(locale)
    }

    /// Replaces the locales available in the application.
    pub fn among<T: Into<String>>(&mut self, locales: impl IntoIterator<Item = T>) -> &mut Self {
        self.candidates = locales.into_iter().map(|locale| locale.into()).collect();
        self
    }

    /// Returns the locales available in the application.
    #[inline]
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Chooses the accepted locale with the highest weight among the available ones,
    /// or returns the default.
    pub fn choose<'a>(&'a self, default: Option<&'a str>) -> Option<&'a str> {
        let candidates = &self.candidates;
        let chosen = self
            .accepted
            .tags()
            .find(|&locale| candidates.iter().any(|candidate| candidate == locale));
        match chosen {
            Some(locale) => {
                tracing::debug!(locale, "locale chosen");
                Some(locale)
            }
            None => {
                tracing::debug!(
                    default,
                    num_candidates = candidates.len(),
                    "no acceptable locale"
                );
                default
            }
        }
    }

    /// Chooses the accepted locale with the highest weight among the available ones,
    /// or returns the supplied fallback.
    #[inline]
    pub fn choose_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.choose(Some(fallback)).unwrap_or(fallback)
    }
}

impl From<&str> for LocaleNegotiator {
    #[inline]
    fn from(accept: &str) -> Self {
        Self::new(accept)
    }
}

impl FromStr for LocaleNegotiator {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
