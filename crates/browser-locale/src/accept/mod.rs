//! Weighted locale preferences parsed from an `Accept-Language` value.

use indexmap::IndexMap;
use serde::Serialize;
use std::{convert::Infallible, fmt, iter, str::FromStr};

mod quality;

pub use quality::{DEFAULT_WEIGHT, parse_quality, parse_weighted_locale};

/// Locale tags with their weights, sorted by weight in descending order.
///
/// Tags are unique. Locales with equal weights keep the order in which
/// they first appeared in the parsed value.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AcceptedLocales {
    /// Locale tags and weights.
    locales: IndexMap<String, f64>,
}

/// Iterator over the accepted locales and their weights.
pub type LocaleIter<'a> = iter::Map<
    indexmap::map::Iter<'a, String, f64>,
    fn((&'a String, &'a f64)) -> (&'a str, f64),
>;

impl AcceptedLocales {
    /// Parses the comma-separated list of weighted locales.
    ///
    /// Parsing never fails. A tag appearing more than once takes the weight
    /// of its last occurrence. An empty value yields the single entry `("", 1.0)`.
    pub fn parse(accept: &str) -> Self {
        let mut locales = IndexMap::new();
        for segment in accept.split(',') {
            let (locale, weight) = parse_weighted_locale(segment);
            locales.insert(locale.to_owned(), weight);
        }
        locales.sort_by(|_, a, _, b| b.total_cmp(a));
        tracing::debug!(num_locales = locales.len(), "`{accept}` parsed");
        Self { locales }
    }

    /// Returns an iterator over the locale tags and weights.
    #[inline]
    pub fn iter(&self) -> LocaleIter<'_> {
        self.into_iter()
    }

    /// Returns an iterator over the locale tags.
    #[inline]
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(|locale| locale.as_str())
    }

    /// Returns the number of accepted locales.
    #[inline]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Returns `true` if there are no accepted locales.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Returns the locale with the highest weight.
    #[inline]
    pub fn first(&self) -> Option<(&str, f64)> {
        self.locales
            .first()
            .map(|(locale, &weight)| (locale.as_str(), weight))
    }

    /// Returns `true` if the locale tag is accepted. Tags are compared exactly.
    #[inline]
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Returns the weight of the locale tag.
    #[inline]
    pub fn weight(&self, locale: &str) -> Option<f64> {
        self.locales.get(locale).copied()
    }

    /// Collects the locales into owned pairs.
    pub fn to_vec(&self) -> Vec<(String, f64)> {
        self.iter()
            .map(|(locale, weight)| (locale.to_owned(), weight))
            .collect()
    }
}

impl<'a> IntoIterator for &'a AcceptedLocales {
    type Item = (&'a str, f64);
    type IntoIter = LocaleIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.locales.iter().map(entry as fn(_) -> _)
    }
}

impl PartialEq for AcceptedLocales {
    /// Two lists are equal only if they hold the same locales in the same order.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.locales.iter().eq(other.locales.iter())
    }
}

impl FromStr for AcceptedLocales {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for AcceptedLocales {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (locale, weight)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            if weight == DEFAULT_WEIGHT {
                write!(f, "{locale}")?;
            } else {
                write!(f, "{locale};q={weight}")?;
            }
        }
        Ok(())
    }
}

/// Borrows a map entry as a locale tag and its weight.
#[inline]
fn entry<'a>((locale, weight): (&'a String, &'a f64)) -> (&'a str, f64) {
    (locale.as_str(), *weight)
}

#[cfg(test)]
mod tests {
    use super::AcceptedLocales;

    #[test]
    fn it_sorts_locales_by_weight() {
        let locales = AcceptedLocales::parse("fr,fr-FR;q=0.8,en;q=0.3,en-US;q=0.5");
        assert_eq!(
            locales.iter().collect::<Vec<_>>(),
            vec![("fr", 1.0), ("fr-FR", 0.8), ("en-US", 0.5), ("en", 0.3)]
        );
        assert_eq!(locales.len(), 4);
        assert_eq!(locales.first(), Some(("fr", 1.0)));
        assert_eq!(
            locales.tags().collect::<Vec<_>>(),
            vec!["fr", "fr-FR", "en-US", "en"]
        );
    }

    #[test]
    fn it_keeps_the_order_of_equal_weights() {
        let locales = AcceptedLocales::parse("de;q=0.5,es,it;q=0.5,pt,en;q=0.9");
        assert_eq!(
            locales.iter().collect::<Vec<_>>(),
            vec![
                ("es", 1.0),
                ("pt", 1.0),
                ("en", 0.9),
                ("de", 0.5),
                ("it", 0.5),
            ]
        );
    }

    #[test]
    fn it_compares_locales_in_order() {
        let locales = AcceptedLocales::parse("es,pt");
        assert_eq!(locales, AcceptedLocales::parse("es;q=1,pt"));
        assert_ne!(locales, AcceptedLocales::parse("pt,es"));
        assert_ne!(locales, AcceptedLocales::parse("es,pt;q=0.9"));
        assert_ne!(locales, AcceptedLocales::parse("es"));
    }

    #[test]
    fn it_keeps_the_last_duplicate_weight() {
        let locales = AcceptedLocales::parse("en;q=0.9,en;q=0.2");
        assert_eq!(locales.to_vec(), vec![("en".to_owned(), 0.2)]);

        // The first occurrence decides the position among equal weights.
        let locales = AcceptedLocales::parse("a;q=0.5,b;q=0.5,a;q=0.5");
        assert_eq!(locales.tags().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn it_defaults_zero_weights() {
        let locales = AcceptedLocales::parse("de;q=0.4,en;q=0,fr;q=0.0");
        assert_eq!(locales.weight("en"), Some(1.0));
        assert_eq!(locales.weight("fr"), Some(1.0));
        assert_eq!(locales.first(), Some(("en", 1.0)));
    }

    #[test]
    fn it_parses_an_empty_value() {
        let locales = AcceptedLocales::parse("");
        assert_eq!(locales.len(), 1);
        assert!(locales.contains(""));
        assert_eq!(locales.weight(""), Some(1.0));
    }

    #[test]
    fn it_looks_up_exact_tags() {
        let locales = "fr-FR,EN;q=0.5".parse::<AcceptedLocales>().unwrap();
        assert!(locales.contains("fr-FR"));
        assert!(!locales.contains("fr"));
        assert!(!locales.contains("en"));
        assert_eq!(locales.weight("EN"), Some(0.5));
        assert_eq!(locales.weight("de"), None);
    }

    #[test]
    fn it_formats_and_serializes_locales() {
        let locales = AcceptedLocales::parse("en;q=0.3,fr");
        assert_eq!(locales.to_string(), "fr,en;q=0.3");
        assert_eq!(
            serde_json::to_string(&locales).unwrap(),
            r#"{"fr":1.0,"en":0.3}"#
        );
    }
}
