/// Weight assigned to a locale whose quality value is missing or unusable.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Parses the quality parameter of a weighted locale, typically something like `q=0.8`.
///
/// The leading run of `;`, `q` and `=` characters is stripped, then the longest
/// decimal prefix of the remainder is read as the number, so `q=0.5;x` gives `0.5`.
/// Returns `None` if there is no such prefix, or if the number is zero, negative
/// or non-finite. In particular, `q=0` yields `None` and the caller falls back
/// to [`DEFAULT_WEIGHT`].
pub fn parse_quality(quality: &str) -> Option<f64> {
    let remainder = quality.trim_start_matches([';', 'q', '=']).trim_start();
    decimal_prefix(remainder)
        .parse::<f64>()
        .ok()
        .filter(|weight| weight.is_finite() && *weight > 0.0)
}

/// Returns the longest prefix of the form `[+-]digits[.digits][(e|E)[+-]digits]`.
fn decimal_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digits_from(end + 1 + sign);
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }
    &s[..end]
}

/// Parses a weighted locale segment into the locale tag and its weight.
///
/// The tag is the text before the first `;` and is kept verbatim.
/// Anything after the second `;` is ignored.
///
/// ```rust
/// use browser_locale::parse_weighted_locale;
///
/// assert_eq!(parse_weighted_locale("fr-FR;q=0.8"), ("fr-FR", 0.8));
/// assert_eq!(parse_weighted_locale("en"), ("en", 1.0));
/// assert_eq!(parse_weighted_locale("en;q=0"), ("en", 1.0));
/// ```
pub fn parse_weighted_locale(segment: &str) -> (&str, f64) {
    let mut pieces = segment.split(';');
    let locale = pieces.next().unwrap_or_default();
    let weight = pieces
        .next()
        .and_then(parse_quality)
        .unwrap_or(DEFAULT_WEIGHT);
    (locale, weight)
}
