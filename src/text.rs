//! Badge text helpers: metric abbreviation, star ratings, title casing and
//! URL component encoding.

use lazy_static::lazy_static;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};

/// Message rendered for a counter the upstream did not return.
pub const UNDEFINED_MESSAGE: &str = "undefined";

const METRIC_PREFIXES: [&str; 8] = ["k", "M", "G", "T", "P", "E", "Z", "Y"];

/// Characters left untouched when embedding an id in a link.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w\S*").expect("word pattern is valid");
}

/// Abbreviate a count with a metric prefix (`1586` -> `1.6k`).
///
/// An absent counter renders as [`UNDEFINED_MESSAGE`].
pub fn metric(value: Option<f64>) -> String {
    let Some(n) = value else {
        return UNDEFINED_MESSAGE.to_string();
    };
    let abs = n.abs();
    let sign = if n < 0.0 { "-" } else { "" };

    for (i, prefix) in METRIC_PREFIXES.iter().enumerate().rev() {
        let limit = 1000f64.powi(i as i32 + 1);
        if abs < limit {
            continue;
        }

        let scaled = abs / limit;
        if scaled < 10.0 {
            let one_decimal = fixed_one(scaled);
            if !one_decimal.ends_with('0') {
                return format!("{}{}{}", sign, one_decimal, prefix);
            }
        }

        let rounded = scaled.round();
        if rounded < 1000.0 {
            return format!("{}{}{}", sign, rounded, prefix);
        }
        return match METRIC_PREFIXES.get(i + 1) {
            Some(next) => format!("{}1{}", sign, next),
            None => format!("{}{}{}", sign, rounded, prefix),
        };
    }

    format!("{}", n)
}

/// One decimal place, exact ties rounded up (`1.25` -> `1.3`).
///
/// `{:.1}` alone rounds ties to even.
pub fn fixed_one(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// Render an average out of five as star glyphs (`3.5` -> `★★★½☆`).
pub fn star_rating(rating: f64) -> String {
    const MAX: usize = 5;

    let floored = rating.floor().max(0.0);
    let mut stars = "★".repeat((floored as usize).min(MAX));

    let decimal = rating - floored;
    if decimal >= 0.875 {
        stars.push('★');
    } else if decimal >= 0.625 {
        stars.push('¾');
    } else if decimal >= 0.375 {
        stars.push('½');
    } else if decimal >= 0.125 {
        stars.push('¼');
    }

    let len = stars.chars().count();
    if len < MAX {
        stars.push_str(&"☆".repeat(MAX - len));
    }
    stars
}

/// Upper-case the first character of each word and lower-case the rest.
pub fn title_case(input: &str) -> String {
    WORD_RE
        .replace_all(input, |caps: &Captures| {
            let word = &caps[0];
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .into_owned()
}

/// Percent-encode an id for use as a single URL path component.
pub fn encode_component(id: &str) -> String {
    utf8_percent_encode(id, COMPONENT).to_string()
}
