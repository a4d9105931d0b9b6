//! Phone-number formatting and country detection.
//!
//! The auth screen works on a single free-form input: the user types (or
//! pastes) anything, the country is re-detected from the dial code, and the
//! national part is re-grouped per the country's pattern. Any number must be
//! accepted; formatting is advisory and never rejects digits.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCode {
    /// ISO 3166-1 alpha-2, e.g. "PH".
    pub iso2: String,
    pub name: String,
    /// Dial code without the leading "+", e.g. "63".
    pub country_code: String,
    /// Grouping patterns for the national part; `X` marks a digit slot.
    /// The first pattern is the one used for formatting.
    #[serde(default)]
    pub patterns: Vec<String>,
}

fn country(iso2: &str, name: &str, code: &str, pattern: Option<&str>) -> CountryCode {
    CountryCode {
        iso2: iso2.to_string(),
        name: name.to_string(),
        country_code: code.to_string(),
        patterns: pattern.map(|p| vec![p.to_string()]).unwrap_or_default(),
    }
}

/// The builtin country table used when the upstream country list has not
/// loaded yet. Order matters for shared dial codes: the first match wins.
pub static BUILTIN_COUNTRIES: Lazy<Vec<CountryCode>> = Lazy::new(|| {
    vec![
        country("US", "United States", "1", Some("XXX XXX XXXX")),
        country("CA", "Canada", "1", Some("XXX XXX XXXX")),
        country("BS", "Bahamas", "1242", Some("XXX XXXX")),
        country("GB", "United Kingdom", "44", Some("XXXX XXXXXX")),
        country("DE", "Germany", "49", Some("XXX XXXXXXXX")),
        country("FR", "France", "33", Some("X XX XX XX XX")),
        country("ES", "Spain", "34", Some("XXX XXX XXX")),
        country("IT", "Italy", "39", Some("XXX XXX XXXX")),
        country("RU", "Russia", "7", Some("XXX XXX XX XX")),
        country("KZ", "Kazakhstan", "7", Some("XXX XXX XX XX")),
        country("PH", "Philippines", "63", Some("XXX XXX XXXX")),
        country("IN", "India", "91", Some("XXXXX XXXXX")),
        country("CN", "China", "86", Some("XXX XXXX XXXX")),
        country("JP", "Japan", "81", Some("XX XXXX XXXX")),
        country("KR", "South Korea", "82", Some("XX XXXX XXXX")),
        country("BR", "Brazil", "55", Some("XX XXXXX XXXX")),
        country("MX", "Mexico", "52", Some("XX XXXX XXXX")),
        country("AU", "Australia", "61", Some("XXX XXX XXX")),
        country("NG", "Nigeria", "234", Some("XXX XXX XXXX")),
        country("AE", "United Arab Emirates", "971", Some("XX XXX XXXX")),
        country("SG", "Singapore", "65", Some("XXXX XXXX")),
        country("ID", "Indonesia", "62", Some("XXX XXX XXX")),
        country("UA", "Ukraine", "380", Some("XX XXX XX XX")),
        country("TR", "Turkey", "90", Some("XXX XXX XXXX")),
        country("EG", "Egypt", "20", Some("XXX XXX XXXX")),
    ]
});

pub fn builtin_countries() -> &'static [CountryCode] {
    &BUILTIN_COUNTRIES
}

/// Keep only ASCII digits.
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// All countries sharing an ISO code (the upstream list can carry several
/// entries per country, one per dial-code pattern).
pub fn countries_by_iso<'a>(countries: &'a [CountryCode], iso2: &str) -> Vec<&'a CountryCode> {
    countries
        .iter()
        .filter(|c| c.iso2.eq_ignore_ascii_case(iso2))
        .collect()
}

/// Detect the country from a full number by longest dial-code prefix.
/// Ties go to the earlier entry in the list.
pub fn country_from_phone_number<'a>(
    countries: &'a [CountryCode],
    input: &str,
) -> Option<&'a CountryCode> {
    let digits = strip_non_digits(input);
    if digits.is_empty() {
        return None;
    }
    let mut best: Option<&CountryCode> = None;
    for candidate in countries
        .iter()
        .filter(|c| digits.starts_with(c.country_code.as_str()))
    {
        let longer = best.map_or(true, |b| candidate.country_code.len() > b.country_code.len());
        if longer {
            best = Some(candidate);
        }
    }
    best
}

/// Format the national part of `input` against the country's first pattern.
///
/// The dial code is stripped when present, then digits are poured into the
/// pattern's `X` slots. Digits beyond the pattern are appended unformatted;
/// without a country (or a pattern) the bare digit string is returned.
pub fn format_phone_number(input: &str, country: Option<&CountryCode>) -> String {
    let digits = strip_non_digits(input);
    let Some(country) = country else {
        return digits;
    };
    let national = digits
        .strip_prefix(country.country_code.as_str())
        .unwrap_or(digits.as_str());
    let Some(pattern) = country.patterns.first() else {
        return national.to_string();
    };

    let mut out = String::new();
    let mut rest = national.chars();
    for slot in pattern.chars() {
        if slot == 'X' {
            match rest.next() {
                Some(d) => out.push(d),
                None => break,
            }
        } else if rest.as_str().is_empty() {
            break;
        } else {
            out.push(slot);
        }
    }
    out.extend(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_country_by_dial_code() {
        let countries = builtin_countries();
        assert_eq!(
            country_from_phone_number(countries, "+63 917 894 4123").map(|c| c.iso2.as_str()),
            Some("PH")
        );
        assert_eq!(
            country_from_phone_number(countries, "447911123456").map(|c| c.iso2.as_str()),
            Some("GB")
        );
        assert_eq!(country_from_phone_number(countries, ""), None);
        assert_eq!(country_from_phone_number(countries, "+999123"), None);
    }

    #[test]
    fn longest_prefix_wins_for_shared_codes() {
        let countries = builtin_countries();
        // +1242 is the Bahamas, not a US number starting with 242.
        assert_eq!(
            country_from_phone_number(countries, "+1242 555 0199").map(|c| c.iso2.as_str()),
            Some("BS")
        );
        // Plain +1 falls back to the first entry sharing the code.
        assert_eq!(
            country_from_phone_number(countries, "+1 415 555 0199").map(|c| c.iso2.as_str()),
            Some("US")
        );
    }

    #[test]
    fn formats_against_country_pattern() {
        let countries = builtin_countries();
        let ph = country_from_phone_number(countries, "+639178944123").unwrap();
        assert_eq!(format_phone_number("+639178944123", Some(ph)), "917 894 4123");
        // Partial input formats as far as it goes.
        assert_eq!(format_phone_number("+63917", Some(ph)), "917");
        assert_eq!(format_phone_number("+639178", Some(ph)), "917 8");
    }

    #[test]
    fn extra_digits_are_kept() {
        let countries = builtin_countries();
        let ph = countries_by_iso(countries, "PH")[0];
        assert_eq!(
            format_phone_number("+63917894412399", Some(ph)),
            "917 894 412399"
        );
    }

    #[test]
    fn no_country_returns_bare_digits() {
        assert_eq!(format_phone_number("+99 (912) 3", None), "999123");
    }

    #[test]
    fn national_input_without_dial_code() {
        let countries = builtin_countries();
        let us = countries_by_iso(countries, "US")[0];
        // No leading dial code: treated as a national number.
        assert_eq!(format_phone_number("4155550199", Some(us)), "415 555 0199");
    }
}
