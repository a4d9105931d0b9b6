//! Phone-number sign-in screen state.
//!
//! Mirrors the behavior of the auth form: one free-form input holding the
//! full number, country auto-detection from the dial code, and a submit
//! gate on the digit count. Deep links can prefill the number and submit
//! as soon as it is complete for the detected country.

use vega_core::{
    country_from_phone_number, countries_by_iso, format_phone_number, strip_non_digits,
    CountryCode,
};

/// Minimum digit count before the number can be submitted.
pub const MIN_NUMBER_LENGTH: usize = 7;

#[derive(Debug, Clone)]
pub struct AuthPhoneScreen {
    countries: Vec<CountryCode>,
    country: Option<CountryCode>,
    /// National part, already formatted for display.
    phone_number: String,
    is_touched: bool,
    remember_me: bool,
    is_loading: bool,
    error: Option<String>,
}

impl AuthPhoneScreen {
    pub fn new(countries: Vec<CountryCode>) -> Self {
        AuthPhoneScreen {
            countries,
            country: None,
            phone_number: String::new(),
            is_touched: false,
            remember_me: false,
            is_loading: false,
            error: None,
        }
    }

    pub fn country(&self) -> Option<&CountryCode> {
        self.country.as_ref()
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The displayed value: `+CC national` once a country is selected.
    pub fn full_number(&self) -> String {
        match &self.country {
            Some(c) => format!("+{} {}", c.country_code, self.phone_number),
            None => self.phone_number.clone(),
        }
    }

    pub fn can_submit(&self) -> bool {
        strip_non_digits(&self.full_number()).len() >= MIN_NUMBER_LENGTH
    }

    /// Apply the nearest-country suggestion. Only takes effect while the
    /// user has not touched the input or picked a country themselves.
    pub fn suggest_nearest_country(&mut self, iso2: &str) {
        if self.country.is_some() || self.is_touched {
            return;
        }
        if let Some(first) = countries_by_iso(&self.countries, iso2).first() {
            self.country = Some((*first).clone());
        }
    }

    /// Explicit country selection resets the national part.
    pub fn select_country(&mut self, country: CountryCode) {
        self.country = Some(country);
        self.phone_number.clear();
        self.is_touched = true;
    }

    pub fn set_remember_me(&mut self, value: bool) {
        self.remember_me = value;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.is_loading = false;
    }

    /// User typed or pasted into the input. Clears any auth error and
    /// re-detects the country from the new value.
    pub fn input_full_number(&mut self, value: &str) {
        self.error = None;
        self.is_touched = true;
        self.parse_full_number(value);
    }

    /// Prefill from a deep link (`phnumber` query param): parse without
    /// marking the input touched, then submit if the number already
    /// matches the detected country's pattern length.
    pub fn prefill(&mut self, phone: &str) -> Option<String> {
        self.parse_full_number(phone);
        self.submit_if_complete()
    }

    fn parse_full_number(&mut self, value: &str) {
        if value.is_empty() {
            self.phone_number.clear();
        }

        let suggested = country_from_phone_number(&self.countries, value).cloned();

        // Any phone number is allowed; the selection only moves when the
        // dial code says so, or away entirely when nothing matches.
        let selected = match (&self.country, &suggested) {
            (None, _) => suggested.clone(),
            (Some(current), Some(s)) if s.iso2 != current.iso2 => suggested.clone(),
            (Some(_), None) if !value.is_empty() => None,
            (current, _) => current.clone(),
        };

        if self.country != selected {
            self.country = selected.clone();
        }
        self.phone_number = format_phone_number(value, selected.as_ref());
    }

    /// Submit when the national part fills the country's pattern exactly.
    pub fn submit_if_complete(&mut self) -> Option<String> {
        let pattern_len = self
            .country
            .as_ref()
            .and_then(|c| c.patterns.first())
            .map(|p| p.replace(' ', "").len())?;
        let number_len = strip_non_digits(&self.phone_number).len();
        if number_len == pattern_len {
            self.submit()
        } else {
            None
        }
    }

    /// Returns the full number to authenticate with, or `None` when the
    /// form is not submittable. Sets the loading flag on success; a
    /// request already in flight blocks re-submission.
    pub fn submit(&mut self) -> Option<String> {
        if self.is_loading || !self.can_submit() {
            return None;
        }
        self.is_loading = true;
        Some(self.full_number())
    }

    /// The auth request settled; drop the loading flag.
    pub fn finish_loading(&mut self) {
        self.is_loading = false;
    }
}
