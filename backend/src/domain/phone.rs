//! Russian phone number normalisation.
//!
//! Accepts the usual ways people type a mobile number (`8 999 …`, `+7 (999) …`,
//! `7999…`) and renders the canonical display form `+7 (XXX) XXX-XX-XX`.

/// Number of subscriber digits kept after the country/trunk prefix.
const SUBSCRIBER_DIGITS: usize = 10;

/// Normalise `raw` to `+7 (XXX) XXX-XX-XX`, or `None` when it is not a
/// recognisable Russian number.
///
/// Everything except digits and a leading `+` is discarded first, so spaces,
/// brackets and dashes never matter.
///
/// # Examples
/// ```
/// use userdesk::domain::normalize_phone;
///
/// assert_eq!(
///     normalize_phone("8(999)123-45-67").as_deref(),
///     Some("+7 (999) 123-45-67")
/// );
/// assert_eq!(normalize_phone("123"), None);
/// ```
#[must_use]
pub fn normalize_phone(raw: &str) -> Option<String> {
    let cleaned = strip_formatting(raw);
    let subscriber = subscriber_digits(&cleaned)?;
    format_canonical(subscriber)
}

fn strip_formatting(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_digit() || (ch == '+' && cleaned.is_empty()) {
            cleaned.push(ch);
        }
    }
    cleaned
}

fn subscriber_digits(cleaned: &str) -> Option<&str> {
    let rest = if let Some(rest) = cleaned.strip_prefix("+7") {
        rest
    } else if let Some(rest) = cleaned.strip_prefix('8') {
        rest
    } else {
        cleaned.strip_prefix('7')?
    };
    (rest.len() == SUBSCRIBER_DIGITS && rest.bytes().all(|b| b.is_ascii_digit())).then_some(rest)
}

fn format_canonical(digits: &str) -> Option<String> {
    let area = digits.get(0..3)?;
    let exchange = digits.get(3..6)?;
    let first_pair = digits.get(6..8)?;
    let second_pair = digits.get(8..10)?;
    Some(format!("+7 ({area}) {exchange}-{first_pair}-{second_pair}"))
}
