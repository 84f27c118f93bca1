use once_cell::sync::Lazy;
use regex::Regex;

// Greedy prefix: in "$500,000 - $550,000" the last amount wins.
static PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".*\$([0-9,.]+)(k|m)?.*").expect("price pattern is valid"));

/// Parses a display price such as "$650,000", "$750k" or "$1.2m" into
/// whole dollars.
///
/// Without a unit suffix only the integer part is kept ("$1,234.99" is 1234).
/// With a lowercase "k" or "m" the decimal amount is scaled and any fraction
/// of a dollar is truncated. Uppercase letters are not units, so "$1.15M"
/// reads as 1. Text with no `$` amount ("Contact Agent") gives `None`.
pub fn parse_price_text(text: &str) -> Option<i64> {
    let captures = PRICE_PATTERN.captures(text)?;
    let number = captures.get(1)?.as_str().replace(',', "");
    let scale = match captures.get(2).map(|unit| unit.as_str()) {
        Some("k") => 1_000,
        Some("m") => 1_000_000,
        _ => 1,
    };

    if scale == 1 {
        let whole = number.split('.').next().unwrap_or_default();
        return parse_digits(whole);
    }

    scale_decimal(&number, scale)
}

/// `whole.fraction * scale`, truncated, without going through floats.
fn scale_decimal(number: &str, scale: i64) -> Option<i64> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (number, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.contains('.') {
        return None;
    }

    let whole = if whole.is_empty() { 0 } else { parse_digits(whole)? };
    let mut value = whole.checked_mul(scale)?;

    let mut place = scale;
    for digit in fraction.chars() {
        place /= 10;
        if place == 0 {
            break;
        }
        value = value.checked_add(i64::from(digit.to_digit(10)?) * place)?;
    }

    Some(value)
}

fn parse_digits(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Drops the spaces from a phone number. Nothing else is normalized.
pub fn parse_phone(phone: Option<&str>) -> Option<String> {
    let phone = phone?.replace(' ', "");
    if phone.is_empty() {
        return None;
    }
    Some(phone)
}

// TODO: convert <br/> and other markup to plain text once listings are rendered outside HTML.
pub fn parse_description(description: Option<&str>) -> Option<String> {
    description.filter(|d| !d.is_empty()).map(str::to_string)
}
