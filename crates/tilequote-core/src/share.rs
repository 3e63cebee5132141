//! Deep links for sending a quote message.
//!
//! Builds the URLs only; opening them is the caller's job.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Country prefix used when none is configured.
pub const DEFAULT_COUNTRY_CODE: &str = "+44";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a component the way browsers' `encodeURIComponent` does:
/// spaces become `%20`, not `+`.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Normalises a phone number to international form.
///
/// Keeps digits and `+`. A leading `0` is swapped for `country_code`, any
/// other number without a `+` gets it prefixed, and numbers already starting
/// with `+` are left alone.
///
/// ## Example
/// ```rust
/// use tilequote_core::share::normalize_phone;
///
/// assert_eq!(normalize_phone("07700 900123", "+44"), "+447700900123");
/// assert_eq!(normalize_phone("+353 87 123", "+44"), "+35387123");
/// assert_eq!(normalize_phone("", "+44"), "");
/// ```
pub fn normalize_phone(raw: &str, country_code: &str) -> String {
    let phone: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if let Some(national) = phone.strip_prefix('0') {
        format!("{country_code}{national}")
    } else if !phone.is_empty() && !phone.starts_with('+') {
        format!("{country_code}{phone}")
    } else {
        phone
    }
}

/// `https://wa.me/<phone>?text=<message>`. A blank phone opens the contact picker.
pub fn whatsapp_link(phone: &str, message: &str, country_code: &str) -> String {
    let phone = normalize_phone(phone, country_code);
    format!("https://wa.me/{phone}?text={}", encode_component(message))
}

/// `mailto:` link with a "Tiling Quote" subject naming the customer when known.
pub fn email_link(email: &str, customer_name: Option<&str>, message: &str) -> String {
    let subject = match customer_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Tiling Quote for {name}"),
        None => "Tiling Quote".to_string(),
    };
    format!(
        "mailto:{}?subject={}&body={}",
        email.trim(),
        encode_component(&subject),
        encode_component(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("07700 900123", "+44"), "+447700900123");
        assert_eq!(normalize_phone("7700-900-123", "+44"), "+447700900123");
        assert_eq!(normalize_phone("+44 7700 900123", "+44"), "+447700900123");
        assert_eq!(normalize_phone("(0)", "+44"), "+44");
        assert_eq!(normalize_phone("n/a", "+44"), "");
        assert_eq!(normalize_phone("0871", "+353"), "+353871");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("£5 & more"), "%C2%A35%20%26%20more");
        assert_eq!(encode_component("line1\nline2"), "line1%0Aline2");
        assert_eq!(encode_component("1+1"), "1%2B1");
    }

    #[test]
    fn test_encode_component_leaves_unreserved_marks() {
        assert_eq!(encode_component("VAT (20%)"), "VAT%20(20%25)");
        assert_eq!(encode_component("it's ~ok!"), "it's%20~ok!");
        assert_eq!(encode_component("a-b_c.d*e"), "a-b_c.d*e");
        assert_eq!(encode_component("x=1&y=2#z"), "x%3D1%26y%3D2%23z");
    }

    #[test]
    fn test_whatsapp_link() {
        assert_eq!(
            whatsapp_link("07700900123", "Hi there", "+44"),
            "https://wa.me/+447700900123?text=Hi%20there"
        );
        assert_eq!(
            whatsapp_link("", "Hi", "+44"),
            "https://wa.me/?text=Hi"
        );
    }

    #[test]
    fn test_email_link() {
        assert_eq!(
            email_link("jane@example.com", Some("Jane"), "Total"),
            "mailto:jane@example.com?subject=Tiling%20Quote%20for%20Jane&body=Total"
        );
        assert_eq!(
            email_link("", None, "Total"),
            "mailto:?subject=Tiling%20Quote&body=Total"
        );
    }
}
