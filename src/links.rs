// SPDX-License-Identifier: PMPL-1.0-or-later

//! WhatsApp click-to-chat links carrying a translated greeting.

/// Default click-to-chat endpoint.
pub const WHATSAPP_BASE: &str = "https://wa.me/";

/// Key of the greeting pre-filled in the chat box.
pub const GREETING_KEY: &str = "whatsapp.message";

/// Keeps only the ASCII digits of a phone number written for humans,
/// e.g. `"+255 712 345 678"` becomes `"255712345678"`.
pub fn recipient_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Builds `<base><digits>?text=<greeting>` for a raw contact number.
///
/// Returns `None` when the number holds no digits, in which case the link
/// must be left as the page authored it. An empty greeting drops the query.
pub fn whatsapp_href(base: &str, raw_number: &str, greeting: &str) -> Option<String> {
    let digits = recipient_digits(raw_number);
    if digits.is_empty() {
        return None;
    }
    let mut href = format!("{}{}", base, digits);
    if !greeting.is_empty() {
        href.push_str("?text=");
        href.push_str(&urlencoding::encode(greeting));
    }
    Some(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting_from_number() {
        assert_eq!(recipient_digits("+255 712 345 678"), "255712345678");
        assert_eq!(recipient_digits("(0712) 345-678"), "0712345678");
        assert_eq!(recipient_digits("call us"), "");
    }

    #[test]
    fn builds_link_with_encoded_greeting() {
        let href = whatsapp_href(WHATSAPP_BASE, "+255 712 345 678", "Habari timu, naomba msaada.")
            .expect("number has digits");
        assert_eq!(
            href,
            "https://wa.me/255712345678?text=Habari%20timu%2C%20naomba%20msaada."
        );
    }

    #[test]
    fn empty_greeting_omits_query() {
        assert_eq!(
            whatsapp_href(WHATSAPP_BASE, "255712345678", "").as_deref(),
            Some("https://wa.me/255712345678")
        );
    }

    #[test]
    fn no_digits_means_no_link() {
        assert_eq!(whatsapp_href(WHATSAPP_BASE, "+ -", "Hello"), None);
        assert_eq!(whatsapp_href(WHATSAPP_BASE, "", "Hello"), None);
    }
}
