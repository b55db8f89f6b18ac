//! Phone number display formatting.

/// Format a phone number for display.
///
/// Strips every non-digit character. Exactly ten remaining digits are
/// rendered as `(AAA) BBB-CCCC`; anything else is returned unchanged.
///
/// ```
/// use keap_viewer_core::format_phone;
///
/// assert_eq!(format_phone("5551234567"), "(555) 123-4567");
/// assert_eq!(format_phone("555.123.4567"), "(555) 123-4567");
/// assert_eq!(format_phone("555-123"), "555-123");
/// ```
#[must_use]
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    match (digits.get(0..3), digits.get(3..6), digits.get(6..)) {
        (Some(area), Some(exchange), Some(line)) if digits.len() == 10 => {
            format!("({area}) {exchange}-{line}")
        }
        _ => phone.to_string(),
    }
}
