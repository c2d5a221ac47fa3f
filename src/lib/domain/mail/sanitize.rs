//! Character policies for header-bound values

/// Characters permitted in an email address besides ASCII letters and digits.
const ADDRESS_SPECIALS: &str = "!#$%&'*+-=?^_`{|}~@.[]";

/// Strips every Unicode control character from a value destined for a mail
/// header, carriage returns and line feeds included.
///
/// This is the documented policy for subject lines and display names: C0 and
/// C1 controls and DEL are removed, printable text (ASCII or not) passes
/// through unchanged. Nothing is encoded, so the result is what actually
/// appears in the header.
pub fn sanitize_header_value(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect()
}

/// Strips every character that cannot appear in an email address.
///
/// Keeps ASCII letters, digits and ``!#$%&'*+-=?^_`{|}~@.[]``; everything
/// else, whitespace and control characters included, is removed. This
/// reduces injection risk but does not make the survivor a valid address,
/// so callers still shape-check the result.
pub fn sanitize_address(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || ADDRESS_SPECIALS.contains(*c))
        .collect()
}
