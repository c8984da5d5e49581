/// Format shown to the user when a timestamp is rejected.
pub const TIMESTAMP_FORMAT_HINT: &str = "m:ss";

/// Whether `s` is acceptable as a start/end timestamp.
///
/// Empty input is valid (no bound). Otherwise the input must contain
/// one or more digits, a colon, and two digits. The match is not anchored,
/// so surrounding text is tolerated, and seconds are not range checked.
pub fn is_valid_timestamp(s: &str) -> bool {
    s.is_empty() || contains_minutes_seconds(s.as_bytes())
}

fn contains_minutes_seconds(bytes: &[u8]) -> bool {
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b':'
            && i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
            && bytes.get(i + 2).is_some_and(u8::is_ascii_digit)
    })
}
