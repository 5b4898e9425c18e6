//! Movie id parsing.

/// Parses a movie id from its query-string form.
///
/// Leading whitespace and a single sign are accepted, followed by the longest
/// run of ASCII digits. Anything after the digits is ignored, so `"550abc"`
/// parses as `550`. Returns `None` when there are no digits or the value does
/// not fit in an `i64`.
pub fn parse_movie_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    let value: i64 = unsigned[..digit_count].parse().ok()?;
    Some(if negative { -value } else { value })
}
