// src/core/coords.rs
//! Repair of coordinate cells as they appear on the source page.
//!
//! The page text has typography artifacts: the letter `O` where a zero belongs,
//! the letter `l` where a one belongs, compass letters instead of signs, and
//! "degrees minutes" written with a space where a decimal point belongs.
//! [`normalize_coord`] turns a raw cell into signed, decimal-like text such as
//! `-124.030`. Nothing is parsed as a number; garbage in gives garbage (or an
//! empty string) out.
//!
//! Rules, applied per character from left to right:
//! - `O` reads as `0` and `l` reads as `1` for every rule below.
//! - `W` (or a literal `-`) makes the result negative, `E` (or a literal `+`)
//!   positive. The sign always goes in front of the number; the last sign
//!   character in the cell wins.
//! - A space with a digit (or `O`) on its left and `0` on its right becomes
//!   `.0`; that zero is then not emitted a second time.
//! - Digits are kept, except a zero directly after a space.
//! - A literal `.` is kept, so normalized text passes through unchanged.
//! - Anything else is dropped.
//!
//! Neighbours are looked up through `get`; at either end of the cell the
//! missing neighbour simply does not match.

/// Letters the page uses in place of digits.
#[inline]
fn substitute(ch: char) -> char {
    match ch {
        'O' => '0',
        'l' => '1',
        other => other,
    }
}

/// Normalize one raw coordinate cell. See the module docs for the rules.
///
/// ```
/// use statebb_scrape::core::normalize_coord;
/// assert_eq!(normalize_coord("W123"), "-123");
/// assert_eq!(normalize_coord("124 030W"), "-124.030");
/// ```
pub fn normalize_coord(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();

    let mut sign: Option<char> = None;
    let mut body = String::with_capacity(chars.len() + 1);
    let mut has_digit = false;

    for (i, &raw_ch) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).and_then(|p| chars.get(p)).copied();
        let next = chars.get(i + 1).copied();

        match substitute(raw_ch) {
            'W' | '-' => sign = Some('-'),
            'E' | '+' => sign = Some('+'),
            '.' => body.push('.'),
            ' ' if next == Some('0') && prev.is_some_and(|p| p.is_ascii_digit() || p == 'O') => {
                body.push_str(".0");
                has_digit = true;
            }
            c if c.is_ascii_digit() => {
                // a zero right after a space was either consumed above or is dropped
                if c == '0' && prev == Some(' ') {
                    continue;
                }
                body.push(c);
                has_digit = true;
            }
            _ => {}
        }
    }

    if !has_digit {
        return s!();
    }

    match sign {
        Some(sign) => {
            let mut out = String::with_capacity(body.len() + 1);
            out.push(sign);
            out.push_str(&body);
            out
        }
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_letter_becomes_sign() {
        assert_eq!(normalize_coord("W123"), "-123");
        assert_eq!(normalize_coord("E 45"), "+45");
        assert_eq!(normalize_coord("45"), "45");
    }

    #[test]
    fn degree_space_zero_becomes_decimal_point() {
        assert_eq!(normalize_coord("124 030W"), "-124.030");
        assert_eq!(normalize_coord("N 35 000"), "35.000");
        assert_eq!(normalize_coord("W 88 028"), "-88.028");
    }

    #[test]
    fn sign_is_leading_wherever_the_letter_sits() {
        assert_eq!(normalize_coord("W124 030"), normalize_coord("124 030W"));
        assert_eq!(normalize_coord("12W3"), "-123");
    }

    #[test]
    fn last_sign_letter_wins() {
        assert_eq!(normalize_coord("W12E"), "+12");
        assert_eq!(normalize_coord("E12W"), "-12");
    }

    #[test]
    fn look_alike_letters_read_as_digits() {
        assert_eq!(normalize_coord("l2O"), "120");
        // 'O' on the left of the space counts as a digit
        assert_eq!(normalize_coord("1O 030"), "10.030");
    }

    #[test]
    fn space_without_digit_on_left_drops_the_zero() {
        // no decimal point is produced, and the zero after the space is still skipped
        assert_eq!(normalize_coord("N 05"), "5");
        assert_eq!(normalize_coord(" 012"), "12");
    }

    #[test]
    fn space_not_followed_by_zero_is_dropped() {
        assert_eq!(normalize_coord("124 30"), "12430");
        assert_eq!(normalize_coord("12 "), "12");
    }

    #[test]
    fn boundary_characters_have_no_neighbours() {
        // a trailing space has nothing on its right
        assert_eq!(normalize_coord("7 "), "7");
        // a leading zero has nothing on its left and is kept
        assert_eq!(normalize_coord("0 0"), "0.0");
        // 'O' at the very end of the cell
        assert_eq!(normalize_coord("W1O"), "-10");
        assert_eq!(normalize_coord("O"), "0");
    }

    #[test]
    fn noise_is_dropped() {
        assert_eq!(normalize_coord("124° 44' 3\"W"), "-124443");
        assert_eq!(normalize_coord("N 35 000 (approx)"), "35.000");
    }

    #[test]
    fn no_digits_means_empty_output() {
        for raw in ["", " ", "°'\"", "abc", "W", "E", "N S", "-", ".", "- . +"] {
            assert_eq!(normalize_coord(raw), "", "input {raw:?}");
        }
    }

    #[test]
    fn reapplying_to_normalized_text_is_a_no_op() {
        let samples = [
            "W123",
            "124 030W",
            "E 1O 005",
            "N 35 000",
            "l2O",
            "W12E",
            "124° 44' 3\"W",
            "0 0",
            "abc",
        ];
        for raw in samples {
            let once = normalize_coord(raw);
            assert_eq!(normalize_coord(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(normalize_coord("4²5"), "45");
    }
}
