//! CSS notation for colors.
//!
//! Charting front-ends take colors as strings; [`to_css_rgb`] produces
//! the `rgb(r, g, b)` form and [`parse_color`] reads it back (as well
//! as `#rrggbb` and `#rgb`).

use rgb::RGB8;
use crate::{Error, Result};

/// Format `c` as `rgb(r, g, b)`.
///
/// ```
/// use category_colors::{css, HIGHLIGHT};
/// assert_eq!(css::to_css_rgb(HIGHLIGHT), "rgb(255, 65, 54)");
/// ```
pub fn to_css_rgb(c: RGB8) -> String {
    format!("rgb({}, {}, {})", c.r, c.g, c.b)
}

/// Format `c` as `#rrggbb`.
pub fn to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn invalid(s: &str, reason: &'static str) -> Error {
    Error::InvalidColor { input: s.to_string(), reason }
}

fn parse_functional(s: &str, args: &str) -> Result<RGB8> {
    let mut c = [0u8; 3];
    let mut n = 0;
    for x in args.split(',') {
        if n == 3 { return Err(invalid(s, "more than 3 components")) }
        let x = x.trim();
        if !x.starts_with(|d: char| d.is_ascii_digit()) {
            return Err(invalid(s, "components must be integers in 0..=255"))
        }
        c[n] = x.parse::<u8>()
            .map_err(|_| invalid(s, "components must be integers in 0..=255"))?;
        n += 1;
    }
    if n < 3 { return Err(invalid(s, "fewer than 3 components")) }
    Ok(RGB8::new(c[0], c[1], c[2]))
}

fn parse_hex(s: &str, digits: &str) -> Result<RGB8> {
    if !digits.chars().all(|d| d.is_ascii_hexdigit()) {
        return Err(invalid(s, "not a hexadecimal number"))
    }
    let channel = |i: usize, len: usize| {
        u8::from_str_radix(&digits[i .. i + len], 16)
            .map_err(|_| invalid(s, "not a hexadecimal number"))
    };
    match digits.len() {
        6 => Ok(RGB8::new(channel(0, 2)?, channel(2, 2)?, channel(4, 2)?)),
        // #abc is #aabbcc
        3 => Ok(RGB8::new(channel(0, 1)? * 17, channel(1, 1)? * 17,
                          channel(2, 1)? * 17)),
        _ => Err(invalid(s, "expected 3 or 6 hexadecimal digits")),
    }
}

/// Parse `rgb(r, g, b)`, `#rrggbb` or `#rgb` (surrounding whitespace
/// is ignored).
///
/// ```
/// use category_colors::{css, RGB8};
/// assert_eq!(css::parse_color("rgb(8,48,107)")?, RGB8::new(8, 48, 107));
/// assert_eq!(css::parse_color("#0a46a0")?, RGB8::new(10, 70, 160));
/// # Ok::<(), category_colors::Error>(())
/// ```
pub fn parse_color(s: &str) -> Result<RGB8> {
    let t = s.trim();
    if let Some(digits) = t.strip_prefix('#') {
        parse_hex(s, digits)
    } else if let Some(args) = t.strip_prefix("rgb(")
        .and_then(|r| r.strip_suffix(')')) {
        parse_functional(s, args)
    } else {
        Err(invalid(s, "expected rgb(r, g, b) or #rrggbb"))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HIGH, HIGHLIGHT, LOW};

    #[test]
    fn formats() {
        assert_eq!(to_css_rgb(LOW), "rgb(220, 235, 252)");
        assert_eq!(to_hex(HIGH), "#0a46a0");
        assert_eq!(to_hex(HIGHLIGHT), "#ff4136");
    }

    #[test]
    fn parses_back() {
        for c in [LOW, HIGH, HIGHLIGHT, RGB8::new(0, 0, 0)] {
            assert_eq!(parse_color(&to_css_rgb(c)).ok(), Some(c));
            assert_eq!(parse_color(&to_hex(c)).ok(), Some(c));
        }
    }

    #[test]
    fn lenient_spacing_and_short_hex() {
        assert_eq!(parse_color("  rgb( 1 ,2,  3 ) ").ok(),
                   Some(RGB8::new(1, 2, 3)));
        assert_eq!(parse_color("#FA0").ok(), Some(RGB8::new(255, 170, 0)));
    }

    #[test]
    fn rejects_garbage() {
        for s in ["", "red", "rgb(1,2)", "rgb(1,2,3,4)", "rgb(1,2,300)",
                  "rgb(1,2,3", "rgb(+1,2,3)", "rgb(1, -2, 3)", "rgb(1,,3)",
                  "#12345", "#gg0000", "#+1+2+3"] {
            assert!(matches!(parse_color(s), Err(Error::InvalidColor { .. })),
                    "{s:?} accepted");
        }
    }
}
