//! Parsing colors from strings and serializing them back to hexadecimal
//! notation.

use crate::color::{Hsl, Hsv, Rgb};
use crate::convert::{limit1, round255};
use crate::error::ColorFormatError;
use crate::Float;

/// The structured components recognized in a color string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Parsed {
    Rgb(Rgb),
    Hsl(Hsl),
    Hsv(Hsv),
}

/// Parse the string into color components.
///
/// This function recognizes hashed hexadecimal notation with 3, 4, 6, or 8
/// digits (the `#` itself is optional) as well as the functional notations
/// `rgb()`/`rgba()`, `hsl()`/`hsla()`, and `hsv()`/`hsb()`, the latter in
/// both the legacy comma-separated and the modern space/slash-separated CSS
/// syntax. Before trying either, it trims leading and trailing white space
/// and converts ASCII letters to lowercase, so parsing is effectively
/// case-insensitive.
pub(crate) fn parse(s: &str) -> Result<Parsed, ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.starts_with('#') || (!s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())) {
        parse_hashed(s).map(Parsed::Rgb)
    } else if s.starts_with("rgb") {
        parse_rgb(s).map(Parsed::Rgb)
    } else if s.starts_with("hsl") {
        parse_hsl(s).map(Parsed::Hsl)
    } else if s.starts_with("hsv") || s.starts_with("hsb") {
        parse_hsv(s).map(Parsed::Hsv)
    } else {
        Err(ColorFormatError::UnknownFormat)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a color in hashed hexadecimal format. It transparently handles
/// single-digit coordinates, so `#1af` is `#11aaff`. With 4 or 8 digits, the
/// trailing byte is alpha scaled by 1/255; without, alpha is 1.
fn parse_hashed(s: &str) -> Result<Rgb, ColorFormatError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }
    let factor = match digits.len() {
        3 | 4 => 1,
        6 | 8 => 2,
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };

    fn parse_byte(s: &str, index: usize, factor: usize) -> Result<u8, ColorFormatError> {
        let t = s
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    let r = parse_byte(digits, 0, factor)?;
    let g = parse_byte(digits, 1, factor)?;
    let b = parse_byte(digits, 2, factor)?;
    let a = if digits.len() == 4 * factor {
        parse_byte(digits, 3, factor)? as Float / 255.0
    } else {
        1.0
    };

    Ok(Rgb { r, g, b, a })
}

// --------------------------------------------------------------------------------------------------------------------

/// A numeric token inside a functional notation, with its percent mark.
#[derive(Clone, Copy, Debug)]
struct Token {
    value: Float,
    percent: bool,
}

/// Scan the functional notation for up to four numeric tokens.
///
/// Text before an opening parenthesis and after a closing one is discarded,
/// which strips the function name; both parentheses are optional. A token is
/// a decimal number with an optional sign and an optional `%` suffix. Any
/// other characters, including separators and unit suffixes such as `deg`,
/// are skipped, which is what makes the comma and space/slash syntaxes
/// uniform. Tokens past the fourth are ignored.
fn scan_tokens(s: &str) -> [Option<Token>; 4] {
    let body = match s.find('(') {
        Some(open) => &s[open + 1..],
        None => s,
    };
    let body = match body.find(')') {
        Some(close) => &body[..close],
        None => body,
    };

    let mut tokens = [None; 4];
    let mut count = 0;
    let bytes = body.as_bytes();
    let mut index = 0;

    while index < bytes.len() && count < 4 {
        if bytes[index].is_ascii_digit() || bytes[index] == b'.' || bytes[index] == b'-' {
            let start = index;
            index += 1;
            while index < bytes.len() && (bytes[index].is_ascii_digit() || bytes[index] == b'.') {
                index += 1;
            }
            let end = index;
            let percent = index < bytes.len() && bytes[index] == b'%';
            if percent {
                index += 1;
            }
            if let Ok(value) = body[start..end].parse::<Float>() {
                tokens[count] = Some(Token { value, percent });
                count += 1;
            }
        } else {
            index += 1;
        }
    }

    tokens
}

/// Split a functional notation into its three channel tokens and alpha.
///
/// Alpha is divided by 100 when it carries a `%` mark, saturated to unit
/// range either way, and defaults to 1 when absent.
fn split_components(s: &str) -> Result<([Token; 3], Float), ColorFormatError> {
    match scan_tokens(s) {
        [Some(c1), Some(c2), Some(c3), alpha] => {
            let a = alpha.map_or(1.0, |t| {
                limit1(if t.percent { t.value / 100.0 } else { t.value })
            });
            Ok(([c1, c2, c3], a))
        }
        _ => Err(ColorFormatError::MissingComponent),
    }
}

/// Parse an `rgb()`/`rgba()` notation. A percentage channel scales 0–100% to
/// 0–255; a bare number is used directly. Channels round and saturate to
/// `0..=255`.
fn parse_rgb(s: &str) -> Result<Rgb, ColorFormatError> {
    fn channel(token: Token) -> u8 {
        if token.percent {
            round255(token.value / 100.0 * 255.0)
        } else {
            round255(token.value)
        }
    }

    let ([c1, c2, c3], a) = split_components(s)?;
    Ok(Rgb {
        r: channel(c1),
        g: channel(c2),
        b: channel(c3),
        a,
    })
}

/// Parse an `hsl()`/`hsla()` notation. The hue is in degrees, used as-is; a
/// `deg` suffix falls outside the token and is skipped. Saturation and
/// lightness are percentages of 1, with or without an explicit `%` mark.
fn parse_hsl(s: &str) -> Result<Hsl, ColorFormatError> {
    let ([c1, c2, c3], a) = split_components(s)?;
    Ok(Hsl {
        h: c1.value,
        s: c2.value / 100.0,
        l: c3.value / 100.0,
        a,
    })
}

/// Parse an `hsv()`/`hsb()` notation. Components follow the same rules as
/// [`parse_hsl`].
fn parse_hsv(s: &str) -> Result<Hsv, ColorFormatError> {
    let ([c1, c2, c3], a) = split_components(s)?;
    Ok(Hsv {
        h: c1.value,
        s: c2.value / 100.0,
        v: c3.value / 100.0,
        a,
    })
}

// --------------------------------------------------------------------------------------------------------------------

/// Format RGB bytes and an optional alpha byte in the shortest hashed
/// hexadecimal form. When every byte consists of twin nibbles, the two
/// digits collapse into one, yielding a 3- or 4-digit form.
pub(crate) fn to_short_hex(r: u8, g: u8, b: u8, alpha: Option<u8>) -> String {
    fn twin(byte: u8) -> bool {
        byte >> 4 == byte & 0xf
    }

    if twin(r) && twin(g) && twin(b) && alpha.map_or(true, twin) {
        match alpha {
            Some(a) => format!("#{:x}{:x}{:x}{:x}", r & 0xf, g & 0xf, b & 0xf, a & 0xf),
            None => format!("#{:x}{:x}{:x}", r & 0xf, g & 0xf, b & 0xf),
        }
    } else {
        match alpha {
            Some(a) => format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a),
            None => format!("#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

// ====================================================================================================================
