//! Utility module with fastcolor's errors.

/// An erroneous color format.
///
/// String parsing is the only fallible way of creating a [`Color`](crate::Color).
/// Structured inputs are typed as [`Rgb`](crate::Rgb), [`Hsl`](crate::Hsl), or
/// [`Hsv`](crate::Hsv) and hence cannot be malformed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#`,
    /// `rgb`, `hsl`, `hsv`, or `hsb`, and does not look like bare hexadecimal
    /// digits either.
    UnknownFormat,

    /// A hexadecimal color format with an unexpected number of digits. Valid
    /// forms have 3, 4, 6, or 8 digits; `#abcde` has five and `#123456789`
    /// has nine.
    UnexpectedCharacters,

    /// A hexadecimal color format with characters that are not hexadecimal
    /// digits. For example, `#efg` has a malformed third coordinate.
    MalformedHex,

    /// A functional color format with fewer than three numeric components.
    /// For example, `rgb(255, 0)` is missing the blue channel.
    MissingComponent,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str(
                "color format should start with `#`, `rgb()`, `hsl()`, `hsv()`, or `hsb()`",
            ),
            UnexpectedCharacters => {
                f.write_str("hexadecimal color format should have 3, 4, 6, or 8 digits")
            }
            MalformedHex => {
                f.write_str("hexadecimal color format should contain only hex digits but does not")
            }
            MissingComponent => {
                f.write_str("color format should have at least 3 components but has fewer")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
