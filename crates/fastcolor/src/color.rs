use std::str::FromStr;
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::convert::{
    brightness, derive, hsl_to_rgb, hsv_to_rgb, limit1, luminance, round255, wrap_hue, Components,
};
use crate::error::ColorFormatError;
use crate::string::{parse, to_short_hex, Parsed};
use crate::Float;

#[cfg(feature = "serde")]
fn opaque() -> Float {
    1.0
}

/// RGB components with alpha.
///
/// Red, green, and blue are bytes; alpha is in unit range and defaults to 1.
/// An `Rgb` converts into a [`Color`] losslessly via `From`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    pub a: Float,
}

impl Rgb {
    /// Create new opaque RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Replace the alpha component.
    pub const fn with_alpha(self, a: Float) -> Self {
        Self { a, ..self }
    }
}

/// HSL components with alpha.
///
/// The hue is in degrees and may have any magnitude; saturation and
/// lightness are in unit range. Alpha defaults to 1. Converting into a
/// [`Color`] reduces the hue into `0..360` and saturates the other
/// components to their domains.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: Float,
    pub s: Float,
    pub l: Float,
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    pub a: Float,
}

impl Hsl {
    /// Create new opaque HSL components.
    pub const fn new(h: Float, s: Float, l: Float) -> Self {
        Self { h, s, l, a: 1.0 }
    }

    /// Replace the alpha component.
    pub const fn with_alpha(self, a: Float) -> Self {
        Self { a, ..self }
    }
}

/// HSV components with alpha.
///
/// The hue is in degrees and may have any magnitude; saturation and value
/// are in unit range. Alpha defaults to 1. Converting into a [`Color`]
/// reduces the hue into `0..360` and saturates the other components to
/// their domains.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    pub h: Float,
    pub s: Float,
    pub v: Float,
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    pub a: Float,
}

impl Hsv {
    /// Create new opaque HSV components.
    pub const fn new(h: Float, s: Float, v: Float) -> Self {
        Self { h, s, v, a: 1.0 }
    }

    /// Replace the alpha component.
    pub const fn with_alpha(self, a: Float) -> Self {
        Self { a, ..self }
    }
}

// ====================================================================================================================

/// A fast, allocation-light color value.
///
/// Every color is a canonical RGB triple of bytes plus an alpha in unit
/// range. The red, green, and blue channels are immutable, which makes every
/// color valid by construction and lets the cylindrical HSL/HSV components
/// and the perceived brightness be derived lazily, exactly once, without
/// cache invalidation. Alpha is the one mutable component, through the
/// chaining setter [`Color::set_alpha`]; nothing derived depends on it.
///
/// All blending and conversion operations return new colors. Equality
/// compares the canonical RGBA exactly and ignores the derived components,
/// so colors constructed from different representations compare equal:
///
/// ```
/// # use std::str::FromStr;
/// # use fastcolor::Color;
/// # use fastcolor::error::ColorFormatError;
/// let hex = Color::from_str("#ff0000")?;
/// let fun = Color::from_str("rgb(255,0,0)")?;
/// assert_eq!(hex, fun);
/// # Ok::<(), ColorFormatError>(())
/// ```
///
/// When a color is created from [`Hsl`] or [`Hsv`] components, those
/// components (with the hue reduced into `0..360`) seed the derived state,
/// so structured round trips return the caller's numbers rather than
/// re-derived approximations.
#[derive(Clone)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: Float,
    components: OnceLock<Components>,
}

impl Color {
    /// Create a new color from RGB channels and alpha. The alpha saturates
    /// to unit range.
    pub fn new(r: u8, g: u8, b: u8, a: Float) -> Self {
        Self {
            r,
            g,
            b,
            a: limit1(a),
            components: OnceLock::new(),
        }
    }

    fn with_components(r: u8, g: u8, b: u8, a: Float, components: Components) -> Self {
        let color = Self::new(r, g, b, a);
        let _ = color.components.set(components);
        color
    }

    fn components(&self) -> &Components {
        self.components
            .get_or_init(|| derive(self.r, self.g, self.b))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Access the red channel.
    #[inline]
    pub fn red(&self) -> u8 {
        self.r
    }

    /// Access the green channel.
    #[inline]
    pub fn green(&self) -> u8 {
        self.g
    }

    /// Access the blue channel.
    #[inline]
    pub fn blue(&self) -> u8 {
        self.b
    }

    /// Access the alpha component.
    #[inline]
    pub fn alpha(&self) -> Float {
        self.a
    }

    /// Update the alpha component in place, saturating it to unit range. A
    /// non-finite alpha becomes fully opaque. Returns `self` for chaining.
    pub fn set_alpha(&mut self, alpha: Float) -> &mut Self {
        self.a = limit1(alpha);
        self
    }

    /// Get the hue in integral degrees `0..360`, 0 when achromatic.
    pub fn hue(&self) -> Float {
        self.components().h
    }

    /// Get the saturation in unit range, as `delta / max` over the channel
    /// extremes, 0 when achromatic. HSL and HSV share this quantity.
    pub fn saturation(&self) -> Float {
        self.components().s
    }

    /// Get the HSL lightness in unit range, the average of the normalized
    /// channel extremes.
    pub fn lightness(&self) -> Float {
        self.components().l
    }

    /// Get the HSV value in unit range, the normalized channel maximum.
    pub fn value(&self) -> Float {
        self.components().v
    }

    /// Get the perceived brightness in `0..=255`, per the [W3C accessibility
    /// heuristic](http://www.w3.org/TR/AERT#color-contrast).
    pub fn brightness(&self) -> Float {
        self.components().brightness
    }

    /// Get the relative luminance in unit range, per the [WCAG
    /// definition](http://www.w3.org/TR/2008/REC-WCAG20-20081211/#relativeluminancedef).
    pub fn luminance(&self) -> Float {
        luminance(self.r, self.g, self.b)
    }

    /// Determine whether this color reads as dark, i.e., its perceived
    /// brightness is below 128.
    pub fn is_dark(&self) -> bool {
        self.brightness() < 128.0
    }

    /// Determine whether this color reads as light. The complement of
    /// [`Color::is_dark`].
    pub fn is_light(&self) -> bool {
        !self.is_dark()
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Mix this color with another one, by the given percentage `0..=100`.
    ///
    /// Channels and alpha are linearly interpolated; 0 returns this color,
    /// 100 the other one. Channels round and saturate to `0..=255`; the
    /// interpolated alpha is rounded to two decimal places.
    pub fn mix(&self, other: impl Into<Color>, amount: Float) -> Color {
        fn interpolate(from: u8, to: u8, p: Float) -> u8 {
            round255((to as Float - from as Float) * p + from as Float)
        }

        let other = other.into();
        let p = amount / 100.0;
        let a = ((other.a - self.a) * p + self.a) * 100.0;

        Color::new(
            interpolate(self.r, other.r, p),
            interpolate(self.g, other.g, p),
            interpolate(self.b, other.b, p),
            a.round() / 100.0,
        )
    }

    /// Mix this color with pure white, by the given percentage `0..=100`.
    /// 0 returns this color, 100 white.
    pub fn tint(&self, amount: Float) -> Color {
        self.mix(Rgb::new(255, 255, 255), amount)
    }

    /// Mix this color with pure black, by the given percentage `0..=100`.
    /// 0 returns this color, 100 black.
    pub fn shade(&self, amount: Float) -> Color {
        self.mix(Rgb::new(0, 0, 0), amount)
    }

    /// Decrease the lightness by the given percentage `0..=100` of full
    /// lightness, keeping hue, saturation, and alpha.
    pub fn darken(&self, amount: Float) -> Color {
        let l = limit1(self.lightness() - amount / 100.0);
        Hsl {
            h: self.hue(),
            s: self.saturation(),
            l,
            a: self.a,
        }
        .into()
    }

    /// Increase the lightness by the given percentage `0..=100` of full
    /// lightness, keeping hue, saturation, and alpha.
    pub fn lighten(&self, amount: Float) -> Color {
        let l = limit1(self.lightness() + amount / 100.0);
        Hsl {
            h: self.hue(),
            s: self.saturation(),
            l,
            a: self.a,
        }
        .into()
    }

    /// Composite this color over the given background with the source-over
    /// operator. When the combined alpha is zero, the result is defined as
    /// transparent black.
    pub fn on_background(&self, background: impl Into<Color>) -> Color {
        let bg = background.into();
        let alpha = self.a + bg.a * (1.0 - self.a);
        if alpha == 0.0 {
            return Color::new(0, 0, 0, 0.0);
        }

        let channel = |fg: u8, bg_channel: u8| {
            round255(
                (fg as Float * self.a + bg_channel as Float * bg.a * (1.0 - self.a)) / alpha,
            )
        };

        Color::new(
            channel(self.r, bg.r),
            channel(self.g, bg.g),
            channel(self.b, bg.b),
            alpha,
        )
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Format this color in hashed hexadecimal notation, appending the alpha
    /// byte only when the color is not fully opaque.
    ///
    /// ```
    /// # use fastcolor::Rgb;
    /// # use fastcolor::Color;
    /// let sky = Color::from(Rgb::new(0x66, 0xcc, 0xff));
    /// assert_eq!(sky.to_hex_string(), "#66ccff");
    /// assert_eq!(sky.clone().set_alpha(0.4).to_hex_string(), "#66ccff66");
    /// ```
    pub fn to_hex_string(&self) -> String {
        if self.a < 1.0 {
            self.to_hex8_string()
        } else {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        }
    }

    /// Format this color in 8-digit hashed hexadecimal notation, always
    /// appending the alpha byte.
    pub fn to_hex8_string(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r,
            self.g,
            self.b,
            round255(self.a * 255.0)
        )
    }

    /// Format this color in the shortest hashed hexadecimal notation,
    /// collapsing to 3 or 4 digits when every byte has twin nibbles.
    ///
    /// ```
    /// # use fastcolor::Rgb;
    /// # use fastcolor::Color;
    /// assert_eq!(Color::from(Rgb::new(0x66, 0xcc, 0xff)).to_short_hex_string(), "#6cf");
    /// assert_eq!(Color::from(Rgb::new(0x66, 0xcc, 0xfe)).to_short_hex_string(), "#66ccfe");
    /// ```
    pub fn to_short_hex_string(&self) -> String {
        let alpha = if self.a < 1.0 {
            Some(round255(self.a * 255.0))
        } else {
            None
        };
        to_short_hex(self.r, self.g, self.b, alpha)
    }

    /// Get this color's RGB components.
    pub fn to_rgb(&self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
            a: self.a,
        }
    }

    /// Get this color's HSL components.
    pub fn to_hsl(&self) -> Hsl {
        let components = self.components();
        Hsl {
            h: components.h,
            s: components.s,
            l: components.l,
            a: self.a,
        }
    }

    /// Get this color's HSV components.
    pub fn to_hsv(&self) -> Hsv {
        let components = self.components();
        Hsv {
            h: components.h,
            s: components.s,
            v: components.v,
            a: self.a,
        }
    }

    /// Format this color in `rgb()`/`rgba()` notation. Same as `Display`.
    pub fn to_rgb_string(&self) -> String {
        self.to_string()
    }

    /// Format this color in `hsl()`/`hsla()` notation, with saturation and
    /// lightness rounded to integer percentages.
    pub fn to_hsl_string(&self) -> String {
        let components = self.components();
        let s = (components.s * 100.0).round();
        let l = (components.l * 100.0).round();

        if self.a == 1.0 {
            format!("hsl({},{}%,{}%)", components.h, s, l)
        } else {
            format!("hsla({},{}%,{}%,{})", components.h, s, l, self.a)
        }
    }
}

// ====================================================================================================================

impl From<Rgb> for Color {
    /// Convert RGB components into a color. Lossless apart from alpha
    /// saturating to unit range.
    fn from(rgb: Rgb) -> Self {
        Color::new(rgb.r, rgb.g, rgb.b, rgb.a)
    }
}

impl From<Hsl> for Color {
    /// Convert HSL components into a color.
    ///
    /// The hue is reduced into `0..360`; saturation and lightness saturate
    /// to unit range. The normalized components seed the color's derived
    /// state, so [`Color::to_hsl`] returns them unchanged.
    fn from(hsl: Hsl) -> Self {
        let h = wrap_hue(hsl.h);
        let s = limit1(hsl.s);
        let l = limit1(hsl.l);
        let [r, g, b] = hsl_to_rgb(h, s, l);
        let max = r.max(g).max(b);

        Color::with_components(
            r,
            g,
            b,
            hsl.a,
            Components {
                h,
                s,
                l,
                v: max as Float / 255.0,
                brightness: brightness(r, g, b),
            },
        )
    }
}

impl From<Hsv> for Color {
    /// Convert HSV components into a color.
    ///
    /// The hue is reduced into `0..360`; saturation and value saturate to
    /// unit range. The normalized components seed the color's derived
    /// state, so [`Color::to_hsv`] returns them unchanged.
    fn from(hsv: Hsv) -> Self {
        let h = wrap_hue(hsv.h);
        let s = limit1(hsv.s);
        let v = limit1(hsv.v);
        let [r, g, b] = hsv_to_rgb(h, s, v);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        Color::with_components(
            r,
            g,
            b,
            hsv.a,
            Components {
                h,
                s,
                l: (max as Float + min as Float) / 510.0,
                v,
                brightness: brightness(r, g, b),
            },
        )
    }
}

impl Default for Color {
    /// Create an instance of the default color, opaque black.
    #[inline]
    fn default() -> Self {
        Self::new(0, 0, 0, 1.0)
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Instantiate a color from its string representation.
    ///
    /// Before parsing the string slice, this method trims any leading and
    /// trailing white space while also converting ASCII letters to lower
    /// case. That makes parsing effectively case-insensitive.
    ///
    /// This method recognizes the *hashed hexadecimal notation* with 3, 4,
    /// 6, or 8 digits, e.g., `#123`, `#cafe00`, or `#66ccff99`; the `#`
    /// itself is optional. The three and four digit versions are short forms
    /// with every digit repeated. A trailing fourth byte is the alpha scaled
    /// by 1/255; without one, alpha is 1.
    ///
    /// It also recognizes the *functional notations* `rgb()`/`rgba()`,
    /// `hsl()`/`hsla()`, and `hsv()`/`hsb()`, each in the legacy
    /// comma-separated and the modern space/slash-separated CSS syntax. RGB
    /// channels are bytes or percentages; the hue is in degrees (a `deg`
    /// unit is tolerated) and hue magnitude is unconstrained; HSL/HSV
    /// saturation and lightness/value are read as percentages of 1 with or
    /// without an explicit `%` mark. A fourth component is the alpha, which
    /// a `%` mark scales by 1/100.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastcolor::Color;
    /// # use fastcolor::error::ColorFormatError;
    /// use std::str::FromStr;
    ///
    /// let navy = Color::from_str("#011480")?;
    /// assert_eq!(navy.to_rgb_string(), "rgb(1,20,128)");
    ///
    /// let plum: Color = str::parse("hsl(270, 60%, 40%)")?;
    /// assert_eq!(plum.to_hex_string(), "#6629a3");
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(|parsed| match parsed {
            Parsed::Rgb(rgb) => rgb.into(),
            Parsed::Hsl(hsl) => hsl.into(),
            Parsed::Hsv(hsv) => hsv.into(),
        })
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::from_str(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_str(value.as_str())
    }
}

impl PartialEq for Color {
    /// Determine whether this color equals the other color, comparing the
    /// canonical RGBA exactly. The derived components never participate;
    /// they are a function of the channels.
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b && self.a == other.a
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Color({}, {}, {}, {})",
            self.r, self.g, self.b, self.a
        ))
    }
}

impl std::fmt::Display for Color {
    /// Format this color in `rgb()`/`rgba()` notation.
    ///
    /// The alpha component is omitted when the color is fully opaque and
    /// otherwise emitted with the shortest representation that round-trips,
    /// i.e., without a forced precision.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 1.0 {
            f.write_fmt(format_args!("rgb({},{},{})", self.r, self.g, self.b))
        } else {
            f.write_fmt(format_args!(
                "rgba({},{},{},{})",
                self.r, self.g, self.b, self.a
            ))
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{Color, Hsl, Hsv, Rgb};
    use crate::error::ColorFormatError;
    use std::str::FromStr;

    #[test]
    fn test_equality_across_representations() -> Result<(), ColorFormatError> {
        assert_eq!(Color::from_str("#ff0000")?, Color::from_str("rgb(255,0,0)")?);
        assert_eq!(Color::from_str("#f00")?, Color::from_str("#ff0000")?);
        assert_eq!(Color::from_str("#336699cc")?, Color::from_str("#369c")?);
        assert_eq!(
            Color::from_str("#ff000066")?,
            Color::from_str("rgba(255,0,0,.4)")?
        );
        assert_eq!(
            Color::from_str("#ff8000")?,
            Color::from_str("rgb(100%, 50%, 0%)")?
        );
        assert_ne!(Color::from_str("#ff0000")?, Color::from_str("#00ff00")?);
        assert_ne!(
            Color::from_str("#ff0000")?,
            Color::from_str("rgba(255,0,0,.1)")?
        );
        Ok(())
    }

    #[test]
    fn test_hex_round_trip() -> Result<(), ColorFormatError> {
        let color = Color::from_str("#66ccff")?;
        assert_eq!(color.to_hex_string(), "#66ccff");
        assert_eq!(Color::from_str(&color.to_hex_string())?, color);

        // 3/4-digit forms expand, 8-digit forms keep their alpha.
        assert_eq!(Color::from_str("#000")?.to_hex_string(), "#000000");
        assert_eq!(Color::from_str("#0000")?.to_hex_string(), "#00000000");
        assert_eq!(Color::from_str("#66ccff99")?.to_hex8_string(), "#66ccff99");
        assert_eq!(Color::from_str("#66ccff")?.to_hex8_string(), "#66ccffff");
        Ok(())
    }

    #[test]
    fn test_structured_round_trip() {
        let color = Color::from(Hsv::new(270.0, 0.6, 0.4));
        assert_eq!(color.to_hex_string(), "#472966");

        let hsv = Color::from(Rgb::new(0x47, 0x29, 0x66)).to_hsv();
        assert_eq!(hsv.h, 270.0);
        assert_eq!(hsv.s, 61.0 / 102.0);
        assert_eq!(hsv.v, 0.4);
        assert_eq!(hsv.a, 1.0);

        // HSL/HSV construction seeds the derived state with the caller's
        // numbers instead of re-deriving them.
        let seeded = Color::from(Hsv::new(270.0, 0.6, 0.4)).to_hsv();
        assert_eq!(seeded.s, 0.6);
        assert_eq!(seeded.v, 0.4);
    }

    #[test]
    fn test_hue_wraparound() {
        let wrapped = Color::from(Hsl::new(-700.0, 0.2, 0.1));
        assert_eq!(wrapped.hue(), 20.0);
        assert_eq!(wrapped, Color::from(Hsl::new(20.0, 0.2, 0.1)));
    }

    #[test]
    fn test_string_parsing_css_syntax() -> Result<(), ColorFormatError> {
        let expected = Rgb {
            r: 102,
            g: 41,
            b: 163,
            a: 1.0,
        };
        assert_eq!(Color::from_str("hsl(270 60 40)")?.to_rgb(), expected);
        assert_eq!(Color::from_str("hsl(270, 60, 40)")?.to_rgb(), expected);
        assert_eq!(Color::from_str("hsl(270deg, 60%, 40%)")?.to_rgb(), expected);
        assert_eq!(
            Color::from_str("hsl(270 60 40 / .2)")?.to_rgb(),
            expected.with_alpha(0.2)
        );
        assert_eq!(
            Color::from_str("hsla(270deg, 60%, 40%, 23.3%)")?.to_rgb(),
            expected.with_alpha(0.233)
        );
        assert_eq!(Color::from_str("hsb(270, 60%, 40%)")?.to_hex_string(), "#472966");
        Ok(())
    }

    #[test]
    fn test_metrics() -> Result<(), ColorFormatError> {
        assert_eq!(Color::from_str("#000")?.luminance(), 0.0);
        assert_eq!(Color::from_str("#fff")?.luminance(), 1.0);
        assert_eq!(Color::from_str("#000")?.brightness(), 0.0);
        assert_eq!(Color::from_str("#fff")?.brightness(), 255.0);

        // The perceived-brightness threshold sits between #777 and #888.
        for (dark, light) in [("#000", "#888"), ("#777", "#fff")] {
            assert!(Color::from_str(dark)?.is_dark());
            assert!(!Color::from_str(dark)?.is_light());
            assert!(Color::from_str(light)?.is_light());
            assert!(!Color::from_str(light)?.is_dark());
        }
        Ok(())
    }

    #[test]
    fn test_mix_rounds() -> Result<(), ColorFormatError> {
        let source = Color::from_str("rgba(255, 255, 255, 0.1128)")?;
        assert_eq!(source.alpha(), 0.1128);

        let target = Color::from_str("rgba(0, 0, 0, 0.93)")?;
        let mixed = source.mix(target, 50.0);
        assert_eq!(mixed.to_rgb_string(), "rgba(128,128,128,0.52)");

        // 0 keeps this color, 100 returns the other one.
        let red = Color::from_str("#f00")?;
        assert_eq!(red.mix(Color::from_str("#00f")?, 0.0), red);
        assert_eq!(
            red.mix(Color::from_str("#00f")?, 100.0),
            Color::from_str("#00f")?
        );
        Ok(())
    }

    #[test]
    fn test_tint_and_shade() -> Result<(), ColorFormatError> {
        let red = Color::from_str("#f00")?;
        assert_eq!(red.tint(100.0).to_hex_string(), "#ffffff");
        assert_eq!(red.shade(100.0).to_hex_string(), "#000000");
        assert_eq!(red.tint(0.0), red);
        assert_eq!(red.tint(50.0).to_hex_string(), "#ff8080");
        assert_eq!(red.shade(50.0).to_hex_string(), "#800000");
        Ok(())
    }

    #[test]
    fn test_darken_and_lighten() -> Result<(), ColorFormatError> {
        let plum = Color::from_str("hsl(270, 60%, 40%)")?;
        assert_eq!(plum.darken(10.0), Color::from(Hsl::new(270.0, 0.6, 0.3)));
        assert_eq!(plum.lighten(10.0), Color::from(Hsl::new(270.0, 0.6, 0.5)));

        // Lightness saturates at the domain boundaries.
        assert_eq!(plum.darken(100.0).to_hex_string(), "#000000");
        assert_eq!(plum.lighten(100.0).to_hex_string(), "#ffffff");

        // Alpha survives the round trip through HSL.
        let translucent = Color::from_str("hsl(270 60 40 / 80%)")?;
        assert_eq!(translucent.lighten(10.0).alpha(), 0.8);
        Ok(())
    }

    #[test]
    fn test_on_background() -> Result<(), ColorFormatError> {
        assert_eq!(
            Color::from_str("#ffffff")?
                .on_background(Color::from_str("#000")?)
                .to_hex_string(),
            "#ffffff"
        );
        assert_eq!(
            Color::from_str("#ffffff00")?
                .on_background(Color::from_str("#000")?)
                .to_hex_string(),
            "#000000"
        );
        assert_eq!(
            Color::from_str("#262a6d82")?
                .on_background(Color::from_str("#644242")?)
                .to_hex_string(),
            "#443658"
        );
        assert_eq!(
            Color::from_str("rgba(255,0,0,0.5)")?
                .on_background(Color::from_str("rgba(0,255,0,0.5)")?)
                .to_rgb_string(),
            "rgba(170,85,0,0.75)"
        );
        assert_eq!(
            Color::from_str("rgba(255,0,0,0.5)")?
                .on_background(Color::from_str("rgba(0,0,255,1)")?)
                .to_rgb_string(),
            "rgb(128,0,128)"
        );

        // Zero combined alpha composites to transparent black, not NaN.
        let ghost = Color::new(10, 20, 30, 0.0).on_background(Color::new(40, 50, 60, 0.0));
        assert_eq!(ghost, Color::new(0, 0, 0, 0.0));
        Ok(())
    }

    #[test]
    fn test_alpha_setter() -> Result<(), ColorFormatError> {
        let mut color = Color::from_str("rgba(255,0,0,1)")?;
        assert_eq!(color.alpha(), 1.0);

        // The setter chains, saturates, and treats non-finite input as opaque.
        assert_eq!(color.set_alpha(0.9).set_alpha(0.5).alpha(), 0.5);
        assert_eq!(color.set_alpha(-1.0).alpha(), 0.0);
        assert_eq!(color.set_alpha(2.0).alpha(), 1.0);
        assert_eq!(color.set_alpha(crate::Float::NAN).alpha(), 1.0);
        Ok(())
    }

    #[test]
    fn test_formatting() -> Result<(), ColorFormatError> {
        let plum = Color::from(Hsl::new(251.0, 1.0, 0.38));
        assert_eq!(plum.to_hex_string(), "#2400c2");
        assert_eq!(plum.to_rgb_string(), "rgb(36,0,194)");
        assert_eq!(plum.to_hsl_string(), "hsl(251,100%,38%)");
        assert_eq!(
            Color::from(Hsl::new(251.0, 1.0, 0.38).with_alpha(0.38)).to_hsl_string(),
            "hsla(251,100%,38%,0.38)"
        );

        // Display is the rgb()/rgba() notation.
        assert_eq!(plum.to_string(), plum.to_rgb_string());
        assert_eq!(
            Color::from_str("#66ccff99")?.to_short_hex_string(),
            "#6cf9"
        );
        assert_eq!(Color::default().to_rgb_string(), "rgb(0,0,0)");
        Ok(())
    }

    #[test]
    fn test_derived_state_matches_string_forms() -> Result<(), ColorFormatError> {
        // Parsing hsl() seeds the same state as the structured input.
        let parsed = Color::from_str("hsl(251,100%,38%)")?;
        assert_eq!(parsed.to_hsl_string(), "hsl(251,100%,38%)");
        assert_eq!(parsed, Color::from(Hsl::new(251.0, 1.0, 0.38)));

        // A hex round trip re-derives the components instead.
        let derived = Color::from_str("#472966")?;
        assert_eq!(derived.hue(), 270.0);
        assert_eq!(derived.value(), 0.4);
        assert_eq!(derived.to_hsl_string(), "hsl(270,60%,28%)");
        Ok(())
    }
}
