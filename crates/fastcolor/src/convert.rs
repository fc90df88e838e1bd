//! Pure conversion math between RGB and the cylindrical HSL/HSV models, plus
//! the perceptual metrics derived from RGB channels.

use crate::Float;

/// The cylindrical components and perceived brightness derived from an RGB
/// triple. A [`Color`](crate::Color) computes this record at most once.
///
/// Both saturations use the simple form `delta / max`, which the HSL and HSV
/// components share. That is a fixed design choice; the bi-cone form
/// `delta / (1 - |2l - 1|)` is *not* used.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Components {
    /// Hue in degrees `0..360`, rounded to the nearest integer degree when
    /// derived. 0 for achromatic colors.
    pub(crate) h: Float,
    /// Saturation `0..=1`, as `delta / max`. 0 for achromatic colors.
    pub(crate) s: Float,
    /// Lightness `0..=1`, as `(max + min) / 510`.
    pub(crate) l: Float,
    /// Value `0..=1`, as `max / 255`.
    pub(crate) v: Float,
    /// Perceived brightness `0..=255`.
    pub(crate) brightness: Float,
}

/// Derive the cylindrical components for the given RGB channels.
pub(crate) fn derive(r: u8, g: u8, b: u8) -> Components {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let maxf = max as Float;
    let delta = (max - min) as Float;

    let h = if delta == 0.0 {
        0.0
    } else {
        let (rf, gf, bf) = (r as Float, g as Float, b as Float);
        let sector = if r == max {
            (gf - bf) / delta + if g < b { 6.0 } else { 0.0 }
        } else if g == max {
            (bf - rf) / delta + 2.0
        } else {
            (rf - gf) / delta + 4.0
        };
        // Rounding can land exactly on 360, which must wrap back to 0.
        (60.0 * sector).round() % 360.0
    };
    let s = if delta == 0.0 { 0.0 } else { delta / maxf };
    let l = (max as Float + min as Float) / 510.0;
    let v = maxf / 255.0;

    Components {
        h,
        s,
        l,
        v,
        brightness: brightness(r, g, b),
    }
}

/// Convert HSL components to RGB channels.
///
/// The hue may have any magnitude and is reduced into `0..360` first;
/// saturation and lightness must be in unit range. Non-positive saturation
/// short-circuits to the achromatic gray for the given lightness.
pub(crate) fn hsl_to_rgb(h: Float, s: Float, l: Float) -> [u8; 3] {
    if s <= 0.0 {
        let gray = round255(l * 255.0);
        return [gray, gray, gray];
    }

    let hue_prime = wrap_hue(h) / 60.0;
    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let second = chroma * (1.0 - (hue_prime % 2.0 - 1.0).abs());

    let (r, g, b) = match hue_prime as u32 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };

    let m = l - chroma / 2.0;
    [
        round255((r + m) * 255.0),
        round255((g + m) * 255.0),
        round255((b + m) * 255.0),
    ]
}

/// Convert HSV components to RGB channels.
///
/// The hue may have any magnitude and is reduced into `0..360` first;
/// saturation and value must be in unit range. Non-positive saturation
/// short-circuits to the achromatic gray for the given value.
pub(crate) fn hsv_to_rgb(h: Float, s: Float, v: Float) -> [u8; 3] {
    let vv = round255(v * 255.0);
    if s <= 0.0 {
        return [vv, vv, vv];
    }

    let hh = wrap_hue(h) / 60.0;
    let i = hh as u32;
    let ff = hh - i as Float;
    let p = round255(v * (1.0 - s) * 255.0);
    let q = round255(v * (1.0 - s * ff) * 255.0);
    let t = round255(v * (1.0 - s * (1.0 - ff)) * 255.0);

    match i {
        0 => [vv, t, p],
        1 => [q, vv, p],
        2 => [p, vv, t],
        3 => [p, q, vv],
        4 => [t, p, vv],
        _ => [vv, p, q],
    }
}

/// Compute the relative luminance for the given RGB channels, in unit range.
///
/// Channels are gamma-corrected and combined with the weights from the [WCAG
/// definition](http://www.w3.org/TR/2008/REC-WCAG20-20081211/#relativeluminancedef).
pub(crate) fn luminance(r: u8, g: u8, b: u8) -> Float {
    fn adjust_gamma(raw: u8) -> Float {
        let value = raw as Float / 255.0;
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * adjust_gamma(r) + 0.7152 * adjust_gamma(g) + 0.0722 * adjust_gamma(b)
}

/// Compute the perceived brightness for the given RGB channels, `0..=255`,
/// per the [W3C accessibility heuristic](http://www.w3.org/TR/AERT#color-contrast).
pub(crate) fn brightness(r: u8, g: u8, b: u8) -> Float {
    (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) as Float / 1000.0
}

/// Reduce a hue of any magnitude into `0..360` degrees. A non-finite hue
/// reduces to 0.
pub(crate) fn wrap_hue(h: Float) -> Float {
    if h.is_finite() {
        h.rem_euclid(360.0)
    } else {
        0.0
    }
}

/// Round and saturate a channel quantity to `0..=255`.
pub(crate) fn round255(value: Float) -> u8 {
    if value >= 255.0 {
        255
    } else if value <= 0.0 {
        0
    } else {
        value.round() as u8
    }
}

/// Saturate an alpha quantity to `0..=1`. A non-finite alpha is treated as
/// fully opaque.
pub(crate) fn limit1(value: Float) -> Float {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{brightness, derive, hsl_to_rgb, hsv_to_rgb, limit1, luminance, wrap_hue};

    #[test]
    fn test_derive() {
        // #472966 by hand: max 102, min 41, delta 61.
        let components = derive(71, 41, 102);
        assert_eq!(components.h, 270.0);
        assert_eq!(components.s, 61.0 / 102.0);
        assert_eq!(components.v, 0.4);
        assert_eq!(components.l, 143.0 / 510.0);

        // Achromatic colors have no hue and no saturation.
        let gray = derive(128, 128, 128);
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert_eq!(gray.l, 128.0 / 255.0);
        assert_eq!(gray.v, 128.0 / 255.0);

        // Rounding the six-sector formula must not produce 360 degrees.
        let reddish = derive(255, 0, 1);
        assert_eq!(reddish.h, 0.0);
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(270.0, 0.6, 0.4), [102, 41, 163]);
        assert_eq!(hsl_to_rgb(251.0, 1.0, 0.38), [36, 0, 194]);
        // Achromatic short-circuit.
        assert_eq!(hsl_to_rgb(123.0, 0.0, 0.5), [128, 128, 128]);
        // Out-of-range hues reduce into 0..360 before sector selection.
        assert_eq!(hsl_to_rgb(-700.0, 0.6, 0.4), hsl_to_rgb(20.0, 0.6, 0.4));
        assert_eq!(hsl_to_rgb(630.0, 0.6, 0.4), hsl_to_rgb(270.0, 0.6, 0.4));
    }

    #[test]
    fn test_hsv_to_rgb() {
        assert_eq!(hsv_to_rgb(270.0, 0.6, 0.4), [71, 41, 102]);
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(270.0, 0.0, 0.4), [102, 102, 102]);
        assert_eq!(hsv_to_rgb(-90.0, 0.6, 0.4), hsv_to_rgb(270.0, 0.6, 0.4));
    }

    #[test]
    fn test_metrics() {
        assert_eq!(luminance(0, 0, 0), 0.0);
        assert_eq!(luminance(255, 255, 255), 1.0);
        assert_eq!(brightness(0, 0, 0), 0.0);
        assert_eq!(brightness(255, 255, 255), 255.0);
    }

    #[test]
    fn test_wrap_and_limit() {
        assert_eq!(wrap_hue(-700.0), 20.0);
        assert_eq!(wrap_hue(360.0), 0.0);
        assert_eq!(wrap_hue(crate::Float::NAN), 0.0);
        assert_eq!(limit1(-1.0), 0.0);
        assert_eq!(limit1(100.0), 1.0);
        assert_eq!(limit1(crate::Float::NAN), 1.0);
        assert_eq!(limit1(0.52), 0.52);
    }
}
