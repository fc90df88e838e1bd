//! # Fastcolor
//!
//! Fastcolor implements fast, allocation-light color values for UI and
//! styling tooling that doesn't want to pull in a general-purpose color
//! library.
//!
//! The crate's main abstractions are:
//!
//!   * [`Color`] holds the **canonical color value**, an RGB triple with
//!     alpha. Its methods expose the crate's functionality, including
//!     derivation of cylindrical components and perceptual metrics, blending
//!     and alpha compositing, and serialization to hexadecimal, `rgb()`, and
//!     `hsl()` strings.
//!   * [`Rgb`], [`Hsl`], and [`Hsv`] are the **structured component types**.
//!     Each converts into a [`Color`] via `From`, which makes the
//!     constructor's input union a typed union instead of a runtime shape
//!     check.
//!   * [`Color as FromStr`](struct.Color.html#impl-FromStr-for-Color)
//!     implements **string parsing** for hashed hexadecimal notation as well
//!     as the `rgb()`/`rgba()`, `hsl()`/`hsla()`, and `hsv()`/`hsb()`
//!     functions, covering both the legacy comma-separated and the modern
//!     space/slash-separated CSS syntax.
//!
//! A [`Color`]'s red, green, and blue channels are immutable `u8`s, which
//! makes every color valid by construction. The cylindrical HSL/HSV
//! components, together with the perceived brightness, are derived from the
//! channels on first access and memoized; since the channels cannot change,
//! the memo never needs invalidation. Alpha is the one mutable component,
//! through the chaining setter [`Color::set_alpha`], and nothing memoized
//! depends on it. All other operations return new values.
//!
//! ```
//! use std::str::FromStr;
//! use fastcolor::Color;
//!
//! let plum = Color::from_str("hsl(270 60 40 / 80%)")?;
//! assert_eq!(plum.to_hex_string(), "#6629a3cc");
//! assert!(plum.is_dark());
//!
//! let lighter = plum.lighten(10.0);
//! assert_eq!(lighter.to_rgb_string(), "rgba(128,51,204,0.8)");
//! # Ok::<(), fastcolor::error::ColorFormatError>(())
//! ```
//!
//!
//! ## Optional Features
//!
//! Fastcolor supports two feature flags:
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     instead of `f32`. This feature is enabled by default.
//!   - **`serde`** derives `serde::Serialize` and `serde::Deserialize` for
//!     the structured component types. This feature is disabled by default.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod color;
mod convert;
pub mod error;
mod string;

pub use color::{Color, Hsl, Hsv, Rgb};
