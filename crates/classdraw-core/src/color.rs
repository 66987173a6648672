//! Color handling for Classdraw diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing convenience methods for parsing CSS colors
//! and converting them into raster paint colors.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};
use serde::{Deserialize, Deserializer, de};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use classdraw_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Opaque white, the default fill of connector decorations.
    pub fn white() -> Self {
        Self::new("white").expect("'white' is a valid CSS color")
    }

    /// Opaque black.
    pub fn black() -> Self {
        Self::default()
    }

    /// Returns the color as 8-bit sRGB components `[r, g, b, a]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classdraw_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert_eq!(red.to_rgba8(), [255, 0, 0, 255]);
    /// ```
    pub fn to_rgba8(self) -> [u8; 4] {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        [rgba.r, rgba.g, rgba.b, rgba.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::new(&value).map_err(de::Error::custom)
    }
}

impl From<Color> for tiny_skia::Color {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.to_rgba8();
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
        assert_eq!(color.to_rgba8(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_color_named_to_rgba8() {
        assert_eq!(Color::white().to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(Color::new("blue").unwrap().to_rgba8(), [0, 0, 255, 255]);
        assert_eq!(
            Color::new("rgb(10, 20, 30)").unwrap().to_rgba8(),
            [10, 20, 30, 255]
        );
    }

    #[test]
    fn test_color_from_str() {
        let color: Color = "green".parse().unwrap();
        assert_eq!(color, Color::new("green").unwrap());
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_deserialize() {
        let color: Color = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(color.to_rgba8(), [0, 255, 0, 255]);

        let invalid: Result<Color, _> = serde_json::from_str("\"bogus\"");
        assert!(invalid.is_err());
    }
}
