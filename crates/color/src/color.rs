//! Colors for sketches.
//!
//! A [`Color`] is stored as HSV with alpha (via `palette`). Anything the
//! drawing surface consumes goes through [`Color::rgb`], a CSS color string.

mod parse;

use palette::{FromColor, Hsva, Srgba};
use random::Random;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("unrecognized color: {0:?}")]
    Parse(String),
}

/// RGBA channels as bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RgbChannels {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// HSV channels: hue in degrees `[0, 360)`, saturation/value/alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HsvChannels {
    pub h: f32,
    pub s: f32,
    pub v: f32,
    pub a: f32,
}

/// Partial HSV description; missing channels are drawn at random.
///
/// `h` is in degrees, `s` and `v` in percent, `a` in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HsvOptions {
    pub h: Option<f32>,
    pub s: Option<f32>,
    pub v: Option<f32>,
    pub a: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    hsva: Hsva,
}

impl Color {
    /// `h` in degrees, `s` and `v` in percent, `a` in `[0, 1]`. Out of range
    /// channels are clamped.
    pub fn hsv(h: f32, s: f32, v: f32, a: f32) -> Self {
        let hsva: Hsva = Hsva::new(
            h.clamp(0.0, 360.0),
            (s / 100.0).clamp(0.0, 1.0),
            (v / 100.0).clamp(0.0, 1.0),
            a.clamp(0.0, 1.0),
        );
        Self { hsva }
    }

    /// A random opaque color. Three draws: hue, saturation, value.
    pub fn random(random: &mut Random) -> Self {
        Self::from_options(HsvOptions::default(), random)
    }

    /// Fill in missing channels from `random`, drawing hue, saturation and
    /// value in that order. Only missing channels consume a draw.
    pub fn from_options(options: HsvOptions, random: &mut Random) -> Self {
        let h = options.h.unwrap_or_else(|| random.float(0.0, 360.0) as f32);
        let s = options.s.unwrap_or_else(|| random.float(0.0, 100.0) as f32);
        let v = options.v.unwrap_or_else(|| random.float(0.0, 100.0) as f32);
        Self::hsv(h, s, v, options.a.unwrap_or(1.0))
    }

    /// A random color reproducible from `seed` alone.
    pub fn seeded(seed: &str) -> Self {
        let mut random = Random::new(format!("Color {seed}"), Some(seed));
        Self::random(&mut random)
    }

    /// Parse a CSS-style color: hex, `rgb()`, `rgba()`, `hsl()`, `hsla()`,
    /// `hsv()`, `hsva()` or a named color.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        parse::parse_css(value)
            .map(Self::from)
            .ok_or_else(|| ColorError::Parse(value.to_string()))
    }

    /// CSS string for the surface: `rgb(r, g, b)` when opaque, otherwise
    /// `rgba(r, g, b, a)` with alpha rounded to two decimals.
    pub fn rgb(&self) -> String {
        let RgbChannels { r, g, b, .. } = self.to_rgb();
        let alpha = (self.hsva.alpha * 100.0).round() / 100.0;
        if alpha >= 1.0 {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {alpha})")
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(&self) -> String {
        let RgbChannels { r, g, b, a } = self.to_rgb();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    pub fn to_srgba(&self) -> Srgba {
        Srgba::from_color(self.hsva)
    }

    pub fn to_rgb(&self) -> RgbChannels {
        let (r, g, b, a) = self.to_srgba().into_components();
        RgbChannels {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
            a: to_byte(a),
        }
    }

    pub fn to_hsv(&self) -> HsvChannels {
        HsvChannels {
            h: self.hsva.hue.into_positive_degrees(),
            s: self.hsva.saturation,
            v: self.hsva.value,
            a: self.hsva.alpha,
        }
    }

    pub fn alpha(&self) -> f32 {
        self.hsva.alpha
    }

    // === Channel setters ===

    /// Replace the RGB channels, keeping alpha.
    pub fn set_rgb(&mut self, r: u8, g: u8, b: u8) {
        let alpha = self.hsva.alpha;
        *self = Self::from(Srgba::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            alpha,
        ));
    }

    /// Replace the HSV channels (units as in [`HsvChannels`]), keeping alpha.
    pub fn set_hsv(&mut self, h: f32, s: f32, v: f32) {
        self.hsva.hue = h.into();
        self.hsva.saturation = s.clamp(0.0, 1.0);
        self.hsva.value = v.clamp(0.0, 1.0);
    }

    pub fn set_alpha(&mut self, a: f32) {
        self.hsva.alpha = a.clamp(0.0, 1.0);
    }

    pub fn set_red(&mut self, r: u8) {
        let RgbChannels { g, b, .. } = self.to_rgb();
        self.set_rgb(r, g, b);
    }

    pub fn set_green(&mut self, g: u8) {
        let RgbChannels { r, b, .. } = self.to_rgb();
        self.set_rgb(r, g, b);
    }

    pub fn set_blue(&mut self, b: u8) {
        let RgbChannels { r, g, .. } = self.to_rgb();
        self.set_rgb(r, g, b);
    }

    pub fn set_hue(&mut self, h: f32) {
        self.hsva.hue = h.into();
    }

    pub fn set_saturation(&mut self, s: f32) {
        self.hsva.saturation = s.clamp(0.0, 1.0);
    }

    pub fn set_value(&mut self, v: f32) {
        self.hsva.value = v.clamp(0.0, 1.0);
    }

    // === Mixing ===

    /// Linear mix of the HSV channels. `ratio` is the weight of `c1` and is
    /// clamped to `[0, 1]`; hue is interpolated numerically, not around the
    /// color wheel.
    pub fn mix(c1: &Color, c2: &Color, ratio: f32) -> Color {
        let ratio = ratio.clamp(0.0, 1.0);
        let lerp = |a: f32, b: f32| a * ratio + b * (1.0 - ratio);
        let (a, b) = (c1.to_hsv(), c2.to_hsv());
        let hsva: Hsva = Hsva::new(
            lerp(a.h, b.h),
            lerp(a.s, b.s),
            lerp(a.v, b.v),
            lerp(a.a, b.a),
        );
        Color { hsva }
    }

    /// Linear mix of the RGB channels, `ratio` as in [`Color::mix`].
    pub fn mix_rgb(c1: &Color, c2: &Color, ratio: f32) -> Color {
        let ratio = ratio.clamp(0.0, 1.0);
        let lerp = |a: f32, b: f32| a * ratio + b * (1.0 - ratio);
        let (r1, g1, b1, a1) = c1.to_srgba().into_components();
        let (r2, g2, b2, a2) = c2.to_srgba().into_components();
        Color::from(Srgba::new(
            lerp(r1, r2),
            lerp(g1, g2),
            lerp(b1, b2),
            lerp(a1, a2),
        ))
    }
}

fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<Srgba> for Color {
    fn from(rgba: Srgba) -> Self {
        Self {
            hsva: Hsva::from_color(rgba),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rgb())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.rgb())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Any of the forms a style accepts as a color.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSelection {
    Color(Color),
    /// A CSS string, passed to the surface as written if it cannot be parsed.
    Css(String),
    Srgba(Srgba),
}

impl ColorSelection {
    /// Normalize to the CSS string handed to the surface.
    pub fn to_css(&self) -> String {
        match self {
            ColorSelection::Color(color) => color.rgb(),
            ColorSelection::Css(css) => match Color::parse(css) {
                Ok(color) => color.rgb(),
                Err(_) => {
                    log::warn!("color: passing unrecognized color {css:?} through to the surface");
                    css.clone()
                }
            },
            ColorSelection::Srgba(rgba) => Color::from(*rgba).rgb(),
        }
    }
}

impl From<Color> for ColorSelection {
    fn from(color: Color) -> Self {
        ColorSelection::Color(color)
    }
}

impl From<Srgba> for ColorSelection {
    fn from(rgba: Srgba) -> Self {
        ColorSelection::Srgba(rgba)
    }
}

impl From<&str> for ColorSelection {
    fn from(css: &str) -> Self {
        ColorSelection::Css(css.to_string())
    }
}

impl From<String> for ColorSelection {
    fn from(css: String) -> Self {
        ColorSelection::Css(css)
    }
}

impl Serialize for ColorSelection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for ColorSelection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match Color::parse(&s) {
            Ok(color) => ColorSelection::Color(color),
            Err(_) => ColorSelection::Css(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trips_through_rgb() {
        let color = Color::parse("#ff8000").unwrap();
        assert_eq!(color.rgb(), "rgb(255, 128, 0)");
        assert_eq!(color.to_hex(), "#ff8000");
        assert_eq!(Color::parse("nope"), Err(ColorError::Parse("nope".into())));
    }

    #[test]
    fn test_rgba_output_rounds_alpha() {
        let color = Color::hsv(0.0, 100.0, 100.0, 0.333);
        assert_eq!(color.rgb(), "rgba(255, 0, 0, 0.33)");
    }

    #[test]
    fn test_random_draws_three_values() {
        let mut rng = Random::new("colors", Some("palette"));
        let color = Color::random(&mut rng);
        assert_eq!(rng.count(), 3);
        assert_eq!(color.alpha(), 1.0);

        let mut again = Random::new("colors", Some("palette"));
        assert_eq!(Color::random(&mut again), color);
    }

    #[test]
    fn test_from_options_only_draws_missing_channels() {
        let mut rng = Random::new("colors", Some("partial"));
        let options = HsvOptions {
            h: Some(200.0),
            s: Some(0.0),
            ..Default::default()
        };
        let color = Color::from_options(options, &mut rng);
        assert_eq!(rng.count(), 1);
        assert_eq!(color.to_hsv().s, 0.0);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        assert_eq!(Color::seeded("abc"), Color::seeded("abc"));
    }

    #[test]
    fn test_channel_setters() {
        let mut color = Color::parse("rgb(10, 20, 30)").unwrap();
        color.set_red(200);
        color.set_alpha(0.5);
        let rgb = color.to_rgb();
        assert_eq!((rgb.r, rgb.g, rgb.b), (200, 20, 30));
        assert_eq!(color.alpha(), 0.5);

        color.set_hsv(120.0, 1.0, 1.0);
        assert_eq!(color.rgb(), "rgba(0, 255, 0, 0.5)");
        color.set_value(0.0);
        assert_eq!(color.to_rgb().g, 0);
    }

    #[test]
    fn test_mix_weights_first_color() {
        let red = Color::hsv(0.0, 100.0, 100.0, 1.0);
        let blue = Color::hsv(240.0, 100.0, 100.0, 1.0);
        let mid = Color::mix(&red, &blue, 0.5);
        assert!((mid.to_hsv().h - 120.0).abs() < 1e-3);
        assert_eq!(Color::mix(&red, &blue, 3.0), Color::mix(&red, &blue, 1.0));

        let grey = Color::mix_rgb(
            &Color::parse("black").unwrap(),
            &Color::parse("white").unwrap(),
            0.25,
        );
        assert_eq!(grey.to_rgb().r, 191);
    }

    #[test]
    fn test_selection_to_css() {
        assert_eq!(ColorSelection::from("#000").to_css(), "rgb(0, 0, 0)");
        assert_eq!(ColorSelection::from("var(--ink)").to_css(), "var(--ink)");
        let rgba = Srgba::new(1.0, 1.0, 1.0, 0.5);
        assert_eq!(ColorSelection::from(rgba).to_css(), "rgba(255, 255, 255, 0.5)");
    }

    #[test]
    fn test_serde_as_css_string() {
        let color = Color::parse("red").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"rgb(255, 0, 0)\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rgb(), color.rgb());

        let selection: ColorSelection = serde_json::from_str("\"not a color\"").unwrap();
        assert_eq!(selection, ColorSelection::Css("not a color".into()));
    }
}
