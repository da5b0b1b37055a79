//! CSS-style color strings.

use palette::{FromColor, Hsl, Hsv, Srgb, Srgba};

/// Parse a color string into sRGB with alpha.
///
/// Supports the following formats:
/// - Hex colors: #RGB, #RGBA, #RRGGBB, #RRGGBBAA
/// - RGB/RGBA: rgb(r, g, b), rgba(r, g, b, a)
/// - HSL/HSLA: hsl(h, s%, l%), hsla(h, s%, l%, a)
/// - HSV/HSVA: hsv(h, s%, v%), hsva(h, s%, v%, a)
/// - Named colors: black, white, red, etc. and `transparent`
pub(crate) fn parse_css(value: &str) -> Option<Srgba> {
    let value = value.trim();
    let lower = value.to_ascii_lowercase();

    if lower == "transparent" {
        return Some(Srgba::new(0.0, 0.0, 0.0, 0.0));
    }

    if lower.starts_with("rgb") {
        return parse_rgb_color(&lower);
    }

    if lower.starts_with("hsl") || lower.starts_with("hsv") {
        return parse_cylindrical_color(&lower);
    }

    if let Some(rgba) = parse_hex_color(&lower) {
        return Some(rgba);
    }

    named_color(&lower)
}

fn parse_hex_color(value: &str) -> Option<Srgba> {
    let hex = value.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| -> Option<f32> {
        let digits = &hex[range];
        let digits = if digits.len() == 1 {
            digits.repeat(2)
        } else {
            digits.to_string()
        };
        u8::from_str_radix(&digits, 16).ok().map(|v| v as f32 / 255.0)
    };

    match hex.len() {
        3 => Some(Srgba::new(channel(0..1)?, channel(1..2)?, channel(2..3)?, 1.0)),
        4 => Some(Srgba::new(
            channel(0..1)?,
            channel(1..2)?,
            channel(2..3)?,
            channel(3..4)?,
        )),
        6 => Some(Srgba::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0)),
        8 => Some(Srgba::new(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => None,
    }
}

/// Split `name(a, b, c[, d])` into its arguments.
fn arguments<'a>(value: &'a str, names: &[&str]) -> Option<Vec<&'a str>> {
    let open = value.find('(')?;
    if !names.contains(&value[..open].trim()) {
        return None;
    }
    let inner = value[open + 1..].strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn parse_rgb_color(value: &str) -> Option<Srgba> {
    let parts = arguments(value, &["rgb", "rgba"])?;
    if parts.len() < 3 || parts.len() > 4 {
        return None;
    }

    let r = parse_rgb_component(parts[0])?;
    let g = parse_rgb_component(parts[1])?;
    let b = parse_rgb_component(parts[2])?;
    let a = match parts.get(3) {
        Some(alpha) => parse_alpha(alpha)?,
        None => 1.0,
    };

    Some(Srgba::new(r, g, b, a))
}

/// `hsl()`, `hsla()`, `hsv()` and `hsva()`; hue in degrees, the other two
/// channels as percentages with or without `%`.
fn parse_cylindrical_color(value: &str) -> Option<Srgba> {
    let parts = arguments(value, &["hsl", "hsla", "hsv", "hsva"])?;
    if parts.len() < 3 || parts.len() > 4 {
        return None;
    }

    let h = parts[0].trim_end_matches("deg").parse::<f32>().ok()?;
    let s = parse_percentage(parts[1])?;
    let third = parse_percentage(parts[2])?;
    let a = match parts.get(3) {
        Some(alpha) => parse_alpha(alpha)?,
        None => 1.0,
    };

    let rgb = if value.starts_with("hsv") {
        let hsv: Hsv = Hsv::new(h, s, third);
        Srgb::from_color(hsv)
    } else {
        let hsl: Hsl = Hsl::new(h, s, third);
        Srgb::from_color(hsl)
    };
    let (r, g, b) = rgb.into_components();
    Some(Srgba::new(r, g, b, a))
}

/// Parse a single RGB component which can be a number (0-255) or percentage
fn parse_rgb_component(value: &str) -> Option<f32> {
    match value.strip_suffix('%') {
        Some(percent) => percent
            .trim()
            .parse::<f32>()
            .ok()
            .map(|v| (v / 100.0).clamp(0.0, 1.0)),
        None => value
            .parse::<f32>()
            .ok()
            .map(|v| (v / 255.0).clamp(0.0, 1.0)),
    }
}

fn parse_percentage(value: &str) -> Option<f32> {
    let number = value.strip_suffix('%').unwrap_or(value).trim();
    number.parse::<f32>().ok().map(|v| (v / 100.0).clamp(0.0, 1.0))
}

fn parse_alpha(value: &str) -> Option<f32> {
    match value.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f32>().ok().map(|v| v / 100.0),
        None => value.parse::<f32>().ok(),
    }
    .map(|a| a.clamp(0.0, 1.0))
}

fn named_color(name: &str) -> Option<Srgba> {
    let (r, g, b) = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        _ => return None,
    };
    Some(Srgba::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        1.0,
    ))
}
