//! Color parsing and derivation utilities for theme palettes.
//!
//! Everything here is total: malformed input produces a documented fallback
//! value, never a panic, so no failure can escape into the generators.

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color with hue in degrees and saturation/lightness as percentages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Rgb {
    /// Parse a `#rrggbb` or `#rgb` color. The leading `#` is required;
    /// three-digit shorthand is expanded by doubling each digit.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b })
            }
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self {
                    r: r * 17,
                    g: g * 17,
                    b: b * 17,
                })
            }
            _ => None,
        }
    }

    /// Convert to a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness via the ITU-R BT.601 weights.
    pub fn luma(&self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }

    /// Blend two colors together with a linear RGB interpolation.
    pub fn blend(&self, other: &Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb {
            r: ((1.0 - t) * self.r as f32 + t * other.r as f32).round() as u8,
            g: ((1.0 - t) * self.g as f32 + t * other.g as f32).round() as u8,
            b: ((1.0 - t) * self.b as f32 + t * other.b as f32).round() as u8,
        }
    }

    /// Convert to HSL.
    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < f32::EPSILON {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: round1(l * 100.0),
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if (max - r).abs() < f32::EPSILON {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if (max - g).abs() < f32::EPSILON {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } * 60.0;

        Hsl {
            h: round1(h),
            s: round1(s * 100.0),
            l: round1(l * 100.0),
        }
    }
}

fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Pick the black-or-white text color that is legible against `hex`.
///
/// Returns `"#000000"` when the background luma reaches 128, `"#FFFFFF"`
/// otherwise. Malformed or absent input takes the white fallback so text
/// stays readable on the dark backgrounds the themes default to.
pub fn contrast_color(hex: Option<&str>) -> &'static str {
    match hex.and_then(Rgb::from_hex) {
        Some(rgb) if rgb.luma() >= 128.0 => "#000000",
        _ => "#FFFFFF",
    }
}

/// Convert a strict `#rrggbb` color to HSL; `None` for anything else.
pub fn hex_to_hsl(hex: Option<&str>) -> Option<Hsl> {
    let hex = hex?;
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Rgb::from_hex(hex).map(|rgb| rgb.to_hsl())
}

/// Blend `hex` toward `other` by `t` (0.0 keeps `hex`, 1.0 gives `other`).
///
/// If either color fails to parse the first operand is returned unchanged.
pub fn mix(hex: &str, other: &str, t: f32) -> String {
    match (Rgb::from_hex(hex), Rgb::from_hex(other)) {
        (Some(a), Some(b)) => a.blend(&b, t).to_hex(),
        _ => hex.to_string(),
    }
}

/// Blend a color toward black by `t`. Used for derived sub-section
/// backgrounds ("darker primary").
pub fn darken(hex: &str, t: f32) -> String {
    mix(hex, "#000000", t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(
            Rgb::from_hex("#ff5500"),
            Some(Rgb { r: 255, g: 85, b: 0 })
        );
        assert_eq!(
            Rgb::from_hex("#fff"),
            Some(Rgb {
                r: 255,
                g: 255,
                b: 255
            })
        );
        assert_eq!(Rgb::from_hex("ff5500"), None);
        assert_eq!(Rgb::from_hex("#ff55"), None);
        assert_eq!(Rgb::from_hex("#gg5500"), None);
    }

    #[test]
    fn test_contrast_color_poles() {
        assert_eq!(contrast_color(Some("#000000")), "#FFFFFF");
        assert_eq!(contrast_color(Some("#FFFFFF")), "#000000");
    }

    #[test]
    fn test_contrast_color_threshold() {
        // #808080 has luma exactly 128.0, which lands on the black side.
        assert_eq!(contrast_color(Some("#808080")), "#000000");
        assert_eq!(contrast_color(Some("#7f7f7f")), "#FFFFFF");
    }

    #[test]
    fn test_contrast_color_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(contrast_color(Some("#808080")), "#000000");
        }
    }

    #[test]
    fn test_contrast_color_fallback() {
        assert_eq!(contrast_color(None), "#FFFFFF");
        assert_eq!(contrast_color(Some("")), "#FFFFFF");
        assert_eq!(contrast_color(Some("808080")), "#FFFFFF");
        assert_eq!(contrast_color(Some("#80808")), "#FFFFFF");
        assert_eq!(contrast_color(Some("#80808z")), "#FFFFFF");
    }

    #[test]
    fn test_contrast_color_shorthand() {
        assert_eq!(contrast_color(Some("#fff")), "#000000");
        assert_eq!(contrast_color(Some("#000")), "#FFFFFF");
    }

    #[test]
    fn test_hex_to_hsl() {
        let red = hex_to_hsl(Some("#ff0000")).unwrap();
        assert_eq!(red.h, 0.0);
        assert_eq!(red.s, 100.0);
        assert_eq!(red.l, 50.0);

        let blue = hex_to_hsl(Some("#0000ff")).unwrap();
        assert_eq!(blue.h, 240.0);

        let white = hex_to_hsl(Some("#ffffff")).unwrap();
        assert_eq!(white.s, 0.0);
        assert_eq!(white.l, 100.0);
    }

    #[test]
    fn test_hex_to_hsl_rejects_loose_input() {
        assert_eq!(hex_to_hsl(None), None);
        assert_eq!(hex_to_hsl(Some("#fff")), None);
        assert_eq!(hex_to_hsl(Some("ff0000")), None);
        assert_eq!(hex_to_hsl(Some("#ff00zz")), None);
    }

    #[test]
    fn test_mix_and_darken() {
        assert_eq!(mix("#ffffff", "#000000", 0.5), "#808080");
        assert_eq!(darken("#ff0000", 0.25), "#bf0000");
        // Malformed input passes through unchanged.
        assert_eq!(darken("nope", 0.25), "nope");
    }
}
