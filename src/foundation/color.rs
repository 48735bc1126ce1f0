use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Straight-alpha RGBA color with normalized `[0, 1]` channels.
///
/// Serializes as a hex string (`"#rrggbb"` or `"#rrggbbaa"`); deserializes
/// from a hex string or a `[r, g, b]` / `[r, g, b, a]` float array.
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Build from explicit channels.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Parse `#rrggbb` / `#rrggbbaa` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> Result<u8, String> {
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        let (r, g, b, a) = match s.len() {
            6 => (
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                255,
            ),
            8 => (
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                hex_byte(&s[6..8])?,
            ),
            _ => {
                return Err("hex color must be #rrggbb or #rrggbbaa".to_owned());
            }
        };

        Ok(Self::rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        ))
    }

    /// Format as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        fn quantize(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let (r, g, b, a) = (
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        );
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Darken the color channels by `amount` in `[0, 1]`, leaving alpha as is.
    ///
    /// `0.0` is unchanged, `1.0` is black.
    pub fn darkened(self, amount: f64) -> Self {
        let keep = 1.0 - amount.clamp(0.0, 1.0);
        Self::rgba(self.r * keep, self.g * keep, self.b * keep, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Rgba::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Rgba::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Rgba::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}
