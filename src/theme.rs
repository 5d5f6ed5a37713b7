use gpui::{Hsla, Rgba};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stock tint from the flat-design palette the widget shipped with.
pub fn ios7_blue() -> Hsla {
    gpui::rgb(0x007aff).into()
}

pub fn ios7_gray() -> Hsla {
    gpui::rgb(0x65b6b7).into()
}

// Custom serialization module for Hsla <-> Hex String
pub mod hex_color {
    use super::*;
    use eyre::{bail, Result};

    pub fn serialize<S>(color: &Hsla, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_hex_str(color))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Hsla, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        parse_hex_str(&hex).map_err(serde::de::Error::custom)
    }

    pub fn to_hex_str(color: &Hsla) -> String {
        let rgba = Rgba::from(*color);
        let r = (rgba.r * 255.0).round() as u32;
        let g = (rgba.g * 255.0).round() as u32;
        let b = (rgba.b * 255.0).round() as u32;
        let a = (rgba.a * 255.0).round() as u32;
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`, leading `#` optional.
    pub fn parse_hex_str(hex: &str) -> Result<Hsla> {
        let digits = hex.trim().trim_start_matches('#');
        let value = u32::from_str_radix(digits, 16)?;
        let (r, g, b, a) = match digits.len() {
            6 => (value >> 16 & 0xff, value >> 8 & 0xff, value & 0xff, 255),
            8 => (
                value >> 24 & 0xff,
                value >> 16 & 0xff,
                value >> 8 & 0xff,
                value & 0xff,
            ),
            len => bail!("expected 6 or 8 hex digits, got {len}: {hex:?}"),
        };
        Ok(Rgba {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
        .into())
    }
}

/// Colors of the widget, loadable from JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgressTheme {
    /// Stroke color of all three layers.
    #[serde(with = "hex_color")]
    pub tint_color: Hsla,
    /// Interior of the ring before completion.
    #[serde(with = "hex_color")]
    pub background_color: Hsla,
    /// Checkmark color at completion.
    #[serde(with = "hex_color")]
    pub tick_color: Hsla,
}

impl Default for ProgressTheme {
    fn default() -> Self {
        Self {
            tint_color: ios7_blue(),
            background_color: gpui::transparent_black(),
            tick_color: gpui::white(),
        }
    }
}
