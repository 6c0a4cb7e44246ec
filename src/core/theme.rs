use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, DashResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels, e.g. `Color::rgb8(0x0d, 0x11, 0x17)`.
    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0)
    }

    /// Parses `#rrggbb` hex notation as used by web-facing theme tokens.
    pub fn from_hex(input: &str) -> DashResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ConfigurationError::InvalidTheme(format!(
                "hex color `{input}` must be `#rrggbb`"
            )));
        }
        let parse_channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| {
                ConfigurationError::InvalidTheme(format!("hex color `{input}` must be `#rrggbb`"))
            })
        };
        Ok(Self::rgb8(
            parse_channel(0..2)?,
            parse_channel(2..4)?,
            parse_channel(4..6)?,
        ))
    }

    /// Linear blend between `self` (t = 0) and `other` (t = 1).
    #[must_use]
    pub fn mix(self, other: Color, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let blend = |a: f64, b: f64| a + (b - a) * t;
        Self::rgba(
            blend(self.red, other.red),
            blend(self.green, other.green),
            blend(self.blue, other.blue),
            blend(self.alpha, other.alpha),
        )
    }

    pub fn validate(self) -> DashResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigurationError::InvalidTheme(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Static color tokens applied uniformly to every chart on a page.
///
/// A theme is an explicit value handed to the renderer, never process-wide
/// state injected behind the caller's back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub font_size_px: f64,
}

impl Theme {
    /// The dark dashboard palette: near-black panel, white text, blue accent.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            background: Color::rgb8(0x0d, 0x11, 0x17),
            foreground: Color::rgb(1.0, 1.0, 1.0),
            accent: Color::rgb8(0x1f, 0x77, 0xb4),
            font_size_px: 14.0,
        }
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            background: Color::rgb(1.0, 1.0, 1.0),
            foreground: Color::rgb8(0x0c, 0x16, 0x25),
            accent: Color::rgb8(0x25, 0x63, 0xeb),
            font_size_px: 14.0,
        }
    }

    pub fn validate(self) -> DashResult<()> {
        self.background.validate()?;
        self.foreground.validate()?;
        self.accent.validate()?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ConfigurationError::InvalidTheme(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
