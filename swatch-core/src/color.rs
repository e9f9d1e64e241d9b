use crate::error::{ColorError, Result};
use crate::presets;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Largest packed hex value, `#FFFFFF`.
const HEX_MAX: u32 = 0xFF_FFFF;

/// An immutable display color.
///
/// Every instance carries both its RGB and CMYK representation along with
/// the packed hex value, all derived once at construction. RGB channels are
/// integers from 0 to 255, CMYK channels are fractions from 0.0 to 1.0.
///
/// There is no way to obtain a `Color` with out-of-range channels: the
/// constructors validate their inputs and return
/// [`ColorError::InvalidArgument`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    c: f64,
    m: f64,
    y: f64,
    k: f64,
    hex: u32,
}

impl Default for Color {
    fn default() -> Self {
        Self::new()
    }
}

impl Color {
    /// Pure black, with the key channel fixed at 1.0.
    pub const fn new() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            c: 0.0,
            m: 0.0,
            y: 0.0,
            k: 1.0,
            hex: 0,
        }
    }

    /// Creates a color from red, green and blue channels (0 to 255).
    ///
    /// The CMYK channels are derived from the normalized RGB values. Black
    /// has no defined cyan, magenta or yellow, so `(0, 0, 0)` yields
    /// `c = m = y = 0` and `k = 1`.
    pub fn from_rgb(r: i32, g: i32, b: i32) -> Result<Self> {
        let r = validate_rgb("red", r)?;
        let g = validate_rgb("green", g)?;
        let b = validate_rgb("blue", b)?;

        Ok(Self::from_channels(r, g, b))
    }

    /// Creates a color from cyan, magenta, yellow and key channels (0.0 to 1.0).
    ///
    /// RGB channels are computed as `255 * (1 - c) * (1 - k)` and truncated
    /// toward zero, so converting back to CMYK is not guaranteed to be exact.
    pub fn from_cmyk(c: f64, m: f64, y: f64, k: f64) -> Result<Self> {
        let c = validate_cmyk("cyan", c)?;
        let m = validate_cmyk("magenta", m)?;
        let y = validate_cmyk("yellow", y)?;
        let k = validate_cmyk("key", k)?;

        let r = subtract(c, k);
        let g = subtract(m, k);
        let b = subtract(y, k);

        Ok(Self {
            r,
            g,
            b,
            c,
            m,
            y,
            k,
            hex: pack(r, g, b),
        })
    }

    /// Creates a color from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Result<Self> {
        if hex > HEX_MAX {
            debug!(hex, "rejected hex value");
            return Err(ColorError::InvalidArgument(format!(
                "hex value must be between 0x000000 and 0xFFFFFF. Given: {hex:#X}"
            )));
        }

        let [_, r, g, b] = hex.to_be_bytes();
        Ok(Self::from_channels(r, g, b))
    }

    /// RGB construction for channels already known to be in range.
    pub(crate) fn from_channels(r: u8, g: u8, b: u8) -> Self {
        let max = r.max(g).max(b);
        if max == 0 {
            return Self::new();
        }

        // (1 - x' - k) / (1 - k) reduces to (max - x) / max, which stays
        // inside [0, 1] without floating point drift.
        let scale = f64::from(max);
        Self {
            r,
            g,
            b,
            c: f64::from(max - r) / scale,
            m: f64::from(max - g) / scale,
            y: f64::from(max - b) / scale,
            k: 1.0 - scale / 255.0,
            hex: pack(r, g, b),
        }
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn k(&self) -> f64 {
        self.k
    }

    /// Packed `r * 65536 + g * 256 + b`.
    pub fn hex(&self) -> u32 {
        self.hex
    }

    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub fn to_cmyk(&self) -> (f64, f64, f64, f64) {
        (self.c, self.m, self.y, self.k)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.hex)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Parses a preset name (`"orange"`, case-insensitive) or a
    /// `#RRGGBB` / `RRGGBB` hex literal.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(color) = presets::named(trimmed) {
            return Ok(color);
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            debug!(input = s, "rejected color literal");
            return Err(ColorError::InvalidArgument(format!(
                "unrecognized color: {s:?}"
            )));
        }

        let hex = u32::from_str_radix(digits, 16)
            .map_err(|e| ColorError::InvalidArgument(format!("unrecognized color {s:?}: {e}")))?;
        Self::from_hex(hex)
    }
}

fn pack(r: u8, g: u8, b: u8) -> u32 {
    65536 * u32::from(r) + 256 * u32::from(g) + u32::from(b)
}

fn subtract(channel: f64, key: f64) -> u8 {
    // Both factors are within [0, 1]; the cast truncates.
    (255.0 * (1.0 - channel) * (1.0 - key)) as u8
}

fn validate_rgb(channel: &'static str, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| {
        debug!(channel, value, "rejected RGB channel");
        ColorError::InvalidArgument(format!(
            "RGB values must be between 0 and 255 ({channel} = {value})"
        ))
    })
}

fn validate_cmyk(channel: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        debug!(channel, value, "rejected CMYK channel");
        Err(ColorError::InvalidArgument(format!(
            "CMYK values must be between 0 and 1 ({channel} = {value})"
        )))
    }
}
