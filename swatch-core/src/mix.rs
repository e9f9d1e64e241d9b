//! Linear mixing of two colors in RGB space.

use crate::color::Color;
use crate::error::{ColorError, Result};
use tracing::{debug, trace};

/// Returns the color midway between `x` and `y`.
///
/// Each RGB channel is the floor of the two channels' average; CMYK is
/// re-derived from the averaged triple.
pub fn mix(x: &Color, y: &Color) -> Color {
    let mixed = Color::from_channels(
        average(x.r(), y.r()),
        average(x.g(), y.g()),
        average(x.b(), y.b()),
    );
    trace!(x = x.hex(), y = y.hex(), mixed = mixed.hex(), "mixed colors");
    mixed
}

/// Mixes `x` and `y` with `ratio` as the weight given to `x`.
///
/// Each channel is computed as `trunc(ratio * x + (1 - ratio) * y) / 2`.
/// The weighted sum is halved after truncation, so the result is never
/// brighter than 127 on any channel.
pub fn mix_weighted(x: &Color, y: &Color, ratio: f64) -> Result<Color> {
    if !(0.0..=1.0).contains(&ratio) {
        debug!(ratio, "rejected mix ratio");
        return Err(ColorError::InvalidArgument(format!(
            "ratio of color mixture must be between 0 and 1. Given: {ratio}"
        )));
    }

    let complement = 1.0 - ratio;
    let weigh = |a: u8, b: u8| -> u8 {
        let weighted = (ratio * f64::from(a) + complement * f64::from(b)) as u32;
        (weighted / 2) as u8
    };

    let mixed = Color::from_channels(
        weigh(x.r(), y.r()),
        weigh(x.g(), y.g()),
        weigh(x.b(), y.b()),
    );
    trace!(
        x = x.hex(),
        y = y.hex(),
        ratio,
        mixed = mixed.hex(),
        "mixed colors"
    );
    Ok(mixed)
}

fn average(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b)) / 2) as u8
}

impl Color {
    /// See [`mix`].
    pub fn mix(&self, other: &Color) -> Color {
        mix(self, other)
    }

    /// See [`mix_weighted`].
    pub fn mix_weighted(&self, other: &Color, ratio: f64) -> Result<Color> {
        mix_weighted(self, other, ratio)
    }
}
