//! # swatch
//!
//! An immutable display color that keeps its RGB, CMYK and hex
//! representations side by side.
//!
//! ## Features
//!
//! - **RGB and CMYK construction**: build a color from either model; the other
//!   one is derived on the spot
//! - **Hex packing**: every color exposes `r * 65536 + g * 256 + b`, and can be
//!   built from or formatted as `#RRGGBB`
//! - **Mixing**: plain averages and weighted blends of two colors
//! - **Presets**: CSS-compatible named colors shared process-wide
//!
//! ## Quick Start
//!
//! ```rust
//! use swatch::{mix, presets, Color, Result};
//!
//! # fn main() -> Result<()> {
//! let teal = Color::from_rgb(0, 128, 128)?;
//! assert_eq!(teal.hex(), 0x008080);
//! assert_eq!(teal.c(), 1.0);
//!
//! let khaki = Color::from_cmyk(0.0, 0.0, 0.5, 0.0)?;
//! assert_eq!(khaki.to_rgb(), (255, 255, 127));
//!
//! let purple = mix(&presets::RED, &presets::BLUE);
//! assert_eq!(purple.to_string(), "#7F007F");
//!
//! assert!(Color::from_rgb(256, 0, 0).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`color`] - the [`Color`] value type and its constructors
//! - [`mix`](mod@mix) - unweighted and weighted mixing
//! - [`presets`] - named colors
//! - [`error`] - [`ColorError`] and [`Result`]

pub mod color;
pub mod error;
pub mod mix;
pub mod presets;

pub use color::Color;
pub use error::{ColorError, Result};
pub use mix::{mix, mix_weighted};
