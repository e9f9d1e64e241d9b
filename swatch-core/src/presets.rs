//! CSS-compatible named colors.
//!
//! Each preset is built on first access and shared read-only for the rest of
//! the process.

use crate::color::Color;

lazy_static::lazy_static! {
    pub static ref RED: Color = Color::from_channels(255, 0, 0);
    pub static ref GREEN: Color = Color::from_channels(0, 255, 0);
    pub static ref BLUE: Color = Color::from_channels(0, 0, 255);
    pub static ref BROWN: Color = Color::from_channels(156, 42, 42);
    pub static ref ORANGE: Color = Color::from_channels(255, 165, 0);
    pub static ref PURPLE: Color = Color::from_channels(128, 0, 128);
    pub static ref YELLOW: Color = Color::from_channels(255, 255, 0);
    pub static ref BLACK: Color = Color::from_channels(0, 0, 0);
    pub static ref WHITE: Color = Color::from_channels(255, 255, 255);

    /// Every preset paired with its lowercase name.
    pub static ref ALL: [(&'static str, Color); 9] = [
        ("red", *RED),
        ("green", *GREEN),
        ("blue", *BLUE),
        ("brown", *BROWN),
        ("orange", *ORANGE),
        ("purple", *PURPLE),
        ("yellow", *YELLOW),
        ("black", *BLACK),
        ("white", *WHITE),
    ];
}

/// Looks up a preset by name, ignoring ASCII case.
pub fn named(name: &str) -> Option<Color> {
    ALL.iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_preset_channels() {
        assert_eq!(RED.to_rgb(), (255, 0, 0));
        assert_eq!(GREEN.to_rgb(), (0, 255, 0));
        assert_eq!(BLUE.to_rgb(), (0, 0, 255));
        assert_eq!(BROWN.to_rgb(), (156, 42, 42));
        assert_eq!(ORANGE.to_rgb(), (255, 165, 0));
        assert_eq!(PURPLE.to_rgb(), (128, 0, 128));
        assert_eq!(YELLOW.to_rgb(), (255, 255, 0));
        assert_eq!(BLACK.to_rgb(), (0, 0, 0));
        assert_eq!(WHITE.to_rgb(), (255, 255, 255));
    }

    #[test]
    fn test_presets_match_rgb_constructor() {
        for (_, color) in ALL.iter() {
            let (r, g, b) = color.to_rgb();
            let rebuilt = Color::from_rgb(i32::from(r), i32::from(g), i32::from(b)).unwrap();
            assert_eq!(*color, rebuilt);
        }
    }

    #[test]
    fn test_black_preset_is_default() {
        assert_eq!(*BLACK, Color::default());
    }

    #[test]
    fn test_named_lookup() {
        assert_eq!(named("purple"), Some(*PURPLE));
        assert_eq!(named("YELLOW"), Some(*YELLOW));
        assert_eq!(named("Brown"), Some(*BROWN));
        assert_eq!(named("cyan"), None);
        assert_eq!(named(""), None);
    }

    #[test]
    fn test_presets_shared_across_threads() {
        let handles: Vec<_> = (0..4).map(|_| thread::spawn(|| WHITE.hex())).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 0xFFFFFF);
        }
    }
}
