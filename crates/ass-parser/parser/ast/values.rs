//! Typed field values shared by styles, events and script info
//!
//! These are produced by the value parsers in [`crate::parser::fields`].

use core::fmt;

/// RGBA color decoded from `&HAABBGGRR`
///
/// The alpha component follows ASS conventions: `0x00` is opaque and `0xFF`
/// fully transparent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssColor {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha (transparency)
    pub a: u8,
}

impl AssColor {
    /// Create a color from its components
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for AssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&H{:02X}{:02X}{:02X}{:02X}", self.a, self.b, self.g, self.r)
    }
}

/// Timestamp with centisecond precision, `H:MM:SS.hh`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssTime {
    /// Hours, a single digit
    pub hour: u8,
    /// Minutes
    pub min: u8,
    /// Seconds
    pub sec: u8,
    /// Hundredths of a second
    pub hundredths: u8,
}

impl AssTime {
    /// Create a timestamp from its components
    #[must_use]
    pub const fn new(hour: u8, min: u8, sec: u8, hundredths: u8) -> Self {
        Self {
            hour,
            min,
            sec,
            hundredths,
        }
    }

    /// Total duration since zero in centiseconds
    #[must_use]
    pub const fn total_centiseconds(self) -> u32 {
        ((self.hour as u32 * 60 + self.min as u32) * 60 + self.sec as u32) * 100
            + self.hundredths as u32
    }
}

impl fmt::Display for AssTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02}:{:02}.{:02}",
            self.hour, self.min, self.sec, self.hundredths
        )
    }
}

/// Per-event margin override
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MarginValue {
    /// Use the margin of the referenced style (`0000`)
    #[default]
    Default,
    /// Margin in pixels
    Explicit(u32),
}

impl MarginValue {
    /// Resolve against the style margin
    #[must_use]
    pub const fn resolve(self, style_margin: u32) -> u32 {
        match self {
            Self::Default => style_margin,
            Self::Explicit(value) => value,
        }
    }
}

/// Border style of a style definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderStyle {
    /// Outline with drop shadow (`1`)
    #[default]
    Outline,
    /// Opaque box behind the text (`3`)
    OpaqueBox,
}

/// Numpad-layout alignment (`1`-`9`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// `1`
    BottomLeft,
    /// `2`
    #[default]
    BottomCenter,
    /// `3`
    BottomRight,
    /// `4`
    MiddleLeft,
    /// `5`
    MiddleCenter,
    /// `6`
    MiddleRight,
    /// `7`
    TopLeft,
    /// `8`
    TopCenter,
    /// `9`
    TopRight,
}

impl Alignment {
    /// Numpad value of this alignment
    #[must_use]
    pub const fn numpad(self) -> u8 {
        match self {
            Self::BottomLeft => 1,
            Self::BottomCenter => 2,
            Self::BottomRight => 3,
            Self::MiddleLeft => 4,
            Self::MiddleCenter => 5,
            Self::MiddleRight => 6,
            Self::TopLeft => 7,
            Self::TopCenter => 8,
            Self::TopRight => 9,
        }
    }
}

/// Line wrapping mode from `[Script Info]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapStyle {
    /// `0`: smart wrapping, upper line wider
    Smart,
    /// `1`: end-of-line wrapping, only `\N` breaks
    EndOfLine,
    /// `2`: no wrapping, `\n` and `\N` both break
    NoWrap,
    /// `3`: smart wrapping, lower line wider
    SmartLowerWider,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_display_round_trips_order() {
        let color = AssColor::new(0x80, 0x00, 0xFF, 0x00);
        assert_eq!(color.to_string(), "&H00FF0080");
    }

    #[test]
    fn time_total_and_display() {
        let time = AssTime::new(1, 2, 3, 45);
        assert_eq!(time.total_centiseconds(), 372_345);
        assert_eq!(time.to_string(), "1:02:03.45");
        assert!(AssTime::new(0, 0, 1, 0) < AssTime::new(0, 0, 1, 1));
    }

    #[test]
    fn margin_resolution() {
        assert_eq!(MarginValue::Default.resolve(10), 10);
        assert_eq!(MarginValue::Explicit(12).resolve(10), 12);
        assert_eq!(MarginValue::default(), MarginValue::Default);
    }

    #[test]
    fn alignment_numpad() {
        assert_eq!(Alignment::default().numpad(), 2);
        assert_eq!(Alignment::TopRight.numpad(), 9);
    }
}
