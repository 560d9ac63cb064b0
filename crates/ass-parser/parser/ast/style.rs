//! Style entries of the `[V4+ Styles]` section
//!
//! Contains the typed `StyleEntry` row and the `StyleFormat` column names a
//! section's `Format` line may declare.

use super::values::{Alignment, AssColor, BorderStyle};

/// One `Style:` row
///
/// Columns the section's `Format` line did not declare keep their default.
///
/// # Examples
///
/// ```rust
/// use ass_parser::parser::ast::StyleEntry;
///
/// let style = StyleEntry {
///     name: "Default",
///     fontname: "Arial",
///     fontsize: 20,
///     ..StyleEntry::default()
/// };
/// assert_eq!(style.name, "Default");
/// assert!(!style.bold);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StyleEntry<'a> {
    /// Style name referenced by events
    pub name: &'a str,
    /// Font family
    pub fontname: &'a str,
    /// Font size
    pub fontsize: u32,
    /// Fill color
    pub primary_colour: AssColor,
    /// Karaoke pre-highlight color
    pub secondary_colour: AssColor,
    /// Border color
    pub outline_colour: AssColor,
    /// Shadow or box color
    pub back_colour: AssColor,
    /// Bold flag
    pub bold: bool,
    /// Italic flag
    pub italic: bool,
    /// Underline flag
    pub underline: bool,
    /// Strike-through flag
    pub strike_out: bool,
    /// Horizontal scale in percent
    pub scale_x: u32,
    /// Vertical scale in percent
    pub scale_y: u32,
    /// Extra letter spacing in pixels
    pub spacing: f64,
    /// Rotation in degrees
    pub angle: f64,
    /// Border style
    pub border_style: BorderStyle,
    /// Outline width
    pub outline: f64,
    /// Shadow depth
    pub shadow: f64,
    /// Alignment
    pub alignment: Alignment,
    /// Left margin in pixels
    pub margin_l: u32,
    /// Right margin in pixels
    pub margin_r: u32,
    /// Vertical margin in pixels
    pub margin_v: u32,
    /// Font character set
    pub encoding: u32,
}

/// Column name of a `[V4+ Styles]` `Format` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFormat {
    Name,
    Fontname,
    Fontsize,
    PrimaryColour,
    SecondaryColour,
    OutlineColour,
    BackColour,
    Bold,
    Italic,
    Underline,
    StrikeOut,
    ScaleX,
    ScaleY,
    Spacing,
    Angle,
    BorderStyle,
    Outline,
    Shadow,
    Alignment,
    MarginL,
    MarginR,
    MarginV,
    Encoding,
}

impl StyleFormat {
    /// Every column, in the order of the canonical format line
    pub const ALL: [Self; 23] = [
        Self::Name,
        Self::Fontname,
        Self::Fontsize,
        Self::PrimaryColour,
        Self::SecondaryColour,
        Self::OutlineColour,
        Self::BackColour,
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::StrikeOut,
        Self::ScaleX,
        Self::ScaleY,
        Self::Spacing,
        Self::Angle,
        Self::BorderStyle,
        Self::Outline,
        Self::Shadow,
        Self::Alignment,
        Self::MarginL,
        Self::MarginR,
        Self::MarginV,
        Self::Encoding,
    ];

    /// Canonical column name as written in a `Format` line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Fontname => "Fontname",
            Self::Fontsize => "Fontsize",
            Self::PrimaryColour => "PrimaryColour",
            Self::SecondaryColour => "SecondaryColour",
            Self::OutlineColour => "OutlineColour",
            Self::BackColour => "BackColour",
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
            Self::StrikeOut => "StrikeOut",
            Self::ScaleX => "ScaleX",
            Self::ScaleY => "ScaleY",
            Self::Spacing => "Spacing",
            Self::Angle => "Angle",
            Self::BorderStyle => "BorderStyle",
            Self::Outline => "Outline",
            Self::Shadow => "Shadow",
            Self::Alignment => "Alignment",
            Self::MarginL => "MarginL",
            Self::MarginR => "MarginR",
            Self::MarginV => "MarginV",
            Self::Encoding => "Encoding",
        }
    }

    /// Look up a column by its exact name
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.name() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_exact() {
        assert_eq!(StyleFormat::from_key("PrimaryColour"), Some(StyleFormat::PrimaryColour));
        assert_eq!(StyleFormat::from_key("primarycolour"), None);
        assert_eq!(StyleFormat::from_key("TertiaryColour"), None);
    }

    #[test]
    fn every_column_round_trips_by_name() {
        for format in StyleFormat::ALL {
            assert_eq!(StyleFormat::from_key(format.name()), Some(format));
        }
    }
}
