//! Event entries of the `[Events]` section

use super::values::{AssTime, MarginValue};

/// Kind of an event row, taken from its line key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// `Dialogue:`
    #[default]
    Dialogue,
    /// `Comment:`
    Comment,
    /// `Picture:`
    Picture,
    /// `Sound:`
    Sound,
    /// `Movie:`
    Movie,
    /// `Command:`
    Command,
}

impl EventKind {
    const ALL: [Self; 6] = [
        Self::Dialogue,
        Self::Comment,
        Self::Picture,
        Self::Sound,
        Self::Movie,
        Self::Command,
    ];

    /// Line key introducing rows of this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dialogue => "Dialogue",
            Self::Comment => "Comment",
            Self::Picture => "Picture",
            Self::Sound => "Sound",
            Self::Movie => "Movie",
            Self::Command => "Command",
        }
    }

    /// Look up an event kind by its exact line key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == key)
    }
}

/// One event row
///
/// Columns the section's `Format` line did not declare keep their default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EventEntry<'a> {
    /// Row kind
    pub kind: EventKind,
    /// Z-order layer
    pub layer: u32,
    /// Start time
    pub start: AssTime,
    /// End time
    pub end: AssTime,
    /// Referenced style name
    pub style: &'a str,
    /// Speaker name
    pub name: &'a str,
    /// Left margin override
    pub margin_l: MarginValue,
    /// Right margin override
    pub margin_r: MarginValue,
    /// Vertical margin override
    pub margin_v: MarginValue,
    /// Transition effect
    pub effect: &'a str,
    /// Raw text including override blocks, may contain commas
    pub text: &'a str,
}

/// Column name of an `[Events]` `Format` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFormat {
    Layer,
    Start,
    End,
    Style,
    Name,
    MarginL,
    MarginR,
    MarginV,
    Effect,
    Text,
}

impl EventFormat {
    /// Every column, in the order of the canonical format line
    pub const ALL: [Self; 10] = [
        Self::Layer,
        Self::Start,
        Self::End,
        Self::Style,
        Self::Name,
        Self::MarginL,
        Self::MarginR,
        Self::MarginV,
        Self::Effect,
        Self::Text,
    ];

    /// Canonical column name as written in a `Format` line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Layer => "Layer",
            Self::Start => "Start",
            Self::End => "End",
            Self::Style => "Style",
            Self::Name => "Name",
            Self::MarginL => "MarginL",
            Self::MarginR => "MarginR",
            Self::MarginV => "MarginV",
            Self::Effect => "Effect",
            Self::Text => "Text",
        }
    }

    /// Look up a column by its exact name
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.name() == key)
    }
}
