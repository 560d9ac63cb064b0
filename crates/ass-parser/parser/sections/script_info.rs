//! `[Script Info]` section parser
//!
//! Lines are `Name: value` pairs dispatched on the exact field name. Lines
//! starting with `;` are comments. Duplicate detection tracks each known field
//! in a [`SeenFields`] set.

use alloc::string::ToString;

use super::{field_error, SectionReader, SCRIPT_INFO};
use crate::{
    parser::{
        ast::ScriptInfo,
        errors::{ParseError, Warning},
        fields::{parse_str_as_script_type, parse_str_as_str_bool, parse_str_as_wrap_style},
    },
    ScriptType,
};

bitflags::bitflags! {
    /// Known `[Script Info]` fields already assigned
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct SeenFields: u32 {
        /// `Title`
        const TITLE = 1 << 0;
        /// `Original Script`
        const ORIGINAL_SCRIPT = 1 << 1;
        /// `Original Translation`
        const ORIGINAL_TRANSLATION = 1 << 2;
        /// `Original Editing`
        const ORIGINAL_EDITING = 1 << 3;
        /// `Original Timing`
        const ORIGINAL_TIMING = 1 << 4;
        /// `Synch Point`
        const SYNCH_POINT = 1 << 5;
        /// `Script Updated By`
        const SCRIPT_UPDATED_BY = 1 << 6;
        /// `Update Details`
        const UPDATE_DETAILS = 1 << 7;
        /// `ScriptType` or `Script Type`
        const SCRIPT_TYPE = 1 << 8;
        /// `Collisions`
        const COLLISIONS = 1 << 9;
        /// `PlayResY`
        const PLAY_RES_Y = 1 << 10;
        /// `PlayResX`
        const PLAY_RES_X = 1 << 11;
        /// `PlayDepth`
        const PLAY_DEPTH = 1 << 12;
        /// `Timer`
        const TIMER = 1 << 13;
        /// `WrapStyle`
        const WRAP_STYLE = 1 << 14;
        /// `ScaledBorderAndShadow`
        const SCALED_BORDER_AND_SHADOW = 1 << 15;
        /// `Video Aspect Ratio`
        const VIDEO_ASPECT_RATIO = 1 << 16;
        /// `Video Zoom`
        const VIDEO_ZOOM = 1 << 17;
        /// `YCbCr Matrix`
        const YCBCR_MATRIX = 1 << 18;
    }
}

/// Field names recognized in `[Script Info]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoField {
    /// `Title`
    Title,
    /// `Original Script`
    OriginalScript,
    /// `Original Translation`
    OriginalTranslation,
    /// `Original Editing`
    OriginalEditing,
    /// `Original Timing`
    OriginalTiming,
    /// `Synch Point`
    SynchPoint,
    /// `Script Updated By`
    ScriptUpdatedBy,
    /// `Update Details`
    UpdateDetails,
    /// `ScriptType`, also spelled `Script Type`
    ScriptType,
    /// `Collisions`
    Collisions,
    /// `PlayResY`
    PlayResY,
    /// `PlayResX`
    PlayResX,
    /// `PlayDepth`
    PlayDepth,
    /// `Timer`
    Timer,
    /// `WrapStyle`
    WrapStyle,
    /// `ScaledBorderAndShadow`
    ScaledBorderAndShadow,
    /// `Video Aspect Ratio`
    VideoAspectRatio,
    /// `Video Zoom`
    VideoZoom,
    /// `YCbCr Matrix`
    YCbCrMatrix,
}

impl InfoField {
    /// Look up a field by its exact name
    ///
    /// `ScriptType` and `Script Type` name the same field.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let field = match name {
            "Title" => Self::Title,
            "Original Script" => Self::OriginalScript,
            "Original Translation" => Self::OriginalTranslation,
            "Original Editing" => Self::OriginalEditing,
            "Original Timing" => Self::OriginalTiming,
            "Synch Point" => Self::SynchPoint,
            "Script Updated By" => Self::ScriptUpdatedBy,
            "Update Details" => Self::UpdateDetails,
            "ScriptType" | "Script Type" => Self::ScriptType,
            "Collisions" => Self::Collisions,
            "PlayResY" => Self::PlayResY,
            "PlayResX" => Self::PlayResX,
            "PlayDepth" => Self::PlayDepth,
            "Timer" => Self::Timer,
            "WrapStyle" => Self::WrapStyle,
            "ScaledBorderAndShadow" => Self::ScaledBorderAndShadow,
            "Video Aspect Ratio" => Self::VideoAspectRatio,
            "Video Zoom" => Self::VideoZoom,
            "YCbCr Matrix" => Self::YCbCrMatrix,
            _ => return None,
        };
        Some(field)
    }

    /// Seen-set flag for this field
    #[must_use]
    pub const fn flag(self) -> SeenFields {
        match self {
            Self::Title => SeenFields::TITLE,
            Self::OriginalScript => SeenFields::ORIGINAL_SCRIPT,
            Self::OriginalTranslation => SeenFields::ORIGINAL_TRANSLATION,
            Self::OriginalEditing => SeenFields::ORIGINAL_EDITING,
            Self::OriginalTiming => SeenFields::ORIGINAL_TIMING,
            Self::SynchPoint => SeenFields::SYNCH_POINT,
            Self::ScriptUpdatedBy => SeenFields::SCRIPT_UPDATED_BY,
            Self::UpdateDetails => SeenFields::UPDATE_DETAILS,
            Self::ScriptType => SeenFields::SCRIPT_TYPE,
            Self::Collisions => SeenFields::COLLISIONS,
            Self::PlayResY => SeenFields::PLAY_RES_Y,
            Self::PlayResX => SeenFields::PLAY_RES_X,
            Self::PlayDepth => SeenFields::PLAY_DEPTH,
            Self::Timer => SeenFields::TIMER,
            Self::WrapStyle => SeenFields::WRAP_STYLE,
            Self::ScaledBorderAndShadow => SeenFields::SCALED_BORDER_AND_SHADOW,
            Self::VideoAspectRatio => SeenFields::VIDEO_ASPECT_RATIO,
            Self::VideoZoom => SeenFields::VIDEO_ZOOM,
            Self::YCbCrMatrix => SeenFields::YCBCR_MATRIX,
        }
    }
}

/// Parse the `[Script Info]` body
///
/// # Errors
///
/// Returns the first fatal violation: a missing `:`, an unknown or duplicate
/// field when not allowed, a field value that fails to convert, or a missing
/// or unsupported script type.
pub fn parse_script_info<'a>(
    reader: &mut SectionReader<'_, 'a>,
) -> Result<ScriptInfo<'a>, ParseError> {
    let mut info = ScriptInfo::default();
    let mut seen = SeenFields::empty();

    while let Some(line) = reader.next_line() {
        if line.text.starts_with(';') {
            continue;
        }

        let (name, value) = line.split_field(SCRIPT_INFO)?;
        let Some(field) = InfoField::from_name(name) else {
            reader.unexpected_field(SCRIPT_INFO, name, line.number)?;
            continue;
        };

        if seen.contains(field.flag()) {
            if !reader.settings().script_info.allow_duplicate_fields {
                return Err(ParseError::DuplicateField {
                    section: SCRIPT_INFO.to_string(),
                    field: name.to_string(),
                    line: line.number,
                });
            }
            reader.warn(Warning::DuplicateField {
                section: SCRIPT_INFO,
                field: name,
                line: line.number,
            });
        }
        seen.insert(field.flag());

        assign_field(reader, &mut info, field, name, value, line.number)?;
    }

    match info.script_type {
        Some(ScriptType::V4Plus) => {}
        Some(ScriptType::V4) => return Err(ParseError::UnsupportedScriptType),
        None if reader.settings().script_info.allow_missing_script_type => {
            reader.warn(Warning::Simple("script info section has no script type".to_string()));
        }
        None => return Err(ParseError::MissingScriptType),
    }

    Ok(info)
}

/// Store a known field value, converting numeric and enumerated fields
fn assign_field<'a>(
    reader: &mut SectionReader<'_, 'a>,
    info: &mut ScriptInfo<'a>,
    field: InfoField,
    name: &str,
    value: &'a str,
    line: usize,
) -> Result<(), ParseError> {
    match field {
        InfoField::Title => info.title = value,
        InfoField::OriginalScript => info.original_script = value,
        InfoField::OriginalTranslation => info.original_translation = Some(value),
        InfoField::OriginalEditing => info.original_editing = Some(value),
        InfoField::OriginalTiming => info.original_timing = Some(value),
        InfoField::SynchPoint => info.synch_point = Some(value),
        InfoField::ScriptUpdatedBy => info.script_updated_by = Some(value),
        InfoField::UpdateDetails => info.update_details = Some(value),
        InfoField::ScriptType => {
            let script_type =
                parse_str_as_script_type(value).map_err(field_error(name, value, line))?;
            info.script_type = Some(script_type);
        }
        InfoField::Collisions => info.collisions = Some(value),
        InfoField::PlayResY => info.play_res_y = Some(reader.unsigned(name, value, line)?),
        InfoField::PlayResX => info.play_res_x = Some(reader.unsigned(name, value, line)?),
        InfoField::PlayDepth => info.play_depth = Some(value),
        InfoField::Timer => info.timer = Some(value),
        InfoField::WrapStyle => {
            let wrap_style =
                parse_str_as_wrap_style(value).map_err(field_error(name, value, line))?;
            info.wrap_style = Some(wrap_style);
        }
        InfoField::ScaledBorderAndShadow => {
            let scaled = parse_str_as_str_bool(value).map_err(field_error(name, value, line))?;
            info.scaled_border_and_shadow = Some(scaled);
        }
        InfoField::VideoAspectRatio => {
            info.video_aspect_ratio = Some(reader.unsigned(name, value, line)?);
        }
        InfoField::VideoZoom => info.video_zoom = Some(reader.unsigned(name, value, line)?),
        InfoField::YCbCrMatrix => info.ycbcr_matrix = Some(value),
    }
    Ok(())
}
