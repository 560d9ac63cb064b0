//! Typed record of the `[Script Info]` section
//!
//! Every recognized field is optional except `Title` and `Original Script`,
//! which fall back to fixed placeholders when a script omits them.

use super::values::WrapStyle;
use crate::ScriptType;

/// Placeholder used when `Title` is absent
pub const DEFAULT_TITLE: &str = "<untitled>";

/// Placeholder used when `Original Script` is absent
pub const DEFAULT_ORIGINAL_SCRIPT: &str = "<unknown>";

/// Metadata from the `[Script Info]` section
///
/// # Examples
///
/// ```rust
/// use ass_parser::parser::ast::ScriptInfo;
///
/// let info = ScriptInfo::default();
/// assert_eq!(info.title, "<untitled>");
/// assert_eq!(info.original_script, "<unknown>");
/// assert!(info.play_res_x.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScriptInfo<'a> {
    /// `Title`
    pub title: &'a str,
    /// `Original Script`
    pub original_script: &'a str,
    /// `Original Translation`
    pub original_translation: Option<&'a str>,
    /// `Original Editing`
    pub original_editing: Option<&'a str>,
    /// `Original Timing`
    pub original_timing: Option<&'a str>,
    /// `Synch Point`
    pub synch_point: Option<&'a str>,
    /// `Script Updated By`
    pub script_updated_by: Option<&'a str>,
    /// `Update Details`
    pub update_details: Option<&'a str>,
    /// `ScriptType`, absent only when a missing script type is allowed
    pub script_type: Option<ScriptType>,
    /// `Collisions`
    pub collisions: Option<&'a str>,
    /// `PlayResY`
    pub play_res_y: Option<u32>,
    /// `PlayResX`
    pub play_res_x: Option<u32>,
    /// `PlayDepth`
    pub play_depth: Option<&'a str>,
    /// `Timer`
    pub timer: Option<&'a str>,
    /// `WrapStyle`
    pub wrap_style: Option<WrapStyle>,
    /// `ScaledBorderAndShadow`
    pub scaled_border_and_shadow: Option<bool>,
    /// `Video Aspect Ratio`
    pub video_aspect_ratio: Option<u32>,
    /// `Video Zoom`
    pub video_zoom: Option<u32>,
    /// `YCbCr Matrix`
    pub ycbcr_matrix: Option<&'a str>,
}

impl Default for ScriptInfo<'_> {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE,
            original_script: DEFAULT_ORIGINAL_SCRIPT,
            original_translation: None,
            original_editing: None,
            original_timing: None,
            synch_point: None,
            script_updated_by: None,
            update_details: None,
            script_type: None,
            collisions: None,
            play_res_y: None,
            play_res_x: None,
            play_depth: None,
            timer: None,
            wrap_style: None,
            scaled_border_and_shadow: None,
            video_aspect_ratio: None,
            video_zoom: None,
            ycbcr_matrix: None,
        }
    }
}

impl ScriptInfo<'_> {
    /// Whether the title is the placeholder
    #[must_use]
    pub fn has_default_title(&self) -> bool {
        self.title == DEFAULT_TITLE
    }

    /// Play resolution if both axes are declared
    #[must_use]
    pub const fn play_resolution(&self) -> Option<(u32, u32)> {
        match (self.play_res_x, self.play_res_y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}
