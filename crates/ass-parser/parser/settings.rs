//! Strictness settings controlling fatal-versus-warning classification
//!
//! Every option is off by default, which makes the default configuration the
//! strict one. Enabling an option turns one class of violations into warnings.
//!
//! # Example
//!
//! ```rust
//! use ass_parser::StrictSettings;
//!
//! let settings = StrictSettings::strict().with_allow_number_truncating(true);
//! assert!(settings.allow_number_truncating);
//! assert!(!settings.allow_additional_fields);
//!
//! assert_eq!(StrictSettings::default(), StrictSettings::strict());
//! assert!(StrictSettings::non_strict().allow_unrecognized_file_encoding);
//! ```

/// Leniency options scoped to the `[Script Info]` section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScriptInfoStrictSettings {
    /// Repeated field names warn and the later value wins
    pub allow_duplicate_fields: bool,

    /// An absent `ScriptType` warns instead of failing
    pub allow_missing_script_type: bool,
}

/// Leniency options for one parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrictSettings {
    /// `[Script Info]` specific options
    pub script_info: ScriptInfoStrictSettings,

    /// Unknown fields and line keys warn and are skipped
    pub allow_additional_fields: bool,

    /// Integer fields with a non-digit suffix warn and keep the leading digits
    pub allow_number_truncating: bool,

    /// Input without a byte order mark warns and is read as UTF-8
    pub allow_unrecognized_file_encoding: bool,
}

impl StrictSettings {
    /// Every violation is fatal
    #[must_use]
    pub const fn strict() -> Self {
        Self::all(false)
    }

    /// Every optional violation is a warning
    #[must_use]
    pub const fn non_strict() -> Self {
        Self::all(true)
    }

    const fn all(enabled: bool) -> Self {
        Self {
            script_info: ScriptInfoStrictSettings {
                allow_duplicate_fields: enabled,
                allow_missing_script_type: enabled,
            },
            allow_additional_fields: enabled,
            allow_number_truncating: enabled,
            allow_unrecognized_file_encoding: enabled,
        }
    }

    /// Set `script_info.allow_duplicate_fields`
    #[must_use]
    pub const fn with_allow_duplicate_fields_in_script_info(mut self, enabled: bool) -> Self {
        self.script_info.allow_duplicate_fields = enabled;
        self
    }

    /// Set `script_info.allow_missing_script_type`
    #[must_use]
    pub const fn with_allow_missing_script_type(mut self, enabled: bool) -> Self {
        self.script_info.allow_missing_script_type = enabled;
        self
    }

    /// Set `allow_additional_fields`
    #[must_use]
    pub const fn with_allow_additional_fields(mut self, enabled: bool) -> Self {
        self.allow_additional_fields = enabled;
        self
    }

    /// Set `allow_number_truncating`
    #[must_use]
    pub const fn with_allow_number_truncating(mut self, enabled: bool) -> Self {
        self.allow_number_truncating = enabled;
        self
    }

    /// Set `allow_unrecognized_file_encoding`
    #[must_use]
    pub const fn with_allow_unrecognized_file_encoding(mut self, enabled: bool) -> Self {
        self.allow_unrecognized_file_encoding = enabled;
        self
    }
}
