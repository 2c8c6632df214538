//! Supported target languages and their naming conventions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use errgen_model::{CaseStyle, convert_case};

/// Language of the generated source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    Go,
    Java,
    Kotlin,
    Python,
    JavaScript,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 5] = [
        TargetLanguage::Go,
        TargetLanguage::Java,
        TargetLanguage::Kotlin,
        TargetLanguage::Python,
        TargetLanguage::JavaScript,
    ];

    /// Stable lowercase identifier, also used as the output subdirectory.
    pub fn id(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Java => "java",
            Self::Kotlin => "kotlin",
            Self::Python => "python",
            Self::JavaScript => "javascript",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::Java => "Java",
            Self::Kotlin => "Kotlin",
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Java => "java",
            Self::Kotlin => "kt",
            Self::Python => "py",
            Self::JavaScript => "js",
        }
    }

    /// Casing of enum record fields. Go needs exported (capitalized) fields.
    pub fn field_case(self) -> CaseStyle {
        match self {
            Self::Go => CaseStyle::UpperCamel,
            Self::Java | Self::Kotlin | Self::Python | Self::JavaScript => CaseStyle::LowerCamel,
        }
    }

    /// Field name for an attribute in the combined enum record type.
    pub fn field_name(self, attribute: &str) -> String {
        convert_case(attribute, self.field_case())
    }

    /// Escape a value for a double-quoted string literal.
    pub fn quote(self, value: &str) -> String {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        for ch in value.chars() {
            match ch {
                '\\' => quoted.push_str("\\\\"),
                '"' => quoted.push_str("\\\""),
                '$' if self == Self::Kotlin => quoted.push_str("\\$"),
                _ => quoted.push(ch),
            }
        }
        quoted.push('"');
        quoted
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        Self::ALL
            .into_iter()
            .find(|language| {
                language.id().eq_ignore_ascii_case(wanted)
                    || language.extension().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| format!("unknown target language: {value}"))
    }
}
