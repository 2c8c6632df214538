//! Shared types for errgen rendering.

use crate::language::TargetLanguage;

/// Logical name of the combined enum artifact.
pub const ENUM_ARTIFACT_NAME: &str = "ErrorEnum";

/// Package used for Go output when none is configured.
///
/// Every Go artifact of a run declares the same package, and each constant
/// table names its constants after the records. Two tables therefore declare
/// the same identifiers, so the Go files only build together when at most one
/// constant table is compiled alongside `ErrorEnum.go`. The record names are
/// kept unprefixed so every language exposes the same names.
pub const DEFAULT_GO_PACKAGE: &str = "errcode";

/// Indentation inside generated blocks. Go output uses tabs as `gofmt` does.
pub(crate) fn indent(language: TargetLanguage) -> &'static str {
    match language {
        TargetLanguage::Go => "\t",
        _ => "    ",
    }
}

/// Options shared by every renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Package (Go, Java, Kotlin) the generated files belong to.
    pub package: Option<String>,
}

impl RenderOptions {
    #[must_use]
    pub fn with_package(mut self, package: Option<String>) -> Self {
        self.package = package;
        self
    }

    /// Package declaration for `language`, followed by a blank line, or `""`.
    pub(crate) fn package_header(&self, language: TargetLanguage) -> String {
        let package = self
            .package
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());
        match (language, package) {
            (TargetLanguage::Go, package) => {
                format!("package {}\n\n", package.unwrap_or(DEFAULT_GO_PACKAGE))
            }
            (TargetLanguage::Java, Some(package)) => format!("package {package};\n\n"),
            (TargetLanguage::Kotlin, Some(package)) => format!("package {package}\n\n"),
            _ => String::new(),
        }
    }
}

/// What an artifact was rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Constant table for the attribute at this column.
    Constants { attribute: String, column: usize },
    /// Combined record type with one instance per record.
    Enum,
}

/// One rendered source file, held in memory until emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Logical name: upper-camel attribute name or [`ENUM_ARTIFACT_NAME`].
    pub name: String,
    pub language: TargetLanguage,
    pub kind: ArtifactKind,
    pub contents: String,
}

impl Artifact {
    /// File name: logical name plus the language's extension.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.language.extension())
    }
}
