//! Identifier derivation for record names and generated property names.
//!
//! Neither function sanitizes characters beyond the rules below; a label with
//! punctuation produces an identifier with the same punctuation.

/// Characters that separate components in an attribute name.
const COMPONENT_SEPARATORS: [char; 3] = [' ', '_', '-'];

/// Casing applied by [`convert_case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// `error code` -> `ErrorCode`
    UpperCamel,
    /// `error code` -> `errorCode`
    LowerCamel,
}

/// Normalize a raw label into a record name.
///
/// Trims surrounding whitespace, uppercases, and collapses every internal run
/// of whitespace into a single `_`. Applying it twice gives the same result.
pub fn record_name(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    let mut parts = upper.split_whitespace();
    let mut normalized = String::with_capacity(upper.len());
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push('_');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Convert an attribute name to camel case.
///
/// The name is split on space, `_` and `-`; each component gets its first
/// character uppercased and the components are joined. [`CaseStyle::LowerCamel`]
/// then lowercases the first character of the joined result. Empty components
/// (leading, trailing or doubled separators) contribute nothing.
pub fn convert_case(value: &str, style: CaseStyle) -> String {
    let mut converted = String::with_capacity(value.len());
    for component in value.split(COMPONENT_SEPARATORS) {
        converted.push_str(&capitalize(component));
    }
    match style {
        CaseStyle::UpperCamel => converted,
        CaseStyle::LowerCamel => decapitalize(&converted),
    }
}

pub fn to_upper_camel(value: &str) -> String {
    convert_case(value, CaseStyle::UpperCamel)
}

pub fn to_lower_camel(value: &str) -> String {
    convert_case(value, CaseStyle::LowerCamel)
}

fn capitalize(component: &str) -> String {
    let mut chars = component.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn decapitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
