//! License visitor port
//!
//! Defines how leaf identifiers are corrected during parsing.

/// Corrects license and exception identifiers while an expression is parsed
///
/// Returning `None` marks the identifier as unknown; the parser then
/// substitutes the no-assertion sentinel.
pub trait LicenseVisitor {
    /// Correct a license identifier (or relaxed multi-word license name)
    fn visit_license(&self, raw: &str) -> Option<String>;

    /// Correct a `WITH` exception identifier
    ///
    /// Exceptions pass through untouched unless overridden.
    fn visit_exception(&self, raw: &str) -> Option<String> {
        Some(raw.to_string())
    }
}

impl<F> LicenseVisitor for F
where
    F: Fn(&str) -> Option<String>,
{
    fn visit_license(&self, raw: &str) -> Option<String> {
        self(raw)
    }
}

/// Keeps every identifier exactly as written
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityVisitor;

impl LicenseVisitor for IdentityVisitor {
    fn visit_license(&self, raw: &str) -> Option<String> {
        Some(raw.to_string())
    }
}
