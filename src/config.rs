//! options shared by every builder and by the serializer

/// indentation unit used when nothing else is configured
pub const DEFAULT_INDENT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How strictly dataset shapes are checked before markup is emitted.
///
/// `Checked` enforces the element type's rank / column contract and the geometry /
/// topology row count check of structured meshes. `Trusted` skips both, for callers
/// that already guarantee consistent datasets. Valid input produces the same document
/// in either mode.
///
/// The default is `Checked` unless the crate is built with the `trusted` feature.
pub enum Validation {
    Checked,
    Trusted,
}

impl Validation {
    pub fn is_checked(&self) -> bool {
        matches!(self, Self::Checked)
    }
}

impl Default for Validation {
    #[cfg(not(feature = "trusted"))]
    fn default() -> Self {
        Self::Checked
    }

    #[cfg(feature = "trusted")]
    fn default() -> Self {
        Self::Trusted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Formatting and validation settings.
///
/// ```
/// use xdmf::{Options, Validation};
///
/// let options = Options::new()
///     .with_indent(2)
///     .with_validation(Validation::Trusted);
///
/// assert_eq!(options.indent, 2);
/// assert!(!options.validation.is_checked());
/// ```
pub struct Options {
    /// spaces per nesting level; 0 writes every line flush left
    pub indent: usize,
    pub validation: Validation,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// the whitespace written in front of a line nested `depth` levels deep
    pub(crate) fn indentation(&self, depth: usize) -> String {
        " ".repeat(self.indent * depth)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            validation: Validation::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_indent_is_four() {
        let options = Options::default();
        assert_eq!(options.indent, 4);
        assert_eq!(options.indentation(2), "        ");
    }

    #[test]
    fn zero_indent_is_flush() {
        let options = Options::new().with_indent(0);
        assert_eq!(options.indentation(5), "");
    }

    #[cfg(not(feature = "trusted"))]
    #[test]
    fn checked_by_default() {
        assert_eq!(Options::default().validation, Validation::Checked);
    }
}
