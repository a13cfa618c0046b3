//! Conversion pipeline from GitHub-flavored README text to readme.txt text.
//!
//! The pipeline is a pure function of the document and the environment
//! name: visibility resolution first, syntax rewriting second. No I/O
//! happens here; see [`crate::writer`] for the file-level orchestration.

use crate::rewrite::SyntaxRewriter;
use crate::visibility;

/// Options for README conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Active environment name for conditional visibility sections.
    ///
    /// `None` disables the environment-conditional passes, leaving
    /// `only:<env>` and `not:<env>` markers verbatim.
    pub env: Option<String>,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active environment name.
    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// Read the environment name from the `WP_README_ENV` process variable.
    pub fn from_env() -> Self {
        Self {
            env: std::env::var("WP_README_ENV").ok(),
        }
    }
}

/// README-to-readme.txt converter.
pub struct Converter {
    options: ConvertOptions,
    rewriter: SyntaxRewriter,
}

impl Converter {
    /// Create a converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            rewriter: SyntaxRewriter::new(),
        }
    }

    /// Convert a whole README document.
    ///
    /// Identical inputs always produce identical output; the converter
    /// holds no mutable state between calls.
    pub fn convert(&self, input: &str) -> String {
        let resolved = visibility::resolve(input, self.options.env.as_deref());
        self.rewriter.rewrite(&resolved)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ConvertOptions::default())
    }
}

/// Convert a README string with the given options.
pub fn convert(input: &str, options: &ConvertOptions) -> String {
    Converter::new(options.clone()).convert(input)
}
