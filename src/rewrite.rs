//! Markdown-to-WordPress syntax rewriting.
//!
//! Two independent passes over the whole document, run after visibility
//! resolution: `#`-headers become `=`-wrapped lines, then fenced code
//! blocks become `<pre>` blocks. Neither pass can fail; absence of a match
//! is a no-op.

use regex::{Captures, Regex};

/// Syntax rewriter with precompiled patterns.
pub struct SyntaxRewriter {
    header_regex: Regex,
    fence_regex: Regex,
}

impl SyntaxRewriter {
    /// Create a new rewriter.
    pub fn new() -> Self {
        Self {
            header_regex: Regex::new(r"(?m)^(#+)\s+(.*)$").unwrap(),
            fence_regex: Regex::new(r"(?s)```([^\n`]*?)\n(.*?)\n```").unwrap(),
        }
    }

    /// Run both passes: headers first, then code fences.
    ///
    /// The header pass is not fence-aware, so `#`-prefixed lines inside a
    /// fenced body are rewritten as headers before the fence collapses to
    /// `<pre>`. That ordering is part of the format's observed behavior.
    pub fn rewrite(&self, input: &str) -> String {
        let headers = self.rewrite_headers(input);
        self.rewrite_code_blocks(&headers)
    }

    /// Replace `# Title` lines with `=== Title ===` by level.
    ///
    /// The pad is `=` repeated `3 - (level - 1)` times. The arithmetic goes
    /// non-positive for level 4 and deeper, collapsing the pad to nothing;
    /// that exact behavior is kept rather than clamped.
    fn rewrite_headers(&self, input: &str) -> String {
        self.header_regex
            .replace_all(input, |caps: &Captures| {
                let level = caps[1].len() as i32;
                let pad_len = 3 - (level - 1);
                let pad = if pad_len > 0 {
                    "=".repeat(pad_len as usize)
                } else {
                    String::new()
                };
                format!("{} {} {}", pad, &caps[2], pad)
            })
            .into_owned()
    }

    /// Replace fenced code blocks with `<pre>` blocks.
    ///
    /// The language tag is discarded and the body passes through verbatim,
    /// with no HTML escaping. An unclosed fence never matches and is left
    /// untouched. Replacement goes through a closure so `$` sequences in
    /// code bodies are never treated as capture references.
    fn rewrite_code_blocks(&self, input: &str) -> String {
        self.fence_regex
            .replace_all(input, |caps: &Captures| format!("<pre>{}</pre>", &caps[2]))
            .into_owned()
    }
}

impl Default for SyntaxRewriter {
    fn default() -> Self {
        Self::new()
    }
}
