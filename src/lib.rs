//! # wp-readme
//!
//! Generate a WordPress plugin-directory `readme.txt` from a GitHub-flavored
//! `README.md`.
//!
//! The conversion is a two-stage pure-text pipeline: conditional-visibility
//! directives are resolved first (sections shown only on GitHub, only on
//! WordPress, or only under a named environment), then Markdown syntax is
//! rewritten into the WordPress readme format (`#`-headers become
//! `=`-delimited lines, fenced code blocks become `<pre>` blocks). Thin
//! collaborators locate the README in a directory and persist the converted
//! output next to it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use wp_readme::{find_readme, generate, ConvertOptions};
//!
//! fn main() -> wp_readme::Result<()> {
//!     // Locate README.md in the current directory
//!     let readme = find_readme(".").expect("no README.md found");
//!
//!     // Convert and write readme.txt next to it
//!     let options = ConvertOptions::new().with_env("production");
//!     let output = generate(&readme, &options)?;
//!     println!("wrote {}", output.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! To convert in-memory text without touching the filesystem, use
//! [`convert`] or [`Converter`] directly.
//!
//! ## Visibility directives
//!
//! | Directive | Start marker | End marker |
//! |---|---|---|
//! | GitHub-only (removed) | `<!-- only:github/ -->` | `<!-- /only:github -->` |
//! | WordPress-only (revealed) | `<!-- only:wp>` | `</only:wp -->` |
//! | Environment-only (revealed) | `<!-- only:<env>>` | `</only:<env> -->` |
//! | Negated-environment | `<!-- not:<name>/ -->` | `<!-- /not:<name> -->` |
//!
//! The environment name comes from [`ConvertOptions::env`]; the CLI fills
//! it from the `WP_README_ENV` process variable.

pub mod convert;
pub mod error;
pub mod locate;
pub mod rewrite;
pub mod visibility;
pub mod writer;

// Re-export commonly used items
pub use convert::{convert, ConvertOptions, Converter};
pub use error::{Error, Result};
pub use locate::find_readme;
pub use rewrite::SyntaxRewriter;
pub use writer::generate;
