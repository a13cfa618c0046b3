//! README discovery.

use std::fs;
use std::path::{Path, PathBuf};

/// Find a README file in `dir` and return its path.
///
/// Lists the immediate entries of the directory (non-recursive) and returns
/// the first regular file named exactly `README.md` or `readme.md` — those
/// two spellings only, no general case folding. A trailing path separator
/// on the input is stripped before use.
///
/// Returns `None` if the directory does not exist, cannot be read, or
/// contains no matching file; this function never errors.
pub fn find_readme<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    let raw = dir.as_ref().to_string_lossy();
    let trimmed = raw.strip_suffix(['/', '\\']).unwrap_or(&raw);
    let dir = Path::new(trimmed);

    let entries = fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        let name = entry.file_name();
        if name != "README.md" && name != "readme.md" {
            continue;
        }
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file {
            let path = dir.join(name);
            log::debug!("found readme at {}", path.display());
            return Some(path);
        }
    }
    None
}
