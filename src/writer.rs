//! Read-convert-write orchestration for a single README file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::{ConvertOptions, Converter};
use crate::error::{Error, Result};

/// Convert `source` and persist the result as a sibling `.txt` file.
///
/// The output file name is the source base name, lower-cased, with a
/// trailing `.md` extension replaced by `.txt`; it is written next to the
/// source in its symlink-resolved parent directory. Returns the output
/// path on success.
///
/// # Errors
/// * [`Error::NotFound`] — the source file does not exist.
/// * [`Error::NotWritable`] — the resolved parent directory cannot be
///   statted or is not a directory.
/// * [`Error::AlreadyExistsNotWritable`] — the output file exists and
///   rejected a write probe.
/// * [`Error::WriteFailed`] — the final content write failed.
pub fn generate<P: AsRef<Path>>(source: P, options: &ConvertOptions) -> Result<PathBuf> {
    let source = source.as_ref();
    if !source.exists() {
        return Err(Error::NotFound);
    }

    let real = source.canonicalize().map_err(|_| Error::NotWritable)?;
    let dir = real.parent().ok_or(Error::NotWritable)?;
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        _ => return Err(Error::NotWritable),
    }

    let out_path = dir.join(output_name(&real)?);

    // Writability probe against a pre-existing output file. Note that a
    // successful probe truncates the existing file before the real write:
    // if the content write below then fails, the old output is already
    // lost. Kept for compatibility with the established behavior.
    if out_path.is_file() {
        log::debug!("probing existing output {}", out_path.display());
        fs::write(&out_path, "").map_err(|_| Error::AlreadyExistsNotWritable)?;
    }

    let text = fs::read_to_string(source)?;
    let converted = Converter::new(options.clone()).convert(&text);

    log::debug!("writing {}", out_path.display());
    fs::write(&out_path, converted).map_err(|_| Error::WriteFailed)?;

    Ok(out_path)
}

/// Derive the output file name from the resolved source path.
fn output_name(real: &Path) -> Result<String> {
    let base = real
        .file_name()
        .ok_or(Error::NotFound)?
        .to_string_lossy()
        .to_lowercase();
    Ok(match base.strip_suffix(".md") {
        Some(stem) => format!("{stem}.txt"),
        None => base,
    })
}
