//! Text artifacts derived from the modified variable list

mod structured_text;
mod var_sheet;

pub use structured_text::create_structured_text;
pub use var_sheet::{create_variable_sheet, variable_sheet_from_path};

use crate::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Replace the content of `path` with `text`; the file is closed on return.
fn write_text(path: &Path, text: &str) -> Result<()> {
    let to_error = |e: std::io::Error| Error::io(path.display().to_string(), e.to_string());
    let mut file = File::create(path).map_err(to_error)?;
    file.write_all(text.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)?;
    debug!(path = %path.display(), bytes = text.len(), "Wrote artifact");
    Ok(())
}
