//! Filtered trace output
//!
//! The output file sits next to the input with `.only` appended to the full
//! file name. Each retained line is written as `<index>: <original line>`.

use crate::error::{FilterError, Result};
use crate::filter::RetainedLine;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to the input path
pub const OUTPUT_SUFFIX: &str = ".only";

/// `trace.log` -> `trace.log.only`
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Write retained lines in order; no separator is added after a line
pub fn write_retained<W: Write>(writer: &mut W, retained: &[RetainedLine]) -> std::io::Result<()> {
    for line in retained {
        write!(writer, "{}: {}", line.index, line.text)?;
    }
    Ok(())
}

/// Create or truncate `path` and write the retained lines to it
pub fn write_output_file(path: &Path, retained: &[RetainedLine]) -> Result<()> {
    let to_error = |source: std::io::Error| FilterError::OutputAccess {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    write_retained(&mut writer, retained).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    Ok(())
}
