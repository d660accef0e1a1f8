//! File I/O for the Brotli CLI.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;

use crate::error::{Error, Result};

/// Reads the whole input file into memory.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] if `path` is not an existing regular file,
/// or [`Error::OpenInput`] if it cannot be read.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    if !path.is_file() {
        return Err(Error::MissingInput {
            path: path.to_path_buf(),
        });
    }

    fs::read(path).map_err(|source| Error::OpenInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `data` to `path`, replacing any existing file.
///
/// The data is written to a temporary file in the destination directory
/// first and renamed into place once complete, so a failure never leaves a
/// partial output file behind. A new file gets the usual `0o666` mode masked
/// by the umask; an existing file keeps its permissions.
///
/// # Errors
///
/// Returns [`Error::CreateOutput`] if the temporary file cannot be created,
/// written, or renamed.
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    let create_err = |source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(dir).map_err(create_err)?;
    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(create_err)?;
    }
    tmp.write_all(data).map_err(create_err)?;
    tmp.as_file().sync_all().map_err(create_err)?;
    tmp.persist(path).map_err(|e| create_err(e.error))?;
    Ok(())
}
