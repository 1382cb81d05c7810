use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};

use prefix_lines_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for opening sources with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`. A directory opens fine on Linux but cannot be
    /// read as text, so it is rejected here.
    pub fn open(path: &Path) -> InfraResult<File> {
        let open_error = |source| InfrastructureError::SourceOpen { path: path.to_path_buf(), source };

        let file = File::open(path).map_err(open_error)?;
        if file.metadata().map_err(open_error)?.is_dir() {
            return Err(open_error(io::Error::new(io::ErrorKind::IsADirectory, "is a directory")));
        }
        Ok(file)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }
}
