use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use log::{debug, trace};
use prefix_lines_ports::{LineSource, SourceOpener};
use prefix_lines_shared_kernel::{InfrastructureError, Line, Result, SourcePath};

use super::FileReader;

/// Line source backed by a buffered file handle. The handle closes on drop.
pub struct FileLineSource<R = BufReader<File>> {
    reader: R,
    path: PathBuf,
    lines_read: usize,
    exhausted: bool,
}

impl FileLineSource {
    pub fn open(path: &SourcePath) -> Result<Self> {
        let reader = FileReader::open_buffered(path.as_path())?;
        debug!("opened source {path}");
        Ok(Self::from_reader(reader, path.to_path_buf()))
    }
}

impl<R: BufRead> FileLineSource<R> {
    /// Wrap any buffered reader; `path` is only used in diagnostics.
    pub fn from_reader(reader: R, path: impl Into<PathBuf>) -> Self {
        Self { reader, path: path.into(), lines_read: 0, exhausted: false }
    }
}

impl<R: BufRead> LineSource for FileLineSource<R> {
    fn next_line(&mut self) -> Result<Option<Line>> {
        if self.exhausted {
            return Ok(None);
        }

        // 改行コードは正規化せずにそのまま保持する
        let mut buf = String::new();
        let read = self.reader.read_line(&mut buf).map_err(|source| InfrastructureError::SourceRead {
            path: self.path.clone(),
            line: self.lines_read + 1,
            source,
        })?;

        if read == 0 {
            trace!("{} exhausted after {} lines", self.path.display(), self.lines_read);
            self.exhausted = true;
            return Ok(None);
        }

        self.lines_read += 1;
        Ok(Some(Line::from(buf)))
    }
}

/// Opens sources from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSourceOpener;

impl SourceOpener for FsSourceOpener {
    fn open(&self, path: &SourcePath) -> Result<Box<dyn LineSource>> {
        Ok(Box::new(FileLineSource::open(path)?))
    }
}
