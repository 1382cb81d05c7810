use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch directory holding the two files under comparison.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

impl TempWorkspace {
    pub fn new(prefix: &str) -> Self {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir().unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        fs::write(&path, contents).unwrap();
        path
    }

    /// Write the reference pair `test1.txt` / `test2.txt`.
    #[allow(dead_code)]
    pub fn with_pair(prefix: &str, first: &str, second: &str) -> Self {
        let ws = Self::new(prefix);
        ws.write_file("test1.txt", first);
        ws.write_file("test2.txt", second);
        ws
    }
}
