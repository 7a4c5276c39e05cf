//! File feed — reads a structured log export from disk in one pass.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use healthlog_core::RawRecord;

use crate::csv_export::{read_export, Columns};
use crate::{Feed, FeedError};

pub struct FileFeed {
    path: PathBuf,
    columns: Columns,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>, columns: Columns) -> Self {
        Self {
            path: path.into(),
            columns,
        }
    }
}

impl Feed for FileFeed {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&mut self) -> Result<Vec<RawRecord>, FeedError> {
        let file = File::open(&self.path).map_err(|source| FeedError::Io {
            path: self.name(),
            source,
        })?;
        read_export(BufReader::new(file), &self.columns, &self.name())
    }
}
