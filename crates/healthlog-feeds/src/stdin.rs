//! Stdin feed — reads a structured log export piped into the process.

use std::io::{self, Read};

use healthlog_core::RawRecord;

use crate::csv_export::{read_export, Columns};
use crate::{Feed, FeedError};

pub struct StdinFeed {
    columns: Columns,
    reader: Box<dyn Read>,
}

impl StdinFeed {
    pub fn new(columns: Columns) -> Self {
        Self::from_reader(io::stdin(), columns)
    }

    /// Read from `reader` as if it were the process's stdin.
    pub fn from_reader(reader: impl Read + 'static, columns: Columns) -> Self {
        Self {
            columns,
            reader: Box::new(reader),
        }
    }
}

impl Feed for StdinFeed {
    fn name(&self) -> String {
        "stdin".to_string()
    }

    fn load(&mut self) -> Result<Vec<RawRecord>, FeedError> {
        let name = self.name();
        read_export(&mut self.reader, &self.columns, &name)
    }
}
