// ============================================================
// Layer 6 — Row Writer
// ============================================================
// Writes augmented dataset rows as JSON Lines, one row per line:
//
//   {"index":"605","text":"Subject: ...","label":"ham",
//    "label_num":"0","lemmas":["enron","methanol"],"ent":["Enron"]}
//
// Extra input columns are flattened next to the fixed ones.
// The input dataset itself is never rewritten.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::row::DatasetRow;

pub struct RowWriter {
    path: PathBuf,
}

impl RowWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write `rows`, replacing any existing file. Returns the row count.
    pub fn write<'a, I>(&self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a DatasetRow>,
    {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let file = File::create(&self.path)
            .with_context(|| format!("Cannot create '{}'", self.path.display()))?;
        let mut out = BufWriter::new(file);

        let mut written = 0;
        for row in rows {
            serde_json::to_writer(&mut out, row)
                .with_context(|| format!("Cannot serialise row '{}'", row.index))?;
            out.write_all(b"\n")?;
            written += 1;
        }
        out.flush()?;

        tracing::debug!("Wrote {} rows to '{}'", written, self.path.display());
        Ok(written)
    }
}
