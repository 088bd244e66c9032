// ============================================================
// Layer 4 — Dataset Loader
// ============================================================
// Loads a delimited text dataset using the csv crate.
//
// Expected layout (a typical pandas export):
//
//   ,text,label,label_num
//   605,"Subject: enron methanol ; meter # : 988291 ...",ham,0
//   2349,"Subject: hpl nom for january 9 , 2001 ...",ham,0
//
//   - The first column is the row index. Its header is often
//     empty, which is why it is read by position, not name.
//   - `text` and `label` are required.
//   - Any other column is carried along untouched, except one
//     named like a row field (index, lemmas, ent, or a second
//     text/label). The row's own field replaces it, the way the
//     derived lemmas / ent columns overwrite an existing column.
//
// Quoted fields may span several lines; the csv crate handles
// that so a message body with newlines stays in one record.
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::domain::row::{Dataset, DatasetRow, RESERVED_COLUMNS};
use crate::domain::traits::DatasetSource;

/// Loads a dataset from a delimited file on disk.
/// Implements the DatasetSource trait from Layer 3.
pub struct CsvDatasetLoader {
    path: PathBuf,
    delimiter: u8,
}

impl CsvDatasetLoader {
    /// Create a loader for a comma-separated file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Use a different single-byte field delimiter (e.g. b'\t')
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl DatasetSource for CsvDatasetLoader {
    fn load(&self) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open dataset '{}'", self.path.display()))?;

        let columns: Vec<String> = reader
            .headers()
            .with_context(|| format!("Cannot read header of '{}'", self.path.display()))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        if columns.is_empty() {
            bail!("Dataset '{}' has no header row", self.path.display());
        }

        let text_idx = column_position(&columns, "text")
            .with_context(|| format!("Dataset '{}' is missing a 'text' column", self.path.display()))?;
        let label_idx = column_position(&columns, "label")
            .with_context(|| format!("Dataset '{}' is missing a 'label' column", self.path.display()))?;

        let extra_columns: Vec<(usize, &String)> = columns
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(i, _)| *i != text_idx && *i != label_idx)
            .filter(|(_, name)| {
                let reserved = RESERVED_COLUMNS.contains(&name.as_str());
                if reserved {
                    tracing::warn!("Dropping input column '{}': the name is reserved", name);
                }
                !reserved
            })
            .collect();

        let mut rows = Vec::new();

        for (row_no, result) in reader.records().enumerate() {
            let record = result.with_context(|| {
                format!("Cannot parse row {} of '{}'", row_no, self.path.display())
            })?;

            let field = |idx: usize| record.get(idx).unwrap_or("").to_string();

            let mut row = DatasetRow::new(field(0), field(text_idx), field(label_idx));

            for &(col_idx, name) in &extra_columns {
                row.extra.insert(name.clone(), field(col_idx));
            }

            rows.push(row);
        }

        tracing::info!(
            "Loaded {} rows from '{}'",
            rows.len(),
            self.path.display()
        );

        Ok(Dataset::new(rows))
    }
}

/// Position of a required column. The index column (position 0)
/// is never matched, mirroring how it is set aside as the index.
fn column_position(columns: &[String], name: &str) -> Option<usize> {
    columns
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, h)| h.as_str() == name)
        .map(|(i, _)| i)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_loads_index_text_label_and_extras() {
        let f = write_csv(
            ",label,text,label_num\n\
             605,ham,\"Subject: enron methanol\",0\n\
             2349,spam,\"Subject: cheap meds\",1\n",
        );

        let ds = CsvDatasetLoader::new(f.path()).load().unwrap();

        assert_eq!(ds.len(), 2);

        let first = &ds.rows[0];
        assert_eq!(first.index, "605");
        assert_eq!(first.text, "Subject: enron methanol");
        assert_eq!(first.label, "ham");
        assert_eq!(first.extra.get("label_num").map(String::as_str), Some("0"));
        // Derived columns start out empty
        assert!(first.lemmas.is_empty());
        assert!(first.ent.is_empty());
    }

    #[test]
    fn test_columns_named_like_row_fields_are_dropped() {
        let f = write_csv(
            ",text,label,ent,index,lemmas,text,label_num\n\
             1,Enron,ham,x,y,z,again,0\n",
        );

        let ds = CsvDatasetLoader::new(f.path()).load().unwrap();
        let mut row = ds.rows[0].clone();

        assert_eq!(row.index, "1");
        assert_eq!(row.text, "Enron");
        assert_eq!(row.extra.len(), 1);
        assert_eq!(row.extra.get("label_num").map(String::as_str), Some("0"));

        // Written out and read back, the derived column wins
        row.ent = vec!["Enron".into()];
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json.matches("\"ent\"").count(), 1);
        assert_eq!(json.matches("\"index\"").count(), 1);
        let back: DatasetRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn test_quoted_text_may_span_lines() {
        let f = write_csv("id,text,label\n1,\"line one\nline two\",ham\n");
        let ds = CsvDatasetLoader::new(f.path()).load().unwrap();
        assert_eq!(ds.rows[0].text, "line one\nline two");
    }

    #[test]
    fn test_missing_label_column_is_an_error() {
        let f = write_csv("id,text\n1,hello\n");
        let err = CsvDatasetLoader::new(f.path()).load().unwrap_err();
        assert!(format!("{err:#}").contains("'label'"));
    }

    #[test]
    fn test_first_column_is_never_the_text_column() {
        // A first column literally named "text" is still the index
        let f = write_csv("text,label\n1,ham\n");
        assert!(CsvDatasetLoader::new(f.path()).load().is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let loader = CsvDatasetLoader::new("does/not/exist.csv");
        assert!(loader.load().is_err());
    }

    #[test]
    fn test_tab_delimiter() {
        let f = write_csv("id\ttext\tlabel\n7\thello there\tspam\n");
        let ds = CsvDatasetLoader::new(f.path())
            .with_delimiter(b'\t')
            .load()
            .unwrap();
        assert_eq!(ds.rows[0].index, "7");
        assert_eq!(ds.rows[0].label, "spam");
    }
}
