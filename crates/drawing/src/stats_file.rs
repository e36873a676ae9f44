//! Statistics file reader
//!
//! One record per line, whitespace-separated numeric columns. Blank lines
//! and `#` comments are skipped, and a leading non-numeric line is taken as
//! a header. Columns are addressed 1-based.

use std::fs;
use std::path::{Path, PathBuf};

use contracts::PipelineError;

#[derive(Debug, Clone)]
struct Row {
    line: usize,
    cells: Vec<f64>,
}

/// Parsed statistics file
#[derive(Debug, Clone)]
pub struct StatsTable {
    path: PathBuf,
    rows: Vec<Row>,
}

impl StatsTable {
    /// Read and parse `path`
    pub fn read(path: &Path) -> Result<Self, PipelineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            PipelineError::visualization(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse(path, &content)
    }

    /// Parse `content`; `path` is only used in error messages
    pub fn parse(path: &Path, content: &str) -> Result<Self, PipelineError> {
        let mut rows = Vec::new();
        let mut header_seen = false;

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parsed: Result<Vec<f64>, _> =
                line.split_whitespace().map(str::parse::<f64>).collect();
            match parsed {
                Ok(cells) => rows.push(Row {
                    line: idx + 1,
                    cells,
                }),
                Err(_) if rows.is_empty() && !header_seen => header_seen = true,
                Err(_) => {
                    return Err(PipelineError::visualization(format!(
                        "{}:{}: non-numeric value in '{line}'",
                        path.display(),
                        idx + 1
                    )))
                }
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            rows,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of the 1-based column `index`
    pub fn column(&self, index: usize) -> Result<Vec<f64>, PipelineError> {
        if index == 0 {
            return Err(PipelineError::visualization("columns are numbered from 1"));
        }
        self.rows
            .iter()
            .map(|row| {
                row.cells.get(index - 1).copied().ok_or_else(|| {
                    PipelineError::visualization(format!(
                        "{}:{}: expected at least {index} columns, found {}",
                        self.path.display(),
                        row.line,
                        row.cells.len()
                    ))
                })
            })
            .collect()
    }
}

/// Mutation positions divided by sequence lengths (columns 1 and 2)
pub fn relative_positions(table: &StatsTable) -> Result<Vec<f64>, PipelineError> {
    let positions = table.column(1)?;
    let lengths = table.column(2)?;

    positions
        .iter()
        .zip(&lengths)
        .zip(&table.rows)
        .map(|((pos, len), row)| {
            if *len == 0.0 {
                Err(PipelineError::visualization(format!(
                    "{}:{}: zero sequence length",
                    table.path.display(),
                    row.line
                )))
            } else {
                Ok(pos / len)
            }
        })
        .collect()
}
