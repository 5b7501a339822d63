use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{LineageError, Result};

/// Opens a line-oriented input, decompressing it when the path ends in `.gz`.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let f = File::open(path).map_err(|e| LineageError::io(path, e))?;

    let is_gz = path
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let reader: Box<dyn BufRead> = if is_gz {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    Ok(reader)
}

/// Iterates `(line_number, line)` pairs, 1-based, with trailing whitespace
/// stripped and blank lines dropped.
pub fn for_each_line<F>(path: &Path, mut f: F) -> Result<()>
where
    F: FnMut(usize, &str) -> Result<()>,
{
    let reader = open_reader(path)?;
    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| LineageError::io(path, e))?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        f(idx + 1, line)?;
    }
    Ok(())
}

/// Splits a dump line on tabs and checks it has at least `expected` fields.
pub fn split_fields<'a>(
    path: &Path,
    line_no: usize,
    line: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < expected {
        return Err(LineageError::MalformedLine {
            path: path.to_path_buf(),
            line: line_no,
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}
