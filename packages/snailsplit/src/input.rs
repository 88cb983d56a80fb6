//! Matrix loading from JSON and YAML files.

use std::fs;
use std::path::Path;

use crate::error::{Result, SnailsplitError};
use crate::spiral::SquareMatrix;

/// Parse a matrix from JSON text, e.g. `[[1, 2], [3, 4]]`.
pub fn parse_matrix_json(text: &str) -> Result<SquareMatrix<i64>> {
    let rows: Vec<Vec<i64>> = serde_json::from_str(text)?;
    SquareMatrix::new(rows)
}

/// Parse a matrix from YAML text (a sequence of sequences).
pub fn parse_matrix_yaml(text: &str) -> Result<SquareMatrix<i64>> {
    let rows: Vec<Vec<i64>> = serde_yaml_ng::from_str(text)?;
    SquareMatrix::new(rows)
}

/// Load a square matrix from a `.json`, `.yaml` or `.yml` file.
///
/// # Errors
/// Returns an error if the extension is not recognised, the file cannot be
/// read or parsed, or the matrix is not square.
pub fn load_matrix(path: &Path) -> Result<SquareMatrix<i64>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parse: fn(&str) -> Result<SquareMatrix<i64>> = match extension.as_str() {
        "json" => parse_matrix_json,
        "yaml" | "yml" => parse_matrix_yaml,
        _ => return Err(SnailsplitError::UnsupportedFormat(path.display().to_string())),
    };

    let text = fs::read_to_string(path)?;
    let matrix = parse(&text)?;
    tracing::debug!(path = %path.display(), size = matrix.size(), "Loaded matrix");
    Ok(matrix)
}
