use crate::aggregate::{aggregate, Summary};
use crate::error::TallyResult;
use crate::layout::{classify, Classification};
use crate::loader::load_grid;
use std::path::Path;

/// Service: load a survey export and aggregate it in one call.
pub fn process_file<P: AsRef<Path>>(path: P) -> TallyResult<Summary> {
    let grid = load_grid(path)?;
    aggregate(&grid)
}

/// Service: classify only the header row of a survey export.
///
/// An empty file yields an empty header, which fails as "no questions".
pub fn inspect_file<P: AsRef<Path>>(path: P) -> TallyResult<Classification> {
    let grid = load_grid(path)?;
    let header = grid.first().map(Vec::as_slice).unwrap_or(&[]);
    classify(header)
}
