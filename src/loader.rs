use crate::aggregate::Grid;
use crate::error::{TallyError, TallyResult};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// Decodes a survey export into a grid of strings, picking the decoder
/// from the file extension.
pub fn load_grid<P: AsRef<Path>>(path: P) -> TallyResult<Grid> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if ext == "csv" {
        load_csv(path)
    } else if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
        load_workbook(path)
    } else {
        Err(TallyError::UnsupportedFormat(ext))
    }
}

/// Reads the first sheet of an Excel/ODS workbook.
pub fn load_workbook<P: AsRef<Path>>(path: P) -> TallyResult<Grid> {
    let path = path.as_ref();
    info!("📂 Opening workbook: {}", path.display());

    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names();

    let first = sheet_names.first().ok_or(TallyError::EmptyWorkbook)?.clone();
    if sheet_names.len() > 1 {
        warn!(
            "Workbook has {} sheets; only '{}' is processed",
            sheet_names.len(),
            first
        );
    }

    let range = workbook.worksheet_range(&first)?;
    let grid = range_to_grid(&range);
    debug!("Sheet '{}' decoded into {} rows", first, grid.len());
    Ok(grid)
}

/// Converts a calamine range into a grid anchored at A1, so grid column
/// indices always line up with sheet column letters.
pub fn range_to_grid(range: &Range<Data>) -> Grid {
    let (start_row, start_col) = match range.start() {
        Some((r, c)) => (r as usize, c as usize),
        None => return Grid::new(),
    };

    let mut grid: Grid = vec![Vec::new(); start_row];
    for row in range.rows() {
        let mut cells = vec![String::new(); start_col];
        cells.extend(row.iter().map(stringify));
        grid.push(cells);
    }
    grid
}

/// Renders any cell type as text. Missing/empty cells become "".
pub fn stringify(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => e.to_string(),
        // Serial number, same as an unformatted numeric read.
        Data::DateTime(dt) => stringify(&Data::Float(dt.as_f64())),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

pub fn load_csv<P: AsRef<Path>>(path: P) -> TallyResult<Grid> {
    let path = path.as_ref();
    info!("📂 Opening CSV export: {}", path.display());
    let file = File::open(path)?;
    load_csv_from_reader(file)
}

/// Every record is a grid row; the first record is the question header.
pub fn load_csv_from_reader<R: Read>(reader: R) -> TallyResult<Grid> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut grid = Grid::new();
    for result in rdr.records() {
        let rec = result?;
        grid.push(rec.iter().map(str::to_string).collect());
    }

    debug!("CSV decoded into {} rows", grid.len());
    Ok(grid)
}
