use calamine::{CellErrorType, Data};
use peertally::loader::{load_csv_from_reader, load_grid, stringify};
use peertally::TallyError;
use rstest::rstest;
use rust_xlsxwriter::Workbook;
use std::io::{Cursor, Write};
use tempfile::{tempdir, NamedTempFile};

// --- CELL STRINGIFICATION ---

#[rstest]
#[case(Data::Empty, "")]
#[case(Data::String("  Kim ".into()), "  Kim ")]
#[case(Data::Float(3.0), "3")]
#[case(Data::Float(-12.0), "-12")]
#[case(Data::Float(2.5), "2.5")]
#[case(Data::Int(42), "42")]
#[case(Data::Bool(true), "true")]
#[case(Data::Bool(false), "false")]
#[case(Data::DateTimeIso("2024-03-01T00:00:00".into()), "2024-03-01T00:00:00")]
fn test_stringify(#[case] cell: Data, #[case] expected: &str) {
    assert_eq!(stringify(&cell), expected);
}

#[test]
fn test_stringify_error_cell() {
    assert_eq!(stringify(&Data::Error(CellErrorType::Div0)), "#DIV/0!");
}

// --- CSV ---

#[test]
fn test_csv_rows_keep_ragged_lengths() {
    let data = "Name,Teamwork,Who\n,C,Kim\n,D\n";
    let grid = load_csv_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(grid.len(), 3);
    assert_eq!(grid[0], vec!["Name", "Teamwork", "Who"]);
    assert_eq!(grid[1], vec!["", "C", "Kim"]);
    assert_eq!(grid[2], vec!["", "D"]);
}

#[test]
fn test_csv_quoted_cells() {
    let data = "\"Comments, or NA please\",x\n\"said \"\"hi\"\"\",y\n";
    let grid = load_csv_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(grid[0][0], "Comments, or NA please");
    assert_eq!(grid[1][0], "said \"hi\"");
}

#[test]
fn test_load_grid_by_csv_extension() {
    let mut file = NamedTempFile::with_suffix(".CSV").unwrap();
    writeln!(file, "a,b").unwrap();
    writeln!(file, "c,d").unwrap();

    let grid = load_grid(file.path()).unwrap();
    assert_eq!(grid, vec![vec!["a", "b"], vec!["c", "d"]]);
}

#[test]
fn test_unsupported_extension() {
    let file = NamedTempFile::with_suffix(".txt").unwrap();
    match load_grid(file.path()) {
        Err(TallyError::UnsupportedFormat(ext)) => assert_eq!(ext, "txt"),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_grid(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, TallyError::Io(_)));
}

// --- XLSX ---

#[test]
fn test_xlsx_first_sheet_only() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("survey.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "Header").unwrap();
    sheet.write_string(0, 1, "Teamwork").unwrap();
    sheet.write_string(1, 1, "c").unwrap();
    sheet.write_number(1, 2, 7.0).unwrap();
    sheet.write_boolean(1, 3, true).unwrap();
    let other = workbook.add_worksheet();
    other.write_string(0, 0, "Ignored").unwrap();
    workbook.save(&path).unwrap();

    let grid = load_grid(&path).unwrap();
    assert_eq!(grid.len(), 2);
    assert_eq!(grid[0][0], "Header");
    assert_eq!(grid[0][1], "Teamwork");
    assert_eq!(grid[1], vec!["", "c", "7", "true"]);
}

#[test]
fn test_xlsx_grid_anchored_at_a1() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("offset.xlsx");

    // Used range starts at C2.
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(1, 2, "Teamwork").unwrap();
    sheet.write_string(2, 3, "Kim").unwrap();
    workbook.save(&path).unwrap();

    let grid = load_grid(&path).unwrap();
    assert_eq!(grid.len(), 3);
    assert!(grid[0].is_empty());
    assert_eq!(grid[1][2], "Teamwork");
    assert_eq!(grid[2][3], "Kim");
}

#[test]
fn test_corrupt_workbook_is_spreadsheet_error() {
    let mut file = NamedTempFile::with_suffix(".xlsx").unwrap();
    file.write_all(b"definitely not a zip archive").unwrap();
    let err = load_grid(file.path()).unwrap_err();
    assert!(matches!(err, TallyError::Spreadsheet(_)));
}
