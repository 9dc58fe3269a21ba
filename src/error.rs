use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("Spreadsheet must contain at least 2 rows (row 0: questions, row 1+: data), found {found}")]
    InsufficientRows { found: usize },

    #[error("No questions found in row 0. Check the spreadsheet format.")]
    NoQuestionsFound,

    #[error("Invalid column label '{0}': expected one or more letters A-Z")]
    InvalidLabel(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet Error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Workbook contains no sheets")]
    EmptyWorkbook,

    #[error("Unsupported file type '{0}' (expected xlsx, xlsm, xls, xlsb, ods or csv)")]
    UnsupportedFormat(String),
}

pub type TallyResult<T> = Result<T, TallyError>;
