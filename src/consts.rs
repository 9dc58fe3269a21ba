/// Column where the row layout switches from score-before-name to
/// name-before-feedback.
pub const PIVOT_LABEL: &str = "AR";

/// Columns holding a bare score with no respondent name.
pub const SCORE_ONLY_LABELS: [&str; 3] = ["BF", "BG", "BH"];

/// Column holding a free-text sentence with no respondent name.
pub const SENTENCE_ONLY_LABEL: &str = "BI";

/// Scores counted in the pre-pivot section. Anything else is dropped.
pub const VALID_SCORES: [&str; 3] = ["C", "D", "E"];

/// Order the score columns are displayed in.
pub const SCORE_DISPLAY_ORDER: [&str; 3] = ["D", "C", "E"];

/// Names closer than this (strictly) are treated as the same respondent.
pub const SIMILARITY_THRESHOLD: usize = 3;

/// Placeholder names that mean "not applicable".
pub const DROPPED_NAMES: [&str; 2] = ["N/A", "NA"];

/// Trailing suffix stripped from question text.
pub const NA_SUFFIX: &str = " or NA";

/// Infix removed anywhere from post-pivot question text.
pub const NA_INFIX: &str = "or NA ";

/// Separator used when joining merged respondent names.
pub const MERGED_NAME_SEPARATOR: &str = "/";
