use crate::column::{column_to_index, index_to_column};
use crate::consts::{NA_INFIX, NA_SUFFIX, PIVOT_LABEL, SCORE_ONLY_LABELS, SENTENCE_ONLY_LABEL};
use crate::error::{TallyError, TallyResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strum_macros::{Display, EnumIter};
use tracing::{debug, info, warn};

/// How the cells under a question column are laid out in each data row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Score in this column, respondent name in the next one.
    ScoreWithName,
    /// Respondent name in the previous column, feedback in this one.
    FeedbackWithName,
    /// Bare score, no name.
    ScoreOnly,
    /// Bare sentence, no name.
    SentenceOnly,
}

impl SectionKind {
    pub fn is_named(&self) -> bool {
        matches!(self, Self::ScoreWithName | Self::FeedbackWithName)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionEntry {
    pub column: usize,
    pub question: String,
    pub kind: SectionKind,
}

/// Column index -> question entry. Iterates in ascending column order.
pub type LayoutMap = BTreeMap<usize, QuestionEntry>;

/// Boundary columns of the fixed survey export layout, resolved to indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub pivot: usize,
    pub score_only: [usize; 3],
    pub sentence_only: usize,
}

impl ColumnLayout {
    pub fn standard() -> TallyResult<Self> {
        Ok(Self {
            pivot: column_to_index(PIVOT_LABEL)?,
            score_only: [
                column_to_index(SCORE_ONLY_LABELS[0])?,
                column_to_index(SCORE_ONLY_LABELS[1])?,
                column_to_index(SCORE_ONLY_LABELS[2])?,
            ],
            sentence_only: column_to_index(SENTENCE_ONLY_LABEL)?,
        })
    }

    fn is_special(&self, col: usize) -> bool {
        self.score_only.contains(&col) || col == self.sentence_only
    }
}

#[derive(Debug, Clone, Default)]
pub struct Classification {
    pub layout: LayoutMap,
    /// Questions belonging to the pre-pivot score layout.
    pub score_sections: BTreeSet<String>,
}

/// Cleanup for question text left of the pivot: trim, then drop a trailing
/// " or NA".
pub fn clean_pre_pivot(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_suffix(NA_SUFFIX).unwrap_or(trimmed).to_string()
}

/// Cleanup for question text at or right of the pivot: remove every
/// "or NA " and trim, then drop a trailing " or NA" and trim again.
pub fn clean_post_pivot(raw: &str) -> String {
    let removed = raw.trim().replace(NA_INFIX, "");
    let trimmed = removed.trim();
    match trimmed.strip_suffix(NA_SUFFIX) {
        Some(rest) => rest.trim().to_string(),
        None => trimmed.to_string(),
    }
}

fn header_cell(header: &[String], col: usize) -> &str {
    header.get(col).map(|s| s.trim()).unwrap_or("")
}

/// Reads the header row and builds the column -> question map for the
/// standard layout.
pub fn classify(header: &[String]) -> TallyResult<Classification> {
    classify_with(header, &ColumnLayout::standard()?)
}

pub fn classify_with(header: &[String], cols: &ColumnLayout) -> TallyResult<Classification> {
    let mut out = Classification::default();

    // Pre-pivot: questions sit on odd columns, the name follows.
    for col in (1..cols.pivot.min(header.len())).step_by(2) {
        let raw = header_cell(header, col);
        if raw.is_empty() {
            continue;
        }
        let question = clean_pre_pivot(raw);
        out.score_sections.insert(question.clone());
        insert(&mut out.layout, col, question, SectionKind::ScoreWithName);
    }

    // Post-pivot: the pivot column itself holds names, questions start right after.
    for col in ((cols.pivot + 1)..header.len()).step_by(2) {
        if cols.is_special(col) {
            continue;
        }
        let raw = header_cell(header, col);
        if raw.is_empty() {
            continue;
        }
        insert(
            &mut out.layout,
            col,
            clean_post_pivot(raw),
            SectionKind::FeedbackWithName,
        );
    }

    for &col in &cols.score_only {
        let raw = header_cell(header, col);
        if !raw.is_empty() {
            insert(&mut out.layout, col, clean_post_pivot(raw), SectionKind::ScoreOnly);
        }
    }

    let raw = header_cell(header, cols.sentence_only);
    if !raw.is_empty() {
        insert(
            &mut out.layout,
            cols.sentence_only,
            clean_post_pivot(raw),
            SectionKind::SentenceOnly,
        );
    }

    if out.layout.is_empty() {
        return Err(TallyError::NoQuestionsFound);
    }

    info!(
        "Discovered {} question columns ({} in the score section)",
        out.layout.len(),
        out.score_sections.len()
    );
    Ok(out)
}

fn insert(layout: &mut LayoutMap, column: usize, question: String, kind: SectionKind) {
    if question.is_empty() {
        warn!(
            "Header in column {} is empty after cleanup; tallying under an empty question",
            index_to_column(column)
        );
    }
    debug!("{} [{}] {}", index_to_column(column), kind, question);
    layout.insert(column, QuestionEntry { column, question, kind });
}
