use crate::consts::{DROPPED_NAMES, VALID_SCORES};
use crate::error::{TallyError, TallyResult};
use crate::layout::{classify, LayoutMap, SectionKind};
use crate::reconcile::reconcile;
use crate::tally::{RespondentKey, Tally};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Rows of string cells. Row 0 is the header, rows 1.. are responses.
pub type Grid = Vec<Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub rows_scanned: usize,
    pub cells_tallied: usize,
    /// Question cells visited but not counted (blank, invalid score, bad name).
    pub cells_skipped: usize,
    /// Subset of skipped cells whose name was a "not applicable" placeholder.
    pub names_dropped: usize,
    pub clusters_merged: usize,
}

/// Output of one aggregation run, ready for a presenter.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub tally: Tally,
    pub score_sections: BTreeSet<String>,
    pub stats: AggregateStats,
}

/// True for names that mean "no respondent": empty, "N/A" or "NA" in any case.
pub fn should_drop_name(name: &str) -> bool {
    let upper = name.trim().to_uppercase();
    upper.is_empty() || DROPPED_NAMES.contains(&upper.as_str())
}

fn is_placeholder(name: &str) -> bool {
    !name.is_empty() && should_drop_name(name)
}

/// Trimmed cell content; anything out of bounds reads as empty.
fn cell(row: &[String], col: Option<usize>) -> &str {
    col.and_then(|c| row.get(c)).map(|s| s.trim()).unwrap_or("")
}

/// Runs the full pipeline on a decoded grid: classify the header, tally
/// every data row, then merge near-duplicate names.
pub fn aggregate(grid: &[Vec<String>]) -> TallyResult<Summary> {
    if grid.len() < 2 {
        return Err(TallyError::InsufficientRows { found: grid.len() });
    }

    let classification = classify(&grid[0])?;

    let mut summary = Summary {
        score_sections: classification.score_sections,
        ..Default::default()
    };
    aggregate_rows(
        &classification.layout,
        &grid[1..],
        &mut summary.tally,
        &mut summary.stats,
    );
    summary.stats.clusters_merged = reconcile(&mut summary.tally);

    info!(
        "Tallied {} cells across {} questions from {} rows",
        summary.stats.cells_tallied,
        summary.tally.len(),
        summary.stats.rows_scanned
    );
    debug!(
        "Skipped {} cells ({} placeholder names), merged {} name clusters",
        summary.stats.cells_skipped, summary.stats.names_dropped, summary.stats.clusters_merged
    );

    Ok(summary)
}

/// Tallies data rows (header excluded) into `tally` according to `layout`.
pub fn aggregate_rows(
    layout: &LayoutMap,
    rows: &[Vec<String>],
    tally: &mut Tally,
    stats: &mut AggregateStats,
) {
    for row in rows {
        stats.rows_scanned += 1;

        for (&col, entry) in layout {
            if col >= row.len() {
                continue;
            }

            let tallied = match entry.kind {
                SectionKind::ScoreWithName => {
                    let name = cell(row, col.checked_add(1));
                    let score = cell(row, Some(col)).to_uppercase();
                    if is_placeholder(name) {
                        stats.names_dropped += 1;
                    }
                    if !should_drop_name(name) && VALID_SCORES.contains(&score.as_str()) {
                        tally.record(&entry.question, RespondentKey::named(name), &score);
                        true
                    } else {
                        false
                    }
                }
                SectionKind::FeedbackWithName => {
                    let name = cell(row, col.checked_sub(1));
                    let feedback = cell(row, Some(col));
                    if is_placeholder(name) {
                        stats.names_dropped += 1;
                    }
                    if !should_drop_name(name) && !feedback.is_empty() {
                        tally.record(&entry.question, RespondentKey::named(name), feedback);
                        true
                    } else {
                        false
                    }
                }
                SectionKind::ScoreOnly | SectionKind::SentenceOnly => {
                    let value = cell(row, Some(col));
                    if !value.is_empty() {
                        tally.record(&entry.question, RespondentKey::Unnamed, value);
                        true
                    } else {
                        false
                    }
                }
            };

            if tallied {
                stats.cells_tallied += 1;
            } else {
                stats.cells_skipped += 1;
            }
        }
    }
}
