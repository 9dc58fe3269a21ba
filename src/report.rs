//! Presentation of an aggregated [`Summary`].
//!
//! Every renderer is a pure function returning the finished document; the
//! caller decides where it goes.

use crate::aggregate::Summary;
use crate::config::OutputFormat;
use crate::consts::SCORE_DISPLAY_ORDER;
use crate::error::TallyResult;
use crate::tally::{QuestionGroup, RespondentEntry, ValueCounts};
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::fmt::Write;

pub const EMPTY_MESSAGE: &str = "No valid data found after processing the file.";

const RULE_WIDTH: usize = 100;

pub fn render(summary: &Summary, format: OutputFormat) -> TallyResult<String> {
    Ok(match format {
        OutputFormat::Text => render_text(summary),
        OutputFormat::Html => render_html(summary),
        OutputFormat::Table => render_table(summary),
        OutputFormat::Json => render_json(summary)?,
    })
}

/// How a question's named respondents are laid out.
enum NamedStyle {
    ScoreColumns,
    PersonList,
}

fn named_style(summary: &Summary, question: &str) -> NamedStyle {
    if summary.score_sections.contains(question) {
        NamedStyle::ScoreColumns
    } else {
        NamedStyle::PersonList
    }
}

/// Named entries sorted by display name.
fn sorted_named(group: &QuestionGroup) -> Vec<(&str, &ValueCounts)> {
    let mut named: Vec<(&str, &ValueCounts)> = group
        .entries()
        .iter()
        .filter_map(|RespondentEntry { key, counts }| key.name().map(|n| (n, counts)))
        .collect();
    named.sort_by(|a, b| a.0.cmp(b.0));
    named
}

fn score_counts(counts: &ValueCounts) -> [u32; 3] {
    SCORE_DISPLAY_ORDER.map(|s| counts.get(s).copied().unwrap_or(0))
}

fn times(count: u32) -> String {
    format!("{} time{}", count, if count > 1 { "s" } else { "" })
}

pub fn render_text(summary: &Summary) -> String {
    if summary.tally.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    for (question, group) in summary.tally.groups() {
        let _ = write!(out, "{rule}\nQUESTION: {question}\n{rule}\n");

        if let Some(items) = group.unnamed() {
            for (item, &count) in items {
                let _ = writeln!(out, "  -> '{}' ({})", item, times(count));
            }
        }

        match named_style(summary, question) {
            NamedStyle::ScoreColumns => {
                for (name, counts) in sorted_named(group) {
                    let [d, c, e] = score_counts(counts);
                    let _ = writeln!(
                        out,
                        "  {:<5} | D: {:<5} | C: {:<5} | E: {:<5}",
                        name, d, c, e
                    );
                }
            }
            NamedStyle::PersonList => {
                for (name, counts) in sorted_named(group) {
                    let _ = writeln!(out, "  PERSON: {}", name);
                    for value in counts.keys() {
                        let _ = writeln!(out, "    -> '{}'", value);
                    }
                    out.push('\n');
                }
            }
        }

        out.push('\n');
    }
    out
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_html(summary: &Summary) -> String {
    if summary.tally.is_empty() {
        return escape_html(EMPTY_MESSAGE);
    }

    let mut out = String::new();
    for (question, group) in summary.tally.groups() {
        let _ = write!(
            out,
            "<div class=\"question-header\">QUESTION: {}</div>",
            escape_html(question)
        );

        if let Some(items) = group.unnamed() {
            out.push_str("<div class=\"no-name-item\">");
            for (item, &count) in items {
                let _ = write!(
                    out,
                    "<div>  -> &#39;{}&#39; ({})</div>",
                    escape_html(item),
                    times(count)
                );
            }
            out.push_str("</div>");
        }

        let named = sorted_named(group);
        match named_style(summary, question) {
            NamedStyle::ScoreColumns if !named.is_empty() => {
                out.push_str(
                    "<table class=\"questions-table\"><thead><tr><th>Name</th>\
                     <th>D</th><th>C</th><th>E</th></tr></thead><tbody>",
                );
                for (name, counts) in named {
                    let [d, c, e] = score_counts(counts);
                    let _ = write!(
                        out,
                        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                        escape_html(name),
                        d,
                        c,
                        e
                    );
                }
                out.push_str("</tbody></table>");
            }
            NamedStyle::ScoreColumns => {}
            NamedStyle::PersonList => {
                for (name, counts) in named {
                    let _ = write!(
                        out,
                        "<div class=\"person-header\">PERSON: {}</div>",
                        escape_html(name)
                    );
                    for value in counts.keys() {
                        let _ = write!(
                            out,
                            "<div class=\"score-item\">    -> &#39;{}&#39;</div>",
                            escape_html(value)
                        );
                    }
                    out.push_str("<br>");
                }
            }
        }

        out.push_str("<br><br>");
    }
    out
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// Terminal rendering: one table per question.
pub fn render_table(summary: &Summary) -> String {
    if summary.tally.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let mut out = String::new();
    for (question, group) in summary.tally.groups() {
        let _ = writeln!(out, "\nQUESTION: {}", question);

        if let Some(items) = group.unnamed() {
            let mut table = new_table();
            table.add_row(vec![
                Cell::new("Response").add_attribute(Attribute::Bold),
                Cell::new("Count").fg(Color::Cyan),
            ]);
            for (item, count) in items {
                table.add_row(vec![Cell::new(item), Cell::new(count)]);
            }
            align_right(&mut table, 1..=1);
            let _ = writeln!(out, "{}", table);
        }

        let named = sorted_named(group);
        if named.is_empty() {
            continue;
        }

        let mut table = new_table();
        match named_style(summary, question) {
            NamedStyle::ScoreColumns => {
                table.add_row(vec![
                    Cell::new("Name").add_attribute(Attribute::Bold),
                    Cell::new("D").fg(Color::Green),
                    Cell::new("C").fg(Color::Yellow),
                    Cell::new("E").fg(Color::Red),
                ]);
                for (name, counts) in named {
                    let [d, c, e] = score_counts(counts);
                    table.add_row(vec![
                        Cell::new(name).add_attribute(Attribute::Bold),
                        Cell::new(d),
                        Cell::new(c),
                        Cell::new(e),
                    ]);
                }
                align_right(&mut table, 1..=3);
            }
            NamedStyle::PersonList => {
                table.add_row(vec![
                    Cell::new("Person").add_attribute(Attribute::Bold),
                    Cell::new("Feedback"),
                ]);
                for (name, counts) in named {
                    let feedback: Vec<&str> = counts.keys().map(String::as_str).collect();
                    table.add_row(vec![
                        Cell::new(name).add_attribute(Attribute::Bold),
                        Cell::new(feedback.join("\n")),
                    ]);
                }
            }
        }
        let _ = writeln!(out, "{}", table);
    }
    out
}

pub fn render_json(summary: &Summary) -> TallyResult<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
