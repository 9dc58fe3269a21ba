use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Who a tallied value belongs to.
///
/// Columns without a name column (score-only and sentence-only) are tallied
/// under `Unnamed`, which can never collide with a real respondent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RespondentKey {
    Named(String),
    Unnamed,
}

impl RespondentKey {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(n) => Some(n),
            Self::Unnamed => None,
        }
    }
}

impl fmt::Display for RespondentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => write!(f, "{}", n),
            Self::Unnamed => write!(f, "(no name)"),
        }
    }
}

/// Observed value -> number of times it was seen. Counts are always >= 1.
pub type ValueCounts = BTreeMap<String, u32>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondentEntry {
    pub key: RespondentKey,
    pub counts: ValueCounts,
}

/// All respondents seen for one question, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionGroup {
    entries: Vec<RespondentEntry>,
}

impl QuestionGroup {
    pub fn record(&mut self, key: RespondentKey, value: &str) {
        let idx = match self.entries.iter().position(|e| e.key == key) {
            Some(i) => i,
            None => {
                self.entries.push(RespondentEntry {
                    key,
                    counts: ValueCounts::new(),
                });
                self.entries.len() - 1
            }
        };
        *self.entries[idx]
            .counts
            .entry(value.to_string())
            .or_insert(0) += 1;
    }

    pub fn get(&self, key: &RespondentKey) -> Option<&ValueCounts> {
        self.entries.iter().find(|e| &e.key == key).map(|e| &e.counts)
    }

    pub fn get_named(&self, name: &str) -> Option<&ValueCounts> {
        self.get(&RespondentKey::named(name))
    }

    pub fn unnamed(&self) -> Option<&ValueCounts> {
        self.get(&RespondentKey::Unnamed)
    }

    pub fn has_unnamed(&self) -> bool {
        self.unnamed().is_some()
    }

    /// Named respondents in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| e.key.name())
    }

    pub fn entries(&self) -> &[RespondentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the named `members` with a single entry under `merged`,
    /// summing counts of identical values. The merged entry goes last,
    /// unless a surviving respondent already carries that key, in which
    /// case the counts are folded into it.
    pub fn merge_named(&mut self, members: &[String], merged: String) {
        let mut combined = ValueCounts::new();
        self.entries.retain(|e| match &e.key {
            RespondentKey::Named(n) if members.contains(n) => {
                for (value, count) in &e.counts {
                    *combined.entry(value.clone()).or_insert(0) += count;
                }
                false
            }
            _ => true,
        });

        let key = RespondentKey::Named(merged);
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => {
                for (value, count) in combined {
                    *existing.counts.entry(value).or_insert(0) += count;
                }
            }
            None => self.entries.push(RespondentEntry {
                key,
                counts: combined,
            }),
        }
    }
}

/// (question, respondent) -> value -> count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally {
    questions: BTreeMap<String, QuestionGroup>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `value`, creating the question and
    /// respondent on first sight.
    pub fn record(&mut self, question: &str, key: RespondentKey, value: &str) {
        self.questions
            .entry(question.to_string())
            .or_default()
            .record(key, value);
    }

    pub fn group(&self, question: &str) -> Option<&QuestionGroup> {
        self.questions.get(question)
    }

    pub(crate) fn groups_mut(&mut self) -> impl Iterator<Item = (&String, &mut QuestionGroup)> {
        self.questions.iter_mut()
    }

    /// Questions in lexicographic order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &QuestionGroup)> {
        self.questions.iter().map(|(q, g)| (q.as_str(), g))
    }

    pub fn count(&self, question: &str, key: &RespondentKey, value: &str) -> u32 {
        self.group(question)
            .and_then(|g| g.get(key))
            .and_then(|c| c.get(value))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of every count in the tally.
    pub fn total(&self) -> u64 {
        self.questions
            .values()
            .flat_map(|g| g.entries.iter())
            .flat_map(|e| e.counts.values())
            .map(|&c| c as u64)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
