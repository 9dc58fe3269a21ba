use crate::consts::{MERGED_NAME_SEPARATOR, SIMILARITY_THRESHOLD};
use crate::tally::Tally;
use tracing::debug;

/// Unit-cost edit distance (insert, delete, substitute) over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Single rolling row of the DP matrix.
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for i in 1..=a.len() {
        let mut diag = row[0];
        row[0] = i;
        for j in 1..=b.len() {
            let above = row[j];
            row[j] = if a[i - 1] == b[j - 1] {
                diag
            } else {
                1 + diag.min(above).min(row[j - 1])
            };
            diag = above;
        }
    }
    row[b.len()]
}

/// Distance between two respondent names.
///
/// Names of unequal length are compared on the shorter length only, so
/// "Smith" and "Smithson" are distance 0.
pub fn name_distance(a: &str, b: &str) -> usize {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a == len_b {
        return levenshtein(a, b);
    }
    let n = len_a.min(len_b);
    let pa: String = a.chars().take(n).collect();
    let pb: String = b.chars().take(n).collect();
    levenshtein(&pa, &pb)
}

/// Greedy seed clustering in input order.
///
/// Each unclaimed name seeds a cluster and claims every later unclaimed name
/// within `threshold` of the seed. Members are only compared to the seed.
pub fn cluster_names(names: &[String], threshold: usize) -> Vec<Vec<String>> {
    let mut claimed = vec![false; names.len()];
    let mut clusters = Vec::new();

    for i in 0..names.len() {
        if claimed[i] {
            continue;
        }
        claimed[i] = true;
        let mut cluster = vec![names[i].clone()];

        for j in (i + 1)..names.len() {
            if !claimed[j] && name_distance(&names[i], &names[j]) < threshold {
                claimed[j] = true;
                cluster.push(names[j].clone());
            }
        }
        clusters.push(cluster);
    }
    clusters
}

/// Merges near-duplicate respondent names within each question.
///
/// Questions holding an unnamed group are left alone, as are questions with
/// fewer than two names. Returns the number of clusters merged.
pub fn reconcile(tally: &mut Tally) -> usize {
    let mut merged = 0;

    for (question, group) in tally.groups_mut() {
        if group.has_unnamed() {
            continue;
        }
        let names: Vec<String> = group.names().map(str::to_string).collect();
        if names.len() < 2 {
            continue;
        }

        for mut cluster in cluster_names(&names, SIMILARITY_THRESHOLD) {
            if cluster.len() < 2 {
                continue;
            }
            cluster.sort();
            let key = cluster.join(MERGED_NAME_SEPARATOR);
            debug!("Merging {} names under '{}' for '{}'", cluster.len(), key, question);
            group.merge_named(&cluster, key);
            merged += 1;
        }
    }

    merged
}
