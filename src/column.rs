use crate::error::{TallyError, TallyResult};

/// Converts a spreadsheet column label to its zero-based index.
///
/// The label is read as a bijective base-26 number (A=1 .. Z=26) and then
/// shifted down by one, so `A` is 0, `Z` is 25 and `AA` is 26.
/// Input is case-insensitive.
pub fn column_to_index(label: &str) -> TallyResult<usize> {
    if label.is_empty() {
        return Err(TallyError::InvalidLabel(label.to_string()));
    }

    let mut acc: usize = 0;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(TallyError::InvalidLabel(label.to_string()));
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A' + 1) as usize;
        acc = acc
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| TallyError::InvalidLabel(label.to_string()))?;
    }

    Ok(acc - 1)
}

/// Inverse of [`column_to_index`]: 0 -> "A", 26 -> "AA".
pub fn index_to_column(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(column_to_index("A").unwrap(), 0);
        assert_eq!(column_to_index("Z").unwrap(), 25);
        assert_eq!(column_to_index("AA").unwrap(), 26);
        assert_eq!(column_to_index("AR").unwrap(), 43);
        assert_eq!(column_to_index("BF").unwrap(), 57);
        assert_eq!(column_to_index("BI").unwrap(), 60);
    }

    #[test]
    fn test_lowercase_accepted() {
        assert_eq!(column_to_index("ar").unwrap(), 43);
        assert_eq!(column_to_index("bH").unwrap(), 59);
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(column_to_index(""), Err(TallyError::InvalidLabel(_))));
        assert!(matches!(column_to_index("A1"), Err(TallyError::InvalidLabel(_))));
        assert!(matches!(column_to_index("Ä"), Err(TallyError::InvalidLabel(_))));
    }

    #[test]
    fn test_index_to_column() {
        assert_eq!(index_to_column(0), "A");
        assert_eq!(index_to_column(25), "Z");
        assert_eq!(index_to_column(26), "AA");
        assert_eq!(index_to_column(43), "AR");
        assert_eq!(index_to_column(701), "ZZ");
        assert_eq!(index_to_column(702), "AAA");
    }
}
