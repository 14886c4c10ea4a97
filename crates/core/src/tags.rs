//! Tag normalization.
//!
//! Tags are stored lowercase and unique within an article; there is no
//! global tag entity. Normalization happens once, at input time, so every
//! read path can trust the stored form.

/// Normalize a user-supplied tag list: trim, lowercase, drop empties, and
/// de-duplicate keeping the first occurrence's position.
pub fn normalize<I>(tags: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for tag in tags {
        let normalized = tag.as_ref().trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.clone()) {
            out.push(normalized);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folds_and_dedups_keeping_first_occurrence() {
        let tags = normalize(["JS", "js", "Java"]);
        assert_eq!(tags, vec!["js", "java"]);
    }

    #[test]
    fn test_trims_and_drops_empties() {
        let tags = normalize(["  travel ", "", "  ", "Life"]);
        assert_eq!(tags, vec!["travel", "life"]);
    }

    #[test]
    fn test_non_ascii_tags_lowercase() {
        let tags = normalize(["Путешествия", "ПУТЕШЕСТВИЯ"]);
        assert_eq!(tags, vec!["путешествия"]);
    }

    #[test]
    fn test_empty_input() {
        let tags = normalize(Vec::<String>::new());
        assert!(tags.is_empty());
    }
}
