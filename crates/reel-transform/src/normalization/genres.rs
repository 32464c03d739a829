//! Genre list splitting.

/// Split delimited genre text into tags.
///
/// Tags are trimmed and empty tags are discarded, so a trailing delimiter is
/// harmless. A tag repeated within the same text is kept once, at its first
/// position.
pub fn split_genres(value: &str, delimiter: &str) -> Vec<String> {
    let delimiter = delimiter.trim();
    let mut tags: Vec<String> = Vec::new();
    if delimiter.is_empty() {
        let tag = value.trim();
        if !tag.is_empty() {
            tags.push(tag.to_string());
        }
        return tags;
    }
    for tag in value.split(delimiter).map(str::trim) {
        if tag.is_empty() || tags.iter().any(|seen| seen == tag) {
            continue;
        }
        tags.push(tag.to_string());
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_delimiter_is_discarded() {
        assert_eq!(
            split_genres("Action; Adventure; Sci-Fi;", ";"),
            vec!["Action", "Adventure", "Sci-Fi"]
        );
    }

    #[test]
    fn spaced_and_unspaced_delimiters_agree() {
        assert_eq!(split_genres("Action;Crime", "; "), split_genres("Action; Crime", ";"));
    }

    #[test]
    fn comma_delimited_source() {
        assert_eq!(split_genres("Drama, Romance", ","), vec!["Drama", "Romance"]);
    }

    #[test]
    fn repeats_within_a_record_collapse() {
        assert_eq!(
            split_genres("Drama; Action; Drama;", ";"),
            vec!["Drama", "Action"]
        );
    }

    #[test]
    fn empty_text_gives_empty_list() {
        assert!(split_genres("", ";").is_empty());
        assert!(split_genres(" ; ;", ";").is_empty());
    }
}
