use crate::error::{NotesError, NotesResult};

/// A validated, case-folded search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    folded: String,
}

impl Keyword {
    /// Rejects empty or whitespace-only input. The term itself is not trimmed.
    pub fn parse(raw: &str) -> NotesResult<Self> {
        if raw.trim().is_empty() {
            return Err(NotesError::EmptyInput { what: "Search keyword" });
        }

        Ok(Keyword {
            folded: raw.to_lowercase(),
        })
    }

    pub fn matches(&self, line: &str) -> bool {
        line.to_lowercase().contains(&self.folded)
    }
}

/// Lines containing `keyword`, case-insensitively, in their original order.
pub fn filter<I, S>(lines: I, keyword: &Keyword) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| keyword.matches(line.as_ref()))
        .map(|line| line.as_ref().to_string())
        .collect()
}

/// Validate `keyword` and filter `lines` by it.
pub fn search<S: AsRef<str>>(lines: &[S], keyword: &str) -> NotesResult<Vec<String>> {
    let keyword = Keyword::parse(keyword)?;
    Ok(filter(lines, &keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_case_insensitive_match() {
        let lines = ["[t1] Buy milk", "[t2] Call mom"];
        assert_eq!(search(&lines, "BUY").unwrap(), vec!["[t1] Buy milk"]);
        assert_eq!(search(&lines, "mOm").unwrap(), vec!["[t2] Call mom"]);
    }

    #[test]
    fn test_preserves_order_and_returns_all_matches() {
        let lines = ["[t1] alpha", "[t2] beta", "[t3] Alphabet"];
        assert_eq!(search(&lines, "alpha").unwrap(), vec!["[t1] alpha", "[t3] Alphabet"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let lines = ["[t1] Buy milk"];
        assert!(search(&lines, "bread").unwrap().is_empty());
    }

    #[test]
    fn test_blank_keyword_is_rejected() {
        let lines = ["[t1] Buy milk"];
        assert!(matches!(search(&lines, ""), Err(NotesError::EmptyInput { .. })));
        assert!(matches!(search(&lines, "  "), Err(NotesError::EmptyInput { .. })));
    }

    #[test]
    fn test_keyword_whitespace_is_significant() {
        let lines = ["[t1] Buy milk", "[t2] buymilk"];
        assert_eq!(search(&lines, "buy ").unwrap(), vec!["[t1] Buy milk"]);
    }

    #[test]
    fn test_non_ascii_folding() {
        let keyword = Keyword::parse("ÉTÉ").unwrap();
        assert!(keyword.matches("[t1] Un été chaud"));
    }
}
