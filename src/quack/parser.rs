//! Extracts the bang token and residual search text from a raw query.
//!
//! A bang may appear as a prefix (`!gh rust cli`) or a suffix
//! (`rust cli gh!`). The token is a whitespace-delimited word that starts
//! or ends with `!` and has at least one other character. When both forms
//! are present the prefix wins and only that token is removed.

/// Result of parsing one raw query. Derived fresh per resolution call,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    /// The bang tag, lowercased, without its `!`
    pub bang: Option<String>,
    /// The query with the bang token removed, trimmed
    pub terms: String,
}

impl ParsedQuery {
    pub fn parse(query: &str) -> Self {
        let query = query.trim();

        let words = word_spans(query);
        let prefix = words
            .iter()
            .find(|(start, end)| is_prefix_token(&query[*start..*end]));
        let suffix = words
            .iter()
            .find(|(start, end)| is_suffix_token(&query[*start..*end]));

        let Some(&(start, end)) = prefix.or(suffix) else {
            return Self {
                bang: None,
                terms: query.to_string(),
            };
        };

        let word = &query[start..end];
        let tag = if word.starts_with('!') {
            &word[1..]
        } else {
            &word[..word.len() - 1]
        };

        // Drop the token word plus one following whitespace separator
        let mut cut_end = end;
        if let Some(ch) = query[end..].chars().next() {
            if ch.is_whitespace() {
                cut_end += ch.len_utf8();
            }
        }
        let terms = format!("{}{}", &query[..start], &query[cut_end..])
            .trim()
            .to_string();

        Self {
            bang: Some(tag.to_lowercase()),
            terms,
        }
    }

    /// A query that was nothing but a bang token signals "take me to the
    /// site's root" rather than "search for the empty string".
    pub fn is_root_redirect(&self) -> bool {
        self.bang.is_some() && self.terms.is_empty()
    }
}

fn is_prefix_token(word: &str) -> bool {
    word.starts_with('!') && word.len() > 1
}

fn is_suffix_token(word: &str) -> bool {
    word.ends_with('!') && word.len() > 1
}

/// Byte ranges of the whitespace-delimited words in `s`.
fn word_spans(s: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, ch) in s.char_indices() {
        if ch.is_whitespace() {
            if let Some(word_start) = start.take() {
                spans.push((word_start, i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(word_start) = start {
        spans.push((word_start, s.len()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefix_bang() {
        let parsed = ParsedQuery::parse("!gh rust cli");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.terms, "rust cli");
    }

    #[test]
    fn parses_suffix_bang() {
        let parsed = ParsedQuery::parse("rust cli gh!");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.terms, "rust cli");
    }

    #[test]
    fn prefix_wins_over_suffix() {
        let parsed = ParsedQuery::parse("!gh something yt!");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.terms, "something yt!");
    }

    #[test]
    fn bang_mid_query_is_found() {
        let parsed = ParsedQuery::parse("rust !so borrow checker");
        assert_eq!(parsed.bang.as_deref(), Some("so"));
        assert_eq!(parsed.terms, "rust borrow checker");
    }

    #[test]
    fn no_bang_keeps_full_query() {
        let parsed = ParsedQuery::parse("meaning of life");
        assert_eq!(parsed.bang, None);
        assert_eq!(parsed.terms, "meaning of life");
        assert!(!parsed.is_root_redirect());
    }

    #[test]
    fn tag_is_lowercased() {
        let parsed = ParsedQuery::parse("!GH rust");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
    }

    #[test]
    fn bang_alone_is_root_redirect() {
        let parsed = ParsedQuery::parse("!gh");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.terms, "");
        assert!(parsed.is_root_redirect());
    }

    #[test]
    fn suffix_bang_alone_is_root_redirect() {
        let parsed = ParsedQuery::parse("gh!");
        assert!(parsed.is_root_redirect());
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
    }

    #[test]
    fn lone_exclamation_mark_is_not_a_token() {
        let parsed = ParsedQuery::parse("! gh");
        assert_eq!(parsed.bang, None);
        assert_eq!(parsed.terms, "! gh");
    }

    #[test]
    fn interior_whitespace_of_terms_is_preserved() {
        let parsed = ParsedQuery::parse("!gh foo  bar");
        assert_eq!(parsed.terms, "foo  bar");
    }

    #[test]
    fn input_is_trimmed() {
        let parsed = ParsedQuery::parse("   !gh rust   ");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.terms, "rust");
    }

    #[test]
    fn empty_input_parses_to_nothing() {
        let parsed = ParsedQuery::parse("");
        assert_eq!(parsed.bang, None);
        assert_eq!(parsed.terms, "");
        assert!(!parsed.is_root_redirect());
    }

    #[test]
    fn path_like_terms_survive() {
        let parsed = ParsedQuery::parse("!gh mandavkarpranjal/whataduck");
        assert_eq!(parsed.bang.as_deref(), Some("gh"));
        assert_eq!(parsed.terms, "mandavkarpranjal/whataduck");
    }
}
