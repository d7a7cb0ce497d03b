use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search;

pub fn run(catalog: &Catalog, term: &str, limit: usize) -> Result<CmdResult> {
    let ranked = search::search(catalog, term);
    let total = ranked.len();

    let listed: Vec<_> = if limit == 0 {
        ranked.into_iter().cloned().collect()
    } else {
        ranked.into_iter().take(limit).cloned().collect()
    };

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No results found."));
    } else if listed.len() < total {
        result.add_message(CmdMessage::info(format!(
            "Showing {} of {} matches",
            listed.len(),
            total
        )));
    }
    Ok(result.with_listed_bangs(listed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"[
                {"t":"g","s":"Google","d":"www.google.com","u":"https://www.google.com/search?q={{{s}}}"},
                {"t":"gh","s":"GitHub","d":"github.com","u":"https://github.com/search?q={{{s}}}"},
                {"t":"yt","s":"YouTube","d":"www.youtube.com","u":"https://www.youtube.com/results?search_query={{{s}}}"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn empty_term_lists_the_catalog() {
        let result = run(&catalog(), "", 0).unwrap();
        assert_eq!(result.listed_bangs.len(), 3);
        assert_eq!(result.listed_bangs[0].tag, "g");
    }

    #[test]
    fn limit_truncates_and_reports() {
        let result = run(&catalog(), "", 2).unwrap();
        assert_eq!(result.listed_bangs.len(), 2);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn no_matches_reports_instead_of_listing() {
        let result = run(&catalog(), "zzzz", 0).unwrap();
        assert!(result.listed_bangs.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
