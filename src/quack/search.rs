//! Ranked catalog search for the browse/blocklist surfaces. Not part of
//! the redirect path.
//!
//! Scoring is deterministic: a case-insensitive positional substring
//! score per field, a large case-sensitive exact-match bonus, and the
//! tag weighted twice as heavily as the name. When neither field has a
//! substring hit, an in-order subsequence match contributes a low score
//! so near-misses still surface, always below any substring hit.

use crate::catalog::Catalog;
use crate::model::Bang;

const TAG_WEIGHT: i64 = 2;
const EXACT_BONUS: i64 = 1000;

/// Rank catalog entries against `term`. An empty term returns the whole
/// catalog in catalog order; otherwise entries with a positive score,
/// best first, catalog order as the tie-break.
pub fn search<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a Bang> {
    let term = term.trim();
    if term.is_empty() {
        return catalog.iter().collect();
    }

    let mut scored: Vec<(i64, usize, &Bang)> = catalog
        .iter()
        .enumerate()
        .filter_map(|(index, bang)| score(bang, term).map(|s| (s, index, bang)))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    scored.into_iter().map(|(_, _, bang)| bang).collect()
}

fn score(bang: &Bang, term: &str) -> Option<i64> {
    let tag_score = substring_score(term, &bang.tag) + exact_bonus(term, &bang.tag);
    let name_score = substring_score(term, &bang.name) + exact_bonus(term, &bang.name);
    let mut total = TAG_WEIGHT * tag_score + name_score;

    if total == 0 {
        total = TAG_WEIGHT * subsequence_score(term, &bang.tag)
            + subsequence_score(term, &bang.name);
    }

    (total > 0).then_some(total)
}

/// 100 for a match at the start of `text`, tapering to 1 the later the
/// match sits; 0 when `term` does not occur. Case-insensitive.
fn substring_score(term: &str, text: &str) -> i64 {
    let term = term.to_lowercase();
    let text = text.to_lowercase();
    match text.find(&term) {
        Some(0) => 100,
        Some(index) => (100 - index as i64).max(1),
        None => 0,
    }
}

fn exact_bonus(term: &str, text: &str) -> i64 {
    if text == term {
        EXACT_BONUS
    } else {
        0
    }
}

/// Low-band score when every character of `term` occurs in `text` in
/// order. Tight, early matches score best; the ceiling stays below the
/// weakest substring hit.
fn subsequence_score(term: &str, text: &str) -> i64 {
    let Some(positions) = subsequence_positions(&text.to_lowercase(), &term.to_lowercase()) else {
        return 0;
    };
    let start_penalty = positions[0] as i64;
    let gap_penalty: i64 = positions
        .windows(2)
        .map(|pair| pair[1].saturating_sub(pair[0] + 1) as i64)
        .sum();
    (50 - start_penalty - gap_penalty * 4).max(1)
}

fn subsequence_positions(haystack: &str, needle: &str) -> Option<Vec<usize>> {
    if needle.is_empty() {
        return None;
    }

    let mut positions = Vec::with_capacity(needle.len());
    let mut next_start = 0;

    for needle_char in needle.chars() {
        let mut found = None;
        for (offset, hay_char) in haystack[next_start..].char_indices() {
            if hay_char == needle_char {
                let absolute = next_start + offset;
                found = Some(absolute);
                next_start = absolute + hay_char.len_utf8();
                break;
            }
        }

        positions.push(found?);
    }

    Some(positions)
}
