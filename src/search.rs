//! Searches people across generations and rebuilds a filtered dataset.
//!
//! Matching is a fixed-precedence scan over a person's fields (name, id,
//! info, year) under a set of filters. Results are ranked by match type
//! and carry an optional snippet for display highlighting.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use crate::model::{FamilyData, Generation, Person};

/// Characters of context kept on each side of an info-field snippet.
const SNIPPET_CONTEXT: usize = 20;

/// Which field produced a match. Declaration order is ranking priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchType {
    Name,
    Id,
    Year,
    Info,
}

/// A matched person, stamped with the title of the generation it was
/// found in. The person is borrowed from the dataset, not duplicated.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    pub person: &'a Person,
    pub generation: &'a str,
    pub match_type: MatchType,
    pub match_text: Option<String>,
}

/// Inclusive year bounds; an unset side is unconstrained.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct YearRange {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl YearRange {
    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    fn contains(&self, year: Option<i32>) -> bool {
        let Some(year) = year else { return false };
        if self.start.is_some_and(|start| year < start) {
            return false;
        }
        if self.end.is_some_and(|end| year > end) {
            return false;
        }
        true
    }
}

/// Search configuration as submitted by a caller (typically the UI's
/// filter panel, hence the camelCase wire names).
///
/// The search term is passed to [`search_family_data`] explicitly; the
/// `search_term` field here is carried for deserialization of the filter
/// object but is not consulted during matching.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub search_term: String,
    pub search_in_info: bool,
    pub selected_generations: Vec<String>,
    pub year_range: YearRange,
}

// Case-insensitive substring containment, relaxed for multi-word terms:
// every whitespace-separated word must appear somewhere in the text.
fn fuzzy_match(text: &str, term: &str) -> bool {
    if text.is_empty() || term.is_empty() {
        return false;
    }
    let text = text.to_lowercase();
    let term = term.to_lowercase();
    if text.contains(&term) {
        return true;
    }
    term.split_whitespace().all(|word| text.contains(word))
}

// A case-insensitive literal pattern for the term. Escaping keeps regex
// metacharacters in the term from altering match semantics.
fn literal_pattern(term: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .ok()
}

// Cut a display snippet around the first occurrence of the term, with up
// to SNIPPET_CONTEXT characters on each side and ellipses marking
// truncated sides.
fn info_snippet(info: &str, term: &str) -> String {
    let Some(found) = literal_pattern(term).and_then(|re| re.find(info).map(|m| m.range()))
    else {
        return info.to_string();
    };
    let start = info[..found.start]
        .char_indices()
        .rev()
        .nth(SNIPPET_CONTEXT - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let end = info[found.end..]
        .char_indices()
        .nth(SNIPPET_CONTEXT)
        .map(|(i, _)| found.end + i)
        .unwrap_or(info.len());

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.push_str(&info[start..end]);
    if end < info.len() {
        snippet.push_str("...");
    }
    snippet
}

// Evaluate one person against the term and filters, returning the first
// applicable match. The year range is a hard gate when active; with no
// term and no year filter everyone matches by name.
fn matches_person<'a>(
    person: &'a Person,
    term: &str,
    filters: &SearchFilters,
) -> Option<SearchResult<'a>> {
    let range = &filters.year_range;
    if range.is_active() {
        let birth = range.contains(person.birth_year);
        let death = range.contains(person.death_year);
        if !birth && !death {
            return None;
        }
        if term.is_empty() {
            let span = format!(
                "{}-{}",
                person.birth_year.map(|y| y.to_string()).unwrap_or_default(),
                person.death_year.map(|y| y.to_string()).unwrap_or_default()
            );
            return Some(result(person, MatchType::Year, Some(span)));
        }
    }

    if term.is_empty() {
        return Some(result(person, MatchType::Name, None));
    }

    if fuzzy_match(&person.name, term) {
        return Some(result(person, MatchType::Name, Some(person.name.clone())));
    }

    if let Some(id) = &person.id {
        if id.to_lowercase().contains(&term.to_lowercase()) {
            return Some(result(person, MatchType::Id, Some(id.clone())));
        }
    }

    if filters.search_in_info {
        if let Some(info) = &person.info {
            if fuzzy_match(info, term) {
                return Some(result(person, MatchType::Info, Some(info_snippet(info, term))));
            }
        }
    }

    // Supports typing a year prefix into the free-text box.
    for year in [person.birth_year, person.death_year].into_iter().flatten() {
        let text = year.to_string();
        if text.contains(term) {
            return Some(result(person, MatchType::Year, Some(text)));
        }
    }

    None
}

fn result<'a>(person: &'a Person, match_type: MatchType, match_text: Option<String>) -> SearchResult<'a> {
    SearchResult {
        person,
        generation: "",
        match_type,
        match_text,
    }
}

/// Scan all people in the dataset against the term and filters, returning
/// matches ranked by [`MatchType`] priority with name order as tie-break.
///
/// An empty dataset yields an empty list, not an error. Generations whose
/// title is absent from a non-empty `selected_generations` are skipped
/// entirely.
pub fn search_family_data<'a>(
    data: &'a FamilyData,
    term: &str,
    filters: &SearchFilters,
) -> Vec<SearchResult<'a>> {
    let mut results = Vec::new();
    for generation in &data.generations {
        if !filters.selected_generations.is_empty()
            && !filters.selected_generations.iter().any(|t| t == &generation.title)
        {
            continue;
        }
        for person in &generation.people {
            if let Some(mut found) = matches_person(person, term, filters) {
                found.generation = &generation.title;
                results.push(found);
            }
        }
    }
    // Stable sort keeps scan order among equal-ranked, equal-named results.
    results.sort_by(|a, b| {
        a.match_type
            .cmp(&b.match_type)
            .then_with(|| a.person.name.cmp(&b.person.name))
    });
    results
}

/// Rebuild a generation list containing only the matched people, grouped
/// by the generation title stamped on each result.
///
/// An empty result set yields an empty generation list, so "no matches"
/// renders as nothing rather than as the unfiltered dataset. Generations
/// are re-emitted in original dataset order; within a generation people
/// appear in result (rank) order. Duplicate original titles collapse into
/// one group since the title alone is the grouping key.
pub fn create_filtered_family_data(data: &FamilyData, results: &[SearchResult]) -> FamilyData {
    if results.is_empty() {
        return FamilyData::default();
    }

    let mut grouped: HashMap<&str, Vec<Person>> = HashMap::new();
    for found in results {
        grouped
            .entry(found.generation)
            .or_default()
            .push(found.person.clone());
    }

    let generations = data
        .generations
        .iter()
        .filter_map(|generation| {
            grouped.remove(generation.title.as_str()).map(|people| Generation {
                title: generation.title.clone(),
                people,
            })
        })
        .collect();

    FamilyData { generations }
}

/// Wrap every case-insensitive occurrence of the term in `<mark>` markup.
///
/// This produces markup for a trusted rendering surface; it does not
/// sanitize the surrounding text. Empty text or term returns the text
/// unchanged.
pub fn highlight_match(text: &str, term: &str) -> String {
    if text.is_empty() || term.is_empty() {
        return text.to_string();
    }
    let Some(pattern) = literal_pattern(term) else {
        return text.to_string();
    };
    pattern
        .replace_all(text, "<mark class=\"bg-yellow-200 px-1 rounded\">$0</mark>")
        .into_owned()
}
