use kindred::search::highlight_match;

const OPEN: &str = "<mark class=\"bg-yellow-200 px-1 rounded\">";

#[test]
fn wraps_every_occurrence_case_insensitively() {
    let marked = highlight_match("Anna and ANNA-Lisa", "anna");
    assert_eq!(
        marked,
        format!("{OPEN}Anna</mark> and {OPEN}ANNA</mark>-Lisa")
    );
}

#[test]
fn keeps_original_casing_in_the_markup() {
    let marked = highlight_match("Hannah", "HANNAH");
    assert_eq!(marked, format!("{OPEN}Hannah</mark>"));
}

#[test]
fn escapes_regex_metacharacters_in_the_term() {
    // "a.b" must match only the literal text, not "axb".
    assert_eq!(highlight_match("axb", "a.b"), "axb");
    let marked = highlight_match("a.b", "a.b");
    assert_eq!(marked, format!("{OPEN}a.b</mark>"));
}

#[test]
fn empty_text_or_term_passes_through_unchanged() {
    assert_eq!(highlight_match("", "anna"), "");
    assert_eq!(highlight_match("Anna", ""), "Anna");
}
