use crate::models::{Language, SearchRequest};
use crate::surface::{Element, Surface};

/// Count the adjacency field is reset to when the toggle is switched on.
pub const DEFAULT_ADJACENT_PAGES: u32 = 1;

/// Initial state on load: the count field follows the toggle.
pub fn init_adjacency<S: Surface>(surface: &S) {
    let enabled = surface.is_checked(Element::IncludeAdjacent);
    surface.set_disabled(Element::AdjacentPages, !enabled);
}

/// Change handler for the "include adjacent pages" toggle.
pub fn sync_adjacency<S: Surface>(surface: &S) {
    let enabled = surface.is_checked(Element::IncludeAdjacent);
    surface.set_disabled(Element::AdjacentPages, !enabled);
    let count = if enabled { DEFAULT_ADJACENT_PAGES } else { 0 };
    surface.set_value(Element::AdjacentPages, &count.to_string());
}

pub fn read_request<S: Surface>(surface: &S) -> SearchRequest {
    let include_adjacent = surface.is_checked(Element::IncludeAdjacent);
    let adjacent_pages = if include_adjacent {
        parse_page_count(&surface.value(Element::AdjacentPages))
    } else {
        0
    };

    SearchRequest {
        reference: surface.value(Element::Reference),
        language: Language::from(surface.value(Element::Language).as_str()),
        remove_nikud: surface.is_checked(Element::RemoveNikud),
        standardize_terms: surface.is_checked(Element::StandardizeTerms),
        split_sentences: surface.is_checked(Element::SplitSentences),
        include_adjacent,
        adjacent_pages,
    }
}

/// Reads a count the way `parseInt(value, 10)` does, using the leading
/// digits only. Anything without leading digits, or negative, is 0.
pub fn parse_page_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if unsigned.starts_with('-') {
        return 0;
    }
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(if digits.is_empty() { 0 } else { u32::MAX })
}
