use daf_reader::form::{init_adjacency, parse_page_count, read_request, sync_adjacency};
use daf_reader::models::Language;
use daf_reader::surface::{Element, MemorySurface, Surface};

#[test]
fn test_parse_page_count() {
    assert_eq!(parse_page_count("3"), 3);
    assert_eq!(parse_page_count("  12"), 12);
    assert_eq!(parse_page_count("+4"), 4);
    assert_eq!(parse_page_count("7pages"), 7);
    assert_eq!(parse_page_count("2.5"), 2);
    assert_eq!(parse_page_count(""), 0);
    assert_eq!(parse_page_count("abc"), 0);
    assert_eq!(parse_page_count("-2"), 0);
    assert_eq!(parse_page_count("99999999999"), u32::MAX);
}

#[test]
fn test_toggle_off_forces_zero_and_disables() {
    let surface = MemorySurface::new();
    surface.set_checked(Element::IncludeAdjacent, true);
    sync_adjacency(&surface);
    surface.set_value(Element::AdjacentPages, "4");

    surface.set_checked(Element::IncludeAdjacent, false);
    sync_adjacency(&surface);

    assert_eq!(surface.value(Element::AdjacentPages), "0");
    assert!(surface.is_disabled(Element::AdjacentPages));
}

#[test]
fn test_toggle_on_enables_and_resets_to_one() {
    let surface = MemorySurface::new();
    surface.set_value(Element::AdjacentPages, "9");
    surface.set_checked(Element::IncludeAdjacent, true);
    sync_adjacency(&surface);

    assert_eq!(surface.value(Element::AdjacentPages), "1");
    assert!(!surface.is_disabled(Element::AdjacentPages));
}

#[test]
fn test_init_follows_checkbox_without_touching_value() {
    let surface = MemorySurface::new();
    surface.set_value(Element::AdjacentPages, "2");
    init_adjacency(&surface);
    assert!(surface.is_disabled(Element::AdjacentPages));
    assert_eq!(surface.value(Element::AdjacentPages), "2");

    surface.set_checked(Element::IncludeAdjacent, true);
    init_adjacency(&surface);
    assert!(!surface.is_disabled(Element::AdjacentPages));
}

#[test]
fn test_read_request_matches_fields() {
    let surface = MemorySurface::new();
    surface.set_value(Element::Reference, "Shabbat.31a");
    surface.set_value(Element::Language, "english");
    surface.set_checked(Element::RemoveNikud, false);
    surface.set_checked(Element::SplitSentences, false);
    surface.set_checked(Element::IncludeAdjacent, true);
    surface.set_value(Element::AdjacentPages, "2");

    let request = read_request(&surface);
    assert_eq!(request.reference, "Shabbat.31a");
    assert_eq!(request.language, Language::English);
    assert!(!request.remove_nikud);
    assert!(request.standardize_terms);
    assert!(!request.split_sentences);
    assert!(request.include_adjacent);
    assert_eq!(request.adjacent_pages, 2);
}

#[test]
fn test_read_request_zeroes_count_when_toggle_off() {
    let surface = MemorySurface::new();
    surface.set_value(Element::AdjacentPages, "5");
    let request = read_request(&surface);
    assert!(!request.include_adjacent);
    assert_eq!(request.adjacent_pages, 0);
}
