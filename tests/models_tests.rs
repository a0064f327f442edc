use daf_reader::models::*;

#[test]
fn test_request_uses_wire_field_names() {
    let request = SearchRequest {
        reference: "Genesis 1:1".to_string(),
        language: Language::Hebrew,
        remove_nikud: true,
        standardize_terms: false,
        split_sentences: true,
        include_adjacent: false,
        adjacent_pages: 0,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["reference"], "Genesis 1:1");
    assert_eq!(value["language"], "hebrew");
    assert_eq!(value["remove_nikud"], true);
    assert_eq!(value["standardize_terms"], false);
    assert_eq!(value["split_sentences"], true);
    assert_eq!(value["include_adjacent"], false);
    assert_eq!(value["adjacent_pages"], 0);
    assert_eq!(value.as_object().unwrap().len(), 7);
}

#[test]
fn test_known_languages() {
    for name in ["hebrew", "english", "bilingual", "all"] {
        let language = Language::from(name);
        assert!(!matches!(language, Language::Other(_)), "{name} should be known");
        assert_eq!(language.as_str(), name);
    }
}

#[test]
fn test_unknown_language_passes_through() {
    let language: Language = serde_json::from_str("\"aramaic\"").unwrap();
    assert_eq!(language, Language::Other("aramaic".to_string()));
    assert_eq!(serde_json::to_string(&language).unwrap(), "\"aramaic\"");
}

#[test]
fn test_response_with_extra_and_missing_fields() {
    let body = r#"{
        "success": true,
        "message": "",
        "content": [
            {"title": "Previous Page (Berakhot.2a)", "reference": "Berakhot.2a",
             "sections": [{"number": 1, "hebrew": ["א"]}, {"number": "2b"}]},
            {"title": "Empty"}
        ]
    }"#;
    let response: SearchResponse = serde_json::from_str(body).unwrap();
    assert!(response.success);
    assert_eq!(response.message(), None);

    let content = response.content.unwrap();
    assert_eq!(content.len(), 2);
    let sections = content[0].sections.as_ref().unwrap();
    assert_eq!(sections[0].number, Some(SectionNumber::Integer(1)));
    assert_eq!(sections[1].number, Some(SectionNumber::Text("2b".to_string())));
    assert!(sections[1].english.is_none());
    assert!(content[1].sections.is_none());
}

#[test]
fn test_odd_section_numbers_keep_the_response() {
    let body = r#"{"success": true, "content": [{"title": "Page", "sections": [
        {"number": 1, "english": ["first"]},
        {"english": ["no number"]},
        {"number": null, "english": ["null number"]},
        {"number": 2.5},
        {"number": true}
    ]}]}"#;
    let response: SearchResponse = serde_json::from_str(body).unwrap();
    let content = response.content.unwrap();
    let sections = content[0].sections.as_ref().unwrap();

    assert_eq!(sections.len(), 5);
    assert_eq!(sections[0].number, Some(SectionNumber::Integer(1)));
    assert_eq!(sections[1].number, None);
    assert_eq!(sections[1].english.as_deref(), Some(&["no number".to_string()][..]));
    assert_eq!(sections[2].number, None);
    assert_eq!(sections[3].number.as_ref().unwrap().to_string(), "2.5");
    assert_eq!(sections[4].number.as_ref().unwrap().to_string(), "true");
}

#[test]
fn test_section_without_number_serializes_without_field() {
    let section = Section {
        number: None,
        hebrew: None,
        english: Some(vec!["a".to_string()]),
    };
    let value = serde_json::to_value(&section).unwrap();
    assert!(value.get("number").is_none());
}

#[test]
fn test_failure_without_success_flag() {
    let response: SearchResponse = serde_json::from_str(r#"{"message": "Not found"}"#).unwrap();
    assert!(!response.success);
    assert_eq!(response.message(), Some("Not found"));
    assert!(response.content.is_none());
}

#[test]
fn test_failure_constructor_serializes_without_content() {
    let value = serde_json::to_value(SearchResponse::failure("nope")).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["message"], "nope");
    assert!(value.get("content").is_none());
}
