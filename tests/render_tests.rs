use scraper::{Html, Selector};

use daf_reader::error::{ClientError, TransportError};
use daf_reader::models::{Page, SearchResponse, Section, SectionNumber};
use daf_reader::render::*;

mod test_helpers {
    use super::*;

    pub fn pages(json: &str) -> Vec<Page> {
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        response.content.unwrap_or_default()
    }

    pub fn count(html: &str, selector: &str) -> usize {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse(selector).unwrap();
        fragment.select(&selector).count()
    }

    pub fn texts(html: &str, selector: &str) -> Vec<String> {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse(selector).unwrap();
        fragment
            .select(&selector)
            .map(|e| e.text().collect::<String>().trim().to_string())
            .collect()
    }

    pub fn section(number: i64, hebrew: Option<&[&str]>, english: Option<&[&str]>) -> Section {
        let lines = |l: &[&str]| -> Vec<String> { l.iter().map(|s| s.to_string()).collect() };
        Section {
            number: Some(SectionNumber::Integer(number)),
            hebrew: hebrew.map(lines),
            english: english.map(lines),
        }
    }
}

use test_helpers::*;

#[test]
fn test_empty_content_renders_notice_only() {
    let rendered = render_results(Some(&[]));
    assert!(rendered.html.contains(NO_CONTENT_NOTICE));
    assert!(rendered.pages.is_empty());
    assert_eq!(count(&rendered.html, ".page-section"), 0);
    assert_eq!(count(&rendered.html, ".copy-section-btn"), 0);
}

#[test]
fn test_missing_content_renders_notice() {
    let rendered = render_results(None);
    assert!(rendered.html.contains(NO_CONTENT_NOTICE));
    assert!(rendered.pages.is_empty());
}

#[test]
fn test_single_page_single_section() {
    let content = pages(
        r#"{"success":true,"content":[{"title":"Page 1","sections":[{"number":1,"hebrew":["א"],"english":["A"]}]}]}"#,
    );
    let rendered = render_results(Some(&content));
    let html = &rendered.html;

    assert_eq!(rendered.pages, vec![PageId::new(0)]);
    assert_eq!(texts(html, ".page-section h4"), vec!["Page 1"]);
    assert_eq!(texts(html, ".text-section h5"), vec!["Section 1"]);
    assert_eq!(texts(html, ".hebrew-text p"), vec!["א"]);
    assert_eq!(texts(html, ".english-text p"), vec!["A"]);
    assert_eq!(count(html, ".copy-section-btn"), 1);
}

#[test]
fn test_page_ids_follow_position() {
    let content = vec![
        Page {
            title: "First".to_string(),
            sections: Some(vec![section(1, Some(&["א"]), None)]),
        },
        Page {
            title: "Second".to_string(),
            sections: Some(vec![section(1, None, Some(&["B"]))]),
        },
    ];
    let rendered = render_results(Some(&content));
    let html = &rendered.html;

    assert_eq!(rendered.pages, vec![PageId::new(0), PageId::new(1)]);
    assert_eq!(count(html, "#page-0"), 1);
    assert_eq!(count(html, "#page-1"), 1);
    assert_eq!(count(html, r#"#copy-page-0[data-section-id="page-0"]"#), 1);
    assert_eq!(count(html, r#"#copy-page-1[data-section-id="page-1"]"#), 1);
    assert_eq!(texts(html, ".section-title"), vec!["First", "Second"]);
    assert_eq!(texts(html, "#page-1 .english-text p"), vec!["B"]);
}

#[test]
fn test_rendering_is_deterministic() {
    let content = vec![Page {
        title: "Same".to_string(),
        sections: Some(vec![section(3, Some(&["ג"]), Some(&["C"]))]),
    }];
    assert_eq!(render_results(Some(&content)), render_results(Some(&content)));
}

#[test]
fn test_page_without_sections_keeps_title_and_copy_control() {
    for sections in [None, Some(Vec::new())] {
        let content = vec![Page {
            title: "Lonely".to_string(),
            sections,
        }];
        let rendered = render_results(Some(&content));
        let html = &rendered.html;

        assert_eq!(texts(html, ".section-title"), vec!["Lonely"]);
        assert_eq!(count(html, ".copy-section-btn"), 1);
        assert_eq!(texts(html, "#page-0 .alert-info"), vec![NO_SECTIONS_NOTICE]);
        assert_eq!(count(html, ".text-section"), 0);
    }
}

#[test]
fn test_section_without_languages_renders_heading_only() {
    let content = vec![Page {
        title: "Bare".to_string(),
        sections: Some(vec![
            section(1, None, None),
            section(2, Some(&[]), Some(&[])),
        ]),
    }];
    let html = render_results(Some(&content)).html;

    assert_eq!(texts(&html, ".text-section h5"), vec!["Section 1", "Section 2"]);
    assert_eq!(count(&html, ".hebrew-text"), 0);
    assert_eq!(count(&html, ".english-text"), 0);
}

#[test]
fn test_lines_render_in_order_as_separate_blocks() {
    let content = vec![Page {
        title: "Lines".to_string(),
        sections: Some(vec![section(
            1,
            Some(&["אחד", "שתיים", "שלוש"]),
            Some(&["one.", "two?", "three:"]),
        )]),
    }];
    let html = render_results(Some(&content)).html;

    assert_eq!(texts(&html, ".hebrew-text p"), vec!["אחד", "שתיים", "שלוש"]);
    assert_eq!(texts(&html, ".english-text p"), vec!["one.", "two?", "three:"]);
}

#[test]
fn test_text_section_number_displayed_as_written() {
    let content = vec![Page {
        title: "Daf".to_string(),
        sections: Some(vec![Section {
            number: Some(SectionNumber::Text("2b".to_string())),
            hebrew: None,
            english: None,
        }]),
    }];
    let html = render_results(Some(&content)).html;
    assert_eq!(texts(&html, ".text-section h5"), vec!["Section 2b"]);
}

#[test]
fn test_server_text_is_escaped() {
    let content = vec![Page {
        title: "<script>alert(1)</script>".to_string(),
        sections: Some(vec![section(1, None, Some(&["a < b & \"c\""]))]),
    }];
    let html = render_results(Some(&content)).html;

    assert_eq!(count(&html, "script"), 0);
    assert_eq!(texts(&html, ".section-title"), vec!["<script>alert(1)</script>"]);
    assert_eq!(texts(&html, ".english-text p"), vec!["a < b & \"c\""]);
}

#[test]
fn test_section_without_number_renders_next_to_numbered_one() {
    let content = pages(
        r#"{"success":true,"content":[{"title":"Daf","sections":[
            {"number":1,"english":["first"]},
            {"english":["second"]},
            {"number":2.5,"hebrew":["ג"]}
        ]}]}"#,
    );
    let rendered = render_results(Some(&content));
    let html = &rendered.html;

    assert_eq!(rendered.pages, vec![PageId::new(0)]);
    assert_eq!(
        texts(html, ".text-section h5"),
        vec!["Section 1", "Section", "Section 2.5"]
    );
    assert_eq!(texts(html, ".english-text p"), vec!["first", "second"]);
    assert_eq!(texts(html, ".hebrew-text p"), vec!["ג"]);
}

#[test]
fn test_failure_message_is_escaped() {
    let html = render_failure(&ClientError::Application(Some("<b>bad</b> & worse".to_string())));
    assert_eq!(count(&html, "b"), 0);
    assert_eq!(texts(&html, ".alert-danger"), vec!["Error: <b>bad</b> & worse"]);
}

#[test]
fn test_loading_placeholder() {
    let html = render_loading();
    assert_eq!(count(&html, ".spinner-border"), 1);
    assert!(html.contains("Loading"));
}

#[test]
fn test_failure_application_message() {
    let html = render_failure(&ClientError::Application(Some("Not found".to_string())));
    assert_eq!(texts(&html, ".alert-danger"), vec!["Error: Not found"]);
}

#[test]
fn test_failure_application_fallback() {
    let html = render_failure(&ClientError::Application(None));
    assert!(html.contains(daf_reader::error::FALLBACK_FAILURE_MESSAGE));
    assert!(!html.contains(CONNECTIVITY_NOTICE));
}

#[test]
fn test_failure_status_without_message() {
    let html = render_failure(&ClientError::Status {
        status: 502,
        message: None,
    });
    assert!(html.contains("Server responded with status: 502"));
    assert!(!html.contains(CONNECTIVITY_NOTICE));
}

#[test]
fn test_failure_transport_includes_cause() {
    let error = ClientError::from(TransportError::Request("connection refused".to_string()));
    let html = render_failure(&error);
    assert!(html.contains(CONNECTIVITY_NOTICE));
    assert_eq!(texts(&html, ".alert-danger small"), vec!["connection refused"]);
}

#[test]
fn test_copy_control_id_round_trip() {
    let id = PageId::new(7);
    assert_eq!(id.container_id(), "page-7");
    assert_eq!(PageId::from_copy_control_id(&id.copy_control_id()), Some(id));
    assert_eq!(PageId::from_copy_control_id("copy-all"), None);
}
