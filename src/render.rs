use askama::Template;

use crate::error::ClientError;
use crate::models::{Page, Section, SectionNumber};

pub const NO_CONTENT_NOTICE: &str = "No content found for the specified reference.";
pub const NO_SECTIONS_NOTICE: &str = "No sections found for this page.";
pub const CONNECTIVITY_NOTICE: &str = "Failed to connect to the API. Please try again later.";
pub const COPY_PAGE_LABEL: &str = "Copy Page";
pub const COPY_CONTROL_CLASS: &str = "copy-section-btn";

const RENDER_FAILED: &str = r#"<div class="alert alert-danger">Error: could not display the response.</div>"#;

/// Position of a page in the rendered content. Both the page container and
/// its copy control derive their DOM ids from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(usize);

impl PageId {
    pub fn new(index: usize) -> PageId {
        PageId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn container_id(self) -> String {
        format!("page-{}", self.0)
    }

    pub fn copy_control_id(self) -> String {
        format!("copy-page-{}", self.0)
    }

    pub fn from_copy_control_id(id: &str) -> Option<PageId> {
        id.strip_prefix("copy-page-")?.parse().ok().map(PageId)
    }
}

/// Markup for the results area plus the pages that got a copy control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub pages: Vec<PageId>,
}

#[derive(Template)]
#[template(
    source = r#"<div class="spinner-container">
  <div class="spinner-border text-primary" role="status"><span class="visually-hidden">Loading...</span></div>
  <span class="ms-2">Loading text...</span>
</div>"#,
    ext = "html"
)]
struct LoadingTemplate;

#[derive(Template)]
#[template(
    source = r#"{% if pages.is_empty() %}<div class="alert alert-warning">{{ no_content }}</div>{% endif %}
{%- for page in pages %}
<div class="page-section mb-4">
  <h4 class="section-title">{{ page.title }}</h4>
  <div class="d-flex justify-content-end mb-2">
    <button type="button" id="{{ page.copy_control_id }}" class="btn btn-sm btn-outline-secondary {{ copy_class }}" data-section-id="{{ page.container_id }}">{{ copy_label }}</button>
  </div>
  <div id="{{ page.container_id }}">
    {%- if page.sections.is_empty() %}
    <div class="alert alert-info">{{ no_sections }}</div>
    {%- endif %}
    {%- for section in page.sections %}
    <div class="text-section">
      <h5>{{ section.heading }}</h5>
      {%- if !section.hebrew.is_empty() %}
      <div class="hebrew-text" dir="rtl">
        {%- for line in section.hebrew %}
        <p>{{ line }}</p>
        {%- endfor %}
      </div>
      {%- endif %}
      {%- if !section.english.is_empty() %}
      <div class="english-text">
        {%- for line in section.english %}
        <p>{{ line }}</p>
        {%- endfor %}
      </div>
      {%- endif %}
    </div>
    {%- endfor %}
  </div>
</div>
{%- endfor %}"#,
    ext = "html"
)]
struct ResultsTemplate<'a> {
    pages: Vec<PageView<'a>>,
    no_content: &'static str,
    no_sections: &'static str,
    copy_label: &'static str,
    copy_class: &'static str,
}

struct PageView<'a> {
    title: &'a str,
    copy_control_id: String,
    container_id: String,
    sections: Vec<SectionView<'a>>,
}

struct SectionView<'a> {
    heading: String,
    hebrew: &'a [String],
    english: &'a [String],
}

impl<'a> PageView<'a> {
    fn new(id: PageId, page: &'a Page) -> PageView<'a> {
        PageView {
            title: &page.title,
            copy_control_id: id.copy_control_id(),
            container_id: id.container_id(),
            sections: page
                .sections
                .iter()
                .flatten()
                .map(SectionView::new)
                .collect(),
        }
    }
}

impl<'a> SectionView<'a> {
    fn new(section: &'a Section) -> SectionView<'a> {
        SectionView {
            heading: heading(section.number.as_ref()),
            hebrew: section.hebrew.as_deref().unwrap_or_default(),
            english: section.english.as_deref().unwrap_or_default(),
        }
    }
}

fn heading(number: Option<&SectionNumber>) -> String {
    match number {
        Some(number) => format!("Section {number}"),
        None => "Section".to_string(),
    }
}

#[derive(Template)]
#[template(
    source = r#"<div class="alert alert-danger">Error: {% match cause %}{% when Some with (cause) %}{{ notice }}<br><small>{{ cause }}</small>{% when None %}{{ notice }}{% endmatch %}</div>"#,
    ext = "html"
)]
struct FailureTemplate {
    notice: String,
    cause: Option<String>,
}

fn render_template(template: &impl Template) -> String {
    template.render().unwrap_or_else(|e| {
        log::error!("failed to render template: {e}");
        RENDER_FAILED.to_string()
    })
}

pub fn render_loading() -> String {
    render_template(&LoadingTemplate)
}

pub fn render_results(content: Option<&[Page]>) -> Rendered {
    let pages = content.unwrap_or_default();
    let ids: Vec<PageId> = (0..pages.len()).map(PageId).collect();
    let template = ResultsTemplate {
        pages: ids
            .iter()
            .zip(pages)
            .map(|(&id, page)| PageView::new(id, page))
            .collect(),
        no_content: NO_CONTENT_NOTICE,
        no_sections: NO_SECTIONS_NOTICE,
        copy_label: COPY_PAGE_LABEL,
        copy_class: COPY_CONTROL_CLASS,
    };

    match template.render() {
        Ok(html) => Rendered { html, pages: ids },
        Err(e) => {
            log::error!("failed to render results: {e}");
            Rendered {
                html: RENDER_FAILED.to_string(),
                pages: Vec::new(),
            }
        }
    }
}

/// Markup for a failed submit cycle.
pub fn render_failure(error: &ClientError) -> String {
    let template = if error.is_connectivity() {
        FailureTemplate {
            notice: CONNECTIVITY_NOTICE.to_string(),
            cause: Some(error.to_string()),
        }
    } else {
        FailureTemplate {
            notice: error.failure_message(),
            cause: None,
        }
    };
    render_template(&template)
}
