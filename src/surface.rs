use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::models::SearchRequest;
use crate::render::{COPY_CONTROL_CLASS, PageId};
use crate::text;

pub const HIDDEN_CLASS: &str = "d-none";

/// Elements the pipeline touches. The static ones come from the page markup,
/// the page-scoped ones exist only after a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Form,
    Reference,
    Language,
    RemoveNikud,
    StandardizeTerms,
    SplitSentences,
    IncludeAdjacent,
    AdjacentPages,
    SubmitButton,
    SubmitSpinner,
    ResultsContainer,
    ResultsContent,
    CopyAllButton,
    PageCopyButton(PageId),
    PageBody(PageId),
}

impl Element {
    /// Elements the surrounding page markup must provide.
    pub const REQUIRED: [Element; 13] = [
        Element::Form,
        Element::Reference,
        Element::Language,
        Element::RemoveNikud,
        Element::StandardizeTerms,
        Element::SplitSentences,
        Element::IncludeAdjacent,
        Element::AdjacentPages,
        Element::SubmitButton,
        Element::SubmitSpinner,
        Element::ResultsContainer,
        Element::ResultsContent,
        Element::CopyAllButton,
    ];

    pub fn dom_id(&self) -> Cow<'static, str> {
        match self {
            Element::Form => "searchForm".into(),
            Element::Reference => "reference".into(),
            Element::Language => "language".into(),
            Element::RemoveNikud => "removeNikud".into(),
            Element::StandardizeTerms => "standardizeTerms".into(),
            Element::SplitSentences => "splitSentences".into(),
            Element::IncludeAdjacent => "includeAdjacent".into(),
            Element::AdjacentPages => "adjacentPages".into(),
            Element::SubmitButton => "submitBtn".into(),
            Element::SubmitSpinner => "submitSpinner".into(),
            Element::ResultsContainer => "resultsContainer".into(),
            Element::ResultsContent => "resultsContent".into(),
            Element::CopyAllButton => "copyAllBtn".into(),
            Element::PageCopyButton(id) => id.copy_control_id().into(),
            Element::PageBody(id) => id.container_id().into(),
        }
    }
}

/// The rendering surface the controller drives. Lookups of elements that do
/// not exist read as empty and writes to them are dropped.
pub trait Surface {
    fn value(&self, element: Element) -> String;
    fn set_value(&self, element: Element, value: &str);
    fn is_checked(&self, element: Element) -> bool;
    fn is_disabled(&self, element: Element) -> bool;
    fn set_disabled(&self, element: Element, disabled: bool);
    fn has_class(&self, element: Element, class: &str) -> bool;
    fn add_class(&self, element: Element, class: &str);
    fn remove_class(&self, element: Element, class: &str);
    fn text_content(&self, element: Element) -> String;
    fn set_text_content(&self, element: Element, text: &str);
    fn set_inner_html(&self, element: Element, html: &str);
    /// Visible text, `None` when the element is not on the surface.
    fn inner_text(&self, element: Element) -> Option<String>;
    /// Blocking user notification.
    fn alert(&self, message: &str);

    fn set_hidden(&self, element: Element, hidden: bool) {
        if hidden {
            self.add_class(element, HIDDEN_CLASS);
        } else {
            self.remove_class(element, HIDDEN_CLASS);
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    value: String,
    checked: bool,
    disabled: bool,
    classes: BTreeSet<String>,
    text: String,
    inner_html: Option<String>,
}

impl Node {
    fn with_classes(classes: &[&str]) -> Node {
        Node {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Node::default()
        }
    }
}

#[derive(Debug, Default)]
struct MemoryDom {
    nodes: HashMap<Element, Node>,
    alerts: Vec<String>,
}

/// In-memory surface with the same element set as `static/index.html`.
/// Used by the headless `fetch` command and in tests.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    dom: Rc<RefCell<MemoryDom>>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        MemorySurface::new()
    }
}

impl MemorySurface {
    pub fn new() -> MemorySurface {
        let mut nodes = HashMap::new();
        nodes.insert(Element::Form, Node::default());
        nodes.insert(Element::Reference, Node::default());
        nodes.insert(
            Element::Language,
            Node {
                value: "bilingual".to_string(),
                ..Node::default()
            },
        );
        for toggle in [
            Element::RemoveNikud,
            Element::StandardizeTerms,
            Element::SplitSentences,
        ] {
            nodes.insert(
                toggle,
                Node {
                    checked: true,
                    ..Node::default()
                },
            );
        }
        nodes.insert(Element::IncludeAdjacent, Node::default());
        nodes.insert(
            Element::AdjacentPages,
            Node {
                value: "0".to_string(),
                ..Node::default()
            },
        );
        nodes.insert(
            Element::SubmitButton,
            Node {
                text: "Get Text".to_string(),
                ..Node::with_classes(&["btn", "btn-primary"])
            },
        );
        nodes.insert(
            Element::SubmitSpinner,
            Node::with_classes(&["spinner-border", "spinner-border-sm", HIDDEN_CLASS]),
        );
        nodes.insert(
            Element::ResultsContainer,
            Node::with_classes(&["card", HIDDEN_CLASS]),
        );
        nodes.insert(
            Element::ResultsContent,
            Node {
                inner_html: Some(String::new()),
                ..Node::default()
            },
        );
        nodes.insert(
            Element::CopyAllButton,
            Node {
                text: "Copy All".to_string(),
                ..Node::with_classes(&["btn", "btn-sm", "btn-outline-secondary"])
            },
        );

        MemorySurface {
            dom: Rc::new(RefCell::new(MemoryDom {
                nodes,
                alerts: Vec::new(),
            })),
        }
    }

    /// Sets a checkbox the way a user click would. Change handlers are not run.
    pub fn set_checked(&self, element: Element, checked: bool) {
        if let Some(node) = self.dom.borrow_mut().nodes.get_mut(&element) {
            node.checked = checked;
        }
    }

    /// Fills the form fields from a request, as if a user had typed it in.
    pub fn fill(&self, request: &SearchRequest) {
        self.set_value(Element::Reference, &request.reference);
        self.set_value(Element::Language, request.language.as_str());
        self.set_checked(Element::RemoveNikud, request.remove_nikud);
        self.set_checked(Element::StandardizeTerms, request.standardize_terms);
        self.set_checked(Element::SplitSentences, request.split_sentences);
        self.set_checked(Element::IncludeAdjacent, request.include_adjacent);
        self.set_disabled(Element::AdjacentPages, !request.include_adjacent);
        self.set_value(Element::AdjacentPages, &request.adjacent_pages.to_string());
    }

    pub fn inner_html(&self, element: Element) -> Option<String> {
        self.dom
            .borrow()
            .nodes
            .get(&element)
            .and_then(|node| node.inner_html.clone())
    }

    pub fn alerts(&self) -> Vec<String> {
        self.dom.borrow().alerts.clone()
    }

    fn with_node<R>(&self, element: Element, read: impl FnOnce(&Node) -> R) -> Option<R> {
        self.dom.borrow().nodes.get(&element).map(read)
    }

    fn update(&self, element: Element, write: impl FnOnce(&mut Node)) {
        match self.dom.borrow_mut().nodes.get_mut(&element) {
            Some(node) => write(node),
            None => log::debug!("ignoring write to missing element #{}", element.dom_id()),
        }
    }

    fn results_html(&self) -> String {
        self.inner_html(Element::ResultsContent).unwrap_or_default()
    }

    /// Re-registers the page copy controls present in freshly rendered results.
    fn register_page_controls(dom: &mut MemoryDom, html: &str) {
        dom.nodes
            .retain(|element, _| !matches!(element, Element::PageCopyButton(_)));

        for button in text::elements_with_class(html, COPY_CONTROL_CLASS) {
            let Some(id) = button.id.as_deref().and_then(PageId::from_copy_control_id) else {
                continue;
            };
            let node = Node {
                text: button.text,
                classes: button.classes.into_iter().collect(),
                ..Node::default()
            };
            dom.nodes.insert(Element::PageCopyButton(id), node);
        }
    }
}

impl Surface for MemorySurface {
    fn value(&self, element: Element) -> String {
        self.with_node(element, |n| n.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&self, element: Element, value: &str) {
        self.update(element, |n| n.value = value.to_string());
    }

    fn is_checked(&self, element: Element) -> bool {
        self.with_node(element, |n| n.checked).unwrap_or(false)
    }

    fn is_disabled(&self, element: Element) -> bool {
        self.with_node(element, |n| n.disabled).unwrap_or(false)
    }

    fn set_disabled(&self, element: Element, disabled: bool) {
        self.update(element, |n| n.disabled = disabled);
    }

    fn has_class(&self, element: Element, class: &str) -> bool {
        self.with_node(element, |n| n.classes.contains(class))
            .unwrap_or(false)
    }

    fn add_class(&self, element: Element, class: &str) {
        self.update(element, |n| {
            n.classes.insert(class.to_string());
        });
    }

    fn remove_class(&self, element: Element, class: &str) {
        self.update(element, |n| {
            n.classes.remove(class);
        });
    }

    fn text_content(&self, element: Element) -> String {
        self.with_node(element, |n| n.text.clone())
            .unwrap_or_default()
    }

    fn set_text_content(&self, element: Element, text: &str) {
        self.update(element, |n| n.text = text.to_string());
    }

    fn set_inner_html(&self, element: Element, html: &str) {
        let mut dom = self.dom.borrow_mut();
        if let Some(node) = dom.nodes.get_mut(&element) {
            node.inner_html = Some(html.to_string());
        }
        if element == Element::ResultsContent {
            Self::register_page_controls(&mut dom, html);
        }
    }

    fn inner_text(&self, element: Element) -> Option<String> {
        match element {
            Element::PageBody(id) => text::element_text(&self.results_html(), &id.container_id()),
            other => self.with_node(other, |n| match &n.inner_html {
                Some(html) => text::visible_text(html),
                None => n.text.clone(),
            }),
        }
    }

    fn alert(&self, message: &str) {
        self.dom.borrow_mut().alerts.push(message.to_string());
    }
}
