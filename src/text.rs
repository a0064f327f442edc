//! Visible text of rendered markup, laid out roughly the way a browser's
//! `innerText` does: one line per block element, whitespace collapsed.

use html5ever::LocalName;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

pub fn get_dom(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

/// Visible text of a whole markup fragment.
pub fn visible_text(html: &str) -> String {
    let dom = get_dom(html);
    let mut out = TextLines::default();
    walk_html(&dom.document, &mut out);
    out.finish()
}

/// Visible text of the element carrying `id`, or `None` when no such element exists.
pub fn element_text(html: &str, id: &str) -> Option<String> {
    let dom = get_dom(html);
    let node = find_by_id(&dom.document, id)?;
    let mut out = TextLines::default();
    walk_html(&node, &mut out);
    Some(out.finish())
}

/// An element located in markup, with its visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundElement {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: String,
}

/// Every element carrying `class`, in document order.
pub fn elements_with_class(html: &str, class: &str) -> Vec<FoundElement> {
    let dom = get_dom(html);
    let mut found = Vec::new();
    collect_with_class(&dom.document, class, &mut found);
    found
}

fn collect_with_class(handle: &Handle, class: &str, found: &mut Vec<FoundElement>) {
    if let NodeData::Element { attrs, .. } = &handle.data {
        let attrs = attrs.borrow();
        let attr = |name: &str| {
            attrs
                .iter()
                .find(|a| &*a.name.local == name)
                .map(|a| a.value.to_string())
        };
        let classes: Vec<String> = attr("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        if classes.iter().any(|c| c == class) {
            let mut out = TextLines::default();
            walk_html(handle, &mut out);
            found.push(FoundElement {
                id: attr("id"),
                classes,
                text: out.finish(),
            });
        }
    }
    for child in handle.children.borrow().iter() {
        collect_with_class(child, class, found);
    }
}

fn find_by_id(handle: &Handle, id: &str) -> Option<Handle> {
    if let NodeData::Element { attrs, .. } = &handle.data {
        let matches = attrs
            .borrow()
            .iter()
            .any(|attr| &*attr.name.local == "id" && &*attr.value == id);
        if matches {
            return Some(handle.clone());
        }
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_by_id(child, id))
}

pub fn is_block_like(local: &LocalName) -> bool {
    matches!(
        &**local,
        "p" | "div"
            | "section"
            | "article"
            | "li"
            | "ul"
            | "ol"
            | "header"
            | "footer"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
    )
}

fn walk_html(handle: &Handle, out: &mut TextLines) {
    match &handle.data {
        NodeData::Text { contents } => out.push_text(&contents.borrow()),
        NodeData::Element { name, .. } => {
            let local = &name.local;
            if matches!(&**local, "script" | "style" | "noscript" | "template" | "head") {
                return;
            }
            if &**local == "br" {
                out.break_line();
                return;
            }

            let block = is_block_like(local);
            if block {
                out.break_line();
            }
            for child in handle.children.borrow().iter() {
                walk_html(child, out);
            }
            if block {
                out.break_line();
            }
        }
        _ => {
            for child in handle.children.borrow().iter() {
                walk_html(child, out);
            }
        }
    }
}

#[derive(Default)]
struct TextLines {
    lines: Vec<String>,
    current: String,
}

impl TextLines {
    fn push_text(&mut self, text: &str) {
        self.current.push_str(text);
    }

    fn break_line(&mut self) {
        let line = self.current.split_whitespace().collect::<Vec<_>>().join(" ");
        if !line.is_empty() {
            self.lines.push(line);
        }
        self.current.clear();
    }

    fn finish(mut self) -> String {
        self.break_line();
        self.lines.join("\n")
    }
}
