//! DOM bindings for the wasm32 build. The start function binds the page's
//! elements and routes its events into a [`Controller`].

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

use crate::clipboard::Clipboard;
use crate::config::ClientConfig;
use crate::controller::{Controller, Outcome, UiEvent};
use crate::error::{ClipboardError, SurfaceError};
use crate::schedule::{Scheduler, Task};
use crate::surface::{Element, Surface};
use crate::transport::HttpTransport;

#[derive(Clone)]
pub struct DomSurface {
    window: Window,
    document: Document,
}

impl DomSurface {
    /// Binds the current document, failing if any required element is missing.
    pub fn bind() -> Result<DomSurface, SurfaceError> {
        let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
        let document = window.document().ok_or(SurfaceError::NoDocument)?;
        for element in Element::REQUIRED {
            let id = element.dom_id();
            if document.get_element_by_id(&id).is_none() {
                return Err(SurfaceError::MissingElement(id.into_owned()));
            }
        }
        Ok(DomSurface { window, document })
    }

    fn lookup(&self, element: Element) -> Option<web_sys::Element> {
        self.document.get_element_by_id(&element.dom_id())
    }
}

impl Surface for DomSurface {
    fn value(&self, element: Element) -> String {
        let Some(node) = self.lookup(element) else {
            return String::new();
        };
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, element: Element, value: &str) {
        if let Some(input) = self
            .lookup(element)
            .and_then(|n| n.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value(value);
        }
    }

    fn is_checked(&self, element: Element) -> bool {
        self.lookup(element)
            .and_then(|n| n.dyn_into::<HtmlInputElement>().ok())
            .is_some_and(|input| input.checked())
    }

    fn is_disabled(&self, element: Element) -> bool {
        self.lookup(element)
            .is_some_and(|n| n.has_attribute("disabled"))
    }

    fn set_disabled(&self, element: Element, disabled: bool) {
        if let Some(node) = self.lookup(element) {
            if let Err(e) = node.toggle_attribute_with_force("disabled", disabled) {
                log::error!("failed to toggle disabled on #{}: {e:?}", element.dom_id());
            }
        }
    }

    fn has_class(&self, element: Element, class: &str) -> bool {
        self.lookup(element)
            .is_some_and(|n| n.class_list().contains(class))
    }

    fn add_class(&self, element: Element, class: &str) {
        if let Some(node) = self.lookup(element) {
            let _ = node.class_list().add_1(class);
        }
    }

    fn remove_class(&self, element: Element, class: &str) {
        if let Some(node) = self.lookup(element) {
            let _ = node.class_list().remove_1(class);
        }
    }

    fn text_content(&self, element: Element) -> String {
        self.lookup(element)
            .and_then(|n| n.text_content())
            .unwrap_or_default()
    }

    fn set_text_content(&self, element: Element, text: &str) {
        if let Some(node) = self.lookup(element) {
            node.set_text_content(Some(text));
        }
    }

    fn set_inner_html(&self, element: Element, html: &str) {
        if let Some(node) = self.lookup(element) {
            node.set_inner_html(html);
        }
    }

    fn inner_text(&self, element: Element) -> Option<String> {
        self.lookup(element)?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|e| e.inner_text())
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("alert failed: {e:?}");
        }
    }
}

#[derive(Clone)]
pub struct NavigatorClipboard {
    window: Window,
}

impl Clipboard for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let promise = self.window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError(format!("{e:?}")))
    }
}

#[derive(Clone)]
pub struct WindowScheduler {
    window: Window,
}

impl Scheduler for WindowScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let callback = Closure::once_into_js(move || task());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        if let Err(e) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            log::error!("failed to schedule timer: {e:?}");
        }
    }
}

type PageController = Controller<DomSurface, HttpTransport, NavigatorClipboard, WindowScheduler>;

struct App {
    controller: PageController,
    /// Click handlers of the currently rendered page copy controls.
    page_handlers: RefCell<Vec<Closure<dyn FnMut(Event)>>>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let surface = DomSurface::bind().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let window = surface.window.clone();
    let origin = window.location().origin()?;
    let transport = HttpTransport::new(&origin).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let controller = Controller::new(
        ClientConfig::default(),
        surface,
        transport,
        NavigatorClipboard {
            window: window.clone(),
        },
        WindowScheduler { window },
    );
    let app = Rc::new(App {
        controller,
        page_handlers: RefCell::new(Vec::new()),
    });

    for (element, kind, event) in [
        (Element::IncludeAdjacent, "change", UiEvent::AdjacencyChanged),
        (Element::Form, "submit", UiEvent::Submit),
        (Element::CopyAllButton, "click", UiEvent::CopyAll),
    ] {
        listen(&app, element, kind, event)?.forget();
    }
    Ok(())
}

fn listen(
    app: &Rc<App>,
    element: Element,
    kind: &str,
    event: UiEvent,
) -> Result<Closure<dyn FnMut(Event)>, JsValue> {
    let target = app
        .controller
        .surface()
        .lookup(element)
        .ok_or_else(|| JsValue::from_str(&format!("#{} is not on the page", element.dom_id())))?;

    let app = Rc::clone(app);
    let handler = Closure::<dyn FnMut(Event)>::new(move |dom_event: Event| {
        if event == UiEvent::Submit {
            dom_event.prevent_default();
        }
        dispatch(Rc::clone(&app), event);
    });
    target.add_event_listener_with_callback(kind, handler.as_ref().unchecked_ref())?;
    Ok(handler)
}

fn dispatch(app: Rc<App>, event: UiEvent) {
    spawn_local(async move {
        let outcome = app.controller.dispatch(event).await;
        let Outcome::Submit(submit) = outcome else {
            return;
        };
        let Some(pages) = submit.copy_controls() else {
            return;
        };
        let mut handlers = Vec::with_capacity(pages.len());
        for &page in pages {
            match listen(&app, Element::PageCopyButton(page), "click", UiEvent::CopyPage(page)) {
                Ok(handler) => handlers.push(handler),
                Err(e) => log::error!("failed to bind copy control: {e:?}"),
            }
        }
        *app.page_handlers.borrow_mut() = handlers;
    });
}
