use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::error::ClipboardError;
use crate::schedule::Scheduler;
use crate::surface::{Element, Surface};

pub const COPIED_LABEL: &str = "Copied!";
pub const COPY_FAILED_ALERT: &str = "Failed to copy text. Please try selecting and copying manually.";
pub const SUCCESS_CLASS: &str = "btn-success";
pub const IDLE_CLASS: &str = "btn-outline-secondary";

#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps the last written text. Used by the headless command and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

#[derive(Debug)]
struct Feedback {
    original_label: String,
    generation: u64,
}

/// Temporary "Copied!" state on copy controls. Each control reverts on its
/// own timer; copying again while the label is showing restarts that timer
/// and keeps the label the control had before the first copy.
pub struct CopyFeedback<S, K> {
    surface: S,
    scheduler: K,
    delay: Duration,
    active: Rc<RefCell<HashMap<Element, Feedback>>>,
}

impl<S, K> CopyFeedback<S, K>
where
    S: Surface + Clone + 'static,
    K: Scheduler,
{
    pub fn new(surface: S, scheduler: K, delay: Duration) -> CopyFeedback<S, K> {
        CopyFeedback {
            surface,
            scheduler,
            delay,
            active: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn show(&self, control: Element) {
        let generation = {
            let mut active = self.active.borrow_mut();
            let entry = active.entry(control).or_insert_with(|| Feedback {
                original_label: self.surface.text_content(control),
                generation: 0,
            });
            entry.generation += 1;
            entry.generation
        };

        self.surface.set_text_content(control, COPIED_LABEL);
        self.surface.add_class(control, SUCCESS_CLASS);
        self.surface.remove_class(control, IDLE_CLASS);

        let surface = self.surface.clone();
        let active = Rc::clone(&self.active);
        self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                let mut active = active.borrow_mut();
                if active.get(&control).map(|f| f.generation) != Some(generation) {
                    return;
                }
                if let Some(feedback) = active.remove(&control) {
                    surface.set_text_content(control, &feedback.original_label);
                    surface.remove_class(control, SUCCESS_CLASS);
                    surface.add_class(control, IDLE_CLASS);
                }
            }),
        );
    }
}
