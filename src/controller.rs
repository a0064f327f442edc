use crate::clipboard::{COPY_FAILED_ALERT, Clipboard, CopyFeedback};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClipboardError};
use crate::form;
use crate::models::{Page, SearchRequest, SearchResponse};
use crate::render::{self, PageId};
use crate::schedule::Scheduler;
use crate::surface::{Element, Surface};
use crate::transport::Transport;

/// User interactions the page forwards to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    AdjacencyChanged,
    Submit,
    CopyAll,
    CopyPage(PageId),
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// A request was already in flight.
    Ignored,
    /// Results were rendered; one copy control per listed page.
    Rendered(Vec<PageId>),
    Failed(ClientError),
}

impl SubmitOutcome {
    /// Page copy controls on the surface after this outcome, `None` when the
    /// results area was left untouched.
    pub fn copy_controls(&self) -> Option<&[PageId]> {
        match self {
            SubmitOutcome::Ignored => None,
            SubmitOutcome::Rendered(pages) => Some(pages),
            SubmitOutcome::Failed(_) => Some(&[]),
        }
    }
}

#[derive(Debug)]
pub enum CopyOutcome {
    Copied,
    /// The page container is no longer on the surface.
    Missing,
    Failed(ClipboardError),
}

#[derive(Debug)]
pub enum Outcome {
    AdjacencySynced,
    Submit(SubmitOutcome),
    Copy(CopyOutcome),
}

/// The form-to-render pipeline, holding its collaborators.
pub struct Controller<S, T, C, K> {
    config: ClientConfig,
    surface: S,
    transport: T,
    clipboard: C,
    feedback: CopyFeedback<S, K>,
}

impl<S, T, C, K> Controller<S, T, C, K>
where
    S: Surface + Clone + 'static,
    T: Transport,
    C: Clipboard,
    K: Scheduler,
{
    /// Builds the controller and brings the adjacency count field in line
    /// with its toggle.
    pub fn new(
        config: ClientConfig,
        surface: S,
        transport: T,
        clipboard: C,
        scheduler: K,
    ) -> Controller<S, T, C, K> {
        form::init_adjacency(&surface);
        let feedback = CopyFeedback::new(surface.clone(), scheduler, config.copy_feedback);
        Controller {
            config,
            surface,
            transport,
            clipboard,
            feedback,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn dispatch(&self, event: UiEvent) -> Outcome {
        match event {
            UiEvent::AdjacencyChanged => {
                form::sync_adjacency(&self.surface);
                Outcome::AdjacencySynced
            }
            UiEvent::Submit => Outcome::Submit(self.submit().await),
            UiEvent::CopyAll => Outcome::Copy(self.copy_all().await),
            UiEvent::CopyPage(id) => Outcome::Copy(self.copy_page(id).await),
        }
    }

    /// Runs one submit cycle. While it is in flight the submit control stays
    /// disabled and further submits are ignored.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.surface.is_disabled(Element::SubmitButton) {
            log::debug!("submit ignored, request already in flight");
            return SubmitOutcome::Ignored;
        }

        self.surface.set_disabled(Element::SubmitButton, true);
        self.surface.set_hidden(Element::SubmitSpinner, false);
        self.surface
            .set_inner_html(Element::ResultsContent, &render::render_loading());
        self.surface.set_hidden(Element::ResultsContainer, false);

        let request = form::read_request(&self.surface);
        log::info!("requesting text for {:?}", request.reference);
        let result = self.fetch(&request).await;

        self.surface.set_disabled(Element::SubmitButton, false);
        self.surface.set_hidden(Element::SubmitSpinner, true);

        match result {
            Ok(content) => {
                let rendered = render::render_results(content.as_deref());
                self.surface
                    .set_inner_html(Element::ResultsContent, &rendered.html);
                log::info!("rendered {} page(s)", rendered.pages.len());
                SubmitOutcome::Rendered(rendered.pages)
            }
            Err(e) => {
                log::warn!("request for {:?} failed: {}", request.reference, e);
                self.surface
                    .set_inner_html(Element::ResultsContent, &render::render_failure(&e));
                SubmitOutcome::Failed(e)
            }
        }
    }

    async fn fetch(&self, request: &SearchRequest) -> Result<Option<Vec<Page>>, ClientError> {
        let body = serde_json::to_string(request)?;
        let reply = self.transport.post_json(&self.config.api_path, &body).await?;

        if !reply.is_success() {
            let message = serde_json::from_str::<SearchResponse>(&reply.body)
                .ok()
                .and_then(|r| r.message().map(str::to_string));
            return Err(ClientError::Status {
                status: reply.status,
                message,
            });
        }

        let response: SearchResponse = serde_json::from_str(&reply.body)?;
        if !response.success {
            return Err(ClientError::Application(
                response.message().map(str::to_string),
            ));
        }
        Ok(response.content)
    }

    pub async fn copy_all(&self) -> CopyOutcome {
        self.copy(Element::ResultsContent, Element::CopyAllButton)
            .await
    }

    pub async fn copy_page(&self, id: PageId) -> CopyOutcome {
        self.copy(Element::PageBody(id), Element::PageCopyButton(id))
            .await
    }

    async fn copy(&self, scope: Element, control: Element) -> CopyOutcome {
        let Some(text) = self.surface.inner_text(scope) else {
            log::warn!("nothing to copy, #{} is not on the page", scope.dom_id());
            return CopyOutcome::Missing;
        };

        match self.clipboard.write_text(&text).await {
            Ok(()) => {
                self.feedback.show(control);
                CopyOutcome::Copied
            }
            Err(e) => {
                log::error!("failed to copy text: {e}");
                self.surface.alert(COPY_FAILED_ALERT);
                CopyOutcome::Failed(e)
            }
        }
    }
}
