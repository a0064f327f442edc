#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use anyhow::{Context, Result};
    use clap::{Parser, Subcommand};
    use std::path::PathBuf;
    use tokio::net::TcpListener;

    use daf_reader::api::{ForwardState, create_router, serve};
    use daf_reader::clipboard::MemoryClipboard;
    use daf_reader::config::{CONFIG, ClientConfig};
    use daf_reader::controller::{Controller, SubmitOutcome};
    use daf_reader::models::{Language, SearchRequest};
    use daf_reader::schedule::ManualScheduler;
    use daf_reader::surface::{Element, MemorySurface, Surface};
    use daf_reader::transport::HttpTransport;

    #[derive(Parser)]
    #[command(name = "daf-reader", version, about = "Fetch and display passages from a text API")]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand)]
    enum Command {
        /// Host the reader page and forward its API calls upstream.
        Serve {
            #[arg(long)]
            addr: Option<String>,
            #[arg(long)]
            static_dir: Option<PathBuf>,
            /// Full URL of the upstream text endpoint.
            #[arg(long)]
            upstream: Option<String>,
        },
        /// Submit the form once without a browser and print the results text.
        Fetch {
            reference: String,
            #[arg(long, default_value = "bilingual")]
            language: String,
            #[arg(long)]
            keep_nikud: bool,
            #[arg(long)]
            keep_terms: bool,
            #[arg(long)]
            no_split: bool,
            /// Neighboring pages to include on each side.
            #[arg(long, default_value_t = 0)]
            adjacent: u32,
            /// Origin serving the API path.
            #[arg(long, default_value = "http://127.0.0.1:3000")]
            endpoint: String,
        },
    }

    pub async fn run() -> Result<()> {
        match Cli::parse().command {
            Command::Serve {
                addr,
                static_dir,
                upstream,
            } => {
                let addr = addr.unwrap_or_else(|| CONFIG.bind_addr.clone());
                let static_dir = static_dir.unwrap_or_else(|| CONFIG.static_dir.clone());
                let upstream = upstream.or_else(|| CONFIG.upstream_url.clone());
                if upstream.is_none() {
                    log::warn!("no upstream configured, API calls will be answered with 503");
                }

                let state = ForwardState::new(upstream.as_deref())?;
                let router = create_router(&CONFIG.api_path, static_dir, state);
                let listener = TcpListener::bind(&addr)
                    .await
                    .with_context(|| format!("Failed to bind {addr}"))?;
                serve(listener, router).await
            }
            Command::Fetch {
                reference,
                language,
                keep_nikud,
                keep_terms,
                no_split,
                adjacent,
                endpoint,
            } => {
                let request = SearchRequest {
                    reference,
                    language: Language::from(language.as_str()),
                    remove_nikud: !keep_nikud,
                    standardize_terms: !keep_terms,
                    split_sentences: !no_split,
                    include_adjacent: adjacent > 0,
                    adjacent_pages: adjacent,
                };
                fetch(request, &endpoint).await
            }
        }
    }

    async fn fetch(request: SearchRequest, endpoint: &str) -> Result<()> {
        let surface = MemorySurface::new();
        surface.fill(&request);

        let config = ClientConfig {
            api_path: CONFIG.api_path.clone(),
            ..ClientConfig::default()
        };
        let controller = Controller::new(
            config,
            surface.clone(),
            HttpTransport::new(endpoint)?,
            MemoryClipboard::default(),
            ManualScheduler::default(),
        );

        let outcome = controller.submit().await;
        println!(
            "{}",
            surface
                .inner_text(Element::ResultsContent)
                .unwrap_or_default()
        );
        match outcome {
            SubmitOutcome::Failed(e) => Err(anyhow::anyhow!("request failed: {e}")),
            _ => Ok(()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Bridge log crate -> tracing (so log::info! etc. work)
    tracing_log::LogTracer::init()?;

    cli::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
