use std::time::Duration;

pub const DEFAULT_API_PATH: &str = "/api/get_text";
pub const COPY_FEEDBACK_DELAY: Duration = Duration::from_millis(2000);

/// Settings for one controller instance. Built once at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_path: String,
    pub copy_feedback: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_path: DEFAULT_API_PATH.to_string(),
            copy_feedback: COPY_FEEDBACK_DELAY,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use host::{CONFIG, ServerConfig};

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use dotenvy::dotenv;
    use once_cell::sync::Lazy;
    use std::env;
    use std::path::PathBuf;

    use super::DEFAULT_API_PATH;

    pub static CONFIG: Lazy<ServerConfig> = Lazy::new(|| {
        dotenv().ok(); // Load .env file if present
        ServerConfig {
            bind_addr: get_env_or_default("DAF_BIND_ADDR", "127.0.0.1:3000"),
            static_dir: PathBuf::from(get_env_or_default("DAF_STATIC_DIR", "static")),
            upstream_url: env::var("DAF_UPSTREAM_URL").ok().filter(|v| !v.is_empty()),
            api_path: get_env_or_default("DAF_API_PATH", DEFAULT_API_PATH),
        }
    });

    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        pub bind_addr: String,
        pub static_dir: PathBuf,
        pub upstream_url: Option<String>,
        pub api_path: String,
    }

    fn get_env_or_default(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }
}
