//! # note-book-api
//!
//! The shared HTTP client for the note-book backend.
//!
//! The client is built once per process. Its base URL depends on the `MODE`
//! environment variable:
//!
//! | `MODE`          | base URL                                      |
//! |-----------------|-----------------------------------------------|
//! | `development`   | `http://localhost:5001/api`                   |
//! | anything else   | `https://note-book-app-utae.onrender.com/api` |
//!
//! Requests take paths relative to that base:
//!
//! ```no_run
//! use note_book_api::{api, HttpClient};
//!
//! let response = api()?.get("/notes")?;
//! println!("{}", response.status());
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Absolute URLs are sent as is.

use std::sync::OnceLock;

use anyhow::Context;
use envconfig::Envconfig;
use tracing::debug;

pub mod environment;
pub mod http_client;
pub mod output;
pub mod runtime;

pub use crate::environment::{Environment, Mode, DEVELOPMENT_BASE_URL, PRODUCTION_BASE_URL};
pub use crate::http_client::reqwest::ReqwestHttpClient;
pub use crate::http_client::HttpClient;

pub type Result<T> = anyhow::Result<T>;

pub type Request = http::Request<Option<String>>;

pub type Response = http::Response<Option<String>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub ssl_check: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_mode(Mode::default())
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ssl_check: true,
        }
    }

    pub fn for_mode(mode: Mode) -> Self {
        Self::new(mode.base_url())
    }

    pub fn from_env() -> Result<Self> {
        let environment =
            Environment::init_from_env().with_context(|| "Failed reading MODE from environment")?;
        let mode = environment.mode();
        debug!(%mode, base_url = mode.base_url(), "selected api base url");
        Ok(Self::for_mode(mode))
    }

    pub fn with_ssl_check(mut self, ssl_check: bool) -> Self {
        self.ssl_check = ssl_check;
        self
    }
}

static API: OnceLock<ReqwestHttpClient> = OnceLock::new();

/// The process-wide client, configured from the environment on first use.
///
/// Every call returns the same instance.
pub fn api() -> Result<&'static ReqwestHttpClient> {
    if let Some(client) = API.get() {
        return Ok(client);
    }
    let client = ReqwestHttpClient::create(ClientConfig::from_env()?)?;
    Ok(API.get_or_init(|| client))
}
