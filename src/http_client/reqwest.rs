use anyhow::Context;
use reqwest::blocking::Client;
use tracing::debug;

use crate::http_client::HttpClient;
use crate::{ClientConfig, Request, Response, Result};

#[derive(Debug)]
pub struct ReqwestHttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient for ReqwestHttpClient {
    fn create(config: ClientConfig) -> Result<ReqwestHttpClient>
    where
        Self: Sized,
    {
        let ClientConfig {
            base_url,
            ssl_check,
        } = config;

        let client = Client::builder()
            .danger_accept_invalid_certs(!ssl_check)
            .build()
            .with_context(|| "Failed building the http client")?;

        debug!(%base_url, ssl_check, "created api client");

        Ok(ReqwestHttpClient { client, base_url })
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn execute(&self, request: Request) -> Result<Response> {
        let (parts, body) = request.into_parts();
        let url = self.url_for(&parts.uri.to_string())?;

        debug!(method = %parts.method, %url, "sending request");

        let mut request_builder = self
            .client
            .request(parts.method, url.clone())
            .headers(parts.headers);
        if let Some(body) = body {
            request_builder = request_builder.body(body);
        }

        let response = request_builder
            .send()
            .with_context(|| format!("Error sending request to {}", url))?;

        debug!(status = %response.status(), %url, "received response");

        let mut response_builder = http::Response::builder()
            .version(response.version())
            .status(response.status());

        for (name, value) in response.headers() {
            response_builder = response_builder.header(name, value);
        }

        let body = response
            .text()
            .with_context(|| format!("Error reading response body from {}", url))?;
        let response = if !body.is_empty() {
            response_builder.body(Some(body))?
        } else {
            response_builder.body(None)?
        };

        Ok(response)
    }
}
