use ::reqwest::Url;
use anyhow::{anyhow, Context};
use http::{header::CONTENT_TYPE, Method};
use serde::Serialize;

use crate::{ClientConfig, Request, Response, Result};


pub mod reqwest;

pub trait HttpClient {
    fn create(config: ClientConfig) -> Result<Self>
    where
        Self: Sized;

    fn base_url(&self) -> &str;

    fn execute(&self, request: Request) -> Result<Response>;

    fn url_for(&self, target: &str) -> Result<Url> {
        resolve(self.base_url(), target)
    }

    fn get(&self, path: &str) -> Result<Response> {
        let url = self.url_for(path)?;
        self.execute(build(Method::GET, &url, None)?)
    }

    fn delete(&self, path: &str) -> Result<Response> {
        let url = self.url_for(path)?;
        self.execute(build(Method::DELETE, &url, None)?)
    }

    fn post<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
        Self: Sized,
    {
        let url = self.url_for(path)?;
        self.execute(build(Method::POST, &url, Some(to_json(body)?))?)
    }

    fn put<B>(&self, path: &str, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized,
        Self: Sized,
    {
        let url = self.url_for(path)?;
        self.execute(build(Method::PUT, &url, Some(to_json(body)?))?)
    }
}

/// Joins `target` onto `base_url` unless `target` is already absolute.
///
/// The base path is always kept: `/notes` and `notes` both land under the
/// base's `/api` prefix. Protocol-relative targets (`//host/path`) take the
/// base's scheme.
pub fn resolve(base_url: &str, target: &str) -> Result<Url> {
    if is_absolute(target) {
        return Url::parse(base_url)
            .and_then(|base| base.join(target))
            .with_context(|| format!("Invalid request url: {}", target));
    }

    let full = if target.is_empty() {
        base_url.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            target.trim_start_matches('/')
        )
    };

    Url::parse(&full).with_context(|| format!("Invalid request url: {}", full))
}

/// `scheme://...` or `//...`, the same test browsers apply to `<a href>`.
fn is_absolute(target: &str) -> bool {
    let rest = match target.find(':') {
        Some(end) if is_scheme(&target[..end]) => &target[end + 1..],
        _ => target,
    };
    rest.starts_with("//")
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

pub(crate) fn build(method: Method, url: &Url, body: Option<String>) -> Result<Request> {
    let mut builder = http::Request::builder().method(method).uri(url.as_str());
    if body.is_some() {
        builder = builder.header(CONTENT_TYPE, "application/json");
    }
    builder
        .body(body)
        .map_err(|e| anyhow!("Http Request Error: {}", e))
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<String> {
    serde_json::to_string(body).with_context(|| "Failed serializing request body")
}
