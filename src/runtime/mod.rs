use anyhow::bail;
use http::Method;

use crate::http_client::{build, HttpClient};
use crate::output::Outputter;
use crate::{ClientConfig, Mode, ReqwestHttpClient, Request, Result};

#[cfg(test)]
mod tests;

/// `mode` overrides the `MODE` environment variable when given.
pub fn select_config(mode: Option<&str>, accept_invalid_certs: bool) -> Result<ClientConfig> {
    let config = match mode {
        Some(mode) => ClientConfig::for_mode(Mode::from_indicator(mode)),
        None => ClientConfig::from_env()?,
    };
    Ok(config.with_ssl_check(!accept_invalid_certs))
}

pub fn parse_method(method: &str) -> Result<Method> {
    match method {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "DELETE" => Ok(Method::DELETE),
        _ => bail!("Unsupported method: {}", method),
    }
}

/// Bodies are only sent with POST and PUT.
pub fn build_request(method: &Method, url: &reqwest::Url, data: Option<&str>) -> Result<Request> {
    if data.is_some() && *method != Method::POST && *method != Method::PUT {
        bail!("A request body can only be sent with POST or PUT, not {}", method);
    }
    build(method.clone(), url, data.map(String::from))
}

pub struct Runtime<'a> {
    config: ClientConfig,
    outputter: &'a mut dyn Outputter,
}

impl<'a> Runtime<'a> {
    pub fn new(config: ClientConfig, outputter: &'a mut dyn Outputter) -> Runtime<'a> {
        Runtime { config, outputter }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Prints the base url when `path` is `None`, otherwise sends one request
    /// and prints the exchange.
    pub fn execute(&mut self, method: &Method, path: Option<&str>, data: Option<&str>) -> Result<()> {
        let path = match path {
            Some(path) => path,
            None => return self.outputter.base_url(&self.config.base_url),
        };

        let client = ReqwestHttpClient::create(self.config.clone())?;
        let url = client.url_for(path)?;
        let request = build_request(method, &url, data)?;

        self.outputter.request(method, &url)?;
        let response = client.execute(request)?;
        self.outputter.response(&response)
    }
}
