use ::reqwest::Url;
use http::Method;

use crate::{Response, Result};

pub mod print;


pub trait Outputter {
    fn base_url(&mut self, base_url: &str) -> Result<()>;
    fn request(&mut self, method: &Method, url: &Url) -> Result<()>;
    fn response(&mut self, response: &Response) -> Result<()>;
}

/// Pretty prints JSON objects and arrays, leaves everything else alone.
pub fn prettify_body(body: &str) -> String {
    match serde_json::from_str(body) {
        Ok(value @ serde_json::Value::Object(_)) | Ok(value @ serde_json::Value::Array(_)) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| String::from(body))
        }
        _ => String::from(body),
    }
}
