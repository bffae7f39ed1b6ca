use std::io::Write;

use ::reqwest::Url;
use http::{HeaderMap, Method};

use crate::output::{prettify_body, Outputter};
use crate::{Response, Result};

pub struct PrintOutputter<'a, W: Write> {
    writer: &'a mut W,
    include_headers: bool,
}

impl<'a, W: Write> PrintOutputter<'a, W> {
    pub fn new(writer: &'a mut W, include_headers: bool) -> PrintOutputter<'a, W> {
        PrintOutputter {
            writer,
            include_headers,
        }
    }
}

fn format_headers(headers: &HeaderMap) -> String {
    headers
        .iter()
        .map(|(key, value)| format!("{}: {}\n", key, String::from_utf8_lossy(value.as_bytes())))
        .collect()
}

impl<'a, W: Write> Outputter for PrintOutputter<'a, W> {
    fn base_url(&mut self, base_url: &str) -> Result<()> {
        writeln!(self.writer, "{}", base_url)?;
        Ok(())
    }

    fn request(&mut self, method: &Method, url: &Url) -> Result<()> {
        writeln!(self.writer, "{} {}", method, url)?;
        Ok(())
    }

    fn response(&mut self, response: &Response) -> Result<()> {
        writeln!(self.writer, "{:?} {}", response.version(), response.status())?;
        if self.include_headers {
            self.writer
                .write_all(format_headers(response.headers()).as_bytes())?;
        }
        writeln!(self.writer)?;
        if let Some(body) = response.body() {
            writeln!(self.writer, "{}", prettify_body(body))?;
        }
        Ok(())
    }
}
