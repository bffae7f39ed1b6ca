use httpmock::MockServer;
use note_book_api::{ClientConfig, HttpClient, ReqwestHttpClient};
use std::io;
use std::io::Write;
use std::str::from_utf8;

pub fn client_for(server: &MockServer) -> ReqwestHttpClient {
    ReqwestHttpClient::create(ClientConfig::new(server.url("/api"))).unwrap()
}

pub struct DebugWriter(pub String);
impl Write for DebugWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let DebugWriter(inner) = self;
        let buf = from_utf8(buf).unwrap();
        inner.push_str(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
