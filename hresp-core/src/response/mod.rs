use std::io::Read;
use std::mem;

use crate::errors::{Error, Result};
use crate::sink::{Flow, Sink};
use crate::status::reason_phrase;

pub mod content;

use content::{Content, STREAM_CHUNK_SIZE};

const HTTP_VERSION: &str = "1.1";

/// Models one outbound HTTP response and emits it through a [`Sink`].
///
/// A response is built up by its owning handler (status code, raw header
/// lines, content, optional redirect) and then consumed exactly once by
/// [`Response::send`]. Header lines are kept verbatim in insertion order;
/// nothing is parsed, validated, or deduplicated on the way in.
#[derive(Debug)]
pub struct Response {
    version: String,
    status_code: u16,
    content: Content,
    redirect: Option<String>,
    headers: Vec<String>,
}

impl Response {
    /// Creates a response with the given status and content. The status is
    /// not validated here; only [`Response::set_status_code`] checks the
    /// range.
    pub fn new<C: Into<Content>>(status_code: u16, content: C) -> Self {
        Response {
            version: HTTP_VERSION.to_string(),
            status_code,
            content: content.into(),
            redirect: None,
            headers: Vec::new(),
        }
    }

    /// Replaces the status code. Fails with [`Error::InvalidStatusCode`]
    /// for codes outside 100..=599, leaving the stored status unchanged.
    pub fn set_status_code(&mut self, code: u16) -> Result<()> {
        if !(100..=599).contains(&code) {
            return Err(Error::InvalidStatusCode(code));
        }

        self.status_code = code;
        Ok(())
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Replaces the content outright. A previously stored stream handle is
    /// dropped.
    pub fn set_content<C: Into<Content>>(&mut self, content: C) {
        self.content = content.into();
    }

    /// Appends bytes to the content; see [`Content::append`] for what this
    /// means for empty and streamed content.
    pub fn append_content<B: AsRef<[u8]>>(&mut self, chunk: B) {
        self.content.append(chunk.as_ref());
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Appends one raw header line, e.g. `"Content-Type: text/plain"`. The
    /// line is emitted verbatim; syntax is the caller's responsibility.
    pub fn add_header<H: Into<String>>(&mut self, line: H) {
        self.headers.push(line.into());
    }

    /// Stored header lines, in emission order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Stores a redirect target. Does not touch the status code.
    pub fn set_redirect<U: Into<String>>(&mut self, url: U) {
        self.redirect = Some(url.into());
    }

    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    /// Writes the status line and every stored header line, in insertion
    /// order. With a redirect target set, additionally writes a `Location`
    /// header, halts the sink, and returns [`Flow::Halt`]; the body must
    /// not be sent in that case.
    ///
    /// A status code missing from the curated reason table is emitted with
    /// the phrase `"Unknown"`.
    pub fn send_headers<S: Sink>(&self, sink: &mut S) -> Result<Flow> {
        let reason = reason_phrase(self.status_code).unwrap_or("Unknown");
        sink.write_status_line(&self.version, self.status_code, reason)?;

        for header in &self.headers {
            sink.write_header(header)?;
        }

        if let Some(url) = &self.redirect {
            sink.write_header(&format!("Location: {}", url))?;
            sink.halt()?;
            return Ok(Flow::Halt);
        }

        Ok(Flow::Continue)
    }

    /// Writes the body. Empty content and an empty payload are a no-op. A
    /// payload is written in one piece and stays readable afterwards. A
    /// streamed source is read to EOF in [`STREAM_CHUNK_SIZE`] chunks and
    /// released on every exit path, including a failed read or write; the
    /// content is `Empty` afterwards.
    pub fn send_content<S: Sink>(&mut self, sink: &mut S) -> Result<()> {
        match mem::take(&mut self.content) {
            Content::Empty => Ok(()),
            Content::Plain(bytes) => {
                let result = match bytes.is_empty() {
                    true => Ok(()),
                    false => sink.write_body(&bytes),
                };
                self.content = Content::Plain(bytes);
                result
            }
            Content::Stream(mut source) => {
                // source is owned here, so it is dropped however this
                // scope is left
                let mut buf = [0u8; STREAM_CHUNK_SIZE];
                loop {
                    match source.read(&mut buf)? {
                        0 => break,
                        n => sink.write_body(&buf[..n])?,
                    }
                }
                Ok(())
            }
        }
    }

    /// Sends headers, then content, skipping the content when the headers
    /// ended in the redirect short-circuit. Consumes the response: a sent
    /// response cannot be sent a second time.
    pub fn send<S: Sink>(mut self, sink: &mut S) -> Result<()> {
        match self.send_headers(sink)? {
            Flow::Halt => Ok(()),
            Flow::Continue => self.send_content(sink),
        }
    }
}

impl Default for Response {
    fn default() -> Self {
        Response::new(200, Content::Empty)
    }
}
