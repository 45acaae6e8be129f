use std::io::Write;

use crate::errors::Result;

/// Outbound response channel.
///
/// The response never writes to a process-global target; whoever owns the
/// response decides where its bytes go by passing one of these to the send
/// operations.
pub trait Sink {
    fn write_status_line(&mut self, version: &str, code: u16, reason: &str) -> Result<()>;

    /// Writes one fully formed header line, verbatim.
    fn write_header(&mut self, line: &str) -> Result<()>;

    fn write_body(&mut self, chunk: &[u8]) -> Result<()>;

    /// Stops all further response processing. Called when a redirect
    /// short-circuits the send; a surrounding runtime can use this to abort
    /// its own pipeline.
    fn halt(&mut self) -> Result<()>;
}

/// Signal returned by header emission.
///
/// `Halt` means the redirect short-circuit fired: the sink has been told to
/// halt and no body may follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Halt,
}

/// Sink that serializes to raw HTTP/1.1 wire format on any writer.
///
/// Lines are CRLF-terminated and the header section ends with a blank line,
/// written before the first body chunk, on `halt`, or on [`WireSink::finish`]
/// for bodyless responses. The response model itself knows nothing about
/// this framing.
pub struct WireSink<W: Write> {
    out: W,
    in_body: bool,
}

impl<W: Write> WireSink<W> {
    pub fn new(out: W) -> Self {
        WireSink {
            out,
            in_body: false,
        }
    }

    /// Terminates the header section if nothing did yet, flushes, and
    /// returns the underlying writer. Call once after the send is done.
    pub fn finish(mut self) -> Result<W> {
        self.end_headers()?;
        self.out.flush()?;
        Ok(self.out)
    }

    fn end_headers(&mut self) -> Result<()> {
        if !self.in_body {
            self.out.write_all(b"\r\n")?;
            self.in_body = true;
        }
        Ok(())
    }
}

impl<W: Write> Sink for WireSink<W> {
    fn write_status_line(&mut self, version: &str, code: u16, reason: &str) -> Result<()> {
        write!(self.out, "HTTP/{} {} {}\r\n", version, code, reason)?;
        Ok(())
    }

    fn write_header(&mut self, line: &str) -> Result<()> {
        write!(self.out, "{}\r\n", line)?;
        Ok(())
    }

    fn write_body(&mut self, chunk: &[u8]) -> Result<()> {
        self.end_headers()?;
        self.out.write_all(chunk)?;
        Ok(())
    }

    fn halt(&mut self) -> Result<()> {
        self.end_headers()
    }
}
