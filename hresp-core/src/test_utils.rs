use crate::errors::Result;
use crate::sink::Sink;

/// Sink double that records every call instead of serializing anything.
///
/// Useful for asserting what a response emits without going through wire
/// framing: header lines land in `headers` in write order, body bytes in
/// `chunks` one entry per write, and `halted` flips when the redirect
/// short-circuit reaches the sink.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub status_lines: Vec<(String, u16, String)>,
    pub headers: Vec<String>,
    pub chunks: Vec<Vec<u8>>,
    pub halted: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        RecordingSink::default()
    }

    /// All recorded body bytes, in write order.
    pub fn body(&self) -> Vec<u8> {
        self.chunks.concat()
    }
}

impl Sink for RecordingSink {
    fn write_status_line(&mut self, version: &str, code: u16, reason: &str) -> Result<()> {
        self.status_lines
            .push((version.to_string(), code, reason.to_string()));
        Ok(())
    }

    fn write_header(&mut self, line: &str) -> Result<()> {
        self.headers.push(line.to_string());
        Ok(())
    }

    fn write_body(&mut self, chunk: &[u8]) -> Result<()> {
        self.chunks.push(chunk.to_vec());
        Ok(())
    }

    fn halt(&mut self) -> Result<()> {
        self.halted = true;
        Ok(())
    }
}

#[cfg(test)]
pub fn errmsg<T>(r: Result<T>) -> String {
    match r {
        Ok(_) => panic!("expected an Err!"),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
macro_rules! assert_err(
    ($code:expr, $expectation:expr)=>{
        assert_eq!(
            crate::test_utils::errmsg(
                $code
            ),
            $expectation
        );
    };
);
